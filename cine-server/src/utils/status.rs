//! Stored-procedure status message classification
//!
//! Every procedure signals its outcome through a free-text status
//! message: `"OK"` on success, or one of a fixed set of Spanish domain
//! phrases on failure. This module maps those phrases to [`AppError`]
//! categories so handlers never inspect message text themselves.
//!
//! The phrase table is part of the database contract. The literal text
//! must not be changed without a coordinated change to the procedures.

use crate::utils::AppError;

/// Success status returned by the stored procedures
pub const STATUS_OK: &str = "OK";

/// Known failure phrases, matched case-insensitively as substrings.
///
/// Phrases do not overlap, so ordering is not significant in effect,
/// but the table preserves the order of the database contract.
const STATUS_MAPPINGS: &[(&str, fn(String) -> AppError)] = &[
    ("Funcion no encontrada", AppError::NotFound),
    ("Funcion inactiva o finalizada", AppError::Inactive),
    ("Butaca inexistente en la sala de la funcion", AppError::NotFound),
    ("Butaca ya reservada para esta funcion", AppError::Conflict),
    (
        "Limite de 4 reservas activas y pagadas por fecha superado para este DNI",
        AppError::Conflict,
    ),
];

/// Classify a procedure status message.
///
/// Returns `None` for `"OK"` or an absent message. Unknown messages
/// become [`AppError::Internal`], keeping the original text.
pub fn classify_status(mensaje: Option<&str>) -> Option<AppError> {
    let mensaje = mensaje?;
    if mensaje == STATUS_OK {
        return None;
    }

    let lowered = mensaje.to_lowercase();
    for (phrase, constructor) in STATUS_MAPPINGS {
        if lowered.contains(&phrase.to_lowercase()) {
            return Some(constructor(mensaje.to_string()));
        }
    }

    Some(AppError::Internal(mensaje.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_and_none_are_not_errors() {
        assert!(classify_status(Some("OK")).is_none());
        assert!(classify_status(None).is_none());
    }

    #[test]
    fn test_each_known_phrase() {
        assert!(matches!(
            classify_status(Some("Funcion no encontrada")),
            Some(AppError::NotFound(_))
        ));
        assert!(matches!(
            classify_status(Some("Funcion inactiva o finalizada")),
            Some(AppError::Inactive(_))
        ));
        assert!(matches!(
            classify_status(Some("Butaca inexistente en la sala de la funcion")),
            Some(AppError::NotFound(_))
        ));
        assert!(matches!(
            classify_status(Some("Butaca ya reservada para esta funcion")),
            Some(AppError::Conflict(_))
        ));
        assert!(matches!(
            classify_status(Some(
                "Limite de 4 reservas activas y pagadas por fecha superado para este DNI"
            )),
            Some(AppError::Conflict(_))
        ));
    }

    #[test]
    fn test_substring_and_case_insensitive_match() {
        let err = classify_status(Some("La Funcion no encontrada, vuelva a intentar"));
        assert!(matches!(err, Some(AppError::NotFound(_))));

        let err = classify_status(Some("BUTACA YA RESERVADA PARA ESTA FUNCION"));
        assert!(matches!(err, Some(AppError::Conflict(_))));
    }

    #[test]
    fn test_unknown_message_keeps_original_text() {
        let err = classify_status(Some("Fallo inesperado en el calculo"));
        match err {
            Some(AppError::Internal(msg)) => {
                assert_eq!(msg, "Fallo inesperado en el calculo");
            }
            other => panic!("expected Internal, got {other:?}"),
        }
    }
}
