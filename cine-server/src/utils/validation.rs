//! Input validation helpers
//!
//! Request payloads use `validator` derive rules; query parameters are
//! validated by hand so that every rejection produces the uniform
//! error body instead of the framework's default rejection text.
//! User-facing messages keep the Spanish vocabulary of the API.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::utils::AppError;

/// Date format accepted in query parameters
pub const FECHA_FORMAT: &str = "%Y-%m-%d";

/// JSON extractor that validates the payload after deserializing.
///
/// Both a malformed body and a failed `validator` rule map to a 400
/// with the standard error body.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(format!("Datos invalidos: {e}")))?;

        value
            .validate()
            .map_err(|e| AppError::validation(format!("Datos invalidos: {e}")))?;

        Ok(ValidJson(value))
    }
}

/// Require a query parameter, reporting its name in the error message.
pub fn require_param<T>(value: Option<T>, name: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::validation(format!("El parametro {name} es requerido")))
}

/// Parse a `YYYY-MM-DD` date parameter.
pub fn parse_fecha(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, FECHA_FORMAT)
        .map_err(|_| AppError::validation("Formato de fecha invalido. Use YYYY-MM-DD"))
}

/// Parse an optional integer parameter, falling back to a default when
/// the value is missing or not a number (the legacy API ignored
/// unparsable paging values rather than rejecting them).
pub fn parse_int_or(value: Option<&str>, default: i64) -> i64 {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::pagination::DEFAULT_PER_PAGE;

    #[test]
    fn test_require_param_message() {
        let err = require_param::<i64>(None, "idPelicula").unwrap_err();
        assert_eq!(err.to_string(), "El parametro idPelicula es requerido");
        assert_eq!(require_param(Some(7), "idPelicula").unwrap(), 7);
    }

    #[test]
    fn test_parse_fecha() {
        assert_eq!(
            parse_fecha("2025-12-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()
        );
        let err = parse_fecha("01/12/2025").unwrap_err();
        assert_eq!(err.to_string(), "Formato de fecha invalido. Use YYYY-MM-DD");
    }

    #[test]
    fn test_parse_int_or() {
        assert_eq!(parse_int_or(Some("3"), 1), 3);
        assert_eq!(parse_int_or(Some("abc"), DEFAULT_PER_PAGE), DEFAULT_PER_PAGE);
        assert_eq!(parse_int_or(None, 1), 1);
    }
}
