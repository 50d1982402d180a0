//! Reservation types
//!
//! A reservation links a customer DNI to a seat in a funcion. The
//! application never mutates reservations directly; creation happens
//! inside `SP_ReservarButacaConValidacionDNI` and listings come out of
//! `SP_ReservasPorDNI` already joined with movie and room names.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Payload for `POST /api/v1/reservas`
#[derive(Debug, Deserialize, Validate)]
pub struct ReservaCreate {
    /// Funcion to book into
    #[validate(range(min = 1))]
    pub id_funcion: i64,
    /// Seat to book
    #[validate(range(min = 1))]
    pub id_butaca: i64,
    /// Customer document number, 7 to 11 characters
    #[validate(length(min = 7, max = 11))]
    pub dni: String,
}

/// Response for a successful booking
#[derive(Debug, Serialize)]
pub struct ReservaResponse {
    pub success: bool,
    pub mensaje: String,
}

/// Denormalized reservation row returned by `SP_ReservasPorDNI`.
///
/// Field names on the wire keep the procedure's column names; clients
/// consume them as-is.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReservaDetalle {
    #[sqlx(rename = "IdReserva")]
    #[serde(rename = "IdReserva")]
    pub id_reserva: i64,

    #[sqlx(rename = "DNI")]
    #[serde(rename = "DNI")]
    pub dni: String,

    #[sqlx(rename = "IdFuncion")]
    #[serde(rename = "IdFuncion")]
    pub id_funcion: i64,

    /// Scheduled start of the funcion
    #[sqlx(rename = "FechaInicio")]
    #[serde(rename = "FechaInicio")]
    pub fecha_inicio: NaiveDateTime,

    #[sqlx(rename = "Pelicula")]
    #[serde(rename = "Pelicula")]
    pub pelicula: String,

    #[sqlx(rename = "Sala")]
    #[serde(rename = "Sala")]
    pub sala: String,

    /// Paid flag, `"S"` or `"N"`
    #[sqlx(rename = "EstaPagada")]
    #[serde(rename = "EstaPagada")]
    pub esta_pagada: String,

    #[sqlx(rename = "FechaAlta")]
    #[serde(rename = "FechaAlta")]
    pub fecha_alta: NaiveDateTime,

    /// Cancellation timestamp, if the reservation was voided database-side
    #[sqlx(rename = "FechaBaja")]
    #[serde(rename = "FechaBaja")]
    pub fecha_baja: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserva_create_validation() {
        let valid = ReservaCreate {
            id_funcion: 1,
            id_butaca: 5,
            dni: "12345678".to_string(),
        };
        assert!(valid.validate().is_ok());

        let short_dni = ReservaCreate {
            id_funcion: 1,
            id_butaca: 5,
            dni: "123".to_string(),
        };
        assert!(short_dni.validate().is_err());

        let long_dni = ReservaCreate {
            id_funcion: 1,
            id_butaca: 5,
            dni: "123456789012".to_string(),
        };
        assert!(long_dni.validate().is_err());

        let bad_ids = ReservaCreate {
            id_funcion: 0,
            id_butaca: -1,
            dni: "12345678".to_string(),
        };
        assert!(bad_ids.validate().is_err());
    }

    #[test]
    fn test_reserva_detalle_wire_names() {
        let detalle = ReservaDetalle {
            id_reserva: 1,
            dni: "12345678".to_string(),
            id_funcion: 1,
            fecha_inicio: "2025-12-15T20:00:00".parse().unwrap(),
            pelicula: "Avatar 3".to_string(),
            sala: "Sala VIP".to_string(),
            esta_pagada: "S".to_string(),
            fecha_alta: "2025-12-01T10:30:00".parse().unwrap(),
            fecha_baja: None,
        };
        let json = serde_json::to_value(&detalle).unwrap();
        assert_eq!(json["IdReserva"], 1);
        assert_eq!(json["DNI"], "12345678");
        assert_eq!(json["Pelicula"], "Avatar 3");
        assert_eq!(json["EstaPagada"], "S");
        assert_eq!(json["FechaInicio"], "2025-12-15T20:00:00");
        assert!(json["FechaBaja"].is_null());
    }
}
