//! Occupancy report types
//!
//! Aggregates are produced entirely by `SP_ReporteOcupacionPorPelicula`;
//! the application only decodes and paginates the rows.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// One funcion's occupancy over the requested date range
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReporteOcupacion {
    #[sqlx(rename = "IdFuncion")]
    #[serde(rename = "IdFuncion")]
    pub id_funcion: i64,

    #[sqlx(rename = "FechaInicio")]
    #[serde(rename = "FechaInicio")]
    pub fecha_inicio: NaiveDateTime,

    #[sqlx(rename = "IdSala")]
    #[serde(rename = "IdSala")]
    pub id_sala: i64,

    #[sqlx(rename = "Sala")]
    #[serde(rename = "Sala")]
    pub sala: String,

    /// Seats sold (active, paid reservations)
    #[sqlx(rename = "TotalButacasVendidas")]
    #[serde(rename = "TotalButacasVendidas")]
    pub total_butacas_vendidas: i64,

    /// Revenue collected over the range
    #[sqlx(rename = "TotalIngresosRecaudados")]
    #[serde(rename = "TotalIngresosRecaudados")]
    pub total_ingresos_recaudados: Decimal,
}
