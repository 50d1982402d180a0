//! Price lookup types for a funcion (movie showing)
//!
//! A funcion is never materialized by the application: the pricing
//! procedure takes its identifier and answers with the computed price
//! and a status message.

use rust_decimal::Decimal;
use serde::Serialize;

/// Response for `GET /api/v1/precios/{id_funcion}`
#[derive(Debug, Serialize)]
pub struct PrecioResponse {
    /// Funcion whose price was computed
    pub id_funcion: i64,
    /// Final price including surcharges, as computed by the database
    pub precio_final: Decimal,
    /// Status message from the procedure (always `"OK"` on this path)
    pub mensaje: String,
}
