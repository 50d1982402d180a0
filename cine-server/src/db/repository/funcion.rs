//! Funcion data access
//!
//! Pricing is computed inside the database (surcharges by genre and
//! room type); this repository only unpacks the OUT parameters.

use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::db::invoker::{self, ProcParam};
use crate::db::repository::MENSAJE_ERROR_DESCONOCIDO;
use crate::utils::{AppError, AppResult};

/// `SP_DeterminarPrecioEntrada(IN idFuncion, OUT precio, OUT mensaje)`
const SP_DETERMINAR_PRECIO_ENTRADA: &str = "SP_DeterminarPrecioEntrada";

pub struct FuncionRepository {
    pool: MySqlPool,
}

impl FuncionRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Computed price and status message for a funcion.
    ///
    /// The price OUT value is NULL whenever the procedure reports a
    /// failure, so the caller must classify the message before using it.
    pub async fn precio_funcion(&self, id_funcion: i64) -> AppResult<(Option<Decimal>, String)> {
        let (_, out_values) = invoker::call_procedure_with_out(
            &self.pool,
            SP_DETERMINAR_PRECIO_ENTRADA,
            &[ProcParam::Int(id_funcion)],
            2,
        )
        .await?;

        let precio = match out_values.first().and_then(|v| v.as_deref()) {
            Some(raw) => Some(raw.parse::<Decimal>().map_err(|e| {
                AppError::database(format!(
                    "Invalid price value from {SP_DETERMINAR_PRECIO_ENTRADA}: {e}"
                ))
            })?),
            None => None,
        };

        let mensaje = out_values
            .get(1)
            .and_then(|v| v.clone())
            .unwrap_or_else(|| MENSAJE_ERROR_DESCONOCIDO.to_string());

        Ok((precio, mensaje))
    }
}
