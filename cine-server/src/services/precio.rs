//! Pricing service

use sqlx::MySqlPool;

use crate::db::models::PrecioResponse;
use crate::db::repository::{FuncionRepository, MENSAJE_ERROR_DESCONOCIDO};
use crate::utils::{AppError, AppResult, classify_status};

/// Business logic for funcion pricing.
///
/// Stateless; constructed per call with a pool handle.
pub struct PrecioService {
    pool: MySqlPool,
}

impl PrecioService {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Computed price for a funcion.
    ///
    /// Classifies the procedure's status message first, so an inactive
    /// or unknown funcion surfaces as the matching error category.
    pub async fn obtener_precio(&self, id_funcion: i64) -> AppResult<PrecioResponse> {
        let repo = FuncionRepository::new(self.pool.clone());
        let (precio, mensaje) = repo.precio_funcion(id_funcion).await?;

        if let Some(err) = classify_status(Some(&mensaje)) {
            return Err(err);
        }

        // "OK" without a price would mean a broken procedure contract
        let precio_final =
            precio.ok_or_else(|| AppError::internal(MENSAJE_ERROR_DESCONOCIDO))?;

        Ok(PrecioResponse {
            id_funcion,
            precio_final,
            mensaje,
        })
    }
}
