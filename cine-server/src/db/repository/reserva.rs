//! Reservation data access
//!
//! Seat uniqueness and the per-DNI booking cap are enforced inside the
//! booking procedure's own transaction; its status message is the only
//! signal this layer sees.

use sqlx::MySqlPool;

use crate::db::invoker::{self, ProcParam};
use crate::db::models::ReservaDetalle;
use crate::db::repository::MENSAJE_ERROR_DESCONOCIDO;
use crate::utils::AppResult;

/// `SP_ReservarButacaConValidacionDNI(IN idFuncion, IN idButaca, IN dni, OUT mensaje)`
const SP_RESERVAR_BUTACA: &str = "SP_ReservarButacaConValidacionDNI";

/// `SP_ReservasPorDNI(IN dni)` -> reservation detail rows
const SP_RESERVAS_POR_DNI: &str = "SP_ReservasPorDNI";

pub struct ReservaRepository {
    pool: MySqlPool,
}

impl ReservaRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Book a seat; returns the procedure's status message (`"OK"` or
    /// a failure phrase).
    pub async fn crear_reserva(
        &self,
        id_funcion: i64,
        id_butaca: i64,
        dni: &str,
    ) -> AppResult<String> {
        let (_, out_values) = invoker::call_procedure_with_out(
            &self.pool,
            SP_RESERVAR_BUTACA,
            &[
                ProcParam::Int(id_funcion),
                ProcParam::Int(id_butaca),
                ProcParam::Text(dni.to_string()),
            ],
            1,
        )
        .await?;

        Ok(out_values
            .into_iter()
            .next()
            .flatten()
            .unwrap_or_else(|| MENSAJE_ERROR_DESCONOCIDO.to_string()))
    }

    /// All reservations for a customer, joined with movie and room names.
    pub async fn reservas_por_dni(&self, dni: &str) -> AppResult<Vec<ReservaDetalle>> {
        invoker::call_procedure(
            &self.pool,
            SP_RESERVAS_POR_DNI,
            &[ProcParam::Text(dni.to_string())],
        )
        .await
    }
}
