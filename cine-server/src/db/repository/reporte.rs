//! Report data access

use chrono::NaiveDate;
use sqlx::MySqlPool;

use crate::db::invoker::{self, ProcParam};
use crate::db::models::ReporteOcupacion;
use crate::utils::AppResult;

/// `SP_ReporteOcupacionPorPelicula(IN idPelicula, IN fechaInicio, IN fechaFin)` -> report rows
const SP_REPORTE_OCUPACION: &str = "SP_ReporteOcupacionPorPelicula";

pub struct ReporteRepository {
    pool: MySqlPool,
}

impl ReporteRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Occupancy rows for a movie over a date range, one per funcion.
    pub async fn ocupacion_por_pelicula(
        &self,
        id_pelicula: i64,
        fecha_inicio: NaiveDate,
        fecha_fin: NaiveDate,
    ) -> AppResult<Vec<ReporteOcupacion>> {
        invoker::call_procedure(
            &self.pool,
            SP_REPORTE_OCUPACION,
            &[
                ProcParam::Int(id_pelicula),
                ProcParam::Date(fecha_inicio),
                ProcParam::Date(fecha_fin),
            ],
        )
        .await
    }
}
