//! Occupancy report service

use chrono::NaiveDate;
use sqlx::MySqlPool;

use crate::db::models::ReporteOcupacion;
use crate::db::repository::ReporteRepository;
use crate::utils::{AppError, AppResult, Page, paginate};

/// Business logic for the occupancy report.
///
/// Stateless; constructed per call with a pool handle.
pub struct ReporteService {
    pool: MySqlPool,
}

impl ReporteService {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Paginated occupancy report for a movie over a date range.
    ///
    /// The inverted-range check is the one validation rule not
    /// delegated to the database; it must reject before any call.
    pub async fn reporte_ocupacion(
        &self,
        id_pelicula: i64,
        fecha_inicio: NaiveDate,
        fecha_fin: NaiveDate,
        page: i64,
        per_page: i64,
    ) -> AppResult<Page<ReporteOcupacion>> {
        if fecha_inicio > fecha_fin {
            return Err(AppError::validation(
                "La fecha de inicio no puede ser mayor a la fecha fin",
            ));
        }

        let repo = ReporteRepository::new(self.pool.clone());
        let datos = repo
            .ocupacion_por_pelicula(id_pelicula, fecha_inicio, fecha_fin)
            .await?;
        Ok(paginate(datos, page, per_page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::db::DbService;

    #[tokio::test]
    async fn test_inverted_range_rejected_before_database() {
        // Lazy pool: any database access would fail, proving the
        // validation fires first
        let db = DbService::connect_lazy(&Config::from_env());
        let service = ReporteService::new(db.pool);

        let inicio = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let fin = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();

        let err = service
            .reporte_ocupacion(1, inicio, fin, 1, 10)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "La fecha de inicio no puede ser mayor a la fecha fin"
        );
    }
}
