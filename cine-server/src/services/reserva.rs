//! Reservation service

use sqlx::MySqlPool;

use crate::db::models::{ReservaDetalle, ReservaResponse};
use crate::db::repository::ReservaRepository;
use crate::utils::{AppResult, Page, classify_status, paginate};

/// Business logic for bookings and customer listings.
///
/// Stateless; constructed per call with a pool handle.
pub struct ReservaService {
    pool: MySqlPool,
}

impl ReservaService {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Book a seat for a customer.
    ///
    /// All booking rules (existence, active funcion, seat uniqueness,
    /// per-DNI cap) run inside the procedure; its status message is
    /// classified here and any failure becomes the matching error.
    pub async fn crear_reserva(
        &self,
        id_funcion: i64,
        id_butaca: i64,
        dni: &str,
    ) -> AppResult<ReservaResponse> {
        let repo = ReservaRepository::new(self.pool.clone());
        let mensaje = repo.crear_reserva(id_funcion, id_butaca, dni).await?;

        if let Some(err) = classify_status(Some(&mensaje)) {
            return Err(err);
        }

        Ok(ReservaResponse {
            success: true,
            mensaje: "Reserva creada exitosamente".to_string(),
        })
    }

    /// Paginated reservation listing for a customer.
    pub async fn listar_por_dni(
        &self,
        dni: &str,
        page: i64,
        per_page: i64,
    ) -> AppResult<Page<ReservaDetalle>> {
        let repo = ReservaRepository::new(self.pool.clone());
        let reservas = repo.reservas_por_dni(dni).await?;
        Ok(paginate(reservas, page, per_page))
    }
}
