//! Reservas API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{ReservaCreate, ReservaDetalle, ReservaResponse};
use crate::services::ReservaService;
use crate::utils::pagination::DEFAULT_PER_PAGE;
use crate::utils::validation::parse_int_or;
use crate::utils::{AppResult, Page, ValidJson};

/// Paging query parameters.
///
/// Kept as raw text so an unparsable value falls back to the default
/// instead of rejecting the request (legacy API behavior).
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    page: Option<String>,
    per_page: Option<String>,
}

impl PageQuery {
    pub fn resolve(&self) -> (i64, i64) {
        (
            parse_int_or(self.page.as_deref(), 1),
            parse_int_or(self.per_page.as_deref(), DEFAULT_PER_PAGE),
        )
    }
}

/// POST /api/v1/reservas - book a seat
///
/// 400 invalid payload or inactive funcion, 404 unknown funcion or
/// seat, 409 seat taken or per-DNI limit exceeded.
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<ReservaCreate>,
) -> AppResult<(StatusCode, Json<ReservaResponse>)> {
    let service = ReservaService::new(state.db.pool.clone());
    let result = service
        .crear_reserva(payload.id_funcion, payload.id_butaca, &payload.dni)
        .await?;
    Ok((StatusCode::CREATED, Json(result)))
}

/// GET /api/v1/reservas/:dni - paginated reservations for a customer
pub async fn list_by_dni(
    State(state): State<ServerState>,
    Path(dni): Path<String>,
    Query(paging): Query<PageQuery>,
) -> AppResult<Json<Page<ReservaDetalle>>> {
    let (page, per_page) = paging.resolve();
    let service = ReservaService::new(state.db.pool.clone());
    let reservas = service.listar_por_dni(&dni, page, per_page).await?;
    Ok(Json(reservas))
}
