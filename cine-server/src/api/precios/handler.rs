//! Precios API handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::PrecioResponse;
use crate::services::PrecioService;
use crate::utils::AppResult;

/// GET /api/v1/precios/:id_funcion - computed price for a funcion
///
/// 400 when the funcion is inactive or finished, 404 when it does not
/// exist; the status message from the procedure is passed through.
pub async fn get_precio(
    State(state): State<ServerState>,
    Path(id_funcion): Path<i64>,
) -> AppResult<Json<PrecioResponse>> {
    let service = PrecioService::new(state.db.pool.clone());
    let precio = service.obtener_precio(id_funcion).await?;
    Ok(Json(precio))
}
