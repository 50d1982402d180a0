//! Reporte API handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::ReporteOcupacion;
use crate::services::ReporteService;
use crate::utils::pagination::DEFAULT_PER_PAGE;
use crate::utils::validation::{parse_fecha, parse_int_or, require_param};
use crate::utils::{AppResult, Page};

/// Query parameters for the occupancy report.
///
/// All fields arrive as raw text: required ones are checked by hand so
/// a missing or malformed value produces the standard error body, and
/// paging values fall back to defaults.
#[derive(Debug, Deserialize)]
pub struct OcupacionQuery {
    #[serde(rename = "idPelicula")]
    id_pelicula: Option<String>,
    #[serde(rename = "fechaInicio")]
    fecha_inicio: Option<String>,
    #[serde(rename = "fechaFin")]
    fecha_fin: Option<String>,
    page: Option<String>,
    per_page: Option<String>,
}

/// GET /api/v1/reporte/ocupacion - occupancy report per funcion
///
/// Required: `idPelicula`, `fechaInicio`, `fechaFin` (YYYY-MM-DD).
/// 400 on missing/malformed parameters or an inverted date range.
pub async fn ocupacion(
    State(state): State<ServerState>,
    Query(params): Query<OcupacionQuery>,
) -> AppResult<Json<Page<ReporteOcupacion>>> {
    let id_pelicula = require_param(
        params.id_pelicula.as_deref().and_then(|v| v.parse::<i64>().ok()),
        "idPelicula",
    )?;
    let fecha_inicio = parse_fecha(require_param(params.fecha_inicio.as_deref(), "fechaInicio")?)?;
    let fecha_fin = parse_fecha(require_param(params.fecha_fin.as_deref(), "fechaFin")?)?;

    let page = parse_int_or(params.page.as_deref(), 1);
    let per_page = parse_int_or(params.per_page.as_deref(), DEFAULT_PER_PAGE);

    let service = ReporteService::new(state.db.pool.clone());
    let reporte = service
        .reporte_ocupacion(id_pelicula, fecha_inicio, fecha_fin, page, per_page)
        .await?;
    Ok(Json(reporte))
}
