//! API routing module
//!
//! # Structure
//!
//! - [`health`] - liveness and database connectivity checks
//! - [`precios`] - funcion price lookup
//! - [`reservas`] - booking and per-customer listings
//! - [`reporte`] - occupancy report
//!
//! Resource routes are mounted under `/api/v1`; health endpoints are
//! unprefixed.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

pub mod health;
pub mod precios;
pub mod reporte;
pub mod reservas;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(precios::router())
        .merge(reservas::router())
        .merge(reporte::router())
}

/// Build a fully configured application with middleware and state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // CORS - handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Request logging - outermost, executed first
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
