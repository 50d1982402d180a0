//! Reporte API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/v1/reporte", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/ocupacion", get(handler::ocupacion))
}
