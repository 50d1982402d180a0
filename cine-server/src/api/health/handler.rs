//! Health check handlers

use std::time::Instant;

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::invoker;

/// Liveness response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Status (ok | error)
    status: &'static str,
    version: &'static str,
}

/// Detailed health response
#[derive(Serialize)]
pub struct DetailedHealthResponse {
    status: &'static str,
    version: &'static str,
    /// Runtime environment
    environment: String,
    checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    database: CheckResult,
}

/// Single component check
#[derive(Serialize)]
pub struct CheckResult {
    /// Status (ok | error)
    status: &'static str,
    /// Round-trip latency (milliseconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u128>,
    /// Server version reported by the database
    #[serde(skip_serializing_if = "Option::is_none")]
    server_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// GET /health - liveness only, no dependencies touched
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health/detailed - probes the database
///
/// Always responds 200; component failures are reported in the body so
/// monitoring can distinguish a down dependency from a down server.
pub async fn detailed_health(State(state): State<ServerState>) -> Json<DetailedHealthResponse> {
    let database = check_database(&state).await;
    let status = if database.error.is_none() { "ok" } else { "degraded" };

    Json(DetailedHealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        checks: HealthChecks { database },
    })
}

async fn check_database(state: &ServerState) -> CheckResult {
    let started = Instant::now();
    let ping = invoker::fetch_optional::<(i64,)>(&state.db.pool, "SELECT 1", &[]).await;

    match ping {
        Ok(_) => {
            let server_version = invoker::call_function(&state.db.pool, "VERSION", &[])
                .await
                .ok()
                .flatten();
            CheckResult {
                status: "ok",
                latency_ms: Some(started.elapsed().as_millis()),
                server_version,
                error: None,
            }
        }
        Err(e) => CheckResult {
            status: "error",
            latency_ms: None,
            server_version: None,
            error: Some(e.to_string()),
        },
    }
}
