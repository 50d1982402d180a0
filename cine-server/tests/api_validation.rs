//! HTTP-level tests for the validation paths that resolve before any
//! database access.
//!
//! The router runs against a lazily-connected pool, so these requests
//! must be rejected (or answered) without a MySQL server present.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use cine_server::api;
use cine_server::core::{Config, ServerState};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

fn test_app() -> Router {
    let state = ServerState::with_lazy_db(&Config::from_env());
    api::build_app(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_is_up_without_database() {
    let response = test_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_detailed_health_reports_database_state() {
    let response = test_app()
        .oneshot(Request::get("/health/detailed").body(Body::empty()).unwrap())
        .await
        .unwrap();

    // Component failures are reported in the body, not the status code
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["checks"]["database"]["status"].is_string());
}

#[tokio::test]
async fn test_reporte_missing_id_pelicula() {
    let response = test_app()
        .oneshot(
            Request::get("/api/v1/reporte/ocupacion?fechaInicio=2025-12-01&fechaFin=2025-12-31")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "El parametro idPelicula es requerido");
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn test_reporte_malformed_date() {
    let response = test_app()
        .oneshot(
            Request::get(
                "/api/v1/reporte/ocupacion?idPelicula=1&fechaInicio=01/12/2025&fechaFin=2025-12-31",
            )
            .body(Body::empty())
            .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Formato de fecha invalido. Use YYYY-MM-DD");
}

#[tokio::test]
async fn test_reporte_inverted_date_range() {
    let response = test_app()
        .oneshot(
            Request::get(
                "/api/v1/reporte/ocupacion?idPelicula=1&fechaInicio=2025-12-31&fechaFin=2025-12-01",
            )
            .body(Body::empty())
            .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(
        json["message"],
        "La fecha de inicio no puede ser mayor a la fecha fin"
    );
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn test_crear_reserva_rejects_short_dni() {
    let response = test_app()
        .oneshot(
            Request::post("/api/v1/reservas")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"id_funcion": 1, "id_butaca": 5, "dni": "123"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn test_crear_reserva_rejects_non_positive_ids() {
    let response = test_app()
        .oneshot(
            Request::post("/api/v1/reservas")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"id_funcion": 0, "id_butaca": 5, "dni": "12345678"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_crear_reserva_malformed_body_keeps_error_shape() {
    let response = test_app()
        .oneshot(
            Request::post("/api/v1/reservas")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"id_funcion": "not a number"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().starts_with("Datos invalidos"));
}
