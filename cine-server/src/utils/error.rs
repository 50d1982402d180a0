//! Unified error handling
//!
//! Provides the application error taxonomy and the JSON error body:
//! - [`AppError`] - application error enum, one variant per HTTP category
//! - [`ErrorBody`] - error response structure
//!
//! Every non-2xx response has the same shape:
//!
//! ```json
//! {
//!   "success": false,
//!   "message": "Butaca ya reservada para esta funcion",
//!   "error": "conflict"
//! }
//! ```
//!
//! Business failures originate as status messages returned by the
//! stored procedures and are classified in [`crate::utils::status`];
//! the message text is passed through to the client verbatim.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Always `false`
    pub success: bool,
    /// Human-readable message (verbatim procedure text for business errors)
    pub message: String,
    /// Error category (omitted when unknown)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Application error enum
///
/// | Variant | HTTP | Meaning |
/// |------------|------|----------------------------------------------|
/// | Validation | 400 | Bad or missing input, inverted date range |
/// | NotFound | 404 | Unknown function or seat |
/// | Inactive | 400 | Function inactive or finished |
/// | Conflict | 409 | Seat taken / per-DNI booking limit exceeded |
/// | Database | 500 | Connection or driver failure |
/// | Internal | 500 | Unclassified procedure message, other errors |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Client errors (4xx) ==========
    #[error("{0}")]
    /// Invalid input (400)
    Validation(String),

    #[error("{0}")]
    /// Resource not found (404)
    NotFound(String),

    #[error("{0}")]
    /// Resource inactive or finished (400)
    Inactive(String),

    #[error("{0}")]
    /// Conflict with current state (409)
    Conflict(String),

    // ========== Server errors (5xx) ==========
    #[error("{0}")]
    /// Database or driver error (500)
    Database(String),

    #[error("{0}")]
    /// Internal error (500)
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn inactive(msg: impl Into<String>) -> Self {
        Self::Inactive(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Category label carried in the `error` field of the response body
    pub fn category(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::NotFound(_) => "not_found",
            Self::Inactive(_) => "inactive_resource",
            Self::Conflict(_) => "conflict",
            Self::Database(_) => "database_error",
            Self::Internal(_) => "internal_error",
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Inactive(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 5xx details go to the log as well as the client; the API
        // contract surfaces the message text in both cases
        match &self {
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
            }
            _ => {}
        }

        let body = ErrorBody {
            success: false,
            message: self.to_string(),
            error: Some(self.category().to_string()),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::inactive("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::conflict("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::database("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_message_passthrough() {
        let err = AppError::conflict("Butaca ya reservada para esta funcion");
        assert_eq!(err.to_string(), "Butaca ya reservada para esta funcion");
        assert_eq!(err.category(), "conflict");
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            success: false,
            message: "Funcion no encontrada".to_string(),
            error: Some("not_found".to_string()),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Funcion no encontrada");
        assert_eq!(json["error"], "not_found");
    }
}
