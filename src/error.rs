//! Error types for the dashboard backend
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Dashboard Error Enum ==
/// Unified error type for the dashboard backend.
///
/// Database unavailability is not represented here: pool initialization
/// failure is converted into fallback behavior at startup and never
/// surfaced to dashboard callers.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Cache is full and eviction failed
    #[error("Cache full: {0}")]
    CacheFull(String),

    /// Database query failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Cached payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            DashboardError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            DashboardError::CacheFull(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            DashboardError::Database(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            DashboardError::Serialization(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            DashboardError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the dashboard backend.
pub type Result<T> = std::result::Result<T, DashboardError>;
