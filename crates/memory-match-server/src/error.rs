use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use memory_match_core::leaderboard::ValidationError;

use crate::leaderboard_store::StoreError;

/// Body text for every rejected score submission.
pub const INVALID_DATA: &str = "Invalid data";

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadRequest(m) | Self::Internal(m) => write!(f, "{m}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            Self::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        tracing::debug!(error = %e, "Rejected score submission");
        Self::BadRequest(INVALID_DATA.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        tracing::error!(error = %e, "Leaderboard storage failure");
        Self::Internal("Leaderboard unavailable".to_string())
    }
}
