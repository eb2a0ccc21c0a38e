//! Application error types and HTTP response mapping.
//!
//! Defines `AppError` enum for all error conditions and implements Axum's
//! `IntoResponse` to automatically convert errors to appropriate HTTP responses
//! with JSON error bodies.
//!
//! Error mappings:
//! - `Http`, `Upstream` → 502
//! - `Config` → 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("GitLab request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitLab API error {status}: {body}")]
    Upstream { status: u16, body: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Config(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Configuration error: {}", msg),
            ),
            AppError::Http(e) => (
                StatusCode::BAD_GATEWAY,
                format!("GitLab request failed: {}", e),
            ),
            AppError::Upstream { status, body } => (
                StatusCode::BAD_GATEWAY,
                format!("GitLab API error {}: {}", status, body),
            ),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
