use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use types::errors::ScoringError;

/// Central error type for the Gateway application
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl From<ScoringError> for AppError {
    fn from(err: ScoringError) -> Self {
        match err {
            // Recoverable at the form: the caller can correct and resubmit
            ScoringError::Input(e) => AppError::InvalidInput(e.to_string()),
            // Schema/artifact failures past startup are server-side faults
            other => AppError::InternalError(anyhow::anyhow!(other)),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, code) = match self {
            AppError::InvalidInput(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg, "INVALID_INPUT")
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST"),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                "INTERNAL_ERROR",
            ),
        };

        let body = Json(json!({
            "error": code,
            "message": error_message
        }));

        (status, body).into_response()
    }
}
