use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Document parse error: {0}")]
    DocumentParse(String),

    #[error("Decoding error: {0}")]
    Decoding(String),

    #[error("Document extraction timed out after {0}s")]
    ExtractionTimeout(u64),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Upstream service error: {0}")]
    Upstream(String),

    #[error("Upstream service timed out after {0}s")]
    UpstreamTimeout(u64),
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::DocumentParse(msg) => AppError::DocumentParse(msg),
            ExtractError::Decoding(e) => AppError::Decoding(e.to_string()),
            ExtractError::Timeout { secs } => AppError::ExtractionTimeout(secs),
        }
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Timeout { secs } => AppError::UpstreamTimeout(secs),
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::DocumentParse(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "DOCUMENT_PARSE_ERROR",
                format!("The uploaded document could not be read as a PDF: {msg}"),
            ),
            AppError::Decoding(msg) => (
                StatusCode::BAD_REQUEST,
                "DECODING_ERROR",
                format!("The uploaded resume is not valid UTF-8 text: {msg}"),
            ),
            AppError::ExtractionTimeout(secs) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "DOCUMENT_PARSE_TIMEOUT",
                format!("Text could not be extracted from the uploaded PDF within {secs}s"),
            ),
            AppError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone())
            }
            AppError::Upstream(msg) => {
                tracing::error!("Upstream service error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_SERVICE_ERROR",
                    "The question generation service failed".to_string(),
                )
            }
            AppError::UpstreamTimeout(secs) => {
                tracing::error!("Upstream service timed out after {secs}s");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "UPSTREAM_TIMEOUT",
                    "The question generation service did not respond in time".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
