use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// Completion model every `/analyze` call is sent to.
    pub model: String,
    pub max_upload_bytes: usize,
}

/// GET /health
///
/// Liveness plus the settings a caller needs before uploading: which model
/// answers and how large a resume may be. Never contacts the completion API.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        model: state.config.openai_model.clone(),
        max_upload_bytes: state.config.max_upload_bytes,
    })
}
