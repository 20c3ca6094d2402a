//! Axum route handler for the Analyze API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::extraction::{extract_text, UploadedDocument};
use crate::interview::generator::{generate_questions, validate_job_description};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub generated_questions: String,
}

/// POST /analyze
///
/// Multipart form: `resume` (file) and `job_desc_text` (text).
/// Extracts the resume text, then asks the completion service for questions.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut resume: Option<UploadedDocument> = None;
    let mut job_desc_text: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read multipart field", e))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "resume" => {
                let filename = field.file_name().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error("Failed to read resume upload", e))?;
                resume = Some(UploadedDocument::new(filename, bytes));
            }
            "job_desc_text" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| multipart_error("Failed to read job_desc_text", e))?;
                job_desc_text = Some(text);
            }
            other => debug!("Ignoring unexpected form field '{other}'"),
        }
    }

    let resume = resume
        .ok_or_else(|| AppError::Validation("Missing form field 'resume'".to_string()))?;
    let job_description = validate_job_description(job_desc_text)?;

    let resume_text = extract_text(resume, state.config.pdf_timeout()).await?;

    let generated_questions = generate_questions(
        state.completion.as_ref(),
        &resume_text,
        &job_description,
        state.config.request_timeout(),
    )
    .await?;

    info!(
        "Generated interview questions ({} chars)",
        generated_questions.len()
    );

    Ok(Json(AnalyzeResponse {
        generated_questions,
    }))
}

/// A body over the upload limit is 413; any other malformed form is 400.
fn multipart_error(context: &str, err: MultipartError) -> AppError {
    let message = format!("{context}: {err}");
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(message)
    } else {
        AppError::Validation(message)
    }
}
