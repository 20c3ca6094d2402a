//! Question generation — prompt assembly plus one completion call.
//!
//! The model's answer is trimmed and passed through unexamined; nothing checks
//! that it actually holds ten questions.

use std::time::Duration;

use tracing::info;

use crate::errors::AppError;
use crate::interview::prompts::build_prompt;
use crate::llm_client::{CompletionService, LlmError};

/// Output bound sent with every completion request.
pub const MAX_COMPLETION_TOKENS: u32 = 1000;

/// Builds the prompt, calls the completion service once and returns the
/// trimmed completion. The call is abandoned once `deadline` elapses.
pub async fn generate_questions(
    completion: &dyn CompletionService,
    resume_text: &str,
    job_description: &str,
    deadline: Duration,
) -> Result<String, LlmError> {
    let prompt = build_prompt(resume_text, job_description);
    info!(
        "Requesting interview questions (prompt {} chars)",
        prompt.chars().count()
    );

    let text = tokio::time::timeout(deadline, completion.complete(&prompt, MAX_COMPLETION_TOKENS))
        .await
        .map_err(|_| LlmError::Timeout {
            secs: deadline.as_secs(),
        })??;

    Ok(text.trim().to_string())
}

/// The job description must be present. Its content, blank or not, is used
/// exactly as supplied.
pub fn validate_job_description(job_description: Option<String>) -> Result<String, AppError> {
    job_description
        .ok_or_else(|| AppError::Validation("Missing form field 'job_desc_text'".to_string()))
}
