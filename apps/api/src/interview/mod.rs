// Interview question generation: resume text + job description -> questions.
// All completion calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod prompts;
