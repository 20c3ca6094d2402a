// Prompt text for interview question generation.

/// Instruction line placed at the top of every prompt.
pub const QUESTION_INSTRUCTION: &str = "You are an intelligent interview generator AI. \
    Based on the following resume and job description, \
    generate 5 behavioral and 5 technical questions:";

pub const RESUME_LABEL: &str = "Resume:";
pub const JOB_DESCRIPTION_LABEL: &str = "Job Description:";

/// Assembles the prompt. Both inputs are embedded verbatim under their labels;
/// nothing inside them is interpreted as a placeholder.
pub fn build_prompt(resume_text: &str, job_description: &str) -> String {
    format!(
        "\n{QUESTION_INSTRUCTION}\n\n{RESUME_LABEL}\n{resume_text}\n\n{JOB_DESCRIPTION_LABEL}\n{job_description}\n"
    )
}
