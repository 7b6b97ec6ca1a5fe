use serde::Deserialize;

use crate::errors::AppError;

const DEFAULT_QUESTION_COUNT: i64 = 5;

fn default_question_count() -> i64 {
    DEFAULT_QUESTION_COUNT
}

/// Body shared by the scoring and feedback endpoints.
#[derive(Debug, Deserialize)]
pub struct ResumeJdRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
}

impl ResumeJdRequest {
    /// Scoring against an empty resume or JD is meaningless, so both are required.
    pub fn validate(&self) -> Result<(), AppError> {
        require_texts(&self.resume_text, &self.job_description)
    }
}

#[derive(Debug, Deserialize)]
pub struct QuestionsRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
    /// Signed so that zero or negative counts are clamped rather than rejected.
    #[serde(default = "default_question_count")]
    pub count: i64,
}

impl QuestionsRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require_texts(&self.resume_text, &self.job_description)
    }

    /// Requested number of questions, never less than one.
    pub fn question_count(&self) -> usize {
        usize::try_from(self.count.max(1)).unwrap_or(usize::MAX)
    }
}

/// Answer evaluation accepts empty strings; the evaluator degrades to low scores instead.
#[derive(Debug, Deserialize)]
pub struct EvaluateAnswerRequest {
    pub question: String,
    pub answer_text: String,
    pub resume_text: String,
    pub job_description: String,
}

fn require_texts(resume_text: &str, job_description: &str) -> Result<(), AppError> {
    if resume_text.trim().is_empty() || job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text and job_description are required".to_string(),
        ));
    }
    Ok(())
}
