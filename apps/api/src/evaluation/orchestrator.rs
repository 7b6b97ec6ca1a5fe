//! Fallback orchestrator — routes feedback, question and answer-evaluation requests
//! to the external provider and substitutes the local heuristics on any failure.
//!
//! States per call:
//!   NoCredential                → heuristic
//!   HasCredential → Attempt     → Success → parse → normalized result
//!                               ↘ Failure / parse error → heuristic
//!
//! Both paths go through the same normalizing constructors, so a caller cannot
//! tell from the shape of a result which path produced it.

use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::evaluation::prompts::{answer_prompt, feedback_prompt, questions_prompt};
use crate::heuristics::answer::{self, AnswerEvaluation};
use crate::heuristics::feedback::{self, FeedbackResult, Recommendation};
use crate::heuristics::questions;
use crate::llm_client::{
    extract_fenced_block, CompletionProvider, GeminiClient, ProviderFailure, ProviderOutcome,
};

/// `ai_mode` reported when no provider is configured.
pub const LOCAL_MODE: &str = "local-heuristic";

/// Why a call was served by the heuristics instead of the provider.
#[derive(Debug, Error)]
pub enum FallbackReason {
    #[error("no provider credential configured")]
    ProviderUnavailable,

    #[error("provider call failed: {0}")]
    ProviderCallFailed(#[from] ProviderFailure),

    #[error("provider response could not be parsed: {0}")]
    ResponseParseFailed(String),
}

#[derive(Debug, Deserialize)]
struct ProviderFeedback {
    strengths: Vec<String>,
    weaknesses: Vec<String>,
    suggestions: Vec<String>,
    recommendation: String,
}

#[derive(Debug, Deserialize)]
struct ProviderAnswer {
    score: f64,
    strengths: Vec<String>,
    weaknesses: Vec<String>,
    suggestions: Vec<String>,
}

/// Entry point for every LLM-backed evaluation. Cheap to share behind an `Arc`.
#[derive(Clone)]
pub struct Evaluator {
    provider: Option<Arc<dyn CompletionProvider>>,
}

impl Evaluator {
    pub fn new(provider: Option<Arc<dyn CompletionProvider>>) -> Self {
        Self { provider }
    }

    /// Builds the evaluator from config: Gemini when a key is set, heuristics only otherwise.
    pub fn from_config(config: &Config) -> Result<Self, ProviderFailure> {
        let provider = GeminiClient::from_config(config)?
            .map(|client| Arc::new(client) as Arc<dyn CompletionProvider>);
        match &provider {
            Some(p) => info!("LLM provider configured (model: {})", p.model()),
            None => warn!("GEMINI_API_KEY is not set; using local heuristic evaluation"),
        }
        Ok(Self::new(provider))
    }

    /// Model name when a provider is configured, `LOCAL_MODE` otherwise.
    pub fn ai_mode(&self) -> &str {
        self.provider.as_ref().map_or(LOCAL_MODE, |p| p.model())
    }

    pub async fn resume_feedback(&self, resume_text: &str, job_description: &str) -> FeedbackResult {
        let attempt = self
            .attempt(|| feedback_prompt(resume_text, job_description))
            .await
            .and_then(|text| parse_feedback(&text));

        attempt.unwrap_or_else(|reason| {
            log_fallback("resume_feedback", &reason);
            feedback::generate_feedback(resume_text, job_description)
        })
    }

    pub async fn interview_questions(
        &self,
        resume_text: &str,
        job_description: &str,
        count: usize,
    ) -> Vec<String> {
        let count = count.max(1);
        let attempt = self
            .attempt(|| questions_prompt(resume_text, job_description, count))
            .await
            .and_then(|text| parse_questions(&text, count));

        attempt.unwrap_or_else(|reason| {
            log_fallback("interview_questions", &reason);
            questions::generate_questions(resume_text, job_description, count)
        })
    }

    pub async fn evaluate_answer(
        &self,
        question: &str,
        answer_text: &str,
        resume_text: &str,
        job_description: &str,
    ) -> AnswerEvaluation {
        let attempt = self
            .attempt(|| answer_prompt(question, answer_text, resume_text, job_description))
            .await
            .and_then(|text| parse_answer(&text));

        attempt.unwrap_or_else(|reason| {
            log_fallback("evaluate_answer", &reason);
            answer::evaluate_answer(question, answer_text, resume_text, job_description)
        })
    }

    /// One provider call, no retry. The prompt is only built when a provider exists.
    async fn attempt<F>(&self, build_prompt: F) -> Result<String, FallbackReason>
    where
        F: FnOnce() -> String,
    {
        let Some(provider) = &self.provider else {
            return Err(FallbackReason::ProviderUnavailable);
        };

        match provider.complete(&build_prompt()).await {
            ProviderOutcome::Success(text) => Ok(text),
            ProviderOutcome::Failure(e) => Err(FallbackReason::ProviderCallFailed(e)),
        }
    }
}

fn log_fallback(operation: &str, reason: &FallbackReason) {
    match reason {
        FallbackReason::ProviderUnavailable => {
            debug!("{operation}: no provider configured, using local heuristics")
        }
        _ => warn!("{operation} failed, using local fallback: {reason}"),
    }
}

fn parse_failed(e: impl std::fmt::Display) -> FallbackReason {
    FallbackReason::ResponseParseFailed(e.to_string())
}

/// Trims entries and drops blank ones.
fn clean(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_feedback(text: &str) -> Result<FeedbackResult, FallbackReason> {
    let raw: ProviderFeedback =
        serde_json::from_str(extract_fenced_block(text)).map_err(parse_failed)?;

    Ok(FeedbackResult::normalized(
        clean(raw.strengths),
        clean(raw.weaknesses),
        clean(raw.suggestions),
        Recommendation::from_text(&raw.recommendation),
    ))
}

fn parse_answer(text: &str) -> Result<AnswerEvaluation, FallbackReason> {
    let raw: ProviderAnswer =
        serde_json::from_str(extract_fenced_block(text)).map_err(parse_failed)?;

    // float → int casts saturate, and normalized() clamps to 1..=10
    Ok(AnswerEvaluation::normalized(
        raw.score.trunc() as i64,
        clean(raw.strengths),
        clean(raw.weaknesses),
        clean(raw.suggestions),
    ))
}

/// One question per line; leading numbering and bullet markers are stripped.
fn parse_questions(text: &str, count: usize) -> Result<Vec<String>, FallbackReason> {
    let questions: Vec<String> = extract_fenced_block(text)
        .lines()
        .map(|line| {
            line.trim()
                .trim_start_matches(|c: char| c.is_ascii_digit() || ".)-*".contains(c))
                .trim()
        })
        .filter(|line| !line.is_empty())
        .take(count)
        .map(str::to_string)
        .collect();

    if questions.is_empty() {
        return Err(parse_failed("provider returned no questions"));
    }
    Ok(questions)
}
