//! ATS Scorer — keyword-overlap score of a resume against a job description.
//!
//! Algorithm:
//! 1. Tokenize the resume into a token set.
//! 2. Extract the ranked JD keyword list (see `keywords::extract_keywords`).
//! 3. matched = keywords present in the resume, missing = the rest (both in keyword order).
//! 4. score = min(100, floor(100 × |matched| / |keywords|)).
//!
//! A JD that yields no keywords scores 0 with empty lists; it is not an error.

use serde::{Deserialize, Serialize};

use crate::ats::keywords::{extract_keywords, DEFAULT_MAX_KEYWORDS};
use crate::ats::tokenizer::token_set;

/// Result of scoring one resume against one job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32, // 0 – 100
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl ScoreResult {
    fn empty() -> Self {
        Self {
            score: 0,
            matched: vec![],
            missing: vec![],
        }
    }
}

/// Scores `resume_text` against `job_description`. Pure and deterministic.
pub fn compute_score(resume_text: &str, job_description: &str) -> ScoreResult {
    let keywords = extract_keywords(job_description, DEFAULT_MAX_KEYWORDS);
    if keywords.is_empty() {
        return ScoreResult::empty();
    }

    let resume_tokens = token_set(resume_text);
    let total = keywords.len();

    let (matched, missing): (Vec<String>, Vec<String>) = keywords
        .into_iter()
        .partition(|k| resume_tokens.contains(k));

    let score = (100 * matched.len() / total).min(100) as u32;

    ScoreResult {
        score,
        matched,
        missing,
    }
}
