//! Heuristic resume feedback — strengths, weaknesses, suggestions and a recommendation
//! derived from keyword overlap and resume length. No LLM involved.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::heuristics::salient::{finalize_list, salient_keywords};

pub const MAX_STRENGTHS: usize = 5;
pub const MAX_WEAKNESSES: usize = 4;
pub const MAX_SUGGESTIONS: usize = 5;

/// Keywords taken from each of the resume and the JD.
const FEEDBACK_KEYWORD_LIMIT: usize = 40;
/// Resumes longer than this (in characters) count as detailed.
const DETAILED_RESUME_CHARS: usize = 1500;
/// Recommend when matched ≥ max(RECOMMEND_MIN_MATCHED, |jd keywords| / RECOMMEND_JD_DIVISOR).
pub const RECOMMEND_MIN_MATCHED: usize = 3;
pub const RECOMMEND_JD_DIVISOR: usize = 4;

const LANGUAGE_KEYWORDS: &[&str] = &["python", "java", "javascript"];

const DEFAULT_STRENGTH: &str = "Resume structure is a good starting point.";
const DEFAULT_WEAKNESS: &str = "Can be further tailored to the specific job description.";
const DEFAULT_SUGGESTION: &str =
    "Refine bullet points to be more outcome‑focused (metrics, impact).";

/// Hiring recommendation attached to resume feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Recommend for interview")]
    RecommendForInterview,
    #[serde(rename = "Suggest improvements before interview")]
    SuggestImprovements,
}

impl Recommendation {
    /// Maps a free-text recommendation (as written by an LLM) onto the two values.
    /// Anything that is not a clear positive recommendation counts as "improve first".
    pub fn from_text(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let negative = ["improve", "not recommend", "do not", "don't", "reject", "decline"]
            .iter()
            .any(|n| lowered.contains(n));
        if !negative && lowered.contains("recommend") {
            Recommendation::RecommendForInterview
        } else {
            Recommendation::SuggestImprovements
        }
    }
}

/// Structured resume feedback. Every list holds 1..=cap entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackResult {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    pub recommendation: Recommendation,
}

impl FeedbackResult {
    /// Builds a result that satisfies the list contract (fillers + truncation).
    pub fn normalized(
        strengths: Vec<String>,
        weaknesses: Vec<String>,
        suggestions: Vec<String>,
        recommendation: Recommendation,
    ) -> Self {
        Self {
            strengths: finalize_list(strengths, DEFAULT_STRENGTH, MAX_STRENGTHS),
            weaknesses: finalize_list(weaknesses, DEFAULT_WEAKNESS, MAX_WEAKNESSES),
            suggestions: finalize_list(suggestions, DEFAULT_SUGGESTION, MAX_SUGGESTIONS),
            recommendation,
        }
    }
}

/// Generates resume feedback from keyword overlap and length signals.
pub fn generate_feedback(resume_text: &str, job_description: &str) -> FeedbackResult {
    let resume_kw: BTreeSet<String> = salient_keywords(resume_text, FEEDBACK_KEYWORD_LIMIT)
        .into_iter()
        .collect();
    let jd_kw: BTreeSet<String> = salient_keywords(job_description, FEEDBACK_KEYWORD_LIMIT)
        .into_iter()
        .collect();

    // BTreeSet iteration is sorted, so both lists come out alphabetical
    let matched: Vec<&str> = resume_kw.intersection(&jd_kw).map(String::as_str).collect();
    let missing: Vec<&str> = jd_kw.difference(&resume_kw).map(String::as_str).collect();

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut suggestions = Vec::new();

    if resume_text.chars().count() > DETAILED_RESUME_CHARS {
        strengths.push("Resume provides good overall detail about experience.".to_string());
    } else {
        weaknesses
            .push("Resume is quite short; add more detail on projects and impact.".to_string());
        suggestions.push(
            "Add 2–3 bullet points per role describing your concrete achievements.".to_string(),
        );
    }

    if matched.is_empty() {
        weaknesses.push(
            "Very little overlap between resume skills and job description keywords.".to_string(),
        );
    } else {
        let top: Vec<&str> = matched.iter().take(5).copied().collect();
        strengths.push(format!(
            "Resume mentions several key skills from the JD such as {}.",
            top.join(", ")
        ));
    }

    if !missing.is_empty() {
        let top: Vec<&str> = missing.iter().take(6).copied().collect();
        suggestions.push(format!(
            "Highlight or add experience related to: {}.",
            top.join(", ")
        ));
    }

    if LANGUAGE_KEYWORDS.iter().any(|l| resume_kw.contains(*l)) {
        strengths.push("Technical stack is clearly listed (programming languages / tools).".to_string());
    }

    let lowered = resume_text.to_lowercase();
    if !lowered.contains("team") && !lowered.contains("collaborat") {
        suggestions
            .push("Mention collaboration, teamwork, or cross‑functional experience.".to_string());
    }

    let recommendation = recommend(matched.len(), jd_kw.len());

    FeedbackResult::normalized(strengths, weaknesses, suggestions, recommendation)
}

fn recommend(matched: usize, jd_keywords: usize) -> Recommendation {
    let threshold = RECOMMEND_MIN_MATCHED.max(jd_keywords / RECOMMEND_JD_DIVISOR);
    if matched > 0 && matched >= threshold {
        Recommendation::RecommendForInterview
    } else {
        Recommendation::SuggestImprovements
    }
}
