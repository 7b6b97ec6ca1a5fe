//! Tokenizer — normalizes free text into lowercase keyword tokens for ATS matching.
//!
//! A token is a maximal run of ASCII letters/digits, optionally joined by single
//! dots (`node.js`, `v2.1`). Stopwords and single-character tokens are dropped.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-z0-9]+(?:\.[a-z0-9]+)*").expect("token pattern is a valid regex")
});

/// English function words and pronouns excluded from keyword matching.
pub const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "must", "shall", "can", "need",
    "this", "that", "these", "those", "it", "its", "i", "we", "you", "they", "he", "she", "his",
    "her", "their", "my", "our", "your",
];

fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Returns the normalized tokens of `text` in reading order (duplicates kept).
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|t| t.len() > 1 && !is_stopword(t))
        .map(str::to_string)
        .collect()
}

/// Returns the set of distinct tokens in `text`, for membership tests.
pub fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}
