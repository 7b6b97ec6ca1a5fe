//! Salient keyword extraction for the heuristic evaluators.
//!
//! Unlike the ATS tokenizer, this keeps `+ - # .` inside a word (`c++`, `c#`,
//! `ci-cd`), drops résumé boilerplate ("experience", "skills", ...) and returns
//! distinct keywords in first-seen order rather than by frequency.

use std::sync::LazyLock;

use regex::Regex;

static SALIENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-z][a-z0-9+\-#.]+").expect("salient pattern is a valid regex")
});

const DOMAIN_STOPWORDS: &[&str] = &[
    "and",
    "or",
    "the",
    "for",
    "with",
    "from",
    "this",
    "that",
    "using",
    "experience",
    "knowledge",
    "skills",
    "ability",
];

/// Returns up to `limit` distinct salient keywords of `text`, in first-seen order.
pub fn salient_keywords(text: &str, limit: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut out: Vec<String> = Vec::new();

    for m in SALIENT_PATTERN.find_iter(&lowered) {
        if out.len() >= limit {
            break;
        }
        let word = m.as_str();
        if word.len() <= 2 || DOMAIN_STOPWORDS.contains(&word) {
            continue;
        }
        if !out.iter().any(|w| w == word) {
            out.push(word.to_string());
        }
    }

    out
}

/// Enforces the list contract shared by every evaluator output:
/// at least one entry (`filler` when empty) and at most `cap` entries.
pub fn finalize_list(mut items: Vec<String>, filler: &str, cap: usize) -> Vec<String> {
    if items.is_empty() {
        items.push(filler.to_string());
    }
    items.truncate(cap.max(1));
    items
}
