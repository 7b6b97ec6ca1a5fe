//! Keyword extraction — ranks JD tokens by frequency.

use std::collections::HashMap;

use crate::ats::tokenizer::tokenize;

/// Default cap on the number of keywords taken from a job description.
pub const DEFAULT_MAX_KEYWORDS: usize = 80;

/// Extracts up to `max_keywords` distinct tokens from `job_description`,
/// ordered by descending frequency. Equal counts keep first-occurrence order.
pub fn extract_keywords(job_description: &str, max_keywords: usize) -> Vec<String> {
    let tokens = tokenize(job_description);

    // first-seen order, with a parallel count per distinct token
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in &tokens {
        let count = counts.entry(token.as_str()).or_insert(0);
        if *count == 0 {
            order.push(token.as_str());
        }
        *count += 1;
    }

    // sort_by is stable, so ties stay in first-seen order
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));

    order
        .into_iter()
        .take(max_keywords)
        .map(str::to_string)
        .collect()
}
