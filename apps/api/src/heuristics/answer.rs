//! Heuristic scoring of a single interview answer.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::heuristics::salient::{finalize_list, salient_keywords};

pub const MIN_ANSWER_SCORE: u8 = 1;
pub const MAX_ANSWER_SCORE: u8 = 10;

pub const MAX_STRENGTHS: usize = 3;
pub const MAX_WEAKNESSES: usize = 3;
pub const MAX_SUGGESTIONS: usize = 2;

const ANSWER_KEYWORD_LIMIT: usize = 20;
/// Answers with at least this many words count as detailed.
const DETAILED_ANSWER_WORDS: usize = 20;

const DEFAULT_STRENGTH: &str =
    "Good starting point; can be refined with more structure and examples.";
const DEFAULT_WEAKNESS: &str =
    "Could be more structured (Situation, Task, Action, Result) for clarity.";
const DEFAULT_SUGGESTION: &str =
    "Practice answering using a clear structure and include specific metrics where possible.";

pub const BREVITY_WEAKNESS: &str =
    "Answer is very brief; interviewer may need to ask many follow‑up questions.";
pub const EXPAND_SUGGESTION: &str =
    "Expand your answers with context, actions you took, and concrete results.";

/// Evaluation of one interview answer. `score` is always within 1..=10 and
/// every list holds 1..=cap entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerEvaluation {
    pub score: u8,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

impl AnswerEvaluation {
    /// Builds an evaluation that satisfies the contract: score clamped, lists filled and truncated.
    pub fn normalized(
        score: i64,
        strengths: Vec<String>,
        weaknesses: Vec<String>,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            score: score.clamp(MIN_ANSWER_SCORE as i64, MAX_ANSWER_SCORE as i64) as u8,
            strengths: finalize_list(strengths, DEFAULT_STRENGTH, MAX_STRENGTHS),
            weaknesses: finalize_list(weaknesses, DEFAULT_WEAKNESS, MAX_WEAKNESSES),
            suggestions: finalize_list(suggestions, DEFAULT_SUGGESTION, MAX_SUGGESTIONS),
        }
    }
}

/// Scores an answer by length, JD keyword overlap and first-person/team language.
/// The question itself does not influence the heuristic score.
pub fn evaluate_answer(
    _question: &str,
    answer_text: &str,
    _resume_text: &str,
    job_description: &str,
) -> AnswerEvaluation {
    let text = answer_text.trim();
    let words = text.split_whitespace().count();

    let score = match words {
        0 => 1,
        1..=19 => 4,
        20..=59 => 7,
        _ => 9,
    };

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut suggestions = Vec::new();

    if words >= DETAILED_ANSWER_WORDS {
        strengths.push(
            "Provides a reasonably detailed explanation instead of a one‑line answer.".to_string(),
        );
    } else {
        weaknesses.push(BREVITY_WEAKNESS.to_string());
        suggestions.push(EXPAND_SUGGESTION.to_string());
    }

    let jd_kw: BTreeSet<String> = salient_keywords(job_description, ANSWER_KEYWORD_LIMIT)
        .into_iter()
        .collect();
    let answer_kw: BTreeSet<String> = salient_keywords(text, ANSWER_KEYWORD_LIMIT)
        .into_iter()
        .collect();
    let overlap: Vec<&str> = jd_kw
        .intersection(&answer_kw)
        .take(4)
        .map(String::as_str)
        .collect();

    if overlap.is_empty() {
        suggestions.push(
            "Try to mention skills and tools that are highlighted in the job description."
                .to_string(),
        );
    } else {
        strengths.push(format!(
            "Connects the answer to job‑relevant skills such as {}.",
            overlap.join(", ")
        ));
    }

    if speaks_personally(text) && mentions_team(text) {
        strengths.push(
            "Balances talking about personal contribution with team collaboration.".to_string(),
        );
    }

    AnswerEvaluation::normalized(score, strengths, weaknesses, suggestions)
}

fn lowercase_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

fn speaks_personally(text: &str) -> bool {
    lowercase_words(text).any(|w| matches!(w.as_str(), "i" | "my" | "me"))
}

fn mentions_team(text: &str) -> bool {
    lowercase_words(text).any(|w| w == "we") || text.to_lowercase().contains("team")
}

#[cfg(test)]
mod tests {
    use super::*;

    const JD: &str = "Backend engineer: Rust, Postgres, Kubernetes";

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_empty_answer_scores_one_with_brevity_feedback() {
        let eval = evaluate_answer("Why us?", "", "", JD);
        assert_eq!(eval.score, 1);
        assert!(eval.weaknesses.contains(&BREVITY_WEAKNESS.to_string()));
        assert!(eval.suggestions.contains(&EXPAND_SUGGESTION.to_string()));
    }

    #[test]
    fn test_messages_keep_nonbreaking_hyphen() {
        assert!(BREVITY_WEAKNESS.contains("follow\u{2011}up"));
        let eval = evaluate_answer("q", &format!("{} rust", words(25)), "", "Rust");
        assert!(eval.strengths[0].ends_with("one\u{2011}line answer."));
        assert!(eval.strengths[1].contains("job\u{2011}relevant skills such as rust"));
    }

    #[test]
    fn test_score_ladder() {
        assert_eq!(evaluate_answer("q", "   ", "", "").score, 1);
        assert_eq!(evaluate_answer("q", &words(1), "", "").score, 4);
        assert_eq!(evaluate_answer("q", &words(19), "", "").score, 4);
        assert_eq!(evaluate_answer("q", &words(20), "", "").score, 7);
        assert_eq!(evaluate_answer("q", &words(59), "", "").score, 7);
        assert_eq!(evaluate_answer("q", &words(60), "", "").score, 9);
    }

    #[test]
    fn test_detailed_answer_is_a_strength() {
        let eval = evaluate_answer("q", &words(25), "", "");
        assert!(eval.strengths[0].contains("reasonably detailed"));
        assert!(!eval.weaknesses.contains(&BREVITY_WEAKNESS.to_string()));
    }

    #[test]
    fn test_jd_overlap_named_in_strengths() {
        let eval = evaluate_answer("q", "I tuned Postgres and shipped Rust services", "", JD);
        assert!(eval
            .strengths
            .iter()
            .any(|s| s.contains("postgres, rust")));
    }

    #[test]
    fn test_no_overlap_suggests_jd_skills() {
        let eval = evaluate_answer("q", &words(30), "", JD);
        assert!(eval
            .suggestions
            .iter()
            .any(|s| s.contains("highlighted in the job description")));
    }

    #[test]
    fn test_personal_and_team_language() {
        let eval = evaluate_answer("q", "I led the migration while we paired daily", "", "");
        assert!(eval.strengths.iter().any(|s| s.contains("team collaboration")));

        let eval = evaluate_answer("q", "The migration was done quickly", "", "");
        assert!(!eval.strengths.iter().any(|s| s.contains("team collaboration")));
    }

    #[test]
    fn test_language_rule_is_word_level() {
        let balanced = |answer: &str| {
            evaluate_answer("q", answer, "", "")
                .strengths
                .iter()
                .any(|s| s.contains("team collaboration"))
        };
        // punctuation and contractions still split into words
        assert!(balanced("I'm proud of what we."));
        assert!(balanced("My part of the Team effort"));
        // letters inside other words are not first-person or team language
        assert!(!balanced("Italy was wet"));
        assert!(!balanced("I did it alone, weekend after weekend"));
        assert!(!balanced("we shipped it together"));
    }

    #[test]
    fn test_lists_within_caps_for_any_input() {
        let long = words(100);
        for answer in ["", "x", long.as_str(), "I and my team used Rust and Postgres"] {
            let eval = evaluate_answer("q", answer, "resume", JD);
            assert!((1..=MAX_STRENGTHS).contains(&eval.strengths.len()));
            assert!((1..=MAX_WEAKNESSES).contains(&eval.weaknesses.len()));
            assert!((1..=MAX_SUGGESTIONS).contains(&eval.suggestions.len()));
            assert!((MIN_ANSWER_SCORE..=MAX_ANSWER_SCORE).contains(&eval.score));
        }
    }

    #[test]
    fn test_normalized_clamps_score() {
        assert_eq!(AnswerEvaluation::normalized(42, vec![], vec![], vec![]).score, 10);
        assert_eq!(AnswerEvaluation::normalized(-3, vec![], vec![], vec![]).score, 1);
    }
}
