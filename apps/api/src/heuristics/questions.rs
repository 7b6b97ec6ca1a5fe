//! Heuristic interview questions anchored on JD/resume keywords.

use crate::heuristics::salient::salient_keywords;

const QUESTION_KEYWORD_LIMIT: usize = 20;

const BEHAVIOURAL_QUESTIONS: &[&str] = &[
    "Describe a challenging problem you solved recently and how you approached it.",
    "How do you stay up to date with new tools, technologies or best practices?",
    "What attracts you to this specific role and company, and how do you see yourself adding value?",
];

/// Returns between 1 and `count` questions: up to two keyword-anchored questions
/// followed by fixed behavioural ones.
pub fn generate_questions(resume_text: &str, job_description: &str, count: usize) -> Vec<String> {
    let mut keywords = salient_keywords(job_description, QUESTION_KEYWORD_LIMIT);
    for kw in salient_keywords(resume_text, QUESTION_KEYWORD_LIMIT) {
        if !keywords.contains(&kw) {
            keywords.push(kw);
        }
    }

    let mut questions = Vec::with_capacity(2 + BEHAVIOURAL_QUESTIONS.len());

    if let Some(first) = keywords.first() {
        questions.push(format!(
            "Can you walk me through your most relevant experience with {first} for this role?"
        ));
    }
    if let Some(second) = keywords.get(1) {
        questions.push(format!(
            "Tell me about a project where you used {second} and what the outcome was."
        ));
    }
    questions.extend(BEHAVIOURAL_QUESTIONS.iter().map(|q| q.to_string()));

    questions.truncate(count.max(1));
    questions
}
