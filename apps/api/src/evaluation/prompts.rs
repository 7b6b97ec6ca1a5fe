// Prompt templates for the evaluation flows. Placeholders are filled in one pass;
// every text field is cut to its character budget first to bound request size.

use crate::llm_client::prompts::{fill_template, truncate_chars, JSON_ONLY_INSTRUCTION};

/// (job description, resume) character budgets per call.
pub const FEEDBACK_BUDGET: (usize, usize) = (4000, 8000);
pub const QUESTIONS_BUDGET: (usize, usize) = (2500, 4000);
pub const ANSWER_BUDGET: (usize, usize) = (1500, 2000);

const FEEDBACK_PROMPT_TEMPLATE: &str = r#"You are an expert HR evaluator. Analyze this resume against the given Job Description.

JOB DESCRIPTION:
{job_description}

RESUME TEXT:
{resume_text}

Return a JSON object with exactly these keys:
- "strengths": list of 3-5 resume strengths (short strings)
- "weaknesses": list of 2-4 weaknesses or gaps (short strings)
- "suggestions": list of 3-5 actionable improvement suggestions (short strings)
- "recommendation": either "Recommend for interview" or "Suggest improvements before interview"
"#;

const QUESTIONS_PROMPT_TEMPLATE: &str = r#"You are an expert interviewer. Based on the resume and job description, generate exactly {count} short interview questions.
One question per line. Mix: technical skills, experience, scenario-based. Keep each question under 2 lines.

JOB DESCRIPTION (excerpt):
{job_description}

RESUME (excerpt):
{resume_text}

Output only the questions, one per line, no numbering or bullets."#;

const ANSWER_PROMPT_TEMPLATE: &str = r#"You are an interview evaluator. Score the candidate's answer.

QUESTION: {question}

CANDIDATE'S ANSWER: {answer_text}

Context - Job Description (excerpt): {job_description}
Context - Resume (excerpt): {resume_text}

Return a JSON object with exactly these keys:
- "score": integer from 1 to 10
- "strengths": list of 1-3 short points (what was good)
- "weaknesses": list of 1-3 short points (what could improve)
- "suggestions": list of 1-2 short actionable suggestions
"#;

pub fn feedback_prompt(resume_text: &str, job_description: &str) -> String {
    let (jd_budget, resume_budget) = FEEDBACK_BUDGET;
    let prompt = fill_template(
        FEEDBACK_PROMPT_TEMPLATE,
        &[
            ("job_description", truncate_chars(job_description, jd_budget)),
            ("resume_text", truncate_chars(resume_text, resume_budget)),
        ],
    );
    format!("{prompt}\n{JSON_ONLY_INSTRUCTION}")
}

pub fn questions_prompt(resume_text: &str, job_description: &str, count: usize) -> String {
    let (jd_budget, resume_budget) = QUESTIONS_BUDGET;
    let count = count.to_string();
    fill_template(
        QUESTIONS_PROMPT_TEMPLATE,
        &[
            ("count", count.as_str()),
            ("job_description", truncate_chars(job_description, jd_budget)),
            ("resume_text", truncate_chars(resume_text, resume_budget)),
        ],
    )
}

pub fn answer_prompt(
    question: &str,
    answer_text: &str,
    resume_text: &str,
    job_description: &str,
) -> String {
    let (jd_budget, resume_budget) = ANSWER_BUDGET;
    let prompt = fill_template(
        ANSWER_PROMPT_TEMPLATE,
        &[
            ("question", question),
            ("answer_text", answer_text),
            ("job_description", truncate_chars(job_description, jd_budget)),
            ("resume_text", truncate_chars(resume_text, resume_budget)),
        ],
    );
    format!("{prompt}\n{JSON_ONLY_INSTRUCTION}")
}
