//! Axum route handlers for resume feedback and the interview flow.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::heuristics::answer::AnswerEvaluation;
use crate::heuristics::feedback::FeedbackResult;
use crate::models::requests::{EvaluateAnswerRequest, QuestionsRequest, ResumeJdRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<String>,
}

/// POST /api/resume-feedback
pub async fn handle_resume_feedback(
    State(state): State<AppState>,
    Json(request): Json<ResumeJdRequest>,
) -> Result<Json<FeedbackResult>, AppError> {
    request.validate()?;

    let feedback = state
        .evaluator
        .resume_feedback(&request.resume_text, &request.job_description)
        .await;

    Ok(Json(feedback))
}

/// POST /api/interview/questions
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    Json(request): Json<QuestionsRequest>,
) -> Result<Json<QuestionsResponse>, AppError> {
    request.validate()?;

    let questions = state
        .evaluator
        .interview_questions(
            &request.resume_text,
            &request.job_description,
            request.question_count(),
        )
        .await;

    Ok(Json(QuestionsResponse { questions }))
}

/// POST /api/interview/evaluate
///
/// Never rejects empty text: an empty answer simply scores 1.
pub async fn handle_evaluate_answer(
    State(state): State<AppState>,
    Json(request): Json<EvaluateAnswerRequest>,
) -> Json<AnswerEvaluation> {
    let evaluation = state
        .evaluator
        .evaluate_answer(
            &request.question,
            &request.answer_text,
            &request.resume_text,
            &request.job_description,
        )
        .await;

    Json(evaluation)
}
