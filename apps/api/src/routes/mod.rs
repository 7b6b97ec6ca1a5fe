pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ats::handlers::handle_ats_score;
use crate::evaluation::handlers::{
    handle_evaluate_answer, handle_interview_questions, handle_resume_feedback,
};
use crate::resume_parser::handlers::handle_parse_resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume intake + ATS
        .route("/api/parse-resume", post(handle_parse_resume))
        .route("/api/ats-score", post(handle_ats_score))
        // LLM-backed, heuristic fallback
        .route("/api/resume-feedback", post(handle_resume_feedback))
        .route("/api/interview/questions", post(handle_interview_questions))
        .route("/api/interview/evaluate", post(handle_evaluate_answer))
        .with_state(state)
}
