//! Axum route handler for ATS scoring.

use axum::Json;
use serde::Serialize;

use crate::ats::scorer::{compute_score, ScoreResult};
use crate::errors::AppError;
use crate::models::requests::ResumeJdRequest;

#[derive(Debug, Serialize)]
pub struct AtsScoreResponse {
    #[serde(flatten)]
    pub result: ScoreResult,
    /// Same list as `missing`, kept for clients that render it as "areas to improve".
    pub improvement_areas: Vec<String>,
}

/// POST /api/ats-score
///
/// Keyword-overlap score of a resume against a job description. Both texts are required.
pub async fn handle_ats_score(
    Json(request): Json<ResumeJdRequest>,
) -> Result<Json<AtsScoreResponse>, AppError> {
    request.validate()?;

    let result = compute_score(&request.resume_text, &request.job_description);
    tracing::debug!(
        "ATS score {} ({} matched, {} missing)",
        result.score,
        result.matched.len(),
        result.missing.len()
    );

    Ok(Json(AtsScoreResponse {
        improvement_areas: result.missing.clone(),
        result,
    }))
}
