//! Axum route handler for resume upload.

use axum::{extract::Multipart, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::resume_parser::{extract_text_from_pdf, is_pdf_filename, ResumeParseError};

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub text: String,
    pub success: bool,
}

/// POST /api/parse-resume
///
/// Accepts a multipart upload with a `file` field (PDF) and returns its cleaned text.
/// Extraction is CPU-bound and runs on the blocking pool.
pub async fn handle_parse_resume(
    mut multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        upload = Some((file_name, data));
        break;
    }

    let (file_name, data) =
        upload.ok_or_else(|| AppError::Validation("file field is required".to_string()))?;

    if !is_pdf_filename(&file_name) {
        return Err(ResumeParseError::NotPdf.into());
    }

    // pdf-extract can panic on malformed documents; a panicked task is a parse failure
    let text = tokio::task::spawn_blocking(move || extract_text_from_pdf(&data))
        .await
        .map_err(|e| ResumeParseError::Pdf(format!("extractor aborted: {e}")))??;

    Ok(Json(ParseResumeResponse {
        text,
        success: true,
    }))
}
