//! Resume parsing — PDF bytes to cleaned plain text.

pub mod handlers;

use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ResumeParseError {
    #[error("Only PDF files are allowed")]
    NotPdf,

    #[error("Failed to parse PDF: {0}")]
    Pdf(String),
}

/// True when the upload name carries a `.pdf` extension (any case).
pub fn is_pdf_filename(file_name: &str) -> bool {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Extracts and cleans the text of a PDF document.
pub fn extract_text_from_pdf(file_data: &[u8]) -> Result<String, ResumeParseError> {
    match pdf_extract::extract_text_from_mem(file_data) {
        Ok(text) => {
            let cleaned = clean_resume_text(&text);
            info!("PDF extraction successful: {} characters", cleaned.len());
            Ok(cleaned)
        }
        Err(e) => {
            warn!("PDF extraction failed: {e}");
            Err(ResumeParseError::Pdf(e.to_string()))
        }
    }
}

/// Drops NUL artifacts and collapses all whitespace runs to single spaces.
pub fn clean_resume_text(raw: &str) -> String {
    raw.replace('\0', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_collapses_whitespace() {
        let raw = "  Jane Doe\n\n  Rust   Engineer\t\r\nBerlin  ";
        assert_eq!(clean_resume_text(raw), "Jane Doe Rust Engineer Berlin");
    }

    #[test]
    fn test_clean_strips_nul_bytes() {
        assert_eq!(clean_resume_text("Py\0thon \0 dev"), "Python dev");
    }

    #[test]
    fn test_clean_empty() {
        assert_eq!(clean_resume_text(""), "");
        assert_eq!(clean_resume_text(" \n\0 "), "");
    }

    #[test]
    fn test_is_pdf_filename() {
        assert!(is_pdf_filename("resume.pdf"));
        assert!(is_pdf_filename("Resume.PDF"));
        assert!(!is_pdf_filename("resume.docx"));
        assert!(!is_pdf_filename("pdf"));
        assert!(!is_pdf_filename(""));
    }

    #[test]
    fn test_garbage_bytes_are_a_parse_error() {
        let result = extract_text_from_pdf(b"definitely not a pdf");
        assert!(matches!(result, Err(ResumeParseError::Pdf(_))));
    }
}
