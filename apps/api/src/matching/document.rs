//! Resume text recovery from an uploaded document.
//!
//! PDF uploads go through `pdf-extract`; anything else must already be
//! UTF-8 plain text.

use crate::errors::AppError;

/// Converts an uploaded resume payload into plain text.
pub fn extract_resume_text(data: &[u8], filename: Option<&str>) -> Result<String, AppError> {
    if data.is_empty() {
        return Err(AppError::Validation("Resume file is empty".to_string()));
    }

    let text = if looks_like_pdf(data, filename) {
        pdf_extract::extract_text_from_mem(data)
            .map_err(|e| AppError::Document(format!("Could not read PDF resume: {e}")))?
    } else {
        String::from_utf8(data.to_vec()).map_err(|_| {
            AppError::Document("Resume file must be a PDF or UTF-8 plain text".to_string())
        })?
    };

    if text.trim().is_empty() {
        return Err(AppError::Document(
            "No text could be extracted from the resume".to_string(),
        ));
    }

    Ok(text)
}

fn looks_like_pdf(data: &[u8], filename: Option<&str>) -> bool {
    data.starts_with(b"%PDF")
        || filename
            .map(|name| name.to_ascii_lowercase().ends_with(".pdf"))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        let text = extract_resume_text(b"5 years React experience", Some("resume.txt")).unwrap();
        assert_eq!(text, "5 years React experience");
    }

    #[test]
    fn test_empty_payload_is_rejected() {
        assert!(extract_resume_text(b"", None).is_err());
    }

    #[test]
    fn test_whitespace_only_payload_is_rejected() {
        assert!(extract_resume_text(b"   \n\t  ", None).is_err());
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        assert!(extract_resume_text(&[0xff, 0xfe, 0x01], Some("resume.doc")).is_err());
    }

    #[test]
    fn test_pdf_detection_by_magic_and_filename() {
        assert!(looks_like_pdf(b"%PDF-1.7 ...", None));
        assert!(looks_like_pdf(b"anything", Some("Resume.PDF")));
        assert!(!looks_like_pdf(b"plain text", Some("resume.txt")));
        assert!(!looks_like_pdf(b"plain text", None));
    }
}
