//! Document text extraction — PDF (with per-page OCR fallback) and DOCX.

pub mod docx;
pub mod fields;
pub mod ocr;
pub mod pdf;

use crate::errors::AppError;

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Declared format of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Detects the format from the uploaded file name and declared MIME type.
    /// Anything that is neither PDF nor DOCX is rejected.
    pub fn detect(filename: &str, content_type: &str) -> Result<Self, AppError> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        if extension == "pdf" || content_type == "application/pdf" {
            return Ok(Self::Pdf);
        }
        if extension == "docx" || content_type == DOCX_MIME {
            return Ok(Self::Docx);
        }
        Err(AppError::UnsupportedFormat(format!(
            "{filename} ({content_type})"
        )))
    }
}

/// Extracts plain text from a document, dispatching on format.
/// Fails with `AppError::Extraction` when no text can be recovered.
pub async fn extract_document(data: Vec<u8>, format: DocumentFormat) -> Result<String, AppError> {
    match format {
        DocumentFormat::Pdf => pdf::extract_pdf(data).await,
        DocumentFormat::Docx => docx::extract_docx(data).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_pdf_by_extension() {
        let format = DocumentFormat::detect("resume.PDF", "application/octet-stream").unwrap();
        assert_eq!(format, DocumentFormat::Pdf);
    }

    #[test]
    fn test_detect_pdf_by_mime() {
        let format = DocumentFormat::detect("upload", "application/pdf").unwrap();
        assert_eq!(format, DocumentFormat::Pdf);
    }

    #[test]
    fn test_detect_docx_by_extension() {
        let format = DocumentFormat::detect("cv.docx", "").unwrap();
        assert_eq!(format, DocumentFormat::Docx);
    }

    #[test]
    fn test_detect_rejects_unknown_format() {
        let result = DocumentFormat::detect("resume.txt", "text/plain");
        assert!(matches!(result, Err(AppError::UnsupportedFormat(_))));
    }
}
