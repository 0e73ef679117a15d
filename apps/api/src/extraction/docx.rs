//! DOCX text extraction — paragraph texts concatenated in document order.

use docx_rs::read_docx;

use crate::errors::AppError;

pub async fn extract_docx(data: Vec<u8>) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || extract_paragraphs(&data))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("DOCX extraction task failed: {e}")))??;

    if text.trim().is_empty() {
        return Err(AppError::Extraction(
            "no text recoverable from DOCX".to_string(),
        ));
    }
    Ok(text)
}

fn extract_paragraphs(data: &[u8]) -> Result<String, AppError> {
    let docx =
        read_docx(data).map_err(|e| AppError::Extraction(format!("invalid DOCX: {e}")))?;

    let mut text = String::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            for child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = child {
                    for child in run.children {
                        if let docx_rs::RunChild::Text(t) = child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{docx::render, RenderFields};

    #[test]
    fn test_extract_paragraphs_rejects_garbage() {
        let result = extract_paragraphs(b"not a zip archive");
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }

    #[tokio::test]
    async fn test_extract_docx_roundtrips_rendered_document() {
        let fields = RenderFields {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            phone: "555-0199".to_string(),
            education: "Yale University".to_string(),
            experience: "COBOL compiler design".to_string(),
            skills: "compilers".to_string(),
            certifications: None,
            achievements: None,
        };
        let bytes = render(&fields).unwrap();
        let text = extract_docx(bytes).await.unwrap();
        assert!(text.contains("Grace Hopper"));
        assert!(text.contains("COBOL compiler design"));
    }
}
