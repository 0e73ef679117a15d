//! DOCX assembly with docx-rs — a bold heading paragraph per populated
//! field, body lines as plain paragraphs. Layout templates only affect the
//! PDF output; DOCX keeps the generic headed form.

use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run};

use crate::errors::AppError;
use crate::render::RenderFields;

/// Heading size in half-points (14pt).
const HEADING_SIZE: usize = 28;

pub fn render(fields: &RenderFields) -> Result<Vec<u8>, AppError> {
    let mut docx = Docx::new();

    for (heading, value) in labeled_fields(fields) {
        if value.is_empty() {
            continue;
        }
        docx = docx.add_paragraph(
            Paragraph::new().add_run(Run::new().add_text(heading).bold().size(HEADING_SIZE)),
        );
        for line in value.split('\n') {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
        }
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("DOCX packing failed: {e}")))?;
    Ok(buffer.into_inner())
}

fn labeled_fields(fields: &RenderFields) -> Vec<(&'static str, &str)> {
    let mut labeled = vec![
        ("Name", fields.name.as_str()),
        ("Email", fields.email.as_str()),
        ("Phone", fields.phone.as_str()),
        ("Education", fields.education.as_str()),
        ("Experience", fields.experience.as_str()),
        ("Skills", fields.skills.as_str()),
    ];
    if let Some(certifications) = fields.certifications.as_deref() {
        labeled.push(("Certifications", certifications));
    }
    if let Some(achievements) = fields.achievements.as_deref() {
        labeled.push(("Achievements", achievements));
    }
    labeled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_produces_a_zip_container() {
        let fields = RenderFields {
            name: "Jane Doe".to_string(),
            skills: "rust".to_string(),
            ..RenderFields::default()
        };
        let bytes = render(&fields).unwrap();
        // DOCX is a zip archive: PK magic
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_empty_fields_are_skipped() {
        let everything_empty = render(&RenderFields::default()).unwrap();
        let one_field = render(&RenderFields {
            experience: "Shipped a compiler".to_string(),
            ..RenderFields::default()
        })
        .unwrap();
        // The populated document carries more content
        assert!(one_field.len() > everything_empty.len());
    }
}
