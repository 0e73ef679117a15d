//! Template-based résumé rendering.
//!
//! The registry maps template names to fixed single-page layouts; PDF output
//! is drawn with lopdf, DOCX output is assembled with docx-rs. Unknown
//! template names are reported upward with the valid names.

pub mod docx;
pub mod pdf;

use crate::errors::AppError;

/// The selectable résumé layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Modern,
    Classic,
    Creative,
    Executive,
    Minimalist,
}

impl TemplateKind {
    /// Valid template names, as accepted by `parse`.
    pub const NAMES: &'static [&'static str] =
        &["modern", "classic", "creative", "executive", "minimalist"];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "modern" => Some(Self::Modern),
            "classic" => Some(Self::Classic),
            "creative" => Some(Self::Creative),
            "executive" => Some(Self::Executive),
            "minimalist" => Some(Self::Minimalist),
            _ => None,
        }
    }
}

/// Output document encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    Pdf,
    Docx,
}

impl RenderFormat {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }
}

/// Sanitized form fields a template draws from.
#[derive(Debug, Clone, Default)]
pub struct RenderFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub education: String,
    pub experience: String,
    pub skills: String,
    pub certifications: Option<String>,
    pub achievements: Option<String>,
}

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

impl RenderFields {
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Anonymous"
        } else {
            &self.name
        }
    }

    pub fn contact_line(&self) -> String {
        format!("{} | {}", or_na(&self.email), or_na(&self.phone))
    }

    /// Section headings and bodies in layout order. The executive layout
    /// appends certifications and achievements when supplied.
    pub fn sections(&self, template: TemplateKind) -> Vec<(&'static str, &str)> {
        let mut sections = vec![
            ("Education", or_na(&self.education)),
            ("Experience", or_na(&self.experience)),
            ("Skills", or_na(&self.skills)),
        ];
        if template == TemplateKind::Executive {
            if let Some(certifications) = self.certifications.as_deref() {
                sections.push(("Certifications", or_na(certifications)));
            }
            if let Some(achievements) = self.achievements.as_deref() {
                sections.push(("Achievements", or_na(achievements)));
            }
        }
        sections
    }
}

/// Rendered document plus its HTTP metadata.
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub content_disposition: &'static str,
}

pub fn render(
    template: TemplateKind,
    format: RenderFormat,
    fields: &RenderFields,
) -> Result<RenderedDocument, AppError> {
    match format {
        RenderFormat::Pdf => Ok(RenderedDocument {
            bytes: pdf::render(template, fields)?,
            content_type: "application/pdf",
            content_disposition: "attachment; filename=resume.pdf",
        }),
        RenderFormat::Docx => Ok(RenderedDocument {
            bytes: docx::render(fields)?,
            content_type:
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            content_disposition: "attachment; filename=resume.docx",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_all_registered_names() {
        for name in TemplateKind::NAMES {
            assert!(TemplateKind::parse(name).is_some(), "{name} failed to parse");
        }
    }

    #[test]
    fn test_parse_rejects_unknown_template() {
        assert!(TemplateKind::parse("brutalist").is_none());
    }

    #[test]
    fn test_render_format_parse() {
        assert_eq!(RenderFormat::parse("pdf"), Some(RenderFormat::Pdf));
        assert_eq!(RenderFormat::parse("docx"), Some(RenderFormat::Docx));
        assert_eq!(RenderFormat::parse("odt"), None);
    }

    #[test]
    fn test_empty_fields_fall_back_to_placeholders() {
        let fields = RenderFields::default();
        assert_eq!(fields.display_name(), "Anonymous");
        assert_eq!(fields.contact_line(), "N/A | N/A");
        let sections = fields.sections(TemplateKind::Modern);
        assert!(sections.iter().all(|(_, body)| *body == "N/A"));
    }

    #[test]
    fn test_executive_template_gains_extra_sections() {
        let fields = RenderFields {
            certifications: Some("AWS SA".to_string()),
            achievements: Some("Shipped v1".to_string()),
            ..RenderFields::default()
        };
        assert_eq!(fields.sections(TemplateKind::Modern).len(), 3);
        assert_eq!(fields.sections(TemplateKind::Executive).len(), 5);
    }
}
