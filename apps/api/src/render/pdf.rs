//! PDF layout drawing with lopdf.
//!
//! One US-letter page, built from raw text operations. Fonts, sizes, and
//! heading colors vary per template; bodies are drawn line by line.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

use crate::errors::AppError;
use crate::render::{RenderFields, TemplateKind};

const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;
const MARGIN_X: f32 = 50.0;

/// Standard Type1 fonts registered in every page's resources.
const FONTS: [(&str, &str); 5] = [
    ("F1", "Helvetica"),
    ("F2", "Helvetica-Bold"),
    ("F3", "Helvetica-Oblique"),
    ("F4", "Times-Roman"),
    ("F5", "Times-Bold"),
];

fn font_key(base_font: &str) -> &'static str {
    match base_font {
        "Helvetica-Bold" => "F2",
        "Helvetica-Oblique" => "F3",
        "Times-Roman" => "F4",
        "Times-Bold" => "F5",
        _ => "F1",
    }
}

struct TemplateStyle {
    name_font: &'static str,
    name_size: f32,
    contact_font: &'static str,
    heading_font: &'static str,
    heading_size: f32,
    body_font: &'static str,
    /// RGB fill for section headings; None = black.
    heading_color: Option<(f32, f32, f32)>,
    /// Gray fill for section headings (minimalist layout).
    heading_gray: Option<f32>,
}

fn style(template: TemplateKind) -> TemplateStyle {
    match template {
        TemplateKind::Modern => TemplateStyle {
            name_font: "Helvetica-Bold",
            name_size: 18.0,
            contact_font: "Helvetica",
            heading_font: "Helvetica-Bold",
            heading_size: 14.0,
            body_font: "Helvetica",
            heading_color: None,
            heading_gray: None,
        },
        TemplateKind::Classic => TemplateStyle {
            name_font: "Times-Bold",
            name_size: 18.0,
            contact_font: "Times-Roman",
            heading_font: "Times-Bold",
            heading_size: 14.0,
            body_font: "Times-Roman",
            heading_color: None,
            heading_gray: None,
        },
        TemplateKind::Creative => TemplateStyle {
            name_font: "Helvetica-Bold",
            name_size: 20.0,
            contact_font: "Helvetica-Oblique",
            heading_font: "Helvetica-Bold",
            heading_size: 16.0,
            body_font: "Helvetica",
            heading_color: Some((0.2, 0.4, 0.8)),
            heading_gray: None,
        },
        TemplateKind::Executive => TemplateStyle {
            name_font: "Helvetica-Bold",
            name_size: 22.0,
            contact_font: "Helvetica",
            heading_font: "Helvetica-Bold",
            heading_size: 16.0,
            body_font: "Helvetica",
            heading_color: None,
            heading_gray: None,
        },
        TemplateKind::Minimalist => TemplateStyle {
            name_font: "Helvetica-Bold",
            name_size: 18.0,
            contact_font: "Helvetica",
            heading_font: "Helvetica",
            heading_size: 14.0,
            body_font: "Helvetica",
            heading_color: None,
            heading_gray: Some(0.2),
        },
    }
}

pub fn render(template: TemplateKind, fields: &RenderFields) -> Result<Vec<u8>, AppError> {
    let style = style(template);
    let mut operations: Vec<Operation> = Vec::new();
    let mut y = PAGE_HEIGHT - 50.0;

    push_text(
        &mut operations,
        style.name_font,
        style.name_size,
        y,
        fields.display_name(),
    );
    y -= 20.0;
    push_text(
        &mut operations,
        style.contact_font,
        12.0,
        y,
        &fields.contact_line(),
    );
    y -= 30.0;

    for (heading, body) in fields.sections(template) {
        if let Some((r, g, b)) = style.heading_color {
            operations.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
        }
        if let Some(gray) = style.heading_gray {
            operations.push(Operation::new("g", vec![gray.into()]));
        }
        push_text(&mut operations, style.heading_font, style.heading_size, y, heading);
        if style.heading_color.is_some() {
            operations.push(Operation::new("rg", vec![0.into(), 0.into(), 0.into()]));
        }
        if style.heading_gray.is_some() {
            operations.push(Operation::new("g", vec![0.into()]));
        }
        y -= 20.0;

        for line in body.split('\n') {
            push_text(&mut operations, style.body_font, 12.0, y, line);
            y -= 16.0;
        }
        y -= 14.0;
    }

    build_document(operations)
}

fn push_text(operations: &mut Vec<Operation>, font: &str, size: f32, y: f32, text: &str) {
    operations.push(Operation::new("BT", vec![]));
    operations.push(Operation::new("Tf", vec![font_key(font).into(), size.into()]));
    operations.push(Operation::new("Td", vec![MARGIN_X.into(), y.into()]));
    operations.push(Operation::new("Tj", vec![Object::string_literal(text)]));
    operations.push(Operation::new("ET", vec![]));
}

fn build_document(operations: Vec<Operation>) -> Result<Vec<u8>, AppError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut font_dict = Dictionary::new();
    for (key, base_font) in FONTS {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => base_font,
        });
        font_dict.set(key, font_id);
    }
    let resources_id = doc.add_object(dictionary! {
        "Font" => Object::Dictionary(font_dict),
    });

    let content = Content { operations };
    let encoded = content
        .encode()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF content encoding failed: {e}")))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut std::io::Cursor::new(&mut bytes))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF serialization failed: {e}")))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> RenderFields {
        RenderFields {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-0101".to_string(),
            education: "BS Computer Science".to_string(),
            experience: "Built services\nRan migrations".to_string(),
            skills: "rust, sql".to_string(),
            certifications: None,
            achievements: None,
        }
    }

    #[test]
    fn test_render_produces_a_pdf_header() {
        for template in [
            TemplateKind::Modern,
            TemplateKind::Classic,
            TemplateKind::Creative,
            TemplateKind::Executive,
            TemplateKind::Minimalist,
        ] {
            let bytes = render(template, &fields()).unwrap();
            assert!(bytes.starts_with(b"%PDF"), "{template:?} missing header");
        }
    }

    #[test]
    fn test_rendered_pdf_reloads_with_one_page() {
        let bytes = render(TemplateKind::Modern, &fields()).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_rendered_text_is_extractable() {
        let bytes = render(TemplateKind::Executive, &fields()).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let text = doc.extract_text(&[1]).unwrap();
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("Experience"));
    }
}
