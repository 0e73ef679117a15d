//! Shapes the suggest-content completion into section fields.
//!
//! The model is asked for labeled bullet lines ("- Education: ..."); this is
//! the same best-effort output shaping as the feedback formatter — missing
//! labels leave their section empty, nothing fails.

use crate::extraction::fields::sanitize_text;

const EXPERIENCE_BULLET_LIMIT: usize = 3;
const SKILLS_BULLET_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Education,
    Experience,
    Skills,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DraftSections {
    pub education: String,
    pub experience: String,
    pub skills: String,
}

/// Best-effort parse of the labeled bullet list. Bullets following a label
/// accrue to that label's section, capped per section; unlabeled text is
/// ignored.
pub fn parse_draft_sections(text: &str) -> DraftSections {
    let mut education = String::new();
    let mut experience: Vec<String> = Vec::new();
    let mut skills: Vec<String> = Vec::new();
    let mut current: Option<Section> = None;

    for line in text.lines() {
        let line = line.trim();
        if let Some(rest) = strip_label(line, "Education:") {
            education = rest.to_string();
            current = Some(Section::Education);
        } else if let Some(rest) = strip_label(line, "Experience:") {
            if !rest.is_empty() {
                experience.push(rest.to_string());
            }
            current = Some(Section::Experience);
        } else if let Some(rest) = strip_label(line, "Skills:") {
            if !rest.is_empty() {
                skills.push(rest.to_string());
            }
            current = Some(Section::Skills);
        } else if let Some(bullet) = line.strip_prefix("- ") {
            match current {
                Some(Section::Experience) if experience.len() < EXPERIENCE_BULLET_LIMIT => {
                    experience.push(bullet.trim().to_string());
                }
                Some(Section::Skills) if skills.len() < SKILLS_BULLET_LIMIT => {
                    skills.push(bullet.trim().to_string());
                }
                Some(Section::Education) if education.is_empty() => {
                    education = bullet.trim().to_string();
                }
                _ => {}
            }
        }
    }

    DraftSections {
        education: sanitize_text(&education),
        experience: sanitize_text(&experience.join("\n")),
        skills: sanitize_text(&skills.join("\n")),
    }
}

/// Matches both "- Education: x" and "Education: x" label shapes.
fn strip_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let line = line.strip_prefix("- ").unwrap_or(line);
    line.strip_prefix(label).map(str::trim)
}
