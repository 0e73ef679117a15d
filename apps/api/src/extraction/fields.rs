//! Structured field extraction — positional line heuristics over raw résumé
//! text. No NLP: a single forward pass fills each field from its first
//! matching line.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Lines captured after a section heading line.
const EDUCATION_CAPTURE_LINES: usize = 4;
const EXPERIENCE_CAPTURE_LINES: usize = 6;
const SKILLS_CAPTURE_LINES: usize = 4;

/// Structured fields pulled out of unstructured résumé text.
/// Absence is the empty string, never null, so downstream formatting stays
/// uniform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub education: String,
    pub experience: String,
    pub skills: String,
}

/// Removes control characters (code points below 32) except tab, newline,
/// and carriage return.
pub fn sanitize_text(text: &str) -> String {
    text.chars()
        .filter(|&c| c as u32 >= 32 || c == '\n' || c == '\r' || c == '\t')
        .collect()
}

/// Scans the text line by line, filling each field from its first matching
/// line. Section fields capture a fixed number of following lines, which
/// crosses into the next section when headings are adjacent — a long-standing
/// quirk downstream consumers rely on.
pub fn extract_fields(text: &str) -> ResumeFields {
    if text.trim().is_empty() {
        warn!("field extraction called with empty text");
        return ResumeFields::default();
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let mut fields = ResumeFields::default();

    for (i, raw_line) in lines.iter().enumerate() {
        let line = raw_line.trim();
        let lower = line.to_lowercase();

        if fields.name.is_empty()
            && !line.is_empty()
            && !line.contains('@')
            && !line.chars().any(|c| c.is_ascii_digit())
        {
            fields.name = line.to_string();
        }
        if fields.email.is_empty() && line.contains('@') {
            fields.email = line.to_string();
        }
        if fields.phone.is_empty() && looks_like_phone(line) {
            fields.phone = line.to_string();
        }
        if fields.education.is_empty() && lower.contains("education") {
            fields.education = capture_section(&lines, i, EDUCATION_CAPTURE_LINES);
        }
        if fields.experience.is_empty()
            && (lower.contains("experience") || lower.contains("work"))
        {
            fields.experience = capture_section(&lines, i, EXPERIENCE_CAPTURE_LINES);
        }
        if fields.skills.is_empty() && lower.contains("skills") {
            fields.skills = capture_section(&lines, i, SKILLS_CAPTURE_LINES);
        }
    }

    ResumeFields {
        name: sanitize_text(&fields.name),
        email: sanitize_text(&fields.email),
        phone: sanitize_text(&fields.phone),
        education: sanitize_text(&fields.education),
        experience: sanitize_text(&fields.experience),
        skills: sanitize_text(&fields.skills),
    }
}

/// Joins the `count` lines following the heading at `index` (fewer when the
/// document ends first). When the heading is the last line, the heading
/// itself is the section body.
fn capture_section(lines: &[&str], index: usize, count: usize) -> String {
    if index + 1 >= lines.len() {
        return lines[index].trim().to_string();
    }
    lines[index + 1..]
        .iter()
        .take(count)
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// A phone line has at least one digit and, with spaces and dashes removed,
/// 8 to 15 characters.
fn looks_like_phone(line: &str) -> bool {
    let stripped_len = line.chars().filter(|&c| c != ' ' && c != '-').count();
    (8..=15).contains(&stripped_len) && line.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADJACENT_SECTIONS: &str =
        "Experience\nManaged a team of five\nEducation\nBS Computer Science\nSkills\npython, sql";

    #[test]
    fn test_section_capture_crosses_adjacent_headings() {
        // The capture-next-N-lines heuristic intentionally runs past the next
        // heading; consumers depend on this exact behavior.
        let fields = extract_fields(ADJACENT_SECTIONS);
        assert_eq!(
            fields.experience,
            "Managed a team of five\nEducation\nBS Computer Science\nSkills\npython, sql"
        );
        assert_eq!(fields.education, "BS Computer Science\nSkills\npython, sql");
        assert_eq!(fields.skills, "python, sql");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let first = extract_fields(ADJACENT_SECTIONS);
        let second = extract_fields(ADJACENT_SECTIONS);
        assert_eq!(first, second);
    }

    #[test]
    fn test_name_is_first_plain_line() {
        let fields = extract_fields("Jane Doe\njane@example.com\n555-123-4567");
        assert_eq!(fields.name, "Jane Doe");
        assert_eq!(fields.email, "jane@example.com");
        assert_eq!(fields.phone, "555-123-4567");
    }

    #[test]
    fn test_first_match_wins_per_field() {
        let fields = extract_fields("first@example.com\nsecond@example.com");
        assert_eq!(fields.email, "first@example.com");
    }

    #[test]
    fn test_heading_on_last_line_captures_itself() {
        let fields = extract_fields("Jane Doe\nSkills");
        assert_eq!(fields.skills, "Skills");
    }

    #[test]
    fn test_phone_length_bounds() {
        assert!(looks_like_phone("555-123-4567"));
        assert!(looks_like_phone("+1 415 555 0100"));
        // Too short once separators are gone
        assert!(!looks_like_phone("1234567"));
        // No digits at all
        assert!(!looks_like_phone("no digits"));
    }

    #[test]
    fn test_empty_text_yields_empty_fields() {
        assert_eq!(extract_fields("   \n  "), ResumeFields::default());
    }

    #[test]
    fn test_sanitize_strips_control_characters() {
        assert_eq!(sanitize_text("a\u{0000}b\u{0007}c"), "abc");
        assert_eq!(sanitize_text("line1\nline2\tend\r"), "line1\nline2\tend\r");
    }

    #[test]
    fn test_fields_are_sanitized() {
        let fields = extract_fields("Jane\u{0001} Doe\njane@example.com");
        assert_eq!(fields.name, "Jane Doe");
    }
}
