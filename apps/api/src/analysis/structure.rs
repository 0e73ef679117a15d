//! Section presence — exact single-token matches for the canonical headings.

/// Canonical résumé sections every screener looks for.
pub const CANONICAL_SECTIONS: [&str; 3] = ["experience", "education", "skills"];

/// Returns the canonical sections with no exact token match in the text.
///
/// Matching is deliberately narrow: a section counts as present only when
/// some token lowercases to exactly the section name. "Work Experience"
/// matches (via the "experience" token); "Experiences" does not. Known
/// heuristic limitation, kept as-is.
pub fn missing_sections(text: &str) -> Vec<&'static str> {
    let mut found = [false; 3];
    for token in tokens(text) {
        for (i, section) in CANONICAL_SECTIONS.iter().enumerate() {
            if token == *section {
                found[i] = true;
            }
        }
    }
    CANONICAL_SECTIONS
        .iter()
        .zip(found)
        .filter(|(_, present)| !present)
        .map(|(section, _)| *section)
        .collect()
}

/// Lowercased alphanumeric-run tokenization shared by the analyzers.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
}
