//! Marker-delimited LLM feedback parsing.
//!
//! The completion collaborator returns free text with literal `**...**`
//! section markers. This is brittle-by-design string splitting kept behind a
//! narrow interface, so the heuristic can later be swapped for a structured
//! output contract without touching callers. Best-effort: always returns
//! both fields, substituting fixed defaults, and never fails.

/// A pair of section markers and the defaults used when they are absent.
#[derive(Debug, Clone, Copy)]
pub struct MarkerPair {
    pub first: &'static str,
    pub second: &'static str,
    pub default_first: &'static str,
    pub default_second: &'static str,
}

/// Markers for ATS-only feedback.
pub const ATS_MARKERS: MarkerPair = MarkerPair {
    first: "**ATS Readiness:**",
    second: "**Suggestions:**",
    default_first: "No ATS readiness feedback provided.",
    default_second: "No specific suggestions provided.",
};

/// Markers for job-match feedback.
pub const MATCH_MARKERS: MarkerPair = MarkerPair {
    first: "**Match Quality and Suggestions for Improvement:**",
    second: "**Overall Quality, Clarity, and Structure:**",
    default_first: "No strengths identified.",
    default_second: "No overall quality feedback provided.",
};

/// Extracted feedback sections, defaults substituted for missing markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackSections {
    pub first: String,
    pub second: String,
}

/// Splits the text around the marker pair. Absent second marker: everything
/// after the first marker becomes the first field. Absent first marker: both
/// defaults.
pub fn parse_sectioned_feedback(text: &str, markers: &MarkerPair) -> FeedbackSections {
    let mut first = markers.default_first.to_string();
    let mut second = markers.default_second.to_string();

    if let Some((_, after_first)) = text.split_once(markers.first) {
        if let Some((first_part, after_second)) = after_first.split_once(markers.second) {
            first = first_part.trim().to_string();
            second = after_second.trim().to_string();
        } else {
            first = after_first.trim().to_string();
        }
    }

    FeedbackSections { first, second }
}

/// The one-line explanation shown next to a score: the text up to the first
/// period, period restored.
pub fn first_sentence(text: &str) -> String {
    if text.is_empty() {
        return "No explanation provided.".to_string();
    }
    match text.split('.').next() {
        Some(sentence) => format!("{sentence}."),
        None => "No explanation provided.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_markers_split_into_sections() {
        let text = "preamble **ATS Readiness:** solid keyword usage. \
                    **Suggestions:** - add a skills section";
        let sections = parse_sectioned_feedback(text, &ATS_MARKERS);
        assert_eq!(sections.first, "solid keyword usage.");
        assert_eq!(sections.second, "- add a skills section");
    }

    #[test]
    fn test_missing_second_marker_takes_remainder() {
        let text = "**ATS Readiness:** readable and well structured";
        let sections = parse_sectioned_feedback(text, &ATS_MARKERS);
        assert_eq!(sections.first, "readable and well structured");
        assert_eq!(sections.second, ATS_MARKERS.default_second);
    }

    #[test]
    fn test_no_markers_returns_both_defaults() {
        let sections = parse_sectioned_feedback("freeform rambling", &ATS_MARKERS);
        assert_eq!(sections.first, ATS_MARKERS.default_first);
        assert_eq!(sections.second, ATS_MARKERS.default_second);
    }

    #[test]
    fn test_match_markers_split() {
        let text = "**Match Quality and Suggestions for Improvement:**\nGood overlap.\n\
                    **Overall Quality, Clarity, and Structure:**\nClean layout.";
        let sections = parse_sectioned_feedback(text, &MATCH_MARKERS);
        assert_eq!(sections.first, "Good overlap.");
        assert_eq!(sections.second, "Clean layout.");
    }

    #[test]
    fn test_orphaned_second_marker_still_yields_defaults() {
        for text in ["", "**", "**Suggestions:** orphaned second marker"] {
            let sections = parse_sectioned_feedback(text, &ATS_MARKERS);
            assert_eq!(sections.first, ATS_MARKERS.default_first);
            assert_eq!(sections.second, ATS_MARKERS.default_second);
        }
    }

    #[test]
    fn test_first_sentence_truncates_at_period() {
        assert_eq!(
            first_sentence("Strong match. More detail follows."),
            "Strong match."
        );
    }

    #[test]
    fn test_first_sentence_of_empty_text_is_default() {
        assert_eq!(first_sentence(""), "No explanation provided.");
    }
}
