// The scoring pipeline: structure, readability, keyword, and length
// heuristics combined into weighted composites. Pure functions throughout —
// no LLM calls, no I/O — so every property here is unit-testable.

pub mod feedback_format;
pub mod keywords;
pub mod readability;
pub mod scoring;
pub mod structure;
pub mod tfidf;

use crate::errors::AppError;
use self::scoring::ScoreBreakdown;

/// Keyword sub-score used when the job-match blend runs without a job
/// description to compare against.
const NO_JD_KEYWORD_PLACEHOLDER: f64 = 50.0;

/// Missing keywords reported to the client, at most.
pub const MISSING_KEYWORDS_LIMIT: usize = 10;

/// Output of the job-match scoring path.
#[derive(Debug, Clone)]
pub struct MatchAnalysis {
    pub breakdown: ScoreBreakdown,
    /// Blended overall score, integer-truncated.
    pub overall: i64,
    /// Raw cosine similarity percentage; None when no job description was
    /// supplied.
    pub match_score_raw: Option<f64>,
    pub missing_keywords: Vec<String>,
    pub missing_sections: Vec<&'static str>,
}

/// ATS-only entry point: breakdown plus the 2-decimal composite.
pub fn score_resume(text: &str) -> (ScoreBreakdown, f64) {
    let breakdown = scoring::ats_breakdown(text);
    let composite = scoring::round2(scoring::ATS_WEIGHTS.blend(&breakdown));
    (breakdown, composite)
}

/// Runs the job-match scoring path. With a job description the keyword
/// sub-score comes from term overlap and the raw cosine similarity is
/// reported alongside; without one a fixed placeholder keeps the blend
/// comparable across requests.
pub fn match_resume(
    resume_text: &str,
    job_description: Option<&str>,
) -> Result<MatchAnalysis, AppError> {
    let missing_sections = structure::missing_sections(resume_text);
    let structure_score = scoring::structure_score_match(missing_sections.len());

    let avg = readability::avg_sentence_length(resume_text);
    let readability_score = scoring::readability_score_match(avg);

    let word_count = resume_text.split_whitespace().count();
    let length_score = scoring::length_score_continuous(word_count);

    let (keyword_score, match_score_raw, missing_keywords) = match job_description {
        Some(jd) => {
            let resume_tokens = keywords::preprocess(resume_text);
            let jd_tokens = keywords::preprocess(jd);
            if resume_tokens.is_empty() || jd_tokens.is_empty() {
                return Err(AppError::Validation(
                    "resume and job description must both contain scorable terms".to_string(),
                ));
            }
            let resume_terms = keywords::term_set(&resume_tokens);
            let jd_terms = keywords::term_set(&jd_tokens);
            let cosine =
                tfidf::cosine_similarity(&resume_tokens.join(" "), &jd_tokens.join(" "));
            (
                keywords::keyword_overlap_score(&resume_terms, &jd_terms),
                Some(cosine * 100.0),
                keywords::missing_keywords(&jd_tokens, &resume_terms),
            )
        }
        None => (NO_JD_KEYWORD_PLACEHOLDER, None, Vec::new()),
    };

    let breakdown = ScoreBreakdown {
        keyword_score,
        structure_score,
        readability_score,
        length_score,
        avg_sentence_length: avg,
    };
    let overall = scoring::truncate(scoring::MATCH_WEIGHTS.blend(&breakdown));

    Ok(MatchAnalysis {
        breakdown,
        overall,
        match_score_raw,
        missing_keywords,
        missing_sections,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\njane@example.com\nExperience\nManaged a team of five engineers building sql pipelines.\nEducation\nBS Computer Science.\nSkills\njava sql project management";

    #[test]
    fn test_match_without_jd_uses_placeholder_keyword_score() {
        let analysis = match_resume(RESUME, None).unwrap();
        assert_eq!(analysis.breakdown.keyword_score, 50.0);
        assert!(analysis.match_score_raw.is_none());
        assert!(analysis.missing_keywords.is_empty());
    }

    #[test]
    fn test_match_with_jd_reports_cosine_and_overlap() {
        let analysis = match_resume(RESUME, Some("python sql team leadership")).unwrap();
        // overlap = {sql, team} -> 20
        assert_eq!(analysis.breakdown.keyword_score, 20.0);
        let raw = analysis.match_score_raw.unwrap();
        assert!((0.0..=100.0).contains(&raw));
        assert!(raw > 0.0);
    }

    #[test]
    fn test_missing_keywords_come_from_jd_only() {
        let analysis = match_resume(RESUME, Some("python sql team leadership")).unwrap();
        let jd_terms = keywords::term_set(&keywords::preprocess("python sql team leadership"));
        let resume_terms = keywords::term_set(&keywords::preprocess(RESUME));
        for term in &analysis.missing_keywords {
            assert!(jd_terms.contains(term));
            assert!(!resume_terms.contains(term));
        }
    }

    #[test]
    fn test_overall_reproducible_from_breakdown() {
        let analysis = match_resume(RESUME, Some("python sql team leadership")).unwrap();
        let recomputed =
            scoring::truncate(scoring::MATCH_WEIGHTS.blend(&analysis.breakdown));
        assert_eq!(analysis.overall, recomputed);
    }

    #[test]
    fn test_all_scores_in_range() {
        for jd in [None, Some("python sql team leadership")] {
            let analysis = match_resume(RESUME, jd).unwrap();
            let b = &analysis.breakdown;
            for score in [
                b.keyword_score,
                b.structure_score,
                b.readability_score,
                b.length_score,
            ] {
                assert!((0.0..=100.0).contains(&score), "{score} out of range");
            }
            assert!((0..=100).contains(&analysis.overall));
        }
    }

    #[test]
    fn test_empty_jd_terms_is_a_validation_error() {
        let result = match_resume(RESUME, Some("... !!! ..."));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_ats_composite_reproducible_from_breakdown() {
        let (breakdown, composite) = score_resume(RESUME);
        let recomputed = scoring::round2(scoring::ATS_WEIGHTS.blend(&breakdown));
        assert!((composite - recomputed).abs() < 1e-9);
    }
}
