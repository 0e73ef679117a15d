//! Composite scoring — the two historical scoring strategies, kept distinct.
//!
//! The service grew an ATS-only path and a job-match path with different
//! penalty constants, readability thresholds, and length formulas. That
//! divergence is shipped behavior downstream consumers calibrate against, so
//! both live here as named strategies and the caller picks explicitly.

use std::collections::HashSet;

use serde::Serialize;

use crate::analysis::{keywords, readability, structure};

/// Fixed vocabulary the ATS-only keyword check scores against.
pub const COMMON_RESUME_TERMS: [&str; 10] = [
    "python",
    "java",
    "sql",
    "team",
    "project",
    "management",
    "skills",
    "experience",
    "education",
    "certified",
];

/// Named sub-scores feeding a composite. All values lie in [0, 100].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoreBreakdown {
    pub keyword_score: f64,
    pub structure_score: f64,
    pub readability_score: f64,
    pub length_score: f64,
    pub avg_sentence_length: f64,
}

/// Linear blend weights. Each named set sums to 1.0.
#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub keyword: f64,
    pub structure: f64,
    pub readability: f64,
    pub length: f64,
}

/// ATS-only blend.
pub const ATS_WEIGHTS: Weights = Weights {
    keyword: 0.3,
    structure: 0.3,
    readability: 0.2,
    length: 0.2,
};

/// Job-match blend.
pub const MATCH_WEIGHTS: Weights = Weights {
    keyword: 0.4,
    structure: 0.3,
    readability: 0.2,
    length: 0.1,
};

impl Weights {
    pub fn blend(&self, b: &ScoreBreakdown) -> f64 {
        self.keyword * b.keyword_score
            + self.structure * b.structure_score
            + self.readability * b.readability_score
            + self.length * b.length_score
    }
}

/// ATS-only structure penalty: 33 points per missing section.
pub fn structure_score_ats(missing_sections: usize) -> f64 {
    100.0 - 33.0 * missing_sections as f64
}

/// Job-match structure penalty: 20 points per missing section, floored at 0.
pub fn structure_score_match(missing_sections: usize) -> f64 {
    (100.0 - 20.0 * missing_sections as f64).max(0.0)
}

/// ATS-only readability: full marks under 20 words per sentence, then a
/// 5-point penalty per extra word, floored at 0.
pub fn readability_score_ats(avg_sentence_length: f64) -> f64 {
    if avg_sentence_length < 20.0 {
        100.0
    } else {
        (100.0 - (avg_sentence_length - 20.0) * 5.0).max(0.0)
    }
}

/// Job-match readability: decays from a 15-word threshold at 5 points per
/// word, clamped to [0, 100].
pub fn readability_score_match(avg_sentence_length: f64) -> f64 {
    (100.0 - (avg_sentence_length - 15.0) * 5.0).clamp(0.0, 100.0)
}

/// ATS-only length buckets over the distinct-term count.
pub fn length_score_bucketed(word_count: usize) -> f64 {
    match word_count {
        150..=500 => 100.0,
        100..=149 | 501..=700 => 50.0,
        _ => 25.0,
    }
}

/// Job-match length: continuous 0.2-point penalty per word away from 500,
/// clamped to [0, 100].
pub fn length_score_continuous(word_count: usize) -> f64 {
    (100.0 - 0.2 * (word_count as f64 - 500.0).abs()).clamp(0.0, 100.0)
}

/// Rounds to two decimals — the ATS-only composite's reported precision.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Truncates toward zero — the blended overall scores' reported precision.
pub fn truncate(value: f64) -> i64 {
    value as i64
}

/// Full ATS-only breakdown for a résumé text.
pub fn ats_breakdown(text: &str) -> ScoreBreakdown {
    let terms: HashSet<String> = keywords::alphabetic_terms(text);
    let hits = COMMON_RESUME_TERMS
        .iter()
        .filter(|t| terms.contains(**t))
        .count();
    let keyword_score = ((hits as f64 / 10.0) * 100.0).min(100.0);

    let missing = structure::missing_sections(text).len();
    let avg = readability::avg_sentence_length(text);

    ScoreBreakdown {
        keyword_score,
        structure_score: structure_score_ats(missing),
        readability_score: readability_score_ats(avg),
        // The ATS path has always counted distinct alphabetic terms here,
        // not raw words.
        length_score: length_score_bucketed(terms.len()),
        avg_sentence_length: avg,
    }
}

/// The 2-decimal ATS-only composite reported as `ats_score`.
pub fn ats_score(text: &str) -> f64 {
    round2(ATS_WEIGHTS.blend(&ats_breakdown(text)))
}
