//! Two-document TF-IDF cosine similarity.
//!
//! The vectorizer is fit jointly over exactly the two documents being
//! compared, so IDF values are only meaningful relative to this pair — an
//! accepted approximation for pairwise matching, not corpus statistics.

use std::collections::HashMap;

/// Tokens shorter than this are ignored by the vectorizer.
const MIN_TOKEN_CHARS: usize = 2;
/// The corpus is always exactly the two documents under comparison.
const CORPUS_SIZE: f64 = 2.0;

/// Cosine similarity between two preprocessed (whitespace-joined) documents,
/// in [0, 1]. Returns 0.0 when either document vectorizes to nothing.
pub fn cosine_similarity(doc_a: &str, doc_b: &str) -> f64 {
    let counts_a = term_counts(doc_a);
    let counts_b = term_counts(doc_b);
    if counts_a.is_empty() || counts_b.is_empty() {
        return 0.0;
    }

    // Document frequency per term across the pair.
    let mut document_frequency: HashMap<&str, usize> = HashMap::new();
    for term in counts_a.keys() {
        *document_frequency.entry(term).or_insert(0) += 1;
    }
    for term in counts_b.keys() {
        *document_frequency.entry(term).or_insert(0) += 1;
    }

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (term, df) in &document_frequency {
        // Smoothed IDF: ln((1 + n) / (1 + df)) + 1
        let idf = ((1.0 + CORPUS_SIZE) / (1.0 + *df as f64)).ln() + 1.0;
        let weight_a = counts_a.get(*term).copied().unwrap_or(0) as f64 * idf;
        let weight_b = counts_b.get(*term).copied().unwrap_or(0) as f64 * idf;
        dot += weight_a * weight_b;
        norm_a += weight_a * weight_a;
        norm_b += weight_b * weight_b;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

fn term_counts(doc: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in doc
        .split_whitespace()
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
    {
        *counts.entry(token.to_string()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_documents_score_one() {
        let similarity = cosine_similarity("rust systems engineer", "rust systems engineer");
        assert!((similarity - 1.0).abs() < 1e-9, "got {similarity}");
    }

    #[test]
    fn test_disjoint_documents_score_zero() {
        let similarity = cosine_similarity("rust tokio axum", "pastry flour butter");
        assert!(similarity.abs() < 1e-9, "got {similarity}");
    }

    #[test]
    fn test_partial_overlap_is_between_zero_and_one() {
        let similarity = cosine_similarity("rust sql team", "python sql team");
        assert!(similarity > 0.0 && similarity < 1.0, "got {similarity}");
    }

    #[test]
    fn test_empty_document_scores_zero() {
        assert_eq!(cosine_similarity("", "rust"), 0.0);
        assert_eq!(cosine_similarity("rust", ""), 0.0);
    }

    #[test]
    fn test_single_char_tokens_are_ignored() {
        assert_eq!(cosine_similarity("a b c", "a b c"), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let ab = cosine_similarity("rust sql team", "python sql");
        let ba = cosine_similarity("python sql", "rust sql team");
        assert!((ab - ba).abs() < 1e-12);
    }
}
