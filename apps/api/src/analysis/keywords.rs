//! Keyword preprocessing and overlap scoring between résumé and job
//! description text.

use std::collections::HashSet;

/// English stop words dropped during preprocessing.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "am", "an", "and", "any", "are", "as", "at",
    "be", "because", "been", "before", "being", "below", "between", "both", "but", "by", "can",
    "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from", "further",
    "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how", "i", "if",
    "in", "into", "is", "it", "its", "just", "me", "more", "most", "my", "no", "nor", "not",
    "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own",
    "same", "she", "should", "so", "some", "such", "than", "that", "the", "their", "theirs",
    "them", "then", "there", "these", "they", "this", "those", "through", "to", "too", "under",
    "until", "up", "very", "was", "we", "were", "what", "when", "where", "which", "while", "who",
    "whom", "why", "will", "with", "you", "your", "yours",
];

/// Lowercases, keeps alphabetic runs only, drops stop words, and applies a
/// light depluralization. The normalization is deterministic and applied
/// identically to both documents, so overlap comparisons stay fair.
pub fn preprocess(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphabetic())
        .filter(|t| !t.is_empty())
        .filter(|t| !STOP_WORDS.contains(t))
        .map(normalize)
        .collect()
}

/// Strips one trailing 's' from plural-looking tokens. Words of three
/// characters or fewer and words ending in "ss" are left alone.
fn normalize(token: &str) -> String {
    if token.chars().count() > 3 && !token.ends_with("ss") {
        if let Some(stem) = token.strip_suffix('s') {
            return stem.to_string();
        }
    }
    token.to_string()
}

pub fn term_set(tokens: &[String]) -> HashSet<String> {
    tokens.iter().cloned().collect()
}

/// Overlap-count score used in the composite: 10 points per shared term,
/// capped at 100. Distinct from the cosine similarity reported alongside it.
pub fn keyword_overlap_score(
    resume_terms: &HashSet<String>,
    job_terms: &HashSet<String>,
) -> f64 {
    let overlap = resume_terms.intersection(job_terms).count();
    (overlap as f64 * 10.0).min(100.0)
}

/// Job-description terms absent from the résumé, in first-seen order.
pub fn missing_keywords(job_tokens: &[String], resume_terms: &HashSet<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    job_tokens
        .iter()
        .filter(|t| !resume_terms.contains(*t))
        .filter(|t| seen.insert((*t).clone()))
        .cloned()
        .collect()
}

/// Lowercased alphabetic terms of a document, with no stop-word removal —
/// the vocabulary the fixed-list ATS keyword check and length bucket run on.
pub fn alphabetic_terms(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphabetic())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess_drops_stop_words_and_punctuation() {
        let tokens = preprocess("I have worked with the Kafka queue, and Redis!");
        assert!(!tokens.contains(&"the".to_string()));
        assert!(!tokens.contains(&"and".to_string()));
        assert!(tokens.contains(&"kafka".to_string()));
        assert!(tokens.contains(&"redi".to_string()) || tokens.contains(&"redis".to_string()));
    }

    #[test]
    fn test_normalize_depluralizes_long_words() {
        assert_eq!(normalize("skills"), "skill");
        assert_eq!(normalize("years"), "year");
    }

    #[test]
    fn test_normalize_keeps_short_and_ss_words() {
        assert_eq!(normalize("sql"), "sql");
        assert_eq!(normalize("business"), "business");
    }

    #[test]
    fn test_overlap_score_matches_documented_example() {
        // job="python sql team leadership", resume="java sql project management"
        // overlap = {sql} -> 10
        let resume = term_set(&preprocess("java sql project management"));
        let job = term_set(&preprocess("python sql team leadership"));
        assert_eq!(keyword_overlap_score(&resume, &job), 10.0);
    }

    #[test]
    fn test_overlap_score_caps_at_100() {
        let many: Vec<String> = (0..20).map(|i| format!("term{i:02}x")).collect();
        let set = term_set(&many);
        assert_eq!(keyword_overlap_score(&set, &set), 100.0);
    }

    #[test]
    fn test_missing_keywords_subset_and_disjoint_invariants() {
        let resume_tokens = preprocess("java sql project management");
        let job_tokens = preprocess("python sql team leadership");
        let resume_terms = term_set(&resume_tokens);
        let job_terms = term_set(&job_tokens);

        let missing = missing_keywords(&job_tokens, &resume_terms);
        for term in &missing {
            assert!(job_terms.contains(term));
            assert!(!resume_terms.contains(term));
        }
        assert_eq!(missing.len(), 3); // python, team, leadership
    }

    #[test]
    fn test_missing_keywords_deduplicates() {
        let job_tokens = preprocess("python python python");
        let missing = missing_keywords(&job_tokens, &HashSet::new());
        assert_eq!(missing, vec!["python".to_string()]);
    }

    #[test]
    fn test_alphabetic_terms_keeps_stop_words() {
        let terms = alphabetic_terms("the team shipped");
        assert!(terms.contains("the"));
        assert!(terms.contains("team"));
    }
}
