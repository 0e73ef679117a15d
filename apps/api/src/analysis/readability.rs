//! Readability — average sentence length in whitespace tokens.

/// Splits on sentence-final punctuation and averages the token count per
/// sentence. Returns 0.0 when the text has no sentences.
pub fn avg_sentence_length(text: &str) -> f64 {
    let sentences: Vec<&str> = text
        .split(|c: char| matches!(c, '.' | '!' | '?'))
        .filter(|s| !s.trim().is_empty())
        .collect();

    if sentences.is_empty() {
        return 0.0;
    }

    let total_tokens: usize = sentences
        .iter()
        .map(|s| s.split_whitespace().count())
        .sum();
    total_tokens as f64 / sentences.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_zero() {
        assert_eq!(avg_sentence_length(""), 0.0);
        assert_eq!(avg_sentence_length("   "), 0.0);
    }

    #[test]
    fn test_single_sentence() {
        assert_eq!(avg_sentence_length("I built a compiler."), 4.0);
    }

    #[test]
    fn test_averages_across_sentences() {
        // 4 tokens + 2 tokens over 2 sentences
        let avg = avg_sentence_length("I built a compiler. It worked!");
        assert!((avg - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_trailing_punctuation_does_not_add_empty_sentence() {
        assert_eq!(avg_sentence_length("Done. "), 1.0);
    }
}
