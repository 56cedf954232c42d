//! Response Scorer — lexical heuristics over a single response string.
//!
//! Matching is deliberately substring-based, not word-boundary based
//! ("goodness" counts as "good"); downstream history comparisons depend on
//! the scores staying stable, so do not change the lexicons or matching
//! semantics without versioning the metrics.

use crate::models::experiment::MetricsRecord;

const CERTAINTY_TERMS: &[&str] = &[
    "must",
    "should",
    "definitely",
    "always",
    "never",
    "certainly",
    "clearly",
    "obviously",
];

const POSITIVE_TERMS: &[&str] = &[
    "good",
    "great",
    "strong",
    "excellent",
    "positive",
    "helpful",
    "recommend",
];

const NEGATIVE_TERMS: &[&str] = &[
    "weak", "problem", "issue", "concern", "doubt", "negative", "difficult",
];

/// Certainty saturates once this many distinct terms are present.
const CERTAINTY_SATURATION: f64 = 3.0;

/// Scores a response. Pure and idempotent; an empty response yields the
/// all-zero record.
///
/// - `word_count`: whitespace-separated tokens of the trimmed text.
/// - `certainty`: distinct certainty-term hits / 3, clamped to 1.0. Each
///   term counts at most once regardless of repetition.
/// - `sentiment_score`: +1 per positive term present, -1 per negative term
///   present; unclamped, so it may be negative.
pub fn score_response(text: &str) -> MetricsRecord {
    if text.is_empty() {
        return MetricsRecord::zero();
    }

    let word_count = text.split_whitespace().count() as u32;

    let lower = text.to_lowercase();

    let certainty_hits = CERTAINTY_TERMS
        .iter()
        .filter(|term| lower.contains(**term))
        .count();
    let certainty = (certainty_hits as f64 / CERTAINTY_SATURATION).min(1.0);

    let mut sentiment_score = 0i32;
    for term in POSITIVE_TERMS {
        if lower.contains(term) {
            sentiment_score += 1;
        }
    }
    for term in NEGATIVE_TERMS {
        if lower.contains(term) {
            sentiment_score -= 1;
        }
    }

    MetricsRecord {
        word_count,
        certainty,
        sentiment_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_all_zero() {
        assert_eq!(score_response(""), MetricsRecord::zero());
    }

    #[test]
    fn test_positive_sentiment_and_word_count() {
        let metrics = score_response("This is great and helpful");
        assert_eq!(metrics.word_count, 5);
        assert_eq!(metrics.sentiment_score, 2);
        assert_eq!(metrics.certainty, 0.0);
    }

    #[test]
    fn test_certainty_saturates_at_three_hits() {
        let metrics = score_response("You must always definitely succeed");
        assert_eq!(metrics.certainty, 1.0);
        assert_eq!(metrics.sentiment_score, 0);
    }

    #[test]
    fn test_certainty_partial() {
        let metrics = score_response("You should try");
        assert!((metrics.certainty - 1.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_certainty_term_counts_once_despite_repetition() {
        let metrics = score_response("must must must must");
        assert!((metrics.certainty - 1.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_net_negative_sentiment() {
        let metrics = score_response("A weak answer with a problem and one issue, but good");
        assert_eq!(metrics.sentiment_score, -2);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let metrics = score_response("GOOD and HELPFUL, CLEARLY");
        assert_eq!(metrics.sentiment_score, 2);
        assert!((metrics.certainty - 1.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_substring_matching_is_preserved() {
        // "goodness" contains "good" — a known property of the heuristic.
        let metrics = score_response("goodness");
        assert_eq!(metrics.sentiment_score, 1);
    }

    #[test]
    fn test_idempotent() {
        let text = "You should definitely recommend this, despite the concern";
        assert_eq!(score_response(text), score_response(text));
    }
}
