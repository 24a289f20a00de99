//! # Sentiment Analyzer
//!
//! Lexicon/rule-based intensity scoring in the VADER manner: valence
//! lookup with negation and intensifier handling, a normalized compound
//! score, and positive/neutral/negative proportions.

use serde::{Deserialize, Serialize};

use super::lexicon::{GameLexicon, NEGATION_SCALAR};
use super::normalize::TextNormalizer;
use crate::table::{ReviewRow, ReviewTable, SentimentRow};

/// Threshold at and above which a compound score labels as positive
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Threshold at and below which a compound score labels as negative
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Normalization constant for the compound score (VADER's alpha)
const COMPOUND_ALPHA: f64 = 15.0;

/// Bounded sentiment scores for one text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    /// Overall polarity in [-1, 1]
    pub compound: f64,
    /// Positive proportion in [0, 1]
    pub positive: f64,
    /// Neutral proportion in [0, 1]
    pub neutral: f64,
    /// Negative proportion in [0, 1]
    pub negative: f64,
}

impl SentimentScores {
    /// The defined fallback for empty input: all zeros
    pub fn zero() -> Self {
        Self {
            compound: 0.0,
            positive: 0.0,
            neutral: 0.0,
            negative: 0.0,
        }
    }

    /// Label derived from the compound score
    pub fn label(&self) -> SentimentLabel {
        SentimentLabel::from_compound(self.compound)
    }
}

/// Discrete sentiment classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Classify a compound score with the fixed thresholds
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

/// Review sentiment analyzer
///
/// Owns the normalizer and the lexicon; scoring is deterministic, so
/// re-analyzing the same input always yields identical results.
pub struct ReviewAnalyzer {
    /// Text normalizer
    normalizer: TextNormalizer,
    /// Valence lexicon
    lexicon: GameLexicon,
}

impl Default for ReviewAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewAnalyzer {
    /// Create a new analyzer with the built-in lexicon
    pub fn new() -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            lexicon: GameLexicon::new(),
        }
    }

    /// Access the normalizer
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Score normalized text.
    ///
    /// Empty input returns the exact zero result; that is a defined
    /// fallback, not an error.
    pub fn score(&self, normalized_text: &str) -> SentimentScores {
        let tokens = self.normalizer.tokenize(normalized_text);
        if tokens.is_empty() {
            return SentimentScores::zero();
        }

        let mut valences: Vec<f64> = Vec::new();
        let mut neutral_count = 0usize;
        let mut negate_next = false;
        let mut pending_boost = 0.0;

        for token in tokens {
            if let Some(mut valence) = self.lexicon.valence(token) {
                if pending_boost != 0.0 {
                    valence += pending_boost * valence.signum();
                }
                if negate_next {
                    valence *= NEGATION_SCALAR;
                }
                valences.push(valence);
                negate_next = false;
                pending_boost = 0.0;
            } else if self.lexicon.is_negation(token) {
                negate_next = true;
                neutral_count += 1;
            } else if let Some(boost) = self.lexicon.boost(token) {
                pending_boost = boost;
                neutral_count += 1;
            } else {
                neutral_count += 1;
                negate_next = false;
                pending_boost = 0.0;
            }
        }

        let sum: f64 = valences.iter().sum();
        let compound = (sum / (sum * sum + COMPOUND_ALPHA).sqrt()).clamp(-1.0, 1.0);

        // Proportions follow VADER: each scored word contributes its
        // valence magnitude plus a unit offset to its side's mass.
        let positive_mass: f64 = valences.iter().filter(|v| **v > 0.0).map(|v| v + 1.0).sum();
        let negative_mass: f64 = valences
            .iter()
            .filter(|v| **v < 0.0)
            .map(|v| v.abs() + 1.0)
            .sum();
        let neutral_mass = neutral_count as f64;
        let total = positive_mass + negative_mass + neutral_mass;

        if total == 0.0 {
            return SentimentScores::zero();
        }

        SentimentScores {
            compound,
            positive: positive_mass / total,
            neutral: neutral_mass / total,
            negative: negative_mass / total,
        }
    }

    /// Normalize and score one raw review text
    pub fn score_text(&self, raw_text: &str) -> SentimentRow {
        let cleaned_text = self.normalizer.normalize(raw_text);
        let scores = self.score(&cleaned_text);

        SentimentRow {
            cleaned_text,
            label: scores.label(),
            scores,
        }
    }

    /// Analyze every row of a table.
    ///
    /// Returns a new table with the derived sentiment columns attached; the
    /// input is never mutated, and any previously attached sentiment is
    /// discarded and recomputed.
    pub fn analyze(&self, table: &ReviewTable) -> ReviewTable {
        let rows = table
            .rows()
            .iter()
            .map(|row| ReviewRow {
                review: row.review.clone(),
                sentiment: Some(self.score_text(&row.review.text)),
            })
            .collect();

        ReviewTable::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::CanonicalReview;
    use chrono::NaiveDate;

    fn table_of(texts: &[&str]) -> ReviewTable {
        let records = texts
            .iter()
            .map(|t| {
                CanonicalReview::new(
                    t.to_string(),
                    true,
                    1.0,
                    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                )
            })
            .collect();
        ReviewTable::assemble(records).unwrap()
    }

    #[test]
    fn test_empty_input_is_exact_zero_neutral() {
        let analyzer = ReviewAnalyzer::new();
        let scores = analyzer.score("");

        assert_eq!(scores, SentimentScores::zero());
        assert_eq!(scores.label(), SentimentLabel::Neutral);
    }

    #[test]
    fn test_positive_review_text() {
        let analyzer = ReviewAnalyzer::new();
        let scores =
            analyzer.score("great game love playing friends graphics amazing gameplay smooth");

        assert!(scores.compound >= POSITIVE_THRESHOLD);
        assert_eq!(scores.label(), SentimentLabel::Positive);
    }

    #[test]
    fn test_negative_review_text() {
        let analyzer = ReviewAnalyzer::new();
        let row = analyzer.score_text("This game is terrible. Too many bugs.");

        assert_eq!(row.cleaned_text, "terrible many bugs");
        assert!(row.scores.compound < NEGATIVE_THRESHOLD);
        assert_eq!(row.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_compound_bounded_and_proportions_sum_to_one() {
        let analyzer = ReviewAnalyzer::new();
        let texts = [
            "best masterpiece amazing awesome love perfect",
            "worst trash garbage unplayable broken scam",
            "keyboard mouse monitor settings menu",
            "great fun but buggy laggy mess",
        ];

        for text in texts {
            let scores = analyzer.score(text);
            assert!((-1.0..=1.0).contains(&scores.compound));
            let sum = scores.positive + scores.neutral + scores.negative;
            assert!((sum - 1.0).abs() < 1e-9, "proportions sum to {sum}");
        }
    }

    #[test]
    fn test_label_thresholds_match_compound() {
        let analyzer = ReviewAnalyzer::new();
        let texts = [
            "love amazing",
            "terrible bugs",
            "keyboard mouse",
            "good boring",
        ];

        for text in texts {
            let scores = analyzer.score(text);
            let label = scores.label();
            assert_eq!(label == SentimentLabel::Positive, scores.compound >= 0.05);
            assert_eq!(label == SentimentLabel::Negative, scores.compound <= -0.05);
        }
    }

    #[test]
    fn test_negation_flips_polarity() {
        let analyzer = ReviewAnalyzer::new();
        let plain = analyzer.score("boring");
        let negated = analyzer.score("never boring");

        assert!(plain.compound < 0.0);
        assert!(negated.compound > 0.0);
    }

    #[test]
    fn test_intensifier_raises_magnitude() {
        let analyzer = ReviewAnalyzer::new();
        let plain = analyzer.score("fun gameplay");
        let boosted = analyzer.score("really fun gameplay");

        assert!(boosted.compound > plain.compound);
    }

    #[test]
    fn test_analyze_does_not_mutate_input() {
        let analyzer = ReviewAnalyzer::new();
        let table = table_of(&["Great game, love it!", "Terrible, full of bugs."]);

        let analyzed = analyzer.analyze(&table);

        assert!(table.rows().iter().all(|r| r.sentiment.is_none()));
        assert!(analyzed.rows().iter().all(|r| r.sentiment.is_some()));
        assert_eq!(analyzed.len(), table.len());
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let analyzer = ReviewAnalyzer::new();
        let table = table_of(&[
            "Amazing experience! Best game I have played in years.",
            "Not worth the price. The game is broken.",
            "Decent game but needs more content.",
        ]);

        let first = analyzer.analyze(&table);
        let second = analyzer.analyze(&first);

        assert_eq!(first, second);
    }
}
