//! # Review Table
//!
//! Row-oriented table of collected reviews with the fixed column contract
//! the persistence and charting collaborators depend on.

use serde::{Deserialize, Serialize};

use crate::collector::CanonicalReview;
use crate::sentiment::{SentimentLabel, SentimentScores};

/// Column set handed off to persistence and charting. Order and presence
/// are a contract; do not reorder.
pub const COLUMNS: [&str; 11] = [
    "review_text",
    "recommended",
    "playtime_at_review",
    "date_posted",
    "review_length",
    "cleaned_text",
    "compound_score",
    "positive_score",
    "neutral_score",
    "negative_score",
    "sentiment_label",
];

/// Derived sentiment columns attached to a row after analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRow {
    /// Normalized review text the scores were computed from
    pub cleaned_text: String,
    /// Bounded sentiment scores
    pub scores: SentimentScores,
    /// Discrete label derived from the compound score
    pub label: SentimentLabel,
}

/// One table row: a canonical review plus optional derived sentiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRow {
    /// Collected review; every row has one
    pub review: CanonicalReview,
    /// Present only after analysis has run
    pub sentiment: Option<SentimentRow>,
}

/// Ordered collection of review rows.
///
/// Row order follows collection order and is preserved through assembly
/// and re-analysis. No sorting, no deduplication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewTable {
    rows: Vec<ReviewRow>,
}

impl ReviewTable {
    /// Build a table from collected records, in input order.
    ///
    /// Returns `None` for an empty input sequence; callers must check this
    /// explicit no-data signal before any downstream step.
    pub fn assemble(records: Vec<CanonicalReview>) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let rows = records
            .into_iter()
            .map(|review| ReviewRow {
                review,
                sentiment: None,
            })
            .collect();

        Some(Self { rows })
    }

    /// Build a table directly from rows (used by re-analysis)
    pub fn from_rows(rows: Vec<ReviewRow>) -> Self {
        Self { rows }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Read-only view of the rows
    pub fn rows(&self) -> &[ReviewRow] {
        &self.rows
    }

    /// Column headers of the hand-off contract
    pub fn headers() -> &'static [&'static str; 11] {
        &COLUMNS
    }

    /// Render the table as string rows in the contract's column order.
    ///
    /// Booleans render as `True`/`False` and dates as `YYYY-MM-DD`,
    /// matching the format the persistence collaborator already consumes.
    /// Sentiment columns are empty until analysis has run.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                let review = &row.review;
                let mut cells = vec![
                    review.text.clone(),
                    if review.recommended { "True" } else { "False" }.to_string(),
                    review.playtime_hours.to_string(),
                    review.posted_date.format("%Y-%m-%d").to_string(),
                    review.length.to_string(),
                ];

                match &row.sentiment {
                    Some(sentiment) => {
                        cells.push(sentiment.cleaned_text.clone());
                        cells.push(sentiment.scores.compound.to_string());
                        cells.push(sentiment.scores.positive.to_string());
                        cells.push(sentiment.scores.neutral.to_string());
                        cells.push(sentiment.scores.negative.to_string());
                        cells.push(sentiment.label.as_str().to_string());
                    }
                    None => cells.extend(std::iter::repeat(String::new()).take(6)),
                }

                cells
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn review(text: &str) -> CanonicalReview {
        CanonicalReview::new(
            text.to_string(),
            true,
            12.5,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_assemble_empty_is_none() {
        assert!(ReviewTable::assemble(Vec::new()).is_none());
    }

    #[test]
    fn test_assemble_preserves_order() {
        let table =
            ReviewTable::assemble(vec![review("first"), review("second"), review("third")])
                .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[0].review.text, "first");
        assert_eq!(table.rows()[2].review.text, "third");
        assert!(table.rows().iter().all(|r| r.sentiment.is_none()));
    }

    #[test]
    fn test_column_contract() {
        assert_eq!(ReviewTable::headers().len(), 11);
        assert_eq!(ReviewTable::headers()[0], "review_text");
        assert_eq!(ReviewTable::headers()[5], "cleaned_text");
        assert_eq!(ReviewTable::headers()[10], "sentiment_label");
    }

    #[test]
    fn test_to_rows_width_matches_headers() {
        let table = ReviewTable::assemble(vec![review("some text")]).unwrap();
        let rows = table.to_rows();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), COLUMNS.len());
        assert_eq!(rows[0][0], "some text");
        assert_eq!(rows[0][1], "True");
        assert_eq!(rows[0][3], "2024-01-15");
        assert_eq!(rows[0][4], "9");
        // Sentiment cells stay empty before analysis.
        assert!(rows[0][5..].iter().all(|c| c.is_empty()));
    }
}
