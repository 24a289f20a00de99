//! # Review Records
//!
//! Raw records as the appreviews endpoint returns them, and the canonical
//! in-memory review every collection strategy produces.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Review author block of the appreviews payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAuthor {
    /// Play time at the moment the review was written
    #[serde(default)]
    pub playtime_at_review: f64,
}

/// One element of the payload's `reviews` array.
///
/// Every field defaults so a sparse or partially malformed entry still
/// deserializes; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawReview {
    /// Free-text review body
    #[serde(default)]
    pub review: String,
    /// Recommendation flag
    #[serde(default)]
    pub voted_up: bool,
    /// POSIX timestamp of the post
    #[serde(default)]
    pub timestamp_created: i64,
    /// Author block with play-time information
    #[serde(default)]
    pub author: RawAuthor,
}

/// One page of the paginated appreviews payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewsPage {
    /// Reviews on this page; absent means end of data
    #[serde(default)]
    pub reviews: Vec<RawReview>,
    /// Cursor addressing the next page
    #[serde(default)]
    pub cursor: Option<String>,
}

/// Canonical review record.
///
/// Created once per retrieved item and never mutated afterwards. The
/// `length` field is always recomputed from `text`, never trusted from
/// upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalReview {
    /// Review body
    pub text: String,
    /// Whether the reviewer recommends the product
    pub recommended: bool,
    /// Play time at review, never negative
    pub playtime_hours: f64,
    /// Calendar date the review was posted
    pub posted_date: NaiveDate,
    /// Character count of `text`
    pub length: usize,
}

impl CanonicalReview {
    /// Create a canonical review; `length` is derived from `text`
    pub fn new(text: String, recommended: bool, playtime_hours: f64, posted_date: NaiveDate) -> Self {
        let length = text.chars().count();
        Self {
            text,
            recommended,
            playtime_hours: playtime_hours.max(0.0),
            posted_date,
            length,
        }
    }

    /// Convert a raw payload entry, turning its POSIX timestamp into a
    /// calendar date
    pub fn from_raw(raw: RawReview) -> Self {
        let posted_date = DateTime::from_timestamp(raw.timestamp_created, 0)
            .map(|dt| dt.date_naive())
            .unwrap_or_default();

        Self::new(
            raw.review,
            raw.voted_up,
            raw.author.playtime_at_review,
            posted_date,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_is_recomputed_in_characters() {
        let review = CanonicalReview::new(
            "héllo 🎮".to_string(),
            true,
            1.0,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        // 7 characters, more than 7 bytes
        assert_eq!(review.length, 7);
    }

    #[test]
    fn test_from_raw_converts_timestamp_to_date() {
        let raw = RawReview {
            review: "good".to_string(),
            voted_up: true,
            timestamp_created: 1_705_276_800, // 2024-01-15 00:00:00 UTC
            author: RawAuthor {
                playtime_at_review: 150.5,
            },
        };

        let review = CanonicalReview::from_raw(raw);
        assert_eq!(
            review.posted_date,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(review.playtime_hours, 150.5);
        assert_eq!(review.length, 4);
    }

    #[test]
    fn test_negative_playtime_clamped() {
        let review = CanonicalReview::new("x".to_string(), false, -3.0, NaiveDate::default());
        assert_eq!(review.playtime_hours, 0.0);
    }

    #[test]
    fn test_sparse_payload_entry_deserializes() {
        let raw: RawReview = serde_json::from_str(r#"{"review": "short"}"#).unwrap();
        assert_eq!(raw.review, "short");
        assert!(!raw.voted_up);
        assert_eq!(raw.author.playtime_at_review, 0.0);
    }
}
