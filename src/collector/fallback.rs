//! # Retrieval Outcome and Fallback
//!
//! Both retrieval strategies report through one tagged outcome, and a
//! single resolution step maps empty or failed collection to a
//! deterministic sample set. Downstream stages always receive a
//! non-empty record list; availability wins over fidelity here.

use chrono::NaiveDate;
use tracing::warn;

use super::record::CanonicalReview;

/// Result of one collection attempt
#[derive(Debug, Clone, PartialEq)]
pub enum RetrievalOutcome {
    /// The strategy collected at least one review
    Collected(Vec<CanonicalReview>),
    /// The strategy ran to completion but found nothing
    Empty,
    /// The strategy aborted with an error
    Failed(String),
}

impl RetrievalOutcome {
    /// Resolve the outcome into records for assembly.
    ///
    /// `Empty`, `Failed` and a degenerate zero-row `Collected` all
    /// substitute the sample seed set, cycled and truncated to exactly
    /// `requested` records.
    pub fn resolve(self, requested: usize) -> Vec<CanonicalReview> {
        match self {
            RetrievalOutcome::Collected(reviews) if !reviews.is_empty() => reviews,
            RetrievalOutcome::Collected(_) | RetrievalOutcome::Empty => {
                warn!("collection produced no reviews, substituting sample data");
                sample_reviews(requested)
            }
            RetrievalOutcome::Failed(reason) => {
                warn!(%reason, "collection failed, substituting sample data");
                sample_reviews(requested)
            }
        }
    }
}

/// Deterministic sample review seeds
fn seed_reviews() -> Vec<CanonicalReview> {
    let seeds: [(&str, bool, f64, (i32, u32, u32)); 5] = [
        (
            "Great game! I love playing this with my friends. The graphics are amazing and the gameplay is smooth.",
            true,
            150.5,
            (2024, 1, 15),
        ),
        (
            "This game is terrible. Too many bugs and the servers are always down. Waste of money.",
            false,
            5.2,
            (2024, 1, 10),
        ),
        (
            "Decent game but needs more content. The mechanics are okay but gets boring after a while.",
            true,
            45.0,
            (2024, 1, 12),
        ),
        (
            "Amazing experience! Best game I have played in years. Highly recommend to everyone.",
            true,
            300.0,
            (2024, 1, 20),
        ),
        (
            "Not worth the price. The game is broken and the developers dont care about fixing it.",
            false,
            10.5,
            (2024, 1, 8),
        ),
    ];

    seeds
        .into_iter()
        .map(|(text, recommended, playtime, (y, m, d))| {
            CanonicalReview::new(
                text.to_string(),
                recommended,
                playtime,
                NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            )
        })
        .collect()
}

/// The sample seed set cycled to exactly `count` records
pub fn sample_reviews(count: usize) -> Vec<CanonicalReview> {
    seed_reviews().into_iter().cycle().take(count).collect()
}
