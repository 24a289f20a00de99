//! # Analysis Pipeline
//!
//! End-to-end boundary: collect reviews with one of the two strategies,
//! resolve the mandatory fallback, assemble the table, attach sentiment,
//! and summarize. All state lives in the request/summary values passed
//! through; nothing is shared between invocations.

use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::api::PageFetcher;
use crate::collector::{PaginatedCollector, RetrievalOutcome, ReviewPageDriver, ScrollingCollector};
use crate::sentiment::{ReviewAnalyzer, SentimentLabel};
use crate::table::ReviewTable;

/// Errors surfaced to the caller of the pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("review_count must be greater than zero")]
    InvalidRequest,

    #[error("no reviews could be collected; check the product id and try again later")]
    NoReviews,
}

/// Parameters of one analysis run
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Store identifier of the product
    pub product_id: String,
    /// Human-readable product name, used only for reporting
    pub product_name: String,
    /// Number of reviews the caller wants
    pub review_count: usize,
}

impl AnalysisRequest {
    /// Validate and build a request; `review_count` must be positive
    pub fn new(
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        review_count: usize,
    ) -> Result<Self, PipelineError> {
        if review_count == 0 {
            return Err(PipelineError::InvalidRequest);
        }
        Ok(Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            review_count,
        })
    }
}

/// Collection knobs for the paginated strategy
#[derive(Debug, Clone)]
pub struct CollectConfig {
    /// Bound on pages fetched
    pub max_pages: usize,
    /// Pause between page fetches
    pub page_delay: Duration,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            max_pages: 5,
            page_delay: Duration::from_secs(2),
        }
    }
}

/// Aggregate statistics over an analyzed table
#[derive(Debug, Clone, Serialize)]
pub struct SummaryStats {
    pub total_reviews: usize,
    pub recommended: usize,
    pub not_recommended: usize,
    pub avg_compound: f64,
    pub recommended_avg_compound: f64,
    pub not_recommended_avg_compound: f64,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SummaryStats {
    /// Compute statistics from an analyzed table
    pub fn from_table(table: &ReviewTable) -> Self {
        let mut recommended = 0usize;
        let mut positive = 0usize;
        let mut neutral = 0usize;
        let mut negative = 0usize;
        let mut compound_sum = 0.0;
        let mut recommended_sum = 0.0;
        let mut not_recommended_sum = 0.0;

        for row in table.rows() {
            if row.review.recommended {
                recommended += 1;
            }
            if let Some(sentiment) = &row.sentiment {
                let compound = sentiment.scores.compound;
                compound_sum += compound;
                if row.review.recommended {
                    recommended_sum += compound;
                } else {
                    not_recommended_sum += compound;
                }
                match sentiment.label {
                    SentimentLabel::Positive => positive += 1,
                    SentimentLabel::Neutral => neutral += 1,
                    SentimentLabel::Negative => negative += 1,
                }
            }
        }

        let total = table.len();
        let not_recommended = total - recommended;
        let mean = |sum: f64, n: usize| if n > 0 { sum / n as f64 } else { 0.0 };

        Self {
            total_reviews: total,
            recommended,
            not_recommended,
            avg_compound: mean(compound_sum, total),
            recommended_avg_compound: mean(recommended_sum, recommended),
            not_recommended_avg_compound: mean(not_recommended_sum, not_recommended),
            positive,
            neutral,
            negative,
        }
    }
}

/// Result of a completed pipeline run
#[derive(Debug, Clone)]
pub struct AnalysisSummary {
    /// Rows in the analyzed table
    pub review_count: usize,
    /// Aggregate statistics
    pub stats: SummaryStats,
    /// The analyzed table, for the persistence and charting collaborators
    pub table: ReviewTable,
}

/// Run the pipeline over the paginated endpoint strategy
pub fn run_analysis<F: PageFetcher>(
    request: &AnalysisRequest,
    fetcher: &F,
) -> Result<AnalysisSummary, PipelineError> {
    run_analysis_with(request, fetcher, &CollectConfig::default())
}

/// Run the pipeline over the paginated endpoint strategy with explicit
/// collection bounds
pub fn run_analysis_with<F: PageFetcher>(
    request: &AnalysisRequest,
    fetcher: &F,
    config: &CollectConfig,
) -> Result<AnalysisSummary, PipelineError> {
    info!(
        product = %request.product_name,
        count = request.review_count,
        "collecting reviews from the paginated endpoint"
    );

    let outcome = PaginatedCollector::new(fetcher)
        .with_max_pages(config.max_pages)
        .with_page_delay(config.page_delay)
        .collect();

    resolve_and_analyze(request, outcome)
}

/// Run the pipeline over the rendered-page strategy
pub fn run_analysis_rendered<D: ReviewPageDriver>(
    request: &AnalysisRequest,
    driver: D,
) -> Result<AnalysisSummary, PipelineError> {
    info!(
        product = %request.product_name,
        count = request.review_count,
        "collecting reviews from the rendered page"
    );

    let outcome = ScrollingCollector::new(driver, request.review_count).collect();
    resolve_and_analyze(request, outcome)
}

/// Shared tail of both strategies: fallback resolution, assembly,
/// sentiment analysis, statistics.
pub fn resolve_and_analyze(
    request: &AnalysisRequest,
    outcome: RetrievalOutcome,
) -> Result<AnalysisSummary, PipelineError> {
    let records = outcome.resolve(request.review_count);

    let table = ReviewTable::assemble(records).ok_or(PipelineError::NoReviews)?;

    let analyzer = ReviewAnalyzer::new();
    let analyzed = analyzer.analyze(&table);
    let stats = SummaryStats::from_table(&analyzed);

    info!(
        rows = analyzed.len(),
        positive = stats.positive,
        neutral = stats.neutral,
        negative = stats.negative,
        "analysis complete"
    );

    Ok(AnalysisSummary {
        review_count: analyzed.len(),
        stats,
        table: analyzed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{PageFetcher, SteamError};
    use crate::collector::{RawElement, RenderError, ReviewPageDriver};

    /// Fetcher whose every request fails, forcing the sample fallback
    struct FailingFetcher;

    impl PageFetcher for FailingFetcher {
        fn fetch_page(&self, _cursor: &str, _num_per_page: usize) -> Result<String, SteamError> {
            Err(SteamError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE))
        }
    }

    fn request(count: usize) -> AnalysisRequest {
        AnalysisRequest::new("730", "Counter Strike 2", count).unwrap()
    }

    /// Driver whose page never shows a review element
    struct BlankDriver;

    impl ReviewPageDriver for BlankDriver {
        fn open(&mut self) -> Result<(), RenderError> {
            Ok(())
        }

        fn wait_for_reviews(&mut self, _timeout: Duration) -> Result<(), RenderError> {
            Err(RenderError::PresenceTimeout)
        }

        fn reveal_more(&mut self) {}

        fn elements(&mut self) -> Vec<RawElement> {
            Vec::new()
        }

        fn content_height(&mut self) -> u64 {
            0
        }
    }

    #[test]
    fn test_zero_review_count_is_rejected() {
        assert!(matches!(
            AnalysisRequest::new("730", "CS2", 0),
            Err(PipelineError::InvalidRequest)
        ));
    }

    #[test]
    fn test_forced_failure_yields_exactly_requested_rows() {
        let summary = run_analysis(&request(7), &FailingFetcher).unwrap();

        assert_eq!(summary.review_count, 7);
        assert_eq!(summary.table.len(), 7);
        assert!(summary
            .table
            .rows()
            .iter()
            .all(|row| row.sentiment.is_some()));
        assert!(summary.table.rows().iter().any(|row| row.review.recommended));
    }

    #[test]
    fn test_sample_positive_review_labels_positive() {
        let summary = run_analysis(&request(7), &FailingFetcher).unwrap();

        let row = summary
            .table
            .rows()
            .iter()
            .find(|row| row.review.text.starts_with("Great game!"))
            .unwrap();
        let sentiment = row.sentiment.as_ref().unwrap();

        assert!(row.review.recommended);
        assert_eq!(
            sentiment.cleaned_text,
            "great love playing friends graphics amazing gameplay smooth"
        );
        assert_eq!(sentiment.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_sample_negative_review_labels_negative() {
        let summary = run_analysis(&request(7), &FailingFetcher).unwrap();

        let row = summary
            .table
            .rows()
            .iter()
            .find(|row| row.review.text.starts_with("This game is terrible"))
            .unwrap();
        let sentiment = row.sentiment.as_ref().unwrap();

        assert!(sentiment.scores.compound < -0.05);
        assert_eq!(sentiment.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_rendered_strategy_falls_back_on_barren_page() {
        let summary = run_analysis_rendered(&request(5), BlankDriver).unwrap();

        assert_eq!(summary.review_count, 5);
        assert!(summary
            .table
            .rows()
            .iter()
            .all(|row| row.sentiment.is_some()));
    }

    #[test]
    fn test_stats_are_consistent_with_table() {
        let summary = run_analysis(&request(10), &FailingFetcher).unwrap();
        let stats = &summary.stats;

        assert_eq!(stats.total_reviews, 10);
        assert_eq!(stats.recommended + stats.not_recommended, 10);
        assert_eq!(stats.positive + stats.neutral + stats.negative, 10);
        assert!((-1.0..=1.0).contains(&stats.avg_compound));
    }

    #[test]
    fn test_collected_outcome_preserves_order() {
        let records = crate::collector::sample_reviews(3);
        let expected: Vec<String> = records.iter().map(|r| r.text.clone()).collect();

        let summary =
            resolve_and_analyze(&request(3), RetrievalOutcome::Collected(records)).unwrap();
        let actual: Vec<String> = summary
            .table
            .rows()
            .iter()
            .map(|row| row.review.text.clone())
            .collect();

        assert_eq!(actual, expected);
    }
}
