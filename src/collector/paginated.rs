//! # Paginated Collection
//!
//! Strategy A: walk the structured appreviews endpoint page by page,
//! following the cursor the source hands back. The source signals
//! exhaustion by omitting the cursor or returning the start sentinel
//! again; both end the walk cleanly.

use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::fallback::RetrievalOutcome;
use super::record::{CanonicalReview, ReviewsPage};
use crate::api::PageFetcher;

/// Cursor sentinel addressing the first page. The endpoint echoes this
/// exact value back when no further pages exist, so the comparison must
/// stay byte-for-byte.
pub const START_CURSOR: &str = "*";

/// Reviews requested per page
pub const NUM_PER_PAGE: usize = 100;

/// Default page-count bound
const DEFAULT_MAX_PAGES: usize = 5;

/// Default pause between page fetches
const DEFAULT_PAGE_DELAY: Duration = Duration::from_secs(2);

/// Cursor-driven review collector over a [`PageFetcher`]
pub struct PaginatedCollector<'a, F: PageFetcher> {
    fetcher: &'a F,
    max_pages: usize,
    page_delay: Duration,
}

impl<'a, F: PageFetcher> PaginatedCollector<'a, F> {
    /// Create a collector with the default bounds
    pub fn new(fetcher: &'a F) -> Self {
        Self {
            fetcher,
            max_pages: DEFAULT_MAX_PAGES,
            page_delay: DEFAULT_PAGE_DELAY,
        }
    }

    /// Bound the number of pages fetched
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Set the pause between page fetches
    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    /// Collect reviews until the source runs out of pages or the page
    /// bound is reached.
    ///
    /// Mid-loop failures never discard what was already collected: an
    /// unparseable payload or a fetch error after the first page ends the
    /// walk with the partial list. Only a failure before anything was
    /// collected reports as `Failed`.
    pub fn collect(&self) -> RetrievalOutcome {
        let mut reviews: Vec<CanonicalReview> = Vec::new();
        let mut cursor = START_CURSOR.to_string();
        let mut page = 0;

        while page < self.max_pages {
            let body = match self.fetcher.fetch_page(&cursor, NUM_PER_PAGE) {
                Ok(body) => body,
                Err(e) if reviews.is_empty() => {
                    warn!(error = %e, "page fetch failed before any reviews were collected");
                    return RetrievalOutcome::Failed(e.to_string());
                }
                Err(e) => {
                    warn!(error = %e, page = page + 1, "page fetch failed, keeping partial results");
                    break;
                }
            };

            let payload: ReviewsPage = match serde_json::from_str(&body) {
                Ok(payload) => payload,
                Err(e) => {
                    // End-of-data signal, not an error.
                    warn!(error = %e, page = page + 1, "no parseable payload, stopping pagination");
                    break;
                }
            };

            if payload.reviews.is_empty() {
                debug!(page = page + 1, "page carries no reviews, stopping");
                break;
            }

            for raw in payload.reviews {
                reviews.push(CanonicalReview::from_raw(raw));
            }

            match payload.cursor {
                Some(next) if !next.is_empty() && next != START_CURSOR => cursor = next,
                _ => {
                    debug!("source returned the start cursor again, no further pages");
                    break;
                }
            }

            page += 1;
            info!(page, collected = reviews.len(), "review page complete");

            if page < self.max_pages {
                thread::sleep(self.page_delay);
            }
        }

        if reviews.is_empty() {
            RetrievalOutcome::Empty
        } else {
            RetrievalOutcome::Collected(reviews)
        }
    }
}
