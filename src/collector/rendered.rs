//! # Rendered-Page Collection
//!
//! Strategy B: drive a rendered review page, scrolling to reveal more
//! content until the requested count is reached or the page stops
//! growing. The browser session itself is an opaque capability behind
//! [`ReviewPageDriver`]; the collector only sequences it.

use chrono::{NaiveDate, Utc};
use regex::Regex;
use std::sync::LazyLock;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

use super::fallback::RetrievalOutcome;
use super::record::CanonicalReview;

/// Leading decimal number of an hours label, e.g. "150.5 hrs on record"
static HOURS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+\.?\d*)").unwrap());

/// Default wait for the first review element to appear
const DEFAULT_PRESENCE_TIMEOUT: Duration = Duration::from_secs(10);

/// Default pause after each reveal, letting asynchronous content load
const DEFAULT_REVEAL_DELAY: Duration = Duration::from_secs(2);

/// Errors a page driver can surface
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("timed out waiting for review elements")]
    PresenceTimeout,

    #[error("navigation failed: {0}")]
    Navigation(String),
}

/// Raw field views of one rendered review element.
///
/// Every field is best-effort: a missing node simply yields `None` and the
/// collector substitutes the documented default. A failure on one field
/// never drops the element.
#[derive(Debug, Clone, Default)]
pub struct RawElement {
    /// Inner text of the review body node
    pub text: Option<String>,
    /// Class attribute of the element itself
    pub class_attr: Option<String>,
    /// Text of the verdict title node
    pub title_text: Option<String>,
    /// Text of the hours-on-record label
    pub hours_text: Option<String>,
    /// Text of the posted-date label
    pub date_text: Option<String>,
}

/// Opaque rendered-page session the scrolling collector runs against.
///
/// Implementations own the underlying browser session and must release it
/// on drop, so every exit path of the collector, normal completion, early
/// termination or error, closes the session.
pub trait ReviewPageDriver {
    /// Navigate to the product's review view
    fn open(&mut self) -> Result<(), RenderError>;

    /// Block until at least one review element is present, bounded by
    /// `timeout`
    fn wait_for_reviews(&mut self, timeout: Duration) -> Result<(), RenderError>;

    /// Trigger a reveal action (scroll to the bottom of the view)
    fn reveal_more(&mut self);

    /// Enumerate all review elements currently present, in page order
    fn elements(&mut self) -> Vec<RawElement>;

    /// Measure the total rendered content height
    fn content_height(&mut self) -> u64;
}

/// Incremental-reveal review collector
pub struct ScrollingCollector<D: ReviewPageDriver> {
    driver: D,
    requested: usize,
    presence_timeout: Duration,
    reveal_delay: Duration,
}

impl<D: ReviewPageDriver> ScrollingCollector<D> {
    /// Create a collector that gathers up to `requested` reviews
    pub fn new(driver: D, requested: usize) -> Self {
        Self {
            driver,
            requested,
            presence_timeout: DEFAULT_PRESENCE_TIMEOUT,
            reveal_delay: DEFAULT_REVEAL_DELAY,
        }
    }

    /// Bound the wait for the first review element
    pub fn with_presence_timeout(mut self, timeout: Duration) -> Self {
        self.presence_timeout = timeout;
        self
    }

    /// Set the pause after each reveal
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Drive the page until the requested count is reached, the content
    /// stops growing, or the presence wait times out.
    ///
    /// Consumes the collector; the driver (and its session) is released
    /// when this returns, on every path.
    pub fn collect(mut self) -> RetrievalOutcome {
        if let Err(e) = self.driver.open() {
            warn!(error = %e, "could not open review page");
            return RetrievalOutcome::Failed(e.to_string());
        }

        if let Err(e) = self.driver.wait_for_reviews(self.presence_timeout) {
            // No reviews became visible; not a hard failure of the pipeline.
            warn!(error = %e, "no review elements appeared, aborting strategy");
            return RetrievalOutcome::Empty;
        }

        let mut reviews: Vec<CanonicalReview> = Vec::new();
        let mut processed = 0usize;
        let mut last_height = self.driver.content_height();

        while reviews.len() < self.requested {
            self.driver.reveal_more();
            thread::sleep(self.reveal_delay);

            let elements = self.driver.elements();
            for element in elements.iter().skip(processed) {
                if reviews.len() >= self.requested {
                    break;
                }
                reviews.push(extract_review(element));
                processed += 1;
            }

            let new_height = self.driver.content_height();
            if new_height == last_height {
                // Stagnation: nothing further will load.
                debug!(height = new_height, "content height unchanged, stopping");
                break;
            }
            last_height = new_height;
        }

        if reviews.is_empty() {
            RetrievalOutcome::Empty
        } else {
            RetrievalOutcome::Collected(reviews)
        }
    }
}

/// Build a canonical review from one element, defaulting every field that
/// failed to extract.
fn extract_review(element: &RawElement) -> CanonicalReview {
    let text = element
        .text
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_string();

    let from_class = element
        .class_attr
        .as_deref()
        .map(|c| c.to_ascii_lowercase().contains("recommended")
            && !c.to_ascii_lowercase().contains("not_recommended"))
        .unwrap_or(false);
    let from_title = element
        .title_text
        .as_deref()
        .map(|t| t.trim().eq_ignore_ascii_case("recommended"))
        .unwrap_or(false);
    let recommended = from_class || from_title;

    let playtime_hours = element
        .hours_text
        .as_deref()
        .and_then(|t| HOURS_REGEX.find(t))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0);

    let posted_date = element
        .date_text
        .as_deref()
        .and_then(|t| NaiveDate::parse_from_str(t.trim(), "%Y-%m-%d").ok())
        .unwrap_or_else(|| Utc::now().date_naive());

    CanonicalReview::new(text, recommended, playtime_hours, posted_date)
}
