//! # Collector Module
//!
//! Review retrieval: the paginated endpoint strategy, the rendered-page
//! scrolling strategy, and the sample-data fallback both resolve through.

mod fallback;
mod paginated;
mod record;
mod rendered;

pub use fallback::{sample_reviews, RetrievalOutcome};
pub use paginated::{PaginatedCollector, NUM_PER_PAGE, START_CURSOR};
pub use record::{CanonicalReview, RawAuthor, RawReview, ReviewsPage};
pub use rendered::{RawElement, RenderError, ReviewPageDriver, ScrollingCollector};
