//! # Steam Review Sentiment
//!
//! Library for collecting Steam product reviews and scoring their sentiment
//! with a lexicon/rule-based intensity model.
//!
//! ## Modules
//!
//! - `api` - Blocking HTTP client for the Steam appreviews endpoint
//! - `collector` - Review retrieval strategies and the sample-data fallback
//! - `sentiment` - Text normalization and sentiment scoring
//! - `table` - Row-oriented review table with the fixed column contract
//! - `pipeline` - End-to-end collect/assemble/analyze boundary
//!
//! ## Example Usage
//!
//! ```no_run
//! use steam_sentiment::api::SteamClient;
//! use steam_sentiment::pipeline::{run_analysis, AnalysisRequest};
//!
//! let request = AnalysisRequest::new("730", "Counter Strike 2", 50).unwrap();
//! let client = SteamClient::new("730");
//! let summary = run_analysis(&request, &client).unwrap();
//!
//! println!("collected {} reviews", summary.review_count);
//! ```

pub mod api;
pub mod collector;
pub mod pipeline;
pub mod sentiment;
pub mod table;

pub use api::SteamClient;
pub use collector::{CanonicalReview, RetrievalOutcome};
pub use pipeline::{run_analysis, AnalysisRequest, AnalysisSummary, PipelineError};
pub use sentiment::{ReviewAnalyzer, SentimentLabel, SentimentScores, TextNormalizer};
pub use table::ReviewTable;
