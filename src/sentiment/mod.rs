//! # Sentiment Module
//!
//! Text normalization and lexicon-based sentiment scoring for reviews.

mod analyzer;
mod lexicon;
mod normalize;

pub use analyzer::{
    ReviewAnalyzer, SentimentLabel, SentimentScores, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD,
};
pub use lexicon::GameLexicon;
pub use normalize::TextNormalizer;
