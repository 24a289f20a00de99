//! # API Module
//!
//! Blocking HTTP access to the Steam appreviews endpoint.

mod steam;

pub use steam::{PageFetcher, SteamClient, SteamError};
