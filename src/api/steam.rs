//! # Steam API Client
//!
//! Blocking client for the Steam appreviews endpoint. Retrieval is
//! strictly sequential; each page request blocks until the source
//! responds, and the next cursor comes out of the previous payload.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Steam store appreviews base URL
const STEAM_BASE_URL: &str = "https://store.steampowered.com/appreviews";

/// Request timeout for one page fetch
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Browser-like user agent; the store endpoint throttles bare clients
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Errors that can occur when fetching a review page
#[derive(Error, Debug)]
pub enum SteamError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(StatusCode),
}

/// One-page fetch capability the paginated collector runs against.
///
/// The production implementation is [`SteamClient`]; tests inject scripted
/// fetchers to drive the pagination loop without network I/O.
pub trait PageFetcher {
    /// Fetch the raw body of the page addressed by `cursor`
    fn fetch_page(&self, cursor: &str, num_per_page: usize) -> Result<String, SteamError>;
}

/// Blocking Steam appreviews client
pub struct SteamClient {
    client: Client,
    base_url: String,
    app_id: String,
}

impl SteamClient {
    /// Create a client for one product
    pub fn new(app_id: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: STEAM_BASE_URL.to_string(),
            app_id: app_id.into(),
        }
    }

    /// Point the client at a different base URL (local fixtures)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Product identifier this client fetches reviews for
    pub fn app_id(&self) -> &str {
        &self.app_id
    }
}

impl PageFetcher for SteamClient {
    fn fetch_page(&self, cursor: &str, num_per_page: usize) -> Result<String, SteamError> {
        let url = format!("{}/{}", self.base_url, self.app_id);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("json", "1"),
                ("cursor", cursor),
                ("num_per_page", &num_per_page.to_string()),
                ("filter", "all"),
                ("language", "all"),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SteamError::Status(status));
        }

        Ok(response.text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_app_id() {
        let client = SteamClient::new("730");
        assert_eq!(client.app_id(), "730");
    }

    #[test]
    fn test_base_url_override() {
        let client = SteamClient::new("730").with_base_url("http://127.0.0.1:9999");
        assert_eq!(client.base_url, "http://127.0.0.1:9999");
    }
}
