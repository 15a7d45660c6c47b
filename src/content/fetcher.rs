// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP page fetching with scheme validation and size capping
//!
//! Returns raw markup for the extractor; oversized pages are cut at a fixed
//! character limit with an explicit marker.

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::utils::text::{char_len, truncate_with_marker};

/// Maximum characters of markup returned from a single fetch
pub const MAX_FETCH_CHARS: usize = 50_000;

/// Page fetch error types
#[derive(Debug, Clone)]
pub enum FetchError {
    /// URL is not an absolute http/https URL
    InvalidScheme(String),
    /// Request timed out
    Timeout(String),
    /// HTTP transport error
    HttpError(String),
    /// HTTP non-success status
    HttpStatus(u16, String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidScheme(_) => write!(f, "Error: URL must start with http:// or https://"),
            Self::Timeout(url) => write!(f, "Error accessing URL: timed out fetching {}", url),
            Self::HttpError(msg) => write!(f, "Error accessing URL: {}", msg),
            Self::HttpStatus(code, url) => {
                write!(f, "Error accessing URL: HTTP {} for {}", code, url)
            }
        }
    }
}

impl std::error::Error for FetchError {}

/// Fetches page markup over HTTP
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Create a new page fetcher with the given request timeout
    pub fn new(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent("Mozilla/5.0 (compatible; FabstirSummarizer/1.0; +https://fabstir.com)")
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch raw markup from a URL
    ///
    /// The scheme is validated before any network access. Responses longer
    /// than [`MAX_FETCH_CHARS`] characters are cut and marked.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        Self::validate_scheme(url)?;

        debug!("Fetching page: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::HttpError(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16(), url.to_string()));
        }

        let markup = response
            .text()
            .await
            .map_err(|e| FetchError::HttpError(e.to_string()))?;

        info!("Fetched {} chars from: {}", char_len(&markup), url);

        Ok(truncate_with_marker(&markup, MAX_FETCH_CHARS))
    }

    /// Check that the URL is absolute and uses http or https
    pub fn validate_scheme(url: &str) -> Result<(), FetchError> {
        match Url::parse(url) {
            Ok(parsed) if ["http", "https"].contains(&parsed.scheme()) => Ok(()),
            _ => Err(FetchError::InvalidScheme(url.to_string())),
        }
    }
}
