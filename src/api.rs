//! REST API client for the detection backend
//!
//! Provides typed HTTP requests using gloo-net. The backend is an
//! external collaborator exposing `/stats`, `/video_feed` and a root
//! health probe; this client does no retrying of its own.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::RequestCache;

use crate::config::DashboardConfig;

/// API client for the detection backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Create an API client from dashboard configuration
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.api_url())
    }

    /// The configured backend base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the current detection statistics
    ///
    /// Responses are requested uncached so every poll observes the
    /// backend's latest counts. A non-2xx status or a network failure is
    /// an error; retrying is the caller's job (the next poll tick).
    pub async fn fetch_stats(&self) -> Result<DetectionStats, ApiError> {
        let url = format!("{}/stats", self.base_url);
        let resp = Request::get(&url)
            .cache(RequestCache::NoStore)
            .send()
            .await?;

        if resp.ok() {
            Ok(resp.json().await?)
        } else {
            Err(ApiError::Http(resp.status()))
        }
    }

    /// URL of the annotated video stream, consumed as an `<img>` source
    pub fn video_feed_url(&self) -> String {
        format!("{}/video_feed", self.base_url)
    }

    /// Best-effort health probe against the backend root
    ///
    /// Swallows all errors; success iff the backend answered 2xx.
    pub async fn check_health(&self) -> bool {
        match Request::get(&self.base_url)
            .cache(RequestCache::NoStore)
            .send()
            .await
        {
            Ok(resp) => resp.ok(),
            Err(_) => false,
        }
    }
}

// ============================================================================
// API Response Types
// ============================================================================

/// Aggregate detection counts reported by the backend
///
/// Trusted verbatim; `total` is not re-derived from the other counts.
/// Replaced wholesale on every successful poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DetectionStats {
    pub soldier: u64,
    pub civilian: u64,
    pub total: u64,
}

// ============================================================================
// Error Types
// ============================================================================

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(u16),

    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),
}
