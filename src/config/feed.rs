//! Bundle feed configuration.

use serde::Deserialize;
use std::time::Duration;

use super::duration;
use crate::feed::PageOrder;

/// Page sizes the endpoint accepts; anything else is served as 10 rows.
pub const PAGE_LENGTHS: [u32; 4] = [10, 25, 50, 100];

/// Bundle endpoint and polling settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// JSON endpoint URL (overridden by BUNDLES_FEED_URL env var).
    pub url: String,
    /// Query string with the user's filter selection, e.g. "?gte=1&crypto_exchange=Binance".
    pub filter: Option<String>,
    /// Rows per page: 10, 25, 50 or 100.
    pub page_length: u32,
    /// Time between page reloads (default: 3s).
    #[serde(with = "duration")]
    pub refresh_interval: Duration,
    /// HTTP request timeout (default: 10s).
    #[serde(with = "duration")]
    pub request_timeout: Duration,
    /// Server-side ordering; the server's own ordering applies when absent.
    pub order: Option<PageOrder>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            filter: None,
            page_length: 10,
            refresh_interval: Duration::from_secs(3),
            request_timeout: Duration::from_secs(10),
            order: None,
        }
    }
}
