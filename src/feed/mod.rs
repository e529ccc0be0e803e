//! Bundle feed: the paginated JSON endpoint and its sources.

mod file;
mod http;
mod page;

pub use file::FileSource;
pub use http::HttpSource;
pub use page::{BundlePage, OrderColumn, OrderDirection, PageOrder, PageRequest};

use async_trait::async_trait;
use thiserror::Error;

/// Feed errors.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for feed operations.
pub type Result<T> = std::result::Result<T, FeedError>;

/// BundleSource supplies pages of bundle rows.
#[async_trait]
pub trait BundleSource: Send + Sync {
    /// Fetches the page selected by `request`.
    async fn fetch(&self, request: &PageRequest) -> Result<BundlePage>;

    /// Short source name for logs.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests;
