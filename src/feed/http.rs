//! HTTP client for the bundle endpoint.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;

use super::{BundlePage, BundleSource, FeedError, PageRequest, Result};
use crate::config::FeedConfig;

/// Longest response body kept in a status error.
const MAX_ERROR_BODY: usize = 512;

/// HttpSource fetches bundle pages from the dashboard's JSON endpoint.
pub struct HttpSource {
    http_client: HttpClient,
    url: String,
}

impl HttpSource {
    /// Creates a source for the configured endpoint and filter.
    pub fn new(config: &FeedConfig) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http_client,
            url: endpoint_url(&config.url, config.filter.as_deref()),
        })
    }

    /// Returns the endpoint URL including the filter query.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl BundleSource for HttpSource {
    async fn fetch(&self, request: &PageRequest) -> Result<BundlePage> {
        let response = self
            .http_client
            .get(&self.url)
            .query(&request.query_pairs())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let body = body.chars().take(MAX_ERROR_BODY).collect();
            return Err(FeedError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let page: BundlePage = serde_json::from_str(&body)?;
        debug!(
            draw = request.draw,
            rows = page.data.len(),
            records_filtered = page.records_filtered,
            "Page fetched"
        );
        Ok(page)
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Joins the endpoint URL and the filter query string.
pub(crate) fn endpoint_url(base: &str, filter: Option<&str>) -> String {
    let filter = filter.map(str::trim).unwrap_or_default();
    if filter.is_empty() {
        return base.to_string();
    }
    let filter = filter.strip_prefix(['?', '&']).unwrap_or(filter);
    let sep = if base.contains('?') { '&' } else { '?' };
    format!("{}{}{}", base, sep, filter)
}
