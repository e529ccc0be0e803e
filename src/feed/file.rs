//! Bundle pages saved to disk.

use async_trait::async_trait;
use std::path::PathBuf;

use super::{BundlePage, BundleSource, PageRequest, Result};

/// FileSource serves pages from a saved endpoint response.
///
/// The file holds one full response; each request is sliced out of its rows.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl BundleSource for FileSource {
    async fn fetch(&self, request: &PageRequest) -> Result<BundlePage> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let page: BundlePage = serde_json::from_str(&content)?;
        Ok(page.slice(request))
    }

    fn name(&self) -> &str {
        "file"
    }
}
