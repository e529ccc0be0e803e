//! Configuration loading and validation for the bundle narrator.
//!
//! Uses serde_yaml to load YAML configuration files; the feed URL can be
//! overridden from the environment.

mod app;
mod duration;
mod error;
mod feed;
mod narration;

pub use app::AppConfig;
pub use error::ConfigError;
pub use feed::{FeedConfig, PAGE_LENGTHS};
pub use narration::{FreshnessConfig, NarrationConfig};

use serde::Deserialize;
use std::{env, fs};

/// Environment variable that replaces `feed.url`.
pub const FEED_URL_ENV: &str = "BUNDLES_FEED_URL";

/// Root configuration structure.
///
/// Required sections: app. Optional sections: feed, narration, freshness.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Application-level settings like name and log level.
    pub app: AppConfig,
    /// Bundle endpoint and polling.
    #[serde(default)]
    pub feed: FeedConfig,
    /// Narration verbosity.
    #[serde(default)]
    pub narration: NarrationConfig,
    /// Row freshness thresholds.
    #[serde(default)]
    pub freshness: FreshnessConfig,
}

impl Config {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Loads `.env` first (if present), then the YAML file, then applies
    /// `BUNDLES_FEED_URL` over `feed.url`.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_string(),
            source,
        })?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        config.override_feed_url(env::var(FEED_URL_ENV).ok());
        config.validate()?;

        Ok(config)
    }

    /// Defaults for narrating saved pages when no config file exists.
    pub fn offline() -> Self {
        Self {
            app: AppConfig {
                name: env!("CARGO_PKG_NAME").to_string(),
                log_level: None,
            },
            feed: FeedConfig::default(),
            narration: NarrationConfig::default(),
            freshness: FreshnessConfig::default(),
        }
    }

    /// Replaces the feed URL when an override is set and non-empty.
    fn override_feed_url(&mut self, url: Option<String>) {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.feed.url = url;
        }
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.app.name.is_empty() {
            return Err(ConfigError::Validation("app.name is required".into()));
        }

        if self.feed.url.is_empty() {
            return Err(ConfigError::Validation(format!(
                "feed.url is required (or set {} env var)",
                FEED_URL_ENV
            )));
        }

        if !self.feed.url.starts_with("http://") && !self.feed.url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "feed.url must be an http(s) URL, got {}",
                self.feed.url
            )));
        }

        if !PAGE_LENGTHS.contains(&self.feed.page_length) {
            return Err(ConfigError::Validation(format!(
                "feed.page_length must be one of {:?}",
                PAGE_LENGTHS
            )));
        }

        if self.feed.refresh_interval.is_zero() {
            return Err(ConfigError::Validation(
                "feed.refresh_interval must be positive".into(),
            ));
        }

        if self.freshness.highlight_window > self.freshness.obsolete_after {
            return Err(ConfigError::Validation(
                "freshness.highlight_window must not exceed freshness.obsolete_after".into(),
            ));
        }

        Ok(())
    }
}
