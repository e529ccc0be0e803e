//! Narration and row presentation configuration.

use serde::Deserialize;
use std::time::Duration;

use super::duration;
use crate::narration::Verbosity;

/// Narration settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NarrationConfig {
    /// "detailed" (default) or "brief".
    pub verbosity: Verbosity,
}

/// Row freshness thresholds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FreshnessConfig {
    /// Rows older than this are marked obsolete (default: 120s).
    #[serde(with = "duration")]
    pub obsolete_after: Duration,
    /// New or moving rows are highlighted while younger than this (default: 4s).
    #[serde(with = "duration")]
    pub highlight_window: Duration,
}

impl Default for FreshnessConfig {
    fn default() -> Self {
        Self {
            obsolete_after: Duration::from_secs(120),
            highlight_window: Duration::from_secs(4),
        }
    }
}
