//! Row colour, age and transient highlight.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use std::time::Duration;

use crate::config::FreshnessConfig;
use crate::domain::{ArbitrageRoute, Dynamics};

/// Largest age shown in the age column, seconds.
pub const MAX_AGE_SECONDS: u64 = 999;

/// RowColor marks a bundle as profitable or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowColor {
    Positive,
    Negative,
}

impl RowColor {
    /// Positive marginality is green, zero and below are red.
    pub fn from_marginality(marginality: Decimal) -> Self {
        if marginality > Decimal::ZERO {
            RowColor::Positive
        } else {
            RowColor::Negative
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            RowColor::Positive => "green",
            RowColor::Negative => "red",
        }
    }
}

impl fmt::Display for RowColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css())
    }
}

/// Returns whole seconds elapsed since `updated`, rounded up.
///
/// Timestamps in the future count as zero.
pub fn elapsed_seconds(updated: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let millis = (now - updated).num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    (millis as u64).div_ceil(1000)
}

/// Returns the age shown in the age column, capped at [`MAX_AGE_SECONDS`].
pub fn update_age_seconds(updated: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    elapsed_seconds(updated, now).min(MAX_AGE_SECONDS)
}

/// RowHighlight is the transient CSS class applied to a freshly rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHighlight {
    None,
    /// Not refreshed for too long.
    Obsolete,
    /// Appeared on the latest refresh.
    Fresh,
    /// Marginality went down.
    Fall,
    /// Marginality went up.
    Rise,
}

impl RowHighlight {
    /// Picks the highlight for a row `elapsed_seconds` old, uncapped.
    ///
    /// Staleness wins over everything; the other highlights only apply while
    /// the row is inside the highlight window.
    pub fn classify(route: &ArbitrageRoute, elapsed_seconds: u64, cfg: &FreshnessConfig) -> Self {
        let age = Duration::from_secs(elapsed_seconds);
        if age > cfg.obsolete_after {
            return RowHighlight::Obsolete;
        }
        if age >= cfg.highlight_window {
            return RowHighlight::None;
        }
        if route.is_new() {
            return RowHighlight::Fresh;
        }
        match route.dynamics {
            Dynamics::Fall => RowHighlight::Fall,
            Dynamics::Rise => RowHighlight::Rise,
            Dynamics::Neutral => RowHighlight::None,
        }
    }

    /// Returns the CSS class, if any.
    pub fn css(&self) -> Option<&'static str> {
        match self {
            RowHighlight::None => None,
            RowHighlight::Obsolete => Some("obsolete"),
            RowHighlight::Fresh => Some("stylish"),
            RowHighlight::Fall => Some("fall"),
            RowHighlight::Rise => Some("rise"),
        }
    }
}
