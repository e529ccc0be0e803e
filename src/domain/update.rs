//! Refresh metadata attached to every bundle row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Update holds the time the row was last recalculated on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    pub updated: DateTime<Utc>,
}

/// Dynamics indicates how the marginality moved since the previous refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dynamics {
    Rise,
    Fall,
    #[default]
    Neutral,
}

impl<'de> Deserialize<'de> for Dynamics {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(match raw.as_deref() {
            Some("rise") => Dynamics::Rise,
            Some("fall") => Dynamics::Fall,
            _ => Dynamics::Neutral,
        })
    }
}
