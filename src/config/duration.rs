//! Custom serde module for duration strings like "3s", "500ms", "2m".

use serde::{self, Deserialize, Deserializer};
use std::time::Duration;

pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Seconds(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Seconds(secs)) => from_seconds(secs).map_err(serde::de::Error::custom),
        Some(Raw::Text(s)) => parse_duration(&s).map_err(serde::de::Error::custom),
        None => Ok(Duration::ZERO),
    }
}

/// Parses a number followed by an optional unit; a bare number means seconds.
pub(crate) fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Duration::ZERO);
    }

    let split = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit() && *c != '.')
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    let (value, unit) = s.split_at(split);

    let value: f64 = value
        .parse()
        .map_err(|_| format!("invalid duration number: {}", value))?;

    let seconds = match unit.trim() {
        "ms" => value / 1000.0,
        "s" | "" => value,
        "m" => value * 60.0,
        "h" => value * 3600.0,
        other => return Err(format!("unknown duration unit: {}", other)),
    };

    from_seconds(seconds)
}

fn from_seconds(seconds: f64) -> Result<Duration, String> {
    Duration::try_from_secs_f64(seconds).map_err(|e| format!("invalid duration {}: {}", seconds, e))
}
