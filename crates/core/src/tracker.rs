//! Tracker model - a named habit or addiction with a start instant.

use serde::{Deserialize, Serialize};
use crate::id::TrackerId;
use crate::{Result, Time};

/// A user-defined tracker. Elapsed time is measured from `start_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tracker {
    /// Unique identifier
    pub id: TrackerId,

    /// Display name (never empty)
    pub name: String,

    /// When the tracker started
    #[serde(with = "iso_millis")]
    pub start_date: Time,

    /// What is being tracked
    #[serde(rename = "type")]
    pub kind: TrackerType,
}

impl Tracker {
    /// Create a new tracker with a fresh id.
    pub fn new(name: impl AsRef<str>, kind: TrackerType, start_date: Time) -> Result<Self> {
        Ok(Self {
            id: TrackerId::new(),
            name: validate_name(name.as_ref())?,
            start_date,
            kind,
        })
    }

    /// Change the display name.
    pub fn rename(&mut self, name: impl AsRef<str>) -> Result<()> {
        self.name = validate_name(name.as_ref())?;
        Ok(())
    }

    /// Restart the timer from `now`.
    pub fn reset(&mut self, now: Time) {
        self.start_date = now;
    }
}

fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Tracker kind. Only affects presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackerType {
    /// Something to stay away from
    Addiction,
    /// Something to keep doing
    Habit,
}

impl TrackerType {
    /// All kinds, in picker order.
    pub const ALL: [TrackerType; 2] = [TrackerType::Addiction, TrackerType::Habit];

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Addiction => "addiction",
            Self::Habit => "habit",
        }
    }

    /// Capitalized display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Addiction => "Addiction",
            Self::Habit => "Habit",
        }
    }
}

impl Default for TrackerType {
    fn default() -> Self {
        Self::Addiction
    }
}

impl std::fmt::Display for TrackerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TrackerType {
    type Err = TrackerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "addiction" => Ok(Self::Addiction),
            "habit" => Ok(Self::Habit),
            other => Err(TrackerError::UnknownType(other.to_string())),
        }
    }
}

/// Errors raised while building or editing trackers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    /// Name was empty after trimming
    #[error("tracker name cannot be empty")]
    EmptyName,

    /// Unrecognized tracker type
    #[error("unknown tracker type: {0}")]
    UnknownType(String),

    /// Timestamp could not be parsed
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Parse an ISO-8601 / RFC 3339 timestamp into UTC.
pub fn parse_timestamp(s: &str) -> Result<Time> {
    chrono::DateTime::parse_from_rfc3339(s.trim())
        .map(|t| t.with_timezone(&chrono::Utc))
        .map_err(|_| TrackerError::InvalidTimestamp(s.to_string()))
}

/// Render a timestamp the way it is stored: UTC, millisecond precision, `Z` suffix.
pub fn format_timestamp(time: &Time) -> String {
    time.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// `startDate` wire format.
mod iso_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use crate::Time;

    pub fn serialize<S: Serializer>(time: &Time, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_timestamp(time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Time, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}
