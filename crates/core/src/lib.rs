//! Streakline core data models.
//!
//! This crate defines the records shared by the progress computations,
//! the storage layer and the command-line front end.

#![warn(missing_docs)]

// Core identities
mod id;

// Records
mod tracker;
mod quote;

// Time source
mod clock;

// Re-exports
pub use id::*;

pub use tracker::{Tracker, TrackerType, TrackerError, parse_timestamp, format_timestamp};
pub use quote::Quote;
pub use clock::{Clock, SystemClock, FixedClock};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;

/// Result type for tracker operations.
pub type Result<T> = std::result::Result<T, TrackerError>;
