//! Progress computations for trackers.
//!
//! Elapsed-time badges, daily progress, milestones and the daily quote.
//! Everything here is pure: callers pass the current instant in.

#![warn(missing_docs)]

pub mod elapsed;
pub mod milestone;
pub mod snapshot;
pub mod quote;

pub use elapsed::{format_elapsed, daily_progress, elapsed_since, DurationBreakdown, TimePart, TimeUnit};
pub use milestone::{
    evaluate_milestones, tracker_milestones, Milestone, Threshold, JUST_FOR_TODAY, STANDARD_THRESHOLDS,
};
pub use snapshot::{snapshot_all, TrackerSnapshot};
pub use quote::quote_of_the_day;
