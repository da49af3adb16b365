//! Milestone evaluation.
//!
//! Turns a list of trackers into the milestones they have crossed, ordered
//! for display: the daily "Just for Today" entries first, then one-time
//! thresholds from most to least recently achieved.

use chrono::Duration;
use serde::Serialize;
use streakline_core::{Time, Tracker, TrackerId, TrackerType};
use tracing::trace;

const DAYS_PER_YEAR: i64 = 365;

/// Label of the daily recurring pseudo-milestone.
pub const JUST_FOR_TODAY: &str = "Just for Today";

/// A one-time elapsed-duration threshold.
#[derive(Debug, Clone, Copy)]
pub struct Threshold {
    /// Short key
    pub key: &'static str,
    /// Display label
    pub label: &'static str,
    /// Length in days
    pub days: i64,
}

impl Threshold {
    /// Threshold length.
    pub fn duration(&self) -> Duration {
        Duration::days(self.days)
    }
}

/// Fixed thresholds, shortest first.
pub const STANDARD_THRESHOLDS: [Threshold; 7] = [
    Threshold { key: "24h", label: "24 Hours", days: 1 },
    Threshold { key: "1w", label: "1 Week", days: 7 },
    Threshold { key: "30d", label: "30 Days", days: 30 },
    Threshold { key: "60d", label: "60 Days", days: 60 },
    Threshold { key: "90d", label: "90 Days", days: 90 },
    Threshold { key: "6mo", label: "6 Months", days: 182 },
    Threshold { key: "1y", label: "1 Year", days: DAYS_PER_YEAR },
];

/// A milestone a tracker has achieved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// `<trackerId>-<key>`, unique per evaluation
    pub id: String,
    /// Source tracker
    pub tracker_id: TrackerId,
    /// Source tracker name
    pub tracker_name: String,
    /// Source tracker kind
    pub tracker_type: TrackerType,
    /// Short threshold key
    pub key: String,
    /// Display label, e.g. "30 Days"
    pub label: String,
    /// Celebratory text
    pub message: String,
    /// When the threshold was crossed
    pub achieved_at: Time,
    /// Instant used for ordering
    pub sort_key: Time,
    /// Re-achieved every day
    pub is_daily_recurring: bool,
}

impl Milestone {
    fn threshold(tracker: &Tracker, key: String, label: String, achieved_at: Time) -> Self {
        let message = format!("You've reached {} of {}!", label, tracker.name);
        Self {
            id: format!("{}-{}", tracker.id, key),
            tracker_id: tracker.id.clone(),
            tracker_name: tracker.name.clone(),
            tracker_type: tracker.kind,
            key,
            label,
            message,
            achieved_at,
            sort_key: achieved_at,
            is_daily_recurring: false,
        }
    }

    fn just_for_today(tracker: &Tracker, achieved_at: Time, now: Time) -> Self {
        Self {
            id: format!("{}-just-for-today", tracker.id),
            tracker_id: tracker.id.clone(),
            tracker_name: tracker.name.clone(),
            tracker_type: tracker.kind,
            key: "just-for-today".to_string(),
            label: JUST_FOR_TODAY.to_string(),
            message: format!("Just for today: keep going with {}.", tracker.name),
            achieved_at,
            sort_key: now,
            is_daily_recurring: true,
        }
    }
}

/// Every milestone each tracker has reached by `now`, in display order.
///
/// Trackers whose start lies in the future contribute nothing.
pub fn evaluate_milestones(trackers: &[Tracker], now: Time) -> Vec<Milestone> {
    let mut milestones: Vec<Milestone> = trackers
        .iter()
        .flat_map(|tracker| tracker_milestones(tracker, now))
        .collect();

    // Stable: equal keys keep tracker order, then table order.
    milestones.sort_by(|a, b| {
        b.is_daily_recurring
            .cmp(&a.is_daily_recurring)
            .then_with(|| b.sort_key.cmp(&a.sort_key))
    });

    trace!(trackers = trackers.len(), milestones = milestones.len(), "evaluated milestones");
    milestones
}

/// Milestones of a single tracker, in threshold order.
pub fn tracker_milestones(tracker: &Tracker, now: Time) -> Vec<Milestone> {
    let start = tracker.start_date;
    if start > now {
        return Vec::new();
    }
    let elapsed = now.signed_duration_since(start);
    let mut milestones = Vec::new();

    if elapsed >= Duration::days(1) {
        milestones.push(Milestone::just_for_today(tracker, start + Duration::days(1), now));
    }

    for threshold in STANDARD_THRESHOLDS.iter() {
        if elapsed >= threshold.duration() {
            milestones.push(Milestone::threshold(
                tracker,
                threshold.key.to_string(),
                threshold.label.to_string(),
                start + threshold.duration(),
            ));
        }
    }

    let mut year = 2;
    while elapsed >= Duration::days(year * DAYS_PER_YEAR) {
        milestones.push(Milestone::threshold(
            tracker,
            format!("{}y", year),
            format!("{} Years", year),
            start + Duration::days(year * DAYS_PER_YEAR),
        ));
        year += 1;
    }

    milestones
}
