//! Per-tracker display data.

use streakline_core::{Time, Tracker, TrackerId, TrackerType};

use crate::elapsed::{daily_progress, format_elapsed, DurationBreakdown};

/// Everything a tracker card shows at a point in time.
#[derive(Debug, Clone)]
pub struct TrackerSnapshot {
    /// Tracker id
    pub id: TrackerId,

    /// Tracker name
    pub name: String,

    /// Tracker kind
    pub kind: TrackerType,

    /// When the tracker started
    pub started: Time,

    /// Elapsed-time badges
    pub elapsed: DurationBreakdown,

    /// Today's progress, percent in `[0, 100)`
    pub daily_progress: f64,
}

impl TrackerSnapshot {
    /// Capture the display state of `tracker` at `now`.
    pub fn capture(tracker: &Tracker, now: Time) -> Self {
        Self {
            id: tracker.id.clone(),
            name: tracker.name.clone(),
            kind: tracker.kind,
            started: tracker.start_date,
            elapsed: format_elapsed(tracker.start_date, now),
            daily_progress: daily_progress(tracker.start_date, now),
        }
    }
}

/// Snapshots of every tracker, most recently started first.
pub fn snapshot_all(trackers: &[Tracker], now: Time) -> Vec<TrackerSnapshot> {
    let mut snapshots: Vec<TrackerSnapshot> = trackers
        .iter()
        .map(|t| TrackerSnapshot::capture(t, now))
        .collect();
    snapshots.sort_by(|a, b| b.started.cmp(&a.started));
    snapshots
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> Time {
        chrono::Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_capture() {
        let tracker = Tracker::new("Reading", TrackerType::Habit, now() - Duration::hours(30)).unwrap();
        let snapshot = TrackerSnapshot::capture(&tracker, now());
        assert_eq!(snapshot.name, "Reading");
        assert_eq!(snapshot.kind.label(), "Habit");
        assert_eq!(snapshot.elapsed.to_string(), "1 day 6 hours 0 seconds");
        assert_eq!(snapshot.daily_progress, 25.0);
    }

    #[test]
    fn test_snapshot_all_sorted_by_start_desc() {
        let old = Tracker::new("Old", TrackerType::Addiction, now() - Duration::days(90)).unwrap();
        let new = Tracker::new("New", TrackerType::Habit, now() - Duration::minutes(5)).unwrap();
        let mid = Tracker::new("Mid", TrackerType::Habit, now() - Duration::days(3)).unwrap();

        let snapshots = snapshot_all(&[old, new, mid], now());
        let names: Vec<&str> = snapshots.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["New", "Mid", "Old"]);
    }
}
