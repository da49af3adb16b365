//! Elapsed-time breakdown and daily progress.
//!
//! Month and year lengths are fixed approximations (30 and 365 days); nothing
//! here is calendar aware.

use chrono::Duration;
use streakline_core::Time;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = SECONDS_PER_MINUTE * 60;
const SECONDS_PER_DAY: i64 = SECONDS_PER_HOUR * 24;
const SECONDS_PER_MONTH: i64 = SECONDS_PER_DAY * 30;
const SECONDS_PER_YEAR: i64 = SECONDS_PER_DAY * 365;

const MILLIS_PER_DAY: i64 = SECONDS_PER_DAY * 1000;

/// A display unit, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeUnit {
    /// 365 days
    Year,
    /// 30 days
    Month,
    /// 24 hours
    Day,
    /// 60 minutes
    Hour,
    /// 60 seconds
    Minute,
    /// One second
    Second,
}

impl TimeUnit {
    /// Units in decomposition order.
    pub const DESCENDING: [TimeUnit; 6] = [
        TimeUnit::Year,
        TimeUnit::Month,
        TimeUnit::Day,
        TimeUnit::Hour,
        TimeUnit::Minute,
        TimeUnit::Second,
    ];

    /// Length of one unit in seconds.
    pub fn seconds(&self) -> i64 {
        match self {
            Self::Year => SECONDS_PER_YEAR,
            Self::Month => SECONDS_PER_MONTH,
            Self::Day => SECONDS_PER_DAY,
            Self::Hour => SECONDS_PER_HOUR,
            Self::Minute => SECONDS_PER_MINUTE,
            Self::Second => 1,
        }
    }

    /// Short badge key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Year => "y",
            Self::Month => "mo",
            Self::Day => "d",
            Self::Hour => "h",
            Self::Minute => "m",
            Self::Second => "s",
        }
    }

    /// Singular English name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        }
    }
}

/// One badge of a breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePart {
    /// Less than a second has elapsed (or the start is in the future).
    JustStarted,
    /// `value` whole units.
    Component {
        /// Unit
        unit: TimeUnit,
        /// Count of whole units
        value: i64,
    },
}

impl TimePart {
    /// Stable key, unique within a breakdown.
    pub fn key(&self) -> &'static str {
        match self {
            Self::JustStarted => "just-started",
            Self::Component { unit, .. } => unit.key(),
        }
    }

    /// Human-readable text, pluralized unless the value is exactly one.
    pub fn text(&self) -> String {
        match self {
            Self::JustStarted => "Just started".to_string(),
            Self::Component { unit, value } => {
                let suffix = if *value == 1 { "" } else { "s" };
                format!("{} {}{}", value, unit.name(), suffix)
            }
        }
    }
}

impl std::fmt::Display for TimePart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}

/// Ordered badges, largest unit first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationBreakdown {
    parts: Vec<TimePart>,
}

impl DurationBreakdown {
    /// The badges in display order. Never empty.
    pub fn parts(&self) -> &[TimePart] {
        &self.parts
    }

    /// Whether this is the "just started" sentinel.
    pub fn is_just_started(&self) -> bool {
        matches!(self.parts.as_slice(), [TimePart::JustStarted])
    }

    /// Seconds represented by the components (zero for the sentinel).
    pub fn total_seconds(&self) -> i64 {
        self.parts
            .iter()
            .map(|part| match part {
                TimePart::JustStarted => 0,
                TimePart::Component { unit, value } => unit.seconds() * value,
            })
            .sum()
    }

    /// Value recorded for `unit`, if it is shown.
    pub fn value_of(&self, unit: TimeUnit) -> Option<i64> {
        self.parts.iter().find_map(|part| match part {
            TimePart::Component { unit: u, value } if *u == unit => Some(*value),
            _ => None,
        })
    }
}

impl std::fmt::Display for DurationBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

/// Break the time between `start` and `now` into display units.
///
/// Under one second (including a start in the future) yields the single
/// [`TimePart::JustStarted`] badge. Otherwise every non-zero unit from years
/// down to minutes is listed, followed by seconds, which is always present
/// even when zero.
pub fn format_elapsed(start: Time, now: Time) -> DurationBreakdown {
    let diff_ms = now.signed_duration_since(start).num_milliseconds();
    if diff_ms < 1000 {
        return DurationBreakdown {
            parts: vec![TimePart::JustStarted],
        };
    }

    let mut remaining = diff_ms / 1000;
    let mut parts = Vec::with_capacity(TimeUnit::DESCENDING.len());

    for unit in &TimeUnit::DESCENDING[..5] {
        let value = remaining / unit.seconds();
        if value > 0 {
            parts.push(TimePart::Component { unit: *unit, value });
            remaining %= unit.seconds();
        }
    }

    parts.push(TimePart::Component {
        unit: TimeUnit::Second,
        value: remaining,
    });

    DurationBreakdown { parts }
}

/// Position within the current 24-hour cycle since `start`, as a percentage
/// in `[0, 100)`. Zero when `start` is in the future.
pub fn daily_progress(start: Time, now: Time) -> f64 {
    let diff_ms = now.signed_duration_since(start).num_milliseconds();
    if diff_ms < 0 {
        return 0.0;
    }
    (diff_ms % MILLIS_PER_DAY) as f64 / MILLIS_PER_DAY as f64 * 100.0
}

/// Time elapsed since `start`, clamped at zero.
pub fn elapsed_since(start: Time, now: Time) -> Duration {
    let diff = now.signed_duration_since(start);
    if diff < Duration::zero() {
        Duration::zero()
    } else {
        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> Time {
        chrono::Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap()
    }

    fn texts(breakdown: &DurationBreakdown) -> Vec<String> {
        breakdown.parts().iter().map(|p| p.text()).collect()
    }

    #[test]
    fn test_ninety_seconds() {
        let now = now();
        let breakdown = format_elapsed(now - Duration::milliseconds(90_000), now);
        assert_eq!(
            breakdown.parts(),
            &[
                TimePart::Component { unit: TimeUnit::Minute, value: 1 },
                TimePart::Component { unit: TimeUnit::Second, value: 30 },
            ]
        );
        assert_eq!(breakdown.to_string(), "1 minute 30 seconds");
    }

    #[test]
    fn test_under_one_second_is_just_started() {
        let now = now();
        let breakdown = format_elapsed(now - Duration::milliseconds(500), now);
        assert!(breakdown.is_just_started());
        assert_eq!(breakdown.parts()[0].key(), "just-started");
        assert_eq!(breakdown.to_string(), "Just started");

        assert!(format_elapsed(now, now).is_just_started());
        assert!(format_elapsed(now - Duration::milliseconds(999), now).is_just_started());
    }

    #[test]
    fn test_future_start_is_just_started() {
        let now = now();
        let breakdown = format_elapsed(now + Duration::days(2), now);
        assert!(breakdown.is_just_started());
        assert_eq!(breakdown.total_seconds(), 0);
    }

    #[test]
    fn test_exactly_one_second() {
        let now = now();
        let breakdown = format_elapsed(now - Duration::seconds(1), now);
        assert_eq!(texts(&breakdown), vec!["1 second"]);
    }

    #[test]
    fn test_trailing_seconds_always_present() {
        let now = now();
        let breakdown = format_elapsed(now - Duration::minutes(2), now);
        assert_eq!(texts(&breakdown), vec!["2 minutes", "0 seconds"]);

        let breakdown = format_elapsed(now - Duration::days(1), now);
        assert_eq!(texts(&breakdown), vec!["1 day", "0 seconds"]);
    }

    #[test]
    fn test_zero_units_in_the_middle_are_skipped() {
        let now = now();
        let start = now - (Duration::days(365) + Duration::days(3) + Duration::seconds(7));
        let breakdown = format_elapsed(start, now);
        assert_eq!(texts(&breakdown), vec!["1 year", "3 days", "7 seconds"]);
        assert_eq!(breakdown.value_of(TimeUnit::Month), None);
        assert_eq!(breakdown.value_of(TimeUnit::Day), Some(3));
    }

    #[test]
    fn test_approximate_months_and_years() {
        let now = now();
        // 400 days = 1 year (365) + 1 month (30) + 5 days
        let breakdown = format_elapsed(now - Duration::days(400), now);
        assert_eq!(texts(&breakdown), vec!["1 year", "1 month", "5 days", "0 seconds"]);

        // 360 days = 12 approximate months, still under a year
        let breakdown = format_elapsed(now - Duration::days(360), now);
        assert_eq!(breakdown.value_of(TimeUnit::Month), Some(12));
        assert_eq!(breakdown.value_of(TimeUnit::Year), None);
    }

    #[test]
    fn test_sub_second_remainder_is_floored() {
        let now = now();
        let breakdown = format_elapsed(now - Duration::milliseconds(61_999), now);
        assert_eq!(texts(&breakdown), vec!["1 minute", "1 second"]);
    }

    #[test]
    fn test_components_sum_to_whole_seconds() {
        let now = now();
        for ms in [1_000_i64, 59_999, 3_600_000, 86_399_999, 2_629_743_831, 31_556_952_000, 99_999_999_999] {
            let breakdown = format_elapsed(now - Duration::milliseconds(ms), now);
            assert_eq!(breakdown.total_seconds(), ms / 1000, "elapsed {} ms", ms);

            let units: Vec<TimeUnit> = breakdown
                .parts()
                .iter()
                .filter_map(|p| match p {
                    TimePart::Component { unit, .. } => Some(*unit),
                    TimePart::JustStarted => None,
                })
                .collect();
            assert!(units.windows(2).all(|w| w[0] < w[1]), "units out of order: {:?}", units);
            assert_eq!(units.last(), Some(&TimeUnit::Second));
        }
    }

    #[test]
    fn test_format_is_idempotent() {
        let now = now();
        let start = now - Duration::milliseconds(123_456_789);
        assert_eq!(format_elapsed(start, now), format_elapsed(start, now));
    }

    #[test]
    fn test_pluralization() {
        let one = TimePart::Component { unit: TimeUnit::Hour, value: 1 };
        let two = TimePart::Component { unit: TimeUnit::Hour, value: 2 };
        let zero = TimePart::Component { unit: TimeUnit::Second, value: 0 };
        assert_eq!(one.text(), "1 hour");
        assert_eq!(two.text(), "2 hours");
        assert_eq!(zero.text(), "0 seconds");
        assert_eq!(TimePart::Component { unit: TimeUnit::Month, value: 3 }.key(), "mo");
    }

    #[test]
    fn test_daily_progress_bounds() {
        let start = now();
        assert_eq!(daily_progress(start, start), 0.0);
        assert_eq!(daily_progress(start, start + Duration::milliseconds(86_400_000)), 0.0);
        assert_eq!(daily_progress(start, start + Duration::hours(6)), 25.0);
        assert_eq!(daily_progress(start, start + Duration::hours(36)), 50.0);

        let almost = daily_progress(start, start + Duration::milliseconds(86_399_999));
        assert!(almost < 100.0 && almost > 99.99);
    }

    #[test]
    fn test_daily_progress_future_start() {
        let now = now();
        assert_eq!(daily_progress(now + Duration::hours(3), now), 0.0);
    }

    #[test]
    fn test_elapsed_since_clamps() {
        let now = now();
        assert_eq!(elapsed_since(now + Duration::hours(1), now), Duration::zero());
        assert_eq!(elapsed_since(now - Duration::hours(1), now), Duration::hours(1));
    }
}
