//! Daily quote selection.

use streakline_core::{Quote, Time};

/// The quote shown for the calendar day (UTC) containing `now`.
///
/// Stays the same all day and walks through the list one entry per day.
pub fn quote_of_the_day(quotes: &[Quote], now: Time) -> Option<&Quote> {
    if quotes.is_empty() {
        return None;
    }
    let day = now.timestamp().div_euclid(86_400);
    let index = day.rem_euclid(quotes.len() as i64) as usize;
    quotes.get(index)
}
