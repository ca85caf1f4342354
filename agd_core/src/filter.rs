//! Deciding whether a collection is still ahead.

use chrono::NaiveDateTime;

/// A collection is upcoming if it is later than `reference` or on the same day.
///
/// The same-day branch keeps today's collection even when `reference` carries a
/// time of day past the collection's.
pub fn is_upcoming(date: NaiveDateTime, reference: NaiveDateTime) -> bool {
    date.date() == reference.date() || date > reference
}
