//! Moving collections which fall on a holiday.

use chrono::NaiveDateTime;

use crate::model::HolidayOverride;

/// Get the effective collection date.
///
/// The first active override whose holiday is on the same day as `date` wins.
/// Its target is not shifted again.
pub fn shift(date: NaiveDateTime, overrides: &[HolidayOverride]) -> NaiveDateTime {
    overrides
        .iter()
        .find(|holiday| holiday.active && holiday.holiday.date() == date.date())
        .map_or(date, |holiday| holiday.shift_to)
}
