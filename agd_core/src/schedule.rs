//! Expanding recurring schedules into concrete collection dates.

use std::iter::FusedIterator;

use chrono::{Days, NaiveDateTime};

use crate::{
    holiday::shift,
    model::{HolidayOverride, Occurrence, Schedule},
};

/// The span of time collections are computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: NaiveDateTime,
    pub days: u32,
}

impl Window {
    pub fn new(start: NaiveDateTime, days: u32) -> Self {
        Self { start, days }
    }

    /// The first instant after the window, `None` if it is not representable.
    pub fn end(&self) -> Option<NaiveDateTime> {
        self.start.checked_add_days(Days::new(self.days.into()))
    }
}

/// Get all collections of a schedule from its anchor up to the end of the window.
///
/// Every date is passed through the holiday overrides. The number of dates only
/// depends on the unshifted dates, a shift never adds or removes a collection.
pub fn expand<'a>(
    schedule: &'a Schedule,
    window: Window,
    overrides: &'a [HolidayOverride],
) -> Expansion<'a> {
    Expansion {
        schedule,
        overrides,
        cursor: Some(schedule.anchor),
        until: window.end(),
    }
}

/// Lazy iterator returned by [`expand`].
#[derive(Debug, Clone)]
pub struct Expansion<'a> {
    schedule: &'a Schedule,
    overrides: &'a [HolidayOverride],
    cursor: Option<NaiveDateTime>,
    until: Option<NaiveDateTime>,
}

impl<'a> Iterator for Expansion<'a> {
    type Item = Occurrence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (cursor, until) = (self.cursor?, self.until?);
        if cursor >= until {
            self.cursor = None;
            return None;
        }
        self.cursor =
            cursor.checked_add_days(Days::new(self.schedule.frequency_days.get().into()));
        Some(Occurrence {
            label: &self.schedule.label,
            date: shift(cursor, self.overrides),
        })
    }
}

impl FusedIterator for Expansion<'_> {}
