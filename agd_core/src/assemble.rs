//! Merging the expanded schedules into the list sent to clients.

use chrono::{Datelike, NaiveDateTime};

use crate::{
    filter::is_upcoming,
    model::{CalendarData, Occurrence, RenderedEntry},
    schedule::{expand, Window},
    weekday,
};

static FORMAT: &str = "%Y-%m-%d";

/// Limits of the computed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Days after the reference date which are searched for collections.
    pub window_days: u32,
    /// Maximum number of returned entries.
    pub max_entries: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            window_days: 30,
            max_entries: 10,
        }
    }
}

impl From<&Occurrence<'_>> for RenderedEntry {
    fn from(occurrence: &Occurrence<'_>) -> Self {
        Self {
            date: occurrence.date.format(FORMAT).to_string(),
            weekday: weekday::german_name(occurrence.date.weekday()).to_string(),
            label: occurrence.label.to_string(),
        }
    }
}

/// Build the rendered list from the occurrences of all schedules.
///
/// Occurrences before `reference` are dropped. The rest is sorted by day, keeping
/// the given order for collections on the same day, and cut to `max_entries`.
pub fn assemble<'a, S, O>(
    occurrences: S,
    reference: NaiveDateTime,
    max_entries: usize,
) -> Vec<RenderedEntry>
where
    S: IntoIterator<Item = O>,
    O: IntoIterator<Item = Occurrence<'a>>,
{
    let mut upcoming: Vec<Occurrence<'a>> = occurrences
        .into_iter()
        .flatten()
        .filter(|occurrence| is_upcoming(occurrence.date, reference))
        .collect();
    upcoming.sort_by_key(|occurrence| occurrence.date.date());
    upcoming.truncate(max_entries);
    upcoming.iter().map(RenderedEntry::from).collect()
}

impl CalendarData {
    /// Get the next collections, starting at `reference`.
    pub fn upcoming(&self, reference: NaiveDateTime, options: &Options) -> Vec<RenderedEntry> {
        let window = Window::new(reference, options.window_days);
        assemble(
            self.schedules
                .iter()
                .map(|schedule| expand(schedule, window, &self.holidays)),
            reference,
            options.max_entries,
        )
    }
}
