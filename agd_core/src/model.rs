//! Calendar records decoded from the upstream API and the shapes derived from them.

use std::num::NonZeroU32;

use chrono::NaiveDateTime;
use serde::Serialize;

/// Why a single calendar or holiday record was rejected.
#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("timestamp {0} is out of range")]
    InvalidTimestamp(i64),
    #[error("frequency {0} is not a positive number of days")]
    InvalidFrequency(i64),
}

/// One recurring collection stream, e.g. residual waste every 14 days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub label: String,
    pub anchor: NaiveDateTime,
    pub frequency_days: NonZeroU32,
}

impl Schedule {
    /// Build a schedule, rejecting frequencies which would never advance.
    pub fn new(
        label: impl Into<String>,
        anchor: NaiveDateTime,
        frequency_days: i64,
    ) -> Result<Self, RecordError> {
        let frequency = u32::try_from(frequency_days)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(RecordError::InvalidFrequency(frequency_days))?;
        Ok(Self {
            label: label.into(),
            anchor,
            frequency_days: frequency,
        })
    }
}

/// A collection on `holiday` which takes place on `shift_to` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayOverride {
    pub active: bool,
    pub holiday: NaiveDateTime,
    pub shift_to: NaiveDateTime,
}

/// A single computed collection, already moved by holiday overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence<'a> {
    pub label: &'a str,
    pub date: NaiveDateTime,
}

/// The entry as it is sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedEntry {
    #[serde(rename = "termin")]
    pub date: String,
    #[serde(rename = "wochentag")]
    pub weekday: String,
    #[serde(rename = "typ")]
    pub label: String,
}

/// Everything usable from one upstream response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarData {
    pub schedules: Vec<Schedule>,
    pub holidays: Vec<HolidayOverride>,
    /// Number of records which were dropped while decoding.
    pub skipped: usize,
}
