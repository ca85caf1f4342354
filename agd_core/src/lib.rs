//! This crate computes the upcoming garbage collection dates of an AWB calendar.
//!
//! The raw calendars are read from the AWB REST API, see [`garbage_client::URL`].
//! Every calendar is a recurring schedule which is expanded into concrete dates,
//! moved by the holiday overrides of the same response and rendered as a short list.

pub mod assemble;
pub mod filter;
pub mod garbage_client;
pub mod holiday;
pub mod model;
pub mod schedule;
pub mod weekday;

pub use assemble::Options;
pub use model::{CalendarData, HolidayOverride, Occurrence, RecordError, RenderedEntry, Schedule};
