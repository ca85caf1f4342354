//! This client fetches the AWB calendar and turns it into upcoming collection dates.

use std::time::Duration;

use chrono::{DateTime, Days, NaiveDateTime, TimeZone};
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    StatusCode,
};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    assemble::Options,
    model::{CalendarData, HolidayOverride, RecordError, RenderedEntry, Schedule},
};

pub static URL: &str = "https://blupassionsystem.de/city/rest/garbageorte/getAllGarbageCalendar";

/// Errors which make a whole fetch unusable.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("the HTTP client could not be built: {0}")]
    Client(#[source] reqwest::Error),
    #[error("a window of {0} days does not fit into the calendar")]
    WindowOutOfRange(u32),
    #[error("the calendar server did not answer in time")]
    Timeout,
    #[error("the calendar server is unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),
    #[error("the calendar server responded with {0}")]
    Status(StatusCode),
    #[error("the calendar server sent a malformed response: {0}")]
    Payload(#[from] serde_json::Error),
}

impl FetchError {
    fn is_transient(&self) -> bool {
        matches!(self, FetchError::Timeout | FetchError::Unreachable(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Unreachable(err)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub url: String,
    /// Timeout of a single attempt.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: String::from(URL),
            timeout: Duration::from_secs(10),
        }
    }
}

/// The calendar server together with the HTTP client used to reach it.
#[derive(Debug, Clone)]
pub struct GarbageClient {
    client: reqwest::Client,
    url: String,
}

impl GarbageClient {
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            client,
            url: config.url,
        })
    }

    /// Get the raw calendar for the given span of epoch milliseconds.
    ///
    /// A timeout or connection failure is retried once.
    pub async fn fetch(&self, from_time: i64, to_time: i64) -> Result<String, FetchError> {
        match self.fetch_once(from_time, to_time).await {
            Err(err) if err.is_transient() => {
                warn!(error = %err, "retrying calendar request");
                self.fetch_once(from_time, to_time).await
            }
            result => result,
        }
    }

    async fn fetch_once(&self, from_time: i64, to_time: i64) -> Result<String, FetchError> {
        debug!(url = %self.url, from_time, to_time, "requesting calendar");
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("fromTime", from_time.to_string()),
                ("toTime", to_time.to_string()),
            ])
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        Ok(response.text().await?)
    }
}

/// The upcoming collections of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dates {
    pub entries: Vec<RenderedEntry>,
    /// Number of calendar or holiday records which were ignored.
    pub skipped: usize,
}

/// Get the upcoming collections as seen at `now`.
///
/// Collections are searched from the day before `now` on, so a collection which
/// already happened today is still listed.
pub async fn get<Tz: TimeZone>(
    client: &GarbageClient,
    now: DateTime<Tz>,
    options: &Options,
) -> Result<Dates, FetchError> {
    let reference = now
        .checked_sub_days(Days::new(1))
        .ok_or(FetchError::WindowOutOfRange(1))?;
    get_from(client, reference, options).await
}

/// Get the collections which are upcoming relative to `reference`.
pub async fn get_from<Tz: TimeZone>(
    client: &GarbageClient,
    reference: DateTime<Tz>,
    options: &Options,
) -> Result<Dates, FetchError> {
    let until = reference
        .clone()
        .checked_add_days(Days::new(options.window_days.into()))
        .ok_or(FetchError::WindowOutOfRange(options.window_days))?;
    let body = client
        .fetch(reference.timestamp_millis(), until.timestamp_millis())
        .await?;
    let calendar_data = parse(&body, &reference.timezone())?;
    if calendar_data.skipped > 0 {
        warn!(skipped = calendar_data.skipped, "ignored malformed records");
    }
    Ok(Dates {
        entries: calendar_data.upcoming(reference.naive_local(), options),
        skipped: calendar_data.skipped,
    })
}

#[derive(Debug, Deserialize)]
struct AwbResponse {
    data: AwbData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AwbData {
    calendars: Vec<Value>,
    holiday_views: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarRecord {
    name: String,
    from_date: i64,
    frequency: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HolidayRecord {
    active: bool,
    holiday: i64,
    shift_to: i64,
}

/// Convert epoch milliseconds to the wall clock time of `tz`.
fn wall_clock<Tz: TimeZone>(tz: &Tz, millis: i64) -> Result<NaiveDateTime, RecordError> {
    tz.timestamp_millis_opt(millis)
        .single()
        .map(|date_time| date_time.naive_local())
        .ok_or(RecordError::InvalidTimestamp(millis))
}

impl CalendarRecord {
    fn into_schedule<Tz: TimeZone>(self, tz: &Tz) -> Result<Schedule, RecordError> {
        Schedule::new(self.name, wall_clock(tz, self.from_date)?, self.frequency)
    }
}

impl HolidayRecord {
    fn into_override<Tz: TimeZone>(self, tz: &Tz) -> Result<HolidayOverride, RecordError> {
        Ok(HolidayOverride {
            active: self.active,
            holiday: wall_clock(tz, self.holiday)?,
            shift_to: wall_clock(tz, self.shift_to)?,
        })
    }
}

/// Decode every record on its own, dropping and counting the malformed ones.
fn parse_records<R, T>(
    kind: &str,
    values: Vec<Value>,
    convert: impl Fn(R) -> Result<T, RecordError>,
    skipped: &mut usize,
) -> Vec<T>
where
    R: DeserializeOwned,
{
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            match serde_json::from_value::<R>(value)
                .map_err(RecordError::from)
                .and_then(&convert)
            {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!(kind, index, error = %err, "skipping record");
                    *skipped += 1;
                    None
                }
            }
        })
        .collect()
}

/// Parse the API response, interpreting its timestamps in `tz`.
///
/// A response of the wrong shape is an error, single bad records are skipped.
pub fn parse<Tz: TimeZone>(body: &str, tz: &Tz) -> Result<CalendarData, FetchError> {
    let response: AwbResponse = serde_json::from_str(body)?;
    let mut skipped = 0;
    let schedules = parse_records(
        "calendar",
        response.data.calendars,
        |record: CalendarRecord| record.into_schedule(tz),
        &mut skipped,
    );
    let holidays = parse_records(
        "holiday",
        response.data.holiday_views,
        |record: HolidayRecord| record.into_override(tz),
        &mut skipped,
    );
    Ok(CalendarData {
        schedules,
        holidays,
        skipped,
    })
}
