use std::sync::Arc;

use agd_core::{
    garbage_client::{self, Dates, FetchError, GarbageClient},
    Options,
};
use axum::{
    extract::State,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use tracing::{error, info};

static SKIPPED_RECORDS: &str = "x-skipped-records";

#[derive(Debug)]
pub struct AppState {
    pub client: GarbageClient,
    pub options: Options,
}

fn status(err: &FetchError) -> StatusCode {
    match err {
        FetchError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        FetchError::Client(_) | FetchError::WindowOutOfRange(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        FetchError::Unreachable(_) | FetchError::Status(_) | FetchError::Payload(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}

fn respond(dates: Dates) -> Response {
    let mut response = Json(dates.entries).into_response();
    if dates.skipped > 0 {
        response
            .headers_mut()
            .insert(SKIPPED_RECORDS, HeaderValue::from(dates.skipped));
    }
    response
}

/// Handle requests for the next collection dates.
///
/// Upcoming means from yesterday on, as seen in the local time zone.
pub async fn handler(
    State(state): State<Arc<AppState>>,
) -> Result<Response, (StatusCode, String)> {
    let dates = garbage_client::get(&state.client, Local::now(), &state.options)
        .await
        .map_err(|err| {
            error!(error = %err, "failed to get dates");
            (status(&err), err.to_string())
        })?;
    info!(
        entries = dates.entries.len(),
        skipped = dates.skipped,
        "answering with dates"
    );
    Ok(respond(dates))
}
