pub mod dates;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::route::dates::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/getDates", get(dates::handler))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
