//! This server answers `GET /getDates` with the next garbage collection dates as JSON.

use std::net::SocketAddr;

use agd_core::garbage_client::GarbageClient;
use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{config::Arguments, route::dates::AppState};

mod config;
mod route;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Arguments::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let state = AppState {
        client: GarbageClient::new((&args).into())?,
        options: (&args).into(),
    };
    let app = route::router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    info!(%addr, "starting web server");
    axum::Server::try_bind(&addr)?
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
