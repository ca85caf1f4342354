use std::{env::current_dir, fs::write, time::Duration};

use agd_core::{
    garbage_client::{self, ClientConfig, GarbageClient, URL},
    Options,
};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, TimeZone};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Prints the next garbage collection dates as JSON")]
pub struct Arguments {
    /// the calendar API to read from
    #[arg(long, default_value = URL)]
    pub api_url: String,
    /// list collections from this day on instead of from yesterday
    #[arg(long)]
    pub reference: Option<NaiveDate>,
    /// the number of days to search for collections
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=3650))]
    pub window_days: u32,
    /// the maximum number of printed collections
    #[arg(long, default_value_t = 10)]
    pub max_entries: usize,
    /// the timeout of a single request to the calendar API in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,
    /// write `dates.json` to the current directory instead of printing
    #[arg(long)]
    pub write: bool,
}

impl From<&Arguments> for ClientConfig {
    fn from(value: &Arguments) -> Self {
        ClientConfig {
            url: value.api_url.clone(),
            timeout: Duration::from_secs(value.timeout_secs),
        }
    }
}

impl From<&Arguments> for Options {
    fn from(value: &Arguments) -> Self {
        Options {
            window_days: value.window_days,
            max_entries: value.max_entries,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Arguments::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let client = GarbageClient::new((&args).into())?;
    let options = Options::from(&args);
    let dates = match args.reference {
        Some(reference) => {
            let reference = reference
                .and_hms_opt(0, 0, 0)
                .and_then(|midnight| Local.from_local_datetime(&midnight).earliest())
                .context("the reference date does not exist in the local time zone")?;
            garbage_client::get_from(&client, reference, &options).await?
        }
        None => garbage_client::get(&client, Local::now(), &options).await?,
    };
    let json = serde_json::to_string_pretty(&dates.entries)?;
    if args.write {
        let mut path = current_dir()?;
        path.push("dates.json");
        write(path, json)?;
    } else {
        println!("{json}");
    }
    Ok(())
}
