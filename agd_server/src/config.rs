//! Command line and environment configuration of the server.

use std::time::Duration;

use agd_core::{
    garbage_client::{ClientConfig, URL},
    Options,
};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about = "Serves the next garbage collection dates as JSON")]
pub struct Arguments {
    /// the port to listen on
    #[arg(long, env = "AGD_PORT", default_value_t = 8010)]
    pub port: u16,
    /// the calendar API to read from
    #[arg(long, env = "AGD_API_URL", default_value = URL)]
    pub api_url: String,
    /// the number of days to search for collections
    #[arg(long, env = "AGD_WINDOW_DAYS", default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=3650))]
    pub window_days: u32,
    /// the maximum number of returned collections
    #[arg(long, env = "AGD_MAX_ENTRIES", default_value_t = 10)]
    pub max_entries: usize,
    /// the timeout of a single request to the calendar API in seconds
    #[arg(long, env = "AGD_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,
    /// the log filter, overridden by `RUST_LOG`
    #[arg(long, env = "AGD_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
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

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use agd_core::{
        garbage_client::{ClientConfig, URL},
        Options,
    };
    use clap::Parser;

    use crate::config::Arguments;

    #[test]
    fn test_defaults() {
        let args = Arguments::try_parse_from(["agd_server"]).unwrap();
        assert_eq!(args.port, 8010);
        assert_eq!(Options::from(&args), Options::default());
        assert_eq!(ClientConfig::from(&args), ClientConfig::default());
        assert_eq!(args.api_url, URL);
    }

    #[test]
    fn test_overrides() {
        let args = Arguments::try_parse_from([
            "agd_server",
            "--port",
            "9000",
            "--window-days",
            "14",
            "--max-entries",
            "3",
            "--timeout-secs",
            "2",
            "--api-url",
            "http://localhost:1234/calendar",
        ])
        .unwrap();
        assert_eq!(args.port, 9000);
        assert_eq!(
            Options::from(&args),
            Options {
                window_days: 14,
                max_entries: 3,
            }
        );
        assert_eq!(
            ClientConfig::from(&args),
            ClientConfig {
                url: String::from("http://localhost:1234/calendar"),
                timeout: Duration::from_secs(2),
            }
        );
    }

    #[test]
    fn test_rejects_window_out_of_range() {
        assert!(Arguments::try_parse_from(["agd_server", "--window-days", "0"]).is_err());
        assert!(Arguments::try_parse_from(["agd_server", "--window-days", "3651"]).is_err());
        assert!(Arguments::try_parse_from(["agd_server", "--window-days", "3650"]).is_ok());
    }
}
