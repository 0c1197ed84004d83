use clap::Parser;
use std::time::Duration;

use super::defaults::DEFAULT_CONTENT_TYPE;
use super::parsers::parse_duration_arg;
use super::types::HttpMethod;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Fire rounds of concurrent HTTP requests at a URL and report status and latency per round."
)]
pub struct TesterArgs {
    /// The destination URL to test
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// HTTP method to use (GET or POST)
    #[arg(long, short = 'X', default_value = "get", ignore_case = true)]
    pub method: HttpMethod,

    /// Data (body) sent with a POST request
    #[arg(long, short = 'd', default_value = "")]
    pub data: String,

    /// Content-Type sent with a POST request
    #[arg(long = "content-type", default_value = DEFAULT_CONTENT_TYPE)]
    pub content_type: String,

    /// Count of test requests to make per repetition
    #[arg(long = "requests", short = 'n', default_value = "5")]
    pub requests: usize,

    /// Repetitions of the test to make
    #[arg(long = "reps", default_value = "1")]
    pub reps: usize,

    /// Disable randomly spreading request starts within the spread window
    #[arg(long = "no-spread")]
    pub no_spread: bool,

    /// Window request starts are spread over (supports ms/s/m/h)
    #[arg(
        long = "spread-window",
        default_value = "1000ms",
        value_parser = parse_duration_arg
    )]
    pub spread_window: Duration,

    /// Hard ceiling for each repetition; unfinished requests are abandoned (supports ms/s/m/h)
    #[arg(
        long = "round-timeout",
        default_value = "10s",
        value_parser = parse_duration_arg
    )]
    pub round_timeout: Duration,

    /// Enable verbose logging (sets log level to debug unless overridden by VOLLEY_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Path to config file (TOML/JSON). Defaults to ./volley.toml or ./volley.json if present.
    #[arg(long)]
    pub config: Option<String>,
}
