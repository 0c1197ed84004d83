use std::time::Duration;

use serde::Deserialize;

use crate::args::HttpMethod;
use crate::args::parsers::parse_duration;
use crate::error::ValidationError;

/// Optional settings read from `volley.toml` / `volley.json`.
///
/// Every field mirrors a CLI option; options given on the command line win.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub method: Option<HttpMethod>,
    #[serde(alias = "body")]
    pub data: Option<String>,
    pub content_type: Option<String>,
    #[serde(alias = "n")]
    pub requests: Option<usize>,
    pub reps: Option<usize>,
    pub no_spread: Option<bool>,
    pub spread_window: Option<DurationValue>,
    pub round_timeout: Option<DurationValue>,
    pub verbose: Option<bool>,
}

/// Either a number of seconds or a string with a unit (`250ms`, `10s`, `1m`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(0) => Err(ValidationError::DurationZero),
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_duration(text),
        }
    }
}
