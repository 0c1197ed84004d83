use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::TesterArgs;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::{ConfigFile, DurationValue};

/// Applies configuration values to CLI arguments.
///
/// Values explicitly passed on the command line are kept; everything else
/// is overridden by the config file when it sets the field.
///
/// # Errors
///
/// Returns an error when a config duration is invalid.
pub fn apply_config(
    args: &mut TesterArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = Some(url);
    }

    if !is_cli(matches, "method")
        && let Some(method) = config.method
    {
        args.method = method;
    }

    if !is_cli(matches, "data")
        && let Some(data) = config.data.clone()
    {
        args.data = data;
    }

    if !is_cli(matches, "content_type")
        && let Some(content_type) = config.content_type.clone()
    {
        args.content_type = content_type;
    }

    if !is_cli(matches, "requests")
        && let Some(requests) = config.requests
    {
        args.requests = requests;
    }

    if !is_cli(matches, "reps")
        && let Some(reps) = config.reps
    {
        args.reps = reps;
    }

    if !is_cli(matches, "no_spread")
        && let Some(no_spread) = config.no_spread
    {
        args.no_spread = no_spread;
    }

    if !is_cli(matches, "spread_window")
        && let Some(window) = config.spread_window.as_ref()
    {
        args.spread_window = config_duration(window, "spread_window")?;
    }

    if !is_cli(matches, "round_timeout")
        && let Some(timeout) = config.round_timeout.as_ref()
    {
        args.round_timeout = config_duration(timeout, "round_timeout")?;
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn config_duration(value: &DurationValue, field: &'static str) -> AppResult<std::time::Duration> {
    value
        .to_duration()
        .map_err(|err| AppError::config(ConfigError::InvalidField { field, source: err }))
}
