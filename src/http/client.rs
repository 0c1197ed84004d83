use reqwest::Client;
use tracing::error;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{AppError, AppResult, HttpError};

/// Builds the process-wide HTTP client.
///
/// No per-request timeout is configured; attempts are only interrupted when
/// their round reaches its ceiling.
///
/// # Errors
///
/// Returns an error when the TLS backend or resolver cannot be initialised.
pub fn build_client() -> AppResult<Client> {
    Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .build()
        .map_err(|err| {
            error!("Failed to build HTTP client: {}", err);
            AppError::http(HttpError::BuildClientFailed { source: err })
        })
}
