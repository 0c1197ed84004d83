use reqwest::header::HeaderValue;
use url::Url;

use crate::args::HttpMethod;
use crate::error::{AppError, AppResult, HttpError, ValidationError};

/// What every attempt in a run sends.
#[derive(Debug, Clone)]
pub struct RequestTarget {
    pub method: HttpMethod,
    pub url: Url,
    pub body: String,
    pub content_type: HeaderValue,
}

impl RequestTarget {
    /// Validates the URL and content type once, before any request is issued.
    ///
    /// # Errors
    ///
    /// Returns an error for unparsable URLs, non-HTTP schemes, or content
    /// types that are not valid header values.
    pub fn new(method: HttpMethod, url: &str, body: &str, content_type: &str) -> AppResult<Self> {
        let parsed = Url::parse(url).map_err(|err| {
            AppError::http(HttpError::InvalidUrl {
                url: url.to_owned(),
                source: err,
            })
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::validation(ValidationError::UnsupportedScheme {
                scheme: parsed.scheme().to_owned(),
            }));
        }
        let content_type = HeaderValue::from_str(content_type).map_err(|err| {
            AppError::validation(ValidationError::InvalidContentType {
                value: content_type.to_owned(),
                source: err,
            })
        })?;

        Ok(Self {
            method,
            url: parsed,
            body: body.to_owned(),
            content_type,
        })
    }
}
