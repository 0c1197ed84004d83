use std::time::Instant;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tracing::{debug, error, warn};

use crate::args::HttpMethod;
use crate::round::{AttemptResult, RequestExecutor};

use super::RequestTarget;

/// Sends one request to a fixed target per call.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: Client,
    target: RequestTarget,
}

impl HttpExecutor {
    #[must_use]
    pub const fn new(client: Client, target: RequestTarget) -> Self {
        Self { client, target }
    }

    fn request(&self) -> RequestBuilder {
        match self.target.method {
            HttpMethod::Get => self.client.get(self.target.url.clone()),
            HttpMethod::Post => self
                .client
                .post(self.target.url.clone())
                .header(CONTENT_TYPE, self.target.content_type.clone())
                .body(self.target.body.clone()),
        }
    }

    async fn send(&self) -> Result<StatusCode, reqwest::Error> {
        let response = self.request().send().await?;
        let status = response.status();
        match drain_response_body(response).await {
            Ok(bytes) => debug!("Read {} response bytes", bytes),
            Err(err) => warn!("Failed to read response body: {}", err),
        }
        Ok(status)
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(&self) -> AttemptResult {
        let started = Instant::now();
        match self.send().await {
            Ok(status) => {
                println!("{}", status);
                AttemptResult::completed(status.as_u16(), started.elapsed())
            }
            Err(err) => {
                error!("Request failed: {}", err);
                AttemptResult::failed(started.elapsed())
            }
        }
    }
}

async fn drain_response_body(response: Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
