//! Shared HTTP plumbing for provider and page lookups.
//!
//! Every lookup goes through [`HttpClient::get`], which maps the outcome of a
//! request onto [`LookupError`]: no response is `Transport`, a non-success
//! status is `Status`. With `max_retries = 0` (the default) a failure is
//! returned immediately; otherwise retryable failures are repeated with a
//! short linear backoff, honouring `Retry-After` on 429.

use std::time::Duration;

use reelscout_common::LookupError;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};

use crate::config::HttpConfig;

/// Base delay between retry attempts.
const RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// Upper bound for a server-supplied `Retry-After`.
const MAX_RETRY_AFTER: Duration = Duration::from_secs(30);

/// Thin wrapper around a [`reqwest::Client`] with reelscout's failure policy.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    max_retries: u32,
}

impl HttpClient {
    /// Build a client from the `[http]` config section.
    pub fn new(config: &HttpConfig) -> Self {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder.build().unwrap_or_else(|e| {
            warn!("Failed to build configured HTTP client: {}", e);
            Client::new()
        });

        Self {
            client,
            max_retries: config.max_retries,
        }
    }

    /// Issue a GET with the given query parameters.
    ///
    /// Returns the response only when its status is a success.
    pub async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Response, LookupError> {
        let mut attempt = 0u32;
        loop {
            let outcome = self.get_once(url, query).await;
            let err = match outcome {
                Ok(resp) => return Ok(resp),
                Err(err) => err,
            };

            if attempt >= self.max_retries || !err.error.is_retryable() {
                return Err(err.error);
            }
            attempt += 1;

            let wait = err
                .retry_after
                .unwrap_or(RETRY_BACKOFF * attempt)
                .min(MAX_RETRY_AFTER);
            warn!(
                url = %url,
                retry = attempt,
                wait_ms = wait.as_millis() as u64,
                error = %err.error,
                "Retrying lookup"
            );
            tokio::time::sleep(wait).await;
        }
    }

    /// Issue a GET and return the response body as text.
    pub async fn get_text(&self, url: &str) -> Result<String, LookupError> {
        self.get(url, &[])
            .await?
            .text()
            .await
            .map_err(|e| LookupError::transport(format!("failed to read body from {url}: {e}")))
    }

    async fn get_once(&self, url: &str, query: &[(&str, &str)]) -> Result<Response, Failed> {
        debug!(url = %url, "GET");
        let resp = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| Failed {
                error: LookupError::transport(format!("request to {url} failed: {e}")),
                retry_after: None,
            })?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let retry_after = if status == StatusCode::TOO_MANY_REQUESTS {
            resp.headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs)
        } else {
            None
        };

        debug!(url = %url, status = status.as_u16(), "Non-success status");
        Err(Failed {
            error: LookupError::Status(status.as_u16()),
            retry_after,
        })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(&HttpConfig::default())
    }
}

/// A failed attempt plus any server-provided retry hint.
struct Failed {
    error: LookupError,
    retry_after: Option<Duration>,
}
