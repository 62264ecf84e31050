//! Live HTTP feed.
//!
//! GETs the configured endpoint and expects `{ "news": [...] }`. Transport
//! errors, 429 and 5xx responses are retried with exponential backoff; other
//! statuses and malformed bodies fail immediately.

use std::time::Duration;

use super::provider::{parse_feed_body, FeedError, FeedProvider, FeedSource};
use crate::domain::RawHeadline;

/// Connection settings for [`HttpFeed`].
#[derive(Debug, Clone)]
pub struct HttpFeedOptions {
    pub timeout: Duration,
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for HttpFeedOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            max_retries: 2,
            base_delay: Duration::from_millis(500),
        }
    }
}

/// Headline feed backed by a blocking reqwest client.
pub struct HttpFeed {
    client: reqwest::blocking::Client,
    url: String,
    max_retries: u32,
    base_delay: Duration,
}

impl HttpFeed {
    pub fn new(url: impl Into<String>, opts: &HttpFeedOptions) -> Result<Self, FeedError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(opts.timeout)
            .user_agent(concat!("moodboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FeedError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
            max_retries: opts.max_retries,
            base_delay: opts.base_delay,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn fetch_with_retry(&self) -> Result<Vec<RawHeadline>, FeedError> {
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = self.base_delay.saturating_mul(2u32.saturating_pow(attempt - 1));
                tracing::debug!(attempt, ?delay, "backing off before retry");
                std::thread::sleep(delay);
            }

            tracing::info!(url = %self.url, attempt, "fetching headlines");

            match self.client.get(&self.url).send() {
                Ok(resp) => {
                    let status = resp.status();

                    if status == reqwest::StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
                        tracing::warn!(status = status.as_u16(), attempt, "retryable feed status");
                        last_error = Some(FeedError::HttpStatus {
                            status: status.as_u16(),
                        });
                        continue;
                    }

                    if !status.is_success() {
                        return Err(FeedError::HttpStatus {
                            status: status.as_u16(),
                        });
                    }

                    let body = resp
                        .text()
                        .map_err(|e| FeedError::NetworkUnreachable(e.to_string()))?;
                    let records = parse_feed_body(&body)?;
                    tracing::info!(count = records.len(), "feed returned headlines");
                    return Ok(records);
                }
                Err(e) => {
                    if e.is_connect() || e.is_timeout() {
                        tracing::warn!(error = %e, attempt, "feed request failed");
                        last_error = Some(FeedError::NetworkUnreachable(e.to_string()));
                        continue;
                    }
                    return Err(FeedError::NetworkUnreachable(e.to_string()));
                }
            }
        }

        Err(last_error.unwrap_or_else(|| FeedError::NetworkUnreachable("max retries exceeded".into())))
    }
}

impl FeedProvider for HttpFeed {
    fn name(&self) -> &str {
        "http"
    }

    fn fetch(&self) -> Result<Vec<RawHeadline>, FeedError> {
        self.fetch_with_retry()
    }

    fn source(&self) -> FeedSource {
        FeedSource::Live
    }
}
