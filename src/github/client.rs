// GitHub API HTTP fetcher.
// Handles authentication headers, rate limit tracking, and status mapping.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::FetcherConfig;
use crate::error::FetchError;

use super::fetch::JsonFetcher;

/// Rate limit snapshot from the most recent response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u32,
    pub remaining: u32,
    /// Unix timestamp when the window resets.
    pub reset: u64,
}

impl Default for RateLimit {
    fn default() -> Self {
        // Anonymous GitHub quota until a response says otherwise.
        Self {
            limit: 60,
            remaining: 60,
            reset: 0,
        }
    }
}

impl RateLimit {
    /// Update from `x-ratelimit-*` headers, keeping fields that are absent.
    pub fn update_from_headers(&mut self, headers: &HeaderMap) {
        if let Some(limit) = header_number(headers, "x-ratelimit-limit") {
            self.limit = limit;
        }
        if let Some(remaining) = header_number(headers, "x-ratelimit-remaining") {
            self.remaining = remaining;
        }
        if let Some(reset) = header_number(headers, "x-ratelimit-reset") {
            self.reset = reset;
        }
    }

    /// Reset time as `HH:MM:SS` UTC.
    pub fn reset_at(&self) -> String {
        i64::try_from(self.reset)
            .ok()
            .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
            .map(|dt| dt.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

fn header_number<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

/// [`JsonFetcher`] that issues real HTTP GETs against the GitHub API.
pub struct HttpFetcher {
    client: Client,
    rate_limit: Mutex<RateLimit>,
}

impl HttpFetcher {
    /// Build a fetcher with GitHub default headers from `config`.
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();

        if let Some(token) = &config.token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| FetchError::InvalidHeader(e.to_string()))?,
            );
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_str(&config.api_version)
                .map_err(|e| FetchError::InvalidHeader(e.to_string()))?,
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| FetchError::InvalidHeader(e.to_string()))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(FetchError::Http)?;

        Ok(Self {
            client,
            rate_limit: Mutex::new(RateLimit::default()),
        })
    }

    /// Get the current rate limit information.
    pub fn rate_limit(&self) -> RateLimit {
        *self
            .rate_limit
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn update_rate_limit(&self, headers: &HeaderMap) -> RateLimit {
        let mut rate_limit = self
            .rate_limit
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        rate_limit.update_from_headers(headers);
        *rate_limit
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        debug!(url, "GET");
        let response = self.client.get(url).send().await?;

        let rate_limit = self.update_rate_limit(response.headers());
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(url, status = status.as_u16(), "request failed");
            return Err(classify_failure(status, url, &rate_limit, body));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Map a non-success status to a fetch error.
fn classify_failure(
    status: StatusCode,
    url: &str,
    rate_limit: &RateLimit,
    body: String,
) -> FetchError {
    match status {
        StatusCode::UNAUTHORIZED => FetchError::Unauthorized,
        StatusCode::NOT_FOUND => FetchError::NotFound(url.to_string()),
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS if rate_limit.remaining == 0 => {
            FetchError::RateLimited {
                reset_at: rate_limit.reset_at(),
            }
        }
        status => FetchError::Status {
            status: status.as_u16(),
            body,
        },
    }
}
