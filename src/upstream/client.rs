//! Upstream HTTP client with timeout and error handling.
//!
//! # Responsibilities
//! - Issue one GET per relayed request with the browser header set
//! - Enforce connect and total timeouts
//! - Classify failures (timeout, transport, non-2xx status)

use axum::body::Bytes;
use reqwest::StatusCode;
use std::time::{Duration, Instant};
use thiserror::Error;
use url::Url;

use crate::config::UpstreamConfig;
use crate::upstream::headers::browser_headers;

/// Errors that can occur while fetching from the upstream host.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The client could not be constructed.
    #[error("failed to build upstream client: {0}")]
    Build(#[source] reqwest::Error),

    /// No complete response within the configured timeout.
    #[error("upstream request to {url} timed out after {secs} seconds")]
    Timeout { url: Url, secs: u64 },

    /// Connection, TLS, or body read failure.
    #[error("upstream request to {url} failed: {source}")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered with a non-2xx status.
    #[error("upstream returned HTTP {status} for {url}")]
    Status { url: Url, status: StatusCode },
}

pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Shared client for the upstream origin.
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    timeout_secs: u64,
}

impl UpstreamClient {
    /// Create a client from the upstream configuration.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let mut builder = reqwest::Client::builder()
            .default_headers(browser_headers())
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs));
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(UpstreamError::Build)?;

        Ok(Self {
            client,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Fetch the full (decoded) body at `url`.
    pub async fn fetch(&self, url: &Url) -> UpstreamResult<Bytes> {
        let start = Instant::now();

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                url: url.clone(),
                status,
            });
        }

        let body = response.bytes().await.map_err(|e| self.classify(url, e))?;

        tracing::debug!(
            url = %url,
            status = %status,
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Upstream fetch complete"
        );

        Ok(body)
    }

    fn classify(&self, url: &Url, error: reqwest::Error) -> UpstreamError {
        if error.is_timeout() {
            UpstreamError::Timeout {
                url: url.clone(),
                secs: self.timeout_secs,
            }
        } else {
            UpstreamError::Transport {
                url: url.clone(),
                source: error,
            }
        }
    }
}
