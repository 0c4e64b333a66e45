//! Snapshot fetcher.
//!
//! Performs one HTTP(S) GET against the Traffic Server stats endpoint per
//! scrape cycle. There are no retries; a failed fetch is reported to the
//! caller and shows up as `trafficserver_up 0`.

use std::time::Duration;

use bytes::Bytes;
use reqwest::Url;
use tracing::{debug, warn};

use crate::error::{ScrapeError, ScrapeResult};

const USER_AGENT: &str = concat!("trafficserver-exporter/", env!("CARGO_PKG_VERSION"));

/// Immutable scrape settings, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    /// Stats endpoint, e.g. `http://localhost/_stats`.
    pub uri: String,
    /// Verify the upstream certificate chain and hostname.
    pub ssl_verify: bool,
    /// Upper bound on the whole request, body included. Zero disables the
    /// timeout.
    pub timeout: Duration,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            uri: "http://localhost/_stats".to_string(),
            ssl_verify: true,
            timeout: Duration::from_secs(5),
        }
    }
}

impl ScrapeConfig {
    /// Parse and check the configured URI.
    ///
    /// Only `http` and `https` targets are accepted.
    pub fn target(&self) -> ScrapeResult<Url> {
        let url = Url::parse(&self.uri).map_err(|e| ScrapeError::InvalidTarget {
            uri: self.uri.clone(),
            reason: e.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ScrapeError::InvalidTarget {
                uri: self.uri.clone(),
                reason: format!("unsupported scheme {other:?}"),
            }),
        }
    }
}

/// HTTP client for the stats endpoint.
///
/// Holds one connection pool for the life of the process; cheap to share
/// behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Build the client from the scrape settings.
    pub fn new(config: &ScrapeConfig) -> ScrapeResult<Self> {
        if !config.ssl_verify {
            warn!(
                uri = %config.uri,
                "TLS certificate verification disabled for scrape target"
            );
        }

        let mut builder = reqwest::Client::builder()
            .danger_accept_invalid_certs(!config.ssl_verify)
            .user_agent(USER_AGENT);
        if !config.timeout.is_zero() {
            builder = builder.timeout(config.timeout);
        }

        let client = builder
            .build()
            .map_err(|e| ScrapeError::Client(e.to_string()))?;

        Ok(Self { client })
    }

    /// GET the target and return the full body.
    ///
    /// Statuses outside `200..300` are failures. The response is consumed or
    /// dropped before returning, so the connection goes back to the pool on
    /// every path.
    pub async fn fetch(&self, url: &Url) -> ScrapeResult<Bytes> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            debug!(%status, %url, "stats endpoint returned non-2xx");
            return Err(ScrapeError::Status(status.as_u16()));
        }

        resp.bytes().await.map_err(transport_error)
    }
}

fn transport_error(e: reqwest::Error) -> ScrapeError {
    if e.is_timeout() {
        ScrapeError::Fetch(format!("timed out: {e}"))
    } else {
        ScrapeError::Fetch(e.to_string())
    }
}
