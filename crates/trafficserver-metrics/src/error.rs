//! Error types for a scrape cycle.

use thiserror::Error;

/// Result type alias for scrape operations.
pub type ScrapeResult<T> = Result<T, ScrapeError>;

/// Everything that can turn a scrape cycle into `up 0`.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid scrape uri {uri:?}: {reason}")]
    InvalidTarget { uri: String, reason: String },

    #[error("failed to build http client: {0}")]
    Client(String),

    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("upstream returned HTTP status {0}")]
    Status(u16),

    #[error("decode failed: {0}")]
    Decode(String),
}

impl ScrapeError {
    /// Short label for log fields.
    pub fn stage(&self) -> &'static str {
        match self {
            ScrapeError::InvalidTarget { .. } => "target",
            ScrapeError::Client(_) | ScrapeError::Fetch(_) | ScrapeError::Status(_) => "fetch",
            ScrapeError::Decode(_) => "decode",
        }
    }
}
