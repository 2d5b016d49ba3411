//! Error types for the collaborators around the scoring core.
//!
//! The core itself never fails; these cover fetching, configuration and
//! persistence.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Rate limited by upstream")]
    RateLimited,

    #[error("Error decoding response: {0}")]
    Decode(String),

    #[error("Unsupported interval: {0}")]
    InvalidInterval(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Empty response for {0}")]
    Empty(String),
}

impl FetchError {
    /// Transport failures, 5xx and rate limiting are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Http(e) => !e.is_decode() && !e.is_builder(),
            FetchError::Status { status, .. } => *status >= 500,
            FetchError::RateLimited => true,
            _ => false,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, FetchError::RateLimited)
    }
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: String, value: String },

    #[error("Invalid cron expression {expr:?}: {reason}")]
    Cron { expr: String, reason: String },
}
