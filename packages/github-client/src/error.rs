//! Error types for the GitHub client.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can match
//! on the failure category. HTTP 403 responses are split into rate-limit
//! exhaustion and plain access denial based on the rate-limit headers.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Result type for GitHub client operations.
pub type Result<T> = std::result::Result<T, GithubError>;

/// GitHub client errors.
#[derive(Debug, Clone, Error)]
pub enum GithubError {
    /// Rate limit quota exhausted (403 with `x-ratelimit-remaining: 0`).
    /// `reset` is when the quota replenishes, if the API reported it.
    #[error("GitHub API rate limit exceeded")]
    RateLimitExceeded { reset: Option<DateTime<Utc>> },

    /// Access denied (403 without an exhausted quota)
    #[error("access denied by the GitHub API")]
    AccessDenied,

    /// Account does not exist (404)
    #[error("GitHub user \"{handle}\" not found")]
    NotFound { handle: String },

    /// Client-side timeout, distinct from other network failures
    #[error("GitHub API request timed out")]
    Timeout,

    /// Any other non-2xx response
    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Connection-level failure (DNS, TLS, reset, ...)
    #[error("network error: {0}")]
    Network(String),
}

impl GithubError {
    /// Classify a transport-level `reqwest` error, keeping timeouts distinct.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GithubError::Timeout
        } else {
            GithubError::Network(err.to_string())
        }
    }
}
