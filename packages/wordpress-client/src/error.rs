//! Error types for the WordPress.com client.

use thiserror::Error;

/// Result type for WordPress client operations.
pub type Result<T> = std::result::Result<T, WordPressError>;

/// WordPress.com client errors.
#[derive(Debug, Clone, Error)]
pub enum WordPressError {
    /// The site is private or requires authentication (401/403)
    #[error("WordPress site is private or requires authentication")]
    PrivateSite,

    /// Any other non-2xx response
    #[error("WordPress API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Connection-level failure (DNS, TLS, reset, timeout, ...)
    #[error("network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for WordPressError {
    fn from(err: reqwest::Error) -> Self {
        WordPressError::Network(err.to_string())
    }
}
