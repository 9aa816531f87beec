//! HTTP transport and network errors.

use thiserror::Error;

/// Errors from the HTTP transport layer.
///
/// These are surfaced as-is from the transport collaborator; the client never
/// retries them. [`is_retryable`](Self::is_retryable) is provided so callers
/// can build their own policy.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Request exceeded the configured timeout.
    #[error("Request timeout after {duration_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        duration_ms: u64,
    },

    /// Failed to establish connection to the server.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// A header name or value could not be put on the wire.
    #[error("Invalid header {name}: {message}")]
    InvalidHeader {
        /// The offending header name.
        name: String,
        /// Why it was rejected.
        message: String,
    },
}

impl ClientError {
    /// Classifies a reqwest error, lifting timeouts and connect failures into
    /// their own variants.
    pub fn from_reqwest(error: reqwest::Error, timeout_ms: u64) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                duration_ms: timeout_ms,
            }
        } else if error.is_connect() {
            Self::Connection(error.to_string())
        } else {
            Self::Request(error)
        }
    }

    /// Returns `true` if this error is retryable.
    ///
    /// Timeout and connection errors are typically retryable; malformed
    /// headers never are.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Connection(_) => true,
            Self::InvalidHeader { .. } => false,
            Self::Request(e) => e.is_timeout() || e.is_connect(),
        }
    }

    /// Returns the HTTP status code if the transport attached one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
