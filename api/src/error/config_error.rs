//! Client configuration and request-building errors.

use thiserror::Error;

/// Errors in client configuration or while building a request.
///
/// These almost always indicate a programmer error or a bad environment,
/// never a server-side condition.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A required environment variable is not set.
    #[error("Missing environment variable: {var}")]
    MissingEnv {
        /// The variable that was looked up.
        var: &'static str,
    },

    /// An environment variable is set but cannot be interpreted.
    #[error("Invalid value for {var}: {message}")]
    InvalidEnv {
        /// The variable that was looked up.
        var: &'static str,
        /// Why the value was rejected.
        message: String,
    },

    /// Path template contains invalid or unresolved parameters.
    #[error("Invalid path template: {message}")]
    InvalidPathTemplate {
        /// Description of the path template error.
        message: String,
    },

    /// A configured header name or value is not valid HTTP.
    #[error("Invalid header {name}: {message}")]
    InvalidHeader {
        /// The offending header name.
        name: String,
        /// Why it was rejected.
        message: String,
    },
}

impl ConfigError {
    /// Creates a missing environment variable error.
    pub fn missing_env(var: &'static str) -> Self {
        Self::MissingEnv { var }
    }

    /// Creates an invalid path template error.
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::InvalidPathTemplate {
            message: message.into(),
        }
    }
}
