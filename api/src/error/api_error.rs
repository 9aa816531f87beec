//! Top-level API error type.

use super::{ClientError, ConfigError, UnexpectedStatus, ValidationError};
use thiserror::Error;

/// Top-level error type for all API operations.
///
/// Documented error responses (a `404` the operation lists, say) are not
/// errors: they come back as [`Parsed::Empty`](crate::Parsed::Empty) or a
/// typed value. This enum covers everything else.
///
/// ## Examples
///
/// ```rust,ignore
/// use hyperswitch_api::ApiError;
///
/// fn handle_error(err: ApiError) {
///     match err {
///         ApiError::Client(e) => eprintln!("Network error: {e}"),
///         ApiError::Validation(e) => eprintln!("Malformed payload: {e}"),
///         ApiError::Config(e) => eprintln!("Configuration error: {e}"),
///         ApiError::UnexpectedStatus(e) => eprintln!("{e}: {}", e.text()),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport errors (network, timeout, connection failures).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Payload errors (parse failures, shape mismatches).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Client configuration or request-building errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The server answered with a status the operation does not document
    /// and the client is configured to raise on such statuses.
    #[error(transparent)]
    UnexpectedStatus(#[from] UnexpectedStatus),
}

impl ApiError {
    /// Returns the HTTP status code carried by this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus(e) => Some(e.status),
            Self::Client(e) => e.status_code(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_client_error() {
        let client_err = ClientError::Timeout { duration_ms: 5000 };
        let api_err: ApiError = client_err.into();
        assert!(matches!(api_err, ApiError::Client(_)));
    }

    #[test]
    fn test_from_unexpected_status() {
        let api_err: ApiError = UnexpectedStatus::new(418, "teapot").into();
        assert_eq!(api_err.status_code(), Some(418));
        assert_eq!(api_err.to_string(), "Unexpected status code: 418");
    }

    #[test]
    fn test_config_error_display() {
        let err = ApiError::Config(ConfigError::missing_env("HYPERSWITCH_API_KEY"));
        assert!(err.to_string().contains("HYPERSWITCH_API_KEY"));
        assert_eq!(err.status_code(), None);
    }
}
