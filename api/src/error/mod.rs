//! Layered error types for the API runtime.
//!
//! The error hierarchy is structured for actionable diagnostics:
//! - [`ApiError`] - Top-level error type for all API operations
//! - [`ClientError`] - HTTP transport and network errors
//! - [`ValidationError`] - Payload parsing and model conversion errors
//! - [`ConfigError`] - Client configuration and request-building errors
//! - [`UnexpectedStatus`] - A status code the operation does not document

mod api_error;
mod client_error;
mod config_error;
mod unexpected_status;
mod validation_error;

pub use api_error::ApiError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use unexpected_status::UnexpectedStatus;
pub use validation_error::ValidationError;
