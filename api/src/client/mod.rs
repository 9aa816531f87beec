//! HTTP clients for executing API operations.
//!
//! - [`ApiClient`] - async client over any [`AsyncTransport`](crate::AsyncTransport)
//! - [`BlockingApiClient`] - blocking client over a [`BlockingTransport`](crate::BlockingTransport)
//! - [`ClientConfig`] - base URL, timeout, headers, credentials and status policy

mod blocking;
mod config;
mod executor;

pub use blocking::BlockingApiClient;
pub use config::{
    ApiClientBuilder, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, ENV_ADMIN_API_KEY,
    ENV_API_KEY, ENV_BASE_URL, ENV_RAISE_ON_UNEXPECTED_STATUS, ENV_TIMEOUT_SECS,
};
pub use executor::ApiClient;
