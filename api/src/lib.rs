//! HTTP runtime for the Hyperswitch payments API client.
//!
//! This crate holds everything the generated operations and models share:
//! request descriptors, the tri-state [`Field`], JSON model conversion,
//! response envelopes, layered errors and the async and blocking clients.
//! It knows nothing about payments; the `hyperswitch` crate builds on it.
//!
//! ## Features
//!
//! - **Pure operations**: an [`Operation`] builds an [`HttpRequest`] and
//!   dispatches a status code and body; it never performs I/O
//! - **Pluggable transports**: `reqwest` by default, anything implementing
//!   [`AsyncTransport`] or [`BlockingTransport`] otherwise
//! - **Status policy**: undocumented statuses become `None` or
//!   [`UnexpectedStatus`], per client
//! - **Tracing**: every call runs inside an `api_request` span
//!
//! ## Example
//!
//! ```rust,ignore
//! use hyperswitch_api::{ApiClient, Credentials};
//!
//! let client = ApiClient::builder(url::Url::parse("https://sandbox.hyperswitch.io")?)
//!     .credentials(Credentials::ApiKey(std::env::var("HYPERSWITCH_API_KEY")?))
//!     .build()?;
//!
//! let response = client.execute_detailed(&operation).await?;
//! println!("{} {}", response.status, response.text());
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod field;
pub mod method;
pub mod model;
pub mod operation;
pub mod request;
pub mod response;
pub mod transport;

// Re-exports for convenience
pub use auth::Credentials;
pub use client::{ApiClient, ApiClientBuilder, BlockingApiClient, ClientConfig};
pub use error::{ApiError, ClientError, ConfigError, UnexpectedStatus, ValidationError};
pub use field::Field;
pub use method::RestMethod;
pub use model::{AdditionalProperties, JsonModel};
pub use operation::Operation;
pub use request::{HttpRequest, HttpRequestBuilder};
pub use response::{ApiResponse, Parsed, RawResponse, parse_json};
pub use transport::{AsyncTransport, BlockingTransport};
