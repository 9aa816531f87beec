//! Response handling module.
//!
//! This module provides the [`RawResponse`] handed back by transports, the
//! [`Parsed`] outcome of matching a response against an operation's
//! documented statuses, and the [`ApiResponse`] envelope returned by the
//! detailed call variants.

mod envelope;
mod parsed;

pub use envelope::{ApiResponse, RawResponse};
pub use parsed::{Parsed, parse_json};
