//! Carrier for responses with undocumented status codes.

use bytes::Bytes;
use thiserror::Error;

/// A response whose status code the operation does not document.
///
/// Only produced when the client was built with
/// `raise_on_unexpected_status(true)`; otherwise the parsed result is simply
/// absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unexpected status code: {status}")]
pub struct UnexpectedStatus {
    /// The HTTP status code returned.
    pub status: u16,
    /// The raw response body.
    pub content: Bytes,
}

impl UnexpectedStatus {
    /// Creates a new carrier from a status code and raw body.
    pub fn new(status: u16, content: impl Into<Bytes>) -> Self {
        Self {
            status,
            content: content.into(),
        }
    }

    /// Returns the body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}
