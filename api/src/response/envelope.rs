//! Raw and parsed response envelopes.

use bytes::Bytes;
use reqwest::header::HeaderMap;

use super::Parsed;

/// What a transport hands back: final status, headers and raw body.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Raw response body.
    pub body: Bytes,
}

impl RawResponse {
    /// Creates a response with no headers.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Full response envelope returned by the detailed call variants.
///
/// ## Type Parameters
///
/// - `T`: The operation's typed output.
///
/// ## Examples
///
/// ```rust
/// use hyperswitch_api::{ApiResponse, Parsed, RawResponse};
///
/// let raw = RawResponse::new(404, "");
/// let response: ApiResponse<String> = ApiResponse::from_raw(raw, Parsed::Empty);
///
/// assert_eq!(response.status, 404);
/// assert!(response.parsed().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Raw response body.
    pub content: Bytes,
    /// Outcome of status dispatch.
    pub parsed: Parsed<T>,
}

impl<T> ApiResponse<T> {
    /// Assembles an envelope from a raw response and its parse outcome.
    pub fn from_raw(raw: RawResponse, parsed: Parsed<T>) -> Self {
        Self {
            status: raw.status,
            headers: raw.headers,
            content: raw.body,
            parsed,
        }
    }

    /// Returns the typed value, if the status carried one.
    pub fn parsed(&self) -> Option<&T> {
        self.parsed.as_typed()
    }

    /// Consumes the envelope, returning the typed value if any.
    pub fn into_parsed(self) -> Option<T> {
        self.parsed.into_typed()
    }

    /// Returns the value of a response header as a string.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns the raw body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}
