//! The contract every API operation implements.

use crate::error::{ApiError, ValidationError};
use crate::request::HttpRequest;
use crate::response::Parsed;

/// One documented API endpoint.
///
/// An operation value holds the call's typed arguments (path, query and
/// header parameters plus an optional body). It knows how to turn them into
/// an [`HttpRequest`] and how to read the endpoint's responses back; it never
/// touches the network. The clients pair it with a transport:
///
/// | Variant | Method |
/// |---------|--------|
/// | async, detailed | [`execute_detailed`](crate::ApiClient::execute_detailed) |
/// | async, parsed | [`execute`](crate::ApiClient::execute) |
/// | blocking, detailed | [`execute_detailed`](crate::BlockingApiClient::execute_detailed) |
/// | blocking, parsed | [`execute`](crate::BlockingApiClient::execute) |
///
/// ## Examples
///
/// ```rust
/// use hyperswitch_api::{
///     ApiError, HttpRequest, Operation, Parsed, RestMethod, ValidationError, parse_json,
/// };
///
/// struct RetrieveWidget {
///     widget_id: String,
/// }
///
/// impl Operation for RetrieveWidget {
///     type Output = serde_json::Value;
///     const ID: &'static str = "retrieve_widget";
///     const STATUSES: &'static [u16] = &[200, 404];
///
///     fn build_request(&self) -> Result<HttpRequest, ApiError> {
///         HttpRequest::builder(RestMethod::Get, "/widgets/{widget_id}")
///             .path_param("widget_id", &self.widget_id)
///             .build()
///     }
///
///     fn parse_response(
///         status: u16,
///         body: &[u8],
///     ) -> Result<Parsed<Self::Output>, ValidationError> {
///         match status {
///             200 => parse_json(body),
///             404 => Ok(Parsed::Empty),
///             _ => Ok(Parsed::Undocumented),
///         }
///     }
/// }
///
/// let request = RetrieveWidget { widget_id: "w_1".into() }.build_request().unwrap();
/// assert_eq!(request.path(), "/widgets/w_1");
/// assert!(matches!(RetrieveWidget::parse_response(404, b""), Ok(Parsed::Empty)));
/// ```
pub trait Operation: Send + Sync {
    /// The typed payload of the documented success status.
    type Output: Send;

    /// Stable identifier used in tracing spans.
    const ID: &'static str;

    /// Every status code this operation documents.
    const STATUSES: &'static [u16];

    /// Builds the request descriptor. Pure; performs no I/O.
    ///
    /// ## Errors
    ///
    /// Returns an error if a path parameter is missing or the body cannot be
    /// serialized.
    fn build_request(&self) -> Result<HttpRequest, ApiError>;

    /// Dispatches on the status code.
    ///
    /// Must return [`Parsed::Typed`] or [`Parsed::Empty`] for every code in
    /// [`STATUSES`](Self::STATUSES) and [`Parsed::Undocumented`] otherwise.
    ///
    /// ## Errors
    ///
    /// Returns a [`ValidationError`] if a documented typed body is malformed.
    fn parse_response(status: u16, body: &[u8]) -> Result<Parsed<Self::Output>, ValidationError>;
}
