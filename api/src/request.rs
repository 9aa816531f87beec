//! Transport-agnostic request descriptors.
//!
//! An [`HttpRequest`] is everything an operation knows about the call it
//! wants to make: method, path (with parameters substituted), query pairs,
//! headers and an optional JSON body. It is pure data; resolving it against a
//! base URL and putting it on the wire is the client's job.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::{ApiError, ConfigError, ValidationError};
use crate::field::Field;
use crate::method::RestMethod;

/// Content type attached to every request that carries a body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Everything but the RFC 3986 unreserved characters is escaped in a path
/// parameter, so a value always stays one segment.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A fully built request descriptor.
///
/// ## Examples
///
/// ```rust
/// use hyperswitch_api::{HttpRequest, RestMethod};
///
/// let request = HttpRequest::builder(RestMethod::Get, "/customers/{customer_id}")
///     .path_param("customer_id", "cus_123")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.method(), RestMethod::Get);
/// assert_eq!(request.path(), "/customers/cus_123");
/// assert!(request.body().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    method: RestMethod,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<Value>,
}

impl HttpRequest {
    /// Starts building a request for a path template such as
    /// `/payments/{payment_id}/capture`.
    pub fn builder(method: RestMethod, template: &'static str) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, template)
    }

    /// Returns the HTTP method.
    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// Returns the path with all parameters substituted.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query pairs in insertion order.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Returns the value of the first query pair named `name`.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the request headers.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Returns the value of a header, matching the name case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns the JSON body, if any.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Resolves the request against a base URL, appending the query pairs.
    ///
    /// The path is appended to the base URL's path rather than replacing it,
    /// so a base of `https://host/api` and a path of `/payments` yields
    /// `https://host/api/payments`.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the joined URL does not parse.
    pub fn url(&self, base_url: &Url) -> Result<Url, ConfigError> {
        let base = base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}{}", self.path))?;
        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }

    /// Returns a copy with `headers` placed in front of the request's own.
    ///
    /// A request header overrides an inherited header of the same name
    /// (compared case-insensitively).
    pub fn with_inherited_headers(&self, headers: &[(String, String)]) -> Self {
        let mut merged: Vec<(String, String)> = headers
            .iter()
            .filter(|(name, _)| self.header(name).is_none())
            .cloned()
            .collect();
        merged.extend(self.headers.iter().cloned());

        Self {
            headers: merged,
            ..self.clone()
        }
    }
}

/// Builder for [`HttpRequest`].
///
/// Errors from individual steps (a body that fails to serialize, say) are
/// held back and reported by [`build`](Self::build), so operation code can
/// chain every step and use `?` once.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: RestMethod,
    template: &'static str,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<Value>,
    error: Option<ApiError>,
}

impl HttpRequestBuilder {
    fn new(method: RestMethod, template: &'static str) -> Self {
        Self {
            method,
            template,
            path: template.to_string(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            error: None,
        }
    }

    /// Substitutes `{name}` in the path template with `value`, percent-encoded
    /// as a single path segment.
    ///
    /// An empty value, `.` or `..` would change which endpoint the path names
    /// and is recorded as [`ConfigError::InvalidPathTemplate`].
    pub fn path_param(mut self, name: &str, value: impl AsRef<str>) -> Self {
        let placeholder = format!("{{{name}}}");
        if !self.path.contains(&placeholder) {
            self.fail(ConfigError::invalid_path(format!(
                "`{}` has no parameter named {name}",
                self.template
            )));
            return self;
        }
        let value = value.as_ref();
        if matches!(value, "" | "." | "..") {
            self.fail(ConfigError::invalid_path(format!(
                "`{value}` is not a usable value for {name}"
            )));
            return self;
        }
        let segment = utf8_percent_encode(value, PATH_SEGMENT_ENCODE_SET).to_string();
        self.path = self.path.replace(&placeholder, &segment);
        self
    }

    /// Adds a required query parameter.
    pub fn query<T: Serialize>(mut self, name: &str, value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(v) => push_query_value(&mut self.query, name, v),
            Err(e) => self.fail(ValidationError::JsonParse(e)),
        }
        self
    }

    /// Adds an optional query parameter; `None` is omitted.
    pub fn query_opt<T: Serialize>(self, name: &str, value: Option<&T>) -> Self {
        match value {
            Some(v) => self.query(name, v),
            None => self,
        }
    }

    /// Adds a nullable query parameter; `Unset` and `Null` are omitted.
    pub fn query_field<T: Serialize>(self, name: &str, value: &Field<T>) -> Self {
        self.query_opt(name, value.as_value())
    }

    /// Adds a header parameter.
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// Adds an optional header parameter; `None` is omitted.
    pub fn header_opt(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.header(name, v),
            None => self,
        }
    }

    /// Serializes `body` as the JSON request body and sets the content type.
    pub fn json<T: Serialize>(mut self, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => {
                self.body = Some(value);
                self.headers
                    .push(("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()));
            }
            Err(e) => self.fail(ValidationError::JsonParse(e)),
        }
        self
    }

    /// Finishes the request.
    ///
    /// ## Errors
    ///
    /// Returns the first error recorded by a builder step, or
    /// [`ConfigError::InvalidPathTemplate`] if a path parameter was left
    /// unsubstituted.
    pub fn build(self) -> Result<HttpRequest, ApiError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if let Some(name) = path_params(&self.path).first() {
            return Err(ConfigError::invalid_path(format!(
                "parameter {{{name}}} of `{}` was not provided",
                self.template
            ))
            .into());
        }

        Ok(HttpRequest {
            method: self.method,
            path: self.path,
            query: self.query,
            headers: self.headers,
            body: self.body,
        })
    }

    fn fail(&mut self, error: impl Into<ApiError>) {
        if self.error.is_none() {
            self.error = Some(error.into());
        }
    }
}

/// Extracts `{param}` names from a path template, in order of appearance.
///
/// ```rust
/// use hyperswitch_api::request::path_params;
///
/// assert_eq!(
///     path_params("/api_keys/{merchant_id}/{key_id}"),
///     vec!["merchant_id", "key_id"]
/// );
/// ```
pub fn path_params(template: &str) -> Vec<&str> {
    let mut params = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            break;
        };
        if close > 0 {
            params.push(&after[..close]);
        }
        rest = &after[close + 1..];
    }

    params
}

/// Flattens a serialized query value into string pairs.
///
/// Arrays repeat the key once per element, `null` is dropped, and objects are
/// sent as JSON text.
fn push_query_value(query: &mut Vec<(String, String)>, name: &str, value: Value) {
    match value {
        Value::Null => {}
        Value::String(s) => query.push((name.to_string(), s)),
        Value::Bool(b) => query.push((name.to_string(), b.to_string())),
        Value::Number(n) => query.push((name.to_string(), n.to_string())),
        Value::Array(items) => {
            for item in items {
                push_query_value(query, name, item);
            }
        }
        object @ Value::Object(_) => query.push((name.to_string(), object.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_without_body() {
        let request = HttpRequest::builder(RestMethod::Get, "/customers/{customer_id}")
            .path_param("customer_id", "cus_123")
            .build()
            .unwrap();

        assert_eq!(request.method(), RestMethod::Get);
        assert_eq!(request.path(), "/customers/cus_123");
        assert!(request.query().is_empty());
        assert!(request.headers().is_empty());
        assert!(request.body().is_none());
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let request = HttpRequest::builder(RestMethod::Post, "/refunds")
            .json(&json!({ "payment_id": "pay_1" }))
            .build()
            .unwrap();

        assert_eq!(request.header("content-type"), Some(JSON_CONTENT_TYPE));
        assert_eq!(request.body(), Some(&json!({ "payment_id": "pay_1" })));
    }

    #[test]
    fn test_unset_and_null_query_values_are_omitted() {
        let request = HttpRequest::builder(RestMethod::Get, "/payments/list")
            .query_field("customer_id", &Field::<String>::Unset)
            .query_field("starting_after", &Field::<String>::Null)
            .query_field("limit", &Field::Value(10u32))
            .query_opt::<bool>("force_sync", None)
            .build()
            .unwrap();

        assert_eq!(request.query(), &[("limit".to_string(), "10".to_string())]);
        assert_eq!(request.query_value("customer_id"), None);
    }

    #[test]
    fn test_query_arrays_repeat_the_key() {
        let request = HttpRequest::builder(RestMethod::Get, "/disputes/list")
            .query("connector", &vec!["stripe", "adyen"])
            .build()
            .unwrap();

        assert_eq!(request.query().len(), 2);
        assert_eq!(request.query()[1].1, "adyen");
    }

    #[test]
    fn test_unknown_path_param_is_an_error() {
        let result = HttpRequest::builder(RestMethod::Get, "/refunds/{refund_id}")
            .path_param("payment_id", "pay_1")
            .build();
        assert!(matches!(
            result,
            Err(ApiError::Config(ConfigError::InvalidPathTemplate { .. }))
        ));
    }

    #[test]
    fn test_missing_path_param_is_an_error() {
        let result = HttpRequest::builder(RestMethod::Get, "/refunds/{refund_id}").build();
        let err = result.unwrap_err();
        assert!(err.to_string().contains("{refund_id}"));
    }

    #[test]
    fn test_url_keeps_base_path_and_appends_query() {
        let request = HttpRequest::builder(RestMethod::Get, "/payments/{payment_id}")
            .path_param("payment_id", "pay_9")
            .query("force_sync", &true)
            .build()
            .unwrap();

        let base = Url::parse("https://sandbox.example.com/api/").unwrap();
        let url = request.url(&base).unwrap();
        assert_eq!(
            url.as_str(),
            "https://sandbox.example.com/api/payments/pay_9?force_sync=true"
        );
    }

    #[test]
    fn test_request_headers_override_inherited() {
        let request = HttpRequest::builder(RestMethod::Get, "/routing/active")
            .header("X-Profile-Id", "pro_2")
            .build()
            .unwrap();

        let merged = request.with_inherited_headers(&[
            ("x-profile-id".to_string(), "pro_1".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ]);

        assert_eq!(merged.headers().len(), 2);
        assert_eq!(merged.header("x-profile-id"), Some("pro_2"));
        assert_eq!(merged.header("accept"), Some("application/json"));
    }

    #[test]
    fn test_path_param_stays_one_segment() {
        let request = HttpRequest::builder(RestMethod::Get, "/customers/{customer_id}")
            .path_param("customer_id", "../payments/pay_1?force_sync=true#")
            .build()
            .unwrap();

        assert_eq!(
            request.path(),
            "/customers/..%2Fpayments%2Fpay_1%3Fforce_sync%3Dtrue%23"
        );

        let base = Url::parse("https://sandbox.hyperswitch.io").unwrap();
        let url = request.url(&base).unwrap();
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
        let segments: Vec<&str> = url.path_segments().unwrap().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], "customers");
    }

    #[test]
    fn test_path_param_keeps_unreserved_characters() {
        let request = HttpRequest::builder(RestMethod::Get, "/files/{file_id}")
            .path_param("file_id", "file_a.b-c~d")
            .build()
            .unwrap();
        assert_eq!(request.path(), "/files/file_a.b-c~d");

        let request = HttpRequest::builder(RestMethod::Get, "/files/{file_id}")
            .path_param("file_id", "with space{x}")
            .build()
            .unwrap();
        assert_eq!(request.path(), "/files/with%20space%7Bx%7D");
    }

    #[test]
    fn test_dot_segments_are_rejected() {
        for value in ["", ".", ".."] {
            let result = HttpRequest::builder(RestMethod::Get, "/payments/{payment_id}")
                .path_param("payment_id", value)
                .build();
            assert!(matches!(
                result,
                Err(ApiError::Config(ConfigError::InvalidPathTemplate { .. }))
            ));
        }
    }

    #[test]
    fn test_path_params_extraction() {
        assert_eq!(
            path_params("/events/{merchant_id}/{event_id}/retry"),
            vec!["merchant_id", "event_id"]
        );
        assert!(path_params("/payments/list").is_empty());
    }
}
