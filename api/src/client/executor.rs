//! Async request execution with tracing instrumentation.
//!
//! This module provides the [`ApiClient`] struct for executing
//! [`Operation`]s against the payments API with credentials, default headers
//! and status dispatch applied uniformly.

use std::sync::Arc;

use tracing::instrument;
use url::Url;

use super::config::{ApiClientBuilder, ClientConfig};
use crate::error::{ApiError, ClientError};
use crate::operation::Operation;
use crate::response::ApiResponse;
use crate::transport::AsyncTransport;

/// Async HTTP client for executing API operations.
///
/// Cloning is cheap; clones share the connection pool and configuration.
///
/// ## Examples
///
/// ```rust,ignore
/// use hyperswitch_api::{ApiClient, Credentials};
/// use url::Url;
///
/// let client = ApiClient::builder(Url::parse("https://sandbox.hyperswitch.io")?)
///     .credentials(Credentials::ApiKey("snd_xxx".into()))
///     .build()?;
///
/// let payment = client.execute(&retrieve_payment).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient<T = reqwest::Client> {
    transport: T,
    config: Arc<ClientConfig>,
}

impl ApiClient {
    /// Creates a new builder for configuring an API client.
    ///
    /// ## Arguments
    ///
    /// * `base_url` - The base URL for all API requests.
    pub fn builder(base_url: Url) -> ApiClientBuilder {
        ApiClientBuilder::new(base_url)
    }

    /// Creates a new API client with default settings.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, ApiError> {
        Self::builder(base_url).build()
    }

    /// Creates a client configured from `HYPERSWITCH_*` environment variables.
    ///
    /// ## Errors
    ///
    /// Returns an error if the environment is malformed or the HTTP client
    /// cannot be constructed.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// Creates a `reqwest`-backed client from a finished configuration.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: ClientConfig) -> Result<Self, ApiError> {
        let transport = reqwest::Client::builder()
            .timeout(config.timeout())
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self::with_transport(config, transport))
    }
}

impl<T: AsyncTransport> ApiClient<T> {
    /// Creates a client that sends through a caller-supplied transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            transport,
            config: Arc::new(config),
        }
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the base URL for this client.
    pub fn base_url(&self) -> &Url {
        self.config.base_url()
    }

    /// Executes an operation and returns the full response envelope.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The request cannot be built (missing path parameter, bad body)
    /// - The transport fails (network, timeout)
    /// - A documented typed body cannot be decoded
    /// - The status is undocumented and `raise_on_unexpected_status` is set
    #[instrument(
        name = "api_request",
        skip(self, operation),
        fields(
            operation = tracing::field::Empty,
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn execute_detailed<O: Operation>(
        &self,
        operation: &O,
    ) -> Result<ApiResponse<O::Output>, ApiError> {
        let (request, url) = self.config.prepare(operation)?;

        let raw = self
            .transport
            .send(&request, url)
            .await
            .map_err(|e| self.config.classify(e))?;

        self.config.finish::<O>(raw)
    }

    /// Executes an operation and returns only the typed result.
    ///
    /// `None` means the status was documented without a body model, or was
    /// undocumented and `raise_on_unexpected_status` is off.
    ///
    /// ## Errors
    ///
    /// Same as [`execute_detailed`](Self::execute_detailed).
    pub async fn execute<O: Operation>(
        &self,
        operation: &O,
    ) -> Result<Option<O::Output>, ApiError> {
        Ok(self.execute_detailed(operation).await?.into_parsed())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;
    use crate::auth::Credentials;
    use crate::error::{UnexpectedStatus, ValidationError};
    use crate::method::RestMethod;
    use crate::request::HttpRequest;
    use crate::response::{Parsed, RawResponse, parse_json};
    use serde::{Deserialize, Serialize};
    use tracing_test::traced_test;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Widget {
        id: String,
        size: u32,
    }

    struct RetrieveWidget {
        id: String,
        expand: Option<bool>,
    }

    impl Operation for RetrieveWidget {
        type Output = Widget;
        const ID: &'static str = "retrieve_widget";
        const STATUSES: &'static [u16] = &[200, 404];

        fn build_request(&self) -> Result<HttpRequest, ApiError> {
            HttpRequest::builder(RestMethod::Get, "/widgets/{id}")
                .path_param("id", &self.id)
                .query_opt("expand", self.expand.as_ref())
                .build()
        }

        fn parse_response(status: u16, body: &[u8]) -> Result<Parsed<Widget>, ValidationError> {
            match status {
                200 => parse_json(body),
                404 => Ok(Parsed::Empty),
                _ => Ok(Parsed::Undocumented),
            }
        }
    }

    struct CreateWidget {
        body: Widget,
    }

    impl Operation for CreateWidget {
        type Output = Widget;
        const ID: &'static str = "create_widget";
        const STATUSES: &'static [u16] = &[200];

        fn build_request(&self) -> Result<HttpRequest, ApiError> {
            HttpRequest::builder(RestMethod::Post, "/widgets")
                .header("X-Idempotency-Key", "idem_1")
                .json(&self.body)
                .build()
        }

        fn parse_response(status: u16, body: &[u8]) -> Result<Parsed<Widget>, ValidationError> {
            match status {
                200 => parse_json(body),
                _ => Ok(Parsed::Undocumented),
            }
        }
    }

    fn retrieve(id: &str) -> RetrieveWidget {
        RetrieveWidget {
            id: id.to_string(),
            expand: None,
        }
    }

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::builder(Url::parse(&server.uri()).unwrap())
            .credentials(Credentials::ApiKey("snd_test".into()))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_execute_get_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/widgets/w_1"))
            .and(header("api-key", "snd_test"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Widget {
                id: "w_1".into(),
                size: 3,
            }))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let widget = client.execute(&retrieve("w_1")).await.unwrap();

        assert_eq!(
            widget,
            Some(Widget {
                id: "w_1".into(),
                size: 3
            })
        );
    }

    #[tokio::test]
    async fn test_query_parameters_sent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/widgets/w_2"))
            .and(query_param("expand", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Widget {
                id: "w_2".into(),
                size: 1,
            }))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let op = RetrieveWidget {
            id: "w_2".into(),
            expand: Some(true),
        };
        assert!(client.execute(&op).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_post_json_body_and_operation_header() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/widgets"))
            .and(header("content-type", "application/json"))
            .and(header("x-idempotency-key", "idem_1"))
            .and(body_json(serde_json::json!({"id": "w_3", "size": 9})))
            .respond_with(ResponseTemplate::new(200).set_body_json(Widget {
                id: "w_3".into(),
                size: 9,
            }))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let op = CreateWidget {
            body: Widget {
                id: "w_3".into(),
                size: 9,
            },
        };
        let response = client.execute_detailed(&op).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.parsed().map(|w| w.size), Some(9));
    }

    #[tokio::test]
    async fn test_documented_status_without_model_is_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/widgets/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
            .mount(&mock_server)
            .await;

        let client = ApiClient::builder(Url::parse(&mock_server.uri()).unwrap())
            .raise_on_unexpected_status(true)
            .build()
            .unwrap();

        let response = client.execute_detailed(&retrieve("missing")).await.unwrap();
        assert_eq!(response.status, 404);
        assert!(matches!(response.parsed, Parsed::Empty));
        assert_eq!(response.text(), "not here");
    }

    #[tokio::test]
    async fn test_undocumented_status_is_absent_by_default() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/widgets/w_4"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let response = client.execute_detailed(&retrieve("w_4")).await.unwrap();

        assert_eq!(response.status, 500);
        assert!(matches!(response.parsed, Parsed::Undocumented));
        assert_eq!(response.text(), "boom");
        assert_eq!(client.execute(&retrieve("w_4")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_undocumented_status_raises_when_configured() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/widgets/w_5"))
            .respond_with(ResponseTemplate::new(418).set_body_string("teapot"))
            .mount(&mock_server)
            .await;

        let client = ApiClient::builder(Url::parse(&mock_server.uri()).unwrap())
            .raise_on_unexpected_status(true)
            .build()
            .unwrap();

        let err = client.execute(&retrieve("w_5")).await.unwrap_err();
        match err {
            ApiError::UnexpectedStatus(UnexpectedStatus { status, content }) => {
                assert_eq!(status, 418);
                assert_eq!(&content[..], b"teapot");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_documented_body_is_validation_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/widgets/w_6"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.execute(&retrieve("w_6")).await;
        assert!(matches!(
            result,
            Err(ApiError::Validation(ValidationError::JsonParse(_)))
        ));
    }

    #[tokio::test]
    async fn test_timeout_is_classified() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/widgets/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(Widget {
                        id: "slow".into(),
                        size: 0,
                    })
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let client = ApiClient::builder(Url::parse(&mock_server.uri()).unwrap())
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();

        let result = client.execute(&retrieve("slow")).await;
        assert!(matches!(
            result,
            Err(ApiError::Client(ClientError::Timeout { duration_ms: 50 }))
        ));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_span_records_operation() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/widgets/w_7"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let _ = client.execute(&retrieve("w_7")).await.unwrap();

        assert!(logs_contain("api_request"));
        assert!(logs_contain("retrieve_widget"));
        assert!(logs_contain("not documented"));
    }

    #[derive(Default)]
    struct RecordingTransport {
        seen: Mutex<Vec<(HttpRequest, Url)>>,
    }

    impl AsyncTransport for RecordingTransport {
        async fn send(&self, request: &HttpRequest, url: Url) -> Result<RawResponse, ClientError> {
            if let Ok(mut seen) = self.seen.lock() {
                seen.push((request.clone(), url));
            }
            Ok(RawResponse::new(404, ""))
        }
    }

    #[tokio::test]
    async fn test_custom_transport_sees_inherited_headers() {
        let config = ApiClient::builder(Url::parse("https://api.example.com/v1").unwrap())
            .credentials(Credentials::Bearer("jwt".into()))
            .default_header("X-Trace", "t1")
            .unwrap()
            .build_config()
            .unwrap();
        let client = ApiClient::with_transport(config, RecordingTransport::default());

        let result = client.execute(&retrieve("w_8")).await.unwrap();
        assert_eq!(result, None);

        let seen = client.transport.seen.lock().unwrap();
        let (request, url) = &seen[0];
        assert_eq!(url.as_str(), "https://api.example.com/v1/widgets/w_8");
        assert_eq!(request.header("authorization"), Some("Bearer jwt"));
        assert_eq!(request.header("x-trace"), Some("t1"));
        assert_eq!(request.header("accept"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_missing_path_param_fails_before_sending() {
        struct Broken;

        impl Operation for Broken {
            type Output = ();
            const ID: &'static str = "broken";
            const STATUSES: &'static [u16] = &[200];

            fn build_request(&self) -> Result<HttpRequest, ApiError> {
                HttpRequest::builder(RestMethod::Get, "/widgets/{id}").build()
            }

            fn parse_response(_: u16, _: &[u8]) -> Result<Parsed<()>, ValidationError> {
                Ok(Parsed::Empty)
            }
        }

        let config = ApiClient::builder(Url::parse("https://api.example.com").unwrap())
            .build_config()
            .unwrap();
        let client = ApiClient::with_transport(config, RecordingTransport::default());

        let result = client.execute(&Broken).await;
        assert!(matches!(result, Err(ApiError::Config(_))));
        assert!(client.transport.seen.lock().unwrap().is_empty());
    }
}
