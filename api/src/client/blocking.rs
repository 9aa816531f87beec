//! Blocking request execution.
//!
//! [`BlockingApiClient`] mirrors [`ApiClient`](crate::ApiClient) for callers
//! without an async runtime. It must not be built or used from inside one.

use std::sync::Arc;

use tracing::instrument;
use url::Url;

use super::config::{ApiClientBuilder, ClientConfig};
use crate::error::{ApiError, ClientError};
use crate::operation::Operation;
use crate::response::ApiResponse;
use crate::transport::BlockingTransport;

/// Blocking HTTP client for executing API operations.
#[derive(Debug, Clone)]
pub struct BlockingApiClient<T = reqwest::blocking::Client> {
    transport: T,
    config: Arc<ClientConfig>,
}

impl BlockingApiClient {
    /// Creates a new builder; finish it with
    /// [`build_blocking`](ApiClientBuilder::build_blocking).
    pub fn builder(base_url: Url) -> ApiClientBuilder {
        ApiClientBuilder::new(base_url)
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

    /// Creates a `reqwest::blocking`-backed client from a finished
    /// configuration.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: ClientConfig) -> Result<Self, ApiError> {
        let transport = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self::with_transport(config, transport))
    }
}

impl<T: BlockingTransport> BlockingApiClient<T> {
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
    /// See [`ApiClient::execute_detailed`](crate::ApiClient::execute_detailed).
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
    pub fn execute_detailed<O: Operation>(
        &self,
        operation: &O,
    ) -> Result<ApiResponse<O::Output>, ApiError> {
        let (request, url) = self.config.prepare(operation)?;

        let raw = self
            .transport
            .send(&request, url)
            .map_err(|e| self.config.classify(e))?;

        self.config.finish::<O>(raw)
    }

    /// Executes an operation and returns only the typed result.
    ///
    /// ## Errors
    ///
    /// See [`ApiClient::execute_detailed`](crate::ApiClient::execute_detailed).
    pub fn execute<O: Operation>(&self, operation: &O) -> Result<Option<O::Output>, ApiError> {
        Ok(self.execute_detailed(operation)?.into_parsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::error::ValidationError;
    use crate::method::RestMethod;
    use crate::request::HttpRequest;
    use crate::response::{Parsed, parse_json};
    use serde_json::{Value, json};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct DeleteWidget(String);

    impl Operation for DeleteWidget {
        type Output = Value;
        const ID: &'static str = "delete_widget";
        const STATUSES: &'static [u16] = &[200, 400];

        fn build_request(&self) -> Result<HttpRequest, ApiError> {
            HttpRequest::builder(RestMethod::Delete, "/widgets/{id}")
                .path_param("id", &self.0)
                .build()
        }

        fn parse_response(status: u16, body: &[u8]) -> Result<Parsed<Value>, ValidationError> {
            match status {
                200 => parse_json(body),
                400 => Ok(Parsed::Empty),
                _ => Ok(Parsed::Undocumented),
            }
        }
    }

    // The mock server runs on its own runtime so the blocking client is used
    // from a plain thread.
    fn serve(status: u16, body: Value) -> (tokio::runtime::Runtime, MockServer) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let server = runtime.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("DELETE"))
                .and(path("/widgets/w_1"))
                .and(header("api-key", "snd_blocking"))
                .respond_with(ResponseTemplate::new(status).set_body_json(body))
                .mount(&server)
                .await;
            server
        });
        (runtime, server)
    }

    fn client_for(server: &MockServer, raise: bool) -> BlockingApiClient {
        BlockingApiClient::builder(Url::parse(&server.uri()).unwrap())
            .credentials(Credentials::ApiKey("snd_blocking".into()))
            .raise_on_unexpected_status(raise)
            .build_blocking()
            .unwrap()
    }

    #[test]
    fn test_blocking_execute_typed() {
        let (_runtime, server) = serve(200, json!({"deleted": true}));
        let client = client_for(&server, false);

        let result = client.execute(&DeleteWidget("w_1".into())).unwrap();
        assert_eq!(result, Some(json!({"deleted": true})));
    }

    #[test]
    fn test_blocking_documented_empty() {
        let (_runtime, server) = serve(400, json!({"error": "bad"}));
        let client = client_for(&server, true);

        let response = client
            .execute_detailed(&DeleteWidget("w_1".into()))
            .unwrap();
        assert_eq!(response.status, 400);
        assert!(matches!(response.parsed, Parsed::Empty));
    }

    #[test]
    fn test_blocking_undocumented_raises() {
        let (_runtime, server) = serve(500, json!({"error": "down"}));
        let client = client_for(&server, true);

        let err = client.execute(&DeleteWidget("w_1".into())).unwrap_err();
        assert_eq!(err.status_code(), Some(500));
    }

    #[test]
    fn test_blocking_undocumented_absent() {
        let (_runtime, server) = serve(500, json!({"error": "down"}));
        let client = client_for(&server, false);

        assert_eq!(client.execute(&DeleteWidget("w_1".into())).unwrap(), None);
    }
}
