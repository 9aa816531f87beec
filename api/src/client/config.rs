//! Client configuration shared by the async and blocking clients.

use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};
use tracing::{Span, debug, warn};
use url::Url;

use crate::auth::Credentials;
use crate::error::{ApiError, ClientError, ConfigError, UnexpectedStatus};
use crate::operation::Operation;
use crate::request::HttpRequest;
use crate::response::{ApiResponse, Parsed, RawResponse};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://sandbox.hyperswitch.io";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the base URL.
pub const ENV_BASE_URL: &str = "HYPERSWITCH_BASE_URL";
/// Environment variable holding a merchant secret key.
pub const ENV_API_KEY: &str = "HYPERSWITCH_API_KEY";
/// Environment variable holding an admin key.
pub const ENV_ADMIN_API_KEY: &str = "HYPERSWITCH_ADMIN_API_KEY";
/// Environment variable holding the timeout in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "HYPERSWITCH_TIMEOUT_SECS";
/// Environment variable toggling errors for undocumented statuses.
pub const ENV_RAISE_ON_UNEXPECTED_STATUS: &str = "HYPERSWITCH_RAISE_ON_UNEXPECTED_STATUS";

/// Settings applied uniformly to every operation a client executes.
///
/// Build one with [`ApiClientBuilder`] or read it from the environment with
/// [`ClientConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
    credentials: Option<Credentials>,
    raise_on_unexpected_status: bool,
}

impl ClientConfig {
    /// Reads configuration from `HYPERSWITCH_*` environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `HYPERSWITCH_BASE_URL` | [`DEFAULT_BASE_URL`] |
    /// | `HYPERSWITCH_API_KEY` | none |
    /// | `HYPERSWITCH_ADMIN_API_KEY` | none (used when no API key is set) |
    /// | `HYPERSWITCH_TIMEOUT_SECS` | [`DEFAULT_TIMEOUT_SECS`] |
    /// | `HYPERSWITCH_RAISE_ON_UNEXPECTED_STATUS` | `false` |
    ///
    /// ## Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be
    /// interpreted.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = match env_var(ENV_BASE_URL) {
            Some(raw) => Url::parse(&raw).map_err(ConfigError::InvalidUrl)?,
            None => Url::parse(DEFAULT_BASE_URL).map_err(ConfigError::InvalidUrl)?,
        };

        let mut builder = ApiClientBuilder::new(base_url);

        if let Some(key) = env_var(ENV_API_KEY) {
            builder = builder.credentials(Credentials::ApiKey(key));
        } else if let Some(key) = env_var(ENV_ADMIN_API_KEY) {
            builder = builder.credentials(Credentials::AdminApiKey(key));
        }

        if let Some(raw) = env_var(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.parse().map_err(|e| ConfigError::InvalidEnv {
                var: ENV_TIMEOUT_SECS,
                message: format!("{raw:?} is not a whole number of seconds: {e}"),
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        if let Some(raw) = env_var(ENV_RAISE_ON_UNEXPECTED_STATUS) {
            builder = builder.raise_on_unexpected_status(parse_flag(
                ENV_RAISE_ON_UNEXPECTED_STATUS,
                &raw,
            )?);
        }

        builder.build_config()
    }

    /// Returns the base URL every request path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the per-request timeout passed to the transport.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the configured credentials, if any.
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns `true` if undocumented statuses are returned as errors.
    pub fn raise_on_unexpected_status(&self) -> bool {
        self.raise_on_unexpected_status
    }

    /// Returns the headers added to every request, credentials included.
    pub fn request_headers(&self) -> Vec<(String, String)> {
        let mut headers = self.default_headers.clone();
        if let Some(credentials) = &self.credentials {
            let (name, value) = credentials.header();
            headers.push((name.to_string(), value));
        }
        headers
    }

    /// Builds an operation's request and resolves it against this config.
    pub(crate) fn prepare<O: Operation>(
        &self,
        operation: &O,
    ) -> Result<(HttpRequest, Url), ApiError> {
        let request = operation
            .build_request()?
            .with_inherited_headers(&self.request_headers());
        let url = request.url(&self.base_url)?;

        let span = Span::current();
        span.record("operation", O::ID);
        span.record("http.method", request.method().as_str());
        span.record("http.url", url.as_str());
        debug!(
            operation = O::ID,
            method = %request.method(),
            path = request.path(),
            "dispatching request"
        );

        Ok((request, url))
    }

    /// Maps transport errors, lifting reqwest timeouts into
    /// [`ClientError::Timeout`] with the configured duration.
    pub(crate) fn classify(&self, error: ClientError) -> ApiError {
        let error = match error {
            ClientError::Request(e) => {
                ClientError::from_reqwest(e, self.timeout.as_millis() as u64)
            }
            other => other,
        };
        Span::current().record("otel.status_code", "ERROR");
        error.into()
    }

    /// Runs status dispatch and applies the undocumented-status policy.
    pub(crate) fn finish<O: Operation>(
        &self,
        raw: RawResponse,
    ) -> Result<ApiResponse<O::Output>, ApiError> {
        let span = Span::current();
        span.record("http.status_code", raw.status);

        let parsed = O::parse_response(raw.status, &raw.body)?;

        if let Parsed::Undocumented = parsed {
            span.record("otel.status_code", "ERROR");
            warn!(
                operation = O::ID,
                status = raw.status,
                "response status is not documented for this operation"
            );
            if self.raise_on_unexpected_status {
                return Err(UnexpectedStatus::new(raw.status, raw.body).into());
            }
        } else {
            span.record("otel.status_code", "OK");
            debug!(operation = O::ID, status = raw.status, "response parsed");
        }

        Ok(ApiResponse::from_raw(raw, parsed))
    }
}

/// Builder for client configuration.
///
/// ## Examples
///
/// ```rust,ignore
/// use std::time::Duration;
/// use hyperswitch_api::{ApiClient, Credentials};
///
/// let client = ApiClient::builder(base_url)
///     .credentials(Credentials::ApiKey("snd_xxx".into()))
///     .timeout(Duration::from_secs(60))
///     .raise_on_unexpected_status(true)
///     .build()?;
/// ```
#[derive(Debug)]
pub struct ApiClientBuilder {
    base_url: Url,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
    credentials: Option<Credentials>,
    raise_on_unexpected_status: bool,
}

impl ApiClientBuilder {
    /// Creates a new builder with the specified base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: vec![("Accept".to_string(), "application/json".to_string())],
            credentials: None,
            raise_on_unexpected_status: false,
        }
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a default header to all requests.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ApiError> {
        let (name, value) = (name.as_ref(), value.as_ref());
        validate_header(name, value)?;
        self.default_headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.default_headers
            .push((name.to_string(), value.to_string()));
        Ok(self)
    }

    /// Sets the credentials sent with every request.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Chooses whether undocumented statuses become
    /// [`ApiError::UnexpectedStatus`] (`true`) or an absent result (`false`).
    pub fn raise_on_unexpected_status(mut self, raise: bool) -> Self {
        self.raise_on_unexpected_status = raise;
        self
    }

    /// Finishes the configuration without building a transport.
    ///
    /// ## Errors
    ///
    /// Returns an error if the credentials cannot be sent as a header.
    pub fn build_config(self) -> Result<ClientConfig, ApiError> {
        if let Some(credentials) = &self.credentials {
            let (name, value) = credentials.header();
            validate_header(name, &value)?;
        }

        Ok(ClientConfig {
            base_url: self.base_url,
            timeout: self.timeout,
            default_headers: self.default_headers,
            credentials: self.credentials,
            raise_on_unexpected_status: self.raise_on_unexpected_status,
        })
    }

    /// Builds an async [`ApiClient`](crate::ApiClient) backed by `reqwest`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<crate::ApiClient, ApiError> {
        crate::ApiClient::from_config(self.build_config()?)
    }

    /// Builds a [`BlockingApiClient`](crate::BlockingApiClient) backed by
    /// `reqwest::blocking`.
    ///
    /// Must not be called from inside an async runtime.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build_blocking(self) -> Result<crate::BlockingApiClient, ApiError> {
        crate::BlockingApiClient::from_config(self.build_config()?)
    }
}

fn validate_header(name: &str, value: &str) -> Result<(), ConfigError> {
    HeaderName::try_from(name).map_err(|e| ConfigError::InvalidHeader {
        name: name.to_string(),
        message: e.to_string(),
    })?;
    HeaderValue::try_from(value).map_err(|e| ConfigError::InvalidHeader {
        name: name.to_string(),
        message: e.to_string(),
    })?;
    Ok(())
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_flag(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnv {
            var,
            message: format!("{other:?} is not a boolean"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        // SAFETY: every test touching these variables is #[serial]
        unsafe {
            for var in [
                ENV_BASE_URL,
                ENV_API_KEY,
                ENV_ADMIN_API_KEY,
                ENV_TIMEOUT_SECS,
                ENV_RAISE_ON_UNEXPECTED_STATUS,
            ] {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = ClientConfig::from_env().unwrap();

        assert_eq!(config.base_url().as_str(), "https://sandbox.hyperswitch.io/");
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.credentials().is_none());
        assert!(!config.raise_on_unexpected_status());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_everything() {
        clear_env();
        // SAFETY: serialized with the other env tests
        unsafe {
            std::env::set_var(ENV_BASE_URL, "http://localhost:8080");
            std::env::set_var(ENV_API_KEY, "snd_test");
            std::env::set_var(ENV_ADMIN_API_KEY, "admin_test");
            std::env::set_var(ENV_TIMEOUT_SECS, "5");
            std::env::set_var(ENV_RAISE_ON_UNEXPECTED_STATUS, "true");
        }

        let config = ClientConfig::from_env().unwrap();
        clear_env();

        assert_eq!(config.base_url().as_str(), "http://localhost:8080/");
        assert_eq!(
            config.credentials(),
            Some(&Credentials::ApiKey("snd_test".to_string()))
        );
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(config.raise_on_unexpected_status());
    }

    #[test]
    #[serial]
    fn test_from_env_falls_back_to_admin_key() {
        clear_env();
        // SAFETY: serialized with the other env tests
        unsafe {
            std::env::set_var(ENV_ADMIN_API_KEY, "admin_test");
        }

        let config = ClientConfig::from_env().unwrap();
        clear_env();

        assert_eq!(
            config.credentials(),
            Some(&Credentials::AdminApiKey("admin_test".to_string()))
        );
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_bad_timeout() {
        clear_env();
        // SAFETY: serialized with the other env tests
        unsafe {
            std::env::set_var(ENV_TIMEOUT_SECS, "soon");
        }

        let result = ClientConfig::from_env();
        clear_env();

        assert!(matches!(
            result,
            Err(ApiError::Config(ConfigError::InvalidEnv {
                var: ENV_TIMEOUT_SECS,
                ..
            }))
        ));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("X", "1").unwrap());
        assert!(parse_flag("X", " Yes ").unwrap());
        assert!(!parse_flag("X", "off").unwrap());
        assert!(parse_flag("X", "maybe").is_err());
    }

    #[test]
    fn test_request_headers_include_credentials() {
        let config = ApiClientBuilder::new(Url::parse("https://example.com").unwrap())
            .credentials(Credentials::ApiKey("snd_abc".into()))
            .build_config()
            .unwrap();

        let headers = config.request_headers();
        assert!(headers.contains(&("Accept".to_string(), "application/json".to_string())));
        assert!(headers.contains(&("api-key".to_string(), "snd_abc".to_string())));
    }

    #[test]
    fn test_default_header_replaces_same_name() {
        let config = ApiClientBuilder::new(Url::parse("https://example.com").unwrap())
            .default_header("accept", "text/plain")
            .unwrap()
            .build_config()
            .unwrap();

        let accept: Vec<_> = config
            .request_headers()
            .into_iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case("accept"))
            .collect();
        assert_eq!(accept, vec![("accept".to_string(), "text/plain".to_string())]);
    }

    #[test]
    fn test_invalid_header_rejected() {
        let result = ApiClientBuilder::new(Url::parse("https://example.com").unwrap())
            .default_header("bad header", "value");
        assert!(matches!(
            result,
            Err(ApiError::Config(ConfigError::InvalidHeader { .. }))
        ));
    }

    #[test]
    fn test_credentials_with_newline_rejected() {
        let result = ApiClientBuilder::new(Url::parse("https://example.com").unwrap())
            .credentials(Credentials::ApiKey("snd\nabc".into()))
            .build_config();
        assert!(result.is_err());
    }
}
