//! HTTP transport collaborators.
//!
//! The clients never open sockets themselves. They hand a fully prepared
//! [`HttpRequest`] and its resolved URL to a transport and get a
//! [`RawResponse`] back. Connection pooling, TLS, redirects and timeout
//! enforcement all live behind these traits; the default implementations
//! delegate to `reqwest`.

use std::future::Future;

use url::Url;

use crate::error::ClientError;
use crate::request::HttpRequest;
use crate::response::RawResponse;

/// Non-blocking transport used by [`ApiClient`](crate::ApiClient).
pub trait AsyncTransport: Send + Sync {
    /// Sends the request and returns the final response.
    ///
    /// `request` already carries default headers and credentials; `url`
    /// already carries the query string.
    fn send(
        &self,
        request: &HttpRequest,
        url: Url,
    ) -> impl Future<Output = Result<RawResponse, ClientError>> + Send;
}

/// Blocking transport used by [`BlockingApiClient`](crate::BlockingApiClient).
pub trait BlockingTransport: Send + Sync {
    /// Sends the request and blocks until the final response arrives.
    fn send(&self, request: &HttpRequest, url: Url) -> Result<RawResponse, ClientError>;
}

impl AsyncTransport for reqwest::Client {
    async fn send(&self, request: &HttpRequest, url: Url) -> Result<RawResponse, ClientError> {
        let mut builder = self.request(request.method().to_reqwest(), url);
        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

impl BlockingTransport for reqwest::blocking::Client {
    fn send(&self, request: &HttpRequest, url: Url) -> Result<RawResponse, ClientError> {
        let mut builder = self.request(request.method().to_reqwest(), url);
        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes()?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
