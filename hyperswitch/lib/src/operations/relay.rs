//! Relay: connector actions on resources created outside Hyperswitch.

use hyperswitch_api::{ApiClient, ApiError, AsyncTransport, BlockingApiClient, BlockingTransport};
use hyperswitch_api_macros::Operation;

use crate::models::{RelayRequest, RelayResponse};

/// `POST /relay`
///
/// Repeating a call with the same idempotency key returns the first result.
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(method = Post, path = "/relay", output = RelayResponse, typed(200), empty(400))]
pub struct CreateRelay {
    #[operation(header = "X-Profile-Id")]
    pub profile_id: String,
    #[operation(header = "X-Idempotency-Key")]
    pub idempotency_key: String,
    #[operation(body)]
    pub body: RelayRequest,
}

impl CreateRelay {
    pub fn new(
        profile_id: impl Into<String>,
        idempotency_key: impl Into<String>,
        body: RelayRequest,
    ) -> Self {
        Self {
            profile_id: profile_id.into(),
            idempotency_key: idempotency_key.into(),
            body,
        }
    }
}

/// `GET /relay/{relay_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/relay/{relay_id}",
    output = RelayResponse,
    typed(200),
    empty(404)
)]
pub struct RetrieveRelay {
    #[operation(path)]
    pub relay_id: String,
    #[operation(header = "X-Profile-Id")]
    pub profile_id: String,
}

impl RetrieveRelay {
    pub fn new(relay_id: impl Into<String>, profile_id: impl Into<String>) -> Self {
        Self {
            relay_id: relay_id.into(),
            profile_id: profile_id.into(),
        }
    }
}

/// Relay calls bound to a client; see [`Resources::relay`](crate::Resources::relay).
#[derive(Debug)]
pub struct Relay<'a, C> {
    pub(crate) client: &'a C,
}

impl<T: AsyncTransport> Relay<'_, ApiClient<T>> {
    pub async fn create(
        &self,
        profile_id: impl Into<String>,
        idempotency_key: impl Into<String>,
        body: RelayRequest,
    ) -> Result<Option<RelayResponse>, ApiError> {
        self.client
            .execute(&CreateRelay::new(profile_id, idempotency_key, body))
            .await
    }

    pub async fn retrieve(
        &self,
        relay_id: impl Into<String>,
        profile_id: impl Into<String>,
    ) -> Result<Option<RelayResponse>, ApiError> {
        self.client.execute(&RetrieveRelay::new(relay_id, profile_id)).await
    }
}

impl<T: BlockingTransport> Relay<'_, BlockingApiClient<T>> {
    pub fn create(
        &self,
        profile_id: impl Into<String>,
        idempotency_key: impl Into<String>,
        body: RelayRequest,
    ) -> Result<Option<RelayResponse>, ApiError> {
        self.client
            .execute(&CreateRelay::new(profile_id, idempotency_key, body))
    }

    pub fn retrieve(
        &self,
        relay_id: impl Into<String>,
        profile_id: impl Into<String>,
    ) -> Result<Option<RelayResponse>, ApiError> {
        self.client.execute(&RetrieveRelay::new(relay_id, profile_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, RelayRefundRequestData};
    use hyperswitch_api::Operation;

    #[test]
    fn test_create_relay_headers() {
        let body = RelayRequest::refund(
            "pi_3MKEivSFNglxLpam0ZaL98q9",
            "mca_5apGeP94tMts6rg3U3kR",
            RelayRefundRequestData::new(6540, Currency::Usd),
        );
        let request = CreateRelay::new("pro_1", "idem_42", body).build_request().unwrap();

        assert_eq!(request.header("X-Profile-Id"), Some("pro_1"));
        assert_eq!(request.header("x-idempotency-key"), Some("idem_42"));
        assert_eq!(request.body().unwrap()["type"], "refund");
        assert_eq!(request.body().unwrap()["data"]["refund"]["amount"], 6540);
    }

    #[test]
    fn test_retrieve_relay_header_and_path() {
        let request = RetrieveRelay::new("relay_1", "pro_1").build_request().unwrap();

        assert_eq!(request.path(), "/relay/relay_1");
        assert_eq!(request.header("x-profile-id"), Some("pro_1"));
        assert!(request.body().is_none());
    }
}
