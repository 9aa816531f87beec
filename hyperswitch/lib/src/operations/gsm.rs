//! Global status mapping rules. Lookup and delete go by POSTed key.

use hyperswitch_api::{ApiClient, ApiError, AsyncTransport, BlockingApiClient, BlockingTransport};
use hyperswitch_api_macros::Operation;

use crate::models::{GsmCreateRequest, GsmDeleteResponse, GsmKey, GsmResponse, GsmUpdateRequest};

/// `POST /gsm`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(method = Post, path = "/gsm", output = GsmResponse, typed(200), empty(400))]
pub struct CreateGsmRule {
    #[operation(body)]
    pub body: GsmCreateRequest,
}

impl CreateGsmRule {
    pub fn new(body: GsmCreateRequest) -> Self {
        Self { body }
    }
}

/// `POST /gsm/get`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(method = Post, path = "/gsm/get", output = GsmResponse, typed(200), empty(400, 404))]
pub struct RetrieveGsmRule {
    #[operation(body)]
    pub body: GsmKey,
}

impl RetrieveGsmRule {
    pub fn new(key: GsmKey) -> Self {
        Self { body: key }
    }
}

/// `POST /gsm/update`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(method = Post, path = "/gsm/update", output = GsmResponse, typed(200), empty(400, 404))]
pub struct UpdateGsmRule {
    #[operation(body)]
    pub body: GsmUpdateRequest,
}

impl UpdateGsmRule {
    pub fn new(body: GsmUpdateRequest) -> Self {
        Self { body }
    }
}

/// `POST /gsm/delete`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/gsm/delete",
    output = GsmDeleteResponse,
    typed(200),
    empty(400, 404)
)]
pub struct DeleteGsmRule {
    #[operation(body)]
    pub body: GsmKey,
}

impl DeleteGsmRule {
    pub fn new(key: GsmKey) -> Self {
        Self { body: key }
    }
}

/// GSM rule calls bound to a client; see [`Resources::gsm`](crate::Resources::gsm).
#[derive(Debug)]
pub struct Gsm<'a, C> {
    pub(crate) client: &'a C,
}

impl<T: AsyncTransport> Gsm<'_, ApiClient<T>> {
    pub async fn create(&self, body: GsmCreateRequest) -> Result<Option<GsmResponse>, ApiError> {
        self.client.execute(&CreateGsmRule::new(body)).await
    }

    pub async fn retrieve(&self, key: GsmKey) -> Result<Option<GsmResponse>, ApiError> {
        self.client.execute(&RetrieveGsmRule::new(key)).await
    }

    pub async fn update(&self, body: GsmUpdateRequest) -> Result<Option<GsmResponse>, ApiError> {
        self.client.execute(&UpdateGsmRule::new(body)).await
    }

    pub async fn delete(&self, key: GsmKey) -> Result<Option<GsmDeleteResponse>, ApiError> {
        self.client.execute(&DeleteGsmRule::new(key)).await
    }
}

impl<T: BlockingTransport> Gsm<'_, BlockingApiClient<T>> {
    pub fn create(&self, body: GsmCreateRequest) -> Result<Option<GsmResponse>, ApiError> {
        self.client.execute(&CreateGsmRule::new(body))
    }

    pub fn retrieve(&self, key: GsmKey) -> Result<Option<GsmResponse>, ApiError> {
        self.client.execute(&RetrieveGsmRule::new(key))
    }

    pub fn update(&self, body: GsmUpdateRequest) -> Result<Option<GsmResponse>, ApiError> {
        self.client.execute(&UpdateGsmRule::new(body))
    }

    pub fn delete(&self, key: GsmKey) -> Result<Option<GsmDeleteResponse>, ApiError> {
        self.client.execute(&DeleteGsmRule::new(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Connector, GsmDecision};
    use hyperswitch_api::{Operation, RestMethod};
    use serde_json::json;

    fn key() -> GsmKey {
        GsmKey::new(
            Connector::Stripe,
            "authorize",
            "sub_flow",
            "card_declined",
            "Your card was declined",
        )
    }

    #[test]
    fn test_retrieve_posts_key() {
        let request = RetrieveGsmRule::new(key()).build_request().unwrap();

        assert_eq!(request.method(), RestMethod::Post);
        assert_eq!(request.path(), "/gsm/get");
        assert_eq!(
            request.body(),
            Some(&json!({
                "connector": "stripe",
                "flow": "authorize",
                "sub_flow": "sub_flow",
                "code": "card_declined",
                "message": "Your card was declined"
            }))
        );
    }

    #[test]
    fn test_create_flattens_key() {
        let body = GsmCreateRequest::new(key(), "failed", GsmDecision::Retry);
        let request = CreateGsmRule::new(body).build_request().unwrap();
        let sent = request.body().unwrap();

        assert_eq!(sent["code"], "card_declined");
        assert_eq!(sent["decision"], "retry");
        assert_eq!(sent["step_up_possible"], false);
    }

    #[test]
    fn test_delete_path() {
        let request = DeleteGsmRule::new(key()).build_request().unwrap();
        assert_eq!(request.path(), "/gsm/delete");
    }
}
