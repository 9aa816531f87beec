//! Secret API keys of a merchant.

use hyperswitch_api::{ApiClient, ApiError, AsyncTransport, BlockingApiClient, BlockingTransport};
use hyperswitch_api_macros::Operation;

use crate::models::{
    CreateApiKeyRequest, CreateApiKeyResponse, RetrieveApiKeyResponse, RevokeApiKeyResponse,
    UpdateApiKeyRequest,
};

/// `POST /api_keys/{merchant_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/api_keys/{merchant_id}",
    output = CreateApiKeyResponse,
    typed(200),
    empty(400)
)]
pub struct CreateApiKey {
    #[operation(path)]
    pub merchant_id: String,
    #[operation(body)]
    pub body: CreateApiKeyRequest,
}

impl CreateApiKey {
    pub fn new(merchant_id: impl Into<String>, body: CreateApiKeyRequest) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            body,
        }
    }
}

/// `GET /api_keys/{merchant_id}/{key_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/api_keys/{merchant_id}/{key_id}",
    output = RetrieveApiKeyResponse,
    typed(200),
    empty(404)
)]
pub struct RetrieveApiKey {
    #[operation(path)]
    pub merchant_id: String,
    #[operation(path)]
    pub key_id: String,
}

impl RetrieveApiKey {
    pub fn new(merchant_id: impl Into<String>, key_id: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            key_id: key_id.into(),
        }
    }
}

/// `POST /api_keys/{merchant_id}/{key_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/api_keys/{merchant_id}/{key_id}",
    output = RetrieveApiKeyResponse,
    typed(200),
    empty(404)
)]
pub struct UpdateApiKey {
    #[operation(path)]
    pub merchant_id: String,
    #[operation(path)]
    pub key_id: String,
    #[operation(body)]
    pub body: UpdateApiKeyRequest,
}

impl UpdateApiKey {
    pub fn new(
        merchant_id: impl Into<String>,
        key_id: impl Into<String>,
        body: UpdateApiKeyRequest,
    ) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            key_id: key_id.into(),
            body,
        }
    }
}

/// `DELETE /api_keys/{merchant_id}/{key_id}`
///
/// A `404` is documented, so revoking an unknown key yields `None` rather
/// than an unexpected-status error.
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Delete,
    path = "/api_keys/{merchant_id}/{key_id}",
    output = RevokeApiKeyResponse,
    typed(200),
    empty(404)
)]
pub struct RevokeApiKey {
    #[operation(path)]
    pub merchant_id: String,
    #[operation(path)]
    pub key_id: String,
}

impl RevokeApiKey {
    pub fn new(merchant_id: impl Into<String>, key_id: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            key_id: key_id.into(),
        }
    }
}

/// `GET /api_keys/{merchant_id}/list`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/api_keys/{merchant_id}/list",
    output = Vec<RetrieveApiKeyResponse>
)]
pub struct ListApiKeys {
    #[operation(path)]
    pub merchant_id: String,
    #[operation(query)]
    pub limit: Option<i64>,
    #[operation(query)]
    pub skip: Option<i64>,
}

impl ListApiKeys {
    pub fn new(merchant_id: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            limit: None,
            skip: None,
        }
    }
}

/// API key calls bound to a client; see [`Resources::api_keys`](crate::Resources::api_keys).
#[derive(Debug)]
pub struct ApiKeys<'a, C> {
    pub(crate) client: &'a C,
}

impl<T: AsyncTransport> ApiKeys<'_, ApiClient<T>> {
    pub async fn create(
        &self,
        merchant_id: impl Into<String>,
        body: CreateApiKeyRequest,
    ) -> Result<Option<CreateApiKeyResponse>, ApiError> {
        self.client.execute(&CreateApiKey::new(merchant_id, body)).await
    }

    pub async fn retrieve(
        &self,
        merchant_id: impl Into<String>,
        key_id: impl Into<String>,
    ) -> Result<Option<RetrieveApiKeyResponse>, ApiError> {
        self.client.execute(&RetrieveApiKey::new(merchant_id, key_id)).await
    }

    pub async fn update(
        &self,
        merchant_id: impl Into<String>,
        key_id: impl Into<String>,
        body: UpdateApiKeyRequest,
    ) -> Result<Option<RetrieveApiKeyResponse>, ApiError> {
        self.client
            .execute(&UpdateApiKey::new(merchant_id, key_id, body))
            .await
    }

    pub async fn revoke(
        &self,
        merchant_id: impl Into<String>,
        key_id: impl Into<String>,
    ) -> Result<Option<RevokeApiKeyResponse>, ApiError> {
        self.client.execute(&RevokeApiKey::new(merchant_id, key_id)).await
    }

    pub async fn list(
        &self,
        merchant_id: impl Into<String>,
    ) -> Result<Option<Vec<RetrieveApiKeyResponse>>, ApiError> {
        self.client.execute(&ListApiKeys::new(merchant_id)).await
    }
}

impl<T: BlockingTransport> ApiKeys<'_, BlockingApiClient<T>> {
    pub fn create(
        &self,
        merchant_id: impl Into<String>,
        body: CreateApiKeyRequest,
    ) -> Result<Option<CreateApiKeyResponse>, ApiError> {
        self.client.execute(&CreateApiKey::new(merchant_id, body))
    }

    pub fn retrieve(
        &self,
        merchant_id: impl Into<String>,
        key_id: impl Into<String>,
    ) -> Result<Option<RetrieveApiKeyResponse>, ApiError> {
        self.client.execute(&RetrieveApiKey::new(merchant_id, key_id))
    }

    pub fn update(
        &self,
        merchant_id: impl Into<String>,
        key_id: impl Into<String>,
        body: UpdateApiKeyRequest,
    ) -> Result<Option<RetrieveApiKeyResponse>, ApiError> {
        self.client
            .execute(&UpdateApiKey::new(merchant_id, key_id, body))
    }

    pub fn revoke(
        &self,
        merchant_id: impl Into<String>,
        key_id: impl Into<String>,
    ) -> Result<Option<RevokeApiKeyResponse>, ApiError> {
        self.client.execute(&RevokeApiKey::new(merchant_id, key_id))
    }

    pub fn list(
        &self,
        merchant_id: impl Into<String>,
    ) -> Result<Option<Vec<RetrieveApiKeyResponse>>, ApiError> {
        self.client.execute(&ListApiKeys::new(merchant_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApiKeyExpiration;
    use hyperswitch_api::{Operation, Parsed, RestMethod};
    use serde_json::json;

    #[test]
    fn test_create_api_key_never_expires() {
        let body = CreateApiKeyRequest::new("ci key", ApiKeyExpiration::never());
        let request = CreateApiKey::new("merchant_1", body).build_request().unwrap();

        assert_eq!(request.path(), "/api_keys/merchant_1");
        assert_eq!(request.body(), Some(&json!({"name": "ci key", "expiration": "never"})));
    }

    #[test]
    fn test_revoke_is_delete_with_documented_404() {
        let request = RevokeApiKey::new("merchant_1", "dev_key").build_request().unwrap();

        assert_eq!(request.method(), RestMethod::Delete);
        assert_eq!(request.path(), "/api_keys/merchant_1/dev_key");
        assert!(matches!(RevokeApiKey::parse_response(404, b""), Ok(Parsed::Empty)));
    }

    #[test]
    fn test_list_keeps_server_order() {
        let body = json!([
            {
                "key_id": "k1",
                "merchant_id": "m",
                "name": "first",
                "prefix": "snd_a",
                "created": "2024-01-01T00:00:00",
                "expiration": "never"
            },
            {
                "key_id": "k2",
                "merchant_id": "m",
                "name": "second",
                "prefix": "snd_b",
                "created": "2024-01-02T00:00:00",
                "expiration": "2025-01-01T00:00:00.000Z"
            }
        ]);
        let keys = ListApiKeys::parse_response(200, body.to_string().as_bytes())
            .unwrap()
            .into_typed()
            .unwrap();

        let ids: Vec<_> = keys.iter().map(|k| k.key_id.as_str()).collect();
        assert_eq!(ids, ["k1", "k2"]);
        assert_eq!(keys[1].expiration, ApiKeyExpiration::at("2025-01-01T00:00:00.000Z"));
    }

    #[test]
    fn test_list_paging_query() {
        let mut op = ListApiKeys::new("merchant_1");
        op.limit = Some(10);
        let request = op.build_request().unwrap();

        assert_eq!(request.path(), "/api_keys/merchant_1/list");
        assert_eq!(request.query_value("limit"), Some("10"));
        assert_eq!(request.query_value("skip"), None);
    }
}
