//! Merchant connector accounts: a merchant's credentials at one processor.

use hyperswitch_api::{ApiClient, ApiError, AsyncTransport, BlockingApiClient, BlockingTransport};
use hyperswitch_api_macros::Operation;

use crate::models::{
    MerchantConnectorCreate, MerchantConnectorDeleteResponse, MerchantConnectorResponse,
    MerchantConnectorUpdate,
};

/// `POST /accounts/{account_id}/connectors`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/accounts/{account_id}/connectors",
    output = MerchantConnectorResponse,
    typed(200),
    empty(400)
)]
pub struct CreateConnector {
    #[operation(path)]
    pub account_id: String,
    #[operation(body)]
    pub body: MerchantConnectorCreate,
}

impl CreateConnector {
    pub fn new(account_id: impl Into<String>, body: MerchantConnectorCreate) -> Self {
        Self {
            account_id: account_id.into(),
            body,
        }
    }
}

/// `GET /accounts/{account_id}/connectors/{merchant_connector_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/accounts/{account_id}/connectors/{merchant_connector_id}",
    output = MerchantConnectorResponse,
    typed(200),
    empty(404)
)]
pub struct RetrieveConnector {
    #[operation(path)]
    pub account_id: String,
    #[operation(path)]
    pub merchant_connector_id: String,
}

impl RetrieveConnector {
    pub fn new(account_id: impl Into<String>, merchant_connector_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            merchant_connector_id: merchant_connector_id.into(),
        }
    }
}

/// `POST /accounts/{account_id}/connectors/{merchant_connector_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/accounts/{account_id}/connectors/{merchant_connector_id}",
    output = MerchantConnectorResponse,
    typed(200),
    empty(404)
)]
pub struct UpdateConnector {
    #[operation(path)]
    pub account_id: String,
    #[operation(path)]
    pub merchant_connector_id: String,
    #[operation(body)]
    pub body: MerchantConnectorUpdate,
}

impl UpdateConnector {
    pub fn new(
        account_id: impl Into<String>,
        merchant_connector_id: impl Into<String>,
        body: MerchantConnectorUpdate,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            merchant_connector_id: merchant_connector_id.into(),
            body,
        }
    }
}

/// `DELETE /accounts/{account_id}/connectors/{merchant_connector_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Delete,
    path = "/accounts/{account_id}/connectors/{merchant_connector_id}",
    output = MerchantConnectorDeleteResponse,
    typed(200),
    empty(404)
)]
pub struct DeleteConnector {
    #[operation(path)]
    pub account_id: String,
    #[operation(path)]
    pub merchant_connector_id: String,
}

impl DeleteConnector {
    pub fn new(account_id: impl Into<String>, merchant_connector_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            merchant_connector_id: merchant_connector_id.into(),
        }
    }
}

/// `GET /accounts/{account_id}/connectors`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/accounts/{account_id}/connectors",
    output = Vec<MerchantConnectorResponse>,
    typed(200),
    empty(401, 404)
)]
pub struct ListConnectors {
    #[operation(path)]
    pub account_id: String,
}

impl ListConnectors {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
        }
    }
}

/// Connector account calls bound to a client; see
/// [`Resources::connectors`](crate::Resources::connectors).
#[derive(Debug)]
pub struct Connectors<'a, C> {
    pub(crate) client: &'a C,
}

impl<T: AsyncTransport> Connectors<'_, ApiClient<T>> {
    pub async fn create(
        &self,
        account_id: impl Into<String>,
        body: MerchantConnectorCreate,
    ) -> Result<Option<MerchantConnectorResponse>, ApiError> {
        self.client.execute(&CreateConnector::new(account_id, body)).await
    }

    pub async fn retrieve(
        &self,
        account_id: impl Into<String>,
        merchant_connector_id: impl Into<String>,
    ) -> Result<Option<MerchantConnectorResponse>, ApiError> {
        self.client
            .execute(&RetrieveConnector::new(account_id, merchant_connector_id))
            .await
    }

    pub async fn update(
        &self,
        account_id: impl Into<String>,
        merchant_connector_id: impl Into<String>,
        body: MerchantConnectorUpdate,
    ) -> Result<Option<MerchantConnectorResponse>, ApiError> {
        self.client
            .execute(&UpdateConnector::new(account_id, merchant_connector_id, body))
            .await
    }

    pub async fn delete(
        &self,
        account_id: impl Into<String>,
        merchant_connector_id: impl Into<String>,
    ) -> Result<Option<MerchantConnectorDeleteResponse>, ApiError> {
        self.client
            .execute(&DeleteConnector::new(account_id, merchant_connector_id))
            .await
    }

    pub async fn list(
        &self,
        account_id: impl Into<String>,
    ) -> Result<Option<Vec<MerchantConnectorResponse>>, ApiError> {
        self.client.execute(&ListConnectors::new(account_id)).await
    }
}

impl<T: BlockingTransport> Connectors<'_, BlockingApiClient<T>> {
    pub fn create(
        &self,
        account_id: impl Into<String>,
        body: MerchantConnectorCreate,
    ) -> Result<Option<MerchantConnectorResponse>, ApiError> {
        self.client.execute(&CreateConnector::new(account_id, body))
    }

    pub fn retrieve(
        &self,
        account_id: impl Into<String>,
        merchant_connector_id: impl Into<String>,
    ) -> Result<Option<MerchantConnectorResponse>, ApiError> {
        self.client
            .execute(&RetrieveConnector::new(account_id, merchant_connector_id))
    }

    pub fn update(
        &self,
        account_id: impl Into<String>,
        merchant_connector_id: impl Into<String>,
        body: MerchantConnectorUpdate,
    ) -> Result<Option<MerchantConnectorResponse>, ApiError> {
        self.client
            .execute(&UpdateConnector::new(account_id, merchant_connector_id, body))
    }

    pub fn delete(
        &self,
        account_id: impl Into<String>,
        merchant_connector_id: impl Into<String>,
    ) -> Result<Option<MerchantConnectorDeleteResponse>, ApiError> {
        self.client
            .execute(&DeleteConnector::new(account_id, merchant_connector_id))
    }

    pub fn list(
        &self,
        account_id: impl Into<String>,
    ) -> Result<Option<Vec<MerchantConnectorResponse>>, ApiError> {
        self.client.execute(&ListConnectors::new(account_id))
    }
}
