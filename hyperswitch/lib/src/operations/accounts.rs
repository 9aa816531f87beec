//! Merchant accounts. These calls take the admin key.

use hyperswitch_api::{ApiClient, ApiError, AsyncTransport, BlockingApiClient, BlockingTransport};
use hyperswitch_api_macros::Operation;

use crate::models::{
    MerchantAccountCreate, MerchantAccountDeleteResponse, MerchantAccountResponse,
    MerchantAccountUpdate, ToggleKvRequest, ToggleKvResponse,
};

/// `POST /accounts`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/accounts",
    output = MerchantAccountResponse,
    typed(200),
    empty(400)
)]
pub struct CreateMerchantAccount {
    #[operation(body)]
    pub body: MerchantAccountCreate,
}

impl CreateMerchantAccount {
    pub fn new(body: MerchantAccountCreate) -> Self {
        Self { body }
    }
}

/// `GET /accounts/{account_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/accounts/{account_id}",
    output = MerchantAccountResponse,
    typed(200),
    empty(404)
)]
pub struct RetrieveMerchantAccount {
    #[operation(path)]
    pub account_id: String,
}

impl RetrieveMerchantAccount {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
        }
    }
}

/// `POST /accounts/{account_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/accounts/{account_id}",
    output = MerchantAccountResponse,
    typed(200),
    empty(404)
)]
pub struct UpdateMerchantAccount {
    #[operation(path)]
    pub account_id: String,
    #[operation(body)]
    pub body: MerchantAccountUpdate,
}

impl UpdateMerchantAccount {
    /// The body repeats the account id; it is taken from `body.merchant_id`.
    pub fn new(body: MerchantAccountUpdate) -> Self {
        Self {
            account_id: body.merchant_id.clone(),
            body,
        }
    }
}

/// `DELETE /accounts/{account_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Delete,
    path = "/accounts/{account_id}",
    output = MerchantAccountDeleteResponse,
    typed(200),
    empty(404)
)]
pub struct DeleteMerchantAccount {
    #[operation(path)]
    pub account_id: String,
}

impl DeleteMerchantAccount {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
        }
    }
}

/// `POST /accounts/{account_id}/kv`
///
/// Switches the merchant's storage between the database and the KV store.
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/accounts/{account_id}/kv",
    output = ToggleKvResponse,
    typed(200),
    empty(400)
)]
pub struct ToggleMerchantKv {
    #[operation(path)]
    pub account_id: String,
    #[operation(body)]
    pub body: ToggleKvRequest,
}

impl ToggleMerchantKv {
    pub fn new(account_id: impl Into<String>, kv_enabled: bool) -> Self {
        Self {
            account_id: account_id.into(),
            body: ToggleKvRequest::new(kv_enabled),
        }
    }
}

/// `GET /accounts/{account_id}/kv`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/accounts/{account_id}/kv",
    output = ToggleKvResponse,
    typed(200),
    empty(400)
)]
pub struct RetrieveMerchantKv {
    #[operation(path)]
    pub account_id: String,
}

impl RetrieveMerchantKv {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
        }
    }
}

/// Merchant account calls bound to a client; see
/// [`Resources::accounts`](crate::Resources::accounts).
#[derive(Debug)]
pub struct Accounts<'a, C> {
    pub(crate) client: &'a C,
}

impl<T: AsyncTransport> Accounts<'_, ApiClient<T>> {
    pub async fn create(
        &self,
        body: MerchantAccountCreate,
    ) -> Result<Option<MerchantAccountResponse>, ApiError> {
        self.client.execute(&CreateMerchantAccount::new(body)).await
    }

    pub async fn retrieve(
        &self,
        account_id: impl Into<String>,
    ) -> Result<Option<MerchantAccountResponse>, ApiError> {
        self.client.execute(&RetrieveMerchantAccount::new(account_id)).await
    }

    pub async fn update(
        &self,
        body: MerchantAccountUpdate,
    ) -> Result<Option<MerchantAccountResponse>, ApiError> {
        self.client.execute(&UpdateMerchantAccount::new(body)).await
    }

    pub async fn delete(
        &self,
        account_id: impl Into<String>,
    ) -> Result<Option<MerchantAccountDeleteResponse>, ApiError> {
        self.client.execute(&DeleteMerchantAccount::new(account_id)).await
    }

    pub async fn toggle_kv(
        &self,
        account_id: impl Into<String>,
        kv_enabled: bool,
    ) -> Result<Option<ToggleKvResponse>, ApiError> {
        self.client
            .execute(&ToggleMerchantKv::new(account_id, kv_enabled))
            .await
    }

    pub async fn kv_status(
        &self,
        account_id: impl Into<String>,
    ) -> Result<Option<ToggleKvResponse>, ApiError> {
        self.client.execute(&RetrieveMerchantKv::new(account_id)).await
    }
}

impl<T: BlockingTransport> Accounts<'_, BlockingApiClient<T>> {
    pub fn create(
        &self,
        body: MerchantAccountCreate,
    ) -> Result<Option<MerchantAccountResponse>, ApiError> {
        self.client.execute(&CreateMerchantAccount::new(body))
    }

    pub fn retrieve(
        &self,
        account_id: impl Into<String>,
    ) -> Result<Option<MerchantAccountResponse>, ApiError> {
        self.client.execute(&RetrieveMerchantAccount::new(account_id))
    }

    pub fn update(
        &self,
        body: MerchantAccountUpdate,
    ) -> Result<Option<MerchantAccountResponse>, ApiError> {
        self.client.execute(&UpdateMerchantAccount::new(body))
    }

    pub fn delete(
        &self,
        account_id: impl Into<String>,
    ) -> Result<Option<MerchantAccountDeleteResponse>, ApiError> {
        self.client.execute(&DeleteMerchantAccount::new(account_id))
    }

    pub fn toggle_kv(
        &self,
        account_id: impl Into<String>,
        kv_enabled: bool,
    ) -> Result<Option<ToggleKvResponse>, ApiError> {
        self.client.execute(&ToggleMerchantKv::new(account_id, kv_enabled))
    }

    pub fn kv_status(
        &self,
        account_id: impl Into<String>,
    ) -> Result<Option<ToggleKvResponse>, ApiError> {
        self.client.execute(&RetrieveMerchantKv::new(account_id))
    }
}
