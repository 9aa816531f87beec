//! Card BIN and fingerprint blocklist.

use hyperswitch_api::{ApiClient, ApiError, AsyncTransport, BlockingApiClient, BlockingTransport};
use hyperswitch_api_macros::Operation;

use crate::models::{
    BlocklistDataKind, BlocklistRequest, BlocklistResponse, ToggleBlocklistResponse,
};

/// `GET /blocklist`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/blocklist",
    output = Vec<BlocklistResponse>,
    typed(200),
    empty(400)
)]
pub struct ListBlockedPaymentMethods {
    #[operation(query)]
    pub data_kind: BlocklistDataKind,
}

impl ListBlockedPaymentMethods {
    pub fn new(data_kind: BlocklistDataKind) -> Self {
        Self { data_kind }
    }
}

/// `POST /blocklist`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(method = Post, path = "/blocklist", output = BlocklistResponse, typed(200), empty(400))]
pub struct BlockPaymentMethod {
    #[operation(body)]
    pub body: BlocklistRequest,
}

impl BlockPaymentMethod {
    pub fn new(body: BlocklistRequest) -> Self {
        Self { body }
    }
}

/// `DELETE /blocklist`
///
/// One of the few `DELETE` calls that carries a JSON body.
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Delete,
    path = "/blocklist",
    output = BlocklistResponse,
    typed(200),
    empty(400)
)]
pub struct UnblockPaymentMethod {
    #[operation(body)]
    pub body: BlocklistRequest,
}

impl UnblockPaymentMethod {
    pub fn new(body: BlocklistRequest) -> Self {
        Self { body }
    }
}

/// `POST /blocklist/toggle`
///
/// Turns blocklist checks on or off for the merchant.
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/blocklist/toggle",
    output = ToggleBlocklistResponse,
    typed(200),
    empty(400)
)]
pub struct ToggleBlocklistGuard {
    #[operation(query)]
    pub status: bool,
}

impl ToggleBlocklistGuard {
    pub fn new(status: bool) -> Self {
        Self { status }
    }
}

/// Blocklist calls bound to a client; see [`Resources::blocklist`](crate::Resources::blocklist).
#[derive(Debug)]
pub struct Blocklist<'a, C> {
    pub(crate) client: &'a C,
}

impl<T: AsyncTransport> Blocklist<'_, ApiClient<T>> {
    pub async fn list(
        &self,
        data_kind: BlocklistDataKind,
    ) -> Result<Option<Vec<BlocklistResponse>>, ApiError> {
        self.client
            .execute(&ListBlockedPaymentMethods::new(data_kind))
            .await
    }

    pub async fn block(
        &self,
        entry: BlocklistRequest,
    ) -> Result<Option<BlocklistResponse>, ApiError> {
        self.client.execute(&BlockPaymentMethod::new(entry)).await
    }

    pub async fn unblock(
        &self,
        entry: BlocklistRequest,
    ) -> Result<Option<BlocklistResponse>, ApiError> {
        self.client.execute(&UnblockPaymentMethod::new(entry)).await
    }

    pub async fn toggle_guard(
        &self,
        status: bool,
    ) -> Result<Option<ToggleBlocklistResponse>, ApiError> {
        self.client.execute(&ToggleBlocklistGuard::new(status)).await
    }
}

impl<T: BlockingTransport> Blocklist<'_, BlockingApiClient<T>> {
    pub fn list(
        &self,
        data_kind: BlocklistDataKind,
    ) -> Result<Option<Vec<BlocklistResponse>>, ApiError> {
        self.client.execute(&ListBlockedPaymentMethods::new(data_kind))
    }

    pub fn block(&self, entry: BlocklistRequest) -> Result<Option<BlocklistResponse>, ApiError> {
        self.client.execute(&BlockPaymentMethod::new(entry))
    }

    pub fn unblock(&self, entry: BlocklistRequest) -> Result<Option<BlocklistResponse>, ApiError> {
        self.client.execute(&UnblockPaymentMethod::new(entry))
    }

    pub fn toggle_guard(&self, status: bool) -> Result<Option<ToggleBlocklistResponse>, ApiError> {
        self.client.execute(&ToggleBlocklistGuard::new(status))
    }
}
