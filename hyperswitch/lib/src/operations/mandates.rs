//! Recurring-payment mandates.

use hyperswitch_api::{
    ApiClient, ApiError, AsyncTransport, BlockingApiClient, BlockingTransport, Field,
};
use hyperswitch_api_macros::Operation;

use crate::models::{MandateResponse, MandateRevokedResponse, MandateStatus};

/// `GET /mandates/{mandate_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/mandates/{mandate_id}",
    output = MandateResponse,
    typed(200),
    empty(404)
)]
pub struct RetrieveMandate {
    #[operation(path)]
    pub mandate_id: String,
}

impl RetrieveMandate {
    pub fn new(mandate_id: impl Into<String>) -> Self {
        Self {
            mandate_id: mandate_id.into(),
        }
    }
}

/// `POST /mandates/revoke/{mandate_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/mandates/revoke/{mandate_id}",
    output = MandateRevokedResponse,
    typed(200),
    empty(400)
)]
pub struct RevokeMandate {
    #[operation(path)]
    pub mandate_id: String,
}

impl RevokeMandate {
    pub fn new(mandate_id: impl Into<String>) -> Self {
        Self {
            mandate_id: mandate_id.into(),
        }
    }
}

/// `GET /mandates/list`
#[derive(Debug, Clone, Default, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/mandates/list",
    output = Vec<MandateResponse>,
    typed(200),
    empty(400)
)]
pub struct ListMandates {
    #[operation(query)]
    pub limit: Field<i64>,
    #[operation(query)]
    pub offset: Field<i64>,
    #[operation(query)]
    pub mandate_status: Field<MandateStatus>,
    #[operation(query)]
    pub connector: Field<String>,
    #[operation(query)]
    pub created_time: Field<String>,
    #[operation(query = "created_time.lt")]
    pub created_time_lt: Field<String>,
    #[operation(query = "created_time.gt")]
    pub created_time_gt: Field<String>,
    #[operation(query = "created_time.lte")]
    pub created_time_lte: Field<String>,
    #[operation(query = "created_time.gte")]
    pub created_time_gte: Field<String>,
}

/// Mandate calls bound to a client; see [`Resources::mandates`](crate::Resources::mandates).
#[derive(Debug)]
pub struct Mandates<'a, C> {
    pub(crate) client: &'a C,
}

impl<T: AsyncTransport> Mandates<'_, ApiClient<T>> {
    pub async fn retrieve(
        &self,
        mandate_id: impl Into<String>,
    ) -> Result<Option<MandateResponse>, ApiError> {
        self.client.execute(&RetrieveMandate::new(mandate_id)).await
    }

    pub async fn revoke(
        &self,
        mandate_id: impl Into<String>,
    ) -> Result<Option<MandateRevokedResponse>, ApiError> {
        self.client.execute(&RevokeMandate::new(mandate_id)).await
    }

    pub async fn list(
        &self,
        filters: ListMandates,
    ) -> Result<Option<Vec<MandateResponse>>, ApiError> {
        self.client.execute(&filters).await
    }
}

impl<T: BlockingTransport> Mandates<'_, BlockingApiClient<T>> {
    pub fn retrieve(
        &self,
        mandate_id: impl Into<String>,
    ) -> Result<Option<MandateResponse>, ApiError> {
        self.client.execute(&RetrieveMandate::new(mandate_id))
    }

    pub fn revoke(
        &self,
        mandate_id: impl Into<String>,
    ) -> Result<Option<MandateRevokedResponse>, ApiError> {
        self.client.execute(&RevokeMandate::new(mandate_id))
    }

    pub fn list(&self, filters: ListMandates) -> Result<Option<Vec<MandateResponse>>, ApiError> {
        self.client.execute(&filters)
    }
}
