//! Payouts to cards, bank accounts and wallets.

use hyperswitch_api::{
    ApiClient, ApiError, AsyncTransport, BlockingApiClient, BlockingTransport, Field,
};
use hyperswitch_api_macros::Operation;

use crate::models::{
    PayoutActionRequest, PayoutCreateRequest, PayoutCreateResponse, PayoutListFilterConstraints,
    PayoutListFilters, PayoutListResponse, TimeRange,
};

/// `POST /payouts/create`
#[derive(Debug, Clone, Default, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/payouts/create",
    output = PayoutCreateResponse,
    typed(200),
    empty(400)
)]
pub struct CreatePayout {
    #[operation(body)]
    pub body: PayoutCreateRequest,
}

impl CreatePayout {
    pub fn new(body: PayoutCreateRequest) -> Self {
        Self { body }
    }
}

/// `GET /payouts/{payout_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/payouts/{payout_id}",
    output = PayoutCreateResponse,
    typed(200),
    empty(404)
)]
pub struct RetrievePayout {
    #[operation(path)]
    pub payout_id: String,
    #[operation(query)]
    pub force_sync: Option<bool>,
}

impl RetrievePayout {
    pub fn new(payout_id: impl Into<String>) -> Self {
        Self {
            payout_id: payout_id.into(),
            force_sync: None,
        }
    }
}

/// `POST /payouts/{payout_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/payouts/{payout_id}",
    output = PayoutCreateResponse,
    typed(200),
    empty(400)
)]
pub struct UpdatePayout {
    #[operation(path)]
    pub payout_id: String,
    #[operation(body)]
    pub body: PayoutCreateRequest,
}

impl UpdatePayout {
    pub fn new(payout_id: impl Into<String>, body: PayoutCreateRequest) -> Self {
        Self {
            payout_id: payout_id.into(),
            body,
        }
    }
}

/// `POST /payouts/{payout_id}/cancel`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/payouts/{payout_id}/cancel",
    output = PayoutCreateResponse,
    typed(200),
    empty(400)
)]
pub struct CancelPayout {
    #[operation(path)]
    pub payout_id: String,
    #[operation(body)]
    pub body: PayoutActionRequest,
}

impl CancelPayout {
    /// The id goes in both the path and the body.
    pub fn new(payout_id: impl Into<String>) -> Self {
        let payout_id = payout_id.into();
        Self {
            body: PayoutActionRequest::new(payout_id.clone()),
            payout_id,
        }
    }
}

/// `POST /payouts/{payout_id}/fulfill`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/payouts/{payout_id}/fulfill",
    output = PayoutCreateResponse,
    typed(200),
    empty(400)
)]
pub struct FulfillPayout {
    #[operation(path)]
    pub payout_id: String,
    #[operation(body)]
    pub body: PayoutActionRequest,
}

impl FulfillPayout {
    pub fn new(payout_id: impl Into<String>) -> Self {
        let payout_id = payout_id.into();
        Self {
            body: PayoutActionRequest::new(payout_id.clone()),
            payout_id,
        }
    }
}

/// `POST /payouts/{payout_id}/confirm`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/payouts/{payout_id}/confirm",
    output = PayoutCreateResponse,
    typed(200),
    empty(400)
)]
pub struct ConfirmPayout {
    #[operation(path)]
    pub payout_id: String,
    #[operation(body)]
    pub body: PayoutCreateRequest,
}

impl ConfirmPayout {
    pub fn new(payout_id: impl Into<String>, body: PayoutCreateRequest) -> Self {
        Self {
            payout_id: payout_id.into(),
            body,
        }
    }
}

/// `GET /payouts/list`
#[derive(Debug, Clone, Default, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/payouts/list",
    output = PayoutListResponse,
    typed(200),
    empty(404)
)]
pub struct ListPayouts {
    #[operation(query)]
    pub customer_id: Field<String>,
    #[operation(query)]
    pub starting_after: Field<String>,
    #[operation(query)]
    pub ending_before: Field<String>,
    #[operation(query)]
    pub limit: Field<i64>,
    #[operation(query)]
    pub created: Field<String>,
    #[operation(query)]
    pub time_range: Field<String>,
}

/// `POST /payouts/list`
#[derive(Debug, Clone, Default, PartialEq, Operation)]
#[operation(method = Post, path = "/payouts/list", output = PayoutListResponse)]
pub struct FilterPayouts {
    #[operation(body)]
    pub body: PayoutListFilterConstraints,
}

/// `POST /payouts/filter`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(method = Post, path = "/payouts/filter", output = PayoutListFilters)]
pub struct ListPayoutFilters {
    #[operation(body)]
    pub body: TimeRange,
}

impl ListPayoutFilters {
    pub fn new(body: TimeRange) -> Self {
        Self { body }
    }
}

/// Payout calls bound to a client; see [`Resources::payouts`](crate::Resources::payouts).
#[derive(Debug)]
pub struct Payouts<'a, C> {
    pub(crate) client: &'a C,
}

impl<T: AsyncTransport> Payouts<'_, ApiClient<T>> {
    pub async fn create(
        &self,
        body: PayoutCreateRequest,
    ) -> Result<Option<PayoutCreateResponse>, ApiError> {
        self.client.execute(&CreatePayout::new(body)).await
    }

    pub async fn retrieve(
        &self,
        payout_id: impl Into<String>,
    ) -> Result<Option<PayoutCreateResponse>, ApiError> {
        self.client.execute(&RetrievePayout::new(payout_id)).await
    }

    pub async fn update(
        &self,
        payout_id: impl Into<String>,
        body: PayoutCreateRequest,
    ) -> Result<Option<PayoutCreateResponse>, ApiError> {
        self.client.execute(&UpdatePayout::new(payout_id, body)).await
    }

    pub async fn cancel(
        &self,
        payout_id: impl Into<String>,
    ) -> Result<Option<PayoutCreateResponse>, ApiError> {
        self.client.execute(&CancelPayout::new(payout_id)).await
    }

    pub async fn fulfill(
        &self,
        payout_id: impl Into<String>,
    ) -> Result<Option<PayoutCreateResponse>, ApiError> {
        self.client.execute(&FulfillPayout::new(payout_id)).await
    }

    pub async fn confirm(
        &self,
        payout_id: impl Into<String>,
        body: PayoutCreateRequest,
    ) -> Result<Option<PayoutCreateResponse>, ApiError> {
        self.client.execute(&ConfirmPayout::new(payout_id, body)).await
    }

    pub async fn list(&self, query: ListPayouts) -> Result<Option<PayoutListResponse>, ApiError> {
        self.client.execute(&query).await
    }

    pub async fn filter(
        &self,
        constraints: PayoutListFilterConstraints,
    ) -> Result<Option<PayoutListResponse>, ApiError> {
        self.client.execute(&FilterPayouts { body: constraints }).await
    }

    pub async fn filters(&self, range: TimeRange) -> Result<Option<PayoutListFilters>, ApiError> {
        self.client.execute(&ListPayoutFilters::new(range)).await
    }
}

impl<T: BlockingTransport> Payouts<'_, BlockingApiClient<T>> {
    pub fn create(
        &self,
        body: PayoutCreateRequest,
    ) -> Result<Option<PayoutCreateResponse>, ApiError> {
        self.client.execute(&CreatePayout::new(body))
    }

    pub fn retrieve(
        &self,
        payout_id: impl Into<String>,
    ) -> Result<Option<PayoutCreateResponse>, ApiError> {
        self.client.execute(&RetrievePayout::new(payout_id))
    }

    pub fn update(
        &self,
        payout_id: impl Into<String>,
        body: PayoutCreateRequest,
    ) -> Result<Option<PayoutCreateResponse>, ApiError> {
        self.client.execute(&UpdatePayout::new(payout_id, body))
    }

    pub fn cancel(
        &self,
        payout_id: impl Into<String>,
    ) -> Result<Option<PayoutCreateResponse>, ApiError> {
        self.client.execute(&CancelPayout::new(payout_id))
    }

    pub fn fulfill(
        &self,
        payout_id: impl Into<String>,
    ) -> Result<Option<PayoutCreateResponse>, ApiError> {
        self.client.execute(&FulfillPayout::new(payout_id))
    }

    pub fn confirm(
        &self,
        payout_id: impl Into<String>,
        body: PayoutCreateRequest,
    ) -> Result<Option<PayoutCreateResponse>, ApiError> {
        self.client.execute(&ConfirmPayout::new(payout_id, body))
    }

    pub fn list(&self, query: ListPayouts) -> Result<Option<PayoutListResponse>, ApiError> {
        self.client.execute(&query)
    }

    pub fn filter(
        &self,
        constraints: PayoutListFilterConstraints,
    ) -> Result<Option<PayoutListResponse>, ApiError> {
        self.client.execute(&FilterPayouts { body: constraints })
    }

    pub fn filters(&self, range: TimeRange) -> Result<Option<PayoutListFilters>, ApiError> {
        self.client.execute(&ListPayoutFilters::new(range))
    }
}
