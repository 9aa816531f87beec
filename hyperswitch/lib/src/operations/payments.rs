//! Payment intents: create, confirm, capture, cancel and everything between.

use hyperswitch_api::{
    ApiClient, ApiError, AsyncTransport, BlockingApiClient, BlockingTransport, Field,
};
use hyperswitch_api_macros::Operation;

use crate::models::{
    PaymentListFilterConstraints, PaymentListFiltersV2, PaymentListResponse, PaymentListResponseV2,
    PaymentsCancelRequest, PaymentsCaptureRequest, PaymentsCompleteAuthorizeRequest,
    PaymentsConfirmRequest, PaymentsCreateRequest, PaymentsIncrementalAuthorizationRequest,
    PaymentsPostSessionTokensRequest, PaymentsPostSessionTokensResponse, PaymentsResponse,
    PaymentsSessionRequest, PaymentsSessionResponse, PaymentsUpdateMetadataRequest,
    PaymentsUpdateMetadataResponse, PaymentsUpdateRequest,
};

/// `POST /payments`
///
/// Creates a payment intent. With `confirm: true` in the body the intent is
/// confirmed in the same call.
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(method = Post, path = "/payments", output = PaymentsResponse, typed(200), empty(400))]
pub struct CreatePayment {
    #[operation(body)]
    pub body: PaymentsCreateRequest,
}

impl CreatePayment {
    pub fn new(body: PaymentsCreateRequest) -> Self {
        Self { body }
    }
}

/// `GET /payments/{payment_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/payments/{payment_id}",
    output = PaymentsResponse,
    typed(200),
    empty(404)
)]
pub struct RetrievePayment {
    #[operation(path)]
    pub payment_id: String,
    /// Ask the connector for the latest status before answering.
    #[operation(query)]
    pub force_sync: Option<bool>,
    /// Required when calling with a publishable key.
    #[operation(query)]
    pub client_secret: Option<String>,
}

impl RetrievePayment {
    pub fn new(payment_id: impl Into<String>) -> Self {
        Self {
            payment_id: payment_id.into(),
            force_sync: None,
            client_secret: None,
        }
    }
}

/// `POST /payments/{payment_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/payments/{payment_id}",
    output = PaymentsResponse,
    typed(200),
    empty(400)
)]
pub struct UpdatePayment {
    #[operation(path)]
    pub payment_id: String,
    #[operation(body)]
    pub body: PaymentsUpdateRequest,
}

impl UpdatePayment {
    pub fn new(payment_id: impl Into<String>, body: PaymentsUpdateRequest) -> Self {
        Self {
            payment_id: payment_id.into(),
            body,
        }
    }
}

/// `POST /payments/{payment_id}/confirm`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/payments/{payment_id}/confirm",
    output = PaymentsResponse,
    typed(200),
    empty(400)
)]
pub struct ConfirmPayment {
    #[operation(path)]
    pub payment_id: String,
    #[operation(body)]
    pub body: PaymentsConfirmRequest,
}

impl ConfirmPayment {
    pub fn new(payment_id: impl Into<String>, body: PaymentsConfirmRequest) -> Self {
        Self {
            payment_id: payment_id.into(),
            body,
        }
    }
}

/// `POST /payments/{payment_id}/capture`
///
/// Captures an authorized payment, fully or partially.
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/payments/{payment_id}/capture",
    output = PaymentsResponse,
    typed(200),
    empty(400)
)]
pub struct CapturePayment {
    #[operation(path)]
    pub payment_id: String,
    #[operation(body)]
    pub body: PaymentsCaptureRequest,
}

impl CapturePayment {
    pub fn new(payment_id: impl Into<String>, body: PaymentsCaptureRequest) -> Self {
        Self {
            payment_id: payment_id.into(),
            body,
        }
    }
}

/// `POST /payments/{payment_id}/cancel`
///
/// Both documented statuses carry no body schema.
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(method = Post, path = "/payments/{payment_id}/cancel", empty(200, 400))]
pub struct CancelPayment {
    #[operation(path)]
    pub payment_id: String,
    #[operation(body)]
    pub body: PaymentsCancelRequest,
}

impl CancelPayment {
    pub fn new(payment_id: impl Into<String>, body: PaymentsCancelRequest) -> Self {
        Self {
            payment_id: payment_id.into(),
            body,
        }
    }
}

/// `POST /payments/{payment_id}/cancel_post_capture`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/payments/{payment_id}/cancel_post_capture",
    output = PaymentsResponse,
    typed(200),
    empty(400)
)]
pub struct CancelPostCapture {
    #[operation(path)]
    pub payment_id: String,
    #[operation(body)]
    pub body: PaymentsCancelRequest,
}

impl CancelPostCapture {
    pub fn new(payment_id: impl Into<String>, body: PaymentsCancelRequest) -> Self {
        Self {
            payment_id: payment_id.into(),
            body,
        }
    }
}

/// `POST /payments/{payment_id}/incremental_authorization`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/payments/{payment_id}/incremental_authorization",
    output = PaymentsResponse,
    typed(200),
    empty(400)
)]
pub struct IncrementalAuthorization {
    #[operation(path)]
    pub payment_id: String,
    #[operation(body)]
    pub body: PaymentsIncrementalAuthorizationRequest,
}

impl IncrementalAuthorization {
    pub fn new(
        payment_id: impl Into<String>,
        body: PaymentsIncrementalAuthorizationRequest,
    ) -> Self {
        Self {
            payment_id: payment_id.into(),
            body,
        }
    }
}

/// `POST /payments/{payment_id}/extend_authorization`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/payments/{payment_id}/extend_authorization",
    output = PaymentsResponse,
    typed(200),
    empty(400)
)]
pub struct ExtendAuthorization {
    #[operation(path)]
    pub payment_id: String,
}

impl ExtendAuthorization {
    pub fn new(payment_id: impl Into<String>) -> Self {
        Self {
            payment_id: payment_id.into(),
        }
    }
}

/// `POST /payments/{payment_id}/complete_authorize`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/payments/{payment_id}/complete_authorize",
    output = PaymentsResponse,
    typed(200),
    empty(400)
)]
pub struct CompleteAuthorize {
    #[operation(path)]
    pub payment_id: String,
    #[operation(body)]
    pub body: PaymentsCompleteAuthorizeRequest,
}

impl CompleteAuthorize {
    pub fn new(payment_id: impl Into<String>, body: PaymentsCompleteAuthorizeRequest) -> Self {
        Self {
            payment_id: payment_id.into(),
            body,
        }
    }
}

/// `POST /payments/session_tokens`
///
/// Wallet session tokens (Apple Pay, Google Pay, PayPal ...) for the
/// payment sheet.
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/payments/session_tokens",
    output = PaymentsSessionResponse,
    typed(200),
    empty(400)
)]
pub struct CreateSessionTokens {
    #[operation(body)]
    pub body: PaymentsSessionRequest,
}

impl CreateSessionTokens {
    pub fn new(body: PaymentsSessionRequest) -> Self {
        Self { body }
    }
}

/// `POST /payments/{payment_id}/post_session_tokens`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/payments/{payment_id}/post_session_tokens",
    output = PaymentsPostSessionTokensResponse,
    typed(200),
    empty(400)
)]
pub struct PostSessionTokens {
    #[operation(path)]
    pub payment_id: String,
    #[operation(body)]
    pub body: PaymentsPostSessionTokensRequest,
}

impl PostSessionTokens {
    pub fn new(payment_id: impl Into<String>, body: PaymentsPostSessionTokensRequest) -> Self {
        Self {
            payment_id: payment_id.into(),
            body,
        }
    }
}

/// `POST /payments/{payment_id}/update_metadata`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/payments/{payment_id}/update_metadata",
    output = PaymentsUpdateMetadataResponse,
    typed(200),
    empty(400)
)]
pub struct UpdatePaymentMetadata {
    #[operation(path)]
    pub payment_id: String,
    #[operation(body)]
    pub body: PaymentsUpdateMetadataRequest,
}

impl UpdatePaymentMetadata {
    pub fn new(payment_id: impl Into<String>, body: PaymentsUpdateMetadataRequest) -> Self {
        Self {
            payment_id: payment_id.into(),
            body,
        }
    }
}

/// `GET /payments/list`
///
/// Cursor-paginated list. Timestamps filter on creation time and take
/// `YYYY-MM-DDThh:mm:ss` values.
#[derive(Debug, Clone, Default, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/payments/list",
    output = PaymentListResponse,
    typed(200),
    empty(404)
)]
pub struct ListPayments {
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
    #[operation(query = "created.lt")]
    pub created_lt: Field<String>,
    #[operation(query = "created.gt")]
    pub created_gt: Field<String>,
    #[operation(query = "created.lte")]
    pub created_lte: Field<String>,
    #[operation(query = "created.gte")]
    pub created_gte: Field<String>,
}

/// `POST /payments/list`
#[derive(Debug, Clone, Default, PartialEq, Operation)]
#[operation(method = Post, path = "/payments/list", output = PaymentListResponseV2)]
pub struct FilterPayments {
    #[operation(body)]
    pub body: PaymentListFilterConstraints,
}

/// `GET /payments/filter`
#[derive(Debug, Clone, Default, PartialEq, Operation)]
#[operation(method = Get, path = "/payments/filter", output = PaymentListFiltersV2)]
pub struct ListPaymentFilters;

/// Payment calls bound to a client; see [`Resources::payments`](crate::Resources::payments).
#[derive(Debug)]
pub struct Payments<'a, C> {
    pub(crate) client: &'a C,
}

impl<T: AsyncTransport> Payments<'_, ApiClient<T>> {
    pub async fn create(
        &self,
        body: PaymentsCreateRequest,
    ) -> Result<Option<PaymentsResponse>, ApiError> {
        self.client.execute(&CreatePayment::new(body)).await
    }

    pub async fn retrieve(
        &self,
        payment_id: impl Into<String>,
    ) -> Result<Option<PaymentsResponse>, ApiError> {
        self.client.execute(&RetrievePayment::new(payment_id)).await
    }

    pub async fn update(
        &self,
        payment_id: impl Into<String>,
        body: PaymentsUpdateRequest,
    ) -> Result<Option<PaymentsResponse>, ApiError> {
        self.client.execute(&UpdatePayment::new(payment_id, body)).await
    }

    pub async fn confirm(
        &self,
        payment_id: impl Into<String>,
        body: PaymentsConfirmRequest,
    ) -> Result<Option<PaymentsResponse>, ApiError> {
        self.client.execute(&ConfirmPayment::new(payment_id, body)).await
    }

    pub async fn capture(
        &self,
        payment_id: impl Into<String>,
        body: PaymentsCaptureRequest,
    ) -> Result<Option<PaymentsResponse>, ApiError> {
        self.client.execute(&CapturePayment::new(payment_id, body)).await
    }

    /// Returns `Some(())` when the server documented the response.
    pub async fn cancel(
        &self,
        payment_id: impl Into<String>,
        body: PaymentsCancelRequest,
    ) -> Result<Option<()>, ApiError> {
        self.client.execute(&CancelPayment::new(payment_id, body)).await
    }

    pub async fn cancel_post_capture(
        &self,
        payment_id: impl Into<String>,
        body: PaymentsCancelRequest,
    ) -> Result<Option<PaymentsResponse>, ApiError> {
        self.client.execute(&CancelPostCapture::new(payment_id, body)).await
    }

    pub async fn incremental_authorization(
        &self,
        payment_id: impl Into<String>,
        body: PaymentsIncrementalAuthorizationRequest,
    ) -> Result<Option<PaymentsResponse>, ApiError> {
        self.client
            .execute(&IncrementalAuthorization::new(payment_id, body))
            .await
    }

    pub async fn extend_authorization(
        &self,
        payment_id: impl Into<String>,
    ) -> Result<Option<PaymentsResponse>, ApiError> {
        self.client.execute(&ExtendAuthorization::new(payment_id)).await
    }

    pub async fn complete_authorize(
        &self,
        payment_id: impl Into<String>,
        body: PaymentsCompleteAuthorizeRequest,
    ) -> Result<Option<PaymentsResponse>, ApiError> {
        self.client.execute(&CompleteAuthorize::new(payment_id, body)).await
    }

    pub async fn session_tokens(
        &self,
        body: PaymentsSessionRequest,
    ) -> Result<Option<PaymentsSessionResponse>, ApiError> {
        self.client.execute(&CreateSessionTokens::new(body)).await
    }

    pub async fn post_session_tokens(
        &self,
        payment_id: impl Into<String>,
        body: PaymentsPostSessionTokensRequest,
    ) -> Result<Option<PaymentsPostSessionTokensResponse>, ApiError> {
        self.client.execute(&PostSessionTokens::new(payment_id, body)).await
    }

    pub async fn update_metadata(
        &self,
        payment_id: impl Into<String>,
        body: PaymentsUpdateMetadataRequest,
    ) -> Result<Option<PaymentsUpdateMetadataResponse>, ApiError> {
        self.client.execute(&UpdatePaymentMetadata::new(payment_id, body)).await
    }

    pub async fn list(&self, query: ListPayments) -> Result<Option<PaymentListResponse>, ApiError> {
        self.client.execute(&query).await
    }

    pub async fn filter(
        &self,
        constraints: PaymentListFilterConstraints,
    ) -> Result<Option<PaymentListResponseV2>, ApiError> {
        self.client.execute(&FilterPayments { body: constraints }).await
    }

    pub async fn filters(&self) -> Result<Option<PaymentListFiltersV2>, ApiError> {
        self.client.execute(&ListPaymentFilters).await
    }
}

impl<T: BlockingTransport> Payments<'_, BlockingApiClient<T>> {
    pub fn create(
        &self,
        body: PaymentsCreateRequest,
    ) -> Result<Option<PaymentsResponse>, ApiError> {
        self.client.execute(&CreatePayment::new(body))
    }

    pub fn retrieve(
        &self,
        payment_id: impl Into<String>,
    ) -> Result<Option<PaymentsResponse>, ApiError> {
        self.client.execute(&RetrievePayment::new(payment_id))
    }

    pub fn update(
        &self,
        payment_id: impl Into<String>,
        body: PaymentsUpdateRequest,
    ) -> Result<Option<PaymentsResponse>, ApiError> {
        self.client.execute(&UpdatePayment::new(payment_id, body))
    }

    pub fn confirm(
        &self,
        payment_id: impl Into<String>,
        body: PaymentsConfirmRequest,
    ) -> Result<Option<PaymentsResponse>, ApiError> {
        self.client.execute(&ConfirmPayment::new(payment_id, body))
    }

    pub fn capture(
        &self,
        payment_id: impl Into<String>,
        body: PaymentsCaptureRequest,
    ) -> Result<Option<PaymentsResponse>, ApiError> {
        self.client.execute(&CapturePayment::new(payment_id, body))
    }

    pub fn cancel(
        &self,
        payment_id: impl Into<String>,
        body: PaymentsCancelRequest,
    ) -> Result<Option<()>, ApiError> {
        self.client.execute(&CancelPayment::new(payment_id, body))
    }

    pub fn cancel_post_capture(
        &self,
        payment_id: impl Into<String>,
        body: PaymentsCancelRequest,
    ) -> Result<Option<PaymentsResponse>, ApiError> {
        self.client.execute(&CancelPostCapture::new(payment_id, body))
    }

    pub fn incremental_authorization(
        &self,
        payment_id: impl Into<String>,
        body: PaymentsIncrementalAuthorizationRequest,
    ) -> Result<Option<PaymentsResponse>, ApiError> {
        self.client
            .execute(&IncrementalAuthorization::new(payment_id, body))
    }

    pub fn extend_authorization(
        &self,
        payment_id: impl Into<String>,
    ) -> Result<Option<PaymentsResponse>, ApiError> {
        self.client.execute(&ExtendAuthorization::new(payment_id))
    }

    pub fn complete_authorize(
        &self,
        payment_id: impl Into<String>,
        body: PaymentsCompleteAuthorizeRequest,
    ) -> Result<Option<PaymentsResponse>, ApiError> {
        self.client.execute(&CompleteAuthorize::new(payment_id, body))
    }

    pub fn session_tokens(
        &self,
        body: PaymentsSessionRequest,
    ) -> Result<Option<PaymentsSessionResponse>, ApiError> {
        self.client.execute(&CreateSessionTokens::new(body))
    }

    pub fn post_session_tokens(
        &self,
        payment_id: impl Into<String>,
        body: PaymentsPostSessionTokensRequest,
    ) -> Result<Option<PaymentsPostSessionTokensResponse>, ApiError> {
        self.client.execute(&PostSessionTokens::new(payment_id, body))
    }

    pub fn update_metadata(
        &self,
        payment_id: impl Into<String>,
        body: PaymentsUpdateMetadataRequest,
    ) -> Result<Option<PaymentsUpdateMetadataResponse>, ApiError> {
        self.client.execute(&UpdatePaymentMetadata::new(payment_id, body))
    }

    pub fn list(&self, query: ListPayments) -> Result<Option<PaymentListResponse>, ApiError> {
        self.client.execute(&query)
    }

    pub fn filter(
        &self,
        constraints: PaymentListFilterConstraints,
    ) -> Result<Option<PaymentListResponseV2>, ApiError> {
        self.client.execute(&FilterPayments { body: constraints })
    }

    pub fn filters(&self) -> Result<Option<PaymentListFiltersV2>, ApiError> {
        self.client.execute(&ListPaymentFilters)
    }
}
