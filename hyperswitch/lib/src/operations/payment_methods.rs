//! Stored payment methods and the merchant's eligible-method listing.

use hyperswitch_api::{
    ApiClient, ApiError, AsyncTransport, BlockingApiClient, BlockingTransport, Field,
};
use hyperswitch_api_macros::Operation;

use crate::models::{
    CountryAlpha2, Currency, PaymentMethodCreate, PaymentMethodDeleteResponse,
    PaymentMethodListResponse, PaymentMethodResponse, PaymentMethodUpdate,
};

/// `POST /payment_methods`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/payment_methods",
    output = PaymentMethodResponse,
    typed(200),
    empty(400)
)]
pub struct CreatePaymentMethod {
    #[operation(body)]
    pub body: PaymentMethodCreate,
}

impl CreatePaymentMethod {
    pub fn new(body: PaymentMethodCreate) -> Self {
        Self { body }
    }
}

/// `GET /payment_methods/{method_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/payment_methods/{method_id}",
    output = PaymentMethodResponse,
    typed(200),
    empty(404)
)]
pub struct RetrievePaymentMethod {
    #[operation(path)]
    pub method_id: String,
}

impl RetrievePaymentMethod {
    pub fn new(method_id: impl Into<String>) -> Self {
        Self {
            method_id: method_id.into(),
        }
    }
}

/// `POST /payment_methods/{method_id}/update`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/payment_methods/{method_id}/update",
    output = PaymentMethodResponse,
    typed(200),
    empty(404)
)]
pub struct UpdatePaymentMethod {
    #[operation(path)]
    pub method_id: String,
    #[operation(body)]
    pub body: PaymentMethodUpdate,
}

impl UpdatePaymentMethod {
    pub fn new(method_id: impl Into<String>, body: PaymentMethodUpdate) -> Self {
        Self {
            method_id: method_id.into(),
            body,
        }
    }
}

/// `DELETE /payment_methods/{method_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Delete,
    path = "/payment_methods/{method_id}",
    output = PaymentMethodDeleteResponse,
    typed(200),
    empty(404)
)]
pub struct DeletePaymentMethod {
    #[operation(path)]
    pub method_id: String,
}

impl DeletePaymentMethod {
    pub fn new(method_id: impl Into<String>) -> Self {
        Self {
            method_id: method_id.into(),
        }
    }
}

/// `GET /account/payment_methods`
///
/// Methods the merchant can accept, optionally narrowed to what fits a
/// given payment. Array filters repeat the key once per element.
#[derive(Debug, Clone, Default, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/account/payment_methods",
    output = PaymentMethodListResponse,
    typed(200),
    empty(400, 404)
)]
pub struct ListMerchantPaymentMethods {
    #[operation(query)]
    pub client_secret: Field<String>,
    #[operation(query)]
    pub accepted_countries: Field<Vec<CountryAlpha2>>,
    #[operation(query)]
    pub accepted_currencies: Field<Vec<Currency>>,
    #[operation(query)]
    pub amount: Field<i64>,
    #[operation(query)]
    pub recurring_enabled: Field<bool>,
    #[operation(query)]
    pub installment_payment_enabled: Field<bool>,
    #[operation(query)]
    pub limit: Field<i64>,
    #[operation(query)]
    pub card_networks: Field<Vec<String>>,
}

/// Payment method calls bound to a client; see
/// [`Resources::payment_methods`](crate::Resources::payment_methods).
#[derive(Debug)]
pub struct PaymentMethods<'a, C> {
    pub(crate) client: &'a C,
}

impl<T: AsyncTransport> PaymentMethods<'_, ApiClient<T>> {
    pub async fn create(
        &self,
        body: PaymentMethodCreate,
    ) -> Result<Option<PaymentMethodResponse>, ApiError> {
        self.client.execute(&CreatePaymentMethod::new(body)).await
    }

    pub async fn retrieve(
        &self,
        method_id: impl Into<String>,
    ) -> Result<Option<PaymentMethodResponse>, ApiError> {
        self.client.execute(&RetrievePaymentMethod::new(method_id)).await
    }

    pub async fn update(
        &self,
        method_id: impl Into<String>,
        body: PaymentMethodUpdate,
    ) -> Result<Option<PaymentMethodResponse>, ApiError> {
        self.client.execute(&UpdatePaymentMethod::new(method_id, body)).await
    }

    pub async fn delete(
        &self,
        method_id: impl Into<String>,
    ) -> Result<Option<PaymentMethodDeleteResponse>, ApiError> {
        self.client.execute(&DeletePaymentMethod::new(method_id)).await
    }

    pub async fn list_for_merchant(
        &self,
        filters: ListMerchantPaymentMethods,
    ) -> Result<Option<PaymentMethodListResponse>, ApiError> {
        self.client.execute(&filters).await
    }
}

impl<T: BlockingTransport> PaymentMethods<'_, BlockingApiClient<T>> {
    pub fn create(
        &self,
        body: PaymentMethodCreate,
    ) -> Result<Option<PaymentMethodResponse>, ApiError> {
        self.client.execute(&CreatePaymentMethod::new(body))
    }

    pub fn retrieve(
        &self,
        method_id: impl Into<String>,
    ) -> Result<Option<PaymentMethodResponse>, ApiError> {
        self.client.execute(&RetrievePaymentMethod::new(method_id))
    }

    pub fn update(
        &self,
        method_id: impl Into<String>,
        body: PaymentMethodUpdate,
    ) -> Result<Option<PaymentMethodResponse>, ApiError> {
        self.client.execute(&UpdatePaymentMethod::new(method_id, body))
    }

    pub fn delete(
        &self,
        method_id: impl Into<String>,
    ) -> Result<Option<PaymentMethodDeleteResponse>, ApiError> {
        self.client.execute(&DeletePaymentMethod::new(method_id))
    }

    pub fn list_for_merchant(
        &self,
        filters: ListMerchantPaymentMethods,
    ) -> Result<Option<PaymentMethodListResponse>, ApiError> {
        self.client.execute(&filters)
    }
}
