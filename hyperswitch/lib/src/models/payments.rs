//! Payment intents and the requests that move them through their lifecycle.

use std::collections::HashMap;

use hyperswitch_api::{AdditionalProperties, Field};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{
    Address, AmountFilter, BrowserInformation, CustomerDetails, CustomerDetailsResponse,
    OrderDetailsWithAmount, PaymentMethodDataRequest, PaymentMethodDataResponse, TimeRange,
};
use super::disputes::DisputeResponsePaymentsRetrieve;
use super::enums::{
    AuthenticationType, CaptureMethod, CardNetwork, Connector, Currency, FutureUsage, IntentStatus,
    PaymentMethod, PaymentMethodType,
};
use super::mandates::{CustomerAcceptance, MandateData};
use super::refunds::RefundResponse;

/// Body of `POST /payments`.
///
/// ## Examples
///
/// ```rust
/// use hyperswitch::models::{Currency, PaymentsCreateRequest};
///
/// let mut request = PaymentsCreateRequest::new(6540, Currency::Usd);
/// request.confirm = Some(false);
///
/// let body = serde_json::to_value(&request).unwrap();
/// assert_eq!(body, serde_json::json!({"amount": 6540, "currency": "USD", "confirm": false}));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentsCreateRequest {
    /// Amount in the currency's minor unit.
    pub amount: i64,
    pub currency: Currency,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub amount_to_capture: Field<i64>,
    /// Caller-chosen identifier; generated by the server when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_method: Option<CaptureMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_on: Option<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub customer_id: Field<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerDetails>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub email: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub phone: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub return_url: Field<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_future_usage: Option<FutureUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_type: Option<PaymentMethodType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_data: Option<PaymentMethodDataRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<AuthenticationType>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub billing: Field<Address>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub shipping: Field<Address>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub statement_descriptor_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub statement_descriptor_suffix: Field<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_details: Option<Vec<OrderDetailsWithAmount>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_data: Option<MandateData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_acceptance: Option<CustomerAcceptance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub off_session: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_info: Option<BrowserInformation>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    /// Restricts routing to these connectors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector: Option<Vec<Connector>>,
    /// Seconds the client secret stays valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_expiry: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_external_three_ds_authentication: Option<bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl PaymentsCreateRequest {
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self {
            amount,
            currency,
            amount_to_capture: Field::Unset,
            payment_id: None,
            confirm: None,
            capture_method: None,
            capture_on: None,
            customer_id: Field::Unset,
            customer: None,
            email: Field::Unset,
            name: Field::Unset,
            phone: Field::Unset,
            description: Field::Unset,
            return_url: Field::Unset,
            setup_future_usage: None,
            payment_method: None,
            payment_method_type: None,
            payment_method_data: None,
            payment_token: None,
            authentication_type: None,
            billing: Field::Unset,
            shipping: Field::Unset,
            statement_descriptor_name: Field::Unset,
            statement_descriptor_suffix: Field::Unset,
            order_details: None,
            mandate_data: None,
            customer_acceptance: None,
            off_session: None,
            browser_info: None,
            metadata: Field::Unset,
            profile_id: None,
            connector: None,
            session_expiry: None,
            request_external_three_ds_authentication: None,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// Body of `POST /payments/{payment_id}`. Only set fields are changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentsUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub amount_to_capture: Field<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_method: Option<CaptureMethod>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub customer_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub email: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub return_url: Field<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_future_usage: Option<FutureUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_data: Option<PaymentMethodDataRequest>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub billing: Field<Address>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub shipping: Field<Address>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub statement_descriptor_name: Field<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_details: Option<Vec<OrderDetailsWithAmount>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Value>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Body of `POST /payments/{payment_id}/confirm`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentsConfirmRequest {
    /// Required when confirming with a publishable key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_type: Option<PaymentMethodType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_data: Option<PaymentMethodDataRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_token: Option<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub return_url: Field<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_future_usage: Option<FutureUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_data: Option<MandateData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_acceptance: Option<CustomerAcceptance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub off_session: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_info: Option<BrowserInformation>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub billing: Field<Address>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub shipping: Field<Address>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Body of `POST /payments/{payment_id}/capture`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentsCaptureRequest {
    /// Defaults to the full capturable amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_to_capture: Option<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub statement_descriptor_suffix: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub statement_descriptor_prefix: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Body of the cancel and cancel-post-capture endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentsCancelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Body of `POST /payments/{payment_id}/incremental_authorization`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentsIncrementalAuthorizationRequest {
    /// New total authorized amount, in minor units.
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl PaymentsIncrementalAuthorizationRequest {
    pub fn new(amount: i64) -> Self {
        Self {
            amount,
            reason: None,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// Body of `POST /payments/{payment_id}/complete_authorize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentsCompleteAuthorizeRequest {
    pub client_secret: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub shipping: Field<Address>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl PaymentsCompleteAuthorizeRequest {
    pub fn new(client_secret: impl Into<String>) -> Self {
        Self {
            client_secret: client_secret.into(),
            shipping: Field::Unset,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// Body of `POST /payments/session_tokens`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentsSessionRequest {
    pub payment_id: String,
    pub client_secret: String,
    /// Wallets to create sessions for.
    pub wallets: Vec<PaymentMethodType>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl PaymentsSessionRequest {
    pub fn new(
        payment_id: impl Into<String>,
        client_secret: impl Into<String>,
        wallets: Vec<PaymentMethodType>,
    ) -> Self {
        Self {
            payment_id: payment_id.into(),
            client_secret: client_secret.into(),
            wallets,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentsSessionResponse {
    pub payment_id: String,
    pub client_secret: String,
    pub session_token: Vec<SessionToken>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Wallet session token, discriminated by `wallet_name`.
///
/// Token contents differ per wallet and are kept as raw key/value pairs. A
/// wallet this client does not know is kept whole in
/// [`Unknown`](Self::Unknown).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "wallet_name", rename_all = "snake_case")]
pub enum SessionToken {
    GooglePay(AdditionalProperties),
    SamsungPay(AdditionalProperties),
    Klarna(AdditionalProperties),
    Paypal(AdditionalProperties),
    ApplePay(AdditionalProperties),
    OpenBanking(AdditionalProperties),
    Paze(AdditionalProperties),
    ClickToPay(AdditionalProperties),
    AmazonPay(AdditionalProperties),
    NoSessionTokenReceived,
    #[serde(untagged)]
    Unknown(Value),
}

/// Body of `POST /payments/{payment_id}/post_session_tokens`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentsPostSessionTokensRequest {
    pub client_secret: String,
    pub payment_method_type: PaymentMethodType,
    pub payment_method: PaymentMethod,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl PaymentsPostSessionTokensRequest {
    pub fn new(
        client_secret: impl Into<String>,
        payment_method: PaymentMethod,
        payment_method_type: PaymentMethodType,
    ) -> Self {
        Self {
            client_secret: client_secret.into(),
            payment_method_type,
            payment_method,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentsPostSessionTokensResponse {
    pub payment_id: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub next_action: Field<Value>,
    pub status: IntentStatus,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Body of `POST /payments/{payment_id}/update_metadata`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentsUpdateMetadataRequest {
    pub metadata: Value,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl PaymentsUpdateMetadataRequest {
    pub fn new(metadata: Value) -> Self {
        Self {
            metadata,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentsUpdateMetadataResponse {
    pub payment_id: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Value>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// A payment intent as returned by every payments endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentsResponse {
    pub payment_id: String,
    pub merchant_id: String,
    pub status: IntentStatus,
    pub amount: i64,
    /// Amount after surcharges and tax.
    pub net_amount: i64,
    pub amount_capturable: i64,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub amount_received: Field<i64>,
    pub currency: Currency,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub connector: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub client_secret: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub customer_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub customer: Field<CustomerDetailsResponse>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub refunds: Field<Vec<RefundResponse>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub disputes: Field<Vec<DisputeResponsePaymentsRetrieve>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub mandate_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub setup_future_usage: Field<FutureUsage>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub off_session: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub capture_method: Field<CaptureMethod>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payment_method: Field<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payment_method_type: Field<PaymentMethodType>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payment_method_data: Field<PaymentMethodDataResponse>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payment_token: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub shipping: Field<Address>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub billing: Field<Address>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub order_details: Field<Vec<OrderDetailsWithAmount>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub email: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub phone: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub return_url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub authentication_type: Field<AuthenticationType>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub statement_descriptor_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub statement_descriptor_suffix: Field<String>,
    /// What the customer must do next (redirect, display a QR code, ...).
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub next_action: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub cancellation_reason: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub error_code: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub error_message: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub connector_transaction_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub merchant_connector_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub profile_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub attempt_count: Field<i16>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub expires_on: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub updated: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Result of `GET /payments/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentListResponse {
    pub size: usize,
    pub data: Vec<PaymentsResponse>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Body of `POST /payments/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentListFilterConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_filter: Option<AmountFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector: Option<Vec<Connector>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Vec<Currency>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<IntentStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<Vec<PaymentMethod>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_type: Option<Vec<PaymentMethodType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<Vec<AuthenticationType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_connector_id: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_network: Option<Vec<CardNetwork>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Result of `POST /payments/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentListResponseV2 {
    /// Entries in this page.
    pub count: usize,
    /// Entries matching the filter across all pages.
    pub total_count: i64,
    pub data: Vec<PaymentsResponse>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantConnectorInfo {
    pub connector_label: String,
    pub merchant_connector_id: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Filter values available for the merchant's payments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentListFiltersV2 {
    /// Connector name to the accounts configured for it.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub connector: Field<HashMap<String, Vec<MerchantConnectorInfo>>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub currency: Field<Vec<Currency>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub status: Field<Vec<IntentStatus>>,
    /// Payment method family to its method types.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payment_method: Field<HashMap<String, Vec<PaymentMethodType>>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub authentication_type: Field<Vec<AuthenticationType>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_network: Field<Vec<CardNetwork>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}
