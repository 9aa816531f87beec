use hyperswitch_api::{AdditionalProperties, Field};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{Address, AddressDetails};
use super::enums::{PaymentMethod, PaymentMethodType};
use super::payment_methods::CardDetailFromLocker;

/// Body of `POST /customers`.
///
/// ## Examples
///
/// ```rust
/// use hyperswitch::models::CustomerRequest;
/// use hyperswitch_api::Field;
///
/// let request = CustomerRequest {
///     name: Field::Value("John Doe".into()),
///     email: Field::Value("guest@example.com".into()),
///     ..Default::default()
/// };
/// let body = serde_json::to_value(&request).unwrap();
/// assert_eq!(body, serde_json::json!({"name": "John Doe", "email": "guest@example.com"}));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub email: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub phone: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub phone_country_code: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub address: Field<AddressDetails>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Value>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Body of `POST /customers/{customer_id}`.
///
/// Set a field to [`Field::Null`] to clear it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerUpdateRequest {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub email: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub phone: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub phone_country_code: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub address: Field<AddressDetails>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Value>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub customer_id: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub email: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub phone: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub phone_country_code: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub address: Field<AddressDetails>,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub default_payment_method_id: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDeleteResponse {
    pub customer_id: String,
    pub customer_deleted: bool,
    pub address_deleted: bool,
    pub payment_methods_deleted: bool,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerPaymentMethodsListResponse {
    pub customer_payment_methods: Vec<CustomerPaymentMethod>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub is_guest_customer: Field<bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// A payment method saved against a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerPaymentMethod {
    /// Token to pay with this method; valid for a limited time.
    pub payment_token: String,
    pub payment_method_id: String,
    pub customer_id: String,
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payment_method_type: Field<PaymentMethodType>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payment_method_issuer: Field<String>,
    pub recurring_enabled: bool,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub installment_payment_enabled: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card: Field<CardDetailFromLocker>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub default_payment_method_set: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub last_used_at: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub billing: Field<Address>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDefaultPaymentMethodResponse {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub default_payment_method_id: Field<String>,
    pub customer_id: String,
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payment_method_type: Field<PaymentMethodType>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}
