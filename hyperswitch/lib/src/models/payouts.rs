use hyperswitch_api::{AdditionalProperties, Field};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{Address, CustomerDetailsResponse, TimeRange};
use super::enums::{
    Connector, CountryAlpha2, Currency, PayoutEntityType, PayoutSendPriority, PayoutStatus,
    PayoutType,
};

/// Body of `POST /payouts/create`, and of the update and confirm calls.
///
/// ## Examples
///
/// ```rust
/// use hyperswitch::models::{Currency, PayoutCreateRequest, PayoutType};
///
/// let payout = PayoutCreateRequest {
///     amount: Some(1000),
///     currency: Some(Currency::Eur),
///     payout_type: Some(PayoutType::Bank),
///     ..Default::default()
/// };
/// let body = serde_json::to_value(&payout).unwrap();
/// assert_eq!(body["payout_type"], "bank");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayoutCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector: Option<Vec<Connector>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_type: Option<PayoutType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_method_data: Option<PayoutMethodData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_fulfill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_country: Option<CountryAlpha2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<PayoutEntityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<PayoutSendPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_country_code: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Where the payout goes, keyed by payout method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutMethodData {
    Card(PayoutCard),
    Bank(Bank),
    Wallet(Value),
    #[serde(untagged)]
    Unknown(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutCard {
    pub card_number: String,
    pub expiry_month: String,
    pub expiry_year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_holder_name: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Bank account details; the first scheme whose required fields are all
/// present is chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bank {
    Ach(AchBankTransfer),
    Bacs(BacsBankTransfer),
    Sepa(SepaBankTransfer),
    Unknown(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchBankTransfer {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub bank_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub bank_country_code: Field<CountryAlpha2>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub bank_city: Field<String>,
    pub bank_account_number: String,
    pub bank_routing_number: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl AchBankTransfer {
    pub fn new(
        bank_account_number: impl Into<String>,
        bank_routing_number: impl Into<String>,
    ) -> Self {
        Self {
            bank_name: Field::Unset,
            bank_country_code: Field::Unset,
            bank_city: Field::Unset,
            bank_account_number: bank_account_number.into(),
            bank_routing_number: bank_routing_number.into(),
            additional_properties: AdditionalProperties::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacsBankTransfer {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub bank_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub bank_country_code: Field<CountryAlpha2>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub bank_city: Field<String>,
    pub bank_account_number: String,
    pub bank_sort_code: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SepaBankTransfer {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub bank_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub bank_country_code: Field<CountryAlpha2>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub bank_city: Field<String>,
    pub iban: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub bic: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Body of the cancel and fulfill calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutActionRequest {
    pub payout_id: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl PayoutActionRequest {
    pub fn new(payout_id: impl Into<String>) -> Self {
        Self {
            payout_id: payout_id.into(),
            additional_properties: AdditionalProperties::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutCreateResponse {
    pub payout_id: String,
    pub merchant_id: String,
    pub amount: i64,
    pub currency: Currency,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub connector: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payout_type: Field<PayoutType>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payout_method_data: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub billing: Field<Address>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub auto_fulfill: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub customer_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub customer: Field<CustomerDetailsResponse>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub client_secret: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub return_url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub business_country: Field<CountryAlpha2>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub business_label: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    pub entity_type: PayoutEntityType,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub recurring: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub merchant_connector_id: Field<String>,
    pub status: PayoutStatus,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub error_message: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub error_code: Field<String>,
    pub profile_id: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub connector_transaction_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub priority: Field<PayoutSendPriority>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub attempts: Field<Vec<PayoutAttemptResponse>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payout_link: Field<Value>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutAttemptResponse {
    pub attempt_id: String,
    pub status: PayoutStatus,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub currency: Field<Currency>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub connector: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub error_code: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub error_message: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payment_method: Field<PayoutType>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payout_method_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub connector_transaction_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub cancellation_reason: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub unified_code: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub unified_message: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Body of `POST /payouts/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayoutListFilterConstraints {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payout_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub profile_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub customer_id: Field<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub offset: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub time_range: Field<TimeRange>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub connector: Field<Vec<Connector>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub currency: Field<Vec<Currency>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub status: Field<Vec<PayoutStatus>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payout_method: Field<Vec<PayoutType>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub entity_type: Field<PayoutEntityType>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutListResponse {
    pub size: usize,
    pub data: Vec<PayoutCreateResponse>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub total_count: Field<i64>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Filter values available for the merchant's payouts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayoutListFilters {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub connector: Field<Vec<Connector>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub currency: Field<Vec<Currency>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub status: Field<Vec<PayoutStatus>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payout_method: Field<Vec<PayoutType>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}
