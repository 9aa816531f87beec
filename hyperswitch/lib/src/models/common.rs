//! Building blocks embedded in more than one resource.

use hyperswitch_api::{AdditionalProperties, Field};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{CardNetwork, CountryAlpha2};

/// Postal address plus contact details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub address: Field<AddressDetails>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub phone: Field<PhoneDetails>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub email: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressDetails {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub city: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub country: Field<CountryAlpha2>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub line1: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub line2: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub line3: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub zip: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub state: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub first_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub last_name: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneDetails {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub number: Field<String>,
    /// Dialing prefix such as `+1`.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub country_code: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Customer details passed inline with a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub id: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub email: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub phone: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub phone_country_code: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl CustomerDetails {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Field::Unset,
            email: Field::Unset,
            phone: Field::Unset,
            phone_country_code: Field::Unset,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// Customer details echoed back on a payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetailsResponse {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub email: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub phone: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub phone_country_code: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// One order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetailsWithAmount {
    pub product_name: String,
    pub quantity: u16,
    /// Unit price in minor units.
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub requires_shipping: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub product_img_link: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub product_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub category: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub sub_category: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub brand: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl OrderDetailsWithAmount {
    pub fn new(product_name: impl Into<String>, quantity: u16, amount: i64) -> Self {
        Self {
            product_name: product_name.into(),
            quantity,
            amount,
            requires_shipping: Field::Unset,
            product_img_link: Field::Unset,
            product_id: Field::Unset,
            category: Field::Unset,
            sub_category: Field::Unset,
            brand: Field::Unset,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// Browser fingerprint used for 3DS.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrowserInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_depth: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_script_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Raw card details supplied by the merchant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub card_number: String,
    pub card_exp_month: String,
    pub card_exp_year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_holder_name: Option<String>,
    pub card_cvc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_network: Option<CardNetwork>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Card {
    pub fn new(
        card_number: impl Into<String>,
        card_exp_month: impl Into<String>,
        card_exp_year: impl Into<String>,
        card_cvc: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            card_exp_month: card_exp_month.into(),
            card_exp_year: card_exp_year.into(),
            card_holder_name: None,
            card_cvc: card_cvc.into(),
            card_issuer: None,
            card_network: None,
            nick_name: None,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// Payment method details, keyed by family.
///
/// Serialized with the family name as the single key, e.g.
/// `{"card": {...}}`. Families without a dedicated model carry their payload
/// as raw JSON; the two keyword families serialize as bare strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodData {
    Card(Card),
    CardRedirect(Value),
    Wallet(Value),
    PayLater(Value),
    BankRedirect(Value),
    BankDebit(Value),
    BankTransfer(Value),
    RealTimePayment(Value),
    Crypto(Value),
    Upi(Value),
    Voucher(Value),
    GiftCard(Value),
    OpenBanking(Value),
    MobilePayment(Value),
    CardToken(Value),
    MandatePayment,
    Reward,
    /// A family this client does not know, as sent.
    #[serde(untagged)]
    Unknown(Value),
}

/// Payment method details plus the billing address tied to them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodDataRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_data: Option<PaymentMethodData>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub billing: Field<Address>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Card summary returned on a payment; never carries the full number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardResponse {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub last4: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_network: Field<CardNetwork>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_issuer: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_issuing_country: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_isin: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_extended_bin: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_exp_month: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_exp_year: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_holder_name: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Payment method summary echoed on a payment response, with the billing
/// address used for it.
///
/// Cards get a typed summary. Other families (`wallet`, `bank_transfer`, ...)
/// stay in `additional_properties` under their own key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodDataResponse {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card: Field<CardResponse>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub billing: Field<Address>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Inclusive time window filter; timestamps are ISO 8601 strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start_time: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub end_time: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl TimeRange {
    pub fn starting(start_time: impl Into<String>) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: Field::Unset,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// Amount window filter in minor units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmountFilter {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub start_amount: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub end_amount: Field<i64>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Error envelope the API returns on 4xx and 5xx responses.
///
/// No operation documents a typed error body, so this never shows up in
/// [`Parsed`](hyperswitch_api::Parsed); decode it from the raw content of a
/// detailed response instead.
///
/// ## Examples
///
/// ```rust
/// use hyperswitch::models::ErrorResponse;
/// use hyperswitch_api::JsonModel;
///
/// let body = serde_json::json!({
///     "error": {
///         "type": "invalid_request",
///         "message": "Missing required param: amount",
///         "code": "IR_04"
///     }
/// });
/// let err = ErrorResponse::from_json_value(body).unwrap();
/// assert_eq!(err.error.code, "IR_04");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl ErrorResponse {
    /// Attempts to decode an error envelope from a raw response body.
    pub fn from_slice(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetails {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
    pub code: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperswitch_api::JsonModel;
    use serde_json::json;

    #[test]
    fn test_address_null_clears_field() {
        let address = Address {
            address: Field::Value(AddressDetails {
                line1: Field::Value("1 Main St".into()),
                line2: Field::Null,
                country: Field::Value(CountryAlpha2::Us),
                ..Default::default()
            }),
            ..Default::default()
        };

        let value = address.to_json_value().unwrap();
        assert_eq!(
            value,
            json!({"address": {"line1": "1 Main St", "line2": null, "country": "US"}})
        );
        assert_eq!(Address::from_json_value(value).unwrap(), address);
    }

    #[test]
    fn test_payment_method_data_is_keyed_by_family() {
        let data = PaymentMethodData::Card(Card::new("4242424242424242", "10", "30", "123"));
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["card"]["card_number"], "4242424242424242");
        assert!(value["card"].get("card_holder_name").is_none());

        let reward: PaymentMethodData = serde_json::from_value(json!("reward")).unwrap();
        assert_eq!(reward, PaymentMethodData::Reward);

        let wallet: PaymentMethodData =
            serde_json::from_value(json!({"wallet": {"apple_pay": {"token": "t"}}})).unwrap();
        assert!(matches!(wallet, PaymentMethodData::Wallet(_)));

        let future = json!({"network_token": {"token": "nt_1"}});
        let parsed: PaymentMethodData = serde_json::from_value(future.clone()).unwrap();
        assert_eq!(parsed, PaymentMethodData::Unknown(future.clone()));
        assert_eq!(serde_json::to_value(&parsed).unwrap(), future);
    }

    #[test]
    fn test_payment_method_response_keeps_billing_beside_card() {
        let body = json!({
            "card": {"last4": "4242"},
            "billing": {"address": {"city": "Berlin"}}
        });
        let data = PaymentMethodDataResponse::from_json_value(body.clone()).unwrap();

        let card = data.card.as_value().unwrap();
        assert_eq!(card.last4.as_value().map(String::as_str), Some("4242"));
        let city = data.billing.as_value().and_then(|b| b.address.as_value());
        assert_eq!(city.and_then(|a| a.city.as_value()).map(String::as_str), Some("Berlin"));
        assert_eq!(data.to_json_value().unwrap(), body);
    }

    #[test]
    fn test_payment_method_response_keeps_other_families() {
        let body = json!({"wallet": {"apple_pay": {"last4": "1111"}}, "billing": null});
        let data = PaymentMethodDataResponse::from_json_value(body.clone()).unwrap();

        assert!(data.card.is_unset());
        assert!(data.billing.is_null());
        assert!(data.additional_properties.contains_key("wallet"));
        assert_eq!(data.to_json_value().unwrap(), body);
    }

    #[test]
    fn test_time_range_keeps_unknown_keys() {
        let body = json!({"start_time": "2024-01-01T00:00:00Z", "end_time": null, "zone": "UTC"});
        let range = TimeRange::from_json_value(body.clone()).unwrap();
        assert!(range.end_time.is_null());
        assert_eq!(range.to_json_value().unwrap(), body);
    }

    #[test]
    fn test_error_response_from_slice() {
        let body =
            br#"{"error":{"type":"invalid_request","message":"nope","code":"IR_01","reason":"x"}}"#;
        let err = ErrorResponse::from_slice(body).unwrap();
        assert_eq!(err.error.error_type, "invalid_request");
        assert_eq!(err.error.additional_properties["reason"], "x");
        assert!(ErrorResponse::from_slice(b"<html>").is_none());
    }
}
