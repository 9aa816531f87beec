//! Merchant accounts, merchant connector accounts and business profiles.

use hyperswitch_api::{AdditionalProperties, Field};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::AddressDetails;
use super::enums::{
    CardNetwork, Connector, ConnectorStatus, ConnectorType, PaymentMethod, PaymentMethodType,
};

/// Body of `POST /accounts`.
///
/// ## Examples
///
/// ```rust
/// use hyperswitch::models::MerchantAccountCreate;
///
/// let mut account = MerchantAccountCreate::new("merchant_1700000000");
/// account.merchant_name = Some("NewAge Retailer".into());
/// let body = serde_json::to_value(&account).unwrap();
/// assert_eq!(body["merchant_id"], "merchant_1700000000");
/// assert!(body.get("return_url").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantAccountCreate {
    pub merchant_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_details: Option<MerchantDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_details: Option<WebhookDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_merchants_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_merchant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_payment_response_hash: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_response_hash_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to_merchant_with_http_post: Option<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publishable_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locker_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl MerchantAccountCreate {
    pub fn new(merchant_id: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            merchant_name: None,
            merchant_details: None,
            return_url: None,
            webhook_details: None,
            sub_merchants_enabled: None,
            parent_merchant_id: None,
            enable_payment_response_hash: None,
            payment_response_hash_key: None,
            redirect_to_merchant_with_http_post: None,
            metadata: Field::Unset,
            publishable_key: None,
            locker_id: None,
            organization_id: None,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// Body of `POST /accounts/{account_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantAccountUpdate {
    pub merchant_id: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub merchant_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub merchant_details: Field<MerchantDetails>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub return_url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub webhook_details: Field<WebhookDetails>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub enable_payment_response_hash: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payment_response_hash_key: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub redirect_to_merchant_with_http_post: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub default_profile: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl MerchantAccountUpdate {
    pub fn new(merchant_id: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            merchant_name: Field::Unset,
            merchant_details: Field::Unset,
            return_url: Field::Unset,
            webhook_details: Field::Unset,
            enable_payment_response_hash: Field::Unset,
            payment_response_hash_key: Field::Unset,
            redirect_to_merchant_with_http_post: Field::Unset,
            metadata: Field::Unset,
            default_profile: Field::Unset,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantAccountResponse {
    pub merchant_id: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub merchant_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub return_url: Field<String>,
    pub enable_payment_response_hash: bool,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payment_response_hash_key: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub redirect_to_merchant_with_http_post: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub merchant_details: Field<MerchantDetails>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub webhook_details: Field<WebhookDetails>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub sub_merchants_enabled: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub parent_merchant_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub publishable_key: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub locker_id: Field<String>,
    pub organization_id: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub default_profile: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub is_recon_enabled: Field<bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantAccountDeleteResponse {
    pub merchant_id: String,
    pub deleted: bool,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Body of `POST /accounts/{account_id}/kv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleKvRequest {
    pub kv_enabled: bool,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl ToggleKvRequest {
    pub fn new(kv_enabled: bool) -> Self {
        Self {
            kv_enabled,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleKvResponse {
    pub merchant_id: String,
    pub kv_enabled: bool,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MerchantDetails {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub primary_contact_person: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub primary_phone: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub primary_email: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub secondary_contact_person: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub secondary_phone: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub secondary_email: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub website: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub about_business: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub address: Field<AddressDetails>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Where and when the merchant receives outgoing webhooks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookDetails {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub webhook_version: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub webhook_username: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub webhook_password: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub webhook_url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payment_created_enabled: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payment_succeeded_enabled: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payment_failed_enabled: Field<bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Payment method family and the types enabled under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodsEnabled {
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payment_method_types: Field<Vec<RequestPaymentMethodTypes>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl PaymentMethodsEnabled {
    pub fn new(payment_method: PaymentMethod) -> Self {
        Self {
            payment_method,
            payment_method_types: Field::Unset,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestPaymentMethodTypes {
    pub payment_method_type: PaymentMethodType,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_networks: Field<Vec<CardNetwork>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub accepted_currencies: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub accepted_countries: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub minimum_amount: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub maximum_amount: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub recurring_enabled: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub installment_payment_enabled: Field<bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl RequestPaymentMethodTypes {
    pub fn new(payment_method_type: PaymentMethodType) -> Self {
        Self {
            payment_method_type,
            card_networks: Field::Unset,
            accepted_currencies: Field::Unset,
            accepted_countries: Field::Unset,
            minimum_amount: Field::Unset,
            maximum_amount: Field::Unset,
            recurring_enabled: Field::Value(true),
            installment_payment_enabled: Field::Value(true),
            additional_properties: AdditionalProperties::new(),
        }
    }

    /// The server treats a missing flag as enabled.
    pub fn is_recurring_enabled(&self) -> bool {
        self.recurring_enabled.as_value().copied().unwrap_or(true)
    }

    pub fn is_installment_payment_enabled(&self) -> bool {
        self.installment_payment_enabled.as_value().copied().unwrap_or(true)
    }
}

/// Body of `POST /accounts/{account_id}/connectors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantConnectorCreate {
    pub connector_type: ConnectorType,
    pub connector_name: Connector,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    /// Connector credentials, shape depends on the connector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector_account_details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_methods_enabled: Option<Vec<PaymentMethodsEnabled>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector_webhook_details: Option<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ConnectorStatus>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl MerchantConnectorCreate {
    pub fn new(connector_type: ConnectorType, connector_name: Connector) -> Self {
        Self {
            connector_type,
            connector_name,
            connector_label: None,
            profile_id: None,
            connector_account_details: None,
            payment_methods_enabled: None,
            connector_webhook_details: None,
            metadata: Field::Unset,
            test_mode: None,
            disabled: None,
            status: None,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// Body of `POST /accounts/{account_id}/connectors/{merchant_connector_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantConnectorUpdate {
    pub connector_type: ConnectorType,
    pub status: ConnectorStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector_account_details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_methods_enabled: Option<Vec<PaymentMethodsEnabled>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl MerchantConnectorUpdate {
    pub fn new(connector_type: ConnectorType, status: ConnectorStatus) -> Self {
        Self {
            connector_type,
            status,
            connector_label: None,
            connector_account_details: None,
            payment_methods_enabled: None,
            metadata: Field::Unset,
            test_mode: None,
            disabled: None,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantConnectorResponse {
    pub connector_type: ConnectorType,
    pub connector_name: Connector,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub connector_label: Field<String>,
    pub merchant_connector_id: String,
    pub profile_id: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payment_methods_enabled: Field<Vec<PaymentMethodsEnabled>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub test_mode: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub disabled: Field<bool>,
    pub status: ConnectorStatus,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantConnectorDeleteResponse {
    pub merchant_id: String,
    pub merchant_connector_id: String,
    pub deleted: bool,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Body of the business profile create and update calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_payment_response_hash: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_response_hash_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to_merchant_with_http_post: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_details: Option<WebhookDetails>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent_fulfillment_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_fallback_routing: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_connector_agnostic_mit_enabled: Option<bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub merchant_id: String,
    pub profile_id: String,
    pub profile_name: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub return_url: Field<String>,
    pub enable_payment_response_hash: bool,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payment_response_hash_key: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub redirect_to_merchant_with_http_post: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub webhook_details: Field<WebhookDetails>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub routing_algorithm: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub intent_fulfillment_time: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub default_fallback_routing: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub is_connector_agnostic_mit_enabled: Field<bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperswitch_api::JsonModel;
    use serde_json::json;

    #[test]
    fn test_merchant_update_clears_return_url() {
        let mut update = MerchantAccountUpdate::new("merchant_1");
        update.return_url = Field::Null;
        update.merchant_name = Field::Value("Renamed".into());

        assert_eq!(
            update.to_json_value().unwrap(),
            json!({"merchant_id": "merchant_1", "return_url": null, "merchant_name": "Renamed"})
        );
    }

    #[test]
    fn test_connector_create_body() {
        let mut create =
            MerchantConnectorCreate::new(ConnectorType::PaymentProcessor, Connector::Stripe);
        create.connector_account_details =
            Some(json!({"auth_type": "HeaderKey", "api_key": "sk_test"}));
        let mut card = PaymentMethodsEnabled::new(PaymentMethod::Card);
        card.payment_method_types = Field::Value(vec![RequestPaymentMethodTypes::new(
            PaymentMethodType::Credit,
        )]);
        create.payment_methods_enabled = Some(vec![card]);

        let body = create.to_json_value().unwrap();
        assert_eq!(body["connector_type"], "payment_processor");
        assert_eq!(body["connector_name"], "stripe");
        assert_eq!(
            body["payment_methods_enabled"][0]["payment_method_types"][0],
            json!({
                "payment_method_type": "credit",
                "recurring_enabled": true,
                "installment_payment_enabled": true
            })
        );
    }

    #[test]
    fn test_enabled_methods_keep_unknown_keys() {
        let body = json!({
            "payment_method": "card",
            "payment_method_types": [{
                "payment_method_type": "credit",
                "card_networks": ["Visa"],
                "recurring_enabled": true,
                "payment_experience": "redirect_to_url"
            }],
            "priority": 1
        });
        let enabled = PaymentMethodsEnabled::from_json_value(body.clone()).unwrap();

        assert_eq!(enabled.additional_properties["priority"], 1);
        assert_eq!(enabled.to_json_value().unwrap(), body);

        let toggle =
            ToggleKvRequest::from_json_value(json!({"kv_enabled": true, "ttl": 60})).unwrap();
        assert!(toggle.kv_enabled);
        assert_eq!(toggle.to_json_value().unwrap(), json!({"kv_enabled": true, "ttl": 60}));
    }

    #[test]
    fn test_payment_method_types_default_flags() {
        let body = json!({"payment_method_type": "debit", "installment_payment_enabled": false});
        let types = RequestPaymentMethodTypes::from_json_value(body.clone()).unwrap();
        assert!(types.is_recurring_enabled());
        assert!(!types.is_installment_payment_enabled());
        assert_eq!(types.to_json_value().unwrap(), body);
    }

    #[test]
    fn test_profile_response_round_trip() {
        let body = json!({
            "merchant_id": "merchant_1",
            "profile_id": "pro_1",
            "profile_name": "default",
            "enable_payment_response_hash": true,
            "redirect_to_merchant_with_http_post": false,
            "return_url": null,
            "collect_billing_details_from_wallet_connector": false
        });
        let profile = ProfileResponse::from_json_value(body.clone()).unwrap();
        assert!(profile.return_url.is_null());
        assert_eq!(profile.to_json_value().unwrap(), body);
    }
}
