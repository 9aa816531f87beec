use hyperswitch_api::{AdditionalProperties, Field};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::Address;
use super::enums::{CardNetwork, Currency, PaymentMethod, PaymentMethodType};

/// Body of `POST /payment_methods`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodCreate {
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_type: Option<PaymentMethodType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_network: Option<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub billing: Field<Address>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl PaymentMethodCreate {
    pub fn new(payment_method: PaymentMethod) -> Self {
        Self {
            payment_method,
            payment_method_type: None,
            payment_method_issuer: None,
            card: None,
            customer_id: None,
            metadata: Field::Unset,
            card_network: None,
            billing: Field::Unset,
            additional_properties: AdditionalProperties::new(),
        }
    }

    /// Card payment method saved for `customer_id`.
    pub fn card(card: CardDetail, customer_id: impl Into<String>) -> Self {
        Self {
            payment_method_type: Some(PaymentMethodType::Credit),
            card: Some(card),
            customer_id: Some(customer_id.into()),
            ..Self::new(PaymentMethod::Card)
        }
    }
}

/// Body of `POST /payment_methods/{method_id}/update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardDetailUpdate>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub client_secret: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDetail {
    pub card_number: String,
    pub card_exp_month: String,
    pub card_exp_year: String,
    pub card_holder_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_issuing_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_network: Option<CardNetwork>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl CardDetail {
    pub fn new(
        card_number: impl Into<String>,
        card_exp_month: impl Into<String>,
        card_exp_year: impl Into<String>,
        card_holder_name: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            card_exp_month: card_exp_month.into(),
            card_exp_year: card_exp_year.into(),
            card_holder_name: card_holder_name.into(),
            nick_name: None,
            card_issuing_country: None,
            card_network: None,
            card_issuer: None,
            card_type: None,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// Card fields that may change on a saved method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardDetailUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_exp_month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_exp_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_holder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Stored card summary as the vault returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardDetailFromLocker {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub scheme: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub issuer_country: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub last4_digits: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub expiry_month: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub expiry_year: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_token: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_holder_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_fingerprint: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub nick_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_network: Field<CardNetwork>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_isin: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_issuer: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub saved_to_locker: Field<bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodResponse {
    pub merchant_id: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub customer_id: Field<String>,
    pub payment_method_id: String,
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payment_method_type: Field<PaymentMethodType>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card: Field<CardDetailFromLocker>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub recurring_enabled: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub installment_payment_enabled: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payment_experience: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub last_used_at: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub client_secret: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodDeleteResponse {
    pub payment_method_id: String,
    pub deleted: bool,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Payment methods the merchant can accept for a given context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodListResponse {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub redirect_url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub currency: Field<Currency>,
    pub payment_methods: Vec<ResponsePaymentMethodsEnabled>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub mandate_payment: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub merchant_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub show_surcharge_breakup_screen: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payment_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub request_external_three_ds_authentication: Field<bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsePaymentMethodsEnabled {
    pub payment_method: PaymentMethod,
    pub payment_method_types: Vec<ResponsePaymentMethodTypes>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsePaymentMethodTypes {
    pub payment_method_type: PaymentMethodType,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_networks: Field<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub bank_names: Field<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub required_fields: Field<Value>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperswitch_api::JsonModel;
    use serde_json::json;

    #[test]
    fn test_card_create_body() {
        let create = PaymentMethodCreate::card(
            CardDetail::new("4242424242424242", "11", "25", "John Doe"),
            "cus_1",
        );
        assert_eq!(
            create.to_json_value().unwrap(),
            json!({
                "payment_method": "card",
                "payment_method_type": "credit",
                "customer_id": "cus_1",
                "card": {
                    "card_number": "4242424242424242",
                    "card_exp_month": "11",
                    "card_exp_year": "25",
                    "card_holder_name": "John Doe"
                }
            })
        );
    }

    #[test]
    fn test_card_detail_keeps_unknown_keys() {
        let body = json!({
            "card_number": "4242424242424242",
            "card_exp_month": "11",
            "card_exp_year": "25",
            "card_holder_name": "John Doe",
            "card_network": "Visa",
            "card_cvc_present": true
        });
        let card = CardDetail::from_json_value(body.clone()).unwrap();

        assert_eq!(card.card_network, Some(CardNetwork::Visa));
        assert_eq!(card.additional_properties["card_cvc_present"], true);
        assert_eq!(card.to_json_value().unwrap(), body);
    }

    #[test]
    fn test_list_response_keeps_unknown_keys() {
        let list = PaymentMethodListResponse::from_json_value(json!({
            "currency": "USD",
            "payment_methods": [{
                "payment_method": "card",
                "payment_method_types": [{"payment_method_type": "debit", "card_networks": null}]
            }],
            "is_tax_calculation_enabled": false
        }))
        .unwrap();

        let types = &list.payment_methods[0].payment_method_types;
        assert_eq!(types[0].payment_method_type, PaymentMethodType::Debit);
        assert!(types[0].card_networks.is_null());
        assert!(list.additional_properties.contains_key("is_tax_calculation_enabled"));
    }
}
