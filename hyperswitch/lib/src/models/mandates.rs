use hyperswitch_api::{AdditionalProperties, Field};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

use super::enums::{CardNetwork, Currency, MandateStatus};

/// Mandate setup attached to a payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MandateData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_acceptance: Option<CustomerAcceptance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_type: Option<MandateType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_mandate_id: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Single- or multi-use mandate, keyed by kind.
///
/// `{"single_use": {...}}` requires amount data; `{"multi_use": null}` is a
/// valid open-ended multi-use mandate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MandateType {
    SingleUse(MandateAmountData),
    MultiUse(Option<MandateAmountData>),
    #[serde(untagged)]
    Unknown(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MandateAmountData {
    pub amount: i64,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl MandateAmountData {
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self {
            amount,
            currency,
            start_date: None,
            end_date: None,
            metadata: None,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AcceptanceType {
    Online,
    Offline,
}

/// How and when the customer agreed to future charges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerAcceptance {
    pub acceptance_type: AcceptanceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub online: Option<OnlineMandate>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl CustomerAcceptance {
    pub fn offline() -> Self {
        Self {
            acceptance_type: AcceptanceType::Offline,
            accepted_at: None,
            online: None,
            additional_properties: AdditionalProperties::new(),
        }
    }

    pub fn online(ip_address: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            acceptance_type: AcceptanceType::Online,
            accepted_at: None,
            online: Some(OnlineMandate {
                ip_address: Field::Value(ip_address.into()),
                user_agent: user_agent.into(),
                additional_properties: AdditionalProperties::new(),
            }),
            additional_properties: AdditionalProperties::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnlineMandate {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ip_address: Field<String>,
    pub user_agent: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MandateResponse {
    pub mandate_id: String,
    pub status: MandateStatus,
    pub payment_method_id: String,
    pub payment_method: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payment_method_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card: Field<MandateCardDetails>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub customer_acceptance: Field<CustomerAcceptance>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MandateCardDetails {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub last4_digits: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_exp_month: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_exp_year: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_holder_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_token: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub scheme: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub issuer_country: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_fingerprint: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_isin: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_issuer: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_network: Field<CardNetwork>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub card_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub nick_name: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MandateRevokedResponse {
    pub mandate_id: String,
    pub status: MandateStatus,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub error_code: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub error_message: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mandate_type_keyed_by_kind() {
        let single = MandateType::SingleUse(MandateAmountData::new(1000, Currency::Usd));
        assert_eq!(
            serde_json::to_value(&single).unwrap(),
            json!({"single_use": {"amount": 1000, "currency": "USD"}})
        );

        let multi: MandateType = serde_json::from_value(json!({"multi_use": null})).unwrap();
        assert_eq!(multi, MandateType::MultiUse(None));
    }

    #[test]
    fn test_online_acceptance() {
        let acceptance = CustomerAcceptance::online("127.0.0.1", "curl/8");
        let value = serde_json::to_value(&acceptance).unwrap();
        assert_eq!(value["acceptance_type"], "online");
        assert_eq!(value["online"]["ip_address"], "127.0.0.1");
    }

    #[test]
    fn test_mandate_data_keeps_unknown_keys() {
        let body = json!({
            "customer_acceptance": {
                "acceptance_type": "online",
                "accepted_at": "2024-01-01T00:00:00Z",
                "online": {"ip_address": null, "user_agent": "curl/8", "accept_language": "de"},
                "channel": "web"
            },
            "mandate_type": {
                "multi_use": {"amount": 500, "currency": "EUR", "frequency": "monthly"}
            },
            "update_mandate_id": "man_0",
            "reference": "ref_7"
        });
        let data: MandateData = serde_json::from_value(body.clone()).unwrap();

        let acceptance = data.customer_acceptance.as_ref().unwrap();
        assert_eq!(acceptance.additional_properties["channel"], "web");
        assert!(acceptance.online.as_ref().unwrap().ip_address.is_null());
        assert_eq!(serde_json::to_value(&data).unwrap(), body);
    }

    #[test]
    fn test_revoked_response() {
        let revoked: MandateRevokedResponse = serde_json::from_value(json!({
            "mandate_id": "man_1",
            "status": "revoked",
            "error_code": null
        }))
        .unwrap();
        assert_eq!(revoked.status, MandateStatus::Revoked);
        assert!(revoked.error_code.is_null());
        assert!(revoked.error_message.is_unset());
    }
}
