//! Global status mapping rules: how connector error codes map to unified
//! codes and retry decisions.

use hyperswitch_api::{AdditionalProperties, Field};
use serde::{Deserialize, Serialize};

use super::enums::{Connector, GsmDecision};

/// Composite key identifying one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GsmKey {
    pub connector: Connector,
    pub flow: String,
    pub sub_flow: String,
    pub code: String,
    pub message: String,
}

impl GsmKey {
    pub fn new(
        connector: Connector,
        flow: impl Into<String>,
        sub_flow: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            connector,
            flow: flow.into(),
            sub_flow: sub_flow.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Body of `POST /gsm`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GsmCreateRequest {
    #[serde(flatten)]
    pub key: GsmKey,
    pub status: String,
    pub decision: GsmDecision,
    pub step_up_possible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unified_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unified_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_pan_possible: Option<bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl GsmCreateRequest {
    pub fn new(key: GsmKey, status: impl Into<String>, decision: GsmDecision) -> Self {
        Self {
            key,
            status: status.into(),
            decision,
            step_up_possible: false,
            router_error: None,
            unified_code: None,
            unified_message: None,
            error_category: None,
            clear_pan_possible: None,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// Body of `POST /gsm/update`; the key selects the rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GsmUpdateRequest {
    #[serde(flatten)]
    pub key: GsmKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<GsmDecision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_up_possible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unified_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unified_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_category: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl GsmUpdateRequest {
    pub fn new(key: GsmKey) -> Self {
        Self {
            key,
            status: None,
            decision: None,
            step_up_possible: None,
            router_error: None,
            unified_code: None,
            unified_message: None,
            error_category: None,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GsmResponse {
    pub connector: String,
    pub flow: String,
    pub sub_flow: String,
    pub code: String,
    pub message: String,
    pub status: String,
    pub decision: String,
    pub step_up_possible: bool,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub router_error: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub unified_code: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub unified_message: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub error_category: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GsmDeleteResponse {
    pub gsm_rule_delete: bool,
    pub connector: String,
    pub flow: String,
    pub sub_flow: String,
    pub code: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key() -> GsmKey {
        GsmKey::new(
            Connector::Stripe,
            "Authorize",
            "sub_flow",
            "card_declined",
            "Your card was declined",
        )
    }

    #[test]
    fn test_key_is_flattened() {
        let create = GsmCreateRequest::new(key(), "Failure", GsmDecision::Retry);
        assert_eq!(
            serde_json::to_value(&create).unwrap(),
            json!({
                "connector": "stripe",
                "flow": "Authorize",
                "sub_flow": "sub_flow",
                "code": "card_declined",
                "message": "Your card was declined",
                "status": "Failure",
                "decision": "retry",
                "step_up_possible": false
            })
        );
    }

    #[test]
    fn test_unknown_keys_land_beside_the_key() {
        let body = json!({
            "connector": "adyen",
            "flow": "Authorize",
            "sub_flow": "sub_flow",
            "code": "refused",
            "message": "Refused",
            "status": "Failure",
            "decision": "requeue",
            "step_up_possible": true,
            "feature": "retry"
        });
        let create: GsmCreateRequest = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(create.key.connector, Connector::Adyen);
        assert_eq!(create.additional_properties.len(), 1);
        assert_eq!(serde_json::to_value(&create).unwrap(), body);

        let update_body = json!({
            "connector": "adyen",
            "flow": "Authorize",
            "sub_flow": "sub_flow",
            "code": "refused",
            "message": "Refused",
            "decision": "do_default",
            "feature_data": {"retries": 2}
        });
        let update: GsmUpdateRequest = serde_json::from_value(update_body.clone()).unwrap();
        assert_eq!(update.additional_properties["feature_data"]["retries"], 2);
        assert_eq!(serde_json::to_value(&update).unwrap(), update_body);
    }

    #[test]
    fn test_key_alone_selects_rule() {
        let value = serde_json::to_value(key()).unwrap();
        assert_eq!(value.as_object().map(|o| o.len()), Some(5));
    }
}
