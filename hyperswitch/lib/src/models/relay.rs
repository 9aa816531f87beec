use hyperswitch_api::{AdditionalProperties, Field};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{Currency, RelayStatus, RelayType};

/// Body of `POST /relay`: forwards an action on a resource the connector
/// created outside Hyperswitch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayRequest {
    pub connector_resource_id: String,
    pub connector_id: String,
    #[serde(rename = "type")]
    pub relay_type: RelayType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<RelayData>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl RelayRequest {
    /// Relayed refund against a connector payment id.
    pub fn refund(
        connector_resource_id: impl Into<String>,
        connector_id: impl Into<String>,
        refund: RelayRefundRequestData,
    ) -> Self {
        Self {
            connector_resource_id: connector_resource_id.into(),
            connector_id: connector_id.into(),
            relay_type: RelayType::Refund,
            data: Some(RelayData::Refund(refund)),
            additional_properties: AdditionalProperties::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelayData {
    Refund(RelayRefundRequestData),
    #[serde(untagged)]
    Unknown(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayRefundRequestData {
    pub amount: i64,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl RelayRefundRequestData {
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self {
            amount,
            currency,
            reason: None,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub id: String,
    pub status: RelayStatus,
    pub connector_resource_id: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub error: Field<RelayError>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub connector_reference_id: Field<String>,
    pub connector_id: String,
    pub profile_id: String,
    #[serde(rename = "type")]
    pub relay_type: RelayType,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub data: Field<RelayData>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayError {
    pub code: String,
    pub message: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}
