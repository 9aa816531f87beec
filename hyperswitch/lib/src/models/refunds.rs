use hyperswitch_api::{AdditionalProperties, Field};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{AmountFilter, TimeRange};
use super::enums::{Connector, Currency, RefundStatus, RefundType};

/// Body of `POST /refunds`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundRequest {
    pub payment_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_id: Option<String>,
    /// Defaults to the full captured amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub reason: Field<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_type: Option<RefundType>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub merchant_connector_details: Field<Value>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl RefundRequest {
    pub fn new(payment_id: impl Into<String>) -> Self {
        Self {
            payment_id: payment_id.into(),
            refund_id: None,
            amount: None,
            reason: Field::Unset,
            refund_type: None,
            metadata: Field::Unset,
            merchant_connector_details: Field::Unset,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// Body of `POST /refunds/{refund_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefundUpdateRequest {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub reason: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Value>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundResponse {
    pub refund_id: String,
    pub payment_id: String,
    pub amount: i64,
    pub currency: String,
    pub status: RefundStatus,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub reason: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub error_message: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub error_code: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub unified_code: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub unified_message: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub updated_at: Field<String>,
    pub connector: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub profile_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub merchant_connector_id: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Body of `POST /refunds/list` and `POST /refunds/profile/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefundListRequest {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payment_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub refund_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub profile_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub limit: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub offset: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub time_range: Field<TimeRange>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub amount_filter: Field<AmountFilter>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub connector: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub merchant_connector_id: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub currency: Field<Vec<Currency>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub refund_status: Field<Vec<RefundStatus>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundListResponse {
    pub count: usize,
    pub total_count: i64,
    pub data: Vec<RefundResponse>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Filter values available for the merchant's refunds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefundListMetaData {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub connector: Field<Vec<Connector>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub currency: Field<Vec<Currency>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub refund_status: Field<Vec<RefundStatus>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}
