use hyperswitch_api::{AdditionalProperties, Field};
use serde::{Deserialize, Serialize};

use super::enums::{DisputeStage, DisputeStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisputeResponse {
    pub dispute_id: String,
    pub payment_id: String,
    pub attempt_id: String,
    /// Disputed amount as the connector reported it.
    pub amount: String,
    pub currency: String,
    pub dispute_stage: DisputeStage,
    pub dispute_status: DisputeStatus,
    pub connector: String,
    pub connector_status: String,
    pub connector_dispute_id: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub connector_reason: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub connector_reason_code: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub challenge_required_by: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub connector_created_at: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub connector_updated_at: Field<String>,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub profile_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub merchant_connector_id: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Dispute summary embedded in a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisputeResponsePaymentsRetrieve {
    pub dispute_id: String,
    pub dispute_stage: DisputeStage,
    pub dispute_status: DisputeStatus,
    pub connector_status: String,
    pub connector_dispute_id: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub connector_reason: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub connector_reason_code: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub challenge_required_by: Field<String>,
    pub created_at: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Body of `POST /disputes/evidence`.
///
/// Each evidence slot takes the id of a file uploaded beforehand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitEvidenceRequest {
    pub dispute_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_activity_log: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_policy_disclosure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_rebuttal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_communication: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_purchase_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_documentation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_documentation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_showing_distinct_transactions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uncategorized_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uncategorized_text: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl SubmitEvidenceRequest {
    pub fn new(dispute_id: impl Into<String>) -> Self {
        Self {
            dispute_id: dispute_id.into(),
            access_activity_log: None,
            billing_address: None,
            cancellation_policy: None,
            cancellation_policy_disclosure: None,
            cancellation_rebuttal: None,
            customer_communication: None,
            customer_email_address: None,
            customer_name: None,
            customer_purchase_ip: None,
            customer_signature: None,
            product_description: None,
            receipt: None,
            refund_policy: None,
            service_documentation: None,
            shipping_documentation: None,
            shipping_tracking_number: None,
            invoice_showing_distinct_transactions: None,
            uncategorized_file: None,
            uncategorized_text: None,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperswitch_api::JsonModel;
    use serde_json::json;

    #[test]
    fn test_dispute_response() {
        let body = json!({
            "dispute_id": "dp_1",
            "payment_id": "pay_1",
            "attempt_id": "pay_1_1",
            "amount": "6540",
            "currency": "USD",
            "dispute_stage": "pre_arbitration",
            "dispute_status": "dispute_challenged",
            "connector": "checkout",
            "connector_status": "evidence_under_review",
            "connector_dispute_id": "dsp_abc",
            "created_at": "2023-01-01T00:00:00Z",
            "evidence": {"receipt": "file_1"}
        });
        let dispute = DisputeResponse::from_json_value(body.clone()).unwrap();

        assert_eq!(dispute.dispute_stage, DisputeStage::PreArbitration);
        assert!(dispute.connector_reason.is_unset());
        assert!(dispute.additional_properties.contains_key("evidence"));
        assert_eq!(dispute.to_json_value().unwrap(), body);
    }

    #[test]
    fn test_evidence_omits_empty_slots() {
        let mut evidence = SubmitEvidenceRequest::new("dp_1");
        evidence.receipt = Some("file_1".into());

        assert_eq!(
            evidence.to_json_value().unwrap(),
            json!({"dispute_id": "dp_1", "receipt": "file_1"})
        );
    }
}
