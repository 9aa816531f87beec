//! Webhook delivery log and outgoing webhook payloads.

use hyperswitch_api::{AdditionalProperties, Field};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::disputes::DisputeResponse;
use super::enums::{EventClass, EventType, WebhookDeliveryAttempt};
use super::mandates::MandateResponse;
use super::payments::PaymentsResponse;
use super::payouts::PayoutCreateResponse;
use super::refunds::RefundResponse;

/// Body of the event list calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventListConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_classes: Option<Vec<EventClass>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_types: Option<Vec<EventType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_delivered: Option<bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventListItemResponse {
    pub event_id: String,
    pub merchant_id: String,
    pub profile_id: String,
    pub object_id: String,
    pub event_type: EventType,
    pub event_class: EventClass,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub is_delivery_successful: Field<bool>,
    pub initial_attempt_id: String,
    pub created: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalEventsResponse {
    pub events: Vec<EventListItemResponse>,
    pub total_count: i64,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// One delivery attempt of an event, with what was sent and received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRetrieveResponse {
    pub event_id: String,
    pub merchant_id: String,
    pub profile_id: String,
    pub object_id: String,
    pub event_type: EventType,
    pub event_class: EventClass,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub is_delivery_successful: Field<bool>,
    pub initial_attempt_id: String,
    pub created: String,
    pub request: OutgoingWebhookRequestContent,
    pub response: OutgoingWebhookResponseContent,
    pub delivery_attempt: WebhookDeliveryAttempt,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutgoingWebhookRequestContent {
    pub body: String,
    /// Header name and value pairs, in the order they were sent.
    pub headers: Vec<(String, String)>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutgoingWebhookResponseContent {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub body: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub headers: Field<Vec<(String, String)>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub status_code: Field<u16>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub error_message: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Webhook payload Hyperswitch posts to the merchant.
///
/// ## Examples
///
/// ```rust
/// use hyperswitch::models::{EventType, OutgoingWebhook, OutgoingWebhookContent};
///
/// let body = serde_json::json!({
///     "merchant_id": "merchant_1",
///     "event_id": "evt_1",
///     "event_type": "refund_succeeded",
///     "content": {"type": "refund_details", "object": {
///         "refund_id": "ref_1", "payment_id": "pay_1", "amount": 100,
///         "currency": "USD", "status": "succeeded", "connector": "stripe"
///     }},
///     "timestamp": "2024-01-01T00:00:00.000Z"
/// });
/// let webhook: OutgoingWebhook = serde_json::from_value(body).unwrap();
/// assert_eq!(webhook.event_type, EventType::RefundSucceeded);
/// assert!(matches!(webhook.content, OutgoingWebhookContent::RefundDetails(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutgoingWebhook {
    pub merchant_id: String,
    pub event_id: String,
    pub event_type: EventType,
    pub content: OutgoingWebhookContent,
    pub timestamp: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Object carried by a webhook, discriminated by `type`.
///
/// Content types added after this client was built stay in
/// [`Unknown`](Self::Unknown) as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "object", rename_all = "snake_case")]
pub enum OutgoingWebhookContent {
    PaymentDetails(Box<PaymentsResponse>),
    RefundDetails(Box<RefundResponse>),
    DisputeDetails(Box<DisputeResponse>),
    MandateDetails(Box<MandateResponse>),
    PayoutDetails(Box<PayoutCreateResponse>),
    #[serde(untagged)]
    Unknown(Value),
}

impl OutgoingWebhookContent {
    /// Resource family of the embedded object; `None` when it is unknown.
    pub fn class(&self) -> Option<EventClass> {
        match self {
            Self::PaymentDetails(_) => Some(EventClass::Payments),
            Self::RefundDetails(_) => Some(EventClass::Refunds),
            Self::DisputeDetails(_) => Some(EventClass::Disputes),
            Self::MandateDetails(_) => Some(EventClass::Mandates),
            Self::PayoutDetails(_) => Some(EventClass::Payouts),
            Self::Unknown(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperswitch_api::JsonModel;
    use serde_json::json;

    #[test]
    fn test_delivery_attempt() {
        let attempt = EventRetrieveResponse::from_json_value(json!({
            "event_id": "evt_1",
            "merchant_id": "merchant_1",
            "profile_id": "pro_1",
            "object_id": "pay_1",
            "event_type": "payment_succeeded",
            "event_class": "payments",
            "is_delivery_successful": false,
            "initial_attempt_id": "evt_1",
            "created": "2024-01-01T00:00:00.000Z",
            "request": {"body": "{}", "headers": [["content-type", "application/json"]]},
            "response": {"status_code": 500, "body": null},
            "delivery_attempt": "automatic_retry"
        }))
        .unwrap();

        assert_eq!(attempt.delivery_attempt, WebhookDeliveryAttempt::AutomaticRetry);
        assert_eq!(attempt.request.headers[0].0, "content-type");
        assert_eq!(attempt.response.status_code, Field::Value(500));
        assert!(attempt.response.body.is_null());
    }

    #[test]
    fn test_webhook_content_matches_event_class() {
        let content: OutgoingWebhookContent = serde_json::from_value(json!({
            "type": "mandate_details",
            "object": {
                "mandate_id": "man_1",
                "status": "active",
                "payment_method_id": "pm_1",
                "payment_method": "card"
            }
        }))
        .unwrap();
        assert_eq!(content.class(), Some(EventType::MandateActive.class()));
    }

    #[test]
    fn test_new_webhook_type_is_kept_verbatim() {
        let body = json!({
            "merchant_id": "merchant_1",
            "event_id": "evt_9",
            "event_type": "payment_succeeded",
            "content": {"type": "subscription_details", "object": {"subscription_id": "sub_1"}},
            "timestamp": "2024-01-01T00:00:00.000Z",
            "delivery_attempt": 2
        });
        let webhook = OutgoingWebhook::from_json_value(body.clone()).unwrap();

        assert_eq!(
            webhook.content,
            OutgoingWebhookContent::Unknown(body["content"].clone())
        );
        assert_eq!(webhook.content.class(), None);
        assert_eq!(webhook.additional_properties["delivery_attempt"], 2);
        assert_eq!(webhook.to_json_value().unwrap(), body);
    }

    #[test]
    fn test_event_list_keeps_unknown_keys() {
        let body = json!({
            "events": [{
                "event_id": "evt_1",
                "merchant_id": "merchant_1",
                "profile_id": "pro_1",
                "object_id": "ref_1",
                "event_type": "refund_succeeded",
                "event_class": "refunds",
                "is_delivery_successful": null,
                "initial_attempt_id": "evt_1",
                "created": "2024-01-01T00:00:00.000Z"
            }],
            "total_count": 1,
            "next_cursor": "c_2"
        });
        let total = TotalEventsResponse::from_json_value(body.clone()).unwrap();

        assert_eq!(total.additional_properties["next_cursor"], "c_2");
        assert_eq!(total.to_json_value().unwrap(), body);
    }
}
