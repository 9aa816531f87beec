use hyperswitch_api::{AdditionalProperties, Field};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /organization`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationCreateRequest {
    pub organization_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl OrganizationCreateRequest {
    pub fn new(organization_name: impl Into<String>) -> Self {
        Self {
            organization_name: organization_name.into(),
            organization_details: None,
            metadata: None,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// Body of `PUT /organization/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub organization_details: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Value>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationResponse {
    pub organization_id: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub organization_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub organization_details: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Value>,
    pub modified_at: String,
    pub created_at: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperswitch_api::JsonModel;
    use serde_json::json;

    #[test]
    fn test_update_sends_only_changes() {
        let update = OrganizationUpdateRequest {
            organization_name: Some("Acme".into()),
            metadata: Field::Null,
            ..Default::default()
        };
        assert_eq!(
            update.to_json_value().unwrap(),
            json!({"organization_name": "Acme", "metadata": null})
        );
    }

    #[test]
    fn test_response() {
        let body = json!({
            "organization_id": "org_1",
            "organization_name": "Acme",
            "modified_at": "2024-01-01T00:00:00",
            "created_at": "2024-01-01T00:00:00",
            "platform_merchant_id": null
        });
        let org = OrganizationResponse::from_json_value(body.clone()).unwrap();
        assert_eq!(org.organization_name.as_value().map(String::as_str), Some("Acme"));
        assert!(org.metadata.is_unset());
        assert_eq!(org.to_json_value().unwrap(), body);
    }
}
