use hyperswitch_api::{AdditionalProperties, Field};
use serde::{Deserialize, Serialize};

/// When an API key stops working.
///
/// On the wire this is either the string `"never"` or an ISO 8601
/// timestamp; the literal is tried first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiKeyExpiration {
    Never(NeverExpires),
    DateTime(String),
}

impl ApiKeyExpiration {
    pub fn never() -> Self {
        Self::Never(NeverExpires::Never)
    }

    pub fn at(timestamp: impl Into<String>) -> Self {
        Self::DateTime(timestamp.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeverExpires {
    Never,
}

/// Body of `POST /api_keys/{merchant_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateApiKeyRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub expiration: ApiKeyExpiration,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl CreateApiKeyRequest {
    pub fn new(name: impl Into<String>, expiration: ApiKeyExpiration) -> Self {
        Self {
            name: name.into(),
            description: None,
            expiration,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// Response to key creation; the only time the plaintext key is returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateApiKeyResponse {
    pub key_id: String,
    pub merchant_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    pub api_key: String,
    pub created: String,
    pub expiration: ApiKeyExpiration,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrieveApiKeyResponse {
    pub key_id: String,
    pub merchant_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    /// First few characters of the key, for display.
    pub prefix: String,
    pub created: String,
    pub expiration: ApiKeyExpiration,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Body of `POST /api_keys/{merchant_id}/{key_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateApiKeyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<ApiKeyExpiration>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevokeApiKeyResponse {
    pub merchant_id: String,
    pub key_id: String,
    pub revoked: bool,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}
