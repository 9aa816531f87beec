use hyperswitch_api::AdditionalProperties;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::BlocklistDataKind;

/// Entry to add to or remove from the blocklist.
///
/// Entry kinds this client does not know are kept whole in
/// [`Unknown`](Self::Unknown).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum BlocklistRequest {
    CardBin(String),
    Fingerprint(String),
    ExtendedCardBin(String),
    #[serde(untagged)]
    Unknown(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlocklistResponse {
    pub fingerprint_id: String,
    pub data_kind: BlocklistDataKind,
    pub created_at: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleBlocklistResponse {
    pub blocklist_guard_status: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}
