use hyperswitch_api::{AdditionalProperties, Field};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{Connector, RoutingAlgorithmKind, TransactionType};

/// A connector a routing rule can pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutableConnectorChoice {
    pub connector: Connector,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_connector_id: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl From<Connector> for RoutableConnectorChoice {
    fn from(connector: Connector) -> Self {
        Self {
            connector,
            merchant_connector_id: None,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorVolumeSplit {
    pub connector: RoutableConnectorChoice,
    /// Share of traffic in percent.
    pub split: u8,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Routing algorithm body, discriminated by `type` with the payload under
/// `data`.
///
/// A `type` this client does not know, or a payload that does not fit its
/// variant, is kept verbatim in [`Unknown`](Self::Unknown).
///
/// ## Examples
///
/// ```rust
/// use hyperswitch::models::{Connector, StaticRoutingAlgorithm};
///
/// let algorithm = StaticRoutingAlgorithm::Priority(vec![
///     Connector::Stripe.into(),
///     Connector::Adyen.into(),
/// ]);
/// let value = serde_json::to_value(&algorithm).unwrap();
/// assert_eq!(value["type"], "priority");
/// assert_eq!(value["data"][1]["connector"], "adyen");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum StaticRoutingAlgorithm {
    Single(Box<RoutableConnectorChoice>),
    Priority(Vec<RoutableConnectorChoice>),
    VolumeSplit(Vec<ConnectorVolumeSplit>),
    /// Rule program for the euclid engine, kept as raw JSON.
    Advanced(Value),
    ThreeDsDecisionRule(Value),
    #[serde(untagged)]
    Unknown(Value),
}

impl StaticRoutingAlgorithm {
    /// `None` for an algorithm kept as [`Unknown`](Self::Unknown).
    pub fn kind(&self) -> Option<RoutingAlgorithmKind> {
        match self {
            Self::Single(_) => Some(RoutingAlgorithmKind::Single),
            Self::Priority(_) => Some(RoutingAlgorithmKind::Priority),
            Self::VolumeSplit(_) => Some(RoutingAlgorithmKind::VolumeSplit),
            Self::Advanced(_) => Some(RoutingAlgorithmKind::Advanced),
            Self::ThreeDsDecisionRule(_) => Some(RoutingAlgorithmKind::ThreeDsDecisionRule),
            Self::Unknown(_) => None,
        }
    }
}

/// Body of `POST /routing` and `POST /routing/deactivate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingConfigRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<StaticRoutingAlgorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl RoutingConfigRequest {
    pub fn new(
        name: impl Into<String>,
        profile_id: impl Into<String>,
        algorithm: StaticRoutingAlgorithm,
    ) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
            algorithm: Some(algorithm),
            profile_id: Some(profile_id.into()),
            transaction_type: None,
            additional_properties: AdditionalProperties::new(),
        }
    }

    /// Deactivation payload: only the profile is sent.
    pub fn for_profile(profile_id: impl Into<String>) -> Self {
        Self {
            name: None,
            description: None,
            algorithm: None,
            profile_id: Some(profile_id.into()),
            transaction_type: None,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// Summary of one stored routing algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingDictionaryRecord {
    pub id: String,
    pub profile_id: String,
    pub name: String,
    pub kind: RoutingAlgorithmKind,
    pub description: String,
    /// Unix seconds.
    pub created_at: i64,
    pub modified_at: i64,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub algorithm_for: Field<TransactionType>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub decision_engine_routing_id: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Every routing algorithm the merchant has, plus the active one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingDictionary {
    pub merchant_id: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub active_id: Field<String>,
    pub records: Vec<RoutingDictionaryRecord>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Response of `GET /routing`.
///
/// Merchant-scoped keys return a [`RoutingDictionary`]; profile-scoped keys
/// return a bare list of records. The object shape is tried first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoutingKind {
    Config(RoutingDictionary),
    RoutingAlgorithm(Vec<RoutingDictionaryRecord>),
    Unknown(Value),
}

impl RoutingKind {
    /// Records regardless of which shape the server chose.
    pub fn records(&self) -> &[RoutingDictionaryRecord] {
        match self {
            Self::Config(dictionary) => &dictionary.records,
            Self::RoutingAlgorithm(records) => records,
            Self::Unknown(_) => &[],
        }
    }
}

/// A routing algorithm in full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantRoutingAlgorithm {
    pub id: String,
    pub profile_id: String,
    pub name: String,
    pub description: String,
    pub algorithm: StaticRoutingAlgorithm,
    pub created_at: i64,
    pub modified_at: i64,
    pub algorithm_for: TransactionType,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingRetrieveResponse {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub algorithm: Field<MerchantRoutingAlgorithm>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Response of `GET /routing/active`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkedRoutingConfigRetrieveResponse {
    MerchantBased(RoutingRetrieveResponse),
    ProfileBased(Vec<RoutingDictionaryRecord>),
    Unknown(Value),
}

/// Fallback connector order for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDefaultRoutingConfig {
    pub profile_id: String,
    pub connectors: Vec<RoutableConnectorChoice>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}
