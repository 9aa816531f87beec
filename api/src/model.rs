//! Conversion between typed models and generic JSON objects.

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Undeclared keys retained by a model.
///
/// Every model carries one of these behind `#[serde(flatten)]` so keys the
/// server adds after this client was written survive a read-modify-write
/// round trip.
pub type AdditionalProperties = HashMap<String, Value>;

/// Bidirectional mapping between a model and a JSON object.
///
/// Implemented for every serde model. `to_json_object` writes required fields,
/// set optional fields, explicit nulls and finally the retained unknown keys;
/// `from_json_object` reads declared keys and keeps whatever is left over.
///
/// ## Examples
///
/// ```rust
/// use hyperswitch_api::{AdditionalProperties, JsonModel};
///
/// #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// struct Item {
///     id: String,
///     #[serde(flatten)]
///     additional_properties: AdditionalProperties,
/// }
///
/// let mut object = serde_json::Map::new();
/// object.insert("id".into(), "it_1".into());
/// object.insert("added_later".into(), true.into());
///
/// let item = Item::from_json_object(object.clone()).unwrap();
/// assert_eq!(item.additional_properties.len(), 1);
/// assert_eq!(item.to_json_object().unwrap(), object);
/// ```
pub trait JsonModel: Sized {
    /// Serializes into a JSON object.
    ///
    /// ## Errors
    ///
    /// Returns [`ValidationError::NotAnObject`] if the model serializes to
    /// something other than an object, or a JSON error if serialization fails.
    fn to_json_object(&self) -> Result<Map<String, Value>, ValidationError>;

    /// Deserializes from a JSON object.
    ///
    /// ## Errors
    ///
    /// Returns a JSON error naming the first field that does not fit.
    fn from_json_object(object: Map<String, Value>) -> Result<Self, ValidationError>;

    /// Serializes into any JSON value (lists and unions are not objects).
    fn to_json_value(&self) -> Result<Value, ValidationError>;

    /// Deserializes from any JSON value.
    fn from_json_value(value: Value) -> Result<Self, ValidationError>;
}

impl<T> JsonModel for T
where
    T: Serialize + DeserializeOwned,
{
    fn to_json_object(&self) -> Result<Map<String, Value>, ValidationError> {
        match self.to_json_value()? {
            Value::Object(object) => Ok(object),
            other => Err(ValidationError::NotAnObject {
                found: json_kind(&other),
            }),
        }
    }

    fn from_json_object(object: Map<String, Value>) -> Result<Self, ValidationError> {
        Self::from_json_value(Value::Object(object))
    }

    fn to_json_value(&self) -> Result<Value, ValidationError> {
        serde_json::to_value(self).map_err(ValidationError::JsonParse)
    }

    fn from_json_value(value: Value) -> Result<Self, ValidationError> {
        serde_json::from_value(value).map_err(ValidationError::JsonParse)
    }
}

/// Returns a short name for the JSON type of `value`.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct BankAccount {
        iban: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bank_name: Option<String>,
        #[serde(default, skip_serializing_if = "Field::is_unset")]
        bank_city: Field<String>,
        #[serde(flatten)]
        additional_properties: AdditionalProperties,
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_unset_field_omitted_and_extra_key_kept() {
        let mut account = BankAccount {
            iban: "DE89370400440532013000".to_string(),
            bank_name: None,
            bank_city: Field::Unset,
            additional_properties: AdditionalProperties::new(),
        };
        account
            .additional_properties
            .insert("extra_field".to_string(), json!("x"));

        let out = account.to_json_object().unwrap();
        assert!(!out.contains_key("bank_city"));
        assert!(!out.contains_key("bank_name"));
        assert_eq!(out.get("extra_field"), Some(&json!("x")));
        assert_eq!(out.get("iban"), Some(&json!("DE89370400440532013000")));
    }

    #[test]
    fn test_round_trip_preserves_unknown_keys() {
        let input = object(json!({
            "iban": "GB33BUKB20201555555555",
            "bank_city": null,
            "routing_hint": { "scheme": "sepa" },
        }));
        let account = BankAccount::from_json_object(input.clone()).unwrap();
        assert!(account.bank_city.is_null());
        assert_eq!(account.additional_properties.len(), 1);

        let again = BankAccount::from_json_object(account.to_json_object().unwrap()).unwrap();
        assert_eq!(again, account);
        assert_eq!(account.to_json_object().unwrap(), input);
    }

    #[test]
    fn test_missing_required_field_fails_whole_model() {
        let result = BankAccount::from_json_object(object(json!({ "bank_name": "N26" })));
        assert!(matches!(result, Err(ValidationError::JsonParse(_))));
    }

    #[test]
    fn test_non_object_is_rejected() {
        let result = vec![1, 2, 3].to_json_object();
        assert!(matches!(
            result,
            Err(ValidationError::NotAnObject { found: "array" })
        ));
    }
}
