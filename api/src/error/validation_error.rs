//! Payload parsing and model conversion errors.

use thiserror::Error;

/// Errors while converting between JSON payloads and models.
///
/// A single field that does not fit its declared type fails the whole model;
/// there is no partial recovery.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// JSON parsing or shape mismatch.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A model was expected to serialize to a JSON object.
    #[error("Expected a JSON object, found {found}")]
    NotAnObject {
        /// The JSON type that was produced instead.
        found: &'static str,
    },

    /// Empty response body where a typed payload was documented.
    #[error("Empty response body")]
    EmptyBody,
}

impl ValidationError {
    /// Returns `true` if this is a parsing error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::JsonParse(_) | Self::EmptyBody)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_parse_is_parse_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err = ValidationError::JsonParse(json_err);
        assert!(err.is_parse_error());
        assert!(err.to_string().starts_with("JSON parse error"));
    }

    #[test]
    fn test_not_an_object_display() {
        let err = ValidationError::NotAnObject { found: "array" };
        assert_eq!(err.to_string(), "Expected a JSON object, found array");
        assert!(!err.is_parse_error());
    }
}
