//! Outcome of status-code dispatch.

use serde::de::DeserializeOwned;

use crate::error::ValidationError;

/// Result of matching a response against an operation's status table.
///
/// ## Examples
///
/// ```rust
/// use hyperswitch_api::Parsed;
///
/// let found: Parsed<u32> = Parsed::Typed(3);
/// let not_found: Parsed<u32> = Parsed::Empty;
///
/// assert_eq!(found.as_typed(), Some(&3));
/// assert!(not_found.is_documented());
/// assert!(!Parsed::<u32>::Undocumented.is_documented());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed<T> {
    /// A documented status with a typed body.
    Typed(T),
    /// A documented status whose body has no schema (a plain `404`, say).
    Empty,
    /// A status the operation does not document.
    Undocumented,
}

impl<T> Parsed<T> {
    /// Returns `true` for [`Typed`](Self::Typed) and [`Empty`](Self::Empty).
    pub fn is_documented(&self) -> bool {
        !matches!(self, Self::Undocumented)
    }

    /// Returns `true` if this carries a typed value.
    pub fn is_typed(&self) -> bool {
        matches!(self, Self::Typed(_))
    }

    /// Returns a reference to the typed value, if any.
    pub fn as_typed(&self) -> Option<&T> {
        match self {
            Self::Typed(v) => Some(v),
            _ => None,
        }
    }

    /// Consumes the outcome, returning the typed value if any.
    pub fn into_typed(self) -> Option<T> {
        match self {
            Self::Typed(v) => Some(v),
            _ => None,
        }
    }

    /// Maps the typed value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Parsed<U> {
        match self {
            Self::Typed(v) => Parsed::Typed(f(v)),
            Self::Empty => Parsed::Empty,
            Self::Undocumented => Parsed::Undocumented,
        }
    }
}

/// Parses a documented JSON body into `T`, wrapped as [`Parsed::Typed`].
///
/// ## Errors
///
/// Returns [`ValidationError::EmptyBody`] for an empty body and
/// [`ValidationError::JsonParse`] when the body does not fit `T`.
pub fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<Parsed<T>, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ValidationError::EmptyBody);
    }
    serde_json::from_slice(body)
        .map(Parsed::Typed)
        .map_err(ValidationError::JsonParse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct KeyRecord {
        key_id: String,
    }

    #[test]
    fn test_parse_json_typed() {
        let parsed = parse_json::<KeyRecord>(br#"{"key_id":"k1"}"#).unwrap();
        assert_eq!(
            parsed,
            Parsed::Typed(KeyRecord {
                key_id: "k1".to_string()
            })
        );
    }

    #[test]
    fn test_parse_json_list_keeps_order() {
        let parsed =
            parse_json::<Vec<KeyRecord>>(br#"[{"key_id":"k1"},{"key_id":"k2"}]"#).unwrap();
        let keys = parsed.into_typed().unwrap();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].key_id, "k1");
        assert_eq!(keys[1].key_id, "k2");
    }

    #[test]
    fn test_parse_json_empty_body() {
        let result = parse_json::<KeyRecord>(b"  ");
        assert!(matches!(result, Err(ValidationError::EmptyBody)));
    }

    #[test]
    fn test_parse_json_shape_mismatch() {
        let result = parse_json::<KeyRecord>(br#"{"key_id": 7}"#);
        assert!(matches!(result, Err(ValidationError::JsonParse(_))));
    }

    #[test]
    fn test_map_keeps_untyped_states() {
        assert_eq!(Parsed::<u8>::Empty.map(u32::from), Parsed::Empty);
        assert_eq!(Parsed::<u8>::Undocumented.map(u32::from), Parsed::Undocumented);
        assert_eq!(Parsed::Typed(2u8).map(u32::from), Parsed::Typed(2u32));
    }
}
