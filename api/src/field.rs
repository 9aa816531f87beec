//! Tri-state values for nullable schema fields and query parameters.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value that may be omitted, explicitly `null`, or present.
///
/// Nullable API fields need three states: a field the caller never set must
/// not be sent at all, while a field set to `null` must be sent as `null`
/// (for example to clear a stored value on update). `Option<T>` can only
/// express two of those.
///
/// Model fields of this type are declared as
///
/// ```rust,ignore
/// #[serde(default, skip_serializing_if = "Field::is_unset")]
/// pub description: Field<String>,
/// ```
///
/// so an absent key deserializes to [`Field::Unset`] and `Unset` is never
/// written back out.
///
/// ## Examples
///
/// ```rust
/// use hyperswitch_api::Field;
///
/// let unset: Field<u32> = Field::Unset;
/// let null: Field<u32> = Field::Null;
/// let value = Field::Value(7);
///
/// assert!(unset.is_unset());
/// assert!(null.is_null());
/// assert_eq!(value.as_value(), Some(&7));
/// assert_eq!(null.into_option(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field<T> {
    /// Not provided; omitted from payloads and query strings.
    Unset,
    /// Explicitly `null`.
    Null,
    /// A concrete value.
    Value(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> Field<T> {
    /// Creates a field from an option, mapping `None` to [`Field::Null`].
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Value(v),
            None => Self::Null,
        }
    }

    /// Returns `true` if the field was never set.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns `true` if the field is explicitly `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the field carries a value.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns a reference to the value, if present.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Converts `&Field<T>` into `Field<&T>`.
    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Self::Unset => Field::Unset,
            Self::Null => Field::Null,
            Self::Value(v) => Field::Value(v),
        }
    }

    /// Consumes the field, returning the value if present.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Maps the contained value, preserving `Unset` and `Null`.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Self::Unset => Field::Unset,
            Self::Null => Field::Null,
            Self::Value(v) => Field::Value(f(v)),
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // `Unset` only gets here when a field lacks `skip_serializing_if`.
            Self::Unset | Self::Null => serializer.serialize_none(),
            Self::Value(v) => serializer.serialize_some(v),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from_option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Holder {
        #[serde(default, skip_serializing_if = "Field::is_unset")]
        bank_city: Field<String>,
    }

    #[test]
    fn test_absent_key_is_unset() {
        let holder: Holder = serde_json::from_value(json!({})).unwrap();
        assert!(holder.bank_city.is_unset());
    }

    #[test]
    fn test_null_is_null() {
        let holder: Holder = serde_json::from_value(json!({ "bank_city": null })).unwrap();
        assert!(holder.bank_city.is_null());
    }

    #[test]
    fn test_value_is_value() {
        let holder: Holder = serde_json::from_value(json!({ "bank_city": "Berlin" })).unwrap();
        assert_eq!(holder.bank_city, Field::Value("Berlin".to_string()));
    }

    #[test]
    fn test_unset_is_omitted_null_is_written() {
        let unset = serde_json::to_value(Holder {
            bank_city: Field::Unset,
        })
        .unwrap();
        assert_eq!(unset, json!({}));

        let null = serde_json::to_value(Holder {
            bank_city: Field::Null,
        })
        .unwrap();
        assert_eq!(null, json!({ "bank_city": null }));
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let result: Result<Holder, _> = serde_json::from_value(json!({ "bank_city": 12 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_map_preserves_state() {
        assert_eq!(Field::<u8>::Unset.map(|v| v + 1), Field::Unset);
        assert_eq!(Field::<u8>::Null.map(|v| v + 1), Field::Null);
        assert_eq!(Field::Value(1u8).map(|v| v + 1), Field::Value(2));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Field::from_option(Some(3)), Field::Value(3));
        assert_eq!(Field::<i32>::from_option(None), Field::Null);
    }
}
