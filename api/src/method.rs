//! HTTP methods used by the payments API.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// HTTP methods an operation can be routed on.
///
/// Any verb outside these five is refused by the server, so there is no
/// variant for it.
///
/// ## Examples
///
/// ```rust
/// use hyperswitch_api::RestMethod;
///
/// assert_eq!(RestMethod::Delete.as_str(), "DELETE");
///
/// let parsed: RestMethod = "POST".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Post);
/// assert_eq!(reqwest::Method::from(parsed), reqwest::Method::POST);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// Retrieve a resource or a list of resources.
    Get,
    /// Create a resource, update it, or trigger an action.
    Post,
    /// Replace a resource (organizations).
    Put,
    Patch,
    /// Remove or revoke a resource. `DELETE /blocklist` carries a body.
    Delete,
}

impl RestMethod {
    /// Returns the upper-case wire name of the method.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display_matches_wire_name() {
        for method in RestMethod::iter() {
            assert_eq!(method.to_string(), method.as_str());
        }
        assert_eq!(RestMethod::Patch.as_str(), "PATCH");
    }

    #[test]
    fn test_parse() {
        assert_eq!("GET".parse::<RestMethod>().unwrap(), RestMethod::Get);
        assert_eq!("PUT".parse::<RestMethod>().unwrap(), RestMethod::Put);
        assert!("TRACE".parse::<RestMethod>().is_err());
    }

    #[test]
    fn test_to_reqwest() {
        for method in RestMethod::iter() {
            assert_eq!(method.to_reqwest().as_str(), method.as_str());
        }
    }
}
