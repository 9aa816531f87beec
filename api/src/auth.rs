//! Credentials accepted by the payments API.

use std::fmt;

/// Header the API reads every key type from.
pub const API_KEY_HEADER: &str = "api-key";

/// Credentials attached to every request a client sends.
///
/// Secret, publishable, ephemeral and admin keys all travel in the `api-key`
/// header; the server tells them apart by prefix. JWTs issued to dashboard
/// users travel as a bearer token.
///
/// ## Examples
///
/// ```rust
/// use hyperswitch_api::Credentials;
///
/// let creds = Credentials::ApiKey("snd_secret".to_string());
/// assert_eq!(creds.header(), ("api-key", "snd_secret".to_string()));
///
/// // Secrets never show up in debug output.
/// assert!(!format!("{creds:?}").contains("snd_secret"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Merchant secret key.
    ApiKey(String),
    /// Admin key for `/accounts`, `/organization` and `/gsm`.
    AdminApiKey(String),
    /// Publishable key for client-side calls.
    PublishableKey(String),
    /// Short-lived key scoped to one customer.
    EphemeralKey(String),
    /// Dashboard JWT.
    Bearer(String),
}

impl Credentials {
    /// Returns the header name and value these credentials are sent as.
    pub fn header(&self) -> (&'static str, String) {
        match self {
            Self::ApiKey(key)
            | Self::AdminApiKey(key)
            | Self::PublishableKey(key)
            | Self::EphemeralKey(key) => (API_KEY_HEADER, key.clone()),
            Self::Bearer(token) => ("Authorization", format!("Bearer {token}")),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::ApiKey(_) => "ApiKey",
            Self::AdminApiKey(_) => "AdminApiKey",
            Self::PublishableKey(_) => "PublishableKey",
            Self::EphemeralKey(_) => "EphemeralKey",
            Self::Bearer(_) => "Bearer",
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(***)", self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_types_share_header() {
        for creds in [
            Credentials::ApiKey("a".into()),
            Credentials::AdminApiKey("a".into()),
            Credentials::PublishableKey("a".into()),
            Credentials::EphemeralKey("a".into()),
        ] {
            assert_eq!(creds.header().0, API_KEY_HEADER);
        }
    }

    #[test]
    fn test_bearer_header() {
        let creds = Credentials::Bearer("jwt".to_string());
        assert_eq!(creds.header(), ("Authorization", "Bearer jwt".to_string()));
    }

    #[test]
    fn test_debug_is_redacted() {
        let creds = Credentials::AdminApiKey("test_admin".to_string());
        assert_eq!(format!("{creds:?}"), "AdminApiKey(***)");
    }
}
