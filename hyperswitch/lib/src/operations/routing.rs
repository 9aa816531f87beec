//! Connector routing algorithms and fallback orders.

use hyperswitch_api::{ApiClient, ApiError, AsyncTransport, BlockingApiClient, BlockingTransport};
use hyperswitch_api_macros::Operation;

use crate::models::{
    LinkedRoutingConfigRetrieveResponse, MerchantRoutingAlgorithm, ProfileDefaultRoutingConfig,
    RoutableConnectorChoice, RoutingConfigRequest, RoutingDictionaryRecord, RoutingKind,
};

/// `POST /routing`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/routing",
    output = RoutingDictionaryRecord,
    typed(200),
    empty(400, 404)
)]
pub struct CreateRoutingConfig {
    #[operation(body)]
    pub body: RoutingConfigRequest,
}

impl CreateRoutingConfig {
    pub fn new(body: RoutingConfigRequest) -> Self {
        Self { body }
    }
}

/// `GET /routing/{routing_algorithm_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/routing/{routing_algorithm_id}",
    output = MerchantRoutingAlgorithm,
    typed(200),
    empty(404)
)]
pub struct RetrieveRoutingConfig {
    #[operation(path)]
    pub routing_algorithm_id: String,
}

impl RetrieveRoutingConfig {
    pub fn new(routing_algorithm_id: impl Into<String>) -> Self {
        Self {
            routing_algorithm_id: routing_algorithm_id.into(),
        }
    }
}

/// `GET /routing`
///
/// The response shape depends on the key's scope; see [`RoutingKind`].
#[derive(Debug, Clone, Default, PartialEq, Operation)]
#[operation(method = Get, path = "/routing", output = RoutingKind, typed(200), empty(404))]
pub struct ListRoutingConfigs {
    #[operation(query)]
    pub limit: Option<u16>,
    #[operation(query)]
    pub offset: Option<u8>,
    #[operation(query)]
    pub profile_id: Option<String>,
}

/// `POST /routing/{routing_algorithm_id}/activate`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/routing/{routing_algorithm_id}/activate",
    output = RoutingDictionaryRecord,
    typed(200),
    empty(400, 404)
)]
pub struct ActivateRoutingConfig {
    #[operation(path)]
    pub routing_algorithm_id: String,
}

impl ActivateRoutingConfig {
    pub fn new(routing_algorithm_id: impl Into<String>) -> Self {
        Self {
            routing_algorithm_id: routing_algorithm_id.into(),
        }
    }
}

/// `POST /routing/deactivate`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/routing/deactivate",
    output = RoutingDictionaryRecord,
    typed(200),
    empty(400)
)]
pub struct DeactivateRoutingConfig {
    #[operation(body)]
    pub body: RoutingConfigRequest,
}

impl DeactivateRoutingConfig {
    pub fn for_profile(profile_id: impl Into<String>) -> Self {
        Self {
            body: RoutingConfigRequest::for_profile(profile_id),
        }
    }
}

/// `GET /routing/active`
#[derive(Debug, Clone, Default, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/routing/active",
    output = LinkedRoutingConfigRetrieveResponse,
    typed(200),
    empty(404)
)]
pub struct RetrieveActiveRoutingConfig {
    #[operation(header = "X-Profile-Id")]
    pub profile_id: Option<String>,
}

/// `GET /routing/default`
#[derive(Debug, Clone, Default, PartialEq, Operation)]
#[operation(method = Get, path = "/routing/default", output = Vec<RoutableConnectorChoice>)]
pub struct RetrieveDefaultRoutingConfig;

/// `POST /routing/default`
///
/// Replaces the merchant's fallback order. The server rejects lists that
/// add or drop connectors.
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/routing/default",
    output = Vec<RoutableConnectorChoice>,
    typed(200),
    empty(400, 422)
)]
pub struct UpdateDefaultRoutingConfig {
    #[operation(body)]
    pub body: Vec<RoutableConnectorChoice>,
}

impl UpdateDefaultRoutingConfig {
    pub fn new(body: Vec<RoutableConnectorChoice>) -> Self {
        Self { body }
    }
}

/// `GET /routing/default/profile`
#[derive(Debug, Clone, Default, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/routing/default/profile",
    output = Vec<ProfileDefaultRoutingConfig>
)]
pub struct RetrieveDefaultRoutingConfigForProfiles;

/// `POST /routing/default/profile/{profile_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/routing/default/profile/{profile_id}",
    output = ProfileDefaultRoutingConfig,
    typed(200),
    empty(400, 422)
)]
pub struct UpdateDefaultRoutingConfigForProfile {
    #[operation(path)]
    pub profile_id: String,
    #[operation(body)]
    pub body: Vec<RoutableConnectorChoice>,
}

impl UpdateDefaultRoutingConfigForProfile {
    pub fn new(profile_id: impl Into<String>, body: Vec<RoutableConnectorChoice>) -> Self {
        Self {
            profile_id: profile_id.into(),
            body,
        }
    }
}

/// Routing calls bound to a client; see [`Resources::routing`](crate::Resources::routing).
#[derive(Debug)]
pub struct Routing<'a, C> {
    pub(crate) client: &'a C,
}

impl<T: AsyncTransport> Routing<'_, ApiClient<T>> {
    pub async fn create(
        &self,
        body: RoutingConfigRequest,
    ) -> Result<Option<RoutingDictionaryRecord>, ApiError> {
        self.client.execute(&CreateRoutingConfig::new(body)).await
    }

    pub async fn retrieve(
        &self,
        routing_algorithm_id: impl Into<String>,
    ) -> Result<Option<MerchantRoutingAlgorithm>, ApiError> {
        self.client
            .execute(&RetrieveRoutingConfig::new(routing_algorithm_id))
            .await
    }

    pub async fn list(&self, query: ListRoutingConfigs) -> Result<Option<RoutingKind>, ApiError> {
        self.client.execute(&query).await
    }

    pub async fn activate(
        &self,
        routing_algorithm_id: impl Into<String>,
    ) -> Result<Option<RoutingDictionaryRecord>, ApiError> {
        self.client
            .execute(&ActivateRoutingConfig::new(routing_algorithm_id))
            .await
    }

    pub async fn deactivate(
        &self,
        profile_id: impl Into<String>,
    ) -> Result<Option<RoutingDictionaryRecord>, ApiError> {
        self.client
            .execute(&DeactivateRoutingConfig::for_profile(profile_id))
            .await
    }

    pub async fn active(
        &self,
        profile_id: Option<String>,
    ) -> Result<Option<LinkedRoutingConfigRetrieveResponse>, ApiError> {
        self.client
            .execute(&RetrieveActiveRoutingConfig { profile_id })
            .await
    }

    pub async fn default_config(&self) -> Result<Option<Vec<RoutableConnectorChoice>>, ApiError> {
        self.client.execute(&RetrieveDefaultRoutingConfig).await
    }

    pub async fn update_default_config(
        &self,
        connectors: Vec<RoutableConnectorChoice>,
    ) -> Result<Option<Vec<RoutableConnectorChoice>>, ApiError> {
        self.client
            .execute(&UpdateDefaultRoutingConfig::new(connectors))
            .await
    }

    pub async fn default_configs_for_profiles(
        &self,
    ) -> Result<Option<Vec<ProfileDefaultRoutingConfig>>, ApiError> {
        self.client
            .execute(&RetrieveDefaultRoutingConfigForProfiles)
            .await
    }

    pub async fn update_default_config_for_profile(
        &self,
        profile_id: impl Into<String>,
        connectors: Vec<RoutableConnectorChoice>,
    ) -> Result<Option<ProfileDefaultRoutingConfig>, ApiError> {
        self.client
            .execute(&UpdateDefaultRoutingConfigForProfile::new(profile_id, connectors))
            .await
    }
}

impl<T: BlockingTransport> Routing<'_, BlockingApiClient<T>> {
    pub fn create(
        &self,
        body: RoutingConfigRequest,
    ) -> Result<Option<RoutingDictionaryRecord>, ApiError> {
        self.client.execute(&CreateRoutingConfig::new(body))
    }

    pub fn retrieve(
        &self,
        routing_algorithm_id: impl Into<String>,
    ) -> Result<Option<MerchantRoutingAlgorithm>, ApiError> {
        self.client
            .execute(&RetrieveRoutingConfig::new(routing_algorithm_id))
    }

    pub fn list(&self, query: ListRoutingConfigs) -> Result<Option<RoutingKind>, ApiError> {
        self.client.execute(&query)
    }

    pub fn activate(
        &self,
        routing_algorithm_id: impl Into<String>,
    ) -> Result<Option<RoutingDictionaryRecord>, ApiError> {
        self.client
            .execute(&ActivateRoutingConfig::new(routing_algorithm_id))
    }

    pub fn deactivate(
        &self,
        profile_id: impl Into<String>,
    ) -> Result<Option<RoutingDictionaryRecord>, ApiError> {
        self.client
            .execute(&DeactivateRoutingConfig::for_profile(profile_id))
    }

    pub fn active(
        &self,
        profile_id: Option<String>,
    ) -> Result<Option<LinkedRoutingConfigRetrieveResponse>, ApiError> {
        self.client.execute(&RetrieveActiveRoutingConfig { profile_id })
    }

    pub fn default_config(&self) -> Result<Option<Vec<RoutableConnectorChoice>>, ApiError> {
        self.client.execute(&RetrieveDefaultRoutingConfig)
    }

    pub fn update_default_config(
        &self,
        connectors: Vec<RoutableConnectorChoice>,
    ) -> Result<Option<Vec<RoutableConnectorChoice>>, ApiError> {
        self.client.execute(&UpdateDefaultRoutingConfig::new(connectors))
    }

    pub fn default_configs_for_profiles(
        &self,
    ) -> Result<Option<Vec<ProfileDefaultRoutingConfig>>, ApiError> {
        self.client.execute(&RetrieveDefaultRoutingConfigForProfiles)
    }

    pub fn update_default_config_for_profile(
        &self,
        profile_id: impl Into<String>,
        connectors: Vec<RoutableConnectorChoice>,
    ) -> Result<Option<ProfileDefaultRoutingConfig>, ApiError> {
        self.client
            .execute(&UpdateDefaultRoutingConfigForProfile::new(profile_id, connectors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Connector, StaticRoutingAlgorithm};
    use hyperswitch_api::{Operation, Parsed};
    use serde_json::json;

    #[test]
    fn test_create_routing_config_body() {
        let body = RoutingConfigRequest::new(
            "prefer stripe",
            "pro_1",
            StaticRoutingAlgorithm::Single(Box::new(Connector::Stripe.into())),
        );
        let request = CreateRoutingConfig::new(body).build_request().unwrap();

        assert_eq!(
            request.body(),
            Some(&json!({
                "name": "prefer stripe",
                "profile_id": "pro_1",
                "algorithm": {"type": "single", "data": {"connector": "stripe"}}
            }))
        );
    }

    #[test]
    fn test_active_config_profile_header() {
        let scoped = RetrieveActiveRoutingConfig {
            profile_id: Some("pro_1".into()),
        }
        .build_request()
        .unwrap();
        let unscoped = RetrieveActiveRoutingConfig::default().build_request().unwrap();

        assert_eq!(scoped.header("x-profile-id"), Some("pro_1"));
        assert!(unscoped.headers().is_empty());
    }

    #[test]
    fn test_list_prefers_dictionary_shape() {
        let body = json!({"merchant_id": "m", "active_id": null, "records": []});
        let parsed = ListRoutingConfigs::parse_response(200, body.to_string().as_bytes()).unwrap();

        assert!(matches!(parsed, Parsed::Typed(RoutingKind::Config(_))));
    }

    #[test]
    fn test_list_accepts_bare_records() {
        let parsed = ListRoutingConfigs::parse_response(200, b"[]").unwrap();
        assert!(matches!(
            parsed,
            Parsed::Typed(RoutingKind::RoutingAlgorithm(ref r)) if r.is_empty()
        ));
    }

    #[test]
    fn test_deactivate_sends_profile_only() {
        let request = DeactivateRoutingConfig::for_profile("pro_1").build_request().unwrap();
        assert_eq!(request.path(), "/routing/deactivate");
        assert_eq!(request.body(), Some(&json!({"profile_id": "pro_1"})));
    }

    #[test]
    fn test_profile_fallback_update_path() {
        let request =
            UpdateDefaultRoutingConfigForProfile::new("pro_1", vec![Connector::Adyen.into()])
                .build_request()
                .unwrap();
        assert_eq!(request.path(), "/routing/default/profile/pro_1");
        assert_eq!(request.body(), Some(&json!([{"connector": "adyen"}])));
    }
}
