//! Business profiles under a merchant account.

use hyperswitch_api::{ApiClient, ApiError, AsyncTransport, BlockingApiClient, BlockingTransport};
use hyperswitch_api_macros::Operation;

use crate::models::{ProfileCreate, ProfileResponse};

/// `POST /account/{account_id}/business_profile`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/account/{account_id}/business_profile",
    output = ProfileResponse,
    typed(200),
    empty(400)
)]
pub struct CreateProfile {
    #[operation(path)]
    pub account_id: String,
    #[operation(body)]
    pub body: ProfileCreate,
}

impl CreateProfile {
    pub fn new(account_id: impl Into<String>, body: ProfileCreate) -> Self {
        Self {
            account_id: account_id.into(),
            body,
        }
    }
}

/// `GET /account/{account_id}/business_profile/{profile_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/account/{account_id}/business_profile/{profile_id}",
    output = ProfileResponse,
    typed(200),
    empty(400)
)]
pub struct RetrieveProfile {
    #[operation(path)]
    pub account_id: String,
    #[operation(path)]
    pub profile_id: String,
}

impl RetrieveProfile {
    pub fn new(account_id: impl Into<String>, profile_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            profile_id: profile_id.into(),
        }
    }
}

/// `POST /account/{account_id}/business_profile/{profile_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/account/{account_id}/business_profile/{profile_id}",
    output = ProfileResponse,
    typed(200),
    empty(400)
)]
pub struct UpdateProfile {
    #[operation(path)]
    pub account_id: String,
    #[operation(path)]
    pub profile_id: String,
    #[operation(body)]
    pub body: ProfileCreate,
}

impl UpdateProfile {
    pub fn new(
        account_id: impl Into<String>,
        profile_id: impl Into<String>,
        body: ProfileCreate,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            profile_id: profile_id.into(),
            body,
        }
    }
}

/// `DELETE /account/{account_id}/business_profile/{profile_id}`
///
/// The server answers with a bare JSON boolean.
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Delete,
    path = "/account/{account_id}/business_profile/{profile_id}",
    output = bool,
    typed(200),
    empty(400)
)]
pub struct DeleteProfile {
    #[operation(path)]
    pub account_id: String,
    #[operation(path)]
    pub profile_id: String,
}

impl DeleteProfile {
    pub fn new(account_id: impl Into<String>, profile_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            profile_id: profile_id.into(),
        }
    }
}

/// `GET /account/{account_id}/business_profile`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/account/{account_id}/business_profile",
    output = Vec<ProfileResponse>,
    typed(200),
    empty(400)
)]
pub struct ListProfiles {
    #[operation(path)]
    pub account_id: String,
}

impl ListProfiles {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
        }
    }
}

/// Business profile calls bound to a client; see
/// [`Resources::profiles`](crate::Resources::profiles).
#[derive(Debug)]
pub struct Profiles<'a, C> {
    pub(crate) client: &'a C,
}

impl<T: AsyncTransport> Profiles<'_, ApiClient<T>> {
    pub async fn create(
        &self,
        account_id: impl Into<String>,
        body: ProfileCreate,
    ) -> Result<Option<ProfileResponse>, ApiError> {
        self.client.execute(&CreateProfile::new(account_id, body)).await
    }

    pub async fn retrieve(
        &self,
        account_id: impl Into<String>,
        profile_id: impl Into<String>,
    ) -> Result<Option<ProfileResponse>, ApiError> {
        self.client.execute(&RetrieveProfile::new(account_id, profile_id)).await
    }

    pub async fn update(
        &self,
        account_id: impl Into<String>,
        profile_id: impl Into<String>,
        body: ProfileCreate,
    ) -> Result<Option<ProfileResponse>, ApiError> {
        self.client
            .execute(&UpdateProfile::new(account_id, profile_id, body))
            .await
    }

    pub async fn delete(
        &self,
        account_id: impl Into<String>,
        profile_id: impl Into<String>,
    ) -> Result<Option<bool>, ApiError> {
        self.client.execute(&DeleteProfile::new(account_id, profile_id)).await
    }

    pub async fn list(
        &self,
        account_id: impl Into<String>,
    ) -> Result<Option<Vec<ProfileResponse>>, ApiError> {
        self.client.execute(&ListProfiles::new(account_id)).await
    }
}

impl<T: BlockingTransport> Profiles<'_, BlockingApiClient<T>> {
    pub fn create(
        &self,
        account_id: impl Into<String>,
        body: ProfileCreate,
    ) -> Result<Option<ProfileResponse>, ApiError> {
        self.client.execute(&CreateProfile::new(account_id, body))
    }

    pub fn retrieve(
        &self,
        account_id: impl Into<String>,
        profile_id: impl Into<String>,
    ) -> Result<Option<ProfileResponse>, ApiError> {
        self.client.execute(&RetrieveProfile::new(account_id, profile_id))
    }

    pub fn update(
        &self,
        account_id: impl Into<String>,
        profile_id: impl Into<String>,
        body: ProfileCreate,
    ) -> Result<Option<ProfileResponse>, ApiError> {
        self.client
            .execute(&UpdateProfile::new(account_id, profile_id, body))
    }

    pub fn delete(
        &self,
        account_id: impl Into<String>,
        profile_id: impl Into<String>,
    ) -> Result<Option<bool>, ApiError> {
        self.client.execute(&DeleteProfile::new(account_id, profile_id))
    }

    pub fn list(
        &self,
        account_id: impl Into<String>,
    ) -> Result<Option<Vec<ProfileResponse>>, ApiError> {
        self.client.execute(&ListProfiles::new(account_id))
    }
}
