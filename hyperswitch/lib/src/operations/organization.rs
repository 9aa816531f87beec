//! Organizations group merchant accounts.

use hyperswitch_api::{ApiClient, ApiError, AsyncTransport, BlockingApiClient, BlockingTransport};
use hyperswitch_api_macros::Operation;

use crate::models::{OrganizationCreateRequest, OrganizationResponse, OrganizationUpdateRequest};

/// `POST /organization`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/organization",
    output = OrganizationResponse,
    typed(200),
    empty(400)
)]
pub struct CreateOrganization {
    #[operation(body)]
    pub body: OrganizationCreateRequest,
}

impl CreateOrganization {
    pub fn new(body: OrganizationCreateRequest) -> Self {
        Self { body }
    }
}

/// `GET /organization/{id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/organization/{id}",
    output = OrganizationResponse,
    typed(200),
    empty(400)
)]
pub struct RetrieveOrganization {
    #[operation(path)]
    pub id: String,
}

impl RetrieveOrganization {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// `PUT /organization/{id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Put,
    path = "/organization/{id}",
    output = OrganizationResponse,
    typed(200),
    empty(400)
)]
pub struct UpdateOrganization {
    #[operation(path)]
    pub id: String,
    #[operation(body)]
    pub body: OrganizationUpdateRequest,
}

impl UpdateOrganization {
    pub fn new(id: impl Into<String>, body: OrganizationUpdateRequest) -> Self {
        Self { id: id.into(), body }
    }
}

/// Organization calls bound to a client; see
/// [`Resources::organizations`](crate::Resources::organizations).
#[derive(Debug)]
pub struct Organizations<'a, C> {
    pub(crate) client: &'a C,
}

impl<T: AsyncTransport> Organizations<'_, ApiClient<T>> {
    pub async fn create(
        &self,
        body: OrganizationCreateRequest,
    ) -> Result<Option<OrganizationResponse>, ApiError> {
        self.client.execute(&CreateOrganization::new(body)).await
    }

    pub async fn retrieve(
        &self,
        id: impl Into<String>,
    ) -> Result<Option<OrganizationResponse>, ApiError> {
        self.client.execute(&RetrieveOrganization::new(id)).await
    }

    pub async fn update(
        &self,
        id: impl Into<String>,
        body: OrganizationUpdateRequest,
    ) -> Result<Option<OrganizationResponse>, ApiError> {
        self.client.execute(&UpdateOrganization::new(id, body)).await
    }
}

impl<T: BlockingTransport> Organizations<'_, BlockingApiClient<T>> {
    pub fn create(
        &self,
        body: OrganizationCreateRequest,
    ) -> Result<Option<OrganizationResponse>, ApiError> {
        self.client.execute(&CreateOrganization::new(body))
    }

    pub fn retrieve(
        &self,
        id: impl Into<String>,
    ) -> Result<Option<OrganizationResponse>, ApiError> {
        self.client.execute(&RetrieveOrganization::new(id))
    }

    pub fn update(
        &self,
        id: impl Into<String>,
        body: OrganizationUpdateRequest,
    ) -> Result<Option<OrganizationResponse>, ApiError> {
        self.client.execute(&UpdateOrganization::new(id, body))
    }
}
