//! Status of external actions the client waits on (3DS, redirects).

use hyperswitch_api::{ApiClient, ApiError, AsyncTransport, BlockingApiClient, BlockingTransport};
use hyperswitch_api_macros::Operation;

use crate::models::PollResponse;

/// `GET /poll/status/{poll_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/poll/status/{poll_id}",
    output = PollResponse,
    typed(200),
    empty(404)
)]
pub struct RetrievePollStatus {
    #[operation(path)]
    pub poll_id: String,
}

impl RetrievePollStatus {
    pub fn new(poll_id: impl Into<String>) -> Self {
        Self {
            poll_id: poll_id.into(),
        }
    }
}

/// Poll calls bound to a client; see [`Resources::poll`](crate::Resources::poll).
#[derive(Debug)]
pub struct Poll<'a, C> {
    pub(crate) client: &'a C,
}

impl<T: AsyncTransport> Poll<'_, ApiClient<T>> {
    pub async fn status(
        &self,
        poll_id: impl Into<String>,
    ) -> Result<Option<PollResponse>, ApiError> {
        self.client.execute(&RetrievePollStatus::new(poll_id)).await
    }
}

impl<T: BlockingTransport> Poll<'_, BlockingApiClient<T>> {
    pub fn status(&self, poll_id: impl Into<String>) -> Result<Option<PollResponse>, ApiError> {
        self.client.execute(&RetrievePollStatus::new(poll_id))
    }
}
