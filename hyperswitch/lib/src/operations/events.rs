//! Webhook event log and manual redelivery.

use hyperswitch_api::{ApiClient, ApiError, AsyncTransport, BlockingApiClient, BlockingTransport};
use hyperswitch_api_macros::Operation;

use crate::models::{EventListConstraints, EventRetrieveResponse, TotalEventsResponse};

/// `POST /events/{merchant_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(method = Post, path = "/events/{merchant_id}", output = TotalEventsResponse)]
pub struct ListEvents {
    #[operation(path)]
    pub merchant_id: String,
    #[operation(body)]
    pub body: EventListConstraints,
}

impl ListEvents {
    pub fn new(merchant_id: impl Into<String>, body: EventListConstraints) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            body,
        }
    }
}

/// `POST /events/profile/list`
#[derive(Debug, Clone, Default, PartialEq, Operation)]
#[operation(method = Post, path = "/events/profile/list", output = TotalEventsResponse)]
pub struct ListEventsForProfile {
    #[operation(body)]
    pub body: EventListConstraints,
}

/// `GET /events/{merchant_id}/{event_id}/attempts`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/events/{merchant_id}/{event_id}/attempts",
    output = Vec<EventRetrieveResponse>
)]
pub struct ListEventDeliveryAttempts {
    #[operation(path)]
    pub merchant_id: String,
    #[operation(path)]
    pub event_id: String,
}

impl ListEventDeliveryAttempts {
    pub fn new(merchant_id: impl Into<String>, event_id: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            event_id: event_id.into(),
        }
    }
}

/// `POST /events/{merchant_id}/{event_id}/retry`
///
/// Sends the event again right away; the result is the new attempt.
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/events/{merchant_id}/{event_id}/retry",
    output = EventRetrieveResponse
)]
pub struct RetryEventDelivery {
    #[operation(path)]
    pub merchant_id: String,
    #[operation(path)]
    pub event_id: String,
}

impl RetryEventDelivery {
    pub fn new(merchant_id: impl Into<String>, event_id: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            event_id: event_id.into(),
        }
    }
}

/// Event calls bound to a client; see [`Resources::events`](crate::Resources::events).
#[derive(Debug)]
pub struct Events<'a, C> {
    pub(crate) client: &'a C,
}

impl<T: AsyncTransport> Events<'_, ApiClient<T>> {
    pub async fn list(
        &self,
        merchant_id: impl Into<String>,
        constraints: EventListConstraints,
    ) -> Result<Option<TotalEventsResponse>, ApiError> {
        self.client.execute(&ListEvents::new(merchant_id, constraints)).await
    }

    pub async fn list_for_profile(
        &self,
        constraints: EventListConstraints,
    ) -> Result<Option<TotalEventsResponse>, ApiError> {
        self.client
            .execute(&ListEventsForProfile { body: constraints })
            .await
    }

    pub async fn delivery_attempts(
        &self,
        merchant_id: impl Into<String>,
        event_id: impl Into<String>,
    ) -> Result<Option<Vec<EventRetrieveResponse>>, ApiError> {
        self.client
            .execute(&ListEventDeliveryAttempts::new(merchant_id, event_id))
            .await
    }

    pub async fn retry(
        &self,
        merchant_id: impl Into<String>,
        event_id: impl Into<String>,
    ) -> Result<Option<EventRetrieveResponse>, ApiError> {
        self.client
            .execute(&RetryEventDelivery::new(merchant_id, event_id))
            .await
    }
}

impl<T: BlockingTransport> Events<'_, BlockingApiClient<T>> {
    pub fn list(
        &self,
        merchant_id: impl Into<String>,
        constraints: EventListConstraints,
    ) -> Result<Option<TotalEventsResponse>, ApiError> {
        self.client.execute(&ListEvents::new(merchant_id, constraints))
    }

    pub fn list_for_profile(
        &self,
        constraints: EventListConstraints,
    ) -> Result<Option<TotalEventsResponse>, ApiError> {
        self.client.execute(&ListEventsForProfile { body: constraints })
    }

    pub fn delivery_attempts(
        &self,
        merchant_id: impl Into<String>,
        event_id: impl Into<String>,
    ) -> Result<Option<Vec<EventRetrieveResponse>>, ApiError> {
        self.client
            .execute(&ListEventDeliveryAttempts::new(merchant_id, event_id))
    }

    pub fn retry(
        &self,
        merchant_id: impl Into<String>,
        event_id: impl Into<String>,
    ) -> Result<Option<EventRetrieveResponse>, ApiError> {
        self.client
            .execute(&RetryEventDelivery::new(merchant_id, event_id))
    }
}
