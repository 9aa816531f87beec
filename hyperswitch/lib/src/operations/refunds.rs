//! Refunds against succeeded payments.

use hyperswitch_api::{ApiClient, ApiError, AsyncTransport, BlockingApiClient, BlockingTransport};
use hyperswitch_api_macros::Operation;

use crate::models::{
    RefundListMetaData, RefundListRequest, RefundListResponse, RefundRequest, RefundResponse,
    RefundUpdateRequest, TimeRange,
};

/// `POST /refunds`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(method = Post, path = "/refunds", output = RefundResponse, typed(200), empty(400))]
pub struct CreateRefund {
    #[operation(body)]
    pub body: RefundRequest,
}

impl CreateRefund {
    pub fn new(body: RefundRequest) -> Self {
        Self { body }
    }
}

/// `GET /refunds/{refund_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/refunds/{refund_id}",
    output = RefundResponse,
    typed(200),
    empty(404)
)]
pub struct RetrieveRefund {
    #[operation(path)]
    pub refund_id: String,
}

impl RetrieveRefund {
    pub fn new(refund_id: impl Into<String>) -> Self {
        Self {
            refund_id: refund_id.into(),
        }
    }
}

/// `POST /refunds/{refund_id}`
///
/// Only the reason and metadata can change after creation.
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/refunds/{refund_id}",
    output = RefundResponse,
    typed(200),
    empty(400)
)]
pub struct UpdateRefund {
    #[operation(path)]
    pub refund_id: String,
    #[operation(body)]
    pub body: RefundUpdateRequest,
}

impl UpdateRefund {
    pub fn new(refund_id: impl Into<String>, body: RefundUpdateRequest) -> Self {
        Self {
            refund_id: refund_id.into(),
            body,
        }
    }
}

/// `POST /refunds/list`
#[derive(Debug, Clone, Default, PartialEq, Operation)]
#[operation(method = Post, path = "/refunds/list", output = RefundListResponse)]
pub struct ListRefunds {
    #[operation(body)]
    pub body: RefundListRequest,
}

/// `POST /refunds/profile/list`
#[derive(Debug, Clone, Default, PartialEq, Operation)]
#[operation(method = Post, path = "/refunds/profile/list", output = RefundListResponse)]
pub struct ListRefundsForProfile {
    #[operation(body)]
    pub body: RefundListRequest,
}

/// `POST /refunds/filter`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(method = Post, path = "/refunds/filter", output = RefundListMetaData)]
pub struct ListRefundFilters {
    #[operation(body)]
    pub body: TimeRange,
}

impl ListRefundFilters {
    pub fn new(body: TimeRange) -> Self {
        Self { body }
    }
}

/// Refund calls bound to a client; see [`Resources::refunds`](crate::Resources::refunds).
#[derive(Debug)]
pub struct Refunds<'a, C> {
    pub(crate) client: &'a C,
}

impl<T: AsyncTransport> Refunds<'_, ApiClient<T>> {
    pub async fn create(&self, body: RefundRequest) -> Result<Option<RefundResponse>, ApiError> {
        self.client.execute(&CreateRefund::new(body)).await
    }

    pub async fn retrieve(
        &self,
        refund_id: impl Into<String>,
    ) -> Result<Option<RefundResponse>, ApiError> {
        self.client.execute(&RetrieveRefund::new(refund_id)).await
    }

    pub async fn update(
        &self,
        refund_id: impl Into<String>,
        body: RefundUpdateRequest,
    ) -> Result<Option<RefundResponse>, ApiError> {
        self.client.execute(&UpdateRefund::new(refund_id, body)).await
    }

    pub async fn list(
        &self,
        body: RefundListRequest,
    ) -> Result<Option<RefundListResponse>, ApiError> {
        self.client.execute(&ListRefunds { body }).await
    }

    pub async fn list_for_profile(
        &self,
        body: RefundListRequest,
    ) -> Result<Option<RefundListResponse>, ApiError> {
        self.client.execute(&ListRefundsForProfile { body }).await
    }

    pub async fn filters(&self, range: TimeRange) -> Result<Option<RefundListMetaData>, ApiError> {
        self.client.execute(&ListRefundFilters::new(range)).await
    }
}

impl<T: BlockingTransport> Refunds<'_, BlockingApiClient<T>> {
    pub fn create(&self, body: RefundRequest) -> Result<Option<RefundResponse>, ApiError> {
        self.client.execute(&CreateRefund::new(body))
    }

    pub fn retrieve(
        &self,
        refund_id: impl Into<String>,
    ) -> Result<Option<RefundResponse>, ApiError> {
        self.client.execute(&RetrieveRefund::new(refund_id))
    }

    pub fn update(
        &self,
        refund_id: impl Into<String>,
        body: RefundUpdateRequest,
    ) -> Result<Option<RefundResponse>, ApiError> {
        self.client.execute(&UpdateRefund::new(refund_id, body))
    }

    pub fn list(&self, body: RefundListRequest) -> Result<Option<RefundListResponse>, ApiError> {
        self.client.execute(&ListRefunds { body })
    }

    pub fn list_for_profile(
        &self,
        body: RefundListRequest,
    ) -> Result<Option<RefundListResponse>, ApiError> {
        self.client.execute(&ListRefundsForProfile { body })
    }

    pub fn filters(&self, range: TimeRange) -> Result<Option<RefundListMetaData>, ApiError> {
        self.client.execute(&ListRefundFilters::new(range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperswitch_api::{Field, Operation, Parsed, RestMethod};
    use serde_json::json;

    #[test]
    fn test_create_refund_body() {
        let mut body = RefundRequest::new("pay_1");
        body.amount = Some(600);
        let request = CreateRefund::new(body).build_request().unwrap();

        assert_eq!(request.method(), RestMethod::Post);
        assert_eq!(request.body(), Some(&json!({"payment_id": "pay_1", "amount": 600})));
    }

    #[test]
    fn test_retrieve_refund_not_found_is_empty() {
        let request = RetrieveRefund::new("ref_1").build_request().unwrap();
        assert_eq!(request.path(), "/refunds/ref_1");
        assert!(matches!(RetrieveRefund::parse_response(404, b"{}"), Ok(Parsed::Empty)));
    }

    #[test]
    fn test_list_refunds_keeps_explicit_null() {
        let op = ListRefunds {
            body: RefundListRequest {
                limit: Field::Value(5),
                payment_id: Field::Null,
                ..Default::default()
            },
        };
        let request = op.build_request().unwrap();

        assert_eq!(request.path(), "/refunds/list");
        assert_eq!(request.body(), Some(&json!({"limit": 5, "payment_id": null})));
    }

    #[test]
    fn test_list_without_output_statuses() {
        assert_eq!(ListRefundsForProfile::STATUSES, &[200]);
        assert!(matches!(
            ListRefundsForProfile::parse_response(400, b""),
            Ok(Parsed::Undocumented)
        ));
    }
}
