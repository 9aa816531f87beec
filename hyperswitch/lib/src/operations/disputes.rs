//! Chargebacks raised by customers through the connector.

use hyperswitch_api::{
    ApiClient, ApiError, AsyncTransport, BlockingApiClient, BlockingTransport, Field,
};
use hyperswitch_api_macros::Operation;

use crate::models::{DisputeResponse, DisputeStage, DisputeStatus, SubmitEvidenceRequest};

/// `GET /disputes/{dispute_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/disputes/{dispute_id}",
    output = DisputeResponse,
    typed(200),
    empty(404)
)]
pub struct RetrieveDispute {
    #[operation(path)]
    pub dispute_id: String,
}

impl RetrieveDispute {
    pub fn new(dispute_id: impl Into<String>) -> Self {
        Self {
            dispute_id: dispute_id.into(),
        }
    }
}

/// `GET /disputes/list`
///
/// Also the filter set for [`Disputes::list_for_profile`]. `received_time`
/// bounds take `YYYY-MM-DDThh:mm:ss` values.
#[derive(Debug, Clone, Default, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/disputes/list",
    output = Vec<DisputeResponse>,
    typed(200),
    empty(401)
)]
pub struct ListDisputes {
    #[operation(query)]
    pub limit: Field<i64>,
    #[operation(query)]
    pub dispute_status: Field<DisputeStatus>,
    #[operation(query)]
    pub dispute_stage: Field<DisputeStage>,
    #[operation(query)]
    pub reason: Field<String>,
    #[operation(query)]
    pub connector: Field<String>,
    #[operation(query)]
    pub received_time: Field<String>,
    #[operation(query = "received_time.lt")]
    pub received_time_lt: Field<String>,
    #[operation(query = "received_time.gt")]
    pub received_time_gt: Field<String>,
    #[operation(query = "received_time.lte")]
    pub received_time_lte: Field<String>,
    #[operation(query = "received_time.gte")]
    pub received_time_gte: Field<String>,
}

/// `GET /disputes/profile/list`
#[derive(Debug, Clone, Default, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/disputes/profile/list",
    output = Vec<DisputeResponse>,
    typed(200),
    empty(401)
)]
pub struct ListDisputesForProfile {
    #[operation(query)]
    pub limit: Field<i64>,
    #[operation(query)]
    pub dispute_status: Field<DisputeStatus>,
    #[operation(query)]
    pub dispute_stage: Field<DisputeStage>,
    #[operation(query)]
    pub reason: Field<String>,
    #[operation(query)]
    pub connector: Field<String>,
    #[operation(query)]
    pub received_time: Field<String>,
    #[operation(query = "received_time.lt")]
    pub received_time_lt: Field<String>,
    #[operation(query = "received_time.gt")]
    pub received_time_gt: Field<String>,
    #[operation(query = "received_time.lte")]
    pub received_time_lte: Field<String>,
    #[operation(query = "received_time.gte")]
    pub received_time_gte: Field<String>,
}

impl From<ListDisputes> for ListDisputesForProfile {
    fn from(filters: ListDisputes) -> Self {
        Self {
            limit: filters.limit,
            dispute_status: filters.dispute_status,
            dispute_stage: filters.dispute_stage,
            reason: filters.reason,
            connector: filters.connector,
            received_time: filters.received_time,
            received_time_lt: filters.received_time_lt,
            received_time_gt: filters.received_time_gt,
            received_time_lte: filters.received_time_lte,
            received_time_gte: filters.received_time_gte,
        }
    }
}

/// `POST /disputes/accept/{dispute_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/disputes/accept/{dispute_id}",
    output = DisputeResponse,
    typed(200),
    empty(404)
)]
pub struct AcceptDispute {
    #[operation(path)]
    pub dispute_id: String,
}

impl AcceptDispute {
    pub fn new(dispute_id: impl Into<String>) -> Self {
        Self {
            dispute_id: dispute_id.into(),
        }
    }
}

/// `POST /disputes/evidence`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/disputes/evidence",
    output = DisputeResponse,
    typed(200),
    empty(400)
)]
pub struct SubmitDisputeEvidence {
    #[operation(body)]
    pub body: SubmitEvidenceRequest,
}

impl SubmitDisputeEvidence {
    pub fn new(body: SubmitEvidenceRequest) -> Self {
        Self { body }
    }
}

/// Dispute calls bound to a client; see [`Resources::disputes`](crate::Resources::disputes).
#[derive(Debug)]
pub struct Disputes<'a, C> {
    pub(crate) client: &'a C,
}

impl<T: AsyncTransport> Disputes<'_, ApiClient<T>> {
    pub async fn retrieve(
        &self,
        dispute_id: impl Into<String>,
    ) -> Result<Option<DisputeResponse>, ApiError> {
        self.client.execute(&RetrieveDispute::new(dispute_id)).await
    }

    pub async fn list(
        &self,
        filters: ListDisputes,
    ) -> Result<Option<Vec<DisputeResponse>>, ApiError> {
        self.client.execute(&filters).await
    }

    pub async fn list_for_profile(
        &self,
        filters: ListDisputes,
    ) -> Result<Option<Vec<DisputeResponse>>, ApiError> {
        self.client
            .execute(&ListDisputesForProfile::from(filters))
            .await
    }

    pub async fn accept(
        &self,
        dispute_id: impl Into<String>,
    ) -> Result<Option<DisputeResponse>, ApiError> {
        self.client.execute(&AcceptDispute::new(dispute_id)).await
    }

    pub async fn submit_evidence(
        &self,
        evidence: SubmitEvidenceRequest,
    ) -> Result<Option<DisputeResponse>, ApiError> {
        self.client.execute(&SubmitDisputeEvidence::new(evidence)).await
    }
}

impl<T: BlockingTransport> Disputes<'_, BlockingApiClient<T>> {
    pub fn retrieve(
        &self,
        dispute_id: impl Into<String>,
    ) -> Result<Option<DisputeResponse>, ApiError> {
        self.client.execute(&RetrieveDispute::new(dispute_id))
    }

    pub fn list(&self, filters: ListDisputes) -> Result<Option<Vec<DisputeResponse>>, ApiError> {
        self.client.execute(&filters)
    }

    pub fn list_for_profile(
        &self,
        filters: ListDisputes,
    ) -> Result<Option<Vec<DisputeResponse>>, ApiError> {
        self.client.execute(&ListDisputesForProfile::from(filters))
    }

    pub fn accept(
        &self,
        dispute_id: impl Into<String>,
    ) -> Result<Option<DisputeResponse>, ApiError> {
        self.client.execute(&AcceptDispute::new(dispute_id))
    }

    pub fn submit_evidence(
        &self,
        evidence: SubmitEvidenceRequest,
    ) -> Result<Option<DisputeResponse>, ApiError> {
        self.client.execute(&SubmitDisputeEvidence::new(evidence))
    }
}
