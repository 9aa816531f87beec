use hyperswitch_api::AdditionalProperties;
use serde::{Deserialize, Serialize};

use super::enums::PollStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollResponse {
    pub poll_id: String,
    pub status: PollStatus,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_poll_response() {
        let poll: PollResponse =
            serde_json::from_value(json!({"poll_id": "poll_1", "status": "not_found"})).unwrap();
        assert_eq!(poll.status, PollStatus::NotFound);
    }

    #[test]
    fn test_poll_response_keeps_unknown_keys() {
        let body = json!({"poll_id": "poll_1", "status": "pending", "extra_field": "x"});
        let poll: PollResponse = serde_json::from_value(body.clone()).unwrap();

        assert_eq!(poll.additional_properties["extra_field"], "x");
        assert_eq!(serde_json::to_value(&poll).unwrap(), body);
    }
}
