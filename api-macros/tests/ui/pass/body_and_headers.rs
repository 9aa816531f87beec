//! Test: body, header and untyped-only operations compile.

use hyperswitch_api::{Operation, Parsed};
use hyperswitch_api_macros::Operation;
use serde_json::{json, Value};

#[derive(Operation)]
#[operation(method = Post, path = "/relay", output = Value, id = "relay")]
pub struct CreateRelay {
    #[operation(header = "X-Profile-Id")]
    pub profile_id: String,
    #[operation(header = "X-Idempotency-Key")]
    pub idempotency_key: Option<String>,
    #[operation(body)]
    pub body: Value,
}

#[derive(Operation)]
#[operation(method = Post, path = "/widgets/{widget_id}/cancel")]
pub struct CancelWidget {
    #[operation(path)]
    pub widget_id: String,
    #[operation(body)]
    pub body: Option<Value>,
}

#[derive(Operation)]
#[operation(method = Get, path = "/health", output = Value)]
pub struct Health;

fn main() {
    let relay = CreateRelay {
        profile_id: "pro_1".into(),
        idempotency_key: None,
        body: json!({"type": "refund"}),
    };
    let request = relay.build_request().unwrap();
    assert_eq!(request.header("x-profile-id"), Some("pro_1"));
    assert_eq!(request.header("X-Idempotency-Key"), None);
    assert_eq!(request.body(), Some(&json!({"type": "refund"})));
    assert_eq!(CreateRelay::ID, "relay");

    let cancel = CancelWidget {
        widget_id: "w_1".into(),
        body: None,
    };
    assert!(cancel.build_request().unwrap().body().is_none());
    assert!(matches!(CancelWidget::parse_response(200, b"anything"), Ok(Parsed::Empty)));

    assert_eq!(Health.build_request().unwrap().path(), "/health");
}
