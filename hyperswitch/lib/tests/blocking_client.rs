use hyperswitch::Resources;
use hyperswitch::models::{DisputeStage, DisputeStatus, MandateStatus};
use hyperswitch_api::{ApiError, BlockingApiClient, Credentials};
use serde_json::json;
use serial_test::serial;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// The mock server runs on its own runtime so the blocking client is used
// from a plain thread.
fn serve(mock: Mock) -> (tokio::runtime::Runtime, MockServer) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        mock.mount(&server).await;
        server
    });
    (runtime, server)
}

fn client_for(server: &MockServer, raise: bool) -> BlockingApiClient {
    BlockingApiClient::builder(Url::parse(&server.uri()).unwrap())
        .credentials(Credentials::ApiKey("snd_blocking".into()))
        .raise_on_unexpected_status(raise)
        .build_blocking()
        .unwrap()
}

fn clear_env() {
    // SAFETY: every test touching these variables is #[serial]
    unsafe {
        for var in [
            "HYPERSWITCH_BASE_URL",
            "HYPERSWITCH_API_KEY",
            "HYPERSWITCH_ADMIN_API_KEY",
            "HYPERSWITCH_TIMEOUT_SECS",
            "HYPERSWITCH_RAISE_ON_UNEXPECTED_STATUS",
        ] {
            std::env::remove_var(var);
        }
    }
}

#[test]
fn test_blocking_dispute_retrieve() {
    let (_runtime, server) = serve(
        Mock::given(method("GET"))
            .and(path("/disputes/dp_1"))
            .and(header("api-key", "snd_blocking"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "dispute_id": "dp_1",
                "payment_id": "pay_1",
                "attempt_id": "att_1",
                "amount": "6540",
                "currency": "USD",
                "dispute_stage": "pre_dispute",
                "dispute_status": "dispute_opened",
                "connector": "stripe",
                "connector_status": "needs_response",
                "connector_dispute_id": "du_1",
                "created_at": "2024-01-02T03:04:05Z",
                "merchant_connector_id": null
            }))),
    );

    let dispute = client_for(&server, false)
        .disputes()
        .retrieve("dp_1")
        .unwrap()
        .unwrap();

    assert_eq!(dispute.dispute_id, "dp_1");
    assert_eq!(dispute.dispute_stage, DisputeStage::PreDispute);
    assert_eq!(dispute.dispute_status, DisputeStatus::DisputeOpened);
}

#[test]
fn test_blocking_mandate_revoke() {
    let (_runtime, server) = serve(
        Mock::given(method("POST"))
            .and(path("/mandates/revoke/man_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "mandate_id": "man_1",
                "status": "revoked",
                "error_code": null,
                "error_message": null
            }))),
    );

    let revoked = client_for(&server, true)
        .mandates()
        .revoke("man_1")
        .unwrap()
        .unwrap();

    assert_eq!(revoked.mandate_id, "man_1");
    assert_eq!(revoked.status, MandateStatus::Revoked);
}

#[test]
fn test_blocking_undocumented_status_raises() {
    let (_runtime, server) = serve(
        Mock::given(method("GET"))
            .and(path("/refunds/ref_1"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance")),
    );

    assert!(client_for(&server, false).refunds().retrieve("ref_1").unwrap().is_none());

    let err = client_for(&server, true)
        .refunds()
        .retrieve("ref_1")
        .unwrap_err();
    assert!(matches!(err, ApiError::UnexpectedStatus(_)));
    assert_eq!(err.status_code(), Some(503));
}

#[test]
#[serial]
fn test_client_from_env_uses_admin_key() {
    let (_runtime, server) = serve(
        Mock::given(method("GET"))
            .and(path("/accounts/merchant_1"))
            .and(header("api-key", "admin_from_env"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "merchant_id": "merchant_1",
                "merchant_name": "NewAge Retailer",
                "enable_payment_response_hash": true,
                "redirect_to_merchant_with_http_post": false,
                "organization_id": "org_1",
                "is_recon_enabled": false
            })))
            .expect(1),
    );

    clear_env();
    // SAFETY: serialized with the other env tests
    unsafe {
        std::env::set_var("HYPERSWITCH_BASE_URL", server.uri());
        std::env::set_var("HYPERSWITCH_ADMIN_API_KEY", "admin_from_env");
    }

    let client = BlockingApiClient::from_env().unwrap();
    let account = client.accounts().retrieve("merchant_1").unwrap().unwrap();
    clear_env();

    assert_eq!(account.merchant_id, "merchant_1");
    assert!(account.enable_payment_response_hash);
}

#[test]
#[serial]
fn test_client_from_env_rejects_bad_flag() {
    clear_env();
    // SAFETY: serialized with the other env tests
    unsafe {
        std::env::set_var("HYPERSWITCH_RAISE_ON_UNEXPECTED_STATUS", "sometimes");
    }

    let result = BlockingApiClient::from_env();
    clear_env();

    assert!(matches!(result, Err(ApiError::Config(_))));
}
