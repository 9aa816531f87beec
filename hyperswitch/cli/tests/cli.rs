use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENV_VARS: [&str; 5] = [
    "HYPERSWITCH_BASE_URL",
    "HYPERSWITCH_API_KEY",
    "HYPERSWITCH_ADMIN_API_KEY",
    "HYPERSWITCH_TIMEOUT_SECS",
    "HYPERSWITCH_RAISE_ON_UNEXPECTED_STATUS",
];

fn hyperswitch() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("hyperswitch");
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn serve(mock: Mock) -> (tokio::runtime::Runtime, MockServer) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        mock.mount(&server).await;
        server
    });
    (runtime, server)
}

// ============================================================================
// Help
// ============================================================================

#[test]
fn test_help_flag() {
    hyperswitch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ad-hoc calls"))
        .stdout(predicate::str::contains("payments"))
        .stdout(predicate::str::contains("api-keys"));
}

#[test]
fn test_missing_subcommand_fails() {
    hyperswitch().assert().failure();
}

// ============================================================================
// Calls
// ============================================================================

#[test]
fn test_customer_retrieve_prints_json() {
    let (_runtime, server) = serve(
        Mock::given(method("GET"))
            .and(path("/customers/cus_y3oqhf46pyzuxjbcn2giaqnb44"))
            .and(header("api-key", "snd_cli"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "customer_id": "cus_y3oqhf46pyzuxjbcn2giaqnb44",
                "name": "John Doe",
                "created_at": "2024-01-02T03:04:05Z"
            }))),
    );

    hyperswitch()
        .args(["--base-url", &server.uri(), "--api-key", "snd_cli"])
        .args(["customers", "retrieve", "cus_y3oqhf46pyzuxjbcn2giaqnb44"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"customer_id\": \"cus_y3oqhf46pyzuxjbcn2giaqnb44\""))
        .stdout(predicate::str::contains("John Doe"));
}

#[test]
fn test_error_envelope_is_reported() {
    let (_runtime, server) = serve(
        Mock::given(method("DELETE"))
            .and(path("/api_keys/merchant_1/key_gone"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": {
                    "type": "invalid_request",
                    "message": "API Key does not exist",
                    "code": "HE_02"
                }
            }))),
    );

    hyperswitch()
        .env("HYPERSWITCH_BASE_URL", server.uri())
        .env("HYPERSWITCH_ADMIN_API_KEY", "admin_cli")
        .args(["api-keys", "revoke", "merchant_1", "key_gone"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HE_02"))
        .stderr(predicate::str::contains("API Key does not exist"));
}

#[test]
fn test_raise_flag_fails_on_undocumented_status() {
    let (_runtime, server) = serve(
        Mock::given(method("GET"))
            .and(path("/poll/status/poll_1"))
            .respond_with(ResponseTemplate::new(502)),
    );

    hyperswitch()
        .args(["--base-url", &server.uri(), "--raise", "poll", "poll_1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("502"));
}

#[test]
fn test_bad_environment_is_rejected() {
    hyperswitch()
        .env("HYPERSWITCH_TIMEOUT_SECS", "soon")
        .args(["poll", "poll_1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HYPERSWITCH_TIMEOUT_SECS"));
}
