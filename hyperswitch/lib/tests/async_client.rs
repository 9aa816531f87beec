use hyperswitch::Resources;
use hyperswitch::models::{
    AchBankTransfer, ApiKeyExpiration, Bank, Currency, PayoutCreateRequest, PayoutMethodData,
    PayoutStatus, PayoutType, RoutingKind,
};
use hyperswitch::operations::api_keys::RevokeApiKey;
use hyperswitch::operations::routing::ListRoutingConfigs;
use hyperswitch_api::{ApiClient, ApiError, Credentials, Field, Parsed};
use serde_json::{Value, json};
use tracing_test::traced_test;
use url::Url;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::builder(Url::parse(&server.uri()).unwrap())
        .credentials(Credentials::ApiKey("snd_test".into()))
        .build()
        .unwrap()
}

fn raising_client_for(server: &MockServer) -> ApiClient {
    ApiClient::builder(Url::parse(&server.uri()).unwrap())
        .credentials(Credentials::ApiKey("snd_test".into()))
        .raise_on_unexpected_status(true)
        .build()
        .unwrap()
}

fn api_key(key_id: &str, name: &str) -> Value {
    json!({
        "key_id": key_id,
        "merchant_id": "merchant_1",
        "name": name,
        "description": null,
        "prefix": "snd_0b2",
        "created": "2024-01-02T03:04:05Z",
        "expiration": "never"
    })
}

#[tokio::test]
async fn test_customer_retrieve_hits_customer_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers/cus_y3oqhf46pyzuxjbcn2giaqnb44"))
        .and(header("api-key", "snd_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customer_id": "cus_y3oqhf46pyzuxjbcn2giaqnb44",
            "name": "John Doe",
            "email": null,
            "created_at": "2024-01-02T03:04:05Z",
            "loyalty_tier": "gold"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let customer = client_for(&server)
        .customers()
        .retrieve("cus_y3oqhf46pyzuxjbcn2giaqnb44")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(customer.customer_id, "cus_y3oqhf46pyzuxjbcn2giaqnb44");
    assert_eq!(customer.name, Field::Value("John Doe".to_string()));
    assert_eq!(customer.email, Field::Null);
    assert_eq!(customer.phone, Field::Unset);
    assert_eq!(customer.additional_properties["loyalty_tier"], "gold");
}

#[tokio::test]
async fn test_api_key_list_keeps_server_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api_keys/merchant_1/list"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([
                api_key("key_b", "second created"),
                api_key("key_a", "first created")
            ])),
        )
        .mount(&server)
        .await;

    let keys = client_for(&server)
        .api_keys()
        .list("merchant_1")
        .await
        .unwrap()
        .unwrap();

    let ids: Vec<&str> = keys.iter().map(|k| k.key_id.as_str()).collect();
    assert_eq!(ids, ["key_b", "key_a"]);
    assert_eq!(keys[0].expiration, ApiKeyExpiration::never());
    assert_eq!(keys[1].description, Field::Null);
}

#[tokio::test]
async fn test_revoke_missing_key_is_none_even_when_raising() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api_keys/merchant_1/key_gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "type": "invalid_request",
                "message": "API Key does not exist",
                "code": "HE_02"
            }
        })))
        .mount(&server)
        .await;

    let client = raising_client_for(&server);
    let revoked = client.api_keys().revoke("merchant_1", "key_gone").await.unwrap();
    assert!(revoked.is_none());

    let detailed = client
        .execute_detailed(&RevokeApiKey::new("merchant_1", "key_gone"))
        .await
        .unwrap();
    assert_eq!(detailed.status, 404);
    assert_eq!(detailed.parsed, Parsed::Empty);
    assert!(!detailed.content.is_empty());
}

#[tokio::test]
async fn test_payout_create_omits_unset_bank_city() {
    let server = MockServer::start().await;

    let mut bank = AchBankTransfer::new("000123456789", "110000000");
    bank.bank_name = Field::Value("Stripe Test Bank".into());
    bank.additional_properties
        .insert("extra_field".into(), json!("kept"));

    let payout = PayoutCreateRequest {
        amount: Some(1000),
        currency: Some(Currency::Usd),
        payout_type: Some(PayoutType::Bank),
        payout_method_data: Some(PayoutMethodData::Bank(Bank::Ach(bank))),
        ..Default::default()
    };

    Mock::given(method("POST"))
        .and(path("/payouts/create"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "amount": 1000,
            "currency": "USD",
            "payout_type": "bank",
            "payout_method_data": {
                "bank": {
                    "bank_name": "Stripe Test Bank",
                    "bank_account_number": "000123456789",
                    "bank_routing_number": "110000000",
                    "extra_field": "kept"
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "payout_id": "po_1",
            "merchant_id": "merchant_1",
            "amount": 1000,
            "currency": "USD",
            "entity_type": "Individual",
            "status": "requires_confirmation",
            "profile_id": "pro_1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server)
        .payouts()
        .create(payout)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(created.payout_id, "po_1");
    assert_eq!(created.status, PayoutStatus::RequiresConfirmation);
}

#[tokio::test]
async fn test_routing_list_prefers_dictionary_shape() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/routing"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "merchant_id": "merchant_1",
            "active_id": null,
            "records": []
        })))
        .mount(&server)
        .await;

    let query = ListRoutingConfigs {
        limit: Some(10),
        ..Default::default()
    };
    let routing = client_for(&server).routing().list(query).await.unwrap().unwrap();

    match routing {
        RoutingKind::Config(dictionary) => {
            assert_eq!(dictionary.merchant_id, "merchant_1");
            assert_eq!(dictionary.active_id, Field::Null);
            assert!(dictionary.records.is_empty());
        }
        other => panic!("expected the dictionary shape, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unset_query_values_are_not_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/payments/pay_1"))
        .respond_with(|request: &Request| {
            let keys: Vec<String> =
                request.url.query_pairs().map(|(k, _)| k.into_owned()).collect();
            if keys.is_empty() {
                ResponseTemplate::new(404)
            } else {
                ResponseTemplate::new(500)
            }
        })
        .mount(&server)
        .await;

    let payment = raising_client_for(&server)
        .payments()
        .retrieve("pay_1")
        .await
        .unwrap();
    assert!(payment.is_none());
}

#[tokio::test]
async fn test_undocumented_status_raises_or_yields_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers/cus_1"))
        .respond_with(ResponseTemplate::new(418).set_body_string("teapot"))
        .mount(&server)
        .await;

    let quiet = client_for(&server).customers().retrieve("cus_1").await.unwrap();
    assert!(quiet.is_none());

    let err = raising_client_for(&server)
        .customers()
        .retrieve("cus_1")
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(418));
    match err {
        ApiError::UnexpectedStatus(unexpected) => assert_eq!(&unexpected.content[..], b"teapot"),
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_cancel_payment_has_no_body_model() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/payments/pay_1/cancel"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let cancelled = client_for(&server)
        .payments()
        .cancel("pay_1", Default::default())
        .await
        .unwrap();
    assert_eq!(cancelled, None);
}

#[tokio::test]
#[traced_test]
async fn test_request_span_names_operation() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/poll/status/poll_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "poll_id": "poll_1",
            "status": "completed"
        })))
        .mount(&server)
        .await;

    let status = client_for(&server).poll().status("poll_1").await.unwrap();
    assert!(status.is_some());

    assert!(logs_contain("api_request"));
    assert!(logs_contain("retrieve_poll_status"));
    assert!(logs_contain("response parsed"));
}
