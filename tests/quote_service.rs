//! Bridging service client tests against a mock HTTP server.

use batch_bridge::config::{ApiKey, QuoteServiceConfig};
use batch_bridge::quote::{
    resolve_chain_pair, BridgeService, QuoteClient, QuoteError, QuoteId, QuoteRequest,
    SessionToken,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

mod common;
use common::MockRequest;

fn client_for(addr: SocketAddr) -> QuoteClient {
    let config = QuoteServiceConfig {
        base_url: format!("http://{}/", addr),
        api_key: ApiKey::new("test-key"),
        request_timeout_secs: 5,
        ..Default::default()
    };
    QuoteClient::new(&config).unwrap()
}

fn quote_request() -> QuoteRequest {
    let address = common::ADDRESS_A.parse().unwrap();
    QuoteRequest {
        token: "BNB".to_string(),
        chain_in: "OPBNB".to_string(),
        chain_out: "BINANCE".to_string(),
        amount: "0.99000000".to_string(),
        depositor: address,
        recipient: address,
    }
}

#[tokio::test]
async fn test_authenticate_success() {
    let seen: Arc<Mutex<Option<MockRequest>>> = Arc::new(Mutex::new(None));
    let store = seen.clone();
    let addr = common::start_mock_server(move |request| {
        *store.lock().unwrap() = Some(request);
        (200, json!({ "jwt": "session-jwt" }).to_string())
    })
    .await;

    let session = client_for(addr)
        .authenticate(&ApiKey::new("test-key"))
        .await
        .unwrap();
    assert_eq!(session.as_str(), "session-jwt");

    let request = seen.lock().unwrap().clone().unwrap();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/authentication/auth/apiKey");
    assert_eq!(request.json(), json!({ "apiKey": "test-key" }));
}

#[tokio::test]
async fn test_authenticate_rejected() {
    let addr = common::start_mock_server(|_| (401, json!({ "message": "bad key" }).to_string())).await;

    let err = client_for(addr)
        .authenticate(&ApiKey::new("wrong"))
        .await
        .unwrap_err();
    assert!(matches!(err, QuoteError::Authentication(_)));
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn test_authenticate_error_body() {
    let addr =
        common::start_mock_server(|_| (200, json!({ "error": "key revoked" }).to_string())).await;

    let err = client_for(addr)
        .authenticate(&ApiKey::new("test-key"))
        .await
        .unwrap_err();
    assert!(matches!(err, QuoteError::Authentication(ref m) if m == "key revoked"));
}

#[tokio::test]
async fn test_fetch_configs_and_resolve() {
    let addr = common::start_mock_server(|request| {
        assert_eq!(request.path, "/bridge/configs");
        let body = r#"{"ETHEREUM":{"chainId":1},"OPBNB":{"chainId":204},"BINANCE":{"chainId":56}}"#;
        (200, body.to_string())
    })
    .await;

    let catalog = client_for(addr).fetch_bridge_configs().await.unwrap();
    let keys: Vec<&String> = catalog.keys().collect();
    assert_eq!(keys, ["ETHEREUM", "OPBNB", "BINANCE"]);

    let pair = resolve_chain_pair(&catalog, "opbnb", "binance").unwrap();
    assert_eq!(pair.chain_in, "OPBNB");
    assert_eq!(pair.chain_out, "BINANCE");
}

#[tokio::test]
async fn test_fetch_configs_server_error() {
    let addr = common::start_mock_server(|_| (500, "{}".to_string())).await;

    let err = client_for(addr).fetch_bridge_configs().await.unwrap_err();
    assert!(matches!(err, QuoteError::ConfigFetch(_)));
}

#[tokio::test]
async fn test_request_quote() {
    let seen: Arc<Mutex<Option<MockRequest>>> = Arc::new(Mutex::new(None));
    let store = seen.clone();
    let addr = common::start_mock_server(move |request| {
        *store.lock().unwrap() = Some(request);
        (200, json!({ "quoteId": "6a7b8c" }).to_string())
    })
    .await;

    let quote_id = client_for(addr)
        .request_quote(&SessionToken::new("session-jwt"), &quote_request())
        .await
        .unwrap();
    assert_eq!(quote_id, QuoteId("6a7b8c".to_string()));

    let request = seen.lock().unwrap().clone().unwrap();
    assert_eq!(request.path, "/bridge/quote/user");
    assert_eq!(request.header("authorization"), Some("session-jwt"));

    let body = request.json();
    assert_eq!(body["token"], "BNB");
    assert_eq!(body["chainIn"], "OPBNB");
    assert_eq!(body["chainOut"], "BINANCE");
    assert_eq!(body["amount"], "0.99000000");
    assert_eq!(body["mode"], "pay");
    assert_eq!(body["amountNative"], "0");
    assert_eq!(
        body["depositor"].as_str().unwrap().to_lowercase(),
        common::ADDRESS_A
    );
    assert_eq!(body["depositor"], body["recipient"]);
}

#[tokio::test]
async fn test_request_quote_rejected() {
    let addr = common::start_mock_server(|_| {
        (200, json!({ "error": "insufficient liquidity" }).to_string())
    })
    .await;

    let err = client_for(addr)
        .request_quote(&SessionToken::new("session-jwt"), &quote_request())
        .await
        .unwrap_err();
    assert!(matches!(err, QuoteError::Quote(ref m) if m == "insufficient liquidity"));
}

#[tokio::test]
async fn test_request_quote_without_id() {
    let addr = common::start_mock_server(|_| (200, json!({ "status": "ok" }).to_string())).await;

    let err = client_for(addr)
        .request_quote(&SessionToken::new("session-jwt"), &quote_request())
        .await
        .unwrap_err();
    assert!(matches!(err, QuoteError::Quote(_)));
}

#[tokio::test]
async fn test_commit_quote() {
    let seen: Arc<Mutex<Option<MockRequest>>> = Arc::new(Mutex::new(None));
    let store = seen.clone();
    let addr = common::start_mock_server(move |request| {
        *store.lock().unwrap() = Some(request);
        (200, json!({ "quoteId": "6a7b8c", "committed": true }).to_string())
    })
    .await;

    let receipt = client_for(addr)
        .commit_quote(&SessionToken::new("session-jwt"), &QuoteId("6a7b8c".to_string()))
        .await
        .unwrap();
    assert_eq!(receipt.0["committed"], true);

    let request = seen.lock().unwrap().clone().unwrap();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/bridge/quote/commit/6a7b8c");
    assert_eq!(request.header("authorization"), Some("session-jwt"));
}

#[tokio::test]
async fn test_commit_quote_expired() {
    let addr =
        common::start_mock_server(|_| (200, json!({ "error": "quote expired" }).to_string())).await;

    let err = client_for(addr)
        .commit_quote(&SessionToken::new("session-jwt"), &QuoteId("6a7b8c".to_string()))
        .await
        .unwrap_err();
    assert!(matches!(err, QuoteError::Commit(ref m) if m == "quote expired"));
}
