//! End-to-end round trip: SDK client -> JSON-RPC server -> dispatcher ->
//! mocked ledger port, over a real localhost socket.

use async_trait::async_trait;
use mockall::mock;
use serde_json::json;
use std::sync::Arc;
use xrpl_gateway_api_rpc::server::{RpcServer, RpcServerConfig};
use xrpl_gateway_core::domain::JsonObject;
use xrpl_gateway_core::error::{GatewayError, Result as GatewayResult};
use xrpl_gateway_core::port::LedgerClient;
use xrpl_gateway_core::Dispatcher;
use xrpl_gateway_sdk::{GatewayClient, SdkError};

mock! {
    pub Ledger {}

    #[async_trait]
    impl LedgerClient for Ledger {
        async fn execute(&self, operation: &str, arguments: JsonObject) -> GatewayResult<JsonObject>;
    }
}

fn obj(value: serde_json::Value) -> JsonObject {
    value.as_object().unwrap().clone()
}

async fn start_gateway(mock: MockLedger) -> (String, jsonrpsee::server::ServerHandle) {
    let dispatcher = Arc::new(Dispatcher::new(Arc::new(mock)));
    let config = RpcServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0, // let the OS pick a free port
    };
    let (addr, handle) = RpcServer::new(config, dispatcher).start().await.unwrap();
    (format!("http://{}", addr), handle)
}

#[tokio::test]
async fn request_and_health_round_trip() {
    let mut mock = MockLedger::new();
    // server_info serves both the explicit request and the health probe
    mock.expect_execute()
        .withf(|operation, _| operation == "server_info")
        .returning(|_, _| Ok(obj(json!({"info": {"server_state": "full"}}))));
    mock.expect_execute()
        .withf(|operation, _| operation == "account_info")
        .returning(|_, _| {
            Ok(obj(json!({
                "account_data": {"Account": "rAlice123", "Balance": "1000000"}
            })))
        });

    let (url, handle) = start_gateway(mock).await;
    let client = GatewayClient::connect(&url).await.unwrap();

    // Success envelope with the raw ledger result
    let envelope = client.server_info().await.unwrap();
    assert!(envelope.is_success());
    assert_eq!(envelope.result["info"]["server_state"], json!("full"));

    // Typed helper forwards the account and unwraps nothing
    let envelope = client.account_info("rAlice123").await.unwrap();
    let result = envelope.into_result().unwrap();
    assert_eq!(result["account_data"]["Balance"], json!("1000000"));

    // Health rides the same dispatch path
    let health = client.health().await.unwrap();
    assert!(health.is_healthy());

    handle.stop().unwrap();
    handle.stopped().await;
}

#[tokio::test]
async fn logical_failures_stay_success_framed() {
    // No ledger expectations: none of these requests may reach the port
    let (url, handle) = start_gateway(MockLedger::new()).await;
    let client = GatewayClient::connect(&url).await.unwrap();

    // Unknown kind: JSON-RPC call succeeds, envelope carries the error
    let envelope = client.request("ledger_entry", JsonObject::new()).await.unwrap();
    assert!(envelope.result.is_empty());
    assert!(envelope
        .error
        .as_deref()
        .unwrap()
        .contains("Unsupported request kind: ledger_entry"));

    // Missing parameter: same framing
    let envelope = client.request("account_info", JsonObject::new()).await.unwrap();
    assert!(!envelope.is_success());
    assert!(envelope.error.as_deref().unwrap().contains("account"));

    // into_result maps the envelope error to an SdkError
    let envelope = client.request("transaction_info", JsonObject::new()).await.unwrap();
    match envelope.into_result() {
        Err(SdkError::Gateway(message)) => assert!(message.contains("hash")),
        other => panic!("expected Gateway error, got {:?}", other),
    }

    handle.stop().unwrap();
    handle.stopped().await;
}

#[tokio::test]
async fn health_reports_unhealthy_when_node_is_down() {
    let mut mock = MockLedger::new();
    mock.expect_execute()
        .returning(|_, _| Err(GatewayError::Transport("connection refused".to_string())));

    let (url, handle) = start_gateway(mock).await;
    let client = GatewayClient::connect(&url).await.unwrap();

    let health = client.health().await.unwrap();
    assert!(!health.is_healthy());
    assert_eq!(health.status, "unhealthy");

    handle.stop().unwrap();
    handle.stopped().await;
}
