// XRPL JSON-RPC Client (LedgerClient adapter)

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use xrpl_gateway_core::domain::JsonObject;
use xrpl_gateway_core::error::{GatewayError, Result};
use xrpl_gateway_core::port::LedgerClient;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Wire request in the rippled HTTP JSON-RPC dialect.
///
/// rippled predates JSON-RPC 2.0: no `jsonrpc` version field, no `id`, and
/// `params` is an array holding a single argument object.
#[derive(Serialize)]
struct LedgerRpcRequest<'a> {
    method: &'a str,
    params: [&'a JsonObject; 1],
}

/// Stateless adapter issuing one ledger operation per call.
///
/// The inner `reqwest::Client` pools connections and is safe for concurrent
/// use, so a single instance serves every in-flight request. A per-request
/// timeout is the only transport policy applied; there is no retry.
pub struct JsonRpcLedgerClient {
    http: reqwest::Client,
    endpoint: String,
}

impl JsonRpcLedgerClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LedgerClient for JsonRpcLedgerClient {
    async fn execute(&self, operation: &str, arguments: JsonObject) -> Result<JsonObject> {
        let request = LedgerRpcRequest {
            method: operation,
            params: [&arguments],
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(format!("Failed to reach ledger node: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Transport(format!(
                "Ledger node returned HTTP {}",
                status
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::Protocol(format!("Unparseable ledger response: {}", e)))?;

        tracing::trace!(method = operation, "ledger call completed");

        unwrap_reply(body)
    }
}

/// Extract the operation result from a rippled reply.
///
/// Replies carry the result under a top-level `result` key; node-side
/// failures come back in-band as `result.status == "error"` with the
/// detail in `error_message` (human text) or `error` (token).
fn unwrap_reply(body: serde_json::Value) -> Result<JsonObject> {
    let result = match body.get("result") {
        Some(serde_json::Value::Object(map)) => map.clone(),
        Some(other) => {
            return Err(GatewayError::Protocol(format!(
                "Ledger result is not an object: {}",
                other
            )))
        }
        None => {
            return Err(GatewayError::Protocol(
                "Ledger response carried no result".to_string(),
            ))
        }
    };

    if result.get("status").and_then(|s| s.as_str()) == Some("error") {
        let message = result
            .get("error_message")
            .or_else(|| result.get("error"))
            .and_then(|v| v.as_str())
            .unwrap_or("Ledger node reported an unspecified error");
        return Err(GatewayError::Protocol(message.to_string()));
    }

    Ok(result)
}
