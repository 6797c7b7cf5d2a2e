//! Gateway Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{HealthResponse, JsonObject, ResponseEnvelope};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ObjectParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use serde_json::json;
use std::time::Duration;

/// XRPL Gateway client
///
/// Thin wrapper over the gateway's JSON-RPC API. All ledger results come
/// back as raw JSON objects inside a [`ResponseEnvelope`]; the SDK never
/// interprets them.
///
/// # Example
///
/// ```no_run
/// use xrpl_gateway_sdk::GatewayClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GatewayClient::connect("http://127.0.0.1:8000").await?;
/// let envelope = client.server_info().await?;
/// # Ok(())
/// # }
/// ```
pub struct GatewayClient {
    client: HttpClient,
}

impl GatewayClient {
    /// Connect to a gateway daemon
    ///
    /// # Arguments
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:8000`)
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(Duration::from_secs(30))
            .build(url)
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// Send a raw `(kind, params)` envelope
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use xrpl_gateway_sdk::GatewayClient;
    /// # use serde_json::json;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = GatewayClient::connect("http://127.0.0.1:8000").await?;
    /// let params = json!({"account": "rAlice123"}).as_object().unwrap().clone();
    /// let envelope = client.request("account_info", params).await?;
    /// match envelope.error {
    ///     None => println!("{:?}", envelope.result),
    ///     Some(e) => eprintln!("request failed: {}", e),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn request(
        &self,
        kind: impl Into<String>,
        params: JsonObject,
    ) -> Result<ResponseEnvelope> {
        // By-name params: the server decodes the envelope from the params
        // object itself.
        let mut envelope = ObjectParams::new();
        envelope.insert("kind", kind.into())?;
        envelope.insert("params", params)?;

        let response: ResponseEnvelope = self
            .client
            .request("gateway.request.v1", envelope)
            .await?;

        Ok(response)
    }

    /// Fetch an account summary
    pub async fn account_info(&self, account: impl Into<String>) -> Result<ResponseEnvelope> {
        self.request("account_info", single("account", account.into()))
            .await
    }

    /// Fetch an account's trust lines
    pub async fn account_lines(&self, account: impl Into<String>) -> Result<ResponseEnvelope> {
        self.request("account_lines", single("account", account.into()))
            .await
    }

    /// Fetch an account's NFTs
    pub async fn account_nfts(&self, account: impl Into<String>) -> Result<ResponseEnvelope> {
        self.request("account_nfts", single("account", account.into()))
            .await
    }

    /// Fetch an account's transaction history
    pub async fn account_transactions(
        &self,
        account: impl Into<String>,
    ) -> Result<ResponseEnvelope> {
        self.request("account_transactions", single("account", account.into()))
            .await
    }

    /// Fetch node/server status
    pub async fn server_info(&self) -> Result<ResponseEnvelope> {
        self.request("server_info", JsonObject::new()).await
    }

    /// Submit a pre-signed transaction blob
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use xrpl_gateway_sdk::GatewayClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = GatewayClient::connect("http://127.0.0.1:8000").await?;
    /// let outcome = client.submit_transaction("1200002280000000...").await?;
    /// println!("engine_result: {}", outcome.result["engine_result"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn submit_transaction(
        &self,
        tx_blob: impl Into<String>,
    ) -> Result<ResponseEnvelope> {
        self.request("submit_transaction", single("tx_blob", tx_blob.into()))
            .await
    }

    /// Fetch a transaction by hash
    pub async fn transaction_info(&self, hash: impl Into<String>) -> Result<ResponseEnvelope> {
        self.request("transaction_info", single("hash", hash.into()))
            .await
    }

    /// Fetch order-book offers for a currency pair
    ///
    /// Both sides use the ledger's currency shape: `{"currency": "XRP"}` or
    /// `{"currency": "USD", "issuer": "r..."}`. Passed through opaquely.
    pub async fn book_offers(
        &self,
        taker_gets: serde_json::Value,
        taker_pays: serde_json::Value,
    ) -> Result<ResponseEnvelope> {
        let mut params = JsonObject::new();
        params.insert("taker_gets".to_string(), taker_gets);
        params.insert("taker_pays".to_string(), taker_pays);
        self.request("book_offers", params).await
    }

    /// Ask the gateway whether its ledger node answers a liveness probe
    pub async fn health(&self) -> Result<HealthResponse> {
        let response: HealthResponse = self
            .client
            .request("gateway.health.v1", rpc_params![])
            .await?;

        Ok(response)
    }
}

fn single(key: &str, value: String) -> JsonObject {
    let mut params = JsonObject::new();
    params.insert(key.to_string(), json!(value));
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_builds_one_entry() {
        let params = single("account", "rAlice123".to_string());
        assert_eq!(params.len(), 1);
        assert_eq!(params["account"], serde_json::json!("rAlice123"));
    }
}
