//! XRPL Gateway CLI - Command-line client for the gateway daemon

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8000";

#[derive(Parser)]
#[command(name = "xrplgw")]
#[command(about = "XRPL Gateway CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Gateway RPC URL
    #[arg(long, env = "XRPL_GATEWAY_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch an account summary
    AccountInfo {
        /// Account address (r...)
        account: String,
    },

    /// Fetch an account's trust lines
    AccountLines {
        /// Account address (r...)
        account: String,
    },

    /// Fetch an account's NFTs
    AccountNfts {
        /// Account address (r...)
        account: String,
    },

    /// Fetch an account's transaction history
    AccountTransactions {
        /// Account address (r...)
        account: String,
    },

    /// Fetch node/server status
    ServerInfo,

    /// Submit a pre-signed transaction blob
    Submit {
        /// Signed transaction blob (hex)
        tx_blob: String,
    },

    /// Fetch a transaction by hash
    TransactionInfo {
        /// Transaction hash
        hash: String,
    },

    /// Fetch order-book offers for a currency pair
    BookOffers {
        /// Taker-gets side: a currency code (XRP) or a JSON object
        /// ({"currency":"USD","issuer":"r..."})
        taker_gets: String,

        /// Taker-pays side, same shapes as taker-gets
        taker_pays: String,
    },

    /// Probe gateway health
    Health,

    /// Send a raw (kind, params) envelope
    Request {
        /// Request kind (e.g. account_info)
        kind: String,

        /// Params as a JSON object string
        #[arg(default_value = "{}")]
        params: String,
    },
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: serde_json::Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: u64,
    result: Option<serde_json::Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

async fn call_rpc(url: &str, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to gateway")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

/// Send one envelope and render the outcome.
///
/// The gateway answers with success framing either way; the error, if any,
/// is inside the envelope.
async fn send_envelope(url: &str, kind: &str, params: serde_json::Value) -> Result<()> {
    // By-name params: the envelope object is the JSON-RPC params
    let envelope = json!({ "kind": kind, "params": params });
    let result = call_rpc(url, "gateway.request.v1", envelope).await?;

    match result.get("error").and_then(|e| e.as_str()) {
        Some(message) => {
            println!("{} {}", "✗".red().bold(), message.red());
            std::process::exit(1);
        }
        None => {
            println!("{} {}", "✓".green().bold(), kind.green());
            let payload = result.get("result").cloned().unwrap_or(json!({}));
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}

/// Accept either a bare currency code or a full JSON currency object.
fn parse_currency(side: &str) -> Result<serde_json::Value> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(side) {
        if value.is_object() {
            return Ok(value);
        }
    }
    if side.chars().all(|c| c.is_ascii_alphanumeric()) && !side.is_empty() {
        return Ok(json!({ "currency": side }));
    }
    anyhow::bail!("Invalid currency '{}': expected a code like XRP or a JSON object", side)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::AccountInfo { account } => {
            send_envelope(&cli.rpc_url, "account_info", json!({ "account": account })).await?;
        }

        Commands::AccountLines { account } => {
            send_envelope(&cli.rpc_url, "account_lines", json!({ "account": account })).await?;
        }

        Commands::AccountNfts { account } => {
            send_envelope(&cli.rpc_url, "account_nfts", json!({ "account": account })).await?;
        }

        Commands::AccountTransactions { account } => {
            send_envelope(
                &cli.rpc_url,
                "account_transactions",
                json!({ "account": account }),
            )
            .await?;
        }

        Commands::ServerInfo => {
            send_envelope(&cli.rpc_url, "server_info", json!({})).await?;
        }

        Commands::Submit { tx_blob } => {
            send_envelope(
                &cli.rpc_url,
                "submit_transaction",
                json!({ "tx_blob": tx_blob }),
            )
            .await?;
        }

        Commands::TransactionInfo { hash } => {
            send_envelope(&cli.rpc_url, "transaction_info", json!({ "hash": hash })).await?;
        }

        Commands::BookOffers {
            taker_gets,
            taker_pays,
        } => {
            let params = json!({
                "taker_gets": parse_currency(&taker_gets)?,
                "taker_pays": parse_currency(&taker_pays)?,
            });
            send_envelope(&cli.rpc_url, "book_offers", params).await?;
        }

        Commands::Health => {
            let result = call_rpc(&cli.rpc_url, "gateway.health.v1", json!([])).await?;
            let status = result
                .get("status")
                .and_then(|s| s.as_str())
                .unwrap_or("unknown");

            if status == "healthy" {
                println!("{} {}", "✓".green().bold(), "healthy".green());
            } else {
                println!("{} {}", "✗".red().bold(), status.red());
                std::process::exit(1);
            }
        }

        Commands::Request { kind, params } => {
            let params: serde_json::Value =
                serde_json::from_str(&params).context("Invalid JSON params")?;
            anyhow::ensure!(params.is_object(), "params must be a JSON object");
            send_envelope(&cli.rpc_url, &kind, params).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency_code() {
        assert_eq!(parse_currency("XRP").unwrap(), json!({"currency": "XRP"}));
    }

    #[test]
    fn test_parse_currency_object() {
        let side = r#"{"currency":"USD","issuer":"rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B"}"#;
        let parsed = parse_currency(side).unwrap();
        assert_eq!(parsed["currency"], json!("USD"));
        assert_eq!(parsed["issuer"], json!("rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B"));
    }

    #[test]
    fn test_parse_currency_rejects_garbage() {
        assert!(parse_currency("").is_err());
        assert!(parse_currency("not a currency!").is_err());
    }
}
