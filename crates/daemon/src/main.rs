//! XRPL Gateway - Main Entry Point
//!
//! Composition root: wires the ledger adapter into the dispatcher and
//! exposes it over the JSON-RPC API until shutdown.

mod telemetry;

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use xrpl_gateway_api_rpc::{server::RpcServerConfig, RpcServer};
use xrpl_gateway_core::Dispatcher;
use xrpl_gateway_infra_ledger::{JsonRpcLedgerClient, TESTNET_URL};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_LEDGER_TIMEOUT_SECS: u64 = 10;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize logging
    let log_format =
        std::env::var("XRPL_GATEWAY_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("xrpl_gateway=info"))
        .expect("Failed to create env filter");

    match log_format.as_str() {
        "json" => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    info!("XRPL Gateway v{} starting...", VERSION);

    // 1.1. Initialize OpenTelemetry (optional)
    if let Err(e) = telemetry::init_telemetry() {
        tracing::warn!(error = ?e, "Failed to initialize OpenTelemetry (continuing without it)");
    }

    // 2. Load configuration
    let ledger_url =
        std::env::var("XRPL_GATEWAY_LEDGER_URL").unwrap_or_else(|_| TESTNET_URL.to_string());

    let ledger_timeout: u64 = std::env::var("XRPL_GATEWAY_LEDGER_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_LEDGER_TIMEOUT_SECS);

    let rpc_host = std::env::var("XRPL_GATEWAY_RPC_HOST")
        .unwrap_or_else(|_| RpcServerConfig::default().host);

    let rpc_port: u16 = std::env::var("XRPL_GATEWAY_RPC_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(RpcServerConfig::default().port);

    info!(ledger_url = %ledger_url, "Connecting ledger client...");

    // 3. Setup dependencies (DI wiring)
    let ledger = Arc::new(
        JsonRpcLedgerClient::with_timeout(&ledger_url, Duration::from_secs(ledger_timeout))
            .map_err(|e| anyhow::anyhow!("Ledger client setup failed: {}", e))?,
    );
    let dispatcher = Arc::new(Dispatcher::new(ledger));

    // 4. Probe the node once so a dead endpoint is visible at startup
    if dispatcher.healthy().await {
        info!("Ledger node reachable");
    } else {
        tracing::warn!(ledger_url = %ledger_url, "Ledger node unreachable at startup (requests will degrade to error envelopes)");
    }

    // 5. Start JSON-RPC server
    info!("Starting JSON-RPC server...");
    let rpc_config = RpcServerConfig {
        host: rpc_host,
        port: rpc_port,
    };
    let (rpc_addr, rpc_handle) = RpcServer::new(rpc_config, dispatcher)
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("RPC server start failed: {}", e))?;

    info!(addr = %rpc_addr, "Gateway ready");
    info!("Press Ctrl+C to shutdown");

    // 6. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 7. Graceful shutdown
    rpc_handle
        .stop()
        .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;

    info!("Shutdown complete.");

    Ok(())
}
