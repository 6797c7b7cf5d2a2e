//! XRPL JSON-RPC Adapter
//!
//! Outbound side of the gateway: implements the core `LedgerClient` port
//! against a rippled-compatible HTTP JSON-RPC endpoint.

pub mod client;
pub mod endpoint;

pub use client::JsonRpcLedgerClient;
pub use endpoint::{MAINNET_URL, TESTNET_URL};
