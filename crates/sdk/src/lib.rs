//! XRPL Gateway SDK
//!
//! High-level client for the gateway's JSON-RPC API. Carries its own copy
//! of the wire types so downstream users don't link the server crates.

pub mod client;
pub mod error;
pub mod types;

pub use client::GatewayClient;
pub use error::{Result, SdkError};
pub use types::{HealthResponse, JsonObject, RequestEnvelope, ResponseEnvelope};
