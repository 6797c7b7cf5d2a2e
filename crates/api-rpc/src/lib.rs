//! JSON-RPC API Layer
//!
//! Inbound side of the gateway: exposes the request/response envelope
//! contract and the health probe over JSON-RPC 2.0.

pub mod error;
pub mod handler;
pub mod rate_limiter;
pub mod server;
pub mod types;

pub use server::RpcServer;
