// Central Error Type for the Gateway

use crate::domain::RequestKind;
use thiserror::Error;

/// Gateway-level error type
///
/// Every failure a request can hit is converted exactly once, at the API
/// boundary, into the `error` field of the response envelope. Nothing in
/// this taxonomy is ever fatal to the process.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Unsupported request kind: {0}")]
    UnsupportedKind(String),

    #[error("Missing required parameter '{field}' for {kind}")]
    MissingParameter {
        kind: RequestKind,
        field: &'static str,
    },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using GatewayError
pub type Result<T> = std::result::Result<T, GatewayError>;
