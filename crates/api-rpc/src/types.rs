//! Envelope Wire Types
//!
//! The uniform wrapper used at the system boundary for both directions.

use serde::{Deserialize, Serialize};
use xrpl_gateway_core::domain::JsonObject;

/// gateway.request.v1 - Inbound envelope
///
/// `kind` selects the ledger operation; `type` is accepted as the
/// historical wire name for the same field. `params` defaults to an empty
/// object when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEnvelope {
    #[serde(alias = "type")]
    pub kind: String,
    #[serde(default)]
    pub params: JsonObject,
}

/// gateway.request.v1 - Outbound envelope
///
/// Exactly one of the two states holds: `result` is the genuine ledger
/// result and `error` is absent, or `error` is set and `result` is empty.
/// Callers distinguish success from failure solely by `error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub result: JsonObject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseEnvelope {
    pub fn success(result: JsonObject) -> Self {
        Self {
            result,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            result: JsonObject::new(),
            error: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// gateway.health.v1 - Liveness report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn from_probe(healthy: bool) -> Self {
        Self {
            status: if healthy { "healthy" } else { "unhealthy" }.to_string(),
        }
    }
}
