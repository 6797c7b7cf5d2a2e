//! SDK Wire Types
//!
//! Mirrors of the gateway's envelope contract.

use crate::error::SdkError;
use serde::{Deserialize, Serialize};

/// JSON object, the shape of both request params and ledger results
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Inbound envelope for gateway.request.v1
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEnvelope {
    #[serde(alias = "type")]
    pub kind: String,
    #[serde(default)]
    pub params: JsonObject,
}

/// Outbound envelope from gateway.request.v1
///
/// `error` unset means `result` is the genuine ledger result; `error` set
/// means the request failed and `result` is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub result: JsonObject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseEnvelope {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Collapse the envelope into an ordinary `Result`, mapping a set
    /// `error` field to [`SdkError::Gateway`].
    pub fn into_result(self) -> Result<JsonObject, SdkError> {
        match self.error {
            None => Ok(self.result),
            Some(message) => Err(SdkError::Gateway(message)),
        }
    }
}

/// Result of gateway.health.v1
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
