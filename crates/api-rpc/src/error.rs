//! Error Folding
//!
//! The single boundary where gateway failures become wire envelopes.

use crate::types::ResponseEnvelope;
use xrpl_gateway_core::domain::JsonObject;
use xrpl_gateway_core::error::Result;

/// Fold a dispatch outcome into the response envelope.
///
/// Failures are converted here, once, into a human-readable `error` string
/// with an empty `result`. The transport framing stays success-shaped in
/// both cases; callers must check `error`, not the status of the carrying
/// response.
pub fn to_envelope(outcome: Result<JsonObject>) -> ResponseEnvelope {
    match outcome {
        Ok(result) => ResponseEnvelope::success(result),
        Err(e) => {
            tracing::debug!(error = %e, "request degraded to error envelope");
            ResponseEnvelope::failure(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use xrpl_gateway_core::error::GatewayError;

    #[test]
    fn test_ok_outcome_keeps_result() {
        let mut result = JsonObject::new();
        result.insert("engine_result".to_string(), json!("tesSUCCESS"));

        let envelope = to_envelope(Ok(result.clone()));
        assert!(envelope.is_success());
        assert_eq!(envelope.result, result);
    }

    #[test]
    fn test_every_error_variant_degrades_to_envelope() {
        let failures = vec![
            GatewayError::UnsupportedKind("ledger_closed".to_string()),
            GatewayError::Transport("connection refused".to_string()),
            GatewayError::Protocol("Account not found.".to_string()),
            GatewayError::Internal("wiring".to_string()),
        ];

        for failure in failures {
            let message = failure.to_string();
            let envelope = to_envelope(Err(failure));
            assert!(envelope.result.is_empty());
            assert_eq!(envelope.error.as_deref(), Some(message.as_str()));
        }
    }
}
