// Ledger Client Port (Interface)

use crate::domain::JsonObject;
use crate::error::Result;
use async_trait::async_trait;

/// The gateway's sole point of contact with ledger state.
///
/// One call is one independent round trip against the remote node; the
/// implementation must be safe for concurrent use by many in-flight
/// requests. Transport timeouts are the implementation's responsibility and
/// surface as [`crate::GatewayError::Transport`]; a reply that cannot be
/// read as a result for the requested operation surfaces as
/// [`crate::GatewayError::Protocol`].
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Issue one named operation with its argument set and return the
    /// node's raw result mapping, untouched.
    async fn execute(&self, operation: &str, arguments: JsonObject) -> Result<JsonObject>;
}
