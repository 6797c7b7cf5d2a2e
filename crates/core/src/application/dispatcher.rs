// Dispatch Use Case

use crate::domain::{descriptor_for, JsonObject, OperationDescriptor, RequestKind};
use crate::error::Result;
use crate::port::LedgerClient;
use std::collections::HashMap;
use std::sync::Arc;

/// Translates `(kind, params)` pairs into remote ledger calls.
///
/// The descriptor table is built once at construction and never mutated;
/// the dispatcher is shared via `Arc` across all in-flight requests without
/// locking. The injected [`LedgerClient`] is the only side effect.
pub struct Dispatcher {
    table: HashMap<RequestKind, &'static OperationDescriptor>,
    ledger: Arc<dyn LedgerClient>,
}

impl Dispatcher {
    pub fn new(ledger: Arc<dyn LedgerClient>) -> Self {
        let table = RequestKind::ALL
            .into_iter()
            .map(|kind| (kind, descriptor_for(kind)))
            .collect();

        Self { table, ledger }
    }

    /// Handle one request: look up `kind`, bind `params`, issue the remote
    /// call, and return the node's raw result.
    ///
    /// Fails with `UnsupportedKind` for a kind outside the table,
    /// `MissingParameter` when a required field is absent, and otherwise
    /// propagates whatever the ledger client reports. Never panics on bad
    /// input; the caller folds the error into the response envelope.
    pub async fn handle(&self, kind: &str, params: &JsonObject) -> Result<JsonObject> {
        let kind: RequestKind = kind.parse()?;

        // Lookup is total once the kind parsed; the table mirrors the enum.
        let descriptor = self.table[&kind];
        let operation = descriptor.bind(params)?;

        tracing::debug!(
            kind = %kind,
            method = operation.method,
            "dispatching ledger operation"
        );

        self.ledger.execute(operation.method, operation.arguments).await
    }

    /// Liveness probe: a plain `server_info` round trip, reported as a
    /// boolean. Reuses the ordinary dispatch path.
    pub async fn healthy(&self) -> bool {
        match self.handle("server_info", &JsonObject::new()).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "health probe failed");
                false
            }
        }
    }
}
