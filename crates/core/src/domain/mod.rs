// Domain Layer - Request kinds and the operation table

pub mod kind;
pub mod operation;

// Re-exports
pub use kind::RequestKind;
pub use operation::{descriptor_for, FieldMapping, OperationDescriptor, RemoteOperation, OPERATIONS};

/// JSON object, the shape of both request params and ledger results
pub type JsonObject = serde_json::Map<String, serde_json::Value>;
