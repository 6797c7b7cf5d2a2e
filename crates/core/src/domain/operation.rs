// Operation Table - kind -> remote method + field mappings

use crate::domain::{JsonObject, RequestKind};
use crate::error::{GatewayError, Result};

/// One envelope field forwarded to the remote call, possibly under a
/// different argument name (`transaction_info` reads `hash` but the ledger
/// method wants `transaction`).
#[derive(Debug, Clone, Copy)]
pub struct FieldMapping {
    /// Field name read from the request envelope's `params`
    pub param: &'static str,
    /// Argument name the ledger method expects
    pub argument: &'static str,
}

const fn field(param: &'static str, argument: &'static str) -> FieldMapping {
    FieldMapping { param, argument }
}

/// Static description of one supported operation: which ledger method it
/// translates to and which envelope fields it reads. No field outside
/// `fields` is ever forwarded, regardless of what else `params` carries.
#[derive(Debug, Clone, Copy)]
pub struct OperationDescriptor {
    pub kind: RequestKind,
    /// Method name in the ledger node's JSON-RPC API
    pub method: &'static str,
    pub fields: &'static [FieldMapping],
}

/// The full operation table. Immutable, shared by every in-flight request.
pub static OPERATIONS: [OperationDescriptor; 8] = [
    OperationDescriptor {
        kind: RequestKind::AccountInfo,
        method: "account_info",
        fields: &[field("account", "account")],
    },
    OperationDescriptor {
        kind: RequestKind::AccountLines,
        method: "account_lines",
        fields: &[field("account", "account")],
    },
    OperationDescriptor {
        kind: RequestKind::AccountNfts,
        method: "account_nfts",
        fields: &[field("account", "account")],
    },
    OperationDescriptor {
        kind: RequestKind::AccountTransactions,
        method: "account_tx",
        fields: &[field("account", "account")],
    },
    OperationDescriptor {
        kind: RequestKind::ServerInfo,
        method: "server_info",
        fields: &[],
    },
    OperationDescriptor {
        kind: RequestKind::SubmitTransaction,
        method: "submit",
        fields: &[field("tx_blob", "tx_blob")],
    },
    OperationDescriptor {
        kind: RequestKind::TransactionInfo,
        method: "tx",
        fields: &[field("hash", "transaction")],
    },
    OperationDescriptor {
        kind: RequestKind::BookOffers,
        method: "book_offers",
        fields: &[field("taker_gets", "taker_gets"), field("taker_pays", "taker_pays")],
    },
];

/// Look up the descriptor for a kind. Total over [`RequestKind`].
pub fn descriptor_for(kind: RequestKind) -> &'static OperationDescriptor {
    OPERATIONS
        .iter()
        .find(|d| d.kind == kind)
        .expect("operation table covers every RequestKind")
}

/// A fully-formed remote request, owned transiently for one call.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteOperation {
    pub method: &'static str,
    pub arguments: JsonObject,
}

impl OperationDescriptor {
    /// Bind concrete request params to this descriptor, producing the
    /// remote call's argument set.
    ///
    /// Required fields are checked up front: a missing field fails with
    /// [`GatewayError::MissingParameter`] before any remote call is issued.
    /// The same policy applies to every kind.
    pub fn bind(&self, params: &JsonObject) -> Result<RemoteOperation> {
        let mut arguments = JsonObject::new();
        for mapping in self.fields {
            let value = params
                .get(mapping.param)
                .ok_or(GatewayError::MissingParameter {
                    kind: self.kind,
                    field: mapping.param,
                })?;
            arguments.insert(mapping.argument.to_string(), value.clone());
        }
        Ok(RemoteOperation {
            method: self.method,
            arguments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: serde_json::Value) -> JsonObject {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_table_covers_every_kind_once() {
        for kind in RequestKind::ALL {
            let hits = OPERATIONS.iter().filter(|d| d.kind == kind).count();
            assert_eq!(hits, 1, "kind {} must have exactly one entry", kind);
        }
        assert_eq!(descriptor_for(RequestKind::SubmitTransaction).method, "submit");
        assert_eq!(descriptor_for(RequestKind::AccountTransactions).method, "account_tx");
        assert_eq!(descriptor_for(RequestKind::TransactionInfo).method, "tx");
    }

    #[test]
    fn test_bind_forwards_only_listed_fields() {
        let descriptor = descriptor_for(RequestKind::AccountInfo);
        let params = obj(json!({
            "account": "rAlice123",
            "ledger_index": "validated",
            "strict": true
        }));

        let op = descriptor.bind(&params).unwrap();
        assert_eq!(op.method, "account_info");
        assert_eq!(op.arguments.len(), 1);
        assert_eq!(op.arguments["account"], json!("rAlice123"));
    }

    #[test]
    fn test_bind_renames_hash_to_transaction() {
        let descriptor = descriptor_for(RequestKind::TransactionInfo);
        let params = obj(json!({"hash": "E08D6E9754025BA2534A78707605E0601F03ACE063687A0CA1BDDACFCD1698C7"}));

        let op = descriptor.bind(&params).unwrap();
        assert_eq!(op.method, "tx");
        assert!(op.arguments.get("hash").is_none());
        assert_eq!(
            op.arguments["transaction"],
            json!("E08D6E9754025BA2534A78707605E0601F03ACE063687A0CA1BDDACFCD1698C7")
        );
    }

    #[test]
    fn test_bind_server_info_ignores_params() {
        let descriptor = descriptor_for(RequestKind::ServerInfo);

        let empty = descriptor.bind(&JsonObject::new()).unwrap();
        let noisy = descriptor.bind(&obj(json!({"x": 1}))).unwrap();

        assert_eq!(empty, noisy);
        assert!(empty.arguments.is_empty());
    }

    #[test]
    fn test_bind_missing_field_names_the_field() {
        let descriptor = descriptor_for(RequestKind::BookOffers);
        let params = obj(json!({"taker_gets": {"currency": "XRP"}}));

        let err = descriptor.bind(&params).unwrap_err();
        match err {
            GatewayError::MissingParameter { kind, field } => {
                assert_eq!(kind, RequestKind::BookOffers);
                assert_eq!(field, "taker_pays");
            }
            other => panic!("expected MissingParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_bind_book_offers_forwards_both_sides_unchanged() {
        let descriptor = descriptor_for(RequestKind::BookOffers);
        let params = obj(json!({
            "taker_gets": {"currency": "XRP"},
            "taker_pays": {"currency": "USD", "issuer": "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B"}
        }));

        let op = descriptor.bind(&params).unwrap();
        assert_eq!(op.arguments["taker_gets"], params["taker_gets"]);
        assert_eq!(op.arguments["taker_pays"], params["taker_pays"]);
    }
}
