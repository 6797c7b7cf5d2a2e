// Request Kind - the closed set of supported operations

use crate::error::GatewayError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The string tag selecting which remote ledger operation a request maps to.
///
/// The set is closed: supporting a new operation means adding a variant and
/// a table entry in [`crate::domain::operation`], not generic extensibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    AccountInfo,
    AccountLines,
    AccountNfts,
    AccountTransactions,
    ServerInfo,
    SubmitTransaction,
    TransactionInfo,
    BookOffers,
}

impl RequestKind {
    /// All supported kinds, in table order
    pub const ALL: [RequestKind; 8] = [
        RequestKind::AccountInfo,
        RequestKind::AccountLines,
        RequestKind::AccountNfts,
        RequestKind::AccountTransactions,
        RequestKind::ServerInfo,
        RequestKind::SubmitTransaction,
        RequestKind::TransactionInfo,
        RequestKind::BookOffers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::AccountInfo => "account_info",
            RequestKind::AccountLines => "account_lines",
            RequestKind::AccountNfts => "account_nfts",
            RequestKind::AccountTransactions => "account_transactions",
            RequestKind::ServerInfo => "server_info",
            RequestKind::SubmitTransaction => "submit_transaction",
            RequestKind::TransactionInfo => "transaction_info",
            RequestKind::BookOffers => "book_offers",
        }
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestKind {
    type Err = GatewayError;

    /// Exact string match. No fuzzy matching, no case normalization,
    /// no aliasing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "account_info" => Ok(RequestKind::AccountInfo),
            "account_lines" => Ok(RequestKind::AccountLines),
            "account_nfts" => Ok(RequestKind::AccountNfts),
            "account_transactions" => Ok(RequestKind::AccountTransactions),
            "server_info" => Ok(RequestKind::ServerInfo),
            "submit_transaction" => Ok(RequestKind::SubmitTransaction),
            "transaction_info" => Ok(RequestKind::TransactionInfo),
            "book_offers" => Ok(RequestKind::BookOffers),
            other => Err(GatewayError::UnsupportedKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_every_kind() {
        for kind in RequestKind::ALL {
            assert_eq!(kind.as_str().parse::<RequestKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_rejects_unknown_kind() {
        let err = "ledger_entry".parse::<RequestKind>().unwrap_err();
        assert!(err.to_string().contains("ledger_entry"));
    }

    #[test]
    fn test_no_case_normalization() {
        assert!("Account_Info".parse::<RequestKind>().is_err());
        assert!("ACCOUNT_INFO".parse::<RequestKind>().is_err());
        assert!(" account_info".parse::<RequestKind>().is_err());
    }
}
