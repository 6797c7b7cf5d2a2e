// Well-known public JSON-RPC endpoints

/// Mainnet cluster operated by Ripple
pub const MAINNET_URL: &str = "https://s1.ripple.com:51234/";

/// Testnet (altnet) faucet-backed cluster
pub const TESTNET_URL: &str = "https://s.altnet.rippletest.net:51234";
