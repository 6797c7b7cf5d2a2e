//! Minimal SDK usage: probe health, then fetch server and account state.
//!
//! Run with a gateway daemon listening on the default port:
//!
//! ```text
//! cargo run -p xrpl-gateway-sdk --example simple
//! ```

use anyhow::Result;
use xrpl_gateway_sdk::GatewayClient;

#[tokio::main]
async fn main() -> Result<()> {
    let client = GatewayClient::connect("http://127.0.0.1:8000").await?;

    let health = client.health().await?;
    println!("gateway health: {}", health.status);

    let info = client.server_info().await?.into_result()?;
    println!(
        "server_info: {}",
        serde_json::to_string_pretty(&info)?
    );

    // A well-known testnet faucet account
    match client
        .account_info("rPT1Sjq2YGrBMTttX4GZHjKu9dyfzbpAYe")
        .await?
        .into_result()
    {
        Ok(result) => println!("account_info: {}", serde_json::to_string_pretty(&result)?),
        Err(e) => println!("account_info failed: {}", e),
    }

    Ok(())
}
