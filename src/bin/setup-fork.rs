use alloy::primitives::U256;
use alloy::providers::ProviderBuilder;
use clap::Parser;

use devnet_tools::config::SetupConfig;
use devnet_tools::contracts::IERC721;
use devnet_tools::{deployments, devnet, startup};

const FUND_ETH: u64 = 1000;

/// Fund the dev wallet and approve the marketplace on a running fork.
#[derive(Parser)]
#[command(name = "setup-fork")]
struct Args {
    /// Token id whose owner gets impersonated
    #[arg(long, default_value_t = 0)]
    token_id: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();
    let config = SetupConfig::from_env()?;

    let provider = ProviderBuilder::new().connect_http(config.devnet_rpc.parse()?);
    startup::check_rpc_health(&provider, "devnet").await?;

    let marketplace =
        deployments::read_address(&config.deployments_path, config.chain_id, "marketplace")?;

    println!("Giving {} ETH to {}...", FUND_ETH, config.wallet);
    let wei = U256::from(FUND_ETH) * U256::from(10u64).pow(U256::from(18u64));
    startup::fund_wallet(&provider, config.wallet, wei).await?;

    println!("Fetching owner of token #{}...", args.token_id);
    let nft = IERC721::new(config.collection, provider.clone());
    let owner = nft.ownerOf(U256::from(args.token_id)).call().await?;
    println!("Owner of token #{} is {}", args.token_id, owner);

    println!("Impersonating {}...", owner);
    devnet::impersonate(&provider, owner).await?;

    let approval =
        startup::ensure_marketplace_approval(&provider, config.collection, owner, marketplace)
            .await;

    println!("Stopping impersonation of {}", owner);
    devnet::stop_impersonating(&provider, owner).await?;
    approval?;

    println!("✓ Setup complete: funded, approved, ready.");
    Ok(())
}
