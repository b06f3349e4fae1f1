use alloy::providers::ProviderBuilder;
use clap::Parser;
use std::time::{SystemTime, UNIX_EPOCH};

use devnet_tools::block_finder::find_block_before;
use devnet_tools::block_source::{BlockQuery, BlockSource, RpcBlockSource};
use devnet_tools::config::ForkConfig;
use devnet_tools::deployments;

/// Pin the fork history window to a historical mainnet block.
#[derive(Parser)]
#[command(name = "prepare-fork")]
struct Args {
    /// How many seconds before now the history window should start
    seconds_ago: u64,
    /// Unix timestamp closing the window (defaults to now)
    history_end_ts: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();
    let config = ForkConfig::from_env()?;

    let provider = ProviderBuilder::new().connect_http(config.mainnet_rpc.parse()?);
    let source = RpcBlockSource::new(provider);

    let number = find_block_before(&source, args.seconds_ago).await?;
    if number < 0 {
        return Err(format!(
            "no block older than {} seconds, target predates genesis",
            args.seconds_ago
        )
        .into());
    }
    let block = source.block_meta(BlockQuery::Number(number as u64)).await?;

    let history_start_ts = block.timestamp;
    let history_end_ts = match args.history_end_ts {
        Some(ts) => ts,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs(),
    };

    deployments::write_history_window(
        &config.deployments_path,
        config.chain_id,
        history_start_ts,
        history_end_ts,
    )?;

    println!("\n{}", "=".repeat(60));
    println!("✓ Complete!");
    println!("{}", "=".repeat(60));
    println!("\nFork prepared at block: {}", block.number);
    println!("\nTimestamps:");
    println!("  start: {}", history_start_ts);
    println!("  end:   {}", history_end_ts);
    println!("\n{}\n", "=".repeat(60));
    Ok(())
}
