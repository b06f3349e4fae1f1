use alloy::primitives::{Address, U256};
use alloy::providers::Provider;

use crate::contracts::IERC721;
use crate::devnet;

type StartupError = Box<dyn std::error::Error + Send + Sync>;

pub async fn check_rpc_health<P: Provider>(provider: &P, label: &str) -> Result<(), StartupError> {
    let block = provider
        .get_block_number()
        .await
        .map_err(|e| format!("FATAL: {} RPC unreachable or unhealthy: {}", label, e))?;
    println!("✓ {} RPC healthy (block: {})", label, block);
    Ok(())
}

pub async fn fund_wallet<P: Provider>(
    provider: &P,
    wallet: Address,
    wei: U256,
) -> Result<(), StartupError> {
    devnet::set_balance(provider, wallet, wei).await?;
    let balance = provider.get_balance(wallet).await?;
    println!("✓ Wallet {} funded (balance: {} wei)", wallet, balance);
    Ok(())
}

pub async fn ensure_marketplace_approval<P: Provider + Clone>(
    provider: &P,
    collection: Address,
    owner: Address,
    marketplace: Address,
) -> Result<(), StartupError> {
    let nft = IERC721::new(collection, provider.clone());

    let approved = nft.isApprovedForAll(owner, marketplace).call().await?;
    if approved {
        println!("✓ Marketplace already approved for {}", owner);
        return Ok(());
    }

    let pending = nft
        .setApprovalForAll(marketplace, true)
        .from(owner)
        .send()
        .await?;
    let receipt = pending.get_receipt().await?;

    if !receipt.status() {
        return Err("FATAL: setApprovalForAll transaction failed".into());
    }

    println!("✓ Marketplace approved for all tokens of {}", owner);
    Ok(())
}
