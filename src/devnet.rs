use alloy::primitives::{Address, U256};
use alloy::providers::Provider;

type DevnetError = Box<dyn std::error::Error + Send + Sync>;

pub async fn set_balance<P: Provider>(
    provider: &P,
    account: Address,
    wei: U256,
) -> Result<(), DevnetError> {
    let _: serde_json::Value = provider
        .raw_request(
            "anvil_setBalance".into(),
            vec![
                serde_json::json!(account),
                serde_json::json!(format!("{:#x}", wei)),
            ],
        )
        .await?;
    Ok(())
}

pub async fn impersonate<P: Provider>(provider: &P, account: Address) -> Result<(), DevnetError> {
    let _: serde_json::Value = provider
        .raw_request(
            "anvil_impersonateAccount".into(),
            vec![serde_json::json!(account)],
        )
        .await?;
    Ok(())
}

pub async fn stop_impersonating<P: Provider>(
    provider: &P,
    account: Address,
) -> Result<(), DevnetError> {
    let _: serde_json::Value = provider
        .raw_request(
            "anvil_stopImpersonatingAccount".into(),
            vec![serde_json::json!(account)],
        )
        .await?;
    Ok(())
}
