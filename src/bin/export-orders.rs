use devnet_tools::config::OrdersConfig;
use devnet_tools::orders;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = OrdersConfig::from_env()?;
    let in_file = config.data_dir.join("orders-sanitized.json");

    let dump = orders::load_dump(&in_file)?;
    let signed = orders::signed_orders(&dump)?;

    let client = reqwest::Client::new();
    let count = orders::export_orders(&client, &config.api_url, signed).await?;

    println!("✓ Orders exported ({} orders) -> {}", count, config.api_url);
    Ok(())
}
