use devnet_tools::config::OrdersConfig;
use devnet_tools::orders;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = OrdersConfig::from_env()?;
    let in_file = config.data_dir.join("orders-raw.json");
    let out_file = config.data_dir.join("orders-sanitized.json");

    let dump = orders::load_dump(&in_file)?;
    let cleaned = orders::sanitize_orders(dump)?;
    let count = orders::signed_orders(&cleaned)?.len();
    orders::save_dump(&out_file, &cleaned)?;

    println!("✓ Orders sanitized ({} orders) -> {}", count, out_file.display());
    Ok(())
}
