use alloy::primitives::Address;
use std::path::PathBuf;
use std::str::FromStr;

// BAYC mainnet contract
pub const DEFAULT_COLLECTION: &str = "0xBC4CA0eda7647A8ab7C2061c2E118A18a936f13D";

type ConfigError = Box<dyn std::error::Error + Send + Sync>;

fn chain_id_from_env() -> Result<u64, ConfigError> {
    match std::env::var("CHAIN_ID") {
        Ok(raw) => Ok(raw.parse()?),
        Err(_) => Ok(1337),
    }
}

fn deployments_path_from_env() -> PathBuf {
    std::env::var("DEPLOYMENTS_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("deployments.toml"))
}

#[derive(Debug, Clone)]
pub struct ForkConfig {
    pub mainnet_rpc: String,
    pub deployments_path: PathBuf,
    pub chain_id: u64,
}

impl ForkConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let mainnet_rpc = std::env::var("MAINNET_RPC_URL")
            .or_else(|_| {
                std::env::var("ALCHEMY_KEY")
                    .map(|key| format!("https://eth-mainnet.g.alchemy.com/v2/{}", key))
            })
            .map_err(|_| "MAINNET_RPC_URL or ALCHEMY_KEY must be set")?;
        Ok(Self {
            mainnet_rpc,
            deployments_path: deployments_path_from_env(),
            chain_id: chain_id_from_env()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SetupConfig {
    pub devnet_rpc: String,
    pub wallet: Address,
    pub collection: Address,
    pub deployments_path: PathBuf,
    pub chain_id: u64,
}

impl SetupConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let devnet_rpc = std::env::var("DEVNET_RPC_URL")
            .unwrap_or_else(|_| "http://localhost:8545".into());
        let wallet = std::env::var("WALLET").map_err(|_| "WALLET must be set")?;
        let wallet = Address::from_str(&wallet)?;
        let collection = match std::env::var("COLLECTION") {
            Ok(raw) => Address::from_str(&raw)?,
            Err(_) => Address::from_str(DEFAULT_COLLECTION)?,
        };
        Ok(Self {
            devnet_rpc,
            wallet,
            collection,
            deployments_path: deployments_path_from_env(),
            chain_id: chain_id_from_env()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct OrdersConfig {
    pub data_dir: PathBuf,
    pub api_url: String,
}

impl OrdersConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let data_dir = std::env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/1337"));
        let api_url = std::env::var("ORDERS_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000/api/orders".into());
        Ok(Self { data_dir, api_url })
    }
}
