use alloy::primitives::Address;
use serial_test::serial;
use std::path::PathBuf;
use std::str::FromStr;

use devnet_tools::config::{ForkConfig, OrdersConfig, SetupConfig, DEFAULT_COLLECTION};

#[test]
#[serial]
fn fork_config_prefers_explicit_rpc_url() {
    std::env::set_var("MAINNET_RPC_URL", "http://localhost:8545");
    std::env::set_var("ALCHEMY_KEY", "unused");

    let c = ForkConfig::from_env().unwrap();
    assert_eq!(c.mainnet_rpc, "http://localhost:8545");
    assert_eq!(c.chain_id, 1337);
    assert_eq!(c.deployments_path, PathBuf::from("deployments.toml"));

    std::env::remove_var("MAINNET_RPC_URL");
    std::env::remove_var("ALCHEMY_KEY");
}

#[test]
#[serial]
fn fork_config_builds_alchemy_url_from_key() {
    std::env::remove_var("MAINNET_RPC_URL");
    std::env::set_var("ALCHEMY_KEY", "test-key");

    let c = ForkConfig::from_env().unwrap();
    assert_eq!(c.mainnet_rpc, "https://eth-mainnet.g.alchemy.com/v2/test-key");

    std::env::remove_var("ALCHEMY_KEY");
}

#[test]
#[serial]
fn fork_config_requires_some_rpc_source() {
    std::env::remove_var("MAINNET_RPC_URL");
    std::env::remove_var("ALCHEMY_KEY");
    assert!(ForkConfig::from_env().is_err());
}

#[test]
#[serial]
fn fork_config_rejects_bad_chain_id() {
    std::env::set_var("MAINNET_RPC_URL", "http://localhost:8545");
    std::env::set_var("CHAIN_ID", "not-a-number");

    assert!(ForkConfig::from_env().is_err());

    std::env::remove_var("MAINNET_RPC_URL");
    std::env::remove_var("CHAIN_ID");
}

#[test]
#[serial]
fn setup_config_requires_wallet() {
    std::env::remove_var("WALLET");
    assert!(SetupConfig::from_env().is_err());
}

#[test]
#[serial]
fn setup_config_parses_addresses_at_load() {
    std::env::set_var("WALLET", "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    std::env::remove_var("COLLECTION");
    std::env::remove_var("DEVNET_RPC_URL");

    let c = SetupConfig::from_env().unwrap();
    assert_eq!(
        c.wallet,
        Address::from_str("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266").unwrap()
    );
    assert_eq!(c.collection, Address::from_str(DEFAULT_COLLECTION).unwrap());
    assert_eq!(c.devnet_rpc, "http://localhost:8545");

    std::env::remove_var("WALLET");
}

#[test]
#[serial]
fn setup_config_rejects_malformed_wallet() {
    std::env::set_var("WALLET", "not-an-address");
    assert!(SetupConfig::from_env().is_err());
    std::env::remove_var("WALLET");
}

#[test]
#[serial]
fn orders_config_defaults() {
    std::env::remove_var("DATA_DIR");
    std::env::remove_var("ORDERS_API_URL");

    let c = OrdersConfig::from_env().unwrap();
    assert_eq!(c.data_dir, PathBuf::from("data/1337"));
    assert_eq!(c.api_url, "http://localhost:5000/api/orders");
}
