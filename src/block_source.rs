use alloy::providers::Provider;
use serde::{Deserialize, Serialize};

use crate::block_finder::LocatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockQuery {
    Latest,
    Number(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockMeta {
    #[serde(with = "hex_u64")]
    pub number: u64,
    #[serde(with = "hex_u64")]
    pub timestamp: u64,
}

#[allow(async_fn_in_trait)]
pub trait BlockSource {
    async fn block_meta(&self, query: BlockQuery) -> Result<BlockMeta, LocatorError>;
}

/// Block source backed by `eth_getBlockByNumber` on a JSON-RPC endpoint.
pub struct RpcBlockSource<P> {
    provider: P,
}

impl<P: Provider> RpcBlockSource<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P: Provider> BlockSource for RpcBlockSource<P> {
    async fn block_meta(&self, query: BlockQuery) -> Result<BlockMeta, LocatorError> {
        let tag = match query {
            BlockQuery::Latest => "latest".to_string(),
            BlockQuery::Number(n) => format!("{:#x}", n),
        };

        let block: Option<BlockMeta> = self
            .provider
            .raw_request(
                "eth_getBlockByNumber".into(),
                vec![serde_json::json!(tag), serde_json::json!(false)],
            )
            .await
            .map_err(|e| LocatorError::SourceUnavailable(e.to_string()))?;

        block.ok_or_else(|| LocatorError::SourceUnavailable(format!("block {} not found", tag)))
    }
}

mod hex_u64 {
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:#x}", value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        u64::from_str_radix(s.trim_start_matches("0x"), 16).map_err(serde::de::Error::custom)
    }
}
