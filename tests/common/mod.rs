use std::sync::atomic::{AtomicUsize, Ordering};

use devnet_tools::block_finder::LocatorError;
use devnet_tools::block_source::{BlockMeta, BlockQuery, BlockSource};

/// Block source backed by a fixed timestamp table, one entry per block number.
/// Counts every fetch; optionally starts failing after a set number of them.
pub struct FixedChain {
    timestamps: Vec<u64>,
    fetches: AtomicUsize,
    fail_from: Option<usize>,
}

impl FixedChain {
    pub fn new(timestamps: Vec<u64>) -> Self {
        assert!(!timestamps.is_empty(), "chain needs at least a genesis block");
        Self {
            timestamps,
            fetches: AtomicUsize::new(0),
            fail_from: None,
        }
    }

    pub fn failing_after(timestamps: Vec<u64>, fetches: usize) -> Self {
        let mut chain = Self::new(timestamps);
        chain.fail_from = Some(fetches);
        chain
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

impl BlockSource for FixedChain {
    async fn block_meta(&self, query: BlockQuery) -> Result<BlockMeta, LocatorError> {
        let seen = self.fetches.fetch_add(1, Ordering::Relaxed);
        if let Some(limit) = self.fail_from {
            if seen >= limit {
                return Err(LocatorError::SourceUnavailable("connection refused".into()));
            }
        }

        let number = match query {
            BlockQuery::Latest => self.timestamps.len() as u64 - 1,
            BlockQuery::Number(n) => n,
        };
        let timestamp = *self
            .timestamps
            .get(number as usize)
            .ok_or_else(|| LocatorError::SourceUnavailable(format!("block {} not found", number)))?;

        Ok(BlockMeta { number, timestamp })
    }
}
