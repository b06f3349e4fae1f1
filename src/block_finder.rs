use std::fmt;

use crate::block_source::{BlockQuery, BlockSource};

#[derive(Debug)]
pub enum LocatorError {
    InvalidInput(String),
    SourceUnavailable(String),
}

impl fmt::Display for LocatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocatorError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            LocatorError::SourceUnavailable(msg) => write!(f, "block source unavailable: {}", msg),
        }
    }
}

impl std::error::Error for LocatorError {}

/// Find the most recent block whose timestamp is at or before
/// `latest.timestamp - seconds_ago`. Returns -1 when no block is that old,
/// i.e. the target predates genesis.
pub async fn find_block_before<S: BlockSource>(
    source: &S,
    seconds_ago: u64,
) -> Result<i64, LocatorError> {
    if seconds_ago == 0 {
        return Err(LocatorError::InvalidInput(
            "seconds_ago must be positive".into(),
        ));
    }

    let latest = source.block_meta(BlockQuery::Latest).await?;
    let target_time = latest.timestamp as i64 - seconds_ago as i64;

    let mut lo: i64 = 0;
    let mut hi: i64 = latest.number as i64;

    // lo guess too new => fall back to genesis
    let genesis = source.block_meta(BlockQuery::Number(0)).await?;
    if genesis.timestamp as i64 > target_time {
        lo = 0;
    }

    // last block with timestamp <= target_time
    while lo <= hi {
        let mid = (lo + hi) / 2;
        let block = source.block_meta(BlockQuery::Number(mid as u64)).await?;
        if block.timestamp as i64 <= target_time {
            lo = mid + 1;
        } else {
            hi = mid - 1;
        }
    }

    Ok(hi)
}
