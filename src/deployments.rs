use alloy::primitives::Address;
use std::fs;
use std::path::Path;
use std::str::FromStr;

type DeploymentsError = Box<dyn std::error::Error + Send + Sync>;

/// Replace `history_start_ts` and `history_end_ts` in the `[<chain>.uint]`
/// section, leaving every other key and its position alone.
pub fn write_history_window(
    path: &Path,
    chain_id: u64,
    start_ts: u64,
    end_ts: u64,
) -> Result<(), DeploymentsError> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let mut doc: toml::Value = text.parse()?;

    let section = doc
        .get_mut(chain_id.to_string())
        .and_then(|chain| chain.get_mut("uint"))
        .and_then(|uint| uint.as_table_mut())
        .ok_or_else(|| format!("missing [{}.uint] section in {}", chain_id, path.display()))?;

    section.insert("history_start_ts".into(), toml::Value::Integer(start_ts as i64));
    section.insert("history_end_ts".into(), toml::Value::Integer(end_ts as i64));

    fs::write(path, toml::to_string_pretty(&doc)?)?;
    Ok(())
}

pub fn read_address(path: &Path, chain_id: u64, name: &str) -> Result<Address, DeploymentsError> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let doc: toml::Value = text.parse()?;

    let raw = doc
        .get(chain_id.to_string())
        .and_then(|chain| chain.get("address"))
        .and_then(|table| table.get(name))
        .and_then(|value| value.as_str())
        .ok_or_else(|| {
            format!("missing {} in [{}.address] of {}", name, chain_id, path.display())
        })?;

    Ok(Address::from_str(raw)?)
}
