use futures_util::stream::{self, TryStreamExt};
use serde_json::Value;
use std::fs;
use std::path::Path;

type OrdersError = Box<dyn std::error::Error + Send + Sync>;

pub const MAX_IN_FLIGHT: usize = 8;

pub fn load_dump(path: &Path) -> Result<Value, OrdersError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn save_dump(path: &Path, dump: &Value) -> Result<(), OrdersError> {
    fs::write(path, serde_json::to_string(dump)?)?;
    Ok(())
}

pub fn signed_orders(dump: &Value) -> Result<&Vec<Value>, OrdersError> {
    dump.get("signedOrders")
        .and_then(|v| v.as_array())
        .ok_or_else(|| "order dump missing signedOrders array".into())
}

/// Strip the ethers-internal `_` field from every order signature. Everything
/// else in the dump passes through untouched.
pub fn sanitize_orders(mut dump: Value) -> Result<Value, OrdersError> {
    let orders = dump
        .get_mut("signedOrders")
        .and_then(|v| v.as_array_mut())
        .ok_or("order dump missing signedOrders array")?;

    for order in orders.iter_mut() {
        let signature = order
            .get_mut("signature")
            .and_then(|v| v.as_object_mut())
            .ok_or("order missing signature object")?;
        signature.remove("_");
    }

    Ok(dump)
}

/// POST every order to the ingest endpoint, at most MAX_IN_FLIGHT at a time.
/// The first rejected order aborts the whole export.
pub async fn export_orders(
    client: &reqwest::Client,
    endpoint: &str,
    orders: &[Value],
) -> Result<usize, OrdersError> {
    stream::iter(orders.iter().map(Ok::<&Value, OrdersError>))
        .try_for_each_concurrent(MAX_IN_FLIGHT, |order| async move {
            let res = client.post(endpoint).json(order).send().await?;
            if !res.status().is_success() {
                let status = res.status();
                let body = res.text().await.unwrap_or_default();
                return Err(format!("order ingest rejected ({}): {}", status, body).into());
            }
            Ok(())
        })
        .await?;

    Ok(orders.len())
}
