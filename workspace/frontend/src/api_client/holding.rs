use common::records::{Holding, HoldingUpsert};

use crate::api_client;

/// All holding rows of one user.
pub async fn get_holdings(user_id: &str) -> Result<Vec<Holding>, String> {
    log::trace!("Fetching holdings for user {user_id}");
    let result = api_client::select(&format!(
        "holdings?user_id=eq.{}&select=*",
        urlencoding::encode(user_id)
    ))
    .await;
    match &result {
        Ok(holdings) => log::info!("Fetched {} holdings", holdings.len()),
        Err(e) => log::error!("Failed to fetch holdings for {user_id}: {e}"),
    }
    result
}

/// Insert or replace the quantity of one `(user_id, symbol)` pair. Nothing
/// in the UI moves balances; this exists for the back office tooling path
/// that provisions holdings.
pub async fn upsert_holding(user_id: &str, symbol: &str, quantity: f64) -> Result<(), String> {
    log::debug!("Upserting holding {symbol} for user {user_id}");
    let result = api_client::upsert(
        "holdings",
        "user_id,symbol",
        &HoldingUpsert::new(user_id, symbol, quantity),
    )
    .await;
    match &result {
        Ok(()) => log::info!("Upserted holding {symbol}"),
        Err(e) => log::error!("Failed to upsert holding {symbol}: {e}"),
    }
    result
}
