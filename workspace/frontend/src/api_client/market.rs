use common::market::MarketAsset;
use gloo_net::http::Request;

use crate::settings;

const MARKETS_QUERY: &str =
    "/coins/markets?vs_currency=usd&order=market_cap_desc&per_page=100&page=1&sparkline=false";

/// The top 100 assets by market cap from the public price API. Plain
/// unauthenticated GET; the market view polls this on a fixed interval.
pub async fn fetch_market_assets() -> Result<Vec<MarketAsset>, String> {
    let url = settings::get_settings().market_url(MARKETS_QUERY);
    log::debug!("GET {url}");

    let response = Request::get(&url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {e}");
        log::error!("fetch_market_assets - {error_msg}");
        error_msg
    })?;

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("fetch_market_assets - {error_msg}");
        return Err(error_msg);
    }

    let assets: Vec<MarketAsset> = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {e}");
        log::error!("fetch_market_assets - {error_msg}");
        error_msg
    })?;

    log::info!("Fetched {} market assets", assets.len());
    Ok(assets)
}
