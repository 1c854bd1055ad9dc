use common::format::format_quantity;
use common::records::{Holding, Profile};
use common::validation::Asset;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api_client::{auth, holding, profile};
use crate::common::error::ErrorBanner;
use crate::common::loading::Spinner;
use crate::components::nav::PageHeader;
use crate::hooks::FetchState;
use crate::pages::PRO_USERNAME;

fn asset_logo(asset: Asset) -> &'static str {
    match asset {
        Asset::Btc => "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
        Asset::Eth => "https://assets.coingecko.com/coins/images/279/large/ethereum.png",
        Asset::Usdt => "https://assets.coingecko.com/coins/images/325/large/Tether.png",
    }
}

/// Displayed quantity of one asset. The pro demo account shows fixed
/// balances instead of its holdings rows; everyone else shows the recorded
/// holding, or zero when no row exists.
fn display_quantity(profile: &Profile, holdings: &[Holding], asset: Asset) -> f64 {
    if profile.username == PRO_USERNAME {
        return match asset {
            Asset::Btc => 7.346621,
            Asset::Eth => 32.1195,
            Asset::Usdt => 484597.02,
        };
    }

    holdings
        .iter()
        .find(|h| h.symbol.eq_ignore_ascii_case(asset.code()))
        .map(|h| h.quantity)
        .unwrap_or(0.0)
}

#[function_component(TotalAssetsPage)]
pub fn total_assets_page() -> Html {
    let state = use_state(FetchState::<(Profile, Vec<Holding>)>::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let loaded = load_assets().await;
                match loaded {
                    Ok(data) => state.set(FetchState::Success(data)),
                    Err(e) => state.set(FetchState::Error(e)),
                }
            });
            || ()
        });
    }

    let body = match &*state {
        FetchState::Loading => html! {
            <div class="flex justify-center py-16"><Spinner /></div>
        },
        FetchState::Error(e) => html! {
            <ErrorBanner message={format!("Failed to load assets: {e}")} />
        },
        FetchState::Success((profile, holdings)) => html! {
            <div class="grid gap-4 md:grid-cols-3">
                {for Asset::ALL.iter().map(|asset| {
                    let quantity = display_quantity(profile, holdings, *asset);
                    html! {
                        <div key={asset.code()} class="bg-gray-800 rounded-xl p-6">
                            <div class="flex items-center gap-3 mb-4">
                                <img
                                    src={asset_logo(*asset)}
                                    alt={asset.label()}
                                    class="w-10 h-10 rounded-full"
                                />
                                <div>
                                    <p class="font-semibold">{asset.ticker()}</p>
                                    <p class="text-sm text-gray-400">{asset.label()}</p>
                                </div>
                            </div>
                            <p class="text-2xl font-bold font-mono">
                                {format_quantity(quantity)}
                                <span class="text-sm text-gray-400 ml-2">{asset.ticker()}</span>
                            </p>
                        </div>
                    }
                })}
            </div>
        },
    };

    html! {
        <div class="min-h-screen bg-gray-900 text-white p-4 md:p-8">
            <div class="max-w-4xl mx-auto">
                <PageHeader title="Total Assets" subtitle="Your recorded balances" />
                {body}
            </div>
        </div>
    }
}

async fn load_assets() -> Result<(Profile, Vec<Holding>), String> {
    let user = auth::current_user()?;
    let profile = profile::get_profile(&user.id)
        .await?
        .ok_or_else(|| "Profile not found".to_string())?;
    let holdings = holding::get_holdings(&user.id).await?;
    Ok((profile, holdings))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(username: &str) -> Profile {
        Profile {
            id: "u1".to_string(),
            username: username.to_string(),
            email: "u@x.com".to_string(),
            full_name: None,
            transaction_password: "t1".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    fn holding(symbol: &str, quantity: f64) -> Holding {
        Holding {
            id: format!("h-{symbol}"),
            user_id: "u1".to_string(),
            symbol: symbol.to_string(),
            quantity,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn missing_holding_row_displays_zero() {
        let rows = vec![holding("btc", 0.5)];
        let p = profile("alice");

        assert_eq!(display_quantity(&p, &rows, Asset::Btc), 0.5);
        assert_eq!(display_quantity(&p, &rows, Asset::Eth), 0.0);
    }

    #[test]
    fn symbol_match_ignores_case() {
        let rows = vec![holding("USDT", 120.0)];
        assert_eq!(display_quantity(&profile("alice"), &rows, Asset::Usdt), 120.0);
    }

    #[test]
    fn pro_account_overrides_recorded_holdings() {
        let rows = vec![holding("btc", 0.5)];
        let p = profile(PRO_USERNAME);

        assert_eq!(display_quantity(&p, &rows, Asset::Btc), 7.346621);
        assert_eq!(display_quantity(&p, &rows, Asset::Usdt), 484597.02);
    }
}
