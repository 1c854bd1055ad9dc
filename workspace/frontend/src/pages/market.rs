use common::format::{format_compact_usd, format_percent_abs, format_usd_price};
use common::market::{filter_and_sort, MarketAsset, SortDirection, SortKey, SortOrder};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api_client::market;
use crate::common::error::ErrorBanner;
use crate::common::loading::Spinner;
use crate::components::nav::MarketNav;
use crate::hooks::FetchState;
use crate::settings;

/// Fetch prices into the page state. A failure after rows have already been
/// shown keeps those rows and raises the banner instead; the next success
/// clears it.
fn load_assets(
    assets: UseStateHandle<FetchState<Vec<MarketAsset>>>,
    poll_error: UseStateHandle<Option<String>>,
) {
    spawn_local(async move {
        match market::fetch_market_assets().await {
            Ok(rows) => {
                assets.set(FetchState::Success(rows));
                poll_error.set(None);
            }
            Err(e) => {
                if assets.data().is_some() {
                    poll_error.set(Some(e));
                } else {
                    assets.set(FetchState::Error(e));
                }
            }
        }
    });
}

#[function_component(MarketPage)]
pub fn market_page() -> Html {
    let assets = use_state(FetchState::<Vec<MarketAsset>>::default);
    let poll_error = use_state(|| Option::<String>::None);
    let search = use_state(String::new);
    let order = use_state(SortOrder::default);

    {
        let assets = assets.clone();
        let poll_error = poll_error.clone();
        use_effect_with((), move |_| {
            load_assets(assets.clone(), poll_error.clone());

            let poll_ms = settings::get_settings().market_poll_ms;
            let interval = gloo_timers::callback::Interval::new(poll_ms, move || {
                log::trace!("Market poll tick");
                load_assets(assets.clone(), poll_error.clone());
            });

            move || drop(interval)
        });
    }

    let on_refresh = {
        let assets = assets.clone();
        let poll_error = poll_error.clone();
        Callback::from(move |_| {
            log::debug!("Manual market refresh");
            load_assets(assets.clone(), poll_error.clone());
        })
    };

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            search.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let sort_header = |key: SortKey, label: &'static str| {
        let order_handle = order.clone();
        let current = *order_handle;
        let onclick = Callback::from(move |_| order_handle.set(current.clicked(key)));
        let indicator = if current.key == key {
            match current.direction {
                SortDirection::Ascending => html! { <i class="fas fa-caret-up ml-1"></i> },
                SortDirection::Descending => html! { <i class="fas fa-caret-down ml-1"></i> },
            }
        } else {
            html! {}
        };
        html! {
            <th
                class="px-4 py-3 text-left text-gray-400 font-medium cursor-pointer hover:text-white select-none"
                {onclick}
            >
                {label}{indicator}
            </th>
        }
    };

    let body = match &*assets {
        FetchState::Loading => html! {
            <div class="flex justify-center py-16"><Spinner /></div>
        },
        FetchState::Error(e) => html! {
            <ErrorBanner message={format!("Failed to load market data: {e}")} />
        },
        FetchState::Success(rows) => {
            let visible = filter_and_sort(rows, search.trim(), *order);
            html! {
                <>
                    if let Some(e) = &*poll_error {
                        <ErrorBanner message={format!("Failed to refresh market data: {e}")} />
                    }
                    <div class="bg-gray-800 rounded-xl overflow-hidden">
                        <table class="w-full">
                            <thead class="border-b border-gray-700">
                                <tr>
                                    {sort_header(SortKey::Name, "Asset")}
                                    {sort_header(SortKey::Price, "Price")}
                                    {sort_header(SortKey::Change24h, "24h Change")}
                                    {sort_header(SortKey::MarketCap, "Market Cap")}
                                </tr>
                            </thead>
                            <tbody>
                                {for visible.iter().map(asset_row)}
                            </tbody>
                        </table>
                        if visible.is_empty() {
                            <p class="text-gray-400 text-center py-8">
                                {format!("No assets match \"{}\"", search.trim())}
                            </p>
                        }
                    </div>
                </>
            }
        }
    };

    html! {
        <div class="min-h-screen bg-gray-900 text-white p-4 md:p-8">
            <div class="max-w-6xl mx-auto">
                <div class="flex items-center justify-between mb-6">
                    <h1 class="text-3xl font-bold bg-gradient-to-r from-blue-400 to-purple-500 bg-clip-text text-transparent">
                        {"CryptoKit Market"}
                    </h1>
                    <button
                        onclick={on_refresh}
                        class="text-gray-400 hover:text-white transition-colors"
                        title="Refresh prices"
                    >
                        <i class="fas fa-sync-alt text-xl"></i>
                    </button>
                </div>

                <MarketNav />

                <div class="relative mb-6">
                    <i class="fas fa-search absolute left-3 top-1/2 -translate-y-1/2 text-gray-500"></i>
                    <input
                        class="w-full bg-gray-800 text-white rounded-lg pl-10 pr-4 py-2.5 focus:outline-none focus:ring-2 focus:ring-blue-500 placeholder-gray-500"
                        type="text"
                        placeholder="Search by name or symbol"
                        value={(*search).clone()}
                        oninput={on_search}
                    />
                </div>

                {body}
            </div>
        </div>
    }
}

fn asset_row(asset: &MarketAsset) -> Html {
    let change = asset.change_24h();
    let (change_class, change_icon) = if change >= 0.0 {
        ("text-green-400", "fas fa-caret-up")
    } else {
        ("text-red-400", "fas fa-caret-down")
    };

    html! {
        <tr key={asset.id.clone()} class="border-b border-gray-700/50 hover:bg-gray-700/30">
            <td class="px-4 py-3">
                <div class="flex items-center gap-3">
                    <img src={asset.image.clone()} alt={asset.name.clone()} class="w-8 h-8 rounded-full" />
                    <div>
                        <p class="font-medium">{&asset.name}</p>
                        <p class="text-sm text-gray-400">{asset.symbol.to_uppercase()}</p>
                    </div>
                </div>
            </td>
            <td class="px-4 py-3 font-mono">{format_usd_price(asset.current_price)}</td>
            <td class={classes!("px-4", "py-3", change_class)}>
                <i class={change_icon}></i>
                {" "}
                {format_percent_abs(change)}
            </td>
            <td class="px-4 py-3 text-gray-300">{format_compact_usd(asset.market_cap)}</td>
        </tr>
    }
}
