use std::collections::HashMap;

use common::PaymentAddress;
use wasm_bindgen_futures::JsFuture;
use yew::prelude::*;

/// Networks offered for USDT payments, in display order.
pub const PAYMENT_NETWORKS: [&str; 2] = ["TRC20", "ERC20"];

#[derive(Properties, PartialEq)]
pub struct PaymentPanelProps {
    /// Addresses keyed by network name, as returned by
    /// `api_client::payment_address::address_map`.
    pub addresses: HashMap<String, PaymentAddress>,
    pub selected: String,
    pub on_select: Callback<String>,
}

/// Network toggle, QR code and deposit address with a copy button. Shared
/// by the deposit modal and the membership payment modal.
#[function_component(PaymentPanel)]
pub fn payment_panel(props: &PaymentPanelProps) -> Html {
    let copied = use_state(|| false);

    let current = props.addresses.get(&props.selected);

    let on_copy = {
        let copied = copied.clone();
        let address = current.map(|a| a.address.clone());
        Callback::from(move |_| {
            let Some(address) = address.clone() else {
                return;
            };
            let copied = copied.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let clipboard = window.navigator().clipboard();
                match JsFuture::from(clipboard.write_text(&address)).await {
                    Ok(_) => {
                        copied.set(true);
                        let copied = copied.clone();
                        gloo_timers::callback::Timeout::new(2_000, move || {
                            copied.set(false);
                        })
                        .forget();
                    }
                    Err(err) => log::error!("Clipboard write failed: {err:?}"),
                }
            });
        })
    };

    html! {
        <div class="space-y-4">
            <div class="flex gap-2">
                {for PAYMENT_NETWORKS.iter().map(|network| {
                    let is_selected = props.selected == *network;
                    let on_select = props.on_select.clone();
                    let network_owned = network.to_string();
                    let onclick = Callback::from(move |_| on_select.emit(network_owned.clone()));
                    html! {
                        <button
                            {onclick}
                            class={classes!(
                                "flex-1", "py-2", "rounded-lg", "font-medium", "transition-colors",
                                if is_selected {
                                    "bg-blue-600 text-white"
                                } else {
                                    "bg-gray-700 text-gray-300 hover:bg-gray-600"
                                },
                            )}
                        >
                            {format!("USDT-{network}")}
                        </button>
                    }
                })}
            </div>

            {match current {
                Some(payment_address) => html! {
                    <>
                        <div class="flex justify-center">
                            <img
                                src={payment_address.qr_code_url.clone()}
                                alt={format!("{} deposit address QR code", payment_address.network)}
                                class="w-48 h-48 rounded-lg bg-white p-2"
                            />
                        </div>
                        <div class="bg-gray-700 rounded-lg p-3 flex items-center justify-between gap-2">
                            <span class="text-sm text-gray-200 break-all font-mono">
                                {&payment_address.address}
                            </span>
                            <button
                                onclick={on_copy}
                                class="text-blue-400 hover:text-blue-300 flex-shrink-0"
                                title="Copy address"
                            >
                                if *copied {
                                    <span class="text-green-400 text-sm">{"Copied!"}</span>
                                } else {
                                    <i class="fas fa-copy"></i>
                                }
                            </button>
                        </div>
                    </>
                },
                None => html! {
                    <p class="text-gray-400 text-sm text-center py-8">
                        {format!("No deposit address configured for {}", props.selected)}
                    </p>
                },
            }}

            <p class="text-xs text-yellow-500 bg-yellow-500/10 rounded-lg p-3">
                <i class="fas fa-exclamation-triangle mr-1"></i>
                {format!(
                    "Send only USDT on the {} network to this address. \
                     Funds sent on any other network cannot be recovered.",
                    props.selected
                )}
            </p>
        </div>
    }
}
