use common::validation::Asset;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::profile;
use crate::common::loading::Spinner;
use crate::components::modal::Modal;
use crate::components::nav::PageHeader;
use crate::router::Route;

/// Recipient lookup progress, shown in the confirmation modal. No transfer
/// is ever executed; a resolved recipient only routes the user to the
/// membership plans.
#[derive(Clone, PartialEq)]
enum Lookup {
    Idle,
    Checking,
    NotFound,
    RequiresPlan,
    Failed(String),
}

#[function_component(InternalTransferPage)]
pub fn internal_transfer_page() -> Html {
    let navigator = use_navigator().expect("router context");

    let recipient = use_state(String::new);
    let asset = use_state(Asset::default);
    let quantity = use_state(String::new);
    let lookup = use_state(|| Lookup::Idle);

    let on_recipient = {
        let recipient = recipient.clone();
        Callback::from(move |e: InputEvent| {
            recipient.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_asset = {
        let asset = asset.clone();
        Callback::from(move |e: Event| {
            let code = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Some(selected) = Asset::from_code(&code) {
                asset.set(selected);
            }
        })
    };
    let on_quantity = {
        let quantity = quantity.clone();
        Callback::from(move |e: InputEvent| {
            quantity.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_submit = {
        let recipient = recipient.clone();
        let lookup = lookup.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let username = recipient.trim().to_string();
            if username.is_empty() {
                return;
            }

            lookup.set(Lookup::Checking);
            let lookup = lookup.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match profile::get_profile_by_username(&username).await {
                    Ok(None) => lookup.set(Lookup::NotFound),
                    Ok(Some(_)) => {
                        lookup.set(Lookup::RequiresPlan);
                        // Show the membership notice briefly, then route to
                        // the plans.
                        gloo_timers::callback::Timeout::new(2_000, move || {
                            navigator.push(&Route::Membership);
                        })
                        .forget();
                    }
                    Err(e) => lookup.set(Lookup::Failed(e)),
                }
            });
        })
    };

    let close_modal = {
        let lookup = lookup.clone();
        Callback::from(move |_: ()| lookup.set(Lookup::Idle))
    };

    let input_class = "w-full bg-gray-700 text-white rounded-lg px-4 py-2.5 \
                       focus:outline-none focus:ring-2 focus:ring-blue-500 placeholder-gray-400";

    let modal_body = match &*lookup {
        Lookup::Idle => None,
        Lookup::Checking => Some(html! {
            <div class="flex flex-col items-center gap-3 py-4">
                <Spinner />
                <p class="text-gray-400">{format!("Looking up {}...", recipient.trim())}</p>
            </div>
        }),
        Lookup::NotFound => Some(html! {
            <div class="text-center py-4">
                <i class="fas fa-user-slash text-3xl text-red-400 mb-3"></i>
                <p class="text-gray-200">{"User not found"}</p>
            </div>
        }),
        Lookup::RequiresPlan => Some(html! {
            <div class="text-center py-4">
                <i class="fas fa-crown text-3xl text-yellow-400 mb-3"></i>
                <p class="text-gray-200">{"This feature requires an active membership plan"}</p>
                <p class="text-sm text-gray-400 mt-2">{"Taking you to the plans..."}</p>
            </div>
        }),
        Lookup::Failed(e) => Some(html! {
            <div class="text-center py-4">
                <i class="fas fa-exclamation-circle text-3xl text-red-400 mb-3"></i>
                <p class="text-gray-200">{format!("Lookup failed: {e}")}</p>
            </div>
        }),
    };

    html! {
        <div class="min-h-screen bg-gray-900 text-white p-4 md:p-8">
            <div class="max-w-2xl mx-auto">
                <PageHeader title="Internal Transfer" subtitle="Send assets to another member" />

                <div class="bg-blue-600/10 border border-blue-500 rounded-xl p-4 mb-6">
                    <p class="font-medium text-blue-400">
                        <i class="fas fa-crown mr-2"></i>
                        {"Internal transfers are a membership feature"}
                    </p>
                    <p class="text-sm text-gray-400 mt-1">
                        {"Transfer limits depend on your plan: Basic covers USDT, \
                          Advance adds Ethereum, Pro adds Bitcoin."}
                    </p>
                </div>

                <div class="bg-gray-800 rounded-xl p-6 mb-6">
                    <h2 class="font-semibold mb-3">{"Security reminders"}</h2>
                    <ul class="text-sm text-gray-400 space-y-2 list-disc list-inside">
                        <li>{"Double-check the recipient username; transfers cannot be reversed."}</li>
                        <li>{"We will never ask for your transaction password outside this app."}</li>
                        <li>{"Transfers settle instantly between CryptoKit accounts."}</li>
                    </ul>
                </div>

                <form onsubmit={on_submit} class="bg-gray-800 rounded-xl p-6 space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-1">{"Recipient username"}</label>
                        <input
                            class={input_class}
                            type="text"
                            placeholder="Username"
                            value={(*recipient).clone()}
                            oninput={on_recipient}
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-1">{"Asset"}</label>
                        <select class={input_class} onchange={on_asset}>
                            {for Asset::ALL.iter().map(|a| html! {
                                <option value={a.code()} selected={*asset == *a}>
                                    {a.label()}
                                </option>
                            })}
                        </select>
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-1">{"Amount"}</label>
                        <input
                            class={input_class}
                            type="number"
                            step="any"
                            placeholder={format!("Amount in {}", asset.ticker())}
                            value={(*quantity).clone()}
                            oninput={on_quantity}
                        />
                    </div>
                    <button
                        type="submit"
                        disabled={recipient.trim().is_empty()}
                        class="w-full bg-blue-600 hover:bg-blue-700 disabled:opacity-50 text-white font-semibold py-2.5 rounded-lg transition-colors"
                    >
                        <i class="fas fa-paper-plane mr-2"></i>
                        {"Transfer"}
                    </button>
                </form>
            </div>

            if let Some(body) = modal_body {
                <Modal title="Confirm transfer" on_close={close_modal}>
                    {body}
                </Modal>
            }
        </div>
    }
}
