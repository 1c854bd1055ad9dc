use std::collections::HashMap;

use common::plans::{Plan, PLANS};
use common::records::PaymentAddress;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api_client::{payment_address, transaction};
use crate::common::error::{ErrorBanner, InlineError};
use crate::common::loading::Spinner;
use crate::common::toast::ToastContext;
use crate::components::modal::Modal;
use crate::components::nav::PageHeader;
use crate::components::payment_panel::PaymentPanel;
use crate::hooks::FetchState;

#[function_component(MembershipPage)]
pub fn membership_page() -> Html {
    let toast = use_context::<ToastContext>().expect("toast context");

    let addresses = use_state(FetchState::<HashMap<String, PaymentAddress>>::default);
    let selected_plan = use_state(|| Option::<Plan>::None);
    let network = use_state(|| "TRC20".to_string());
    let transaction_id = use_state(String::new);
    let submitting = use_state(|| false);
    let submit_error = use_state(|| Option::<String>::None);

    {
        let addresses = addresses.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match payment_address::get_payment_addresses().await {
                    Ok(rows) => {
                        addresses.set(FetchState::Success(payment_address::address_map(rows)))
                    }
                    Err(e) => addresses.set(FetchState::Error(e)),
                }
            });
            || ()
        });
    }

    let open_payment = |plan: &Plan| {
        let selected_plan = selected_plan.clone();
        let network = network.clone();
        let transaction_id = transaction_id.clone();
        let submit_error = submit_error.clone();
        let plan = plan.clone();
        Callback::from(move |_| {
            selected_plan.set(Some(plan.clone()));
            network.set("TRC20".to_string());
            transaction_id.set(String::new());
            submit_error.set(None);
        })
    };

    let close_payment = {
        let selected_plan = selected_plan.clone();
        Callback::from(move |_: ()| selected_plan.set(None))
    };

    let on_select_network = {
        let network = network.clone();
        let submit_error = submit_error.clone();
        Callback::from(move |selected: String| {
            network.set(selected);
            submit_error.set(None);
        })
    };

    let on_transaction_id = {
        let transaction_id = transaction_id.clone();
        let submit_error = submit_error.clone();
        Callback::from(move |e: InputEvent| {
            transaction_id.set(e.target_unchecked_into::<HtmlInputElement>().value());
            submit_error.set(None);
        })
    };

    let on_submit = {
        let selected_plan = selected_plan.clone();
        let network = network.clone();
        let transaction_id = transaction_id.clone();
        let submitting = submitting.clone();
        let submit_error = submit_error.clone();
        let toast = toast.clone();
        Callback::from(move |_| {
            let Some(plan) = (*selected_plan).clone() else {
                return;
            };
            let txid = transaction_id.trim().to_string();
            if txid.is_empty() {
                return;
            }

            submitting.set(true);
            let network = (*network).clone();
            let selected_plan = selected_plan.clone();
            let submitting = submitting.clone();
            let submit_error = submit_error.clone();
            let toast = toast.clone();
            spawn_local(async move {
                let result = transaction::submit_membership_transaction(
                    &plan.slug(),
                    &txid,
                    &network,
                    plan.amount,
                )
                .await;
                submitting.set(false);
                match result {
                    Ok(_) => {
                        selected_plan.set(None);
                        toast.show_success(
                            "Transaction submitted successfully! Our team will verify \
                             your payment shortly."
                                .to_string(),
                        );
                    }
                    Err(_) => {
                        submit_error.set(Some(
                            "Failed to submit transaction. Please try again.".to_string(),
                        ));
                    }
                }
            });
        })
    };

    let input_class = "w-full bg-gray-700 text-white rounded-lg px-4 py-2.5 \
                       focus:outline-none focus:ring-2 focus:ring-blue-500 placeholder-gray-400";

    html! {
        <div class="min-h-screen bg-gray-900 text-white p-4 md:p-8">
            <div class="max-w-5xl mx-auto">
                <PageHeader title="Membership" subtitle="Unlock transfers with a yearly plan" />

                <div class="grid gap-6 md:grid-cols-3">
                    {for PLANS.iter().map(|plan| plan_card(plan, open_payment(plan)))}
                </div>
            </div>

            if let Some(plan) = &*selected_plan {
                <Modal
                    title={format!("Pay for {} plan", plan.name)}
                    on_close={close_payment}
                >
                    <div class="space-y-4">
                        <p class="text-gray-300">
                            {format!("Send {} to the address below, then paste the transaction id.", plan.price)}
                        </p>

                        {match &*addresses {
                            FetchState::Loading => html! {
                                <div class="flex justify-center py-8"><Spinner /></div>
                            },
                            FetchState::Error(e) => html! {
                                <ErrorBanner message={format!("Failed to load payment addresses: {e}")} />
                            },
                            FetchState::Success(map) => html! {
                                <PaymentPanel
                                    addresses={map.clone()}
                                    selected={(*network).clone()}
                                    on_select={on_select_network.clone()}
                                />
                            },
                        }}

                        <input
                            class={input_class}
                            type="text"
                            placeholder="Transaction ID (TXID)"
                            value={(*transaction_id).clone()}
                            oninput={on_transaction_id.clone()}
                        />

                        if let Some(message) = &*submit_error {
                            <InlineError message={message.clone()} />
                        }

                        <button
                            onclick={on_submit.clone()}
                            disabled={*submitting || transaction_id.trim().is_empty()}
                            class="w-full bg-blue-600 hover:bg-blue-700 disabled:opacity-50 text-white font-semibold py-2.5 rounded-lg transition-colors"
                        >
                            {if *submitting { "Submitting..." } else { "I have paid" }}
                        </button>
                    </div>
                </Modal>
            }
        </div>
    }
}

fn plan_card(plan: &Plan, on_buy: Callback<MouseEvent>) -> Html {
    html! {
        <div
            key={plan.name}
            class={classes!(
                "bg-gray-800", "rounded-xl", "p-6", "flex", "flex-col", "relative",
                plan.recommended.then_some("ring-2 ring-yellow-500"),
            )}
        >
            if plan.recommended {
                <span class="absolute -top-3 left-1/2 -translate-x-1/2 bg-yellow-500 text-black text-xs font-bold px-3 py-1 rounded-full">
                    {"RECOMMENDED"}
                </span>
            }

            <h2 class="text-xl font-bold">{plan.name}</h2>
            <p class="text-sm text-gray-400">{plan.tagline}</p>
            <p class="mt-4">
                <span class="text-3xl font-bold">{plan.price}</span>
                <span class="text-gray-400 text-sm ml-1">{plan.period}</span>
            </p>

            <ul class="mt-6 space-y-2 flex-1">
                {for plan.features.iter().map(|feature| html! {
                    <li class={classes!(
                        "text-sm", "flex", "items-start", "gap-2",
                        if feature.included { "text-gray-200" } else { "text-gray-500 line-through" },
                    )}>
                        <i class={classes!(
                            "mt-0.5",
                            if feature.included { "fas fa-check text-green-400" } else { "fas fa-times text-gray-600" },
                        )}></i>
                        {feature.text}
                    </li>
                })}
            </ul>

            <button
                onclick={on_buy}
                class={classes!(
                    "mt-6", "w-full", "font-semibold", "py-2.5", "rounded-lg", "transition-colors",
                    if plan.recommended {
                        "bg-yellow-500 hover:bg-yellow-600 text-black"
                    } else {
                        "bg-blue-600 hover:bg-blue-700 text-white"
                    },
                )}
            >
                {"BUY NOW"}
            </button>
        </div>
    }
}
