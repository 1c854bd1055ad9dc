use std::collections::HashMap;

use chrono::{DateTime, Utc};
use common::format::format_quantity;
use common::records::{PaymentAddress, Profile};
use common::validation::{Asset, WithdrawForm};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::{auth, payment_address, profile, transaction};
use crate::common::error::{ErrorBanner, InlineError};
use crate::common::loading::Spinner;
use crate::common::toast::ToastContext;
use crate::components::modal::Modal;
use crate::components::nav::PageHeader;
use crate::components::payment_panel::PaymentPanel;
use crate::hooks::FetchState;
use crate::pages::PRO_USERNAME;
use crate::router::Route;

/// Which dialog is open. One tagged value instead of a flag per modal, so
/// at most one dialog can ever be visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveDialog {
    None,
    Deposit,
    Withdraw,
    PasswordChange,
    TransactionPasswordChange,
    Contact,
    Help,
    About,
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let navigator = use_navigator().expect("router context");
    let toast = use_context::<ToastContext>().expect("toast context");

    let profile_state = use_state(FetchState::<Profile>::default);
    let addresses = use_state(FetchState::<HashMap<String, PaymentAddress>>::default);
    let dialog = use_state(|| ActiveDialog::None);

    {
        let profile_state = profile_state.clone();
        let addresses = addresses.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match load_profile().await {
                    Ok(profile) => profile_state.set(FetchState::Success(profile)),
                    Err(e) => profile_state.set(FetchState::Error(e)),
                }
            });
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

    let open = |target: ActiveDialog| {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| dialog.set(target))
    };
    let close = {
        let dialog = dialog.clone();
        Callback::from(move |_: ()| dialog.set(ActiveDialog::None))
    };

    let on_sign_out = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            let navigator = navigator.clone();
            spawn_local(async move {
                if let Err(e) = auth::sign_out().await {
                    // The local session is already gone; the remote revocation
                    // failing only means the token dies by expiry.
                    log::warn!("Remote sign-out failed: {e}");
                }
                navigator.push(&Route::Home);
            });
        })
    };

    let send_verification_toast = {
        let toast = toast.clone();
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| {
            toast.show_success("Verification email sent successfully!".to_string());
            dialog.set(ActiveDialog::None);
        })
    };

    let body = match &*profile_state {
        FetchState::Loading => html! {
            <div class="flex justify-center py-16"><Spinner /></div>
        },
        FetchState::Error(e) => html! {
            <ErrorBanner message={format!("Failed to load profile: {e}")} />
        },
        FetchState::Success(profile) => {
            let initial = profile
                .username
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_else(|| "?".to_string());

            html! {
                <>
                    <div class="bg-gray-800 rounded-xl p-6 mb-6 flex items-center gap-4">
                        <div class="w-16 h-16 rounded-full bg-gradient-to-r from-blue-500 to-purple-600 flex items-center justify-center text-2xl font-bold">
                            {initial}
                        </div>
                        <div class="flex-1">
                            <div class="flex items-center gap-2">
                                <h2 class="text-xl font-bold">{&profile.username}</h2>
                                if profile.username == PRO_USERNAME {
                                    <span class="bg-yellow-500 text-black text-xs font-bold px-2 py-0.5 rounded-full">
                                        {"PRO"}
                                    </span>
                                }
                            </div>
                            if let Some(full_name) = &profile.full_name {
                                <p class="text-gray-400">{full_name}</p>
                            }
                            <p class="text-sm text-gray-500">{&profile.email}</p>
                            if let Some(since) = member_since(profile.created_at) {
                                <p class="text-xs text-gray-600">{since}</p>
                            }
                        </div>
                        <button
                            onclick={on_sign_out}
                            class="text-red-400 hover:text-red-300 transition-colors"
                            title="Sign out"
                        >
                            <i class="fas fa-sign-out-alt text-xl"></i>
                        </button>
                    </div>

                    <div class="grid gap-3 md:grid-cols-2 mb-6">
                        {action_button(open(ActiveDialog::Deposit), "fas fa-arrow-down", "Deposit", "bg-green-600 hover:bg-green-700")}
                        {action_button(open(ActiveDialog::Withdraw), "fas fa-arrow-up", "Withdraw", "bg-red-600 hover:bg-red-700")}
                    </div>

                    <div class="bg-gray-800 rounded-xl p-6 mb-6">
                        <h3 class="font-semibold mb-4">{"Security"}</h3>
                        <div class="space-y-3">
                            {settings_row("Login password", open(ActiveDialog::PasswordChange))}
                            {settings_row("Transaction password", open(ActiveDialog::TransactionPasswordChange))}
                        </div>
                    </div>

                    <div class="bg-gray-800 rounded-xl p-6">
                        <h3 class="font-semibold mb-4">{"Support"}</h3>
                        <div class="space-y-3">
                            {settings_row("Contact us", open(ActiveDialog::Contact))}
                            {settings_row("Help", open(ActiveDialog::Help))}
                            {settings_row("About CryptoKit", open(ActiveDialog::About))}
                        </div>
                    </div>
                </>
            }
        }
    };

    html! {
        <div class="min-h-screen bg-gray-900 text-white p-4 md:p-8">
            <div class="max-w-2xl mx-auto">
                <PageHeader title="Profile" />
                {body}
            </div>

            {match *dialog {
                ActiveDialog::None => html! {},
                ActiveDialog::Deposit => html! {
                    <DepositDialog addresses={(*addresses).clone()} on_close={close} />
                },
                ActiveDialog::Withdraw => html! {
                    <WithdrawDialog on_close={close} />
                },
                ActiveDialog::PasswordChange => html! {
                    <Modal title="Change login password" on_close={close}>
                        <p class="text-gray-300 mb-4">
                            {"For your security, password changes are confirmed by email."}
                        </p>
                        <button
                            onclick={send_verification_toast}
                            class="w-full bg-blue-600 hover:bg-blue-700 text-white font-semibold py-2.5 rounded-lg transition-colors"
                        >
                            {"Send verification email"}
                        </button>
                    </Modal>
                },
                ActiveDialog::TransactionPasswordChange => html! {
                    <Modal title="Change transaction password" on_close={close}>
                        <p class="text-gray-300 mb-4">
                            {"For your security, transaction password changes are confirmed by email."}
                        </p>
                        <button
                            onclick={send_verification_toast}
                            class="w-full bg-blue-600 hover:bg-blue-700 text-white font-semibold py-2.5 rounded-lg transition-colors"
                        >
                            {"Send verification email"}
                        </button>
                    </Modal>
                },
                ActiveDialog::Contact => html! {
                    <Modal title="Contact us" on_close={close}>
                        <div class="space-y-3 text-gray-300">
                            <p><i class="fas fa-envelope mr-2 text-blue-400"></i>{"support@cryptokit.io"}</p>
                            <p><i class="fas fa-clock mr-2 text-blue-400"></i>{"Support hours: 24/7"}</p>
                            <p class="text-sm text-gray-500">
                                {"Include your username in every request. Never share your \
                                  password or transaction password with support staff."}
                            </p>
                        </div>
                    </Modal>
                },
                ActiveDialog::Help => html! {
                    <Modal title="Help" on_close={close}>
                        <ul class="space-y-3 text-sm text-gray-300 list-disc list-inside">
                            <li>{"Deposits are credited after network confirmation."}</li>
                            <li>{"Withdrawals require your transaction password."}</li>
                            <li>{"Internal transfers require an active membership plan."}</li>
                            <li>{"Market prices refresh automatically every minute."}</li>
                        </ul>
                    </Modal>
                },
                ActiveDialog::About => html! {
                    <Modal title="About CryptoKit" on_close={close}>
                        <div class="space-y-3 text-gray-300">
                            <p>{"CryptoKit is your gateway to digital assets: live market data, \
                                 deposits, and member-to-member transfers in one place."}</p>
                            <p class="text-sm text-gray-500">{format!("Version {}", env!("CARGO_PKG_VERSION"))}</p>
                        </div>
                    </Modal>
                },
            }}
        </div>
    }
}

async fn load_profile() -> Result<Profile, String> {
    let user = auth::current_user()?;
    profile::get_profile(&user.id)
        .await?
        .ok_or_else(|| "Profile not found".to_string())
}

/// Join-date line under the profile header; rows predating the timestamp
/// columns have no `created_at` and show nothing.
fn member_since(created_at: Option<DateTime<Utc>>) -> Option<String> {
    created_at.map(|at| format!("Member since {}", at.format("%B %Y")))
}

fn action_button(
    onclick: Callback<MouseEvent>,
    icon: &'static str,
    label: &'static str,
    color: &'static str,
) -> Html {
    html! {
        <button
            {onclick}
            class={classes!(
                "py-3", "rounded-xl", "font-semibold", "text-white", "transition-colors",
                "flex", "items-center", "justify-center", "gap-2",
                color,
            )}
        >
            <i class={icon}></i>
            {label}
        </button>
    }
}

fn settings_row(label: &'static str, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <button
            {onclick}
            class="w-full flex items-center justify-between bg-gray-700/50 hover:bg-gray-700 rounded-lg px-4 py-3 transition-colors"
        >
            <span>{label}</span>
            <i class="fas fa-chevron-right text-gray-500"></i>
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct DepositDialogProps {
    addresses: FetchState<HashMap<String, PaymentAddress>>,
    on_close: Callback<()>,
}

/// Deposit flow: show the USDT address for the chosen network, then record
/// the user's claim of the transfer. Crediting happens out-of-band once the
/// claim is verified.
#[function_component(DepositDialog)]
fn deposit_dialog(props: &DepositDialogProps) -> Html {
    let toast = use_context::<ToastContext>().expect("toast context");

    let network = use_state(|| "TRC20".to_string());
    let transaction_id = use_state(String::new);
    let amount = use_state(String::new);
    let submitting = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let on_select_network = {
        let network = network.clone();
        Callback::from(move |selected: String| network.set(selected))
    };
    let on_transaction_id = {
        let transaction_id = transaction_id.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            transaction_id.set(e.target_unchecked_into::<HtmlInputElement>().value());
            error.set(None);
        })
    };
    let on_amount = {
        let amount = amount.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            amount.set(e.target_unchecked_into::<HtmlInputElement>().value());
            error.set(None);
        })
    };

    let on_submit = {
        let network = network.clone();
        let transaction_id = transaction_id.clone();
        let amount = amount.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let toast = toast.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            let txid = transaction_id.trim().to_string();
            if txid.is_empty() {
                return;
            }
            let Ok(value) = amount.trim().parse::<f64>() else {
                error.set(Some("Please enter a valid amount".to_string()));
                return;
            };
            if value <= 0.0 {
                error.set(Some("Please enter a valid amount".to_string()));
                return;
            }

            submitting.set(true);
            let network = (*network).clone();
            let submitting = submitting.clone();
            let error = error.clone();
            let toast = toast.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                let result =
                    transaction::submit_deposit_transaction("usdt", &txid, &network, value).await;
                submitting.set(false);
                match result {
                    Ok(_) => {
                        on_close.emit(());
                        toast.show_success(
                            "Deposit submitted! It will be credited after verification."
                                .to_string(),
                        );
                    }
                    Err(_) => error.set(Some(
                        "Failed to submit deposit. Please try again.".to_string(),
                    )),
                }
            });
        })
    };

    let input_class = "w-full bg-gray-700 text-white rounded-lg px-4 py-2.5 \
                       focus:outline-none focus:ring-2 focus:ring-blue-500 placeholder-gray-400";

    html! {
        <Modal title="Deposit USDT" on_close={props.on_close.clone()}>
            <div class="space-y-4">
                {match &props.addresses {
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
                            on_select={on_select_network}
                        />
                    },
                }}

                <div class="border-t border-gray-700 pt-4 space-y-3">
                    <p class="text-sm text-gray-400">
                        {"Already sent it? Record your transfer so we can credit it."}
                    </p>
                    <input
                        class={input_class}
                        type="text"
                        placeholder="Transaction ID (TXID)"
                        value={(*transaction_id).clone()}
                        oninput={on_transaction_id}
                    />
                    <input
                        class={input_class}
                        type="number"
                        step="any"
                        placeholder="Amount in USDT"
                        value={(*amount).clone()}
                        oninput={on_amount}
                    />

                    if let Some(message) = &*error {
                        <InlineError message={message.clone()} />
                    }

                    <button
                        onclick={on_submit}
                        disabled={*submitting || transaction_id.trim().is_empty()}
                        class="w-full bg-green-600 hover:bg-green-700 disabled:opacity-50 text-white font-semibold py-2.5 rounded-lg transition-colors"
                    >
                        {if *submitting { "Submitting..." } else { "I have sent it" }}
                    </button>
                </div>
            </div>
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
struct WithdrawDialogProps {
    on_close: Callback<()>,
}

/// Withdraw flow. Submission is a simulation: every attempt is rejected
/// with a wrong-transaction-password message regardless of the input. The
/// deployed system behaves the same way; no withdrawal path exists yet.
#[function_component(WithdrawDialog)]
fn withdraw_dialog(props: &WithdrawDialogProps) -> Html {
    let form = use_state(WithdrawForm::default);
    let rejection = use_state(|| Option::<String>::None);

    let on_asset = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let code = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Some(asset) = Asset::from_code(&code) {
                form.set((*form).clone().with_asset(asset));
            }
        })
    };
    let on_network = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            next.network = e.target_unchecked_into::<HtmlSelectElement>().value();
            form.set(next);
        })
    };
    let edit = |apply: fn(&mut WithdrawForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            apply(&mut next, e.target_unchecked_into::<HtmlInputElement>().value());
            form.set(next);
        })
    };

    let on_submit = {
        let rejection = rejection.clone();
        Callback::from(move |_| {
            log::debug!("Withdraw attempt rejected (no withdrawal path configured)");
            rejection.set(Some("Wrong transaction password".to_string()));

            let rejection = rejection.clone();
            gloo_timers::callback::Timeout::new(3_000, move || {
                rejection.set(None);
            })
            .forget();
        })
    };

    let input_class = "w-full bg-gray-700 text-white rounded-lg px-4 py-2.5 \
                       focus:outline-none focus:ring-2 focus:ring-blue-500 placeholder-gray-400";
    let asset = form.asset;

    html! {
        <Modal title="Withdraw" on_close={props.on_close.clone()}>
            <div class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-1">{"Asset"}</label>
                    <select class={input_class} onchange={on_asset}>
                        {for Asset::ALL.iter().map(|a| html! {
                            <option value={a.code()} selected={asset == *a}>{a.label()}</option>
                        })}
                    </select>
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-1">{"Network"}</label>
                    <select class={input_class} onchange={on_network}>
                        {for asset.network_options().iter().map(|option| html! {
                            <option value={*option} selected={form.network == *option}>{*option}</option>
                        })}
                    </select>
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-1">{"Address"}</label>
                    <input
                        class={input_class}
                        type="text"
                        placeholder={format!("{} address", asset.ticker())}
                        value={form.address.clone()}
                        oninput={edit(|f, v| f.address = v)}
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-1">{"Amount"}</label>
                    <input
                        class={input_class}
                        type="number"
                        step="any"
                        placeholder={format!("Min {}", format_quantity(asset.min_withdrawal()))}
                        value={form.amount.clone()}
                        oninput={edit(|f, v| f.amount = v)}
                    />
                    <p class="text-xs text-gray-500 mt-1">
                        {format!("You will receive {} {}", format_quantity(form.receive_amount()), asset.ticker())}
                    </p>
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-1">{"Transaction password"}</label>
                    <input
                        class={input_class}
                        type="password"
                        placeholder="Transaction password"
                        value={form.transaction_password.clone()}
                        oninput={edit(|f, v| f.transaction_password = v)}
                    />
                </div>

                if let Some(message) = &*rejection {
                    <InlineError message={message.clone()} />
                }

                <button
                    onclick={on_submit}
                    disabled={!form.is_complete()}
                    class="w-full bg-red-600 hover:bg-red-700 disabled:opacity-50 text-white font-semibold py-2.5 rounded-lg transition-colors"
                >
                    {"Withdraw"}
                </button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn member_since_renders_month_and_year() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(
            member_since(Some(at)),
            Some("Member since March 2025".to_string())
        );
    }

    #[test]
    fn missing_created_at_renders_nothing() {
        assert_eq!(member_since(None), None);
    }
}
