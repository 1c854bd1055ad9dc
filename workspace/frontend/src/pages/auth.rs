use common::records::{NewProfile, Profile};
use common::validation::{SignInForm, SignUpForm};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api_client::{auth, profile};
use crate::common::error::InlineError;

/// Shown for both unknown-username and wrong-password failures so the
/// message never reveals which part was wrong.
const INVALID_CREDENTIALS: &str = "Invalid username or password";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    SignIn,
    SignUp,
}

/// Map the username lookup onto the email to authenticate with. An
/// unclaimed username yields the same message as a wrong password.
fn resolve_sign_in_email(lookup: Option<Profile>) -> Result<String, String> {
    match lookup {
        Some(profile) => Ok(profile.email),
        None => Err(INVALID_CREDENTIALS.to_string()),
    }
}

/// Gate that runs before any account-creation call: a claimed username
/// stops the sign-up here.
fn check_username_free(lookup: Option<Profile>) -> Result<(), String> {
    match lookup {
        Some(_) => Err("Username already taken".to_string()),
        None => Ok(()),
    }
}

/// Resolve the username to its account email, then authenticate. Both a
/// missing profile and a rejected password collapse into the same error.
async fn sign_in(username: &str, password: &str) -> Result<(), String> {
    let email = resolve_sign_in_email(profile::get_profile_by_username(username).await?)?;
    auth::sign_in_with_password(&email, password)
        .await
        .map(|_| ())
        .map_err(|e| {
            log::warn!("Password sign-in rejected: {e}");
            INVALID_CREDENTIALS.to_string()
        })
}

/// Create the account, write its profile row, then sign in. There is no
/// rollback of the auth account if the profile insert fails; the account
/// exists but its username stays unclaimed.
async fn sign_up(form: &SignUpForm) -> Result<(), String> {
    let username = form.username.trim();
    let email = form.email.trim();

    check_username_free(profile::get_profile_by_username(username).await?)?;

    let user = auth::sign_up(email, &form.password).await?;

    profile::create_profile(NewProfile {
        id: user.id,
        username: username.to_string(),
        email: email.to_string(),
        full_name: Some(form.full_name.trim().to_string()),
        transaction_password: form.transaction_password.clone(),
    })
    .await?;

    auth::sign_in_with_password(email, &form.password)
        .await
        .map(|_| ())
}

/// Full page navigation out of the auth screen, dropping all of its state.
fn redirect_to_market() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href("/market") {
            log::error!("Redirect to /market failed: {e:?}");
        }
    }
}

fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

#[function_component(AuthPage)]
pub fn auth_page() -> Html {
    let mode = use_state(|| AuthMode::SignIn);
    let error = use_state(|| Option::<String>::None);
    let busy = use_state(|| false);

    let signin_form = use_state(SignInForm::default);
    let signup_form = use_state(SignUpForm::default);

    let show_password = use_state(|| false);
    let show_transaction_password = use_state(|| false);
    // Rendered but inert, as deployed today. It neither extends nor shortens
    // the stored session.
    let remember_me = use_state(|| false);

    let select_mode = |target: AuthMode| {
        let mode = mode.clone();
        let error = error.clone();
        Callback::from(move |_| {
            mode.set(target);
            error.set(None);
        })
    };

    // Editing any field clears the error banner.
    let edit_signin = |apply: fn(&mut SignInForm, String)| {
        let form = signin_form.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            apply(&mut next, input_value(&e));
            form.set(next);
            error.set(None);
        })
    };
    let edit_signup = |apply: fn(&mut SignUpForm, String)| {
        let form = signup_form.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            apply(&mut next, input_value(&e));
            form.set(next);
            error.set(None);
        })
    };

    let on_signin_submit = {
        let form = signin_form.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Err(validation) = form.validate() {
                error.set(Some(validation.to_string()));
                return;
            }

            busy.set(true);
            let username = form.username.trim().to_string();
            let password = form.password.clone();
            let error = error.clone();
            let busy = busy.clone();
            spawn_local(async move {
                match sign_in(&username, &password).await {
                    Ok(()) => redirect_to_market(),
                    Err(message) => {
                        error.set(Some(message));
                        busy.set(false);
                    }
                }
            });
        })
    };

    let on_signup_submit = {
        let form = signup_form.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Err(validation) = form.validate() {
                error.set(Some(validation.to_string()));
                return;
            }

            busy.set(true);
            let form_data = (*form).clone();
            let error = error.clone();
            let busy = busy.clone();
            spawn_local(async move {
                match sign_up(&form_data).await {
                    Ok(()) => redirect_to_market(),
                    Err(message) => {
                        error.set(Some(message));
                        busy.set(false);
                    }
                }
            });
        })
    };

    let toggle_show_password = {
        let show_password = show_password.clone();
        Callback::from(move |_| show_password.set(!*show_password))
    };
    let toggle_show_transaction_password = {
        let show_transaction_password = show_transaction_password.clone();
        Callback::from(move |_| show_transaction_password.set(!*show_transaction_password))
    };
    let toggle_remember_me = {
        let remember_me = remember_me.clone();
        Callback::from(move |_| remember_me.set(!*remember_me))
    };
    // No password recovery flow is wired up.
    let on_forgot_password = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        log::debug!("Forgot-password clicked (no recovery flow configured)");
    });

    let tab_class = |active: bool| {
        if active {
            "flex-1 py-3 font-semibold text-white border-b-2 border-blue-500"
        } else {
            "flex-1 py-3 font-semibold text-gray-400 hover:text-gray-200 border-b-2 border-transparent"
        }
    };
    let input_class = "w-full bg-gray-700 text-white rounded-lg px-4 py-2.5 \
                       focus:outline-none focus:ring-2 focus:ring-blue-500 placeholder-gray-400";
    let password_type = if *show_password { "text" } else { "password" };
    let transaction_password_type = if *show_transaction_password {
        "text"
    } else {
        "password"
    };

    html! {
        <div class="min-h-screen bg-gray-900 flex items-center justify-center p-4">
            <div class="w-full max-w-md">
                <div class="text-center mb-8">
                    <h1 class="text-4xl font-bold bg-gradient-to-r from-blue-400 to-purple-500 bg-clip-text text-transparent">
                        {"CryptoKit"}
                    </h1>
                    <p class="text-gray-400 mt-2">{"Your gateway to digital assets"}</p>
                </div>

                <div class="bg-gray-800 rounded-xl shadow-2xl overflow-hidden">
                    <div class="flex">
                        <button
                            class={tab_class(*mode == AuthMode::SignIn)}
                            onclick={select_mode(AuthMode::SignIn)}
                        >
                            {"Sign In"}
                        </button>
                        <button
                            class={tab_class(*mode == AuthMode::SignUp)}
                            onclick={select_mode(AuthMode::SignUp)}
                        >
                            {"Sign Up"}
                        </button>
                    </div>

                    <div class="p-6 space-y-4">
                        if let Some(message) = &*error {
                            <InlineError message={message.clone()} />
                        }

                        if *mode == AuthMode::SignIn {
                            <form onsubmit={on_signin_submit} class="space-y-4">
                                <input
                                    class={input_class}
                                    type="text"
                                    placeholder="Username"
                                    value={signin_form.username.clone()}
                                    oninput={edit_signin(|f, v| f.username = v)}
                                />
                                <div class="relative">
                                    <input
                                        class={input_class}
                                        type={password_type}
                                        placeholder="Password"
                                        value={signin_form.password.clone()}
                                        oninput={edit_signin(|f, v| f.password = v)}
                                    />
                                    <button
                                        type="button"
                                        onclick={toggle_show_password.clone()}
                                        class="absolute right-3 top-1/2 -translate-y-1/2 text-gray-400 hover:text-gray-200"
                                    >
                                        <i class={if *show_password { "fas fa-eye-slash" } else { "fas fa-eye" }}></i>
                                    </button>
                                </div>

                                <div class="flex items-center justify-between text-sm">
                                    <label class="flex items-center gap-2 text-gray-400">
                                        <input
                                            type="checkbox"
                                            checked={*remember_me}
                                            onchange={toggle_remember_me}
                                        />
                                        {"Remember me"}
                                    </label>
                                    <a
                                        href="#"
                                        onclick={on_forgot_password}
                                        class="text-blue-400 hover:text-blue-300"
                                    >
                                        {"Forgot password?"}
                                    </a>
                                </div>

                                <button
                                    type="submit"
                                    disabled={*busy}
                                    class="w-full bg-blue-600 hover:bg-blue-700 disabled:opacity-50 text-white font-semibold py-2.5 rounded-lg transition-colors"
                                >
                                    {if *busy { "Signing in..." } else { "Sign In" }}
                                </button>
                            </form>
                        } else {
                            <form onsubmit={on_signup_submit} class="space-y-4">
                                <input
                                    class={input_class}
                                    type="text"
                                    placeholder="Full Name"
                                    value={signup_form.full_name.clone()}
                                    oninput={edit_signup(|f, v| f.full_name = v)}
                                />
                                <input
                                    class={input_class}
                                    type="email"
                                    placeholder="Email"
                                    value={signup_form.email.clone()}
                                    oninput={edit_signup(|f, v| f.email = v)}
                                />
                                <input
                                    class={input_class}
                                    type="text"
                                    placeholder="Username"
                                    value={signup_form.username.clone()}
                                    oninput={edit_signup(|f, v| f.username = v)}
                                />
                                <div class="relative">
                                    <input
                                        class={input_class}
                                        type={password_type}
                                        placeholder="Password"
                                        value={signup_form.password.clone()}
                                        oninput={edit_signup(|f, v| f.password = v)}
                                    />
                                    <button
                                        type="button"
                                        onclick={toggle_show_password}
                                        class="absolute right-3 top-1/2 -translate-y-1/2 text-gray-400 hover:text-gray-200"
                                    >
                                        <i class={if *show_password { "fas fa-eye-slash" } else { "fas fa-eye" }}></i>
                                    </button>
                                </div>
                                <input
                                    class={input_class}
                                    type={password_type}
                                    placeholder="Confirm Password"
                                    value={signup_form.confirm_password.clone()}
                                    oninput={edit_signup(|f, v| f.confirm_password = v)}
                                />
                                <div class="relative">
                                    <input
                                        class={input_class}
                                        type={transaction_password_type}
                                        placeholder="Transaction Password"
                                        value={signup_form.transaction_password.clone()}
                                        oninput={edit_signup(|f, v| f.transaction_password = v)}
                                    />
                                    <button
                                        type="button"
                                        onclick={toggle_show_transaction_password}
                                        class="absolute right-3 top-1/2 -translate-y-1/2 text-gray-400 hover:text-gray-200"
                                    >
                                        <i class={if *show_transaction_password { "fas fa-eye-slash" } else { "fas fa-eye" }}></i>
                                    </button>
                                </div>
                                <input
                                    class={input_class}
                                    type={transaction_password_type}
                                    placeholder="Confirm Transaction Password"
                                    value={signup_form.confirm_transaction_password.clone()}
                                    oninput={edit_signup(|f, v| f.confirm_transaction_password = v)}
                                />
                                <p class="text-xs text-gray-500">
                                    {"The transaction password confirms withdrawals and transfers. \
                                      Keep it different from your login password."}
                                </p>

                                <button
                                    type="submit"
                                    disabled={*busy}
                                    class="w-full bg-blue-600 hover:bg-blue-700 disabled:opacity-50 text-white font-semibold py-2.5 rounded-lg transition-colors"
                                >
                                    {if *busy { "Creating account..." } else { "Create Account" }}
                                </button>
                            </form>
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claimed_profile() -> Profile {
        Profile {
            id: "u1".to_string(),
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            full_name: None,
            transaction_password: "t1".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn unknown_username_collapses_into_invalid_credentials() {
        assert_eq!(
            resolve_sign_in_email(None),
            Err(INVALID_CREDENTIALS.to_string())
        );
    }

    #[test]
    fn resolved_username_signs_in_by_its_email() {
        assert_eq!(
            resolve_sign_in_email(Some(claimed_profile())),
            Ok("a@x.com".to_string())
        );
    }

    #[test]
    fn claimed_username_stops_sign_up_before_account_creation() {
        assert_eq!(
            check_username_free(Some(claimed_profile())),
            Err("Username already taken".to_string())
        );
    }

    #[test]
    fn unclaimed_username_passes_the_gate() {
        assert_eq!(check_username_free(None), Ok(()));
    }
}
