use serde::Serialize;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::auth;
use crate::common::loading::FullScreenLoading;
use crate::router::Route;

/// Resolution state of the session lookup. Exactly one lookup runs per
/// mount, so the state leaves `Checking` exactly once; nothing is cached
/// across mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Checking,
    Authenticated,
    Unauthenticated,
}

impl SessionState {
    /// A lookup error resolves to `Unauthenticated`: the guard fails closed.
    pub fn resolved(live_session: bool) -> Self {
        if live_session {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        }
    }
}

/// Query carried to the sign-in route so it could return the user to the
/// view they asked for. The auth screen currently ignores it.
#[derive(Serialize)]
struct ReturnTo {
    from: String,
}

#[derive(Properties, PartialEq)]
pub struct RequireSessionProps {
    pub children: Children,
}

/// Gates a protected view: spinner while the session lookup is in flight,
/// then either the child view or a redirect to the entry route. Never more
/// than one of the three at a time.
#[function_component(RequireSession)]
pub fn require_session(props: &RequireSessionProps) -> Html {
    let state = use_state(|| SessionState::Checking);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let session = auth::check_session().await;
                state.set(SessionState::resolved(session.is_some()));
            });
            || ()
        });
    }

    match *state {
        SessionState::Checking => html! { <FullScreenLoading /> },
        SessionState::Authenticated => html! { <>{ for props.children.iter() }</> },
        SessionState::Unauthenticated => html! { <RedirectToSignIn /> },
    }
}

/// Pushes the entry route with the attempted path in the query string.
#[function_component(RedirectToSignIn)]
fn redirect_to_sign_in() -> Html {
    let navigator = use_navigator().expect("router context");
    let location = use_location();

    use_effect_with((), move |_| {
        let from = location
            .map(|l| l.path().to_string())
            .unwrap_or_else(|| "/".to_string());
        log::info!("No live session, redirecting to sign-in (from {from})");

        if navigator
            .push_with_query(&Route::Home, &ReturnTo { from })
            .is_err()
        {
            navigator.push(&Route::Home);
        }
        || ()
    });

    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_result_maps_onto_exactly_one_terminal_state() {
        assert_eq!(SessionState::resolved(true), SessionState::Authenticated);
        assert_eq!(SessionState::resolved(false), SessionState::Unauthenticated);
    }

    #[test]
    fn terminal_states_differ_from_checking() {
        assert_ne!(SessionState::resolved(true), SessionState::Checking);
        assert_ne!(SessionState::resolved(false), SessionState::Checking);
    }
}
