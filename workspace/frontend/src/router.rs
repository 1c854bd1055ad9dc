use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::session_guard::RequireSession;
use crate::pages::auth::AuthPage;
use crate::pages::internal_transfer::InternalTransferPage;
use crate::pages::market::MarketPage;
use crate::pages::membership::MembershipPage;
use crate::pages::profile::ProfilePage;
use crate::pages::total_assets::TotalAssetsPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/market")]
    Market,
    #[at("/total-assets")]
    TotalAssets,
    #[at("/internal-transfer")]
    InternalTransfer,
    #[at("/profile")]
    Profile,
    #[at("/membership")]
    Membership,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering Auth page");
            html! { <AuthPage /> }
        }
        Route::Market => {
            log::trace!("Rendering Market page");
            html! { <RequireSession><MarketPage /></RequireSession> }
        }
        Route::TotalAssets => {
            log::trace!("Rendering Total Assets page");
            html! { <RequireSession><TotalAssetsPage /></RequireSession> }
        }
        Route::InternalTransfer => {
            log::trace!("Rendering Internal Transfer page");
            html! { <RequireSession><InternalTransferPage /></RequireSession> }
        }
        Route::Profile => {
            log::trace!("Rendering Profile page");
            html! { <RequireSession><ProfilePage /></RequireSession> }
        }
        Route::Membership => {
            log::trace!("Rendering Membership page");
            html! { <RequireSession><MembershipPage /></RequireSession> }
        }
        Route::NotFound => {
            log::warn!("Unknown route, redirecting to sign-in");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}
