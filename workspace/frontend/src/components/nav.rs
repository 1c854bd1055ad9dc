use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

/// Quick-access buttons shown on the market view.
#[function_component(MarketNav)]
pub fn market_nav() -> Html {
    let navigator = use_navigator().expect("router context");

    let nav_button = |route: Route, class: &'static str, icon: &'static str, label: &'static str| {
        let navigator = navigator.clone();
        let onclick = Callback::from(move |_| navigator.push(&route));
        html! {
            <button {onclick} class={classes!(
                "px-4", "py-2", "rounded-lg", "font-medium",
                "flex", "items-center", "gap-2", "transition-colors",
                class,
            )}>
                <i class={icon}></i>
                {label}
            </button>
        }
    };

    html! {
        <div class="flex flex-wrap gap-3 mb-6">
            {nav_button(
                Route::TotalAssets,
                "bg-green-600 hover:bg-green-700 text-white",
                "fas fa-wallet",
                "Total Assets",
            )}
            {nav_button(
                Route::InternalTransfer,
                "bg-blue-600 hover:bg-blue-700 text-white",
                "fas fa-paper-plane",
                "Internal Transfer",
            )}
            {nav_button(
                Route::Profile,
                "bg-purple-600 hover:bg-purple-700 text-white",
                "fas fa-user-circle",
                "Profile",
            )}
            {nav_button(
                Route::Membership,
                "bg-yellow-500 hover:bg-yellow-600 text-black",
                "fas fa-crown",
                "Membership",
            )}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

/// Header shared by the sub-views: back arrow to the market plus a
/// gradient title.
#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    let navigator = use_navigator().expect("router context");
    let on_back = Callback::from(move |_| navigator.push(&Route::Market));

    html! {
        <div class="flex items-center gap-4 mb-8">
            <button
                onclick={on_back}
                class="text-gray-400 hover:text-white transition-colors"
                title="Back to market"
            >
                <i class="fas fa-arrow-left text-xl"></i>
            </button>
            <div>
                <h1 class="text-3xl font-bold bg-gradient-to-r from-blue-400 to-purple-500 bg-clip-text text-transparent">
                    {&props.title}
                </h1>
                if let Some(subtitle) = &props.subtitle {
                    <p class="text-gray-400 mt-1">{subtitle}</p>
                }
            </div>
        </div>
    }
}
