use yew::prelude::*;

/// Indeterminate spinner used inline in tables and panels.
#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div class="animate-spin rounded-full h-8 w-8 border-t-2 border-b-2 border-blue-500"></div>
    }
}

/// Full-screen loading state, shown while the session guard resolves.
#[function_component(FullScreenLoading)]
pub fn full_screen_loading() -> Html {
    html! {
        <div class="min-h-screen bg-gray-900 flex items-center justify-center">
            <Spinner />
        </div>
    }
}
