use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
}

/// Page-level error banner, rendered above content that stays visible.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="bg-red-500 bg-opacity-10 border border-red-500 text-red-500 p-4 rounded-lg mb-6">
            {&props.message}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct InlineErrorProps {
    pub message: String,
}

/// Compact error line used inside modals and forms.
#[function_component(InlineError)]
pub fn inline_error(props: &InlineErrorProps) -> Html {
    html! {
        <div class="bg-red-500/10 text-red-500 p-3 rounded-lg text-sm">
            <p class="flex items-start gap-2">
                <i class="fas fa-exclamation-circle flex-shrink-0 mt-0.5"></i>
                <span>{&props.message}</span>
            </p>
        </div>
    }
}
