use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Centered dialog over a dimmed backdrop. Clicking the backdrop or the
/// corner button closes it; content is supplied by the caller.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };
    let on_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };
    // Keep clicks inside the dialog from reaching the backdrop handler.
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            class="fixed inset-0 bg-black/70 z-40 flex items-center justify-center p-4"
            onclick={on_backdrop}
        >
            <div
                class="bg-gray-800 rounded-xl shadow-2xl w-full max-w-md max-h-[90vh] overflow-y-auto"
                onclick={swallow}
            >
                <div class="flex items-center justify-between p-4 border-b border-gray-700">
                    <h2 class="text-lg font-semibold text-white">{&props.title}</h2>
                    <button
                        onclick={on_button}
                        class="text-gray-400 hover:text-white transition-colors"
                    >
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                <div class="p-4">
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}
