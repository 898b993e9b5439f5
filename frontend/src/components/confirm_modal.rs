use yew::prelude::*;

use crate::theme::Palette;

#[derive(Properties, Clone, PartialEq)]
pub struct ConfirmModalProps {
    pub is_open: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    pub confirm_text: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
    pub palette: &'static Palette,
}

/// Two-button confirmation dialog. Clicking the overlay cancels.
#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_overlay_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_cancel.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let on_confirm_click = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    html! {
        <div class="fixed inset-0 z-40 flex items-center justify-center">
            <div
                class="absolute inset-0 bg-black bg-opacity-60"
                onclick={on_overlay_click}
            ></div>
            <div
                class={classes!("relative", "p-6", "max-w-md", "w-full", "mx-4", props.palette.panel)}
                onclick={on_modal_click}
                role="dialog"
            >
                <h3 class={classes!("text-lg", "font-medium", "mb-4", props.palette.heading)}>{ props.title.clone() }</h3>
                <p class={classes!("text-sm", "mb-6", props.palette.muted)}>{ props.message.clone() }</p>
                <div class="flex justify-end space-x-3">
                    <button
                        onclick={on_cancel_click}
                        class={classes!("px-4", "py-2", "text-sm", props.palette.secondary_button)}
                    >
                        { "Cancel" }
                    </button>
                    <button
                        onclick={on_confirm_click}
                        class="px-4 py-2 text-sm font-medium text-white bg-red-600 hover:bg-red-700 rounded-md focus:outline-none focus:ring-2 focus:ring-red-500"
                    >
                        { props.confirm_text.clone() }
                    </button>
                </div>
            </div>
        </div>
    }
}
