use shared::PaginationCursor;
use yew::prelude::*;

use crate::theme::Palette;

#[derive(Properties, Clone, PartialEq)]
pub struct PaginationProps {
    pub cursor: PaginationCursor,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
    /// Disables both buttons while a page is loading
    #[prop_or_default]
    pub busy: bool,
    pub palette: &'static Palette,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let cursor = props.cursor;

    let on_previous = {
        let on_previous = props.on_previous.clone();
        Callback::from(move |_: MouseEvent| on_previous.emit(()))
    };
    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    let button = classes!("px-3", "py-1.5", "text-sm", props.palette.secondary_button);

    html! {
        <div class="flex items-center justify-between px-6 py-4">
            <span class={classes!("text-sm", props.palette.muted)}>{ cursor.range_label() }</span>
            <div class="flex items-center gap-3">
                <button
                    class={button.clone()}
                    onclick={on_previous}
                    disabled={props.busy || !cursor.has_previous()}
                >
                    {"Previous"}
                </button>
                <span class={classes!("text-sm", props.palette.muted)}>{ cursor.page_label() }</span>
                <button
                    class={button}
                    onclick={on_next}
                    disabled={props.busy || !cursor.has_next()}
                >
                    {"Next"}
                </button>
            </div>
        </div>
    }
}
