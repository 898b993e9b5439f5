use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::SessionContext;
use crate::theme;
use crate::Route;

#[function_component(Header)]
pub fn header() -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let navigator = use_navigator().expect("Header must be rendered inside a router");
    let palette = theme::current();

    let on_logout_click = {
        let logout = session.logout.clone();
        Callback::from(move |_: MouseEvent| {
            logout.emit(());
            navigator.push(&Route::Login);
        })
    };

    html! {
        <header class={classes!("sticky", "top-0", "z-30", "shadow-lg", palette.panel)}>
            <div class="max-w-7xl mx-auto px-6 py-4 flex justify-between items-center">
                <h1 class="text-2xl font-bold">
                    <span class={palette.accent_text}>{"Admin"}</span>{" Dashboard"}
                </h1>
                <div class="flex items-center gap-4">
                    <span class={palette.muted}>{ format!("Welcome, {}", session.state.user_id()) }</span>
                    <button
                        onclick={on_logout_click}
                        class={classes!("px-4", "py-2", "text-sm", palette.secondary_button)}
                    >
                        {"Logout"}
                    </button>
                </div>
            </div>
        </header>
    }
}
