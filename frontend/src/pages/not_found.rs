use yew::prelude::*;
use yew_router::prelude::*;

use crate::theme;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let palette = theme::current();

    html! {
        <div class={classes!("flex", "flex-col", "items-center", "justify-center", "gap-4", palette.page)}>
            <h1 class={classes!("text-3xl", "font-bold", palette.heading)}>{"404 - Page Not Found"}</h1>
            <p class={palette.muted}>{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::Dashboard} classes={classes!(palette.accent_text, "underline")}>
                {"Back to the dashboard"}
            </Link<Route>>
        </div>
    }
}
