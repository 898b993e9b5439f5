use log::{debug, error};
use shared::submit_login;
use web_sys::HtmlInputElement;
use yew::events::SubmitEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::HttpAdminApi;
use crate::config::Config;
use crate::session::SessionContext;
use crate::theme;
use crate::Route;

/// Text of the submit button for the given in-flight state.
pub fn submit_label(loading: bool) -> &'static str {
    if loading {
        "Logging in..."
    } else {
        "Sign In"
    }
}

#[function_component(Login)]
pub fn login() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let session = use_context::<SessionContext>().expect("Session context not found");
    let navigator = use_navigator().expect("Login must be rendered inside a router");
    let palette = theme::current();

    // Leave the login page as soon as the session is authenticated
    {
        let navigator = navigator.clone();
        use_effect_with(session.state.is_authenticated(), move |authenticated| {
            if *authenticated {
                debug!("Session authenticated, redirecting to dashboard");
                navigator.push(&Route::Dashboard);
            }
            || ()
        });
    }

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let login = session.login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }

            let username = (*username).clone();
            let password = (*password).clone();
            let error = error.clone();
            let loading = loading.clone();
            let login = login.clone();

            loading.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let api = HttpAdminApi::new(&Config::load());
                match submit_login(&api, &username, &password).await {
                    Ok(user_id) => login.emit(user_id),
                    Err(e) => {
                        error!("Login failed: {}", e);
                        error.set(Some(e.user_message()));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let input_class = classes!("w-full", "px-4", "py-3", palette.input);

    html! {
        <div class={classes!("flex", "items-center", "justify-center", "p-4", palette.page)}>
            <form {onsubmit} class={classes!("max-w-md", "w-full", "p-8", palette.panel)}>
                <div class="text-center mb-8">
                    <h1 class={classes!("text-3xl", "font-bold", palette.heading)}>{"Admin Dashboard"}</h1>
                    <p class={classes!("mt-2", palette.muted)}>{"Sign in to access your analytics"}</p>
                </div>

                <div class="space-y-5">
                    <div>
                        <label for="username" class={classes!("block", "text-sm", "font-semibold", "mb-2", palette.muted)}>
                            {"Username"}
                        </label>
                        <input
                            id="username"
                            type="text"
                            class={input_class.clone()}
                            placeholder="Enter your username"
                            value={(*username).clone()}
                            oninput={on_username_input}
                            disabled={*loading}
                        />
                    </div>

                    <div>
                        <label for="password" class={classes!("block", "text-sm", "font-semibold", "mb-2", palette.muted)}>
                            {"Password"}
                        </label>
                        <div class="relative">
                            <input
                                id="password"
                                type={if *show_password { "text" } else { "password" }}
                                class={input_class}
                                placeholder="Enter your password"
                                value={(*password).clone()}
                                oninput={on_password_input}
                                disabled={*loading}
                            />
                            <button
                                type="button"
                                onclick={toggle_password}
                                disabled={*loading}
                                class={classes!("absolute", "right-3", "top-1/2", "-translate-y-1/2", "text-xs", palette.muted)}
                            >
                                { if *show_password { "Hide" } else { "Show" } }
                            </button>
                        </div>
                    </div>

                    if let Some(message) = (*error).clone() {
                        <p class={classes!("text-sm", "text-center", "py-2", palette.error_banner)}>{ message }</p>
                    }

                    <button
                        type="submit"
                        disabled={*loading}
                        class={classes!("w-full", "py-3", palette.primary_button)}
                    >
                        { submit_label(*loading) }
                    </button>
                </div>
            </form>
        </div>
    }
}
