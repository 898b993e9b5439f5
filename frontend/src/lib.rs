use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::toast::ToastProvider;
use crate::session::{SessionContext, SessionProvider};

pub mod api;
pub mod components;
pub mod config;
pub mod session;
pub mod theme;
pub mod pages {
    pub mod dashboard;
    pub mod login;
    pub mod not_found;
}

use pages::{dashboard::Dashboard, login::Login, not_found::NotFound};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <SessionProvider>
                <BrowserRouter>
                    <main class="app-container">
                        <Switch<Route> render={switch} />
                    </main>
                </BrowserRouter>
            </SessionProvider>
        </ToastProvider>
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

/// Renders its children only for an authenticated session and sends
/// everyone else to the login page.
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &Props) -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let navigator = use_navigator().expect("ProtectedRoute must be rendered inside a router");
    let is_authenticated = session.state.is_authenticated();

    use_effect_with(is_authenticated, move |is_auth| {
        if !*is_auth {
            debug!("Unauthenticated, redirecting to login");
            navigator.push(&Route::Login);
        }
        || ()
    });

    if is_authenticated {
        html! { <>{ props.children.clone() }</> }
    } else {
        html! {}
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Dashboard => html! {
            <ProtectedRoute>
                <Dashboard />
            </ProtectedRoute>
        },
        Route::Login => html! { <Login /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();

    let config = config::Config::load();
    info!(
        "Starting admin dashboard against {} (page size {}, theme {})",
        config.api_base_url, config.page_size, config.theme
    );

    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Entry point called by Trunk
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
