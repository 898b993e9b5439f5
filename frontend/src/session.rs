use gloo_storage::{SessionStorage, Storage};
use log::{debug, error};
use shared::{DashboardError, Result, Session, SessionStore, SESSION_STORAGE_KEY};
use std::rc::Rc;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

/// `sessionStorage`-backed store. The identifier is kept as the raw string,
/// not JSON, so it reads the same from the devtools console.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<String> {
        match SessionStorage::raw().get_item(SESSION_STORAGE_KEY) {
            Ok(value) => value,
            Err(e) => {
                error!("Failed to read session storage: {:?}", e);
                None
            }
        }
    }

    fn save(&self, user_id: &str) -> Result<()> {
        SessionStorage::raw()
            .set_item(SESSION_STORAGE_KEY, user_id)
            .map_err(|e| DashboardError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) {
        if let Err(e) = SessionStorage::raw().remove_item(SESSION_STORAGE_KEY) {
            error!("Failed to clear session storage: {:?}", e);
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub session: Session,
}

impl SessionState {
    pub fn restore() -> Self {
        Self {
            session: Session::restore(&BrowserSessionStore),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn user_id(&self) -> &str {
        self.session.user_id()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    Login(String),
    Logout,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut session = self.session.clone();
        match action {
            SessionAction::Login(user_id) => session.login(&user_id, &BrowserSessionStore),
            SessionAction::Logout => session.logout(&BrowserSessionStore),
        }
        Rc::new(Self { session })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionContext {
    pub state: SessionState,
    pub login: Callback<String>,
    pub logout: Callback<()>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer_eq(SessionState::restore);

    let login = {
        let session = session.clone();
        Callback::from(move |user_id: String| {
            debug!("Session login for {}", user_id);
            session.dispatch(SessionAction::Login(user_id));
        })
    };

    let logout = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            debug!("Session logout");
            session.dispatch(SessionAction::Logout);
        })
    };

    let context = SessionContext {
        state: (*session).clone(),
        login,
        logout,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_login_mirrors_raw_identifier() {
        BrowserSessionStore.clear();
        let state = Rc::new(SessionState::default()).reduce(SessionAction::Login("admin".into()));

        assert!(state.is_authenticated());
        assert_eq!(
            SessionStorage::raw().get_item(SESSION_STORAGE_KEY).ok().flatten().as_deref(),
            Some("admin")
        );
        assert_eq!(SessionState::restore(), *state);
    }

    #[wasm_bindgen_test]
    fn test_logout_clears_storage() {
        let state = Rc::new(SessionState::default())
            .reduce(SessionAction::Login("ops".into()))
            .reduce(SessionAction::Logout);

        assert!(!state.is_authenticated());
        assert_eq!(BrowserSessionStore.load(), None);
        assert!(!SessionState::restore().is_authenticated());
    }
}
