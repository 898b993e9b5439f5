use log::{error, info};
use std::cell::RefCell;

use crate::error::Result;

/// Key under which the signed-in identifier is kept in per-tab storage.
pub const SESSION_STORAGE_KEY: &str = "admin_user_id";

/// Where the session identifier is mirrored so a reload keeps the user signed in.
pub trait SessionStore {
    fn load(&self) -> Option<String>;
    fn save(&self, user_id: &str) -> Result<()>;
    fn clear(&self);
}

/// Store used by tests and by builds without browser storage.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    value: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn with_user(user_id: &str) -> Self {
        Self {
            value: RefCell::new(Some(user_id.to_string())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, user_id: &str) -> Result<()> {
        *self.value.borrow_mut() = Some(user_id.to_string());
        Ok(())
    }

    fn clear(&self) {
        self.value.borrow_mut().take();
    }
}

/// Top-level authentication state. Authenticated exactly when a non-empty
/// user identifier is held.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user_id: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user_id: impl Into<String>) -> Self {
        let mut session = Self::default();
        session.set_user(user_id.into());
        session
    }

    /// Session as left in the store by a previous page load.
    pub fn restore(store: &dyn SessionStore) -> Self {
        match store.load() {
            Some(user_id) if !user_id.trim().is_empty() => {
                info!("Restored session for {}", user_id);
                Self::authenticated(user_id)
            }
            _ => Self::anonymous(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Current identifier, or the empty string when signed out.
    pub fn user_id(&self) -> &str {
        self.user_id.as_deref().unwrap_or("")
    }

    /// Signs in as `user_id` and mirrors it into `store`. A failed store write
    /// is logged; the in-memory session is still updated.
    pub fn login(&mut self, user_id: &str, store: &dyn SessionStore) {
        self.set_user(user_id.to_string());
        if let Some(id) = self.user_id.as_deref() {
            info!("Session started for {}", id);
            if let Err(e) = store.save(id) {
                error!("Failed to persist session: {}", e);
            }
        }
    }

    pub fn logout(&mut self, store: &dyn SessionStore) {
        if let Some(id) = self.user_id.take() {
            info!("Session ended for {}", id);
        }
        store.clear();
    }

    fn set_user(&mut self, user_id: String) {
        let trimmed = user_id.trim();
        self.user_id = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }
}
