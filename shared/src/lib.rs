pub mod dto {
    pub mod analytics;
    pub mod auth;
    pub mod common;
    pub mod users;
}

pub mod state {
    pub mod dashboard;
    pub mod login;
    pub mod pagination;
    pub mod session;
    pub mod users;
}

pub mod api;
pub mod config;
pub mod error;

// Re-export commonly used items
pub use api::AdminApi;
pub use config::{DashboardConfig, ThemeName};
pub use error::{DashboardError, Result};

// Re-export DTOs
pub use dto::{
    analytics::{model_display_name, AnalyticsSnapshot, DailyCount, ModelCount, TopUser},
    auth::{AdminLoginRequest, AdminLoginResponse},
    common::ErrorResponse,
    users::{AdminUserDto, UsersPage, PROTECTED_USER_ID},
};

// Re-export view state
pub use state::{
    dashboard::{AnalyticsTicket, DashboardAction, DashboardState, DashboardTab, UsersTicket},
    login::submit_login,
    pagination::PaginationCursor,
    session::{MemorySessionStore, Session, SessionStore, SESSION_STORAGE_KEY},
    users::{delete_user, UserListing},
};
