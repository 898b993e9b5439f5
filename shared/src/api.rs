//! Contract with the backend collaborator.
//!
//! The browser client in the frontend crate implements [`AdminApi`] over
//! HTTP; tests substitute a mock. Futures are not `Send` because browser
//! fetches are bound to the page's event loop.

use async_trait::async_trait;

use crate::dto::analytics::AnalyticsSnapshot;
use crate::dto::auth::{AdminLoginRequest, AdminLoginResponse};
use crate::dto::users::UsersPage;
use crate::error::Result;

/// Paths served by the backend, relative to the configured base URL.
pub mod endpoints {
    pub const ADMIN_LOGIN: &str = "/users/admin-login";
    pub const ANALYTICS: &str = "/dashboard/analytics/";

    pub fn users(skip: u64, limit: u64) -> String {
        format!("/dashboard/users/?skip={}&limit={}", skip, limit)
    }

    pub fn user(user_id: &str) -> String {
        format!("/dashboard/users/{}", urlencoding::encode(user_id))
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait AdminApi {
    /// `POST /users/admin-login`. Non-success statuses come back as
    /// [`DashboardError::Http`](crate::DashboardError::Http) carrying the
    /// backend's message when it sent one.
    async fn admin_login(&self, request: &AdminLoginRequest) -> Result<AdminLoginResponse>;

    async fn fetch_analytics(&self) -> Result<AnalyticsSnapshot>;

    /// One page of users. A window past the end is a valid, empty page.
    async fn fetch_users(&self, skip: u64, limit: u64) -> Result<UsersPage>;

    async fn delete_user(&self, user_id: &str) -> Result<()>;
}
