use log::{debug, error};

use crate::api::AdminApi;
use crate::dto::users::{is_protected_user, AdminUserDto, UsersPage};
use crate::error::{DashboardError, Result};

pub const DELETE_SUCCEEDED: &str = "User deleted successfully";
pub const DELETE_FAILED: &str = "Error deleting user";

pub fn delete_confirmation_prompt(user_id: &str) -> String {
    format!("Are you sure you want to delete user {} and all their chats?", user_id)
}

/// The page of users currently held by the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserListing {
    users: Vec<AdminUserDto>,
}

impl UserListing {
    pub fn from_page(page: UsersPage) -> Self {
        Self { users: page.users }
    }

    pub fn users(&self) -> &[AdminUserDto] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Users of this page whose id contains `term`, ignoring case.
    pub fn filtered(&self, term: &str) -> Vec<&AdminUserDto> {
        self.users.iter().filter(|u| u.matches_search(term)).collect()
    }

    /// Drops every row for `user_id`; returns whether anything was removed.
    pub fn remove(&mut self, user_id: &str) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.user_id != user_id);
        self.users.len() != before
    }
}

/// Deletes `user_id` on the backend. The protected account is refused
/// locally and never sent.
pub async fn delete_user<A>(api: &A, user_id: &str) -> Result<()>
where
    A: AdminApi + ?Sized,
{
    if is_protected_user(user_id) {
        return Err(DashboardError::Forbidden(format!(
            "User {} cannot be deleted",
            user_id
        )));
    }

    debug!("Deleting user {}", user_id);
    api.delete_user(user_id).await.map_err(|e| {
        error!("Error deleting user {}: {}", user_id, e);
        e
    })
}
