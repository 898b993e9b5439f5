//! View state of the dashboard page as a pure reducer.
//!
//! Every fetch is tagged with a ticket when it is dispatched. Responses are
//! applied only if their ticket is still the latest one for that slot, so a
//! slow response for an old page or tab can never overwrite newer data.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::analytics::AnalyticsSnapshot;
use crate::dto::users::{is_protected_user, AdminUserDto, UsersPage};
use crate::state::pagination::PaginationCursor;
use crate::state::users::UserListing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DashboardTab {
    #[default]
    Analytics,
    Users,
}

/// Identifies one analytics fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsTicket(Uuid);

impl AnalyticsTicket {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AnalyticsTicket {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifies one user-listing fetch and the window it asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsersTicket {
    id: Uuid,
    pub skip: u64,
    pub limit: u64,
}

impl UsersTicket {
    pub fn for_cursor(cursor: &PaginationCursor) -> Self {
        Self {
            id: Uuid::new_v4(),
            skip: cursor.skip,
            limit: cursor.limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    SelectTab(DashboardTab),
    AnalyticsRequested(AnalyticsTicket),
    AnalyticsLoaded {
        ticket: AnalyticsTicket,
        snapshot: AnalyticsSnapshot,
    },
    AnalyticsFailed {
        ticket: AnalyticsTicket,
        error: String,
    },
    UsersRequested(UsersTicket),
    UsersLoaded {
        ticket: UsersTicket,
        page: UsersPage,
    },
    UsersFailed {
        ticket: UsersTicket,
        error: String,
    },
    PreviousPage,
    NextPage,
    SetSearch(String),
    RequestDelete(String),
    CancelDelete,
    DeleteStarted(String),
    UserDeleted(String),
    DeleteFailed {
        user_id: String,
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub tab: DashboardTab,

    pub analytics: Option<AnalyticsSnapshot>,
    pub analytics_loading: bool,
    pub analytics_error: Option<String>,
    analytics_ticket: Option<AnalyticsTicket>,

    pub listing: UserListing,
    pub users_loading: bool,
    pub users_error: Option<String>,
    users_ticket: Option<UsersTicket>,

    pub cursor: PaginationCursor,
    pub search: String,

    /// User awaiting delete confirmation
    pub pending_delete: Option<String>,
    /// User whose delete request is in flight
    pub deleting: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(PaginationCursor::default().limit)
    }
}

impl DashboardState {
    pub fn new(page_size: u64) -> Self {
        Self {
            tab: DashboardTab::default(),
            analytics: None,
            analytics_loading: false,
            analytics_error: None,
            analytics_ticket: None,
            listing: UserListing::default(),
            users_loading: false,
            users_error: None,
            users_ticket: None,
            cursor: PaginationCursor::new(page_size),
            search: String::new(),
            pending_delete: None,
            deleting: None,
        }
    }

    /// Rows shown in the user table: the current page narrowed by the search term.
    pub fn visible_users(&self) -> Vec<&AdminUserDto> {
        self.listing.filtered(&self.search)
    }

    pub fn average_chats_per_user(&self) -> u64 {
        self.analytics
            .as_ref()
            .map(AnalyticsSnapshot::average_chats_per_user)
            .unwrap_or(0)
    }

    pub fn apply(mut self, action: DashboardAction) -> Self {
        match action {
            DashboardAction::SelectTab(tab) => {
                self.tab = tab;
            }
            DashboardAction::AnalyticsRequested(ticket) => {
                self.analytics_ticket = Some(ticket);
                self.analytics_loading = true;
                self.analytics_error = None;
            }
            DashboardAction::AnalyticsLoaded { ticket, snapshot } => {
                if self.analytics_ticket != Some(ticket) {
                    debug!("Discarding stale analytics response {}", ticket.0);
                    return self;
                }
                self.analytics = Some(snapshot);
                self.analytics_loading = false;
                self.analytics_error = None;
            }
            DashboardAction::AnalyticsFailed { ticket, error } => {
                if self.analytics_ticket != Some(ticket) {
                    debug!("Discarding stale analytics failure {}", ticket.0);
                    return self;
                }
                self.analytics_loading = false;
                self.analytics_error = Some(error);
            }
            DashboardAction::UsersRequested(ticket) => {
                self.users_ticket = Some(ticket);
                self.users_loading = true;
                self.users_error = None;
            }
            DashboardAction::UsersLoaded { ticket, page } => {
                if self.users_ticket != Some(ticket) {
                    debug!(
                        "Discarding stale users page {} (skip={} limit={})",
                        ticket.id, ticket.skip, ticket.limit
                    );
                    return self;
                }
                self.cursor.set_total(page.total);
                self.listing = UserListing::from_page(page);
                self.users_loading = false;
                self.users_error = None;
            }
            DashboardAction::UsersFailed { ticket, error } => {
                if self.users_ticket != Some(ticket) {
                    debug!("Discarding stale users failure {}", ticket.id);
                    return self;
                }
                self.users_loading = false;
                self.users_error = Some(error);
            }
            DashboardAction::PreviousPage => {
                self.cursor.previous();
            }
            DashboardAction::NextPage => {
                self.cursor.next();
            }
            DashboardAction::SetSearch(term) => {
                self.search = term;
            }
            DashboardAction::RequestDelete(user_id) => {
                if is_protected_user(&user_id) {
                    warn!("Refusing to offer deletion of protected user {}", user_id);
                    return self;
                }
                self.pending_delete = Some(user_id);
            }
            DashboardAction::CancelDelete => {
                self.pending_delete = None;
            }
            DashboardAction::DeleteStarted(user_id) => {
                self.pending_delete = None;
                self.deleting = Some(user_id);
            }
            DashboardAction::UserDeleted(user_id) => {
                self.listing.remove(&user_id);
                self.deleting = None;
            }
            DashboardAction::DeleteFailed { user_id, error } => {
                warn!("Delete of {} failed: {}", user_id, error);
                self.deleting = None;
            }
        }
        self
    }
}
