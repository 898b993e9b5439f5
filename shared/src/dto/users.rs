use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// The account that can never be deleted from the dashboard.
pub const PROTECTED_USER_ID: &str = "admin";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A row of the user listing, as served by `GET /dashboard/users/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminUserDto {
    /// Backend document id (`_id` on the wire)
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub chat_count: u64,
    /// Raw timestamp as sent by the backend; `None` for users who never chatted
    #[serde(default)]
    pub last_activity: Option<String>,
}

impl AdminUserDto {
    pub fn is_protected(&self) -> bool {
        is_protected_user(&self.user_id)
    }

    /// Parsed last activity, normalised to UTC. Timestamps without an offset
    /// are taken to be UTC already.
    pub fn last_activity_at(&self) -> Option<DateTime<Utc>> {
        self.last_activity.as_deref().and_then(parse_timestamp)
    }

    pub fn last_activity_display(&self) -> String {
        match self.last_activity.as_deref() {
            None => "No activity".to_string(),
            Some(raw) if raw.trim().is_empty() => "No activity".to_string(),
            Some(raw) => match parse_timestamp(raw) {
                Some(at) => at.format(DISPLAY_FORMAT).to_string(),
                None => raw.to_string(),
            },
        }
    }

    /// Case-insensitive substring match on `user_id`. An empty term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim();
        term.is_empty() || self.user_id.to_lowercase().contains(&term.to_lowercase())
    }
}

pub fn is_protected_user(user_id: &str) -> bool {
    user_id == PROTECTED_USER_ID
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

/// One page of the user listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UsersPage {
    #[serde(default)]
    pub users: Vec<AdminUserDto>,
    #[serde(default)]
    pub total: u64,
}
