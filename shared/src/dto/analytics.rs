use serde::{Deserialize, Serialize};

/// Chat volume attributed to one backend model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelCount {
    pub model: String,
    pub count: u64,
}

impl ModelCount {
    pub fn display_name(&self) -> &str {
        model_display_name(&self.model)
    }
}

/// Chats recorded on a single day; `date` is kept as the backend label
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyCount {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopUser {
    pub user_id: String,
    pub chat_count: u64,
}

/// Aggregate snapshot served by `GET /dashboard/analytics/`.
///
/// A snapshot is never merged with a previous one; each fetch replaces it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsSnapshot {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_chats: u64,
    #[serde(default)]
    pub chats_by_model: Vec<ModelCount>,
    #[serde(default)]
    pub daily_activity: Vec<DailyCount>,
    #[serde(default)]
    pub top_users: Vec<TopUser>,
}

impl AnalyticsSnapshot {
    /// Average chats per user rounded to the nearest integer, halves rounding up.
    /// A snapshot with no users divides by one.
    pub fn average_chats_per_user(&self) -> u64 {
        let users = self.total_users.max(1);
        (self.total_chats * 2 + users) / (users * 2)
    }

    pub fn model_chat_total(&self) -> u64 {
        self.chats_by_model.iter().map(|m| m.count).sum()
    }

    /// Whole-number share of `count` within the per-model total.
    pub fn model_share_percent(&self, count: u64) -> u64 {
        let total = self.model_chat_total();
        if total == 0 {
            return 0;
        }
        ((count as f64 / total as f64) * 100.0).round() as u64
    }
}

/// Public product names for backend model identifiers. Applied at render
/// time only; stored snapshots keep the raw identifiers.
pub fn model_display_name(model: &str) -> &str {
    match model {
        "gemini" | "neura.essence1.o" => "neura.essence1.o",
        "groq" => "neura.swift1.o",
        other => other,
    }
}
