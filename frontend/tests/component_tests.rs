//! Render helpers exercised against payloads shaped like the backend's.

use admin_dashboard::components::charts::{bar_chart_svg, line_chart_svg, pie_chart_svg};
use admin_dashboard::theme::{DAYLIGHT, EMBER};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared::{AnalyticsSnapshot, DashboardAction, DashboardState, UsersPage, UsersTicket};

fn analytics_payload() -> AnalyticsSnapshot {
    serde_json::from_value(json!({
        "total_users": 10,
        "total_chats": 25,
        "chats_by_model": [
            {"model": "gemini", "count": 15},
            {"model": "groq", "count": 5},
            {"model": "neura.essence1.o", "count": 5}
        ],
        "daily_activity": [
            {"date": "2024-06-01", "count": 7},
            {"date": "2024-06-02", "count": 18}
        ],
        "top_users": [
            {"user_id": "alice", "chat_count": 12},
            {"user_id": "bob", "chat_count": 8}
        ]
    }))
    .expect("analytics payload")
}

#[test]
fn test_analytics_payload_renders_all_charts() {
    let snapshot = analytics_payload();
    assert_eq!(snapshot.average_chats_per_user(), 3);

    let line = line_chart_svg(&snapshot.daily_activity, &EMBER);
    assert!(line.starts_with("<svg"));
    assert!(line.contains("2024-06-02"));

    let pie = pie_chart_svg(&snapshot, &EMBER);
    assert!(pie.contains("neura.essence1.o 60%"));
    assert!(pie.contains("neura.swift1.o 20%"));
    assert!(pie.contains("neura.essence1.o 20%"));

    let bars = bar_chart_svg(&snapshot.top_users, &DAYLIGHT);
    assert!(bars.contains(">alice</text>"));
    assert!(bars.contains(DAYLIGHT.series_color(0)));
}

#[test]
fn test_partial_analytics_payload_renders_empty_charts() {
    let snapshot: AnalyticsSnapshot =
        serde_json::from_value(json!({"total_users": 0, "total_chats": 0})).expect("payload");
    assert_eq!(snapshot.average_chats_per_user(), 0);
    assert_eq!(line_chart_svg(&snapshot.daily_activity, &EMBER), "");
    assert_eq!(pie_chart_svg(&snapshot, &EMBER), "");
    assert_eq!(bar_chart_svg(&snapshot.top_users, &EMBER), "");
}

#[test]
fn test_users_payload_drives_pagination_labels() {
    let page: UsersPage = serde_json::from_value(json!({
        "users": [
            {"_id": "65f0", "user_id": "carol", "chat_count": 3, "last_activity": "2024-06-01T09:30:00Z"},
            {"_id": "65f1", "user_id": "admin", "chat_count": 0, "last_activity": null}
        ],
        "total": 120
    }))
    .expect("users payload");

    let state = DashboardState::new(50).apply(DashboardAction::NextPage);
    let ticket = UsersTicket::for_cursor(&state.cursor);
    let state = state
        .apply(DashboardAction::UsersRequested(ticket))
        .apply(DashboardAction::UsersLoaded { ticket, page });

    assert_eq!(state.cursor.page_label(), "2 of 3");
    assert_eq!(state.cursor.range_label(), "Showing 51 to 100 of 120 results");
    assert!(state.cursor.has_next());

    let rows: Vec<String> = state
        .visible_users()
        .iter()
        .map(|u| format!("{} {}", u.user_id, u.last_activity_display()))
        .collect();
    assert_eq!(rows, vec!["carol 2024-06-01 09:30:00", "admin No activity"]);
}
