// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use callup_stats::config::Config;
use callup_stats::db::{FirestoreDb, MemoryDb};
use callup_stats::models::{Callup, CallupStatus, Event, Team};
use callup_stats::routes::create_router;
use callup_stats::services::CallupChange;
use callup_stats::AppState;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new(&Config::default())
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a test app backed by an in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState<MemoryDb>>) {
    let state = Arc::new(AppState::new(Config::default(), MemoryDb::new()));
    (create_router(state.clone()), state)
}

#[allow(dead_code)]
pub fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 18, 0, 0).unwrap()
}

#[allow(dead_code)]
pub fn event(event_type: &str, date: DateTime<Utc>, team_id: &str) -> Event {
    Event {
        event_type: Some(event_type.to_string()),
        event_date: Some(date),
        start: None,
        team_id: Some(team_id.to_string()),
    }
}

#[allow(dead_code)]
pub fn crossing_team(start_month: i64) -> Team {
    Team {
        season_cross_year: Some(true),
        season_start_month: Some(start_month),
    }
}

/// A callup update from `from` to `to` for `player_id` on `event_id`.
#[allow(dead_code)]
pub fn status_change(
    callup_id: &str,
    player_id: &str,
    event_id: &str,
    from: Option<&str>,
    to: Option<&str>,
) -> CallupChange {
    let callup = |status: Option<&str>| Callup {
        id: callup_id.to_string(),
        member_id: Some(player_id.to_string()),
        user_id: None,
        event_id: Some(event_id.to_string()),
        status: status.map(CallupStatus::from),
        last_reminder_at: None,
    };

    CallupChange {
        callup_id: callup_id.to_string(),
        before: callup(from),
        after: callup(to),
    }
}
