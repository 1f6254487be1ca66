// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Event model (match, training, or anything else a team schedules).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Training keywords, compared against the lowercased event type.
const TRAINING_TYPES: &[&str] = &["träning", "training"];

/// Counting category of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Match,
    Training,
    /// Counts towards neither matches nor trainings.
    Other,
}

impl EventKind {
    /// Classify a free-form event type, case-insensitively.
    pub fn classify(event_type: Option<&str>) -> Self {
        let raw = event_type.unwrap_or_default().to_lowercase();
        if raw == "match" {
            EventKind::Match
        } else if TRAINING_TYPES.contains(&raw.as_str()) {
            EventKind::Training
        } else {
            EventKind::Other
        }
    }
}

/// Event document, read-only here.
///
/// Opponent and location fields are not needed for stats and are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub event_type: Option<String>,
    /// Scheduled time (current schema)
    #[serde(default, with = "firestore::serialize_as_optional_timestamp")]
    pub event_date: Option<DateTime<Utc>>,
    /// Scheduled time (older documents)
    #[serde(default, with = "firestore::serialize_as_optional_timestamp")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub team_id: Option<String>,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        EventKind::classify(self.event_type.as_deref())
    }

    /// When the event happens: `event_date`, else `start`.
    pub fn scheduled_at(&self) -> Option<DateTime<Utc>> {
        self.event_date.or(self.start)
    }

    /// Team ID, treating an empty string as absent.
    pub fn team_id(&self) -> Option<&str> {
        self.team_id.as_deref().filter(|id| !id.is_empty())
    }
}
