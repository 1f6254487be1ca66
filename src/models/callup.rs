// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Callup model: one player's invitation to one event.

use chrono::{DateTime, Utc};

use crate::models::document::Document;

/// Answer state of a callup.
///
/// The set is open. Any value other than the three known ones is kept
/// verbatim in `Other` and counts as neither accepted nor declined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallupStatus {
    Pending,
    Accepted,
    Declined,
    Other(String),
}

impl CallupStatus {
    pub fn as_str(&self) -> &str {
        match self {
            CallupStatus::Pending => "pending",
            CallupStatus::Accepted => "accepted",
            CallupStatus::Declined => "declined",
            CallupStatus::Other(s) => s,
        }
    }
}

impl From<&str> for CallupStatus {
    /// Exact, case-sensitive match: `"Accepted"` is `Other`.
    fn from(value: &str) -> Self {
        match value {
            "pending" => CallupStatus::Pending,
            "accepted" => CallupStatus::Accepted,
            "declined" => CallupStatus::Declined,
            other => CallupStatus::Other(other.to_string()),
        }
    }
}

/// Callup document state as seen by a trigger.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Callup {
    /// Document ID
    pub id: String,
    /// Player (team member) ID, preferred over `user_id`
    pub member_id: Option<String>,
    /// Account ID, used when `member_id` is absent
    pub user_id: Option<String>,
    pub event_id: Option<String>,
    pub status: Option<CallupStatus>,
    /// When the last reminder was scheduled
    pub last_reminder_at: Option<DateTime<Utc>>,
}

impl Callup {
    /// Decode a callup from a Firestore document.
    ///
    /// Empty identifier strings are treated as absent.
    pub fn from_document(doc: &Document) -> Self {
        let non_empty = |field: &str| {
            doc.string(field)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Self {
            id: doc.id().to_string(),
            member_id: non_empty("memberId"),
            user_id: non_empty("userId"),
            event_id: non_empty("eventId"),
            status: doc.string("status").map(CallupStatus::from),
            last_reminder_at: doc.timestamp("lastReminderAt"),
        }
    }

    /// The player this callup counts towards.
    pub fn player_id(&self) -> Option<&str> {
        self.member_id.as_deref().or(self.user_id.as_deref())
    }
}
