// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Callup status statistics.
//!
//! Handles the core workflow for every callup update:
//! 1. Skip unless the status changed
//! 2. Look up the event (type, date, team) and the team's season rule
//! 3. Resolve the season and compute the counter deltas
//! 4. Merge the deltas into `playerStats/{player_id}_{season_id}`
//!
//! There is no deduplication: a transition delivered twice is counted twice.

use chrono::Utc;

use crate::db::StatsStore;
use crate::error::Result;
use crate::models::{stats_doc_id, Callup, EventKind, SeasonId, StatDeltas, StatsIncrement};

/// A callup document before and after one write.
#[derive(Debug, Clone, Default)]
pub struct CallupChange {
    pub callup_id: String,
    pub before: Callup,
    pub after: Callup,
}

/// What happened to one status change.
///
/// Everything except `Applied` is a silent no-op.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusChangeOutcome {
    /// Status did not change; nothing read or written.
    Unchanged,
    /// No player ID on the callup; nothing read.
    MissingPlayer,
    /// No event ID on the callup; nothing read.
    MissingEvent,
    /// The event document does not exist.
    EventNotFound { event_id: String },
    /// The event names no team.
    MissingTeam { event_id: String },
    /// Merge-write issued.
    Applied {
        doc_id: String,
        season: SeasonId,
        kind: EventKind,
        increment: StatsIncrement,
    },
}

/// Maintains player stats from callup status changes.
pub struct StatsAggregator<S> {
    store: S,
}

impl<S: StatsStore> StatsAggregator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply one callup update to the stats.
    ///
    /// Returns `Err` only when the store fails. Missing data ends in a
    /// non-`Applied` outcome instead.
    pub async fn on_status_changed(&self, change: &CallupChange) -> Result<StatusChangeOutcome> {
        let old_status = change.before.status.as_ref();
        let new_status = change.after.status.as_ref();
        if old_status == new_status {
            return Ok(StatusChangeOutcome::Unchanged);
        }

        let callup_id = change.callup_id.as_str();
        let Some(player_id) = change.after.player_id() else {
            tracing::debug!(callup_id, "Callup has no player, skipping stats");
            return Ok(StatusChangeOutcome::MissingPlayer);
        };
        let Some(event_id) = change.after.event_id.as_deref() else {
            tracing::debug!(callup_id, "Callup has no event, skipping stats");
            return Ok(StatusChangeOutcome::MissingEvent);
        };

        let Some(event) = self.store.get_event(event_id).await? else {
            tracing::warn!(callup_id, event_id, "Event not found, skipping stats");
            return Ok(StatusChangeOutcome::EventNotFound {
                event_id: event_id.to_string(),
            });
        };
        let kind = event.kind();

        let Some(team_id) = event.team_id() else {
            tracing::warn!(callup_id, event_id, "Event has no team, skipping stats");
            return Ok(StatusChangeOutcome::MissingTeam {
                event_id: event_id.to_string(),
            });
        };
        let season_config = self
            .store
            .get_team(team_id)
            .await?
            .unwrap_or_default()
            .season_config();

        // An event without any date is counted in the season of "now"
        let scheduled_at = event.scheduled_at().unwrap_or_else(|| {
            tracing::warn!(callup_id, event_id, "Event has no date, using current time");
            Utc::now()
        });
        let season = season_config.season_for(&scheduled_at);

        let increment = StatDeltas::compute(old_status, new_status, kind).increment_for(kind);
        let doc_id = stats_doc_id(player_id, &season);

        self.store
            .increment_player_stats(&doc_id, &increment)
            .await?;

        tracing::info!(
            callup_id,
            player_id,
            event_id,
            season = %season,
            kind = ?kind,
            from = old_status.map(|s| s.as_str()),
            to = new_status.map(|s| s.as_str()),
            increment = ?increment,
            "Player stats updated"
        );

        Ok(StatusChangeOutcome::Applied {
            doc_id,
            season,
            kind,
            increment,
        })
    }
}
