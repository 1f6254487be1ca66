// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory store with the same merge semantics as Firestore.
//!
//! Clones share state, so a test can hand one clone to the aggregator and
//! inspect another.

use crate::db::StatsStore;
use crate::error::AppError;
use crate::models::{Event, PlayerSeasonStats, StatField, StatsIncrement, Team};
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Stats document as stored: only fields that were ever written exist.
pub type StatsFields = BTreeMap<StatField, i64>;

#[derive(Clone, Default)]
pub struct MemoryDb {
    events: Arc<DashMap<String, Event>>,
    teams: Arc<DashMap<String, Team>>,
    player_stats: Arc<DashMap<String, StatsFields>>,
    stats_writes: Arc<AtomicUsize>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_event(&self, event_id: &str, event: Event) {
        self.events.insert(event_id.to_string(), event);
    }

    pub fn insert_team(&self, team_id: &str, team: Team) {
        self.teams.insert(team_id.to_string(), team);
    }

    /// Fields present on a stats document, if it exists.
    pub fn stats_fields(&self, doc_id: &str) -> Option<StatsFields> {
        self.player_stats.get(doc_id).map(|doc| doc.clone())
    }

    /// Number of merge-writes issued against `playerStats`.
    pub fn stats_write_count(&self) -> usize {
        self.stats_writes.load(Ordering::SeqCst)
    }
}

impl StatsStore for MemoryDb {
    async fn get_event(&self, event_id: &str) -> Result<Option<Event>, AppError> {
        Ok(self.events.get(event_id).map(|e| e.clone()))
    }

    async fn get_team(&self, team_id: &str) -> Result<Option<Team>, AppError> {
        Ok(self.teams.get(team_id).map(|t| t.clone()))
    }

    async fn increment_player_stats(
        &self,
        doc_id: &str,
        increment: &StatsIncrement,
    ) -> Result<(), AppError> {
        // The entry guard holds the shard lock for the whole merge
        let mut doc = self.player_stats.entry(doc_id.to_string()).or_default();
        for (field, delta) in increment.iter() {
            *doc.entry(field).or_insert(0) += delta;
        }
        self.stats_writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn get_player_stats(&self, doc_id: &str) -> Result<Option<PlayerSeasonStats>, AppError> {
        Ok(self.player_stats.get(doc_id).map(|doc| {
            let mut stats = PlayerSeasonStats::default();
            for (field, value) in doc.iter() {
                *stats.get_mut(*field) = *value;
            }
            stats
        }))
    }
}
