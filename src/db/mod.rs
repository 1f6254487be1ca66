//! Database layer (Firestore, plus an in-memory store for tests).

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryDb;

use crate::error::Result;
use crate::models::{Event, PlayerSeasonStats, StatsIncrement, Team};
use std::future::Future;

/// Collection names as constants.
pub mod collections {
    pub const CALLUPS: &str = "callups";
    pub const EVENTS: &str = "events";
    pub const TEAMS: &str = "teams";
    /// Player stats aggregates (keyed by `{player_id}_{season_id}`)
    pub const PLAYER_STATS: &str = "playerStats";
}

/// Reads and writes needed by the stats aggregator.
pub trait StatsStore: Send + Sync + 'static {
    /// Get an event by ID.
    fn get_event(&self, event_id: &str) -> impl Future<Output = Result<Option<Event>>> + Send;

    /// Get a team by ID.
    fn get_team(&self, team_id: &str) -> impl Future<Output = Result<Option<Team>>> + Send;

    /// Atomically add `increment` to a stats document.
    ///
    /// Upsert with merge semantics: an absent document is created, fields
    /// not named in `increment` are left untouched. An empty increment still
    /// writes (and may create an empty document).
    fn increment_player_stats(
        &self,
        doc_id: &str,
        increment: &StatsIncrement,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Get a stats document by ID.
    fn get_player_stats(
        &self,
        doc_id: &str,
    ) -> impl Future<Output = Result<Option<PlayerSeasonStats>>> + Send;
}
