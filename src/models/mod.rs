// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod callup;
pub mod document;
pub mod event;
pub mod season;
pub mod stats;
pub mod team;

pub use callup::{Callup, CallupStatus};
pub use document::{Document, DocumentEventData};
pub use event::{Event, EventKind};
pub use season::{resolve_season, SeasonConfig, SeasonId};
pub use stats::{stats_doc_id, PlayerSeasonStats, StatDeltas, StatField, StatsIncrement};
pub use team::Team;
