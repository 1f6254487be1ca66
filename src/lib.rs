// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Callup stats: per-player, per-season callup counters for a team app
//!
//! This crate provides the Firestore trigger endpoint that keeps player
//! statistics in step with callup status changes.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;
use services::StatsAggregator;

/// Shared application state.
pub struct AppState<S = FirestoreDb> {
    pub config: Config,
    pub aggregator: StatsAggregator<S>,
}

impl<S: db::StatsStore> AppState<S> {
    pub fn new(config: Config, store: S) -> Self {
        Self {
            config,
            aggregator: StatsAggregator::new(store),
        }
    }
}
