// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod aggregator;

pub use aggregator::{CallupChange, StatsAggregator, StatusChangeOutcome};
