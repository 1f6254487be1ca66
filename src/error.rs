// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Errors raised while handling a trigger.
///
/// None of these reach the trigger's sender: the route logs them and still
/// acknowledges the delivery.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Result type alias for store and aggregator operations
pub type Result<T> = std::result::Result<T, AppError>;
