// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Events and teams (read-only lookups)
//! - Player stats (atomic increment merges)

use crate::config::Config;
use crate::db::{collections, StatsStore};
use crate::error::AppError;
use crate::models::{Event, PlayerSeasonStats, StatsIncrement, Team};
use serde::{Deserialize, Serialize};

/// Body of a merge-write. Paired with an empty field mask so that only the
/// field transforms touch the document.
#[derive(Serialize, Deserialize)]
struct MergeBase {}

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client for the configured database.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        let options = firestore::FirestoreDbOptions::new(config.gcp_project_id.clone())
            .with_database_id(config.firestore_database.clone());

        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(options).await;
        }

        let client = firestore::FirestoreDb::with_options(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(
            project = %config.gcp_project_id,
            database = %config.firestore_database,
            "Connected to Firestore"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(
        options: firestore::FirestoreDbOptions,
    ) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!("Connected to Firestore (Emulator/Unauthenticated)");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }
}

impl StatsStore for FirestoreDb {
    async fn get_event(&self, event_id: &str) -> Result<Option<Event>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::EVENTS)
            .obj()
            .one(event_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn get_team(&self, team_id: &str) -> Result<Option<Team>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::TEAMS)
            .obj()
            .one(team_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Single write: empty update mask plus `increment` transforms. This is
    /// how Firestore encodes `set({field: increment(n)}, {merge: true})`,
    /// so the server applies the increments atomically and creates the
    /// document if needed.
    async fn increment_player_stats(
        &self,
        doc_id: &str,
        increment: &StatsIncrement,
    ) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .fields(Vec::<&str>::new())
            .in_col(collections::PLAYER_STATS)
            .document_id(doc_id)
            .object(&MergeBase {})
            .transforms(|t| {
                t.fields(
                    increment
                        .iter()
                        .map(|(field, delta)| t.field(field.as_str()).increment(delta)),
                )
            })
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    async fn get_player_stats(&self, doc_id: &str) -> Result<Option<PlayerSeasonStats>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::PLAYER_STATS)
            .obj()
            .one(doc_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
