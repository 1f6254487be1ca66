// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Trigger routes for Firestore document events.
//!
//! These endpoints are called by Eventarc, not directly by users. Every
//! delivery that passes the CloudEvent checks is acknowledged with 200:
//! the stats write is not idempotent, so a redelivery could count twice.

use crate::db::StatsStore;
use crate::models::{Callup, DocumentEventData};
use crate::services::{CallupChange, StatusChangeOutcome};
use crate::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use std::sync::Arc;

/// Trigger routes (called by Eventarc).
pub fn routes<S: StatsStore>() -> Router<Arc<AppState<S>>> {
    Router::new().route("/triggers/callup-updated", post(callup_updated::<S>))
}

/// Build the before/after pair from an update event.
///
/// Returns `None` when the callup no longer exists after the write.
fn callup_change(data: &DocumentEventData, subject: Option<&str>) -> Option<CallupChange> {
    let after = data.value.as_ref().map(Callup::from_document)?;
    let before = data
        .old_value
        .as_ref()
        .map(Callup::from_document)
        .unwrap_or_default();

    let callup_id = if after.id.is_empty() {
        subject
            .and_then(|s| s.rsplit('/').next())
            .unwrap_or_default()
            .to_string()
    } else {
        after.id.clone()
    };

    Some(CallupChange {
        callup_id,
        before,
        after,
    })
}

/// Update player stats when a callup's status changes.
async fn callup_updated<S: StatsStore>(
    State(state): State<Arc<AppState<S>>>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let ce_id = headers
        .get("ce-id")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown");
    let subject = headers.get("ce-subject").and_then(|h| h.to_str().ok());

    // Any body is acknowledged, whatever its content type
    let data: DocumentEventData = match serde_json::from_slice(&body) {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(ce_id, error = %e, "Failed to parse document event");
            return StatusCode::OK;
        }
    };

    let Some(change) = callup_change(&data, subject) else {
        tracing::debug!(ce_id, "Callup deleted, nothing to count");
        return StatusCode::OK;
    };

    match state.aggregator.on_status_changed(&change).await {
        Ok(StatusChangeOutcome::Applied {
            doc_id, increment, ..
        }) => {
            tracing::debug!(
                ce_id,
                callup_id = %change.callup_id,
                doc_id = %doc_id,
                fields = increment.len(),
                "Stats trigger applied"
            );
        }
        Ok(outcome) => {
            tracing::debug!(
                ce_id,
                callup_id = %change.callup_id,
                outcome = ?outcome,
                changed = ?data.update_mask.as_ref().map(|m| &m.field_paths),
                last_reminder_at = ?change.after.last_reminder_at,
                "Stats trigger skipped"
            );
        }
        Err(e) => {
            // Not retried: the write may already have landed
            tracing::error!(ce_id, callup_id = %change.callup_id, error = %e, "Stats trigger failed");
        }
    }

    StatusCode::OK
}
