// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Eventarc CloudEvent checks for `/triggers/*` routes.
//!
//! Eventarc delivers in binary content mode: the envelope lives in `ce-*`
//! headers and the body is the Firestore `DocumentEventData`.

use crate::config::Config;
use crate::db::collections;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// CloudEvent type of a Firestore document update.
pub const DOCUMENT_UPDATED: &str = "google.cloud.firestore.document.v1.updated";
/// Same event when Eventarc attaches the writer's auth context.
pub const DOCUMENT_UPDATED_WITH_AUTH: &str =
    "google.cloud.firestore.document.v1.updated.withAuthContext";

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|h| h.to_str().ok())
}

/// Why a request is not a callup update event from our database, if it isn't.
fn rejection_reason(headers: &HeaderMap, config: &Config) -> Option<&'static str> {
    let ce_type = header(headers, "ce-type");
    if !matches!(ce_type, Some(DOCUMENT_UPDATED) | Some(DOCUMENT_UPDATED_WITH_AUTH)) {
        return Some("unexpected ce-type");
    }

    let database_suffix = format!("/databases/{}", config.firestore_database);
    if !header(headers, "ce-source").is_some_and(|s| s.ends_with(&database_suffix)) {
        return Some("unexpected ce-source");
    }

    let subject_prefix = format!("documents/{}/", collections::CALLUPS);
    if !header(headers, "ce-subject").is_some_and(|s| s.starts_with(&subject_prefix)) {
        return Some("unexpected ce-subject");
    }

    None
}

/// Require Firestore callup update CloudEvent headers.
pub async fn require_callup_update_event(
    State(config): State<Arc<Config>>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let headers = request.headers();
    if let Some(reason) = rejection_reason(headers, &config) {
        tracing::warn!(
            reason,
            ce_type = ?headers.get("ce-type"),
            ce_source = ?headers.get("ce-source"),
            ce_subject = ?headers.get("ce-subject"),
            "Blocked trigger request"
        );
        return Err(StatusCode::FORBIDDEN);
    }

    Ok(next.run(request).await)
}
