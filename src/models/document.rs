// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore document-change payloads as delivered by Eventarc.
//!
//! Eventarc delivers `google.events.cloud.firestore.v1.DocumentEventData`.
//! With a JSON content type every document field is a tagged Firestore
//! `Value`, e.g. `{"stringValue": "accepted"}` or
//! `{"timestampValue": "2025-09-10T18:00:00Z"}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use crate::time_utils::parse_utc_rfc3339;

/// A single Firestore field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    NullValue(()),
    BooleanValue(bool),
    /// int64 travels as a JSON string, but some producers send a number.
    IntegerValue(#[serde(deserialize_with = "lenient_i64")] i64),
    DoubleValue(f64),
    TimestampValue(String),
    StringValue(String),
    BytesValue(String),
    ReferenceValue(String),
    GeoPointValue(GeoPoint),
    ArrayValue(ArrayValue),
    MapValue(MapValue),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrayValue {
    #[serde(default)]
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapValue {
    #[serde(default)]
    pub fields: HashMap<String, Value>,
}

fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

/// A Firestore document snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Full resource name: `projects/{p}/databases/{d}/documents/{path}`
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: HashMap<String, Value>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub update_time: Option<String>,
}

impl Document {
    /// Document ID (last segment of the resource name).
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or_default()
    }

    pub fn string(&self, field: &str) -> Option<&str> {
        match self.fields.get(field)? {
            Value::StringValue(s) => Some(s),
            _ => None,
        }
    }

    pub fn timestamp(&self, field: &str) -> Option<DateTime<Utc>> {
        match self.fields.get(field)? {
            Value::TimestampValue(s) => parse_utc_rfc3339(s),
            _ => None,
        }
    }
}

/// Changed field paths of an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMask {
    #[serde(default)]
    pub field_paths: Vec<String>,
}

/// Body of a Firestore document-change CloudEvent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentEventData {
    /// Document before the write (absent on create)
    #[serde(default)]
    pub old_value: Option<Document>,
    /// Document after the write (absent on delete)
    #[serde(default)]
    pub value: Option<Document>,
    #[serde(default)]
    pub update_mask: Option<DocumentMask>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_update_event() {
        let data: DocumentEventData = serde_json::from_value(json!({
            "oldValue": {
                "name": "projects/p/databases/region1/documents/callups/abc",
                "fields": {"status": {"stringValue": "pending"}}
            },
            "value": {
                "name": "projects/p/databases/region1/documents/callups/abc",
                "fields": {
                    "status": {"stringValue": "accepted"},
                    "count": {"integerValue": "3"},
                    "seen": {"booleanValue": true},
                    "note": {"nullValue": null},
                    "tags": {"arrayValue": {"values": [{"stringValue": "a"}]}},
                    "meta": {"mapValue": {"fields": {"x": {"doubleValue": 1.5}}}}
                },
                "updateTime": "2025-09-10T18:00:00.123456Z"
            },
            "updateMask": {"fieldPaths": ["status"]}
        }))
        .unwrap();

        let after = data.value.unwrap();
        assert_eq!(after.id(), "abc");
        assert_eq!(after.string("status"), Some("accepted"));
        assert_eq!(after.fields.get("count"), Some(&Value::IntegerValue(3)));
        assert_eq!(after.fields.get("note"), Some(&Value::NullValue(())));
        assert_eq!(data.update_mask.unwrap().field_paths, vec!["status"]);
        assert_eq!(data.old_value.unwrap().string("status"), Some("pending"));
    }

    #[test]
    fn test_integer_value_accepts_number() {
        let value: Value = serde_json::from_value(json!({"integerValue": 7})).unwrap();
        assert_eq!(value, Value::IntegerValue(7));
    }

    #[test]
    fn test_typed_accessors_reject_other_kinds() {
        let doc: Document = serde_json::from_value(json!({
            "fields": {
                "status": {"integerValue": "1"},
                "at": {"stringValue": "2025-01-01T00:00:00Z"}
            }
        }))
        .unwrap();

        assert_eq!(doc.string("status"), None);
        assert_eq!(doc.timestamp("at"), None);
        assert_eq!(doc.string("missing"), None);
    }

    #[test]
    fn test_missing_name_has_empty_id() {
        assert_eq!(Document::default().id(), "");
    }
}
