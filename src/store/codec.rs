//! Conversions between domain records and stored documents.
//!
//! Records are encoded with `serde_json`. The document identifier is kept
//! outside the field map, so [`encode_fields`] drops any `id` field and
//! [`decode_document`] injects it again.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use super::{
    domain::{Document, Fields},
    ports::{DocumentStoreError, DocumentStoreResult},
};

const ID_FIELD: &str = "id";

/// Encodes a record into a document field map.
///
/// # Errors
///
/// Returns [`DocumentStoreError::Codec`] when the record does not serialize
/// to a JSON object.
pub fn encode_fields<T: Serialize>(record: &T) -> DocumentStoreResult<Fields> {
    match encode_value(record)? {
        Value::Object(mut fields) => {
            fields.remove(ID_FIELD);
            Ok(fields)
        }
        other => Err(DocumentStoreError::codec(&format!(
            "expected a JSON object, found {other}"
        ))),
    }
}

/// Encodes a single field value.
///
/// # Errors
///
/// Returns [`DocumentStoreError::Codec`] when serialization fails.
pub fn encode_value<T: Serialize>(value: &T) -> DocumentStoreResult<Value> {
    serde_json::to_value(value).map_err(|err| DocumentStoreError::codec(&err))
}

/// Decodes a document into a record, exposing the identifier as `id`.
///
/// # Errors
///
/// Returns [`DocumentStoreError::Codec`] when the fields do not match the
/// record shape.
pub fn decode_document<T: DeserializeOwned>(document: &Document) -> DocumentStoreResult<T> {
    let mut fields = document.fields().clone();
    fields.insert(
        ID_FIELD.to_owned(),
        Value::String(document.id().as_str().to_owned()),
    );
    serde_json::from_value(Value::Object(fields))
        .map_err(|err| DocumentStoreError::codec(&err))
}

/// Interprets a stored timestamp.
///
/// Accepts RFC 3339 strings, naive `YYYY-MM-DDTHH:MM:SS` strings (read as
/// UTC), `{seconds, nanoseconds}` objects with or without a leading
/// underscore, and integer epoch milliseconds. Returns `None` for anything
/// else.
#[must_use]
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(raw) => parse_timestamp_str(raw),
        Value::Number(millis) => millis.as_i64().and_then(DateTime::from_timestamp_millis),
        Value::Object(object) => {
            let seconds = object
                .get("seconds")
                .or_else(|| object.get("_seconds"))
                .and_then(Value::as_i64)?;
            let nanos = object
                .get("nanoseconds")
                .or_else(|| object.get("_nanoseconds"))
                .and_then(Value::as_u64)
                .and_then(|raw| u32::try_from(raw).ok())
                .unwrap_or_default();
            DateTime::from_timestamp(seconds, nanos)
        }
        Value::Null | Value::Bool(_) | Value::Array(_) => None,
    }
}

fn parse_timestamp_str(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    DateTime::parse_from_rfc3339(trimmed)
        .map(|parsed| parsed.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}
