//! Mapping of heterogeneous FAQ payloads into [`FaqEntry`] records.
//!
//! DESIGN
//! ======
//! Each canonical field has an ordered list of source keys; the first key
//! holding a non-null value wins. Adding another naming scheme means adding a
//! key to the relevant table, nothing else.

#[cfg(test)]
#[path = "faq_normalize_test.rs"]
mod faq_normalize_test;

use serde_json::{Map, Value};

use crate::net::types::FaqEntry;

const ID_KEYS: &[&str] = &["id", "_id"];
const SLUG_KEYS: &[&str] = &["slug"];
const QUESTION_KEYS: &[&str] = &["title", "question", "pregunta"];
const ANSWER_KEYS: &[&str] = &["answer", "respuesta"];
const CATEGORY_KEYS: &[&str] = &["category", "categoria"];
const UPDATED_AT_KEYS: &[&str] = &["updated_at", "updatedAt", "fecha_actualizacion"];
const PUBLISHED_KEYS: &[&str] = &["published", "publicado"];

/// Extract the record list from either a bare array or `{ "items": [...] }`.
///
/// Any other shape yields an empty slice.
#[must_use]
pub fn extract_items(payload: &Value) -> &[Value] {
    match payload {
        Value::Array(items) => items,
        Value::Object(obj) => match obj.get("items") {
            Some(Value::Array(items)) => items,
            _ => &[],
        },
        _ => &[],
    }
}

/// Normalize a full endpoint payload, dropping unpublished records.
#[must_use]
pub fn normalize_payload(payload: &Value) -> Vec<FaqEntry> {
    extract_items(payload)
        .iter()
        .filter_map(normalize_record)
        .filter(|entry| entry.published)
        .collect()
}

/// Map one raw record into a canonical entry. Non-object records yield `None`.
#[must_use]
pub fn normalize_record(raw: &Value) -> Option<FaqEntry> {
    let obj = raw.as_object()?;
    let id = first_text(obj, ID_KEYS).unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    Some(FaqEntry {
        id,
        slug: first_text(obj, SLUG_KEYS).filter(|s| !s.is_empty()),
        question: first_text(obj, QUESTION_KEYS).unwrap_or_default(),
        answer: first_text(obj, ANSWER_KEYS).unwrap_or_default(),
        category: first_text(obj, CATEGORY_KEYS).filter(|s| !s.is_empty()),
        updated_at: first_text(obj, UPDATED_AT_KEYS),
        published: first_value(obj, PUBLISHED_KEYS).is_none_or(is_truthy),
    })
}

fn first_value<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().filter_map(|key| obj.get(*key)).find(|value| !value.is_null())
}

fn first_text(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    first_value(obj, keys).map(value_text)
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Loose truthiness: `false`, `0`, `""` and `null` are false.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
