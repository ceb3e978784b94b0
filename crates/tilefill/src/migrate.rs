//! Versioned migration of palette documents.
//!
//! Runs once on the raw document before ingestion, so the rest of the crate
//! only ever sees the current shape and canonical pattern names.
//!
//! | version | shape                                                       |
//! |---------|-------------------------------------------------------------|
//! | 1       | `{"slots": [slot, …]}` or a bare array, one track           |
//! | 2       | `{"version": 2, "slots": [{"a": slot, "b": slot, "active": "a"}]}` |

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::slot::PatternType;

/// Current document schema version.
pub const SCHEMA_VERSION: u32 = 2;

/// Bring a raw document up to [`SCHEMA_VERSION`].
pub fn migrate(document: Value) -> Result<Value> {
    let mut doc = match document {
        Value::Array(slots) => {
            let mut map = Map::new();
            map.insert("version".into(), Value::from(1));
            map.insert("slots".into(), Value::Array(slots));
            map
        }
        Value::Object(map) => map,
        other => {
            return Err(Error::InvalidDocument(format!(
                "expected an object or array, found {}",
                type_name(&other)
            )));
        }
    };

    let version = doc.get("version").and_then(Value::as_u64).unwrap_or(1);
    if version > SCHEMA_VERSION as u64 {
        return Err(Error::UnsupportedVersion { found: version, supported: SCHEMA_VERSION });
    }

    let slots = match doc.remove("slots") {
        Some(Value::Array(slots)) => slots,
        Some(other) => {
            return Err(Error::InvalidDocument(format!(
                "\"slots\" must be an array, found {}",
                type_name(&other)
            )));
        }
        None => return Err(Error::InvalidDocument("missing \"slots\"".into())),
    };

    let slots: Vec<Value> = if version < 2 {
        log::debug!("migrating {} single-track slots from version {version}", slots.len());
        slots.into_iter().map(split_tracks).collect()
    } else {
        slots
    };

    let slots = slots
        .into_iter()
        .map(|mut entry| {
            if let Value::Object(tracks) = &mut entry {
                for key in ["a", "b"] {
                    if let Some(slot) = tracks.get_mut(key) {
                        migrate_slot(slot);
                    }
                }
            }
            entry
        })
        .collect();

    doc.insert("version".into(), Value::from(SCHEMA_VERSION));
    doc.insert("slots".into(), Value::Array(slots));
    Ok(Value::Object(doc))
}

/// Wrap a single-track slot as an A/B pair with identical tracks.
fn split_tracks(slot: Value) -> Value {
    let mut entry = Map::new();
    entry.insert("a".into(), slot.clone());
    entry.insert("b".into(), slot);
    entry.insert("active".into(), Value::from("a"));
    Value::Object(entry)
}

/// Per-slot rewrites that apply to every version.
pub fn migrate_slot(slot: &mut Value) {
    let Value::Object(fields) = slot else {
        return;
    };

    // Early exports spelled the key "pattern".
    if !fields.contains_key("patternType") {
        if let Some(Value::String(name)) = fields.remove("pattern") {
            fields.insert("patternType".into(), Value::String(name));
        }
    }

    if let Some(Value::String(name)) = fields.get_mut("patternType") {
        if PatternType::is_legacy_name(name) {
            log::debug!("pattern type {name:?} migrated to lines");
            *name = PatternType::Lines.name().to_string();
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
