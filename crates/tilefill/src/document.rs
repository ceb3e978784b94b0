//! Palette import and export.
//!
//! Import runs the full boundary pipeline: parse → [`migrate`] → lenient
//! [`ingest`](crate::ingest) → slot-count check. Export always writes the
//! current schema in canonical form, so `import(export(p)) == p`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::ingest::{ingest_value, SlotDefaults};
use crate::migrate::{migrate, SCHEMA_VERSION};
use crate::palette::{Palette, PaletteSlot, Track};

/// The exported form of a palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteDocument {
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<String>,
    pub slots: Vec<PaletteSlot>,
}

impl PaletteDocument {
    pub fn new(palette: &Palette, exported_at: Option<String>) -> Self {
        Self {
            version: SCHEMA_VERSION,
            exported_at,
            slots: palette.slots().to_vec(),
        }
    }
}

/// Import from an already-parsed document value.
pub fn import_value(document: Value, defaults: &SlotDefaults) -> Result<Palette> {
    let migrated = migrate(document)?;
    let entries = migrated
        .get("slots")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::InvalidDocument("missing \"slots\"".into()))?;

    let slots = entries
        .iter()
        .map(|entry| {
            let a = ingest_value(entry.get("a").unwrap_or(&Value::Null), defaults);
            // A missing B track starts as a copy of A.
            let b = match entry.get("b") {
                Some(value) => ingest_value(value, defaults),
                None => a.clone(),
            };
            let active = match entry.get("active").and_then(Value::as_str) {
                Some(t) if t.eq_ignore_ascii_case("b") => Track::B,
                _ => Track::A,
            };
            PaletteSlot { a, b, active }
        })
        .collect();

    let palette = Palette::from_slots(slots)?;
    log::debug!("imported palette with {} slots", palette.len());
    Ok(palette)
}

pub fn import_json(input: &str, defaults: &SlotDefaults) -> Result<Palette> {
    import_value(serde_json::from_str(input)?, defaults)
}

pub fn import_yaml(input: &str, defaults: &SlotDefaults) -> Result<Palette> {
    import_value(serde_yaml::from_str(input)?, defaults)
}

pub fn export_json(palette: &Palette, exported_at: Option<String>, pretty: bool) -> Result<String> {
    let doc = PaletteDocument::new(palette, exported_at);
    let out = if pretty {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };
    Ok(out)
}

pub fn export_yaml(palette: &Palette, exported_at: Option<String>) -> Result<String> {
    Ok(serde_yaml::to_string(&PaletteDocument::new(palette, exported_at))?)
}
