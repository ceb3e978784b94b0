//! Lenient ingestion of slot data from imports and hand-edited files.
//!
//! Nothing here fails: every field is optional and loosely typed, and a
//! value that cannot be understood is replaced by a default. Numbers are
//! kept as given (the renderers clamp them); colours, enums and labels are
//! canonicalised.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::HexColor;
use crate::params::{
    DEFAULT_ANGLE, DEFAULT_BACKGROUND, DEFAULT_DOT_OFFSET, DEFAULT_INK, DEFAULT_OPACITY,
    DEFAULT_SPACING, DEFAULT_STROKE_WIDTH,
};
use crate::slot::{
    truncate_label, DotShape, PatternFill, PatternType, SlotDescription, SolidFill, SlotFill,
};

/// Caller-supplied fallbacks for colours that fail to parse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotDefaults {
    pub solid_color: HexColor,
    pub background_color: HexColor,
    pub ink_color: HexColor,
}

impl Default for SlotDefaults {
    fn default() -> Self {
        Self {
            solid_color: DEFAULT_INK,
            background_color: DEFAULT_BACKGROUND,
            ink_color: DEFAULT_INK,
        }
    }
}

impl SlotDefaults {
    pub fn with_solid_color(mut self, color: HexColor) -> Self {
        self.solid_color = color;
        self
    }
}

/// A slot as it appears on disk, before any validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSlot {
    pub kind: Option<Value>,
    pub label: Option<Value>,
    pub color: Option<Value>,
    pub background_color: Option<Value>,
    pub ink_color: Option<Value>,
    pub pattern_type: Option<Value>,
    pub spacing: Option<Value>,
    pub stroke_width: Option<Value>,
    pub opacity: Option<Value>,
    pub angle: Option<Value>,
    pub invert: Option<Value>,
    pub round_caps: Option<Value>,
    pub dot_shape: Option<Value>,
    pub dot_offset_x: Option<Value>,
    pub dot_offset_y: Option<Value>,
    pub dot_staggered: Option<Value>,
}

/// A number, or a string holding one.
fn number(value: &Option<Value>, default: f64) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() => n,
        _ => default,
    }
}

fn boolean(value: &Option<Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "1"),
        _ => false,
    }
}

fn text(value: &Option<Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) => Some(s.as_str()),
        _ => None,
    }
}

fn color(value: &Option<Value>, default: HexColor) -> HexColor {
    match text(value) {
        Some(s) => HexColor::parse_or(s, default),
        None => default,
    }
}

fn label(value: &Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => truncate_label(s),
        Some(Value::Number(n)) => truncate_label(&n.to_string()),
        _ => String::new(),
    }
}

impl RawSlot {
    /// Whether this slot describes a pattern. A missing or unknown `kind`
    /// counts as a pattern only when a pattern type is present.
    fn is_pattern(&self) -> bool {
        match text(&self.kind).map(|k| k.trim().to_lowercase()) {
            Some(kind) if kind == "pattern" => true,
            Some(kind) if kind == "solid" => false,
            _ => self.pattern_type.is_some(),
        }
    }
}

/// Turn raw slot data into a canonical slot description.
pub fn ingest_slot(raw: &RawSlot, defaults: &SlotDefaults) -> SlotDescription {
    let label = label(&raw.label);

    let fill = if raw.is_pattern() {
        SlotFill::Pattern(PatternFill {
            background_color: color(&raw.background_color, defaults.background_color),
            ink_color: color(&raw.ink_color, defaults.ink_color),
            pattern_type: text(&raw.pattern_type)
                .map(PatternType::from_name_or_default)
                .unwrap_or_default(),
            spacing: number(&raw.spacing, DEFAULT_SPACING),
            stroke_width: number(&raw.stroke_width, DEFAULT_STROKE_WIDTH),
            opacity: number(&raw.opacity, DEFAULT_OPACITY),
            angle: number(&raw.angle, DEFAULT_ANGLE),
            invert: boolean(&raw.invert),
            round_caps: boolean(&raw.round_caps),
            dot_shape: text(&raw.dot_shape)
                .map(DotShape::from_name_or_default)
                .unwrap_or_default(),
            dot_offset_x: number(&raw.dot_offset_x, DEFAULT_DOT_OFFSET),
            dot_offset_y: number(&raw.dot_offset_y, DEFAULT_DOT_OFFSET),
            dot_staggered: boolean(&raw.dot_staggered),
        })
    } else {
        SlotFill::Solid(SolidFill {
            color: color(&raw.color, defaults.solid_color),
        })
    };

    SlotDescription { label, fill }
}

/// Ingest a JSON value; anything that is not an object yields a default
/// solid slot.
pub fn ingest_value(value: &Value, defaults: &SlotDefaults) -> SlotDescription {
    let raw = serde_json::from_value::<RawSlot>(value.clone()).unwrap_or_else(|err| {
        log::debug!("slot is not an object ({err}), using defaults");
        RawSlot::default()
    });
    ingest_slot(&raw, defaults)
}
