//! Slot descriptions: the persisted, user-facing unit of styling.
//!
//! ## Rust Lesson #8: Enums With Data
//!
//! In JS a slot would be one object whose fields are present or absent
//! depending on `kind`. Here `SlotFill` is a sum type: a solid slot simply
//! has no pattern fields, and `match` forces every caller to handle both.

use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::params::{
    DEFAULT_ANGLE, DEFAULT_BACKGROUND, DEFAULT_DOT_OFFSET, DEFAULT_INK, DEFAULT_OPACITY,
    DEFAULT_SPACING, DEFAULT_STROKE_WIDTH,
};

/// Labels longer than this are truncated on ingestion.
pub const LABEL_MAX_CHARS: usize = 32;

/// Truncate a label to [`LABEL_MAX_CHARS`] characters.
pub fn truncate_label(label: &str) -> String {
    label.chars().take(LABEL_MAX_CHARS).collect()
}

/// Discriminant of a slot, without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Solid,
    Pattern,
}

/// Drawing style of a pattern slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PatternType {
    #[default]
    Lines,
    Crosshatch,
    Dots,
}

impl PatternType {
    pub fn all() -> &'static [PatternType] {
        &[PatternType::Lines, PatternType::Crosshatch, PatternType::Dots]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PatternType::Lines => "lines",
            PatternType::Crosshatch => "crosshatch",
            PatternType::Dots => "dots",
        }
    }

    /// Parse a pattern name. Legacy single-direction names collapse into
    /// `Lines` (direction is now the `angle` field).
    pub fn from_name(name: &str) -> Option<PatternType> {
        match name.trim().to_lowercase().as_str() {
            "lines" | "diagonal" | "vertical" | "horizontal" => Some(PatternType::Lines),
            "crosshatch" => Some(PatternType::Crosshatch),
            "dots" => Some(PatternType::Dots),
            _ => None,
        }
    }

    /// Whether `name` is one of the pre-angle direction names.
    pub fn is_legacy_name(name: &str) -> bool {
        matches!(
            name.trim().to_lowercase().as_str(),
            "diagonal" | "vertical" | "horizontal"
        )
    }

    /// Parse, falling back to `Lines` for anything unknown.
    pub fn from_name_or_default(name: &str) -> PatternType {
        Self::from_name(name).unwrap_or_else(|| {
            log::debug!("unknown pattern type {name:?}, using lines");
            PatternType::default()
        })
    }
}

impl From<String> for PatternType {
    fn from(name: String) -> Self {
        PatternType::from_name_or_default(&name)
    }
}

/// Shape drawn for each dot of a `Dots` pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DotShape {
    #[default]
    Circle,
    Square,
    Diamond,
}

impl DotShape {
    pub fn all() -> &'static [DotShape] {
        &[DotShape::Circle, DotShape::Square, DotShape::Diamond]
    }

    pub fn name(&self) -> &'static str {
        match self {
            DotShape::Circle => "circle",
            DotShape::Square => "square",
            DotShape::Diamond => "diamond",
        }
    }

    pub fn from_name(name: &str) -> Option<DotShape> {
        match name.trim().to_lowercase().as_str() {
            "circle" => Some(DotShape::Circle),
            "square" => Some(DotShape::Square),
            "diamond" => Some(DotShape::Diamond),
            _ => None,
        }
    }

    pub fn from_name_or_default(name: &str) -> DotShape {
        Self::from_name(name).unwrap_or_else(|| {
            log::debug!("unknown dot shape {name:?}, using circle");
            DotShape::default()
        })
    }
}

impl From<String> for DotShape {
    fn from(name: String) -> Self {
        DotShape::from_name_or_default(&name)
    }
}

/// A flat colour fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidFill {
    pub color: HexColor,
}

/// A tileable pattern fill as stored. Numbers are kept as entered; the
/// renderers clamp them (see [`crate::params::PatternParams`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatternFill {
    pub background_color: HexColor,
    pub ink_color: HexColor,
    pub pattern_type: PatternType,
    pub spacing: f64,
    pub stroke_width: f64,
    pub opacity: f64,
    pub angle: f64,
    pub invert: bool,
    pub round_caps: bool,
    pub dot_shape: DotShape,
    pub dot_offset_x: f64,
    pub dot_offset_y: f64,
    pub dot_staggered: bool,
}

impl Default for PatternFill {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_BACKGROUND,
            ink_color: DEFAULT_INK,
            pattern_type: PatternType::default(),
            spacing: DEFAULT_SPACING,
            stroke_width: DEFAULT_STROKE_WIDTH,
            opacity: DEFAULT_OPACITY,
            angle: DEFAULT_ANGLE,
            invert: false,
            round_caps: false,
            dot_shape: DotShape::default(),
            dot_offset_x: DEFAULT_DOT_OFFSET,
            dot_offset_y: DEFAULT_DOT_OFFSET,
            dot_staggered: false,
        }
    }
}

/// What a slot paints with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SlotFill {
    Solid(SolidFill),
    Pattern(PatternFill),
}

/// One palette entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotDescription {
    #[serde(default)]
    pub label: String,
    #[serde(flatten)]
    pub fill: SlotFill,
}

impl SlotDescription {
    pub fn solid(label: &str, color: HexColor) -> Self {
        Self {
            label: truncate_label(label),
            fill: SlotFill::Solid(SolidFill { color }),
        }
    }

    pub fn pattern(label: &str, pattern: PatternFill) -> Self {
        Self {
            label: truncate_label(label),
            fill: SlotFill::Pattern(pattern),
        }
    }

    pub fn kind(&self) -> SlotKind {
        match self.fill {
            SlotFill::Solid(_) => SlotKind::Solid,
            SlotFill::Pattern(_) => SlotKind::Pattern,
        }
    }

    pub fn set_label(&mut self, label: &str) {
        self.label = truncate_label(label);
    }

    pub fn as_pattern(&self) -> Option<&PatternFill> {
        match &self.fill {
            SlotFill::Pattern(p) => Some(p),
            SlotFill::Solid(_) => None,
        }
    }

    pub fn as_pattern_mut(&mut self) -> Option<&mut PatternFill> {
        match &mut self.fill {
            SlotFill::Pattern(p) => Some(p),
            SlotFill::Solid(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_pattern_names_map_to_lines() {
        for name in ["diagonal", "Vertical", "HORIZONTAL"] {
            assert_eq!(PatternType::from_name(name), Some(PatternType::Lines));
            assert!(PatternType::is_legacy_name(name));
        }
        assert!(!PatternType::is_legacy_name("lines"));
    }

    #[test]
    fn unknown_enums_fall_back() {
        assert_eq!(PatternType::from_name_or_default("waves"), PatternType::Lines);
        assert_eq!(DotShape::from_name_or_default("star"), DotShape::Circle);
    }

    #[test]
    fn label_is_truncated_by_chars() {
        let long = "é".repeat(40);
        let slot = SlotDescription::solid(&long, HexColor::BLACK);
        assert_eq!(slot.label.chars().count(), LABEL_MAX_CHARS);
    }

    #[test]
    fn pattern_slot_json_shape() {
        let slot = SlotDescription::pattern("Hatch", PatternFill {
            pattern_type: PatternType::Crosshatch,
            ..PatternFill::default()
        });
        let json = serde_json::to_value(&slot).unwrap();
        assert_eq!(json["kind"], "pattern");
        assert_eq!(json["label"], "Hatch");
        assert_eq!(json["patternType"], "crosshatch");
        assert_eq!(json["inkColor"], "#000000");
        assert_eq!(json["dotStaggered"], false);
    }

    #[test]
    fn pattern_slot_round_trips() {
        let slot = SlotDescription::pattern("Dots", PatternFill {
            pattern_type: PatternType::Dots,
            dot_shape: DotShape::Diamond,
            dot_staggered: true,
            spacing: 12.0,
            ..PatternFill::default()
        });
        let json = serde_json::to_string(&slot).unwrap();
        let back: SlotDescription = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slot);
    }

    #[test]
    fn legacy_type_in_canonical_json_becomes_lines() {
        let json = r#"{"kind":"pattern","label":"Old","patternType":"diagonal","spacing":14}"#;
        let slot: SlotDescription = serde_json::from_str(json).unwrap();
        let pattern = slot.as_pattern().unwrap();
        assert_eq!(pattern.pattern_type, PatternType::Lines);
        assert_eq!(pattern.spacing, 14.0);
        assert_eq!(pattern.stroke_width, DEFAULT_STROKE_WIDTH);
    }

    #[test]
    fn solid_slot_json_shape() {
        let slot = SlotDescription::solid("Red", HexColor::rgb(255, 0, 0));
        let json = serde_json::to_value(&slot).unwrap();
        assert_eq!(json["kind"], "solid");
        assert_eq!(json["color"], "#FF0000");
        assert_eq!(slot.kind(), SlotKind::Solid);
    }
}
