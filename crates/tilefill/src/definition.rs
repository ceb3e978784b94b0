//! Pattern definitions: the canonical form of a pattern slot.
//!
//! A definition is recomputed on every read. It is a pure function of the
//! slot and its index, so two calls with the same input are always equal.

use serde::Serialize;

use crate::params::PatternParams;
use crate::slot::{PatternType, SlotDescription, SlotFill};

/// Prefix of every pattern identifier.
pub const PATTERN_ID_PREFIX: &str = "pattern-slot-";

/// Stable identifier for the pattern of the slot at `index`.
///
/// Depends on nothing but the index, so chart elements referencing it never
/// need updating when the slot's contents change.
pub fn pattern_id(index: usize) -> String {
    format!("{PATTERN_ID_PREFIX}{index}")
}

/// Fill rule for the tile's filled shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FillRule {
    NonZero,
}

impl FillRule {
    pub fn svg_name(&self) -> &'static str {
        match self {
            FillRule::NonZero => "nonzero",
        }
    }
}

/// A clamped, invert-resolved pattern tagged with its identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternDefinition {
    pub id: String,
    /// Tile width in user units (before rotation).
    pub width: f64,
    /// Tile height in user units (before rotation).
    pub height: f64,
    pub fill_rule: FillRule,
    pub params: PatternParams,
}

impl PatternDefinition {
    #[inline]
    pub fn pattern_type(&self) -> PatternType {
        self.params.pattern_type
    }

    /// Tile rotation in degrees, applied around the tile origin.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.params.angle
    }
}

/// Build the definition for the slot at `index`; `None` for solid slots.
pub fn build(slot: &SlotDescription, index: usize) -> Option<PatternDefinition> {
    let SlotFill::Pattern(fill) = &slot.fill else {
        return None;
    };

    let params = PatternParams::normalize(fill);
    let size = params.tile_size();
    log::trace!(
        "built {} for slot {index}: {} tile {size}x{size}",
        pattern_id(index),
        params.pattern_type.name()
    );

    Some(PatternDefinition {
        id: pattern_id(index),
        width: size,
        height: size,
        fill_rule: FillRule::NonZero,
        params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HexColor;
    use crate::slot::{DotShape, PatternFill};

    fn pattern_slot(fill: PatternFill) -> SlotDescription {
        SlotDescription::pattern("Test", fill)
    }

    #[test]
    fn solid_slots_have_no_pattern() {
        let slot = SlotDescription::solid("Flat", HexColor::rgb(10, 20, 30));
        assert!(build(&slot, 0).is_none());
    }

    #[test]
    fn id_depends_only_on_index() {
        let a = build(&pattern_slot(PatternFill::default()), 3).unwrap();
        let b = build(
            &pattern_slot(PatternFill { spacing: 30.0, ..PatternFill::default() }),
            3,
        )
        .unwrap();
        assert_eq!(a.id, "pattern-slot-3");
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn build_is_deterministic() {
        let slot = pattern_slot(PatternFill {
            pattern_type: PatternType::Dots,
            dot_shape: DotShape::Square,
            spacing: 17.0,
            ..PatternFill::default()
        });
        assert_eq!(build(&slot, 5), build(&slot, 5));
    }

    #[test]
    fn legacy_diagonal_builds_lines_tile() {
        let slot: SlotDescription = serde_json::from_str(
            r#"{"kind":"pattern","patternType":"diagonal","spacing":14,"strokeWidth":4,"angle":45,"invert":false}"#,
        )
        .unwrap();
        let def = build(&slot, 0).unwrap();
        assert_eq!(def.pattern_type(), PatternType::Lines);
        assert_eq!(def.width, 14.0);
        assert_eq!(def.height, 14.0);
        assert_eq!(def.angle(), 45.0);
    }

    #[test]
    fn opacity_above_one_is_clamped() {
        let slot = pattern_slot(PatternFill { opacity: 1.5, ..PatternFill::default() });
        assert_eq!(build(&slot, 0).unwrap().params.opacity, 1.0);
    }

    #[test]
    fn staggered_tile_is_double_size() {
        let slot = pattern_slot(PatternFill {
            pattern_type: PatternType::Dots,
            dot_staggered: true,
            spacing: 10.0,
            ..PatternFill::default()
        });
        let def = build(&slot, 1).unwrap();
        assert_eq!((def.width, def.height), (20.0, 20.0));
    }
}
