//! Fill references handed to chart renderers.

use std::fmt;

use serde::Serialize;

use crate::color::HexColor;
use crate::definition::pattern_id;
use crate::slot::{SlotDescription, SlotFill};

/// What a chart element paints with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum FillReference {
    Flat(HexColor),
    /// Identifier of a registered pattern (see [`crate::svg::defs`]).
    PatternRef(String),
}

impl FillReference {
    /// Value for an SVG `fill` attribute.
    pub fn to_svg_fill(&self) -> String {
        match self {
            FillReference::Flat(color) => color.to_string(),
            FillReference::PatternRef(id) => format!("url(#{id})"),
        }
    }

    pub fn pattern_id(&self) -> Option<&str> {
        match self {
            FillReference::PatternRef(id) => Some(id),
            FillReference::Flat(_) => None,
        }
    }
}

impl fmt::Display for FillReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg_fill())
    }
}

/// Resolve the fill for the slot at `index`.
pub fn resolve(slot: &SlotDescription, index: usize) -> FillReference {
    match &slot.fill {
        SlotFill::Solid(solid) => FillReference::Flat(solid.color),
        SlotFill::Pattern(_) => FillReference::PatternRef(pattern_id(index)),
    }
}
