//! Parameter ranges and normalisation shared by both renderers.
//!
//! The vector tile and the CSS swatch must never disagree about what a slot
//! looks like, so every clamp, default and invert swap lives here and both
//! renderers consume [`PatternParams`].

use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::geometry::clamp_dot_radius;
use crate::slot::{DotShape, PatternFill, PatternType};
use crate::tile::LineCap;

pub const SPACING_RANGE: (f64, f64) = (4.0, 40.0);
pub const STROKE_WIDTH_RANGE: (f64, f64) = (1.0, 12.0);
pub const OPACITY_RANGE: (f64, f64) = (0.05, 1.0);
pub const ANGLE_RANGE: (f64, f64) = (0.0, 180.0);
pub const DOT_OFFSET_RANGE: (f64, f64) = (0.0, 100.0);
pub const DOT_RADIUS_RANGE: (f64, f64) = (1.0, 10.0);

pub const DEFAULT_SPACING: f64 = 10.0;
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;
pub const DEFAULT_OPACITY: f64 = 1.0;
pub const DEFAULT_ANGLE: f64 = 45.0;
pub const DEFAULT_DOT_OFFSET: f64 = 0.0;

pub const DEFAULT_BACKGROUND: HexColor = HexColor::WHITE;
pub const DEFAULT_INK: HexColor = HexColor::BLACK;

/// Clamp into `range`; NaN takes the field default.
#[inline]
pub fn clamp_field(value: f64, range: (f64, f64), default: f64) -> f64 {
    if value.is_nan() {
        return default;
    }
    value.clamp(range.0, range.1)
}

/// Canonical, clamped, invert-resolved pattern parameters.
///
/// `background`/`ink` are the colours actually painted; `invert` has
/// already been applied and does not appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternParams {
    pub pattern_type: PatternType,
    pub background: HexColor,
    pub ink: HexColor,
    pub spacing: f64,
    pub stroke_width: f64,
    pub opacity: f64,
    pub angle: f64,
    pub round_caps: bool,
    pub dot_shape: DotShape,
    pub dot_offset_x: f64,
    pub dot_offset_y: f64,
    pub dot_staggered: bool,
}

impl PatternParams {
    /// Re-clamp every field of a stored pattern, whether or not it was
    /// already valid.
    pub fn normalize(fill: &PatternFill) -> Self {
        let (background, ink) = if fill.invert {
            (fill.ink_color, fill.background_color)
        } else {
            (fill.background_color, fill.ink_color)
        };

        Self {
            pattern_type: fill.pattern_type,
            background,
            ink,
            spacing: clamp_field(fill.spacing.round(), SPACING_RANGE, DEFAULT_SPACING),
            stroke_width: clamp_field(fill.stroke_width, STROKE_WIDTH_RANGE, DEFAULT_STROKE_WIDTH),
            opacity: clamp_field(fill.opacity, OPACITY_RANGE, DEFAULT_OPACITY),
            angle: clamp_field(fill.angle, ANGLE_RANGE, DEFAULT_ANGLE),
            round_caps: fill.round_caps,
            dot_shape: fill.dot_shape,
            dot_offset_x: clamp_field(fill.dot_offset_x, DOT_OFFSET_RANGE, DEFAULT_DOT_OFFSET),
            dot_offset_y: clamp_field(fill.dot_offset_y, DOT_OFFSET_RANGE, DEFAULT_DOT_OFFSET),
            dot_staggered: fill.dot_staggered,
        }
    }

    /// Dot radius; depends only on the stroke width.
    #[inline]
    pub fn dot_radius(&self) -> f64 {
        clamp_dot_radius(self.stroke_width)
    }

    /// Ink band thickness within one period. A stroke wider than the
    /// period simply floods the tile.
    #[inline]
    pub fn band_width(&self) -> f64 {
        self.stroke_width.min(self.spacing)
    }

    #[inline]
    pub fn is_staggered(&self) -> bool {
        self.pattern_type == PatternType::Dots && self.dot_staggered
    }

    /// Side of the square tile: one period, or two for the honeycomb layout.
    #[inline]
    pub fn tile_size(&self) -> f64 {
        if self.is_staggered() {
            self.spacing * 2.0
        } else {
            self.spacing
        }
    }

    #[inline]
    pub fn line_cap(&self) -> LineCap {
        if self.round_caps {
            LineCap::Round
        } else {
            LineCap::Butt
        }
    }

    /// Convert back into a stored pattern (with `invert` already baked into
    /// the colours), e.g. to persist a normalised slot.
    pub fn to_fill(&self) -> PatternFill {
        PatternFill {
            background_color: self.background,
            ink_color: self.ink,
            pattern_type: self.pattern_type,
            spacing: self.spacing,
            stroke_width: self.stroke_width,
            opacity: self.opacity,
            angle: self.angle,
            invert: false,
            round_caps: self.round_caps,
            dot_shape: self.dot_shape,
            dot_offset_x: self.dot_offset_x,
            dot_offset_y: self.dot_offset_y,
            dot_staggered: self.dot_staggered,
        }
    }
}
