//! Geometry primitives for pattern tiles.
//!
//! Everything here works in a tile's local coordinate space: origin at the
//! top-left corner, x to the right, y downward (the SVG convention).
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! `#[derive(Clone, Copy)]` on a small struct like `Point` means it is
//! duplicated bit-for-bit when passed around, just like a JS number. No
//! borrowing gymnastics needed for two `f64`s.

use std::f64::consts::PI;

use serde::Serialize;

use crate::params::DOT_RADIUS_RANGE;

/// Diamond vertices sit this far from the centre, in units of the dot radius.
///
/// A diamond with half-diagonal `r` covers only half the area of a square
/// with half-side `r`; 1.2 brings it visually closer to the circle.
pub const DIAMOND_SCALE: f64 = 1.2;

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A line segment defined by two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return this point shifted by `(dx, dy)`.
    #[inline]
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl Line {
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Get the length of the line segment.
    #[inline]
    pub fn length(&self) -> f64 {
        let dx = self.x2 - self.x1;
        let dy = self.y2 - self.y1;
        (dx * dx + dy * dy).sqrt()
    }

    /// Shift both endpoints horizontally.
    #[inline]
    pub fn shifted_x(&self, dx: f64) -> Line {
        Line::new(self.x1 + dx, self.y1, self.x2 + dx, self.y2)
    }

    /// Lengthen the segment by `amount` past each endpoint, keeping its direction.
    pub fn extended(&self, amount: f64) -> Line {
        let len = self.length();
        if len == 0.0 {
            return *self;
        }
        let ux = (self.x2 - self.x1) / len;
        let uy = (self.y2 - self.y1) / len;
        Line::new(
            self.x1 - ux * amount,
            self.y1 - uy * amount,
            self.x2 + ux * amount,
            self.y2 + uy * amount,
        )
    }

    /// Vertical range `(min_y, max_y)` covered by the segment.
    #[inline]
    pub fn y_extent(&self) -> (f64, f64) {
        (self.y1.min(self.y2), self.y1.max(self.y2))
    }

    /// The y coordinate where the segment crosses the vertical `x`, if it does.
    pub fn y_at(&self, x: f64) -> Option<f64> {
        let (lo, hi) = (self.x1.min(self.x2), self.x1.max(self.x2));
        if x < lo || x > hi {
            return None;
        }
        if self.x1 == self.x2 {
            return Some(self.y1);
        }
        let t = (x - self.x1) / (self.x2 - self.x1);
        Some(self.y1 + t * (self.y2 - self.y1))
    }
}

/// A 2D rotation around a centre point.
///
/// Tiles rotate around their own origin, so most callers use
/// [`RotationTransform::about_origin`].
#[derive(Debug, Clone, Copy)]
pub struct RotationTransform {
    pub center_x: f64,
    pub center_y: f64,
    pub cos_a: f64,
    pub sin_a: f64,
}

impl RotationTransform {
    pub fn new(center_x: f64, center_y: f64, angle_rad: f64) -> Self {
        Self {
            center_x,
            center_y,
            cos_a: angle_rad.cos(),
            sin_a: angle_rad.sin(),
        }
    }

    pub fn from_degrees(center_x: f64, center_y: f64, angle_degrees: f64) -> Self {
        Self::new(center_x, center_y, angle_degrees * PI / 180.0)
    }

    /// Same as SVG's `rotate(angle)` with no centre arguments.
    pub fn about_origin(angle_degrees: f64) -> Self {
        Self::from_degrees(0.0, 0.0, angle_degrees)
    }

    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let dx = x - self.center_x;
        let dy = y - self.center_y;
        (
            self.center_x + dx * self.cos_a - dy * self.sin_a,
            self.center_y + dx * self.sin_a + dy * self.cos_a,
        )
    }

    #[inline]
    pub fn apply_line(&self, line: &Line) -> Line {
        let (x1, y1) = self.apply(line.x1, line.y1);
        let (x2, y2) = self.apply(line.x2, line.y2);
        Line::new(x1, y1, x2, y2)
    }
}

/// Displacement for travelling `distance` along a tile's "vertical" once the
/// tile is rotated clockwise by `angle_degrees` (y-down coordinates).
///
/// At 0° this is straight down; at 90° it points to negative x.
pub fn angle_to_offset(angle_degrees: f64, distance: f64) -> (f64, f64) {
    let rad = angle_degrees * PI / 180.0;
    (-rad.sin() * distance, rad.cos() * distance)
}

/// Centre of the single dot in a `spacing × spacing` tile, phase-shifted by
/// percentages of the spacing.
pub fn grid_center(spacing: f64, offset_x_pct: f64, offset_y_pct: f64) -> Point {
    Point::new(
        spacing / 2.0 + offset_x_pct * spacing / 100.0,
        spacing / 2.0 + offset_y_pct * spacing / 100.0,
    )
}

/// Dot centres of the honeycomb layout in a `2s × 2s` tile.
///
/// Order: the two top-row dots, then the bottom-row centre dot and its two
/// edge duplicates at `x = 0` and `x = 2s`. The edge pair are half-period
/// phase copies and must stay identical apart from `x`.
pub fn staggered_centers(spacing: f64, offset_x_pct: f64, offset_y_pct: f64) -> [Point; 5] {
    let dx = offset_x_pct * spacing / 100.0;
    let dy = offset_y_pct * spacing / 100.0;
    let s = spacing;
    [
        Point::new(s / 2.0, s / 2.0),
        Point::new(3.0 * s / 2.0, s / 2.0),
        Point::new(s, 3.0 * s / 2.0),
        Point::new(0.0, 3.0 * s / 2.0),
        Point::new(2.0 * s, 3.0 * s / 2.0),
    ]
    .map(|p| p.offset(dx, dy))
}

/// Dot radius derived from the stroke width; independent of spacing.
pub fn clamp_dot_radius(stroke_width: f64) -> f64 {
    let (min, max) = DOT_RADIUS_RANGE;
    if stroke_width.is_nan() {
        return min;
    }
    stroke_width.clamp(min, max)
}

/// Area of a circle clipped to the rectangle `[0, width] × [0, height]`.
///
/// Integrates the clipped vertical chord across the circle's x-range.
pub fn circle_rect_area(center: Point, radius: f64, width: f64, height: f64) -> f64 {
    const STEPS: usize = 2048;
    let x0 = (center.x - radius).max(0.0);
    let x1 = (center.x + radius).min(width);
    if radius <= 0.0 || x1 <= x0 {
        return 0.0;
    }

    let chord = |x: f64| {
        let half = (radius * radius - (x - center.x).powi(2)).max(0.0).sqrt();
        ((center.y + half).min(height) - (center.y - half).max(0.0)).max(0.0)
    };
    let dx = (x1 - x0) / STEPS as f64;
    (0..STEPS).map(|i| chord(x0 + (i as f64 + 0.5) * dx)).sum::<f64>() * dx
}

/// Diamond corners, clockwise from the top.
pub fn diamond_vertices(center: Point, radius: f64) -> [Point; 4] {
    let d = radius * DIAMOND_SCALE;
    [
        center.offset(0.0, -d),
        center.offset(d, 0.0),
        center.offset(0.0, d),
        center.offset(-d, 0.0),
    ]
}
