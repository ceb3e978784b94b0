//! Tile content: the drawable geometry inside one pattern tile.
//!
//! Content is produced in unrotated tile space. The tile's `angle` is
//! applied afterwards as a transform on the whole tile, so the same path
//! data serves every angle.
//!
//! ## Seamless rotation
//!
//! A line drawn exactly one period long leaves gaps at the tile edges as
//! soon as the tile is rotated off-axis. Every stroke here is therefore
//! extended [`EXTENSION_PERIODS`] periods beyond each tile edge.

use serde::Serialize;

use crate::color::HexColor;
use crate::definition::PatternDefinition;
use crate::geometry::{
    diamond_vertices, grid_center, staggered_centers, Line, Point, RotationTransform,
};
use crate::params::PatternParams;
use crate::raster::dot_coverage;
use crate::slot::{DotShape, PatternType};

/// How many tile periods a stroke extends past each edge.
pub const EXTENSION_PERIODS: f64 = 2.0;

/// Stroke end style for line patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Round,
    /// Hard-edged: the stroke stops exactly at the endpoint.
    Butt,
}

impl LineCap {
    pub fn svg_name(&self) -> &'static str {
        match self {
            LineCap::Round => "round",
            LineCap::Butt => "butt",
        }
    }
}

/// Stroked segments for line-based patterns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokePath {
    pub segments: Vec<Line>,
    pub stroke: HexColor,
    pub stroke_width: f64,
    pub opacity: f64,
    pub line_cap: LineCap,
}

impl StrokePath {
    /// SVG path data, one `M … L …` pair per segment.
    pub fn d(&self) -> String {
        self.segments
            .iter()
            .map(|s| {
                format!(
                    "M{},{} L{},{}",
                    crate::svg::num(s.x1),
                    crate::svg::num(s.y1),
                    crate::svg::num(s.x2),
                    crate::svg::num(s.y2)
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One filled dot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub shape: DotShape,
    pub center: Point,
    pub radius: f64,
    pub fill: HexColor,
    pub fill_opacity: f64,
}

impl Shape {
    /// Outline for polygonal shapes; `None` for circles.
    pub fn polygon(&self) -> Option<Vec<Point>> {
        match self.shape {
            DotShape::Circle => None,
            DotShape::Square => {
                let r = self.radius;
                let c = self.center;
                Some(vec![
                    c.offset(-r, -r),
                    c.offset(r, -r),
                    c.offset(r, r),
                    c.offset(-r, r),
                ])
            }
            DotShape::Diamond => Some(diamond_vertices(self.center, self.radius).to_vec()),
        }
    }
}

/// Drawable content of a tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TileContent {
    Path(StrokePath),
    Dot(Shape),
    StaggeredDotSet { shapes: Vec<Shape> },
}

impl TileContent {
    /// All filled shapes (empty for paths).
    pub fn shapes(&self) -> &[Shape] {
        match self {
            TileContent::Path(_) => &[],
            TileContent::Dot(shape) => std::slice::from_ref(shape),
            TileContent::StaggeredDotSet { shapes } => shapes,
        }
    }

    /// Ink colour, whichever kind of content this is.
    pub fn ink(&self) -> Option<HexColor> {
        match self {
            TileContent::Path(path) => Some(path.stroke),
            _ => self.shapes().first().map(|s| s.fill),
        }
    }

    /// Path segments after applying the tile rotation around the origin.
    pub fn rotated_segments(&self, angle_degrees: f64) -> Vec<Line> {
        let TileContent::Path(path) = self else {
            return Vec::new();
        };
        let rot = RotationTransform::about_origin(angle_degrees);
        path.segments.iter().map(|l| rot.apply_line(l)).collect()
    }
}

/// Render the tile content of a definition.
pub fn render(def: &PatternDefinition) -> TileContent {
    let p = &def.params;
    match p.pattern_type {
        PatternType::Lines => TileContent::Path(stroke_path(p, line_segments(p.spacing))),
        PatternType::Crosshatch => {
            TileContent::Path(stroke_path(p, crosshatch_segments(p.spacing)))
        }
        PatternType::Dots => {
            match <[Shape; 1]>::try_from(dot_shapes(p)) {
                Ok([shape]) => TileContent::Dot(shape),
                Err(shapes) => TileContent::StaggeredDotSet { shapes },
            }
        }
    }
}

fn stroke_path(p: &PatternParams, segments: Vec<Line>) -> StrokePath {
    StrokePath {
        segments,
        stroke: p.ink,
        stroke_width: p.stroke_width,
        opacity: p.opacity,
        line_cap: p.line_cap(),
    }
}

/// A single vertical stroke through the tile centre.
pub fn line_segments(spacing: f64) -> Vec<Line> {
    let x = spacing / 2.0;
    vec![Line::new(x, 0.0, x, spacing).extended(EXTENSION_PERIODS * spacing)]
}

/// Both tile diagonals plus their copies one period to either side.
///
/// Each diagonal's endpoints are pushed out by `2s` in both x and y, so its
/// vertical reach matches [`line_segments`].
pub fn crosshatch_segments(spacing: f64) -> Vec<Line> {
    let s = spacing;
    let e = EXTENSION_PERIODS * s;
    let down = Line::new(-e, -e, s + e, s + e);
    let up = Line::new(s + e, -e, -e, s + e);

    let mut segments = vec![down, up];
    for shift in [-s, s] {
        segments.push(down.shifted_x(shift));
        segments.push(up.shifted_x(shift));
    }
    segments
}

/// Dot shapes for a `Dots` pattern: one for the simple grid, five for the
/// honeycomb layout.
pub fn dot_shapes(p: &PatternParams) -> Vec<Shape> {
    let radius = p.dot_radius();
    let make = |center: Point| Shape {
        shape: p.dot_shape,
        center,
        radius,
        fill: p.ink,
        fill_opacity: p.opacity,
    };

    if p.is_staggered() {
        staggered_centers(p.spacing, p.dot_offset_x, p.dot_offset_y)
            .into_iter()
            .map(make)
            .collect()
    } else {
        vec![make(grid_center(p.spacing, p.dot_offset_x, p.dot_offset_y))]
    }
}

/// Fraction of the (unrotated) tile covered by ink.
///
/// Dots are measured from the painted tile, so shapes pushed over the tile
/// edge by an offset only count where they remain visible.
pub fn ink_coverage(def: &PatternDefinition) -> f64 {
    let p = &def.params;
    match p.pattern_type {
        PatternType::Lines => p.band_width() / p.spacing,
        PatternType::Crosshatch => {
            // Neighbouring diagonals are s/√2 apart.
            let period = p.spacing / 2.0_f64.sqrt();
            let f = p.stroke_width.min(period) / period;
            1.0 - (1.0 - f) * (1.0 - f)
        }
        PatternType::Dots => dot_coverage(p),
    }
}
