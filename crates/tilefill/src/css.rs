//! CSS approximation of a slot for compact swatches.
//!
//! Swatches are too small to be worth a full SVG tile, so a slot is
//! approximated with layered CSS backgrounds over the background colour.
//! Parameters come from the same [`PatternParams`] as the vector tile.
//!
//! ## Angle convention
//!
//! A vector tile at angle `θ` draws a vertical stroke rotated clockwise by
//! `θ`. CSS gradient angles name the direction the colour *changes* in,
//! with 0deg pointing up, so stripes run perpendicular to it:
//!
//! - Lines: `θ + 90deg`.
//! - Crosshatch: `θ + 45deg` and `θ - 45deg`. Modulo 180° these are the
//!   two tile diagonals of the vector X rotated by `θ`.
//!
//! Dot layouts are not rotated; at swatch size the difference is not
//! visible.

use std::fmt;

use serde::Serialize;

use crate::color::HexColor;
use crate::geometry::{circle_rect_area, grid_center, staggered_centers, Point};
use crate::params::PatternParams;
use crate::raster::{dot_coverage, png_data_uri, rasterize_dots};
use crate::slot::{DotShape, PatternType, SlotDescription, SlotFill};
use crate::svg::num;

/// One colour stop of a gradient, at a distance in px.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStop {
    /// `rgba(...)` or `transparent`.
    pub color: String,
    pub at: f64,
}

impl ColorStop {
    fn ink(color: &str, at: f64) -> Self {
        Self { color: color.to_string(), at }
    }

    fn clear(at: f64) -> Self {
        Self { color: "transparent".to_string(), at }
    }

    pub fn is_ink(&self) -> bool {
        self.color != "transparent"
    }
}

/// One `background-image` layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CssLayer {
    /// Stripes repeating every `period` px.
    RepeatingLinear {
        angle: f64,
        period: f64,
        stops: Vec<ColorStop>,
    },
    /// A hard-edged disk, drawn once per background tile.
    Radial {
        cx: f64,
        cy: f64,
        radius: f64,
        ink: String,
        offset: (f64, f64),
    },
    /// A rasterised tile.
    Image {
        data_uri: String,
        /// Inked fraction of the raster, measured when it was painted.
        coverage: f64,
        offset: (f64, f64),
    },
}

impl CssLayer {
    fn offset(&self) -> (f64, f64) {
        match self {
            CssLayer::RepeatingLinear { .. } => (0.0, 0.0),
            CssLayer::Radial { offset, .. } | CssLayer::Image { offset, .. } => *offset,
        }
    }
}

impl fmt::Display for CssLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssLayer::RepeatingLinear { angle, stops, .. } => {
                let stops: Vec<String> = stops
                    .iter()
                    .map(|s| format!("{} {}px", s.color, num(s.at)))
                    .collect();
                write!(f, "repeating-linear-gradient({}deg, {})", num(*angle), stops.join(", "))
            }
            CssLayer::Radial { cx, cy, radius, ink, .. } => write!(
                f,
                "radial-gradient(circle at {}px {}px, {ink} 0px, {ink} {r}px, transparent {r}px)",
                num(*cx),
                num(*cy),
                r = num(*radius),
            ),
            CssLayer::Image { data_uri, .. } => write!(f, "url(\"{data_uri}\")"),
        }
    }
}

/// Layered CSS background approximating a slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssBackground {
    pub color: HexColor,
    pub layers: Vec<CssLayer>,
    /// Background tile size `(width, height)` in px, when layers tile.
    pub size: Option<(f64, f64)>,
}

impl CssBackground {
    fn flat(color: HexColor) -> Self {
        Self { color, layers: Vec::new(), size: None }
    }

    /// Value for `background-image`.
    pub fn image(&self) -> String {
        if self.layers.is_empty() {
            return "none".to_string();
        }
        self.layers.iter().map(|l| l.to_string()).collect::<Vec<_>>().join(", ")
    }

    /// Value for `background-size`, if the layers tile.
    pub fn size_value(&self) -> Option<String> {
        self.size.map(|(w, h)| format!("{}px {}px", num(w), num(h)))
    }

    /// Value for `background-position`, if any layer is shifted.
    pub fn position_value(&self) -> Option<String> {
        if self.layers.iter().all(|l| l.offset() == (0.0, 0.0)) {
            return None;
        }
        let positions: Vec<String> = self
            .layers
            .iter()
            .map(|l| {
                let (x, y) = l.offset();
                format!("{}px {}px", num(x), num(y))
            })
            .collect();
        Some(positions.join(", "))
    }

    /// Style declarations, ready for a `style` attribute.
    pub fn to_declarations(&self) -> String {
        let mut out = format!("background-color: {};", self.color);
        if !self.layers.is_empty() {
            out.push_str(&format!(" background-image: {};", self.image()));
        }
        if let Some(size) = self.size_value() {
            out.push_str(&format!(" background-size: {size};"));
        }
        if let Some(position) = self.position_value() {
            out.push_str(&format!(" background-position: {position};"));
        }
        out
    }

    /// Fraction of the swatch covered by ink.
    ///
    /// Stripe layers cross each other, so their uncovered fractions
    /// multiply; dot layers never overlap and simply add up. A radial dot
    /// counts only the part inside its background tile.
    pub fn ink_coverage(&self) -> f64 {
        let mut uncovered = 1.0;
        let mut dots = 0.0;
        for layer in &self.layers {
            match layer {
                CssLayer::RepeatingLinear { period, stops, .. } => {
                    let inked: f64 = stops
                        .windows(2)
                        .filter(|w| w[0].is_ink() && w[1].is_ink())
                        .map(|w| w[1].at - w[0].at)
                        .sum();
                    uncovered *= 1.0 - (inked / period).min(1.0);
                }
                CssLayer::Radial { cx, cy, radius, .. } => {
                    if let Some((w, h)) = self.size {
                        dots += circle_rect_area(Point::new(*cx, *cy), *radius, w, h) / (w * h);
                    }
                }
                CssLayer::Image { coverage, .. } => dots += coverage,
            }
        }
        ((1.0 - uncovered) + dots).min(1.0)
    }
}

/// Approximate a slot with CSS backgrounds.
pub fn approximate(slot: &SlotDescription) -> CssBackground {
    match &slot.fill {
        SlotFill::Solid(solid) => CssBackground::flat(solid.color),
        SlotFill::Pattern(fill) => approximate_params(&PatternParams::normalize(fill)),
    }
}

/// Approximate already-normalised parameters.
pub fn approximate_params(p: &PatternParams) -> CssBackground {
    let ink = p.ink.rgba(p.opacity);
    match p.pattern_type {
        PatternType::Lines => CssBackground {
            color: p.background,
            layers: vec![stripes(p.angle + 90.0, p.spacing, p.band_width(), &ink)],
            size: None,
        },
        PatternType::Crosshatch => {
            let period = p.spacing / 2.0_f64.sqrt();
            let band = p.stroke_width.min(period);
            CssBackground {
                color: p.background,
                layers: vec![
                    stripes(p.angle + 45.0, period, band, &ink),
                    stripes(p.angle - 45.0, period, band, &ink),
                ],
                size: None,
            }
        }
        PatternType::Dots => match p.dot_shape {
            DotShape::Circle if radial_matches_tile(p) => circle_dots(p, &ink),
            _ => raster_dots(p).unwrap_or_else(|| {
                log::warn!("falling back to circle swatch for {} dots", p.dot_shape.name());
                circle_dots(p, &ink)
            }),
        },
    }
}

/// A stripe layer with the band centred in its period, like the vector
/// stroke through the tile centre.
fn stripes(angle: f64, period: f64, band: f64, ink: &str) -> CssLayer {
    let start = (period - band) / 2.0;
    let end = start + band;
    CssLayer::RepeatingLinear {
        angle,
        period,
        stops: vec![
            ColorStop::clear(0.0),
            ColorStop::clear(start),
            ColorStop::ink(ink, start),
            ColorStop::ink(ink, end),
            ColorStop::clear(end),
            ColorStop::clear(period),
        ],
    }
}

/// Radial layers clip each dot to its own background tile. A staggered
/// tile clips at its `2s` edges instead, so the two agree only while every
/// dot sits unshifted inside its `s`-wide cell.
fn radial_matches_tile(p: &PatternParams) -> bool {
    !p.is_staggered()
        || (p.dot_offset_x == 0.0 && p.dot_offset_y == 0.0 && p.dot_radius() <= p.spacing / 2.0)
}

fn circle_dots(p: &PatternParams, ink: &str) -> CssBackground {
    let s = p.spacing;
    let radius = p.dot_radius();

    if p.is_staggered() {
        // Two layers on an s × 2s tile: the top row as is, the bottom row
        // shifted half a period so its dots land on 0, s, 2s.
        let centers = staggered_centers(s, p.dot_offset_x, p.dot_offset_y);
        let top = centers[0];
        let bottom = centers[2].offset(-s / 2.0, 0.0);
        CssBackground {
            color: p.background,
            layers: vec![
                CssLayer::Radial {
                    cx: top.x,
                    cy: top.y,
                    radius,
                    ink: ink.to_string(),
                    offset: (0.0, 0.0),
                },
                CssLayer::Radial {
                    cx: bottom.x,
                    cy: bottom.y,
                    radius,
                    ink: ink.to_string(),
                    offset: (s / 2.0, 0.0),
                },
            ],
            size: Some((s, 2.0 * s)),
        }
    } else {
        let c = grid_center(s, p.dot_offset_x, p.dot_offset_y);
        CssBackground {
            color: p.background,
            layers: vec![CssLayer::Radial {
                cx: c.x,
                cy: c.y,
                radius,
                ink: ink.to_string(),
                offset: (0.0, 0.0),
            }],
            size: Some((s, s)),
        }
    }
}

fn raster_dots(p: &PatternParams) -> Option<CssBackground> {
    let pixmap = rasterize_dots(p)?;
    let data_uri = png_data_uri(&pixmap)?;
    let coverage = dot_coverage(p);
    let side = p.tile_size();
    Some(CssBackground {
        color: p.background,
        layers: vec![CssLayer::Image { data_uri, coverage, offset: (0.0, 0.0) }],
        size: Some((side, side)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::build;
    use crate::slot::PatternFill;
    use crate::tile::ink_coverage;

    fn slot(fill: PatternFill) -> SlotDescription {
        SlotDescription::pattern("t", fill)
    }

    #[test]
    fn solid_is_flat_color() {
        let bg = approximate(&SlotDescription::solid("s", HexColor::rgb(0x12, 0x34, 0x56)));
        assert!(bg.layers.is_empty());
        assert_eq!(bg.to_declarations(), "background-color: #123456;");
    }

    #[test]
    fn lines_use_offset_angle_and_centered_band() {
        let bg = approximate(&slot(PatternFill {
            spacing: 10.0,
            stroke_width: 2.0,
            angle: 30.0,
            opacity: 0.5,
            ..PatternFill::default()
        }));
        assert_eq!(
            bg.image(),
            "repeating-linear-gradient(120deg, transparent 0px, transparent 4px, \
             rgba(0, 0, 0, 0.5) 4px, rgba(0, 0, 0, 0.5) 6px, transparent 6px, transparent 10px)"
        );
        assert!((bg.ink_coverage() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn crosshatch_has_two_diagonal_layers() {
        let bg = approximate(&slot(PatternFill {
            pattern_type: PatternType::Crosshatch,
            angle: 0.0,
            ..PatternFill::default()
        }));
        let angles: Vec<f64> = bg
            .layers
            .iter()
            .map(|l| match l {
                CssLayer::RepeatingLinear { angle, .. } => *angle,
                other => panic!("unexpected layer {other:?}"),
            })
            .collect();
        assert_eq!(angles, vec![45.0, -45.0]);
    }

    #[test]
    fn invert_paints_background_with_ink() {
        let bg = approximate(&slot(PatternFill {
            background_color: HexColor::rgb(255, 255, 0),
            ink_color: HexColor::rgb(0, 0, 255),
            invert: true,
            ..PatternFill::default()
        }));
        assert_eq!(bg.color, HexColor::rgb(0, 0, 255));
        assert!(bg.image().contains("rgba(255, 255, 0, 1)"));
    }

    #[test]
    fn circle_dot_is_radial_tile() {
        let bg = approximate(&slot(PatternFill {
            pattern_type: PatternType::Dots,
            spacing: 12.0,
            stroke_width: 3.0,
            ..PatternFill::default()
        }));
        assert_eq!(bg.size_value().as_deref(), Some("12px 12px"));
        assert_eq!(
            bg.image(),
            "radial-gradient(circle at 6px 6px, rgba(0, 0, 0, 1) 0px, rgba(0, 0, 0, 1) 3px, transparent 3px)"
        );
        assert!(bg.position_value().is_none());
    }

    #[test]
    fn staggered_circles_use_two_shifted_layers() {
        let bg = approximate(&slot(PatternFill {
            pattern_type: PatternType::Dots,
            dot_staggered: true,
            spacing: 10.0,
            stroke_width: 5.0,
            ..PatternFill::default()
        }));
        assert_eq!(bg.layers.len(), 2);
        assert_eq!(bg.size_value().as_deref(), Some("10px 20px"));
        assert_eq!(bg.position_value().as_deref(), Some("0px 0px, 5px 0px"));
        match &bg.layers[1] {
            CssLayer::Radial { cx, cy, .. } => assert_eq!((*cx, *cy), (5.0, 15.0)),
            other => panic!("unexpected layer {other:?}"),
        }
    }

    #[test]
    fn square_dots_embed_raster() {
        let bg = approximate(&slot(PatternFill {
            pattern_type: PatternType::Dots,
            dot_shape: DotShape::Square,
            spacing: 16.0,
            ..PatternFill::default()
        }));
        assert_eq!(bg.layers.len(), 1);
        assert!(bg.image().starts_with("url(\"data:image/png;base64,"));
        assert_eq!(bg.size_value().as_deref(), Some("16px 16px"));
    }

    #[test]
    fn declarations_include_size_and_position() {
        let bg = approximate(&slot(PatternFill {
            pattern_type: PatternType::Dots,
            dot_staggered: true,
            ..PatternFill::default()
        }));
        let css = bg.to_declarations();
        assert!(css.starts_with("background-color: #FFFFFF; background-image: radial-gradient("));
        assert!(css.contains("background-size: 10px 20px;"));
        assert!(css.contains("background-position: 0px 0px, 5px 0px;"));
    }

    #[test]
    fn offset_staggered_circles_use_raster_tile() {
        let s = slot(PatternFill {
            pattern_type: PatternType::Dots,
            dot_staggered: true,
            spacing: 20.0,
            stroke_width: 4.0,
            dot_offset_x: 50.0,
            ..PatternFill::default()
        });
        let bg = approximate(&s);
        assert_eq!(bg.layers.len(), 1);
        assert!(matches!(bg.layers[0], CssLayer::Image { .. }));
        assert_eq!(bg.size_value().as_deref(), Some("40px 40px"));

        // 3.5 dots stay inside the 40px tile; one is pushed off the edge
        let vector = ink_coverage(&build(&s, 0).unwrap());
        let css = bg.ink_coverage();
        assert!((vector - 0.11).abs() < 0.01, "vector {vector}");
        assert!((vector - css).abs() < 0.01, "vector {vector} vs css {css}");
    }

    #[test]
    fn large_staggered_circles_use_raster_tile() {
        // radius 6 overflows a 10px cell
        let bg = approximate(&slot(PatternFill {
            pattern_type: PatternType::Dots,
            dot_staggered: true,
            spacing: 10.0,
            stroke_width: 6.0,
            ..PatternFill::default()
        }));
        assert!(matches!(bg.layers[..], [CssLayer::Image { .. }]));
    }

    #[test]
    fn radial_coverage_is_clipped_to_tile() {
        let s = slot(PatternFill {
            pattern_type: PatternType::Dots,
            spacing: 20.0,
            stroke_width: 4.0,
            dot_offset_x: 100.0,
            ..PatternFill::default()
        });
        let bg = approximate(&s);
        assert!(matches!(bg.layers[..], [CssLayer::Radial { .. }]));
        assert!(bg.ink_coverage() < 1e-9);
        assert!(ink_coverage(&build(&s, 0).unwrap()) < 1e-9);

        let half = approximate(&slot(PatternFill {
            pattern_type: PatternType::Dots,
            spacing: 20.0,
            stroke_width: 4.0,
            dot_offset_x: 50.0,
            ..PatternFill::default()
        }));
        let expected = 8.0 * std::f64::consts::PI / 400.0;
        assert!((half.ink_coverage() - expected).abs() < 1e-4);
    }

    #[test]
    fn coverage_agrees_with_vector_tile() {
        let cases = [
            PatternFill { spacing: 8.0, stroke_width: 3.0, ..PatternFill::default() },
            PatternFill {
                pattern_type: PatternType::Crosshatch,
                spacing: 20.0,
                stroke_width: 2.0,
                ..PatternFill::default()
            },
            PatternFill {
                pattern_type: PatternType::Dots,
                spacing: 20.0,
                stroke_width: 4.0,
                ..PatternFill::default()
            },
            PatternFill {
                pattern_type: PatternType::Dots,
                dot_staggered: true,
                spacing: 20.0,
                stroke_width: 4.0,
                ..PatternFill::default()
            },
            PatternFill {
                pattern_type: PatternType::Dots,
                dot_shape: DotShape::Diamond,
                spacing: 20.0,
                stroke_width: 4.0,
                ..PatternFill::default()
            },
        ];
        for fill in cases {
            let s = slot(fill);
            let vector = ink_coverage(&build(&s, 0).unwrap());
            let css = approximate(&s).ink_coverage();
            assert!((vector - css).abs() < 0.03, "vector {vector} vs css {css} for {s:?}");
        }
    }
}
