//! Raster tiles for swatch previews.
//!
//! CSS gradients can draw circles but not squares or diamonds, so those
//! dot shapes are painted into a small PNG and embedded as a data URI. The
//! shapes come from [`crate::tile::dot_shapes`], the same ones the vector
//! tile uses.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Transform};

use crate::params::PatternParams;
use crate::tile::{dot_shapes, Shape};

/// Device pixels per tile unit; keeps swatches crisp on high-DPI screens.
pub const RASTER_SCALE: f32 = 2.0;

/// Ink alpha for an opacity in [0, 1].
#[inline]
pub fn alpha_u8(opacity: f64) -> u8 {
    (opacity.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Tile units to pixels when measuring coverage.
pub const COVERAGE_SCALE: f32 = 8.0;

/// Paint the pattern's dot shapes over a transparent tile.
///
/// Returns `None` when the tile has no pixels.
pub fn rasterize_dots(params: &PatternParams) -> Option<Pixmap> {
    paint_dots(params, RASTER_SCALE, alpha_u8(params.opacity))
}

/// Fraction of the tile inked by its dots, clipped to the tile edges and
/// with overlapping dots counted once.
pub fn dot_coverage(params: &PatternParams) -> f64 {
    paint_dots(params, COVERAGE_SCALE, u8::MAX)
        .map(|pixmap| ink_fraction(&pixmap, u8::MAX))
        .unwrap_or(0.0)
}

fn paint_dots(params: &PatternParams, scale: f32, alpha: u8) -> Option<Pixmap> {
    let side = (params.tile_size() * scale as f64).ceil() as u32;
    let mut pixmap = Pixmap::new(side, side)?;

    let mut paint = Paint::default();
    let (r, g, b) = params.ink.channels();
    paint.set_color_rgba8(r, g, b, alpha);
    paint.anti_alias = true;

    let transform = Transform::from_scale(scale, scale);
    for shape in dot_shapes(params) {
        if let Some(path) = shape_path(&shape) {
            pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
        }
    }

    Some(pixmap)
}

fn shape_path(shape: &Shape) -> Option<Path> {
    match shape.polygon() {
        None => PathBuilder::from_circle(
            shape.center.x as f32,
            shape.center.y as f32,
            shape.radius as f32,
        ),
        Some(points) => {
            let (first, rest) = points.split_first()?;
            let mut pb = PathBuilder::new();
            pb.move_to(first.x as f32, first.y as f32);
            for p in rest {
                pb.line_to(p.x as f32, p.y as f32);
            }
            pb.close();
            pb.finish()
        }
    }
}

/// Encode as a `data:image/png;base64,…` URI.
pub fn png_data_uri(pixmap: &Pixmap) -> Option<String> {
    match pixmap.encode_png() {
        Ok(bytes) => Some(format!("data:image/png;base64,{}", STANDARD.encode(bytes))),
        Err(err) => {
            log::warn!("failed to encode {}x{} swatch tile: {err}", pixmap.width(), pixmap.height());
            None
        }
    }
}

/// Fraction of pixels painted with at least half the ink alpha.
pub fn ink_fraction(pixmap: &Pixmap, ink_alpha: u8) -> f64 {
    let threshold = (ink_alpha / 2).max(1);
    let pixels = pixmap.pixels();
    if pixels.is_empty() {
        return 0.0;
    }
    let inked = pixels.iter().filter(|p| p.alpha() >= threshold).count();
    inked as f64 / pixels.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::{DotShape, PatternFill, PatternType};

    fn params(shape: DotShape, staggered: bool) -> PatternParams {
        PatternParams::normalize(&PatternFill {
            pattern_type: PatternType::Dots,
            dot_shape: shape,
            dot_staggered: staggered,
            spacing: 20.0,
            stroke_width: 4.0,
            ..PatternFill::default()
        })
    }

    #[test]
    fn tile_is_scaled() {
        let pixmap = rasterize_dots(&params(DotShape::Square, false)).unwrap();
        assert_eq!(pixmap.width(), 40);
        let staggered = rasterize_dots(&params(DotShape::Square, true)).unwrap();
        assert_eq!(staggered.width(), 80);
    }

    #[test]
    fn square_coverage_matches_area() {
        // 8x8 square in a 20x20 tile
        let pixmap = rasterize_dots(&params(DotShape::Square, false)).unwrap();
        let frac = ink_fraction(&pixmap, 255);
        assert!((frac - 64.0 / 400.0).abs() < 0.02, "got {frac}");
    }

    #[test]
    fn diamond_coverage_matches_area() {
        // half-diagonal 4.8 -> area 2 * 4.8^2
        let pixmap = rasterize_dots(&params(DotShape::Diamond, false)).unwrap();
        let frac = ink_fraction(&pixmap, 255);
        let expected = 2.0 * 4.8 * 4.8 / 400.0;
        assert!((frac - expected).abs() < 0.02, "got {frac}, expected {expected}");
    }

    #[test]
    fn center_pixel_is_ink() {
        let pixmap = rasterize_dots(&params(DotShape::Square, false)).unwrap();
        let center = pixmap.pixel(20, 20).unwrap();
        assert_eq!(center.alpha(), 255);
        let corner = pixmap.pixel(0, 0).unwrap();
        assert_eq!(corner.alpha(), 0);
    }

    #[test]
    fn encodes_png_data_uri() {
        let pixmap = rasterize_dots(&params(DotShape::Diamond, true)).unwrap();
        let uri = png_data_uri(&pixmap).unwrap();
        assert!(uri.starts_with("data:image/png;base64,iVBORw0KGgo"));
    }

    fn offset(mut p: PatternParams, x: f64) -> PatternParams {
        p.dot_offset_x = x;
        p
    }

    #[test]
    fn coverage_counts_only_the_visible_part() {
        // r=4 in a 20x20 tile: a whole dot, then pushed fully off the tile
        let whole = dot_coverage(&params(DotShape::Circle, false));
        assert!((whole - std::f64::consts::PI * 16.0 / 400.0).abs() < 0.005, "got {whole}");
        assert_eq!(dot_coverage(&offset(params(DotShape::Circle, false), 100.0)), 0.0);
    }

    #[test]
    fn staggered_coverage_follows_tile_clipping() {
        // Half a period to the right: 3.5 of the 5 dots stay on the 40x40 tile.
        let frac = dot_coverage(&offset(params(DotShape::Circle, true), 50.0));
        let expected = 3.5 * std::f64::consts::PI * 16.0 / 1600.0;
        assert!((frac - expected).abs() < 0.005, "got {frac}, expected {expected}");
    }

    #[test]
    fn opacity_sets_alpha() {
        assert_eq!(alpha_u8(1.0), 255);
        assert_eq!(alpha_u8(0.5), 128);
        assert_eq!(alpha_u8(0.05), 13);
    }
}
