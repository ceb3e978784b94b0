//! List pattern types, dot shapes and parameter ranges.

use tilefill::params::{
    ANGLE_RANGE, DEFAULT_ANGLE, DEFAULT_DOT_OFFSET, DEFAULT_OPACITY, DEFAULT_SPACING,
    DEFAULT_STROKE_WIDTH, DOT_OFFSET_RANGE, DOT_RADIUS_RANGE, OPACITY_RANGE, SPACING_RANGE,
    STROKE_WIDTH_RANGE,
};
use tilefill::palette::{MAX_SLOTS, MIN_SLOTS};
use tilefill::{DotShape, PatternType};

/// Human-readable listing, one item per line.
pub fn patterns_listing() -> String {
    let mut out = String::from("Pattern types:\n");
    for pattern in PatternType::all() {
        out.push_str(&format!("  {}\n", pattern.name()));
    }

    out.push_str("\nDot shapes:\n");
    for shape in DotShape::all() {
        out.push_str(&format!("  {}\n", shape.name()));
    }

    out.push_str("\nParameters (min..max, default):\n");
    let ranges = [
        ("spacing", SPACING_RANGE, DEFAULT_SPACING),
        ("strokeWidth", STROKE_WIDTH_RANGE, DEFAULT_STROKE_WIDTH),
        ("opacity", OPACITY_RANGE, DEFAULT_OPACITY),
        ("angle", ANGLE_RANGE, DEFAULT_ANGLE),
        ("dotOffsetX", DOT_OFFSET_RANGE, DEFAULT_DOT_OFFSET),
        ("dotOffsetY", DOT_OFFSET_RANGE, DEFAULT_DOT_OFFSET),
    ];
    for (name, (min, max), default) in ranges {
        out.push_str(&format!("  {name:<12} {min}..{max}, {default}\n"));
    }
    let (rmin, rmax) = DOT_RADIUS_RANGE;
    out.push_str(&format!("  {:<12} {rmin}..{rmax}, strokeWidth\n", "dotRadius"));

    out.push_str(&format!("\nSlots per palette: {MIN_SLOTS}..{MAX_SLOTS}\n"));
    out
}

/// Execute the patterns command.
pub fn cmd_patterns() -> anyhow::Result<()> {
    print!("{}", patterns_listing());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_pattern_and_shape() {
        let listing = patterns_listing();
        for name in ["lines", "crosshatch", "dots", "circle", "square", "diamond"] {
            assert!(listing.contains(name), "missing {name}");
        }
        assert!(listing.contains("spacing      4..40, 10"));
    }
}
