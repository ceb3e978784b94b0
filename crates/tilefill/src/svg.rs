//! SVG output for chart layers.
//!
//! Charts reference pattern fills by id (`fill="url(#pattern-slot-N)"`), so
//! every pattern in use must be registered in a `<defs>` block before the
//! first element that references it.

use crate::definition::PatternDefinition;
use crate::tile::{render, Shape, TileContent};
use crate::slot::DotShape;

/// Format a coordinate with at most two decimals and no trailing zeros.
pub fn num(value: f64) -> String {
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Escape text for use in element content or attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A `<pattern>` element for one definition.
///
/// The tile is drawn unrotated; `patternTransform` rotates the whole tile
/// around its origin.
pub fn pattern_element(def: &PatternDefinition) -> String {
    let p = &def.params;
    let mut out = format!(
        "<pattern id=\"{}\" patternUnits=\"userSpaceOnUse\" width=\"{}\" height=\"{}\" patternTransform=\"rotate({})\">\n",
        escape(&def.id),
        num(def.width),
        num(def.height),
        num(p.angle)
    );
    out.push_str(&format!(
        "  <rect width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
        num(def.width),
        num(def.height),
        p.background
    ));

    match render(def) {
        TileContent::Path(path) => {
            out.push_str(&format!(
                "  <path d=\"{}\" stroke=\"{}\" stroke-width=\"{}\" stroke-opacity=\"{}\" stroke-linecap=\"{}\" fill=\"none\"/>\n",
                path.d(),
                path.stroke,
                num(path.stroke_width),
                num(path.opacity),
                path.line_cap.svg_name()
            ));
        }
        content => {
            for shape in content.shapes() {
                out.push_str("  ");
                out.push_str(&shape_element(shape, def.fill_rule.svg_name()));
                out.push('\n');
            }
        }
    }

    out.push_str("</pattern>");
    out
}

fn shape_element(shape: &Shape, fill_rule: &str) -> String {
    let paint = format!(
        "fill=\"{}\" fill-opacity=\"{}\" fill-rule=\"{fill_rule}\"",
        shape.fill,
        num(shape.fill_opacity)
    );
    match shape.shape {
        DotShape::Circle => format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {paint}/>",
            num(shape.center.x),
            num(shape.center.y),
            num(shape.radius)
        ),
        DotShape::Square => format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {paint}/>",
            num(shape.center.x - shape.radius),
            num(shape.center.y - shape.radius),
            num(shape.radius * 2.0),
            num(shape.radius * 2.0)
        ),
        DotShape::Diamond => {
            let points: Vec<String> = shape
                .polygon()
                .unwrap_or_default()
                .iter()
                .map(|p| format!("{},{}", num(p.x), num(p.y)))
                .collect();
            format!("<polygon points=\"{}\" {paint}/>", points.join(" "))
        }
    }
}

/// A `<defs>` block registering every given pattern.
pub fn defs(definitions: &[PatternDefinition]) -> String {
    let mut out = String::from("<defs>\n");
    for def in definitions {
        for line in pattern_element(def).lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str("</defs>");
    out
}

/// A standalone SVG showing one pattern over a `width × height` swatch.
pub fn swatch_document(def: &PatternDefinition, width: f64, height: f64) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{}\n<rect width=\"{w}\" height=\"{h}\" fill=\"url(#{})\"/>\n</svg>\n",
        defs(std::slice::from_ref(def)),
        escape(&def.id),
        w = num(width),
        h = num(height),
    )
}
