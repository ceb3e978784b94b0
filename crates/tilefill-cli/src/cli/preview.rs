//! HTML page pairing CSS swatches with the vector swatch sheet.
//!
//! The two renderings are shown side by side so drift between the CSS
//! approximation and the SVG pattern is easy to spot.

use std::path::Path;

use tilefill::Palette;
use tilefill::svg::escape;

use super::common::{load_palette, write_output};
use super::css::palette_css;
use super::sheet::sheet_svg;

const STYLE: &str = "body { font-family: sans-serif; margin: 24px; }\n\
.swatches { display: flex; gap: 12px; }\n\
.swatch { width: 96px; }\n\
.swatch div { height: 144px; border: 1px solid #CCCCCC; }\n\
.swatch p { font-size: 11px; text-align: center; margin: 4px 0; }\n";

pub fn preview_html(palette: &Palette) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Palette preview</title>\n<style>\n",
    );
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n<h2>CSS</h2>\n<div class=\"swatches\">\n");

    for slot in palette_css(palette) {
        let label = if slot.label.is_empty() {
            format!("Slot {}", slot.index + 1)
        } else {
            slot.label.clone()
        };
        html.push_str(&format!(
            "  <div class=\"swatch\"><div style=\"{}\"></div><p>{}</p></div>\n",
            escape(&slot.declarations),
            escape(&label)
        ));
    }

    html.push_str("</div>\n<h2>SVG</h2>\n");
    html.push_str(&sheet_svg(palette));
    html.push_str("</body>\n</html>\n");
    html
}

/// Execute the preview command.
pub fn cmd_preview(palette_path: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let palette = load_palette(palette_path)?;
    write_output(output, &preview_html(&palette))
}
