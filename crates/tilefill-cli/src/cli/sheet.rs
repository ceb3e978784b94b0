//! Render a palette as a swatch sheet.
//!
//! One column per slot, filled the way a chart would fill it: solid slots
//! with their colour, pattern slots with `url(#pattern-slot-N)`. Every
//! pattern is registered in `<defs>` ahead of the columns.

use std::path::Path;

use anyhow::Context;
use resvg::usvg;
use tiny_skia::{Color, Pixmap, Transform};

use tilefill::svg::{defs, escape, num};
use tilefill::{Palette, Track};

use super::common::{TrackArg, load_palette, write_output};

const SWATCH_WIDTH: f64 = 96.0;
const SWATCH_HEIGHT: f64 = 144.0;
const LABEL_HEIGHT: f64 = 18.0;
const GUTTER: f64 = 12.0;
const MARGIN: f64 = 24.0;

/// Sheet dimensions for `slots` columns.
pub fn sheet_size(slots: usize) -> (f64, f64) {
    let n = slots as f64;
    let width = MARGIN * 2.0 + n * SWATCH_WIDTH + (n - 1.0).max(0.0) * GUTTER;
    let height = MARGIN * 2.0 + SWATCH_HEIGHT + LABEL_HEIGHT;
    (width, height)
}

/// Build the sheet SVG for the active track of every slot.
pub fn sheet_svg(palette: &Palette) -> String {
    let (width, height) = sheet_size(palette.len());

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = num(width),
        h = num(height)
    );
    svg.push_str(&defs(&palette.pattern_definitions()));
    svg.push('\n');
    svg.push_str(&format!(
        "<rect width=\"{}\" height=\"{}\" fill=\"#FFFFFF\"/>\n",
        num(width),
        num(height)
    ));

    for (i, (slot, fill)) in palette.active_slots().zip(palette.fills()).enumerate() {
        let x = MARGIN + i as f64 * (SWATCH_WIDTH + GUTTER);
        svg.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"#CCCCCC\" stroke-width=\"1\"/>\n",
            num(x),
            num(MARGIN),
            num(SWATCH_WIDTH),
            num(SWATCH_HEIGHT),
            fill.to_svg_fill()
        ));

        let label = if slot.label.is_empty() {
            format!("Slot {}", i + 1)
        } else {
            slot.label.clone()
        };
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"11\" text-anchor=\"middle\">{}</text>\n",
            num(x + SWATCH_WIDTH / 2.0),
            num(MARGIN + SWATCH_HEIGHT + LABEL_HEIGHT - 4.0),
            escape(&label)
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// Rasterize an SVG document at `scale`.
pub fn render_png(svg: &str, scale: f32) -> anyhow::Result<Pixmap> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
        .context("generated sheet is not valid SVG")?;
    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;

    let mut pixmap = Pixmap::new(width, height)
        .with_context(|| format!("cannot allocate a {width}x{height} image"))?;
    pixmap.fill(Color::WHITE);
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());
    Ok(pixmap)
}

/// Execute the sheet command.
pub fn cmd_sheet(
    palette_path: &Path,
    output: Option<&Path>,
    png: Option<&Path>,
    png_scale: f32,
    track: Option<TrackArg>,
) -> anyhow::Result<()> {
    let mut palette = load_palette(palette_path)?;
    if let Some(track) = track {
        palette.set_all_tracks(Track::from(track));
    }

    let svg = sheet_svg(&palette);
    write_output(output, &svg)?;

    if let Some(png_path) = png {
        let scale = if png_scale > 0.0 { png_scale } else { 1.0 };
        let pixmap = render_png(&svg, scale)?;
        pixmap
            .save_png(png_path)
            .with_context(|| format!("failed to write {}", png_path.display()))?;
        log::info!("wrote {} ({}x{})", png_path.display(), pixmap.width(), pixmap.height());
    }
    Ok(())
}
