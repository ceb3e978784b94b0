//! Print CSS background approximations for each slot.

use std::path::Path;

use serde::Serialize;

use tilefill::{CssBackground, FillReference, Palette, approximate};

use super::common::{load_palette, write_output};

/// One slot's CSS output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotCss {
    pub index: usize,
    pub label: String,
    pub fill: FillReference,
    pub declarations: String,
    pub background: CssBackground,
}

pub fn palette_css(palette: &Palette) -> Vec<SlotCss> {
    palette
        .active_slots()
        .zip(palette.fills())
        .enumerate()
        .map(|(index, (slot, fill))| {
            let background = approximate(slot);
            SlotCss {
                index,
                label: slot.label.clone(),
                fill,
                declarations: background.to_declarations(),
                background,
            }
        })
        .collect()
}

/// A stylesheet with one `.slot-N` rule per slot.
pub fn stylesheet(slots: &[SlotCss]) -> String {
    let mut out = String::new();
    for slot in slots {
        if !slot.label.is_empty() {
            out.push_str(&format!("/* {} */\n", slot.label.replace("*/", "* /")));
        }
        out.push_str(&format!(".slot-{} {{ {} }}\n", slot.index, slot.declarations));
    }
    out
}

/// Execute the css command.
pub fn cmd_css(palette_path: &Path, json: bool) -> anyhow::Result<()> {
    let palette = load_palette(palette_path)?;
    let slots = palette_css(&palette);
    let out = if json {
        serde_json::to_string_pretty(&slots)?
    } else {
        stylesheet(&slots)
    };
    write_output(None, &out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilefill::{DotShape, PatternFill, PatternType, SlotDescription};

    #[test]
    fn one_rule_per_slot() {
        let mut palette = Palette::new(2);
        *palette.active_mut(1).unwrap() = SlotDescription::pattern(
            "Dots",
            PatternFill {
                pattern_type: PatternType::Dots,
                dot_shape: DotShape::Circle,
                ..PatternFill::default()
            },
        );
        let css = stylesheet(&palette_css(&palette));
        assert!(css.contains(".slot-0 { background-color: #"));
        assert!(css.contains(".slot-1 { background-color: #FFFFFF; background-image: radial-gradient("));
        assert!(css.contains("/* Dots */"));
    }

    #[test]
    fn json_carries_fill_reference() {
        let palette = Palette::new(2);
        let json = serde_json::to_value(palette_css(&palette)).unwrap();
        assert_eq!(json[0]["fill"]["type"], "flat");
        assert_eq!(json[1]["index"], 1);
    }
}
