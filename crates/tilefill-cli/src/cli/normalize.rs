//! Re-export a palette in canonical, current-version form.

use std::path::Path;

use chrono::{SecondsFormat, Utc};

use tilefill::{Palette, export_json, export_yaml};

use super::common::{load_palette, write_output};

/// Serialize a palette, stamped with `exported_at`.
pub fn normalized(palette: &Palette, exported_at: String, yaml: bool) -> tilefill::Result<String> {
    if yaml {
        export_yaml(palette, Some(exported_at))
    } else {
        export_json(palette, Some(exported_at), true)
    }
}

/// Execute the normalize command.
pub fn cmd_normalize(palette_path: &Path, output: Option<&Path>, yaml: bool) -> anyhow::Result<()> {
    let palette = load_palette(palette_path)?;
    let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let out = normalized(&palette, stamp, yaml)?;
    write_output(output, &out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilefill::{SlotDefaults, import_json, import_yaml};

    #[test]
    fn normalized_output_reimports_unchanged() {
        let palette = Palette::new(4);
        let stamp = "2026-10-16T00:00:00Z".to_string();

        let json = normalized(&palette, stamp.clone(), false).unwrap();
        assert!(json.contains("\"exportedAt\": \"2026-10-16T00:00:00Z\""));
        assert_eq!(import_json(&json, &SlotDefaults::default()).unwrap(), palette);

        let yaml = normalized(&palette, stamp, true).unwrap();
        assert_eq!(import_yaml(&yaml, &SlotDefaults::default()).unwrap(), palette);
    }
}
