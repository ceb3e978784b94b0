//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;

use tilefill::{Palette, SlotDefaults, Track, import_json, import_yaml};

/// Palette track selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TrackArg {
    A,
    B,
}

impl From<TrackArg> for Track {
    fn from(track: TrackArg) -> Self {
        match track {
            TrackArg::A => Track::A,
            TrackArg::B => Track::B,
        }
    }
}

/// Input format of a palette file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteFormat {
    Json,
    Yaml,
}

impl PaletteFormat {
    /// YAML for `.yaml`/`.yml`, JSON for everything else.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                PaletteFormat::Yaml
            }
            _ => PaletteFormat::Json,
        }
    }

    /// Guess from content when there is no file name to go by.
    pub fn sniff(content: &str) -> Self {
        match content.trim_start().chars().next() {
            Some('{') | Some('[') => PaletteFormat::Json,
            _ => PaletteFormat::Yaml,
        }
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Parse palette text in the given format.
pub fn parse_palette(content: &str, format: PaletteFormat) -> tilefill::Result<Palette> {
    let defaults = SlotDefaults::default();
    match format {
        PaletteFormat::Json => import_json(content, &defaults),
        PaletteFormat::Yaml => import_yaml(content, &defaults),
    }
}

/// Load a palette from a file, or stdin for `-`.
pub fn load_palette(path: &Path) -> anyhow::Result<Palette> {
    let (content, format) = if is_stdin(path) {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("failed to read palette from stdin")?;
        let format = PaletteFormat::sniff(&content);
        (content, format)
    } else {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        (content, PaletteFormat::from_path(path))
    };

    let palette = parse_palette(&content, format)
        .with_context(|| format!("invalid palette {}", path.display()))?;
    log::info!("loaded {} slots from {}", palette.len(), path.display());
    Ok(palette)
}

/// Write to a file, or stdout when no path is given.
pub fn write_output(path: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(PaletteFormat::from_path(Path::new("p.yaml")), PaletteFormat::Yaml);
        assert_eq!(PaletteFormat::from_path(Path::new("p.YML")), PaletteFormat::Yaml);
        assert_eq!(PaletteFormat::from_path(Path::new("p.json")), PaletteFormat::Json);
        assert_eq!(PaletteFormat::from_path(Path::new("palette")), PaletteFormat::Json);
    }

    #[test]
    fn sniffs_stdin_content() {
        assert_eq!(PaletteFormat::sniff("  {\"slots\": []}"), PaletteFormat::Json);
        assert_eq!(PaletteFormat::sniff("[1, 2]"), PaletteFormat::Json);
        assert_eq!(PaletteFormat::sniff("version: 2\nslots: []"), PaletteFormat::Yaml);
    }

    #[test]
    fn parses_yaml_palette() {
        let yaml = "slots:\n  - kind: solid\n    color: '#ff0000'\n  - kind: pattern\n    patternType: dots\n";
        let palette = parse_palette(yaml, PaletteFormat::Yaml).unwrap();
        assert_eq!(palette.len(), 2);
    }
}
