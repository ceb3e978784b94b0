//! tilefill - render chart palette pattern fills
//!
//! Usage:
//!   tilefill patterns                   List pattern types and parameter ranges
//!   tilefill sheet <palette> -o out.svg Swatch sheet (optionally PNG)
//!   tilefill css <palette>              CSS background per slot
//!   tilefill defs <palette>             SVG <defs> block for a chart
//!   tilefill normalize <palette>        Migrate and re-export canonically
//!   tilefill preview <palette>          HTML page comparing CSS and SVG swatches

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

mod cli;

use cli::{TrackArg, cmd_css, cmd_defs, cmd_normalize, cmd_patterns, cmd_preview, cmd_sheet};

/// tilefill - tileable pattern fills for chart palettes
#[derive(Parser)]
#[command(name = "tilefill")]
#[command(version, about)]
struct Cli {
    /// Increase log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List pattern types, dot shapes and parameter ranges
    Patterns,

    /// Render a swatch sheet with one column per slot
    Sheet {
        /// Palette file (.json, .yaml/.yml, or - for stdin)
        palette: PathBuf,

        /// Output SVG file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also render a PNG
        #[arg(long)]
        png: Option<PathBuf>,

        /// PNG scale factor
        #[arg(long, default_value_t = 2.0)]
        png_scale: f32,

        /// Render every slot from this track instead of its active one
        #[arg(long, value_enum)]
        track: Option<TrackArg>,
    },

    /// Print CSS background declarations for each slot
    Css {
        palette: PathBuf,

        /// Emit structured layers as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the <defs> block registering every pattern in use
    Defs { palette: PathBuf },

    /// Migrate a palette and write it back in canonical form
    Normalize {
        palette: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write YAML instead of JSON
        #[arg(long)]
        yaml: bool,
    },

    /// Write an HTML page pairing CSS swatches with the SVG sheet
    Preview {
        palette: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        });
    }
    builder.init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Patterns => cmd_patterns(),
        Commands::Sheet { palette, output, png, png_scale, track } => {
            cmd_sheet(&palette, output.as_deref(), png.as_deref(), png_scale, track)
        }
        Commands::Css { palette, json } => cmd_css(&palette, json),
        Commands::Defs { palette } => cmd_defs(&palette),
        Commands::Normalize { palette, output, yaml } => {
            cmd_normalize(&palette, output.as_deref(), yaml)
        }
        Commands::Preview { palette, output } => cmd_preview(&palette, output.as_deref()),
    }
}
