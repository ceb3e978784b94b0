//! Print the `<defs>` block a chart needs before referencing slot fills.

use std::path::Path;

use tilefill::svg::defs;

use super::common::{load_palette, write_output};

/// Execute the defs command.
pub fn cmd_defs(palette_path: &Path) -> anyhow::Result<()> {
    let palette = load_palette(palette_path)?;
    let definitions = palette.pattern_definitions();
    log::info!("{} of {} slots use patterns", definitions.len(), palette.len());
    write_output(None, &defs(&definitions))
}
