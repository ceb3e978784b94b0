//! CLI command implementations.
//!
//! - `patterns` - List pattern types and parameter ranges
//! - `sheet` - Render a palette swatch sheet (SVG, optional PNG)
//! - `css` - Print CSS background approximations
//! - `defs` - Print the SVG `<defs>` block for a chart
//! - `normalize` - Migrate and re-export a palette
//! - `preview` - HTML page comparing CSS and SVG swatches

pub mod common;
pub mod css;
pub mod defs;
pub mod normalize;
pub mod patterns;
pub mod preview;
pub mod sheet;

pub use common::TrackArg;
pub use css::cmd_css;
pub use defs::cmd_defs;
pub use normalize::cmd_normalize;
pub use patterns::cmd_patterns;
pub use preview::cmd_preview;
pub use sheet::cmd_sheet;
