//! # tilefill
//!
//! Tileable pattern fills for chart palettes.
//!
//! A palette is a list of slots; each slot is either a flat colour or a
//! parametric pattern (lines, crosshatch, dots). From one slot description
//! this crate produces:
//!
//! - an SVG `<pattern>` definition that charts reference by id
//! - a CSS background approximation for swatches and previews
//! - the fill string a chart element should use
//!
//! Imports go through [`migrate`] and lenient [`ingest`]ion, so anything
//! past the boundary is already canonical.
//!
//! ## Rust Lesson #12: Sum Types at the Boundary
//!
//! A JSON slot is a bag of optional fields. Inside the crate it is a
//! [`SlotFill`] enum: a solid slot has no spacing, and a pattern slot
//! has no single colour. The compiler then rejects code that reads a
//! field the variant does not have, which a bag of optionals cannot do.

pub mod color;
pub mod css;
pub mod definition;
pub mod document;
pub mod error;
pub mod fill;
pub mod geometry;
pub mod ingest;
pub mod migrate;
pub mod palette;
pub mod params;
pub mod raster;
pub mod slot;
pub mod svg;
pub mod tile;

// Re-export common types at crate root for convenience.
pub use color::{ColorError, HexColor};
pub use css::{approximate, approximate_params, CssBackground, CssLayer};
pub use definition::{build, pattern_id, FillRule, PatternDefinition};
pub use document::{export_json, export_yaml, import_json, import_value, import_yaml, PaletteDocument};
pub use error::{Error, Result};
pub use fill::{resolve, FillReference};
pub use ingest::{ingest_slot, ingest_value, SlotDefaults};
pub use migrate::{migrate, SCHEMA_VERSION};
pub use palette::{EditorContext, Palette, PaletteSlot, Track};
pub use params::PatternParams;
pub use slot::{DotShape, PatternFill, PatternType, SlotDescription, SlotFill, SlotKind};
pub use tile::{ink_coverage, render, TileContent};
