//! Errors for palette import and export.
//!
//! Pattern computation itself never fails; only the document boundary can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("document version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u64, supported: u32 },

    #[error("palette must have between {min} and {max} slots, found {found}")]
    SlotCount { found: usize, min: usize, max: usize },

    #[error("invalid palette document: {0}")]
    InvalidDocument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
