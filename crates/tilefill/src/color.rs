//! Hex colour handling for slot colours.
//!
//! Slots only ever store opaque RGB colours in canonical `#RRGGBB` form.
//! Parsing accepts the usual shorthand and sloppy spellings found in
//! hand-edited palette files; anything else is rejected so the caller can
//! substitute a default.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for strict colour parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("empty color string")]
    Empty,
    #[error("invalid color length {0}, expected 3 or 6 hex digits")]
    InvalidLength(usize),
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// An opaque sRGB colour, always printed as upper-case `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const WHITE: HexColor = HexColor::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: HexColor = HexColor::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB` (any case, surrounding
    /// whitespace ignored).
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.is_empty() {
            return Err(ColorError::Empty);
        }
        if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(c));
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidLength(hex.len()));
        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB, each digit doubled
                let digits: Vec<u8> = hex
                    .chars()
                    .map(|c| c.to_digit(16).unwrap_or(0) as u8 * 17)
                    .collect();
                Ok(Self::rgb(digits[0], digits[1], digits[2]))
            }
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            n => Err(ColorError::InvalidLength(n)),
        }
    }

    /// Parse, falling back to `default` on any error.
    pub fn parse_or(input: &str, default: HexColor) -> Self {
        match Self::parse(input) {
            Ok(color) => color,
            Err(err) => {
                log::debug!("color {input:?} rejected ({err}), using {default}");
                default
            }
        }
    }

    /// CSS `rgba()` with the alpha rounded to three decimals.
    pub fn rgba(&self, alpha: f64) -> String {
        let alpha = (alpha.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }

    /// Channels as `(r, g, b)`.
    pub fn channels(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl Default for HexColor {
    fn default() -> Self {
        HexColor::BLACK
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        HexColor::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}
