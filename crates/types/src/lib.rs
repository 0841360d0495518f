//! Shared types for the LCD label workspace.
//!
//! This crate holds the vocabulary every other crate speaks: the dot-matrix
//! font styles, the RGB color used by the terminal painter, the error type and
//! the default display geometry. Nothing here renders anything.
//!
//! # Font styles
//!
//! | Style | Cell (rows x cols) | Codes |
//! |-------|--------------------|-------|
//! | `Mat5x7` | 7 x 5 | 0x20..=0x7E |
//! | `Mat5x8` | 8 x 5 | 0x20..=0x7E |
//! | `Mat7x9` | 9 x 7 | 0x20..=0x7E |
//! | `Mat9x12` | 12 x 9 | 0x20..=0x7E |
//! | `Hitachi` | 7 x 5 | 0x20..=0xFF |
//! | `HitachiExtended` | 10 x 5 | 0x20..=0xFF |
//! | `Dos5x7` | 7 x 5 | 0x20..=0x7F |
//!
//! # Defaults
//!
//! - `DEFAULT_LINES`: 1
//! - `DEFAULT_CHARS_PER_LINE`: 16
//! - `DEFAULT_DOT_SPACING`: 0
//! - `DEFAULT_LETTER_SPACING`: 3
//!
//! # Examples
//!
//! ```
//! use lcd_label_types::{DotMatrix, LcdError};
//!
//! let style: DotMatrix = "hitachi2".parse().unwrap();
//! assert_eq!(style, DotMatrix::HitachiExtended);
//!
//! assert_eq!(DotMatrix::try_from(2u8), Ok(DotMatrix::Mat7x9));
//! assert_eq!(DotMatrix::try_from(99u8), Err(LcdError::UnsupportedStyle(99)));
//! ```

mod error;

pub use error::{LcdError, Result};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default number of text lines.
pub const DEFAULT_LINES: u16 = 1;

/// Default number of characters on one line.
pub const DEFAULT_CHARS_PER_LINE: u16 = 16;

/// Default gap between pixel dots.
pub const DEFAULT_DOT_SPACING: u16 = 0;

/// Default border around each character cell.
pub const DEFAULT_LETTER_SPACING: u16 = 3;

/// Code drawn in cells past the end of the text.
///
/// Every style clamps it up to its first code (the space character).
pub const BLANK_CODE: u32 = 0;

/// Tallest cell of any built-in style (9x12).
pub const MAX_CELL_HEIGHT: usize = 12;

/// Built-in dot-matrix font styles.
///
/// The numeric codes (see [`DotMatrix::code`]) follow declaration order and are
/// what the `TryFrom<u8>` conversion accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DotMatrix {
    /// 5 pixels wide, 7 pixels tall.
    #[default]
    #[serde(rename = "5x7")]
    Mat5x7,
    /// 5 pixels wide, 8 pixels tall.
    #[serde(rename = "5x8")]
    Mat5x8,
    /// 7 pixels wide, 9 pixels tall.
    #[serde(rename = "7x9")]
    Mat7x9,
    /// 9 pixels wide, 12 pixels tall.
    #[serde(rename = "9x12")]
    Mat9x12,
    /// HD44780 character ROM, 5x7.
    #[serde(rename = "hitachi")]
    Hitachi,
    /// HD44780 character ROM in 5x10 cells; codes from 194 use the tall glyphs.
    #[serde(rename = "hitachi2", alias = "hitachi-extended")]
    HitachiExtended,
    /// DOS style 5x7.
    #[serde(rename = "dos5x7")]
    Dos5x7,
}

impl DotMatrix {
    /// Every style, in code order.
    pub const ALL: [DotMatrix; 7] = [
        DotMatrix::Mat5x7,
        DotMatrix::Mat5x8,
        DotMatrix::Mat7x9,
        DotMatrix::Mat9x12,
        DotMatrix::Hitachi,
        DotMatrix::HitachiExtended,
        DotMatrix::Dos5x7,
    ];

    /// Numeric style code.
    ///
    /// ```
    /// use lcd_label_types::DotMatrix;
    ///
    /// assert_eq!(DotMatrix::Mat5x7.code(), 0);
    /// assert_eq!(DotMatrix::Dos5x7.code(), 6);
    /// ```
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Position of this style in [`DotMatrix::ALL`].
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical lowercase name, as accepted by `parse`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DotMatrix::Mat5x7 => "5x7",
            DotMatrix::Mat5x8 => "5x8",
            DotMatrix::Mat7x9 => "7x9",
            DotMatrix::Mat9x12 => "9x12",
            DotMatrix::Hitachi => "hitachi",
            DotMatrix::HitachiExtended => "hitachi2",
            DotMatrix::Dos5x7 => "dos5x7",
        }
    }

    /// The style after this one, wrapping around.
    ///
    /// ```
    /// use lcd_label_types::DotMatrix;
    ///
    /// assert_eq!(DotMatrix::Mat5x7.next(), DotMatrix::Mat5x8);
    /// assert_eq!(DotMatrix::Dos5x7.next(), DotMatrix::Mat5x7);
    /// ```
    pub fn next(self) -> Self {
        DotMatrix::ALL[(self.index() + 1) % DotMatrix::ALL.len()]
    }
}

impl TryFrom<u8> for DotMatrix {
    type Error = LcdError;

    fn try_from(code: u8) -> Result<Self> {
        DotMatrix::ALL
            .get(code as usize)
            .copied()
            .ok_or(LcdError::UnsupportedStyle(code as i32))
    }
}

impl TryFrom<i32> for DotMatrix {
    type Error = LcdError;

    fn try_from(code: i32) -> Result<Self> {
        u8::try_from(code)
            .ok()
            .and_then(|c| DotMatrix::ALL.get(c as usize).copied())
            .ok_or(LcdError::UnsupportedStyle(code))
    }
}

impl FromStr for DotMatrix {
    type Err = LcdError;

    /// Parse a style name (case-insensitive).
    ///
    /// Accepts the canonical names plus the `mat` prefixed and long forms:
    /// "5x7" | "mat5x7", ..., "hitachi2" | "hitachi-extended", "dos5x7" | "dos".
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "5x7" | "mat5x7" => Ok(DotMatrix::Mat5x7),
            "5x8" | "mat5x8" => Ok(DotMatrix::Mat5x8),
            "7x9" | "mat7x9" => Ok(DotMatrix::Mat7x9),
            "9x12" | "mat9x12" => Ok(DotMatrix::Mat9x12),
            "hitachi" => Ok(DotMatrix::Hitachi),
            "hitachi2" | "hitachi-extended" | "hitachiextended" => Ok(DotMatrix::HitachiExtended),
            "dos5x7" | "dos" => Ok(DotMatrix::Dos5x7),
            _ => Err(LcdError::UnsupportedStyleName(s.to_string())),
        }
    }
}

impl fmt::Display for DotMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_codes_round_trip_through_try_from() {
        for style in DotMatrix::ALL {
            assert_eq!(DotMatrix::try_from(style.code()), Ok(style));
        }
    }

    #[test]
    fn unknown_style_codes_are_rejected() {
        assert_eq!(DotMatrix::try_from(7u8), Err(LcdError::UnsupportedStyle(7)));
        assert_eq!(DotMatrix::try_from(99i32), Err(LcdError::UnsupportedStyle(99)));
        assert!(DotMatrix::try_from(-1i32).is_err());
    }

    #[test]
    fn style_names_parse_case_insensitively() {
        assert_eq!("MAT9X12".parse::<DotMatrix>(), Ok(DotMatrix::Mat9x12));
        assert_eq!(" Hitachi ".parse::<DotMatrix>(), Ok(DotMatrix::Hitachi));
        assert!(matches!(
            "14seg".parse::<DotMatrix>(),
            Err(LcdError::UnsupportedStyleName(_))
        ));
    }

    #[test]
    fn display_matches_parse() {
        for style in DotMatrix::ALL {
            assert_eq!(style.to_string().parse::<DotMatrix>(), Ok(style));
        }
    }

    #[test]
    fn serde_uses_style_names() {
        let json = serde_json::to_string(&DotMatrix::HitachiExtended).unwrap();
        assert_eq!(json, "\"hitachi2\"");
        let back: DotMatrix = serde_json::from_str("\"hitachi-extended\"").unwrap();
        assert_eq!(back, DotMatrix::HitachiExtended);
    }

    #[test]
    fn next_cycles_through_all_styles() {
        let mut style = DotMatrix::Mat5x7;
        for expected in DotMatrix::ALL.iter().skip(1) {
            style = style.next();
            assert_eq!(style, *expected);
        }
        assert_eq!(style.next(), DotMatrix::Mat5x7);
    }
}
