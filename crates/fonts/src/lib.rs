//! Built-in dot-matrix font tables.
//!
//! Every style is backed by a compiled-in bitmap table: one `u16` per glyph row,
//! with the leftmost pixel in the most significant of the low `cell_width`
//! bits. Tables are immutable `static` data shared by every renderer.
//!
//! Lookups never fail on a character code. Codes below a style's first code
//! snap to the first code (the space character, an all-off glyph) and codes
//! above the last code snap to the last code.
//!
//! # Hitachi extended cells
//!
//! [`DotMatrix::HitachiExtended`] uses 10-row cells. Codes up to 193 are drawn
//! from the plain 7-row Hitachi table in the top seven rows, with the bottom
//! rows left off. Codes from 194 upward come from the 10-row table, which is
//! where the descender letters live.
//!
//! # Example
//!
//! ```
//! use lcd_label_fonts::{font_table, glyph};
//! use lcd_label_types::DotMatrix;
//!
//! let table = font_table(DotMatrix::Mat5x7);
//! assert_eq!(table.interval(), (32, 126));
//! assert_eq!(table.cell_size(), (7, 5));
//!
//! let a = glyph(DotMatrix::Mat5x7, 'A' as u32);
//! assert!(a.is_on(4, 0));
//! assert!(!a.is_on(0, 0));
//! ```

mod data;
pub mod table;

pub use lcd_label_types as types;

pub use table::{FontTable, Glyph, HITACHI_EXTENDED_FIRST_TALL};

use lcd_label_types::DotMatrix;

/// Table for `style`.
#[inline]
pub fn font_table(style: DotMatrix) -> &'static FontTable {
    &table::TABLES[style.index()]
}

/// Inclusive supported code interval `(first, last)` for `style`.
pub fn resolve_interval(style: DotMatrix) -> (u8, u8) {
    font_table(style).interval()
}

/// Cell size `(height, width)` for `style`.
pub fn resolve_cell_size(style: DotMatrix) -> (usize, usize) {
    font_table(style).cell_size()
}

/// Clamp `code` into the interval of `style`.
pub fn clamp_code(style: DotMatrix, code: u32) -> u8 {
    font_table(style).clamp(code)
}

/// Glyph for `code` under `style`, after clamping.
pub fn glyph(style: DotMatrix, code: u32) -> Glyph {
    font_table(style).glyph(code)
}
