//! Raw glyph bitmaps, one `u16` per row, glyphs stored back to back in code
//! order.

mod dos5x7;
mod hitachi;
mod hitachi_ext;
mod mat5x7;
mod mat5x8;
mod mat7x9;
mod mat9x12;

pub(crate) use dos5x7::DOS5X7;
pub(crate) use hitachi::HITACHI;
pub(crate) use hitachi_ext::HITACHI_EXT;
pub(crate) use mat5x7::MAT5X7;
pub(crate) use mat5x8::MAT5X8;
pub(crate) use mat7x9::MAT7X9;
pub(crate) use mat9x12::MAT9X12;
