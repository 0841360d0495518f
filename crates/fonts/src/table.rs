//! Font table descriptors and glyph lookup.

use arrayvec::ArrayVec;

use crate::data;
use crate::types::{DotMatrix, MAX_CELL_HEIGHT};

/// First code drawn from the 10-row table in [`DotMatrix::HitachiExtended`].
pub const HITACHI_EXTENDED_FIRST_TALL: u8 = 194;

/// A run of glyph bitmaps starting at `first_code`, `height` rows each.
#[derive(Debug)]
struct Bitmaps {
    first_code: u8,
    height: u8,
    rows: &'static [u16],
}

impl Bitmaps {
    fn glyph_count(&self) -> usize {
        self.rows.len() / self.height as usize
    }

    fn glyph_rows(&self, code: u8) -> &'static [u16] {
        let rows = self.rows;
        let height = self.height as usize;
        let start = (code - self.first_code) as usize * height;
        &rows[start..start + height]
    }
}

/// Immutable description of one built-in style.
#[derive(Debug)]
pub struct FontTable {
    style: DotMatrix,
    first_code: u8,
    last_code: u8,
    cell_height: u8,
    cell_width: u8,
    base: Bitmaps,
    /// Taller glyphs replacing `base` from their first code upward.
    tall: Option<Bitmaps>,
}

impl FontTable {
    pub fn style(&self) -> DotMatrix {
        self.style
    }

    pub fn first_code(&self) -> u8 {
        self.first_code
    }

    pub fn last_code(&self) -> u8 {
        self.last_code
    }

    /// Inclusive code interval `(first, last)`.
    pub fn interval(&self) -> (u8, u8) {
        (self.first_code, self.last_code)
    }

    pub fn cell_height(&self) -> usize {
        self.cell_height as usize
    }

    pub fn cell_width(&self) -> usize {
        self.cell_width as usize
    }

    /// Cell size `(height, width)`.
    ///
    /// For styles with a tall extension this is the tall size, even for codes
    /// drawn from the shorter base table.
    pub fn cell_size(&self) -> (usize, usize) {
        (self.cell_height(), self.cell_width())
    }

    /// Snap `code` into `[first_code, last_code]`.
    ///
    /// ```
    /// use lcd_label_fonts::font_table;
    /// use lcd_label_types::DotMatrix;
    ///
    /// let t = font_table(DotMatrix::Mat5x7);
    /// assert_eq!(t.clamp(0), 32);
    /// assert_eq!(t.clamp('A' as u32), 65);
    /// assert_eq!(t.clamp(0x263A), 126);
    /// ```
    #[inline]
    pub fn clamp(&self, code: u32) -> u8 {
        code.clamp(self.first_code as u32, self.last_code as u32) as u8
    }

    /// Glyph for `code`, clamped into the interval first.
    ///
    /// The returned glyph is always `cell_height` rows tall; rows a shorter
    /// base glyph does not cover are off.
    pub fn glyph(&self, code: u32) -> Glyph {
        let code = self.clamp(code);
        let bitmaps = match &self.tall {
            Some(tall) if code >= tall.first_code => tall,
            _ => &self.base,
        };

        let mut rows = ArrayVec::new();
        rows.extend(bitmaps.glyph_rows(code).iter().copied());
        while rows.len() < self.cell_height() {
            rows.push(0);
        }

        Glyph {
            width: self.cell_width,
            rows,
        }
    }
}

/// Pixel matrix of one character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Glyph {
    width: u8,
    rows: ArrayVec<u16, MAX_CELL_HEIGHT>,
}

impl Glyph {
    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Row bitmaps, leftmost pixel in the highest used bit.
    pub fn rows(&self) -> &[u16] {
        &self.rows
    }

    /// Whether the pixel at (`row`, `col`) is lit. Out of range is off.
    #[inline]
    pub fn is_on(&self, row: usize, col: usize) -> bool {
        if col >= self.width() {
            return false;
        }
        let shift = self.width() - 1 - col;
        self.rows
            .get(row)
            .is_some_and(|bits| (bits >> shift) & 1 == 1)
    }

    /// Number of lit pixels.
    pub fn lit_count(&self) -> u32 {
        self.rows.iter().map(|bits| bits.count_ones()).sum()
    }

    /// Whether no pixel is lit.
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|&bits| bits == 0)
    }
}

pub(crate) static TABLES: [FontTable; 7] = [
    FontTable {
        style: DotMatrix::Mat5x7,
        first_code: 32,
        last_code: 126,
        cell_height: 7,
        cell_width: 5,
        base: Bitmaps {
            first_code: 32,
            height: 7,
            rows: &data::MAT5X7,
        },
        tall: None,
    },
    FontTable {
        style: DotMatrix::Mat5x8,
        first_code: 32,
        last_code: 126,
        cell_height: 8,
        cell_width: 5,
        base: Bitmaps {
            first_code: 32,
            height: 8,
            rows: &data::MAT5X8,
        },
        tall: None,
    },
    FontTable {
        style: DotMatrix::Mat7x9,
        first_code: 32,
        last_code: 126,
        cell_height: 9,
        cell_width: 7,
        base: Bitmaps {
            first_code: 32,
            height: 9,
            rows: &data::MAT7X9,
        },
        tall: None,
    },
    FontTable {
        style: DotMatrix::Mat9x12,
        first_code: 32,
        last_code: 126,
        cell_height: 12,
        cell_width: 9,
        base: Bitmaps {
            first_code: 32,
            height: 12,
            rows: &data::MAT9X12,
        },
        tall: None,
    },
    FontTable {
        style: DotMatrix::Hitachi,
        first_code: 32,
        last_code: 255,
        cell_height: 7,
        cell_width: 5,
        base: Bitmaps {
            first_code: 32,
            height: 7,
            rows: &data::HITACHI,
        },
        tall: None,
    },
    FontTable {
        style: DotMatrix::HitachiExtended,
        first_code: 32,
        last_code: 255,
        cell_height: 10,
        cell_width: 5,
        base: Bitmaps {
            first_code: 32,
            height: 7,
            rows: &data::HITACHI,
        },
        tall: Some(Bitmaps {
            first_code: HITACHI_EXTENDED_FIRST_TALL,
            height: 10,
            rows: &data::HITACHI_EXT,
        }),
    },
    FontTable {
        style: DotMatrix::Dos5x7,
        first_code: 32,
        last_code: 127,
        cell_height: 7,
        cell_width: 5,
        base: Bitmaps {
            first_code: 32,
            height: 7,
            rows: &data::DOS5X7,
        },
        tall: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_indexed_by_style() {
        for style in DotMatrix::ALL {
            assert_eq!(TABLES[style.index()].style(), style);
        }
    }

    #[test]
    fn bitmaps_cover_the_whole_interval() {
        for table in TABLES.iter() {
            let base_last = match &table.tall {
                Some(tall) => {
                    assert_eq!(
                        tall.glyph_count(),
                        (table.last_code - tall.first_code) as usize + 1,
                        "{}",
                        table.style
                    );
                    tall.first_code - 1
                }
                None => table.last_code,
            };
            assert!(
                table.base.glyph_count() >= (base_last - table.first_code) as usize + 1,
                "{}",
                table.style
            );
            assert_eq!(table.base.rows.len() % table.base.height as usize, 0);
        }
    }

    #[test]
    fn rows_fit_the_cell_width() {
        for table in TABLES.iter() {
            let limit = 1u16 << table.cell_width;
            let tall_rows = table.tall.as_ref().map(|t| t.rows).unwrap_or(&[]);
            for &bits in table.base.rows.iter().chain(tall_rows) {
                assert!(bits < limit, "{}: row {bits:#b} too wide", table.style);
            }
        }
    }

    #[test]
    fn space_is_blank_everywhere() {
        for table in TABLES.iter() {
            let g = table.glyph(' ' as u32);
            assert!(g.is_blank(), "{}", table.style);
            assert_eq!(g.height(), table.cell_height());
            assert_eq!(g.width(), table.cell_width());
        }
    }

    #[test]
    fn printable_ascii_letters_are_not_blank() {
        for table in TABLES.iter() {
            for code in ('!' as u32)..=('~' as u32) {
                assert!(
                    !table.glyph(code).is_blank(),
                    "{} code {code:#x}",
                    table.style
                );
            }
        }
    }

    #[test]
    fn glyph_rows_are_left_aligned_by_width() {
        let t = &TABLES[DotMatrix::Mat5x7.index()];
        let i = t.glyph('I' as u32);
        // .###.
        assert!(!i.is_on(0, 0));
        assert!(i.is_on(0, 1));
        assert!(i.is_on(0, 3));
        assert!(!i.is_on(0, 4));
        assert!(!i.is_on(0, 5));
        assert!(!i.is_on(7, 1));
    }

    #[test]
    fn large_matrix_bars_are_one_row_thick() {
        let t = &TABLES[DotMatrix::Mat9x12.index()];
        for code in t.first_code()..=t.last_code() {
            let g = t.glyph(u32::from(code));
            for pair in g.rows().windows(2) {
                let shared = pair[0] & pair[1];
                assert!(
                    shared & (shared >> 1) & (shared >> 2) & (shared >> 3) == 0,
                    "code {code:#x}: {:#011b} over {:#011b}",
                    pair[0],
                    pair[1]
                );
            }
        }
        let hash = t.glyph('#' as u32);
        assert_eq!(hash.rows()[3], 0b111111111);
        assert_eq!(hash.rows()[4], 0b000101000);
        assert_eq!(hash.rows()[5], 0b111111111);
    }

    #[test]
    fn tall_hitachi_glyphs_start_at_194() {
        let t = &TABLES[DotMatrix::HitachiExtended.index()];

        let short = t.glyph(193);
        assert_eq!(short.height(), 10);
        assert_eq!(&short.rows()[..7], t.base.glyph_rows(193));
        assert!(short.rows()[7..].iter().all(|&r| r == 0));

        let tall = t.glyph(194);
        assert_eq!(short.height(), tall.height());
        assert_eq!(tall.rows(), t.tall.as_ref().unwrap().glyph_rows(194));
    }

    #[test]
    fn hitachi_descenders_use_the_bottom_rows() {
        let t = &TABLES[DotMatrix::HitachiExtended.index()];
        // 0xE7 is the descender 'g'.
        let g = t.glyph(0xE7);
        assert!(g.rows()[7..].iter().any(|&r| r != 0));
    }
}
