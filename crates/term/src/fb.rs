//! Framebuffer of styled terminal cells.

use crate::types::Rgb;

/// Foreground and background of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self { fg, bg }
    }

    pub const fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        CellStyle::default().into_cell(' ')
    }
}

/// `width x height` terminal cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change the size, keeping the allocation when it is large enough.
    ///
    /// Cell contents are unspecified afterwards; callers clear or repaint.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Write one cell; out-of-bounds writes are dropped.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Write `s` left to right from (`x`, `y`), clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        for (dx, ch) in s.chars().enumerate() {
            let Ok(dx) = u16::try_from(dx) else { break };
            let Some(cx) = x.checked_add(dx).filter(|&cx| cx < self.width) else {
                break;
            };
            self.set(cx, y, style.into_cell(ch));
        }
    }

    /// Copy all of `src` with its top-left corner at (`x`, `y`), clipped to
    /// this buffer.
    pub fn blit(&mut self, src: &FrameBuffer, x: u16, y: u16) {
        let w = src.width.min(self.width.saturating_sub(x));
        let h = src.height.min(self.height.saturating_sub(y));
        for sy in 0..h {
            let from = sy as usize * src.width as usize;
            let to = (y + sy) as usize * self.width as usize + x as usize;
            self.cells[to..to + w as usize].copy_from_slice(&src.cells[from..from + w as usize]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(ch: char) -> Cell {
        CellStyle::default().into_cell(ch)
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.set(3, 0, mark('x'));
        fb.set(0, 2, mark('x'));
        assert!(fb.cells().iter().all(|c| c.ch == ' '));
        assert_eq!(fb.get(3, 0), None);
    }

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "abc", CellStyle::default());
        let row: String = fb.cells().iter().map(|c| c.ch).collect();
        assert_eq!(row, "  ab");
    }

    #[test]
    fn blit_copies_and_clips() {
        let mut src = FrameBuffer::new(3, 2);
        src.clear(mark('#'));
        let mut dst = FrameBuffer::new(4, 3);
        dst.blit(&src, 2, 2);

        let rows: Vec<String> = (0..3)
            .map(|y| (0..4).map(|x| dst.get(x, y).unwrap().ch).collect())
            .collect();
        assert_eq!(rows, ["    ", "    ", "  ##"]);
    }

    #[test]
    fn resize_keeps_capacity() {
        let mut fb = FrameBuffer::new(10, 10);
        let cap = fb.cells.capacity();
        fb.resize(5, 4);
        assert_eq!(fb.cells().len(), 20);
        assert_eq!(fb.cells.capacity(), cap);
    }
}
