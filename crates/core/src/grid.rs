//! Character grid: the rendered state of a display.
//!
//! Cells are stored row-major in one contiguous `Vec`; each cell owns a
//! `cell_height x cell_width` slice of resolved colors, also row-major.

/// Dimensions of a grid and of each of its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDims {
    pub rows: usize,
    pub cols: usize,
    pub cell_height: usize,
    pub cell_width: usize,
}

impl GridDims {
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn pixels_per_cell(&self) -> usize {
        self.cell_height * self.cell_width
    }

    /// Total pixel count across every cell.
    pub fn pixel_count(&self) -> usize {
        self.cell_count() * self.pixels_per_cell()
    }
}

/// One character position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell<C> {
    code: u8,
    width: usize,
    pixels: Box<[C]>,
}

impl<C: Clone> Cell<C> {
    fn blank(height: usize, width: usize, fill: &C) -> Self {
        Self {
            code: 0,
            width,
            pixels: vec![fill.clone(); height * width].into_boxed_slice(),
        }
    }
}

impl<C> Cell<C> {
    /// Clamped character code last drawn here. `0` before the first pass.
    pub fn code(&self) -> u8 {
        self.code
    }

    pub fn height(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.pixels.len() / self.width
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Color at (`row`, `col`), if inside the cell.
    pub fn pixel(&self, row: usize, col: usize) -> Option<&C> {
        if col >= self.width {
            return None;
        }
        self.pixels.get(row * self.width + col)
    }

    /// All pixel colors, row-major.
    pub fn pixels(&self) -> &[C] {
        &self.pixels
    }

    pub(crate) fn set_code(&mut self, code: u8) {
        self.code = code;
    }

    #[inline(always)]
    pub(crate) fn set_pixel(&mut self, row: usize, col: usize, color: C) {
        self.pixels[row * self.width + col] = color;
    }
}

/// `rows x cols` cells of resolved pixel colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterGrid<C> {
    dims: GridDims,
    cells: Vec<Cell<C>>,
}

impl<C: Clone> CharacterGrid<C> {
    /// Allocate a grid of empty cells, every pixel set to `fill`.
    pub fn new(dims: GridDims, fill: &C) -> Self {
        let cells = (0..dims.cell_count())
            .map(|_| Cell::blank(dims.cell_height, dims.cell_width, fill))
            .collect();
        Self { dims, cells }
    }
}

impl<C> CharacterGrid<C> {
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell<C>> {
        if row >= self.dims.rows || col >= self.dims.cols {
            return None;
        }
        self.cells.get(row * self.dims.cols + col)
    }

    /// Every cell, row-major.
    pub fn cells(&self) -> &[Cell<C>] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell<C>] {
        &mut self.cells
    }

    /// Cells of one line, left to right.
    pub fn line(&self, row: usize) -> &[Cell<C>] {
        if row >= self.dims.rows {
            return &[];
        }
        let start = row * self.dims.cols;
        &self.cells[start..start + self.dims.cols]
    }

    /// Drawn codes of one line as a string (codes map to Latin-1).
    pub fn line_text(&self, row: usize) -> String {
        self.line(row).iter().map(|c| char::from(c.code)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims() -> GridDims {
        GridDims {
            rows: 2,
            cols: 3,
            cell_height: 7,
            cell_width: 5,
        }
    }

    #[test]
    fn new_grid_is_filled() {
        let grid = CharacterGrid::new(dims(), &9u8);
        assert_eq!(grid.cells().len(), 6);
        for cell in grid.cells() {
            assert_eq!(cell.code(), 0);
            assert_eq!(cell.height(), 7);
            assert_eq!(cell.width(), 5);
            assert!(cell.pixels().iter().all(|&p| p == 9));
        }
    }

    #[test]
    fn cell_lookup_is_row_major() {
        let mut grid = CharacterGrid::new(dims(), &0u8);
        grid.cells_mut()[4].set_code(b'E');
        assert_eq!(grid.cell(1, 1).map(Cell::code), Some(b'E'));
        assert!(grid.cell(2, 0).is_none());
        assert!(grid.cell(0, 3).is_none());
    }

    #[test]
    fn pixel_lookup_bounds() {
        let mut grid = CharacterGrid::new(dims(), &0u8);
        grid.cells_mut()[0].set_pixel(6, 4, 1);
        let cell = grid.cell(0, 0).unwrap();
        assert_eq!(cell.pixel(6, 4), Some(&1));
        assert_eq!(cell.pixel(0, 5), None);
        assert_eq!(cell.pixel(7, 0), None);
    }

    #[test]
    fn line_text_reads_codes() {
        let mut grid = CharacterGrid::new(dims(), &0u8);
        for (cell, code) in grid.cells_mut().iter_mut().zip(*b"ABCDE ") {
            cell.set_code(code);
        }
        assert_eq!(grid.line_text(0), "ABC");
        assert_eq!(grid.line_text(1), "DE ");
        assert_eq!(grid.line_text(2), "");
    }
}
