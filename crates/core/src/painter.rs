//! The painting collaborator.
//!
//! A render pass drives a [`Painter`] in a fixed order:
//!
//! 1. on rebuild only, one [`Painter::rebuild_grid`] call describing the new
//!    layout;
//! 2. one [`Painter::paint_cell`] call per pixel, ordered by
//!    (row, col, pixel row, pixel col).
//!
//! Both rebuild and update passes paint every pixel, so a painter can treat
//! each call as authoritative without tracking what changed.

use crate::config::DisplayConfig;
use crate::grid::GridDims;

/// Layout handed to a painter when the grid is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub dims: GridDims,
    /// Border thickness around each character cell.
    pub letter_spacing: u16,
    /// Stroke thickness between adjacent pixels (half the dot spacing).
    pub dot_stroke: u16,
}

impl GridLayout {
    pub fn from_config<C>(config: &DisplayConfig<C>) -> Self {
        Self {
            dims: config.dims(),
            letter_spacing: config.letter_spacing(),
            dot_stroke: config.dot_spacing() / 2,
        }
    }
}

/// Receives render output.
pub trait Painter<C> {
    /// The grid was recreated; discard every previously built container.
    fn rebuild_grid(&mut self, layout: &GridLayout);

    /// Pixel (`pixel_row`, `pixel_col`) of the cell at (`row`, `col`) now
    /// shows `color`.
    fn paint_cell(&mut self, row: usize, col: usize, pixel_row: usize, pixel_col: usize, color: &C);
}

/// Headless rendering.
impl<C> Painter<C> for () {
    fn rebuild_grid(&mut self, _layout: &GridLayout) {}

    #[inline(always)]
    fn paint_cell(&mut self, _row: usize, _col: usize, _pixel_row: usize, _pixel_col: usize, _color: &C) {}
}

impl<C, P: Painter<C> + ?Sized> Painter<C> for &mut P {
    fn rebuild_grid(&mut self, layout: &GridLayout) {
        (**self).rebuild_grid(layout);
    }

    #[inline]
    fn paint_cell(&mut self, row: usize, col: usize, pixel_row: usize, pixel_col: usize, color: &C) {
        (**self).paint_cell(row, col, pixel_row, pixel_col, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DotMatrix;

    #[test]
    fn layout_halves_dot_spacing() {
        let mut config = DisplayConfig::default();
        config.set_dot_spacing(5).unwrap();
        config.set_letter_spacing(2).unwrap();
        config.set_style(DotMatrix::Mat7x9);

        let layout = GridLayout::from_config(&config);
        assert_eq!(layout.dot_stroke, 2);
        assert_eq!(layout.letter_spacing, 2);
        assert_eq!(layout.dims.cell_height, 9);
        assert_eq!(layout.dims.cell_width, 7);
    }
}
