//! LcdView: paints an LCD grid into a terminal framebuffer.
//!
//! This module is pure (no I/O). It implements [`Painter`] so a label can
//! drive it directly; the resulting [`FrameBuffer`] is then composed onto the
//! screen by the caller.
//!
//! # Geometry
//!
//! Terminal cells are roughly twice as tall as they are wide, so one LCD pixel
//! is two columns by one row. Spacing from the layout maps onto the terminal
//! like this:
//!
//! | Layout value | Horizontal | Vertical |
//! |--------------|------------|----------|
//! | dot stroke (`dot_spacing / 2`) | columns between pixels | half that in rows |
//! | letter spacing | columns around each character | half that in rows |
//!
//! Everything that is not a pixel shows the background color. The frame is
//! clipped to [`MAX_FRAME_SIDE`] cells per side; pixels outside it are not
//! drawn.

use lcd_label_core::{GridLayout, Painter};

use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::Rgb;

/// Pixel glyph, drawn twice per LCD pixel.
const PIXEL: char = '█';

/// Terminal rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Largest frame side in terminal cells. Pixels beyond it are clipped.
pub const MAX_FRAME_SIDE: u16 = 1024;

/// Terminal-space pitch derived from a [`GridLayout`].
///
/// Widened to `u64` so every layout a `DisplayConfig` accepts fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Metrics {
    gap_x: u64,
    gap_y: u64,
    border_x: u64,
    border_y: u64,
    cell_w: u64,
    cell_h: u64,
}

impl Metrics {
    const PIXEL_W: u64 = 2;

    fn new(layout: &GridLayout) -> Self {
        let gap_x = u64::from(layout.dot_stroke);
        let gap_y = gap_x / 2;
        let cols = layout.dims.cell_width as u64;
        let rows = layout.dims.cell_height as u64;
        Self {
            gap_x,
            gap_y,
            border_x: u64::from(layout.letter_spacing),
            border_y: u64::from(layout.letter_spacing / 2),
            cell_w: cols * Self::PIXEL_W + cols.saturating_sub(1) * gap_x,
            cell_h: rows + rows.saturating_sub(1) * gap_y,
        }
    }

    fn pitch_x(&self) -> u64 {
        self.cell_w + 2 * self.border_x
    }

    fn pitch_y(&self) -> u64 {
        self.cell_h + 2 * self.border_y
    }
}

fn clip_side(cells: u64) -> u16 {
    u16::try_from(cells.min(u64::from(MAX_FRAME_SIDE))).unwrap_or(MAX_FRAME_SIDE)
}

/// LCD painter backed by a framebuffer sized to fit the grid exactly.
#[derive(Debug, Clone)]
pub struct LcdView {
    background: Rgb,
    metrics: Option<Metrics>,
    fb: FrameBuffer,
}

impl LcdView {
    pub fn new(background: Rgb) -> Self {
        Self {
            background,
            metrics: None,
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    /// The painted LCD.
    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Size of the painted LCD in terminal cells.
    pub fn size(&self) -> Viewport {
        Viewport::new(self.fb.width(), self.fb.height())
    }

    /// Top-left terminal cell of an LCD pixel, relative to [`frame`](Self::frame).
    ///
    /// `None` before the first rebuild and for pixels whose position does not
    /// fit a terminal coordinate.
    pub fn pixel_origin(
        &self,
        row: usize,
        col: usize,
        pixel_row: usize,
        pixel_col: usize,
    ) -> Option<(u16, u16)> {
        let m = self.metrics?;
        let x = col as u64 * m.pitch_x()
            + m.border_x
            + pixel_col as u64 * (Metrics::PIXEL_W + m.gap_x);
        let y = row as u64 * m.pitch_y() + m.border_y + pixel_row as u64 * (1 + m.gap_y);
        Some((u16::try_from(x).ok()?, u16::try_from(y).ok()?))
    }

    /// Top-left corner that centres the LCD inside `viewport`.
    pub fn centred_in(&self, viewport: Viewport) -> (u16, u16) {
        (
            viewport.width.saturating_sub(self.fb.width()) / 2,
            viewport.height.saturating_sub(self.fb.height()) / 2,
        )
    }

    fn background_cell(&self) -> Cell {
        CellStyle::new(self.background, self.background).into_cell(' ')
    }
}

impl Painter<Rgb> for LcdView {
    fn rebuild_grid(&mut self, layout: &GridLayout) {
        let m = Metrics::new(layout);
        let width = clip_side((layout.dims.cols as u64).saturating_mul(m.pitch_x()));
        let height = clip_side((layout.dims.rows as u64).saturating_mul(m.pitch_y()));
        self.metrics = Some(m);
        self.fb.resize(width, height);
        self.fb.clear(self.background_cell());
    }

    #[inline]
    fn paint_cell(
        &mut self,
        row: usize,
        col: usize,
        pixel_row: usize,
        pixel_col: usize,
        color: &Rgb,
    ) {
        let Some((x, y)) = self.pixel_origin(row, col, pixel_row, pixel_col) else {
            return;
        };
        let cell = CellStyle::new(*color, self.background).into_cell(PIXEL);
        self.fb.set(x, y, cell);
        self.fb.set(x.saturating_add(1), y, cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lcd_label_core::GridDims;

    fn layout(dot_stroke: u16, letter_spacing: u16) -> GridLayout {
        GridLayout {
            dims: GridDims {
                rows: 2,
                cols: 3,
                cell_height: 7,
                cell_width: 5,
            },
            letter_spacing,
            dot_stroke,
        }
    }

    #[test]
    fn tight_layout_packs_pixels() {
        let mut view = LcdView::new(Rgb::new(0, 0, 0));
        view.rebuild_grid(&layout(0, 0));
        assert_eq!(view.size(), Viewport::new(3 * 10, 2 * 7));
        assert_eq!(view.pixel_origin(0, 1, 0, 0), Some((10, 0)));
        assert_eq!(view.pixel_origin(1, 0, 6, 4), Some((8, 13)));
    }

    #[test]
    fn spacing_adds_gaps_and_borders() {
        let mut view = LcdView::new(Rgb::new(0, 0, 0));
        view.rebuild_grid(&layout(2, 3));
        // cell: 5*2 + 4*2 = 18 cols, 7 + 6*1 = 13 rows
        // pitch: 18 + 6 = 24 cols, 13 + 2 = 15 rows
        assert_eq!(view.size(), Viewport::new(72, 30));
        assert_eq!(view.pixel_origin(0, 0, 0, 0), Some((3, 1)));
        assert_eq!(view.pixel_origin(0, 0, 1, 1), Some((7, 3)));
        assert_eq!(view.pixel_origin(1, 2, 0, 0), Some((51, 16)));
    }

    #[test]
    fn paint_fills_two_columns() {
        let bg = Rgb::new(1, 2, 3);
        let on = Rgb::new(200, 0, 0);
        let mut view = LcdView::new(bg);
        view.rebuild_grid(&layout(0, 1));
        view.paint_cell(0, 0, 0, 0, &on);

        let (x, y) = view.pixel_origin(0, 0, 0, 0).unwrap();
        for dx in 0..2 {
            let cell = view.frame().get(x + dx, y).unwrap();
            assert_eq!(cell.ch, PIXEL);
            assert_eq!(cell.style.fg, on);
        }
        assert_eq!(view.frame().get(0, 0).unwrap().style.bg, bg);
        assert_eq!(view.frame().get(x + 2, y).unwrap().ch, ' ');
    }

    #[test]
    fn painting_before_rebuild_is_ignored() {
        let mut view = LcdView::new(Rgb::default());
        view.paint_cell(0, 0, 0, 0, &Rgb::new(9, 9, 9));
        assert_eq!(view.size(), Viewport::new(0, 0));
    }

    #[test]
    fn oversized_layout_is_clipped() {
        let mut view = LcdView::new(Rgb::default());
        view.rebuild_grid(&GridLayout {
            dims: GridDims {
                rows: 1,
                cols: 65_535,
                cell_height: 12,
                cell_width: 9,
            },
            letter_spacing: u16::MAX,
            dot_stroke: u16::MAX / 2,
        });
        assert_eq!(view.size(), Viewport::new(MAX_FRAME_SIDE, MAX_FRAME_SIDE));
        assert_eq!(view.pixel_origin(0, 0, 0, 0), Some((u16::MAX, 32_767)));
        assert_eq!(view.pixel_origin(0, 1, 0, 0), None);
        view.paint_cell(0, 65_534, 11, 8, &Rgb::new(1, 1, 1));
    }

    #[test]
    fn centred_in_viewport() {
        let mut view = LcdView::new(Rgb::default());
        view.rebuild_grid(&layout(0, 0));
        assert_eq!(view.centred_in(Viewport::new(80, 24)), (25, 5));
        assert_eq!(view.centred_in(Viewport::new(10, 10)), (0, 0));
    }
}
