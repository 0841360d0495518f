//! Render engine: text plus configuration in, painted grid out.
//!
//! A pass is either a **rebuild**, which allocates a fresh grid and tells the
//! painter to lay out its containers again, or an **update**, which repaints
//! the cells of the existing grid in place. Update passes do not allocate.
//!
//! Text is laid out as one continuous stream across the grid: character `n`
//! (zero based) lands in cell `n` in row-major order, so a line that is
//! shorter than `chars_per_line` does not end early and the remaining text
//! carries on into the next row. Cells past the end of the text show the
//! blank code.
//!
//! ```
//! use lcd_label_core::{render, DisplayConfig};
//!
//! let mut config = DisplayConfig::default();
//! config.set_lines(2).unwrap();
//! config.set_chars_per_line(3).unwrap();
//!
//! let grid = render(&config, "ABCDE", None);
//! assert_eq!(grid.line_text(0), "ABC");
//! assert_eq!(grid.line_text(1), "DE ");
//! ```

use log::{debug, trace};

use crate::config::DisplayConfig;
use crate::grid::CharacterGrid;
use crate::painter::{GridLayout, Painter};
use crate::types::BLANK_CODE;

/// What the caller asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderRequest {
    /// Repaint in place when the existing grid still fits.
    #[default]
    Update,
    /// Rebuild unconditionally (the layout changed).
    Rebuild,
}

/// What a pass actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPass {
    Rebuild,
    Update,
}

/// Decide between rebuild and update.
///
/// A rebuild is needed when there is no grid yet, when its dimensions differ
/// from the ones `config` implies, or when one was requested.
pub fn plan_pass<C>(
    config: &DisplayConfig<C>,
    grid: Option<&CharacterGrid<C>>,
    request: RenderRequest,
) -> RenderPass {
    match grid {
        Some(grid) if request == RenderRequest::Update && grid.dims() == config.dims() => {
            RenderPass::Update
        }
        _ => RenderPass::Rebuild,
    }
}

/// Allocate an empty grid for `config` and announce it to the painter.
pub fn build_grid<C: Clone, P: Painter<C> + ?Sized>(
    config: &DisplayConfig<C>,
    painter: &mut P,
) -> CharacterGrid<C> {
    let layout = GridLayout::from_config(config);
    debug!(
        "lcd rebuild: {}x{} cells of {}x{} ({}), letter spacing {}, dot stroke {}",
        layout.dims.rows,
        layout.dims.cols,
        layout.dims.cell_height,
        layout.dims.cell_width,
        config.style(),
        layout.letter_spacing,
        layout.dot_stroke,
    );
    let grid = CharacterGrid::new(layout.dims, config.off_color());
    painter.rebuild_grid(&layout);
    grid
}

/// Resolve `text` into the cells of `grid` and paint every pixel.
///
/// `grid` must have the dimensions `config` implies (see [`plan_pass`]).
pub fn repaint<C: Clone, P: Painter<C> + ?Sized>(
    config: &DisplayConfig<C>,
    text: &str,
    grid: &mut CharacterGrid<C>,
    painter: &mut P,
) {
    let table = lcd_label_fonts::font_table(config.style());
    let dims = grid.dims();
    let on = config.on_color();
    let off = config.off_color();
    let mut chars = text.chars();

    for (index, cell) in grid.cells_mut().iter_mut().enumerate() {
        let (row, col) = (index / dims.cols, index % dims.cols);
        let code = table.clamp(chars.next().map_or(BLANK_CODE, u32::from));
        let glyph = table.glyph(code as u32);
        cell.set_code(code);

        for pixel_row in 0..dims.cell_height {
            for pixel_col in 0..dims.cell_width {
                let color = if glyph.is_on(pixel_row, pixel_col) {
                    on
                } else {
                    off
                };
                cell.set_pixel(pixel_row, pixel_col, color.clone());
                painter.paint_cell(row, col, pixel_row, pixel_col, color);
            }
        }
    }
}

/// Render `text` into `slot`, rebuilding or updating as needed.
///
/// On rebuild the previous grid (if any) is dropped and replaced.
pub fn render_into<C: Clone, P: Painter<C> + ?Sized>(
    config: &DisplayConfig<C>,
    text: &str,
    slot: &mut Option<CharacterGrid<C>>,
    request: RenderRequest,
    painter: &mut P,
) -> RenderPass {
    let pass = plan_pass(config, slot.as_ref(), request);
    if pass == RenderPass::Rebuild {
        *slot = Some(build_grid(config, painter));
    } else {
        trace!("lcd update: {text:?}");
    }
    if let Some(grid) = slot {
        repaint(config, text, grid, painter);
    }
    pass
}

/// Render `text` without a painter, reusing `previous` when it still fits.
pub fn render<C: Clone>(
    config: &DisplayConfig<C>,
    text: &str,
    previous: Option<CharacterGrid<C>>,
) -> CharacterGrid<C> {
    let mut grid = match previous {
        Some(grid) if grid.dims() == config.dims() => grid,
        _ => build_grid(config, &mut ()),
    };
    repaint(config, text, &mut grid, &mut ());
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DotMatrix, Rgb};

    fn config(lines: i32, chars: i32) -> DisplayConfig<bool> {
        DisplayConfig::from_parts(lines, chars, DotMatrix::Mat5x7, 0, 0, true, false).unwrap()
    }

    #[test]
    fn first_render_rebuilds() {
        let config = config(1, 4);
        let mut slot = None;
        let pass = render_into(&config, "x", &mut slot, RenderRequest::Update, &mut ());
        assert_eq!(pass, RenderPass::Rebuild);
        assert!(slot.is_some());
    }

    #[test]
    fn same_dims_update_in_place() {
        let config = config(1, 4);
        let mut slot = None;
        render_into(&config, "ab", &mut slot, RenderRequest::Update, &mut ());
        let before = slot.as_ref().unwrap().cells().as_ptr();

        let pass = render_into(&config, "cd", &mut slot, RenderRequest::Update, &mut ());
        assert_eq!(pass, RenderPass::Update);
        assert_eq!(slot.as_ref().unwrap().cells().as_ptr(), before);
        assert_eq!(slot.as_ref().unwrap().line_text(0), "cd  ");
    }

    #[test]
    fn dims_change_forces_rebuild() {
        let mut config = config(1, 4);
        let mut slot = None;
        render_into(&config, "ab", &mut slot, RenderRequest::Update, &mut ());

        config.set_chars_per_line(6).unwrap();
        let pass = render_into(&config, "ab", &mut slot, RenderRequest::Update, &mut ());
        assert_eq!(pass, RenderPass::Rebuild);
        assert_eq!(slot.as_ref().unwrap().cols(), 6);
    }

    #[test]
    fn requested_rebuild_is_honoured() {
        let config = config(1, 4);
        let mut slot = None;
        render_into(&config, "ab", &mut slot, RenderRequest::Update, &mut ());
        let pass = render_into(&config, "ab", &mut slot, RenderRequest::Rebuild, &mut ());
        assert_eq!(pass, RenderPass::Rebuild);
    }

    #[test]
    fn pixels_resolve_to_on_and_off() {
        let config = config(1, 1);
        let grid = render(&config, "A", None);
        let cell = grid.cell(0, 0).unwrap();
        // .###.
        assert_eq!(cell.pixels()[..5], [false, true, true, true, false]);
        // #####
        assert!(cell.pixels()[20..25].iter().all(|&p| p));
    }

    #[test]
    fn codes_outside_interval_are_clamped() {
        let config = config(1, 3);
        let grid = render(&config, "\u{7}~\u{263a}", None);
        let codes: Vec<u8> = grid.cells().iter().map(|c| c.code()).collect();
        assert_eq!(codes, [32, 126, 126]);
    }

    #[test]
    fn render_reuses_a_fitting_grid() {
        let config = DisplayConfig::<Rgb>::default();
        let grid = render(&config, "one", None);
        let ptr = grid.cells().as_ptr();
        let grid = render(&config, "two", Some(grid));
        assert_eq!(grid.cells().as_ptr(), ptr);
        assert!(grid.line_text(0).starts_with("two "));
    }
}
