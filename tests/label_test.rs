//! LcdLabel: setter semantics and the painter protocol.

use lcd_label::core::{DisplayConfig, GridLayout, LcdLabel, Painter, RenderPass};
use lcd_label::types::{DotMatrix, LcdError, Rgb};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Rebuild(GridLayout),
    Paint(usize, usize, usize, usize, Rgb),
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl Recorder {
    fn take(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }
}

impl Painter<Rgb> for Recorder {
    fn rebuild_grid(&mut self, layout: &GridLayout) {
        self.calls.push(Call::Rebuild(*layout));
    }

    fn paint_cell(&mut self, row: usize, col: usize, pixel_row: usize, pixel_col: usize, color: &Rgb) {
        self.calls.push(Call::Paint(row, col, pixel_row, pixel_col, *color));
    }
}

fn small_label() -> LcdLabel<Rgb, Recorder> {
    let config = DisplayConfig::from_parts(
        2,
        3,
        DotMatrix::Mat5x7,
        4,
        1,
        Rgb::new(0, 0, 0),
        Rgb::new(9, 9, 9),
    )
    .unwrap();
    LcdLabel::new(config, Recorder::default())
}

fn paint_positions(calls: &[Call]) -> Vec<(usize, usize, usize, usize)> {
    calls
        .iter()
        .filter_map(|call| match call {
            Call::Paint(r, c, pr, pc, _) => Some((*r, *c, *pr, *pc)),
            Call::Rebuild(_) => None,
        })
        .collect()
}

fn row_major(rows: usize, cols: usize, h: usize, w: usize) -> Vec<(usize, usize, usize, usize)> {
    let mut out = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            for pr in 0..h {
                for pc in 0..w {
                    out.push((r, c, pr, pc));
                }
            }
        }
    }
    out
}

#[test]
fn rebuild_announces_layout_then_paints_everything() {
    let mut label = small_label();
    let calls = label.painter_mut().take();

    match &calls[0] {
        Call::Rebuild(layout) => {
            assert_eq!(layout.dims.rows, 2);
            assert_eq!(layout.dims.cols, 3);
            assert_eq!(layout.dims.cell_height, 7);
            assert_eq!(layout.dims.cell_width, 5);
            assert_eq!(layout.letter_spacing, 1);
            assert_eq!(layout.dot_stroke, 2);
        }
        other => panic!("expected rebuild first, got {other:?}"),
    }
    assert_eq!(
        calls.iter().filter(|c| matches!(c, Call::Rebuild(_))).count(),
        1
    );
    assert_eq!(paint_positions(&calls), row_major(2, 3, 7, 5));
    assert_eq!(paint_positions(&calls).len(), label.grid().dims().pixel_count());
}

#[test]
fn update_repaints_in_the_same_order_without_rebuild() {
    let mut label = small_label();
    label.painter_mut().take();

    assert_eq!(label.set_text("12345"), RenderPass::Update);
    let calls = label.painter_mut().take();
    assert!(calls.iter().all(|c| matches!(c, Call::Paint(..))));
    assert_eq!(calls.len(), label.grid().dims().pixel_count());
    assert_eq!(paint_positions(&calls), row_major(2, 3, 7, 5));
}

#[test]
fn painted_colors_match_the_grid() {
    let mut label = small_label();
    label.set_text("A");
    let calls = label.painter_mut().take();
    let grid = label.grid();

    let update = &calls[calls.len() - 2 * 3 * 35..];
    for call in update {
        if let Call::Paint(r, c, pr, pc, color) = call {
            assert_eq!(grid.cell(*r, *c).unwrap().pixel(*pr, *pc), Some(color));
        }
    }
}

#[test]
fn zero_lines_is_rejected_and_grid_survives() {
    let mut label = small_label();
    label.set_text("keep");
    let before = label.grid().clone();
    label.painter_mut().take();

    assert_eq!(
        label.set_lines(0),
        Err(LcdError::InvalidConfiguration("lines"))
    );
    assert_eq!(label.grid(), &before);
    assert_eq!(label.config().lines(), 2);
    assert_eq!(label.text(), "keep");
    assert!(label.painter().calls.is_empty());
}

#[test]
fn unknown_style_code_is_rejected() {
    let mut label = small_label();
    label.painter_mut().take();

    assert_eq!(label.set_style_code(99), Err(LcdError::UnsupportedStyle(99)));
    assert_eq!(label.set_style_code(-1), Err(LcdError::UnsupportedStyle(-1)));
    assert_eq!(label.config().style(), DotMatrix::Mat5x7);
    assert!(label.painter().calls.is_empty());

    assert_eq!(label.set_style_code(3), Ok(RenderPass::Rebuild));
    assert_eq!(label.grid().dims().cell_width, 9);
}

#[test]
fn style_names_parse_into_setters() {
    let mut label = small_label();
    let style: DotMatrix = "dos5x7".parse().unwrap();
    assert_eq!(label.set_style(style), RenderPass::Rebuild);
    assert!(matches!(
        "vfd".parse::<DotMatrix>(),
        Err(LcdError::UnsupportedStyleName(_))
    ));
}

#[test]
fn spacing_changes_rebuild_with_new_layout() {
    let mut label = small_label();
    label.painter_mut().take();

    assert_eq!(label.set_dot_spacing(7), Ok(RenderPass::Rebuild));
    let calls = label.painter_mut().take();
    assert!(matches!(calls[0], Call::Rebuild(GridLayout { dot_stroke: 3, .. })));

    assert_eq!(
        label.set_dot_spacing(-1),
        Err(LcdError::InvalidConfiguration("dotSpacing"))
    );
    assert_eq!(label.config().dot_spacing(), 7);
}

#[test]
fn text_survives_rebuilds() {
    let mut label = small_label();
    label.set_text("abcdef");
    label.set_chars_per_line(6).unwrap();
    assert_eq!(label.grid().line_text(0), "abcdef");
    assert_eq!(label.grid().line_text(1), "      ");

    let recorder = label.into_painter();
    assert!(!recorder.calls.is_empty());
}
