use lcd_label::core::{DisplayConfig, LcdLabel};
use lcd_label::fonts::glyph;
use lcd_label::term::{
    encode_diff_into, encode_full_into, FrameBuffer, LcdView, Viewport, MAX_FRAME_SIDE,
};
use lcd_label::types::{DotMatrix, Rgb};

const ON: Rgb = Rgb::new(10, 20, 30);
const OFF: Rgb = Rgb::new(100, 110, 120);
const BG: Rgb = Rgb::new(1, 1, 1);

fn label(dot_spacing: i32, letter_spacing: i32) -> LcdLabel<Rgb, LcdView> {
    let config =
        DisplayConfig::from_parts(1, 2, DotMatrix::Mat5x7, dot_spacing, letter_spacing, ON, OFF)
            .unwrap();
    LcdLabel::new(config, LcdView::new(BG))
}

#[test]
fn term_view_draws_glyph_pixels() {
    let mut label = label(0, 0);
    label.set_text("T");
    let view = label.painter();
    let t = glyph(DotMatrix::Mat5x7, 'T' as u32);

    for r in 0..7 {
        for c in 0..5 {
            let (x, y) = view.pixel_origin(0, 0, r, c).unwrap();
            let cell = view.frame().get(x, y).unwrap();
            let expected = if t.is_on(r, c) { ON } else { OFF };
            assert_eq!(cell.style.fg, expected, "pixel ({r}, {c})");
            assert_eq!(view.frame().get(x + 1, y).unwrap(), cell);
        }
    }
}

#[test]
fn term_view_size_follows_spacing() {
    let mut label = label(0, 0);
    assert_eq!(label.painter().size(), Viewport::new(2 * 10, 7));

    label.set_letter_spacing(2).unwrap();
    // 10 + 2*2 columns, 7 + 2*1 rows per character.
    assert_eq!(label.painter().size(), Viewport::new(2 * 14, 9));

    label.set_dot_spacing(2).unwrap();
    // dot stroke 1: 10 + 4 gap columns; half of 1 rounds to no gap rows.
    assert_eq!(label.painter().size(), Viewport::new(2 * 18, 9));
}

#[test]
fn term_view_gaps_show_background() {
    let label = label(4, 1);
    let view = label.painter();
    let (x0, y0) = view.pixel_origin(0, 0, 0, 0).unwrap();
    let (x1, _) = view.pixel_origin(0, 0, 0, 1).unwrap();

    assert_eq!(x1 - x0, 2 + 2);
    assert_eq!(view.frame().get(x0 + 2, y0).unwrap().style.bg, BG);
    assert_eq!(view.frame().get(x0 + 2, y0).unwrap().ch, ' ');
    assert_eq!(view.frame().get(0, 0).unwrap().ch, ' ');
}

#[test]
fn term_view_text_update_touches_only_changed_cells() {
    let mut label = label(0, 0);
    label.set_text("00");
    let before = label.painter().frame().clone();

    label.set_text("01");
    let after = label.painter().frame();

    let left_changed = (0..7u16).any(|y| (0..10u16).any(|x| before.get(x, y) != after.get(x, y)));
    let right_changed = (0..7u16).any(|y| (10..20u16).any(|x| before.get(x, y) != after.get(x, y)));
    assert!(!left_changed);
    assert!(right_changed);

    let mut out = Vec::new();
    encode_diff_into(&before, after, &mut out).unwrap();
    let mut full = Vec::new();
    encode_full_into(after, &mut full).unwrap();
    assert!(!out.is_empty());
    assert!(out.len() < full.len());
}

#[test]
fn term_view_composes_centred_on_screen() {
    let label = label(0, 0);
    let view = label.painter();
    let mut screen = FrameBuffer::new(40, 11);
    let (x, y) = view.centred_in(Viewport::new(40, 11));
    assert_eq!((x, y), (10, 2));

    screen.blit(view.frame(), x, y);
    assert_eq!(screen.get(10, 2), view.frame().get(0, 0));
    assert_eq!(screen.get(29, 8), view.frame().get(19, 6));
}

#[test]
fn term_view_clips_very_wide_labels() {
    let config = DisplayConfig::from_parts(1, 5000, DotMatrix::Mat5x7, 0, 3, ON, OFF).unwrap();
    let mut label = LcdLabel::new(config, LcdView::new(BG));
    label.set_text("wide");

    let view = label.painter();
    // 5000 cells of 10 + 2*3 columns, 7 + 2*1 rows.
    assert_eq!(view.size(), Viewport::new(MAX_FRAME_SIDE, 9));
    let (x, y) = view.pixel_origin(0, 0, 0, 0).unwrap();
    assert_eq!((x, y), (3, 1));
    let w = glyph(DotMatrix::Mat5x7, 'w' as u32);
    let expected = if w.is_on(0, 0) { ON } else { OFF };
    assert_eq!(view.frame().get(x, y).unwrap().style.fg, expected);
    // Character 4096 starts at column 65536, past any terminal coordinate.
    assert_eq!(view.pixel_origin(0, 4095, 0, 0), Some((65_523, 1)));
    assert_eq!(view.pixel_origin(0, 4096, 0, 0), None);
}

#[test]
fn term_view_clips_huge_dot_spacing() {
    let config = DisplayConfig::from_parts(1, 1, DotMatrix::Mat5x7, 40_000, 0, ON, OFF).unwrap();
    let mut label = LcdLabel::new(config, LcdView::new(BG));
    label.set_text("8");

    let view = label.painter();
    assert_eq!(view.size(), Viewport::new(MAX_FRAME_SIDE, MAX_FRAME_SIDE));
    // Stroke 20000: pixels sit 20002 columns and 10001 rows apart.
    assert_eq!(view.pixel_origin(0, 0, 0, 1), Some((20_002, 0)));
    assert_eq!(view.pixel_origin(0, 0, 0, 4), None);
    assert_eq!(view.pixel_origin(0, 0, 6, 0), Some((0, 60_006)));

    let eight = glyph(DotMatrix::Mat5x7, '8' as u32);
    let expected = if eight.is_on(0, 0) { ON } else { OFF };
    assert_eq!(view.frame().get(0, 0).unwrap().style.fg, expected);
    assert_eq!(view.frame().get(2, 0).unwrap().ch, ' ');
}
