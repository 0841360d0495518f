use lcd_label::fonts::{
    clamp_code, font_table, glyph, resolve_cell_size, resolve_interval, HITACHI_EXTENDED_FIRST_TALL,
};
use lcd_label::types::DotMatrix;

#[test]
fn intervals_and_cell_sizes() {
    let expected = [
        (DotMatrix::Mat5x7, (32, 126), (7, 5)),
        (DotMatrix::Mat5x8, (32, 126), (8, 5)),
        (DotMatrix::Mat7x9, (32, 126), (9, 7)),
        (DotMatrix::Mat9x12, (32, 126), (12, 9)),
        (DotMatrix::Hitachi, (32, 255), (7, 5)),
        (DotMatrix::HitachiExtended, (32, 255), (10, 5)),
        (DotMatrix::Dos5x7, (32, 127), (7, 5)),
    ];
    for (style, interval, size) in expected {
        assert_eq!(resolve_interval(style), interval, "{style}");
        assert_eq!(resolve_cell_size(style), size, "{style}");
    }
}

#[test]
fn clamping_snaps_to_the_interval() {
    for style in DotMatrix::ALL {
        let (first, last) = resolve_interval(style);
        assert_eq!(clamp_code(style, 0), first);
        assert_eq!(clamp_code(style, u32::MAX), last);
        assert_eq!(clamp_code(style, 'M' as u32), b'M');
    }
}

#[test]
fn glyphs_are_defined_and_stable_for_any_code() {
    for style in DotMatrix::ALL {
        let (h, w) = resolve_cell_size(style);
        for code in (0..300).chain([0x263A, u32::MAX]) {
            let a = glyph(style, code);
            assert_eq!((a.height(), a.width()), (h, w), "{style} {code}");
            assert_eq!(a, glyph(style, clamp_code(style, code) as u32));
        }
    }
}

#[test]
fn blank_sentinel_is_all_off() {
    for style in DotMatrix::ALL {
        assert!(glyph(style, 0).is_blank(), "{style}");
        assert_eq!(glyph(style, 0).lit_count(), 0);
    }
}

#[test]
fn styles_draw_letters_differently() {
    let a5 = glyph(DotMatrix::Mat5x7, 'a' as u32);
    let a7 = glyph(DotMatrix::Mat7x9, 'a' as u32);
    assert_ne!(a5.width(), a7.width());
    assert!(a7.lit_count() > a5.lit_count());
}

#[test]
fn hitachi_differs_from_ascii_where_the_rom_does() {
    // The HD44780 ROM has a yen sign where ASCII has a backslash.
    let ascii = glyph(DotMatrix::Mat5x7, '\\' as u32);
    let rom = glyph(DotMatrix::Hitachi, '\\' as u32);
    assert_ne!(ascii, rom);

    // Katakana live above 0xA0.
    assert!(!glyph(DotMatrix::Hitachi, 0xB1).is_blank());
    // Codes 0x80..=0x9F are empty.
    assert!(glyph(DotMatrix::Hitachi, 0x90).is_blank());
}

#[test]
fn hitachi_extended_splits_at_the_first_tall_code() {
    let table = font_table(DotMatrix::HitachiExtended);
    let first_tall = HITACHI_EXTENDED_FIRST_TALL as u32;

    let below = table.glyph(first_tall - 1);
    assert!(below.rows()[7..].iter().all(|&r| r == 0));
    assert_eq!(
        &below.rows()[..7],
        glyph(DotMatrix::Hitachi, first_tall - 1).rows()
    );

    let descender = table.glyph(0xE7);
    assert!(descender.rows()[7..].iter().any(|&r| r != 0));
}
