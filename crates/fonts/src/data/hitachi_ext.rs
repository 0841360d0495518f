//! HD44780 5x10 cells for codes 0xC2..=0xFF.
//!
//! Lowercase letters with descenders drop into rows 7..=9; the remaining
//! glyphs keep their 5x7 shape in the top rows.

#[rustfmt::skip]
pub(crate) static HITACHI_EXT: [u16; 62 * 10] = [
    0b00000, 0b10101, 0b10101, 0b10101, 0b00001, 0b00010, 0b00100, 0b00000, 0b00000, 0b00000, // 0xC2 ツ
    0b01110, 0b00000, 0b11111, 0b00100, 0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, // 0xC3 テ
    0b01000, 0b01000, 0b01000, 0b01100, 0b01010, 0b01000, 0b01000, 0b00000, 0b00000, 0b00000, // 0xC4 ト
    0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b01000, 0b10000, 0b00000, 0b00000, 0b00000, // 0xC5 ナ
    0b00000, 0b01110, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000, // 0xC6 ニ
    0b00000, 0b11111, 0b00001, 0b01010, 0b00100, 0b01010, 0b10000, 0b00000, 0b00000, 0b00000, // 0xC7 ヌ
    0b00100, 0b11111, 0b00010, 0b00100, 0b01110, 0b10101, 0b00100, 0b00000, 0b00000, 0b00000, // 0xC8 ネ
    0b00010, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000, 0b00000, 0b00000, // 0xC9 ノ
    0b00000, 0b00100, 0b00010, 0b10001, 0b10001, 0b10001, 0b10001, 0b00000, 0b00000, 0b00000, // 0xCA ハ
    0b10000, 0b10000, 0b11111, 0b10000, 0b10000, 0b10000, 0b01111, 0b00000, 0b00000, 0b00000, // 0xCB ヒ
    0b00000, 0b11111, 0b00001, 0b00001, 0b00010, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, // 0xCC フ
    0b00000, 0b01000, 0b10100, 0b00010, 0b00001, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0xCD ヘ
    0b00100, 0b11111, 0b00100, 0b00100, 0b10101, 0b10101, 0b00100, 0b00000, 0b00000, 0b00000, // 0xCE ホ
    0b00000, 0b11111, 0b00001, 0b00001, 0b01010, 0b00100, 0b00010, 0b00000, 0b00000, 0b00000, // 0xCF マ
    0b00000, 0b01110, 0b00000, 0b01110, 0b00000, 0b01110, 0b00001, 0b00000, 0b00000, 0b00000, // 0xD0 ミ
    0b00000, 0b00100, 0b01000, 0b10000, 0b10001, 0b11111, 0b00001, 0b00000, 0b00000, 0b00000, // 0xD1 ム
    0b00000, 0b00001, 0b00001, 0b01010, 0b00100, 0b01010, 0b10000, 0b00000, 0b00000, 0b00000, // 0xD2 メ
    0b00000, 0b11111, 0b01000, 0b11111, 0b01000, 0b01000, 0b00111, 0b00000, 0b00000, 0b00000, // 0xD3 モ
    0b01000, 0b01000, 0b11111, 0b01001, 0b01010, 0b01000, 0b01000, 0b00000, 0b00000, 0b00000, // 0xD4 ヤ
    0b00000, 0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b11111, 0b00000, 0b00000, 0b00000, // 0xD5 ユ
    0b00000, 0b11111, 0b00001, 0b11111, 0b00001, 0b00001, 0b11111, 0b00000, 0b00000, 0b00000, // 0xD6 ヨ
    0b01110, 0b00000, 0b11111, 0b00001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00000, 0b00000, // 0xD7 ラ
    0b10010, 0b10010, 0b10010, 0b10010, 0b00010, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, // 0xD8 リ
    0b00100, 0b10100, 0b10100, 0b10100, 0b10101, 0b10110, 0b10100, 0b00000, 0b00000, 0b00000, // 0xD9 ル
    0b10000, 0b10000, 0b10000, 0b10001, 0b10010, 0b10100, 0b11000, 0b00000, 0b00000, 0b00000, // 0xDA レ
    0b00000, 0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111, 0b00000, 0b00000, 0b00000, // 0xDB ロ
    0b00000, 0b11111, 0b10001, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00000, 0b00000, // 0xDC ワ
    0b00000, 0b11000, 0b00001, 0b00001, 0b00010, 0b00100, 0b11000, 0b00000, 0b00000, 0b00000, // 0xDD ン
    0b10100, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0xDE ゛
    0b11100, 0b10100, 0b11100, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0xDF ゜
    0b00000, 0b00000, 0b01001, 0b10101, 0b10010, 0b10010, 0b01101, 0b00000, 0b00000, 0b00000, // 0xE0 α
    0b01010, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111, 0b00000, 0b00000, 0b00000, // 0xE1 ä
    0b00000, 0b00000, 0b01110, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, // 0xE2 β
    0b00000, 0b00000, 0b01110, 0b10000, 0b01100, 0b10000, 0b01110, 0b00000, 0b00000, 0b00000, // 0xE3 ε
    0b00000, 0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b11001, 0b10110, 0b10000, 0b10000, // 0xE4 μ
    0b00000, 0b00000, 0b01111, 0b10100, 0b10001, 0b10001, 0b01110, 0b00000, 0b00000, 0b00000, // 0xE5 σ
    0b00000, 0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, // 0xE6 ρ
    0b00000, 0b00000, 0b00000, 0b01111, 0b10001, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110, // 0xE7 g
    0b00000, 0b00000, 0b00111, 0b00100, 0b00100, 0b10100, 0b01000, 0b00000, 0b00000, 0b00000, // 0xE8 √
    0b00000, 0b00010, 0b11010, 0b00010, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0xE9 ⁻¹
    0b00000, 0b00010, 0b00000, 0b00110, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100, // 0xEA j
    0b00000, 0b10100, 0b01000, 0b10100, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0xEB ˣ
    0b00100, 0b01110, 0b10100, 0b10101, 0b01110, 0b00100, 0b00000, 0b00000, 0b00000, 0b00000, // 0xEC ¢
    0b01000, 0b01000, 0b11100, 0b01000, 0b11100, 0b01001, 0b10110, 0b00000, 0b00000, 0b00000, // 0xED £
    0b01110, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001, 0b00000, 0b00000, 0b00000, // 0xEE ñ
    0b01010, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110, 0b00000, 0b00000, 0b00000, // 0xEF ö
    0b00000, 0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, // 0xF0 p
    0b00000, 0b00000, 0b00000, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001, // 0xF1 q
    0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b01110, 0b00000, 0b00000, 0b00000, // 0xF2 θ
    0b00000, 0b00000, 0b00000, 0b01010, 0b10101, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000, // 0xF3 ∞
    0b00000, 0b01110, 0b10001, 0b10001, 0b01010, 0b11011, 0b00000, 0b00000, 0b00000, 0b00000, // 0xF4 Ω
    0b01010, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101, 0b00000, 0b00000, 0b00000, // 0xF5 ü
    0b11111, 0b10000, 0b01000, 0b00100, 0b01000, 0b10000, 0b11111, 0b00000, 0b00000, 0b00000, // 0xF6 Σ
    0b00000, 0b11111, 0b01010, 0b01010, 0b01010, 0b10011, 0b00000, 0b00000, 0b00000, 0b00000, // 0xF7 π
    0b11111, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b00000, 0b00000, 0b00000, // 0xF8 x̄
    0b00000, 0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110, // 0xF9 y
    0b00000, 0b00001, 0b11110, 0b01000, 0b11111, 0b01000, 0b01000, 0b00000, 0b00000, 0b00000, // 0xFA 千
    0b00000, 0b11111, 0b01000, 0b01111, 0b01001, 0b10001, 0b10011, 0b00000, 0b00000, 0b00000, // 0xFB 万
    0b00000, 0b11111, 0b10101, 0b11111, 0b10001, 0b10001, 0b00000, 0b00000, 0b00000, 0b00000, // 0xFC 円
    0b00000, 0b00100, 0b00000, 0b11111, 0b00000, 0b00100, 0b00000, 0b00000, 0b00000, 0b00000, // 0xFD ÷
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0xFE
    0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b00000, 0b00000, 0b00000, // 0xFF █
];
