//! HD44780 (ROM code A00) character set, codes 0x20..=0xFF, 5x7 cells.
//!
//! 0x80..=0x9F are blank in the ROM; 0xA0..=0xDF hold katakana and 0xE0..=0xFF
//! Greek letters and symbols.

#[rustfmt::skip]
pub(crate) static HITACHI: [u16; 224 * 7] = [
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x20 ' '
    0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100, // 0x21 '!'
    0b01010, 0b01010, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000, // 0x22 '"'
    0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010, // 0x23 '#'
    0b00100, 0b01111, 0b10100, 0b01110, 0b00101, 0b11110, 0b00100, // 0x24 '$'
    0b11000, 0b11001, 0b00010, 0b00100, 0b01000, 0b10011, 0b00011, // 0x25 '%'
    0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101, // 0x26 '&'
    0b01100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x27 '\''
    0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010, // 0x28 '('
    0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000, // 0x29 ')'
    0b00000, 0b00100, 0b10101, 0b01110, 0b10101, 0b00100, 0b00000, // 0x2A '*'
    0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000, // 0x2B '+'
    0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000, // 0x2C ','
    0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000, // 0x2D '-'
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100, // 0x2E '.'
    0b00000, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000, // 0x2F '/'
    0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110, // 0x30 '0'
    0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110, // 0x31 '1'
    0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111, // 0x32 '2'
    0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110, // 0x33 '3'
    0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010, // 0x34 '4'
    0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110, // 0x35 '5'
    0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110, // 0x36 '6'
    0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000, // 0x37 '7'
    0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110, // 0x38 '8'
    0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100, // 0x39 '9'
    0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000, // 0x3A ':'
    0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b00100, 0b01000, // 0x3B ';'
    0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010, // 0x3C '<'
    0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000, // 0x3D '='
    0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000, // 0x3E '>'
    0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100, // 0x3F '?'
    0b01110, 0b10001, 0b00001, 0b01101, 0b10101, 0b10101, 0b01110, // 0x40 '@'
    0b01110, 0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, // 0x41 'A'
    0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110, // 0x42 'B'
    0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110, // 0x43 'C'
    0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100, // 0x44 'D'
    0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111, // 0x45 'E'
    0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, // 0x46 'F'
    0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111, // 0x47 'G'
    0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001, // 0x48 'H'
    0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110, // 0x49 'I'
    0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100, // 0x4A 'J'
    0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001, // 0x4B 'K'
    0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111, // 0x4C 'L'
    0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001, // 0x4D 'M'
    0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, // 0x4E 'N'
    0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110, // 0x4F 'O'
    0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000, // 0x50 'P'
    0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101, // 0x51 'Q'
    0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001, // 0x52 'R'
    0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110, // 0x53 'S'
    0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, // 0x54 'T'
    0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110, // 0x55 'U'
    0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100, // 0x56 'V'
    0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010, // 0x57 'W'
    0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001, // 0x58 'X'
    0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, // 0x59 'Y'
    0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111, // 0x5A 'Z'
    0b01110, 0b01000, 0b01000, 0b01000, 0b01000, 0b01000, 0b01110, // 0x5B '['
    0b10001, 0b01010, 0b11111, 0b00100, 0b11111, 0b00100, 0b00100, // 0x5C ¥
    0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b01110, // 0x5D ']'
    0b00100, 0b01010, 0b10001, 0b00000, 0b00000, 0b00000, 0b00000, // 0x5E '^'
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111, // 0x5F '_'
    0b01000, 0b00100, 0b00010, 0b00000, 0b00000, 0b00000, 0b00000, // 0x60 '`'
    0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111, // 0x61 'a'
    0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b11110, // 0x62 'b'
    0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110, // 0x63 'c'
    0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111, // 0x64 'd'
    0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110, // 0x65 'e'
    0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000, // 0x66 'f'
    0b00000, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110, // 0x67 'g'
    0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001, // 0x68 'h'
    0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110, // 0x69 'i'
    0b00010, 0b00000, 0b00110, 0b00010, 0b00010, 0b10010, 0b01100, // 0x6A 'j'
    0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, // 0x6B 'k'
    0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110, // 0x6C 'l'
    0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10001, 0b10001, // 0x6D 'm'
    0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001, // 0x6E 'n'
    0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110, // 0x6F 'o'
    0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000, // 0x70 'p'
    0b00000, 0b00000, 0b01101, 0b10011, 0b01111, 0b00001, 0b00001, // 0x71 'q'
    0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000, // 0x72 'r'
    0b00000, 0b00000, 0b01110, 0b10000, 0b01110, 0b00001, 0b11110, // 0x73 's'
    0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110, // 0x74 't'
    0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101, // 0x75 'u'
    0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100, // 0x76 'v'
    0b00000, 0b00000, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010, // 0x77 'w'
    0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, // 0x78 'x'
    0b00000, 0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110, // 0x79 'y'
    0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111, // 0x7A 'z'
    0b00010, 0b00100, 0b00100, 0b01000, 0b00100, 0b00100, 0b00010, // 0x7B '{'
    0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, // 0x7C '|'
    0b01000, 0b00100, 0b00100, 0b00010, 0b00100, 0b00100, 0b01000, // 0x7D '}'
    0b00000, 0b00100, 0b00010, 0b11111, 0b00010, 0b00100, 0b00000, // 0x7E →
    0b00000, 0b00100, 0b01000, 0b11111, 0b01000, 0b00100, 0b00000, // 0x7F ←
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x80
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x81
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x82
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x83
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x84
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x85
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x86
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x87
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x88
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x89
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x8A
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x8B
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x8C
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x8D
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x8E
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x8F
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x90
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x91
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x92
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x93
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x94
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x95
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x96
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x97
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x98
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x99
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x9A
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x9B
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x9C
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x9D
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x9E
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0x9F
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0xA0
    0b00000, 0b00000, 0b00000, 0b00000, 0b11100, 0b10100, 0b11100, // 0xA1 。
    0b00111, 0b00100, 0b00100, 0b00100, 0b00000, 0b00000, 0b00000, // 0xA2 「
    0b00000, 0b00000, 0b00000, 0b00100, 0b00100, 0b00100, 0b11100, // 0xA3 」
    0b00000, 0b00000, 0b00000, 0b00000, 0b10000, 0b01000, 0b00100, // 0xA4 、
    0b00000, 0b00000, 0b00000, 0b01100, 0b01100, 0b00000, 0b00000, // 0xA5 ・
    0b00000, 0b11111, 0b00001, 0b11111, 0b00001, 0b00010, 0b01100, // 0xA6 ヲ
    0b00000, 0b00000, 0b11111, 0b00001, 0b00110, 0b00100, 0b01000, // 0xA7 ァ
    0b00000, 0b00000, 0b00010, 0b00100, 0b01100, 0b10100, 0b00100, // 0xA8 ィ
    0b00000, 0b00000, 0b00100, 0b11111, 0b10001, 0b00010, 0b00100, // 0xA9 ゥ
    0b00000, 0b00000, 0b00000, 0b11111, 0b00100, 0b00100, 0b11111, // 0xAA ェ
    0b00000, 0b00000, 0b00010, 0b11111, 0b00110, 0b01010, 0b10010, // 0xAB ォ
    0b00000, 0b00000, 0b01000, 0b11111, 0b01001, 0b01010, 0b01000, // 0xAC ャ
    0b00000, 0b00000, 0b00000, 0b01110, 0b00010, 0b00010, 0b11111, // 0xAD ュ
    0b00000, 0b00000, 0b11110, 0b00010, 0b11110, 0b00010, 0b11110, // 0xAE ョ
    0b00000, 0b00000, 0b00000, 0b10101, 0b10101, 0b00010, 0b00100, // 0xAF ッ
    0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000, // 0xB0 ー
    0b11111, 0b00001, 0b00101, 0b00110, 0b00100, 0b00100, 0b01000, // 0xB1 ア
    0b00001, 0b00010, 0b00100, 0b01100, 0b10100, 0b00100, 0b00100, // 0xB2 イ
    0b00100, 0b11111, 0b10001, 0b10001, 0b00001, 0b00010, 0b00100, // 0xB3 ウ
    0b00000, 0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111, // 0xB4 エ
    0b00010, 0b11111, 0b00010, 0b00110, 0b01010, 0b10010, 0b00010, // 0xB5 オ
    0b01000, 0b11111, 0b01001, 0b01001, 0b01001, 0b01001, 0b10010, // 0xB6 カ
    0b00100, 0b11111, 0b00100, 0b11111, 0b00100, 0b00100, 0b00100, // 0xB7 キ
    0b00000, 0b01111, 0b01001, 0b10001, 0b00001, 0b00010, 0b01100, // 0xB8 ク
    0b01000, 0b01111, 0b10010, 0b00010, 0b00010, 0b00010, 0b00100, // 0xB9 ケ
    0b00000, 0b11111, 0b00001, 0b00001, 0b00001, 0b00001, 0b11111, // 0xBA コ
    0b01010, 0b11111, 0b01010, 0b01010, 0b00010, 0b00100, 0b01000, // 0xBB サ
    0b00000, 0b11000, 0b00001, 0b11001, 0b00001, 0b00010, 0b11100, // 0xBC シ
    0b00000, 0b11111, 0b00001, 0b00010, 0b00100, 0b01010, 0b10001, // 0xBD ス
    0b01000, 0b11111, 0b01001, 0b01010, 0b01000, 0b01000, 0b00111, // 0xBE セ
    0b00000, 0b10001, 0b10001, 0b01001, 0b00001, 0b00010, 0b01100, // 0xBF ソ
    0b00000, 0b01111, 0b01001, 0b10111, 0b00001, 0b00010, 0b01100, // 0xC0 タ
    0b00010, 0b11100, 0b00100, 0b11111, 0b00100, 0b00100, 0b01000, // 0xC1 チ
    0b00000, 0b10101, 0b10101, 0b10101, 0b00001, 0b00010, 0b00100, // 0xC2 ツ
    0b01110, 0b00000, 0b11111, 0b00100, 0b00100, 0b00100, 0b01000, // 0xC3 テ
    0b01000, 0b01000, 0b01000, 0b01100, 0b01010, 0b01000, 0b01000, // 0xC4 ト
    0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b01000, 0b10000, // 0xC5 ナ
    0b00000, 0b01110, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111, // 0xC6 ニ
    0b00000, 0b11111, 0b00001, 0b01010, 0b00100, 0b01010, 0b10000, // 0xC7 ヌ
    0b00100, 0b11111, 0b00010, 0b00100, 0b01110, 0b10101, 0b00100, // 0xC8 ネ
    0b00010, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000, 0b10000, // 0xC9 ノ
    0b00000, 0b00100, 0b00010, 0b10001, 0b10001, 0b10001, 0b10001, // 0xCA ハ
    0b10000, 0b10000, 0b11111, 0b10000, 0b10000, 0b10000, 0b01111, // 0xCB ヒ
    0b00000, 0b11111, 0b00001, 0b00001, 0b00010, 0b00100, 0b01000, // 0xCC フ
    0b00000, 0b01000, 0b10100, 0b00010, 0b00001, 0b00000, 0b00000, // 0xCD ヘ
    0b00100, 0b11111, 0b00100, 0b00100, 0b10101, 0b10101, 0b00100, // 0xCE ホ
    0b00000, 0b11111, 0b00001, 0b00001, 0b01010, 0b00100, 0b00010, // 0xCF マ
    0b00000, 0b01110, 0b00000, 0b01110, 0b00000, 0b01110, 0b00001, // 0xD0 ミ
    0b00000, 0b00100, 0b01000, 0b10000, 0b10001, 0b11111, 0b00001, // 0xD1 ム
    0b00000, 0b00001, 0b00001, 0b01010, 0b00100, 0b01010, 0b10000, // 0xD2 メ
    0b00000, 0b11111, 0b01000, 0b11111, 0b01000, 0b01000, 0b00111, // 0xD3 モ
    0b01000, 0b01000, 0b11111, 0b01001, 0b01010, 0b01000, 0b01000, // 0xD4 ヤ
    0b00000, 0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b11111, // 0xD5 ユ
    0b00000, 0b11111, 0b00001, 0b11111, 0b00001, 0b00001, 0b11111, // 0xD6 ヨ
    0b01110, 0b00000, 0b11111, 0b00001, 0b00001, 0b00010, 0b00100, // 0xD7 ラ
    0b10010, 0b10010, 0b10010, 0b10010, 0b00010, 0b00100, 0b01000, // 0xD8 リ
    0b00100, 0b10100, 0b10100, 0b10100, 0b10101, 0b10110, 0b10100, // 0xD9 ル
    0b10000, 0b10000, 0b10000, 0b10001, 0b10010, 0b10100, 0b11000, // 0xDA レ
    0b00000, 0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111, // 0xDB ロ
    0b00000, 0b11111, 0b10001, 0b10001, 0b00001, 0b00010, 0b00100, // 0xDC ワ
    0b00000, 0b11000, 0b00001, 0b00001, 0b00010, 0b00100, 0b11000, // 0xDD ン
    0b10100, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0xDE ゛
    0b11100, 0b10100, 0b11100, 0b00000, 0b00000, 0b00000, 0b00000, // 0xDF ゜
    0b00000, 0b00000, 0b01001, 0b10101, 0b10010, 0b10010, 0b01101, // 0xE0 α
    0b01010, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111, // 0xE1 ä
    0b00000, 0b01110, 0b10001, 0b11110, 0b10001, 0b11110, 0b10000, // 0xE2 β
    0b00000, 0b00000, 0b01110, 0b10000, 0b01100, 0b10000, 0b01110, // 0xE3 ε
    0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b11001, 0b10110, // 0xE4 μ
    0b00000, 0b00000, 0b01111, 0b10100, 0b10001, 0b10001, 0b01110, // 0xE5 σ
    0b00000, 0b00000, 0b01100, 0b10010, 0b10001, 0b11110, 0b10000, // 0xE6 ρ
    0b00000, 0b00000, 0b01111, 0b10001, 0b01111, 0b00001, 0b01110, // 0xE7 g
    0b00000, 0b00000, 0b00111, 0b00100, 0b00100, 0b10100, 0b01000, // 0xE8 √
    0b00000, 0b00010, 0b11010, 0b00010, 0b00000, 0b00000, 0b00000, // 0xE9 ⁻¹
    0b00010, 0b00000, 0b00110, 0b00010, 0b00010, 0b10010, 0b01100, // 0xEA j
    0b00000, 0b10100, 0b01000, 0b10100, 0b00000, 0b00000, 0b00000, // 0xEB ˣ
    0b00100, 0b01110, 0b10100, 0b10101, 0b01110, 0b00100, 0b00000, // 0xEC ¢
    0b01000, 0b01000, 0b11100, 0b01000, 0b11100, 0b01001, 0b10110, // 0xED £
    0b01110, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001, // 0xEE ñ
    0b01010, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110, // 0xEF ö
    0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000, // 0xF0 p
    0b00000, 0b00000, 0b01101, 0b10011, 0b01111, 0b00001, 0b00001, // 0xF1 q
    0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b01110, // 0xF2 θ
    0b00000, 0b00000, 0b00000, 0b01010, 0b10101, 0b01010, 0b00000, // 0xF3 ∞
    0b00000, 0b01110, 0b10001, 0b10001, 0b01010, 0b11011, 0b00000, // 0xF4 Ω
    0b01010, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101, // 0xF5 ü
    0b11111, 0b10000, 0b01000, 0b00100, 0b01000, 0b10000, 0b11111, // 0xF6 Σ
    0b00000, 0b11111, 0b01010, 0b01010, 0b01010, 0b10011, 0b00000, // 0xF7 π
    0b11111, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, // 0xF8 x̄
    0b00000, 0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110, // 0xF9 y
    0b00000, 0b00001, 0b11110, 0b01000, 0b11111, 0b01000, 0b01000, // 0xFA 千
    0b00000, 0b11111, 0b01000, 0b01111, 0b01001, 0b10001, 0b10011, // 0xFB 万
    0b00000, 0b11111, 0b10101, 0b11111, 0b10001, 0b10001, 0b00000, // 0xFC 円
    0b00000, 0b00100, 0b00000, 0b11111, 0b00000, 0b00100, 0b00000, // 0xFD ÷
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, // 0xFE
    0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, // 0xFF █
];
