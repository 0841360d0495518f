//! DOS flavoured 5x7 set, codes 0x20..=0x7F (0x7F is the code page 437 house).

#[rustfmt::skip]
pub(crate) static DOS5X7: [u16; 96 * 7] = [
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
    0b01110, 0b10001, 0b10001, 0b10101, 0b10001, 0b10001, 0b01110, // 0x30 '0'
    0b00100, 0b01100, 0b10100, 0b00100, 0b00100, 0b00100, 0b11111, // 0x31 '1'
    0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111, // 0x32 '2'
    0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110, // 0x33 '3'
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
    0b00000, 0b10000, 0b01000, 0b00100, 0b00010, 0b00001, 0b00000, // 0x5C '\\'
    0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b01110, // 0x5D ']'
    0b00100, 0b01010, 0b10001, 0b00000, 0b00000, 0b00000, 0b00000, // 0x5E '^'
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111, // 0x5F '_'
    0b01000, 0b00100, 0b00010, 0b00000, 0b00000, 0b00000, 0b00000, // 0x60 '`'
    0b00000, 0b00000, 0b01100, 0b00010, 0b01110, 0b10010, 0b01101, // 0x61 'a'
    0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b11110, // 0x62 'b'
    0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110, // 0x63 'c'
    0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111, // 0x64 'd'
    0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110, // 0x65 'e'
    0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000, // 0x66 'f'
    0b00000, 0b00000, 0b01101, 0b10010, 0b01110, 0b00010, 0b11100, // 0x67 'g'
    0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001, // 0x68 'h'
    0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b00110, // 0x69 'i'
    0b00010, 0b00000, 0b00110, 0b00010, 0b00010, 0b10010, 0b01100, // 0x6A 'j'
    0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, // 0x6B 'k'
    0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00110, // 0x6C 'l'
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
    0b00000, 0b00000, 0b10010, 0b10010, 0b01110, 0b00010, 0b11100, // 0x79 'y'
    0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111, // 0x7A 'z'
    0b00010, 0b00100, 0b00100, 0b01000, 0b00100, 0b00100, 0b00010, // 0x7B '{'
    0b00100, 0b00100, 0b00100, 0b00000, 0b00100, 0b00100, 0b00100, // 0x7C '|'
    0b01000, 0b00100, 0b00100, 0b00010, 0b00100, 0b00100, 0b01000, // 0x7D '}'
    0b00000, 0b01001, 0b10110, 0b00000, 0b00000, 0b00000, 0b00000, // 0x7E '~'
    0b00000, 0b00100, 0b01010, 0b10001, 0b10001, 0b11111, 0b00000, // 0x7F ⌂
];
