//! 7x9 dot matrix, printable ASCII (0x20..=0x7E).

#[rustfmt::skip]
pub(crate) static MAT7X9: [u16; 95 * 9] = [
    0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0000000, // 0x20 ' '
    0b0001000, 0b0001000, 0b0001000, 0b0001000, 0b0001000, 0b0000000, 0b0001000, 0b0000000, 0b0000000, // 0x21 '!'
    0b0010100, 0b0010100, 0b0010100, 0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0000000, // 0x22 '"'
    0b0010100, 0b0010100, 0b1111111, 0b0010100, 0b1111111, 0b0010100, 0b0010100, 0b0000000, 0b0000000, // 0x23 '#'
    0b0001000, 0b0111110, 0b1001000, 0b0111110, 0b0001001, 0b0111110, 0b0001000, 0b0000000, 0b0000000, // 0x24 '$'
    0b1100001, 0b1100010, 0b0000100, 0b0001000, 0b0010000, 0b0100011, 0b1000011, 0b0000000, 0b0000000, // 0x25 '%'
    0b0110000, 0b1001000, 0b1001000, 0b0110000, 0b1001001, 0b1000110, 0b0111001, 0b0000000, 0b0000000, // 0x26 '&'
    0b0001000, 0b0001000, 0b0010000, 0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0000000, // 0x27 '\''
    0b0000100, 0b0001000, 0b0010000, 0b0010000, 0b0010000, 0b0001000, 0b0000100, 0b0000000, 0b0000000, // 0x28 '('
    0b0010000, 0b0001000, 0b0000100, 0b0000100, 0b0000100, 0b0001000, 0b0010000, 0b0000000, 0b0000000, // 0x29 ')'
    0b0000000, 0b1001001, 0b0101010, 0b0011100, 0b0101010, 0b1001001, 0b0000000, 0b0000000, 0b0000000, // 0x2A '*'
    0b0000000, 0b0001000, 0b0001000, 0b1111111, 0b0001000, 0b0001000, 0b0000000, 0b0000000, 0b0000000, // 0x2B '+'
    0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0011000, 0b0011000, 0b0001000, 0b0010000, // 0x2C ','
    0b0000000, 0b0000000, 0b0000000, 0b1111111, 0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0000000, // 0x2D '-'
    0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0011000, 0b0011000, 0b0000000, 0b0000000, // 0x2E '.'
    0b0000001, 0b0000010, 0b0000100, 0b0001000, 0b0010000, 0b0100000, 0b1000000, 0b0000000, 0b0000000, // 0x2F '/'
    0b0111110, 0b1000011, 0b1000101, 0b1001001, 0b1010001, 0b1100001, 0b0111110, 0b0000000, 0b0000000, // 0x30 '0'
    0b0001000, 0b0011000, 0b0101000, 0b0001000, 0b0001000, 0b0001000, 0b0111110, 0b0000000, 0b0000000, // 0x31 '1'
    0b0111110, 0b1000001, 0b0000001, 0b0011110, 0b0100000, 0b1000000, 0b1111111, 0b0000000, 0b0000000, // 0x32 '2'
    0b0111110, 0b1000001, 0b0000001, 0b0011110, 0b0000001, 0b1000001, 0b0111110, 0b0000000, 0b0000000, // 0x33 '3'
    0b0000110, 0b0001010, 0b0010010, 0b0100010, 0b1111111, 0b0000010, 0b0000010, 0b0000000, 0b0000000, // 0x34 '4'
    0b1111111, 0b1000000, 0b1111110, 0b0000001, 0b0000001, 0b1000001, 0b0111110, 0b0000000, 0b0000000, // 0x35 '5'
    0b0011110, 0b0100000, 0b1000000, 0b1111110, 0b1000001, 0b1000001, 0b0111110, 0b0000000, 0b0000000, // 0x36 '6'
    0b1111111, 0b0000001, 0b0000010, 0b0000100, 0b0001000, 0b0001000, 0b0001000, 0b0000000, 0b0000000, // 0x37 '7'
    0b0111110, 0b1000001, 0b1000001, 0b0111110, 0b1000001, 0b1000001, 0b0111110, 0b0000000, 0b0000000, // 0x38 '8'
    0b0111110, 0b1000001, 0b1000001, 0b0111111, 0b0000001, 0b0000010, 0b0111100, 0b0000000, 0b0000000, // 0x39 '9'
    0b0000000, 0b0011000, 0b0011000, 0b0000000, 0b0011000, 0b0011000, 0b0000000, 0b0000000, 0b0000000, // 0x3A ':'
    0b0000000, 0b0011000, 0b0011000, 0b0000000, 0b0011000, 0b0011000, 0b0001000, 0b0010000, 0b0000000, // 0x3B ';'
    0b0000100, 0b0001000, 0b0010000, 0b0100000, 0b0010000, 0b0001000, 0b0000100, 0b0000000, 0b0000000, // 0x3C '<'
    0b0000000, 0b0000000, 0b1111111, 0b0000000, 0b1111111, 0b0000000, 0b0000000, 0b0000000, 0b0000000, // 0x3D '='
    0b0010000, 0b0001000, 0b0000100, 0b0000010, 0b0000100, 0b0001000, 0b0010000, 0b0000000, 0b0000000, // 0x3E '>'
    0b0111110, 0b1000001, 0b0000001, 0b0000110, 0b0001000, 0b0000000, 0b0001000, 0b0000000, 0b0000000, // 0x3F '?'
    0b0111110, 0b1000001, 0b1001111, 0b1010010, 0b1001110, 0b1000000, 0b0111110, 0b0000000, 0b0000000, // 0x40 '@'
    0b0001000, 0b0010100, 0b0100010, 0b1000001, 0b1111111, 0b1000001, 0b1000001, 0b0000000, 0b0000000, // 0x41 'A'
    0b1111110, 0b1000001, 0b1000001, 0b1111110, 0b1000001, 0b1000001, 0b1111110, 0b0000000, 0b0000000, // 0x42 'B'
    0b0111110, 0b1000001, 0b1000000, 0b1000000, 0b1000000, 0b1000001, 0b0111110, 0b0000000, 0b0000000, // 0x43 'C'
    0b1111100, 0b1000010, 0b1000001, 0b1000001, 0b1000001, 0b1000010, 0b1111100, 0b0000000, 0b0000000, // 0x44 'D'
    0b1111111, 0b1000000, 0b1000000, 0b1111100, 0b1000000, 0b1000000, 0b1111111, 0b0000000, 0b0000000, // 0x45 'E'
    0b1111111, 0b1000000, 0b1000000, 0b1111100, 0b1000000, 0b1000000, 0b1000000, 0b0000000, 0b0000000, // 0x46 'F'
    0b0111110, 0b1000001, 0b1000000, 0b1001111, 0b1000001, 0b1000001, 0b0111111, 0b0000000, 0b0000000, // 0x47 'G'
    0b1000001, 0b1000001, 0b1000001, 0b1111111, 0b1000001, 0b1000001, 0b1000001, 0b0000000, 0b0000000, // 0x48 'H'
    0b0111110, 0b0001000, 0b0001000, 0b0001000, 0b0001000, 0b0001000, 0b0111110, 0b0000000, 0b0000000, // 0x49 'I'
    0b0011111, 0b0000100, 0b0000100, 0b0000100, 0b0000100, 0b1000100, 0b0111000, 0b0000000, 0b0000000, // 0x4A 'J'
    0b1000010, 0b1000100, 0b1001000, 0b1110000, 0b1001000, 0b1000100, 0b1000010, 0b0000000, 0b0000000, // 0x4B 'K'
    0b1000000, 0b1000000, 0b1000000, 0b1000000, 0b1000000, 0b1000000, 0b1111111, 0b0000000, 0b0000000, // 0x4C 'L'
    0b1000001, 0b1100011, 0b1010101, 0b1001001, 0b1000001, 0b1000001, 0b1000001, 0b0000000, 0b0000000, // 0x4D 'M'
    0b1000001, 0b1100001, 0b1010001, 0b1001001, 0b1000101, 0b1000011, 0b1000001, 0b0000000, 0b0000000, // 0x4E 'N'
    0b0111110, 0b1000001, 0b1000001, 0b1000001, 0b1000001, 0b1000001, 0b0111110, 0b0000000, 0b0000000, // 0x4F 'O'
    0b1111110, 0b1000001, 0b1000001, 0b1111110, 0b1000000, 0b1000000, 0b1000000, 0b0000000, 0b0000000, // 0x50 'P'
    0b0111110, 0b1000001, 0b1000001, 0b1000001, 0b1000101, 0b1000010, 0b0111101, 0b0000000, 0b0000000, // 0x51 'Q'
    0b1111110, 0b1000001, 0b1000001, 0b1111110, 0b1000100, 0b1000010, 0b1000001, 0b0000000, 0b0000000, // 0x52 'R'
    0b0111110, 0b1000001, 0b1000000, 0b0111110, 0b0000001, 0b1000001, 0b0111110, 0b0000000, 0b0000000, // 0x53 'S'
    0b1111111, 0b0001000, 0b0001000, 0b0001000, 0b0001000, 0b0001000, 0b0001000, 0b0000000, 0b0000000, // 0x54 'T'
    0b1000001, 0b1000001, 0b1000001, 0b1000001, 0b1000001, 0b1000001, 0b0111110, 0b0000000, 0b0000000, // 0x55 'U'
    0b1000001, 0b1000001, 0b1000001, 0b0100010, 0b0100010, 0b0010100, 0b0001000, 0b0000000, 0b0000000, // 0x56 'V'
    0b1000001, 0b1000001, 0b1000001, 0b1001001, 0b1010101, 0b1100011, 0b1000001, 0b0000000, 0b0000000, // 0x57 'W'
    0b1000001, 0b0100010, 0b0010100, 0b0001000, 0b0010100, 0b0100010, 0b1000001, 0b0000000, 0b0000000, // 0x58 'X'
    0b1000001, 0b0100010, 0b0010100, 0b0001000, 0b0001000, 0b0001000, 0b0001000, 0b0000000, 0b0000000, // 0x59 'Y'
    0b1111111, 0b0000010, 0b0000100, 0b0001000, 0b0010000, 0b0100000, 0b1111111, 0b0000000, 0b0000000, // 0x5A 'Z'
    0b0011110, 0b0010000, 0b0010000, 0b0010000, 0b0010000, 0b0010000, 0b0011110, 0b0000000, 0b0000000, // 0x5B '['
    0b1000000, 0b0100000, 0b0010000, 0b0001000, 0b0000100, 0b0000010, 0b0000001, 0b0000000, 0b0000000, // 0x5C '\\'
    0b0111100, 0b0000100, 0b0000100, 0b0000100, 0b0000100, 0b0000100, 0b0111100, 0b0000000, 0b0000000, // 0x5D ']'
    0b0001000, 0b0010100, 0b0100010, 0b1000001, 0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0000000, // 0x5E '^'
    0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b1111111, // 0x5F '_'
    0b0010000, 0b0001000, 0b0000100, 0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0000000, // 0x60 '`'
    0b0000000, 0b0000000, 0b0111110, 0b0000001, 0b0111111, 0b1000001, 0b0111111, 0b0000000, 0b0000000, // 0x61 'a'
    0b1000000, 0b1000000, 0b1011110, 0b1100001, 0b1000001, 0b1000001, 0b1111110, 0b0000000, 0b0000000, // 0x62 'b'
    0b0000000, 0b0000000, 0b0111110, 0b1000000, 0b1000000, 0b1000000, 0b0111110, 0b0000000, 0b0000000, // 0x63 'c'
    0b0000001, 0b0000001, 0b0111101, 0b1000011, 0b1000001, 0b1000001, 0b0111111, 0b0000000, 0b0000000, // 0x64 'd'
    0b0000000, 0b0000000, 0b0111110, 0b1000001, 0b1111111, 0b1000000, 0b0111110, 0b0000000, 0b0000000, // 0x65 'e'
    0b0001110, 0b0010001, 0b0010000, 0b1111100, 0b0010000, 0b0010000, 0b0010000, 0b0000000, 0b0000000, // 0x66 'f'
    0b0000000, 0b0000000, 0b0111111, 0b1000001, 0b1000001, 0b0111111, 0b0000001, 0b0000001, 0b0111110, // 0x67 'g'
    0b1000000, 0b1000000, 0b1011110, 0b1100001, 0b1000001, 0b1000001, 0b1000001, 0b0000000, 0b0000000, // 0x68 'h'
    0b0001000, 0b0000000, 0b0011000, 0b0001000, 0b0001000, 0b0001000, 0b0111110, 0b0000000, 0b0000000, // 0x69 'i'
    0b0000010, 0b0000000, 0b0000110, 0b0000010, 0b0000010, 0b0000010, 0b0000010, 0b1000010, 0b0111100, // 0x6A 'j'
    0b1000000, 0b1000000, 0b1000100, 0b1001000, 0b1110000, 0b1001000, 0b1000100, 0b0000000, 0b0000000, // 0x6B 'k'
    0b0011000, 0b0001000, 0b0001000, 0b0001000, 0b0001000, 0b0001000, 0b0111110, 0b0000000, 0b0000000, // 0x6C 'l'
    0b0000000, 0b0000000, 0b1110110, 0b1001001, 0b1001001, 0b1001001, 0b1001001, 0b0000000, 0b0000000, // 0x6D 'm'
    0b0000000, 0b0000000, 0b1011110, 0b1100001, 0b1000001, 0b1000001, 0b1000001, 0b0000000, 0b0000000, // 0x6E 'n'
    0b0000000, 0b0000000, 0b0111110, 0b1000001, 0b1000001, 0b1000001, 0b0111110, 0b0000000, 0b0000000, // 0x6F 'o'
    0b0000000, 0b0000000, 0b1111110, 0b1000001, 0b1000001, 0b1111110, 0b1000000, 0b1000000, 0b1000000, // 0x70 'p'
    0b0000000, 0b0000000, 0b0111111, 0b1000001, 0b1000001, 0b0111111, 0b0000001, 0b0000001, 0b0000001, // 0x71 'q'
    0b0000000, 0b0000000, 0b1011110, 0b1100001, 0b1000000, 0b1000000, 0b1000000, 0b0000000, 0b0000000, // 0x72 'r'
    0b0000000, 0b0000000, 0b0111111, 0b1000000, 0b0111110, 0b0000001, 0b1111110, 0b0000000, 0b0000000, // 0x73 's'
    0b0010000, 0b0010000, 0b1111110, 0b0010000, 0b0010000, 0b0010001, 0b0001110, 0b0000000, 0b0000000, // 0x74 't'
    0b0000000, 0b0000000, 0b1000001, 0b1000001, 0b1000001, 0b1000011, 0b0111101, 0b0000000, 0b0000000, // 0x75 'u'
    0b0000000, 0b0000000, 0b1000001, 0b1000001, 0b0100010, 0b0010100, 0b0001000, 0b0000000, 0b0000000, // 0x76 'v'
    0b0000000, 0b0000000, 0b1000001, 0b1000001, 0b1001001, 0b1010101, 0b0100010, 0b0000000, 0b0000000, // 0x77 'w'
    0b0000000, 0b0000000, 0b1000001, 0b0100010, 0b0001000, 0b0100010, 0b1000001, 0b0000000, 0b0000000, // 0x78 'x'
    0b0000000, 0b0000000, 0b1000001, 0b1000001, 0b1000001, 0b0111111, 0b0000001, 0b0000001, 0b0111110, // 0x79 'y'
    0b0000000, 0b0000000, 0b1111111, 0b0000110, 0b0001000, 0b0110000, 0b1111111, 0b0000000, 0b0000000, // 0x7A 'z'
    0b0000110, 0b0001000, 0b0001000, 0b0110000, 0b0001000, 0b0001000, 0b0000110, 0b0000000, 0b0000000, // 0x7B '{'
    0b0001000, 0b0001000, 0b0001000, 0b0001000, 0b0001000, 0b0001000, 0b0001000, 0b0001000, 0b0001000, // 0x7C '|'
    0b0110000, 0b0001000, 0b0001000, 0b0000110, 0b0001000, 0b0001000, 0b0110000, 0b0000000, 0b0000000, // 0x7D '}'
    0b0000000, 0b0000000, 0b0110001, 0b1001001, 0b1000110, 0b0000000, 0b0000000, 0b0000000, 0b0000000, // 0x7E '~'
];
