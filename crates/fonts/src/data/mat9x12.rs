//! 9x12 dot matrix, printable ASCII (0x20..=0x7E).

#[rustfmt::skip]
pub(crate) static MAT9X12: [u16; 95 * 12] = [
    0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, // 0x20 ' '
    0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000000000, 0b000000000, 0b000010000, 0b000000000, 0b000000000, 0b000000000, // 0x21 '!'
    0b000101000, 0b000101000, 0b000101000, 0b000101000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, // 0x22 '"'
    0b000101000, 0b000101000, 0b000101000, 0b111111111, 0b000101000, 0b111111111, 0b000101000, 0b000101000, 0b000101000, 0b000000000, 0b000000000, 0b000000000, // 0x23 '#'
    0b000010000, 0b011111110, 0b100010000, 0b100010000, 0b011111110, 0b000010001, 0b000010010, 0b011111110, 0b000010000, 0b000000000, 0b000000000, 0b000000000, // 0x24 '$'
    0b110000001, 0b110000010, 0b000000100, 0b000001000, 0b000010000, 0b000100000, 0b001000000, 0b010000011, 0b100000011, 0b000000000, 0b000000000, 0b000000000, // 0x25 '%'
    0b011100000, 0b100010000, 0b100010000, 0b100010000, 0b011100000, 0b100010001, 0b100001010, 0b100001110, 0b011110001, 0b000000000, 0b000000000, 0b000000000, // 0x26 '&'
    0b000010000, 0b000010000, 0b000100000, 0b000100000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, // 0x27 '\''
    0b000001000, 0b000010000, 0b000100000, 0b000100000, 0b000100000, 0b000100000, 0b000010000, 0b000010000, 0b000001000, 0b000000000, 0b000000000, 0b000000000, // 0x28 '('
    0b000100000, 0b000010000, 0b000001000, 0b000001000, 0b000001000, 0b000001000, 0b000010000, 0b000010000, 0b000100000, 0b000000000, 0b000000000, 0b000000000, // 0x29 ')'
    0b000000000, 0b100010001, 0b010010010, 0b010010010, 0b001111100, 0b011010110, 0b100010001, 0b100010001, 0b000000000, 0b000000000, 0b000000000, 0b000000000, // 0x2A '*'
    0b000000000, 0b000010000, 0b000010000, 0b000010000, 0b111111111, 0b000010000, 0b000010000, 0b000010000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, // 0x2B '+'
    0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000110000, 0b000110000, 0b000010000, 0b000010000, 0b000100000, // 0x2C ','
    0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b111111111, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, // 0x2D '-'
    0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000110000, 0b000110000, 0b000000000, 0b000000000, 0b000000000, // 0x2E '.'
    0b000000001, 0b000000010, 0b000000100, 0b000001000, 0b000010000, 0b000100000, 0b001000000, 0b010000000, 0b100000000, 0b000000000, 0b000000000, 0b000000000, // 0x2F '/'
    0b011111110, 0b100000011, 0b100000101, 0b100001001, 0b100010001, 0b100100001, 0b101000001, 0b110000001, 0b011111110, 0b000000000, 0b000000000, 0b000000000, // 0x30 '0'
    0b000010000, 0b000110000, 0b001010000, 0b010010000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b011111110, 0b000000000, 0b000000000, 0b000000000, // 0x31 '1'
    0b011111110, 0b100000001, 0b000000001, 0b000000001, 0b000111110, 0b011000000, 0b100000000, 0b100000000, 0b111111111, 0b000000000, 0b000000000, 0b000000000, // 0x32 '2'
    0b011111110, 0b100000001, 0b000000001, 0b000000001, 0b000111110, 0b000000001, 0b000000001, 0b100000001, 0b011111110, 0b000000000, 0b000000000, 0b000000000, // 0x33 '3'
    0b000001110, 0b000010010, 0b000100010, 0b000100010, 0b011000010, 0b111111111, 0b000000010, 0b000000010, 0b000000010, 0b000000000, 0b000000000, 0b000000000, // 0x34 '4'
    0b111111111, 0b100000000, 0b100000000, 0b111111110, 0b000000001, 0b000000001, 0b000000001, 0b100000001, 0b011111110, 0b000000000, 0b000000000, 0b000000000, // 0x35 '5'
    0b000111110, 0b011000000, 0b100000000, 0b100000000, 0b111111110, 0b100000001, 0b100000001, 0b100000001, 0b011111110, 0b000000000, 0b000000000, 0b000000000, // 0x36 '6'
    0b111111111, 0b000000001, 0b000000010, 0b000000010, 0b000001100, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000000000, 0b000000000, 0b000000000, // 0x37 '7'
    0b011111110, 0b100000001, 0b100000001, 0b100000001, 0b011111110, 0b100000001, 0b100000001, 0b100000001, 0b011111110, 0b000000000, 0b000000000, 0b000000000, // 0x38 '8'
    0b011111110, 0b100000001, 0b100000001, 0b100000001, 0b011111111, 0b000000001, 0b000000010, 0b000000010, 0b011111100, 0b000000000, 0b000000000, 0b000000000, // 0x39 '9'
    0b000000000, 0b000110000, 0b000110000, 0b000110000, 0b000000000, 0b000110000, 0b000110000, 0b000110000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, // 0x3A ':'
    0b000000000, 0b000110000, 0b000110000, 0b000110000, 0b000000000, 0b000110000, 0b000110000, 0b000110000, 0b000010000, 0b000100000, 0b000100000, 0b000000000, // 0x3B ';'
    0b000001000, 0b000010000, 0b000100000, 0b000100000, 0b011000000, 0b001100000, 0b000010000, 0b000010000, 0b000001000, 0b000000000, 0b000000000, 0b000000000, // 0x3C '<'
    0b000000000, 0b000000000, 0b000000000, 0b111111111, 0b000000000, 0b111111111, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, // 0x3D '='
    0b000100000, 0b000010000, 0b000001000, 0b000001000, 0b000000110, 0b000001100, 0b000010000, 0b000010000, 0b000100000, 0b000000000, 0b000000000, 0b000000000, // 0x3E '>'
    0b011111110, 0b100000001, 0b000000001, 0b000000001, 0b000001110, 0b000010000, 0b000000000, 0b000000000, 0b000010000, 0b000000000, 0b000000000, 0b000000000, // 0x3F '?'
    0b011111110, 0b100000001, 0b100000001, 0b100011111, 0b100100010, 0b100011110, 0b100000000, 0b100000000, 0b011111110, 0b000000000, 0b000000000, 0b000000000, // 0x40 '@'
    0b000010000, 0b000101000, 0b001000100, 0b010000010, 0b100000001, 0b111111111, 0b100000001, 0b100000001, 0b100000001, 0b000000000, 0b000000000, 0b000000000, // 0x41 'A'
    0b111111110, 0b100000001, 0b100000001, 0b100000001, 0b111111110, 0b100000001, 0b100000001, 0b100000001, 0b111111110, 0b000000000, 0b000000000, 0b000000000, // 0x42 'B'
    0b011111110, 0b100000001, 0b100000000, 0b100000000, 0b100000000, 0b100000000, 0b100000000, 0b100000001, 0b011111110, 0b000000000, 0b000000000, 0b000000000, // 0x43 'C'
    0b111111000, 0b100000110, 0b100000001, 0b100000001, 0b100000001, 0b100000001, 0b100000010, 0b100000010, 0b111111100, 0b000000000, 0b000000000, 0b000000000, // 0x44 'D'
    0b111111111, 0b100000000, 0b100000000, 0b100000000, 0b111111000, 0b100000000, 0b100000000, 0b100000000, 0b111111111, 0b000000000, 0b000000000, 0b000000000, // 0x45 'E'
    0b111111111, 0b100000000, 0b100000000, 0b100000000, 0b111111000, 0b100000000, 0b100000000, 0b100000000, 0b100000000, 0b000000000, 0b000000000, 0b000000000, // 0x46 'F'
    0b011111110, 0b100000001, 0b100000000, 0b100000000, 0b100011111, 0b100000001, 0b100000001, 0b100000001, 0b011111111, 0b000000000, 0b000000000, 0b000000000, // 0x47 'G'
    0b100000001, 0b100000001, 0b100000001, 0b100000001, 0b111111111, 0b100000001, 0b100000001, 0b100000001, 0b100000001, 0b000000000, 0b000000000, 0b000000000, // 0x48 'H'
    0b011111110, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b011111110, 0b000000000, 0b000000000, 0b000000000, // 0x49 'I'
    0b000111111, 0b000001000, 0b000001000, 0b000001000, 0b000001000, 0b000001000, 0b000001000, 0b100001000, 0b011110000, 0b000000000, 0b000000000, 0b000000000, // 0x4A 'J'
    0b100000010, 0b100001100, 0b100010000, 0b100010000, 0b111100000, 0b100010000, 0b100001000, 0b100001000, 0b100000110, 0b000000000, 0b000000000, 0b000000000, // 0x4B 'K'
    0b100000000, 0b100000000, 0b100000000, 0b100000000, 0b100000000, 0b100000000, 0b100000000, 0b100000000, 0b111111111, 0b000000000, 0b000000000, 0b000000000, // 0x4C 'L'
    0b100000001, 0b110000011, 0b101000101, 0b100101001, 0b100010001, 0b100000001, 0b100000001, 0b100000001, 0b100000001, 0b000000000, 0b000000000, 0b000000000, // 0x4D 'M'
    0b100000001, 0b110000001, 0b101000001, 0b100100001, 0b100010001, 0b100001001, 0b100000101, 0b100000011, 0b100000001, 0b000000000, 0b000000000, 0b000000000, // 0x4E 'N'
    0b011111110, 0b100000001, 0b100000001, 0b100000001, 0b100000001, 0b100000001, 0b100000001, 0b100000001, 0b011111110, 0b000000000, 0b000000000, 0b000000000, // 0x4F 'O'
    0b111111110, 0b100000001, 0b100000001, 0b100000001, 0b111111110, 0b100000000, 0b100000000, 0b100000000, 0b100000000, 0b000000000, 0b000000000, 0b000000000, // 0x50 'P'
    0b011111110, 0b100000001, 0b100000001, 0b100000001, 0b100000001, 0b100001001, 0b100000110, 0b100000010, 0b011111101, 0b000000000, 0b000000000, 0b000000000, // 0x51 'Q'
    0b111111110, 0b100000001, 0b100000001, 0b100000001, 0b111111110, 0b100001000, 0b100000100, 0b100000010, 0b100000001, 0b000000000, 0b000000000, 0b000000000, // 0x52 'R'
    0b011111110, 0b100000001, 0b100000000, 0b100000000, 0b011111110, 0b000000001, 0b000000001, 0b100000001, 0b011111110, 0b000000000, 0b000000000, 0b000000000, // 0x53 'S'
    0b111111111, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000000000, 0b000000000, 0b000000000, // 0x54 'T'
    0b100000001, 0b100000001, 0b100000001, 0b100000001, 0b100000001, 0b100000001, 0b100000001, 0b100000001, 0b011111110, 0b000000000, 0b000000000, 0b000000000, // 0x55 'U'
    0b100000001, 0b100000001, 0b100000001, 0b100000001, 0b010000010, 0b010000010, 0b001000100, 0b000101000, 0b000010000, 0b000000000, 0b000000000, 0b000000000, // 0x56 'V'
    0b100000001, 0b100000001, 0b100000001, 0b100000001, 0b100010001, 0b100101001, 0b101000101, 0b110000011, 0b100000001, 0b000000000, 0b000000000, 0b000000000, // 0x57 'W'
    0b100000001, 0b010000010, 0b001000100, 0b000101000, 0b000010000, 0b000101000, 0b001000100, 0b010000010, 0b100000001, 0b000000000, 0b000000000, 0b000000000, // 0x58 'X'
    0b100000001, 0b010000010, 0b001000100, 0b000101000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000000000, 0b000000000, 0b000000000, // 0x59 'Y'
    0b111111111, 0b000000010, 0b000000100, 0b000001000, 0b000010000, 0b000100000, 0b001000000, 0b010000000, 0b111111111, 0b000000000, 0b000000000, 0b000000000, // 0x5A 'Z'
    0b000111110, 0b000100000, 0b000100000, 0b000100000, 0b000100000, 0b000100000, 0b000100000, 0b000100000, 0b000111110, 0b000000000, 0b000000000, 0b000000000, // 0x5B '['
    0b100000000, 0b010000000, 0b001000000, 0b000100000, 0b000010000, 0b000001000, 0b000000100, 0b000000010, 0b000000001, 0b000000000, 0b000000000, 0b000000000, // 0x5C '\\'
    0b011111000, 0b000001000, 0b000001000, 0b000001000, 0b000001000, 0b000001000, 0b000001000, 0b000001000, 0b011111000, 0b000000000, 0b000000000, 0b000000000, // 0x5D ']'
    0b000010000, 0b000101000, 0b001000100, 0b010000010, 0b100000001, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, // 0x5E '^'
    0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b111111111, // 0x5F '_'
    0b000100000, 0b000010000, 0b000001000, 0b000001000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, // 0x60 '`'
    0b000000000, 0b000000000, 0b000000000, 0b011111110, 0b000000001, 0b011111111, 0b100000001, 0b100000001, 0b011111111, 0b000000000, 0b000000000, 0b000000000, // 0x61 'a'
    0b100000000, 0b100000000, 0b100000000, 0b100111110, 0b111000001, 0b100000001, 0b100000001, 0b100000001, 0b111111110, 0b000000000, 0b000000000, 0b000000000, // 0x62 'b'
    0b000000000, 0b000000000, 0b000000000, 0b011111110, 0b100000000, 0b100000000, 0b100000000, 0b100000000, 0b011111110, 0b000000000, 0b000000000, 0b000000000, // 0x63 'c'
    0b000000001, 0b000000001, 0b000000001, 0b011111001, 0b100000111, 0b100000001, 0b100000001, 0b100000001, 0b011111111, 0b000000000, 0b000000000, 0b000000000, // 0x64 'd'
    0b000000000, 0b000000000, 0b000000000, 0b011111110, 0b100000001, 0b111111111, 0b100000000, 0b100000000, 0b011111110, 0b000000000, 0b000000000, 0b000000000, // 0x65 'e'
    0b000011110, 0b000100001, 0b000100000, 0b000100000, 0b111111000, 0b000100000, 0b000100000, 0b000100000, 0b000100000, 0b000000000, 0b000000000, 0b000000000, // 0x66 'f'
    0b000000000, 0b000000000, 0b000000000, 0b011111111, 0b100000001, 0b100000001, 0b010000001, 0b011111111, 0b000000001, 0b000000001, 0b000000001, 0b011111110, // 0x67 'g'
    0b100000000, 0b100000000, 0b100000000, 0b100111110, 0b111000001, 0b100000001, 0b100000001, 0b100000001, 0b100000001, 0b000000000, 0b000000000, 0b000000000, // 0x68 'h'
    0b000010000, 0b000000000, 0b000000000, 0b000110000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b011111110, 0b000000000, 0b000000000, 0b000000000, // 0x69 'i'
    0b000000010, 0b000000000, 0b000000000, 0b000001110, 0b000000010, 0b000000010, 0b000000010, 0b000000010, 0b000000010, 0b000000010, 0b100000010, 0b011111100, // 0x6A 'j'
    0b100000000, 0b100000000, 0b100000000, 0b100001000, 0b100010000, 0b111100000, 0b100010000, 0b100010000, 0b100001000, 0b000000000, 0b000000000, 0b000000000, // 0x6B 'k'
    0b000110000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b011111110, 0b000000000, 0b000000000, 0b000000000, // 0x6C 'l'
    0b000000000, 0b000000000, 0b000000000, 0b111101110, 0b100010001, 0b100010001, 0b100010001, 0b100010001, 0b100010001, 0b000000000, 0b000000000, 0b000000000, // 0x6D 'm'
    0b000000000, 0b000000000, 0b000000000, 0b100111110, 0b111000001, 0b100000001, 0b100000001, 0b100000001, 0b100000001, 0b000000000, 0b000000000, 0b000000000, // 0x6E 'n'
    0b000000000, 0b000000000, 0b000000000, 0b011111110, 0b100000001, 0b100000001, 0b100000001, 0b100000001, 0b011111110, 0b000000000, 0b000000000, 0b000000000, // 0x6F 'o'
    0b000000000, 0b000000000, 0b000000000, 0b111111110, 0b100000001, 0b100000001, 0b100000010, 0b111111110, 0b100000000, 0b100000000, 0b100000000, 0b100000000, // 0x70 'p'
    0b000000000, 0b000000000, 0b000000000, 0b011111111, 0b100000001, 0b100000001, 0b010000001, 0b011111111, 0b000000001, 0b000000001, 0b000000001, 0b000000001, // 0x71 'q'
    0b000000000, 0b000000000, 0b000000000, 0b100111110, 0b111000001, 0b100000000, 0b100000000, 0b100000000, 0b100000000, 0b000000000, 0b000000000, 0b000000000, // 0x72 'r'
    0b000000000, 0b000000000, 0b000000000, 0b011111111, 0b100000000, 0b011111110, 0b000000001, 0b000000001, 0b111111110, 0b000000000, 0b000000000, 0b000000000, // 0x73 's'
    0b000100000, 0b000100000, 0b000100000, 0b111111110, 0b000100000, 0b000100000, 0b000100000, 0b000100001, 0b000011110, 0b000000000, 0b000000000, 0b000000000, // 0x74 't'
    0b000000000, 0b000000000, 0b000000000, 0b100000001, 0b100000001, 0b100000001, 0b100000001, 0b100000011, 0b011111101, 0b000000000, 0b000000000, 0b000000000, // 0x75 'u'
    0b000000000, 0b000000000, 0b000000000, 0b100000001, 0b100000001, 0b010000010, 0b001000100, 0b000101000, 0b000010000, 0b000000000, 0b000000000, 0b000000000, // 0x76 'v'
    0b000000000, 0b000000000, 0b000000000, 0b100000001, 0b100000001, 0b100010001, 0b100101001, 0b100101001, 0b011000110, 0b000000000, 0b000000000, 0b000000000, // 0x77 'w'
    0b000000000, 0b000000000, 0b000000000, 0b100000001, 0b010000010, 0b000010000, 0b000000000, 0b010000010, 0b100000001, 0b000000000, 0b000000000, 0b000000000, // 0x78 'x'
    0b000000000, 0b000000000, 0b000000000, 0b100000001, 0b100000001, 0b100000001, 0b010000001, 0b011111111, 0b000000001, 0b000000001, 0b000000001, 0b011111110, // 0x79 'y'
    0b000000000, 0b000000000, 0b000000000, 0b111111111, 0b000001110, 0b000010000, 0b000100000, 0b011100000, 0b111111111, 0b000000000, 0b000000000, 0b000000000, // 0x7A 'z'
    0b000001110, 0b000010000, 0b000010000, 0b000010000, 0b011100000, 0b000010000, 0b000010000, 0b000010000, 0b000001110, 0b000000000, 0b000000000, 0b000000000, // 0x7B '{'
    0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, 0b000010000, // 0x7C '|'
    0b011100000, 0b000010000, 0b000010000, 0b000010000, 0b000001110, 0b000010000, 0b000010000, 0b000010000, 0b011100000, 0b000000000, 0b000000000, 0b000000000, // 0x7D '}'
    0b000000000, 0b000000000, 0b000000000, 0b011100001, 0b100010001, 0b100001110, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, // 0x7E '~'
];
