//! Fixed-width bitmap fonts
//!
//! Three fonts cover the printable ASCII range `0x20..=0x7E`:
//!
//! | Font   | Glyph  | Bytes | Alignment in a bank      |
//! |--------|--------|-------|--------------------------|
//! | Small  | 4 x 6  | 3     | top, center, bottom      |
//! | Medium | 5 x 7  | 5     | top, bottom              |
//! | Large  | 6 x 8  | 6     | fills the bank           |
//!
//! Glyphs are stored column by column with the top row in bit 0, the same
//! layout as a framebuffer bank. Small glyphs are packed: four 6-bit
//! columns share three bytes.
//!
//! ## Example
//!
//! ```
//! use ssd1306_fb::font::{pack_small, unpack_small};
//! use ssd1306_fb::{Align, Font, TextStyle};
//!
//! let columns = [30, 5, 30, 0];
//! assert_eq!(unpack_small(pack_small(columns)), columns);
//!
//! // Legacy option byte: medium font, bottom aligned
//! assert_eq!(
//!     TextStyle::from_option(0x22),
//!     Some(TextStyle::new(Font::Medium, Align::Bottom))
//! );
//! assert_eq!(TextStyle::from_option(0x80), None);
//! ```

/// First character with a glyph
pub const FIRST_CHAR: u8 = 0x20;

/// Last character with a glyph
pub const LAST_CHAR: u8 = 0x7E;

/// Widest glyph of all fonts
pub const MAX_GLYPH_WIDTH: usize = 6;

/// 4x6 glyphs, packed as four 6-bit columns in three bytes
pub(crate) static SMALL_FONT: [u8; 285] = [
    0x00, 0x00, 0x00, // space
    0x01, 0x70, 0x00, // !
    0x0C, 0x00, 0xC0, // "
    0x7C, 0xA7, 0xC0, // #
    0x29, 0xF1, 0x40, // $
    0x24, 0x44, 0x80, // %
    0x3D, 0x77, 0x00, // &
    0x00, 0x30, 0x00, // '
    0x00, 0xE4, 0x40, // (
    0x44, 0xE0, 0x00, // )
    0x14, 0x21, 0x40, // *
    0x10, 0xE1, 0x00, // +
    0x40, 0x80, 0x00, // ,
    0x10, 0x41, 0x00, // -
    0x01, 0x00, 0x00, // .
    0x60, 0x40, 0xC0, // /
    0x79, 0x13, 0xC0, // 0
    0x09, 0xF0, 0x00, // 1
    0x65, 0x54, 0x80, // 2
    0x45, 0x52, 0x80, // 3
    0x1C, 0x47, 0xC0, // 4
    0x5D, 0x52, 0x40, // 5
    0x79, 0x57, 0x40, // 6
    0x64, 0x50, 0xC0, // 7
    0x7D, 0x57, 0xC0, // 8
    0x5D, 0x53, 0xC0, // 9
    0x00, 0xA0, 0x00, // :
    0x40, 0xA0, 0x00, // ;
    0x10, 0xA4, 0x40, // <
    0x28, 0xA2, 0x80, // =
    0x44, 0xA1, 0x00, // >
    0x05, 0x50, 0xC0, // ?
    0x39, 0x55, 0x80, // @
    0x78, 0x57, 0x80, // A
    0x7D, 0x52, 0x80, // B
    0x39, 0x14, 0x40, // C
    0x7D, 0x13, 0x80, // D
    0x7D, 0x55, 0x40, // E
    0x7C, 0x51, 0x40, // F
    0x39, 0x57, 0x40, // G
    0x7C, 0x47, 0xC0, // H
    0x45, 0xF4, 0x40, // I
    0x21, 0x03, 0xC0, // J
    0x7C, 0x46, 0xC0, // K
    0x7D, 0x04, 0x00, // L
    0x7C, 0x67, 0xC0, // M
    0x7C, 0xE7, 0xC0, // N
    0x39, 0x13, 0x80, // O
    0x7C, 0x50, 0x80, // P
    0x39, 0x97, 0x80, // Q
    0x7C, 0xD5, 0x80, // R
    0x49, 0x52, 0x40, // S
    0x05, 0xF0, 0x40, // T
    0x3D, 0x07, 0xC0, // U
    0x1D, 0x81, 0xC0, // V
    0x7C, 0xC7, 0xC0, // W
    0x6C, 0x46, 0xC0, // X
    0x0D, 0xC0, 0xC0, // Y
    0x65, 0x54, 0xC0, // Z
    0x7D, 0x14, 0x40, // [
    0x08, 0x42, 0x00, // backslash
    0x45, 0x17, 0xC0, // ]
    0x08, 0x10, 0x80, // ^
    0x41, 0x04, 0x00, // _
    0x04, 0x20, 0x00, // `
    0x69, 0x67, 0x00, // a
    0x7D, 0x23, 0x00, // b
    0x31, 0x24, 0x80, // c
    0x31, 0x27, 0xC0, // d
    0x31, 0xA5, 0x80, // e
    0x11, 0xE1, 0x40, // f
    0xB2, 0xA7, 0x80, // g
    0x7C, 0x27, 0x00, // h
    0x01, 0xD0, 0x00, // i
    0x42, 0x07, 0x40, // j
    0x7C, 0xC4, 0x80, // k
    0x45, 0xF4, 0x00, // l
    0x78, 0xE7, 0x80, // m
    0x78, 0x27, 0x00, // n
    0x31, 0x23, 0x00, // o
    0xF9, 0x23, 0x00, // p
    0x31, 0x2F, 0x80, // q
    0x70, 0x20, 0x80, // r
    0x51, 0xE2, 0x80, // s
    0x09, 0xF4, 0x80, // t
    0x39, 0x07, 0x80, // u
    0x39, 0x83, 0x80, // v
    0x79, 0xC7, 0x80, // w
    0x48, 0xC4, 0x80, // x
    0x9A, 0x87, 0x80, // y
    0x69, 0xE5, 0x80, // z
    0x11, 0xF4, 0x40, // {
    0x01, 0xB0, 0x00, // |
    0x45, 0xF1, 0x00, // }
    0x08, 0x30, 0x40, // ~
];

/// 5x7 glyphs, one byte per column
pub(crate) static MEDIUM_FONT: [u8; 475] = [
    0x00, 0x00, 0x00, 0x00, 0x00, // space
    0x00, 0x00, 0x5F, 0x00, 0x00, // !
    0x00, 0x07, 0x00, 0x07, 0x00, // "
    0x14, 0x7F, 0x14, 0x7F, 0x14, // #
    0x24, 0x2A, 0x7F, 0x2A, 0x12, // $
    0x23, 0x13, 0x08, 0x64, 0x62, // %
    0x36, 0x49, 0x55, 0x22, 0x50, // &
    0x00, 0x05, 0x03, 0x00, 0x00, // '
    0x00, 0x1C, 0x22, 0x41, 0x00, // (
    0x00, 0x41, 0x22, 0x1C, 0x00, // )
    0x14, 0x08, 0x3E, 0x08, 0x14, // *
    0x08, 0x08, 0x3E, 0x08, 0x08, // +
    0x00, 0x50, 0x30, 0x00, 0x00, // ,
    0x08, 0x08, 0x08, 0x08, 0x08, // -
    0x00, 0x60, 0x60, 0x00, 0x00, // .
    0x20, 0x10, 0x08, 0x04, 0x02, // /
    0x3E, 0x51, 0x49, 0x45, 0x3E, // 0
    0x00, 0x42, 0x7F, 0x40, 0x00, // 1
    0x42, 0x61, 0x51, 0x49, 0x46, // 2
    0x21, 0x41, 0x45, 0x4B, 0x31, // 3
    0x18, 0x14, 0x12, 0x7F, 0x10, // 4
    0x27, 0x45, 0x45, 0x45, 0x39, // 5
    0x3C, 0x4A, 0x49, 0x49, 0x30, // 6
    0x01, 0x71, 0x09, 0x05, 0x03, // 7
    0x36, 0x49, 0x49, 0x49, 0x36, // 8
    0x06, 0x49, 0x49, 0x29, 0x1E, // 9
    0x00, 0x36, 0x36, 0x00, 0x00, // :
    0x00, 0x56, 0x36, 0x00, 0x00, // ;
    0x08, 0x14, 0x22, 0x41, 0x00, // <
    0x14, 0x14, 0x14, 0x14, 0x14, // =
    0x00, 0x41, 0x22, 0x14, 0x08, // >
    0x02, 0x01, 0x51, 0x09, 0x06, // ?
    0x32, 0x49, 0x79, 0x41, 0x3E, // @
    0x7E, 0x11, 0x11, 0x11, 0x7E, // A
    0x7F, 0x49, 0x49, 0x49, 0x36, // B
    0x3E, 0x41, 0x41, 0x41, 0x22, // C
    0x7F, 0x41, 0x41, 0x22, 0x1C, // D
    0x7F, 0x49, 0x49, 0x49, 0x41, // E
    0x7F, 0x09, 0x09, 0x09, 0x01, // F
    0x3E, 0x41, 0x49, 0x49, 0x7A, // G
    0x7F, 0x08, 0x08, 0x08, 0x7F, // H
    0x00, 0x41, 0x7F, 0x41, 0x00, // I
    0x20, 0x40, 0x41, 0x3F, 0x01, // J
    0x7F, 0x08, 0x14, 0x22, 0x41, // K
    0x7F, 0x40, 0x40, 0x40, 0x40, // L
    0x7F, 0x02, 0x0C, 0x02, 0x7F, // M
    0x7F, 0x04, 0x08, 0x10, 0x7F, // N
    0x3E, 0x41, 0x41, 0x41, 0x3E, // O
    0x7F, 0x09, 0x09, 0x09, 0x06, // P
    0x3E, 0x41, 0x51, 0x21, 0x5E, // Q
    0x7F, 0x09, 0x19, 0x29, 0x46, // R
    0x46, 0x49, 0x49, 0x49, 0x31, // S
    0x01, 0x01, 0x7F, 0x01, 0x01, // T
    0x3F, 0x40, 0x40, 0x40, 0x3F, // U
    0x1F, 0x20, 0x40, 0x20, 0x1F, // V
    0x3F, 0x40, 0x38, 0x40, 0x3F, // W
    0x63, 0x14, 0x08, 0x14, 0x63, // X
    0x07, 0x08, 0x70, 0x08, 0x07, // Y
    0x61, 0x51, 0x49, 0x45, 0x43, // Z
    0x00, 0x7F, 0x41, 0x41, 0x00, // [
    0x02, 0x04, 0x08, 0x10, 0x20, // backslash
    0x00, 0x41, 0x41, 0x7F, 0x00, // ]
    0x04, 0x02, 0x01, 0x02, 0x04, // ^
    0x40, 0x40, 0x40, 0x40, 0x40, // _
    0x00, 0x01, 0x02, 0x04, 0x00, // `
    0x20, 0x54, 0x54, 0x54, 0x78, // a
    0x7F, 0x48, 0x44, 0x44, 0x38, // b
    0x38, 0x44, 0x44, 0x44, 0x20, // c
    0x38, 0x44, 0x44, 0x48, 0x7F, // d
    0x38, 0x54, 0x54, 0x54, 0x18, // e
    0x08, 0x7E, 0x09, 0x01, 0x02, // f
    0x0C, 0x52, 0x52, 0x52, 0x3E, // g
    0x7F, 0x08, 0x04, 0x04, 0x78, // h
    0x00, 0x44, 0x7D, 0x40, 0x00, // i
    0x20, 0x40, 0x44, 0x3D, 0x00, // j
    0x7F, 0x10, 0x28, 0x44, 0x00, // k
    0x00, 0x41, 0x7F, 0x40, 0x00, // l
    0x7C, 0x04, 0x18, 0x04, 0x78, // m
    0x7C, 0x08, 0x04, 0x04, 0x78, // n
    0x38, 0x44, 0x44, 0x44, 0x38, // o
    0x7C, 0x14, 0x14, 0x14, 0x08, // p
    0x08, 0x14, 0x14, 0x18, 0x7C, // q
    0x7C, 0x08, 0x04, 0x04, 0x08, // r
    0x48, 0x54, 0x54, 0x54, 0x20, // s
    0x04, 0x3F, 0x44, 0x40, 0x20, // t
    0x3C, 0x40, 0x40, 0x20, 0x7C, // u
    0x1C, 0x20, 0x40, 0x20, 0x1C, // v
    0x3C, 0x40, 0x30, 0x40, 0x3C, // w
    0x44, 0x28, 0x10, 0x28, 0x44, // x
    0x0C, 0x50, 0x50, 0x50, 0x3C, // y
    0x44, 0x64, 0x54, 0x4C, 0x44, // z
    0x00, 0x08, 0x36, 0x41, 0x00, // {
    0x00, 0x00, 0x7F, 0x00, 0x00, // |
    0x00, 0x41, 0x36, 0x08, 0x00, // }
    0x08, 0x04, 0x08, 0x10, 0x08, // ~
];

/// 6x8 glyphs, one byte per column with a leading spacing column
pub(crate) static LARGE_FONT: [u8; 570] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // space
    0x00, 0x00, 0x00, 0x5F, 0x00, 0x00, // !
    0x00, 0x00, 0x07, 0x00, 0x07, 0x00, // "
    0x00, 0x14, 0x7F, 0x14, 0x7F, 0x14, // #
    0x00, 0x24, 0x2A, 0x7F, 0x2A, 0x12, // $
    0x00, 0x23, 0x13, 0x08, 0x64, 0x62, // %
    0x00, 0x36, 0x49, 0x55, 0x22, 0x50, // &
    0x00, 0x00, 0x05, 0x03, 0x00, 0x00, // '
    0x00, 0x00, 0x1C, 0x22, 0x41, 0x00, // (
    0x00, 0x00, 0x41, 0x22, 0x1C, 0x00, // )
    0x00, 0x14, 0x08, 0x3E, 0x08, 0x14, // *
    0x00, 0x08, 0x08, 0x3E, 0x08, 0x08, // +
    0x00, 0x00, 0x50, 0x30, 0x00, 0x00, // ,
    0x00, 0x08, 0x08, 0x08, 0x08, 0x08, // -
    0x00, 0x00, 0x60, 0x60, 0x00, 0x00, // .
    0x00, 0x20, 0x10, 0x08, 0x04, 0x02, // /
    0x00, 0x3E, 0x51, 0x49, 0x45, 0x3E, // 0
    0x00, 0x00, 0x42, 0x7F, 0x40, 0x00, // 1
    0x00, 0x42, 0x61, 0x51, 0x49, 0x46, // 2
    0x00, 0x21, 0x41, 0x45, 0x4B, 0x31, // 3
    0x00, 0x18, 0x14, 0x12, 0x7F, 0x10, // 4
    0x00, 0x27, 0x45, 0x45, 0x45, 0x39, // 5
    0x00, 0x3C, 0x4A, 0x49, 0x49, 0x30, // 6
    0x00, 0x01, 0x71, 0x09, 0x05, 0x03, // 7
    0x00, 0x36, 0x49, 0x49, 0x49, 0x36, // 8
    0x00, 0x06, 0x49, 0x49, 0x29, 0x1E, // 9
    0x00, 0x00, 0x36, 0x36, 0x00, 0x00, // :
    0x00, 0x00, 0x56, 0x36, 0x00, 0x00, // ;
    0x00, 0x08, 0x14, 0x22, 0x41, 0x00, // <
    0x00, 0x14, 0x14, 0x14, 0x14, 0x14, // =
    0x00, 0x00, 0x41, 0x22, 0x14, 0x08, // >
    0x00, 0x02, 0x01, 0x51, 0x09, 0x06, // ?
    0x00, 0x32, 0x49, 0x79, 0x41, 0x3E, // @
    0x00, 0x7E, 0x11, 0x11, 0x11, 0x7E, // A
    0x00, 0x7F, 0x49, 0x49, 0x49, 0x36, // B
    0x00, 0x3E, 0x41, 0x41, 0x41, 0x22, // C
    0x00, 0x7F, 0x41, 0x41, 0x22, 0x1C, // D
    0x00, 0x7F, 0x49, 0x49, 0x49, 0x41, // E
    0x00, 0x7F, 0x09, 0x09, 0x09, 0x01, // F
    0x00, 0x3E, 0x41, 0x49, 0x49, 0x7A, // G
    0x00, 0x7F, 0x08, 0x08, 0x08, 0x7F, // H
    0x00, 0x00, 0x41, 0x7F, 0x41, 0x00, // I
    0x00, 0x20, 0x40, 0x41, 0x3F, 0x01, // J
    0x00, 0x7F, 0x08, 0x14, 0x22, 0x41, // K
    0x00, 0x7F, 0x40, 0x40, 0x40, 0x40, // L
    0x00, 0x7F, 0x02, 0x0C, 0x02, 0x7F, // M
    0x00, 0x7F, 0x04, 0x08, 0x10, 0x7F, // N
    0x00, 0x3E, 0x41, 0x41, 0x41, 0x3E, // O
    0x00, 0x7F, 0x09, 0x09, 0x09, 0x06, // P
    0x00, 0x3E, 0x41, 0x51, 0x21, 0x5E, // Q
    0x00, 0x7F, 0x09, 0x19, 0x29, 0x46, // R
    0x00, 0x46, 0x49, 0x49, 0x49, 0x31, // S
    0x00, 0x01, 0x01, 0x7F, 0x01, 0x01, // T
    0x00, 0x3F, 0x40, 0x40, 0x40, 0x3F, // U
    0x00, 0x1F, 0x20, 0x40, 0x20, 0x1F, // V
    0x00, 0x3F, 0x40, 0x38, 0x40, 0x3F, // W
    0x00, 0x63, 0x14, 0x08, 0x14, 0x63, // X
    0x00, 0x07, 0x08, 0x70, 0x08, 0x07, // Y
    0x00, 0x61, 0x51, 0x49, 0x45, 0x43, // Z
    0x00, 0x00, 0x7F, 0x41, 0x41, 0x00, // [
    0x00, 0x02, 0x04, 0x08, 0x10, 0x20, // backslash
    0x00, 0x00, 0x41, 0x41, 0x7F, 0x00, // ]
    0x00, 0x04, 0x02, 0x01, 0x02, 0x04, // ^
    0x00, 0x40, 0x40, 0x40, 0x40, 0x40, // _
    0x00, 0x00, 0x01, 0x02, 0x04, 0x00, // `
    0x00, 0x20, 0x54, 0x54, 0x54, 0x78, // a
    0x00, 0x7F, 0x48, 0x44, 0x44, 0x38, // b
    0x00, 0x38, 0x44, 0x44, 0x44, 0x20, // c
    0x00, 0x38, 0x44, 0x44, 0x48, 0x7F, // d
    0x00, 0x38, 0x54, 0x54, 0x54, 0x18, // e
    0x00, 0x08, 0x7E, 0x09, 0x01, 0x02, // f
    0x00, 0x0C, 0x52, 0x52, 0x52, 0x3E, // g
    0x00, 0x7F, 0x08, 0x04, 0x04, 0x78, // h
    0x00, 0x00, 0x44, 0x7D, 0x40, 0x00, // i
    0x00, 0x20, 0x40, 0x44, 0x3D, 0x00, // j
    0x00, 0x7F, 0x10, 0x28, 0x44, 0x00, // k
    0x00, 0x00, 0x41, 0x7F, 0x40, 0x00, // l
    0x00, 0x7C, 0x04, 0x18, 0x04, 0x78, // m
    0x00, 0x7C, 0x08, 0x04, 0x04, 0x78, // n
    0x00, 0x38, 0x44, 0x44, 0x44, 0x38, // o
    0x00, 0x7C, 0x14, 0x14, 0x14, 0x08, // p
    0x00, 0x08, 0x14, 0x14, 0x18, 0x7C, // q
    0x00, 0x7C, 0x08, 0x04, 0x04, 0x08, // r
    0x00, 0x48, 0x54, 0x54, 0x54, 0x20, // s
    0x00, 0x04, 0x3F, 0x44, 0x40, 0x20, // t
    0x00, 0x3C, 0x40, 0x40, 0x20, 0x7C, // u
    0x00, 0x1C, 0x20, 0x40, 0x20, 0x1C, // v
    0x00, 0x3C, 0x40, 0x30, 0x40, 0x3C, // w
    0x00, 0x44, 0x28, 0x10, 0x28, 0x44, // x
    0x00, 0x0C, 0x50, 0x50, 0x50, 0x3C, // y
    0x00, 0x44, 0x64, 0x54, 0x4C, 0x44, // z
    0x00, 0x00, 0x08, 0x36, 0x41, 0x00, // {
    0x00, 0x00, 0x00, 0x7F, 0x00, 0x00, // |
    0x00, 0x00, 0x41, 0x36, 0x08, 0x00, // }
    0x00, 0x08, 0x04, 0x08, 0x10, 0x08, // ~
];

/// Font selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Font {
    /// 4 x 6 glyphs
    #[default]
    Small,
    /// 5 x 7 glyphs
    Medium,
    /// 6 x 8 glyphs
    Large,
}

impl Font {
    /// Glyph width in pixels, spacing included
    pub const fn width(self) -> u32 {
        match self {
            Self::Small => 4,
            Self::Medium => 5,
            Self::Large => 6,
        }
    }

    /// Glyph height in pixels
    pub const fn height(self) -> u32 {
        match self {
            Self::Small => 6,
            Self::Medium => 7,
            Self::Large => 8,
        }
    }

    /// Bytes per glyph in the font table
    const fn stored_size(self) -> usize {
        match self {
            Self::Small => 3,
            Self::Medium => 5,
            Self::Large => 6,
        }
    }

    const fn table(self) -> &'static [u8] {
        match self {
            Self::Small => &SMALL_FONT,
            Self::Medium => &MEDIUM_FONT,
            Self::Large => &LARGE_FONT,
        }
    }

    /// Look up the glyph for `c`
    ///
    /// Returns `None` for bytes outside `0x20..=0x7E`.
    pub fn glyph(self, c: u8) -> Option<Glyph> {
        if !(FIRST_CHAR..=LAST_CHAR).contains(&c) {
            return None;
        }
        let size = self.stored_size();
        let start = usize::from(c - FIRST_CHAR) * size;
        let stored = self.table().get(start..start + size)?;

        let mut columns = [0u8; MAX_GLYPH_WIDTH];
        match self {
            Self::Small => {
                let packed = [stored[0], stored[1], stored[2]];
                columns[..4].copy_from_slice(&unpack_small(packed));
            }
            Self::Medium | Self::Large => columns[..size].copy_from_slice(stored),
        }
        Some(Glyph {
            columns,
            width: self.width() as usize,
        })
    }
}

/// Vertical placement of a glyph inside its 8-row bank
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    /// Glyph starts on the top row of the bank
    #[default]
    Top,
    /// Glyph is centered in the bank
    Center,
    /// Glyph ends on the bottom row of the bank
    Bottom,
}

impl Align {
    /// Rows to shift a glyph of `font` down inside its bank
    ///
    /// Medium glyphs leave a single spare row, so centering them is the
    /// same as top alignment. Large glyphs fill the bank.
    pub const fn shift(self, font: Font) -> u32 {
        match (font, self) {
            (Font::Small, Self::Top) => 0,
            (Font::Small, Self::Center) => 1,
            (Font::Small, Self::Bottom) => 2,
            (Font::Medium, Self::Bottom) => 1,
            (Font::Medium, _) => 0,
            (Font::Large, _) => 0,
        }
    }
}

/// Font and alignment used by cursor printing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextStyle {
    /// Font to draw with
    pub font: Font,
    /// Placement inside the bank
    pub align: Align,
}

impl TextStyle {
    /// Option byte selecting the small font
    pub const OPTION_SMALL: u8 = 0x10;
    /// Option byte selecting the medium font
    pub const OPTION_MEDIUM: u8 = 0x20;
    /// Option byte selecting the large font
    pub const OPTION_LARGE: u8 = 0x40;

    /// Create a new style
    pub const fn new(font: Font, align: Align) -> Self {
        Self { font, align }
    }

    /// Decode a combined option byte
    ///
    /// The high nibble selects the font (`0x10` small, `0x20` medium,
    /// `0x40` large) and bits 0-1 the alignment (`0` top, `1` center,
    /// `2` bottom, `3` is read as bottom). Any other font nibble returns
    /// `None`.
    pub const fn from_option(option: u8) -> Option<Self> {
        let font = match option & 0xF0 {
            Self::OPTION_SMALL => Font::Small,
            Self::OPTION_MEDIUM => Font::Medium,
            Self::OPTION_LARGE => Font::Large,
            _ => return None,
        };
        let align = match option & 0x03 {
            0 => Align::Top,
            1 => Align::Center,
            _ => Align::Bottom,
        };
        Some(Self { font, align })
    }

    /// Rows to shift glyphs down inside their bank
    pub const fn shift(self) -> u32 {
        self.align.shift(self.font)
    }
}

/// Column bytes of one glyph
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    columns: [u8; MAX_GLYPH_WIDTH],
    width: usize,
}

impl Glyph {
    /// Column bytes, top row in bit 0
    pub fn columns(&self) -> &[u8] {
        &self.columns[..self.width]
    }

    /// Move every column down by `rows`
    #[must_use]
    pub fn shifted(mut self, rows: u32) -> Self {
        for column in &mut self.columns[..self.width] {
            *column <<= rows;
        }
        self
    }

    /// Swap set and cleared pixels in every column
    #[must_use]
    pub fn inverted(mut self) -> Self {
        for column in &mut self.columns[..self.width] {
            *column = !*column;
        }
        self
    }
}

/// Unpack a small glyph into four 6-bit columns
pub const fn unpack_small(packed: [u8; 3]) -> [u8; 4] {
    let [b0, b1, b2] = packed;
    [
        b0 >> 2,
        ((b0 & 0x03) << 4) | (b1 >> 4),
        ((b1 & 0x0F) << 2) | (b2 >> 6),
        b2 & 0x3F,
    ]
}

/// Pack four 6-bit columns into a small glyph
///
/// Bits above the sixth row are dropped.
pub const fn pack_small(columns: [u8; 4]) -> [u8; 3] {
    let [c0, c1, c2, c3] = columns;
    let (c0, c1, c2, c3) = (c0 & 0x3F, c1 & 0x3F, c2 & 0x3F, c3 & 0x3F);
    [
        (c0 << 2) | (c1 >> 4),
        ((c1 & 0x0F) << 4) | (c2 >> 2),
        ((c2 & 0x03) << 6) | c3,
    ]
}
