//! Compiled-in 8x16 monospace glyph table
//!
//! One bit per pixel, row-major, one byte per row with the most-significant
//! bit as the leftmost column. Glyph index is the character code; codes at or
//! above [`NUM_GLYPHS`] have no glyph and render nothing. Control codes are
//! present as empty cells so the table indexes directly.

/// Glyph cell width in pixels
pub const FONT_WIDTH: usize = 8;

/// Glyph cell height in pixels
pub const FONT_HEIGHT: usize = 16;

/// Number of glyphs in the table (7-bit ASCII)
pub const NUM_GLYPHS: usize = 128;

/// Row-major glyph bitmaps, one byte per row
#[rustfmt::skip]
pub const GLYPHS: [[u8; FONT_HEIGHT]; NUM_GLYPHS] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x00 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x01 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x02 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x03 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x04 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x05 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x06 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x07 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x08 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x09 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0a 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0b 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0c 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0d 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0e 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0f 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x10 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x11 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x12 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x13 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x14 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x15 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x16 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x17 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x18 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x19 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1a 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1b 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1c 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1d 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1e 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1f 
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x20 space
    [0x00, 0x00, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00, 0x00, 0x08, 0x08, 0x00, 0x00, 0x00], // 0x21 !
    [0x00, 0x00, 0x14, 0x36, 0x36, 0x36, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x22 "
    [0x00, 0x00, 0x00, 0x0b, 0x12, 0x7f, 0x16, 0x16, 0x7f, 0xff, 0x24, 0x2c, 0x00, 0x00, 0x00, 0x00], // 0x23 #
    [0x00, 0x00, 0x08, 0x0c, 0x3e, 0x28, 0x28, 0x3c, 0x0e, 0x0b, 0x0b, 0x7e, 0x08, 0x08, 0x00, 0x00], // 0x24 $
    [0x00, 0x00, 0x00, 0x70, 0x48, 0x48, 0x73, 0x0c, 0x67, 0x0d, 0x09, 0x0f, 0x02, 0x00, 0x00, 0x00], // 0x25 %
    [0x00, 0x00, 0x1c, 0x30, 0x20, 0x30, 0x30, 0x78, 0x4d, 0x45, 0x43, 0x77, 0x19, 0x00, 0x00, 0x00], // 0x26 &
    [0x00, 0x00, 0x08, 0x08, 0x08, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x27 '
    [0x00, 0x00, 0x04, 0x0c, 0x08, 0x08, 0x18, 0x18, 0x18, 0x18, 0x08, 0x08, 0x08, 0x04, 0x00, 0x00], // 0x28 (
    [0x00, 0x00, 0x10, 0x18, 0x08, 0x08, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x08, 0x08, 0x10, 0x00, 0x00], // 0x29 )
    [0x00, 0x00, 0x08, 0x08, 0x3e, 0x1c, 0x2a, 0x08, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x2a *
    [0x00, 0x00, 0x00, 0x00, 0x08, 0x08, 0x08, 0x7f, 0x7f, 0x08, 0x08, 0x08, 0x00, 0x00, 0x00, 0x00], // 0x2b +
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x0c, 0x08, 0x18, 0x00, 0x00], // 0x2c ,
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1c, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x2d -
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x08, 0x08, 0x00, 0x00, 0x00], // 0x2e .
    [0x00, 0x00, 0x02, 0x02, 0x06, 0x04, 0x0c, 0x08, 0x18, 0x10, 0x30, 0x20, 0x20, 0x40, 0x00, 0x00], // 0x2f /
    [0x00, 0x00, 0x1c, 0x36, 0x22, 0x63, 0x6b, 0x6b, 0x63, 0x63, 0x22, 0x3e, 0x1c, 0x00, 0x00, 0x00], // 0x30 0
    [0x00, 0x00, 0x1c, 0x3c, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x3f, 0x1e, 0x00, 0x00, 0x00], // 0x31 1
    [0x00, 0x00, 0x3c, 0x66, 0x02, 0x02, 0x02, 0x04, 0x0c, 0x18, 0x30, 0x7e, 0x3e, 0x00, 0x00, 0x00], // 0x32 2
    [0x00, 0x00, 0x3c, 0x26, 0x02, 0x02, 0x1e, 0x1e, 0x02, 0x03, 0x03, 0x7e, 0x3c, 0x00, 0x00, 0x00], // 0x33 3
    [0x00, 0x00, 0x06, 0x0e, 0x0e, 0x16, 0x36, 0x26, 0x46, 0x7f, 0x06, 0x06, 0x00, 0x00, 0x00, 0x00], // 0x34 4
    [0x00, 0x00, 0x3e, 0x3e, 0x20, 0x20, 0x3c, 0x06, 0x03, 0x03, 0x02, 0x7e, 0x38, 0x00, 0x00, 0x00], // 0x35 5
    [0x00, 0x00, 0x1e, 0x32, 0x20, 0x60, 0x7e, 0x63, 0x63, 0x63, 0x23, 0x3e, 0x1c, 0x00, 0x00, 0x00], // 0x36 6
    [0x00, 0x00, 0x7f, 0x3e, 0x02, 0x06, 0x04, 0x04, 0x0c, 0x08, 0x18, 0x10, 0x10, 0x00, 0x00, 0x00], // 0x37 7
    [0x00, 0x00, 0x1c, 0x22, 0x63, 0x22, 0x3e, 0x3e, 0x63, 0x63, 0x63, 0x3e, 0x1c, 0x00, 0x00, 0x00], // 0x38 8
    [0x00, 0x00, 0x1c, 0x26, 0x62, 0x63, 0x63, 0x23, 0x3f, 0x03, 0x02, 0x3e, 0x18, 0x00, 0x00, 0x00], // 0x39 9
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x08, 0x00, 0x00, 0x00, 0x08, 0x08, 0x08, 0x00, 0x00, 0x00], // 0x3a :
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x08, 0x00, 0x00, 0x00, 0x08, 0x0c, 0x08, 0x18, 0x00, 0x00], // 0x3b ;
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x1e, 0x70, 0x60, 0x1c, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x3c <
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7f, 0x00, 0x00, 0x7f, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x3d =
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x3c, 0x07, 0x03, 0x1c, 0x70, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x3e >
    [0x00, 0x00, 0x1c, 0x26, 0x02, 0x02, 0x04, 0x08, 0x08, 0x08, 0x00, 0x08, 0x08, 0x00, 0x00, 0x00], // 0x3f ?
    [0x00, 0x00, 0x00, 0x1e, 0x21, 0x41, 0x4f, 0x59, 0xd1, 0xd1, 0x4b, 0x46, 0x60, 0x30, 0x0e, 0x00], // 0x40 @
    [0x00, 0x00, 0x08, 0x1c, 0x14, 0x14, 0x36, 0x22, 0x22, 0x7f, 0x63, 0x41, 0x41, 0x00, 0x00, 0x00], // 0x41 A
    [0x00, 0x00, 0x3c, 0x7e, 0x63, 0x63, 0x7e, 0x7e, 0x63, 0x61, 0x63, 0x7e, 0x38, 0x00, 0x00, 0x00], // 0x42 B
    [0x00, 0x00, 0x0e, 0x31, 0x20, 0x60, 0x60, 0x60, 0x60, 0x60, 0x20, 0x1f, 0x0e, 0x00, 0x00, 0x00], // 0x43 C
    [0x00, 0x00, 0x78, 0x7e, 0x62, 0x63, 0x63, 0x63, 0x63, 0x63, 0x62, 0x7c, 0x30, 0x00, 0x00, 0x00], // 0x44 D
    [0x00, 0x00, 0x3f, 0x3e, 0x20, 0x20, 0x3e, 0x3e, 0x20, 0x20, 0x20, 0x3f, 0x3e, 0x00, 0x00, 0x00], // 0x45 E
    [0x00, 0x00, 0x3f, 0x3f, 0x20, 0x20, 0x3e, 0x3e, 0x20, 0x20, 0x20, 0x20, 0x20, 0x00, 0x00, 0x00], // 0x46 F
    [0x00, 0x00, 0x1e, 0x33, 0x20, 0x60, 0x60, 0x67, 0x67, 0x63, 0x23, 0x3f, 0x0c, 0x00, 0x00, 0x00], // 0x47 G
    [0x00, 0x00, 0x41, 0x63, 0x63, 0x63, 0x7f, 0x7f, 0x63, 0x63, 0x63, 0x63, 0x00, 0x00, 0x00, 0x00], // 0x48 H
    [0x00, 0x00, 0x3e, 0x3e, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x3e, 0x3e, 0x00, 0x00, 0x00], // 0x49 I
    [0x00, 0x00, 0x1e, 0x1e, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x7c, 0x38, 0x00, 0x00, 0x00], // 0x4a J
    [0x00, 0x00, 0x41, 0x62, 0x64, 0x6c, 0x78, 0x78, 0x6c, 0x66, 0x62, 0x63, 0x01, 0x00, 0x00, 0x00], // 0x4b K
    [0x00, 0x00, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x3f, 0x3f, 0x00, 0x00, 0x00], // 0x4c L
    [0x00, 0x00, 0x63, 0x63, 0x63, 0x55, 0x55, 0x49, 0x49, 0x41, 0x41, 0x41, 0x41, 0x00, 0x00, 0x00], // 0x4d M
    [0x00, 0x00, 0x61, 0x73, 0x73, 0x73, 0x6b, 0x6b, 0x6f, 0x67, 0x67, 0x63, 0x02, 0x00, 0x00, 0x00], // 0x4e N
    [0x00, 0x00, 0x1c, 0x36, 0x63, 0x63, 0x63, 0x63, 0x63, 0x63, 0x22, 0x3e, 0x1c, 0x00, 0x00, 0x00], // 0x4f O
    [0x00, 0x00, 0x3c, 0x3f, 0x23, 0x21, 0x23, 0x3e, 0x38, 0x20, 0x20, 0x20, 0x20, 0x00, 0x00, 0x00], // 0x50 P
    [0x00, 0x00, 0x1c, 0x36, 0x63, 0x63, 0x63, 0x63, 0x63, 0x63, 0x22, 0x3e, 0x1c, 0x02, 0x00, 0x00], // 0x51 Q
    [0x00, 0x00, 0x7c, 0x7e, 0x63, 0x63, 0x62, 0x7c, 0x66, 0x62, 0x63, 0x61, 0x00, 0x00, 0x00, 0x00], // 0x52 R
    [0x00, 0x00, 0x1e, 0x32, 0x60, 0x60, 0x30, 0x1e, 0x03, 0x03, 0x03, 0x7e, 0x1c, 0x00, 0x00, 0x00], // 0x53 S
    [0x00, 0x00, 0x7f, 0x7f, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00, 0x00, 0x00], // 0x54 T
    [0x00, 0x00, 0x63, 0x63, 0x63, 0x63, 0x63, 0x63, 0x63, 0x63, 0x63, 0x3e, 0x1c, 0x00, 0x00, 0x00], // 0x55 U
    [0x00, 0x00, 0x41, 0x41, 0x63, 0x22, 0x22, 0x32, 0x36, 0x14, 0x1c, 0x1c, 0x08, 0x00, 0x00, 0x00], // 0x56 V
    [0x00, 0x00, 0xc1, 0xc1, 0x41, 0x49, 0x5d, 0x5d, 0x55, 0x77, 0x77, 0x22, 0x22, 0x00, 0x00, 0x00], // 0x57 W
    [0x00, 0x00, 0x41, 0x23, 0x32, 0x14, 0x1c, 0x0c, 0x1c, 0x36, 0x22, 0x63, 0x41, 0x00, 0x00, 0x00], // 0x58 X
    [0x00, 0x00, 0x41, 0x63, 0x22, 0x36, 0x1c, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00, 0x00, 0x00], // 0x59 Y
    [0x00, 0x00, 0x3f, 0x3f, 0x02, 0x06, 0x04, 0x08, 0x18, 0x10, 0x20, 0x7f, 0x3f, 0x00, 0x00, 0x00], // 0x5a Z
    [0x00, 0x00, 0x1c, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x1c, 0x00, 0x00], // 0x5b [
    [0x00, 0x00, 0x40, 0x20, 0x20, 0x30, 0x10, 0x18, 0x08, 0x0c, 0x04, 0x06, 0x02, 0x02, 0x00, 0x00], // 0x5c \
    [0x00, 0x00, 0x1c, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x1c, 0x00, 0x00], // 0x5d ]
    [0x00, 0x00, 0x08, 0x1c, 0x32, 0x63, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x5e ^
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7f], // 0x5f _
    [0x00, 0x10, 0x10, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x60 `
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x3e, 0x02, 0x03, 0x3f, 0x63, 0x63, 0x67, 0x18, 0x00, 0x00, 0x00], // 0x61 a
    [0x00, 0x00, 0x60, 0x60, 0x60, 0x7e, 0x63, 0x63, 0x63, 0x63, 0x63, 0x7e, 0x2c, 0x00, 0x00, 0x00], // 0x62 b
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x1e, 0x30, 0x20, 0x20, 0x20, 0x20, 0x1a, 0x0e, 0x00, 0x00, 0x00], // 0x63 c
    [0x00, 0x00, 0x03, 0x03, 0x03, 0x3f, 0x23, 0x63, 0x63, 0x63, 0x63, 0x3f, 0x18, 0x00, 0x00, 0x00], // 0x64 d
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x3e, 0x23, 0x61, 0x7f, 0x60, 0x60, 0x37, 0x0e, 0x00, 0x00, 0x00], // 0x65 e
    [0x00, 0x00, 0x0f, 0x08, 0x08, 0x3e, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00, 0x00, 0x00], // 0x66 f
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x3f, 0x23, 0x63, 0x63, 0x63, 0x63, 0x3f, 0x0a, 0x02, 0x3e, 0x18], // 0x67 g
    [0x00, 0x00, 0x20, 0x20, 0x20, 0x3e, 0x22, 0x23, 0x23, 0x23, 0x23, 0x23, 0x20, 0x00, 0x00, 0x00], // 0x68 h
    [0x00, 0x00, 0x08, 0x08, 0x00, 0x38, 0x08, 0x08, 0x08, 0x08, 0x08, 0x3e, 0x3e, 0x00, 0x00, 0x00], // 0x69 i
    [0x00, 0x00, 0x0c, 0x00, 0x00, 0x3c, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x38, 0x20], // 0x6a j
    [0x00, 0x00, 0x20, 0x20, 0x20, 0x22, 0x24, 0x38, 0x3c, 0x24, 0x22, 0x23, 0x21, 0x00, 0x00, 0x00], // 0x6b k
    [0x00, 0x00, 0x38, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x0e, 0x06, 0x00, 0x00, 0x00], // 0x6c l
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x7f, 0x49, 0x49, 0x49, 0x49, 0x49, 0x49, 0x49, 0x00, 0x00, 0x00], // 0x6d m
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x3e, 0x22, 0x23, 0x23, 0x23, 0x23, 0x23, 0x20, 0x00, 0x00, 0x00], // 0x6e n
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x3e, 0x22, 0x63, 0x63, 0x63, 0x63, 0x3e, 0x1c, 0x00, 0x00, 0x00], // 0x6f o
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x7e, 0x63, 0x63, 0x63, 0x63, 0x63, 0x7e, 0x6c, 0x60, 0x60, 0x00], // 0x70 p
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x3f, 0x23, 0x63, 0x63, 0x63, 0x63, 0x37, 0x1b, 0x03, 0x03, 0x00], // 0x71 q
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x17, 0x18, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00, 0x00], // 0x72 r
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x3e, 0x20, 0x20, 0x3c, 0x06, 0x02, 0x36, 0x1c, 0x00, 0x00, 0x00], // 0x73 s
    [0x00, 0x00, 0x00, 0x18, 0x18, 0x7e, 0x18, 0x18, 0x18, 0x18, 0x18, 0x0e, 0x06, 0x00, 0x00, 0x00], // 0x74 t
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x23, 0x23, 0x23, 0x23, 0x23, 0x23, 0x3f, 0x18, 0x00, 0x00, 0x00], // 0x75 u
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x61, 0x22, 0x22, 0x36, 0x14, 0x14, 0x1c, 0x08, 0x00, 0x00, 0x00], // 0x76 v
    [0x00, 0x00, 0x00, 0x00, 0x00, 0xc1, 0x41, 0x49, 0x49, 0x77, 0x36, 0x36, 0x22, 0x00, 0x00, 0x00], // 0x77 w
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x22, 0x36, 0x1c, 0x08, 0x1c, 0x36, 0x22, 0x41, 0x00, 0x00, 0x00], // 0x78 x
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x61, 0x23, 0x22, 0x36, 0x14, 0x1c, 0x0c, 0x08, 0x18, 0x30, 0x20], // 0x79 y
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x3f, 0x02, 0x04, 0x08, 0x18, 0x30, 0x3e, 0x3e, 0x00, 0x00, 0x00], // 0x7a z
    [0x00, 0x00, 0x0e, 0x08, 0x08, 0x08, 0x08, 0x18, 0x30, 0x08, 0x08, 0x08, 0x08, 0x0c, 0x06, 0x00], // 0x7b {
    [0x00, 0x00, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08], // 0x7c |
    [0x00, 0x00, 0x38, 0x08, 0x08, 0x08, 0x08, 0x0c, 0x06, 0x08, 0x08, 0x08, 0x08, 0x18, 0x30, 0x00], // 0x7d }
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x38, 0x4f, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x7e ~
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x7f 
];
