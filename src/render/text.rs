//! Caption overlay: one centered line of text near the bottom edge
//!
//! Set glyph bits overwrite the pixel with opaque white; unset bits leave the
//! buffer alone. Captions wider than the panel start at a negative x and the
//! off-panel columns are clipped pixel by pixel. The same glyph walk feeds
//! both pipelines: the RGB888 frame (decoded assets) and the already packed
//! RGB565 buffer (raw assets, where white is 0xFFFF in either byte order).

use super::font::{FONT_HEIGHT, FONT_WIDTH, GLYPHS, NUM_GLYPHS};
use super::Frame;
use crate::ili9341::{HEIGHT, WIDTH};

/// Caption foreground, opaque white
const TEXT_COLOR: [u8; 3] = [255, 255, 255];

/// Distance between the glyph baseline box and the bottom edge of the panel
const BOTTOM_PAD: usize = 16;

/// Walk every set glyph bit of `caption` and call `plot` for each one that
/// lands inside the panel. Characters without a glyph are skipped.
fn each_caption_pixel(caption: &str, mut plot: impl FnMut(usize, usize)) {
    let total_width = (caption.len() * FONT_WIDTH) as i32;
    let start_x = (WIDTH as i32 - total_width) / 2;
    let start_y = (HEIGHT - FONT_HEIGHT - BOTTOM_PAD) as i32;

    for (i, code) in caption.bytes().enumerate() {
        if usize::from(code) >= NUM_GLYPHS {
            continue;
        }
        let glyph = &GLYPHS[usize::from(code)];
        let glyph_x = start_x + (i * FONT_WIDTH) as i32;
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..FONT_WIDTH {
                if bits & (0x80 >> col) != 0 {
                    let x = glyph_x + col as i32;
                    let y = start_y + row as i32;
                    if (0..WIDTH as i32).contains(&x) && (0..HEIGHT as i32).contains(&y) {
                        plot(x as usize, y as usize);
                    }
                }
            }
        }
    }
}

/// Burn the caption into an RGB888 frame.
pub fn overlay(frame: &mut Frame, caption: &str) {
    each_caption_pixel(caption, |x, y| frame.set_pixel(x, y, TEXT_COLOR));
}

/// Burn the caption into a packed RGB565 wire buffer.
pub fn overlay_packed(buf: &mut [u8], caption: &str) {
    each_caption_pixel(caption, |x, y| {
        let off = (y * WIDTH + x) * 2;
        buf[off] = 0xFF;
        buf[off + 1] = 0xFF;
    });
}
