//! Letterbox-fit an arbitrary decoded image into the fixed panel grid
//!
//! Uniform scale, centered, black bars, nearest-neighbour sampling. No
//! anti-aliasing: this runs during boot and the panel is small enough that
//! quality is not worth the time.

use image::RgbImage;

use super::Frame;
use crate::ili9341::{HEIGHT, WIDTH};

/// Scale `src` to fit entirely within the panel and center it over black.
pub fn fit(src: &RgbImage) -> Frame {
    let (sw, sh) = (src.width() as usize, src.height() as usize);

    // Exact-size sources skip the scale math entirely so their output is
    // bit-identical to the decode, independent of float rounding.
    if sw == WIDTH && sh == HEIGHT {
        return Frame::from_rgb(src.as_raw().clone());
    }

    let scale = (WIDTH as f32 / sw as f32).min(HEIGHT as f32 / sh as f32);
    let dw = (sw as f32 * scale) as usize;
    let dh = (sh as f32 * scale) as usize;
    let ox = (WIDTH - dw) / 2;
    let oy = (HEIGHT - dh) / 2;

    let mut frame = Frame::black();
    for y in 0..dh {
        let srcy = ((y as f32 / scale) as usize).min(sh - 1);
        for x in 0..dw {
            let srcx = ((x as f32 / scale) as usize).min(sw - 1);
            frame.set_pixel(ox + x, oy + y, src.get_pixel(srcx as u32, srcy as u32).0);
        }
    }
    frame
}
