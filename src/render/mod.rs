//! Frame rendering: letterbox fitting, caption overlay, wire conversion
//!
//! The pipeline works on an intermediate full-panel RGB888 buffer so the
//! caption can be composited before the lossy conversion to the panel's
//! packed format.

pub mod fit;
pub mod font;
pub mod text;

use crate::ili9341::{color, FRAME_BYTES, HEIGHT, WIDTH};

/// Full-panel RGB888 frame buffer, exactly `WIDTH * HEIGHT` pixels.
///
/// Coordinates handed to [`Frame::set_pixel`] must already be in range;
/// callers bound-check before writing, never after.
pub struct Frame {
    data: Vec<u8>,
}

impl Frame {
    /// All-black frame (the letterbox background).
    pub fn black() -> Self {
        Frame {
            data: vec![0; WIDTH * HEIGHT * 3],
        }
    }

    /// Adopt an already panel-sized RGB888 buffer.
    pub fn from_rgb(data: Vec<u8>) -> Self {
        assert_eq!(data.len(), WIDTH * HEIGHT * 3);
        Frame { data }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let off = (y * WIDTH + x) * 3;
        self.data[off..off + 3].copy_from_slice(&rgb);
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let off = (y * WIDTH + x) * 3;
        [self.data[off], self.data[off + 1], self.data[off + 2]]
    }

    /// Convert to the panel's packed 16-bit format in wire byte order.
    pub fn to_wire(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(FRAME_BYTES);
        for px in self.data.chunks_exact(3) {
            out.extend_from_slice(&color::rgb565_wire(px[0], px[1], px[2]));
        }
        out
    }
}
