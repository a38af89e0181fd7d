//! ILI9341 TFT Display Driver
//!
//! Drives the 320x240 panel found on the pi-Stomp hardware over spidev plus
//! two GPIO lines (data/command select and chip select).
//!
//! This driver is loosely modeled after the common
//! [epd-waveshare](https://github.com/caemor/epd-waveshare) driver layout but
//! built for a single job: push one full frame out as fast as possible during
//! boot.
//!
//! ### Usage
//!
//! 1. build a packed RGB565 frame (see [`crate::render`] and
//!    [`crate::ili9341::color`]),
//! 1. run [`driver::Ili9341::init`] once per invocation (the sleep-out /
//!    display-on half is skipped when the boot marker says it already ran),
//! 1. blit with [`driver::Ili9341::blit_full_frame`].

pub mod color;
pub mod driver;
pub mod interface;

mod cmd;
mod flag;
pub mod pins;

/// Display width, pixels horizontally (landscape orientation)
pub const WIDTH: usize = 320;

/// Display height, pixels vertically
pub const HEIGHT: usize = 240;

/// Size of one full frame in the panel's native packed 16-bit format
pub const FRAME_BYTES: usize = WIDTH * HEIGHT * 2;
