//! ILI9341 driver: wake/init sequencing, addressing window, bulk blit
//!
//! Init is split in two halves on purpose. Sleep-out and display-on are
//! gated by the boot marker because the settle delay after sleep-out costs
//! 120 ms and the panel keeps those states across invocations. Pixel format
//! and memory access control are reasserted on every run: another process may
//! have reprogrammed them since the wake, so they are treated as not sticky.

pub use display_interface::DisplayError;

use std::io::Write;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::ili9341::interface::DisplayInterface;
use crate::ili9341::{cmd::Cmd, flag::Flag, HEIGHT, WIDTH};
use crate::marker::InitMarker;

/// Hardware-mandated minimum settle time after Sleep Out (datasheet: 120 ms
/// before the next command when waking from sleep mode).
const SLPOUT_SETTLE_MS: u32 = 120;

/// ILI9341 panel driver.
///
/// ## Type Parameters
///
/// - `SPI` - SPI bus handle (`std::io::Write`, short writes allowed)
/// - `DC` - Data/Command output line
/// - `CS` - Chip select output line
/// - `DELAY` - Delay provider for the wake settle time
pub struct Ili9341<SPI, DC, CS, DELAY> {
    interface: DisplayInterface<SPI, DC, CS>,
    delay: DELAY,
}

impl<SPI, DC, CS, DELAY> Ili9341<SPI, DC, CS, DELAY>
where
    SPI: Write,
    DC: OutputPin,
    CS: OutputPin,
    DELAY: DelayNs,
{
    pub fn new(spi: SPI, dc: DC, cs: CS, delay: DELAY) -> Self {
        Ili9341 {
            interface: DisplayInterface::new(spi, dc, cs),
            delay,
        }
    }

    /// Bring the panel up for this invocation.
    ///
    /// The wake half runs only when `marker` says no invocation has done it
    /// yet this boot; the configuration half runs unconditionally.
    pub fn init(&mut self, marker: &InitMarker) -> Result<(), DisplayError> {
        if marker.is_set() {
            log::debug!("panel already woken this boot, skipping sleep-out");
        } else {
            log::info!("waking panel (first invocation this boot)");
            self.interface.cmd(Cmd::SLPOUT)?;
            self.delay.delay_ms(SLPOUT_SETTLE_MS);
            self.interface.cmd(Cmd::DISPON)?;
            if let Err(e) = marker.set() {
                // Not fatal: the next invocation just wakes the panel again.
                log::warn!("could not create {}: {}", marker.path().display(), e);
            }
        }

        // Reasserted every run, woken or not.
        self.interface
            .cmd_with_data(Cmd::PIXFMT, &[Flag::PIXEL_FORMAT_16BPP])?;
        self.interface
            .cmd_with_data(Cmd::MADCTL, &[Flag::MADCTL_LANDSCAPE_BGR])?;
        Ok(())
    }

    /// Program the addressing window: inclusive column and row ranges,
    /// each as a big-endian 16-bit start/end pair.
    pub fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), DisplayError> {
        let ca = [(x0 >> 8) as u8, x0 as u8, (x1 >> 8) as u8, x1 as u8];
        self.interface.cmd_with_data(Cmd::CASET, &ca)?;

        let pa = [(y0 >> 8) as u8, y0 as u8, (y1 >> 8) as u8, y1 as u8];
        self.interface.cmd_with_data(Cmd::PASET, &pa)
    }

    /// Stream packed RGB565 pixels into the current addressing window.
    pub fn write_pixels(&mut self, pixels: &[u8]) -> Result<(), DisplayError> {
        self.interface.cmd(Cmd::RAMWR)?;
        self.interface.data(pixels)
    }

    /// Blit one full frame: window over the whole panel, then the bulk write.
    pub fn blit_full_frame(&mut self, frame: &[u8]) -> Result<(), DisplayError> {
        self.set_window(0, 0, (WIDTH - 1) as u16, (HEIGHT - 1) as u16)?;
        self.write_pixels(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ili9341::interface::test_spy::{spy_interface, written_bytes, Log, SpyBus, SpyPin};
    use crate::ili9341::FRAME_BYTES;

    /// Delay spy recording every requested pause.
    struct SpyDelay(std::rc::Rc<std::cell::RefCell<Vec<u32>>>);

    impl DelayNs for SpyDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.0.borrow_mut().push(ns);
        }
    }

    fn spy_driver() -> (
        Ili9341<SpyBus, SpyPin, SpyPin, SpyDelay>,
        Log,
        std::rc::Rc<std::cell::RefCell<Vec<u32>>>,
    ) {
        let (iface, log) = spy_interface(vec![]);
        let delays = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let driver = Ili9341 {
            interface: iface,
            delay: SpyDelay(delays.clone()),
        };
        (driver, log, delays)
    }

    #[test]
    fn first_init_wakes_then_configures_and_sets_marker() {
        let dir = tempfile::tempdir().unwrap();
        let marker = InitMarker::new(dir.path().join("lcd.init"));
        let (mut driver, log, delays) = spy_driver();

        driver.init(&marker).unwrap();

        assert_eq!(
            written_bytes(&log),
            vec![
                0x11, // sleep out
                0x29, // display on
                0x3A, 0x55, // 16bpp
                0x36, 0xE8, // landscape BGR
            ]
        );
        // 120 ms settle between sleep-out and display-on
        assert_eq!(*delays.borrow(), vec![120_000_000]);
        assert!(marker.is_set());
    }

    #[test]
    fn second_init_skips_wake_but_still_configures() {
        let dir = tempfile::tempdir().unwrap();
        let marker = InitMarker::new(dir.path().join("lcd.init"));
        marker.set().unwrap();
        let (mut driver, log, delays) = spy_driver();

        driver.init(&marker).unwrap();

        assert_eq!(written_bytes(&log), vec![0x3A, 0x55, 0x36, 0xE8]);
        assert!(delays.borrow().is_empty());
    }

    #[test]
    fn init_survives_unwritable_marker() {
        let dir = tempfile::tempdir().unwrap();
        let marker = InitMarker::new(dir.path().join("missing-dir/lcd.init"));
        let (mut driver, log, _) = spy_driver();

        driver.init(&marker).unwrap();

        // full wake ran even though the marker could not be recorded
        assert_eq!(written_bytes(&log)[..2], [0x11, 0x29]);
        assert!(!marker.is_set());
    }

    #[test]
    fn window_encodes_big_endian_inclusive_ranges() {
        let (mut driver, log, _) = spy_driver();
        driver.set_window(0, 0, 319, 239).unwrap();
        assert_eq!(
            written_bytes(&log),
            vec![
                0x2A, 0x00, 0x00, 0x01, 0x3F, // columns 0..=319
                0x2B, 0x00, 0x00, 0x00, 0xEF, // rows 0..=239
            ]
        );
    }

    #[test]
    fn full_frame_blit_sequences_window_then_ramwr() {
        let (mut driver, log, _) = spy_driver();
        let frame = vec![0xA5u8; FRAME_BYTES];
        driver.blit_full_frame(&frame).unwrap();

        let bytes = written_bytes(&log);
        assert_eq!(
            &bytes[..11],
            &[0x2A, 0x00, 0x00, 0x01, 0x3F, 0x2B, 0x00, 0x00, 0x00, 0xEF, 0x2C]
        );
        assert_eq!(bytes.len(), 11 + FRAME_BYTES);
        assert!(bytes[11..].iter().all(|&b| b == 0xA5));
    }
}
