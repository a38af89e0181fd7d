//! lcd-splash: fast boot splash for the pi-Stomp 320x240 SPI LCD
//!
//! Renders a single image (plus an optional caption) onto the ILI9341 panel
//! and exits. Meant to run very early in boot, so everything happens in one
//! straight line: open spidev and the two GPIO control lines, run the
//! init-once wake sequence, produce the frame, blit, done.
//!
//! Usage: `lcd-splash <image> [caption]`

use anyhow::{anyhow, Context};

use linux_embedded_hal::gpio_cdev::{Chip, LineRequestFlags};
use linux_embedded_hal::spidev::{SpiModeFlags, Spidev, SpidevOptions};
use linux_embedded_hal::{CdevPin, Delay};

mod ili9341;
mod marker;
mod render;
mod source;

use crate::ili9341::driver::Ili9341;
use crate::ili9341::pins::{Pins, GPIOCHIPS};
use crate::marker::InitMarker;

const SPI_DEVICE: &str = "/dev/spidev0.0";
const SPI_SPEED_HZ: u32 = 80_000_000;

/// Consumer label the GPIO lines are claimed under (visible in `gpioinfo`).
const GPIO_CONSUMER: &str = "lcd-splash";

fn open_spi() -> anyhow::Result<Spidev> {
    let mut spi = Spidev::open(SPI_DEVICE).with_context(|| format!("opening {}", SPI_DEVICE))?;
    let options = SpidevOptions::new()
        .bits_per_word(8)
        .max_speed_hz(SPI_SPEED_HZ)
        .mode(SpiModeFlags::SPI_MODE_0)
        .build();
    spi.configure(&options)
        .with_context(|| format!("configuring {}", SPI_DEVICE))?;
    Ok(spi)
}

/// Claim the DC and CS lines. DC idles low, CS idles high (inactive).
fn open_gpio() -> anyhow::Result<(CdevPin, CdevPin)> {
    let mut chip = GPIOCHIPS
        .iter()
        .find_map(|path| Chip::new(path).ok())
        .with_context(|| format!("opening a GPIO character device (tried {:?})", GPIOCHIPS))?;
    log::debug!("using GPIO chip {:?}", chip.path());

    let dc = chip
        .get_line(Pins::DC)
        .and_then(|line| line.request(LineRequestFlags::OUTPUT, 0, GPIO_CONSUMER))
        .with_context(|| format!("claiming DC line (GPIO {})", Pins::DC))?;
    let cs = chip
        .get_line(Pins::CS)
        .and_then(|line| line.request(LineRequestFlags::OUTPUT, 1, GPIO_CONSUMER))
        .with_context(|| format!("claiming CS line (GPIO {})", Pins::CS))?;

    Ok((
        CdevPin::new(dc).context("wrapping DC line")?,
        CdevPin::new(cs).context("wrapping CS line")?,
    ))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let image_path = match args.next() {
        Some(p) => std::path::PathBuf::from(p),
        None => {
            eprintln!("usage: lcd-splash <image> [caption]");
            std::process::exit(1);
        }
    };
    let caption = args.next().filter(|c| !c.is_empty());

    // Hardware first: a broken bus should fail before any file is touched.
    let spi = open_spi()?;
    let (dc, cs) = open_gpio()?;
    let mut panel = Ili9341::new(spi, dc, cs, Delay);

    panel
        .init(&InitMarker::at_default_path())
        .map_err(|e| anyhow!("panel init failed: {:?}", e))?;

    let frame = source::for_path(&image_path).produce(caption.as_deref())?;

    log::info!("blitting {} to the panel", image_path.display());
    panel
        .blit_full_frame(&frame)
        .map_err(|e| anyhow!("frame transfer failed: {:?}", e))?;

    Ok(())
}
