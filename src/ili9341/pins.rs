//! GPIO line assignments for the pi-Stomp LCD wiring
//!
//! Line offsets are on the Pi's main GPIO bank; see [`GPIOCHIPS`] for which
//! character device that bank lives on per Pi generation.

/// GPIO line offsets used by the display
pub struct Pins;

impl Pins {
    /// Data/Command select line (high for data, low for command)
    pub const DC: u32 = 6;
    /// Chip select, CE0 on the SPI header (active low, idle high)
    pub const CS: u32 = 8;
}

/// GPIO character devices to try, in order. Pi 5 exposes the header GPIOs on
/// gpiochip4 (RP1), Pi 3/4 on gpiochip0.
pub const GPIOCHIPS: [&str; 2] = ["/dev/gpiochip4", "/dev/gpiochip0"];
