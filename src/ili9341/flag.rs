/// Register payload values for the ILI9341 controller.
///
/// Only the registers this program actually writes are covered; the values
/// are fixed for the pi-Stomp panel wiring.
pub struct Flag;
#[allow(dead_code, missing_docs)]
impl Flag {
    // COLMOD: Pixel Format Set (0x3A)
    pub const PIXEL_FORMAT_16BPP: u8 = 0x55; // 16 bits/pixel on both interfaces
    pub const PIXEL_FORMAT_18BPP: u8 = 0x66;

    // Memory Access Control (0x36) bits
    pub const MADCTL_MY: u8 = 0x80; // row address order
    pub const MADCTL_MX: u8 = 0x40; // column address order
    pub const MADCTL_MV: u8 = 0x20; // row/column exchange
    pub const MADCTL_ML: u8 = 0x10; // vertical refresh order
    pub const MADCTL_BGR: u8 = 0x08; // BGR subpixel order

    /// Landscape orientation with BGR subpixels (rotation = 90 degrees):
    /// MY | MX | MV | BGR.
    pub const MADCTL_LANDSCAPE_BGR: u8 =
        Self::MADCTL_MY | Self::MADCTL_MX | Self::MADCTL_MV | Self::MADCTL_BGR;
}
