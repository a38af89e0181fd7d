pub struct Cmd;
impl Cmd {
    // Init
    pub const SLPOUT: u8 = 0x11;
    pub const DISPON: u8 = 0x29;
    pub const PIXFMT: u8 = 0x3A;
    pub const MADCTL: u8 = 0x36;

    // Blit
    pub const CASET: u8 = 0x2A;
    pub const PASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
}

/*
ILI9341 datasheet names for these:
0x11 - Sleep Out
0x29 - Display ON
0x2A - Column Address Set
0x2B - Page Address Set
0x2C - Memory Write
0x36 - Memory Access Control
0x3A - COLMOD: Pixel Format Set
*/
