//! RGB888 to panel-native RGB565 conversion
//!
//! The panel's 16-bit data registers expect each pixel most-significant byte
//! first on the wire, so the packed value is emitted as a big-endian byte
//! pair. Channels are truncated to their target width by discarding low-order
//! bits, never rounded. Pre-converted `.raw` assets were produced with exactly
//! this quantization, so it must stay bit-for-bit stable.

/// Pack one 8-bit RGB triple into RGB565 (5 bits red, 6 green, 5 blue,
/// red in the high bits).
pub fn rgb565(r: u8, g: u8, b: u8) -> u16 {
    ((u16::from(r) & 0xF8) << 8) | ((u16::from(g) & 0xFC) << 3) | (u16::from(b) >> 3)
}

/// Pack one RGB triple and return it in wire byte order (big-endian), ready
/// to be appended to the bulk transfer buffer as-is.
pub fn rgb565_wire(r: u8, g: u8, b: u8) -> [u8; 2] {
    rgb565(r, g, b).to_be_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_primaries() {
        assert_eq!(rgb565(0xFF, 0x00, 0x00), 0xF800);
        assert_eq!(rgb565(0x00, 0xFF, 0x00), 0x07E0);
        assert_eq!(rgb565(0x00, 0x00, 0xFF), 0x001F);
        assert_eq!(rgb565(0xFF, 0xFF, 0xFF), 0xFFFF);
        assert_eq!(rgb565(0x00, 0x00, 0x00), 0x0000);
    }

    #[test]
    fn truncates_instead_of_rounding() {
        // 0x07 in the low bits of red/blue and 0x03 of green must vanish,
        // even though rounding would bump the channel.
        assert_eq!(rgb565(0x07, 0x03, 0x07), 0x0000);
        assert_eq!(rgb565(0xF9, 0xFD, 0xF9), rgb565(0xF8, 0xFC, 0xF8));
    }

    #[test]
    fn wire_order_is_big_endian() {
        // Red occupies the high byte and must be transmitted first.
        assert_eq!(rgb565_wire(0xFF, 0x00, 0x00), [0xF8, 0x00]);
        assert_eq!(rgb565_wire(0x00, 0x00, 0xFF), [0x00, 0x1F]);
    }

    #[test]
    fn top_bits_survive_round_trip() {
        for &(r, g, b) in &[(12u8, 200u8, 99u8), (255, 255, 255), (1, 2, 3), (0xF8, 0xFC, 0xF8)] {
            let c = rgb565(r, g, b);
            let r5 = ((c >> 11) & 0x1F) as u8;
            let g6 = ((c >> 5) & 0x3F) as u8;
            let b5 = (c & 0x1F) as u8;
            assert_eq!(r5 << 3, r & 0xF8);
            assert_eq!(g6 << 2, g & 0xFC);
            assert_eq!(b5 << 3, b & 0xF8);
        }
    }
}
