//! Frame sources: turn an asset file into one packed full-panel frame
//!
//! Two kinds of asset feed the same pipeline. Encoded raster images of any
//! size are decoded, letterbox-fitted and captioned in RGB888, then converted
//! to the wire format. Pre-converted `.raw` assets are already panel-sized
//! packed RGB565 in wire byte order, so they skip decode and scaling and take
//! the caption directly in packed form.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};

use crate::ili9341::FRAME_BYTES;
use crate::render::{fit, text};

/// A producer of one ready-to-transmit frame, caption included.
pub trait FrameSource {
    fn produce(&self, caption: Option<&str>) -> Result<Vec<u8>>;
}

/// Pick the source implementation for an asset path by its extension.
pub fn for_path(path: &Path) -> Box<dyn FrameSource> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("raw") => Box::new(RawAssetSource::new(path)),
        _ => Box::new(DecodedImageSource::new(path)),
    }
}

/// Encoded raster image of arbitrary dimensions; anything the decoder
/// understands. Alpha is discarded, palette and grayscale expand to RGB.
pub struct DecodedImageSource {
    path: PathBuf,
}

impl DecodedImageSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DecodedImageSource { path: path.into() }
    }
}

impl FrameSource for DecodedImageSource {
    fn produce(&self, caption: Option<&str>) -> Result<Vec<u8>> {
        let src = image::open(&self.path)
            .with_context(|| format!("loading image {}", self.path.display()))?
            .to_rgb8();
        log::debug!(
            "decoded {} at {}x{}",
            self.path.display(),
            src.width(),
            src.height()
        );

        let mut frame = fit::fit(&src);
        if let Some(caption) = caption {
            text::overlay(&mut frame, caption);
        }
        Ok(frame.to_wire())
    }
}

/// Pre-converted asset: exactly one panel frame of packed RGB565 pixels in
/// wire byte order. Anything else is rejected loudly.
pub struct RawAssetSource {
    path: PathBuf,
}

impl RawAssetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RawAssetSource { path: path.into() }
    }
}

impl FrameSource for RawAssetSource {
    fn produce(&self, caption: Option<&str>) -> Result<Vec<u8>> {
        let mut frame = fs::read(&self.path)
            .with_context(|| format!("loading raw frame {}", self.path.display()))?;
        ensure!(
            frame.len() == FRAME_BYTES,
            "{}: expected {} bytes of packed pixels, got {}",
            self.path.display(),
            FRAME_BYTES,
            frame.len()
        );

        if let Some(caption) = caption {
            text::overlay_packed(&mut frame, caption);
        }
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ili9341::{HEIGHT, WIDTH};
    use image::{Rgb, RgbImage};
    use std::io::Write;

    #[test]
    fn extension_selects_the_raw_loader() {
        let dir = tempfile::tempdir().unwrap();
        let raw = dir.path().join("splash.raw");
        fs::write(&raw, vec![0u8; FRAME_BYTES]).unwrap();
        assert!(for_path(&raw).produce(None).is_ok());
    }

    #[test]
    fn raw_asset_of_wrong_size_reports_both_counts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.raw");
        fs::write(&path, vec![0u8; 100_000]).unwrap();

        let err = RawAssetSource::new(&path).produce(None).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("153600"), "{}", msg);
        assert!(msg.contains("100000"), "{}", msg);
    }

    #[test]
    fn raw_asset_missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.raw");
        let err = RawAssetSource::new(&path).produce(None).unwrap_err();
        assert!(format!("{:#}", err).contains("nope.raw"));
    }

    #[test]
    fn raw_asset_passes_pixels_through_untouched_without_caption() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.raw");
        let pixels: Vec<u8> = (0..FRAME_BYTES).map(|i| (i % 251) as u8).collect();
        fs::write(&path, &pixels).unwrap();
        assert_eq!(RawAssetSource::new(&path).produce(None).unwrap(), pixels);
    }

    #[test]
    fn raw_asset_caption_writes_packed_white() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("black.raw");
        fs::write(&path, vec![0u8; FRAME_BYTES]).unwrap();

        let frame = RawAssetSource::new(&path).produce(Some("hi")).unwrap();
        let lit: Vec<usize> = frame
            .chunks_exact(2)
            .enumerate()
            .filter(|(_, px)| px[0] != 0 || px[1] != 0)
            .map(|(i, _)| i)
            .collect();
        assert!(!lit.is_empty());
        for i in lit {
            assert_eq!(&frame[i * 2..i * 2 + 2], &[0xFF, 0xFF]);
            let y = i / WIDTH;
            assert!((HEIGHT - 32..HEIGHT - 16).contains(&y));
        }
    }

    #[test]
    fn decoded_image_end_to_end_red_half_size() {
        // 160x120 all-red PNG scales 2x to cover the whole panel
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("red.png");
        RgbImage::from_pixel(160, 120, Rgb([255, 0, 0]))
            .save(&path)
            .unwrap();

        let frame = DecodedImageSource::new(&path).produce(None).unwrap();
        assert_eq!(frame.len(), FRAME_BYTES);
        for px in frame.chunks_exact(2) {
            assert_eq!(px, &[0xF8, 0x00]);
        }
    }

    #[test]
    fn decoded_image_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(b"not a png at all").unwrap();
        drop(f);
        assert!(DecodedImageSource::new(&path).produce(None).is_err());
    }
}
