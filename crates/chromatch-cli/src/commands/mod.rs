//! CLI command implementations

pub mod bench;
pub mod stats;
pub mod transfer;

use std::path::Path;

use anyhow::{Context, Result};
use chromatch_core::BgrBuffer;

/// Loads an image file into a packed B,G,R buffer.
///
/// Alpha and higher bit depths are reduced to 8-bit RGB.
pub fn load_image(path: &Path) -> Result<BgrBuffer> {
    let rgb = image::open(path)
        .with_context(|| format!("Failed to load: {}", path.display()))?
        .to_rgb8();
    let (width, height) = rgb.dimensions();
    BgrBuffer::from_rgb8(width, height, rgb.as_raw())
        .with_context(|| format!("Unexpected pixel layout in {}", path.display()))
}

/// Saves a B,G,R buffer; the format follows the file extension.
pub fn save_image(path: &Path, buffer: &BgrBuffer) -> Result<()> {
    let rgb = image::RgbImage::from_raw(buffer.width(), buffer.height(), buffer.to_rgb8())
        .context("Buffer size does not match its dimensions")?;
    rgb.save(path)
        .with_context(|| format!("Failed to save: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("px.png");
        let buf = BgrBuffer::new(vec![1, 2, 3, 250, 128, 0], 2, 1).unwrap();
        save_image(&path, &buf).unwrap();
        assert_eq!(load_image(&path).unwrap(), buf);
    }

    #[test]
    fn test_load_missing() {
        let err = load_image(Path::new("/nonexistent/x.png")).unwrap_err();
        assert!(err.to_string().contains("Failed to load"));
    }
}
