use crate::error::MarginError;
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use std::fs;
use std::path::Path;

/// Maps a 0-100 quality onto the encoder's 1..=100 range.
fn effective_quality(quality: u8) -> u8 {
    quality.clamp(1, 100)
}

/// Encodes `image` as JPEG at `quality` and writes it to `path`, replacing
/// whatever was there.
///
/// The image is encoded in memory first; the destination is only touched once
/// encoding has succeeded, so a failed encode leaves any existing file intact.
pub fn save_jpeg(image: &RgbImage, path: &Path, quality: u8) -> Result<(), MarginError> {
    let effective = effective_quality(quality);
    if effective != quality {
        log::warn!("⚠ JPEG quality {} out of range, using {}", quality, effective);
    }

    log::info!(
        "💾 Writing {}x{} JPEG (quality {}) to {}",
        image.width(),
        image.height(),
        effective,
        path.display()
    );

    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, effective).encode_image(image)?;
    fs::write(path, &buffer)?;

    Ok(())
}
