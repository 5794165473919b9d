use crate::error::MarginError;
use image::io::Reader;
use image::{ImageFormat, RgbImage};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Decodes the image at `path` into an RGB buffer.
///
/// The format is sniffed from the file contents rather than the extension.
/// Sources in other color modes (grayscale, RGBA, ...) are converted to RGB.
pub fn load_image(path: &Path) -> Result<RgbImage, MarginError> {
    match fs::metadata(path) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(MarginError::SourceNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(MarginError::Io(e)),
    }

    log::info!("📂 Loading source image: {}", path.display());
    let reader = Reader::open(path)?.with_guessed_format()?;

    match reader.format() {
        Some(ImageFormat::Jpeg) => {}
        Some(other) => log::warn!("⚠ Source is {:?}, not JPEG: {}", other, path.display()),
        None => log::warn!("⚠ Could not detect source format: {}", path.display()),
    }

    let img = reader.decode()?.to_rgb8();
    log::debug!("Decoded {}x{} source", img.width(), img.height());
    Ok(img)
}
