use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarginError {
    #[error("Source image not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Canvas too large: {width}x{height} with a {margin}px margin")]
    CanvasTooLarge { width: u32, height: u32, margin: u32 },
}
