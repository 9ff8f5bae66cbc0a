use std::path::PathBuf;

use thiserror::Error;

/// Export errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Grid is empty; nothing to render")]
    EmptyGrid,

    #[error("Unsupported image format for {}: expected .ppm or .png", .0.display())]
    UnsupportedFormat(PathBuf),
}
