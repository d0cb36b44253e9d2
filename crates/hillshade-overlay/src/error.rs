//! Error types for overlay output.

use thiserror::Error;

/// Errors that can occur when encoding or writing a tile.
#[derive(Debug, Error)]
pub enum OverlayError {
    /// Image encoding error.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error writing the tile.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
