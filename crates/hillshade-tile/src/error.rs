//! Error types for tile indexing.

use thiserror::Error;

/// Errors raised when a tile index is out of range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TileError {
    /// Zoom level above [`crate::MAX_ZOOM`].
    #[error("Invalid zoom level {zoom} (must be 0-{max})")]
    InvalidZoom {
        /// Requested zoom.
        zoom: u32,
        /// Largest supported zoom.
        max: u8,
    },

    /// Column or row outside `[0, 2^z - 1]`.
    #[error("Tile z={z} x={x} y={y} out of range (x and y must be below {limit})")]
    OutOfRange {
        /// Zoom level.
        z: u8,
        /// Column.
        x: u32,
        /// Row.
        y: u32,
        /// `2^z`.
        limit: u32,
    },
}
