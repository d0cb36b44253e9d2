//! Error types for shared raster types.

use thiserror::Error;

/// Errors raised when constructing bounding boxes or raster grids.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    /// Bounds are empty, inverted, or not finite.
    #[error("Invalid bounds: min=({min_x}, {min_y}) max=({max_x}, {max_y})")]
    InvalidBounds {
        /// West edge.
        min_x: f64,
        /// South edge.
        min_y: f64,
        /// East edge.
        max_x: f64,
        /// North edge.
        max_y: f64,
    },

    /// Width or height is zero.
    #[error("Raster dimensions must be non-zero (got {width}x{height})")]
    EmptyDimensions {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// Sample buffer does not match the raster dimensions.
    #[error("Sample buffer has {actual} values, expected {expected}")]
    BufferSizeMismatch {
        /// `width * height`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
}
