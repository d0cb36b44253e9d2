//! Error types for relief computation.

use hillshade_common::GridError;
use thiserror::Error;

/// Errors that can occur when computing a hillshade.
#[derive(Debug, Error)]
pub enum ReliefError {
    /// A parameter is outside its usable range.
    #[error("Invalid relief parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Output raster construction failed.
    #[error("Raster error: {0}")]
    Grid(#[from] GridError),
}
