//! Error types for the DEM crate.

use hillshade_common::{BoundingBox, GridError};
use thiserror::Error;

/// Errors that can occur when reading, warping or writing DEM rasters.
#[derive(Debug, Error)]
pub enum DemError {
    /// I/O error reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TIFF decoding or encoding error.
    #[error("TIFF error: {0}")]
    Tiff(#[from] tiff::TiffError),

    /// Invalid GeoTIFF - missing or unusable georeferencing.
    #[error("Invalid GeoTIFF: {0}")]
    InvalidGeoTiff(String),

    /// The raster's coordinate reference system is not supported.
    #[error("Unsupported coordinate reference system: {0}")]
    UnsupportedCrs(String),

    /// The requested region lies entirely outside the DEM.
    #[error("Requested bounds {requested:?} do not intersect DEM bounds {available:?}")]
    NoIntersection {
        /// Requested region, in the DEM's reference system.
        requested: BoundingBox,
        /// DEM extent.
        available: BoundingBox,
    },

    /// Invalid raster construction.
    #[error("Raster error: {0}")]
    Grid(#[from] GridError),
}
