//! # hillshade-relief
//!
//! Shaded relief computed from an elevation [`RasterGrid`](hillshade_common::RasterGrid),
//! producing the same byte values as `gdaldem hillshade`.
//!
//! ## Output Encoding
//!
//! | Value | Meaning |
//! |-------|---------|
//! | 0 | no-data, or a border pixel when edges are not computed |
//! | 1 | fully shadowed |
//! | 2..=255 | `round(1 + 254 * cos(angle to the light))` |
//!
//! Flat terrain lit from 45° altitude always yields 181.
//!
//! ## Slope Algorithms
//!
//! - [`SlopeAlgorithm::Horn`]: 3x3 weighted differences, smoother; used for
//!   low zooms
//! - [`SlopeAlgorithm::ZevenbergenThorne`]: 4-neighbour central differences,
//!   sharper; used from zoom 11 up
//!
//! ## Example
//!
//! ```
//! use hillshade_common::{BoundingBox, RasterGrid, SpatialRef};
//! use hillshade_relief::{hillshade, ReliefParams};
//!
//! let bounds = BoundingBox::new(0.0, 0.0, 300.0, 300.0).unwrap();
//! let flat = RasterGrid::filled(3, 3, bounds, SpatialRef::WebMercator, 100.0).unwrap();
//! let relief = hillshade(&flat, &ReliefParams::for_tile(12, SpatialRef::WebMercator)).unwrap();
//! assert_eq!(relief.get(1, 1), Some(181.0));
//! ```

mod algorithm;
mod error;
mod hillshade;
mod params;

pub use algorithm::{SlopeAlgorithm, ALGORITHM_SWITCH_ZOOM};
pub use error::ReliefError;
pub use hillshade::{hillshade, RELIEF_NO_DATA};
pub use params::{ReliefParams, DEFAULT_ALTITUDE, DEFAULT_AZIMUTH, DEFAULT_Z_FACTOR};

/// Result type for relief operations.
pub type Result<T> = std::result::Result<T, ReliefError>;
