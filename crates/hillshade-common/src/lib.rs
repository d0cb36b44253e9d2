//! # hillshade-common
//!
//! Types shared by every stage of the hillshade tile pipeline.
//!
//! - [`BoundingBox`]: an axis-aligned extent in a projected or geographic CRS
//! - [`SpatialRef`]: the two spatial references the renderer works in
//!   (Web Mercator meters and WGS84 degrees)
//! - [`RasterGrid`]: a single-band f32 raster with an implicit affine mapping
//!   derived from its bounds and dimensions
//!
//! ## Example
//!
//! ```
//! use hillshade_common::{BoundingBox, RasterGrid, SpatialRef};
//!
//! let bounds = BoundingBox::new(0.0, 0.0, 512.0, 256.0)?;
//! let grid = RasterGrid::filled(4, 2, bounds, SpatialRef::WebMercator, 10.0)?;
//! assert_eq!(grid.pixel_size(), (128.0, 128.0));
//! # Ok::<(), hillshade_common::GridError>(())
//! ```

mod bounds;
mod error;
mod grid;
pub mod mercator;

pub use bounds::BoundingBox;
pub use error::GridError;
pub use grid::RasterGrid;
pub use mercator::{SpatialRef, WEB_MERCATOR_HALF_EXTENT};

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
