//! # hillshade-dem
//!
//! Digital Elevation Model (DEM) access for the hillshade renderer.
//!
//! This crate provides:
//! - [`DemRaster`]: a single-band GeoTIFF DEM loaded into memory, with its
//!   georeferencing (tie point + pixel scale or a model transformation) and
//!   its spatial reference read from the GeoKey directory
//! - [`RasterSource`]: reprojects and resamples a DEM onto an exact target
//!   grid ([`WarpRequest`]), cubic by default
//! - [`geotiff`]: writes georeferenced single-band GeoTIFFs, used to hand
//!   rasters between pipeline stages
//!
//! ## Supported Reference Systems
//!
//! - EPSG:3857 Web Mercator (and its legacy aliases)
//! - EPSG:4326 and WGS84-equivalent geographic datums
//!
//! ## Example
//!
//! ```no_run
//! use hillshade_common::{BoundingBox, SpatialRef};
//! use hillshade_dem::{DemRaster, RasterSource, WarpRequest};
//!
//! let dem = DemRaster::from_file("dem_data/alps.tif")?;
//! let bounds = BoundingBox::new(1_100_000.0, 5_900_000.0, 1_110_000.0, 5_910_000.0)?;
//! let grid = dem.warp(&WarpRequest::new(bounds, SpatialRef::WebMercator, 256, 256))?;
//! println!("Warped to {}x{}", grid.width(), grid.height());
//! # Ok::<(), hillshade_dem::DemError>(())
//! ```

mod error;
mod geokeys;
pub mod geotiff;
mod raster;
mod warp;

pub use error::DemError;
pub use raster::{DemRaster, GeoTransform};
pub use warp::{RasterSource, Resampling, WarpRequest, DEFAULT_NO_DATA};

/// Result type for DEM operations.
pub type Result<T> = std::result::Result<T, DemError>;
