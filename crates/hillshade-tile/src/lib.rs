//! # hillshade-tile
//!
//! XYZ tile geometry for the hillshade renderer.
//!
//! ## Tile Coordinate System
//!
//! Uses the OpenStreetMap Slippy Map tile naming convention over the Web
//! Mercator world square:
//! - `z` is the zoom level (0 to [`MAX_ZOOM`])
//! - `x` is the column (0 to 2^z - 1, from west to east)
//! - `y` is the row (0 to 2^z - 1, from north to south)
//!
//! ## Neighbor Buffer
//!
//! A tile is never rendered on its own. [`TileGeometry::render_window`] grows
//! the render region by one tile toward every neighbor that exists, so that
//! shading and blur at the tile's edges see real terrain. The returned
//! [`CropWindow`] cuts the buffer back out after compositing.
//!
//! ```
//! use hillshade_tile::{TileGeometry, TileIndex};
//!
//! let geometry = TileGeometry::default();
//! let window = geometry.render_window(TileIndex::new(12, 2200, 1343)?);
//! assert_eq!((window.width, window.height), (768, 768));
//! assert_eq!(window.crop.x1, 256);
//! # Ok::<(), hillshade_tile::TileError>(())
//! ```

mod error;
mod geometry;
mod index;

pub use error::TileError;
pub use geometry::{CropWindow, RenderWindow, TileGeometry, DEFAULT_TILE_SIZE, MAX_TILE_SIZE};
pub use index::{world_resolution, TileIndex, MAX_ZOOM};

/// Result type for tile operations.
pub type Result<T> = std::result::Result<T, TileError>;
