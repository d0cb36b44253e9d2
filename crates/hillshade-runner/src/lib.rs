//! # hillshade-runner
//!
//! Renders one translucent hillshade tile from a DEM GeoTIFF.
//!
//! ## Usage
//!
//! ```bash
//! hillshade dem_data/alps.tif tiles/12/2200/1343.png 12 2200 1343
//! hillshade --config hillshade.yaml --log-level debug world.tif out.png 3 4 2
//! ```
//!
//! Exit codes: 0 on success, 2 for invalid arguments or tile indices, 1 for
//! any other failure.
//!
//! ## Configuration
//!
//! An optional YAML file ([`RenderConfig`]) overrides zoom limits, the render
//! reference system, resampling, and the relief and overlay constants. Every
//! field has a default:
//!
//! ```yaml
//! min_zoom: 0
//! max_zoom: 24
//! render_srs: web_mercator
//! resampling: cubic
//! relief:
//!   z_factor: 2.0
//!   algorithm_switch_zoom: 11
//! overlay:
//!   alpha_lighten: 74
//! ```
//!
//! ## Library Use
//!
//! ```no_run
//! use hillshade_runner::{RenderConfig, RenderRequest, TileRenderer};
//! use hillshade_tile::TileIndex;
//!
//! let renderer = TileRenderer::new(RenderConfig::default())?;
//! let report = renderer.render(&RenderRequest {
//!     dem: "dem_data/alps.tif".into(),
//!     output: "1343.png".into(),
//!     tile: TileIndex::new(12, 2200, 1343)?,
//! })?;
//! println!("{:?}", report.algorithm);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
mod driver;
mod error;

pub use config::{ConfigError, OverlayConfig, ReliefConfig, RenderConfig, TileConfig};
pub use driver::{RenderReport, RenderRequest, TileRenderer};
pub use error::RenderError;

/// Result type for rendering.
pub type Result<T> = std::result::Result<T, RenderError>;
