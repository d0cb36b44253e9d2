//! Tile rendering pipeline.
//!
//! Stages hand rasters to each other through GeoTIFF files in a per-render
//! scratch directory:
//!
//! ```text
//! DEM ──warp──▶ elevation.tif ──hillshade──▶ relief.tif ──compose──▶ z/x/y.png
//! ```
//!
//! `elevation.tif` is deleted as soon as it has been read. The scratch
//! directory is removed when the render finishes, successfully or not.

use crate::{RenderConfig, RenderError, Result};
use hillshade_common::SpatialRef;
use hillshade_dem::{geotiff, DemRaster, RasterSource, WarpRequest};
use hillshade_overlay::{write_png, OverlayCompositor};
use hillshade_relief::{hillshade, SlopeAlgorithm};
use hillshade_tile::{RenderWindow, TileIndex};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::TempDir;
use tracing::{debug, info, info_span, warn};

const ELEVATION_FILE: &str = "elevation.tif";
const RELIEF_FILE: &str = "relief.tif";

/// A single tile to render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    /// Source DEM GeoTIFF.
    pub dem: PathBuf,
    /// Destination PNG, overwritten if present.
    pub output: PathBuf,
    /// Tile to render.
    pub tile: TileIndex,
}

/// Outcome of a successful render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderReport {
    /// Rendered tile.
    pub tile: TileIndex,
    /// Where the PNG was written.
    pub output: PathBuf,
    /// True if the zoom was below `min_zoom` and an empty tile was written.
    pub empty: bool,
    /// Size of the buffered render raster, `(0, 0)` for empty tiles.
    pub render_size: (u32, u32),
    /// Slope algorithm used, if shading ran.
    pub algorithm: Option<SlopeAlgorithm>,
    /// Gaussian blur sigma applied, if any.
    pub blur_sigma: Option<f32>,
    /// Scratch cleanup failure; the tile itself was written.
    pub cleanup_error: Option<String>,
}

/// Renders tiles according to a [`RenderConfig`].
#[derive(Debug, Clone)]
pub struct TileRenderer {
    config: RenderConfig,
    compositor: OverlayCompositor,
}

impl TileRenderer {
    /// Create a renderer, validating `config`.
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        let compositor = OverlayCompositor::new(config.overlay_params());
        Ok(Self { config, compositor })
    }

    /// The validated configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render one tile.
    pub fn render(&self, request: &RenderRequest) -> Result<RenderReport> {
        let tile = request.tile;
        let span = info_span!("render", z = tile.z, x = tile.x, y = tile.y);
        let _enter = span.enter();

        if tile.z > self.config.max_zoom {
            return Err(RenderError::Usage(format!(
                "zoom {} is above the configured maximum {}",
                tile.z, self.config.max_zoom
            )));
        }

        if tile.z < self.config.min_zoom {
            info!(min_zoom = self.config.min_zoom, "Below minimum zoom, writing empty tile");
            write_png(&request.output, &self.compositor.empty_tile())?;
            return Ok(RenderReport {
                tile,
                output: request.output.clone(),
                empty: true,
                render_size: (0, 0),
                algorithm: None,
                blur_sigma: None,
                cleanup_error: None,
            });
        }

        let start = Instant::now();
        let window = self.config.geometry().render_window(tile);
        let scratch = self.scratch_dir(&request.output)?;
        debug!(scratch = %scratch.path().display(), "Created scratch directory");

        // On error the TempDir is dropped here, which removes it
        let (algorithm, mut cleanup) = self.run_stages(request, &window, scratch.path())?;

        let scratch_path = scratch.path().to_path_buf();
        cleanup.extend(cleanup_failure(&scratch_path, scratch.close()));
        let cleanup_error = (!cleanup.is_empty()).then(|| cleanup.join("; "));

        info!(
            output = %request.output.display(),
            width = window.width,
            height = window.height,
            algorithm = %algorithm,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Rendered tile"
        );

        Ok(RenderReport {
            tile,
            output: request.output.clone(),
            empty: false,
            render_size: (window.width, window.height),
            algorithm: Some(algorithm),
            blur_sigma: self.compositor.params().blur.sigma(tile.z),
            cleanup_error,
        })
    }

    fn run_stages(
        &self,
        request: &RenderRequest,
        window: &RenderWindow,
        scratch: &Path,
    ) -> Result<(SlopeAlgorithm, Vec<String>)> {
        let elevation_path = scratch.join(ELEVATION_FILE);
        let relief_path = scratch.join(RELIEF_FILE);
        let srs = self.config.render_srs;
        let mut cleanup = Vec::new();
        let bounds = match srs {
            SpatialRef::WebMercator => window.bounds,
            SpatialRef::Geographic => window.bounds.mercator_to_geographic(),
        };

        // Stage 1: DEM -> elevation grid
        info!(dem = %request.dem.display(), srs = %srs, "Warping DEM");
        {
            let dem = DemRaster::from_file(&request.dem)?;
            let warp = WarpRequest::new(bounds, srs, window.width, window.height)
                .with_resampling(self.config.resampling);
            let elevation = dem.warp(&warp)?;
            geotiff::write_elevation(&elevation_path, &elevation)?;
        }

        // Stage 2: elevation -> relief
        let params = self.config.relief_params(request.tile.z);
        info!(algorithm = %params.algorithm, "Computing hillshade");
        {
            let elevation = DemRaster::from_file(&elevation_path)?.into_grid()?;
            cleanup.extend(cleanup_failure(
                &elevation_path,
                std::fs::remove_file(&elevation_path),
            ));
            let relief = hillshade(&elevation, &params)?;
            geotiff::write_relief(&relief_path, &relief)?;
        }

        // Stage 3: relief -> tile
        info!(radius = self.compositor.params().blur.radius(request.tile.z), "Compositing overlay");
        let relief = DemRaster::from_file(&relief_path)?.into_grid()?;
        let image = self.compositor.compose(&relief, request.tile.z, window.crop);
        write_png(&request.output, &image)?;

        Ok((params.algorithm, cleanup))
    }

    fn scratch_dir(&self, output: &Path) -> Result<TempDir> {
        let parent = match &self.config.scratch_dir {
            Some(dir) => dir.as_path(),
            None => match output.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            },
        };
        Ok(tempfile::Builder::new()
            .prefix(".hillshade-")
            .tempdir_in(parent)?)
    }
}

/// Log a failed removal and keep its message for the report.
fn cleanup_failure(path: &Path, result: std::io::Result<()>) -> Option<String> {
    let error = result.err()?;
    warn!(path = %path.display(), error = %error, "Failed to clean up scratch files");
    Some(format!("{}: {}", path.display(), error))
}
