//! Renderer configuration.
//!
//! Loaded from YAML; every field is optional and falls back to the values
//! used for the public hillshade layer.

use hillshade_common::SpatialRef;
use hillshade_dem::Resampling;
use hillshade_overlay::{
    BlurPolicy, OverlayParams, DEFAULT_ALPHA_LIGHTEN, DEFAULT_BLUR_BASE_ZOOM,
    DEFAULT_BLUR_BOOST_FACTOR, DEFAULT_BLUR_BOOST_ZOOM, DEFAULT_MIN_BLUR_RADIUS,
};
use hillshade_relief::{
    ReliefParams, SlopeAlgorithm, ALGORITHM_SWITCH_ZOOM, DEFAULT_ALTITUDE, DEFAULT_AZIMUTH,
    DEFAULT_Z_FACTOR,
};
use hillshade_tile::{TileGeometry, DEFAULT_TILE_SIZE, MAX_TILE_SIZE, MAX_ZOOM};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The YAML is malformed or has unknown fields.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Values are individually valid but inconsistent.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// ============================================================================
// Sections
// ============================================================================

/// Tile grid constants.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TileConfig {
    /// Final tile edge in pixels.
    pub tile_size: u32,
    /// Half the projected world width.
    pub half_extent: f64,
}

impl Default for TileConfig {
    fn default() -> Self {
        let geometry = TileGeometry::default();
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            half_extent: geometry.half_extent,
        }
    }
}

/// Hillshade settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReliefConfig {
    /// Vertical exaggeration.
    pub z_factor: f64,
    /// Light direction in degrees clockwise from north.
    pub azimuth: f64,
    /// Light elevation above the horizon in degrees.
    pub altitude: f64,
    /// Blend slope darkening into the shading.
    pub combined: bool,
    /// Shade border pixels using the center value for missing neighbors.
    pub compute_edges: bool,
    /// First zoom shaded with Zevenbergen-Thorne.
    pub algorithm_switch_zoom: u8,
}

impl Default for ReliefConfig {
    fn default() -> Self {
        Self {
            z_factor: DEFAULT_Z_FACTOR,
            azimuth: DEFAULT_AZIMUTH,
            altitude: DEFAULT_ALTITUDE,
            combined: false,
            compute_edges: false,
            algorithm_switch_zoom: ALGORITHM_SWITCH_ZOOM,
        }
    }
}

/// Overlay settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayConfig {
    /// Alpha subtracted from every shaded pixel.
    pub alpha_lighten: u8,
    /// Zoom at which the blur radius is zero.
    pub blur_base_zoom: u8,
    /// First zoom with a boosted blur radius.
    pub blur_boost_zoom: u8,
    /// Boost multiplier.
    pub blur_boost_factor: f32,
    /// Radii at or below this are not blurred.
    pub min_blur_radius: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            alpha_lighten: DEFAULT_ALPHA_LIGHTEN,
            blur_base_zoom: DEFAULT_BLUR_BASE_ZOOM,
            blur_boost_zoom: DEFAULT_BLUR_BOOST_ZOOM,
            blur_boost_factor: DEFAULT_BLUR_BOOST_FACTOR,
            min_blur_radius: DEFAULT_MIN_BLUR_RADIUS,
        }
    }
}

// ============================================================================
// Render Configuration
// ============================================================================

/// Complete renderer configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Tiles below this zoom are written as empty transparent tiles.
    pub min_zoom: u8,
    /// Tiles above this zoom are refused.
    pub max_zoom: u8,
    /// Reference system of the intermediate rasters.
    pub render_srs: SpatialRef,
    /// DEM resampling kernel.
    pub resampling: Resampling,
    /// Where scratch directories are created; defaults to the output's
    /// directory.
    pub scratch_dir: Option<PathBuf>,
    /// Tile grid.
    pub tile: TileConfig,
    /// Hillshade stage.
    pub relief: ReliefConfig,
    /// Overlay stage.
    pub overlay: OverlayConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0,
            max_zoom: MAX_ZOOM,
            render_srs: SpatialRef::WebMercator,
            resampling: Resampling::Cubic,
            scratch_dir: None,
            tile: TileConfig::default(),
            relief: ReliefConfig::default(),
            overlay: OverlayConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Load and validate a YAML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    /// Parse and validate YAML text. Empty text yields the defaults.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: RenderConfig = if text.trim().is_empty() {
            RenderConfig::default()
        } else {
            serde_yaml::from_str(text)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_zoom > MAX_ZOOM {
            return Err(ConfigError::Invalid(format!(
                "max_zoom {} exceeds {}",
                self.max_zoom, MAX_ZOOM
            )));
        }
        if self.min_zoom > self.max_zoom {
            return Err(ConfigError::Invalid(format!(
                "min_zoom {} is above max_zoom {}",
                self.min_zoom, self.max_zoom
            )));
        }
        if self.tile.tile_size == 0 || self.tile.tile_size > MAX_TILE_SIZE {
            return Err(ConfigError::Invalid(format!(
                "tile_size must be in 1..={}, got {}",
                MAX_TILE_SIZE, self.tile.tile_size
            )));
        }
        if !(self.tile.half_extent.is_finite() && self.tile.half_extent > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "half_extent must be positive, got {}",
                self.tile.half_extent
            )));
        }
        Ok(())
    }

    /// Tile geometry for this configuration.
    pub fn geometry(&self) -> TileGeometry {
        TileGeometry::new(self.tile.tile_size, self.tile.half_extent)
    }

    /// Hillshade parameters for a tile at zoom `z`.
    pub fn relief_params(&self, z: u8) -> ReliefParams {
        let relief = &self.relief;
        ReliefParams {
            algorithm: SlopeAlgorithm::for_zoom_with_switch(z, relief.algorithm_switch_zoom),
            z_factor: relief.z_factor,
            scale: self.render_srs.horizontal_scale(),
            azimuth: relief.azimuth,
            altitude: relief.altitude,
            combined: relief.combined,
            compute_edges: relief.compute_edges,
        }
    }

    /// Compositor parameters.
    pub fn overlay_params(&self) -> OverlayParams {
        let overlay = &self.overlay;
        OverlayParams {
            tile_size: self.tile.tile_size,
            alpha_lighten: overlay.alpha_lighten,
            blur: BlurPolicy {
                base_zoom: overlay.blur_base_zoom,
                boost_zoom: overlay.blur_boost_zoom,
                boost_factor: overlay.blur_boost_factor,
                min_radius: overlay.min_blur_radius,
            },
        }
    }
}
