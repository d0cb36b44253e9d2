//! Command-line interface.

use crate::{RenderConfig, RenderRequest, Result};
use clap::Parser;
use hillshade_tile::{TileError, TileIndex};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Render a hillshade overlay tile from a DEM.
#[derive(Parser, Debug)]
#[command(name = "hillshade", version)]
#[command(about = "Render a translucent hillshade XYZ tile from a DEM GeoTIFF")]
pub struct Args {
    /// DEM GeoTIFF
    pub input: PathBuf,

    /// Output PNG (overwritten if present)
    pub output: PathBuf,

    /// Zoom level
    pub z: u32,

    /// Tile column
    pub x: u32,

    /// Tile row
    pub y: u32,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level, used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Validated tile index.
    pub fn tile(&self) -> std::result::Result<TileIndex, TileError> {
        TileIndex::checked(self.z, self.x, self.y)
    }

    /// Configuration from `--config`, or the defaults.
    pub fn load_config(&self) -> Result<RenderConfig> {
        Ok(match &self.config {
            Some(path) => RenderConfig::from_file(path)?,
            None => RenderConfig::default(),
        })
    }

    /// Render request for `tile`.
    pub fn request(&self, tile: TileIndex) -> RenderRequest {
        RenderRequest {
            dem: self.input.clone(),
            output: self.output.clone(),
            tile,
        }
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence over `log_level`.
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
