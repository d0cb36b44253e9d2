//! Error types for tile rendering.

use crate::config::ConfigError;
use hillshade_dem::DemError;
use hillshade_overlay::OverlayError;
use hillshade_relief::ReliefError;
use hillshade_tile::TileError;
use thiserror::Error;

/// Errors that can occur while rendering a tile.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Invalid invocation: bad tile index or a zoom the configuration
    /// does not allow.
    #[error("Usage error: {0}")]
    Usage(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tile geometry error.
    #[error("Tile error: {0}")]
    Tile(#[from] TileError),

    /// DEM could not be read, warped or written.
    #[error("DEM error: {0}")]
    Dem(#[from] DemError),

    /// Hillshade computation failed.
    #[error("Relief error: {0}")]
    Relief(#[from] ReliefError),

    /// Tile encoding or writing failed.
    #[error("Overlay error: {0}")]
    Overlay(#[from] OverlayError),

    /// Scratch directory or file system error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            RenderError::Usage(_) => 2,
            _ => 1,
        }
    }
}
