//! Hillshade parameters.

use crate::{ReliefError, Result, SlopeAlgorithm};
use hillshade_common::SpatialRef;

/// Default vertical exaggeration.
pub const DEFAULT_Z_FACTOR: f64 = 2.0;
/// Default light azimuth in degrees clockwise from north.
pub const DEFAULT_AZIMUTH: f64 = 315.0;
/// Default light altitude in degrees above the horizon.
pub const DEFAULT_ALTITUDE: f64 = 45.0;

// ============================================================================
// Relief Parameters
// ============================================================================

/// Parameters of a hillshade computation.
///
/// Mirrors the `gdaldem hillshade` options used for tile rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReliefParams {
    /// Gradient estimator.
    pub algorithm: SlopeAlgorithm,
    /// Vertical exaggeration.
    pub z_factor: f64,
    /// Ratio of horizontal units to elevation units (111120 for degrees
    /// over meters).
    pub scale: f64,
    /// Light azimuth, degrees clockwise from north.
    pub azimuth: f64,
    /// Light altitude, degrees above the horizon.
    pub altitude: f64,
    /// Blend slope into the shading (`gdaldem -combined`).
    pub combined: bool,
    /// Shade border pixels by replicating the centre sample.
    pub compute_edges: bool,
}

impl Default for ReliefParams {
    fn default() -> Self {
        Self {
            algorithm: SlopeAlgorithm::Horn,
            z_factor: DEFAULT_Z_FACTOR,
            scale: 1.0,
            azimuth: DEFAULT_AZIMUTH,
            altitude: DEFAULT_ALTITUDE,
            combined: false,
            compute_edges: false,
        }
    }
}

impl ReliefParams {
    /// Standard parameters for a tile at zoom `z` rendered in `srs`.
    pub fn for_tile(z: u8, srs: SpatialRef) -> Self {
        Self {
            algorithm: SlopeAlgorithm::for_zoom(z),
            scale: srs.horizontal_scale(),
            ..Self::default()
        }
    }

    /// Check that every numeric parameter is usable.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("z_factor", self.z_factor, self.z_factor.is_finite()),
            ("scale", self.scale, self.scale.is_finite() && self.scale > 0.0),
            ("azimuth", self.azimuth, self.azimuth.is_finite()),
            (
                "altitude",
                self.altitude,
                (0.0..=90.0).contains(&self.altitude),
            ),
        ];
        for (name, value, ok) in checks {
            if !ok {
                return Err(ReliefError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}
