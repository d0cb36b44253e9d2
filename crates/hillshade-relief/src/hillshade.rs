//! Hillshade kernel.

use crate::{ReliefParams, Result};
use hillshade_common::RasterGrid;
use std::f64::consts::FRAC_PI_2;
use tracing::debug;

/// Relief value marking no-data and unshaded border pixels.
pub const RELIEF_NO_DATA: f32 = 0.0;

/// Offsets of the 3x3 window, row-major, north row first.
const WINDOW: [(i64, i64); 9] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (0, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Precomputed light direction.
struct Light {
    sin_alt: f64,
    sin_az_cos_alt: f64,
    cos_az_cos_alt: f64,
}

impl Light {
    fn new(params: &ReliefParams) -> Self {
        let az = params.azimuth.to_radians();
        let alt = params.altitude.to_radians();
        Self {
            sin_alt: alt.sin(),
            sin_az_cos_alt: az.sin() * alt.cos(),
            cos_az_cos_alt: az.cos() * alt.cos(),
        }
    }

    /// Relief byte for gradient `(p, q)`, never 0.
    #[inline]
    fn shade(&self, p: f64, q: f64, combined: bool) -> f32 {
        let slope_sq = p * p + q * q;
        let mut cang = (self.sin_alt - p * self.sin_az_cos_alt - q * self.cos_az_cos_alt)
            / (1.0 + slope_sq).sqrt();
        if combined {
            let slope = slope_sq.sqrt().atan();
            cang = 1.0 - cang.clamp(-1.0, 1.0).acos() * slope / (FRAC_PI_2 * FRAC_PI_2);
        }
        if cang <= 0.0 {
            1.0
        } else {
            (1.0 + 254.0 * cang).round() as f32
        }
    }
}

/// Compute the hillshade of an elevation grid.
///
/// The result has the same dimensions, bounds and reference system as
/// `elevation`, holds integral values in `0..=255` and declares
/// [`RELIEF_NO_DATA`] as its no-data value.
pub fn hillshade(elevation: &RasterGrid, params: &ReliefParams) -> Result<RasterGrid> {
    params.validate()?;

    let (width, height) = elevation.dimensions();
    let (ewres, nsres) = elevation.pixel_size();
    let exaggeration = params.z_factor / params.scale;
    let light = Light::new(params);
    let samples = elevation.data();
    let stride = width as usize;

    let mut out = vec![RELIEF_NO_DATA; samples.len()];
    let mut shaded = 0usize;

    for row in 0..height as i64 {
        'pixel: for col in 0..width as i64 {
            let center = samples[row as usize * stride + col as usize];
            if elevation.is_no_data(center) {
                continue;
            }

            let mut window = [0.0f64; 9];
            for (slot, (dc, dr)) in window.iter_mut().zip(WINDOW) {
                let (c, r) = (col + dc, row + dr);
                let inside = c >= 0 && r >= 0 && c < width as i64 && r < height as i64;
                let value = if inside {
                    Some(samples[r as usize * stride + c as usize])
                        .filter(|v| !elevation.is_no_data(*v))
                } else {
                    None
                };
                *slot = match value {
                    Some(v) => v as f64,
                    None if params.compute_edges => center as f64,
                    None => continue 'pixel,
                };
            }

            let (p, q) = params.algorithm.gradient(&window, ewres, nsres);
            out[row as usize * stride + col as usize] =
                light.shade(p * exaggeration, q * exaggeration, params.combined);
            shaded += 1;
        }
    }

    debug!(
        algorithm = %params.algorithm,
        width,
        height,
        shaded,
        z_factor = params.z_factor,
        scale = params.scale,
        "Computed hillshade"
    );

    Ok(
        RasterGrid::new(width, height, elevation.bounds(), elevation.srs(), out)?
            .with_no_data(Some(RELIEF_NO_DATA)),
    )
}
