//! Reprojection and resampling onto a target grid.

use crate::raster::DemRaster;
use crate::{DemError, Result};
use hillshade_common::{BoundingBox, RasterGrid, SpatialRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// No-data marker for warped grids when the source declares none.
pub const DEFAULT_NO_DATA: f32 = -32768.0;

/// Keys cubic convolution parameter.
const CUBIC_A: f64 = -0.5;

/// Taps lighter than this are ignored when checking for no-data.
const WEIGHT_EPSILON: f64 = 1e-9;

/// Resampling kernel used when warping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resampling {
    /// Nearest neighbour.
    Nearest,
    /// 2x2 bilinear.
    Bilinear,
    /// 4x4 cubic convolution.
    #[default]
    Cubic,
}

impl fmt::Display for Resampling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resampling::Nearest => "nearest",
            Resampling::Bilinear => "bilinear",
            Resampling::Cubic => "cubic",
        };
        f.write_str(name)
    }
}

/// Target grid of a warp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarpRequest {
    /// Target extent, in `srs`.
    pub bounds: BoundingBox,
    /// Target reference system.
    pub srs: SpatialRef,
    /// Target width in pixels.
    pub width: u32,
    /// Target height in pixels.
    pub height: u32,
    /// Kernel.
    pub resampling: Resampling,
}

impl WarpRequest {
    /// A cubic warp request.
    pub fn new(bounds: BoundingBox, srs: SpatialRef, width: u32, height: u32) -> Self {
        Self {
            bounds,
            srs,
            width,
            height,
            resampling: Resampling::default(),
        }
    }

    /// Replace the kernel.
    pub fn with_resampling(mut self, resampling: Resampling) -> Self {
        self.resampling = resampling;
        self
    }
}

/// Something that can produce elevation on an arbitrary target grid.
pub trait RasterSource {
    /// Reproject and resample onto `request`.
    fn warp(&self, request: &WarpRequest) -> Result<RasterGrid>;
}

/// Source taps and weights along one axis.
#[derive(Debug, Clone, Copy)]
struct AxisTaps {
    index: [usize; 4],
    weight: [f64; 4],
    len: usize,
}

impl AxisTaps {
    fn single(index: usize) -> Self {
        Self {
            index: [index, 0, 0, 0],
            weight: [1.0, 0.0, 0.0, 0.0],
            len: 1,
        }
    }

    /// Taps for a continuous pixel-space position, or `None` outside `[0, size]`.
    fn at(position: f64, size: usize, resampling: Resampling) -> Option<Self> {
        if !position.is_finite() || position < 0.0 || position > size as f64 {
            return None;
        }
        let last = size as isize - 1;
        let clamp = |i: isize| i.clamp(0, last) as usize;

        match resampling {
            Resampling::Nearest => Some(Self::single(clamp(position.floor() as isize))),
            Resampling::Bilinear => {
                let center = position - 0.5;
                let base = center.floor();
                let t = center - base;
                let base = base as isize;
                Some(Self {
                    index: [clamp(base), clamp(base + 1), 0, 0],
                    weight: [1.0 - t, t, 0.0, 0.0],
                    len: 2,
                })
            }
            Resampling::Cubic => {
                let center = position - 0.5;
                let base = center.floor();
                let t = center - base;
                let base = base as isize;
                Some(Self {
                    index: [
                        clamp(base - 1),
                        clamp(base),
                        clamp(base + 1),
                        clamp(base + 2),
                    ],
                    weight: [
                        keys_weight(1.0 + t),
                        keys_weight(t),
                        keys_weight(1.0 - t),
                        keys_weight(2.0 - t),
                    ],
                    len: 4,
                })
            }
        }
    }
}

/// Keys cubic convolution kernel.
fn keys_weight(x: f64) -> f64 {
    let x = x.abs();
    if x <= 1.0 {
        ((CUBIC_A + 2.0) * x - (CUBIC_A + 3.0)) * x * x + 1.0
    } else if x < 2.0 {
        ((CUBIC_A * x - 5.0 * CUBIC_A) * x + 8.0 * CUBIC_A) * x - 4.0 * CUBIC_A
    } else {
        0.0
    }
}

impl DemRaster {
    fn sample(&self, cols: &AxisTaps, rows: &AxisTaps) -> Option<f32> {
        let mut sum = 0.0;
        for r in 0..rows.len {
            let wy = rows.weight[r];
            for c in 0..cols.len {
                let w = wy * cols.weight[c];
                match self.pixel(cols.index[c], rows.index[r]) {
                    Some(value) => sum += w * value as f64,
                    None if w.abs() > WEIGHT_EPSILON => return None,
                    None => {}
                }
            }
        }
        Some(sum as f32)
    }
}

impl RasterSource for DemRaster {
    fn warp(&self, request: &WarpRequest) -> Result<RasterGrid> {
        let source_srs = self.srs();
        let requested = request.bounds.transform(request.srs, source_srs);
        if !requested.intersects(&self.bounds()) {
            return Err(DemError::NoIntersection {
                requested,
                available: self.bounds(),
            });
        }

        let no_data = self.no_data_value().unwrap_or(DEFAULT_NO_DATA);
        let mut grid = RasterGrid::filled(
            request.width,
            request.height,
            request.bounds,
            request.srs,
            no_data,
        )?
        .with_no_data(Some(no_data));

        let (src_width, src_height) = self.dimensions();
        let transform = self.transform();

        // Both supported projections are separable: X depends only on the
        // column and Y only on the row.
        let col_taps: Vec<Option<AxisTaps>> = (0..request.width)
            .map(|col| {
                let (x, _) = grid.pixel_center(col, 0);
                let (sx, _) = request.srs.transform_to(source_srs, x, 0.0);
                let (px, _) = transform.world_to_pixel(sx, transform.origin_y);
                AxisTaps::at(px, src_width as usize, request.resampling)
            })
            .collect();
        let row_taps: Vec<Option<AxisTaps>> = (0..request.height)
            .map(|row| {
                let (_, y) = grid.pixel_center(0, row);
                let (_, sy) = request.srs.transform_to(source_srs, 0.0, y);
                let (_, py) = transform.world_to_pixel(transform.origin_x, sy);
                AxisTaps::at(py, src_height as usize, request.resampling)
            })
            .collect();

        let mut filled = 0usize;
        let width = request.width as usize;
        let data = grid.data_mut();
        for (row, rows) in row_taps.iter().enumerate() {
            let Some(rows) = rows else { continue };
            for (col, cols) in col_taps.iter().enumerate() {
                let Some(cols) = cols else { continue };
                if let Some(value) = self.sample(cols, rows) {
                    data[row * width + col] = value;
                    filled += 1;
                }
            }
        }

        trace!(filled, total = width * request.height as usize, "Warp coverage");
        debug!(
            from = %source_srs,
            to = %request.srs,
            width = request.width,
            height = request.height,
            resampling = %request.resampling,
            "Warped DEM"
        );

        Ok(grid)
    }
}
