//! Single-band raster grid.

use crate::{BoundingBox, GridError, Result, SpatialRef};

/// A single-band raster of f32 samples.
///
/// Samples are stored in row-major order, north to south, west to east.
/// The pixel-to-world mapping is implied by `bounds` and the dimensions:
/// pixel `(col, row)` covers `[min_x + col*dx, min_x + (col+1)*dx]` horizontally
/// and `[max_y - (row+1)*dy, max_y - row*dy]` vertically.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterGrid {
    width: u32,
    height: u32,
    bounds: BoundingBox,
    srs: SpatialRef,
    data: Vec<f32>,
    no_data: Option<f32>,
}

impl RasterGrid {
    /// Wrap an existing sample buffer.
    pub fn new(
        width: u32,
        height: u32,
        bounds: BoundingBox,
        srs: SpatialRef,
        data: Vec<f32>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(GridError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            bounds,
            srs,
            data,
            no_data: None,
        })
    }

    /// Create a grid with every sample set to `value`.
    pub fn filled(
        width: u32,
        height: u32,
        bounds: BoundingBox,
        srs: SpatialRef,
        value: f32,
    ) -> Result<Self> {
        let len = width as usize * height as usize;
        Self::new(width, height, bounds, srs, vec![value; len])
    }

    /// Attach a no-data marker.
    pub fn with_no_data(mut self, no_data: Option<f32>) -> Self {
        self.no_data = no_data;
        self
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// World extent covered by the grid.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Spatial reference of `bounds`.
    pub fn srs(&self) -> SpatialRef {
        self.srs
    }

    /// No-data marker, if any.
    pub fn no_data(&self) -> Option<f32> {
        self.no_data
    }

    /// Sample buffer in row-major order.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutable sample buffer.
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Pixel size `(dx, dy)` in world units, both positive.
    pub fn pixel_size(&self) -> (f64, f64) {
        (
            self.bounds.width() / self.width as f64,
            self.bounds.height() / self.height as f64,
        )
    }

    /// World coordinate of the center of pixel `(col, row)`.
    pub fn pixel_center(&self, col: u32, row: u32) -> (f64, f64) {
        let (dx, dy) = self.pixel_size();
        (
            self.bounds.min_x + (col as f64 + 0.5) * dx,
            self.bounds.max_y - (row as f64 + 0.5) * dy,
        )
    }

    /// Sample at `(col, row)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, col: u32, row: u32) -> Option<f32> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.data[row as usize * self.width as usize + col as usize])
    }

    /// Overwrite the sample at `(col, row)`.
    ///
    /// # Panics
    /// Panics if the pixel is outside the grid.
    #[inline]
    pub fn set(&mut self, col: u32, row: u32, value: f32) {
        assert!(
            col < self.width && row < self.height,
            "pixel ({}, {}) outside {}x{} grid",
            col,
            row,
            self.width,
            self.height
        );
        self.data[row as usize * self.width as usize + col as usize] = value;
    }

    /// True if `value` is the no-data marker (or NaN).
    #[inline]
    pub fn is_no_data(&self, value: f32) -> bool {
        if value.is_nan() {
            return true;
        }
        match self.no_data {
            Some(nodata) => value == nodata,
            None => false,
        }
    }
}
