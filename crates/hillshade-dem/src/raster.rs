//! Single GeoTIFF DEM raster.

use crate::geokeys::{GeoKeys, GEO_KEY_DIRECTORY_TAG};
use crate::{DemError, Result};
use hillshade_common::{BoundingBox, RasterGrid, SpatialRef};
use std::path::Path;
use tiff::decoder::{Decoder, DecodingResult, Limits};
use tiff::tags::Tag;
use tracing::debug;

/// ModelPixelScaleTag.
pub(crate) const MODEL_PIXEL_SCALE_TAG: u16 = 33550;
/// ModelTiepointTag.
pub(crate) const MODEL_TIEPOINT_TAG: u16 = 33922;
/// ModelTransformationTag.
pub(crate) const MODEL_TRANSFORMATION_TAG: u16 = 34264;
/// GDAL_NODATA, stored as an ASCII string.
pub(crate) const GDAL_NODATA_TAG: u16 = 42113;

/// Axis-aligned affine mapping from pixel to world coordinates.
///
/// Follows the GDAL convention: `pixel_height` is negative for north-up
/// rasters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoTransform {
    /// World X of the top-left pixel corner.
    pub origin_x: f64,
    /// World Y of the top-left pixel corner.
    pub origin_y: f64,
    /// World units per column.
    pub pixel_width: f64,
    /// World units per row (negative when row 0 is north).
    pub pixel_height: f64,
}

impl GeoTransform {
    /// World coordinate of the pixel-space point `(col, row)`.
    pub fn pixel_to_world(&self, col: f64, row: f64) -> (f64, f64) {
        (
            self.origin_x + col * self.pixel_width,
            self.origin_y + row * self.pixel_height,
        )
    }

    /// Continuous pixel-space position of a world coordinate.
    ///
    /// Pixel `(i, j)` covers `[i, i+1) x [j, j+1)`.
    #[inline]
    pub fn world_to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.origin_x) / self.pixel_width,
            (y - self.origin_y) / self.pixel_height,
        )
    }

    /// World extent of a `width` x `height` raster.
    fn extent(&self, width: u32, height: u32) -> Result<BoundingBox> {
        let (x0, y0) = self.pixel_to_world(0.0, 0.0);
        let (x1, y1) = self.pixel_to_world(width as f64, height as f64);
        BoundingBox::new(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
            .map_err(|e| DemError::InvalidGeoTiff(format!("degenerate extent: {}", e)))
    }
}

/// A single-band DEM loaded from a GeoTIFF file.
#[derive(Debug)]
pub struct DemRaster {
    /// Elevation data in row-major order.
    data: Vec<f32>,
    /// Width of the raster in pixels.
    width: u32,
    /// Height of the raster in pixels.
    height: u32,
    /// Pixel to world mapping.
    transform: GeoTransform,
    /// World extent.
    bounds: BoundingBox,
    /// Reference system of `transform`.
    srs: SpatialRef,
    /// No-data value (elevations equal to this should be treated as missing).
    no_data_value: Option<f32>,
}

impl DemRaster {
    /// Load a DEM from a GeoTIFF file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let mut decoder = Decoder::new(file)?;

        // Allow large DEM files: a 1/3 arc-second 1°x1° tile is
        // 10812 x 10812 f32 samples (~466 MB)
        let mut limits = Limits::default();
        limits.decoding_buffer_size = 1024 * 1024 * 1024; // 1 GB
        limits.intermediate_buffer_size = 1024 * 1024 * 1024; // 1 GB
        limits.ifd_value_size = 1024 * 1024 * 1024;
        decoder = decoder.with_limits(limits);

        let (width, height) = decoder.dimensions()?;

        let geo_keys = match decoder.get_tag_u16_vec(Tag::from_u16_exhaustive(GEO_KEY_DIRECTORY_TAG)) {
            Ok(directory) => GeoKeys::parse(&directory)?,
            Err(_) => GeoKeys::default(),
        };
        let transform = Self::read_geotransform(&mut decoder, &geo_keys)?;
        let bounds = transform.extent(width, height)?;
        let srs = geo_keys.spatial_ref(&bounds)?;

        let no_data_value = Self::read_nodata_value(&mut decoder);
        let data = Self::decode_elevation_data(&mut decoder, width, height)?;

        debug!(
            path = %path.display(),
            width,
            height,
            srs = %srs,
            ?bounds,
            ?no_data_value,
            "Loaded DEM raster"
        );

        Ok(Self {
            data,
            width,
            height,
            transform,
            bounds,
            srs,
            no_data_value,
        })
    }

    /// Read the geotransform from GeoTIFF tags.
    ///
    /// Prefers ModelTiepoint + ModelPixelScale and falls back to
    /// ModelTransformation. Rotated or sheared transformations are rejected.
    fn read_geotransform<R: std::io::Read + std::io::Seek>(
        decoder: &mut Decoder<R>,
        geo_keys: &GeoKeys,
    ) -> Result<GeoTransform> {
        let tiepoint = decoder.get_tag_f64_vec(Tag::from_u16_exhaustive(MODEL_TIEPOINT_TAG));
        let pixel_scale = decoder.get_tag_f64_vec(Tag::from_u16_exhaustive(MODEL_PIXEL_SCALE_TAG));

        let mut transform = match (tiepoint, pixel_scale) {
            (Ok(tiepoint), Ok(scale)) if tiepoint.len() >= 6 && scale.len() >= 2 => {
                // Tiepoint format: [i, j, k, x, y, z], raster (i, j) maps to world (x, y)
                let (i, j) = (tiepoint[0], tiepoint[1]);
                let (tie_x, tie_y) = (tiepoint[3], tiepoint[4]);
                let (scale_x, scale_y) = (scale[0], scale[1]);
                GeoTransform {
                    origin_x: tie_x - i * scale_x,
                    origin_y: tie_y + j * scale_y,
                    pixel_width: scale_x,
                    pixel_height: -scale_y,
                }
            }
            _ => {
                let matrix = decoder
                    .get_tag_f64_vec(Tag::from_u16_exhaustive(MODEL_TRANSFORMATION_TAG))
                    .map_err(|_| {
                        DemError::InvalidGeoTiff(
                            "missing ModelTiepoint/ModelPixelScale and ModelTransformation"
                                .to_string(),
                        )
                    })?;
                if matrix.len() < 16 {
                    return Err(DemError::InvalidGeoTiff(format!(
                        "ModelTransformation has {} values, expected 16",
                        matrix.len()
                    )));
                }
                if matrix[1] != 0.0 || matrix[4] != 0.0 {
                    return Err(DemError::InvalidGeoTiff(
                        "rotated rasters are not supported".to_string(),
                    ));
                }
                GeoTransform {
                    origin_x: matrix[3],
                    origin_y: matrix[7],
                    pixel_width: matrix[0],
                    pixel_height: matrix[5],
                }
            }
        };

        if transform.pixel_width == 0.0 || transform.pixel_height == 0.0 {
            return Err(DemError::InvalidGeoTiff("zero pixel size".to_string()));
        }

        // PixelIsPoint tie points refer to the pixel center
        if geo_keys.is_pixel_is_point() {
            transform.origin_x -= 0.5 * transform.pixel_width;
            transform.origin_y -= 0.5 * transform.pixel_height;
        }

        Ok(transform)
    }

    /// Decode elevation data from the TIFF decoder.
    ///
    /// Multi-sample images keep the first sample of every pixel.
    fn decode_elevation_data<R: std::io::Read + std::io::Seek>(
        decoder: &mut Decoder<R>,
        width: u32,
        height: u32,
    ) -> Result<Vec<f32>> {
        let result = decoder.read_image()?;

        let samples: Vec<f32> = match result {
            DecodingResult::F32(data) => data,
            DecodingResult::F64(data) => data.into_iter().map(|v| v as f32).collect(),
            DecodingResult::I16(data) => data.into_iter().map(|v| v as f32).collect(),
            DecodingResult::I32(data) => data.into_iter().map(|v| v as f32).collect(),
            DecodingResult::U16(data) => data.into_iter().map(|v| v as f32).collect(),
            DecodingResult::U32(data) => data.into_iter().map(|v| v as f32).collect(),
            DecodingResult::U8(data) => data.into_iter().map(|v| v as f32).collect(),
            DecodingResult::I8(data) => data.into_iter().map(|v| v as f32).collect(),
            DecodingResult::U64(data) => data.into_iter().map(|v| v as f32).collect(),
            DecodingResult::I64(data) => data.into_iter().map(|v| v as f32).collect(),
        };

        let pixels = width as usize * height as usize;
        if pixels == 0 || samples.len() < pixels {
            return Err(DemError::InvalidGeoTiff(format!(
                "decoded {} samples for a {}x{} raster",
                samples.len(),
                width,
                height
            )));
        }

        let samples_per_pixel = samples.len() / pixels;
        if samples_per_pixel == 1 {
            Ok(samples)
        } else {
            Ok(samples.into_iter().step_by(samples_per_pixel).take(pixels).collect())
        }
    }

    /// Try to read the no-data value from the GDAL_NODATA tag.
    fn read_nodata_value<R: std::io::Read + std::io::Seek>(decoder: &mut Decoder<R>) -> Option<f32> {
        let text = decoder
            .get_tag_ascii_string(Tag::from_u16_exhaustive(GDAL_NODATA_TAG))
            .ok()?;
        text.trim_matches(char::from(0)).trim().parse().ok()
    }

    /// Get the raw sample at a pixel, or `None` if it is no-data.
    ///
    /// The caller guarantees the pixel is inside the raster.
    #[inline]
    pub(crate) fn pixel(&self, col: usize, row: usize) -> Option<f32> {
        let value = self.data[row * self.width as usize + col];
        if value.is_nan() || self.no_data_value == Some(value) {
            None
        } else {
            Some(value)
        }
    }

    /// Get the world extent of this raster.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Get the spatial reference of this raster.
    pub fn srs(&self) -> SpatialRef {
        self.srs
    }

    /// Get the pixel to world mapping.
    pub fn transform(&self) -> GeoTransform {
        self.transform
    }

    /// Get the dimensions of this raster in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the no-data value, if the file declares one.
    pub fn no_data_value(&self) -> Option<f32> {
        self.no_data_value
    }

    /// Convert into a north-up [`RasterGrid`] covering the raster's extent.
    pub fn into_grid(self) -> Result<RasterGrid> {
        let width = self.width as usize;
        let mut data = self.data;
        if self.transform.pixel_height > 0.0 {
            // South-up: reverse row order
            let rows: Vec<Vec<f32>> = data.chunks(width).rev().map(|r| r.to_vec()).collect();
            data = rows.concat();
        }
        if self.transform.pixel_width < 0.0 {
            for row in data.chunks_mut(width) {
                row.reverse();
            }
        }
        Ok(
            RasterGrid::new(self.width, self.height, self.bounds, self.srs, data)?
                .with_no_data(self.no_data_value),
        )
    }
}
