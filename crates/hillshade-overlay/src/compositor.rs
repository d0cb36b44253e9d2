//! Relief to RGBA overlay.

use crate::OverlayParams;
use hillshade_common::RasterGrid;
use hillshade_tile::CropWindow;
use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Rgba, RgbaImage};
use tracing::debug;

/// Composes relief rasters into overlay tiles.
#[derive(Debug, Clone, Default)]
pub struct OverlayCompositor {
    params: OverlayParams,
}

impl OverlayCompositor {
    /// Create a compositor with the given parameters.
    pub fn new(params: OverlayParams) -> Self {
        Self { params }
    }

    /// Parameters in use.
    pub fn params(&self) -> &OverlayParams {
        &self.params
    }

    /// A fully transparent tile.
    pub fn empty_tile(&self) -> RgbaImage {
        let size = self.params.tile_size;
        RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]))
    }

    /// Relief raster as an 8-bit intensity image.
    ///
    /// Values are rounded and clamped; no-data becomes 0.
    pub fn intensity_image(relief: &RasterGrid) -> GrayImage {
        let (width, height) = relief.dimensions();
        let pixels = relief
            .data()
            .iter()
            .map(|&v| {
                if relief.is_no_data(v) {
                    0
                } else {
                    v.round().clamp(0.0, 255.0) as u8
                }
            })
            .collect();
        GrayImage::from_raw(width, height, pixels).expect("RasterGrid length matches dimensions")
    }

    /// Compose a relief raster into a tile, cropping out `crop`.
    pub fn compose(&self, relief: &RasterGrid, z: u8, crop: CropWindow) -> RgbaImage {
        self.compose_gray(Self::intensity_image(relief), z, crop)
    }

    /// Compose an already decoded relief image; multi-band input is reduced
    /// to luminance.
    pub fn compose_image(&self, relief: &DynamicImage, z: u8, crop: CropWindow) -> RgbaImage {
        self.compose_gray(relief.to_luma8(), z, crop)
    }

    fn compose_gray(&self, mut intensity: GrayImage, z: u8, crop: CropWindow) -> RgbaImage {
        let (width, height) = intensity.dimensions();
        assert!(
            crop.x1 < crop.x2 && crop.y1 < crop.y2 && crop.x2 <= width && crop.y2 <= height,
            "crop window {:?} outside {}x{} raster",
            crop,
            width,
            height
        );

        imageops::invert(&mut intensity);
        let mut overlay = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([0, 0, 0, intensity.get_pixel(x, y)[0]])
        });
        remap_alpha(&mut overlay, self.params.alpha_lighten);

        let sigma = self.params.blur.sigma(z);
        if let Some(sigma) = sigma {
            overlay = imageops::blur(&overlay, sigma);
        }

        let cropped =
            imageops::crop_imm(&overlay, crop.x1, crop.y1, crop.width(), crop.height()).to_image();

        let size = self.params.tile_size;
        let tile = if cropped.dimensions() == (size, size) {
            cropped
        } else {
            imageops::resize(&cropped, size, size, FilterType::Lanczos3)
        };

        debug!(
            z,
            width,
            height,
            radius = self.params.blur.radius(z),
            blurred = sigma.is_some(),
            ?crop,
            "Composed overlay"
        );
        tile
    }
}

/// Alpha remap over black RGBA pixels.
///
/// Opaque black (a no-data or fully shadowed sample before lightening)
/// becomes fully transparent. Every other pixel loses `lighten` alpha,
/// clamped at 0.
pub fn remap_alpha(image: &mut RgbaImage, lighten: u8) {
    for pixel in image.chunks_exact_mut(4) {
        if *pixel == [0, 0, 0, 255] {
            pixel[3] = 0;
        } else {
            pixel[3] = pixel[3].saturating_sub(lighten);
        }
    }
}
