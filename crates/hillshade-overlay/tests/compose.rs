//! Integration tests for relief to tile composition.

use hillshade_common::{BoundingBox, RasterGrid, SpatialRef};
use hillshade_overlay::{encode_png, OverlayCompositor, OverlayParams};
use hillshade_tile::{CropWindow, TileGeometry, TileIndex};

fn relief(width: u32, height: u32, value: f32) -> RasterGrid {
    let bounds = BoundingBox::new(0.0, 0.0, width as f64, height as f64).unwrap();
    RasterGrid::filled(width, height, bounds, SpatialRef::WebMercator, value)
        .unwrap()
        .with_no_data(Some(0.0))
}

#[test]
fn test_flat_relief_is_fully_transparent_at_every_zoom() {
    let compositor = OverlayCompositor::default();
    let geometry = TileGeometry::default();
    for z in [1u8, 10, 12, 17, 19] {
        let tile = TileIndex::new(z, 1, 1).unwrap();
        let window = geometry.render_window(tile);
        let grid = relief(window.width, window.height, 181.0);
        let image = compositor.compose(&grid, z, window.crop);
        assert_eq!(image.dimensions(), (256, 256));
        assert!(
            image.pixels().all(|p| p[3] == 0),
            "zoom {} should be fully transparent",
            z
        );
    }
}

#[test]
fn test_shadow_is_translucent_black() {
    let compositor = OverlayCompositor::default();
    let grid = relief(768, 768, 100.0);
    let crop = CropWindow {
        x1: 256,
        y1: 256,
        x2: 512,
        y2: 512,
    };
    // No blur below zoom 12, no resize for a 256 crop
    let image = compositor.compose(&grid, 8, crop);
    assert!(image.pixels().all(|p| p.0 == [0, 0, 0, 81]));
}

#[test]
fn test_no_data_is_transparent() {
    let compositor = OverlayCompositor::default();
    let grid = relief(256, 256, 0.0);
    let crop = CropWindow {
        x1: 0,
        y1: 0,
        x2: 256,
        y2: 256,
    };
    let image = compositor.compose(&grid, 0, crop);
    assert!(image.pixels().all(|p| p[3] == 0));
}

#[test]
fn test_blur_softens_shadow_edge() {
    let compositor = OverlayCompositor::default();
    // West half in shadow, east half flat
    let bounds = BoundingBox::new(0.0, 0.0, 768.0, 768.0).unwrap();
    let data = (0..768 * 768)
        .map(|i| if i % 768 < 384 { 100.0 } else { 181.0 })
        .collect();
    let grid = RasterGrid::new(768, 768, bounds, SpatialRef::WebMercator, data).unwrap();
    let crop = CropWindow {
        x1: 256,
        y1: 256,
        x2: 512,
        y2: 512,
    };

    let sharp = compositor.compose(&grid, 10, crop);
    assert_eq!(sharp.get_pixel(128, 128)[3], 0);
    assert_eq!(sharp.get_pixel(127, 128)[3], 81);

    let soft = compositor.compose(&grid, 16, crop);
    let edge = soft.get_pixel(128, 128)[3];
    assert!(edge > 0 && edge < 81, "blurred edge alpha was {}", edge);
}

#[test]
fn test_custom_tile_size_resizes() {
    let compositor = OverlayCompositor::new(OverlayParams {
        tile_size: 128,
        ..OverlayParams::default()
    });
    let grid = relief(256, 256, 181.0);
    let crop = CropWindow {
        x1: 0,
        y1: 0,
        x2: 256,
        y2: 256,
    };
    let image = compositor.compose(&grid, 3, crop);
    assert_eq!(image.dimensions(), (128, 128));
    assert_eq!(compositor.empty_tile().dimensions(), (128, 128));
}

#[test]
fn test_multiband_image_input() {
    let compositor = OverlayCompositor::default();
    let rgb = image::RgbImage::from_pixel(256, 256, image::Rgb([181, 181, 181]));
    let crop = CropWindow {
        x1: 0,
        y1: 0,
        x2: 256,
        y2: 256,
    };
    let image = compositor.compose_image(&image::DynamicImage::ImageRgb8(rgb), 5, crop);
    assert!(image.pixels().all(|p| p[3] == 0));
}

#[test]
fn test_encoded_tile_decodes_with_alpha() {
    let tile = OverlayCompositor::default().empty_tile();
    let bytes = encode_png(&tile).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert!(decoded.color().has_alpha());
    assert_eq!(decoded.to_rgba8(), tile);
}
