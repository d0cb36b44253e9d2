//! Integration tests for GeoTIFF round trips and warping.
//!
//! DEMs are synthesized into a temporary directory with the crate's own writer.

use approx::assert_relative_eq;
use hillshade_common::{BoundingBox, RasterGrid, SpatialRef, WEB_MERCATOR_HALF_EXTENT};
use hillshade_dem::{geotiff, DemError, DemRaster, RasterSource, Resampling, WarpRequest};
use std::path::PathBuf;
use tempfile::TempDir;

/// A west-to-east ramp: elevation = column * 10.
fn ramp_grid(width: u32, height: u32, bounds: BoundingBox, srs: SpatialRef) -> RasterGrid {
    let data = (0..height)
        .flat_map(|_| (0..width).map(|col| col as f32 * 10.0))
        .collect();
    RasterGrid::new(width, height, bounds, srs, data).unwrap()
}

fn write_dem(dir: &TempDir, name: &str, grid: &RasterGrid) -> PathBuf {
    let path = dir.path().join(name);
    geotiff::write_elevation(&path, grid).expect("Failed to write DEM");
    path
}

#[test]
fn test_elevation_roundtrip_preserves_georeferencing() {
    let dir = TempDir::new().unwrap();
    let bounds = BoundingBox::new(-1000.0, 2000.0, 3000.0, 4000.0).unwrap();
    let grid = ramp_grid(8, 4, bounds, SpatialRef::WebMercator).with_no_data(Some(-9999.0));
    let path = write_dem(&dir, "ramp.tif", &grid);

    let dem = DemRaster::from_file(&path).expect("Failed to read DEM");
    assert_eq!(dem.dimensions(), (8, 4));
    assert_eq!(dem.srs(), SpatialRef::WebMercator);
    assert_eq!(dem.no_data_value(), Some(-9999.0));
    assert_relative_eq!(dem.bounds().min_x, -1000.0);
    assert_relative_eq!(dem.bounds().max_y, 4000.0);
    assert_relative_eq!(dem.bounds().max_x, 3000.0);
    assert_relative_eq!(dem.bounds().min_y, 2000.0);

    let back = dem.into_grid().unwrap();
    assert_eq!(back.data(), grid.data());
}

#[test]
fn test_relief_roundtrip_is_byte() {
    let dir = TempDir::new().unwrap();
    let bounds = BoundingBox::new(0.0, 0.0, 2.0, 2.0).unwrap();
    let grid = RasterGrid::new(2, 2, bounds, SpatialRef::Geographic, vec![0.0, 180.6, 254.9, 300.0])
        .unwrap()
        .with_no_data(Some(0.0));
    let path = dir.path().join("relief.tif");
    geotiff::write_relief(&path, &grid).unwrap();

    let dem = DemRaster::from_file(&path).unwrap();
    assert_eq!(dem.srs(), SpatialRef::Geographic);
    assert_eq!(dem.no_data_value(), Some(0.0));
    assert_eq!(dem.into_grid().unwrap().data(), &[0.0, 181.0, 255.0, 255.0]);
}

#[test]
fn test_identity_warp_is_exact_for_every_kernel() {
    let dir = TempDir::new().unwrap();
    let bounds = BoundingBox::new(0.0, 0.0, 1600.0, 800.0).unwrap();
    let grid = ramp_grid(16, 8, bounds, SpatialRef::WebMercator);
    let dem = DemRaster::from_file(write_dem(&dir, "ramp.tif", &grid)).unwrap();

    for resampling in [Resampling::Nearest, Resampling::Bilinear, Resampling::Cubic] {
        let request =
            WarpRequest::new(bounds, SpatialRef::WebMercator, 16, 8).with_resampling(resampling);
        let warped = dem.warp(&request).unwrap();
        for (a, b) in warped.data().iter().zip(grid.data()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-3);
        }
    }
}

#[test]
fn test_cubic_upsampling_of_linear_ramp_stays_linear() {
    let dir = TempDir::new().unwrap();
    let bounds = BoundingBox::new(0.0, 0.0, 1600.0, 800.0).unwrap();
    let grid = ramp_grid(16, 8, bounds, SpatialRef::WebMercator);
    let dem = DemRaster::from_file(write_dem(&dir, "ramp.tif", &grid)).unwrap();

    // Interior window, 4x finer; cubic convolution reproduces linear data
    let window = BoundingBox::new(400.0, 200.0, 1200.0, 600.0).unwrap();
    let warped = dem
        .warp(&WarpRequest::new(window, SpatialRef::WebMercator, 32, 16))
        .unwrap();
    for col in 0..32 {
        let (x, _) = warped.pixel_center(col, 8);
        // Source sample centers sit at 50 + 100*i with value 10*i
        let expected = ((x - 50.0) / 100.0 * 10.0) as f32;
        assert_relative_eq!(warped.get(col, 8).unwrap(), expected, epsilon = 1e-3);
    }
}

#[test]
fn test_outside_extent_is_no_data() {
    let dir = TempDir::new().unwrap();
    let bounds = BoundingBox::new(0.0, 0.0, 1000.0, 1000.0).unwrap();
    let grid = RasterGrid::filled(10, 10, bounds, SpatialRef::WebMercator, 42.0).unwrap();
    let dem = DemRaster::from_file(write_dem(&dir, "flat.tif", &grid)).unwrap();

    // Half of the request lies west of the DEM
    let request_bounds = BoundingBox::new(-1000.0, 0.0, 1000.0, 1000.0).unwrap();
    let warped = dem
        .warp(&WarpRequest::new(request_bounds, SpatialRef::WebMercator, 20, 10))
        .unwrap();
    let no_data = warped.no_data().expect("warped grids carry a no-data value");
    assert_eq!(no_data, hillshade_dem::DEFAULT_NO_DATA);
    assert_eq!(warped.get(0, 5), Some(no_data));
    assert_eq!(warped.get(9, 5), Some(no_data));
    assert_relative_eq!(warped.get(10, 5).unwrap(), 42.0);
    assert_relative_eq!(warped.get(19, 5).unwrap(), 42.0);
}

#[test]
fn test_no_data_taps_propagate() {
    let dir = TempDir::new().unwrap();
    let bounds = BoundingBox::new(0.0, 0.0, 800.0, 800.0).unwrap();
    let mut grid = RasterGrid::filled(8, 8, bounds, SpatialRef::WebMercator, 5.0)
        .unwrap()
        .with_no_data(Some(-1.0));
    grid.set(4, 4, -1.0);
    let dem = DemRaster::from_file(write_dem(&dir, "hole.tif", &grid)).unwrap();

    // Half-pixel shift so every cubic tap carries weight
    let shifted = BoundingBox::new(50.0, 50.0, 750.0, 750.0).unwrap();
    let warped = dem
        .warp(&WarpRequest::new(shifted, SpatialRef::WebMercator, 7, 7))
        .unwrap();
    assert_eq!(warped.no_data(), Some(-1.0));
    assert_eq!(warped.get(3, 3), Some(-1.0), "hole must not be interpolated over");
    assert_relative_eq!(warped.get(0, 0).unwrap(), 5.0, epsilon = 1e-4);
}

#[test]
fn test_non_intersecting_request_fails() {
    let dir = TempDir::new().unwrap();
    let bounds = BoundingBox::new(0.0, 0.0, 1000.0, 1000.0).unwrap();
    let grid = RasterGrid::filled(4, 4, bounds, SpatialRef::WebMercator, 1.0).unwrap();
    let dem = DemRaster::from_file(write_dem(&dir, "small.tif", &grid)).unwrap();

    let far = BoundingBox::new(5000.0, 5000.0, 6000.0, 6000.0).unwrap();
    let err = dem
        .warp(&WarpRequest::new(far, SpatialRef::WebMercator, 4, 4))
        .unwrap_err();
    assert!(matches!(err, DemError::NoIntersection { .. }));
}

#[test]
fn test_geographic_dem_warps_into_mercator() {
    let dir = TempDir::new().unwrap();
    let bounds = BoundingBox::new(-180.0, -80.0, 180.0, 80.0).unwrap();
    let grid = RasterGrid::filled(36, 16, bounds, SpatialRef::Geographic, 250.0).unwrap();
    let dem = DemRaster::from_file(write_dem(&dir, "world.tif", &grid)).unwrap();
    assert_eq!(dem.srs(), SpatialRef::Geographic);

    let half = WEB_MERCATOR_HALF_EXTENT / 4.0;
    let request_bounds = BoundingBox::new(-half, -half, half, half).unwrap();
    let warped = dem
        .warp(&WarpRequest::new(request_bounds, SpatialRef::WebMercator, 64, 64))
        .unwrap();
    assert_eq!(warped.srs(), SpatialRef::WebMercator);
    for value in warped.data() {
        assert_relative_eq!(*value, 250.0, epsilon = 1e-3);
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let err = DemRaster::from_file("/nonexistent/dem.tif").unwrap_err();
    assert!(matches!(err, DemError::Io(_)));
}

#[test]
fn test_not_a_tiff_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bogus.tif");
    std::fs::write(&path, b"definitely not a tiff").unwrap();
    assert!(DemRaster::from_file(&path).is_err());
}
