//! Integration tests for hillshade values on synthetic terrain.

use hillshade_common::{BoundingBox, RasterGrid, SpatialRef};
use hillshade_relief::{hillshade, ReliefParams, SlopeAlgorithm, RELIEF_NO_DATA};

/// A `size` x `size` grid of 10 m pixels with elevation `f(col, row)`.
fn terrain(size: u32, f: impl Fn(u32, u32) -> f32) -> RasterGrid {
    let extent = size as f64 * 10.0;
    let bounds = BoundingBox::new(0.0, 0.0, extent, extent).unwrap();
    let data = (0..size)
        .flat_map(|row| (0..size).map(move |col| (col, row)))
        .map(|(col, row)| f(col, row))
        .collect();
    RasterGrid::new(size, size, bounds, SpatialRef::WebMercator, data).unwrap()
}

fn interior(grid: &RasterGrid) -> Vec<f32> {
    let (w, h) = grid.dimensions();
    (1..h - 1)
        .flat_map(|row| (1..w - 1).map(move |col| (col, row)))
        .map(|(col, row)| grid.get(col, row).unwrap())
        .collect()
}

#[test]
fn test_flat_terrain_is_181_for_both_algorithms() {
    let flat = terrain(8, |_, _| 321.0);
    for algorithm in [SlopeAlgorithm::Horn, SlopeAlgorithm::ZevenbergenThorne] {
        let params = ReliefParams {
            algorithm,
            ..ReliefParams::default()
        };
        let relief = hillshade(&flat, &params).unwrap();
        assert!(
            interior(&relief).iter().all(|&v| v == 181.0),
            "{} should shade flat terrain at 181",
            algorithm
        );
    }
}

#[test]
fn test_output_keeps_geometry() {
    let grid = terrain(6, |c, r| (c * r) as f32);
    let relief = hillshade(&grid, &ReliefParams::default()).unwrap();
    assert_eq!(relief.dimensions(), grid.dimensions());
    assert_eq!(relief.bounds(), grid.bounds());
    assert_eq!(relief.srs(), grid.srs());
    assert_eq!(relief.no_data(), Some(RELIEF_NO_DATA));
}

#[test]
fn test_borders_are_no_data_unless_computed() {
    let flat = terrain(5, |_, _| 10.0);
    let relief = hillshade(&flat, &ReliefParams::default()).unwrap();
    for i in 0..5 {
        assert_eq!(relief.get(i, 0), Some(0.0));
        assert_eq!(relief.get(i, 4), Some(0.0));
        assert_eq!(relief.get(0, i), Some(0.0));
        assert_eq!(relief.get(4, i), Some(0.0));
    }

    let params = ReliefParams {
        compute_edges: true,
        ..ReliefParams::default()
    };
    let relief = hillshade(&flat, &params).unwrap();
    assert!(relief.data().iter().all(|&v| v == 181.0));
}

#[test]
fn test_no_data_spreads_to_window() {
    let mut grid = terrain(7, |_, _| 50.0).with_no_data(Some(-9999.0));
    grid.set(3, 3, -9999.0);
    let relief = hillshade(&grid, &ReliefParams::default()).unwrap();
    for row in 2..=4 {
        for col in 2..=4 {
            assert_eq!(relief.get(col, row), Some(0.0), "({}, {})", col, row);
        }
    }
    assert_eq!(relief.get(1, 1), Some(181.0));
    assert_eq!(relief.get(5, 5), Some(181.0));

    // With edges computed only the hole itself stays empty
    let params = ReliefParams {
        compute_edges: true,
        ..ReliefParams::default()
    };
    let relief = hillshade(&grid, &params).unwrap();
    assert_eq!(relief.get(3, 3), Some(0.0));
    assert_eq!(relief.get(2, 2), Some(181.0));
}

#[test]
fn test_slope_facing_light_is_brighter() {
    // Rising to the south-east, so the surface faces the north-west light
    let facing = terrain(5, |c, r| (c + r) as f32 * 2.0);
    // Rising to the north-west, facing away
    let away = terrain(5, |c, r| (8 - c - r) as f32 * 2.0);

    let params = ReliefParams::default();
    let bright = hillshade(&facing, &params).unwrap().get(2, 2).unwrap();
    let dark = hillshade(&away, &params).unwrap().get(2, 2).unwrap();
    assert!(bright > 181.0, "lit slope got {}", bright);
    assert!(dark < 181.0, "shadowed slope got {}", dark);
}

#[test]
fn test_values_stay_in_byte_range() {
    let rough = terrain(16, |c, r| ((c * 37 + r * 91) % 23) as f32 * 40.0);
    for combined in [false, true] {
        let params = ReliefParams {
            combined,
            ..ReliefParams::default()
        };
        let relief = hillshade(&rough, &params).unwrap();
        for &v in interior(&relief).iter() {
            assert!((1.0..=255.0).contains(&v), "value {} out of range", v);
            assert_eq!(v, v.round());
        }
    }
}

#[test]
fn test_geographic_scale_flattens_relief() {
    // 10 m steps across ~1.1 km pixels are nearly flat
    let bounds = BoundingBox::new(0.0, 0.0, 0.05, 0.05).unwrap();
    let data = (0..25).map(|i| (i % 5) as f32 * 10.0).collect();
    let grid = RasterGrid::new(5, 5, bounds, SpatialRef::Geographic, data).unwrap();
    let params = ReliefParams::for_tile(12, SpatialRef::Geographic);
    let relief = hillshade(&grid, &params).unwrap();
    let center = relief.get(2, 2).unwrap();
    assert!((180.0..=186.0).contains(&center), "got {}", center);
}

#[test]
fn test_invalid_params_rejected() {
    let flat = terrain(3, |_, _| 0.0);
    let params = ReliefParams {
        z_factor: f64::NAN,
        ..ReliefParams::default()
    };
    assert!(hillshade(&flat, &params).is_err());
}
