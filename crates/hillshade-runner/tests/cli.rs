//! Exit-code tests for the `hillshade` binary.

use std::process::Command;
use tempfile::TempDir;

fn hillshade(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_hillshade"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run hillshade")
}

#[test]
fn test_missing_arguments_exit_2() {
    let output = hillshade(&["dem.tif", "out.png", "3"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_out_of_range_tile_exits_2_before_reading_dem() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("tile.png");
    let output = hillshade(&["/nonexistent/dem.tif", out.to_str().unwrap(), "3", "8", "0"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(!out.exists());

    let output = hillshade(&["/nonexistent/dem.tif", out.to_str().unwrap(), "25", "0", "0"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_missing_dem_exits_1() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("tile.png");
    let output = hillshade(&["/nonexistent/dem.tif", out.to_str().unwrap(), "3", "1", "1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!out.exists());
    assert!(!output.stderr.is_empty(), "failure should be logged to stderr");
}

#[test]
fn test_bad_config_exits_1() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("render.yaml");
    std::fs::write(&config, "min_zoom: 9\nmax_zoom: 3\n").unwrap();
    let out = dir.path().join("tile.png");
    let output = hillshade(&[
        "--config",
        config.to_str().unwrap(),
        "/nonexistent/dem.tif",
        out.to_str().unwrap(),
        "3",
        "1",
        "1",
    ]);
    assert_eq!(output.status.code(), Some(1));
}
