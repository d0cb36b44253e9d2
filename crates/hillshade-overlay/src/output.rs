//! PNG encoding and atomic tile writes.

use crate::Result;
use image::{ImageFormat, RgbaImage};
use std::io::{Cursor, Write};
use std::path::Path;
use tempfile::Builder;
use tracing::debug;

/// Encode a tile as PNG with alpha.
pub fn encode_png(tile: &RgbaImage) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    tile.write_to(&mut cursor, ImageFormat::Png)?;
    Ok(cursor.into_inner())
}

/// Write a tile to `path` as PNG.
///
/// The PNG is written to a temporary file next to `path` and renamed over
/// it, so readers never observe a partial tile and an existing tile is
/// replaced whole.
pub fn write_png<P: AsRef<Path>>(path: P, tile: &RgbaImage) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_png(tile)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = Builder::new()
        .prefix(".tile-")
        .suffix(".png.tmp")
        .tempfile_in(dir)?;
    temp.write_all(&bytes)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    debug!(path = %path.display(), bytes = bytes.len(), "Wrote tile");
    Ok(())
}
