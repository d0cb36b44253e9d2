//! Georeferenced single-band GeoTIFF writing.
//!
//! Files written here carry ModelPixelScale, ModelTiepoint, a GeoKey
//! directory and GDAL_NODATA, so [`DemRaster::from_file`](crate::DemRaster::from_file)
//! reads them back with identical georeferencing.

use crate::geokeys::{GeoKeys, GEO_KEY_DIRECTORY_TAG};
use crate::raster::{GDAL_NODATA_TAG, MODEL_PIXEL_SCALE_TAG, MODEL_TIEPOINT_TAG};
use crate::Result;
use hillshade_common::RasterGrid;
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;
use tiff::encoder::colortype::{self, ColorType};
use tiff::encoder::{DirectoryEncoder, TiffEncoder, TiffKind, TiffValue};
use tiff::tags::Tag;
use tracing::debug;

/// Write an elevation grid as Float32.
pub fn write_elevation<P: AsRef<Path>>(path: P, grid: &RasterGrid) -> Result<()> {
    write_grid::<colortype::Gray32Float, _>(path.as_ref(), grid, grid.data().to_vec())
}

/// Write a relief grid as Byte.
///
/// Samples are rounded and clamped to `0..=255`; no-data becomes the
/// grid's no-data value clamped the same way.
pub fn write_relief<P: AsRef<Path>>(path: P, grid: &RasterGrid) -> Result<()> {
    let bytes = grid
        .data()
        .iter()
        .map(|&v| if v.is_nan() { 0 } else { v.round().clamp(0.0, 255.0) as u8 })
        .collect();
    write_grid::<colortype::Gray8, _>(path.as_ref(), grid, bytes)
}

fn write_grid<C, T>(path: &Path, grid: &RasterGrid, samples: Vec<T>) -> Result<()>
where
    C: ColorType<Inner = T>,
    [T]: TiffValue,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    {
        let mut encoder = TiffEncoder::new(&mut writer)?;
        let mut image = encoder.new_image::<C>(grid.width(), grid.height())?;
        write_georeferencing(image.encoder(), grid)?;
        image.write_data(&samples)?;
    }
    writer.flush()?;

    debug!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        srs = %grid.srs(),
        "Wrote GeoTIFF"
    );
    Ok(())
}

fn write_georeferencing<W: Write + Seek, K: TiffKind>(
    directory: &mut DirectoryEncoder<'_, W, K>,
    grid: &RasterGrid,
) -> Result<()> {
    let bounds = grid.bounds();
    let (dx, dy) = grid.pixel_size();

    directory.write_tag(Tag::Unknown(MODEL_PIXEL_SCALE_TAG), &[dx, dy, 0.0][..])?;
    directory.write_tag(
        Tag::Unknown(MODEL_TIEPOINT_TAG),
        &[0.0, 0.0, 0.0, bounds.min_x, bounds.max_y, 0.0][..],
    )?;
    let keys = GeoKeys::directory_for(grid.srs());
    directory.write_tag(Tag::Unknown(GEO_KEY_DIRECTORY_TAG), &keys[..])?;
    if let Some(no_data) = grid.no_data() {
        directory.write_tag(Tag::Unknown(GDAL_NODATA_TAG), no_data.to_string().as_str())?;
    }
    Ok(())
}
