//! GeoTIFF GeoKey directory parsing.
//!
//! The directory (tag 34735) is a flat `u16` array: a 4-value header
//! `[version, revision, minor, key_count]` followed by `key_count` entries of
//! `[key_id, tag_location, count, value]`. Only keys stored inline
//! (`tag_location == 0`) are needed here.

use crate::{DemError, Result};
use hillshade_common::{BoundingBox, SpatialRef};

/// GeoKeyDirectoryTag.
pub(crate) const GEO_KEY_DIRECTORY_TAG: u16 = 34735;

pub(crate) const GT_MODEL_TYPE_KEY: u16 = 1024;
pub(crate) const GT_RASTER_TYPE_KEY: u16 = 1025;
pub(crate) const GEOGRAPHIC_TYPE_KEY: u16 = 2048;
pub(crate) const PROJECTED_CS_TYPE_KEY: u16 = 3072;

pub(crate) const MODEL_TYPE_PROJECTED: u16 = 1;
pub(crate) const MODEL_TYPE_GEOGRAPHIC: u16 = 2;
pub(crate) const RASTER_PIXEL_IS_AREA: u16 = 1;
pub(crate) const RASTER_PIXEL_IS_POINT: u16 = 2;

const USER_DEFINED: u16 = 32767;

/// The subset of GeoKeys the reader cares about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct GeoKeys {
    /// GTModelTypeGeoKey.
    pub model_type: Option<u16>,
    /// GTRasterTypeGeoKey (area or point).
    pub raster_type: Option<u16>,
    /// GeographicTypeGeoKey.
    pub geographic_type: Option<u16>,
    /// ProjectedCSTypeGeoKey.
    pub projected_type: Option<u16>,
}

impl GeoKeys {
    /// Parse a GeoKey directory.
    pub fn parse(directory: &[u16]) -> Result<Self> {
        if directory.len() < 4 {
            return Err(DemError::InvalidGeoTiff(
                "GeoKey directory shorter than its header".to_string(),
            ));
        }

        let key_count = directory[3] as usize;
        let mut keys = GeoKeys::default();
        for entry in directory[4..].chunks_exact(4).take(key_count) {
            let (key_id, location, value) = (entry[0], entry[1], entry[3]);
            if location != 0 {
                // Value lives in another tag (doubles or ASCII); not needed
                continue;
            }
            match key_id {
                GT_MODEL_TYPE_KEY => keys.model_type = Some(value),
                GT_RASTER_TYPE_KEY => keys.raster_type = Some(value),
                GEOGRAPHIC_TYPE_KEY => keys.geographic_type = Some(value),
                PROJECTED_CS_TYPE_KEY => keys.projected_type = Some(value),
                _ => {}
            }
        }
        Ok(keys)
    }

    /// Build a directory describing `srs` with pixel-is-area semantics.
    pub fn directory_for(srs: SpatialRef) -> Vec<u16> {
        let (model_type, crs_key) = match srs {
            SpatialRef::WebMercator => (MODEL_TYPE_PROJECTED, PROJECTED_CS_TYPE_KEY),
            SpatialRef::Geographic => (MODEL_TYPE_GEOGRAPHIC, GEOGRAPHIC_TYPE_KEY),
        };
        vec![
            1, 1, 0, 3, //
            GT_MODEL_TYPE_KEY, 0, 1, model_type, //
            GT_RASTER_TYPE_KEY, 0, 1, RASTER_PIXEL_IS_AREA, //
            crs_key, 0, 1, srs.epsg() as u16,
        ]
    }

    /// True if tie points refer to pixel centers rather than corners.
    pub fn is_pixel_is_point(&self) -> bool {
        self.raster_type == Some(RASTER_PIXEL_IS_POINT)
    }

    /// Resolve the spatial reference.
    ///
    /// An explicit projected CRS wins, then a geographic model. Files without
    /// any keys fall back to a guess from their bounds: an extent that fits in
    /// ±180°/±90° is taken as degrees.
    pub fn spatial_ref(&self, bounds: &BoundingBox) -> Result<SpatialRef> {
        if let Some(code) = self.projected_type {
            if code == USER_DEFINED {
                return Err(DemError::UnsupportedCrs(
                    "user-defined projected CRS".to_string(),
                ));
            }
            return SpatialRef::from_epsg(code as u32)
                .ok_or_else(|| DemError::UnsupportedCrs(format!("EPSG:{}", code)));
        }

        if self.model_type == Some(MODEL_TYPE_GEOGRAPHIC) || self.geographic_type.is_some() {
            return match self.geographic_type {
                None | Some(USER_DEFINED) => Ok(SpatialRef::Geographic),
                Some(code) => match SpatialRef::from_epsg(code as u32) {
                    Some(SpatialRef::Geographic) => Ok(SpatialRef::Geographic),
                    _ => Err(DemError::UnsupportedCrs(format!("EPSG:{}", code))),
                },
            };
        }

        if self.model_type == Some(MODEL_TYPE_PROJECTED) {
            return Err(DemError::UnsupportedCrs(
                "projected CRS without an EPSG code".to_string(),
            ));
        }

        let degrees = bounds.min_x >= -180.0
            && bounds.max_x <= 180.0
            && bounds.min_y >= -90.0
            && bounds.max_y <= 90.0;
        Ok(if degrees {
            SpatialRef::Geographic
        } else {
            SpatialRef::WebMercator
        })
    }
}
