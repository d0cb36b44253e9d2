//! Web Mercator (EPSG:3857) conversions and spatial reference selection.

use serde::Deserialize;
use std::f64::consts::PI;
use std::fmt;

/// Half the Web Mercator world width in meters (π × 6378137).
pub const WEB_MERCATOR_HALF_EXTENT: f64 = 20_037_508.342_789_244;

/// Largest latitude representable in Web Mercator (arctan(sinh(π))).
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;

/// Meters per degree at the equator, used to scale degree grids to meters.
pub const METERS_PER_DEGREE: f64 = 111_120.0;

/// Spatial reference of a raster or bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpatialRef {
    /// EPSG:3857, meters.
    #[default]
    WebMercator,
    /// EPSG:4326, degrees of longitude/latitude.
    Geographic,
}

impl SpatialRef {
    /// EPSG code of this reference.
    pub fn epsg(&self) -> u32 {
        match self {
            SpatialRef::WebMercator => 3857,
            SpatialRef::Geographic => 4326,
        }
    }

    /// Map an EPSG code onto a supported reference.
    ///
    /// Includes the legacy Web Mercator aliases and the common WGS84-equivalent
    /// geographic datums.
    pub fn from_epsg(code: u32) -> Option<Self> {
        match code {
            3857 | 3785 | 900913 | 102100 | 102113 => Some(SpatialRef::WebMercator),
            4326 | 4269 | 4258 => Some(SpatialRef::Geographic),
            _ => None,
        }
    }

    /// Ratio of vertical (meters) to horizontal units, as used by slope
    /// computations.
    pub fn horizontal_scale(&self) -> f64 {
        match self {
            SpatialRef::WebMercator => 1.0,
            SpatialRef::Geographic => METERS_PER_DEGREE,
        }
    }

    /// Transform a coordinate from `self` into `target`.
    #[inline]
    pub fn transform_to(&self, target: SpatialRef, x: f64, y: f64) -> (f64, f64) {
        match (self, target) {
            (SpatialRef::WebMercator, SpatialRef::Geographic) => mercator_to_lon_lat(x, y),
            (SpatialRef::Geographic, SpatialRef::WebMercator) => lon_lat_to_mercator(x, y),
            _ => (x, y),
        }
    }
}

impl fmt::Display for SpatialRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.epsg())
    }
}

/// Web Mercator meters to longitude/latitude degrees.
#[inline]
pub fn mercator_to_lon_lat(x: f64, y: f64) -> (f64, f64) {
    let lon = x * 180.0 / WEB_MERCATOR_HALF_EXTENT;
    let y_rad = y * PI / WEB_MERCATOR_HALF_EXTENT;
    let lat = (2.0 * y_rad.exp().atan() - PI / 2.0).to_degrees();
    (lon, lat)
}

/// Longitude/latitude degrees to Web Mercator meters.
///
/// Latitude is clamped to ±[`MAX_MERCATOR_LAT`].
#[inline]
pub fn lon_lat_to_mercator(lon: f64, lat: f64) -> (f64, f64) {
    let lat = lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT);
    let x = lon * WEB_MERCATOR_HALF_EXTENT / 180.0;
    let y = (PI / 4.0 + lat.to_radians() / 2.0).tan().ln() * WEB_MERCATOR_HALF_EXTENT / PI;
    (x, y)
}
