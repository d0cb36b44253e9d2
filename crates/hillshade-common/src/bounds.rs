//! Axis-aligned bounding boxes.

use crate::{mercator, GridError, Result, SpatialRef};

/// Bounding box in a coordinate reference system.
///
/// Always satisfies `min_x < max_x` and `min_y < max_y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// West edge.
    pub min_x: f64,
    /// South edge.
    pub min_y: f64,
    /// East edge.
    pub max_x: f64,
    /// North edge.
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a bounding box, rejecting empty, inverted or non-finite extents.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self> {
        let finite = [min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite());
        if !finite || min_x >= max_x || min_y >= max_y {
            return Err(GridError::InvalidBounds {
                min_x,
                min_y,
                max_x,
                max_y,
            });
        }
        Ok(Self {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    /// Extent along X.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent along Y.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Smallest box covering both `self` and `other`.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// True if the interiors of the two boxes overlap.
    ///
    /// Boxes that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }

    /// Convert a Web Mercator box to longitude/latitude degrees.
    ///
    /// The projection is monotonic along each axis, so converting the two
    /// corners is exact.
    pub fn mercator_to_geographic(&self) -> BoundingBox {
        let (min_lon, min_lat) = mercator::mercator_to_lon_lat(self.min_x, self.min_y);
        let (max_lon, max_lat) = mercator::mercator_to_lon_lat(self.max_x, self.max_y);
        BoundingBox {
            min_x: min_lon,
            min_y: min_lat,
            max_x: max_lon,
            max_y: max_lat,
        }
    }

    /// Convert a longitude/latitude box to Web Mercator meters.
    ///
    /// Latitudes beyond the Mercator limit are clamped first.
    pub fn geographic_to_mercator(&self) -> BoundingBox {
        let (min_x, min_y) = mercator::lon_lat_to_mercator(self.min_x, self.min_y);
        let (max_x, max_y) = mercator::lon_lat_to_mercator(self.max_x, self.max_y);
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Re-express this box, given in `from`, in the `to` reference.
    pub fn transform(&self, from: SpatialRef, to: SpatialRef) -> BoundingBox {
        match (from, to) {
            (SpatialRef::WebMercator, SpatialRef::Geographic) => self.mercator_to_geographic(),
            (SpatialRef::Geographic, SpatialRef::WebMercator) => self.geographic_to_mercator(),
            _ => *self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_inverted_bounds() {
        assert!(BoundingBox::new(10.0, 0.0, 0.0, 10.0).is_err());
        assert!(BoundingBox::new(0.0, 10.0, 10.0, 0.0).is_err());
        assert!(BoundingBox::new(0.0, 0.0, 0.0, 10.0).is_err());
        assert!(BoundingBox::new(0.0, 0.0, f64::NAN, 10.0).is_err());
    }

    #[test]
    fn test_union_and_intersects() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0).unwrap();
        let b = BoundingBox::new(10.0, 0.0, 20.0, 10.0).unwrap();
        let c = BoundingBox::new(5.0, 5.0, 15.0, 15.0).unwrap();

        // Shared edge only
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));

        let u = a.union(&b);
        assert_eq!(u, BoundingBox::new(0.0, 0.0, 20.0, 10.0).unwrap());
        assert_eq!(u.width(), 20.0);
        assert_eq!(u.height(), 10.0);
    }

    #[test]
    fn test_geographic_roundtrip() {
        let merc = BoundingBox::new(-1_000_000.0, 2_000_000.0, 500_000.0, 3_000_000.0).unwrap();
        let geo = merc.mercator_to_geographic();
        assert!(geo.min_x < geo.max_x && geo.min_y < geo.max_y);

        let back = geo.geographic_to_mercator();
        assert_relative_eq!(back.min_x, merc.min_x, epsilon = 1e-6);
        assert_relative_eq!(back.min_y, merc.min_y, epsilon = 1e-6);
        assert_relative_eq!(back.max_x, merc.max_x, epsilon = 1e-6);
        assert_relative_eq!(back.max_y, merc.max_y, epsilon = 1e-6);
    }
}
