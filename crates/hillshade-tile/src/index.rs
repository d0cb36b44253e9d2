//! Tile indices.

use crate::{Result, TileError};
use std::fmt;

/// Maximum supported zoom level.
pub const MAX_ZOOM: u8 = 24;

/// Number of tiles per axis at zoom `z` (`2^z`).
#[inline]
pub fn world_resolution(z: u8) -> u32 {
    1u32 << z
}

/// OSM-style tile coordinates (z, x, y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileIndex {
    /// Zoom level.
    pub z: u8,
    /// X coordinate (column, 0 at 180°W, increases eastward).
    pub x: u32,
    /// Y coordinate (row, 0 at ~85.05°N, increases southward).
    pub y: u32,
}

impl TileIndex {
    /// Create a validated tile index.
    pub fn new(z: u8, x: u32, y: u32) -> Result<Self> {
        Self::checked(z as u32, x, y)
    }

    /// Validate an index given as plain integers, e.g. from user input.
    pub fn checked(z: u32, x: u32, y: u32) -> Result<Self> {
        if z > MAX_ZOOM as u32 {
            return Err(TileError::InvalidZoom {
                zoom: z,
                max: MAX_ZOOM,
            });
        }
        let z = z as u8;
        let limit = world_resolution(z);
        if x >= limit || y >= limit {
            return Err(TileError::OutOfRange { z, x, y, limit });
        }
        Ok(Self { z, x, y })
    }

    /// Number of tiles per axis at this tile's zoom.
    pub fn world_resolution(&self) -> u32 {
        world_resolution(self.z)
    }

    /// The tile offset by `(dx, dy)`, or `None` past the world edge.
    ///
    /// The world does not wrap: the tile west of column 0 does not exist.
    pub fn neighbor(&self, dx: i64, dy: i64) -> Option<TileIndex> {
        let limit = self.world_resolution() as i64;
        let x = self.x as i64 + dx;
        let y = self.y as i64 + dy;
        if (0..limit).contains(&x) && (0..limit).contains(&y) {
            Some(TileIndex {
                z: self.z,
                x: x as u32,
                y: y as u32,
            })
        } else {
            None
        }
    }

    /// True if there is a tile to the west.
    pub fn has_west(&self) -> bool {
        self.x > 0
    }

    /// True if there is a tile to the east.
    pub fn has_east(&self) -> bool {
        self.x < self.world_resolution() - 1
    }

    /// True if there is a tile to the north.
    pub fn has_north(&self) -> bool {
        self.y > 0
    }

    /// True if there is a tile to the south.
    pub fn has_south(&self) -> bool {
        self.y < self.world_resolution() - 1
    }
}

impl fmt::Display for TileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}
