//! Render and crop windows for a tile.

use crate::{world_resolution, TileIndex};
use hillshade_common::{BoundingBox, WEB_MERCATOR_HALF_EXTENT};

/// Default tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 256;

/// Largest supported tile edge; a buffered render is three tiles wide.
pub const MAX_TILE_SIZE: u32 = 4096;

/// Pixel window that strips the neighbor buffer from a rendered raster.
///
/// `(x1, y1)` is inclusive and `(x2, y2)` exclusive, in render-raster pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropWindow {
    /// Left edge.
    pub x1: u32,
    /// Top edge.
    pub y1: u32,
    /// Right edge (exclusive).
    pub x2: u32,
    /// Bottom edge (exclusive).
    pub y2: u32,
}

impl CropWindow {
    /// Crop width in pixels.
    pub fn width(&self) -> u32 {
        self.x2 - self.x1
    }

    /// Crop height in pixels.
    pub fn height(&self) -> u32 {
        self.y2 - self.y1
    }
}

/// Everything needed to render one tile with its neighbor buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderWindow {
    /// The tile being rendered.
    pub tile: TileIndex,
    /// Projected extent of the buffered tile range.
    pub bounds: BoundingBox,
    /// Render raster width in pixels (a multiple of the tile size).
    pub width: u32,
    /// Render raster height in pixels (a multiple of the tile size).
    pub height: u32,
    /// Window holding the tile itself inside the render raster.
    pub crop: CropWindow,
}

/// Maps tile indices onto the projected world square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGeometry {
    /// Tile edge length in pixels.
    pub tile_size_px: u32,
    /// Half the projected world width.
    pub half_extent: f64,
}

impl Default for TileGeometry {
    fn default() -> Self {
        Self {
            tile_size_px: DEFAULT_TILE_SIZE,
            half_extent: WEB_MERCATOR_HALF_EXTENT,
        }
    }
}

impl TileGeometry {
    /// Create a geometry with explicit constants.
    pub fn new(tile_size_px: u32, half_extent: f64) -> Self {
        Self {
            tile_size_px,
            half_extent,
        }
    }

    /// Projected width of one tile at zoom `z`.
    pub fn tile_span(&self, z: u8) -> f64 {
        2.0 * self.half_extent / world_resolution(z) as f64
    }

    /// X coordinate of the west edge of column `col`.
    ///
    /// Computed from the edge index, so neighbors share edges exactly.
    fn edge_x(&self, z: u8, col: u32) -> f64 {
        -self.half_extent + col as f64 * self.tile_span(z)
    }

    /// Y coordinate of the north edge of row `row`.
    fn edge_y(&self, z: u8, row: u32) -> f64 {
        self.half_extent - row as f64 * self.tile_span(z)
    }

    /// Projected bounds of a single tile.
    pub fn tile_bounds(&self, tile: TileIndex) -> BoundingBox {
        self.cell_bounds(tile.z, tile.x, tile.y)
    }

    /// Bounds of a single tile from its edge indices.
    fn cell_bounds(&self, z: u8, col: u32, row: u32) -> BoundingBox {
        BoundingBox {
            min_x: self.edge_x(z, col),
            max_x: self.edge_x(z, col + 1),
            max_y: self.edge_y(z, row),
            min_y: self.edge_y(z, row + 1),
        }
    }

    /// Bounds of the inclusive tile range `first..=last`.
    fn range_bounds(&self, z: u8, first: (u32, u32), last: (u32, u32)) -> BoundingBox {
        self.cell_bounds(z, first.0, first.1)
            .union(&self.cell_bounds(z, last.0, last.1))
    }

    /// Render region for `tile`: the tile plus one tile toward every existing
    /// neighbor, and the crop window that removes that buffer again.
    pub fn render_window(&self, tile: TileIndex) -> RenderWindow {
        let size = self.tile_size_px;
        let (x_first, x_last, width, x1, x2) =
            Self::buffer_axis(tile.x, tile.has_west(), tile.has_east(), size);
        let (y_first, y_last, height, y1, y2) =
            Self::buffer_axis(tile.y, tile.has_north(), tile.has_south(), size);

        RenderWindow {
            tile,
            bounds: self.range_bounds(tile.z, (x_first, y_first), (x_last, y_last)),
            width,
            height,
            crop: CropWindow { x1, y1, x2, y2 },
        }
    }

    /// Buffering along one axis.
    ///
    /// Returns `(first_index, last_index, render_px, crop_start, crop_end)`.
    fn buffer_axis(index: u32, before: bool, after: bool, size: u32) -> (u32, u32, u32, u32, u32) {
        let mut render = size;
        let mut crop_start = 0;
        let mut first = index;
        if before {
            crop_start = size;
            render += size;
            first -= 1;
        }

        let mut crop_end = render;
        let mut last = index;
        if after {
            render += size;
            crop_end = render - size;
            last += 1;
        }

        (first, last, render, crop_start, crop_end)
    }
}
