//! Overlay parameters.

use hillshade_tile::DEFAULT_TILE_SIZE;

/// Alpha subtracted from every shaded pixel.
///
/// Flat terrain shades to 181, which inverts to 74, so flat ground is
/// fully transparent.
pub const DEFAULT_ALPHA_LIGHTEN: u8 = 74;
/// Zoom at which blurring starts to grow.
pub const DEFAULT_BLUR_BASE_ZOOM: u8 = 10;
/// Zoom from which the blur radius is boosted.
pub const DEFAULT_BLUR_BOOST_ZOOM: u8 = 17;
/// Boost applied to the blur radius at high zooms.
pub const DEFAULT_BLUR_BOOST_FACTOR: f32 = 1.5;
/// Radii at or below this are not worth blurring.
pub const DEFAULT_MIN_BLUR_RADIUS: f32 = 1.0;

/// Zoom-dependent Gaussian blur radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurPolicy {
    /// Radius is `z - base_zoom`.
    pub base_zoom: u8,
    /// First zoom whose radius is multiplied by `boost_factor`.
    pub boost_zoom: u8,
    /// Multiplier applied from `boost_zoom`.
    pub boost_factor: f32,
    /// Radii at or below this skip the blur.
    pub min_radius: f32,
}

impl Default for BlurPolicy {
    fn default() -> Self {
        Self {
            base_zoom: DEFAULT_BLUR_BASE_ZOOM,
            boost_zoom: DEFAULT_BLUR_BOOST_ZOOM,
            boost_factor: DEFAULT_BLUR_BOOST_FACTOR,
            min_radius: DEFAULT_MIN_BLUR_RADIUS,
        }
    }
}

impl BlurPolicy {
    /// Nominal radius at zoom `z`; may be zero or negative.
    pub fn radius(&self, z: u8) -> f32 {
        let radius = z as f32 - self.base_zoom as f32;
        if z >= self.boost_zoom {
            radius * self.boost_factor
        } else {
            radius
        }
    }

    /// Gaussian sigma to apply at zoom `z`, or `None` to skip blurring.
    pub fn sigma(&self, z: u8) -> Option<f32> {
        let radius = self.radius(z);
        (radius > self.min_radius).then_some(radius)
    }
}

/// Parameters of the overlay compositor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayParams {
    /// Edge length of the final tile.
    pub tile_size: u32,
    /// See [`DEFAULT_ALPHA_LIGHTEN`].
    pub alpha_lighten: u8,
    /// Blur schedule.
    pub blur: BlurPolicy,
}

impl Default for OverlayParams {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            alpha_lighten: DEFAULT_ALPHA_LIGHTEN,
            blur: BlurPolicy::default(),
        }
    }
}
