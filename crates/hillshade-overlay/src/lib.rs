//! # hillshade-overlay
//!
//! Converts a relief raster into the final translucent map tile.
//!
//! Bright relief (lit slopes) becomes fully transparent, dark relief
//! (shadows) becomes increasingly opaque black, so the tile can be laid over
//! any base map.
//!
//! ## Pipeline
//!
//! 1. relief → 8-bit intensity, no-data as 0
//! 2. invert, use as alpha over black
//! 3. alpha remap: no-data pixels vanish, everything else is lightened by
//!    [`DEFAULT_ALPHA_LIGHTEN`] (flat terrain ends up fully transparent)
//! 4. zoom-dependent Gaussian blur ([`BlurPolicy`])
//! 5. crop away the neighbor buffer
//! 6. Lanczos3 resize to the tile size
//! 7. PNG, written atomically ([`write_png`])

mod compositor;
mod error;
mod output;
mod params;

pub use compositor::{remap_alpha, OverlayCompositor};
pub use error::OverlayError;
pub use output::{encode_png, write_png};
pub use params::{
    BlurPolicy, OverlayParams, DEFAULT_ALPHA_LIGHTEN, DEFAULT_BLUR_BASE_ZOOM,
    DEFAULT_BLUR_BOOST_FACTOR, DEFAULT_BLUR_BOOST_ZOOM, DEFAULT_MIN_BLUR_RADIUS,
};

/// Result type for overlay operations.
pub type Result<T> = std::result::Result<T, OverlayError>;
