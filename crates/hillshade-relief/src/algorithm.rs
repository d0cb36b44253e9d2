//! Slope estimators.

use std::fmt;

/// First zoom rendered with [`SlopeAlgorithm::ZevenbergenThorne`].
pub const ALGORITHM_SWITCH_ZOOM: u8 = 11;

/// How terrain gradients are estimated from the 3x3 neighbourhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlopeAlgorithm {
    /// Horn (1981), weighted 3x3 differences.
    Horn,
    /// Zevenbergen & Thorne (1987), 4-neighbour central differences.
    ZevenbergenThorne,
}

impl SlopeAlgorithm {
    /// Standard choice for zoom `z`.
    pub fn for_zoom(z: u8) -> Self {
        Self::for_zoom_with_switch(z, ALGORITHM_SWITCH_ZOOM)
    }

    /// Horn below `switch_zoom`, Zevenbergen-Thorne from it up.
    pub fn for_zoom_with_switch(z: u8, switch_zoom: u8) -> Self {
        if z >= switch_zoom {
            SlopeAlgorithm::ZevenbergenThorne
        } else {
            SlopeAlgorithm::Horn
        }
    }

    /// Name as used by `gdaldem -alg`.
    pub fn name(&self) -> &'static str {
        match self {
            SlopeAlgorithm::Horn => "Horn",
            SlopeAlgorithm::ZevenbergenThorne => "ZevenbergenThorne",
        }
    }

    /// Gradient `(dz/dx, dz/dy)` of a 3x3 window.
    ///
    /// `window` is row-major with row 0 to the north. X grows east, Y grows
    /// north. `ewres` and `nsres` are positive pixel sizes.
    #[inline]
    pub(crate) fn gradient(&self, window: &[f64; 9], ewres: f64, nsres: f64) -> (f64, f64) {
        let [a, b, c, d, _, f, g, h, i] = *window;
        match self {
            SlopeAlgorithm::Horn => (
                ((c + 2.0 * f + i) - (a + 2.0 * d + g)) / (8.0 * ewres),
                ((a + 2.0 * b + c) - (g + 2.0 * h + i)) / (8.0 * nsres),
            ),
            SlopeAlgorithm::ZevenbergenThorne => ((f - d) / (2.0 * ewres), (b - h) / (2.0 * nsres)),
        }
    }
}

impl fmt::Display for SlopeAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_switch_zoom() {
        assert_eq!(SlopeAlgorithm::for_zoom(0), SlopeAlgorithm::Horn);
        assert_eq!(SlopeAlgorithm::for_zoom(10), SlopeAlgorithm::Horn);
        assert_eq!(SlopeAlgorithm::for_zoom(11), SlopeAlgorithm::ZevenbergenThorne);
        assert_eq!(SlopeAlgorithm::for_zoom(18), SlopeAlgorithm::ZevenbergenThorne);
        assert_eq!(
            SlopeAlgorithm::for_zoom_with_switch(12, 13),
            SlopeAlgorithm::Horn
        );
    }

    #[test]
    fn test_planar_gradient_agrees() {
        // z = 3x + 2y on a 10m grid, rows listed north first
        let window = [
            20.0, 50.0, 80.0, //
            0.0, 30.0, 60.0, //
            -20.0, 10.0, 40.0,
        ];
        for algorithm in [SlopeAlgorithm::Horn, SlopeAlgorithm::ZevenbergenThorne] {
            let (p, q) = algorithm.gradient(&window, 10.0, 10.0);
            assert_relative_eq!(p, 3.0);
            assert_relative_eq!(q, 2.0);
        }
    }

    #[test]
    fn test_display_matches_gdaldem() {
        assert_eq!(SlopeAlgorithm::Horn.to_string(), "Horn");
        assert_eq!(
            SlopeAlgorithm::ZevenbergenThorne.to_string(),
            "ZevenbergenThorne"
        );
    }
}
