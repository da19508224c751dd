//! Reference white points for Lab conversion.
//!
//! A [`WhitePoint`] is the XYZ tristimulus value of the illuminant treated as
//! white, on the same scale as [`Xyz`](crate::Xyz) (Y = 100). All constants
//! use the CIE 1931 2° standard observer.
//!
//! | Constant | Illuminant | X | Y | Z |
//! |----------|------------|---|---|---|
//! | [`WhitePoint::D65`] | Daylight, ~6500K | 95.047 | 100.0 | 108.883 |
//! | [`WhitePoint::D50`] | Horizon light, ~5000K (ICC PCS) | 96.422 | 100.0 | 82.521 |
//! | [`WhitePoint::E`] | Equal energy | 100.0 | 100.0 | 100.0 |

use crate::error::{Error, Result};
use tracing::debug;

/// XYZ of a reference white.
///
/// [`Default`] is [`WhitePoint::D65`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WhitePoint {
    /// Xr
    pub x: f64,
    /// Yr
    pub y: f64,
    /// Zr
    pub z: f64,
}

impl WhitePoint {
    /// CIE standard illuminant D65.
    pub const D65: Self = Self::new(95.047, 100.0, 108.883);

    /// CIE standard illuminant D50.
    pub const D50: Self = Self::new(96.422, 100.0, 82.521);

    /// Equal-energy illuminant E.
    pub const E: Self = Self::new(100.0, 100.0, 100.0);

    /// Creates a white point without validation.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a white point, rejecting components that are zero or not
    /// finite.
    ///
    /// # Example
    ///
    /// ```
    /// use deltae_core::WhitePoint;
    ///
    /// assert!(WhitePoint::try_new(95.047, 100.0, 108.883).is_ok());
    /// assert!(WhitePoint::try_new(95.047, 0.0, 108.883).is_err());
    /// ```
    pub fn try_new(x: f64, y: f64, z: f64) -> Result<Self> {
        for (axis, value) in [('X', x), ('Y', y), ('Z', z)] {
            if !value.is_finite() || value == 0.0 {
                debug!(%axis, value, "rejecting reference white");
                return Err(Error::InvalidWhitePoint { axis, value });
            }
        }
        Ok(Self::new(x, y, z))
    }

    /// Returns the components as `[x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Default for WhitePoint {
    fn default() -> Self {
        Self::D65
    }
}
