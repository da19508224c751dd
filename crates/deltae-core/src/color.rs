//! Color value types: [`Rgb`], [`Xyz`] and [`Lab`].
//!
//! Each type is a plain `Copy` triple of `f64`. None of them clamp or
//! validate on construction; use [`Rgb::try_new`] when input comes from an
//! untrusted source.
//!
//! # Example
//!
//! ```
//! use deltae_core::{Lab, Rgb};
//!
//! let orange = Rgb::from([255u8, 128, 0]);
//! assert_eq!(orange.to_array(), [255.0, 128.0, 0.0]);
//!
//! let lab = Lab::new(50.0, 0.0, -20.0);
//! assert!((lab.chroma() - 20.0).abs() < 1e-12);
//! assert!((lab.hue() - 270.0).abs() < 1e-12);
//! ```

use crate::error::{Error, Result};
use std::fmt;
use tracing::debug;

/// Gamma-encoded device RGB, nominally in [0, 255] per channel.
///
/// Fractional channel values are allowed for sub-integer precision.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel
    pub r: f64,
    /// Green channel
    pub g: f64,
    /// Blue channel
    pub b: f64,
}

impl Rgb {
    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White (255, 255, 255).
    pub const WHITE: Self = Self::new(255.0, 255.0, 255.0);

    /// Creates an RGB triple without validation.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates an RGB triple, rejecting channels that are not finite or
    /// fall outside [0, 255].
    ///
    /// # Example
    ///
    /// ```
    /// use deltae_core::Rgb;
    ///
    /// assert!(Rgb::try_new(12.5, 0.0, 255.0).is_ok());
    /// assert!(Rgb::try_new(f64::NAN, 0.0, 0.0).is_err());
    /// ```
    pub fn try_new(r: f64, g: f64, b: f64) -> Result<Self> {
        for (channel, value) in [('R', r), ('G', g), ('B', b)] {
            if !value.is_finite() || !(0.0..=255.0).contains(&value) {
                debug!(%channel, value, "rejecting RGB channel");
                return Err(Error::ChannelOutOfRange { channel, value });
            }
        }
        Ok(Self::new(r, g, b))
    }

    /// Returns the channels as `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    #[inline]
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0] as f64, rgb[1] as f64, rgb[2] as f64)
    }
}

impl From<[f64; 3]> for Rgb {
    #[inline]
    fn from(rgb: [f64; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// CIE-XYZ tristimulus values, scaled so that a reference white has Y ≈ 100.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    /// X tristimulus value
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value
    pub z: f64,
}

impl Xyz {
    /// Creates an XYZ triple.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the components as `[x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Xyz {
    #[inline]
    fn from(xyz: [f64; 3]) -> Self {
        Self::new(xyz[0], xyz[1], xyz[2])
    }
}

impl fmt::Display for Xyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "xyz({}, {}, {})", self.x, self.y, self.z)
    }
}

/// CIE-Lab color.
///
/// `l` is nominally in [0, 100]; `a` and `b` are unbounded and never
/// clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    /// Lightness L*
    pub l: f64,
    /// Green-red axis a*
    pub a: f64,
    /// Blue-yellow axis b*
    pub b: f64,
}

impl Lab {
    /// Creates a Lab triple.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma `sqrt(a² + b²)`.
    #[inline]
    pub fn chroma(self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    /// Hue angle `atan2(b, a)` in degrees, normalized into [0, 360).
    ///
    /// Neutral colors (a = b = 0) report a hue of 0.
    #[inline]
    pub fn hue(self) -> f64 {
        let h = self.b.atan2(self.a).to_degrees();
        if h < 0.0 { h + 360.0 } else { h }
    }

    /// Returns the components as `[l, a, b]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }
}

impl From<[f64; 3]> for Lab {
    #[inline]
    fn from(lab: [f64; 3]) -> Self {
        Self::new(lab[0], lab[1], lab[2])
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lab({}, {}, {})", self.l, self.a, self.b)
    }
}
