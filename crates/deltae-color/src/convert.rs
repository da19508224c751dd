//! Device RGB to CIE-XYZ to CIE-Lab conversion.
//!
//! Two free functions carry the math ([`rgb_to_xyz`], [`xyz_to_lab`]); the
//! [`ToXyz`] and [`ToLab`] traits wrap them for chained use.
//!
//! # Example
//!
//! ```rust
//! use deltae_color::convert::{ToLab, ToXyz};
//! use deltae_core::{Rgb, WhitePoint};
//!
//! let lab = Rgb::new(255.0, 255.0, 255.0)
//!     .to_xyz()
//!     .to_lab(WhitePoint::D65);
//! assert!((lab.l - 100.0).abs() < 1e-6);
//! ```

use deltae_core::{Lab, Rgb, WhitePoint, Xyz};
use deltae_math::Mat3;
use deltae_transfer::srgb;

/// Linear sRGB (scaled to 100) to XYZ, D65.
///
/// Four-digit coefficients, so a white of R = G = B = 100 lands on
/// (95.05, 100.0, 108.9) rather than exactly on [`WhitePoint::D65`].
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
]);

/// Lab breakpoint δ = 6/29.
const DELTA: f64 = 6.0 / 29.0;

/// Converts gamma-encoded device RGB in [0, 255] to CIE-XYZ (white Y = 100).
///
/// Each channel is normalized by 255, decoded with the sRGB EOTF, scaled by
/// 100 and multiplied by [`SRGB_TO_XYZ`]. Out-of-range channels are not
/// rejected; they just produce out-of-range XYZ.
///
/// # Example
///
/// ```rust
/// use deltae_color::rgb_to_xyz;
/// use deltae_core::Rgb;
///
/// let xyz = rgb_to_xyz(Rgb::new(255.0, 0.0, 0.0));
/// assert!((xyz.x - 41.24).abs() < 1e-9);
/// assert!((xyz.y - 21.26).abs() < 1e-9);
/// ```
pub fn rgb_to_xyz(rgb: Rgb) -> Xyz {
    let linear = srgb::eotf_rgb(rgb.to_array().map(|c| c / 255.0)).map(|c| 100.0 * c);
    Xyz::from(SRGB_TO_XYZ * linear)
}

/// Lab companding: cube root above δ³, linear below.
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// Converts CIE-XYZ to CIE-Lab relative to the given reference white.
///
/// A zero white component is a division by zero and yields infinity or
/// NaN; use [`WhitePoint::try_new`] to rule that out up front.
///
/// # Example
///
/// ```rust
/// use deltae_color::xyz_to_lab;
/// use deltae_core::{WhitePoint, Xyz};
///
/// let lab = xyz_to_lab(Xyz::new(95.047, 100.0, 108.883), WhitePoint::D65);
/// assert!((lab.l - 100.0).abs() < 1e-9);
/// assert!(lab.a.abs() < 1e-9 && lab.b.abs() < 1e-9);
/// ```
pub fn xyz_to_lab(xyz: Xyz, white: WhitePoint) -> Lab {
    let x = lab_f(xyz.x / white.x);
    let y = lab_f(xyz.y / white.y);
    let z = lab_f(xyz.z / white.z);

    Lab::new(116.0 * y - 16.0, 500.0 * (x - y), 200.0 * (y - z))
}

/// [`xyz_to_lab`] with the D65 reference white.
#[inline]
pub fn xyz_to_lab_d65(xyz: Xyz) -> Lab {
    xyz_to_lab(xyz, WhitePoint::D65)
}

/// Device RGB straight to Lab: [`rgb_to_xyz`] followed by [`xyz_to_lab`].
#[inline]
pub fn rgb_to_lab(rgb: Rgb, white: WhitePoint) -> Lab {
    xyz_to_lab(rgb_to_xyz(rgb), white)
}

/// Conversion to CIE-XYZ.
pub trait ToXyz {
    /// Converts to XYZ (white Y = 100).
    fn to_xyz(self) -> Xyz;
}

/// Conversion to CIE-Lab.
pub trait ToLab {
    /// Converts to Lab relative to `white`.
    fn to_lab(self, white: WhitePoint) -> Lab;

    /// Converts to Lab relative to D65.
    fn to_lab_d65(self) -> Lab
    where
        Self: Sized,
    {
        self.to_lab(WhitePoint::D65)
    }
}

impl ToXyz for Rgb {
    #[inline]
    fn to_xyz(self) -> Xyz {
        rgb_to_xyz(self)
    }
}

impl ToLab for Rgb {
    #[inline]
    fn to_lab(self, white: WhitePoint) -> Lab {
        rgb_to_lab(self, white)
    }
}

impl ToLab for Xyz {
    #[inline]
    fn to_lab(self, white: WhitePoint) -> Lab {
        xyz_to_lab(self, white)
    }
}
