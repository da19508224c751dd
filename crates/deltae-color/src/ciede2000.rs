//! CIEDE2000 color difference (ΔE00).
//!
//! CIE Technical Report 142-2001: a Euclidean distance in a warped
//! lightness/chroma/hue space, with empirical corrections for chroma,
//! hue and the rotation of the blue region.
//!
//! | ΔE00 | Perception |
//! |------|------------|
//! | < 1 | Not perceptible |
//! | 1 - 2 | Perceptible on close inspection |
//! | 2 - 10 | Perceptible at a glance |
//! | > 10 | Clearly different colors |
//!
//! # Reference
//!
//! G. Sharma, W. Wu, E. N. Dalal, "The CIEDE2000 Color-Difference Formula:
//! Implementation Notes, Supplementary Test Data, and Mathematical
//! Observations", Color Research & Application 30(1), 2005.

use deltae_core::{Lab, Rgb, Weights, WhitePoint};
use deltae_math::{wrap_positive, wrap_signed};
use std::f64::consts::PI;

use crate::convert::rgb_to_lab;

/// 25^7, the chroma pivot shared by G and RC.
const POW25_7: f64 = 6_103_515_625.0;

/// `sqrt(c⁷ / (c⁷ + 25⁷))`, shared by G and RC.
#[inline]
fn chroma_ratio(c: f64) -> f64 {
    let c7 = c.powi(7);
    (c7 / (c7 + POW25_7)).sqrt()
}

/// Computes the CIEDE2000 difference between two Lab colors.
///
/// The result is non-negative, 0 for identical inputs, and symmetric in
/// its arguments. Non-finite input propagates to a NaN or infinite result.
///
/// # Example
///
/// ```rust
/// use deltae_color::ciede2000;
/// use deltae_core::{Lab, Weights};
///
/// let de = ciede2000(
///     Lab::new(50.0, 2.6772, -79.7751),
///     Lab::new(50.0, 0.0, -82.7485),
///     Weights::default(),
/// );
/// assert!((de - 2.0425).abs() < 1e-4);
/// ```
pub fn ciede2000(lab1: Lab, lab2: Lab, weights: Weights) -> f64 {
    let Lab { l: l1, a: a1, b: b1 } = lab1;
    let Lab { l: l2, a: a2, b: b2 } = lab2;

    // Chroma-dependent a* stretch
    let c1 = (a1 * a1 + b1 * b1).sqrt();
    let c2 = (a2 * a2 + b2 * b2).sqrt();
    let g = 0.5 * (1.0 - chroma_ratio((c1 + c2) / 2.0));
    let ap1 = (1.0 + g) * a1;
    let ap2 = (1.0 + g) * a2;
    let cp1 = (ap1 * ap1 + b1 * b1).sqrt();
    let cp2 = (ap2 * ap2 + b2 * b2).sqrt();
    let hp1 = wrap_positive(b1.atan2(ap1));
    let hp2 = wrap_positive(b2.atan2(ap2));

    // Differences
    let dl = l2 - l1;
    let dc = cp2 - cp1;
    let dh = wrap_signed(hp2 - hp1);
    let d_big_h = 2.0 * (cp1 * cp2).sqrt() * (dh / 2.0).sin();

    // Means
    let l_mean = (l1 + l2) / 2.0;
    let c_mean = (cp1 + cp2) / 2.0;
    let h_mean = if cp1 * cp2 == 0.0 {
        // Hue is undefined for a neutral color
        hp1 + hp2
    } else {
        let naive = (hp1 + hp2) / 2.0;
        if (hp1 - hp2).abs() > PI {
            wrap_positive(naive - PI)
        } else {
            naive
        }
    }
    .to_degrees();

    let t = 1.0 - 0.17 * (h_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_mean).to_radians().cos()
        + 0.32 * (3.0 * h_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_mean - 63.0).to_radians().cos();
    let rotation = 30f64.to_radians() * (-((h_mean - 275.0) / 25.0).powi(2)).exp();
    let rc = 2.0 * chroma_ratio(c_mean);
    let l50 = (l_mean - 50.0) * (l_mean - 50.0);
    let sl = 1.0 + 0.015 * l50 / (20.0 + l50).sqrt();
    let sc = 1.0 + 0.045 * c_mean;
    let sh = 1.0 + 0.015 * c_mean * t;
    let rt = -(2.0 * rotation).sin() * rc;

    let x = dl / (weights.kl * sl);
    let y = dc / (weights.kc * sc);
    let z = d_big_h / (weights.kh * sh);
    (x * x + y * y + z * z + rt * y * z).sqrt()
}

/// [`ciede2000`] with the reference weights `(1, 1, 1)`.
#[inline]
pub fn ciede2000_default(lab1: Lab, lab2: Lab) -> f64 {
    ciede2000(lab1, lab2, Weights::default())
}

/// CIEDE2000 between two device RGB colors, converted through D65.
///
/// # Example
///
/// ```rust
/// use deltae_color::delta_e_rgb;
/// use deltae_core::Rgb;
///
/// let black = Rgb::BLACK;
/// let white = Rgb::WHITE;
/// assert!(delta_e_rgb(black, white) > 99.0);
/// assert_eq!(delta_e_rgb(white, white), 0.0);
/// ```
pub fn delta_e_rgb(rgb1: Rgb, rgb2: Rgb) -> f64 {
    ciede2000_default(
        rgb_to_lab(rgb1, WhitePoint::D65),
        rgb_to_lab(rgb2, WhitePoint::D65),
    )
}

/// Color difference as a method on [`Lab`].
///
/// ```rust
/// use deltae_color::ColorDifference;
/// use deltae_core::{Lab, Weights};
///
/// let a = Lab::new(50.0, 2.5, 0.0);
/// let b = Lab::new(73.0, 25.0, -18.0);
/// assert!((a.delta_e(b) - 27.1492).abs() < 1e-4);
/// assert!(a.delta_e_weighted(b, Weights::TEXTILE) < a.delta_e(b));
/// ```
pub trait ColorDifference {
    /// CIEDE2000 with reference weights.
    fn delta_e(self, other: Self) -> f64;

    /// CIEDE2000 with custom weights.
    fn delta_e_weighted(self, other: Self, weights: Weights) -> f64;
}

impl ColorDifference for Lab {
    #[inline]
    fn delta_e(self, other: Self) -> f64 {
        ciede2000_default(self, other)
    }

    #[inline]
    fn delta_e_weighted(self, other: Self, weights: Weights) -> f64 {
        ciede2000(self, other, weights)
    }
}
