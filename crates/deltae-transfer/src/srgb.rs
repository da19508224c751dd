//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a 2.4 power curve for the rest.
//!
//! # Range
//!
//! - Input/Output: [0, 1]
//!
//! Values outside the range are not clamped. Negative inputs always take
//! the linear segment, so they decode to negative values rather than NaN.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// Decode threshold on the encoded side.
pub const DECODE_THRESHOLD: f64 = 0.04045;

/// sRGB EOTF: Decodes sRGB encoded values to linear light.
///
/// Converts gamma-encoded sRGB [0, 1] to linear [0, 1].
///
/// # Formula
///
/// ```text
/// if V > 0.04045:
///     L = ((V + 0.055) / 1.055)^2.4
/// else:
///     L = V / 12.92
/// ```
///
/// # Example
///
/// ```rust
/// use deltae_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.001);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v > DECODE_THRESHOLD {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

/// Applies sRGB EOTF to an RGB triplet.
#[inline]
pub fn eotf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    [eotf(rgb[0]), eotf(rgb[1]), eotf(rgb[2])]
}
