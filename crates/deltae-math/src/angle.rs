//! Angle wrapping for hue arithmetic.
//!
//! Hue angles from `atan2` live in (-π, π]; color difference formulas want
//! them in [0, 2π) and want hue *differences* in (-π, π]. Both helpers
//! shift by a single turn at most, which is all that is ever needed for
//! inputs produced by `atan2` or by subtracting two wrapped angles.

use std::f64::consts::{PI, TAU};

/// Moves an angle from (-2π, 2π) into [0, 2π) by adding one turn if
/// negative.
///
/// # Example
///
/// ```rust
/// use deltae_math::wrap_positive;
/// use std::f64::consts::PI;
///
/// assert!((wrap_positive(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
/// assert_eq!(wrap_positive(PI), PI);
/// ```
#[inline]
pub fn wrap_positive(angle: f64) -> f64 {
    if angle < 0.0 { angle + TAU } else { angle }
}

/// Moves an angle difference from (-2π, 2π) into [-π, π].
///
/// Values strictly beyond ±π are shifted by one turn; exactly ±π is left
/// alone.
#[inline]
pub fn wrap_signed(delta: f64) -> f64 {
    if delta > PI {
        delta - TAU
    } else if delta < -PI {
        delta + TAU
    } else {
        delta
    }
}
