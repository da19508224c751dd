//! # deltae-math
//!
//! Math utilities for color conversion and color difference.
//!
//! - [`Mat3`] - 3x3 matrices for linear RGB to XYZ transforms
//! - [`wrap_positive`], [`wrap_signed`] - hue angle wrapping
//!
//! # Design
//!
//! [`Mat3`] wraps [`glam`] double precision types. All matrix operations
//! assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Vector and matrix math
//!
//! # Used By
//!
//! - `deltae-color` - sRGB to XYZ conversion, CIEDE2000 hue terms

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod angle;
mod mat3;

pub use angle::*;
pub use mat3::*;
