//! Error types for deltae-core validation.
//!
//! The color formulas themselves never fail: out-of-domain input simply
//! propagates NaN or infinity. Errors only come from the *checked*
//! constructors ([`Rgb::try_new`](crate::Rgb::try_new),
//! [`WhitePoint::try_new`](crate::WhitePoint::try_new),
//! [`Weights::try_new`](crate::Weights::try_new)), which callers use to
//! validate input once at their API boundary.
//!
//! # Usage
//!
//! ```rust
//! use deltae_core::{Error, Rgb};
//!
//! let err = Rgb::try_new(300.0, 0.0, 0.0).unwrap_err();
//! assert!(matches!(err, Error::ChannelOutOfRange { channel: 'R', .. }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Validation errors for color values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An RGB channel is NaN, infinite, or outside [0, 255].
    #[error("{channel} channel value {value} is outside [0, 255]")]
    ChannelOutOfRange {
        /// Channel name: 'R', 'G' or 'B'
        channel: char,
        /// Offending value
        value: f64,
    },

    /// A reference white component is zero or not finite.
    ///
    /// Lab conversion divides by every component, so a zero here would
    /// turn every result into infinity or NaN.
    #[error("reference white {axis} component must be finite and non-zero, got {value}")]
    InvalidWhitePoint {
        /// Axis name: 'X', 'Y' or 'Z'
        axis: char,
        /// Offending value
        value: f64,
    },

    /// A CIEDE2000 weighting factor is not a finite positive number.
    #[error("weight {name} must be finite and positive, got {value}")]
    InvalidWeight {
        /// Factor name: "kL", "kC" or "kH"
        name: &'static str,
        /// Offending value
        value: f64,
    },
}
