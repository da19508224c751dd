//! # deltae-core
//!
//! Core value types for perceptual color difference.
//!
//! - [`Rgb`] - Gamma-encoded device RGB in [0, 255]
//! - [`Xyz`] - CIE-XYZ tristimulus values (white Y = 100)
//! - [`Lab`] - CIE-Lab, with chroma/hue accessors
//! - [`WhitePoint`] - Reference white for Lab conversion (D65 by default)
//! - [`Weights`] - CIEDE2000 parametric factors (1, 1, 1 by default)
//!
//! ## Validation
//!
//! Plain constructors never validate, and nothing downstream does either:
//! out-of-range values flow through the formulas and come out as NaN or
//! infinity. Callers that need guarantees validate once at their boundary
//! with the `try_new` constructors, which return [`Result`].
//!
//! ## Crate Structure
//!
//! ```text
//! deltae-core (this crate)
//!    ^
//!    |
//!    +-- deltae-math (matrices, angles)
//!    +-- deltae-transfer (sRGB transfer function)
//!    +-- deltae-color (conversions, CIEDE2000)
//!    +-- deltae-palette (Glasbey palettes)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Derive `Serialize`/`Deserialize` for all value types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod weights;
pub mod white;

pub use color::{Lab, Rgb, Xyz};
pub use error::{Error, Result};
pub use weights::Weights;
pub use white::WhitePoint;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::color::{Lab, Rgb, Xyz};
    pub use crate::error::{Error, Result};
    pub use crate::weights::Weights;
    pub use crate::white::WhitePoint;
}
