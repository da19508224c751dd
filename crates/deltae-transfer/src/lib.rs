//! # deltae-transfer
//!
//! Transfer function decoding for gamma-encoded color.
//!
//! Device RGB handed to a color difference pipeline is gamma encoded and
//! has to be decoded with the EOTF (Electro-Optical Transfer Function,
//! encoded -> linear) before any linear math happens.
//!
//! # Usage
//!
//! ```rust
//! use deltae_transfer::srgb;
//!
//! let linear = srgb::eotf(0.5);
//! assert!((linear - 0.214).abs() < 0.001);
//! assert_eq!(srgb::eotf_rgb([0.5, 0.5, 0.5]), [linear; 3]);
//! ```
//!
//! # Used By
//!
//! - `deltae-color` - sRGB to XYZ conversion

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

pub use srgb::eotf as srgb_eotf;
