//! # deltae-color
//!
//! Perceptual color difference for device RGB colors.
//!
//! The pipeline has three stateless steps, each a plain function of its
//! inputs:
//!
//! ```text
//! Rgb --rgb_to_xyz--> Xyz --xyz_to_lab(WhitePoint)--> Lab
//!                                                      |
//!                            Lab --ciede2000(Weights)--+--> f64
//! ```
//!
//! [`ciede2000`] only needs [`Lab`](deltae_core::Lab) values, so Lab
//! obtained elsewhere can be compared directly.
//!
//! # Quick Start
//!
//! ```rust
//! use deltae_color::prelude::*;
//!
//! let a = Rgb::new(255.0, 128.0, 0.0).to_lab_d65();
//! let b = Rgb::new(250.0, 130.0, 10.0).to_lab_d65();
//!
//! let de = ciede2000(a, b, Weights::default());
//! assert!(de > 0.0 && de < 5.0);
//! assert_eq!(de, a.delta_e(b));
//! ```
//!
//! # Defaults
//!
//! Rust has no default arguments, so the defaults are separate entry
//! points: [`xyz_to_lab_d65`] and [`ciede2000_default`], plus `Default`
//! impls on [`WhitePoint`](deltae_core::WhitePoint) (D65) and
//! [`Weights`](deltae_core::Weights) (1, 1, 1).
//!
//! # Architecture
//!
//! ```text
//!               deltae-color
//!                    |
//!          +---------+---------+
//!          |                   |
//!   deltae-transfer       deltae-math
//!          |                   |
//!          +---------+---------+
//!                    |
//!               deltae-core
//! ```
//!
//! # Used By
//!
//! - `deltae-palette` - Glasbey palette generation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ciede2000;
pub mod convert;

pub use ciede2000::{ciede2000, ciede2000_default, delta_e_rgb, ColorDifference};
pub use convert::{rgb_to_lab, rgb_to_xyz, xyz_to_lab, xyz_to_lab_d65, ToLab, ToXyz, SRGB_TO_XYZ};

// Re-export sub-crates for convenience
pub use deltae_core as types;
pub use deltae_math as math;
pub use deltae_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        ciede2000, ciede2000_default, delta_e_rgb, rgb_to_lab, rgb_to_xyz, xyz_to_lab,
        xyz_to_lab_d65, ColorDifference, ToLab, ToXyz,
    };

    pub use deltae_core::{Error, Lab, Result, Rgb, Weights, WhitePoint, Xyz};
}
