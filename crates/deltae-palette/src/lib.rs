//! # deltae-palette
//!
//! Maximally distinct color palettes (Glasbey et al., 2007) built on
//! CIEDE2000.
//!
//! Starting from a candidate set of 8-bit sRGB colors, the generator
//! repeatedly picks the candidate farthest (by minimum ΔE00) from every
//! color already in the palette. Candidates can be restricted in LCh(ab)
//! space, and seed colors can be placed in the palette up front.
//!
//! # Modules
//!
//! - [`swatch`] - Candidate colors and their running minimum distance
//! - [`filter`] - Lightness/chroma/hue candidate filter
//! - [`generator`] - The greedy max-min search
//! - [`config`] - Filter and seeds from YAML or the plain number format
//!
//! # Example
//!
//! ```rust
//! use deltae_palette::{LchFilter, PaletteConfig, PaletteGenerator};
//!
//! let config = PaletteConfig {
//!     filter: LchFilter { lightness: (30.0, 80.0), ..LchFilter::ALL },
//!     seeds: vec![[255, 255, 255]],
//! };
//!
//! let mut generator = PaletteGenerator::from_grid(16).unwrap();
//! for swatch in generator.generate(&config, 8) {
//!     println!("{}", swatch);
//! }
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - Candidate scans run on the rayon thread pool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod config;
pub mod filter;
pub mod generator;
pub mod swatch;

pub use config::PaletteConfig;
pub use error::{PaletteError, PaletteResult};
pub use filter::LchFilter;
pub use generator::PaletteGenerator;
pub use swatch::Swatch;
