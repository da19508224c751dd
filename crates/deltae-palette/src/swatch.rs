//! Palette candidates.

use deltae_color::{ciede2000_default, ToLab};
use deltae_core::{Lab, Rgb};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An 8-bit sRGB color with its Lab coordinates (D65) and its current
/// minimum CIEDE2000 distance to the palette being built.
///
/// `min_delta` is `f64::INFINITY` for a fresh candidate and `0` for one that
/// is excluded, either by a filter or because it is already in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swatch {
    /// sRGB channels
    pub rgb: [u8; 3],
    /// Lab coordinates relative to D65
    pub lab: Lab,
    /// Minimum distance to every color added so far
    pub min_delta: f64,
}

impl Swatch {
    /// Creates a fresh candidate with an infinite `min_delta`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use deltae_palette::Swatch;
    ///
    /// let white = Swatch::new([255, 255, 255]);
    /// assert!((white.lab.l - 100.0).abs() < 1e-6);
    /// assert_eq!(white.min_delta, f64::INFINITY);
    /// ```
    pub fn new(rgb: [u8; 3]) -> Self {
        Self {
            rgb,
            lab: Rgb::from(rgb).to_lab_d65(),
            min_delta: f64::INFINITY,
        }
    }

    /// Black with `min_delta = 0`: what a generator hands out once no
    /// candidate is left.
    pub fn exhausted() -> Self {
        Self {
            min_delta: 0.0,
            ..Self::new([0, 0, 0])
        }
    }

    /// Whether this candidate can still be picked.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.min_delta > 0.0
    }

    /// Lowers `min_delta` to the distance from `lab` if that is smaller.
    ///
    /// Inactive candidates are left untouched. Returns whether the
    /// candidate is still active afterwards.
    #[inline]
    pub(crate) fn relax(&mut self, lab: Lab) -> bool {
        if !self.is_active() {
            return false;
        }
        let delta = ciede2000_default(lab, self.lab);
        if delta < self.min_delta {
            self.min_delta = delta;
        }
        self.is_active()
    }
}

impl fmt::Display for Swatch {
    /// `min_delta r g b`, one swatch per line in palette listings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.min_delta, self.rgb[0], self.rgb[1], self.rgb[2])
    }
}
