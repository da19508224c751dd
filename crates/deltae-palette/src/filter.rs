//! LCh(ab) candidate filter.
//!
//! Restricts palette candidates by lightness, chroma and hue (degrees).
//! A hue range whose minimum exceeds its maximum wraps through 0°, so
//! `hue: (300, 60)` keeps magentas, reds and oranges.

use deltae_core::Lab;
use serde::{Deserialize, Serialize};

/// Lightness, chroma and hue bounds, all inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LchFilter {
    /// L* bounds
    pub lightness: (f64, f64),
    /// Chroma bounds
    pub chroma: (f64, f64),
    /// Hue bounds in degrees; wraps when min > max
    pub hue: (f64, f64),
}

impl LchFilter {
    /// Accepts every color: L in [0, 100], C in [0, 150], h in [0, 360].
    pub const ALL: Self = Self {
        lightness: (0.0, 100.0),
        chroma: (0.0, 150.0),
        hue: (0.0, 360.0),
    };

    /// Whether a color passes the filter.
    ///
    /// # Example
    ///
    /// ```rust
    /// use deltae_core::Lab;
    /// use deltae_palette::LchFilter;
    ///
    /// let reds = LchFilter { hue: (330.0, 30.0), ..LchFilter::ALL };
    /// assert!(reds.accepts(&Lab::new(50.0, 40.0, 5.0)));
    /// assert!(!reds.accepts(&Lab::new(50.0, -40.0, 5.0)));
    /// ```
    pub fn accepts(&self, lab: &Lab) -> bool {
        let chroma = lab.chroma();
        let hue = lab.hue();
        let (min_h, max_h) = self.hue;
        let hue_rejected = if min_h <= max_h {
            hue < min_h || hue > max_h
        } else {
            hue < min_h && hue > max_h
        };

        !(lab.l < self.lightness.0
            || lab.l > self.lightness.1
            || chroma < self.chroma.0
            || chroma > self.chroma.1
            || hue_rejected)
    }
}

impl Default for LchFilter {
    fn default() -> Self {
        Self::ALL
    }
}
