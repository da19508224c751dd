//! Parametric weighting factors for CIEDE2000.
//!
//! The lightness, chroma and hue differences are divided by `kL`, `kC` and
//! `kH` respectively. Graphic-arts use keeps all three at 1; textile
//! applications conventionally use `kL = 2`.

use crate::error::{Error, Result};
use tracing::debug;

/// CIEDE2000 weighting factors `(kL, kC, kH)`.
///
/// [`Default`] is `(1, 1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weights {
    /// Lightness weight kL
    pub kl: f64,
    /// Chroma weight kC
    pub kc: f64,
    /// Hue weight kH
    pub kh: f64,
}

impl Weights {
    /// Reference conditions: all factors 1.
    pub const UNIT: Self = Self::new(1.0, 1.0, 1.0);

    /// Textile industry weighting (kL = 2).
    pub const TEXTILE: Self = Self::new(2.0, 1.0, 1.0);

    /// Creates weights without validation.
    #[inline]
    pub const fn new(kl: f64, kc: f64, kh: f64) -> Self {
        Self { kl, kc, kh }
    }

    /// Creates weights, rejecting factors that are not finite and positive.
    ///
    /// # Example
    ///
    /// ```
    /// use deltae_core::Weights;
    ///
    /// assert!(Weights::try_new(2.0, 1.0, 1.0).is_ok());
    /// assert!(Weights::try_new(1.0, 0.0, 1.0).is_err());
    /// ```
    pub fn try_new(kl: f64, kc: f64, kh: f64) -> Result<Self> {
        for (name, value) in [("kL", kl), ("kC", kc), ("kH", kh)] {
            if !value.is_finite() || value <= 0.0 {
                debug!(weight = name, value, "rejecting CIEDE2000 weight");
                return Err(Error::InvalidWeight { name, value });
            }
        }
        Ok(Self::new(kl, kc, kh))
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::UNIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(Weights::default(), Weights::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_try_new() {
        assert_eq!(Weights::try_new(2.0, 1.0, 1.0), Ok(Weights::TEXTILE));

        let err = Weights::try_new(1.0, 1.0, -1.0).unwrap_err();
        assert_eq!(err, Error::InvalidWeight { name: "kH", value: -1.0 });

        assert!(Weights::try_new(f64::INFINITY, 1.0, 1.0).is_err());
    }
}
