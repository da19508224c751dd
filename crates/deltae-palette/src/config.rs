//! Palette configuration: candidate filter plus seed colors.
//!
//! Two formats are supported.
//!
//! YAML, via serde:
//!
//! ```yaml
//! filter:
//!   lightness: [30, 90]
//!   chroma: [20, 150]
//!   hue: [0, 360]
//! seeds:
//!   - [255, 255, 255]
//!   - [0, 0, 0]
//! ```
//!
//! Plain whitespace-separated numbers: six filter bounds
//! (`minL maxL minC maxC minh maxh`) followed by any number of `r g b`
//! seed triples.
//!
//! ```text
//! 30 90  20 150  0 360
//! 255 255 255
//! 0 0 0
//! ```

use crate::error::{PaletteError, PaletteResult};
use crate::filter::LchFilter;
use serde::{Deserialize, Serialize};

/// Settings for [`PaletteGenerator::generate`](crate::PaletteGenerator::generate).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Candidates outside the filter are never picked
    pub filter: LchFilter,
    /// Colors already in the palette, added before generation starts
    pub seeds: Vec<[u8; 3]>,
}

impl PaletteConfig {
    /// Parses a YAML configuration. Missing keys take their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use deltae_palette::PaletteConfig;
    ///
    /// let config = PaletteConfig::from_yaml("seeds: [[255, 0, 0]]").unwrap();
    /// assert_eq!(config.seeds, vec![[255, 0, 0]]);
    /// assert_eq!(config.filter.lightness, (0.0, 100.0));
    /// ```
    pub fn from_yaml(text: &str) -> PaletteResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Serializes to YAML.
    pub fn to_yaml(&self) -> PaletteResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Parses the plain whitespace-separated format.
    ///
    /// # Example
    ///
    /// ```rust
    /// use deltae_palette::PaletteConfig;
    ///
    /// let config = PaletteConfig::from_plain("0 100 0 150 300 60\n255 255 255").unwrap();
    /// assert_eq!(config.filter.hue, (300.0, 60.0));
    /// assert_eq!(config.seeds, vec![[255, 255, 255]]);
    /// ```
    pub fn from_plain(text: &str) -> PaletteResult<Self> {
        let mut tokens = text.split_whitespace();

        let mut bounds = [0.0; 6];
        for (i, bound) in bounds.iter_mut().enumerate() {
            let token = tokens.next().ok_or_else(|| {
                PaletteError::Parse(format!("expected 6 filter bounds, found {}", i))
            })?;
            *bound = token
                .parse()
                .map_err(|_| PaletteError::Parse(format!("invalid filter bound '{}'", token)))?;
        }

        let channels = tokens
            .map(|token| {
                token
                    .parse::<u8>()
                    .map_err(|_| PaletteError::Parse(format!("invalid channel value '{}'", token)))
            })
            .collect::<PaletteResult<Vec<u8>>>()?;

        if channels.len() % 3 != 0 {
            return Err(PaletteError::Parse(format!(
                "seed colors need 3 channels each, got {} values",
                channels.len()
            )));
        }

        Ok(Self {
            filter: LchFilter {
                lightness: (bounds[0], bounds[1]),
                chroma: (bounds[2], bounds[3]),
                hue: (bounds[4], bounds[5]),
            },
            seeds: channels
                .chunks_exact(3)
                .map(|c| [c[0], c[1], c[2]])
                .collect(),
        })
    }
}
