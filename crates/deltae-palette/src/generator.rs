//! Glasbey palette generation.
//!
//! Each step picks the candidate whose minimum CIEDE2000 distance to every
//! color already in the palette is largest, then folds that pick back into
//! the candidates' minimum distances.
//!
//! # Example
//!
//! ```rust
//! use deltae_palette::{PaletteConfig, PaletteGenerator};
//!
//! let mut generator = PaletteGenerator::from_grid(8).unwrap();
//! let palette = generator.generate(&PaletteConfig::default(), 5);
//!
//! assert_eq!(palette.len(), 5);
//! // Each pick is at most as far from the palette as the previous one
//! assert!(palette.windows(2).all(|w| w[1].min_delta <= w[0].min_delta));
//! ```

use crate::config::PaletteConfig;
use crate::error::{PaletteError, PaletteResult};
use crate::filter::LchFilter;
use crate::swatch::Swatch;
use deltae_core::Lab;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Candidate set plus the running minimum distances.
#[derive(Debug, Clone)]
pub struct PaletteGenerator {
    candidates: Vec<Swatch>,
}

impl PaletteGenerator {
    /// Every 8-bit sRGB color as a candidate (16 777 216 of them).
    pub fn full_cube() -> Self {
        Self::from_colors((0..=255u8).flat_map(|r| {
            (0..=255u8).flat_map(move |g| (0..=255u8).map(move |b| [r, g, b]))
        }))
    }

    /// `levels³` evenly spaced colors, from 0 to 255 on each channel.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidGrid`] unless `2 <= levels <= 256`.
    pub fn from_grid(levels: usize) -> PaletteResult<Self> {
        if !(2..=256).contains(&levels) {
            return Err(PaletteError::InvalidGrid(levels));
        }
        let step = levels - 1;
        let channel = move |i: usize| ((i * 255 + step / 2) / step) as u8;
        Ok(Self::from_colors((0..levels).flat_map(move |r| {
            (0..levels).flat_map(move |g| {
                (0..levels).map(move |b| [channel(r), channel(g), channel(b)])
            })
        })))
    }

    /// Uses the given colors as candidates, in iteration order.
    pub fn from_colors<I: IntoIterator<Item = [u8; 3]>>(colors: I) -> Self {
        let colors: Vec<[u8; 3]> = colors.into_iter().collect();

        #[cfg(feature = "parallel")]
        let candidates: Vec<Swatch> = colors.par_iter().map(|&rgb| Swatch::new(rgb)).collect();
        #[cfg(not(feature = "parallel"))]
        let candidates: Vec<Swatch> = colors.iter().map(|&rgb| Swatch::new(rgb)).collect();

        debug!(candidates = candidates.len(), "Built palette candidates");
        Self { candidates }
    }

    /// Number of candidates.
    #[inline]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether there are no candidates at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates with their current minimum distances.
    #[inline]
    pub fn candidates(&self) -> &[Swatch] {
        &self.candidates
    }

    /// Starts a new palette: rejected candidates get `min_delta = 0`, the
    /// rest `INFINITY`.
    pub fn reset(&mut self, filter: &LchFilter) {
        let apply = |swatch: &mut Swatch| {
            swatch.min_delta = if filter.accepts(&swatch.lab) { f64::INFINITY } else { 0.0 };
        };

        #[cfg(feature = "parallel")]
        self.candidates.par_iter_mut().for_each(apply);
        #[cfg(not(feature = "parallel"))]
        self.candidates.iter_mut().for_each(apply);

        let accepted = self.candidates.iter().filter(|s| s.is_active()).count();
        debug!(
            accepted,
            rejected = self.candidates.len() - accepted,
            "Reset palette candidates"
        );
    }

    /// Adds a color to the palette and returns the next pick.
    ///
    /// Every active candidate's `min_delta` is lowered to its distance from
    /// `swatch` when that is smaller. The returned candidate has the largest
    /// `min_delta`, the earliest one winning ties. Once no candidate is
    /// active, returns [`Swatch::exhausted`].
    pub fn add(&mut self, swatch: &Swatch) -> Swatch {
        match self.scan(swatch.lab) {
            Some((index, _)) => {
                let pick = self.candidates[index];
                trace!(
                    r = pick.rgb[0],
                    g = pick.rgb[1],
                    b = pick.rgb[2],
                    min_delta = pick.min_delta,
                    "Palette pick"
                );
                pick
            }
            None => {
                trace!("Palette candidates exhausted");
                Swatch::exhausted()
            }
        }
    }

    #[cfg(feature = "parallel")]
    fn scan(&mut self, lab: Lab) -> Option<(usize, f64)> {
        self.candidates
            .par_iter_mut()
            .enumerate()
            .filter_map(|(i, c)| c.relax(lab).then_some((i, c.min_delta)))
            .reduce_with(farther)
    }

    #[cfg(not(feature = "parallel"))]
    fn scan(&mut self, lab: Lab) -> Option<(usize, f64)> {
        self.candidates
            .iter_mut()
            .enumerate()
            .filter_map(|(i, c)| c.relax(lab).then_some((i, c.min_delta)))
            .reduce(farther)
    }

    /// Generates `count` palette colors.
    ///
    /// The config's seeds are added first and are not part of the output.
    /// Without seeds, white is added so the first pick is the candidate
    /// farthest from white. After the candidates run out, the remaining
    /// entries are [`Swatch::exhausted`].
    pub fn generate(&mut self, config: &PaletteConfig, count: usize) -> Vec<Swatch> {
        debug!(count, seeds = config.seeds.len(), "Generating palette");
        self.reset(&config.filter);

        let mut next = Swatch::new([0, 0, 0]);
        for &seed in &config.seeds {
            next = self.add(&Swatch::new(seed));
        }
        if next.min_delta == f64::INFINITY {
            next = self.add(&Swatch::new([255, 255, 255]));
        }

        let mut palette = Vec::with_capacity(count);
        for _ in 0..count {
            palette.push(next);
            next = self.add(&next);
        }
        palette
    }
}

/// Larger distance wins, lower index on ties.
#[inline]
fn farther(a: (usize, f64), b: (usize, f64)) -> (usize, f64) {
    if b.1 > a.1 || (b.1 == a.1 && b.0 < a.0) { b } else { a }
}
