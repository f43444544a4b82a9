//! Searching for the maximum in-gamut chroma.
//!
//! Oklch makes it easy to pick colors by lightness, chroma, and hue. But many
//! combinations do not exist in sRGB. Given lightness and hue, this module
//! performs a binary search for the largest chroma that survives a round trip
//! through 24-bit sRGB without noticeably changing the color.
//!
//! # Example
//!
//! ```
//! # use swatchbook::gamut::{max_srgb_chroma, ChromaSearch};
//! let chroma = max_srgb_chroma(60.0, 30.0, 0.4);
//! assert!(0.15 < chroma && chroma < 0.4);
//!
//! let coarse = ChromaSearch::builder()
//!     .precision(0.005)
//!     .iterations(8)
//!     .build();
//! assert!(coarse.max_chroma(60.0, 30.0, 0.4) <= 0.4);
//!
//! assert_eq!(max_srgb_chroma(0.0, 30.0, 0.4), 0.0);
//! ```

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use log::{debug, trace};

use crate::core::{clamp_finite, hue_distance, normalize_hue, round_to, round_trip_oklch};
use crate::Float;

#[derive(Clone, Debug, PartialEq)]
struct SearchData {
    precision: Float,
    iterations: usize,
    max_lightness_drift: Float,
    max_hue_drift: Float,
    hue_check_min_chroma: Float,
    chroma_reduction_factor: Float,
}

impl SearchData {
    pub const fn new() -> Self {
        Self {
            precision: 0.0005,
            iterations: 20,
            max_lightness_drift: 1.5,
            max_hue_drift: 5.0,
            hue_check_min_chroma: 0.02,
            chroma_reduction_factor: 5.0,
        }
    }
}

/// A builder of chroma search configurations.
#[derive(Debug)]
pub struct ChromaSearchBuilder(SearchData);

impl ChromaSearchBuilder {
    /// Set the precision.
    ///
    /// The search stops once the interval is narrower than the precision.
    pub fn precision(&mut self, precision: Float) -> &mut Self {
        self.0.precision = precision;
        self
    }

    /// Set the maximum number of iterations.
    pub fn iterations(&mut self, iterations: usize) -> &mut Self {
        self.0.iterations = iterations;
        self
    }

    /// Set the maximum difference in lightness, as a percentage.
    pub fn max_lightness_drift(&mut self, drift: Float) -> &mut Self {
        self.0.max_lightness_drift = drift;
        self
    }

    /// Set the maximum difference in hue, in degrees.
    pub fn max_hue_drift(&mut self, drift: Float) -> &mut Self {
        self.0.max_hue_drift = drift;
        self
    }

    /// Set the chroma below which hue differences are ignored.
    ///
    /// Colors with little chroma are close to gray and their hue is
    /// unreliable.
    pub fn hue_check_min_chroma(&mut self, chroma: Float) -> &mut Self {
        self.0.hue_check_min_chroma = chroma;
        self
    }

    /// Set the multiple of precision by which the round-tripped chroma may
    /// fall short of the candidate chroma.
    pub fn chroma_reduction_factor(&mut self, factor: Float) -> &mut Self {
        self.0.chroma_reduction_factor = factor;
        self
    }

    /// Instantiate the search configuration.
    pub fn build(&self) -> ChromaSearch {
        ChromaSearch(self.0.clone())
    }
}

/// A chroma search configuration.
///
/// The defaults have a precision of 0.0005 with at most 20 iterations. A
/// candidate chroma is accepted if the round-tripped color differs by at
/// most 1.5 in lightness percentage, at most 5° in hue for chroma above
/// 0.02, and falls short of the candidate chroma by at most 5 times the
/// precision.
#[derive(Clone, Debug, PartialEq)]
pub struct ChromaSearch(SearchData);

impl Default for ChromaSearch {
    fn default() -> Self {
        ChromaSearch(SearchData::new())
    }
}

impl ChromaSearch {
    /// Create a new builder with the default configuration.
    pub fn builder() -> ChromaSearchBuilder {
        ChromaSearchBuilder(SearchData::new())
    }

    /// Get the precision.
    pub fn precision(&self) -> Float {
        self.0.precision
    }

    /// Get the maximum number of iterations.
    pub fn iterations(&self) -> usize {
        self.0.iterations
    }

    /// Find the largest chroma for the Oklch lightness and hue that is
    /// displayable in sRGB.
    ///
    /// Lightness is a percentage and clamped to `0..=100`, hue is in degrees
    /// and normalized to `0..360`, and the search interval starts out as
    /// `0..=bound`, with negative bounds treated as 0. Lightness within 0.001
    /// of black or white as well as not-a-number coordinates yield 0.
    pub fn max_chroma(&self, lightness: Float, hue: Float, bound: Float) -> Float {
        let config = &self.0;
        if lightness.is_nan() || !hue.is_finite() {
            return 0.0;
        }

        let lightness = lightness.clamp(0.0, 100.0);
        let hue = normalize_hue(hue);
        if lightness < 0.001 || 99.999 < lightness {
            return 0.0;
        }

        let mut low: Float = 0.0;
        let mut high = clamp_finite(bound, 0.0, Float::MAX);
        let mut best: Float = 0.0;

        for iteration in 0..config.iterations {
            let middle = (low + high) / 2.0;
            if middle < config.precision / 2.0 {
                break;
            }

            let accepted = round_trip_oklch(lightness, round_to(middle, 4), hue)
                .is_some_and(|[l, c, h]| self.is_faithful(lightness, hue, middle, l, c, h));

            trace!(
                "chroma search for oklch({}% _ {}) iteration {}: {} in {}..{} is {}",
                lightness,
                hue,
                iteration,
                middle,
                low,
                high,
                if accepted { "accepted" } else { "rejected" }
            );

            if accepted {
                best = middle;
                low = middle;
            } else {
                high = middle;
            }

            if high - low < config.precision {
                break;
            }
        }

        let result = best.max(0.0);
        debug!(
            "maximum chroma for oklch({}% _ {}) is {}",
            lightness, hue, result
        );
        result
    }

    /// Determine whether the round-tripped coordinates are close enough to the
    /// candidate's.
    fn is_faithful(
        &self,
        lightness: Float,
        hue: Float,
        chroma: Float,
        actual_lightness: Float,
        actual_chroma: Float,
        actual_hue: Float,
    ) -> bool {
        let config = &self.0;

        let reduced =
            actual_chroma < chroma - config.precision * config.chroma_reduction_factor;
        let lightness_drifted = config.max_lightness_drift < (actual_lightness - lightness).abs();
        let hue_drifted = config.max_hue_drift < hue_distance(actual_hue, hue)
            && config.hue_check_min_chroma < chroma;

        !(reduced || lightness_drifted || hue_drifted)
    }
}

/// Find the largest chroma for the Oklch lightness and hue that is
/// displayable in sRGB, using the default search configuration.
///
/// See [`ChromaSearch::max_chroma`].
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn max_srgb_chroma(lightness: Float, hue: Float, bound: Float) -> Float {
    ChromaSearch::default().max_chroma(lightness, hue, bound)
}

#[cfg(test)]
mod test {
    use super::{max_srgb_chroma, ChromaSearch};
    use crate::core::assert_within;
    use crate::{Color, Float};

    #[test]
    fn test_degenerate() {
        for hue in [0.0, 90.0, 180.0, 270.0] {
            assert_eq!(max_srgb_chroma(0.0, hue, 0.4), 0.0);
            assert_eq!(max_srgb_chroma(100.0, hue, 0.4), 0.0);
            assert_eq!(max_srgb_chroma(-5.0, hue, 0.4), 0.0);
            assert_eq!(max_srgb_chroma(150.0, hue, 0.4), 0.0);
        }

        assert_eq!(max_srgb_chroma(50.0, Float::NAN, 0.4), 0.0);
        assert_eq!(max_srgb_chroma(Float::NAN, 30.0, 0.4), 0.0);
        assert_eq!(max_srgb_chroma(50.0, 30.0, -1.0), 0.0);
        assert_eq!(max_srgb_chroma(50.0, 30.0, 0.0), 0.0);
    }

    #[test]
    fn test_in_gamut() {
        for (lightness, hue) in [(60.0, 30.0), (80.0, 120.0), (40.0, 260.0), (50.0, 330.0)] {
            let chroma = max_srgb_chroma(lightness, hue, 0.4);
            assert!(0.0 < chroma && chroma <= 0.4, "{} {}", lightness, hue);

            // The result survives formatting and parsing.
            let color = Color::parse(&format!("oklch({}% {} {})", lightness, chroma, hue));
            assert!(color.is_valid());
            let oklch = color.to_oklch();
            assert_within!(oklch.l, lightness, 1.5);
        }
    }

    #[test]
    fn test_exact_result() {
        assert_within!(max_srgb_chroma(60.0, 30.0, 0.4), 0.24921875, 1e-12);
    }

    #[test]
    fn test_thresholds() {
        let search = ChromaSearch::default();
        let faithful = |l, c, h| search.is_faithful(60.0, 30.0, 0.2, l, c, h);

        // Chroma may shrink by up to precision times 5.
        assert!(faithful(60.0, 0.1976, 30.0));
        assert!(!faithful(60.0, 0.1974, 30.0));

        // Lightness may drift by up to 1.5.
        assert!(faithful(61.4, 0.2, 30.0));
        assert!(faithful(58.6, 0.2, 30.0));
        assert!(!faithful(61.6, 0.2, 30.0));

        // Hue may drift by up to 5 degrees.
        assert!(faithful(60.0, 0.2, 34.9));
        assert!(faithful(60.0, 0.2, 25.1));
        assert!(!faithful(60.0, 0.2, 35.1));

        // Hue is ignored for chroma up to 0.02.
        assert!(search.is_faithful(60.0, 30.0, 0.019, 60.0, 0.019, 90.0));
        assert!(!search.is_faithful(60.0, 30.0, 0.021, 60.0, 0.021, 90.0));
    }

    #[test]
    fn test_configured_thresholds() {
        let no_reduction = ChromaSearch::builder().chroma_reduction_factor(0.0).build();
        assert!(no_reduction.is_faithful(60.0, 30.0, 0.2, 60.0, 0.2, 30.0));
        assert!(!no_reduction.is_faithful(60.0, 30.0, 0.2, 60.0, 0.1999, 30.0));

        let no_drift = ChromaSearch::builder().max_hue_drift(0.0).build();
        assert!(!no_drift.is_faithful(60.0, 30.0, 0.2, 60.0, 0.2, 30.1));
        assert!(no_drift.is_faithful(60.0, 30.0, 0.01, 60.0, 0.01, 30.1));

        let no_hue_check = ChromaSearch::builder()
            .max_hue_drift(0.0)
            .hue_check_min_chroma(0.5)
            .build();
        assert!(no_hue_check.is_faithful(60.0, 30.0, 0.2, 60.0, 0.2, 90.0));

        // Insisting on the exact hue leaves only chroma below the hue check.
        let strict = no_drift.max_chroma(60.0, 30.0, 0.4);
        assert!(strict < max_srgb_chroma(60.0, 30.0, 0.4));
        assert!(strict < 0.1);
        assert!(strict < no_hue_check.max_chroma(60.0, 30.0, 0.4));
    }

    #[test]
    fn test_wraps_hue() {
        assert_eq!(max_srgb_chroma(60.0, 30.0, 0.4), max_srgb_chroma(60.0, 390.0, 0.4));
        assert_eq!(max_srgb_chroma(60.0, -330.0, 0.4), max_srgb_chroma(60.0, 30.0, 0.4));
    }

    #[test]
    fn test_bound() {
        let chroma = max_srgb_chroma(60.0, 30.0, 0.05);
        assert!(chroma <= 0.05);
        assert!(0.04 < chroma);
    }

    #[test]
    fn test_configuration() {
        let search = ChromaSearch::builder().precision(0.01).iterations(3).build();
        assert_eq!(search.precision(), 0.01);
        assert_eq!(search.iterations(), 3);
        assert_eq!(ChromaSearch::default().iterations(), 20);

        let coarse = search.max_chroma(60.0, 30.0, 0.4);
        assert!(0.0 < coarse && coarse <= 0.4);

        let never = ChromaSearch::builder().iterations(0).build();
        assert_eq!(never.max_chroma(60.0, 30.0, 0.4), 0.0);

        let strict = ChromaSearch::builder().max_lightness_drift(0.0).build();
        assert!(strict.max_chroma(60.0, 30.0, 0.4) <= max_srgb_chroma(60.0, 30.0, 0.4));
    }
}
