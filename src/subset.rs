//! Bin-balanced subsets of labeled series.
//!
//! [`subset_evenly`] is the high-level entry point: it bins a series by
//! value, draws an even sample across the bins, and returns the sampled
//! entries as a series again, with their original labels intact. Use it
//! to cut a skewed dataset down to a value-balanced subset in one call.
//!
//! # Example
//!
//! ```
//! use evensample::{subset_evenly, BinMode, Series};
//!
//! // Heavily skewed towards "cat".
//! let series: Series<usize, &str> =
//!     Series::from_values(vec!["cat"; 90].into_iter().chain(vec!["dog"; 10]).collect());
//!
//! let subset = subset_evenly(&series, 20, BinMode::Discrete, Some(42))?;
//!
//! // Ten of each, instead of eighteen cats.
//! assert_eq!(subset.values().iter().filter(|&&v| v == "dog").count(), 10);
//! # Ok::<(), evensample::SamplingError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use rand::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::binning::{bin_continuous, bin_discrete};
use crate::error::{Result, SamplingError};
use crate::sampling::sample_evenly_with;
use crate::series::{Series, SeriesValue};

/// Bin count used by [`BinMode::default`] and `"continuous".parse()`.
const DEFAULT_N_BINS: usize = 100;

// =============================================================================
// BinMode
// =============================================================================

/// How a series is split into buckets before even sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinMode {
    /// Equal-width interval bins over the numeric value range.
    Continuous {
        /// Number of bins to split the range into.
        n_bins: usize,
    },
    /// One bin per distinct value.
    Discrete,
}

impl Default for BinMode {
    /// One hundred equal-width bins.
    fn default() -> Self {
        BinMode::Continuous { n_bins: DEFAULT_N_BINS }
    }
}

impl FromStr for BinMode {
    type Err = SamplingError;

    /// Parse `"continuous"` (with the default bin count) or `"discrete"`.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "continuous" => Ok(BinMode::default()),
            "discrete" => Ok(BinMode::Discrete),
            other => Err(SamplingError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for BinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinMode::Continuous { .. } => f.write_str("continuous"),
            BinMode::Discrete => f.write_str("discrete"),
        }
    }
}

// =============================================================================
// Even Subsets
// =============================================================================

/// Draw a value-balanced subset of `sample_size` entries from a series.
///
/// The series is binned according to `mode`, the bins are sampled evenly
/// (see [`sample_evenly`](crate::sample_evenly)), and the drawn entries
/// come back as a series carrying their original labels, so every row of
/// the result can be traced to a row of the input.
///
/// # Arguments
///
/// * `series` - Series to subset; it is not modified
/// * `sample_size` - Number of entries to draw
/// * `mode` - Discrete or continuous binning
/// * `seed` - Seed for reproducibility, or `None` for entropy
///
/// # Errors
///
/// - [`SamplingError::TotalTooLarge`] if `sample_size` exceeds the number
///   of binnable entries.
/// - Any error of [`bin_continuous`] in continuous mode, notably
///   [`SamplingError::NonNumericValue`] for values without a numeric view.
///
/// # Example
///
/// ```
/// use evensample::{subset_evenly, BinMode, Series};
///
/// let series = Series::from_values((0..60).map(f64::from).collect());
/// let subset = subset_evenly(&series, 12, BinMode::Continuous { n_bins: 6 }, Some(42))?;
///
/// assert_eq!(subset.len(), 12);
/// # Ok::<(), evensample::SamplingError>(())
/// ```
pub fn subset_evenly<L, V>(
    series: &Series<L, V>,
    sample_size: usize,
    mode: BinMode,
    seed: Option<u64>,
) -> Result<Series<L, V>>
where
    L: Clone,
    V: SeriesValue + PartialEq,
{
    match seed {
        Some(seed) => {
            subset_evenly_with(series, sample_size, mode, &mut Xoshiro256PlusPlus::seed_from_u64(seed))
        }
        None => subset_evenly_with(series, sample_size, mode, &mut Xoshiro256PlusPlus::from_entropy()),
    }
}

/// [`subset_evenly`] driven by a caller-held generator.
pub fn subset_evenly_with<L, V, R>(
    series: &Series<L, V>,
    sample_size: usize,
    mode: BinMode,
    rng: &mut R,
) -> Result<Series<L, V>>
where
    L: Clone,
    V: SeriesValue + PartialEq,
    R: Rng + ?Sized,
{
    // Bin in positional coordinates so the sampled groups index straight
    // back into the caller's series.
    let positions = series.reset_labels();

    let groups = match mode {
        BinMode::Continuous { n_bins } => bin_continuous(&positions, n_bins, None)?.groups,
        BinMode::Discrete => bin_discrete(&positions).groups,
    };

    let picked = sample_evenly_with(&groups, sample_size, rng)?;
    Ok(series.take(&picked))
}

// =============================================================================
// Tests
// =============================================================================
