//! evensample: bin-balanced and weighted sampling for labeled series.
//!
//! Draw subsets whose value distribution is flat even when the source
//! data is heavily skewed: bin a series by value, then sample the bins
//! round-robin so every bin contributes as equally as its size allows.
//! Weighted per-item sampling is included for the cases where explicit
//! draw probabilities fit better than binning.
//!
//! # Key Functions
//!
//! - [`subset_evenly`] - Bin a series and draw a value-balanced subset
//! - [`sample_evenly`] - Even draws across pre-built buckets
//! - [`sample_weighted`] - Weighted draws with or without replacement
//! - [`bin_discrete`] / [`bin_continuous`] - Build the buckets yourself
//!
//! All entry points take an optional seed for reproducibility; the
//! `_with` variants accept a caller-held generator instead.
//!
//! # Example
//!
//! ```
//! use evensample::{subset_evenly, BinMode, Series};
//!
//! // Ten low values, then a hundred high ones.
//! let series = Series::from_values(
//!     (0..10).map(f64::from).chain((0..100).map(|x| 50.0 + f64::from(x) / 4.0)).collect(),
//! );
//!
//! // An even subset rebalances: half from each end of the range.
//! let subset = subset_evenly(&series, 20, BinMode::Continuous { n_bins: 2 }, Some(42))?;
//! assert_eq!(subset.len(), 20);
//! assert_eq!(subset.values().iter().filter(|&&v| v < 37.0).count(), 10);
//! # Ok::<(), evensample::SamplingError>(())
//! ```

pub mod binning;
pub mod error;
pub mod sampling;
pub mod series;
pub mod subset;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// High-level subset API (most users want this)
pub use subset::{subset_evenly, subset_evenly_with, BinMode};

// Bucket samplers
pub use sampling::{sample_evenly, sample_evenly_with, sample_weighted, sample_weighted_with};

// Binning (for building buckets directly)
pub use binning::{bin_continuous, bin_discrete, BinEdge, ContinuousBinning, DiscreteBinning};

// Series types
pub use series::{Series, SeriesValue};

// Errors
pub use error::{Result, SamplingError};
