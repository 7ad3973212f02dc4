//! Error types for binning and sampling operations.
//!
//! Every fallible operation in this crate fails for exactly one reason:
//! an argument violated its contract. All violations are detected up
//! front and reported through [`SamplingError`] before any work is done,
//! so no operation ever returns a partial result.

use rand::distributions::WeightedError;

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, SamplingError>;

/// An invalid argument passed to a binning or sampling operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SamplingError {
    /// n_bins must be > 0.
    #[error("n_bins must be > 0, got {0}")]
    InvalidBinCount(usize),

    /// An explicit bin range must satisfy lo < hi.
    #[error("bin range must satisfy lo < hi, got ({lo}, {hi})")]
    InvalidRange {
        /// Lower end of the rejected range.
        lo: f64,
        /// Upper end of the rejected range.
        hi: f64,
    },

    /// Continuous binning needs at least one finite value to derive a range.
    #[error("cannot derive a bin range from a series with no finite values")]
    EmptyRange,

    /// Continuous binning requires values with a numeric view.
    #[error("value at position {0} has no numeric representation")]
    NonNumericValue(usize),

    /// More items were requested than all buckets hold together.
    #[error("requested total too large: {requested} > {available}")]
    TotalTooLarge {
        /// Number of items requested.
        requested: usize,
        /// Number of items available across all buckets.
        available: usize,
    },

    /// Weights and items must have the same length.
    #[error("got {weights} weights for {items} items")]
    WeightCountMismatch {
        /// Number of items.
        items: usize,
        /// Number of weights.
        weights: usize,
    },

    /// Cannot draw more items than exist without replacement.
    #[error("cannot sample {requested} of {available} items without replacement")]
    SampleTooLarge {
        /// Number of draws requested.
        requested: usize,
        /// Number of items available.
        available: usize,
    },

    /// The weight vector is unusable (negative, non-finite, or all zero).
    #[error("invalid weights: {0}")]
    InvalidWeights(#[from] WeightedError),

    /// Unrecognized binning mode name.
    #[error("mode must be either continuous or discrete, got {0:?}")]
    InvalidMode(String),
}

// =============================================================================
// Tests
// =============================================================================
