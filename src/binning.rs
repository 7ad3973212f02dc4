//! Partition a series into bins by value.
//!
//! Two binning modes produce the buckets that even sampling draws from:
//!
//! - [`bin_discrete`]: one bin per distinct value, for categorical data.
//! - [`bin_continuous`]: equal-width interval bins over a numeric range.
//!
//! Both return the labels of the binned entries grouped per bin, so the
//! groups can be fed straight to [`sample_evenly`](crate::sample_evenly)
//! and the drawn labels mapped back to the original series.
//!
//! # Example
//!
//! ```
//! use evensample::{bin_continuous, Series};
//!
//! let series = Series::from_values(vec![0.0, 0.4, 1.2, 2.0]);
//! let binning = bin_continuous(&series, 2, None)?;
//!
//! assert_eq!(binning.edges.len(), 2);
//! assert_eq!(binning.groups[0], vec![0, 1]); // [0.0, 1.0)
//! assert_eq!(binning.groups[1], vec![2, 3]); // [1.0, 2.0]
//! # Ok::<(), evensample::SamplingError>(())
//! ```

use crate::error::{Result, SamplingError};
use crate::series::{Series, SeriesValue};

// =============================================================================
// Binning Results
// =============================================================================

/// One continuous bin interval.
///
/// Intervals are half-open `[lo, hi)` except the last bin of a binning,
/// which includes its upper bound so the range maximum has a home.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinEdge {
    /// Lower bound of the interval.
    pub lo: f64,
    /// Upper bound of the interval.
    pub hi: f64,
    /// Whether `hi` itself belongs to the interval.
    pub upper_inclusive: bool,
}

impl BinEdge {
    /// Returns true if `value` falls inside this bin.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        if self.upper_inclusive {
            value >= self.lo && value <= self.hi
        } else {
            value >= self.lo && value < self.hi
        }
    }

    /// Width of the interval.
    #[inline]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }
}

/// Result of [`bin_discrete`]: distinct values and their label groups.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteBinning<V, L> {
    /// Distinct values, in first-appearance order.
    pub values: Vec<V>,
    /// `groups[i]` holds the labels of the entries equal to `values[i]`,
    /// in original series order.
    pub groups: Vec<Vec<L>>,
}

/// Result of [`bin_continuous`]: bin intervals and their label groups.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuousBinning<L> {
    /// Bin intervals, contiguous from the range minimum to its maximum.
    pub edges: Vec<BinEdge>,
    /// `groups[i]` holds the labels of the entries falling in `edges[i]`,
    /// in original series order.
    pub groups: Vec<Vec<L>>,
}

// =============================================================================
// Discrete Binning
// =============================================================================

/// Group series entries by distinct value.
///
/// Every entry lands in exactly one group; the groups partition the
/// series. Distinct values are kept in first-appearance order so the
/// result is deterministic, and values only need `PartialEq`, so float
/// series work too.
pub fn bin_discrete<L, V>(series: &Series<L, V>) -> DiscreteBinning<V, L>
where
    L: Clone,
    V: Clone + PartialEq,
{
    let mut values: Vec<V> = Vec::new();
    let mut groups: Vec<Vec<L>> = Vec::new();

    for (label, value) in series.iter() {
        match values.iter().position(|seen| seen == value) {
            Some(i) => groups[i].push(label.clone()),
            None => {
                values.push(value.clone());
                groups.push(vec![label.clone()]);
            }
        }
    }

    DiscreteBinning { values, groups }
}

// =============================================================================
// Continuous Binning
// =============================================================================

/// Group series entries into `n_bins` equal-width interval bins.
///
/// The range is taken from `range` when given, otherwise from the
/// minimum and maximum of the finite values. The first bin's lower bound
/// and the last bin's upper bound are pinned to the exact range ends and
/// only the last bin includes its upper bound; together the bins cover
/// the whole range with no gaps.
///
/// Values outside the range are silently left out of every group, as are
/// non-finite values. A data-derived range with a single distinct value
/// collapses to one point bin holding every entry.
///
/// # Errors
///
/// - [`SamplingError::InvalidBinCount`] if `n_bins` is zero.
/// - [`SamplingError::NonNumericValue`] if a value has no numeric view.
/// - [`SamplingError::InvalidRange`] if an explicit range has `lo >= hi`.
/// - [`SamplingError::EmptyRange`] if no range is given and the series
///   has no finite values to derive one from.
pub fn bin_continuous<L, V>(
    series: &Series<L, V>,
    n_bins: usize,
    range: Option<(f64, f64)>,
) -> Result<ContinuousBinning<L>>
where
    L: Clone,
    V: SeriesValue,
{
    if n_bins == 0 {
        return Err(SamplingError::InvalidBinCount(n_bins));
    }

    // Project every value up front so a non-numeric entry fails the call
    // before any groups are built.
    let mut numeric = Vec::with_capacity(series.len());
    for (position, (_, value)) in series.iter().enumerate() {
        match value.as_f64() {
            Some(v) => numeric.push(v),
            None => return Err(SamplingError::NonNumericValue(position)),
        }
    }

    let (lo, hi) = match range {
        Some((lo, hi)) => {
            if lo >= hi {
                return Err(SamplingError::InvalidRange { lo, hi });
            }
            (lo, hi)
        }
        None => derive_range(&numeric)?,
    };

    let edges = build_edges(lo, hi, n_bins);
    let mut groups = vec![Vec::new(); edges.len()];

    for (label, &value) in series.labels().iter().zip(numeric.iter()) {
        if let Some(bin) = assign_bin(&edges, lo, hi, value) {
            groups[bin].push(label.clone());
        }
    }

    Ok(ContinuousBinning { edges, groups })
}

/// Range spanned by the finite values.
fn derive_range(values: &[f64]) -> Result<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        if v.is_finite() {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    if lo > hi {
        return Err(SamplingError::EmptyRange);
    }
    Ok((lo, hi))
}

/// Equal-width edges over `[lo, hi]`.
///
/// The last upper bound is pinned to `hi` rather than computed, so float
/// rounding can never push the range maximum out of the final bin.
fn build_edges(lo: f64, hi: f64, n_bins: usize) -> Vec<BinEdge> {
    if lo == hi {
        // Degenerate range: a single point bin holds everything.
        return vec![BinEdge { lo, hi, upper_inclusive: true }];
    }

    let width = (hi - lo) / n_bins as f64;
    (0..n_bins)
        .map(|i| BinEdge {
            lo: lo + width * i as f64,
            hi: if i + 1 == n_bins { hi } else { lo + width * (i + 1) as f64 },
            upper_inclusive: i + 1 == n_bins,
        })
        .collect()
}

/// Bin index for `value`, or `None` when it falls outside `[lo, hi]`.
fn assign_bin(edges: &[BinEdge], lo: f64, hi: f64, value: f64) -> Option<usize> {
    // NaN fails both comparisons and is dropped here too.
    if !(value >= lo && value <= hi) {
        return None;
    }
    // Upper bounds are ascending; the first bin whose upper bound exceeds
    // the value is its home. The range maximum passes every bound and is
    // clamped into the final inclusive bin.
    let i = edges.partition_point(|edge| value >= edge.hi);
    Some(i.min(edges.len() - 1))
}

// =============================================================================
// Tests
// =============================================================================
