//! Even and weighted sampling over item buckets.
//!
//! # Even Sampling
//!
//! [`sample_evenly`] draws a fixed total from a list of buckets while
//! keeping the per-bucket counts as equal as the bucket contents allow.
//! It sweeps the buckets round-robin, drawing one uniform item from each
//! non-empty bucket per sweep, so small buckets simply drop out once
//! exhausted while the rest keep contributing.
//!
//! # Weighted Sampling
//!
//! [`sample_weighted`] draws `k` items with probabilities proportional
//! to per-item weights, with or without replacement.
//!
//! # Determinism
//!
//! Both entry points take an optional seed; the same seed over the same
//! input yields the same sample. The `_with` variants accept a live
//! generator instead, so state carries across calls.
//!
//! # Example
//!
//! ```
//! use evensample::sample_evenly;
//!
//! let buckets = vec![vec!["a1", "a2", "a3"], vec!["b1"], vec!["c1", "c2"]];
//! let sample = sample_evenly(&buckets, 3, Some(7))?;
//!
//! // One sweep over three non-empty buckets: one item from each.
//! assert_eq!(sample.len(), 3);
//! # Ok::<(), evensample::SamplingError>(())
//! ```

use rand::distributions::{WeightedError, WeightedIndex};
use rand::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::{Result, SamplingError};

// =============================================================================
// Even Sampling
// =============================================================================

/// Draw `total` items spread as evenly as possible across `buckets`.
///
/// The buckets are copied and shuffled, then swept in that fixed order;
/// each sweep removes one uniformly chosen item from every bucket that
/// still has any, stopping mid-sweep once `total` is reached. The caller's
/// buckets are never modified, and no item is drawn twice.
///
/// The shuffle only decides which buckets receive the final partial
/// sweep; the count each bucket contributes over full sweeps does not
/// depend on it.
///
/// # Arguments
///
/// * `buckets` - Item groups to draw from; empty buckets are allowed
/// * `total` - Number of items to draw
/// * `seed` - Seed for reproducibility, or `None` for entropy
///
/// # Errors
///
/// Returns [`SamplingError::TotalTooLarge`] if `total` exceeds the
/// number of items across all buckets.
///
/// # Example
///
/// ```
/// use evensample::sample_evenly;
///
/// let buckets = vec![vec![1, 2, 3, 4], vec![5, 6], vec![7]];
/// let sample = sample_evenly(&buckets, 7, Some(42))?;
///
/// let mut all: Vec<i32> = sample.clone();
/// all.sort();
/// assert_eq!(all, vec![1, 2, 3, 4, 5, 6, 7]);
/// # Ok::<(), evensample::SamplingError>(())
/// ```
pub fn sample_evenly<T: Clone>(
    buckets: &[Vec<T>],
    total: usize,
    seed: Option<u64>,
) -> Result<Vec<T>> {
    match seed {
        Some(seed) => {
            sample_evenly_with(buckets, total, &mut Xoshiro256PlusPlus::seed_from_u64(seed))
        }
        None => sample_evenly_with(buckets, total, &mut Xoshiro256PlusPlus::from_entropy()),
    }
}

/// [`sample_evenly`] driven by a caller-held generator.
pub fn sample_evenly_with<T, R>(buckets: &[Vec<T>], total: usize, rng: &mut R) -> Result<Vec<T>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let available: usize = buckets.iter().map(Vec::len).sum();
    if total > available {
        return Err(SamplingError::TotalTooLarge { requested: total, available });
    }

    // Work on a copy, and fix a shuffled bucket order up front so the
    // partial final sweep does not always favor the first buckets.
    let mut working: Vec<Vec<T>> = buckets.to_vec();
    working.shuffle(rng);

    let mut sampled = Vec::with_capacity(total);
    while sampled.len() < total {
        let before = sampled.len();
        for bucket in working.iter_mut() {
            if sampled.len() == total {
                break;
            }
            if bucket.is_empty() {
                continue;
            }
            let i = rng.gen_range(0..bucket.len());
            sampled.push(bucket.remove(i));
        }
        // The size check guarantees items remain until `total` is hit.
        debug_assert!(sampled.len() > before, "sweep drew nothing");
    }

    Ok(sampled)
}

// =============================================================================
// Weighted Sampling
// =============================================================================

/// Draw `k` items with probability proportional to their weights.
///
/// Weights are relative; they do not need to sum to one. Without
/// replacement, each drawn item leaves the pool and the remaining
/// weights renormalize implicitly for the next draw.
///
/// # Arguments
///
/// * `items` - Items to draw from
/// * `weights` - One non-negative weight per item
/// * `k` - Number of items to draw
/// * `replace` - Whether an item may be drawn more than once
/// * `seed` - Seed for reproducibility, or `None` for entropy
///
/// # Errors
///
/// - [`SamplingError::WeightCountMismatch`] if `weights` and `items`
///   differ in length.
/// - [`SamplingError::SampleTooLarge`] if `k > items.len()` without
///   replacement.
/// - [`SamplingError::InvalidWeights`] if any weight is negative or
///   non-finite, if the weights overflow when summed, or if no positive
///   weight remains to draw from.
///
/// # Example
///
/// ```
/// use evensample::sample_weighted;
///
/// let items = ["rare", "common"];
/// let sample = sample_weighted(&items, &[1.0, 9.0], 4, true, Some(42))?;
/// assert_eq!(sample.len(), 4);
/// # Ok::<(), evensample::SamplingError>(())
/// ```
pub fn sample_weighted<T: Clone>(
    items: &[T],
    weights: &[f64],
    k: usize,
    replace: bool,
    seed: Option<u64>,
) -> Result<Vec<T>> {
    match seed {
        Some(seed) => {
            sample_weighted_with(items, weights, k, replace, &mut Xoshiro256PlusPlus::seed_from_u64(seed))
        }
        None => sample_weighted_with(items, weights, k, replace, &mut Xoshiro256PlusPlus::from_entropy()),
    }
}

/// [`sample_weighted`] driven by a caller-held generator.
///
/// When `k` is zero the weights are not consulted.
pub fn sample_weighted_with<T, R>(
    items: &[T],
    weights: &[f64],
    k: usize,
    replace: bool,
    rng: &mut R,
) -> Result<Vec<T>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if weights.len() != items.len() {
        return Err(SamplingError::WeightCountMismatch {
            items: items.len(),
            weights: weights.len(),
        });
    }
    if !replace && k > items.len() {
        return Err(SamplingError::SampleTooLarge { requested: k, available: items.len() });
    }
    if k == 0 {
        return Ok(Vec::new());
    }

    // `WeightedIndex` only rejects negative and NaN weights; an infinite
    // weight or an overflowing total slips through and breaks its inner
    // uniform sampler, so both are caught here.
    let mut total_weight = 0.0;
    for &weight in weights {
        if !weight.is_finite() {
            return Err(SamplingError::InvalidWeights(WeightedError::InvalidWeight));
        }
        total_weight += weight;
    }
    if !total_weight.is_finite() {
        return Err(SamplingError::InvalidWeights(WeightedError::InvalidWeight));
    }

    if replace {
        let dist = WeightedIndex::new(weights)?;
        Ok((0..k).map(|_| items[dist.sample(rng)].clone()).collect())
    } else {
        // Rebuild the distribution over the shrinking pool after every
        // draw; the remaining weights renormalize implicitly.
        let mut pool: Vec<usize> = (0..items.len()).collect();
        let mut sampled = Vec::with_capacity(k);
        for _ in 0..k {
            let dist = WeightedIndex::new(pool.iter().map(|&i| weights[i]))?;
            let chosen = dist.sample(rng);
            sampled.push(items[pool[chosen]].clone());
            pool.remove(chosen);
        }
        Ok(sampled)
    }
}

// =============================================================================
// Tests
// =============================================================================
