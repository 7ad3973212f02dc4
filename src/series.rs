//! Labeled series: the ordered (label, value) sequences this crate samples from.
//!
//! A [`Series`] pairs every value with a label. Labels are opaque to the
//! sampling algorithms and need not be unique; they exist so a sampled
//! subset can be traced back to the rows it came from. Values only need
//! capabilities on demand: discrete binning asks for `PartialEq`,
//! continuous binning asks for a numeric view through [`SeriesValue`].
//!
//! # Example
//!
//! ```
//! use evensample::Series;
//!
//! let series = Series::from_pairs([("a", 1.0), ("b", 2.0), ("c", 3.0)]);
//! assert_eq!(series.len(), 3);
//! assert_eq!(series.take(&[2, 0]).labels(), &["c", "a"]);
//! ```

// =============================================================================
// Series
// =============================================================================

/// An ordered sequence of labeled values.
///
/// Stored as two parallel vectors. Positions `0..len` are the only
/// coordinate the algorithms use internally; labels ride along so results
/// can be mapped back to the caller's identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<L, V> {
    labels: Vec<L>,
    values: Vec<V>,
}

impl<L, V> Series<L, V> {
    /// Create a series from parallel label and value vectors.
    ///
    /// # Panics
    ///
    /// Panics if the vectors differ in length.
    pub fn new(labels: Vec<L>, values: Vec<V>) -> Self {
        assert_eq!(
            labels.len(),
            values.len(),
            "labels and values must have the same length"
        );
        Self { labels, values }
    }

    /// Create a series from (label, value) pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, V)>,
    {
        pairs.into_iter().collect()
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the series has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All labels, in order.
    #[inline]
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// All values, in order.
    #[inline]
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Label and value at `position`, or `None` past the end.
    #[inline]
    pub fn get(&self, position: usize) -> Option<(&L, &V)> {
        Some((self.labels.get(position)?, self.values.get(position)?))
    }

    /// Iterate over (label, value) pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&L, &V)> + '_ {
        self.labels.iter().zip(self.values.iter())
    }
}

impl<L: Clone, V: Clone> Series<L, V> {
    /// Select entries by position, in the order given.
    ///
    /// Labels are preserved, so the result maps back to the original rows.
    /// Positions may repeat.
    ///
    /// # Panics
    ///
    /// Panics if any position is out of bounds.
    pub fn take(&self, positions: &[usize]) -> Series<L, V> {
        let labels = positions.iter().map(|&p| self.labels[p].clone()).collect();
        let values = positions.iter().map(|&p| self.values[p].clone()).collect();
        Series { labels, values }
    }

    /// Keep only the entries whose value satisfies the predicate.
    pub fn filter<F>(&self, mut predicate: F) -> Series<L, V>
    where
        F: FnMut(&V) -> bool,
    {
        self.iter()
            .filter(|(_, value)| predicate(value))
            .map(|(label, value)| (label.clone(), value.clone()))
            .collect()
    }
}

impl<L, V: Clone> Series<L, V> {
    /// Replace all labels with the positions `0..len`.
    pub fn reset_labels(&self) -> Series<usize, V> {
        Series::from_values(self.values.clone())
    }
}

impl<V> Series<usize, V> {
    /// Create a series labeled by position, `0..values.len()`.
    pub fn from_values(values: Vec<V>) -> Self {
        let labels = (0..values.len()).collect();
        Self { labels, values }
    }
}

impl<L, V> FromIterator<(L, V)> for Series<L, V> {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        let (labels, values) = iter.into_iter().unzip();
        Self { labels, values }
    }
}

// =============================================================================
// SeriesValue
// =============================================================================

/// A series value that may expose a numeric view of itself.
///
/// Continuous binning projects values to `f64` through [`as_f64`]; types
/// without a numeric representation return `None` and can only be binned
/// discretely.
///
/// [`as_f64`]: SeriesValue::as_f64
pub trait SeriesValue: Clone {
    /// The value as an `f64`, or `None` if it has no numeric view.
    fn as_f64(&self) -> Option<f64>;
}

macro_rules! impl_series_value_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SeriesValue for $ty {
                #[inline]
                fn as_f64(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_series_value_numeric!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl SeriesValue for String {
    #[inline]
    fn as_f64(&self) -> Option<f64> {
        None
    }
}

impl SeriesValue for &str {
    #[inline]
    fn as_f64(&self) -> Option<f64> {
        None
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pairs_labels_with_values() {
        let series = Series::new(vec!["x", "y"], vec![1, 2]);
        assert_eq!(series.len(), 2);
        assert_eq!(series.get(1), Some((&"y", &2)));
        assert_eq!(series.get(2), None);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn new_rejects_mismatched_lengths() {
        Series::new(vec!["x"], vec![1, 2]);
    }

    #[test]
    fn from_values_labels_by_position() {
        let series = Series::from_values(vec![10, 20, 30]);
        assert_eq!(series.labels(), &[0, 1, 2]);
    }

    #[test]
    fn take_preserves_labels_and_order() {
        let series = Series::from_pairs([("a", 1), ("b", 2), ("c", 3)]);
        let taken = series.take(&[2, 0, 2]);
        assert_eq!(taken.labels(), &["c", "a", "c"]);
        assert_eq!(taken.values(), &[3, 1, 3]);
    }

    #[test]
    fn reset_labels_replaces_labels_with_positions() {
        let series = Series::from_pairs([("a", 1.5), ("b", 2.5)]);
        let reset = series.reset_labels();
        assert_eq!(reset.labels(), &[0, 1]);
        assert_eq!(reset.values(), series.values());
    }

    #[test]
    fn filter_keeps_matching_entries() {
        let series = Series::from_pairs([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
        let even = series.filter(|v| v % 2 == 0);
        assert_eq!(even.labels(), &["b", "d"]);
        assert_eq!(even.values(), &[2, 4]);
    }

    #[test]
    fn numeric_values_expose_f64() {
        assert_eq!(3u8.as_f64(), Some(3.0));
        assert_eq!((-2i32).as_f64(), Some(-2.0));
        assert_eq!(1.5f32.as_f64(), Some(1.5));
    }

    #[test]
    fn string_values_have_no_numeric_view() {
        assert_eq!("dog".as_f64(), None);
        assert_eq!("3.5".to_string().as_f64(), None);
    }
}
