//! Mode: the most frequent value(s) of a sample
//!
//! Ties are never broken. Every value that reaches the maximum count is
//! returned, so the result is always a collection.

use atoll_core::{ensure_non_empty, utils::ascending, Numeric, Result};
use ordered_float::OrderedFloat;
use std::collections::HashMap;
use std::hash::Hash;

/// All values attaining the maximum count, sorted ascending
///
/// Values are grouped by their `f64` representation, so `2` and `2.0` from
/// different element types would count as the same value. `0.0` and `-0.0`
/// are grouped together.
///
/// ```rust
/// use atoll_central::mode;
///
/// assert_eq!(mode(&[3, 1, 3, 2, 1]).unwrap(), vec![1, 3]);
/// ```
pub fn mode<T: Numeric>(sample: &[T]) -> Result<Vec<T>> {
    ensure_non_empty(sample, "mode")?;

    // key -> (first element seen with this key, count)
    let mut counts: HashMap<OrderedFloat<f64>, (T, usize)> = HashMap::new();
    for &x in sample {
        counts
            .entry(OrderedFloat(x.as_f64()))
            .or_insert((x, 0))
            .1 += 1;
    }

    let maximum = counts.values().map(|&(_, count)| count).max().unwrap_or(0);
    let mut commonest: Vec<T> = counts
        .into_values()
        .filter(|&(_, count)| count == maximum)
        .map(|(value, _)| value)
        .collect();
    commonest.sort_by(ascending);
    Ok(commonest)
}

/// Mode for arbitrary hashable values
///
/// Works on non-numeric data. Co-maximal values come back in the order they
/// first appear in the sample.
///
/// ```rust
/// use atoll_central::commonest;
///
/// let words = ["b", "a", "b", "c", "a"];
/// assert_eq!(commonest(&words).unwrap(), vec!["b", "a"]);
/// ```
pub fn commonest<T: Eq + Hash + Clone>(sample: &[T]) -> Result<Vec<T>> {
    ensure_non_empty(sample, "mode")?;

    let mut counts: HashMap<&T, usize> = HashMap::new();
    let mut first_seen: Vec<&T> = Vec::new();
    for value in sample {
        let count = counts.entry(value).or_insert(0);
        if *count == 0 {
            first_seen.push(value);
        }
        *count += 1;
    }

    let maximum = counts.values().copied().max().unwrap_or(0);
    Ok(first_seen
        .into_iter()
        .filter(|value| counts.get(value).copied() == Some(maximum))
        .cloned()
        .collect())
}
