//! Utility functions for working with sample slices

use crate::numeric::Numeric;
use std::cmp::Ordering;

/// Sort a copy of the sample in ascending order
///
/// The caller's slice is never reordered. NaN values are placed at the end.
///
/// # Examples
///
/// ```rust
/// use atoll_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert_eq!(data, vec![3.0, 1.0, 5.0, 2.0, 4.0]);
/// ```
pub fn sorted<T: Numeric>(data: &[T]) -> Vec<T> {
    let mut sorted = data.to_vec();
    sorted.sort_by(ascending);
    sorted
}

/// Ascending comparator that orders NaN after every other value
pub fn ascending<T: Numeric>(a: &T, b: &T) -> Ordering {
    let (a_nan, b_nan) = (a.as_f64().is_nan(), b.as_f64().is_nan());
    match (a_nan, b_nan) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}
