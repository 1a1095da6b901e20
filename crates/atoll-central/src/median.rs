//! Median

use atoll_core::{ensure_non_empty, sorted, Numeric, Result};

/// Median of the sample
///
/// Sorts a copy; the caller's ordering is left alone. Odd-length samples
/// return the middle element, even-length samples the mean of the two
/// central elements.
///
/// ```rust
/// use atoll_central::median;
///
/// let data = [7.0, 1.0, 3.0, 5.0];
/// assert_eq!(median(&data).unwrap(), 4.0);
/// assert_eq!(data, [7.0, 1.0, 3.0, 5.0]);
/// ```
pub fn median<T: Numeric>(sample: &[T]) -> Result<f64> {
    median_sorted(&sorted(sample))
}

/// Median of a slice already sorted in ascending order
pub fn median_sorted<T: Numeric>(sorted_sample: &[T]) -> Result<f64> {
    ensure_non_empty(sorted_sample, "median")?;
    let n = sorted_sample.len();
    if n % 2 == 1 {
        return Ok(sorted_sample[(n - 1) / 2].as_f64());
    }
    let lower = sorted_sample[n / 2 - 1].as_f64();
    let upper = sorted_sample[n / 2].as_f64();
    Ok((lower + upper) / 2.0)
}
