//! Quartiles by the TI-83 method
//!
//! `q2` is the median. `q1` and `q3` are the medians of the lower and upper
//! halves of the sorted sample. For an even sample the halves split at the
//! midpoint; for an odd sample the median element belongs to neither half.
//!
//! Other quartile conventions exist (linear interpolation, Tukey hinges, the
//! nine Hyndman & Fan definitions). This module implements only the TI-83
//! split so results match the calculators and spreadsheets it is checked
//! against.

use atoll_central::median_sorted;
use atoll_core::config::validate_fence_multiplier;
use atoll_core::{ensure_len, sorted, Numeric, Result, DEFAULT_FENCE_MULTIPLIER};
use serde::Serialize;
use tracing::debug;

/// Quartiles, interquartile range, fences and the inlier/outlier partition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuartileReport<T = f64> {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    /// `q3 - q1`
    pub iqr: f64,
    /// `q1 - m * iqr`
    pub lower_fence: f64,
    /// `q3 + m * iqr`
    pub upper_fence: f64,
    /// Elements within the fences (inclusive), in original sample order
    pub insiders: Vec<T>,
    /// Elements outside the fences, in original sample order
    pub outsiders: Vec<T>,
}

impl<T> QuartileReport<T> {
    /// Whether `value` lies within the fences (inclusive)
    pub fn is_inside(&self, value: f64) -> bool {
        value >= self.lower_fence && value <= self.upper_fence
    }

    /// Whether any element fell outside the fences
    pub fn has_outliers(&self) -> bool {
        !self.outsiders.is_empty()
    }
}

/// Split points `(c1, c2)`: the lower half is `sorted[..c1]`, the upper `sorted[c2..]`
pub fn split_points(n: usize) -> (usize, usize) {
    if n % 2 == 0 {
        (n / 2, n / 2)
    } else {
        let c1 = (n - 1) / 2;
        (c1, c1 + 1)
    }
}

/// TI-83 quartiles with the conventional 1.5 * IQR fences
///
/// ```rust
/// use atoll_quantile::quartiles;
///
/// let report = quartiles(&[7, 15, 36, 39, 40, 41]).unwrap();
/// assert_eq!((report.q1, report.q2, report.q3, report.iqr), (15.0, 37.5, 40.0, 25.0));
/// ```
pub fn quartiles<T: Numeric>(sample: &[T]) -> Result<QuartileReport<T>> {
    quartiles_with_fences(sample, DEFAULT_FENCE_MULTIPLIER)
}

/// TI-83 quartiles with fences at `multiplier * iqr` beyond `q1` and `q3`
///
/// Needs at least two elements so both halves are non-empty. The caller's
/// sample is partitioned in its original order; an element that compares
/// false against both fences (NaN) is counted as an outsider so every element
/// lands in exactly one side.
pub fn quartiles_with_fences<T: Numeric>(
    sample: &[T],
    multiplier: f64,
) -> Result<QuartileReport<T>> {
    validate_fence_multiplier(multiplier)?;
    ensure_len(sample, 2, "quartiles")?;

    let sorted = sorted(sample);
    let (c1, c2) = split_points(sorted.len());

    let q1 = median_sorted(&sorted[..c1])?;
    let q2 = median_sorted(&sorted)?;
    let q3 = median_sorted(&sorted[c2..])?;
    let iqr = q3 - q1;

    let lower_fence = q1 - multiplier * iqr;
    let upper_fence = q3 + multiplier * iqr;

    let (insiders, outsiders): (Vec<T>, Vec<T>) = sample.iter().partition(|&&x| {
        let x = x.as_f64();
        x >= lower_fence && x <= upper_fence
    });

    debug!(
        n = sample.len(),
        q1,
        q2,
        q3,
        insiders = insiders.len(),
        outsiders = outsiders.len(),
        "quartile partition"
    );

    Ok(QuartileReport {
        q1,
        q2,
        q3,
        iqr,
        lower_fence,
        upper_fence,
        insiders,
        outsiders,
    })
}

/// Interquartile range `q3 - q1` (TI-83 quartiles)
pub fn iqr<T: Numeric>(sample: &[T]) -> Result<f64> {
    Ok(quartiles(sample)?.iqr)
}
