//! Aggregation primitives
//!
//! `sigma` and `pi` fold a sample through a per-element transform and sum or
//! multiply the results. They follow reduce semantics: the first transformed
//! element seeds the accumulator, so a single-element sample returns its own
//! transformed value and an empty sample is an error. Callers that want the
//! additive or multiplicative identity for an empty sample ask for it
//! explicitly through [`sigma_from`] / [`pi_from`].

use crate::error::{ensure_non_empty, Error, Result};
use crate::numeric::Numeric;

/// Sum of `transform(x)` over the sample
///
/// # Examples
///
/// ```rust
/// use atoll_core::aggregate::sigma;
///
/// let sum_sq = sigma(&[1.0, 2.0, 3.0], |x| x * x).unwrap();
/// assert_eq!(sum_sq, 14.0);
/// ```
pub fn sigma<T, F>(sample: &[T], transform: F) -> Result<f64>
where
    T: Numeric,
    F: Fn(f64) -> f64,
{
    sample
        .iter()
        .map(|&x| transform(x.as_f64()))
        .reduce(|acc, x| acc + x)
        .ok_or_else(|| Error::empty_sample("sigma"))
}

/// Product of `transform(x)` over the sample
pub fn pi<T, F>(sample: &[T], transform: F) -> Result<f64>
where
    T: Numeric,
    F: Fn(f64) -> f64,
{
    sample
        .iter()
        .map(|&x| transform(x.as_f64()))
        .reduce(|acc, x| acc * x)
        .ok_or_else(|| Error::empty_sample("pi"))
}

/// Sum of the sample (identity transform)
pub fn sum<T: Numeric>(sample: &[T]) -> Result<f64> {
    sigma(sample, |x| x)
}

/// Product of the sample (identity transform)
pub fn product<T: Numeric>(sample: &[T]) -> Result<f64> {
    pi(sample, |x| x)
}

/// Seeded sum; never fails
///
/// ```rust
/// use atoll_core::aggregate::sigma_from;
///
/// let empty: [f64; 0] = [];
/// assert_eq!(sigma_from(0.0, &empty, |x| x), 0.0);
/// ```
pub fn sigma_from<T, F>(seed: f64, sample: &[T], transform: F) -> f64
where
    T: Numeric,
    F: Fn(f64) -> f64,
{
    sample
        .iter()
        .fold(seed, |acc, &x| acc + transform(x.as_f64()))
}

/// Seeded product; never fails
pub fn pi_from<T, F>(seed: f64, sample: &[T], transform: F) -> f64
where
    T: Numeric,
    F: Fn(f64) -> f64,
{
    sample
        .iter()
        .fold(seed, |acc, &x| acc * transform(x.as_f64()))
}

/// Smallest element of the sample
pub fn min<T: Numeric>(sample: &[T]) -> Result<T> {
    ensure_non_empty(sample, "min")?;
    Ok(extreme(sample, |candidate, best| candidate < best))
}

/// Largest element of the sample
pub fn max<T: Numeric>(sample: &[T]) -> Result<T> {
    ensure_non_empty(sample, "max")?;
    Ok(extreme(sample, |candidate, best| candidate > best))
}

/// Number of elements in the sample
#[inline]
pub fn size<T>(sample: &[T]) -> usize {
    sample.len()
}

/// `max - min` of the sample
pub fn range<T: Numeric>(sample: &[T]) -> Result<f64> {
    Ok(max(sample)?.as_f64() - min(sample)?.as_f64())
}

// Caller guarantees a non-empty sample
fn extreme<T: Numeric>(sample: &[T], better: impl Fn(T, T) -> bool) -> T {
    let mut best = sample[0];
    for &x in &sample[1..] {
        if better(x, best) {
            best = x;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sigma_with_transform() {
        let a = [1.0, 2.0, 3.0];
        assert_eq!(sigma(&a, |x| x * x).unwrap(), 14.0);
        assert_eq!(sigma(&a, |x| x.powi(4)).unwrap(), 98.0);
        assert_eq!(sum(&a).unwrap(), 6.0);
    }

    #[test]
    fn test_single_element_short_circuits() {
        // The transformed value comes back untouched, no identity is mixed in
        assert_eq!(sigma(&[3.0], |x| x * 10.0).unwrap(), 30.0);
        assert_eq!(pi(&[3.0], |x| x + 1.0).unwrap(), 4.0);
        assert_eq!(product(&[-2.5]).unwrap(), -2.5);
    }

    #[test]
    fn test_empty_sample_is_an_error() {
        let empty: [f64; 0] = [];
        assert!(matches!(sum(&empty), Err(Error::EmptySample { operation: "sigma" })));
        assert!(matches!(product(&empty), Err(Error::EmptySample { operation: "pi" })));
        assert!(min(&empty).is_err());
        assert!(max(&empty).is_err());
        assert!(range(&empty).is_err());
    }

    #[test]
    fn test_seeded_folds() {
        let empty: [f64; 0] = [];
        assert_eq!(sigma_from(0.0, &empty, |x| x), 0.0);
        assert_eq!(pi_from(1.0, &empty, |x| x), 1.0);
        assert_eq!(sigma_from(10.0, &[1, 2, 3], |x| x), 16.0);
        assert_eq!(pi_from(1.0, &[1, 2, 3, 4], |x| x), 24.0);
    }

    #[test]
    fn test_product() {
        assert_eq!(product(&[1, 2, 3, 4]).unwrap(), 24.0);
        assert_relative_eq!(pi(&[1.0, 2.0, 4.0], |x| 1.0 / x).unwrap(), 0.125);
    }

    #[test]
    fn test_min_max() {
        let a = [23, 3, -2, 153, 4];
        assert_eq!(min(&a).unwrap(), -2);
        assert_eq!(max(&a).unwrap(), 153);
        assert_eq!(range(&a).unwrap(), 155.0);
        assert_eq!(size(&a), 5);
    }

    #[test]
    fn test_min_max_single_element() {
        assert_eq!(min(&[42.0]).unwrap(), 42.0);
        assert_eq!(max(&[42.0]).unwrap(), 42.0);
        assert_eq!(range(&[42.0]).unwrap(), 0.0);
    }
}
