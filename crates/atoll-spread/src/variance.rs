//! Two-pass variance and standard deviation
//!
//! These follow the textbook definition literally: compute the mean, then sum
//! squared deviations from it. Accurate for well-conditioned data; for samples
//! whose spread is tiny relative to their magnitude prefer the Welford family
//! in [`crate::stable`].

use atoll_central::mean;
use atoll_core::{ensure_len, sigma, Numeric, Result};

/// Population variance: `Sigma((x - mu)^2) / N`
pub fn variance_pop<T: Numeric>(sample: &[T]) -> Result<f64> {
    let mu = mean(sample)?;
    let n = sample.len() as f64;
    Ok(sigma(sample, |x| (x - mu).powi(2))? / n)
}

/// Sample variance: `Sigma((x - xbar)^2) / (n - 1)`
///
/// Needs at least two elements.
pub fn variance<T: Numeric>(sample: &[T]) -> Result<f64> {
    ensure_len(sample, 2, "variance")?;
    let xbar = mean(sample)?;
    let n = sample.len() as f64;
    Ok(sigma(sample, |x| (x - xbar).powi(2))? / (n - 1.0))
}

/// Population standard deviation
pub fn std_dev_pop<T: Numeric>(sample: &[T]) -> Result<f64> {
    Ok(variance_pop(sample)?.sqrt())
}

/// Sample standard deviation
pub fn std_dev<T: Numeric>(sample: &[T]) -> Result<f64> {
    Ok(variance(sample)?.sqrt())
}
