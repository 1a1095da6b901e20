//! Central moments, skewness and kurtosis
//!
//! Skewness and kurtosis are inconsistently named across tools. The `_pop`
//! functions are the biased population forms (what computer-algebra systems
//! report); the unsuffixed functions are the bias-corrected sample forms
//! found in spreadsheets.

use atoll_central::mean;
use atoll_core::{ensure_len, ensure_non_empty, sigma, Error, Numeric, Result};

/// Sample central moment of order `k`: `Sigma((x - xbar)^k) / n`
///
/// The 0th moment is defined as 1 for every sample, including an empty one.
/// The 1st moment is 0 by construction and is returned exactly rather than
/// accumulated.
pub fn central_moment<T: Numeric>(sample: &[T], k: u32) -> Result<f64> {
    if k == 0 {
        return Ok(1.0);
    }
    ensure_non_empty(sample, "centralMoment")?;
    if k == 1 {
        return Ok(0.0);
    }
    let order = i32::try_from(k)
        .map_err(|_| Error::InvalidParameter(format!("Moment order {k} exceeds {}", i32::MAX)))?;
    let xbar = mean(sample)?;
    let n = sample.len() as f64;
    Ok(sigma(sample, |x| (x - xbar).powi(order))? / n)
}

// Second moment, rejecting a degenerate sample whose shape ratios are 0/0
fn nonzero_m2<T: Numeric>(sample: &[T], operation: &'static str) -> Result<f64> {
    let m2 = central_moment(sample, 2)?;
    if m2 == 0.0 {
        return Err(Error::domain(operation, "sample has zero variance"));
    }
    Ok(m2)
}

/// Biased population skewness: `m3 / m2^(3/2)`
pub fn skewness_pop<T: Numeric>(sample: &[T]) -> Result<f64> {
    ensure_non_empty(sample, "skewnessPop")?;
    let m2 = nonzero_m2(sample, "skewnessPop")?;
    let m3 = central_moment(sample, 3)?;
    Ok(m3 / m2.powf(1.5))
}

/// Bias-corrected sample skewness
///
/// Uses the `sqrt(n (n - 1)) / (n - 2)` adjustment from Joanes & Gill (1998),
/// *Comparing measures of sample skewness and kurtosis*. Needs at least three
/// elements.
pub fn skewness<T: Numeric>(sample: &[T]) -> Result<f64> {
    ensure_len(sample, 3, "skewness")?;
    let n = sample.len() as f64;
    let c = (n * (n - 1.0)).sqrt() / (n - 2.0);
    Ok(c * skewness_pop(sample)?)
}

/// Biased population kurtosis: `m4 / m2^2`
///
/// This is kurtosis proper (3 for a normal distribution), not the excess.
pub fn kurtosis_pop<T: Numeric>(sample: &[T]) -> Result<f64> {
    ensure_non_empty(sample, "kurtosisPop")?;
    let m2 = nonzero_m2(sample, "kurtosisPop")?;
    let m4 = central_moment(sample, 4)?;
    Ok(m4 / (m2 * m2))
}

/// Bias-corrected sample kurtosis, as reported by spreadsheets
///
/// With `g2 = kurtosis_pop - 3` and `c1 = (n - 1) / ((n - 2)(n - 3))` the
/// result is `c1 * ((n + 1) g2 + 6)`. Needs at least four elements.
pub fn kurtosis<T: Numeric>(sample: &[T]) -> Result<f64> {
    ensure_len(sample, 4, "kurtosis")?;
    let n = sample.len() as f64;
    let g2 = kurtosis_pop(sample)? - 3.0;
    let c1 = (n - 1.0) / ((n - 2.0) * (n - 3.0));
    Ok(c1 * ((n + 1.0) * g2 + 6.0))
}
