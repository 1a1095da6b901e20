//! Welford's single-pass variance
//!
//! Maintains a running mean and a running sum of squared deviations. Each
//! step uses the freshly updated mean, which keeps the accumulator stable for
//! large-mean, small-variance samples where the two-pass family suffers from
//! catastrophic cancellation.
//!
//! Reference: Welford (1962), "Note on a Method for Calculating Corrected
//! Sums of Squares and Products", *Technometrics* 4(3).

use atoll_core::{ensure_len, ensure_non_empty, Numeric, Result};
use tracing::trace;

/// Running state after a full pass over the sample
#[derive(Debug, Clone, Copy, PartialEq)]
struct WelfordPass {
    count: usize,
    mean: f64,
    m2: f64,
}

fn welford_pass<T: Numeric>(sample: &[T]) -> WelfordPass {
    let mut xbar = 0.0;
    let mut m2 = 0.0;
    for (i, &value) in sample.iter().enumerate() {
        let x = value.as_f64();
        let delta = x - xbar;
        xbar += delta / (i + 1) as f64;
        m2 += delta * (x - xbar);
    }
    trace!(count = sample.len(), mean = xbar, m2, "welford pass complete");
    WelfordPass {
        count: sample.len(),
        mean: xbar,
        m2,
    }
}

/// Population variance, single pass: `M2 / n`
pub fn stable_variance_pop<T: Numeric>(sample: &[T]) -> Result<f64> {
    ensure_non_empty(sample, "stableVariancePop")?;
    let pass = welford_pass(sample);
    Ok(pass.m2 / pass.count as f64)
}

/// Sample variance, single pass: population result scaled by `n / (n - 1)`
pub fn stable_variance<T: Numeric>(sample: &[T]) -> Result<f64> {
    ensure_len(sample, 2, "stableVariance")?;
    let n = sample.len() as f64;
    Ok(stable_variance_pop(sample)? * n / (n - 1.0))
}

/// Population standard deviation, single pass
pub fn stable_std_dev_pop<T: Numeric>(sample: &[T]) -> Result<f64> {
    Ok(stable_variance_pop(sample)?.sqrt())
}

/// Sample standard deviation, single pass
pub fn stable_std_dev<T: Numeric>(sample: &[T]) -> Result<f64> {
    Ok(stable_variance(sample)?.sqrt())
}
