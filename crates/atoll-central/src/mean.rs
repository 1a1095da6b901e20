//! Arithmetic, geometric and harmonic means

use atoll_core::{ensure_non_empty, product, sigma, sum, Error, Numeric, Result};

/// Arithmetic mean: `Sigma(x) / n`
///
/// # Examples
///
/// ```rust
/// use atoll_central::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
/// ```
pub fn mean<T: Numeric>(sample: &[T]) -> Result<f64> {
    Ok(sum(sample)? / sample.len() as f64)
}

/// Geometric mean: `Pi(x) ^ (1/n)`
///
/// A sample containing a negative value has no real-valued n-th root in
/// general and is rejected with [`Error::Domain`]. Zero is allowed and makes
/// the result zero. A product that overflows or underflows `f64` is also
/// rejected rather than reported as infinity or zero.
pub fn mean_geo<T: Numeric>(sample: &[T]) -> Result<f64> {
    ensure_non_empty(sample, "meanGeo")?;
    if sample.iter().any(|&x| x.as_f64() < 0.0) {
        return Err(Error::domain("meanGeo", "sample contains a negative value"));
    }
    let n = sample.len() as f64;
    Ok(representable_product(sample, "meanGeo")?.powf(1.0 / n))
}

/// Harmonic mean in its expanded form: `n * P / Sigma(P / x)` with `P = Pi(x)`
///
/// This is deliberately not `n / Sigma(1 / x)`. The expanded form loses some
/// accuracy on large samples but reproduces reference tool output exactly.
/// A zero element makes every term undefined and is rejected with
/// [`Error::Domain`], as is a sample whose product or term sum leaves the
/// finite `f64` range.
pub fn mean_har<T: Numeric>(sample: &[T]) -> Result<f64> {
    ensure_non_empty(sample, "meanHar")?;
    if sample.iter().any(|&x| x.as_f64() == 0.0) {
        return Err(Error::domain("meanHar", "sample contains a zero value"));
    }
    let n = sample.len() as f64;
    let pj = representable_product(sample, "meanHar")?;
    let terms = sigma(sample, |x| pj / x)?;
    if !terms.is_finite() || terms == 0.0 {
        return Err(Error::domain("meanHar", "sum of P / x is not representable as f64"));
    }
    Ok((n * pj) / terms)
}

// `Pi(x)`, rejecting overflow to infinity and underflow to zero of a sample
// without a zero element
fn representable_product<T: Numeric>(sample: &[T], operation: &'static str) -> Result<f64> {
    let pj = product(sample)?;
    let underflowed = pj == 0.0 && sample.iter().all(|&x| x.as_f64() != 0.0);
    if !pj.is_finite() || underflowed {
        return Err(Error::domain(operation, "sample product is not representable as f64"));
    }
    Ok(pj)
}
