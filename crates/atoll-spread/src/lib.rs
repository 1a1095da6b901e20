//! Dispersion and shape statistics
//!
//! This crate provides two independent variance families plus the moment
//! engine that feeds skewness and kurtosis:
//!
//! | Family | Functions | Use When |
//! |--------|-----------|----------|
//! | Two-pass | `variance`, `variance_pop`, `std_dev`, `std_dev_pop` | Data is well-conditioned; results match the textbook formula digit for digit |
//! | Welford | `stable_variance`, `stable_variance_pop`, `stable_std_dev`, `stable_std_dev_pop` | Large mean relative to spread |
//! | Moments | `central_moment`, `skewness(_pop)`, `kurtosis(_pop)` | Shape of the distribution |
//!
//! Both variance families agree to floating-point tolerance on
//! well-conditioned inputs.
//!
//! # Examples
//!
//! ```rust
//! use atoll_spread::{variance, stable_variance, variance_by};
//! use atoll_core::{Estimate, VarianceAlgorithm};
//!
//! let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! assert_eq!(variance(&data).unwrap(), 3.5);
//! assert!((stable_variance(&data).unwrap() - 3.5).abs() < 1e-12);
//!
//! let pop = variance_by(&data, Estimate::Population, VarianceAlgorithm::Welford).unwrap();
//! assert!((pop - 17.5 / 6.0).abs() < 1e-12);
//! ```

pub mod moments;
pub mod stable;
pub mod variance;

use atoll_core::{Estimate, Numeric, Result, VarianceAlgorithm};

// Re-exports
pub use moments::{central_moment, kurtosis, kurtosis_pop, skewness, skewness_pop};
pub use stable::{stable_std_dev, stable_std_dev_pop, stable_variance, stable_variance_pop};
pub use variance::{std_dev, std_dev_pop, variance, variance_pop};

/// Variance for a chosen estimate and algorithm
pub fn variance_by<T: Numeric>(
    sample: &[T],
    estimate: Estimate,
    algorithm: VarianceAlgorithm,
) -> Result<f64> {
    match (estimate, algorithm) {
        (Estimate::Population, VarianceAlgorithm::TwoPass) => variance_pop(sample),
        (Estimate::Sample, VarianceAlgorithm::TwoPass) => variance(sample),
        (Estimate::Population, VarianceAlgorithm::Welford) => stable_variance_pop(sample),
        (Estimate::Sample, VarianceAlgorithm::Welford) => stable_variance(sample),
    }
}

/// Standard deviation for a chosen estimate and algorithm
pub fn std_dev_by<T: Numeric>(
    sample: &[T],
    estimate: Estimate,
    algorithm: VarianceAlgorithm,
) -> Result<f64> {
    Ok(variance_by(sample, estimate, algorithm)?.sqrt())
}

/// Skewness for a chosen estimate
pub fn skewness_by<T: Numeric>(sample: &[T], estimate: Estimate) -> Result<f64> {
    match estimate {
        Estimate::Population => skewness_pop(sample),
        Estimate::Sample => skewness(sample),
    }
}

/// Kurtosis (proper, not excess, for the population form) for a chosen estimate
pub fn kurtosis_by<T: Numeric>(sample: &[T], estimate: Estimate) -> Result<f64> {
    match estimate {
        Estimate::Population => kurtosis_pop(sample),
        Estimate::Sample => kurtosis(sample),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_variance_by_dispatch() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(
            variance_by(&data, Estimate::Population, VarianceAlgorithm::TwoPass).unwrap(),
            4.0
        );
        assert_relative_eq!(
            variance_by(&data, Estimate::Sample, VarianceAlgorithm::Welford).unwrap(),
            32.0 / 7.0,
            epsilon = 1e-12
        );
        assert_eq!(
            std_dev_by(&data, Estimate::Population, VarianceAlgorithm::TwoPass).unwrap(),
            2.0
        );
    }

    #[test]
    fn test_shape_by_dispatch() {
        let data = [1, 2, 3, 4, 5, 61];
        assert_eq!(
            kurtosis_by(&data, Estimate::Population).unwrap(),
            kurtosis_pop(&data).unwrap()
        );
        assert_eq!(
            skewness_by(&data, Estimate::Sample).unwrap(),
            skewness(&data).unwrap()
        );
    }
}
