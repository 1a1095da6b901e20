//! # Atoll
//!
//! Descriptive statistics over in-memory samples, with formulas that match
//! the textbook (and spreadsheet) definitions digit for digit.
//!
//! ## Crates
//!
//! - **atoll-core**: errors, the `Numeric` element trait, `sigma` / `pi`
//!   aggregation and configuration types
//! - **atoll-central**: mean (arithmetic, geometric, harmonic), median, mode
//! - **atoll-spread**: two-pass and Welford variance, central moments,
//!   skewness, kurtosis
//! - **atoll-quantile**: TI-83 quartiles with Tukey fences
//! - **atoll-histogram**: Sturges, Scott, square-root and Freedman–Diaconis
//!   bin advice
//!
//! This crate adds the [`Stats`] wrapper, the name-based [`registry`] and
//! [`Summary`].
//!
//! ## Quick Start
//!
//! ```rust
//! use atoll::prelude::*;
//!
//! let data = [7.0, 15.0, 36.0, 39.0, 40.0, 41.0];
//! let s = stats(&data);
//!
//! let q = s.quartiles().unwrap();
//! assert_eq!((q.q1, q.q2, q.q3, q.iqr), (15.0, 37.5, 40.0, 25.0));
//!
//! let summary = s.describe().unwrap();
//! assert_eq!(summary.count, 6);
//!
//! // Same statistic, looked up by name
//! assert_eq!(s.call("median", &[]).unwrap(), Value::Scalar(37.5));
//! ```

pub mod facade;
pub mod registry;
pub mod summary;

// Re-export all workspace crates
pub use atoll_central as central;
pub use atoll_histogram as histogram;
pub use atoll_quantile as quantile;
pub use atoll_spread as spread;

// Core types and free functions
pub use atoll_core::{
    max, min, pi, pi_from, product, range, sigma, sigma_from, size, sum, BinRule, Error,
    Estimate, Numeric, Result, StatsConfig, VarianceAlgorithm,
};

pub use atoll_central::{commonest, mean, mean_geo, mean_har, median, mode};
pub use atoll_histogram::{
    advise, freedman_diaconis, histogram, scott, square_root, sturges, BinAdvice, BinAdvisor,
    Histogram, HistogramBin,
};
pub use atoll_quantile::{iqr, quartiles, quartiles_with_fences, QuartileReport};
pub use atoll_spread::{
    central_moment, kurtosis, kurtosis_pop, skewness, skewness_pop, stable_std_dev,
    stable_std_dev_pop, stable_variance, stable_variance_pop, std_dev, std_dev_pop, variance,
    variance_pop,
};

pub use facade::{stats, Bound, Stats, StatsExt};
pub use registry::{Registry, StatisticFn, Value};
pub use summary::Summary;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        stats, BinRule, Error, Estimate, Registry, Result, Stats, StatsConfig, StatsExt,
        Summary, Value, VarianceAlgorithm,
    };
}
