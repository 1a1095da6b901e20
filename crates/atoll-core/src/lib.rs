//! Core types for descriptive statistics
//!
//! This crate provides the foundation every other atoll crate builds on:
//!
//! - **Errors**: one error enum covering empty samples, undersized samples and
//!   domain violations
//! - **Numeric**: the sample element trait; statistics accept any primitive
//!   number and compute in `f64`
//! - **Aggregation**: `sigma` / `pi` folds with reduce semantics, plus
//!   `min`, `max`, `size` and `range`
//! - **Configuration**: serde-backed settings for the configurable entry points
//!
//! # Example
//!
//! ```rust
//! use atoll_core::{sigma, pi};
//!
//! let data = [1.0, 2.0, 3.0, 4.0];
//! assert_eq!(sigma(&data, |x| x).unwrap(), 10.0);
//! assert_eq!(pi(&data, |x| x).unwrap(), 24.0);
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod numeric;
pub mod utils;

// Re-export core types
pub use error::{ensure_len, ensure_non_empty, Error, Result};

pub use aggregate::{max, min, pi, pi_from, product, range, sigma, sigma_from, size, sum};
pub use config::{
    BinRule, Estimate, StatsConfig, VarianceAlgorithm, DEFAULT_FENCE_MULTIPLIER,
};
pub use numeric::Numeric;
pub use utils::sorted;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{BinRule, Error, Estimate, Numeric, Result, StatsConfig, VarianceAlgorithm};
}
