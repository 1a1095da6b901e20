//! Central tendency for descriptive statistics
//!
//! This crate provides the location statistics of a sample:
//! - Arithmetic mean
//! - Geometric mean
//! - Harmonic mean (expanded form, matching reference tools)
//! - Median
//! - Mode (numeric, sorted) and `commonest` (any hashable value)
//!
//! None of these functions reorder the caller's slice; the ones that need
//! sorted data sort a copy.
//!
//! # Examples
//!
//! ```rust
//! use atoll_central::{mean, mean_geo, mean_har, median, mode};
//!
//! let data = [1.0, 2.0, 3.0, 4.0];
//! assert_eq!(mean(&data).unwrap(), 2.5);
//! assert_eq!(mean_geo(&data).unwrap(), 24f64.powf(0.25));
//! assert!((mean_har(&data).unwrap() - 1.92).abs() < 1e-12);
//! assert_eq!(median(&data).unwrap(), 2.5);
//! assert_eq!(mode(&data).unwrap(), vec![1.0, 2.0, 3.0, 4.0]);
//! ```

pub mod mean;
pub mod median;
pub mod mode;

// Re-exports
pub use mean::{mean, mean_geo, mean_har};
pub use median::{median, median_sorted};
pub use mode::{commonest, mode};
