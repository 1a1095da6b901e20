//! Order statistics: quartiles, interquartile range and outlier fences
//!
//! Quartiles follow the TI-83 method; see [`quartiles`] for the exact split
//! rule. The report partitions the original (unsorted) sample into
//! `insiders` and `outsiders` using inclusive fence comparisons.
//!
//! # Examples
//!
//! ```rust
//! use atoll_quantile::quartiles;
//!
//! let data = [10.0, 12.0, 11.0, 95.0, 13.0, 12.0, 11.0];
//! let report = quartiles(&data).unwrap();
//! assert_eq!(report.outsiders, vec![95.0]);
//! ```

pub mod quartiles;

// Re-exports
pub use quartiles::{iqr, quartiles, quartiles_with_fences, split_points, QuartileReport};
