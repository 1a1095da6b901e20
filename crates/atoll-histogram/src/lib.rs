//! Histogram bin advice
//!
//! Four classic heuristics recommend a bin count `k` and width `h`:
//!
//! - [`sturges`]: `k = ceil(log2(n) + 1)`
//! - [`scott`]: `h = 3.5 s / n^(1/3)`
//! - [`square_root`]: `k = sqrt(n)`
//! - [`freedman_diaconis`]: `h = 2 IQR / n^(1/3)`
//!
//! Count-first rules derive `h` from the sample range; width-first rules
//! derive `k = ceil(range / h)`. [`Histogram::from_advice`] turns a
//! recommendation into counted bins.
//!
//! # Example
//!
//! ```rust
//! use atoll_histogram::{advise, histogram, BinRule};
//!
//! let data: Vec<f64> = (1..=16).map(f64::from).collect();
//! let advice = advise(&data, BinRule::Sturges).unwrap();
//! assert_eq!(advice.k, 5.0);
//!
//! let hist = histogram(&data, BinRule::Sturges).unwrap();
//! assert_eq!(hist.counts().iter().sum::<usize>(), 16);
//! ```

pub mod advisors;
pub mod traits;
pub mod types;

pub use advisors::{
    advise, freedman_diaconis, scott, square_root, sturges, BinAdvice, FreedmanDiaconisChoice,
    ScottsChoice, SquareRootChoice, SturgesFormula,
};
pub use atoll_core::BinRule;
pub use traits::BinAdvisor;
pub use types::{histogram, Histogram, HistogramBin, MAX_BINS};
