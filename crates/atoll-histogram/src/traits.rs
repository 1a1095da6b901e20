//! Core traits for histogram bin advice

use crate::advisors::BinAdvice;
use atoll_core::{Numeric, Result};

/// Trait for heuristics that recommend a bin count and width for a sample
pub trait BinAdvisor<T: Numeric = f64> {
    /// Recommend `{k, h}` for the given sample
    fn advise(&self, sample: &[T]) -> Result<BinAdvice>;

    /// Human-readable name of the heuristic
    fn name(&self) -> &'static str;
}
