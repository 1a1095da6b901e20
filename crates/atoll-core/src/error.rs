//! Error types for descriptive statistics
//!
//! Provides a unified error type for all atoll crates.

use thiserror::Error;

/// Core error type for descriptive statistics
#[derive(Error, Debug)]
pub enum Error {
    /// A statistic that needs at least one element was given none
    #[error("Empty sample: {operation} requires at least one element")]
    EmptySample { operation: &'static str },

    /// The sample is smaller than the formula's denominator allows
    #[error("Insufficient sample size for {operation}: expected at least {expected} elements, got {actual}")]
    InsufficientSampleSize {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The formula has no real-valued result for this sample
    #[error("Domain error in {operation}: {reason}")]
    Domain {
        operation: &'static str,
        reason: String,
    },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// No statistic registered under the requested name
    #[error("Unknown statistic: {0}")]
    UnknownStatistic(String),

    /// The process-wide registry can only be installed once
    #[error("Statistic registry has already been installed")]
    RegistryInstalled,

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_sample(operation: &'static str) -> Self {
        Self::EmptySample { operation }
    }

    /// Create an error for a sample below a formula's minimum size
    pub fn insufficient(operation: &'static str, expected: usize, actual: usize) -> Self {
        Self::InsufficientSampleSize {
            operation,
            expected,
            actual,
        }
    }

    /// Create an error for a value outside the real-valued domain
    pub fn domain(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::Domain {
            operation,
            reason: reason.into(),
        }
    }

    /// Whether this error reports a sample that is too small (empty included)
    pub fn is_size_error(&self) -> bool {
        matches!(
            self,
            Self::EmptySample { .. } | Self::InsufficientSampleSize { .. }
        )
    }
}

/// Fail with [`Error::EmptySample`] when `sample` has no elements
pub fn ensure_non_empty<T>(sample: &[T], operation: &'static str) -> Result<()> {
    if sample.is_empty() {
        return Err(Error::empty_sample(operation));
    }
    Ok(())
}

/// Fail when `sample` holds fewer than `min_len` elements
///
/// An empty sample is always reported as [`Error::EmptySample`], so callers
/// can tell "nothing at all" apart from "not enough for this formula".
pub fn ensure_len<T>(sample: &[T], min_len: usize, operation: &'static str) -> Result<()> {
    ensure_non_empty(sample, operation)?;
    if sample.len() < min_len {
        return Err(Error::insufficient(operation, min_len, sample.len()));
    }
    Ok(())
}
