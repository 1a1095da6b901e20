//! Configuration types for statistical methods

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Which variant of a statistic to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Estimate {
    /// The sample is the whole population (divide by `n`, biased moments)
    Population,
    /// The sample estimates a larger population (bias-corrected)
    Sample,
}

impl Default for Estimate {
    fn default() -> Self {
        Self::Sample
    }
}

/// Variance algorithm family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceAlgorithm {
    /// Compute the mean first, then sum squared deviations
    TwoPass,
    /// Welford's single-pass running update
    Welford,
}

impl Default for VarianceAlgorithm {
    fn default() -> Self {
        Self::TwoPass
    }
}

/// Histogram bin-count heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinRule {
    /// `k = ceil(log2(n) + 1)`
    Sturges,
    /// `h = 3.5 * s / n^(1/3)`
    Scott,
    /// `k = sqrt(n)`
    SquareRoot,
    /// `h = 2 * IQR / n^(1/3)`
    FreedmanDiaconis,
}

impl Default for BinRule {
    fn default() -> Self {
        Self::FreedmanDiaconis
    }
}

/// Tukey fence multiplier used for the inlier/outlier partition
pub const DEFAULT_FENCE_MULTIPLIER: f64 = 1.5;

/// Settings for the configurable entry points of the `Stats` facade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Population or sample variants of variance, std dev, skewness, kurtosis
    pub estimate: Estimate,
    /// Two-pass or Welford variance
    pub variance_algorithm: VarianceAlgorithm,
    /// Fences sit at `q1 - m * iqr` and `q3 + m * iqr`
    pub fence_multiplier: f64,
    /// Heuristic used when a single bin recommendation is requested
    pub bin_rule: BinRule,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            estimate: Estimate::default(),
            variance_algorithm: VarianceAlgorithm::default(),
            fence_multiplier: DEFAULT_FENCE_MULTIPLIER,
            bin_rule: BinRule::default(),
        }
    }
}

impl StatsConfig {
    /// Parse and validate a JSON configuration; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_estimate(mut self, estimate: Estimate) -> Self {
        self.estimate = estimate;
        self
    }

    pub fn with_variance_algorithm(mut self, algorithm: VarianceAlgorithm) -> Self {
        self.variance_algorithm = algorithm;
        self
    }

    pub fn with_fence_multiplier(mut self, multiplier: f64) -> Self {
        self.fence_multiplier = multiplier;
        self
    }

    pub fn with_bin_rule(mut self, rule: BinRule) -> Self {
        self.bin_rule = rule;
        self
    }

    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        validate_fence_multiplier(self.fence_multiplier)
    }
}

/// Fence multipliers must be finite and non-negative
pub fn validate_fence_multiplier(multiplier: f64) -> Result<()> {
    if !multiplier.is_finite() || multiplier < 0.0 {
        return Err(Error::InvalidParameter(format!(
            "Fence multiplier {multiplier} must be finite and non-negative"
        )));
    }
    Ok(())
}
