//! One-call summary of a sample

use atoll_core::{ensure_non_empty, Error, Numeric, Result, StatsConfig};
use atoll_quantile::QuartileReport;
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument};

/// Descriptive summary computed under a [`StatsConfig`]
///
/// Statistics whose formula needs more elements than the sample has, or
/// that are undefined for it (skewness of a constant sample), are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary<T = f64> {
    pub count: usize,
    pub min: T,
    pub max: T,
    pub range: f64,
    pub mean: f64,
    pub median: f64,
    /// Per the configured estimate and algorithm
    pub variance: Option<f64>,
    pub std_dev: Option<f64>,
    pub skewness: Option<f64>,
    pub kurtosis: Option<f64>,
    /// Quartiles with fences at the configured multiplier
    pub quartiles: Option<QuartileReport<T>>,
}

impl<T: Numeric> Summary<T> {
    /// Summarise a non-empty sample
    #[instrument(skip_all, fields(n = sample.len()))]
    pub fn compute(sample: &[T], config: &StatsConfig) -> Result<Self> {
        ensure_non_empty(sample, "describe")?;
        config.validate()?;

        let variance = optional(atoll_spread::variance_by(
            sample,
            config.estimate,
            config.variance_algorithm,
        ))?;
        let summary = Self {
            count: sample.len(),
            min: atoll_core::min(sample)?,
            max: atoll_core::max(sample)?,
            range: atoll_core::range(sample)?,
            mean: atoll_central::mean(sample)?,
            median: atoll_central::median(sample)?,
            variance,
            std_dev: variance.map(f64::sqrt),
            skewness: optional(atoll_spread::skewness_by(sample, config.estimate))?,
            kurtosis: optional(atoll_spread::kurtosis_by(sample, config.estimate))?,
            quartiles: optional(atoll_quantile::quartiles_with_fences(
                sample,
                config.fence_multiplier,
            ))?,
        };
        debug!(
            estimate = ?config.estimate,
            algorithm = ?config.variance_algorithm,
            "computed summary"
        );
        Ok(summary)
    }
}

// Too-small and undefined cases become `None`; anything else propagates
fn optional<V>(result: Result<V>) -> Result<Option<V>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.is_size_error() || matches!(e, Error::Domain { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

fn write_opt(f: &mut fmt::Formatter<'_>, label: &str, value: Option<f64>) -> fmt::Result {
    match value {
        Some(v) => writeln!(f, "{label:<10} {v:.6}"),
        None => writeln!(f, "{label:<10} -"),
    }
}

impl<T: fmt::Debug> fmt::Display for Summary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<10} {}", "count", self.count)?;
        writeln!(f, "{:<10} {:?}", "min", self.min)?;
        writeln!(f, "{:<10} {:?}", "max", self.max)?;
        writeln!(f, "{:<10} {:.6}", "range", self.range)?;
        writeln!(f, "{:<10} {:.6}", "mean", self.mean)?;
        writeln!(f, "{:<10} {:.6}", "median", self.median)?;
        write_opt(f, "variance", self.variance)?;
        write_opt(f, "std_dev", self.std_dev)?;
        write_opt(f, "skewness", self.skewness)?;
        write_opt(f, "kurtosis", self.kurtosis)?;
        if let Some(q) = &self.quartiles {
            writeln!(f, "{:<10} {:.6} / {:.6} / {:.6}", "quartiles", q.q1, q.q2, q.q3)?;
            writeln!(f, "{:<10} {}", "outliers", q.outsiders.len())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use atoll_core::{Estimate, VarianceAlgorithm};

    #[test]
    fn test_summary_sample_defaults() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let summary = Summary::compute(&data, &StatsConfig::default()).unwrap();
        assert_eq!(summary.count, 8);
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 9.0);
        assert_eq!(summary.range, 7.0);
        assert_eq!(summary.mean, 5.0);
        assert_eq!(summary.median, 4.5);
        assert_relative_eq!(summary.std_dev.unwrap(), 2.138089935299395, epsilon = 1e-12);
        assert!(summary.skewness.is_some());
        assert!(summary.kurtosis.is_some());
        assert_eq!(summary.quartiles.unwrap().q2, 4.5);
    }

    #[test]
    fn test_summary_population_welford() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let config = StatsConfig::default()
            .with_estimate(Estimate::Population)
            .with_variance_algorithm(VarianceAlgorithm::Welford);
        let summary = Summary::compute(&data, &config).unwrap();
        assert_relative_eq!(summary.variance.unwrap(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(summary.std_dev.unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_summary_single_element() {
        let summary = Summary::compute(&[42], &StatsConfig::default()).unwrap();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.min, 42);
        assert_eq!(summary.mean, 42.0);
        assert_eq!(summary.variance, None);
        assert_eq!(summary.skewness, None);
        assert_eq!(summary.kurtosis, None);
        assert!(summary.quartiles.is_none());
    }

    #[test]
    fn test_summary_constant_sample() {
        let summary = Summary::compute(&[3.0; 5], &StatsConfig::default()).unwrap();
        assert_eq!(summary.variance, Some(0.0));
        assert_eq!(summary.skewness, None);
        assert_eq!(summary.kurtosis, None);
    }

    #[test]
    fn test_summary_empty_is_an_error() {
        let empty: [f64; 0] = [];
        assert!(matches!(
            Summary::compute(&empty, &StatsConfig::default()),
            Err(Error::EmptySample { operation: "describe" })
        ));
    }

    #[test]
    fn test_summary_display() {
        let summary = Summary::compute(&[1.0, 2.0, 3.0], &StatsConfig::default()).unwrap();
        let text = summary.to_string();
        assert!(text.contains("count      3"));
        assert!(text.contains("kurtosis   -"));
    }
}
