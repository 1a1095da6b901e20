//! Chainable wrapper over a borrowed sample

use crate::registry::{self, StatisticFn, Value};
use crate::summary::Summary;
use atoll_core::{Numeric, Result, StatsConfig};
use atoll_histogram::{BinAdvice, Histogram};
use atoll_quantile::QuartileReport;

/// A sample plus the settings used by the configurable entry points
///
/// Every statistic is a forwarding method, so `stats(&data).variance()` is
/// `atoll_spread::variance(&data)`. The sample is borrowed and never
/// reordered.
///
/// ```rust
/// use atoll::{stats, Estimate, StatsConfig};
///
/// let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// let s = stats(&data);
/// assert_eq!(s.std_dev_pop().unwrap(), 2.0);
///
/// let pop = s
///     .with_config(StatsConfig::default().with_estimate(Estimate::Population))
///     .unwrap();
/// assert_eq!(pop.std_dev_with_config().unwrap(), 2.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Stats<'a, T: Numeric = f64> {
    sample: &'a [T],
    config: StatsConfig,
}

/// Wrap a sample with the default configuration
pub fn stats<T: Numeric>(sample: &[T]) -> Stats<'_, T> {
    Stats::new(sample)
}

impl<'a, T: Numeric> Stats<'a, T> {
    pub fn new(sample: &'a [T]) -> Self {
        Self {
            sample,
            config: StatsConfig::default(),
        }
    }

    /// Replace the configuration after validating it
    pub fn with_config(mut self, config: StatsConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn sample(&self) -> &'a [T] {
        self.sample
    }

    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    // Aggregation

    pub fn sigma<F: Fn(f64) -> f64>(&self, transform: F) -> Result<f64> {
        atoll_core::sigma(self.sample, transform)
    }

    pub fn pi<F: Fn(f64) -> f64>(&self, transform: F) -> Result<f64> {
        atoll_core::pi(self.sample, transform)
    }

    pub fn sum(&self) -> Result<f64> {
        atoll_core::sum(self.sample)
    }

    pub fn product(&self) -> Result<f64> {
        atoll_core::product(self.sample)
    }

    pub fn min(&self) -> Result<T> {
        atoll_core::min(self.sample)
    }

    pub fn max(&self) -> Result<T> {
        atoll_core::max(self.sample)
    }

    pub fn size(&self) -> usize {
        self.sample.len()
    }

    pub fn range(&self) -> Result<f64> {
        atoll_core::range(self.sample)
    }

    // Central tendency

    pub fn mean(&self) -> Result<f64> {
        atoll_central::mean(self.sample)
    }

    pub fn mean_geo(&self) -> Result<f64> {
        atoll_central::mean_geo(self.sample)
    }

    pub fn mean_har(&self) -> Result<f64> {
        atoll_central::mean_har(self.sample)
    }

    pub fn median(&self) -> Result<f64> {
        atoll_central::median(self.sample)
    }

    pub fn mode(&self) -> Result<Vec<T>> {
        atoll_central::mode(self.sample)
    }

    // Dispersion

    pub fn variance(&self) -> Result<f64> {
        atoll_spread::variance(self.sample)
    }

    pub fn variance_pop(&self) -> Result<f64> {
        atoll_spread::variance_pop(self.sample)
    }

    pub fn std_dev(&self) -> Result<f64> {
        atoll_spread::std_dev(self.sample)
    }

    pub fn std_dev_pop(&self) -> Result<f64> {
        atoll_spread::std_dev_pop(self.sample)
    }

    pub fn stable_variance(&self) -> Result<f64> {
        atoll_spread::stable_variance(self.sample)
    }

    pub fn stable_variance_pop(&self) -> Result<f64> {
        atoll_spread::stable_variance_pop(self.sample)
    }

    pub fn stable_std_dev(&self) -> Result<f64> {
        atoll_spread::stable_std_dev(self.sample)
    }

    pub fn stable_std_dev_pop(&self) -> Result<f64> {
        atoll_spread::stable_std_dev_pop(self.sample)
    }

    /// Variance for the configured estimate and algorithm
    pub fn variance_with_config(&self) -> Result<f64> {
        atoll_spread::variance_by(
            self.sample,
            self.config.estimate,
            self.config.variance_algorithm,
        )
    }

    /// Standard deviation for the configured estimate and algorithm
    pub fn std_dev_with_config(&self) -> Result<f64> {
        atoll_spread::std_dev_by(
            self.sample,
            self.config.estimate,
            self.config.variance_algorithm,
        )
    }

    // Shape

    pub fn central_moment(&self, k: u32) -> Result<f64> {
        atoll_spread::central_moment(self.sample, k)
    }

    pub fn skewness(&self) -> Result<f64> {
        atoll_spread::skewness(self.sample)
    }

    pub fn skewness_pop(&self) -> Result<f64> {
        atoll_spread::skewness_pop(self.sample)
    }

    pub fn kurtosis(&self) -> Result<f64> {
        atoll_spread::kurtosis(self.sample)
    }

    pub fn kurtosis_pop(&self) -> Result<f64> {
        atoll_spread::kurtosis_pop(self.sample)
    }

    // Order statistics

    /// TI-83 quartiles with fences at the configured multiplier
    pub fn quartiles(&self) -> Result<QuartileReport<T>> {
        atoll_quantile::quartiles_with_fences(self.sample, self.config.fence_multiplier)
    }

    pub fn iqr(&self) -> Result<f64> {
        atoll_quantile::iqr(self.sample)
    }

    // Histogram advice

    pub fn sturges(&self) -> Result<BinAdvice> {
        atoll_histogram::sturges(self.sample)
    }

    pub fn scott(&self) -> Result<BinAdvice> {
        atoll_histogram::scott(self.sample)
    }

    pub fn square_root(&self) -> Result<BinAdvice> {
        atoll_histogram::square_root(self.sample)
    }

    pub fn freedman_diaconis(&self) -> Result<BinAdvice> {
        atoll_histogram::freedman_diaconis(self.sample)
    }

    /// Advice from the configured bin rule
    pub fn bins(&self) -> Result<BinAdvice> {
        atoll_histogram::advise(self.sample, self.config.bin_rule)
    }

    /// Histogram laid out by the configured bin rule
    pub fn histogram(&self) -> Result<Histogram> {
        Histogram::from_advice(self.sample, &self.bins()?)
    }

    /// Summary of the sample under the current configuration
    pub fn describe(&self) -> Result<Summary<T>> {
        Summary::compute(self.sample, &self.config)
    }

    // Name-based dispatch

    /// Resolve a statistic by name against the process registry
    pub fn bind(&self, name: &str) -> Result<Bound> {
        self.bind_in(registry::global(), name)
    }

    /// Resolve a statistic by name against a specific registry
    pub fn bind_in(&self, registry: &registry::Registry, name: &str) -> Result<Bound> {
        let f = registry.lookup(name)?;
        Ok(Bound {
            sample: atoll_core::numeric::to_f64_vec(self.sample),
            f,
        })
    }

    /// Look up `name` and call it with `params`
    pub fn call(&self, name: &str, params: &[f64]) -> Result<Value> {
        self.bind(name)?.call(params)
    }
}

/// A statistic resolved by name together with the sample it applies to
///
/// Calling a `Bound` never touches the registry again.
#[derive(Clone)]
pub struct Bound {
    sample: Vec<f64>,
    f: StatisticFn,
}

impl std::fmt::Debug for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bound")
            .field("sample_len", &self.sample.len())
            .finish_non_exhaustive()
    }
}

impl Bound {
    pub fn call(&self, params: &[f64]) -> Result<Value> {
        (self.f)(&self.sample, params)
    }
}

/// Extension trait giving slices a `.stats()` method
pub trait StatsExt<T: Numeric> {
    fn stats(&self) -> Stats<'_, T>;
}

impl<T: Numeric> StatsExt<T> for [T] {
    fn stats(&self) -> Stats<'_, T> {
        Stats::new(self)
    }
}
