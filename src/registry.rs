//! Name-based dispatch over the built-in statistics
//!
//! A [`Registry`] maps a statistic name to a plain function pointer. The
//! built-in table uses the conventional camelCase names (`meanGeo`,
//! `stableVariancePop`, `freedmanDiaconis`, ...). Extra statistics are added
//! with [`Registry::with`], which also replaces an existing entry of the same
//! name.
//!
//! The process-wide registry is installed at most once, at startup, through
//! [`install`]. If nothing is installed, [`global`] serves the built-ins.
//! Lookups resolve to a function pointer, so the registry is never consulted
//! while a statistic is being computed.
//!
//! ```rust
//! use atoll::registry::{Registry, Value};
//!
//! fn midrange(sample: &[f64], _params: &[f64]) -> atoll::Result<Value> {
//!     let lo = atoll::min(sample)?;
//!     let hi = atoll::max(sample)?;
//!     Ok(Value::Scalar((lo + hi) / 2.0))
//! }
//!
//! let registry = Registry::builtin().with("midrange", midrange);
//! let f = registry.lookup("midrange").unwrap();
//! assert_eq!(f(&[1.0, 9.0, 4.0], &[]).unwrap(), Value::Scalar(5.0));
//! ```

use atoll_core::{Error, Result};
use atoll_histogram::BinAdvice;
use atoll_quantile::QuartileReport;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;
use tracing::debug;

/// Result of a statistic called by name
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(f64),
    Count(usize),
    Values(Vec<f64>),
    Quartiles(QuartileReport<f64>),
    Bins(BinAdvice),
}

impl Value {
    /// The scalar payload, if this is a [`Value::Scalar`]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(x) => Some(*x),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Scalar(x)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Self::Count(n)
    }
}

impl From<Vec<f64>> for Value {
    fn from(values: Vec<f64>) -> Self {
        Self::Values(values)
    }
}

impl From<QuartileReport<f64>> for Value {
    fn from(report: QuartileReport<f64>) -> Self {
        Self::Quartiles(report)
    }
}

impl From<BinAdvice> for Value {
    fn from(advice: BinAdvice) -> Self {
        Self::Bins(advice)
    }
}

/// Signature of a registered statistic: `(sample, params) -> value`
pub type StatisticFn = fn(&[f64], &[f64]) -> Result<Value>;

/// Name → statistic table
#[derive(Clone, Default)]
pub struct Registry {
    entries: HashMap<String, StatisticFn>,
}

impl Registry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in statistic under its conventional name
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for &(name, f) in BUILTINS {
            registry.entries.insert(name.to_string(), f);
        }
        registry
    }

    /// Add `f` under `name`, replacing any existing entry
    pub fn with(mut self, name: impl Into<String>, f: StatisticFn) -> Self {
        self.register(name, f);
        self
    }

    /// In-place form of [`Registry::with`]; returns the replaced entry, if any
    pub fn register(&mut self, name: impl Into<String>, f: StatisticFn) -> Option<StatisticFn> {
        let name = name.into();
        debug!(name = %name, "registering statistic");
        self.entries.insert(name, f)
    }

    /// Resolve `name` to its function
    pub fn lookup(&self, name: &str) -> Result<StatisticFn> {
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownStatistic(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.names())
            .finish()
    }
}

static INSTALLED: OnceLock<Registry> = OnceLock::new();
static BUILTIN: OnceLock<Registry> = OnceLock::new();

/// Install the process-wide registry; only the first call succeeds
pub fn install(registry: Registry) -> Result<()> {
    let count = registry.len();
    INSTALLED
        .set(registry)
        .map_err(|_| Error::RegistryInstalled)?;
    debug!(count, "installed statistic registry");
    Ok(())
}

/// The installed registry, or the built-ins when none was installed
pub fn global() -> &'static Registry {
    INSTALLED
        .get()
        .unwrap_or_else(|| BUILTIN.get_or_init(Registry::builtin))
}

/// Resolve `name` against the process-wide registry
pub fn lookup(name: &str) -> Result<StatisticFn> {
    global().lookup(name)
}

// Built-in table

macro_rules! builtin {
    ($fn_name:ident, $name:literal, $path:path) => {
        fn $fn_name(sample: &[f64], params: &[f64]) -> Result<Value> {
            no_params($name, params)?;
            $path(sample).map(Value::from)
        }
    };
}

builtin!(sigma, "sigma", atoll_core::sum);
builtin!(pi, "pi", atoll_core::product);
builtin!(min, "min", atoll_core::min);
builtin!(max, "max", atoll_core::max);
builtin!(range, "range", atoll_core::range);
builtin!(mean, "mean", atoll_central::mean);
builtin!(mean_geo, "meanGeo", atoll_central::mean_geo);
builtin!(mean_har, "meanHar", atoll_central::mean_har);
builtin!(median, "median", atoll_central::median);
builtin!(mode, "mode", atoll_central::mode);
builtin!(variance, "variance", atoll_spread::variance);
builtin!(variance_pop, "variancePop", atoll_spread::variance_pop);
builtin!(std_dev, "stdDev", atoll_spread::std_dev);
builtin!(std_dev_pop, "stdDevPop", atoll_spread::std_dev_pop);
builtin!(stable_variance, "stableVariance", atoll_spread::stable_variance);
builtin!(stable_variance_pop, "stableVariancePop", atoll_spread::stable_variance_pop);
builtin!(stable_std_dev, "stableStdDev", atoll_spread::stable_std_dev);
builtin!(stable_std_dev_pop, "stableStdDevPop", atoll_spread::stable_std_dev_pop);
builtin!(skewness, "skewness", atoll_spread::skewness);
builtin!(skewness_pop, "skewnessPop", atoll_spread::skewness_pop);
builtin!(kurtosis, "kurtosis", atoll_spread::kurtosis);
builtin!(kurtosis_pop, "kurtosisPop", atoll_spread::kurtosis_pop);
builtin!(iqr, "iqr", atoll_quantile::iqr);
builtin!(sturges, "sturges", atoll_histogram::sturges);
builtin!(scott, "scott", atoll_histogram::scott);
builtin!(square_root, "squareRoot", atoll_histogram::square_root);
builtin!(freedman_diaconis, "freedmanDiaconis", atoll_histogram::freedman_diaconis);

fn size(sample: &[f64], params: &[f64]) -> Result<Value> {
    no_params("size", params)?;
    Ok(Value::Count(sample.len()))
}

const BUILTINS: &[(&str, StatisticFn)] = &[
    ("sigma", sigma),
    ("pi", pi),
    ("min", min),
    ("max", max),
    ("range", range),
    ("size", size),
    ("mean", mean),
    ("meanGeo", mean_geo),
    ("meanHar", mean_har),
    ("median", median),
    ("mode", mode),
    ("variance", variance),
    ("variancePop", variance_pop),
    ("stdDev", std_dev),
    ("stdDevPop", std_dev_pop),
    ("stableVariance", stable_variance),
    ("stableVariancePop", stable_variance_pop),
    ("stableStdDev", stable_std_dev),
    ("stableStdDevPop", stable_std_dev_pop),
    ("centralMoment", central_moment),
    ("skewness", skewness),
    ("skewnessPop", skewness_pop),
    ("kurtosis", kurtosis),
    ("kurtosisPop", kurtosis_pop),
    ("quartiles", quartiles),
    ("iqr", iqr),
    ("sturges", sturges),
    ("scott", scott),
    ("squareRoot", square_root),
    ("freedmanDiaconis", freedman_diaconis),
];

fn no_params(name: &str, params: &[f64]) -> Result<()> {
    if !params.is_empty() {
        return Err(Error::InvalidParameter(format!(
            "{name} takes no parameters, got {}",
            params.len()
        )));
    }
    Ok(())
}

/// `centralMoment(sample, [k])` with `k` a non-negative integer
fn central_moment(sample: &[f64], params: &[f64]) -> Result<Value> {
    let k = match params {
        [k] if k.fract() == 0.0 && *k >= 0.0 && *k <= f64::from(u32::MAX) => *k as u32,
        _ => {
            return Err(Error::InvalidParameter(format!(
                "centralMoment takes one non-negative integer order, got {params:?}"
            )))
        }
    };
    atoll_spread::central_moment(sample, k).map(Value::Scalar)
}

/// `quartiles(sample)` or `quartiles(sample, [fence_multiplier])`
fn quartiles(sample: &[f64], params: &[f64]) -> Result<Value> {
    let report = match params {
        [] => atoll_quantile::quartiles(sample)?,
        [multiplier] => atoll_quantile::quartiles_with_fences(sample, *multiplier)?,
        _ => {
            return Err(Error::InvalidParameter(format!(
                "quartiles takes at most one fence multiplier, got {}",
                params.len()
            )))
        }
    };
    Ok(Value::Quartiles(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double_mean(sample: &[f64], _params: &[f64]) -> Result<Value> {
        Ok(Value::Scalar(2.0 * atoll_central::mean(sample)?))
    }

    #[test]
    fn test_builtin_names() {
        let registry = Registry::builtin();
        for name in [
            "mean",
            "meanGeo",
            "meanHar",
            "mode",
            "median",
            "variance",
            "stableVariancePop",
            "centralMoment",
            "skewnessPop",
            "kurtosis",
            "quartiles",
            "sturges",
            "scott",
            "squareRoot",
            "freedmanDiaconis",
        ] {
            assert!(registry.contains(name), "missing {name}");
        }
        assert_eq!(registry.len(), BUILTINS.len());
    }

    #[test]
    fn test_lookup_and_call() {
        let registry = Registry::builtin();
        let variance = registry.lookup("variance").unwrap();
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(variance(&data, &[]).unwrap(), Value::Scalar(3.5));

        let size = registry.lookup("size").unwrap();
        assert_eq!(size(&data, &[]).unwrap(), Value::Count(6));
    }

    #[test]
    fn test_unknown_statistic() {
        let result = Registry::builtin().lookup("geometricMedian");
        assert!(
            matches!(result, Err(Error::UnknownStatistic(name)) if name == "geometricMedian")
        );
    }

    #[test]
    fn test_with_adds_and_replaces() {
        let registry = Registry::builtin()
            .with("doubleMean", double_mean)
            .with("mean", double_mean);
        let data = [1.0, 2.0, 3.0];
        assert_eq!(
            registry.lookup("doubleMean").unwrap()(&data, &[]).unwrap(),
            Value::Scalar(4.0)
        );
        assert_eq!(
            registry.lookup("mean").unwrap()(&data, &[]).unwrap(),
            Value::Scalar(4.0)
        );
        assert_eq!(registry.len(), BUILTINS.len() + 1);
    }

    #[test]
    fn test_central_moment_params() {
        let f = Registry::builtin().lookup("centralMoment").unwrap();
        let data = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(f(&data, &[0.0]).unwrap(), Value::Scalar(1.0));
        assert_eq!(f(&data, &[1.0]).unwrap(), Value::Scalar(0.0));
        assert_eq!(f(&data, &[2.0]).unwrap(), Value::Scalar(1.25));
        assert!(matches!(f(&data, &[]), Err(Error::InvalidParameter(_))));
        assert!(matches!(f(&data, &[1.5]), Err(Error::InvalidParameter(_))));
        assert!(matches!(f(&data, &[-2.0]), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_quartiles_params() {
        let f = Registry::builtin().lookup("quartiles").unwrap();
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 20.0];
        let Value::Quartiles(default) = f(&data, &[]).unwrap() else {
            panic!("expected a quartile report");
        };
        assert_eq!(default.outsiders, vec![20.0]);
        let Value::Quartiles(wide) = f(&data, &[4.0]).unwrap() else {
            panic!("expected a quartile report");
        };
        assert!(wide.outsiders.is_empty());
    }

    #[test]
    fn test_unexpected_params_rejected() {
        let f = Registry::builtin().lookup("mean").unwrap();
        assert!(matches!(f(&[1.0, 2.0], &[3.0]), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_value_serializes_untagged() {
        let json = serde_json::to_string(&Value::Scalar(2.5)).unwrap();
        assert_eq!(json, "2.5");
        let advice = Value::Bins(BinAdvice { k: 3.0, h: 0.5 });
        let json = serde_json::to_string(&advice).unwrap();
        assert_eq!(json, r#"{"k":3.0,"h":0.5}"#);
    }
}
