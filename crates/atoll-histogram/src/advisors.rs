//! Histogram bin-count and bin-width heuristics
//!
//! Each rule returns a [`BinAdvice`] with a recommended bin count `k` and bin
//! width `h`. They are read-only: nothing here mutates the sample or feeds
//! back into other statistics. See
//! <https://en.wikipedia.org/wiki/Histogram#Number_of_bins_and_width>.

use crate::traits::BinAdvisor;
use atoll_core::{ensure_non_empty, range, BinRule, Error, Numeric, Result};
use atoll_quantile::iqr;
use atoll_spread::std_dev;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Recommended bin count `k` and bin width `h`
///
/// `k` stays real-valued because the square-root choice does not round it;
/// use [`BinAdvice::bin_count`] for a usable number of bins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinAdvice {
    pub k: f64,
    pub h: f64,
}

impl BinAdvice {
    /// `ceil(k)` as a bin count, never less than one
    pub fn bin_count(&self) -> usize {
        if self.k.is_finite() && self.k > 1.0 {
            self.k.ceil() as usize
        } else {
            1
        }
    }
}

/// Sturges' formula: `k = ceil(log2(n) + 1)`, `h = (max - min) / k`
pub fn sturges<T: Numeric>(sample: &[T]) -> Result<BinAdvice> {
    ensure_non_empty(sample, "sturges")?;
    let n = sample.len() as f64;
    let k = (n.log2() + 1.0).ceil();
    let h = range(sample)? / k;
    Ok(logged("sturges", BinAdvice { k, h }))
}

/// Scott's normal reference rule: `h = 3.5 s / n^(1/3)`, `k = ceil((max - min) / h)`
///
/// `s` is the sample standard deviation, so at least two elements are
/// needed. A sample with no spread has no usable width and is rejected.
pub fn scott<T: Numeric>(sample: &[T]) -> Result<BinAdvice> {
    let sigma = std_dev(sample)?;
    let n = sample.len() as f64;
    let h = (3.5 * sigma) / n.powf(1.0 / 3.0);
    width_advice("scott", sample, h)
}

/// Square-root choice: `k = sqrt(n)`, `h = (max - min) / k`
pub fn square_root<T: Numeric>(sample: &[T]) -> Result<BinAdvice> {
    ensure_non_empty(sample, "squareRoot")?;
    let k = (sample.len() as f64).sqrt();
    let h = range(sample)? / k;
    Ok(logged("squareRoot", BinAdvice { k, h }))
}

/// Freedman–Diaconis rule: `h = 2 IQR / n^(1/3)`, `k = ceil((max - min) / h)`
///
/// Uses the TI-83 interquartile range. A zero IQR gives no usable width and
/// is rejected.
pub fn freedman_diaconis<T: Numeric>(sample: &[T]) -> Result<BinAdvice> {
    let spread = iqr(sample)?;
    let n = sample.len() as f64;
    let h = (2.0 * spread) / n.powf(1.0 / 3.0);
    width_advice("freedmanDiaconis", sample, h)
}

/// Advice from the named rule
pub fn advise<T: Numeric>(sample: &[T], rule: BinRule) -> Result<BinAdvice> {
    match rule {
        BinRule::Sturges => sturges(sample),
        BinRule::Scott => scott(sample),
        BinRule::SquareRoot => square_root(sample),
        BinRule::FreedmanDiaconis => freedman_diaconis(sample),
    }
}

fn width_advice<T: Numeric>(
    operation: &'static str,
    sample: &[T],
    h: f64,
) -> Result<BinAdvice> {
    if !h.is_finite() {
        return Err(Error::domain(operation, "sample spread gives a non-finite bin width"));
    }
    if h <= 0.0 {
        return Err(Error::domain(operation, "sample spread gives a zero bin width"));
    }
    let k = (range(sample)? / h).ceil();
    Ok(logged(operation, BinAdvice { k, h }))
}

fn logged(rule: &'static str, advice: BinAdvice) -> BinAdvice {
    debug!(rule, k = advice.k, h = advice.h, "bin advice");
    advice
}

/// Sturges' formula as a [`BinAdvisor`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SturgesFormula;

/// Scott's rule as a [`BinAdvisor`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ScottsChoice;

/// Square-root choice as a [`BinAdvisor`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SquareRootChoice;

/// Freedman–Diaconis rule as a [`BinAdvisor`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FreedmanDiaconisChoice;

impl<T: Numeric> BinAdvisor<T> for SturgesFormula {
    fn advise(&self, sample: &[T]) -> Result<BinAdvice> {
        sturges(sample)
    }

    fn name(&self) -> &'static str {
        "Sturges"
    }
}

impl<T: Numeric> BinAdvisor<T> for ScottsChoice {
    fn advise(&self, sample: &[T]) -> Result<BinAdvice> {
        scott(sample)
    }

    fn name(&self) -> &'static str {
        "Scott"
    }
}

impl<T: Numeric> BinAdvisor<T> for SquareRootChoice {
    fn advise(&self, sample: &[T]) -> Result<BinAdvice> {
        square_root(sample)
    }

    fn name(&self) -> &'static str {
        "Square root"
    }
}

impl<T: Numeric> BinAdvisor<T> for FreedmanDiaconisChoice {
    fn advise(&self, sample: &[T]) -> Result<BinAdvice> {
        freedman_diaconis(sample)
    }

    fn name(&self) -> &'static str {
        "Freedman-Diaconis"
    }
}

impl<T: Numeric> BinAdvisor<T> for BinRule {
    fn advise(&self, sample: &[T]) -> Result<BinAdvice> {
        advise(sample, *self)
    }

    fn name(&self) -> &'static str {
        match self {
            BinRule::Sturges => "Sturges",
            BinRule::Scott => "Scott",
            BinRule::SquareRoot => "Square root",
            BinRule::FreedmanDiaconis => "Freedman-Diaconis",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn one_to(n: usize) -> Vec<f64> {
        (1..=n).map(|i| i as f64).collect()
    }

    #[test]
    fn test_sturges() {
        let data = one_to(16);
        let advice = sturges(&data).unwrap();
        assert_eq!(advice.k, 5.0);
        assert_eq!(advice.h, 15.0 / 5.0);
        assert_eq!(advice.bin_count(), 5);
    }

    #[test]
    fn test_sturges_single_element() {
        let advice = sturges(&[4.0]).unwrap();
        assert_eq!(advice.k, 1.0);
        assert_eq!(advice.h, 0.0);
    }

    #[test]
    fn test_square_root_keeps_fractional_k() {
        let data = one_to(10);
        let advice = square_root(&data).unwrap();
        assert_relative_eq!(advice.k, 10f64.sqrt());
        assert_relative_eq!(advice.h, 9.0 / 10f64.sqrt());
        assert_eq!(advice.bin_count(), 4);
    }

    #[test]
    fn test_scott() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let advice = scott(&data).unwrap();
        let expected_h = 3.5 * 2.138089935299395 / 2.0;
        assert_relative_eq!(advice.h, expected_h, epsilon = 1e-12);
        assert_eq!(advice.k, (7.0 / expected_h).ceil());
    }

    #[test]
    fn test_freedman_diaconis() {
        // iqr = 25, n = 8 so n^(1/3) = 2
        let data = [7.0, 15.0, 36.0, 39.0, 40.0, 41.0, 41.5, 42.0];
        let spread = iqr(&data).unwrap();
        let advice = freedman_diaconis(&data).unwrap();
        assert_relative_eq!(advice.h, spread, epsilon = 1e-12);
        assert_eq!(advice.k, (35.0 / advice.h).ceil());
    }

    #[test]
    fn test_zero_width_rejected() {
        let flat = [3.0; 6];
        assert!(matches!(scott(&flat), Err(Error::Domain { .. })));
        assert!(matches!(freedman_diaconis(&flat), Err(Error::Domain { .. })));
        // Count-first rules still answer for a flat sample
        assert_eq!(sturges(&flat).unwrap().h, 0.0);
    }

    #[test]
    fn test_non_finite_width_rejected() {
        let err = scott(&[1.0, 2.0, f64::NAN]).unwrap_err();
        match err {
            Error::Domain { operation, reason } => {
                assert_eq!(operation, "scott");
                assert!(reason.contains("non-finite"));
            }
            other => panic!("unexpected error: {other}"),
        }
        let flat = [3.0; 6];
        let err = freedman_diaconis(&flat).unwrap_err();
        assert!(err.to_string().contains("zero bin width"));
    }

    #[test]
    fn test_size_errors() {
        let empty: [f64; 0] = [];
        assert!(matches!(sturges(&empty), Err(Error::EmptySample { .. })));
        assert!(matches!(square_root(&empty), Err(Error::EmptySample { .. })));
        assert!(scott(&[1.0]).is_err());
        assert!(freedman_diaconis(&[1.0]).is_err());
    }

    #[test]
    fn test_rule_dispatch_and_trait() {
        let data = one_to(20);
        for rule in [
            BinRule::Sturges,
            BinRule::Scott,
            BinRule::SquareRoot,
            BinRule::FreedmanDiaconis,
        ] {
            let via_fn = advise(&data, rule).unwrap();
            let via_trait = BinAdvisor::<f64>::advise(&rule, &data).unwrap();
            assert_eq!(via_fn, via_trait);
            assert!(via_fn.h > 0.0);
        }
        assert_eq!(BinAdvisor::<f64>::name(&ScottsChoice), "Scott");
        assert_eq!(
            BinAdvisor::<f64>::advise(&SturgesFormula, &data).unwrap(),
            sturges(&data).unwrap()
        );
    }

    #[test]
    fn test_advisors_leave_sample_untouched() {
        let data = vec![9.0, 1.0, 5.0, 3.0, 7.0];
        let _ = freedman_diaconis(&data).unwrap();
        let _ = scott(&data).unwrap();
        assert_eq!(data, vec![9.0, 1.0, 5.0, 3.0, 7.0]);
    }
}
