//! Histogram built from a bin recommendation

use crate::advisors::{advise, BinAdvice};
use atoll_core::{ensure_non_empty, BinRule, Error, Numeric, Result};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Most bins [`Histogram::from_advice`] will lay out
///
/// Width-first rules on a sample with a tiny IQR or deviation next to a wide
/// range can recommend billions of bins; such advice is rejected.
pub const MAX_BINS: usize = 100_000;

/// A single bin of a [`Histogram`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Left edge (inclusive)
    pub left: f64,
    /// Right edge (exclusive, except for the last bin)
    pub right: f64,
    pub count: usize,
    /// `count / (total_count * width)`
    pub density: f64,
}

impl HistogramBin {
    fn empty(left: f64, right: f64) -> Self {
        Self {
            left,
            right,
            count: 0,
            density: 0.0,
        }
    }

    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Relative frequency `count / total_count`
    pub fn frequency(&self, total_count: usize) -> f64 {
        if total_count > 0 {
            self.count as f64 / total_count as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): count={}, density={:.3}",
            self.left, self.right, self.count, self.density
        )
    }
}

/// Equal-width histogram laid out from a [`BinAdvice`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    total_count: usize,
    min: f64,
    max: f64,
}

impl Histogram {
    /// Lay out `advice.bin_count()` bins of width `advice.h` starting at the
    /// sample minimum and count every finite value into them
    ///
    /// The last bin is closed on the right so the maximum is always counted.
    /// A sample without spread (or advice with a non-positive width) yields a
    /// single bin holding every value. Non-finite values are skipped.
    /// Advice for more than [`MAX_BINS`] bins is an [`Error::Domain`].
    pub fn from_advice<T: Numeric>(sample: &[T], advice: &BinAdvice) -> Result<Self> {
        ensure_non_empty(sample, "histogram")?;

        let values: Vec<f64> = sample
            .iter()
            .filter(|&&x| x.is_finite_value())
            .map(|&x| x.as_f64())
            .collect();
        let skipped = sample.len() - values.len();
        if skipped > 0 {
            debug!(skipped, "non-finite values left out of histogram");
        }
        let total = values.len();
        if total == 0 {
            return Ok(Self {
                bins: vec![],
                total_count: 0,
                min: f64::NAN,
                max: f64::NAN,
            });
        }

        let min = atoll_core::min(&values)?;
        let max = atoll_core::max(&values)?;
        let width = advice.h;

        let mut bins = if max > min && width > 0.0 && width.is_finite() {
            let count = advice.bin_count();
            if count > MAX_BINS {
                return Err(Error::domain(
                    "histogram",
                    format!("advice asks for {} bins, more than {MAX_BINS}", advice.k),
                ));
            }
            (0..count)
                .map(|i| {
                    let left = min + i as f64 * width;
                    let right = if i == count - 1 {
                        (min + (i + 1) as f64 * width).max(max)
                    } else {
                        min + (i + 1) as f64 * width
                    };
                    HistogramBin::empty(left, right)
                })
                .collect::<Vec<_>>()
        } else {
            vec![HistogramBin::empty(min, max)]
        };

        let last = bins.len() - 1;
        for &value in &values {
            let index = if width > 0.0 {
                (((value - min) / width).floor() as usize).min(last)
            } else {
                0
            };
            bins[index].count += 1;
        }

        for bin in &mut bins {
            let w = bin.width();
            bin.density = if w > 0.0 {
                bin.count as f64 / (total as f64 * w)
            } else {
                0.0
            };
        }

        debug!(bins = bins.len(), total, "built histogram");
        Ok(Self {
            bins,
            total_count: total,
            min,
            max,
        })
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Number of values counted into the bins
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|b| b.count).collect()
    }

    pub fn densities(&self) -> Vec<f64> {
        self.bins.iter().map(|b| b.density).collect()
    }

    pub fn centers(&self) -> Vec<f64> {
        self.bins.iter().map(HistogramBin::center).collect()
    }

    /// Index of the bin a value would be counted into
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        let last = self.bins.len().checked_sub(1)?;
        self.bins.iter().position(|b| value >= b.left && value < b.right).or_else(|| {
            let tail = &self.bins[last];
            (value >= tail.left && value <= tail.right).then_some(last)
        })
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Histogram with {} bins, {} values", self.len(), self.total_count)?;
        for bin in &self.bins {
            writeln!(f, "  {bin}")?;
        }
        Ok(())
    }
}

/// Histogram of the sample laid out by the given rule
pub fn histogram<T: Numeric>(sample: &[T], rule: BinRule) -> Result<Histogram> {
    let advice = advise(sample, rule)?;
    Histogram::from_advice(sample, &advice)
}
