//! Sample element trait
//!
//! Statistics accept slices of any primitive number and compute in `f64`.
//! Operations that hand sample elements back to the caller (mode, quartile
//! partitions, min/max) return the original element type.

use num_traits::ToPrimitive;
use std::fmt::Debug;

/// A numeric sample element
///
/// Implemented for every primitive that [`ToPrimitive`] covers (`f64`, `f32`,
/// signed and unsigned integers). Values that cannot be represented as `f64`
/// convert to NaN rather than panicking.
pub trait Numeric: Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Convert to `f64` for statistical operations
    fn as_f64(self) -> f64;

    /// Check if value is finite (always true for integers)
    fn is_finite_value(self) -> bool {
        self.as_f64().is_finite()
    }
}

impl<T> Numeric for T
where
    T: ToPrimitive + Copy + PartialOrd + Debug + Send + Sync + 'static,
{
    #[inline]
    fn as_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }
}

/// Convert a whole sample to `f64`
pub fn to_f64_vec<T: Numeric>(sample: &[T]) -> Vec<f64> {
    sample.iter().map(|&x| x.as_f64()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_conversions() {
        assert_eq!(2.5f64.as_f64(), 2.5);
        assert_eq!(2.5f32.as_f64(), 2.5);
        assert_eq!((-7i32).as_f64(), -7.0);
        assert_eq!(7u64.as_f64(), 7.0);
        assert_eq!(i64::MAX.as_f64(), i64::MAX as f64);
    }

    #[test]
    fn test_is_finite_value() {
        assert!(42i32.is_finite_value());
        assert!(1.0f64.is_finite_value());
        assert!(!f64::NAN.is_finite_value());
        assert!(!f32::INFINITY.is_finite_value());
    }

    #[test]
    fn test_to_f64_vec() {
        assert_eq!(to_f64_vec(&[1u32, 2, 3]), vec![1.0, 2.0, 3.0]);
        assert!(to_f64_vec::<f64>(&[]).is_empty());
    }
}
