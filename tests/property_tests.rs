//! Property-based tests for the statistical identities
//!
//! These hold for every sample, so they are checked over generated input
//! rather than fixed fixtures.

mod common;

use atoll::{
    central_moment, median, quartiles, stable_variance, stable_variance_pop, variance,
    variance_pop,
};
use common::{rel_diff, same_multiset};
use proptest::prelude::*;

fn sample(min_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e3..1.0e3f64, min_len..200)
}

proptest! {
    // Two-pass and Welford agree on well-conditioned data
    #[test]
    fn prop_variance_families_agree(data in sample(2)) {
        let two_pass = variance(&data).unwrap();
        let welford = stable_variance(&data).unwrap();
        prop_assert!(rel_diff(two_pass, welford) < 1e-9, "{two_pass} vs {welford}");

        let two_pass = variance_pop(&data).unwrap();
        let welford = stable_variance_pop(&data).unwrap();
        prop_assert!(rel_diff(two_pass, welford) < 1e-9, "{two_pass} vs {welford}");
    }

    #[test]
    fn prop_zeroth_moment_is_one(data in sample(1)) {
        prop_assert_eq!(central_moment(&data, 0).unwrap(), 1.0);
    }

    #[test]
    fn prop_first_moment_is_zero(data in sample(1)) {
        prop_assert_eq!(central_moment(&data, 1).unwrap(), 0.0);
    }

    #[test]
    fn prop_median_is_second_quartile(data in sample(2)) {
        let report = quartiles(&data).unwrap();
        prop_assert_eq!(median(&data).unwrap(), report.q2);
    }

    #[test]
    fn prop_fences_partition_sample(data in sample(2)) {
        let report = quartiles(&data).unwrap();
        prop_assert_eq!(report.insiders.len() + report.outsiders.len(), data.len());

        let mut joined = report.insiders.clone();
        joined.extend_from_slice(&report.outsiders);
        prop_assert!(same_multiset(&joined, &data));

        for &x in &report.insiders {
            prop_assert!(report.is_inside(x));
        }
        for &x in &report.outsiders {
            prop_assert!(!report.is_inside(x));
        }
    }

    #[test]
    fn prop_quartiles_ordered(data in sample(2)) {
        let report = quartiles(&data).unwrap();
        prop_assert!(report.q1 <= report.q2);
        prop_assert!(report.q2 <= report.q3);
        prop_assert!(report.iqr >= 0.0);
    }

    #[test]
    fn prop_statistics_leave_sample_untouched(data in sample(4)) {
        let before = data.clone();
        let _ = median(&data);
        let _ = quartiles(&data);
        let _ = atoll::kurtosis(&data);
        prop_assert_eq!(before, data);
    }
}
