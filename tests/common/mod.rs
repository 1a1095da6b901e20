//! Common test utilities for atoll integration tests

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `[1, 2, ..., n]` as `f64`
pub fn one_to(n: usize) -> Vec<f64> {
    (1..=n).map(|i| i as f64).collect()
}

/// Seeded uniform sample in `[offset, offset + spread)`
pub fn uniform_sample(seed: u64, n: usize, offset: f64, spread: f64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| offset + spread * rng.gen::<f64>()).collect()
}

/// Relative difference, falling back to absolute near zero
pub fn rel_diff(a: f64, b: f64) -> f64 {
    let scale = a.abs().max(b.abs());
    if scale < 1e-12 {
        (a - b).abs()
    } else {
        (a - b).abs() / scale
    }
}

/// Multiset equality for `f64` slices, NaN-aware
pub fn same_multiset(a: &[f64], b: &[f64]) -> bool {
    let key = |v: &[f64]| {
        let mut bits: Vec<u64> = v.iter().map(|x| x.to_bits()).collect();
        bits.sort_unstable();
        bits
    };
    key(a) == key(b)
}
