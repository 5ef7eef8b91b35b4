use std::ops::RangeInclusive;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Bounded range the default harness draws from.
pub const DEFAULT_RANGE: RangeInclusive<i32> = -10_000..=10_000;

/// Unordered input of length `len` drawn uniformly from [`DEFAULT_RANGE`].
pub fn random_vec(len: usize, seed: u64) -> Vec<i32> {
    random_vec_in(len, DEFAULT_RANGE, seed)
}

pub fn random_vec_in(len: usize, range: RangeInclusive<i32>, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(len);
    for _ in 0..len {
        data.push(rng.random_range(range.clone()));
    }
    data
}
