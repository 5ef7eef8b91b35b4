use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::SeedableRng;
use rand::rngs::StdRng;

const SORT_RUNTIME_SAMPLE_SIZE: usize = 10;
const SORT_RUNTIME_WARM_UP_MS: u64 = 200;
const SORT_RUNTIME_MEASURE_MS: u64 = 800;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_sort_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SORT_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SORT_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SORT_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Budgets the harness sweeps: 1 up to the available hardware threads.
pub fn budget_sweep() -> Vec<usize> {
    (1..=num_cpus::get().max(1)).collect()
}

pub fn seed_for(size: usize) -> u64 {
    mix_seed(RNG_SEED ^ size as u64)
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
