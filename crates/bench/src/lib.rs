use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const RNG_SEED: u64 = 0x5EED_2026;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RuntimeProfile {
    /// Largest input size this profile applies to.
    pub max_size: usize,
    pub sample_size: usize,
    pub warm_up_ms: u64,
    pub measure_ms: u64,
}

/// Ordered by `max_size`; the last entry covers every larger input.
pub const RUNTIME_PROFILES: [RuntimeProfile; 3] = [
    RuntimeProfile {
        max_size: 16384,
        sample_size: 15,
        warm_up_ms: 100,
        measure_ms: 200,
    },
    RuntimeProfile {
        max_size: 65536,
        sample_size: 15,
        warm_up_ms: 300,
        measure_ms: 600,
    },
    RuntimeProfile {
        max_size: usize::MAX,
        sample_size: 10,
        warm_up_ms: 500,
        measure_ms: 1000,
    },
];

pub fn profile_for_size(size: usize) -> RuntimeProfile {
    RUNTIME_PROFILES
        .into_iter()
        .find(|p| size <= p.max_size)
        .unwrap_or(RUNTIME_PROFILES[RUNTIME_PROFILES.len() - 1])
}

pub fn apply_runtime_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    let profile = profile_for_size(size);
    group.sample_size(profile.sample_size);
    group.warm_up_time(Duration::from_millis(profile.warm_up_ms));
    group.measurement_time(Duration::from_millis(profile.measure_ms));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn random_u64_vec<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<u64> {
    (0..len).map(|_| rng.random::<u64>()).collect()
}

/// `0..len` with `len / 100` (at least one) random transpositions.
pub fn nearly_sorted_u64_vec<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<u64> {
    let mut data: Vec<u64> = (0..len as u64).collect();
    if len == 0 {
        return data;
    }
    let swaps = (len / 100).max(1);
    for _ in 0..swaps {
        let a = rng.random_range(0..len);
        let b = rng.random_range(0..len);
        data.swap(a, b);
    }
    data
}
