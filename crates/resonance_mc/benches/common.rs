use std::time::Duration;

use criterion::{Criterion, Throughput};
use resonance_mc::catalog::ParticleCatalog;

pub const SAMPLE_SIZE: usize = 30;
pub const WARM_UP: Duration = Duration::from_millis(500);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(3);
pub const SEED: u64 = 0x5EED_CA7A;

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn particles_throughput(particles: usize) -> Throughput {
    Throughput::Elements(particles.max(1) as u64)
}

/// The standard seven-species catalog.
#[allow(dead_code)]
pub fn catalog() -> ParticleCatalog {
    ParticleCatalog::standard()
}
