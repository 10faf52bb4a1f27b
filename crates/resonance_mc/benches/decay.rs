mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use resonance_mc::decay::DecayEngine;
use resonance_mc::kinematics::Particle;
use resonance_mc::sampling::PolarAngleMode;

const PARENT_MOMENTA: [f64; 4] = [0.0, 0.5, 2.0, 10.0];

fn decay_kstar_benches(c: &mut Criterion) {
    let catalog = common::catalog();

    for mode in [PolarAngleMode::UniformAngle, PolarAngleMode::UniformCosine] {
        let mut group = c.benchmark_group(format!("decay/kstar/{mode:?}"));
        group.throughput(common::particles_throughput(2));
        let engine = DecayEngine::new().with_polar_mode(mode);

        for &pz in &PARENT_MOMENTA {
            let parent = Particle::named(&catalog, "K*", DVec3::new(0.3, -0.2, pz));
            let mut pion = Particle::named(&catalog, "Pion+", DVec3::ZERO);
            let mut kaon = Particle::named(&catalog, "Kaon-", DVec3::ZERO);
            let mut rng = StdRng::seed_from_u64(common::SEED ^ pz.to_bits());

            group.bench_with_input(BenchmarkId::from_parameter(pz), &pz, |b, _| {
                b.iter(|| {
                    let result = engine.decay(&parent, &mut pion, &mut kaon, &mut rng);
                    black_box(result.is_ok());
                });
            });
        }

        group.finish();
    }
}

fn invariant_mass_benches(c: &mut Criterion) {
    let catalog = common::catalog();
    let a = Particle::named(&catalog, "Pion+", DVec3::new(0.4, 0.1, -1.2));
    let b = Particle::named(&catalog, "Kaon-", DVec3::new(-0.3, 0.6, 0.8));

    let mut group = c.benchmark_group("kinematics/invariant_mass");
    group.throughput(common::particles_throughput(1));
    group.bench_function("pion_kaon", |bench| {
        bench.iter(|| black_box(black_box(&a).invariant_mass(black_box(&b))));
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = decay_kstar_benches, invariant_mass_benches
}
criterion_main!(benches);
