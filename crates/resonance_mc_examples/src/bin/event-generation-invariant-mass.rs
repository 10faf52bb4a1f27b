use std::f64::consts::{PI, TAU};

use anyhow::Context;
use resonance_mc::prelude::*;
use resonance_mc_examples::{init_tracing, render_histograms_to_png, Histogram1D, RenderConfig};
use tracing::info;

const MASS_BINS: usize = 300;
const MASS_RANGE: (f64, f64) = (0.0, 3.0);

fn mass_histogram(name: &str) -> Histogram1D {
    Histogram1D::new(name, MASS_BINS, MASS_RANGE.0, MASS_RANGE.1)
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Usage: event-generation-invariant-mass [events] [seed]
    let mut args = std::env::args().skip(1);
    let events: usize = match args.next() {
        Some(v) => v.parse().with_context(|| format!("invalid event count '{v}'"))?,
        None => 10_000,
    };
    let seed: u64 = match args.next() {
        Some(v) => v.parse().with_context(|| format!("invalid seed '{v}'"))?,
        None => GeneratorConfig::default().seed,
    };

    let catalog = ParticleCatalog::standard();
    let config = GeneratorConfig::new(events).with_seed(seed);
    let generator = EventGenerator::standard(config, &catalog)?;

    let pions = [catalog.resolve("Pion+")?, catalog.resolve("Pion-")?];
    let kaons = [catalog.resolve("Kaon+")?, catalog.resolve("Kaon-")?];
    let is_pion_kaon = |species: (Option<SpeciesId>, Option<SpeciesId>)| match species {
        (Some(a), Some(b)) => {
            (pions.contains(&a) && kaons.contains(&b)) || (kaons.contains(&a) && pions.contains(&b))
        }
        _ => false,
    };

    let n = catalog.len();
    let mut species = Histogram1D::new("species", n, -0.5, n as f64 - 0.5);
    let mut polar = Histogram1D::new("polar angle", 100, 0.0, PI);
    let mut azimuth = Histogram1D::new("azimuthal angle", 100, 0.0, TAU);
    let mut momentum = Histogram1D::new("momentum", 100, 0.0, 5.0);
    let mut transverse = Histogram1D::new("transverse momentum", 100, 0.0, 5.0);
    let mut energy = Histogram1D::new("energy", 100, 0.0, 5.0);

    let mut all = mass_histogram("all pairs");
    let mut opposite = mass_histogram("opposite charge");
    let mut same = mass_histogram("same charge");
    let mut pk_opposite = mass_histogram("pion-kaon opposite charge");
    let mut pk_same = mass_histogram("pion-kaon same charge");
    let mut decay_products = mass_histogram("decay products");

    let summary = generator.for_each_event(&mut (), |event| {
        for obs in event.particle_observables() {
            if let Some(id) = obs.species {
                species.fill(id.index() as f64);
            }
            polar.fill(obs.polar_angle);
            azimuth.fill(obs.azimuthal_angle);
            momentum.fill(obs.momentum_magnitude);
            transverse.fill(obs.transverse_momentum);
            energy.fill(obs.energy);
        }

        for pair in event.pairs() {
            let m = pair.invariant_mass;
            all.fill(m);
            match pair.charge {
                ChargeRelation::Opposite => {
                    opposite.fill(m);
                    if is_pion_kaon(pair.species) {
                        pk_opposite.fill(m);
                    }
                }
                ChargeRelation::Same => {
                    same.fill(m);
                    if is_pion_kaon(pair.species) {
                        pk_same.fill(m);
                    }
                }
                _ => {}
            }
            if pair.same_decay {
                decay_products.fill(m);
            }
        }
    });

    info!(
        "{} events, {} final-state particles, {} K* decays ({} failed).",
        summary.events, summary.particles, summary.decays, summary.failed_decays
    );
    for (id, s) in catalog.iter() {
        let count = summary.count(id);
        let share = count as f64 / summary.particles.max(1) as f64;
        info!("{:<8} {:>10} ({:.2}%)", s.name(), count, 100.0 * share);
    }

    let subtracted_all = opposite.subtract(&same, "opposite - same")?;
    let subtracted_pk = pk_opposite.subtract(&pk_same, "pion-kaon opposite - same")?;

    let rc = RenderConfig::new((400, 220), 3);
    render_histograms_to_png(
        &[&species, &polar, &azimuth, &momentum, &transverse, &energy],
        &rc,
        "event-generation-distributions.png",
    )?;
    render_histograms_to_png(
        &[
            &all,
            &opposite,
            &same,
            &pk_opposite,
            &pk_same,
            &decay_products,
            &subtracted_all,
            &subtracted_pk,
        ],
        &rc,
        "event-generation-invariant-mass.png",
    )?;

    Ok(())
}
