use glam::DVec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use resonance_mc::prelude::*;
use resonance_mc_examples::{init_tracing, render_histograms_to_png, Histogram1D, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Minimal catalog: the K* and the daughters of one of its channels.
    let mut catalog = ParticleCatalog::new();
    catalog.register("Pion+", 0.13957, 1)?;
    catalog.register("Kaon-", 0.49367, -1)?;
    catalog.register_with_width("K*", 0.89166, 0, 0.050)?;
    for (id, _) in catalog.iter() {
        if let Some(text) = catalog.describe(id) {
            println!("{text}\n");
        }
    }

    let kstar = Particle::named(&catalog, "K*", DVec3::ZERO);
    let mut pion = Particle::named(&catalog, "Pion+", DVec3::ZERO);
    let mut kaon = Particle::named(&catalog, "Kaon-", DVec3::ZERO);

    let engine = DecayEngine::new();
    let mut rng = StdRng::seed_from_u64(2025);

    let kin = engine.decay(&kstar, &mut pion, &mut kaon, &mut rng)?;
    println!("{pion}\n{kaon}");
    println!(
        "|p_pion| = {:.6}, |p_kaon| = {:.6}, breakup momentum = {:.6}",
        pion.momentum_magnitude(),
        kaon.momentum_magnitude(),
        kin.rest_frame_momentum
    );

    let mut mass = Histogram1D::new("invariant mass (pion, kaon)", 200, 0.6, 1.2);
    let mut momentum = Histogram1D::new("rest-frame momentum", 200, 0.0, 0.5);
    let decays = 100_000;
    for _ in 0..decays {
        let kin = engine.decay(&kstar, &mut pion, &mut kaon, &mut rng)?;
        mass.fill(pion.invariant_mass(&kaon));
        momentum.fill(kin.rest_frame_momentum);
    }
    info!(
        "Mean invariant mass over {} decays: {:.5} (nominal 0.89166).",
        decays,
        mass.mean()
    );

    let rc = RenderConfig::new((600, 300), 2);
    render_histograms_to_png(&[&mass, &momentum], &rc, "kstar-decay-basic.png")?;

    Ok(())
}
