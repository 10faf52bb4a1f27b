use glam::DVec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use resonance_mc::prelude::*;
use resonance_mc_examples::{init_tracing, render_histograms_to_png, Histogram1D, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let catalog = ParticleCatalog::standard();
    let kstar = Particle::named(&catalog, "K*", DVec3::ZERO);
    let mut pion = Particle::named(&catalog, "Pion+", DVec3::ZERO);
    let mut kaon = Particle::named(&catalog, "Kaon-", DVec3::ZERO);

    // UniformAngle piles up at the poles in cos(theta); UniformCosine is flat.
    let mut panels = Vec::new();
    for (label, mode) in [
        ("uniform-angle", PolarAngleMode::UniformAngle),
        ("uniform-cosine", PolarAngleMode::UniformCosine),
    ] {
        let engine = DecayEngine::new().with_polar_mode(mode);
        let mut rng = StdRng::seed_from_u64(7);
        let mut cos_theta = Histogram1D::new(format!("{label}: cos(theta)"), 100, -1.0, 1.0);
        let mut phi = Histogram1D::new(format!("{label}: phi"), 100, 0.0, std::f64::consts::TAU);

        for _ in 0..200_000 {
            engine.decay(&kstar, &mut pion, &mut kaon, &mut rng)?;
            let p = pion.momentum();
            cos_theta.fill(p.z / p.length());
            phi.fill(pion.azimuthal_angle());
        }
        info!(
            "{}: mean cos(theta) {:.4}, fullest bin at {:.3}",
            label,
            cos_theta.mean(),
            cos_theta.bin_center(cos_theta.max_bin())
        );
        panels.push(cos_theta);
        panels.push(phi);
    }

    let refs: Vec<&Histogram1D> = panels.iter().collect();
    let rc = RenderConfig::new((500, 250), 2);
    render_histograms_to_png(&refs, &rc, "decay-angular-modes.png")?;

    Ok(())
}
