use glam::DVec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use resonance_mc::prelude::*;

fn kstar_catalog() -> ParticleCatalog {
    let mut catalog = ParticleCatalog::new();
    catalog.register("Pion+", 0.13957, 1).unwrap();
    catalog.register("Kaon-", 0.49367, -1).unwrap();
    catalog.register_with_width("K*", 0.89166, 0, 0.050).unwrap();
    catalog
}

#[test]
fn kstar_at_rest_gives_back_to_back_daughters() {
    let catalog = kstar_catalog();
    let engine = DecayEngine::new();
    let mut rng = StdRng::seed_from_u64(1);

    let kstar = Particle::named(&catalog, "K*", DVec3::ZERO);
    let mut pion = Particle::named(&catalog, "Pion+", DVec3::ZERO);
    let mut kaon = Particle::named(&catalog, "Kaon-", DVec3::ZERO);

    let n = 5_000;
    let mut mass_sum = 0.0;
    for _ in 0..n {
        let kin = engine
            .decay(&kstar, &mut pion, &mut kaon, &mut rng)
            .expect("K* is far above threshold");
        assert!((pion.momentum_magnitude() - kaon.momentum_magnitude()).abs() < 1e-12);
        assert!((pion.momentum() + kaon.momentum()).length() < 1e-12);
        assert!((pion.invariant_mass(&kaon) - kin.parent_mass).abs() < 1e-9);
        mass_sum += pion.invariant_mass(&kaon);
    }

    let mean = mass_sum / n as f64;
    assert!((mean - 0.89166).abs() < 0.005, "mean = {mean}");
}

#[test]
fn moving_kstar_conserves_four_momentum() {
    let catalog = kstar_catalog();
    let engine = DecayEngine::new().with_polar_mode(PolarAngleMode::UniformCosine);
    let mut rng = StdRng::seed_from_u64(2);

    let p = DVec3::new(1.0, -0.5, 2.0);
    let kstar = Particle::named(&catalog, "K*", p);
    let mut pion = Particle::named(&catalog, "Pion+", DVec3::ZERO);
    let mut kaon = Particle::named(&catalog, "Kaon-", DVec3::ZERO);

    for _ in 0..100 {
        let kin = engine
            .decay(&kstar, &mut pion, &mut kaon, &mut rng)
            .unwrap();
        let total = pion.momentum() + kaon.momentum();
        assert!((total - p).length() < 1e-9);
        let parent_energy = (p.length_squared() + kin.parent_mass * kin.parent_mass).sqrt();
        assert!((pion.energy() + kaon.energy() - parent_energy).abs() < 1e-9);
    }
}

#[test]
fn forbidden_decays_report_status_codes() {
    let mut catalog = kstar_catalog();
    catalog.register("Massless", 0.0, 0).unwrap();
    catalog.register("Light", 0.3, 0).unwrap();
    let engine = DecayEngine::new();
    let mut rng = StdRng::seed_from_u64(3);

    let mut pion = Particle::named(&catalog, "Pion+", [0.1, 0.2, 0.3]);
    let mut kaon = Particle::named(&catalog, "Kaon-", [0.4, 0.5, 0.6]);

    let massless = Particle::named(&catalog, "Massless", DVec3::ZERO);
    let result = engine.decay(&massless, &mut pion, &mut kaon, &mut rng);
    assert_eq!(DecayStatus::of(&result).map(DecayStatus::code), Some(1));

    let light = Particle::named(&catalog, "Light", DVec3::ZERO);
    let result = engine.decay(&light, &mut pion, &mut kaon, &mut rng);
    assert_eq!(DecayStatus::of(&result).map(DecayStatus::code), Some(2));

    assert_eq!(pion.momentum(), DVec3::new(0.1, 0.2, 0.3));
    assert_eq!(kaon.momentum(), DVec3::new(0.4, 0.5, 0.6));
}

#[test]
fn catalog_rejects_duplicates_and_overflow() {
    let mut catalog = ParticleCatalog::with_capacity(3);
    catalog.register("a", 1.0, 0).unwrap();
    assert!(matches!(
        catalog.register("a", 2.0, 1),
        Err(Error::DuplicateSpecies { .. })
    ));
    catalog.register("b", 1.0, 0).unwrap();
    catalog.register("c", 1.0, 0).unwrap();
    assert!(matches!(
        catalog.register("d", 1.0, 0),
        Err(Error::CatalogFull { capacity: 3 })
    ));
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.get(catalog.find_by_name("a").unwrap()).unwrap().mass(), 1.0);
}

#[test]
fn invariant_mass_is_frame_independent() {
    let catalog = ParticleCatalog::standard();
    let mut a = Particle::named(&catalog, "Proton+", [0.3, 0.1, 1.5]);
    let mut b = Particle::named(&catalog, "Pion-", [-0.7, 0.4, 0.2]);
    let before = a.invariant_mass(&b);

    let beta = DVec3::new(0.2, -0.4, 0.6);
    a.try_boost(beta).unwrap();
    b.try_boost(beta).unwrap();
    assert!((a.invariant_mass(&b) - before).abs() < 1e-9);

    assert!(matches!(
        a.try_boost(DVec3::new(1.0, 0.0, 0.0)),
        Err(Error::Superluminal { .. })
    ));
}

#[test]
fn generated_decay_pairs_peak_at_kstar_mass() {
    let catalog = ParticleCatalog::standard();
    let config = GeneratorConfig::new(1_000).with_seed(2024);
    let generator = EventGenerator::standard(config, &catalog).unwrap();

    let mut masses = Vec::new();
    let mut opposite = 0usize;
    let mut same = 0usize;
    let summary = generator.for_each_event(&mut (), |event| {
        for pair in event.pairs() {
            match pair.charge {
                ChargeRelation::Opposite => opposite += 1,
                ChargeRelation::Same => same += 1,
                _ => {}
            }
            if pair.same_decay {
                masses.push(pair.invariant_mass);
            }
        }
    });

    assert_eq!(summary.events, 1_000);
    assert_eq!(masses.len(), summary.decays);
    assert!(opposite > 0 && same > 0);

    let mean = masses.iter().sum::<f64>() / masses.len() as f64;
    let var = masses.iter().map(|m| (m - mean).powi(2)).sum::<f64>() / masses.len() as f64;
    assert!((mean - 0.89166).abs() < 0.005, "mean = {mean}");
    assert!((var.sqrt() - 0.05).abs() < 0.005, "sigma = {}", var.sqrt());
}

#[test]
fn ultra_relativistic_kstar_decays_along_its_momentum() {
    let catalog = kstar_catalog();
    let engine = DecayEngine::new();
    let mut rng = StdRng::seed_from_u64(6);

    let pz = 1e8;
    let kstar = Particle::named(&catalog, "K*", DVec3::new(0.0, 0.0, pz));
    let mut pion = Particle::named(&catalog, "Pion+", DVec3::ZERO);
    let mut kaon = Particle::named(&catalog, "Kaon-", DVec3::ZERO);

    for _ in 0..100 {
        let result = engine.decay(&kstar, &mut pion, &mut kaon, &mut rng);
        assert_eq!(DecayStatus::of(&result).map(DecayStatus::code), Some(0));
        let kin = result.unwrap();

        let total = pion.momentum() + kaon.momentum();
        assert!(total.x.abs() < 1e-12 && total.y.abs() < 1e-12);
        assert!((total.z - pz).abs() / pz < 1e-12);

        // Daughter transverse momenta are the rest-frame ones.
        let rest = kin.direction * kin.rest_frame_momentum;
        assert!((pion.transverse_momentum() - rest.truncate().length()).abs() < 1e-12);
        assert!((kin.gamma_beta - DVec3::new(0.0, 0.0, pz / kin.parent_mass)).length() < 1e-3);
    }
}
