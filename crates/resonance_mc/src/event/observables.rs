//! Read-only observables extracted from particles and particle pairs.
use glam::DVec3;

use crate::catalog::SpeciesId;
use crate::kinematics::Particle;

/// Kinematic snapshot of one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleObservables {
    pub species: Option<SpeciesId>,
    pub momentum: DVec3,
    pub momentum_magnitude: f64,
    pub transverse_momentum: f64,
    pub energy: f64,
    pub polar_angle: f64,
    pub azimuthal_angle: f64,
}

impl From<&Particle<'_>> for ParticleObservables {
    fn from(p: &Particle<'_>) -> Self {
        Self {
            species: p.species_id(),
            momentum: p.momentum(),
            momentum_magnitude: p.momentum_magnitude(),
            transverse_momentum: p.transverse_momentum(),
            energy: p.energy(),
            polar_angle: p.polar_angle(),
            azimuthal_angle: p.azimuthal_angle(),
        }
    }
}

/// Sign relation of two charges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChargeRelation {
    Opposite,
    Same,
    /// At least one particle is neutral.
    Neutral,
    /// At least one particle is unbound.
    Unknown,
}

impl ChargeRelation {
    pub fn of(a: &Particle<'_>, b: &Particle<'_>) -> Self {
        match (a.charge(), b.charge()) {
            (Some(qa), Some(qb)) => match (qa * qb).signum() {
                -1 => Self::Opposite,
                1 => Self::Same,
                _ => Self::Neutral,
            },
            _ => Self::Unknown,
        }
    }
}

/// Observables of one unordered pair of final-state particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairObservation {
    /// Index of the first particle in the event (always `< second`).
    pub first: usize,
    pub second: usize,
    pub species: (Option<SpeciesId>, Option<SpeciesId>),
    pub invariant_mass: f64,
    pub charge: ChargeRelation,
    /// Both particles are the products of the same decay.
    pub same_decay: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ParticleCatalog;

    #[test]
    fn charge_relation_covers_all_cases() {
        let catalog = ParticleCatalog::standard();
        let pip = Particle::named(&catalog, "Pion+", DVec3::ZERO);
        let pim = Particle::named(&catalog, "Pion-", DVec3::ZERO);
        let kp = Particle::named(&catalog, "Kaon+", DVec3::ZERO);
        let kstar = Particle::named(&catalog, "K*", DVec3::ZERO);
        let unbound = Particle::unbound(&catalog);

        assert_eq!(ChargeRelation::of(&pip, &pim), ChargeRelation::Opposite);
        assert_eq!(ChargeRelation::of(&pip, &kp), ChargeRelation::Same);
        assert_eq!(ChargeRelation::of(&pip, &kstar), ChargeRelation::Neutral);
        assert_eq!(ChargeRelation::of(&unbound, &pip), ChargeRelation::Unknown);
    }

    #[test]
    fn observables_snapshot_particle() {
        let catalog = ParticleCatalog::standard();
        let p = Particle::named(&catalog, "Proton+", [3.0, 4.0, 0.0]);
        let obs = ParticleObservables::from(&p);
        assert_eq!(obs.species, catalog.find_by_name("Proton+"));
        assert_eq!(obs.momentum_magnitude, 5.0);
        assert_eq!(obs.transverse_momentum, 5.0);
        assert!((obs.polar_angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(obs.energy, p.energy());
    }
}
