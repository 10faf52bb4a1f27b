//! Event generation: sampling primaries, decaying resonances and exposing observables.
//!
//! An [`Event`] keeps its final-state particles in one list: stable primaries in
//! the order they were drawn, followed by the daughters of each successful decay in
//! pairs. Decayed resonances are kept apart in [`Event::resonances`] and never take
//! part in pair observables.
use crate::kinematics::Particle;

pub mod config;
pub mod generator;
pub mod mix;
pub mod observables;
pub mod sink;

use observables::{ChargeRelation, PairObservation, ParticleObservables};

/// Links a resonance to the daughters it produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayRecord {
    /// Index into [`Event::resonances`].
    pub resonance: usize,
    /// Indices into [`Event::particles`].
    pub daughters: (usize, usize),
    /// Parent mass after smearing.
    pub parent_mass: f64,
}

/// One generated collision event.
#[derive(Debug, Clone)]
pub struct Event<'c> {
    pub index: usize,
    /// Final-state particles.
    pub particles: Vec<Particle<'c>>,
    /// Resonances sampled as primaries, decayed or not.
    pub resonances: Vec<Particle<'c>>,
    pub decays: Vec<DecayRecord>,
    /// Resonances whose decay was rejected; their daughters are discarded.
    pub failed_decays: usize,
}

impl<'c> Event<'c> {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            particles: Vec::new(),
            resonances: Vec::new(),
            decays: Vec::new(),
            failed_decays: 0,
        }
    }

    /// Observables of every final-state particle, in storage order.
    pub fn particle_observables<'a>(
        &'a self,
    ) -> impl Iterator<Item = ParticleObservables> + use<'a, 'c> {
        self.particles.iter().map(ParticleObservables::from)
    }

    /// Whether particles `i` and `j` come from the same decay.
    pub fn same_decay(&self, i: usize, j: usize) -> bool {
        self.decays.iter().any(|d| {
            let (a, b) = d.daughters;
            (a == i && b == j) || (a == j && b == i)
        })
    }

    /// Every unordered pair `(i, j)`, `i < j`, of final-state particles.
    pub fn pairs<'a>(&'a self) -> impl Iterator<Item = PairObservation> + use<'a, 'c> {
        let n = self.particles.len();
        (0..n).flat_map(move |i| {
            ((i + 1)..n).map(move |j| {
                let a = &self.particles[i];
                let b = &self.particles[j];
                PairObservation {
                    first: i,
                    second: j,
                    species: (a.species_id(), b.species_id()),
                    invariant_mass: a.invariant_mass(b),
                    charge: ChargeRelation::of(a, b),
                    same_decay: self.same_decay(i, j),
                }
            })
        })
    }
}

/// Derives a deterministic per-event seed from a base seed.
pub fn seed_for_event(base_seed: u64, index: usize) -> u64 {
    let mixed = base_seed ^ (index as u64).wrapping_mul(0x9E3779B97F4A7C15);
    mix_u64(mixed)
}

#[inline]
fn mix_u64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;
    use crate::catalog::ParticleCatalog;

    #[test]
    fn pairs_visit_each_unordered_pair_once() {
        let catalog = ParticleCatalog::standard();
        let mut event = Event::new(0);
        for name in ["Pion+", "Pion-", "Kaon+", "Kaon-"] {
            event
                .particles
                .push(Particle::named(&catalog, name, DVec3::new(0.1, 0.2, 0.3)));
        }
        let pairs: Vec<_> = event.pairs().collect();
        assert_eq!(pairs.len(), 6);
        assert!(pairs.iter().all(|p| p.first < p.second));
        assert_eq!((pairs[0].first, pairs[0].second), (0, 1));
        assert_eq!((pairs[5].first, pairs[5].second), (2, 3));
    }

    #[test]
    fn same_decay_flags_only_recorded_siblings() {
        let catalog = ParticleCatalog::standard();
        let mut event = Event::new(0);
        for name in ["Pion+", "Pion+", "Kaon-"] {
            event
                .particles
                .push(Particle::named(&catalog, name, DVec3::ZERO));
        }
        event.decays.push(DecayRecord {
            resonance: 0,
            daughters: (1, 2),
            parent_mass: 0.9,
        });

        let flagged: Vec<_> = event
            .pairs()
            .filter(|p| p.same_decay)
            .map(|p| (p.first, p.second))
            .collect();
        assert_eq!(flagged, vec![(1, 2)]);
        assert!(event.same_decay(2, 1));
    }

    #[test]
    fn event_seeds_are_distinct_and_stable() {
        assert_eq!(seed_for_event(1, 5), seed_for_event(1, 5));
        assert_ne!(seed_for_event(1, 5), seed_for_event(1, 6));
        assert_ne!(seed_for_event(1, 5), seed_for_event(2, 5));
    }
}
