//! Event generator: samples primaries, decays resonances and reports on the run.
use glam::DVec3;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info, warn};

use crate::catalog::{ParticleCatalog, SpeciesId};
use crate::decay::{DecayChannel, DecayEngine, DecayTable};
use crate::error::Result;
use crate::event::config::GeneratorConfig;
use crate::event::mix::SpeciesMix;
use crate::event::sink::{EventSink, GenerationEvent, GenerationEventKind};
use crate::event::{seed_for_event, DecayRecord, Event};
use crate::kinematics::Particle;
use crate::sampling::{ExponentialMomentumSampling, MomentumSampling};

/// Totals accumulated over a run.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub events: usize,
    /// Final-state particles over all events.
    pub particles: usize,
    /// Resonances sampled as primaries.
    pub resonances: usize,
    pub decays: usize,
    pub failed_decays: usize,
    /// Final-state multiplicity per species, indexed by [`SpeciesId::index`].
    pub species_counts: Vec<usize>,
}

impl RunSummary {
    fn with_species(len: usize) -> Self {
        Self {
            species_counts: vec![0; len],
            ..Default::default()
        }
    }

    fn record(&mut self, event: &Event<'_>) {
        self.events += 1;
        self.particles += event.particles.len();
        self.resonances += event.resonances.len();
        self.decays += event.decays.len();
        self.failed_decays += event.failed_decays;
        for id in event.particles.iter().filter_map(Particle::species_id) {
            if let Some(count) = self.species_counts.get_mut(id.index()) {
                *count += 1;
            }
        }
    }

    /// Final-state count of `species`.
    pub fn count(&self, species: SpeciesId) -> usize {
        self.species_counts.get(species.index()).copied().unwrap_or(0)
    }
}

/// Generates events from a species mix, a momentum spectrum and a decay table.
///
/// The generator only reads shared state, so one instance can feed several
/// threads; each event seeds its own RNG from [`GeneratorConfig::seed`].
pub struct EventGenerator<'c> {
    /// Run configuration.
    pub config: GeneratorConfig,
    /// Species referenced by every generated particle.
    pub catalog: &'c ParticleCatalog,
    pub mix: SpeciesMix,
    pub decays: DecayTable,
    pub engine: DecayEngine,
    momentum: Box<dyn MomentumSampling>,
}

impl<'c> EventGenerator<'c> {
    pub fn try_new(
        config: GeneratorConfig,
        catalog: &'c ParticleCatalog,
        mix: SpeciesMix,
        decays: DecayTable,
    ) -> Result<Self> {
        config.validate()?;
        mix.validate(catalog)?;
        decays.validate(catalog)?;

        let momentum = ExponentialMomentumSampling::new(config.mean_momentum)
            .with_polar_mode(config.polar_mode);
        let engine = DecayEngine::new().with_polar_mode(config.decay_polar_mode);
        Ok(Self {
            config,
            catalog,
            mix,
            decays,
            engine,
            momentum: Box::new(momentum),
        })
    }

    /// Generator with the standard abundances and `K*` channels.
    pub fn standard(config: GeneratorConfig, catalog: &'c ParticleCatalog) -> Result<Self> {
        let mix = SpeciesMix::standard(catalog)?;
        let decays = DecayTable::standard(catalog)?;
        Self::try_new(config, catalog, mix, decays)
    }

    /// Replaces the primary momentum spectrum.
    pub fn with_momentum_sampling<S: MomentumSampling + 'static>(mut self, sampling: S) -> Self {
        self.momentum = Box::new(sampling);
        self
    }

    /// Generates event `index` with its derived seed.
    pub fn generate_event(&self, index: usize) -> Event<'c> {
        let mut rng = StdRng::seed_from_u64(seed_for_event(self.config.seed, index));
        self.generate_event_with(index, &mut rng, &mut ())
    }

    /// Generates event `index` drawing from `rng`.
    pub fn generate_event_with<R: RngCore>(
        &self,
        index: usize,
        rng: &mut R,
        sink: &mut dyn EventSink,
    ) -> Event<'c> {
        let mut event = Event::new(index);
        let mut products: Vec<(usize, Particle<'c>, Particle<'c>, f64)> = Vec::new();

        for _ in 0..self.config.particles_per_event {
            let Some(species) = self.mix.pick(rng) else {
                break;
            };
            let momentum = DVec3::from(self.momentum.generate(rng));
            let particle = match Particle::new(self.catalog, species, momentum) {
                Ok(p) => p,
                Err(e) => {
                    warn!("Event {}: cannot create primary: {}.", index, e);
                    continue;
                }
            };

            let Some(channel) = self.decays.pick(species, rng).copied() else {
                event.particles.push(particle);
                continue;
            };

            let resonance = event.resonances.len();
            event.resonances.push(particle);
            match self.decay_resonance(&particle, &channel, rng) {
                Ok((d1, d2, parent_mass)) => products.push((resonance, d1, d2, parent_mass)),
                Err(e) => {
                    event.failed_decays += 1;
                    warn!(
                        "Event {}: decay of {} failed: {}.",
                        index,
                        particle.species().map_or("<unbound>", |s| s.name()),
                        e
                    );
                    if sink.wants(GenerationEventKind::DecayFailed) {
                        sink.send(GenerationEvent::DecayFailed {
                            event: index,
                            parent: Some(species),
                            error: e,
                        });
                    }
                }
            }
        }

        for (resonance, d1, d2, parent_mass) in products {
            let first = event.particles.len();
            event.particles.push(d1);
            event.particles.push(d2);
            event.decays.push(DecayRecord {
                resonance,
                daughters: (first, first + 1),
                parent_mass,
            });
        }

        event
    }

    fn decay_resonance<R: RngCore>(
        &self,
        parent: &Particle<'c>,
        channel: &DecayChannel,
        rng: &mut R,
    ) -> Result<(Particle<'c>, Particle<'c>, f64)> {
        let (a, b) = channel.daughters;
        let mut d1 = Particle::new(self.catalog, a, DVec3::ZERO)?;
        let mut d2 = Particle::new(self.catalog, b, DVec3::ZERO)?;
        let kinematics = self.engine.decay(parent, &mut d1, &mut d2, rng)?;
        Ok((d1, d2, kinematics.parent_mass))
    }

    /// Generates all configured events, discarding them.
    pub fn run(&self, sink: &mut dyn EventSink) -> RunSummary {
        self.for_each_event(sink, |_| {})
    }

    /// Generates all configured events in order, handing each to `f`.
    pub fn for_each_event<F>(&self, sink: &mut dyn EventSink, mut f: F) -> RunSummary
    where
        F: FnMut(&Event<'c>),
    {
        let events = self.config.events;
        if events == 0 {
            warn!("Generator configured with 0 events; nothing to do.");
            if sink.wants(GenerationEventKind::Warning) {
                sink.send(GenerationEvent::Warning {
                    context: "run".into(),
                    message: "No events configured".into(),
                });
            }
        }

        info!(
            "Generating {} events with {} primaries each (seed {}).",
            events, self.config.particles_per_event, self.config.seed
        );
        if sink.wants(GenerationEventKind::RunStarted) {
            sink.send(GenerationEvent::RunStarted {
                config: self.config.clone(),
            });
        }

        let mut summary = RunSummary::with_species(self.catalog.len());
        for index in 0..events {
            let mut rng = StdRng::seed_from_u64(seed_for_event(self.config.seed, index));
            let event = self.generate_event_with(index, &mut rng, sink);
            summary.record(&event);

            if sink.wants(GenerationEventKind::EventFinished) {
                sink.send(GenerationEvent::EventFinished {
                    index,
                    particles: event.particles.len(),
                    decays: event.decays.len(),
                    failed_decays: event.failed_decays,
                });
            }
            if (index + 1) % 10_000 == 0 {
                debug!("Generated {}/{} events.", index + 1, events);
            }

            f(&event);
        }

        info!(
            "Generated {} events: {} final-state particles, {} decays, {} failed decays.",
            summary.events, summary.particles, summary.decays, summary.failed_decays
        );
        if sink.wants(GenerationEventKind::RunFinished) {
            sink.send(GenerationEvent::RunFinished {
                summary: summary.clone(),
            });
        }

        summary
    }
}
