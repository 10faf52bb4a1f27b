#![forbid(unsafe_code)]
//! resonance_mc: Monte Carlo generation of particle collision events with two-body
//! resonance decays.
//!
//! Modules:
//! - catalog: bounded registry of stable and resonant particle species
//! - kinematics: particles bound to a catalog, energies, invariant masses, Lorentz boosts
//! - decay: two-body decay engine and per-species decay tables
//! - sampling: random draws (angles, exponential spectra, Gaussian smearing)
//! - event: generator configuration, species mix, events, observables, sinks
//!
//! For runnable scenarios, see the `resonance_mc_examples` crate.
pub mod catalog;
pub mod decay;
pub mod error;
pub mod event;
pub mod kinematics;
pub mod sampling;

/// Convenient re-exports for common types. Import with `use resonance_mc::prelude::*;`.
pub mod prelude {
    pub use crate::catalog::{ParticleCatalog, ParticleSpecies, SpeciesId, DEFAULT_CAPACITY};
    pub use crate::decay::{
        breakup_momentum, DecayChannel, DecayEngine, DecayKinematics, DecayStatus, DecayTable,
    };
    pub use crate::error::{Error, Result};
    pub use crate::event::config::GeneratorConfig;
    pub use crate::event::generator::{EventGenerator, RunSummary};
    pub use crate::event::mix::SpeciesMix;
    pub use crate::event::observables::{ChargeRelation, PairObservation, ParticleObservables};
    pub use crate::event::sink::{
        EventSink, FnSink, GenerationEvent, GenerationEventKind, VecSink,
    };
    pub use crate::event::{seed_for_event, DecayRecord, Event};
    pub use crate::kinematics::{
        boost_energy, boost_from_rest, boost_momentum, check_subluminal, lorentz_factor, velocity,
        Particle,
    };
    pub use crate::sampling::{ExponentialMomentumSampling, MomentumSampling, PolarAngleMode};
}
