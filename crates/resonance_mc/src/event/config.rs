//! Configuration of an event generation run.
use crate::error::{Error, Result};
use crate::sampling::PolarAngleMode;

/// Configuration for [`crate::event::generator::EventGenerator`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// Number of events produced by a full run.
    pub events: usize,
    /// Primary particles sampled per event, before decays.
    pub particles_per_event: usize,
    /// Base seed; each event derives its own seed from it.
    pub seed: u64,
    /// Mean of the exponential momentum spectrum in GeV/c.
    pub mean_momentum: f64,
    /// Polar angle distribution of primaries.
    pub polar_mode: PolarAngleMode,
    /// Polar angle distribution of decay products in the parent rest frame.
    pub decay_polar_mode: PolarAngleMode,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            events: 100_000,
            particles_per_event: 100,
            seed: 12345,
            mean_momentum: 1.0,
            polar_mode: PolarAngleMode::UniformAngle,
            decay_polar_mode: PolarAngleMode::UniformAngle,
        }
    }
}

impl GeneratorConfig {
    /// Creates a new [`GeneratorConfig`] for `events` events.
    pub fn new(events: usize) -> Self {
        Self {
            events,
            ..Default::default()
        }
    }

    /// Sets the number of primaries per event.
    pub fn with_particles_per_event(mut self, particles_per_event: usize) -> Self {
        self.particles_per_event = particles_per_event;
        self
    }

    /// Sets the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the mean momentum.
    pub fn with_mean_momentum(mut self, mean_momentum: f64) -> Self {
        self.mean_momentum = mean_momentum;
        self
    }

    /// Sets the polar angle distribution of primaries.
    pub fn with_polar_mode(mut self, mode: PolarAngleMode) -> Self {
        self.polar_mode = mode;
        self
    }

    /// Sets the rest-frame polar angle distribution of decay products.
    pub fn with_decay_polar_mode(mut self, mode: PolarAngleMode) -> Self {
        self.decay_polar_mode = mode;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.particles_per_event == 0 {
            return Err(Error::InvalidConfig(
                "particles_per_event must be > 0".into(),
            ));
        }
        if !self.mean_momentum.is_finite() || self.mean_momentum <= 0.0 {
            return Err(Error::InvalidConfig(
                "mean_momentum must be finite and > 0".into(),
            ));
        }

        Ok(())
    }
}
