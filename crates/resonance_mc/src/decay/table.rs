//! Decay channels per parent species, picked by branching weight.
use std::collections::HashMap;

use rand::RngCore;

use crate::catalog::{ParticleCatalog, SpeciesId};
use crate::error::{Error, Result};
use crate::sampling::rand01;

/// One two-body channel of a parent species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayChannel {
    pub daughters: (SpeciesId, SpeciesId),
    /// Relative weight; channels of one parent need not sum to 1.
    pub branching: f64,
}

/// Two-body channels keyed by parent species.
#[derive(Debug, Clone, Default)]
pub struct DecayTable {
    channels: HashMap<SpeciesId, Vec<DecayChannel>>,
}

impl DecayTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// `K* -> Pion+ Kaon-` and `K* -> Pion- Kaon+`, equally weighted.
    ///
    /// Fails if `catalog` lacks any of the species involved.
    pub fn standard(catalog: &ParticleCatalog) -> Result<Self> {
        let kstar = catalog.resolve("K*")?;
        let mut table = Self::new();
        table.add_channel(
            catalog,
            kstar,
            catalog.resolve("Pion+")?,
            catalog.resolve("Kaon-")?,
            0.5,
        )?;
        table.add_channel(
            catalog,
            kstar,
            catalog.resolve("Pion-")?,
            catalog.resolve("Kaon+")?,
            0.5,
        )?;
        Ok(table)
    }

    /// Adds `parent -> d1 + d2` with weight `branching`.
    pub fn add_channel(
        &mut self,
        catalog: &ParticleCatalog,
        parent: SpeciesId,
        d1: SpeciesId,
        d2: SpeciesId,
        branching: f64,
    ) -> Result<()> {
        for id in [parent, d1, d2] {
            catalog.id(id.index())?;
        }
        if !branching.is_finite() || branching <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "branching weight must be finite and > 0, got {branching}"
            )));
        }

        self.channels.entry(parent).or_default().push(DecayChannel {
            daughters: (d1, d2),
            branching,
        });
        Ok(())
    }

    pub fn channels(&self, parent: SpeciesId) -> &[DecayChannel] {
        self.channels.get(&parent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `parent` has at least one channel.
    pub fn decays(&self, parent: SpeciesId) -> bool {
        !self.channels(parent).is_empty()
    }

    /// Checks every parent and daughter against `catalog`.
    pub fn validate(&self, catalog: &ParticleCatalog) -> Result<()> {
        for (parent, channels) in &self.channels {
            catalog.id(parent.index())?;
            for c in channels {
                catalog.id(c.daughters.0.index())?;
                catalog.id(c.daughters.1.index())?;
            }
        }
        Ok(())
    }

    /// Draws a channel of `parent` proportionally to its branching weight.
    pub fn pick<R: RngCore>(&self, parent: SpeciesId, rng: &mut R) -> Option<&DecayChannel> {
        let channels = self.channels(parent);
        let total: f64 = channels.iter().map(|c| c.branching).sum();
        if channels.is_empty() || total <= 0.0 {
            return None;
        }

        let mut roll = rand01(rng) * total;
        for c in channels {
            roll -= c.branching;
            if roll < 0.0 {
                return Some(c);
            }
        }

        channels.last()
    }
}
