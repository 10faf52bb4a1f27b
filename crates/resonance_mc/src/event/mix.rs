//! Relative abundances of primary species.
use rand::RngCore;

use crate::catalog::{ParticleCatalog, SpeciesId};
use crate::error::{Error, Result};
use crate::sampling::rand01;

/// Weighted list of species drawn for each primary particle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeciesMix {
    entries: Vec<(SpeciesId, f64)>,
}

impl SpeciesMix {
    pub fn new() -> Self {
        Self::default()
    }

    /// 40% Pion+, 40% Pion-, 5% Kaon+, 5% Kaon-, 4.5% Proton+, 4.5% Proton-, 1% K*.
    pub fn standard(catalog: &ParticleCatalog) -> Result<Self> {
        let mut mix = Self::new();
        for (name, weight) in [
            ("Pion+", 0.40),
            ("Pion-", 0.40),
            ("Kaon+", 0.05),
            ("Kaon-", 0.05),
            ("Proton+", 0.045),
            ("Proton-", 0.045),
            ("K*", 0.01),
        ] {
            mix.add(catalog, catalog.resolve(name)?, weight)?;
        }
        Ok(mix)
    }

    /// Adds `species` with relative `weight`.
    pub fn add(&mut self, catalog: &ParticleCatalog, species: SpeciesId, weight: f64) -> Result<()> {
        catalog.id(species.index())?;
        if !weight.is_finite() || weight <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "abundance weight must be finite and > 0, got {weight}"
            )));
        }
        self.entries.push((species, weight));
        Ok(())
    }

    /// Builder-style [`Self::add`].
    pub fn with(mut self, catalog: &ParticleCatalog, species: SpeciesId, weight: f64) -> Result<Self> {
        self.add(catalog, species, weight)?;
        Ok(self)
    }

    pub fn entries(&self) -> &[(SpeciesId, f64)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks every entry against `catalog`.
    pub fn validate(&self, catalog: &ParticleCatalog) -> Result<()> {
        if self.entries.is_empty() {
            return Err(Error::InvalidConfig("species mix is empty".into()));
        }
        for (id, _) in &self.entries {
            catalog.id(id.index())?;
        }
        Ok(())
    }

    /// Draws a species proportionally to its weight.
    pub fn pick<R: RngCore>(&self, rng: &mut R) -> Option<SpeciesId> {
        let total: f64 = self.entries.iter().map(|(_, w)| w).sum();
        if total <= 0.0 {
            return None;
        }

        let mut roll = rand01(rng) * total;
        for (id, w) in &self.entries {
            roll -= w;
            if roll < 0.0 {
                return Some(*id);
            }
        }

        self.entries.last().map(|(id, _)| *id)
    }
}
