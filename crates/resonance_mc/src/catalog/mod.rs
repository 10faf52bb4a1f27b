//! Append-only registry of particle species.
//!
//! A [`ParticleCatalog`] is populated once at startup and then shared read-only by
//! every [`crate::kinematics::Particle`] bound to it. Registration order defines
//! each species' [`SpeciesId`]; species are never removed or modified.
use tracing::{debug, warn};

use crate::error::{Error, Result};

pub mod species;

pub use species::ParticleSpecies;

/// Maximum number of distinct species a catalog holds unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 10;

/// Stable index of a registered species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesId(pub usize);

impl SpeciesId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Registry of known species with a bounded capacity and unique names.
#[derive(Debug, Clone)]
pub struct ParticleCatalog {
    species: Vec<ParticleSpecies>,
    capacity: usize,
}

impl Default for ParticleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleCatalog {
    /// Creates an empty catalog with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty catalog holding at most `capacity` species.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            species: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Catalog seeded with pions, kaons, protons (both charges) and the K* resonance.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for (name, mass, charge, width) in STANDARD_SPECIES {
            // Fixed table: names are unique and well below capacity.
            if let Err(e) = catalog.register_with_width(name, mass, charge, width) {
                warn!("Standard species '{}' rejected: {}.", name, e);
            }
        }
        catalog
    }

    /// Registers a stable species.
    pub fn register(&mut self, name: &str, mass: f64, charge: i32) -> Result<SpeciesId> {
        self.register_with_width(name, mass, charge, 0.0)
    }

    /// Registers a species; `width > 0` makes it a resonance.
    pub fn register_with_width(
        &mut self,
        name: &str,
        mass: f64,
        charge: i32,
        width: f64,
    ) -> Result<SpeciesId> {
        let species = ParticleSpecies::new(name, mass, charge, width)?;
        self.register_species(species)
    }

    /// Appends an already constructed species.
    ///
    /// Fails without touching the catalog when it is full or the name is taken.
    pub fn register_species(&mut self, species: ParticleSpecies) -> Result<SpeciesId> {
        if self.species.len() >= self.capacity {
            warn!(
                "Cannot register '{}': catalog capacity {} reached.",
                species.name(),
                self.capacity
            );
            return Err(Error::CatalogFull {
                capacity: self.capacity,
            });
        }
        if self.find_by_name(species.name()).is_some() {
            warn!("Species '{}' already registered.", species.name());
            return Err(Error::DuplicateSpecies {
                name: species.name().to_owned(),
            });
        }

        let id = SpeciesId(self.species.len());
        debug!("Registered species {:?} as '{}'.", id, species.name());
        self.species.push(species);
        Ok(id)
    }

    /// Linear search by exact name.
    pub fn find_by_name(&self, name: &str) -> Option<SpeciesId> {
        self.species
            .iter()
            .position(|s| s.name() == name)
            .map(SpeciesId)
    }

    /// Like [`Self::find_by_name`] but reports a missing name as an error.
    pub fn resolve(&self, name: &str) -> Result<SpeciesId> {
        self.find_by_name(name).ok_or_else(|| Error::UnknownSpecies {
            name: name.to_owned(),
        })
    }

    pub fn get(&self, id: SpeciesId) -> Option<&ParticleSpecies> {
        self.species.get(id.0)
    }

    /// Bounds-checked conversion from a raw index.
    pub fn id(&self, index: usize) -> Result<SpeciesId> {
        if index < self.species.len() {
            Ok(SpeciesId(index))
        } else {
            Err(Error::InvalidIndex {
                index,
                len: self.species.len(),
            })
        }
    }

    /// Human-readable summary of a species, see [`ParticleSpecies`]'s `Display`.
    pub fn describe(&self, id: SpeciesId) -> Option<String> {
        self.get(id).map(ToString::to_string)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpeciesId, &ParticleSpecies)> {
        self.species
            .iter()
            .enumerate()
            .map(|(i, s)| (SpeciesId(i), s))
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

const STANDARD_SPECIES: [(&str, f64, i32, f64); 7] = [
    ("Pion+", 0.13957, 1, 0.0),
    ("Pion-", 0.13957, -1, 0.0),
    ("Kaon+", 0.49367, 1, 0.0),
    ("Kaon-", 0.49367, -1, 0.0),
    ("Proton+", 0.93827, 1, 0.0),
    ("Proton-", 0.93827, -1, 0.0),
    ("K*", 0.89166, 0, 0.050),
];
