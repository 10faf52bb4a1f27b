//! Individual particles: a species binding plus a three-momentum.
use std::fmt;

use glam::DVec3;
use tracing::warn;

use crate::catalog::{ParticleCatalog, ParticleSpecies, SpeciesId};
use crate::error::Result;
use crate::kinematics::boost::{boost_from_rest, boost_momentum, check_subluminal};

/// A particle whose mass and charge come from the species it is bound to.
///
/// Particles borrow the catalog they were created from, so many of them can share
/// one catalog (also across threads). An unbound particle has mass 0.
#[derive(Debug, Clone, Copy)]
pub struct Particle<'c> {
    catalog: &'c ParticleCatalog,
    species: Option<SpeciesId>,
    momentum: DVec3,
}

impl<'c> Particle<'c> {
    /// An unbound particle at rest.
    pub fn unbound(catalog: &'c ParticleCatalog) -> Self {
        Self {
            catalog,
            species: None,
            momentum: DVec3::ZERO,
        }
    }

    /// Binds to `species`, which must exist in `catalog`.
    pub fn new(
        catalog: &'c ParticleCatalog,
        species: SpeciesId,
        momentum: impl Into<DVec3>,
    ) -> Result<Self> {
        let mut particle = Self::unbound(catalog);
        particle.set_species(species)?;
        particle.momentum = momentum.into();
        Ok(particle)
    }

    /// Binds by name, reporting an unknown name as [`crate::error::Error::UnknownSpecies`].
    pub fn try_named(
        catalog: &'c ParticleCatalog,
        name: &str,
        momentum: impl Into<DVec3>,
    ) -> Result<Self> {
        let species = catalog.resolve(name)?;
        Self::new(catalog, species, momentum)
    }

    /// Binds by name. An unknown name is logged and leaves the particle unbound;
    /// check [`Self::is_bound`] before relying on its mass, or use
    /// [`Self::try_named`] to get the error.
    pub fn named(catalog: &'c ParticleCatalog, name: &str, momentum: impl Into<DVec3>) -> Self {
        let mut particle = Self::unbound(catalog);
        particle.momentum = momentum.into();
        if let Err(e) = particle.set_species_by_name(name) {
            warn!("Particle left unbound: {}.", e);
        }
        particle
    }

    pub fn catalog(&self) -> &'c ParticleCatalog {
        self.catalog
    }

    pub fn species_id(&self) -> Option<SpeciesId> {
        self.species
    }

    pub fn species(&self) -> Option<&'c ParticleSpecies> {
        self.species.and_then(|id| self.catalog.get(id))
    }

    pub fn is_bound(&self) -> bool {
        self.species.is_some()
    }

    /// Rebinds to `species`. An id outside the catalog is rejected and the
    /// previous binding is kept.
    pub fn set_species(&mut self, species: SpeciesId) -> Result<()> {
        let id = self.catalog.id(species.index())?;
        self.species = Some(id);
        Ok(())
    }

    /// Rebinds by name. An unknown name unbinds the particle.
    pub fn set_species_by_name(&mut self, name: &str) -> Result<SpeciesId> {
        match self.catalog.resolve(name) {
            Ok(id) => {
                self.species = Some(id);
                Ok(id)
            }
            Err(e) => {
                self.species = None;
                Err(e)
            }
        }
    }

    pub fn momentum(&self) -> DVec3 {
        self.momentum
    }

    pub fn px(&self) -> f64 {
        self.momentum.x
    }

    pub fn py(&self) -> f64 {
        self.momentum.y
    }

    pub fn pz(&self) -> f64 {
        self.momentum.z
    }

    /// Overwrites the momentum without any physical validation.
    pub fn set_momentum(&mut self, momentum: impl Into<DVec3>) {
        self.momentum = momentum.into();
    }

    /// Rest mass of the bound species, 0 when unbound.
    pub fn mass(&self) -> f64 {
        self.species().map_or(0.0, ParticleSpecies::mass)
    }

    /// Charge of the bound species.
    pub fn charge(&self) -> Option<i32> {
        self.species().map(ParticleSpecies::charge)
    }

    /// `sqrt(m^2 + |p|^2)`.
    pub fn energy(&self) -> f64 {
        let m = self.mass();
        (m * m + self.momentum.length_squared()).sqrt()
    }

    pub fn momentum_magnitude(&self) -> f64 {
        self.momentum.length()
    }

    pub fn transverse_momentum(&self) -> f64 {
        self.momentum.x.hypot(self.momentum.y)
    }

    /// Angle to the z axis in [0, pi]; 0 for a particle at rest.
    pub fn polar_angle(&self) -> f64 {
        self.transverse_momentum().atan2(self.momentum.z)
    }

    /// Angle in the xy plane, mapped to [0, 2pi).
    pub fn azimuthal_angle(&self) -> f64 {
        let phi = self.momentum.y.atan2(self.momentum.x);
        if phi < 0.0 {
            phi + std::f64::consts::TAU
        } else {
            phi
        }
    }

    /// `(E1 + E2)^2 - |p1 + p2|^2`, which may come out slightly negative through
    /// cancellation for nearly collinear light particles.
    pub fn invariant_mass_squared(&self, other: &Particle<'_>) -> f64 {
        let e = self.energy() + other.energy();
        let p = self.momentum + other.momentum;
        e * e - p.length_squared()
    }

    /// Invariant mass of the pair. A negative radicand is clamped to 0.
    pub fn invariant_mass(&self, other: &Particle<'_>) -> f64 {
        self.invariant_mass_squared(other).max(0.0).sqrt()
    }

    /// Applies a Lorentz boost with velocity `beta`, using the energy before the boost.
    ///
    /// `beta` must be subluminal; otherwise the momentum becomes non-finite.
    /// Use [`Self::try_boost`] for a checked variant.
    pub fn boost(&mut self, beta: DVec3) {
        let energy = self.energy();
        self.momentum = boost_momentum(self.momentum, energy, beta);
    }

    /// Moves the particle from the rest frame of a system with momentum
    /// `frame_momentum` and mass `frame_mass > 0` into the frame where it moves.
    /// See [`boost_from_rest`].
    pub fn boost_from_rest(&mut self, frame_momentum: DVec3, frame_mass: f64) {
        let energy = self.energy();
        self.momentum = boost_from_rest(self.momentum, energy, frame_momentum, frame_mass);
    }

    /// Checked [`Self::boost`]; a superluminal velocity leaves the momentum unchanged.
    pub fn try_boost(&mut self, beta: DVec3) -> Result<()> {
        check_subluminal(beta)?;
        self.boost(beta);
        Ok(())
    }
}

impl fmt::Display for Particle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(species) = self.species() {
            writeln!(f, "{species}")?;
        }
        write!(
            f,
            "Px: {}, Py: {}, Pz: {}",
            self.momentum.x, self.momentum.y, self.momentum.z
        )
    }
}
