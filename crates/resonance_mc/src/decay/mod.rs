//! Two-body decays: `parent -> daughter1 + daughter2`.
//!
//! The [`DecayEngine`] samples the decay in the parent's rest frame, smearing the
//! parent mass with a Gaussian of the species' width when the parent is a
//! resonance, and boosts both daughters into the lab frame with the parent's
//! momentum. Failures are reported before any daughter is touched.
//!
//! Related: [`table`] (which channels a parent may decay into).
use std::f64::consts::PI;

use glam::DVec3;
use rand::RngCore;

use crate::error::{Error, Result};
use crate::kinematics::Particle;
use crate::sampling::{azimuth, standard_normal, unit_vector, PolarAngleMode};

pub mod table;

pub use table::{DecayChannel, DecayTable};

/// Kinematic summary of a successful decay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayKinematics {
    /// Parent mass used for the decay, after smearing.
    pub parent_mass: f64,
    /// Momentum magnitude of each daughter in the parent rest frame.
    pub rest_frame_momentum: f64,
    /// Rest-frame direction of the first daughter.
    pub direction: DVec3,
    /// `gamma * beta` of the parent, `p / M`, used to boost the daughters.
    pub gamma_beta: DVec3,
}

/// Numeric status of a decay call, for callers that branch on codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecayStatus {
    Success,
    ZeroMass,
    InsufficientMass,
}

impl DecayStatus {
    pub fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::ZeroMass => 1,
            Self::InsufficientMass => 2,
        }
    }

    /// Status for a decay result. `None` for any other error, which a decay only
    /// returns as [`Error::InvalidEnergy`] for a parent with non-finite momentum.
    pub fn of<T>(result: &Result<T>) -> Option<Self> {
        match result {
            Ok(_) => Some(Self::Success),
            Err(Error::ZeroParentMass) => Some(Self::ZeroMass),
            Err(Error::InsufficientMass { .. }) => Some(Self::InsufficientMass),
            Err(_) => None,
        }
    }
}

/// Stateless two-body decay sampler.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecayEngine {
    /// Polar angle distribution of the first daughter in the rest frame.
    pub polar_mode: PolarAngleMode,
}

impl DecayEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rest-frame polar angle distribution.
    pub fn with_polar_mode(mut self, mode: PolarAngleMode) -> Self {
        self.polar_mode = mode;
        self
    }

    /// Decays `parent` into `daughter1` and `daughter2`, whose species must already
    /// be bound. On success both daughters hold lab-frame momenta; on failure
    /// neither is modified. The parent is only read.
    pub fn decay<R: RngCore>(
        &self,
        parent: &Particle<'_>,
        daughter1: &mut Particle<'_>,
        daughter2: &mut Particle<'_>,
        rng: &mut R,
    ) -> Result<DecayKinematics> {
        let nominal = parent.mass();
        if nominal == 0.0 {
            return Err(Error::ZeroParentMass);
        }

        let mut mass = nominal;
        if let Some(species) = parent.species().filter(|s| s.is_resonant()) {
            mass += species.width() * standard_normal(rng);
        }

        let m1 = daughter1.mass();
        let m2 = daughter2.mass();
        if mass < m1 + m2 {
            return Err(Error::InsufficientMass {
                parent: mass,
                daughters: m1 + m2,
            });
        }
        if mass <= 0.0 {
            return Err(Error::ZeroParentMass);
        }

        let pout = breakup_momentum(mass, m1, m2);

        let phi = azimuth(rng);
        let theta = self.polar_mode.sample(rng, -PI / 2.0);
        let direction = unit_vector(theta, phi);

        let parent_momentum = parent.momentum();
        let energy = (parent_momentum.length_squared() + mass * mass).sqrt();
        if !energy.is_finite() {
            return Err(Error::InvalidEnergy { energy });
        }

        daughter1.set_momentum(direction * pout);
        daughter2.set_momentum(-direction * pout);
        daughter1.boost_from_rest(parent_momentum, mass);
        daughter2.boost_from_rest(parent_momentum, mass);

        Ok(DecayKinematics {
            parent_mass: mass,
            rest_frame_momentum: pout,
            direction,
            gamma_beta: parent_momentum / mass,
        })
    }
}

/// Rest-frame momentum of either daughter in a two-body decay:
/// `sqrt((M^2 - (m1 + m2)^2) (M^2 - (m1 - m2)^2)) / (2M)`.
///
/// Returns 0 below threshold.
pub fn breakup_momentum(parent_mass: f64, m1: f64, m2: f64) -> f64 {
    let m2_parent = parent_mass * parent_mass;
    let sum = m1 + m2;
    let diff = m1 - m2;
    let radicand = (m2_parent - sum * sum) * (m2_parent - diff * diff);
    radicand.max(0.0).sqrt() / (2.0 * parent_mass)
}
