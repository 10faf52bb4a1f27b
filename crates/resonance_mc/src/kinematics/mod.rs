//! Relativistic kinematics in natural units: particles, energies, invariant masses and boosts.
pub mod boost;
pub mod particle;

pub use boost::{
    boost_energy, boost_from_rest, boost_momentum, check_subluminal, lorentz_factor, velocity,
};
pub use particle::Particle;
