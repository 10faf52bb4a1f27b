//! Lorentz boosts in natural units (c = 1).
use glam::DVec3;

use crate::error::{Error, Result};

/// Boosts a three-momentum with energy `energy` by velocity `beta`.
///
/// `p' = p + beta * (gamma2 * (beta . p) + gamma * energy)` with
/// `gamma2 = (gamma - 1) / beta^2` (0 for a null boost). The caller guarantees
/// `beta^2 < 1`; see [`check_subluminal`].
#[inline]
pub fn boost_momentum(momentum: DVec3, energy: f64, beta: DVec3) -> DVec3 {
    let b2 = beta.length_squared();
    let gamma = 1.0 / (1.0 - b2).sqrt();
    let gamma2 = if b2 > 0.0 { (gamma - 1.0) / b2 } else { 0.0 };
    let bp = beta.dot(momentum);

    momentum + beta * (gamma2 * bp + gamma * energy)
}

/// Energy after the same boost as [`boost_momentum`].
#[inline]
pub fn boost_energy(momentum: DVec3, energy: f64, beta: DVec3) -> f64 {
    let gamma = lorentz_factor(beta);
    gamma * (energy + beta.dot(momentum))
}

/// `1 / sqrt(1 - beta^2)`.
#[inline]
pub fn lorentz_factor(beta: DVec3) -> f64 {
    1.0 / (1.0 - beta.length_squared()).sqrt()
}

/// Ensures `beta` is finite and strictly below the speed of light.
pub fn check_subluminal(beta: DVec3) -> Result<()> {
    let beta_squared = beta.length_squared();
    if beta_squared.is_finite() && beta_squared < 1.0 {
        Ok(())
    } else {
        Err(Error::Superluminal { beta_squared })
    }
}

/// Velocity `p / E` of a system with the given momentum and energy.
pub fn velocity(momentum: DVec3, energy: f64) -> Result<DVec3> {
    if !energy.is_finite() || energy <= 0.0 {
        return Err(Error::InvalidEnergy { energy });
    }
    let beta = momentum / energy;
    check_subluminal(beta)?;
    Ok(beta)
}

/// Transforms a momentum from the rest frame of a system with momentum
/// `frame_momentum` and mass `frame_mass` into the frame where that system moves.
///
/// `p' = p + P * ((P . p) / (M (E_P + M)) + E / M)`, with `E` the energy of `p`
/// in the rest frame. Equivalent to [`boost_momentum`] with `beta = P / E_P`, but
/// uses `gamma = E_P / M` and `gamma * beta = P / M` directly, so it stays exact
/// when `|P| >> M` and `beta` would round to 1. `frame_mass` must be > 0.
#[inline]
pub fn boost_from_rest(
    momentum: DVec3,
    energy: f64,
    frame_momentum: DVec3,
    frame_mass: f64,
) -> DVec3 {
    let frame_energy = (frame_momentum.length_squared() + frame_mass * frame_mass).sqrt();
    let along = frame_momentum.dot(momentum) / (frame_mass * (frame_energy + frame_mass));

    momentum + frame_momentum * (along + energy / frame_mass)
}
