//! Random sampling primitives used by the decay engine and the event generator.
//!
//! All helpers draw from an explicitly passed [`RngCore`], so results are
//! reproducible for a fixed seed and independent generators can run side by side.
use std::f64::consts::{PI, TAU};

use glam::DVec3;
use mint::Vector3;
use rand::RngCore;

pub mod exponential;

pub use exponential::ExponentialMomentumSampling;

/// Trait for drawing a primary particle's three-momentum.
pub trait MomentumSampling: Send + Sync {
    fn generate(&self, rng: &mut dyn RngCore) -> Vector3<f64>;
}

/// How a polar angle is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolarAngleMode {
    /// Theta uniform over a half-turn. Matches historical results but is not
    /// uniform in solid angle.
    #[default]
    UniformAngle,
    /// cos(theta) uniform in [-1, 1]: isotropic over the sphere.
    UniformCosine,
}

impl PolarAngleMode {
    /// Draws a polar angle. `lower` is the start of the half-turn used by
    /// [`PolarAngleMode::UniformAngle`]; [`PolarAngleMode::UniformCosine`] always
    /// returns a value in [0, pi].
    pub fn sample(self, rng: &mut dyn RngCore, lower: f64) -> f64 {
        match self {
            Self::UniformAngle => lower + PI * rand01(rng),
            Self::UniformCosine => (1.0 - 2.0 * rand01(rng)).acos(),
        }
    }
}

/// Generate a random float in the range [0, 1).
#[inline]
pub fn rand01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Uniform in [lo, hi).
#[inline]
pub fn uniform(rng: &mut dyn RngCore, lo: f64, hi: f64) -> f64 {
    lo + (hi - lo) * rand01(rng)
}

/// Azimuthal angle uniform in [0, 2pi).
#[inline]
pub fn azimuth(rng: &mut dyn RngCore) -> f64 {
    TAU * rand01(rng)
}

/// Exponentially distributed value with the given mean.
pub fn exponential(rng: &mut dyn RngCore, mean: f64) -> f64 {
    // 1 - u lies in (0, 1], keeping the logarithm finite.
    -mean * (1.0 - rand01(rng)).ln()
}

/// Standard normal deviate via the polar Box–Muller method.
///
/// Pairs `(x1, x2)` uniform in [-1, 1) are rejected until they fall strictly
/// inside the unit disk (and off the origin).
pub fn standard_normal(rng: &mut dyn RngCore) -> f64 {
    loop {
        let x1 = 2.0 * rand01(rng) - 1.0;
        let x2 = 2.0 * rand01(rng) - 1.0;
        let w = x1 * x1 + x2 * x2;
        if w < 1.0 && w > 0.0 {
            return x1 * ((-2.0 * w.ln()) / w).sqrt();
        }
    }
}

/// Unit vector for polar angle `theta` and azimuth `phi`.
#[inline]
pub fn unit_vector(theta: f64, phi: f64) -> DVec3 {
    let (sin_t, cos_t) = theta.sin_cos();
    let (sin_p, cos_p) = phi.sin_cos();
    DVec3::new(sin_t * cos_p, sin_t * sin_p, cos_t)
}
