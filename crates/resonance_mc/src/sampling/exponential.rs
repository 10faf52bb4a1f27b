//! Exponential momentum spectrum with random direction.
use std::f64::consts::PI;

use mint::Vector3;
use rand::RngCore;

use crate::sampling::{azimuth, exponential, unit_vector, MomentumSampling, PolarAngleMode};

/// |p| ~ Exp(mean), phi uniform in [0, 2pi), theta drawn by `polar_mode` over [0, pi).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExponentialMomentumSampling {
    /// Mean momentum magnitude in GeV/c.
    pub mean: f64,
    pub polar_mode: PolarAngleMode,
}

impl ExponentialMomentumSampling {
    pub fn new(mean: f64) -> Self {
        Self {
            mean,
            polar_mode: PolarAngleMode::UniformAngle,
        }
    }

    pub fn with_polar_mode(mut self, mode: PolarAngleMode) -> Self {
        self.polar_mode = mode;
        self
    }
}

impl MomentumSampling for ExponentialMomentumSampling {
    fn generate(&self, rng: &mut dyn RngCore) -> Vector3<f64> {
        if !self.mean.is_finite() || self.mean <= 0.0 {
            return Vector3 {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            };
        }

        let phi = azimuth(rng);
        let theta = self.polar_mode.sample(rng, 0.0).clamp(0.0, PI);
        let magnitude = exponential(rng, self.mean);

        (unit_vector(theta, phi) * magnitude).into()
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn non_positive_mean_gives_zero_momentum() {
        let mut rng = StdRng::seed_from_u64(1);
        for mean in [0.0, -1.0, f64::NAN] {
            let p = DVec3::from(ExponentialMomentumSampling::new(mean).generate(&mut rng));
            assert_eq!(p, DVec3::ZERO);
        }
    }

    #[test]
    fn mean_magnitude_matches_configuration() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = ExponentialMomentumSampling::new(1.0);
        let n = 100_000;
        let mean = (0..n)
            .map(|_| DVec3::from(s.generate(&mut rng)).length())
            .sum::<f64>()
            / n as f64;
        assert!((mean - 1.0).abs() < 0.02, "mean = {mean}");
    }

    #[test]
    fn determinism_for_same_seed() {
        let s = ExponentialMomentumSampling::new(1.0)
            .with_polar_mode(PolarAngleMode::UniformCosine);
        let mut rng_a = StdRng::seed_from_u64(123);
        let mut rng_b = StdRng::seed_from_u64(123);
        for _ in 0..16 {
            assert_eq!(s.generate(&mut rng_a), s.generate(&mut rng_b));
        }
    }

    #[test]
    fn legacy_polar_mode_over_weights_poles() {
        // Uniform theta puts more particles near the z axis than an isotropic source.
        let mut rng = StdRng::seed_from_u64(3);
        let legacy = ExponentialMomentumSampling::new(1.0);
        let isotropic = legacy.clone().with_polar_mode(PolarAngleMode::UniformCosine);
        let n = 50_000;
        let frac_near_pole = |s: &ExponentialMomentumSampling, rng: &mut StdRng| {
            (0..n)
                .filter(|_| {
                    let p = DVec3::from(s.generate(rng));
                    (p.z / p.length()).abs() > 0.9
                })
                .count() as f64
                / n as f64
        };
        let a = frac_near_pole(&legacy, &mut rng);
        let b = frac_near_pole(&isotropic, &mut rng);
        assert!(a > b + 0.05, "legacy {a} vs isotropic {b}");
    }
}
