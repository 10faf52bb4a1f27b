//! Particle species: stable particles and resonances.
use std::fmt;

use crate::error::{Error, Result};

/// An immutable description of one kind of particle.
///
/// Masses and widths are in GeV/c², charges in units of the elementary charge.
/// A species with zero width is [`ParticleSpecies::Stable`]; any positive width
/// makes it a [`ParticleSpecies::Resonant`] species whose mass is smeared when it decays.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParticleSpecies {
    Stable {
        name: String,
        mass: f64,
        charge: i32,
    },
    Resonant {
        name: String,
        mass: f64,
        charge: i32,
        width: f64,
    },
}

impl ParticleSpecies {
    /// Builds a species, choosing the variant from `width`.
    pub fn new(name: impl Into<String>, mass: f64, charge: i32, width: f64) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidSpecies {
                name,
                reason: "name must not be empty".into(),
            });
        }
        if !mass.is_finite() || mass < 0.0 {
            return Err(Error::InvalidSpecies {
                name,
                reason: format!("mass must be finite and >= 0, got {mass}"),
            });
        }
        if !width.is_finite() || width < 0.0 {
            return Err(Error::InvalidSpecies {
                name,
                reason: format!("width must be finite and >= 0, got {width}"),
            });
        }

        if width == 0.0 {
            Ok(Self::Stable { name, mass, charge })
        } else {
            Ok(Self::Resonant {
                name,
                mass,
                charge,
                width,
            })
        }
    }

    /// Stable species shorthand.
    pub fn stable(name: impl Into<String>, mass: f64, charge: i32) -> Result<Self> {
        Self::new(name, mass, charge, 0.0)
    }

    /// Resonance shorthand. A zero `width` still yields a stable species.
    pub fn resonant(name: impl Into<String>, mass: f64, charge: i32, width: f64) -> Result<Self> {
        Self::new(name, mass, charge, width)
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Stable { name, .. } | Self::Resonant { name, .. } => name,
        }
    }

    pub fn mass(&self) -> f64 {
        match self {
            Self::Stable { mass, .. } | Self::Resonant { mass, .. } => *mass,
        }
    }

    pub fn charge(&self) -> i32 {
        match self {
            Self::Stable { charge, .. } | Self::Resonant { charge, .. } => *charge,
        }
    }

    /// Effective decay width; zero for stable species.
    pub fn width(&self) -> f64 {
        match self {
            Self::Stable { .. } => 0.0,
            Self::Resonant { width, .. } => *width,
        }
    }

    pub fn is_resonant(&self) -> bool {
        matches!(self, Self::Resonant { .. })
    }
}

/// Field order is fixed: name, mass, charge, then width for resonances.
impl fmt::Display for ParticleSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Particle Name: {}\nMass: {}\nCharge: {}",
            self.name(),
            self.mass(),
            self.charge()
        )?;
        if let Self::Resonant { width, .. } = self {
            write!(f, "\nWidth: {width}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_builds_stable_variant() {
        let s = ParticleSpecies::new("Pion+", 0.13957, 1, 0.0).unwrap();
        assert!(!s.is_resonant());
        assert_eq!(s.width(), 0.0);
        assert_eq!(s.name(), "Pion+");
        assert_eq!(s.mass(), 0.13957);
        assert_eq!(s.charge(), 1);
    }

    #[test]
    fn positive_width_builds_resonant_variant() {
        let s = ParticleSpecies::resonant("K*", 0.89166, 0, 0.05).unwrap();
        assert!(s.is_resonant());
        assert_eq!(s.width(), 0.05);
    }

    #[test]
    fn rejects_negative_or_non_finite_values() {
        assert!(matches!(
            ParticleSpecies::stable("x", -1.0, 0),
            Err(Error::InvalidSpecies { .. })
        ));
        assert!(matches!(
            ParticleSpecies::stable("x", f64::NAN, 0),
            Err(Error::InvalidSpecies { .. })
        ));
        assert!(matches!(
            ParticleSpecies::resonant("x", 1.0, 0, -0.1),
            Err(Error::InvalidSpecies { .. })
        ));
        assert!(matches!(
            ParticleSpecies::stable("", 1.0, 0),
            Err(Error::InvalidSpecies { .. })
        ));
    }

    #[test]
    fn display_lists_fields_in_fixed_order() {
        let stable = ParticleSpecies::stable("Kaon-", 0.49367, -1).unwrap();
        assert_eq!(
            stable.to_string(),
            "Particle Name: Kaon-\nMass: 0.49367\nCharge: -1"
        );

        let resonance = ParticleSpecies::resonant("K*", 0.89166, 0, 0.05).unwrap();
        assert_eq!(
            resonance.to_string(),
            "Particle Name: K*\nMass: 0.89166\nCharge: 0\nWidth: 0.05"
        );
    }
}
