//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! catalogue registration and lookup failures, rejected decays, invalid boosts and
//! invalid generator configuration. Every variant is recoverable: the failing call
//! leaves the state it was given untouched.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("cannot register more species: catalog capacity of {capacity} reached")]
    CatalogFull { capacity: usize },

    #[error("species '{name}' already registered")]
    DuplicateSpecies { name: String },

    #[error("unknown species '{name}'")]
    UnknownSpecies { name: String },

    #[error("species index {index} out of range (catalog holds {len})")]
    InvalidIndex { index: usize, len: usize },

    #[error("invalid species '{name}': {reason}")]
    InvalidSpecies { name: String, reason: String },

    #[error("decay cannot be performed: parent mass is zero")]
    ZeroParentMass,

    #[error("decay cannot be performed: parent mass {parent} is below daughter mass sum {daughters}")]
    InsufficientMass { parent: f64, daughters: f64 },

    #[error("boost velocity is not subluminal (beta^2 = {beta_squared})")]
    Superluminal { beta_squared: f64 },

    #[error("energy {energy} is not finite and positive")]
    InvalidEnergy { energy: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_energy_message_names_the_energy() {
        let msg = Error::InvalidEnergy { energy: -2.5 }.to_string();
        assert!(msg.contains("-2.5"));
    }

    #[test]
    fn insufficient_mass_message_names_both_masses() {
        let err = Error::InsufficientMass {
            parent: 0.5,
            daughters: 0.75,
        };
        let msg = err.to_string();
        assert!(msg.contains("0.5"));
        assert!(msg.contains("0.75"));
    }
}
