//! Build errors for the calculator builder.

use crate::config::ConfigError;
use crate::enforcement::InvariantViolation;
use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Seed state violates {} invariant(s)", .0.len())]
    InvalidState(Vec<InvariantViolation>),
}
