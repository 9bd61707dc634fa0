//! Error types for the simulation core

use thiserror::Error;

use crate::body::BodyId;

/// Errors surfaced by the simulation core
///
/// Geometric degeneracies (coincident bodies, zero-length normals) are not
/// errors; they have defined outcomes inside [`Simulation::step`].
///
/// [`Simulation::step`]: crate::simulation::Simulation::step
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A body was rejected at registration
    #[error("invalid body: mass must be positive and finite, got {mass}")]
    InvalidBody { mass: f64 },

    /// Division by a zero scalar
    #[error("arithmetic error: {operation} by zero")]
    Arithmetic { operation: &'static str },

    /// No body with this id is registered
    #[error("unknown body id {0}")]
    UnknownBody(BodyId),

    /// Scenario could not be parsed or holds invalid values
    #[error("invalid scenario: {0}")]
    Scenario(String),
}

impl From<serde_yaml::Error> for SimError {
    fn from(err: serde_yaml::Error) -> Self {
        SimError::Scenario(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
