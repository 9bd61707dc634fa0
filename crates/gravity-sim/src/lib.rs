//! Point-mass gravity and elastic collisions in 2D
//!
//! A [`Simulation`] owns a set of circular bodies whose mass doubles as their
//! radius. Each [`Simulation::step`] advances every body by one tick:
//! gravity from all other bodies, a semi-implicit Euler update, then elastic
//! collisions against bodies registered before it.
//!
//! Rendering, input, and scheduling are left to the embedding application,
//! which reads [`Simulation::bodies`] and [`Simulation::diagnostics`] between
//! ticks.

pub mod body;
pub mod collisions;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod scenario;
pub mod simulation;
pub mod vector;

#[cfg(test)]
mod diagnostics_test;
#[cfg(test)]
mod vector_test;

pub use body::{Body, BodyId, Shape};
pub use config::SimulationConfig;
pub use diagnostics::Diagnostics;
pub use error::{Result, SimError};
pub use scenario::ScenarioConfig;
pub use simulation::Simulation;
pub use vector::Vector2;
