//! Force models for the simulation
//!
//! This module provides the `ForceModel` trait and the gravity model used
//! by [`Simulation`](crate::simulation::Simulation).

use crate::body::Body;
use crate::vector::Vector2;

pub mod gravity;


pub use gravity::{ContactExcludedGravity, EXCLUSION_FACTOR};

/// A source of acceleration on bodies
///
/// Force models read the whole body arena and return the acceleration of a
/// single body. They never mutate bodies, so the caller decides when the
/// result is written back.
///
/// # Examples
///
/// ```
/// use gravity_sim::body::{Body, BodyId, Shape};
/// use gravity_sim::forces::{ContactExcludedGravity, ForceModel};
/// use gravity_sim::vector::Vector2;
///
/// let bodies = [
///     Body::new(BodyId(0), 1.0, Shape::Circle, Vector2::new(0.0, 0.0)),
///     Body::new(BodyId(1), 1.0, Shape::Circle, Vector2::new(10.0, 0.0)),
/// ];
///
/// let gravity = ContactExcludedGravity::new(5.0);
/// let accel = gravity.acceleration(0, &bodies);
/// assert!(accel.x() > 0.0);
/// ```
pub trait ForceModel: Send + Sync {
    /// Acceleration on the body at index `idx` given every body in the arena
    fn acceleration(&self, idx: usize, bodies: &[Body]) -> Vector2;
}
