//! Time integration for a single body
//!
//! One call advances one body by one tick. There is no time step parameter:
//! a tick is the unit of time, and how many ticks run per wall-clock second
//! is up to whoever drives the simulation.

use crate::body::Body;
use crate::forces::ForceModel;

/// Advances one body by one tick
pub trait Integrator: Send + Sync {
    /// Move `body` forward using the acceleration already stored on it
    fn integrate(&self, body: &mut Body);

    /// Recompute the acceleration of `bodies[idx]` from `force`, then integrate it
    ///
    /// Bodies earlier in the slice may already have moved this tick; their
    /// updated positions are what `force` sees.
    fn advance(&self, idx: usize, bodies: &mut [Body], force: &dyn ForceModel) {
        let acceleration = force.acceleration(idx, bodies);
        let body = &mut bodies[idx];
        body.acceleration = acceleration;
        self.integrate(body);
    }
}

/// Semi-implicit (symplectic) Euler integrator
///
/// Velocity is kicked by the acceleration first, then the position drifts by
/// the *new* velocity:
///
/// 1. v ← v + a
/// 2. x ← x + v
///
/// # Examples
///
/// ```
/// use gravity_sim::body::{Body, BodyId, Shape};
/// use gravity_sim::integrator::{Integrator, SemiImplicitEuler};
/// use gravity_sim::vector::Vector2;
///
/// let mut body = Body::new(BodyId(0), 1.0, Shape::Circle, Vector2::new(0.0, 0.0))
///     .with_velocity(Vector2::new(1.0, 0.0));
/// body.acceleration = Vector2::new(0.0, 2.0);
///
/// SemiImplicitEuler.integrate(&mut body);
///
/// assert_eq!(body.velocity, Vector2::new(1.0, 2.0));
/// assert_eq!(body.position, Vector2::new(1.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SemiImplicitEuler;

impl Integrator for SemiImplicitEuler {
    fn integrate(&self, body: &mut Body) {
        body.velocity += body.acceleration;
        body.position += body.velocity;
    }
}
