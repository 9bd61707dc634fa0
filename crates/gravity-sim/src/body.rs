use serde::{Deserialize, Serialize};
use std::fmt;

use crate::vector::Vector2;

/// Stable identity of a registered body.
///
/// Ids are handed out in registration order starting at 0, so ascending id
/// order is also the iteration order of [`Simulation::bodies`].
///
/// [`Simulation::bodies`]: crate::simulation::Simulation::bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Collision shape of a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Circle of radius equal to the body's mass
    #[default]
    Circle,
    /// Reserved for other shapes; never collides
    Other,
}

/// A point mass owned by a [`Simulation`](crate::simulation::Simulation).
///
/// The mass doubles as the collision and render radius; there is no separate
/// radius field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Body {
    pub id: BodyId,
    pub mass: f64,
    pub shape: Shape,
    pub position: Vector2,
    pub velocity: Vector2,
    pub acceleration: Vector2,
}

impl Body {
    /// Creates a body at rest with zero acceleration
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity_sim::body::{Body, BodyId, Shape};
    /// use gravity_sim::vector::Vector2;
    ///
    /// let body = Body::new(BodyId(0), 20.0, Shape::Circle, Vector2::new(700.0, 500.0));
    /// assert_eq!(body.radius(), 20.0);
    /// assert!(body.velocity.is_zero());
    /// ```
    pub fn new(id: BodyId, mass: f64, shape: Shape, position: Vector2) -> Self {
        Body {
            id,
            mass,
            shape,
            position,
            velocity: Vector2::zeros(),
            acceleration: Vector2::zeros(),
        }
    }

    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn radius(&self) -> f64 {
        self.mass
    }

    pub fn is_collidable(&self) -> bool {
        self.shape == Shape::Circle
    }

    pub fn momentum(&self) -> Vector2 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.position - self.position).magnitude()
    }
}
