//! Direct inverse-square gravity with a contact exclusion zone (O(N²))

use crate::body::Body;
use crate::forces::ForceModel;
use crate::vector::Vector2;

/// Fraction of the summed radii inside which a pair exerts no gravity
pub const EXCLUSION_FACTOR: f64 = 0.8;

/// Pairwise gravity that switches off as bodies approach contact
///
/// Body `B` pulls body `A` with `gravity * B.mass / r²` along the line
/// between them, unless `r < exclusion_factor * (A.mass + B.mass)`, in which
/// case the pair contributes nothing. Masses double as radii, so the zone
/// starts a little inside the collision distance and keeps the `1 / r²`
/// singularity out of reach when bodies overlap or coincide.
///
/// Contributions are summed in arena (id) order, so results are
/// reproducible bit for bit.
///
/// # Examples
///
/// ```
/// use gravity_sim::body::{Body, BodyId, Shape};
/// use gravity_sim::forces::{ContactExcludedGravity, ForceModel};
/// use gravity_sim::vector::Vector2;
///
/// let bodies = [
///     Body::new(BodyId(0), 20.0, Shape::Circle, Vector2::new(700.0, 500.0)),
///     Body::new(BodyId(1), 100.0, Shape::Circle, Vector2::new(500.0, 500.0)),
/// ];
///
/// let gravity = ContactExcludedGravity::new(5.0);
/// let accel = gravity.acceleration(0, &bodies);
///
/// // 5 * 100 / 200² toward the heavier body
/// assert!((accel.x() + 0.0125).abs() < 1e-12);
/// assert_eq!(accel.y(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactExcludedGravity {
    /// Gravitational constant in simulation units
    pub gravity: f64,
    /// Multiple of the summed radii below which gravity is suppressed
    pub exclusion_factor: f64,
}

impl ContactExcludedGravity {
    pub fn new(gravity: f64) -> Self {
        Self {
            gravity,
            exclusion_factor: EXCLUSION_FACTOR,
        }
    }

    /// Contribution of `source` to the acceleration of `target`
    pub fn pair_acceleration(&self, target: &Body, source: &Body) -> Vector2 {
        let rel_pos = source.position - target.position;
        let distance = rel_pos.magnitude();

        if distance < self.exclusion_factor * (target.mass + source.mass) {
            return Vector2::zeros();
        }

        let accel_scalar = self.gravity * source.mass / (distance * distance);
        rel_pos.normalize() * accel_scalar
    }
}

impl ForceModel for ContactExcludedGravity {
    fn acceleration(&self, idx: usize, bodies: &[Body]) -> Vector2 {
        let body = &bodies[idx];

        bodies
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, other)| self.pair_acceleration(body, other))
            .fold(Vector2::zeros(), |acc, a| acc + a)
    }
}
