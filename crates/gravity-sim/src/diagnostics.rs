//! Aggregate quantities for display

use serde::Serialize;

use crate::body::Body;
use crate::vector::Vector2;

/// Whole-system kinetic energy and momentum
///
/// Both are plain reductions over the bodies; measuring never changes
/// simulation state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Diagnostics {
    /// Σ m |v|² / 2
    pub total_kinetic_energy: f64,
    /// |Σ m v|, the magnitude of the summed momentum vector
    pub total_momentum: f64,
}

impl Diagnostics {
    /// Measure the current state of `bodies`
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity_sim::body::{Body, BodyId, Shape};
    /// use gravity_sim::diagnostics::Diagnostics;
    /// use gravity_sim::vector::Vector2;
    ///
    /// let bodies = [
    ///     Body::new(BodyId(0), 2.0, Shape::Circle, Vector2::zeros())
    ///         .with_velocity(Vector2::new(3.0, 0.0)),
    ///     Body::new(BodyId(1), 2.0, Shape::Circle, Vector2::new(100.0, 0.0))
    ///         .with_velocity(Vector2::new(-3.0, 0.0)),
    /// ];
    ///
    /// let diagnostics = Diagnostics::measure(&bodies);
    /// assert_eq!(diagnostics.total_kinetic_energy, 18.0);
    /// // Opposite momenta cancel
    /// assert_eq!(diagnostics.total_momentum, 0.0);
    /// ```
    pub fn measure(bodies: &[Body]) -> Self {
        Self {
            total_kinetic_energy: total_kinetic_energy(bodies),
            total_momentum: total_momentum(bodies).magnitude(),
        }
    }
}

/// Vector sum of all body momenta
pub fn total_momentum(bodies: &[Body]) -> Vector2 {
    bodies
        .iter()
        .map(Body::momentum)
        .fold(Vector2::zeros(), |acc, p| acc + p)
}

pub fn total_kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter().map(Body::kinetic_energy).sum()
}
