use approx::assert_relative_eq;

use crate::body::{Body, BodyId, Shape};
use crate::diagnostics::{Diagnostics, total_kinetic_energy, total_momentum};
use crate::vector::Vector2;

fn moving(id: u32, mass: f64, velocity: [f64; 2]) -> Body {
    Body::new(BodyId(id), mass, Shape::Circle, Vector2::new(id as f64 * 100.0, 0.0))
        .with_velocity(velocity.into())
}

#[test]
fn test_empty_system() {
    assert_eq!(Diagnostics::measure(&[]), Diagnostics::default());
}

#[test]
fn test_bodies_at_rest() {
    let bodies = [moving(0, 20.0, [0.0, 0.0]), moving(1, 100.0, [0.0, 0.0])];

    let diagnostics = Diagnostics::measure(&bodies);

    assert_eq!(diagnostics.total_kinetic_energy, 0.0);
    assert_eq!(diagnostics.total_momentum, 0.0);
}

#[test]
fn test_kinetic_energy_sum() {
    let bodies = [moving(0, 2.0, [3.0, 4.0]), moving(1, 4.0, [0.0, 1.0])];

    // 0.5*2*25 + 0.5*4*1
    assert_relative_eq!(total_kinetic_energy(&bodies), 27.0);
}

#[test]
fn test_momentum_is_vector_sum_magnitude() {
    let bodies = [
        moving(0, 1.0, [3.0, 0.0]),
        moving(1, 1.0, [0.0, 4.0]),
        moving(2, 2.0, [-1.0, 0.0]),
    ];

    let p = total_momentum(&bodies);
    assert_relative_eq!(p.x(), 1.0);
    assert_relative_eq!(p.y(), 4.0);

    // Not the scalar sum of magnitudes (3 + 4 + 2)
    let diagnostics = Diagnostics::measure(&bodies);
    assert_relative_eq!(diagnostics.total_momentum, 17.0_f64.sqrt());
}

#[test]
fn test_measure_is_repeatable() {
    let bodies = [moving(0, 5.0, [1.5, -2.0]), moving(1, 7.0, [0.25, 0.5])];
    let before = bodies;

    let first = Diagnostics::measure(&bodies);
    let second = Diagnostics::measure(&bodies);

    assert_eq!(first, second);
    assert_eq!(bodies, before);
}
