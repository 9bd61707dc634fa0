use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::body::{Body, BodyId, Shape};
use crate::collisions::resolution::*;
use crate::vector::Vector2;

fn circle(id: u32, mass: f64, position: [f64; 2], velocity: [f64; 2]) -> Body {
    Body::new(BodyId(id), mass, Shape::Circle, position.into()).with_velocity(velocity.into())
}

fn total_momentum(bodies: &[&Body]) -> Vector2 {
    bodies
        .iter()
        .map(|b| b.momentum())
        .fold(Vector2::zeros(), |acc, p| acc + p)
}

#[test]
fn test_equal_masses_exchange_velocities() {
    let mut a = circle(1, 10.0, [0.0, 0.0], [3.0, 0.0]);
    let mut b = circle(0, 10.0, [12.0, 0.0], [-3.0, 0.0]);

    resolve_elastic(&mut a, &mut b);

    assert_relative_eq!(a.velocity.x(), -3.0);
    assert_relative_eq!(b.velocity.x(), 3.0);
    assert_abs_diff_eq!(a.velocity.y(), 0.0);
    assert_abs_diff_eq!(b.velocity.y(), 0.0);
}

#[test]
fn test_equal_masses_swap_normal_component_only() {
    // Normal along x; the y components are tangential and must survive
    let mut a = circle(1, 4.0, [0.0, 0.0], [1.0, 2.0]);
    let mut b = circle(0, 4.0, [5.0, 0.0], [-1.0, -7.0]);

    resolve_elastic(&mut a, &mut b);

    assert_relative_eq!(a.velocity.x(), -1.0);
    assert_relative_eq!(b.velocity.x(), 1.0);
    assert_relative_eq!(a.velocity.y(), 2.0);
    assert_relative_eq!(b.velocity.y(), -7.0);
}

#[test]
fn test_momentum_conserved() {
    let mut a = circle(1, 3.0, [0.0, 0.0], [2.5, -1.0]);
    let mut b = circle(0, 11.0, [6.0, 8.0], [-0.5, 0.75]);

    let before = total_momentum(&[&a, &b]);
    resolve_elastic(&mut a, &mut b);
    let after = total_momentum(&[&a, &b]);

    assert_abs_diff_eq!(before.x(), after.x(), epsilon = 1e-12);
    assert_abs_diff_eq!(before.y(), after.y(), epsilon = 1e-12);
}

#[test]
fn test_kinetic_energy_conserved() {
    let mut a = circle(1, 3.0, [0.0, 0.0], [2.5, -1.0]);
    let mut b = circle(0, 11.0, [6.0, 8.0], [-0.5, 0.75]);

    let before = a.kinetic_energy() + b.kinetic_energy();
    resolve_elastic(&mut a, &mut b);
    let after = a.kinetic_energy() + b.kinetic_energy();

    assert_relative_eq!(before, after, max_relative = 1e-12);
}

#[test]
fn test_heavy_body_barely_moves() {
    let mut a = circle(1, 1.0, [0.0, 0.0], [5.0, 0.0]);
    let mut b = circle(0, 1000.0, [10.0, 0.0], [0.0, 0.0]);

    resolve_elastic(&mut a, &mut b);

    // Light body bounces back at almost its incoming speed
    assert!(a.velocity.x() < -4.9);
    assert!(b.velocity.x() > 0.0 && b.velocity.x() < 0.011);
}

#[test]
fn test_positional_correction_pushes_apart() {
    let mut a = circle(1, 10.0, [0.0, 0.0], [0.0, 0.0]);
    let mut b = circle(0, 10.0, [0.0, 10.0], [0.0, 0.0]);

    resolve_elastic(&mut a, &mut b);

    assert_eq!(a.position, Vector2::new(0.0, -POSITIONAL_CORRECTION));
    assert_eq!(b.position, Vector2::new(0.0, 10.0 + POSITIONAL_CORRECTION));
    // At rest, so no impulse
    assert!(a.velocity.is_zero());
    assert!(b.velocity.is_zero());
}

#[test]
fn test_coincident_bodies_unchanged() {
    let mut a = circle(1, 2.0, [5.0, 5.0], [1.0, 0.0]);
    let mut b = circle(0, 2.0, [5.0, 5.0], [-1.0, 0.0]);
    let (a0, b0) = (a, b);

    resolve_elastic(&mut a, &mut b);

    assert_eq!(a, a0);
    assert_eq!(b, b0);
}

#[test]
fn test_first_body_resolves_nothing() {
    let mut bodies = [
        circle(0, 10.0, [0.0, 0.0], [1.0, 0.0]),
        circle(1, 10.0, [5.0, 0.0], [-1.0, 0.0]),
    ];
    let before = bodies;

    let events = resolve_against_earlier(0, &mut bodies);

    assert!(events.is_empty());
    assert_eq!(bodies, before);
}

#[test]
fn test_resolves_against_earlier_body() {
    let mut bodies = [
        circle(0, 10.0, [5.0, 0.0], [-1.0, 0.0]),
        circle(1, 10.0, [0.0, 0.0], [1.0, 0.0]),
    ];

    let events = resolve_against_earlier(1, &mut bodies);

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].body_a, BodyId(1));
    assert_eq!(events[0].body_b, BodyId(0));
    assert_relative_eq!(bodies[1].velocity.x(), -1.0);
    assert_relative_eq!(bodies[0].velocity.x(), 1.0);
}

#[test]
fn test_three_overlapping_bodies_each_pair_once() {
    let mut bodies = [
        circle(0, 10.0, [0.0, 0.0], [0.0, 0.0]),
        circle(1, 10.0, [4.0, 0.0], [0.0, 0.0]),
        circle(2, 10.0, [8.0, 0.0], [0.0, 0.0]),
    ];

    let mut pairs = Vec::new();
    for idx in 0..bodies.len() {
        pairs.extend(
            resolve_against_earlier(idx, &mut bodies)
                .iter()
                .map(|e| (e.body_a.0, e.body_b.0)),
        );
    }

    assert_eq!(pairs, vec![(1, 0), (2, 0), (2, 1)]);
}

#[test]
fn test_inert_body_is_skipped() {
    let mut bodies = [
        Body::new(BodyId(0), 10.0, Shape::Other, Vector2::new(0.0, 0.0)),
        circle(1, 10.0, [5.0, 0.0], [-2.0, 0.0]),
    ];

    let events = resolve_against_earlier(1, &mut bodies);

    assert!(events.is_empty());
    assert_eq!(bodies[1].velocity, Vector2::new(-2.0, 0.0));
}
