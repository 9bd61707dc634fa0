//! Elastic collision response
//!
//! Overlapping circles exchange momentum along the contact normal using the
//! standard two-body elastic impulse, which conserves momentum and kinetic
//! energy exactly in exact arithmetic.

use log::debug;

use crate::body::Body;
use crate::collisions::{CollisionEvent, check_pair};

/// Distance each body of a colliding pair is pushed along the normal
///
/// This is a fixed one-unit nudge to reduce residual overlap, not a true
/// depenetration; deeply overlapping pairs stay overlapped for a few ticks.
pub const POSITIONAL_CORRECTION: f64 = 1.0;

/// Apply an elastic impulse between `a` and `b`, then push them apart
///
/// With `n` the unit vector from `a` to `b` and `rv = a.v - b.v`:
///
/// - `a.v -= n * (2 m_b / (m_a + m_b)) * (rv · n)`
/// - `b.v += n * (2 m_a / (m_a + m_b)) * (rv · n)`
/// - `a.x -= n`, `b.x += n`
///
/// The impulse is applied whatever the sign of `rv · n`; a pair that is
/// already separating gets its normal velocities exchanged as well.
/// Coincident centres give a zero normal, which leaves both bodies as they
/// were.
///
/// # Examples
///
/// ```
/// use gravity_sim::body::{Body, BodyId, Shape};
/// use gravity_sim::collisions::resolve_elastic;
/// use gravity_sim::vector::Vector2;
///
/// let mut a = Body::new(BodyId(1), 10.0, Shape::Circle, Vector2::new(0.0, 0.0))
///     .with_velocity(Vector2::new(2.0, 0.0));
/// let mut b = Body::new(BodyId(0), 10.0, Shape::Circle, Vector2::new(15.0, 0.0))
///     .with_velocity(Vector2::new(-2.0, 0.0));
///
/// resolve_elastic(&mut a, &mut b);
///
/// // Equal masses swap their normal velocities
/// assert_eq!(a.velocity, Vector2::new(-2.0, 0.0));
/// assert_eq!(b.velocity, Vector2::new(2.0, 0.0));
/// assert_eq!(a.position, Vector2::new(-1.0, 0.0));
/// assert_eq!(b.position, Vector2::new(16.0, 0.0));
/// ```
pub fn resolve_elastic(a: &mut Body, b: &mut Body) {
    let normal = (b.position - a.position).normalize();
    let rel_velocity = a.velocity - b.velocity;
    let closing = rel_velocity.dot(normal);
    let total_mass = a.mass + b.mass;

    a.velocity -= normal * (2.0 * b.mass / total_mass) * closing;
    b.velocity += normal * (2.0 * a.mass / total_mass) * closing;

    a.position -= normal * POSITIONAL_CORRECTION;
    b.position += normal * POSITIONAL_CORRECTION;
}

/// Resolve every collision between `bodies[idx]` and bodies with a smaller id
///
/// Pairs are visited in arena order. Each resolution updates velocities and
/// positions immediately, so a later pair in the same scan sees the result
/// of an earlier one. Because only smaller ids are scanned, a full pass over
/// the arena resolves each unordered pair at most once.
///
/// # Returns
///
/// The collisions that were resolved, in resolution order
pub fn resolve_against_earlier(idx: usize, bodies: &mut [Body]) -> Vec<CollisionEvent> {
    let mut events = Vec::new();

    for other in 0..bodies.len() {
        if other == idx {
            continue;
        }

        if let Some(event) = check_pair(&bodies[idx], &bodies[other]) {
            let (a, b) = pair_mut(bodies, idx, other);
            resolve_elastic(a, b);

            debug!(
                "collision between body {} and body {} (separation {:.3}, contact {:.3})",
                event.body_a.0, event.body_b.0, event.separation, event.contact_distance
            );
            events.push(event);
        }
    }

    events
}

/// Two distinct mutable bodies out of one arena
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);

    if i > j {
        let (head, tail) = bodies.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    } else {
        let (head, tail) = bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    }
}
