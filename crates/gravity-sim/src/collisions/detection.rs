//! Overlap detection between circular bodies

use serde::Serialize;

use crate::body::{Body, BodyId};

/// A detected overlap between two bodies
///
/// `body_a` is the body doing the scan and `body_b` the earlier-registered
/// one, so `body_b < body_a` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CollisionEvent {
    pub body_a: BodyId,
    pub body_b: BodyId,
    /// Centre-to-centre distance when the overlap was found
    pub separation: f64,
    /// Summed radii the separation fell below
    pub contact_distance: f64,
}

impl CollisionEvent {
    /// How far the two circles interpenetrate
    pub fn penetration(&self) -> f64 {
        self.contact_distance - self.separation
    }
}

/// Check whether `a` overlaps an earlier body `b`
///
/// Returns `None` unless both bodies are circles and their centres are
/// strictly closer than the sum of their radii. The pair is only considered
/// from the side of the larger id; asking the other way round yields `None`
/// so a pair can never be reported twice.
///
/// # Examples
///
/// ```
/// use gravity_sim::body::{Body, BodyId, Shape};
/// use gravity_sim::collisions::check_pair;
/// use gravity_sim::vector::Vector2;
///
/// let a = Body::new(BodyId(1), 10.0, Shape::Circle, Vector2::new(15.0, 0.0));
/// let b = Body::new(BodyId(0), 10.0, Shape::Circle, Vector2::new(0.0, 0.0));
///
/// let event = check_pair(&a, &b).unwrap();
/// assert_eq!(event.contact_distance, 20.0);
/// assert!(check_pair(&b, &a).is_none());
/// ```
pub fn check_pair(a: &Body, b: &Body) -> Option<CollisionEvent> {
    if b.id >= a.id || !a.is_collidable() || !b.is_collidable() {
        return None;
    }

    let separation = a.distance_to(b);
    let contact_distance = a.radius() + b.radius();

    (separation < contact_distance).then_some(CollisionEvent {
        body_a: a.id,
        body_b: b.id,
        separation,
        contact_distance,
    })
}

/// Finds overlapping pairs without changing any body
pub trait CollisionDetector: Send + Sync {
    /// Every overlapping pair in the arena, ordered by scanning body then
    /// earlier body
    fn detect(&self, bodies: &[Body]) -> Vec<CollisionEvent>;
}

/// Exhaustive O(N²) detector
///
/// Reports the overlaps present in a snapshot, for instance to highlight
/// contacts when drawing a frame. The step itself interleaves detection with
/// resolution, see [`resolve_against_earlier`](super::resolve_against_earlier).
pub struct DirectDetector;

impl CollisionDetector for DirectDetector {
    fn detect(&self, bodies: &[Body]) -> Vec<CollisionEvent> {
        bodies
            .iter()
            .flat_map(|a| bodies.iter().filter_map(move |b| check_pair(a, b)))
            .collect()
    }
}
