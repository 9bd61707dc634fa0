//! Collision detection and resolution between circular bodies
//!
//! Detection finds overlapping circle pairs; resolution applies an elastic
//! impulse along the contact normal and nudges the pair apart.

pub mod detection;
pub mod resolution;

#[cfg(test)]
mod resolution_test;

pub use detection::{CollisionDetector, CollisionEvent, DirectDetector, check_pair};
pub use resolution::{POSITIONAL_CORRECTION, resolve_against_earlier, resolve_elastic};
