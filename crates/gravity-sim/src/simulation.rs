use log::{debug, trace};
use std::time::Duration;

use crate::body::{Body, BodyId, Shape};
use crate::collisions::{CollisionEvent, resolve_against_earlier};
use crate::config::{self, SimulationConfig};
use crate::diagnostics::Diagnostics;
use crate::error::{Result, SimError};
use crate::forces::ContactExcludedGravity;
use crate::integrator::{Integrator, SemiImplicitEuler};
use crate::vector::Vector2;

/// A world of bodies under mutual gravity and elastic collisions
///
/// The simulation owns its bodies in a contiguous arena. Registration order
/// is id order is iteration order, and bodies are never removed. Only
/// [`step`](Self::step) and the two translate methods change body state, all
/// through `&mut self`, so readers can never observe a half-finished tick.
///
/// # Examples
///
/// ```
/// use gravity_sim::body::Shape;
/// use gravity_sim::simulation::Simulation;
/// use gravity_sim::vector::Vector2;
///
/// let mut sim = Simulation::new(0.0, [1000.0, 1000.0]);
/// let small = sim
///     .add_body(20.0, Some(Vector2::new(700.0, 500.0)), None, Shape::Circle)
///     .unwrap();
/// sim.add_body(100.0, Some(Vector2::new(500.0, 500.0)), None, Shape::Circle)
///     .unwrap();
///
/// sim.step();
///
/// // No gravity and no contact: nothing moves
/// let body = sim.body(small).unwrap();
/// assert_eq!(body.position, Vector2::new(700.0, 500.0));
/// assert!(body.velocity.is_zero());
/// assert_eq!(sim.ticks(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    bodies: Vec<Body>,
    force: ContactExcludedGravity,
    integrator: SemiImplicitEuler,
    boundaries: [f64; 2],
    speed: f64,
    diagnostics: Diagnostics,
    last_collisions: Vec<CollisionEvent>,
    largest: Option<BodyId>,
    ticks: u64,
    next_id: u32,
}

impl Simulation {
    /// Creates an empty world
    ///
    /// # Arguments
    ///
    /// * `gravity` - Gravitational constant in simulation units
    /// * `boundaries` - World width and height
    pub fn new(gravity: f64, boundaries: [f64; 2]) -> Self {
        Self {
            bodies: Vec::new(),
            force: ContactExcludedGravity::new(gravity),
            integrator: SemiImplicitEuler,
            boundaries,
            speed: SimulationConfig::default().speed,
            diagnostics: Diagnostics::default(),
            last_collisions: Vec::new(),
            largest: None,
            ticks: 0,
            next_id: 0,
        }
    }

    /// Creates an empty world from a validated configuration
    ///
    /// # Errors
    ///
    /// Whatever [`SimulationConfig::validate`] rejects.
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;

        let mut sim = Self::new(config.gravity, config.boundaries);
        sim.speed = config.speed;
        Ok(sim)
    }

    /// Registers a body and returns its id
    ///
    /// A missing position places the body at the centre of the boundaries
    /// (rounded down to whole units); a missing velocity means at rest.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidBody`] when `mass` is not a positive finite number.
    /// The simulation is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity_sim::body::Shape;
    /// use gravity_sim::simulation::Simulation;
    /// use gravity_sim::vector::Vector2;
    ///
    /// let mut sim = Simulation::new(0.01, [1000.0, 800.0]);
    /// let id = sim.add_body(5.0, None, None, Shape::Circle).unwrap();
    ///
    /// assert_eq!(sim.body(id).unwrap().position, Vector2::new(500.0, 400.0));
    /// assert!(sim.add_body(0.0, None, None, Shape::Circle).is_err());
    /// assert_eq!(sim.body_count(), 1);
    /// ```
    pub fn add_body(
        &mut self,
        mass: f64,
        position: Option<Vector2>,
        velocity: Option<Vector2>,
        shape: Shape,
    ) -> Result<BodyId> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidBody { mass });
        }

        let id = BodyId(self.next_id);
        self.next_id += 1;

        let position = position.unwrap_or_else(|| self.center());
        let body =
            Body::new(id, mass, shape, position).with_velocity(velocity.unwrap_or_default());

        let is_largest = self
            .largest_body()
            .map_or(true, |largest| mass > largest.mass);
        if is_largest {
            self.largest = Some(id);
        }

        debug!("registered body {} (mass {mass}) at {position}", id.0);
        self.bodies.push(body);
        Ok(id)
    }

    /// Advances the world by exactly one tick
    ///
    /// 1. Diagnostics are measured from the state left by the previous tick.
    /// 2. Each body, in id order, gets its acceleration recomputed from all
    ///    other bodies, is integrated, and is then resolved against every
    ///    earlier body it overlaps.
    ///
    /// Later bodies therefore see the already-updated positions of earlier
    /// ones within the same tick.
    pub fn step(&mut self) {
        self.diagnostics = Diagnostics::measure(&self.bodies);
        trace!(
            "tick {}: kinetic energy {:.6}, momentum {:.6}",
            self.ticks,
            self.diagnostics.total_kinetic_energy,
            self.diagnostics.total_momentum
        );

        self.last_collisions.clear();
        for idx in 0..self.bodies.len() {
            self.integrator.advance(idx, &mut self.bodies, &self.force);
            let events = resolve_against_earlier(idx, &mut self.bodies);
            self.last_collisions.extend(events);
        }

        self.ticks += 1;
    }

    /// Runs `n` ticks back to back
    pub fn run(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Moves one body by `delta` without touching its velocity
    ///
    /// For interactive panning. The next tick treats the new position like
    /// any other.
    ///
    /// # Errors
    ///
    /// [`SimError::UnknownBody`] if no body has this id.
    pub fn translate_body(&mut self, id: BodyId, delta: Vector2) -> Result<()> {
        let body = self
            .bodies
            .get_mut(id.0 as usize)
            .ok_or(SimError::UnknownBody(id))?;
        body.position += delta;
        Ok(())
    }

    /// Moves every body by `delta`, as a camera drag does
    pub fn translate_all(&mut self, delta: Vector2) {
        self.bodies.iter_mut().for_each(|b| b.position += delta);
    }

    /// Bodies in id order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Ids are arena indices since bodies are never removed
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0 as usize)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Diagnostics measured at the start of the last tick
    ///
    /// All zero before the first tick. Use [`measure`](Self::measure) for the
    /// current state.
    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics
    }

    /// Diagnostics of the current state, without advancing
    pub fn measure(&self) -> Diagnostics {
        Diagnostics::measure(&self.bodies)
    }

    /// Collisions resolved during the last tick, in resolution order
    pub fn last_collisions(&self) -> &[CollisionEvent] {
        &self.last_collisions
    }

    /// The heaviest body registered so far; the earlier one wins a tie
    pub fn largest_body(&self) -> Option<&Body> {
        self.largest.and_then(|id| self.body(id))
    }

    /// Number of ticks advanced so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn gravity(&self) -> f64 {
        self.force.gravity
    }

    pub fn boundaries(&self) -> [f64; 2] {
        self.boundaries
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Delay a render loop should leave between ticks of this world
    pub fn tick_interval(&self) -> Duration {
        config::tick_interval(self.speed)
    }

    fn center(&self) -> Vector2 {
        let [width, height] = self.boundaries;
        Vector2::new((width / 2.0).trunc(), (height / 2.0).trunc())
    }
}
