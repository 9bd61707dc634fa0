//! Scenario files: a world plus the bodies it starts with
//!
//! Scenarios are YAML documents:
//!
//! ```yaml
//! world:
//!   gravity: 5.0
//!   speed: 2.0
//!   boundaries: [1000, 1000]
//!
//! bodies:
//!   - body:
//!       mass: 20
//!       position: [700, 500]
//!   - belt:                  # a row of bodies with random masses
//!       count: 5
//!       mass_min: 5
//!       mass_max: 15
//!       start: [0, 800]
//!       spacing: [200, 0]
//!       seed: 42
//!   - body:
//!       mass: 20
//!       position: [900, 600]
//!       velocity: [0, 1]
//! ```
//!
//! Entries are registered in file order, which fixes body ids.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use serde::Deserialize;

use crate::body::Shape;
use crate::config::SimulationConfig;
use crate::error::{Result, SimError};
use crate::simulation::Simulation;
use crate::vector::Vector2;

/// Top-level scenario document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub world: SimulationConfig,
    #[serde(default)]
    pub bodies: Vec<SceneEntry>,
}

/// One entry of the `bodies` list
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneEntry {
    Body(BodyConfig),
    Belt(BeltConfig),
}

/// A single body
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    pub mass: f64,
    /// Centre of the world when omitted
    #[serde(default)]
    pub position: Option<Vector2>,
    #[serde(default)]
    pub velocity: Option<Vector2>,
    #[serde(default)]
    pub shape: Shape,
}

/// A row of `count` bodies with integer masses drawn from
/// `[mass_min, mass_max)`
///
/// Body `i` sits at `start + spacing * i`. The masses depend only on `seed`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BeltConfig {
    pub count: u32,
    pub mass_min: u32,
    pub mass_max: u32,
    pub start: Vector2,
    pub spacing: Vector2,
    #[serde(default)]
    pub velocity: Option<Vector2>,
    pub seed: u64,
}

impl BeltConfig {
    /// Expand the belt into concrete bodies
    ///
    /// # Errors
    ///
    /// [`SimError::Scenario`] unless `1 <= mass_min < mass_max`.
    pub fn generate(&self) -> Result<Vec<BodyConfig>> {
        if self.mass_min == 0 || self.mass_min >= self.mass_max {
            return Err(SimError::Scenario(format!(
                "belt masses must satisfy 1 <= mass_min < mass_max, got {}..{}",
                self.mass_min, self.mass_max
            )));
        }

        let mut rng = ChaChaRng::seed_from_u64(self.seed);

        Ok((0..self.count)
            .map(|i| BodyConfig {
                mass: f64::from(rng.random_range(self.mass_min..self.mass_max)),
                position: Some(self.start + self.spacing * f64::from(i)),
                velocity: self.velocity,
                shape: Shape::Circle,
            })
            .collect())
    }
}

impl ScenarioConfig {
    /// Parse a scenario from YAML text
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity_sim::scenario::ScenarioConfig;
    ///
    /// let yaml = "
    /// world:
    ///   gravity: 0.0
    /// bodies:
    ///   - body: { mass: 20, position: [700, 500] }
    ///   - body: { mass: 100, position: [500, 500] }
    /// ";
    ///
    /// let sim = ScenarioConfig::from_yaml_str(yaml).unwrap().build().unwrap();
    /// assert_eq!(sim.body_count(), 2);
    /// assert_eq!(sim.gravity(), 0.0);
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a scenario from any reader, e.g. an open file
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// The startup world of the desktop viewer
    ///
    /// Only the masses of the five-body belt depend on `seed`.
    pub fn default_scene(seed: u64) -> Self {
        let body = |mass: f64, position: [f64; 2], velocity: [f64; 2]| {
            SceneEntry::Body(BodyConfig {
                mass,
                position: Some(position.into()),
                velocity: Some(velocity.into()),
                shape: Shape::Circle,
            })
        };

        Self {
            world: SimulationConfig {
                gravity: 5.0,
                speed: 2.0,
                ..SimulationConfig::default()
            },
            bodies: vec![
                body(20.0, [700.0, 500.0], [0.0, 0.0]),
                SceneEntry::Belt(BeltConfig {
                    count: 5,
                    mass_min: 5,
                    mass_max: 15,
                    start: Vector2::new(0.0, 800.0),
                    spacing: Vector2::new(200.0, 0.0),
                    velocity: None,
                    seed,
                }),
                body(20.0, [900.0, 600.0], [0.0, 1.0]),
                body(20.0, [800.0, 500.0], [0.0, 1.0]),
                body(100.0, [500.0, 500.0], [0.0, 0.0]),
            ],
        }
    }

    /// Create the simulation and register every entry in order
    ///
    /// # Errors
    ///
    /// An invalid world, an invalid belt, or a body with a non-positive mass.
    pub fn build(&self) -> Result<Simulation> {
        let mut sim = Simulation::from_config(&self.world)?;

        for entry in &self.bodies {
            match entry {
                SceneEntry::Body(body) => add_configured(&mut sim, body)?,
                SceneEntry::Belt(belt) => {
                    for body in belt.generate()? {
                        add_configured(&mut sim, &body)?;
                    }
                }
            }
        }

        Ok(sim)
    }
}

fn add_configured(sim: &mut Simulation, body: &BodyConfig) -> Result<()> {
    sim.add_body(body.mass, body.position, body.velocity, body.shape)?;
    Ok(())
}
