//! World configuration

use serde::Deserialize;
use std::time::Duration;

use crate::error::{Result, SimError};

/// Render-loop frames per second at `speed == 1`
pub const BASE_FRAME_RATE: f64 = 60.0;

/// Parameters of a simulated world
///
/// Missing fields fall back to the defaults below when deserialised.
///
/// ```yaml
/// gravity: 5.0          # gravitational constant in simulation units
/// speed: 2.0            # ticks run `speed` times faster than 60 per second
/// boundaries: [1000, 1000]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub gravity: f64,
    pub speed: f64,
    /// Width and height of the world; bodies without a position start at
    /// its centre
    pub boundaries: [f64; 2],
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: 0.01,
            speed: 1.0,
            boundaries: [1000.0, 1000.0],
        }
    }
}

impl SimulationConfig {
    /// Check that every value is usable
    ///
    /// # Errors
    ///
    /// [`SimError::Scenario`] for a non-finite gravity, a non-positive speed,
    /// or non-positive boundaries.
    pub fn validate(&self) -> Result<()> {
        if !self.gravity.is_finite() {
            return Err(SimError::Scenario(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(SimError::Scenario(format!(
                "speed must be positive, got {}",
                self.speed
            )));
        }
        if self
            .boundaries
            .iter()
            .any(|extent| !(extent.is_finite() && *extent > 0.0))
        {
            return Err(SimError::Scenario(format!(
                "boundaries must be positive, got {:?}",
                self.boundaries
            )));
        }
        Ok(())
    }

    /// Wall-clock delay between ticks for a render loop running this world
    ///
    /// Whole milliseconds, truncated: 16 ms at speed 1, 8 ms at speed 2.
    pub fn tick_interval(&self) -> Duration {
        tick_interval(self.speed)
    }
}

pub(crate) fn tick_interval(speed: f64) -> Duration {
    Duration::from_millis((1000.0 / speed / BASE_FRAME_RATE) as u64)
}
