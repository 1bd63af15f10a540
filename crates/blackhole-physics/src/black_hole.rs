//! The central black hole the disk orbits

use crate::constants::{BLACK_HOLE_RADIUS, EVENT_HORIZON_RADIUS};
use crate::error::{ensure_positive, ConfigError};

/// Validated black hole dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackHole {
    radius: f64,
    event_horizon_radius: f64,
}

impl BlackHole {
    pub fn new(radius: f64, event_horizon_radius: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            radius: ensure_positive("black hole radius", radius)?,
            event_horizon_radius: ensure_positive("event horizon radius", event_horizon_radius)?,
        })
    }

    /// Radius of the dark core, also the centre of the lensing warp
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Orbits below this radius are consumed
    pub fn event_horizon_radius(&self) -> f64 {
        self.event_horizon_radius
    }
}

impl Default for BlackHole {
    fn default() -> Self {
        Self {
            radius: BLACK_HOLE_RADIUS,
            event_horizon_radius: EVENT_HORIZON_RADIUS,
        }
    }
}
