//! Simulation parameters

use blackhole_physics::{BlackHole, ConfigError, BLACK_HOLE_RADIUS, EVENT_HORIZON_RADIUS};

/// Default disk population
pub const DEFAULT_PARTICLE_COUNT: usize = 20_000;

/// Tunable inputs for a [`ParticleField`](crate::ParticleField)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParams {
    /// Number of particles, constant for the lifetime of the field
    pub particle_count: usize,
    /// Radius of the dark core and centre of the lensing warp
    pub black_hole_radius: f64,
    /// Particles below this radius are recycled
    pub event_horizon_radius: f64,
    /// Seed for every random draw the field makes
    pub seed: u64,
}

impl SimulationParams {
    pub fn with_particle_count(mut self, particle_count: usize) -> Self {
        self.particle_count = particle_count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check every parameter and build the black hole they describe.
    pub fn validate(&self) -> Result<BlackHole, ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::EmptyField);
        }
        BlackHole::new(self.black_hole_radius, self.event_horizon_radius)
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            black_hole_radius: BLACK_HOLE_RADIUS,
            event_horizon_radius: EVENT_HORIZON_RADIUS,
            seed: 0x5EED_B1AC_401E,
        }
    }
}
