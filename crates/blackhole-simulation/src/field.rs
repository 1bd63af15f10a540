//! The accretion disk as a fixed population of particles

use crate::SimulationParams;
use blackhole_physics::{BlackHole, ConfigError, Particle, Tick};
use rand::rngs::{SmallRng, StdRng};
use rand::SeedableRng;

/// What happened during one [`ParticleField::advance`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvanceStats {
    /// Particles respawned this tick
    pub recycled: usize,
    /// Particles outside the visible rim after the tick
    pub visible: usize,
}

/// Fixed-size, ordered collection of independent particles.
///
/// Every particle owns its random generator, derived from the field seed at
/// construction. Updates therefore never share state and produce the same
/// result whether they run sequentially or across threads.
pub struct ParticleField {
    particles: Vec<Particle>,
    rngs: Vec<SmallRng>,
    black_hole: BlackHole,
    frame: u64,
}

impl ParticleField {
    pub fn new(params: &SimulationParams) -> Result<Self, ConfigError> {
        let black_hole = params.validate()?;

        let mut seeder = StdRng::seed_from_u64(params.seed);
        let mut rngs: Vec<SmallRng> = (0..params.particle_count)
            .map(|_| SmallRng::from_rng(&mut seeder))
            .collect();
        let particles: Vec<Particle> = rngs
            .iter_mut()
            .map(|rng| Particle::new(&black_hole, rng))
            .collect();

        log::info!(
            "Initialized {} particles around black hole (radius {:.2}, horizon {:.2})",
            particles.len(),
            black_hole.radius(),
            black_hole.event_horizon_radius()
        );

        Ok(Self {
            particles,
            rngs,
            black_hole,
            frame: 0,
        })
    }

    /// Advance every particle by one tick.
    ///
    /// All updates complete before this returns, so the field is always read
    /// in a consistent state.
    pub fn advance(&mut self, tick: Tick) -> AdvanceStats {
        let tick = sanitize(tick);
        if tick.paused {
            return AdvanceStats {
                recycled: 0,
                visible: self.visible_count(),
            };
        }

        let recycled = self.update_all(tick);
        self.frame += 1;

        let stats = AdvanceStats {
            recycled,
            visible: self.visible_count(),
        };
        log::debug!(
            "frame {}: dt={:.4}s recycled={} visible={}",
            self.frame,
            tick.dt,
            stats.recycled,
            stats.visible
        );
        stats
    }

    #[cfg(not(feature = "parallel"))]
    fn update_all(&mut self, tick: Tick) -> usize {
        let black_hole = self.black_hole;
        self.particles
            .iter_mut()
            .zip(self.rngs.iter_mut())
            .map(|(particle, rng)| particle.update(tick, &black_hole, rng) as usize)
            .sum()
    }

    #[cfg(feature = "parallel")]
    fn update_all(&mut self, tick: Tick) -> usize {
        use rayon::prelude::*;

        let black_hole = self.black_hole;
        self.particles
            .par_iter_mut()
            .zip(self.rngs.par_iter_mut())
            .map(|(particle, rng)| particle.update(tick, &black_hole, rng) as usize)
            .sum()
    }

    /// All particles in render order
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Particles outside the visible rim, in render order
    pub fn visible(&self) -> impl Iterator<Item = &Particle> + '_ {
        let black_hole = self.black_hole;
        self.particles
            .iter()
            .filter(move |particle| particle.is_visible(&black_hole))
    }

    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn black_hole(&self) -> &BlackHole {
        &self.black_hole
    }

    /// Number of unpaused ticks applied so far
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

/// Clamp a tick the clock could not have produced to a zero-length step.
fn sanitize(tick: Tick) -> Tick {
    if tick.dt.is_finite() && tick.dt >= 0.0 {
        tick
    } else {
        log::warn!("Ignoring invalid frame delta {}", tick.dt);
        Tick { dt: 0.0, ..tick }
    }
}
