//! Accretion disk particles

use crate::black_hole::BlackHole;
use crate::constants::*;
use crate::lensing;
use crate::trail::Trail;
use glam::DVec3;
use rand::Rng;
use std::f64::consts::TAU;

/// One simulation step as seen by a particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Seconds since the previous tick
    pub dt: f64,
    /// While set, updates leave every particle untouched
    pub paused: bool,
}

impl Tick {
    pub fn new(dt: f64) -> Self {
        Self { dt, paused: false }
    }

    pub fn paused(dt: f64) -> Self {
        Self { dt, paused: true }
    }
}

/// A unit of matter orbiting in the accretion disk.
///
/// Particles spiral slowly inwards and fade out. Once one crosses the event
/// horizon or runs out of life it is respawned in place, so the disk never
/// loses particles.
#[derive(Debug, Clone)]
pub struct Particle {
    radial_distance: f64,
    /// Radians, grows without bound
    orbital_angle: f64,
    /// Vestigial disk thickness, decays but is not drawn
    height_offset: f64,
    angular_speed: f64,
    visual_size: f64,
    color: [f32; 3],
    life: f64,
    trail: Trail,
}

impl Particle {
    /// Spawn a freshly randomized particle.
    pub fn new<R: Rng + ?Sized>(black_hole: &BlackHole, rng: &mut R) -> Self {
        let mut particle = Self {
            radial_distance: black_hole.event_horizon_radius(),
            orbital_angle: 0.0,
            height_offset: 0.0,
            angular_speed: 0.0,
            visual_size: MIN_VISUAL_SIZE,
            color: [0.0; 3],
            life: 1.0,
            trail: Trail::new(),
        };
        particle.reset(black_hole, rng);
        particle
    }

    /// Respawn somewhere in the band just outside the event horizon.
    pub fn reset<R: Rng + ?Sized>(&mut self, black_hole: &BlackHole, rng: &mut R) {
        let horizon = black_hole.event_horizon_radius();

        self.radial_distance = horizon + rng.random_range(0.0..SPAWN_BAND);
        self.orbital_angle = rng.random_range(0.0..TAU);
        self.height_offset = rng.random_range(-HEIGHT_JITTER..HEIGHT_JITTER);
        self.angular_speed = (MIN_ANGULAR_SPEED + rng.random_range(0.0..ANGULAR_SPEED_SPREAD))
            / (self.radial_distance * self.radial_distance);
        self.visual_size = MIN_VISUAL_SIZE + rng.random_range(0.0..VISUAL_SIZE_SPREAD);
        self.color = temperature_color(self.radial_distance, horizon);
        self.life = 1.0;

        self.trail.clear();
        self.trail.push_front(self.lensed_position(black_hole.radius()));
    }

    /// Advance by one tick. Returns true if the particle was recycled.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        tick: Tick,
        black_hole: &BlackHole,
        rng: &mut R,
    ) -> bool {
        if tick.paused {
            return false;
        }

        let dt = tick.dt;
        self.orbital_angle += self.angular_speed * dt;
        self.radial_distance -= INFALL_RATE * dt;
        self.height_offset *= HEIGHT_DECAY;
        self.life -= LIFE_DECAY * dt;

        self.trail.push_front(self.lensed_position(black_hole.radius()));

        if self.radial_distance < black_hole.event_horizon_radius() || self.life <= 0.0 {
            self.reset(black_hole, rng);
            return true;
        }
        false
    }

    /// Position in the disk plane, before lensing
    pub fn disk_position(&self) -> DVec3 {
        let (sin, cos) = self.orbital_angle.sin_cos();
        DVec3::new(self.radial_distance * cos, 0.0, self.radial_distance * sin)
    }

    /// Render position with the lensing warp applied
    pub fn lensed_position(&self, black_hole_radius: f64) -> DVec3 {
        let p = self.disk_position();
        DVec3::new(p.x, lensing::warp(p.x, p.z, black_hole_radius).y, p.z)
    }

    /// Outside the visible rim of the black hole
    pub fn is_visible(&self, black_hole: &BlackHole) -> bool {
        lensing::is_visible(self.radial_distance, black_hole.radius())
    }

    /// Point size in pixels, magnified by lensing
    pub fn point_size(&self, black_hole: &BlackHole) -> f64 {
        let magnification = lensing::point_size_multiplier(
            self.radial_distance,
            self.orbital_angle,
            black_hole.radius(),
        );
        self.visual_size * POINT_SIZE_SCALE * magnification
    }

    /// Base color dimmed by remaining life
    pub fn faded_color(&self) -> [f32; 3] {
        let life = self.life as f32;
        self.color.map(|c| c * life)
    }

    /// Alpha of trail vertex `index`, fading towards the oldest entry
    pub fn trail_alpha(&self, index: usize) -> f64 {
        let len = self.trail.len().max(1) as f64;
        (1.0 - index as f64 / len) * self.life
    }

    pub fn radial_distance(&self) -> f64 {
        self.radial_distance
    }

    pub fn orbital_angle(&self) -> f64 {
        self.orbital_angle
    }

    pub fn height_offset(&self) -> f64 {
        self.height_offset
    }

    pub fn angular_speed(&self) -> f64 {
        self.angular_speed
    }

    pub fn visual_size(&self) -> f64 {
        self.visual_size
    }

    pub fn color(&self) -> [f32; 3] {
        self.color
    }

    pub fn life(&self) -> f64 {
        self.life
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }
}

/// Red to yellow gradient, hottest at the event horizon.
fn temperature_color(radial_distance: f64, event_horizon_radius: f64) -> [f32; 3] {
    let t = (1.0 - (radial_distance - event_horizon_radius) / SPAWN_BAND).clamp(0.0, 1.0);
    [
        (0.9 + 0.1 * t) as f32,
        (0.3 + 0.5 * t) as f32,
        (0.1 * t) as f32,
    ]
}
