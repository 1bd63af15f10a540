//! Simulation constants for the accretion disk
//!
//! These are artistic values tuned for a real-time visualization rather than
//! physical units. Distances are in scene units, rates are per second of
//! simulated time.

/// Radius of the rendered black hole core
pub const BLACK_HOLE_RADIUS: f64 = 0.4;

/// Innermost orbit before a particle is consumed and recycled
pub const EVENT_HORIZON_RADIUS: f64 = 0.6;

/// Width of the band (outward from the event horizon) new particles spawn in
pub const SPAWN_BAND: f64 = 1.5;

/// Number of recent positions kept per particle
pub const TRAIL_LENGTH: usize = 8;

/// Radial infall per second
pub const INFALL_RATE: f64 = 0.00005;

/// Multiplicative decay applied to the height perturbation every update
pub const HEIGHT_DECAY: f64 = 0.998;

/// Half-range of the initial height perturbation
pub const HEIGHT_JITTER: f64 = 0.05;

/// Life lost per second
pub const LIFE_DECAY: f64 = 0.0001;

// Angular speed is (MIN + U[0, SPREAD)) / r², a Keplerian-like falloff
pub const MIN_ANGULAR_SPEED: f64 = 0.3;
pub const ANGULAR_SPEED_SPREAD: f64 = 0.7;

// Visual size is drawn from [MIN, MIN + SPREAD)
pub const MIN_VISUAL_SIZE: f64 = 0.015;
pub const VISUAL_SIZE_SPREAD: f64 = 0.03;

/// Peak vertical displacement produced by the lensing warp
pub const MAX_WARP: f64 = 0.45;

/// Gaussian falloff of the warp with distance from the black hole radius
pub const WARP_FALLOFF: f64 = 1.6;

/// Strength of the lensing magnification on point size
pub const LENS_MAGNIFICATION: f64 = 0.7;

/// Amplitude of the angular point-size ripple
pub const SIZE_RIPPLE: f64 = 0.3;

/// Angular frequency of the point-size ripple
pub const SIZE_RIPPLE_FREQUENCY: f64 = 5.0;

/// Particles closer than `BLACK_HOLE_RADIUS * VISIBLE_RIM_FACTOR` are not drawn
pub const VISIBLE_RIM_FACTOR: f64 = 1.1;

/// Converts a particle's visual size into a point size in pixels
pub const POINT_SIZE_SCALE: f64 = 120.0;
