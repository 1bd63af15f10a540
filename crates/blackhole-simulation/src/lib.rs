//! # Black Hole Simulation
//!
//! Frame-stepped accretion disk: a fixed population of particles advanced
//! once per rendered frame from a wall-clock delta.

pub mod clock;
pub mod field;
pub mod params;

pub use blackhole_physics::Tick;
pub use clock::*;
pub use field::*;
pub use params::*;
