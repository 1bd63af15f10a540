//! # Black Hole Physics
//!
//! Per-particle model of an accretion disk: orbital decay, radial infall,
//! fading and trail history, plus the artistic lensing warp applied to
//! everything drawn near the black hole.

pub mod black_hole;
pub mod constants;
pub mod error;
pub mod lensing;
pub mod particle;
pub mod trail;

pub use black_hole::*;
pub use constants::*;
pub use error::*;
pub use lensing::*;
pub use particle::*;
pub use trail::*;
