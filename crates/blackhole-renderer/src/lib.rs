//! # Black Hole Renderer
//!
//! Camera, projection and geometry for visualizing the accretion disk. This
//! crate prepares vertex streams and matrices; issuing draw calls is left to
//! a [`GeometrySink`] implementation.

pub mod camera;
pub mod math;
pub mod mesh;
pub mod scene;

pub use camera::*;
pub use mesh::*;
pub use scene::*;
