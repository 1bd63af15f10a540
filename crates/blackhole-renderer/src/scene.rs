//! Per-frame geometry handed to a rendering backend
//!
//! The scene owns everything static (horizon and core spheres, lensing and
//! photon rings) and a set of reusable buffers it refills from the particle
//! field each frame. Draw order is: horizon glow, particle trails and
//! sprites, rings, then the opaque core on top.

use crate::camera::{CameraRig, CameraUniform};
use crate::mesh::SphereMesh;
use blackhole_physics::{lensing, BlackHole, ConfigError};
use blackhole_simulation::ParticleField;
use bytemuck::{Pod, Zeroable};
use glam::DMat4;
use std::f64::consts::TAU;
use std::ops::Range;

const HORIZON_GLOW_LAYERS: usize = 3;
const HORIZON_RESOLUTION: u32 = 32;
const CORE_RESOLUTION: u32 = 64;

const LENSING_RING_COUNT: usize = 5;
const LENSING_RING_SEGMENTS: usize = 36;
const LENSING_RING_COLOR: [f32; 4] = [0.9, 0.6, 0.1, 0.1];

const PHOTON_RING_COUNT: usize = 10;
const PHOTON_RING_SEGMENTS: usize = 256;
const PHOTON_RING_COLOR: [f32; 3] = [1.0, 0.6, 0.2];

const GLOW_COLOR: [f32; 3] = [0.8, 0.4, 0.1];
const CORE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// A particle drawn as a point
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ParticleSprite {
    pub position: [f32; 3],
    /// Point size in pixels
    pub point_size: f32,
    pub color: [f32; 4],
}

/// Colored vertex for trails and rings
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// Closed ring of line segments in the disk plane, lensed
#[derive(Clone, Debug, PartialEq)]
pub struct LineLoop {
    pub vertices: Vec<LineVertex>,
}

/// Which of the scene's spheres an instance draws
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneMesh {
    Horizon,
    Core,
}

/// A sphere placed in the scene
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshInstance {
    pub mesh: SceneMesh,
    pub scale: f32,
    pub translation: [f32; 3],
    pub color: [f32; 4],
}

/// Everything a backend needs to draw one frame
pub struct Frame<'a> {
    pub view: DMat4,
    pub projection: DMat4,
    pub camera: CameraUniform,
    /// Visible particles in field order
    pub sprites: &'a [ParticleSprite],
    pub trail_vertices: &'a [LineVertex],
    /// One line strip per sprite, indexing `trail_vertices`, newest point first
    pub trails: &'a [Range<u32>],
    pub rings: &'a [LineLoop],
    /// Horizon glow layers first, core last
    pub meshes: &'a [MeshInstance],
    horizon: &'a SphereMesh,
    core: &'a SphereMesh,
}

impl Frame<'_> {
    pub fn mesh(&self, mesh: SceneMesh) -> &SphereMesh {
        match mesh {
            SceneMesh::Horizon => self.horizon,
            SceneMesh::Core => self.core,
        }
    }
}

/// Consumer of assembled frames, typically a GPU backend
pub trait GeometrySink {
    fn submit(&mut self, frame: &Frame<'_>);
}

pub struct Scene {
    horizon: SphereMesh,
    core: SphereMesh,
    rings: Vec<LineLoop>,
    meshes: Vec<MeshInstance>,

    sprites: Vec<ParticleSprite>,
    trail_vertices: Vec<LineVertex>,
    trails: Vec<Range<u32>>,
}

impl Scene {
    pub fn new(black_hole: &BlackHole) -> Result<Self, ConfigError> {
        let horizon = SphereMesh::wireframe(
            black_hole.event_horizon_radius(),
            HORIZON_RESOLUTION,
            HORIZON_RESOLUTION,
        )?;
        let core = SphereMesh::solid(black_hole.radius(), CORE_RESOLUTION, CORE_RESOLUTION)?;

        let mut rings = lensing_rings(black_hole);
        rings.extend(photon_rings(black_hole));

        let mut meshes: Vec<MeshInstance> = (0..HORIZON_GLOW_LAYERS)
            .map(|i| {
                let [r, g, b] = GLOW_COLOR;
                MeshInstance {
                    mesh: SceneMesh::Horizon,
                    scale: 1.0 + i as f32 * 0.05,
                    translation: [0.0; 3],
                    color: [r, g, b, 0.2 - i as f32 * 0.05],
                }
            })
            .collect();
        meshes.push(MeshInstance {
            mesh: SceneMesh::Core,
            scale: 1.0,
            translation: [0.0; 3],
            color: CORE_COLOR,
        });

        log::info!(
            "Scene ready: {} horizon vertices, {} core vertices, {} rings",
            horizon.vertices().len(),
            core.vertices().len(),
            rings.len()
        );

        Ok(Self {
            horizon,
            core,
            rings,
            meshes,
            sprites: Vec::new(),
            trail_vertices: Vec::new(),
            trails: Vec::new(),
        })
    }

    /// Assemble the frame for the field's current state.
    ///
    /// Must be called after the field has been advanced for this tick.
    pub fn build_frame(
        &mut self,
        camera: &CameraRig,
        field: &ParticleField,
    ) -> Result<Frame<'_>, ConfigError> {
        let view = camera.view_matrix()?;
        let projection = camera.projection_matrix();
        let uniform = camera.to_uniform()?;

        self.sprites.clear();
        self.trail_vertices.clear();
        self.trails.clear();

        let black_hole = field.black_hole();
        for particle in field.visible() {
            let [r, g, b] = particle.color();
            let start = self.trail_vertices.len() as u32;
            for (i, position) in particle.trail().iter().enumerate() {
                self.trail_vertices.push(LineVertex {
                    position: position.as_vec3().to_array(),
                    color: [r, g, b, particle.trail_alpha(i) as f32],
                });
            }
            self.trails.push(start..self.trail_vertices.len() as u32);

            let position = particle
                .trail()
                .newest()
                .unwrap_or_else(|| particle.lensed_position(black_hole.radius()));
            let [r, g, b] = particle.faded_color();
            self.sprites.push(ParticleSprite {
                position: position.as_vec3().to_array(),
                point_size: particle.point_size(black_hole) as f32,
                color: [r, g, b, 1.0],
            });
        }

        Ok(Frame {
            view,
            projection,
            camera: uniform,
            sprites: &self.sprites,
            trail_vertices: &self.trail_vertices,
            trails: &self.trails,
            rings: &self.rings,
            meshes: &self.meshes,
            horizon: &self.horizon,
            core: &self.core,
        })
    }

    /// Build a frame and hand it to `sink`.
    pub fn render(
        &mut self,
        camera: &CameraRig,
        field: &ParticleField,
        sink: &mut dyn GeometrySink,
    ) -> Result<(), ConfigError> {
        let frame = self.build_frame(camera, field)?;
        sink.submit(&frame);
        Ok(())
    }

    pub fn rings(&self) -> &[LineLoop] {
        &self.rings
    }

    pub fn meshes(&self) -> &[MeshInstance] {
        &self.meshes
    }
}

/// Faint rings spaced outward from the horizon
fn lensing_rings(black_hole: &BlackHole) -> Vec<LineLoop> {
    (1..=LENSING_RING_COUNT)
        .map(|i| {
            let radius = black_hole.event_horizon_radius() * 1.5 + i as f64 * 0.3;
            lensed_ring(radius, LENSING_RING_SEGMENTS, black_hole.radius(), LENSING_RING_COLOR)
        })
        .collect()
}

/// Tight bright rings just outside the core, fading outward
fn photon_rings(black_hole: &BlackHole) -> Vec<LineLoop> {
    let base = black_hole.radius() * 1.45;
    let [r, g, b] = PHOTON_RING_COLOR;
    (0..PHOTON_RING_COUNT)
        .filter_map(|i| {
            let alpha = 0.08 - i as f64 * 0.02;
            // Rings that have faded out entirely are skipped
            if alpha <= 1e-9 {
                return None;
            }
            let radius = base + i as f64 * 0.01;
            Some(lensed_ring(
                radius,
                PHOTON_RING_SEGMENTS,
                black_hole.radius(),
                [r, g, b, alpha as f32],
            ))
        })
        .collect()
}

fn lensed_ring(radius: f64, segments: usize, black_hole_radius: f64, color: [f32; 4]) -> LineLoop {
    let vertices = (0..segments)
        .map(|j| {
            let (sin, cos) = (TAU * j as f64 / segments as f64).sin_cos();
            let (x, z) = (radius * cos, radius * sin);
            let y = lensing::warp(x, z, black_hole_radius).y;
            LineVertex {
                position: [x as f32, y as f32, z as f32],
                color,
            }
        })
        .collect();
    LineLoop { vertices }
}
