//! Procedural UV spheres for the event horizon and the black hole core

use blackhole_physics::{ensure_positive, ConfigError};
use bytemuck::{Pod, Zeroable};
use std::f64::consts::{PI, TAU};
use std::ops::Range;

/// Vertex with position and normal
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// How a consumer should assemble a mesh's vertices
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawMode {
    /// `indices` form a triangle list
    Triangles,
    /// Each range in `loops` is a closed line loop
    LineLoops,
}

/// Immutable sphere geometry centred on the origin.
///
/// Output depends only on `(radius, slices, stacks)`, so callers generate a
/// sphere once and keep it.
#[derive(Clone, Debug, PartialEq)]
pub struct SphereMesh {
    mode: DrawMode,
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
    loops: Vec<Range<u32>>,
}

impl SphereMesh {
    /// Solid sphere.
    ///
    /// Vertices form a `(stacks + 1) x (slices + 1)` grid, stack-major from the
    /// south pole. Consecutive stacks pair up into quad strips, which `indices`
    /// splits into two triangles per quad.
    pub fn solid(radius: f64, slices: u32, stacks: u32) -> Result<Self, ConfigError> {
        let counts = validate(radius, slices, stacks)?;

        let mut vertices = Vec::with_capacity(counts.solid_vertices as usize);
        for i in 0..=stacks {
            for j in 0..=slices {
                vertices.push(sphere_vertex(radius, i, j, slices, stacks));
            }
        }

        let row = slices + 1;
        let mut indices = Vec::with_capacity(counts.solid_indices);
        for i in 0..stacks {
            for j in 0..slices {
                let first = i * row + j;
                let second = first + row;
                indices.extend_from_slice(&[first, second, first + 1]);
                indices.extend_from_slice(&[second, second + 1, first + 1]);
            }
        }

        Ok(Self {
            mode: DrawMode::Triangles,
            vertices,
            indices,
            loops: Vec::new(),
        })
    }

    /// Wireframe sphere: one loop per longitude line, then one per latitude.
    pub fn wireframe(radius: f64, slices: u32, stacks: u32) -> Result<Self, ConfigError> {
        let counts = validate(radius, slices, stacks)?;

        let mut vertices = Vec::with_capacity(counts.wireframe_vertices as usize);
        let mut loops = Vec::with_capacity(counts.loops);

        for j in 0..slices {
            let start = vertices.len() as u32;
            vertices.extend((0..=stacks).map(|i| sphere_vertex(radius, i, j, slices, stacks)));
            loops.push(start..vertices.len() as u32);
        }
        for i in 0..stacks {
            let start = vertices.len() as u32;
            vertices.extend((0..=slices).map(|j| sphere_vertex(radius, i, j, slices, stacks)));
            loops.push(start..vertices.len() as u32);
        }

        Ok(Self {
            mode: DrawMode::LineLoops,
            vertices,
            indices: Vec::new(),
            loops,
        })
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    /// Triangle list, empty for wireframes
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Line loops as vertex ranges, empty for solid spheres
    pub fn loops(&self) -> &[Range<u32>] {
        &self.loops
    }
}

/// Buffer sizes for a sphere resolution. Vertex counts fit in `u32` so
/// every vertex stays addressable by a `u32` index.
struct MeshCounts {
    solid_vertices: u32,
    solid_indices: usize,
    wireframe_vertices: u32,
    loops: usize,
}

fn validate(radius: f64, slices: u32, stacks: u32) -> Result<MeshCounts, ConfigError> {
    ensure_positive("sphere radius", radius)?;
    if slices < 3 || stacks < 2 {
        return Err(ConfigError::MeshResolution { slices, stacks });
    }
    mesh_counts(slices, stacks).ok_or(ConfigError::MeshResolution { slices, stacks })
}

fn mesh_counts(slices: u32, stacks: u32) -> Option<MeshCounts> {
    let solid_vertices = stacks.checked_add(1)?.checked_mul(slices.checked_add(1)?)?;
    let solid_indices = usize::try_from(stacks)
        .ok()?
        .checked_mul(usize::try_from(slices).ok()?)?
        .checked_mul(6)?;
    // Longitude loops hold stacks + 1 points, latitude loops slices + 1
    let wireframe_vertices = slices
        .checked_mul(stacks.checked_add(1)?)?
        .checked_add(stacks.checked_mul(slices.checked_add(1)?)?)?;
    let loops = usize::try_from(slices).ok()?.checked_add(usize::try_from(stacks).ok()?)?;

    Some(MeshCounts {
        solid_vertices,
        solid_indices,
        wireframe_vertices,
        loops,
    })
}

/// Point at stack `i`, slice `j`. Latitude runs from -pi/2 at stack 0 to
/// pi/2 at the last stack.
fn sphere_vertex(radius: f64, i: u32, j: u32, slices: u32, stacks: u32) -> MeshVertex {
    let phi = PI * (i as f64 / stacks as f64 - 0.5);
    let theta = TAU * j as f64 / slices as f64;

    let normal = [theta.cos() * phi.cos(), phi.sin(), theta.sin() * phi.cos()];
    MeshVertex {
        position: normal.map(|n| (n * radius) as f32),
        normal: normal.map(|n| n as f32),
    }
}
