//! Orbit camera around the black hole

use crate::math::{look_at, perspective, validate_projection};
use blackhole_physics::ConfigError;
use bytemuck::{Pod, Zeroable};
use glam::{DMat4, DVec3};

pub const MIN_DISTANCE: f64 = 0.5;
pub const MAX_DISTANCE: f64 = 10.0;

/// Camera uniform for GPU
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _padding: f32,
}

/// Camera pose, mutated by input handling between frames
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    /// Distance from the black hole, clamped by [`CameraState::zoom`]
    pub distance: f64,
    /// Yaw around the black hole in radians
    pub orbit_angle_y: f64,
    /// Pitch of the scene in radians
    pub tilt_x: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl CameraState {
    pub fn zoom(&mut self, delta: f64) {
        self.distance = (self.distance + delta).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn pan(&mut self, delta_x: f64, delta_y: f64) {
        self.pan_x += delta_x;
        self.pan_y += delta_y;
    }

    pub fn rotate(&mut self, delta_yaw: f64, delta_tilt: f64) {
        self.orbit_angle_y += delta_yaw;
        self.tilt_x += delta_tilt;
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            distance: 2.0,
            orbit_angle_y: 0.0,
            tilt_x: 20.0_f64.to_radians(),
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

/// Derives view and projection matrices from a [`CameraState`].
///
/// Nothing is cached: every matrix is recomputed from the current state.
pub struct CameraRig {
    pub state: CameraState,
    /// Height of the eye above the disk plane
    pub camera_height: f64,
    aspect: f64,
    fov_y_degrees: f64,
    znear: f64,
    zfar: f64,
}

impl CameraRig {
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        let aspect = aspect_ratio(width, height)?;
        let rig = Self {
            state: CameraState::default(),
            camera_height: 0.4,
            aspect,
            fov_y_degrees: 65.0,
            znear: 0.1,
            zfar: 100.0,
        };
        validate_projection(rig.fov_y_degrees, rig.aspect, rig.znear, rig.zfar)?;
        Ok(rig)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ConfigError> {
        self.aspect = aspect_ratio(width, height)?;
        Ok(())
    }

    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    /// Eye position on the orbit. Tilt and pan move the scene, not the eye.
    pub fn eye_position(&self) -> DVec3 {
        let (sin, cos) = self.state.orbit_angle_y.sin_cos();
        DVec3::new(
            self.state.distance * sin,
            self.camera_height,
            self.state.distance * cos,
        )
    }

    /// Look at the origin, then pan and tilt the scene.
    pub fn view_matrix(&self) -> Result<DMat4, ConfigError> {
        let look = look_at(self.eye_position(), DVec3::ZERO, DVec3::Y)?;
        let pan = DMat4::from_translation(DVec3::new(self.state.pan_x, self.state.pan_y, 0.0));
        let tilt = DMat4::from_rotation_x(self.state.tilt_x);
        Ok(look * pan * tilt)
    }

    pub fn projection_matrix(&self) -> DMat4 {
        perspective(self.fov_y_degrees, self.aspect, self.znear, self.zfar)
    }

    pub fn build_view_projection_matrix(&self) -> Result<DMat4, ConfigError> {
        Ok(self.projection_matrix() * self.view_matrix()?)
    }

    pub fn to_uniform(&self) -> Result<CameraUniform, ConfigError> {
        Ok(CameraUniform {
            view_proj: self.build_view_projection_matrix()?.as_mat4().to_cols_array_2d(),
            position: self.eye_position().as_vec3().to_array(),
            _padding: 0.0,
        })
    }
}

fn aspect_ratio(width: u32, height: u32) -> Result<f64, ConfigError> {
    if width == 0 || height == 0 {
        return Err(ConfigError::Projection(format!(
            "viewport must be non-empty, got {width}x{height}"
        )));
    }
    Ok(width as f64 / height as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-12;

    fn rig() -> CameraRig {
        let mut rig = CameraRig::new(1200, 900).unwrap();
        rig.state = CameraState {
            distance: 2.0,
            orbit_angle_y: 0.0,
            tilt_x: 0.0,
            pan_x: 0.0,
            pan_y: 0.0,
        };
        rig
    }

    #[test]
    fn test_eye_orbits_around_y() {
        let mut rig = rig();
        let eye = rig.eye_position();
        assert!(eye.abs_diff_eq(DVec3::new(0.0, rig.camera_height, 2.0), EPS));

        rig.state.orbit_angle_y = 90.0_f64.to_radians();
        let eye = rig.eye_position();
        assert!(eye.abs_diff_eq(DVec3::new(2.0, rig.camera_height, 0.0), EPS));
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut state = CameraState::default();
        state.zoom(-100.0);
        assert_eq!(state.distance, MIN_DISTANCE);
        state.zoom(100.0);
        assert_eq!(state.distance, MAX_DISTANCE);
        state.zoom(-1.5);
        assert_eq!(state.distance, 8.5);
    }

    #[test]
    fn test_pan_and_rotate_accumulate() {
        let mut state = CameraState::default();
        state.pan(0.05, -0.1);
        state.pan(0.05, 0.0);
        state.rotate(FRAC_PI_2, 0.1);

        assert!((state.pan_x - 0.1).abs() < EPS);
        assert!((state.pan_y + 0.1).abs() < EPS);
        assert!((state.orbit_angle_y - FRAC_PI_2).abs() < EPS);
        assert!((state.tilt_x - (20.0_f64.to_radians() + 0.1)).abs() < EPS);
    }

    #[test]
    fn test_view_without_pan_or_tilt_is_look_at() {
        let rig = rig();
        let view = rig.view_matrix().unwrap();
        let expected = look_at(rig.eye_position(), DVec3::ZERO, DVec3::Y).unwrap();
        assert!(view.abs_diff_eq(expected, EPS));
    }

    #[test]
    fn test_pan_and_tilt_move_the_scene_not_the_eye() {
        let mut rig = rig();
        let eye = rig.eye_position();
        let look = rig.view_matrix().unwrap();

        rig.state.pan_x = 0.3;
        rig.state.pan_y = -0.2;
        rig.state.tilt_x = 0.5;
        assert_eq!(rig.eye_position(), eye);

        let view = rig.view_matrix().unwrap();
        let point = DVec3::new(0.7, 0.1, -0.4);
        let (sin, cos) = 0.5_f64.sin_cos();
        let tilted = DVec3::new(point.x, point.y * cos - point.z * sin, point.y * sin + point.z * cos);
        let moved = tilted + DVec3::new(0.3, -0.2, 0.0);

        let expected = look.transform_point3(moved);
        assert!(view.transform_point3(point).abs_diff_eq(expected, 1e-12));
    }

    #[test]
    fn test_projection_uses_viewport_aspect() {
        let mut rig = rig();
        let expected = perspective(65.0, 1200.0 / 900.0, 0.1, 100.0);
        assert_eq!(rig.projection_matrix(), expected);

        rig.resize(800, 800).unwrap();
        assert_eq!(rig.aspect(), 1.0);
        assert_eq!(rig.projection_matrix(), perspective(65.0, 1.0, 0.1, 100.0));
    }

    #[test]
    fn test_rejects_empty_viewport() {
        assert!(CameraRig::new(0, 900).is_err());
        let mut rig = rig();
        assert!(rig.resize(1200, 0).is_err());
        assert_eq!(rig.aspect(), 1200.0 / 900.0);
    }

    #[test]
    fn test_uniform() {
        let rig = rig();
        let uniform = rig.to_uniform().unwrap();
        let expected = rig.build_view_projection_matrix().unwrap().as_mat4();

        assert_eq!(uniform.view_proj, expected.to_cols_array_2d());
        assert_eq!(uniform.position, [0.0, 0.4, 2.0]);
        assert_eq!(std::mem::size_of::<CameraUniform>(), 80);
    }
}
