//! View and projection matrices, assembled by hand
//!
//! Both follow the classic OpenGL conventions: right-handed view space
//! looking down -Z, clip-space depth in [-1, 1], column-major storage.

use blackhole_physics::ConfigError;
use glam::{DMat4, DVec3, DVec4};

/// Vectors shorter than this cannot be normalized
const MIN_LENGTH: f64 = 1e-9;

/// Normalize `v`, rejecting vectors too short to carry a direction.
pub fn checked_normalize(v: DVec3, what: &'static str) -> Result<DVec3, ConfigError> {
    let length = v.length();
    if length.is_finite() && length > MIN_LENGTH {
        Ok(v / length)
    } else {
        Err(ConfigError::DegenerateBasis(what))
    }
}

/// View matrix for a camera at `eye` looking at `center`.
///
/// Fails when `eye == center` or when `up` is parallel to the view direction,
/// since neither leaves a unique orientation.
pub fn look_at(eye: DVec3, center: DVec3, up: DVec3) -> Result<DMat4, ConfigError> {
    let forward = checked_normalize(center - eye, "eye and center coincide")?;
    let side = checked_normalize(forward.cross(up), "up is parallel to the view direction")?;
    let up = side.cross(forward);

    // Rows are the camera basis; stored column by column
    let rotation = DMat4::from_cols(
        DVec4::new(side.x, up.x, -forward.x, 0.0),
        DVec4::new(side.y, up.y, -forward.y, 0.0),
        DVec4::new(side.z, up.z, -forward.z, 0.0),
        DVec4::W,
    );
    Ok(rotation * DMat4::from_translation(-eye))
}

/// Perspective projection with a vertical field of view in degrees.
///
/// Inputs are assumed valid, see [`validate_projection`].
pub fn perspective(fov_y_degrees: f64, aspect: f64, near: f64, far: f64) -> DMat4 {
    let f = 1.0 / (fov_y_degrees.to_radians() / 2.0).tan();
    let depth = near - far;
    DMat4::from_cols(
        DVec4::new(f / aspect, 0.0, 0.0, 0.0),
        DVec4::new(0.0, f, 0.0, 0.0),
        DVec4::new(0.0, 0.0, (far + near) / depth, -1.0),
        DVec4::new(0.0, 0.0, 2.0 * far * near / depth, 0.0),
    )
}

pub fn validate_projection(
    fov_y_degrees: f64,
    aspect: f64,
    near: f64,
    far: f64,
) -> Result<(), ConfigError> {
    if !(fov_y_degrees > 0.0 && fov_y_degrees < 180.0) {
        return Err(ConfigError::Projection(format!(
            "field of view must be in (0, 180) degrees, got {fov_y_degrees}"
        )));
    }
    if !(aspect.is_finite() && aspect > 0.0) {
        return Err(ConfigError::Projection(format!(
            "aspect ratio must be positive, got {aspect}"
        )));
    }
    if !(near > 0.0 && far.is_finite() && far > near) {
        return Err(ConfigError::Projection(format!(
            "clip planes must satisfy 0 < near < far, got near={near} far={far}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_look_at_matches_reference() {
        let cases = [
            (DVec3::new(0.0, 0.4, 2.0), DVec3::ZERO),
            (DVec3::new(1.3, -0.7, 0.2), DVec3::new(0.1, 0.2, -0.3)),
            (DVec3::new(-5.0, 2.0, -5.0), DVec3::ZERO),
        ];
        for (eye, center) in cases {
            let ours = look_at(eye, center, DVec3::Y).unwrap();
            let reference = DMat4::look_at_rh(eye, center, DVec3::Y);
            assert!(ours.abs_diff_eq(reference, EPS), "{ours} != {reference}");
        }
    }

    #[test]
    fn test_look_at_moves_eye_to_origin() {
        let eye = DVec3::new(0.0, 0.4, 2.0);
        let view = look_at(eye, DVec3::ZERO, DVec3::Y).unwrap();

        assert!(view.transform_point3(eye).abs_diff_eq(DVec3::ZERO, EPS));

        // Target lies straight ahead, down -Z
        let target = view.transform_point3(DVec3::ZERO);
        assert!(target.x.abs() < EPS && target.y.abs() < EPS);
        assert!((target.z + eye.length()).abs() < EPS);
    }

    #[test]
    fn test_look_at_rejects_coincident_eye_and_center() {
        let eye = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(
            look_at(eye, eye, DVec3::Y),
            Err(ConfigError::DegenerateBasis("eye and center coincide"))
        );
    }

    #[test]
    fn test_look_at_rejects_parallel_up() {
        let result = look_at(DVec3::new(0.0, 5.0, 0.0), DVec3::ZERO, DVec3::Y);
        assert_eq!(
            result,
            Err(ConfigError::DegenerateBasis("up is parallel to the view direction"))
        );
        assert!(look_at(DVec3::Z, DVec3::ZERO, DVec3::ZERO).is_err());
    }

    #[test]
    fn test_perspective_matches_reference() {
        let ours = perspective(65.0, 1200.0 / 900.0, 0.1, 100.0);
        let reference = DMat4::perspective_rh_gl(65f64.to_radians(), 1200.0 / 900.0, 0.1, 100.0);
        assert!(ours.abs_diff_eq(reference, EPS), "{ours} != {reference}");
    }

    #[test]
    fn test_perspective_maps_clip_planes() {
        let proj = perspective(65.0, 1.0, 0.1, 100.0);
        let near = proj.project_point3(DVec3::new(0.0, 0.0, -0.1));
        let far = proj.project_point3(DVec3::new(0.0, 0.0, -100.0));
        assert!((near.z + 1.0).abs() < 1e-9);
        assert!((far.z - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_validate_projection() {
        assert!(validate_projection(65.0, 1.5, 0.1, 100.0).is_ok());
        assert!(validate_projection(0.0, 1.5, 0.1, 100.0).is_err());
        assert!(validate_projection(180.0, 1.5, 0.1, 100.0).is_err());
        assert!(validate_projection(65.0, 0.0, 0.1, 100.0).is_err());
        assert!(validate_projection(65.0, f64::NAN, 0.1, 100.0).is_err());
        assert!(validate_projection(65.0, 1.5, 0.0, 100.0).is_err());
        assert!(validate_projection(65.0, 1.5, 10.0, 1.0).is_err());
    }

    #[test]
    fn test_checked_normalize() {
        let n = checked_normalize(DVec3::new(3.0, 0.0, 4.0), "test").unwrap();
        assert!((n.length() - 1.0).abs() < EPS);
        assert!(checked_normalize(DVec3::ZERO, "test").is_err());
        assert!(checked_normalize(DVec3::splat(f64::NAN), "test").is_err());
    }
}
