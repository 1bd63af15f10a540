//! Artistic gravitational lensing
//!
//! Light bending is not ray traced. Instead, points in the disk plane are
//! displaced vertically by a Gaussian bump centred on the black hole radius,
//! signed by which side of the hole they sit on, and drawn larger the closer
//! they are to the hole. The same warp shapes the particle trails and the
//! static rings around the horizon.

use crate::constants::*;

/// Result of warping a point in the disk plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensWarp {
    /// Vertical render offset
    pub y: f64,
    /// Multiplier applied to the point's base size
    pub size_multiplier: f64,
}

/// Vertical displacement of the disk-plane point `(x, z)`.
///
/// `sin(atan2(z, x)) * MAX_WARP * exp(-(WARP_FALLOFF * (r - radius))²)`
pub fn vertical_warp(x: f64, z: f64, black_hole_radius: f64) -> f64 {
    let r = x.hypot(z);
    let bend = z.atan2(x).sin();
    let falloff = (WARP_FALLOFF * (r - black_hole_radius)).powi(2);
    bend * MAX_WARP * (-falloff).exp()
}

/// Apparent size multiplier for a point `distance` from the centre at `angle`.
///
/// Magnification grows as `black_hole_radius / distance`, with a five-lobed
/// ripple around the orbit. `distance` must be positive.
pub fn point_size_multiplier(distance: f64, angle: f64, black_hole_radius: f64) -> f64 {
    let lens = 1.0 + LENS_MAGNIFICATION * black_hole_radius / distance;
    let ripple = 1.0 + SIZE_RIPPLE * (SIZE_RIPPLE_FREQUENCY * angle).sin();
    lens * ripple
}

/// Warp the disk-plane point `(x, z)` around a black hole of the given radius.
///
/// Particle positions and the static rings take their height from here.
/// Particles size themselves from their stored polar coordinates through
/// [`point_size_multiplier`] instead of recovering them from `(x, z)`.
pub fn warp(x: f64, z: f64, black_hole_radius: f64) -> LensWarp {
    let r = x.hypot(z);
    let angle = z.atan2(x);
    LensWarp {
        y: vertical_warp(x, z, black_hole_radius),
        size_multiplier: point_size_multiplier(r, angle, black_hole_radius),
    }
}

/// Whether a particle at `radial_distance` is outside the visible rim.
///
/// Particles inside the rim stay in the simulation but are not drawn.
pub fn is_visible(radial_distance: f64, black_hole_radius: f64) -> bool {
    radial_distance >= black_hole_radius * VISIBLE_RIM_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const R: f64 = BLACK_HOLE_RADIUS;

    #[test]
    fn test_warp_peaks_at_black_hole_radius() {
        // Straight "above" the hole in the disk plane, sin(angle) = 1
        let at_rim = vertical_warp(0.0, R, R);
        assert!((at_rim - MAX_WARP).abs() < 1e-12);

        for r in [R * 0.5, R * 0.9, R * 1.1, R * 2.0] {
            assert!(vertical_warp(0.0, r, R) < at_rim);
        }
    }

    #[test]
    fn test_warp_vanishes_far_away() {
        let mut previous = f64::INFINITY;
        for r in [1.0, 2.0, 4.0, 8.0] {
            let y = vertical_warp(0.0, r, R).abs();
            assert!(y < previous);
            previous = y;
        }
        assert!(vertical_warp(0.0, 50.0, R).abs() < 1e-12);
    }

    #[test]
    fn test_warp_sign_follows_side() {
        assert!(vertical_warp(0.0, 0.5, R) > 0.0);
        assert!(vertical_warp(0.0, -0.5, R) < 0.0);
        assert!(vertical_warp(0.5, 0.0, R).abs() < 1e-12);
    }

    #[test]
    fn test_warp_is_continuous() {
        let step = 1e-6;
        let mut x = 0.3;
        while x < 2.0 {
            let a = vertical_warp(x, 0.7, R);
            let b = vertical_warp(x + step, 0.7, R);
            assert!((a - b).abs() < 1e-4);
            x += 0.05;
        }
    }

    #[test]
    fn test_size_multiplier() {
        // No ripple at angle 0
        let near = point_size_multiplier(R, 0.0, R);
        assert!((near - 1.7).abs() < 1e-12);

        let far = point_size_multiplier(100.0, 0.0, R);
        assert!(far < near);
        assert!(far > 1.0);

        // sin(5 * pi/10) = 1
        let crest = point_size_multiplier(R, FRAC_PI_2 / 5.0, R);
        assert!((crest - 1.7 * 1.3).abs() < 1e-12);
    }

    #[test]
    fn test_warp_combines_both_terms() {
        let w = warp(0.0, 0.8, R);
        assert_eq!(w.y, vertical_warp(0.0, 0.8, R));
        assert_eq!(w.size_multiplier, point_size_multiplier(0.8, FRAC_PI_2, R));
    }

    #[test]
    fn test_visible_rim() {
        assert!(!is_visible(R, R));
        assert!(is_visible(R * 1.1, R));
        assert!(is_visible(EVENT_HORIZON_RADIUS, R));
    }
}
