//! Perspective projection from 4D to 3D
//!
//! The w coordinate acts as depth: points with larger w sit closer to the
//! 4D eye at `w = distance` and are drawn larger.

use serde::{Serialize, Deserialize};

use crate::Vec4;

/// Default distance of the 4D eye along +w
pub const DEFAULT_DISTANCE: f32 = 4.0;
/// Default scale applied after the perspective divide
pub const DEFAULT_SCALE: f32 = 2.0;

/// Perspective projector along the w axis
///
/// `k = 1 / (distance - w)` and the result is `(x, y, z) * k * scale`.
///
/// As `w` approaches `distance` the divisor goes to zero and the projected
/// point runs off to infinity. This is left unguarded. For the unit
/// hypercube under rotation every vertex has `|w| <= 2`, so any
/// `distance > 2` keeps the divisor positive; with the default of 4 it stays
/// within `[2, 6]` (and within `[3, 5]` before any rotation).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projector {
    pub distance: f32,
    pub scale: f32,
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(DEFAULT_DISTANCE, DEFAULT_SCALE)
    }
}

impl Projector {
    pub const fn new(distance: f32, scale: f32) -> Self {
        Self { distance, scale }
    }

    /// Project a 4D point to 3D
    #[inline]
    pub fn project(&self, v: Vec4) -> [f32; 3] {
        let k = 1.0 / (self.distance - v.w) * self.scale;
        [v.x * k, v.y * k, v.z * k]
    }

    /// Whether some point with `|w| <= max_abs_w` hits or passes the eye
    pub fn singularity_reachable(&self, max_abs_w: f32) -> bool {
        self.distance <= max_abs_w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_origin_projects_to_origin() {
        let p = Projector::default();
        assert_eq!(p.project(Vec4::ZERO), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_defaults() {
        let p = Projector::default();
        assert_eq!(p.distance, 4.0);
        assert_eq!(p.scale, 2.0);
    }

    #[test]
    fn test_known_value() {
        // w = 0: k = 1/4, times scale 2 = 0.5
        let p = Projector::default();
        let out = p.project(Vec4::new(1.0, -2.0, 3.0, 0.0));
        assert!((out[0] - 0.5).abs() < EPSILON);
        assert!((out[1] + 1.0).abs() < EPSILON);
        assert!((out[2] - 1.5).abs() < EPSILON);
    }

    #[test]
    fn test_linear_in_x_and_y_for_fixed_w() {
        let p = Projector::default();
        let base = Vec4::new(0.4, -0.3, 0.7, 0.9);
        let doubled = Vec4::new(0.8, -0.6, 0.7, 0.9);
        let a = p.project(base);
        let b = p.project(doubled);
        assert!((b[0] - 2.0 * a[0]).abs() < EPSILON);
        assert!((b[1] - 2.0 * a[1]).abs() < EPSILON);
        assert!((b[2] - a[2]).abs() < EPSILON);
    }

    #[test]
    fn test_larger_w_is_drawn_larger() {
        let p = Projector::default();
        let near = p.project(Vec4::new(1.0, 1.0, 1.0, 1.0));
        let far = p.project(Vec4::new(1.0, 1.0, 1.0, -1.0));
        assert!(near[0] > far[0]);
    }

    #[test]
    fn test_singularity_reachability() {
        assert!(!Projector::default().singularity_reachable(2.0));
        assert!(Projector::new(1.5, 2.0).singularity_reachable(2.0));
        assert!(Projector::new(2.0, 2.0).singularity_reachable(2.0));
    }

    #[test]
    fn test_divergence_is_not_trapped() {
        let p = Projector::new(1.0, 2.0);
        let out = p.project(Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert!(out[0].is_infinite());
    }

    #[test]
    fn test_unit_hypercube_stays_bounded_by_default() {
        // Unrotated vertices have w = ±1, so the divisor is 3 or 5
        let p = Projector::default();
        for w in [-1.0f32, 1.0] {
            let out = p.project(Vec4::new(1.0, 1.0, 1.0, w));
            assert!(out[0] >= 2.0 / 5.0 - EPSILON && out[0] <= 2.0 / 3.0 + EPSILON);
        }
    }
}
