//! Plane rotations in 4D space
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 coordinate planes: XY, XZ, XW, YZ, YW, ZW.
//! A plane rotation turns the two coordinates spanning the plane
//! and leaves the other two untouched.

use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

use crate::vec4::{Axis, Vec4};

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationPlane {
    /// XY plane - standard yaw (rotation around Z axis in 3D)
    #[default]
    XY,
    /// XZ plane - standard pitch (rotation around Y axis in 3D)
    XZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YZ plane - standard roll (rotation around X axis in 3D)
    YZ,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

impl RotationPlane {
    /// All planes, ordered by their axis pair
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::XW,
        RotationPlane::YZ,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// The two axes spanning this plane, lower index first
    #[inline]
    pub const fn axes(self) -> (Axis, Axis) {
        match self {
            RotationPlane::XY => (Axis::X, Axis::Y),
            RotationPlane::XZ => (Axis::X, Axis::Z),
            RotationPlane::XW => (Axis::X, Axis::W),
            RotationPlane::YZ => (Axis::Y, Axis::Z),
            RotationPlane::YW => (Axis::Y, Axis::W),
            RotationPlane::ZW => (Axis::Z, Axis::W),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`]
    pub const fn name(self) -> &'static str {
        match self {
            RotationPlane::XY => "xy",
            RotationPlane::XZ => "xz",
            RotationPlane::XW => "xw",
            RotationPlane::YZ => "yz",
            RotationPlane::YW => "yw",
            RotationPlane::ZW => "zw",
        }
    }

    /// The following plane in [`RotationPlane::ALL`], wrapping around
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&p| p == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Rotate `v` in place by `theta` radians in this plane
    #[inline]
    pub fn rotate(self, v: &mut Vec4, theta: f32) {
        let (a, b) = self.axes();
        rotate_in_plane(v, a, b, theta);
    }
}

impl fmt::Display for RotationPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name().to_uppercase())
    }
}

impl FromStr for RotationPlane {
    type Err = PlaneParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name() == lower)
            .ok_or_else(|| PlaneParseError { input: s.to_string() })
    }
}

/// Error for a plane name that is not one of the 6 coordinate planes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaneParseError {
    input: String,
}

impl fmt::Display for PlaneParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown rotation plane '{}' (expected one of xy, xz, xw, yz, yw, zw)",
            self.input
        )
    }
}

impl std::error::Error for PlaneParseError {}

/// Rotate `v` in place by `theta` radians in the plane spanned by `a` and `b`
///
/// ```text
/// a' = cos(theta) * a - sin(theta) * b
/// b' = sin(theta) * a + cos(theta) * b
/// ```
///
/// `a` and `b` must differ. With equal axes the second write clobbers the
/// first and the vector loses information.
#[inline]
pub fn rotate_in_plane(v: &mut Vec4, a: Axis, b: Axis, theta: f32) {
    debug_assert_ne!(a, b, "rotation plane needs two distinct axes");
    let (sin, cos) = theta.sin_cos();
    let va = v[a];
    let vb = v[b];
    v[a] = cos * va - sin * vb;
    v[b] = sin * va + cos * vb;
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn sample() -> Vec4 {
        Vec4::new(0.3, -1.2, 2.5, 0.8)
    }

    #[test]
    fn test_zero_angle_is_identity() {
        for plane in RotationPlane::ALL {
            let mut v = sample();
            plane.rotate(&mut v, 0.0);
            assert_eq!(v, sample(), "plane {} moved the vector", plane);
        }
    }

    #[test]
    fn test_inverse_angle_restores() {
        for plane in RotationPlane::ALL {
            for &theta in &[0.05, 0.7, 1.9, -2.4, 3.1] {
                let mut v = sample();
                plane.rotate(&mut v, theta);
                plane.rotate(&mut v, -theta);
                assert!(
                    v.max_abs_diff(sample()) < EPSILON,
                    "plane {} theta {} did not invert: {:?}",
                    plane,
                    theta,
                    v
                );
            }
        }
    }

    #[test]
    fn test_preserves_pair_length() {
        for plane in RotationPlane::ALL {
            let (a, b) = plane.axes();
            for &theta in &[0.1, 1.0, 2.0, 4.5] {
                let before = sample();
                let mut after = before;
                plane.rotate(&mut after, theta);
                let old = before[a] * before[a] + before[b] * before[b];
                let new = after[a] * after[a] + after[b] * after[b];
                assert!((old - new).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_untouched_axes() {
        let mut v = sample();
        RotationPlane::XW.rotate(&mut v, 1.234);
        assert_eq!(v.y, sample().y);
        assert_eq!(v.z, sample().z);
    }

    #[test]
    fn test_quarter_turn_xy() {
        // x -> y under a positive quarter turn
        let mut v = Vec4::new(1.0, 0.0, 0.0, 0.0);
        rotate_in_plane(&mut v, Axis::X, Axis::Y, std::f32::consts::FRAC_PI_2);
        assert!(v.x.abs() < EPSILON);
        assert!((v.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_reads_both_before_writing() {
        // If a' were written before b' was computed, b' would be wrong
        let mut v = Vec4::new(1.0, 1.0, 0.0, 0.0);
        rotate_in_plane(&mut v, Axis::X, Axis::Y, std::f32::consts::FRAC_PI_2);
        assert!((v.x + 1.0).abs() < EPSILON);
        assert!((v.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_axes_are_distinct_and_ordered() {
        for plane in RotationPlane::ALL {
            let (a, b) = plane.axes();
            assert!(a.index() < b.index());
        }
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("xw".parse::<RotationPlane>(), Ok(RotationPlane::XW));
        assert_eq!(" ZW ".parse::<RotationPlane>(), Ok(RotationPlane::ZW));
        assert_eq!(RotationPlane::YZ.to_string(), "YZ");
        assert!("xx".parse::<RotationPlane>().is_err());
        assert!("xyz".parse::<RotationPlane>().is_err());
    }

    #[test]
    fn test_parse_error_message() {
        let err = "qq".parse::<RotationPlane>().unwrap_err();
        assert!(err.to_string().contains("'qq'"));
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut plane = RotationPlane::default();
        assert_eq!(plane, RotationPlane::XY);
        for expected in RotationPlane::ALL.iter().skip(1) {
            plane = plane.next();
            assert_eq!(plane, *expected);
        }
        assert_eq!(plane.next(), RotationPlane::XY);
    }
}
