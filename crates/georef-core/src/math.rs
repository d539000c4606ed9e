//! Mathematical type definitions and angle utilities.

use nalgebra::{Matrix2, Point2, Vector2};

/// Scalar type used throughout the library (currently `f64`).
pub type Real = f64;

/// 2D vector with [`Real`] components.
pub type Vec2 = Vector2<Real>;
/// 2D point with [`Real`] coordinates.
pub type Pt2 = Point2<Real>;
/// 2×2 matrix with [`Real`] entries.
pub type Mat2 = Matrix2<Real>;

/// Wrap an angle in radians into the canonical range `(-π, π]`.
///
/// `-π` maps to `+π`; every other value in the range is returned unchanged.
pub fn canonical_angle(theta: Real) -> Real {
    let wrapped = theta.rem_euclid(std::f64::consts::TAU);
    if wrapped > std::f64::consts::PI {
        wrapped - std::f64::consts::TAU
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn canonical_angle_fixed_points() {
        assert_eq!(canonical_angle(0.0), 0.0);
        assert_eq!(canonical_angle(PI), PI);
        assert_eq!(canonical_angle(-PI), PI);
        assert_eq!(canonical_angle(2.0 * PI), 0.0);
    }

    #[test]
    fn canonical_angle_wraps_into_range() {
        let cases = [-7.5, -3.5, -0.25, 0.25, 3.5, 7.5, 42.0];
        for theta in cases {
            let wrapped = canonical_angle(theta);
            assert!(wrapped > -PI && wrapped <= PI, "out of range: {wrapped}");
            // Same direction as the input angle.
            let delta = (theta - wrapped).rem_euclid(2.0 * PI);
            assert!(delta.abs() < 1e-12 || (delta - 2.0 * PI).abs() < 1e-12);
        }
    }

    #[test]
    fn canonical_angle_half_turn_sign() {
        // atan2 can yield -π exactly; the canonical form is +π.
        let theta = (-0.0f64).atan2(-1.0);
        assert_eq!(canonical_angle(theta), PI);
    }
}
