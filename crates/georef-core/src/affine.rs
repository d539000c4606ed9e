//! Generic 2×3 affine map.
//!
//! This is the interchange format with the rendering pipeline: an explicit
//! linear part plus translation, `p ↦ linear · p + translation`, with all
//! entries in real millimetres.

use crate::{Mat2, Pt2, Real, Vec2};
use serde::{Deserialize, Serialize};

// Tolerance for classifying a matrix entry as "no rotation" / "no scaling".
const CLASSIFY_EPS: Real = 1e-12;

/// A 2-D affine map `p ↦ linear · p + translation`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineMap {
    /// Linear part (scale/rotation; shear is outside the supported domain).
    pub linear: Mat2,
    /// Translation in millimetres.
    pub translation: Vec2,
}

impl AffineMap {
    /// The identity map.
    pub fn identity() -> Self {
        Self {
            linear: Mat2::identity(),
            translation: Vec2::zeros(),
        }
    }

    /// Map from an explicit linear part and translation.
    pub fn new(linear: Mat2, translation: Vec2) -> Self {
        Self { linear, translation }
    }

    /// Pure translation by `t` millimetres.
    pub fn from_translation(t: Vec2) -> Self {
        Self {
            linear: Mat2::identity(),
            translation: t,
        }
    }

    /// Pure axis-aligned scale.
    pub fn from_scale(scale_x: Real, scale_y: Real) -> Self {
        Self {
            linear: Mat2::new(scale_x, 0.0, 0.0, scale_y),
            translation: Vec2::zeros(),
        }
    }

    /// Pure rotation by `theta` radians.
    ///
    /// Positive rotation turns +x toward -y (counter-clockwise on a y-down
    /// map), matching [`PlacementTransform::apply`](crate::PlacementTransform::apply).
    pub fn from_rotation(theta: Real) -> Self {
        let (s, c) = theta.sin_cos();
        Self {
            linear: Mat2::new(c, s, -s, c),
            translation: Vec2::zeros(),
        }
    }

    /// Apply the map to a point.
    pub fn apply(&self, p: &Pt2) -> Pt2 {
        Pt2::from(self.linear * p.coords + self.translation)
    }

    /// True if the linear part carries a rotation component.
    pub fn is_rotating(&self) -> bool {
        self.linear[(0, 1)].abs() > CLASSIFY_EPS || self.linear[(1, 0)].abs() > CLASSIFY_EPS
    }

    /// True if the linear part deviates from unit scale on either axis.
    pub fn is_scaling(&self) -> bool {
        (self.linear[(0, 0)] - 1.0).abs() > CLASSIFY_EPS
            || (self.linear[(1, 1)] - 1.0).abs() > CLASSIFY_EPS
    }
}

impl Default for AffineMap {
    fn default() -> Self {
        Self::identity()
    }
}
