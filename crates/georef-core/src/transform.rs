//! Parametric placement transform.

use crate::{NativeCoord, Pt2, Real};
use serde::{Deserialize, Serialize};

/// Parametric form of a template placement: translation in native units,
/// independent axis scales, and a rotation in radians.
///
/// Applied to a source point as scale first, then rotation, then translation.
/// Positive rotation turns +x toward -y (counter-clockwise on a y-down map).
/// A transform produced by a successful fit always has strictly positive
/// scales and a rotation in the canonical range `(-π, π]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementTransform {
    /// Translation in native units.
    pub translation: NativeCoord,
    /// Scale along the source x axis.
    pub scale_x: Real,
    /// Scale along the source y axis.
    pub scale_y: Real,
    /// Rotation in radians, canonical range `(-π, π]`.
    pub rotation: Real,
}

impl PlacementTransform {
    /// The identity placement.
    pub fn identity() -> Self {
        Self {
            translation: NativeCoord::ZERO,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
        }
    }

    /// Pure translation, unit scale and no rotation.
    pub fn translation_only(translation: NativeCoord) -> Self {
        Self {
            translation,
            ..Self::identity()
        }
    }

    /// Map a source point into destination space (millimetres).
    ///
    /// Uses exactly the stored, native-unit-rounded translation, so residuals
    /// computed against this function reflect the reported transform.
    pub fn apply(&self, p: &Pt2) -> Pt2 {
        let sx = self.scale_x * p.x;
        let sy = self.scale_y * p.y;
        let (s, c) = self.rotation.sin_cos();
        Pt2::new(
            c * sx + s * sy + self.translation.x_mm(),
            -s * sx + c * sy + self.translation.y_mm(),
        )
    }
}

impl Default for PlacementTransform {
    fn default() -> Self {
        Self::identity()
    }
}
