use georef_core::{canonical_angle, ControlPointList, NativeCoord, PlacementTransform, Real, Vec2};
use log::debug;

use crate::{evaluate_residuals, FitError};

// Below this, the centered source spread (mm²) cannot separate scale and
// rotation from the data.
const SPREAD_EPS: Real = 1e-10;

// Below this, the dimensionless fitted scale is not a valid placement.
const SCALE_EPS: Real = 1e-10;

/// Fit a similarity transform (translation + rotation + uniform scale) to a
/// set of control points, closed-form and centroid-based.
///
/// Model in centered coordinates: `dest' = s·R(θ)·src'` with
/// `a = s·cos θ`, `b = s·sin θ`, solved by two linear normal equations.
/// The denominator depends only on the spread of the source points about
/// their centroid, never on the rotation angle, so the fit is stable for any
/// non-degenerate configuration including rotations at or near 90°.
///
/// Policy for small inputs: an empty list yields the identity transform and a
/// single pair yields a translation-only transform, so a caller can always
/// request a placement.
///
/// On success the per-point diagnostics of `points` are refreshed via
/// [`evaluate_residuals`].
pub fn estimate_similarity(points: &mut ControlPointList) -> Result<PlacementTransform, FitError> {
    let n = points.len();
    if n == 0 {
        let transform = PlacementTransform::identity();
        evaluate_residuals(points, &transform);
        return Ok(transform);
    }

    let mut src_centroid = Vec2::zeros();
    let mut dest_centroid = Vec2::zeros();
    for point in points.iter() {
        src_centroid += point.src.coords;
        dest_centroid += point.dest.coords;
    }
    src_centroid /= n as Real;
    dest_centroid /= n as Real;

    if n == 1 {
        // Rotation and scale are undetermined by one pair.
        let offset = dest_centroid - src_centroid;
        let transform =
            PlacementTransform::translation_only(NativeCoord::from_mm(offset.x, offset.y));
        evaluate_residuals(points, &transform);
        return Ok(transform);
    }

    let mut spread = 0.0;
    let mut a_num = 0.0;
    let mut b_num = 0.0;
    for point in points.iter() {
        let s = point.src.coords - src_centroid;
        let d = point.dest.coords - dest_centroid;
        spread += s.norm_squared();
        a_num += s.x * d.x + s.y * d.y;
        b_num += s.y * d.x - s.x * d.y;
    }

    if spread < SPREAD_EPS {
        debug!("similarity fit rejected: source spread {spread:e} below epsilon");
        return Err(FitError::CoincidentSourcePoints);
    }

    let a = a_num / spread;
    let b = b_num / spread;
    let scale = a.hypot(b);
    if scale < SCALE_EPS {
        debug!("similarity fit rejected: estimated scale {scale:e} below epsilon");
        return Err(FitError::VanishingScale);
    }

    let rotation = canonical_angle(b.atan2(a));
    // translation = dest centroid - s·R(θ) · src centroid
    let tx = dest_centroid.x - (a * src_centroid.x + b * src_centroid.y);
    let ty = dest_centroid.y - (-b * src_centroid.x + a * src_centroid.y);

    let transform = PlacementTransform {
        translation: NativeCoord::from_mm(tx, ty),
        scale_x: scale,
        scale_y: scale,
        rotation,
    };
    evaluate_residuals(points, &transform);
    Ok(transform)
}
