use georef_core::{ControlPointList, NativeCoord, PlacementTransform, Real};
use log::debug;

use crate::{evaluate_residuals, FitError};

// Below this, the source variance (mm²) along an axis cannot separate that
// axis' scale from the translation.
const VARIANCE_EPS: Real = 1e-10;

// Below this, the dimensionless fitted scale is not a valid placement.
const SCALE_EPS: Real = 1e-10;

/// Fit an axis-aligned transform (independent x/y scale + translation, zero
/// rotation) to a set of control points.
///
/// Each axis is an independent 1-D least-squares regression of destination
/// against source coordinates: `dest = s·src + t` with `s = cov/var` and
/// `t` the mean residual. A collapsed axis (no source variance) or a
/// non-positive fitted scale (collapsed or mirrored destination axis) fails
/// the whole fit; a successful fit always carries strictly positive scales.
///
/// Small-input policy matches [`estimate_similarity`](crate::estimate_similarity):
/// an empty list yields the identity and a single pair a translation-only
/// transform. On success the per-point diagnostics of `points` are refreshed.
pub fn estimate_axis_scale(points: &mut ControlPointList) -> Result<PlacementTransform, FitError> {
    let n = points.len();
    if n == 0 {
        let transform = PlacementTransform::identity();
        evaluate_residuals(points, &transform);
        return Ok(transform);
    }

    let inv_n = 1.0 / n as Real;
    let mut src_mean = [0.0; 2];
    let mut dest_mean = [0.0; 2];
    for point in points.iter() {
        for axis in 0..2 {
            src_mean[axis] += point.src[axis] * inv_n;
            dest_mean[axis] += point.dest[axis] * inv_n;
        }
    }

    if n == 1 {
        let transform = PlacementTransform::translation_only(NativeCoord::from_mm(
            dest_mean[0] - src_mean[0],
            dest_mean[1] - src_mean[1],
        ));
        evaluate_residuals(points, &transform);
        return Ok(transform);
    }

    let mut variance = [0.0; 2];
    let mut covariance = [0.0; 2];
    for point in points.iter() {
        for axis in 0..2 {
            let s = point.src[axis] - src_mean[axis];
            let d = point.dest[axis] - dest_mean[axis];
            variance[axis] += s * s;
            covariance[axis] += s * d;
        }
    }

    let mut scale = [0.0; 2];
    let mut translation = [0.0; 2];
    for (axis, name) in ["x", "y"].into_iter().enumerate() {
        if variance[axis] < VARIANCE_EPS {
            debug!("axis-scale fit rejected: {name} axis variance {:e} below epsilon", variance[axis]);
            return Err(FitError::CollapsedAxis(name));
        }
        scale[axis] = covariance[axis] / variance[axis];
        if scale[axis] < SCALE_EPS {
            debug!("axis-scale fit rejected: {name} axis scale {:e} not positive", scale[axis]);
            return Err(FitError::VanishingScale);
        }
        translation[axis] = dest_mean[axis] - scale[axis] * src_mean[axis];
    }

    let transform = PlacementTransform {
        translation: NativeCoord::from_mm(translation[0], translation[1]),
        scale_x: scale[0],
        scale_y: scale[1],
        rotation: 0.0,
    };
    evaluate_residuals(points, &transform);
    Ok(transform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use georef_core::Pt2;

    #[test]
    fn empty_list_yields_identity() {
        let mut list = ControlPointList::new();
        let t = estimate_axis_scale(&mut list).unwrap();
        assert_eq!(t, PlacementTransform::identity());
    }

    #[test]
    fn single_pair_yields_translation_only() {
        let mut list = ControlPointList::new();
        list.push_pair(Pt2::new(32.0, 0.0), Pt2::new(64.0, 64.0));

        let t = estimate_axis_scale(&mut list).unwrap();
        assert_eq!(t.translation, NativeCoord::from_mm(32.0, 64.0));
        assert_eq!((t.scale_x, t.scale_y, t.rotation), (1.0, 1.0, 0.0));
        assert!(list[0].error.unwrap() < 1e-6);
    }

    #[test]
    fn recovers_independent_axis_scales() {
        // dest = (4.5·x + 10, 2.5·y - 5)
        let src = [(0.0, 0.0), (10.0, 4.0), (20.0, 8.0), (4.0, 16.0)];
        let mut list = ControlPointList::new();
        for (x, y) in src {
            list.push_pair(Pt2::new(x, y), Pt2::new(4.5 * x + 10.0, 2.5 * y - 5.0));
        }

        let t = estimate_axis_scale(&mut list).unwrap();
        assert!((t.scale_x - 4.5).abs() < 1e-12);
        assert!((t.scale_y - 2.5).abs() < 1e-12);
        assert_eq!(t.rotation, 0.0);
        assert_eq!(t.translation, NativeCoord::from_mm(10.0, -5.0));

        for point in list.iter() {
            assert!(point.error.unwrap() < 1e-6);
        }
    }

    #[test]
    fn matches_similarity_scenario() {
        // The uniform-scale fixture has spread on both axes, so the
        // axis-aligned model recovers the same placement.
        let mut list = ControlPointList::new();
        list.push_pair(Pt2::new(128.0, 0.0), Pt2::new(64.0, 64.0));
        list.push_pair(Pt2::new(256.0, 0.0), Pt2::new(96.0, 64.0));
        list.push_pair(Pt2::new(128.0, 128.0), Pt2::new(64.0, 96.0));

        let t = estimate_axis_scale(&mut list).unwrap();
        assert_eq!(t.translation, NativeCoord::from_mm(32.0, 64.0));
        assert!((t.scale_x - 0.25).abs() < 1e-12);
        assert!((t.scale_y - 0.25).abs() < 1e-12);

        for point in list.iter() {
            assert!(point.error.unwrap() < 1e-6);
        }
    }

    #[test]
    fn collapsed_x_axis_is_degenerate() {
        let mut list = ControlPointList::new();
        list.push_pair(Pt2::new(5.0, 0.0), Pt2::new(0.0, 0.0));
        list.push_pair(Pt2::new(5.0, 10.0), Pt2::new(0.0, 20.0));
        assert_eq!(
            estimate_axis_scale(&mut list),
            Err(FitError::CollapsedAxis("x"))
        );
    }

    #[test]
    fn collapsed_y_axis_is_degenerate() {
        let mut list = ControlPointList::new();
        list.push_pair(Pt2::new(0.0, 7.0), Pt2::new(0.0, 0.0));
        list.push_pair(Pt2::new(10.0, 7.0), Pt2::new(20.0, 0.0));
        assert_eq!(
            estimate_axis_scale(&mut list),
            Err(FitError::CollapsedAxis("y"))
        );
    }

    #[test]
    fn collapsed_destination_axis_is_degenerate() {
        // Spread in the sources, but every destination shares one x: the best
        // x scale is zero, which is not a valid placement.
        let mut list = ControlPointList::new();
        list.push_pair(Pt2::new(0.0, 0.0), Pt2::new(5.0, 3.0));
        list.push_pair(Pt2::new(10.0, 10.0), Pt2::new(5.0, 7.0));
        assert_eq!(
            estimate_axis_scale(&mut list),
            Err(FitError::VanishingScale)
        );
        assert!(list[0].fitted.is_none());
    }

    #[test]
    fn mirrored_axis_is_degenerate() {
        // A mirrored x axis regresses to a negative scale; the fit must fail
        // rather than report a non-positive placement scale.
        let mut list = ControlPointList::new();
        list.push_pair(Pt2::new(0.0, 0.0), Pt2::new(10.0, 0.0));
        list.push_pair(Pt2::new(10.0, 10.0), Pt2::new(0.0, 10.0));
        assert_eq!(
            estimate_axis_scale(&mut list),
            Err(FitError::VanishingScale)
        );
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let mut list = ControlPointList::new();
        for _ in 0..2 {
            list.push_pair(Pt2::new(1.0, 2.0), Pt2::new(3.0, 4.0));
        }
        assert!(matches!(
            estimate_axis_scale(&mut list),
            Err(FitError::CollapsedAxis(_))
        ));
    }
}
