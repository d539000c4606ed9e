use georef_core::{ControlPointList, PlacementTransform};

/// Write per-point fit diagnostics back into the list.
///
/// For every control point, `fitted` becomes the source coordinate mapped by
/// `transform` and `error` the Euclidean distance between `fitted` and the
/// destination coordinate. Infallible; purely a post-fit diagnostic and never
/// an input to the fit itself.
pub fn evaluate_residuals(points: &mut ControlPointList, transform: &PlacementTransform) {
    for point in points.iter_mut() {
        let fitted = transform.apply(&point.src);
        point.error = Some((fitted - point.dest).norm());
        point.fitted = Some(fitted);
    }
}
