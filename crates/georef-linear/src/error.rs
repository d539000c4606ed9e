use thiserror::Error;

/// Degenerate input configurations rejected by the closed-form solvers.
///
/// A degenerate fit is a property of the input data, not a fault: the caller
/// is expected to ask for additional or better-distributed control points.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FitError {
    /// All source points coincide with their centroid, so scale and rotation
    /// cannot be separated from the data.
    #[error("degenerate configuration: source points have no spread about their centroid")]
    CoincidentSourcePoints,

    /// The least-squares solution collapsed to a non-positive scale.
    #[error("degenerate fit: estimated scale is not positive")]
    VanishingScale,

    /// One axis has no spread in the source coordinates, so its scale cannot
    /// be separated from the translation.
    #[error("degenerate configuration: source points have no spread along the {0} axis")]
    CollapsedAxis(&'static str),
}
