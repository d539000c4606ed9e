//! High-level entry crate for the `georef-rs` toolbox.
//!
//! `georef-rs` estimates 2-D alignment transforms from user-digitized
//! control points (source/template coordinate paired with the matching
//! destination/world coordinate) and converts between the parametric
//! placement form and the generic 2×3 affine form used by rendering
//! pipelines.
//!
//! ```
//! use georef::prelude::*;
//!
//! # fn main() -> Result<(), georef::linear::FitError> {
//! let mut points = ControlPointList::new();
//! points.push_pair(Pt2::new(128.0, 0.0), Pt2::new(64.0, 64.0));
//! points.push_pair(Pt2::new(256.0, 0.0), Pt2::new(96.0, 64.0));
//! points.push_pair(Pt2::new(128.0, 128.0), Pt2::new(64.0, 96.0));
//!
//! let placement = estimate_similarity(&mut points)?;
//! assert!((placement.scale_x - 0.25).abs() < 1e-9);
//!
//! // Per-point residuals were written back for the UI to inspect.
//! assert!(points[0].error.unwrap() < 0.001);
//!
//! // Interchange with the rendering pipeline's matrix form.
//! let matrix = compose_affine(&placement);
//! let back = decompose_affine(&matrix);
//! assert_eq!(back.translation, placement.translation);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - **[`core`]**: math aliases, native-unit coordinates, affine and
//!   placement transform types, control-point containers
//! - **[`linear`]**: closed-form similarity and axis-scale solvers, affine
//!   decomposition, residual evaluation
//! - **[`pipeline`]**: autosave scheduling capability and diagnostic text
//!   lookup strategies
//! - **[`prelude`]**: convenient re-exports for common use cases

/// Math types, coordinates, transforms, and control-point containers.
pub mod core {
    pub use georef_core::*;
}

/// Closed-form alignment solvers and affine decomposition.
pub mod linear {
    pub use georef_linear::*;
}

/// Autosave scheduling and diagnostic strategies.
pub mod pipeline {
    pub use georef_pipeline::*;
}

/// Convenient re-exports for common use cases.
pub mod prelude {
    pub use crate::core::{
        canonical_angle, AffineMap, ControlPoint, ControlPointList, NativeCoord,
        PlacementTransform, Pt2, Real, Vec2,
    };
    pub use crate::linear::{
        compose_affine, decompose_affine, estimate_axis_scale, estimate_similarity,
        evaluate_residuals, FitError,
    };
    pub use crate::pipeline::{
        Autosave, AutosaveConfig, AutosaveScheduler, NullTextLookup, SaveOutcome, TextLookup,
    };
}
