//! Closed-form alignment solvers for `georef-rs`.
//!
//! Every estimator here is a direct algebraic solution over a
//! [`ControlPointList`](georef_core::ControlPointList): no iteration, no
//! convergence concerns, one O(n) pass structure. Degenerate input
//! configurations are reported as [`FitError`] values, never as panics or as
//! transforms with non-positive scale.

mod axis_scale;
mod decompose;
mod error;
mod residual;
mod similarity;

pub use axis_scale::*;
pub use decompose::*;
pub use error::*;
pub use residual::*;
pub use similarity::*;
