//! Core geometry primitives for `georef-rs`.
//!
//! This crate contains:
//! - linear algebra type aliases (`Real`, `Vec2`, `Pt2`, ...),
//! - the fixed-granularity destination coordinate type ([`NativeCoord`]),
//! - the generic 2×3 affine interchange type ([`AffineMap`]),
//! - the parametric placement transform ([`PlacementTransform`]),
//! - the control-point container fed into the solvers ([`ControlPointList`]).
//!
//! Placement pipeline:
//! `dest = translate ∘ rotate ∘ scale (src)`
//!
//! Destination-space coordinates are stored at native integer granularity
//! (1/1000 of a map millimetre); all computation happens in real millimetres.

/// Linear algebra type aliases and angle helpers.
pub mod math;
/// Fixed-granularity destination coordinates.
pub mod coord;
/// Generic 2×3 affine interchange type.
pub mod affine;
/// Parametric placement transform.
pub mod transform;
/// Control-point correspondences.
pub mod control;

pub use affine::*;
pub use control::*;
pub use coord::*;
pub use math::*;
pub use transform::*;
