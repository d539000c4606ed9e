//! Fixed-granularity destination-space coordinates.
//!
//! Destination coordinates are stored as integer multiples of the native map
//! unit (1/1000 of a map millimetre). Solvers compute in real millimetres and
//! report translations in native units.

use crate::{Pt2, Real, Vec2};
use serde::{Deserialize, Serialize};

/// Number of native units per map millimetre.
pub const UNITS_PER_MM: Real = 1000.0;

/// A destination-space coordinate at native integer granularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NativeCoord {
    /// X coordinate in native units.
    pub x: i32,
    /// Y coordinate in native units.
    pub y: i32,
}

impl NativeCoord {
    /// The origin.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Coordinate from raw native units.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate from real millimetres, rounded to the nearest native unit.
    pub fn from_mm(x: Real, y: Real) -> Self {
        Self {
            x: (x * UNITS_PER_MM).round() as i32,
            y: (y * UNITS_PER_MM).round() as i32,
        }
    }

    /// Coordinate from a real point in millimetres.
    pub fn from_point(p: &Pt2) -> Self {
        Self::from_mm(p.x, p.y)
    }

    /// X coordinate in millimetres.
    pub fn x_mm(&self) -> Real {
        Real::from(self.x) / UNITS_PER_MM
    }

    /// Y coordinate in millimetres.
    pub fn y_mm(&self) -> Real {
        Real::from(self.y) / UNITS_PER_MM
    }

    /// The coordinate as a real vector in millimetres.
    pub fn to_vec(&self) -> Vec2 {
        Vec2::new(self.x_mm(), self.y_mm())
    }

    /// The coordinate as a real point in millimetres.
    pub fn to_point(&self) -> Pt2 {
        Pt2::new(self.x_mm(), self.y_mm())
    }
}
