//! Control-point correspondences.
//!
//! A control point pairs a source/template-space coordinate with the matching
//! destination/world-space coordinate. An ordered list of control points is
//! the input to the closed-form solvers; the solvers write per-point fit
//! diagnostics back into the same list.

use crate::{Pt2, Real};
use serde::{Deserialize, Serialize};

/// One source/destination correspondence, plus per-point fit diagnostics.
///
/// `fitted` and `error` are `None` until a fit has run; they are owned and
/// overwritten exclusively by residual evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Coordinate in source/template space (millimetres).
    pub src: Pt2,
    /// Corresponding coordinate in destination space (millimetres).
    pub dest: Pt2,
    /// Source coordinate mapped by the fitted transform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitted: Option<Pt2>,
    /// Euclidean distance between `fitted` and `dest` (millimetres).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Real>,
}

impl ControlPoint {
    /// Correspondence with no fit diagnostics yet.
    pub fn new(src: Pt2, dest: Pt2) -> Self {
        Self {
            src,
            dest,
            fitted: None,
            error: None,
        }
    }
}

impl Default for ControlPoint {
    fn default() -> Self {
        Self::new(Pt2::origin(), Pt2::origin())
    }
}

/// Ordered, mutable list of control points.
///
/// Insertion order is preserved; it does not affect the fit result but
/// determines the order in which residuals are reported. No validation is
/// performed here: duplicate or collinear points are legal and only show up
/// as solver degeneracy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlPointList {
    /// The correspondences, in insertion order.
    pub points: Vec<ControlPoint>,
}

impl ControlPointList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty list with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a correspondence.
    pub fn push(&mut self, point: ControlPoint) {
        self.points.push(point);
    }

    /// Append a correspondence from a source/destination pair.
    pub fn push_pair(&mut self, src: Pt2, dest: Pt2) {
        self.points.push(ControlPoint::new(src, dest));
    }

    /// Resize to `len` points, filling with default (origin) correspondences.
    pub fn resize(&mut self, len: usize) {
        self.points.resize(len, ControlPoint::default());
    }

    /// Remove all points.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Number of correspondences.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the list holds no correspondences.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the correspondences in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ControlPoint> {
        self.points.iter()
    }

    /// Iterate mutably over the correspondences in insertion order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, ControlPoint> {
        self.points.iter_mut()
    }
}

impl std::ops::Index<usize> for ControlPointList {
    type Output = ControlPoint;

    fn index(&self, index: usize) -> &ControlPoint {
        &self.points[index]
    }
}

impl std::ops::IndexMut<usize> for ControlPointList {
    fn index_mut(&mut self, index: usize) -> &mut ControlPoint {
        &mut self.points[index]
    }
}

impl<'a> IntoIterator for &'a ControlPointList {
    type Item = &'a ControlPoint;
    type IntoIter = std::slice::Iter<'a, ControlPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl FromIterator<ControlPoint> for ControlPointList {
    fn from_iter<I: IntoIterator<Item = ControlPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_index_preserve_order() {
        let mut list = ControlPointList::new();
        list.push_pair(Pt2::new(1.0, 2.0), Pt2::new(3.0, 4.0));
        list.push_pair(Pt2::new(5.0, 6.0), Pt2::new(7.0, 8.0));

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].src, Pt2::new(1.0, 2.0));
        assert_eq!(list[1].dest, Pt2::new(7.0, 8.0));
        assert!(list[0].fitted.is_none());
        assert!(list[0].error.is_none());
    }

    #[test]
    fn resize_fills_with_origin_pairs() {
        let mut list = ControlPointList::new();
        list.resize(3);
        assert_eq!(list.len(), 3);
        assert_eq!(list[2], ControlPoint::default());

        list[0].src = Pt2::new(32.0, 0.0);
        list[0].dest = Pt2::new(64.0, 64.0);
        assert_eq!(list[0].src, Pt2::new(32.0, 0.0));
    }

    #[test]
    fn clear_empties_the_list() {
        let mut list = ControlPointList::with_capacity(4);
        list.push_pair(Pt2::origin(), Pt2::origin());
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn duplicates_are_legal() {
        let p = ControlPoint::new(Pt2::new(1.0, 1.0), Pt2::new(2.0, 2.0));
        let list: ControlPointList = std::iter::repeat(p).take(3).collect();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0], list[2]);
    }

    #[test]
    fn json_skips_unset_diagnostics() {
        let mut list = ControlPointList::new();
        list.push_pair(Pt2::new(1.0, 2.0), Pt2::new(3.0, 4.0));
        let json = serde_json::to_string(&list).unwrap();
        assert!(!json.contains("fitted"));

        let restored: ControlPointList = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, list);
    }
}
