//! Regions composed of several disconnected parts.

use crate::bounds::Aabb2;
use crate::polygon::{ComplexPolygon, Polygon};
use crate::primitives::Point2;
use num_traits::Float;

/// A logical region made of one or more disjoint parts, such as a
/// province split across islands.
///
/// Parts are treated as disjoint regions of a single owner; nothing
/// enforces non-overlap between them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiPolygon<F> {
    parts: Vec<ComplexPolygon<F>>,
}

impl<F: Float> MultiPolygon<F> {
    /// Creates a region from its parts.
    #[inline]
    pub fn new(parts: Vec<ComplexPolygon<F>>) -> Self {
        Self { parts }
    }

    /// Returns the parts.
    #[inline]
    pub fn parts(&self) -> &[ComplexPolygon<F>] {
        &self.parts
    }

    /// Adds a part.
    #[inline]
    pub fn push(&mut self, part: ComplexPolygon<F>) {
        self.parts.push(part);
    }

    /// Tests whether any part contains the point, borders included.
    pub fn contains(&self, p: Point2<F>) -> bool {
        self.parts.iter().any(|part| part.contains(p, true))
    }

    /// Returns the union of the part bounding boxes, or `None` for an
    /// empty region.
    pub fn bounds(&self) -> Option<Aabb2<F>> {
        let mut iter = self.parts.iter();
        let first = iter.next()?.bounds();
        Some(iter.fold(first, |acc, part| acc.union(part.bounds())))
    }
}

impl<F: Float> From<ComplexPolygon<F>> for MultiPolygon<F> {
    fn from(part: ComplexPolygon<F>) -> Self {
        Self { parts: vec![part] }
    }
}

impl<F: Float> From<Polygon<F>> for MultiPolygon<F> {
    fn from(outline: Polygon<F>) -> Self {
        Self {
            parts: vec![outline.into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> ComplexPolygon<f64> {
        Polygon::new(vec![
            Point2::new(x0, y0),
            Point2::new(x1, y0),
            Point2::new(x1, y1),
            Point2::new(x0, y1),
        ])
        .unwrap()
        .into()
    }

    #[test]
    fn test_contains_is_union() {
        let islands = MultiPolygon::new(vec![rect(0.0, 0.0, 2.0, 2.0), rect(5.0, 0.0, 7.0, 2.0)]);

        assert!(islands.contains(Point2::new(1.0, 1.0)));
        assert!(islands.contains(Point2::new(6.0, 1.0)));
        // The strait between the parts belongs to neither.
        assert!(!islands.contains(Point2::new(3.5, 1.0)));
        // Part borders are inclusive.
        assert!(islands.contains(Point2::new(2.0, 1.0)));
    }

    #[test]
    fn test_bounds_union() {
        let islands = MultiPolygon::new(vec![rect(0.0, 0.0, 2.0, 2.0), rect(5.0, 1.0, 7.0, 4.0)]);
        let b = islands.bounds().unwrap();
        assert_eq!(b.min, Point2::new(0.0, 0.0));
        assert_eq!(b.max, Point2::new(7.0, 4.0));
    }

    #[test]
    fn test_empty_bounds() {
        let empty: MultiPolygon<f64> = MultiPolygon::default();
        assert!(empty.bounds().is_none());
        assert!(!empty.contains(Point2::new(0.0, 0.0)));
    }
}
