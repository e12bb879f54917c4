//! Polygon outlines with holes.

use crate::bounds::Aabb2;
use crate::polygon::Polygon;
use crate::primitives::Point2;
use num_traits::Float;

/// A polygon outline with zero or more holes subtracted from it.
///
/// Holes are plain [`Polygon`]s, so a hole cannot itself carry holes —
/// the nesting limit is structural rather than checked at run time.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexPolygon<F> {
    outline: Polygon<F>,
    holes: Vec<Polygon<F>>,
}

impl<F: Float> ComplexPolygon<F> {
    /// Creates a shape from an outline and its holes.
    #[inline]
    pub fn new(outline: Polygon<F>, holes: Vec<Polygon<F>>) -> Self {
        Self { outline, holes }
    }

    /// Returns the outer boundary.
    #[inline]
    pub fn outline(&self) -> &Polygon<F> {
        &self.outline
    }

    /// Returns the holes.
    #[inline]
    pub fn holes(&self) -> &[Polygon<F>] {
        &self.holes
    }

    /// Returns the outline's bounding box.
    #[inline]
    pub fn bounds(&self) -> Aabb2<F> {
        self.outline.bounds()
    }

    /// Tests whether a point lies in the solid part of the shape.
    ///
    /// The border flag is inverted for the hole test: a point exactly on a
    /// hole's boundary counts as solid precisely when the caller asked to
    /// exclude the outer border, and vice versa. Merge walks along a shared
    /// hole/outline edge then see the same answer from both shapes.
    pub fn contains(&self, p: Point2<F>, include_border: bool) -> bool {
        self.outline.contains(p, include_border)
            && !self
                .holes
                .iter()
                .any(|hole| hole.contains(p, !include_border))
    }

    /// Returns the centroid of the outline.
    ///
    /// Holes are not subtracted from the weighting; for province label
    /// placement the outline centroid is close enough.
    pub fn centroid(&self) -> Option<Point2<F>> {
        self.outline.centroid()
    }

    /// Consumes the shape, returning the outline and holes.
    pub fn into_parts(self) -> (Polygon<F>, Vec<Polygon<F>>) {
        (self.outline, self.holes)
    }
}

impl<F: Float> From<Polygon<F>> for ComplexPolygon<F> {
    fn from(outline: Polygon<F>) -> Self {
        Self {
            outline,
            holes: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(x0, y0),
            Point2::new(x1, y0),
            Point2::new(x1, y1),
            Point2::new(x0, y1),
        ])
        .unwrap()
    }

    #[test]
    fn test_contains_with_hole() {
        let shape = ComplexPolygon::new(rect(0.0, 0.0, 5.0, 8.0), vec![rect(2.0, 3.0, 4.0, 5.0)]);

        // Solid interior.
        assert!(shape.contains(Point2::new(1.0, 1.0), true));
        // Inside the hole.
        assert!(!shape.contains(Point2::new(3.0, 4.0), true));
        // Hole border follows the inverted flag.
        assert!(shape.contains(Point2::new(2.0, 3.0), true));
        assert!(!shape.contains(Point2::new(2.0, 3.0), false));
    }

    #[test]
    fn test_outline_border() {
        let shape = ComplexPolygon::new(rect(0.0, 0.0, 5.0, 8.0), vec![]);
        assert!(shape.contains(Point2::new(0.0, 4.0), true));
        assert!(!shape.contains(Point2::new(0.0, 4.0), false));
    }

    #[test]
    fn test_centroid_ignores_holes() {
        let solid = ComplexPolygon::from(rect(0.0, 0.0, 4.0, 4.0));
        let holed = ComplexPolygon::new(rect(0.0, 0.0, 4.0, 4.0), vec![rect(2.5, 2.5, 3.5, 3.5)]);

        // Delegates to the outline, so the off-center hole does not move it.
        assert_eq!(solid.centroid(), holed.centroid());
    }

    #[test]
    fn test_from_polygon() {
        let shape: ComplexPolygon<f64> = rect(0.0, 0.0, 2.0, 2.0).into();
        assert!(shape.holes().is_empty());
        assert_eq!(shape.bounds().area(), 4.0);
    }
}
