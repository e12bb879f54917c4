//! Axis-aligned bounding box.

use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Corners are normalized at construction so that `min.x <= max.x` and
/// `min.y <= max.y` hold for any argument order. Boxes are immutable;
/// every transformation returns a new box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a box from two arbitrary corners.
    ///
    /// Corners may be given in any order.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates the smallest box enclosing an iterator of points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        let mut aabb = Self { min: first, max: first };
        for p in iter {
            aabb = aabb.expand_to_include(p);
        }
        Some(aabb)
    }

    /// Returns the width of the box.
    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    /// Returns the height of the box.
    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Returns the dimensions as a vector (width, height).
    #[inline]
    pub fn size(self) -> Vec2<F> {
        Vec2::new(self.width(), self.height())
    }

    /// Returns the center point of the box.
    #[inline]
    pub fn center(self) -> Point2<F> {
        self.min.midpoint(self.max)
    }

    /// Returns the area of the box.
    #[inline]
    pub fn area(self) -> F {
        self.width() * self.height()
    }

    /// Returns a new box expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Returns the union of two boxes (smallest box containing both).
    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Tests whether the box contains a point.
    ///
    /// With `inclusive` the test is closed (boundary points count as
    /// contained); otherwise it is open.
    #[inline]
    pub fn contains_point(self, p: Point2<F>, inclusive: bool) -> bool {
        if inclusive {
            p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
        } else {
            p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
        }
    }

    /// Tests whether two boxes overlap by probing the corners of the
    /// smaller box against the larger one.
    ///
    /// This is a fast-reject heuristic for neighbor candidates, not a
    /// separating-axis test: two boxes crossing without either holding a
    /// corner of the other are reported as disjoint.
    pub fn intersects(self, other: Self) -> bool {
        let (small, large) = if self.area() <= other.area() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .corners()
            .iter()
            .any(|&c| large.contains_point(c, true))
    }

    /// Returns a new box with the same center and its area multiplied by
    /// `factor` (each dimension grows by `sqrt(factor)`).
    pub fn scaled(self, factor: F) -> Self {
        let two = F::from(2.0).unwrap();
        let half = self.size() * (factor.sqrt() / two);
        let c = self.center();
        Self {
            min: c - half,
            max: c + half,
        }
    }

    /// Returns four thin boxes tracing this box's outline, each `thickness`
    /// wide, for debug rendering.
    ///
    /// Order: top, bottom, left, right.
    pub fn borders(self, thickness: F) -> [Self; 4] {
        let (min, max) = (self.min, self.max);
        [
            Self::new(min, Point2::new(max.x, min.y + thickness)),
            Self::new(Point2::new(min.x, max.y - thickness), max),
            Self::new(min, Point2::new(min.x + thickness, max.y)),
            Self::new(Point2::new(max.x - thickness, min.y), max),
        ]
    }

    fn corners(self) -> [Point2<F>; 4] {
        [
            self.min,
            Point2::new(self.max.x, self.min.y),
            self.max,
            Point2::new(self.min.x, self.max.y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_corner_order_normalized() {
        let a: Aabb2<f64> = Aabb2::new(Point2::new(10.0, 2.0), Point2::new(0.0, 8.0));
        assert_eq!(a.min, Point2::new(0.0, 2.0));
        assert_eq!(a.max, Point2::new(10.0, 8.0));
    }

    #[test]
    fn test_from_points() {
        let points = vec![
            Point2::new(1.0, 2.0),
            Point2::new(-3.0, 5.0),
            Point2::new(4.0, -1.0),
        ];
        let aabb: Aabb2<f64> = Aabb2::from_points(points).unwrap();
        assert_eq!(aabb.min, Point2::new(-3.0, -1.0));
        assert_eq!(aabb.max, Point2::new(4.0, 5.0));
    }

    #[test]
    fn test_from_points_empty() {
        let points: Vec<Point2<f64>> = vec![];
        assert!(Aabb2::from_points(points).is_none());
    }

    #[test]
    fn test_dimensions() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 5.0));
        assert_eq!(aabb.width(), 10.0);
        assert_eq!(aabb.height(), 5.0);
        assert_eq!(aabb.area(), 50.0);
        assert_eq!(aabb.center(), Point2::new(5.0, 2.5));
    }

    #[test]
    fn test_contains_point_inclusive_exclusive() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));

        assert!(aabb.contains_point(Point2::new(5.0, 5.0), true));
        assert!(aabb.contains_point(Point2::new(5.0, 5.0), false));

        // Boundary points flip with the flag.
        assert!(aabb.contains_point(Point2::new(0.0, 0.0), true));
        assert!(!aabb.contains_point(Point2::new(0.0, 0.0), false));
        assert!(aabb.contains_point(Point2::new(10.0, 5.0), true));
        assert!(!aabb.contains_point(Point2::new(10.0, 5.0), false));

        assert!(!aabb.contains_point(Point2::new(-1.0, 5.0), true));
    }

    #[test]
    fn test_intersects_overlapping() {
        let a: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
        let b = Aabb2::new(Point2::new(5.0, 5.0), Point2::new(15.0, 15.0));
        let c = Aabb2::new(Point2::new(20.0, 20.0), Point2::new(30.0, 30.0));

        assert!(a.intersects(b));
        assert!(b.intersects(a));
        assert!(!a.intersects(c));
    }

    #[test]
    fn test_intersects_contained_box() {
        let outer: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
        let inner = Aabb2::new(Point2::new(4.0, 4.0), Point2::new(6.0, 6.0));

        // The smaller box's corners all fall inside the larger one.
        assert!(outer.intersects(inner));
        assert!(inner.intersects(outer));
    }

    #[test]
    fn test_intersects_shared_edge() {
        let a: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(5.0, 5.0));
        let b = Aabb2::new(Point2::new(5.0, 0.0), Point2::new(9.0, 5.0));

        // Touching boxes count: the corner probe is inclusive.
        assert!(a.intersects(b));
    }

    #[test]
    fn test_union() {
        let a: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(5.0, 5.0));
        let b = Aabb2::new(Point2::new(3.0, 3.0), Point2::new(10.0, 10.0));
        let u = a.union(b);

        assert_eq!(u.min, Point2::new(0.0, 0.0));
        assert_eq!(u.max, Point2::new(10.0, 10.0));
    }

    #[test]
    fn test_scaled_preserves_center_and_scales_area() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(2.0, 4.0), Point2::new(10.0, 8.0));
        let grown = aabb.scaled(4.0);

        assert_eq!(grown.center(), aabb.center());
        assert_relative_eq!(grown.area(), aabb.area() * 4.0, epsilon = 1e-10);
        // Each dimension grows by sqrt(4) = 2.
        assert_relative_eq!(grown.width(), aabb.width() * 2.0, epsilon = 1e-10);
        assert_relative_eq!(grown.height(), aabb.height() * 2.0, epsilon = 1e-10);
    }

    #[test]
    fn test_scaled_shrink() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(8.0, 8.0));
        let shrunk = aabb.scaled(0.25);

        assert_eq!(shrunk.center(), aabb.center());
        assert_relative_eq!(shrunk.area(), 16.0, epsilon = 1e-10);
    }

    #[test]
    fn test_borders() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
        let strips = aabb.borders(1.0);

        // Top strip spans the full width at the minimum y edge.
        assert_eq!(strips[0].min, Point2::new(0.0, 0.0));
        assert_eq!(strips[0].max, Point2::new(10.0, 1.0));
        // Left strip spans the full height at the minimum x edge.
        assert_eq!(strips[2].min, Point2::new(0.0, 0.0));
        assert_eq!(strips[2].max, Point2::new(1.0, 10.0));

        for strip in &strips {
            assert!(aabb.contains_point(strip.min, true));
            assert!(aabb.contains_point(strip.max, true));
        }
    }
}
