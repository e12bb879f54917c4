//! Simple polygon outlines and basic queries.

use crate::bounds::Aabb2;
use crate::error::RegionError;
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// A simple polygon: an ordered, implicitly closed sequence of vertices.
///
/// The last vertex connects back to the first. Construction requires at
/// least three vertices and caches the bounding box; instances are never
/// mutated afterwards — every transformation returns a new polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    points: Vec<Point2<F>>,
    bounds: Aabb2<F>,
}

impl<F: Float> Polygon<F> {
    /// Creates a polygon from an ordered vertex list.
    ///
    /// Fails with [`RegionError::TooFewVertices`] when fewer than three
    /// vertices are supplied.
    pub fn new(points: Vec<Point2<F>>) -> Result<Self, RegionError> {
        if points.len() < 3 {
            return Err(RegionError::TooFewVertices {
                count: points.len(),
            });
        }
        let bounds = bounds_of(&points);
        Ok(Self { points, bounds })
    }

    /// Returns the vertices in order.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the polygon has no vertices; construction rules
    /// this out, so it only exists to pair with [`len`](Self::len).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the cached bounding box.
    #[inline]
    pub fn bounds(&self) -> Aabb2<F> {
        self.bounds
    }

    /// Returns the signed area (shoelace formula).
    ///
    /// Positive for counter-clockwise winding, negative for clockwise.
    pub fn signed_area(&self) -> F {
        signed_area(&self.points)
    }

    /// Returns the absolute area.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Tests whether a point lies inside the polygon.
    ///
    /// Points exactly on the boundary (a vertex or the interior of an
    /// edge) answer `include_border` directly rather than falling through
    /// to the ray cast, which is unstable when the ray grazes a vertex.
    /// Interior points are resolved with the even-odd ray-casting rule
    /// after a cached-bounds fast reject.
    pub fn contains(&self, p: Point2<F>, include_border: bool) -> bool {
        if !self.bounds.contains_point(p, true) {
            return false;
        }
        if self.on_boundary(p) {
            return include_border;
        }

        let n = self.points.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.points[i];
            let vj = self.points[j];
            if ((vi.y > p.y) != (vj.y > p.y))
                && (p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x)
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Returns the centroid (signed-area weighted), or `None` for a
    /// zero-area polygon.
    ///
    /// Correct for either winding order as long as the polygon is simple.
    pub fn centroid(&self) -> Option<Point2<F>> {
        let area = self.signed_area();
        if area.abs() < F::epsilon() {
            return None;
        }

        let mut cx = F::zero();
        let mut cy = F::zero();
        let n = self.points.len();
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            let cross = a.x * b.y - b.x * a.y;
            cx = cx + (a.x + b.x) * cross;
            cy = cy + (a.y + b.y) * cross;
        }

        let six = F::from(6.0).unwrap();
        Some(Point2::new(cx / (six * area), cy / (six * area)))
    }

    /// Returns a copy shifted by `offset`.
    pub fn translated(&self, offset: Vec2<F>) -> Self {
        let points: Vec<Point2<F>> = self.points.iter().map(|&p| p + offset).collect();
        let bounds = bounds_of(&points);
        Self { points, bounds }
    }

    /// Returns a copy with every coordinate multiplied by `factor`
    /// (scaling about the origin).
    pub fn scaled(&self, factor: F) -> Self {
        let points: Vec<Point2<F>> = self
            .points
            .iter()
            .map(|&p| Point2::new(p.x * factor, p.y * factor))
            .collect();
        let bounds = bounds_of(&points);
        Self { points, bounds }
    }

    /// Returns a copy rotated by `angle` radians counter-clockwise about
    /// the origin.
    pub fn rotated(&self, angle: F) -> Self {
        let (sin, cos) = angle.sin_cos();
        let points: Vec<Point2<F>> = self
            .points
            .iter()
            .map(|&p| Point2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos))
            .collect();
        let bounds = bounds_of(&points);
        Self { points, bounds }
    }

    /// Tests whether `p` coincides with a vertex or lies on an edge.
    fn on_boundary(&self, p: Point2<F>) -> bool {
        let n = self.points.len();
        let mut j = n - 1;
        for i in 0..n {
            let a = self.points[j];
            let b = self.points[i];
            if p == a {
                return true;
            }
            // Collinear with the edge and within its extent. Map vertices
            // are grid-exact, so the comparison is exact as well.
            if (b - a).cross(p - a) == F::zero()
                && p.x >= a.x.min(b.x)
                && p.x <= a.x.max(b.x)
                && p.y >= a.y.min(b.y)
                && p.y <= a.y.max(b.y)
            {
                return true;
            }
            j = i;
        }
        false
    }
}

/// Computes the signed area of a vertex ring using the shoelace formula.
///
/// Positive for counter-clockwise winding, negative for clockwise.
/// Returns zero for fewer than three vertices.
pub fn signed_area<F: Float>(points: &[Point2<F>]) -> F {
    if points.len() < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    let n = points.len();
    for i in 0..n {
        let j = (i + 1) % n;
        area = area + points[i].x * points[j].y;
        area = area - points[j].x * points[i].y;
    }
    area / F::from(2.0).unwrap()
}

/// Min/max reduction over a non-empty vertex list.
pub(crate) fn bounds_of<F: Float>(points: &[Point2<F>]) -> Aabb2<F> {
    let mut bounds = Aabb2::new(points[0], points[0]);
    for &p in &points[1..] {
        bounds = bounds.expand_to_include(p);
    }
    bounds
}
