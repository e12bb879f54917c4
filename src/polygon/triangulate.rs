//! Ear-clipping triangulation for renderable triangle lists.
//!
//! Takes the ordered point list of one simple polygon — holes already cut
//! into the outline by the caller, so the same position may appear twice
//! along the cut bridge — and produces a flat index buffer for the
//! renderer.
//!
//! # Algorithm
//!
//! Classic ear clipping with incremental reclassification:
//! - bring the polygon into counter-clockwise order,
//! - classify every vertex convex or reflex from the turn at that vertex,
//! - an ear is a convex vertex whose triangle holds no reflex vertex,
//! - clip any ear, emit the triangle, reclassify its two old neighbors,
//!   and repeat until three vertices remain.
//!
//! The live ring is an arena of vertices with `prev`/`next` index links and
//! classification kept in parallel flag arrays. Worst case O(n²): each clip
//! rescans the reflex vertices.

use crate::error::RegionError;
use crate::polygon::core::signed_area;
use crate::polygon::Polygon;
use crate::primitives::Point2;
use num_traits::Float;

/// Triangle geometry ready for GPU submission.
///
/// `indices` holds three entries per triangle, referring to `vertices`
/// (which echoes the input point order), wound for the renderer's
/// front-face convention — opposite to the counter-clockwise order used
/// internally.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangulation<F> {
    /// Vertex positions, in the order the points were supplied.
    pub vertices: Vec<Point2<F>>,
    /// Flat triangle index list, three indices per triangle.
    pub indices: Vec<u32>,
}

impl<F> Triangulation<F> {
    /// Returns the number of emitted triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if no triangles were emitted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Triangulates one simple polygon given as an ordered point list.
///
/// A polygon with `n` vertices yields exactly `n - 2` triangles whose
/// areas sum to the polygon's own. Input winding does not matter.
///
/// Duplicate positions are legal as long as they are not consecutive;
/// cut-hole outlines traverse their bridge twice. Self-intersecting input
/// is rejected with [`RegionError::NoEarFound`] once no ear can be clipped.
pub fn triangulate<F: Float>(points: &[Point2<F>]) -> Result<Triangulation<F>, RegionError> {
    let n = points.len();
    if n < 3 {
        return Err(RegionError::TooFewVertices { count: n });
    }

    // Canonical counter-clockwise order so every convexity test reads the
    // same way. `order[i]` maps an arena slot back to the input index.
    let order: Vec<usize> = if signed_area(points) < F::zero() {
        (0..n).rev().collect()
    } else {
        (0..n).collect()
    };
    let pts: Vec<Point2<F>> = order.iter().map(|&i| points[i]).collect();

    let mut ring = Ring::new(&pts, &order)?;
    let mut indices: Vec<u32> = Vec::with_capacity((n - 2) * 3);
    let mut remaining = n;
    let mut cursor = 0;
    let mut rebuilt = false;

    while remaining > 3 {
        let Some(ear) = ring.find_ear() else {
            if rebuilt {
                return Err(RegionError::NoEarFound { remaining });
            }
            // Cached flags go stale when a blocking reflex vertex turns
            // convex further than one link away; rebuild once before
            // declaring the input non-simple.
            ring.classify_all()?;
            rebuilt = true;
            continue;
        };
        rebuilt = false;

        let (prev, next) = (ring.prev[ear], ring.next[ear]);
        push_reversed(&mut indices, order[prev], order[ear], order[next]);

        ring.unlink(ear);
        remaining -= 1;
        cursor = prev;

        ring.reclassify(prev)?;
        ring.reclassify(next)?;
    }

    let second = ring.next[cursor];
    let third = ring.next[second];
    push_reversed(&mut indices, order[cursor], order[second], order[third]);

    Ok(Triangulation {
        vertices: points.to_vec(),
        indices,
    })
}

/// Triangulates a polygon's outline.
pub fn triangulate_polygon<F: Float>(polygon: &Polygon<F>) -> Result<Triangulation<F>, RegionError> {
    triangulate(polygon.points())
}

/// Sums the unsigned areas of all emitted triangles.
///
/// Useful for checking that a triangulation covers its polygon exactly.
pub fn triangulation_area<F: Float>(triangulation: &Triangulation<F>) -> F {
    let two = F::from(2.0).unwrap();
    triangulation
        .indices
        .chunks_exact(3)
        .fold(F::zero(), |acc, tri| {
            let a = triangulation.vertices[tri[0] as usize];
            let b = triangulation.vertices[tri[1] as usize];
            let c = triangulation.vertices[tri[2] as usize];
            acc + (b - a).cross(c - a).abs() / two
        })
}

/// Emits a counter-clockwise triangle with its winding flipped for the
/// renderer.
fn push_reversed(indices: &mut Vec<u32>, a: usize, b: usize, c: usize) {
    indices.push(c as u32);
    indices.push(b as u32);
    indices.push(a as u32);
}

/// The live vertex ring: an arena with index links and parallel
/// classification flags.
struct Ring<'a, F> {
    pts: &'a [Point2<F>],
    order: &'a [usize],
    next: Vec<usize>,
    prev: Vec<usize>,
    alive: Vec<bool>,
    reflex: Vec<bool>,
    ear: Vec<bool>,
}

impl<'a, F: Float> Ring<'a, F> {
    fn new(pts: &'a [Point2<F>], order: &'a [usize]) -> Result<Self, RegionError> {
        let n = pts.len();
        let mut ring = Self {
            pts,
            order,
            next: (0..n).map(|i| (i + 1) % n).collect(),
            prev: (0..n).map(|i| (i + n - 1) % n).collect(),
            alive: vec![true; n],
            reflex: vec![false; n],
            ear: vec![false; n],
        };
        ring.classify_all()?;
        Ok(ring)
    }

    /// Recomputes every live vertex's convexity, then its ear flag.
    fn classify_all(&mut self) -> Result<(), RegionError> {
        for i in 0..self.pts.len() {
            if self.alive[i] {
                self.reflex[i] = self.is_reflex(i)?;
            }
        }
        for i in 0..self.pts.len() {
            if self.alive[i] {
                self.ear[i] = !self.reflex[i] && self.is_ear(i);
            }
        }
        Ok(())
    }

    /// Recomputes one vertex after a neighbor was clipped. A reflex vertex
    /// may have turned convex; a convex one may have gained or lost its
    /// ear.
    fn reclassify(&mut self, i: usize) -> Result<(), RegionError> {
        self.reflex[i] = self.is_reflex(i)?;
        self.ear[i] = !self.reflex[i] && self.is_ear(i);
        Ok(())
    }

    fn find_ear(&self) -> Option<usize> {
        (0..self.pts.len()).find(|&i| self.alive[i] && self.ear[i])
    }

    fn unlink(&mut self, i: usize) {
        let (p, n) = (self.prev[i], self.next[i]);
        self.next[p] = n;
        self.prev[n] = p;
        self.alive[i] = false;
        self.ear[i] = false;
    }

    /// Turn direction at vertex `i`, from the cross product of the
    /// normalized incoming and outgoing edges. Normalizing keeps the sign
    /// honest when edge lengths differ wildly.
    fn is_reflex(&self, i: usize) -> Result<bool, RegionError> {
        let a = self.pts[self.prev[i]];
        let b = self.pts[i];
        let c = self.pts[self.next[i]];

        let incoming = (b - a).normalize().ok_or(RegionError::DegenerateEdge {
            index: self.order[self.prev[i]],
        })?;
        let outgoing = (c - b).normalize().ok_or(RegionError::DegenerateEdge {
            index: self.order[i],
        })?;
        Ok(incoming.cross(outgoing) < F::zero())
    }

    /// A convex vertex is an ear when no live reflex vertex lies inside
    /// its triangle. Vertices coincident with a triangle corner do not
    /// count — a cut-hole outline repeats its bridge positions.
    fn is_ear(&self, i: usize) -> bool {
        let (p, n) = (self.prev[i], self.next[i]);
        let (a, b, c) = (self.pts[p], self.pts[i], self.pts[n]);

        for j in 0..self.pts.len() {
            if !self.alive[j] || !self.reflex[j] || j == p || j == i || j == n {
                continue;
            }
            let v = self.pts[j];
            if v == a || v == b || v == c {
                continue;
            }
            if point_in_triangle(v, a, b, c) {
                return false;
            }
        }
        true
    }
}

/// Sign-based point-in-triangle test, boundary inclusive.
fn point_in_triangle<F: Float>(p: Point2<F>, a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    let d1 = edge_sign(p, a, b);
    let d2 = edge_sign(p, b, c);
    let d3 = edge_sign(p, c, a);

    let has_neg = d1 < F::zero() || d2 < F::zero() || d3 < F::zero();
    let has_pos = d1 > F::zero() || d2 > F::zero() || d3 > F::zero();

    !(has_neg && has_pos)
}

#[inline]
fn edge_sign<F: Float>(p: Point2<F>, a: Point2<F>, b: Point2<F>) -> F {
    (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y)
}
