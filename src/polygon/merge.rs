//! Merging of neighboring region shapes.
//!
//! When one owner absorbs an adjacent region, the two shapes are combined
//! into a single outline, creating holes where the union encloses a gap and
//! removing holes that the new territory fills.
//!
//! # Contract
//!
//! The shapes ever merged together must not overlap except exactly on
//! shared boundary, every shared boundary segment must break at a shared
//! vertex (no T-junctions), and no shared border may be a single isolated
//! point. Map shapes derived from a common grid satisfy this by
//! construction. Inputs that violate the contract surface as
//! [`RegionError::MergeWalkStalled`] instead of producing garbage.

use crate::error::RegionError;
use crate::polygon::core::bounds_of;
use crate::polygon::{ComplexPolygon, Polygon};
use crate::primitives::Point2;
use num_traits::Float;

/// Tests whether two outlines are geometric neighbors: overlapping bounds
/// and at least two shared vertices.
///
/// This is a cheap pre-filter — necessary for a merge to succeed, but not
/// sufficient.
pub fn outlines_are_neighbors<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> bool {
    if !a.bounds().intersects(b.bounds()) {
        return false;
    }
    shared_vertex_count(a.points(), b.points()) >= 2
}

/// Tests whether two shapes can be merged: their outlines are neighbors,
/// or one shape fills (part of) a hole of the other.
pub fn is_neighbor<F: Float>(a: &ComplexPolygon<F>, b: &ComplexPolygon<F>) -> bool {
    outlines_are_neighbors(a.outline(), b.outline())
        || a.holes()
            .iter()
            .any(|hole| outlines_are_neighbors(hole, b.outline()))
        || b.holes()
            .iter()
            .any(|hole| outlines_are_neighbors(hole, a.outline()))
}

/// Merges two neighboring shapes into one.
///
/// Returns `Ok(None)` when the shapes are not neighbors under any rule —
/// an expected, frequent outcome the caller must check before replacing
/// its shapes. When the outlines are not direct neighbors, a hole-filling
/// merge is attempted in both directions before giving up.
///
/// `Err` is reserved for inputs that violate the merge contract.
pub fn try_merge<F: Float>(
    a: &ComplexPolygon<F>,
    b: &ComplexPolygon<F>,
) -> Result<Option<ComplexPolygon<F>>, RegionError> {
    if outlines_are_neighbors(a.outline(), b.outline()) {
        return merge_outlines(a, b).map(Some);
    }
    if let Some(i) = a
        .holes()
        .iter()
        .position(|hole| outlines_are_neighbors(hole, b.outline()))
    {
        return fill_hole(a, i, b).map(Some);
    }
    if let Some(i) = b
        .holes()
        .iter()
        .position(|hole| outlines_are_neighbors(hole, a.outline()))
    {
        return fill_hole(b, i, a).map(Some);
    }
    Ok(None)
}

/// Combines two outline rings into one region.
///
/// A single traced loop becomes the outline directly. Several loops mean
/// the union enclosed a gap: the loop with the largest bounding-box area
/// is the outline and every other loop becomes a hole. Both inputs' hole
/// lists carry over either way.
fn merge_outlines<F: Float>(
    a: &ComplexPolygon<F>,
    b: &ComplexPolygon<F>,
) -> Result<ComplexPolygon<F>, RegionError> {
    let mut loops = merge_rings(a.outline().points(), b.outline().points())?;

    let mut holes: Vec<Polygon<F>> = a.holes().to_vec();
    holes.extend(b.holes().iter().cloned());

    if loops.is_empty() {
        // No vertex is unique to either ring: the outlines are identical.
        return Ok(ComplexPolygon::new(a.outline().clone(), holes));
    }

    let mut outline_idx = 0;
    let mut best = bounds_of(&loops[0]).area();
    for (i, ring) in loops.iter().enumerate().skip(1) {
        let area = bounds_of(ring).area();
        if area > best {
            best = area;
            outline_idx = i;
        }
    }

    let outline = Polygon::new(loops.swap_remove(outline_idx))?;
    for ring in loops {
        holes.push(Polygon::new(ring)?);
    }
    Ok(ComplexPolygon::new(outline, holes))
}

/// Fills hole `hole_idx` of `host` with `filler`.
///
/// A hole with no vertex of its own relative to the filler is covered
/// exactly and simply removed. Otherwise the walk traces the remaining
/// void, possibly as several loops (filling the middle of a corridor
/// splits it in two); every loop becomes a replacement hole. The filler's
/// own holes stay voids and join the host's hole list.
fn fill_hole<F: Float>(
    host: &ComplexPolygon<F>,
    hole_idx: usize,
    filler: &ComplexPolygon<F>,
) -> Result<ComplexPolygon<F>, RegionError> {
    let hole = &host.holes()[hole_idx];
    let loops = merge_rings(hole.points(), filler.outline().points())?;

    let mut holes: Vec<Polygon<F>> = Vec::with_capacity(host.holes().len() + loops.len());
    for (i, h) in host.holes().iter().enumerate() {
        if i != hole_idx {
            holes.push(h.clone());
        }
    }
    holes.extend(filler.holes().iter().cloned());
    for ring in loops {
        holes.push(Polygon::new(ring)?);
    }
    Ok(ComplexPolygon::new(host.outline().clone(), holes))
}

/// Traces the boundary loops of the union of two vertex rings.
///
/// Walks are seeded at vertices unique to one ring and repeat until every
/// unique vertex has been visited; each extra loop signals an enclosed
/// void or detached piece. Returns no loops at all when the rings have no
/// unique vertices (their boundaries coincide).
fn merge_rings<F: Float>(
    a: &[Point2<F>],
    b: &[Point2<F>],
) -> Result<Vec<Vec<Point2<F>>>, RegionError> {
    let topo = RingPair { rings: [a, b] };
    let mut visited: Vec<Point2<F>> = Vec::new();
    let mut loops = Vec::new();

    while let Some(seed) = next_unvisited_unique(&topo, &visited) {
        let ring = trace_loop(&topo, seed, &visited)?;
        visited.extend(ring.iter().copied());
        loops.push(ring);
    }
    Ok(loops)
}

/// Walks one closed loop along the combined boundary, starting at `seed`.
///
/// Each step records the current point and picks the next from its
/// topological neighbors across both rings, skipping anything already
/// visited:
///
/// - once at least 3 points are collected and the seed reappears among the
///   current point's neighbors, the loop is closed;
/// - a sole candidate is followed, unless it is a shared vertex with only
///   two distinct neighbors — the interior of a shared run, which never
///   lies on the union boundary;
/// - among several candidates, a vertex unique to one ring wins, then the
///   single candidate with exactly three distinct incident edges (the
///   junction where two boundaries meet a third).
///
/// Anything else is a genuinely ambiguous branch: the walk restarts from
/// its other end by reversing the collected path, swapping the roles of
/// seed and cursor. A second restart without progress means the inputs
/// break the merge contract.
fn trace_loop<F: Float>(
    topo: &RingPair<'_, F>,
    seed: Point2<F>,
    visited: &[Point2<F>],
) -> Result<Vec<Point2<F>>, RegionError> {
    let mut path = vec![seed];
    let mut stalled_once = false;
    let budget = (topo.rings[0].len() + topo.rings[1].len() + 2) * 4;

    for _ in 0..budget {
        let current = path[path.len() - 1];
        let neighbors = topo.neighbors(current);

        if path.len() >= 3 && ring_contains(&neighbors, path[0]) {
            return Ok(path);
        }

        let fresh: Vec<Point2<F>> = neighbors
            .iter()
            .copied()
            .filter(|&q| !ring_contains(&path, q) && !ring_contains(visited, q))
            .collect();

        match choose_next(topo, &fresh) {
            Some(next) => {
                path.push(next);
                stalled_once = false;
            }
            None => {
                if stalled_once {
                    return Err(RegionError::MergeWalkStalled);
                }
                stalled_once = true;
                path.reverse();
            }
        }
    }
    Err(RegionError::MergeWalkStalled)
}

/// Applies the step rules to the fresh candidate list.
fn choose_next<F: Float>(topo: &RingPair<'_, F>, fresh: &[Point2<F>]) -> Option<Point2<F>> {
    match fresh.len() {
        0 => None,
        1 => {
            let q = fresh[0];
            if topo.is_shared(q) && topo.neighbors(q).len() == 2 {
                // Interior of a shared run: dead end.
                None
            } else {
                Some(q)
            }
        }
        _ => {
            if let Some(&q) = fresh.iter().find(|&&q| topo.is_unique(q)) {
                return Some(q);
            }
            let mut junction = None;
            for &q in fresh {
                if topo.neighbors(q).len() == 3 {
                    if junction.is_some() {
                        // More than one three-edge junction: ambiguous.
                        return None;
                    }
                    junction = Some(q);
                }
            }
            junction
        }
    }
}

/// The two vertex rings being merged, with vertex-value topology queries.
///
/// All lookups are linear scans with exact vertex equality; ring sizes are
/// small hand-authored map shapes, matching the O(n·m) adjacency budget.
struct RingPair<'a, F> {
    rings: [&'a [Point2<F>]; 2],
}

impl<F: Float> RingPair<'_, F> {
    /// Distinct neighbors of `p` along both rings combined. A shared edge
    /// contributes one neighbor, not two.
    fn neighbors(&self, p: Point2<F>) -> Vec<Point2<F>> {
        let mut out = Vec::new();
        for ring in self.rings {
            let n = ring.len();
            for i in 0..n {
                if ring[i] == p {
                    push_unique(&mut out, ring[(i + n - 1) % n]);
                    push_unique(&mut out, ring[(i + 1) % n]);
                }
            }
        }
        out
    }

    fn occurs_in(&self, ring: usize, p: Point2<F>) -> bool {
        ring_contains(self.rings[ring], p)
    }

    fn is_shared(&self, p: Point2<F>) -> bool {
        self.occurs_in(0, p) && self.occurs_in(1, p)
    }

    fn is_unique(&self, p: Point2<F>) -> bool {
        self.occurs_in(0, p) != self.occurs_in(1, p)
    }
}

/// First vertex unique to one ring that no walk has visited yet.
fn next_unvisited_unique<F: Float>(
    topo: &RingPair<'_, F>,
    visited: &[Point2<F>],
) -> Option<Point2<F>> {
    for ring in topo.rings {
        for &p in ring {
            if topo.is_unique(p) && !ring_contains(visited, p) {
                return Some(p);
            }
        }
    }
    None
}

fn shared_vertex_count<F: Float>(a: &[Point2<F>], b: &[Point2<F>]) -> usize {
    a.iter().filter(|&&p| ring_contains(b, p)).count()
}

fn ring_contains<F: Float>(points: &[Point2<F>], p: Point2<F>) -> bool {
    points.iter().any(|&q| q == p)
}

fn push_unique<F: Float>(points: &mut Vec<Point2<F>>, p: Point2<F>) {
    if !ring_contains(points, p) {
        points.push(p);
    }
}
