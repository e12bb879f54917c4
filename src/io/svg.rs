//! SVG path-data export for debugging region shapes.
//!
//! Builds the `d` attribute of an SVG `<path>` element from shapes and
//! triangulations, and wraps path markup into a standalone document.
//! Writing files is left to the caller.

use crate::polygon::{ComplexPolygon, Polygon, Triangulation};
use num_traits::Float;
use std::fmt::{Display, Write};

/// Builds path data for a closed polygon outline: `M x y L x y ... Z`.
pub fn polygon_path_data<F: Float + Display>(polygon: &Polygon<F>) -> String {
    ring_path_data(polygon.points())
}

/// Builds path data for an outline with holes.
///
/// Each hole becomes an extra subpath; render with `fill-rule="evenodd"`
/// so holes punch through.
pub fn complex_polygon_path_data<F: Float + Display>(shape: &ComplexPolygon<F>) -> String {
    let mut data = ring_path_data(shape.outline().points());
    for hole in shape.holes() {
        data.push(' ');
        data.push_str(&ring_path_data(hole.points()));
    }
    data
}

/// Builds path data outlining every triangle of a triangulation.
pub fn triangulation_path_data<F: Float + Display>(triangulation: &Triangulation<F>) -> String {
    let mut data = String::new();
    for tri in triangulation.indices.chunks_exact(3) {
        let a = triangulation.vertices[tri[0] as usize];
        let b = triangulation.vertices[tri[1] as usize];
        let c = triangulation.vertices[tri[2] as usize];
        if !data.is_empty() {
            data.push(' ');
        }
        let _ = write!(
            data,
            "M {} {} L {} {} L {} {} Z",
            a.x, a.y, b.x, b.y, c.x, c.y
        );
    }
    data
}

/// Wraps SVG body markup into a standalone document.
pub fn svg_document(width: u32, height: u32, body: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}\n</svg>\n",
        w = width,
        h = height,
        body = body
    )
}

fn ring_path_data<F: Float + Display>(points: &[crate::primitives::Point2<F>]) -> String {
    let mut data = String::new();
    for (i, p) in points.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        let _ = write!(data, "{} {} {} ", command, p.x, p.y);
    }
    data.push('Z');
    data
}
