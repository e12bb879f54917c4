//! Generates SVG illustrations of merging and triangulation.
//!
//! Run with: cargo run --example gallery

use regionum::io::{
    complex_polygon_path_data, svg_document, triangulation_path_data,
};
use regionum::polygon::{triangulate, try_merge, ComplexPolygon, Polygon};
use regionum::Point2;

use std::fs;
use std::io::Write;

const SCALE: f64 = 40.0;

fn main() {
    fs::create_dir_all("screenshots").expect("create screenshots dir");

    generate_merge();
    generate_triangulation();
    println!("Generated SVGs in screenshots/");
}

fn shape(coords: &[(f64, f64)]) -> ComplexPolygon<f64> {
    Polygon::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
        .expect("demo shape")
        .scaled(SCALE)
        .into()
}

/// A C-shaped province absorbs the bar closing it, enclosing a new hole.
fn generate_merge() {
    let c_shape = shape(&[
        (0.5, 0.5),
        (3.5, 0.5),
        (3.5, 1.5),
        (1.5, 1.5),
        (1.5, 3.5),
        (3.5, 3.5),
        (3.5, 4.5),
        (0.5, 4.5),
    ]);
    let bar = shape(&[
        (3.5, 0.5),
        (4.5, 0.5),
        (4.5, 4.5),
        (3.5, 4.5),
        (3.5, 3.5),
        (3.5, 1.5),
    ]);

    let merged = try_merge(&c_shape, &bar)
        .expect("merge contract holds")
        .expect("shapes are neighbors");

    let body = format!(
        "<path d=\"{}\" fill=\"#8aa\" fill-rule=\"evenodd\" stroke=\"#234\" stroke-width=\"2\"/>",
        complex_polygon_path_data(&merged)
    );
    write_svg("screenshots/merge.svg", 200, 200, &body);
}

/// Triangulates a square with a pre-cut hole.
fn generate_triangulation() {
    let cut: Vec<Point2<f64>> = [
        (0.5, 0.5),
        (4.5, 0.5),
        (4.5, 4.5),
        (0.5, 4.5),
        (0.5, 0.5),
        (1.5, 1.5),
        (1.5, 3.5),
        (3.5, 3.5),
        (3.5, 1.5),
        (1.5, 1.5),
    ]
    .iter()
    .map(|&(x, y)| Point2::new(x * SCALE, y * SCALE))
    .collect();

    let triangulation = triangulate(&cut).expect("cut outline is traceable");

    let body = format!(
        "<path d=\"{}\" fill=\"none\" stroke=\"#a64\" stroke-width=\"1.5\"/>",
        triangulation_path_data(&triangulation)
    );
    write_svg("screenshots/triangulation.svg", 200, 200, &body);
}

fn write_svg(path: &str, width: u32, height: u32, body: &str) {
    let mut file = fs::File::create(path).expect("create svg file");
    file.write_all(svg_document(width, height, body).as_bytes())
        .expect("write svg file");
}
