//! Debug output for geometric data.

mod svg;

pub use svg::{
    complex_polygon_path_data, polygon_path_data, svg_document, triangulation_path_data,
};
