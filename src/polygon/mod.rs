//! Region shapes and the algorithms that transform them.
//!
//! Provinces on a map are polygons — possibly with holes, possibly split
//! across disconnected parts. This module provides:
//! - the shape types ([`Polygon`], [`ComplexPolygon`], [`MultiPolygon`]),
//! - merging of two neighboring shapes into one ([`try_merge`]),
//! - ear-clipping triangulation for rendering ([`triangulate`]).
//!
//! # Example
//!
//! ```
//! use regionum::polygon::{try_merge, ComplexPolygon, Polygon};
//! use regionum::Point2;
//!
//! let west: ComplexPolygon<f64> = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ])
//! .unwrap()
//! .into();
//!
//! let east: ComplexPolygon<f64> = Polygon::new(vec![
//!     Point2::new(2.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 2.0),
//!     Point2::new(2.0, 2.0),
//! ])
//! .unwrap()
//! .into();
//!
//! let merged = try_merge(&west, &east).unwrap().unwrap();
//! assert_eq!(merged.outline().area(), 8.0);
//! ```

mod complex;
mod core;
mod merge;
mod multi;
mod triangulate;

pub use complex::ComplexPolygon;
pub use core::{signed_area, Polygon};
pub use merge::{is_neighbor, outlines_are_neighbors, try_merge};
pub use multi::MultiPolygon;
pub use triangulate::{
    triangulate, triangulate_polygon, triangulation_area, Triangulation,
};
