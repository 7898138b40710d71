//! Geospatial primitives: coordinate extraction and polygon containment.
//!
//! Points are `Coord<f64>` with `x` holding latitude and `y` holding
//! longitude, matching the `lat,lon` order used on the command line.

mod coordinate;
mod polygon;

pub use coordinate::parse_coordinate;
pub use polygon::point_in_polygon;
