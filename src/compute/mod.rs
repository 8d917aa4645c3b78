//! Spherical-geometry primitives.
//!
//! This module holds every numerical building block the grid generators
//! rely on:
//! - Distance, bearing and destination projection on a sphere
//! - Antimeridian-aware bounding boxes
//! - Polygon area from spherical excess
//! - Planar point-in-polygon
//! - Rounding and angle normalization helpers
//! - Coordinate and parameter validation

pub mod area;
pub mod bbox;
pub mod containment;
pub mod numeric;
pub mod spherical;
pub mod validation;

pub use area::{polygon_area_km2, ring_area_km2};
pub use bbox::{bounding_box_or_zero, crosses_antimeridian, polygon_bounding_box};
pub use containment::{point_in_polygon, point_in_ring};
pub use spherical::{
    destination, distance_and_bearing, distance_km, haversine, initial_bearing, line_length_km,
};
