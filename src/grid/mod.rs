//! Grid generators built on the spherical primitives.
//!
//! Every generator is a pure function of its bounds or center, its spacing
//! parameters and a [`Config`](crate::Config). Invalid parameters are
//! reported as [`GeoGridError`](crate::GeoGridError); the functions in
//! [`crate::compat`] turn those into empty collections instead.
//!
//! Iteration along any axis stops after `config.grid.max_steps` steps.

pub mod hexagonal;
pub mod radial;
pub mod rectangular;

pub use hexagonal::HexTiling;
pub use radial::{radial_points, radial_sectors};
pub use rectangular::{rectangular_cells, rectangular_points};

use geogrid_types::point::Point;
use geogrid_types::polygon::{Polygon, Ring};
use std::f64::consts::FRAC_PI_2;

/// sin(60°), the row-height ratio of a hexagonal lattice.
pub(crate) const SIN_60: f64 = 0.866_025_403_784_438_6;

/// Lower bound applied to cos(latitude) before it is used as a divisor or scale.
pub(crate) const MIN_COS_LAT: f64 = 0.1;

pub(crate) const BEARING_NORTH: f64 = 0.0;
pub(crate) const BEARING_EAST: f64 = FRAC_PI_2;

/// `cos(lat)` floored at [`MIN_COS_LAT`].
pub(crate) fn clamped_cos_lat(lat_deg: f64) -> f64 {
    lat_deg.to_radians().cos().max(MIN_COS_LAT)
}

pub(crate) fn warn_step_cap(generator: &str, axis: &str, max_steps: usize) {
    log::warn!(
        "{} stopped after {} steps along {}; output is truncated",
        generator,
        max_steps,
        axis
    );
}

/// `count` clamped to `max_steps`, warning when it is cut.
pub(crate) fn capped_count(generator: &str, axis: &str, count: usize, max_steps: usize) -> usize {
    if count > max_steps {
        warn_step_cap(generator, axis, max_steps);
        return max_steps;
    }
    count
}

/// Wrap a closed vertex list as a single-ring polygon.
pub(crate) fn closed_polygon(mut vertices: Vec<Point>) -> Polygon {
    if let Some(&first) = vertices.first() {
        vertices.push(first);
    }
    Polygon::from(Ring::new(vertices))
}
