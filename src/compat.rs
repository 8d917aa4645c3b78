//! Lenient adapters over the strict API.
//!
//! These take plain scalar arguments, run with [`Config::default`], and never
//! fail: invalid input yields an empty collection or the zero bounding box.
//! The swallowed error is logged at `debug` level.
//!
//! ```rust
//! use geogrid::compat;
//!
//! assert_eq!(compat::rectangular_grid(0.0, 0.0, 1.0, 1.0, 0.5, 0.5).len(), 9);
//! assert!(compat::rectangular_grid(0.0, 0.0, 1.0, 1.0, 0.0, 0.5).is_empty());
//! ```

use crate::compute::bbox::polygon_bounding_box;
use crate::config::Config;
use crate::error::Result;
use crate::grid::{self, HexTiling};
use geogrid_types::bbox::BoundingBox;
use geogrid_types::point::Point;
use geogrid_types::polygon::{MultiPolygon, Polygon};

fn lenient<T: Default>(operation: &str, result: Result<T>) -> T {
    result.unwrap_or_else(|e| {
        log::debug!("{} returned empty output: {}", operation, e);
        T::default()
    })
}

pub fn rectangular_grid(
    min_lon: f64,
    min_lat: f64,
    max_lon: f64,
    max_lat: f64,
    step_lon: f64,
    step_lat: f64,
) -> Vec<Point> {
    let bounds = BoundingBox::new(min_lon, min_lat, max_lon, max_lat);
    lenient(
        "rectangular_grid",
        grid::rectangular_points(&bounds, step_lon, step_lat, &Config::default()),
    )
}

pub fn rectangular_grid_cells(
    min_lon: f64,
    min_lat: f64,
    max_lon: f64,
    max_lat: f64,
    step_lon: f64,
    step_lat: f64,
) -> MultiPolygon {
    let bounds = BoundingBox::new(min_lon, min_lat, max_lon, max_lat);
    lenient(
        "rectangular_grid_cells",
        grid::rectangular_cells(&bounds, step_lon, step_lat, &Config::default()),
    )
}

/// Geodesic hexagons, `spacing_m` meters between centers.
pub fn hexagonal_grid_cells(
    min_lon: f64,
    min_lat: f64,
    max_lon: f64,
    max_lat: f64,
    spacing_m: f64,
) -> MultiPolygon {
    let bounds = BoundingBox::new(min_lon, min_lat, max_lon, max_lat);
    lenient(
        "hexagonal_grid_cells",
        HexTiling::Geodesic { spacing_m }.cells(&bounds, &Config::default()),
    )
}

/// Degree-space hexagons with circumradius `radius_deg`.
pub fn planar_hexagonal_grid_cells(
    min_lon: f64,
    min_lat: f64,
    max_lon: f64,
    max_lat: f64,
    radius_deg: f64,
) -> MultiPolygon {
    let bounds = BoundingBox::new(min_lon, min_lat, max_lon, max_lat);
    lenient(
        "planar_hexagonal_grid_cells",
        HexTiling::PlanarMercator { radius_deg }.cells(&bounds, &Config::default()),
    )
}

pub fn radial_grid(
    center_lon: f64,
    center_lat: f64,
    max_radius_m: f64,
    num_rings: usize,
    points_per_ring: usize,
) -> Vec<Point> {
    let center = Point::new(center_lon, center_lat);
    lenient(
        "radial_grid",
        grid::radial_points(&center, max_radius_m, num_rings, points_per_ring, &Config::default()),
    )
}

pub fn radial_sectors(
    center_lon: f64,
    center_lat: f64,
    max_radius_m: f64,
    num_sectors: usize,
    num_rings: usize,
) -> MultiPolygon {
    let center = Point::new(center_lon, center_lat);
    lenient(
        "radial_sectors",
        grid::radial_sectors(&center, max_radius_m, num_sectors, num_rings, &Config::default()),
    )
}

/// Bounding box with concatenated-ring antimeridian detection; the zero box
/// for an empty polygon.
pub fn calculate_bounding_box(polygon: &Polygon) -> BoundingBox {
    lenient(
        "calculate_bounding_box",
        polygon_bounding_box(polygon, Config::default().antimeridian),
    )
}
