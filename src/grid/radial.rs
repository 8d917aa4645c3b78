//! Radial point rings and sector wedges around a center.

use super::capped_count;
use crate::compute::validation::{validate_count, validate_positive};
use crate::config::Config;
use crate::error::Result;
use geogrid_types::point::Point;
use geogrid_types::polygon::{MultiPolygon, Polygon, Ring};
use std::f64::consts::TAU;

/// Meters of arc per sample along a sector edge.
const ARC_SAMPLE_SPACING_M: f64 = 50.0;

/// Minimum number of segments along a sector arc.
const MIN_ARC_SEGMENTS: usize = 4;

/// Generate concentric rings of points around `center`.
///
/// The center comes first, followed by `num_rings` rings at radii
/// `k * max_radius_m / num_rings` for `k = 1..=num_rings`, each with
/// `points_per_ring` points at bearings `2π * i / points_per_ring`. Both
/// counts are capped at `config.grid.max_steps`.
///
/// # Examples
///
/// ```rust
/// use geogrid::{Config, Point, grid::radial_points};
///
/// let center = Point::new(37.6173, 55.7558);
/// let points = radial_points(&center, 1_000.0, 3, 8, &Config::default()).unwrap();
/// assert_eq!(points.len(), 1 + 3 * 8);
/// assert_eq!(points[0], center);
/// ```
pub fn radial_points(
    center: &Point,
    max_radius_m: f64,
    num_rings: usize,
    points_per_ring: usize,
    config: &Config,
) -> Result<Vec<Point>> {
    config.validate()?;
    validate_positive("max_radius_m", max_radius_m)?;
    validate_count("num_rings", num_rings)?;
    validate_count("points_per_ring", points_per_ring)?;

    // Capped rings are dropped from the outside; capped ring points stay evenly spread
    let radius_step = max_radius_m / num_rings as f64;
    let max_steps = config.grid.max_steps;
    let num_rings = capped_count("radial grid", "rings", num_rings, max_steps);
    let points_per_ring = capped_count("radial grid", "ring points", points_per_ring, max_steps);

    let mut grid = Vec::with_capacity(num_rings.saturating_mul(points_per_ring).saturating_add(1));
    grid.push(*center);

    for ring in 1..=num_rings {
        let radius = ring as f64 * radius_step;
        grid.extend((0..points_per_ring).map(|i| {
            let bearing = TAU * i as f64 / points_per_ring as f64;
            config.earth.destination(center, radius, bearing)
        }));
    }

    log::debug!("radial grid: {} points", grid.len());
    Ok(grid)
}

/// Generate `num_sectors * num_rings` wedge polygons around `center`.
///
/// Wedges are ordered by sector (clockwise from north), then by ring
/// (outwards). The innermost wedge of each sector is a fan from the center;
/// the others run along the inner arc, back along the outer arc, and close.
/// Arcs are sampled every 50 m of arc length, with at least 4 segments and at
/// most `config.grid.max_steps`.
///
/// # Examples
///
/// ```rust
/// use geogrid::{Config, Point, grid::radial_sectors};
///
/// let center = Point::new(37.6173, 55.7558);
/// let sectors = radial_sectors(&center, 1_000.0, 6, 2, &Config::default()).unwrap();
/// assert_eq!(sectors.len(), 12);
/// ```
pub fn radial_sectors(
    center: &Point,
    max_radius_m: f64,
    num_sectors: usize,
    num_rings: usize,
    config: &Config,
) -> Result<MultiPolygon> {
    config.validate()?;
    validate_positive("max_radius_m", max_radius_m)?;
    validate_count("num_sectors", num_sectors)?;
    validate_count("num_rings", num_rings)?;

    // Capped rings are dropped from the outside; capped sectors widen to fill the circle
    let radius_step = max_radius_m / num_rings as f64;
    let max_steps = config.grid.max_steps;
    let num_sectors = capped_count("radial sectors", "sectors", num_sectors, max_steps);
    let num_rings = capped_count("radial sectors", "rings", num_rings, max_steps);
    let angle_step = TAU / num_sectors as f64;

    let mut sectors = MultiPolygon::with_capacity(num_sectors.saturating_mul(num_rings));

    for sector in 0..num_sectors {
        let start = sector as f64 * angle_step;
        let end = (sector + 1) as f64 * angle_step;
        let arc = Arc { start, end };

        for ring in 0..num_rings {
            let inner = ring as f64 * radius_step;
            let outer = (ring + 1) as f64 * radius_step;

            let mut points = Vec::new();
            if ring == 0 {
                points.push(*center);
                points.extend(arc.sample(center, outer, config));
                points.push(*center);
            } else {
                points.extend(arc.sample(center, inner, config));
                let mut outer_arc = arc.sample(center, outer, config);
                outer_arc.reverse();
                points.extend(outer_arc);
                points.push(points[0]);
            }

            if points.len() >= 4 {
                sectors.push(Polygon::from(Ring::new(points)));
            }
        }
    }

    log::debug!("radial grid: {} sectors", sectors.len());
    Ok(sectors)
}

/// Angular range of a sector, in radians clockwise from north.
#[derive(Debug, Clone, Copy)]
struct Arc {
    start: f64,
    end: f64,
}

impl Arc {
    fn segments(&self, radius: f64, max_steps: usize) -> usize {
        let wanted = ((self.end - self.start) * radius / ARC_SAMPLE_SPACING_M).ceil() as usize;
        let segments = wanted.max(MIN_ARC_SEGMENTS);
        capped_count("radial sectors", "arc", segments, max_steps)
    }

    /// Points along the arc at `radius`, both ends included.
    fn sample(&self, center: &Point, radius: f64, config: &Config) -> Vec<Point> {
        let segments = self.segments(radius, config.grid.max_steps);
        let span = self.end - self.start;
        (0..=segments)
            .map(|i| {
                let bearing = self.start + span * i as f64 / segments as f64;
                config.earth.destination(center, radius, bearing)
            })
            .collect()
    }
}
