//! Polygon area from spherical excess (Girard's theorem).

use crate::compute::numeric::reduce_angle;
use crate::compute::spherical::initial_bearing;
use crate::config::EarthModel;
use geogrid_types::point::Point;
use geogrid_types::polygon::{Polygon, Ring};
use std::f64::consts::{PI, TAU};

/// Area of a polygon in km² on the mean-radius sphere.
///
/// The outer ring's area minus the area of every hole. The result is not
/// clamped: holes larger than the outer ring give a negative area.
///
/// # Examples
///
/// ```rust
/// use geogrid::{Polygon, compute::area::polygon_area_km2};
///
/// let small = Polygon::from_coords(
///     &[(0.0, 0.0), (0.01, 0.0), (0.01, 0.01), (0.0, 0.01), (0.0, 0.0)],
///     vec![],
/// );
/// let area = polygon_area_km2(&small);
/// assert!((area - 1.2364).abs() < 0.001);
/// ```
pub fn polygon_area_km2(polygon: &Polygon) -> f64 {
    EarthModel::MEAN.polygon_area_km2(polygon)
}

/// Area of a single ring in km² on the mean-radius sphere, ignoring orientation.
pub fn ring_area_km2(ring: &Ring) -> f64 {
    EarthModel::MEAN.ring_area_km2(ring)
}

impl EarthModel {
    /// Polygon area in km²: `|outer| - Σ|hole|`.
    pub fn polygon_area_km2(&self, polygon: &Polygon) -> f64 {
        let Some(outer) = polygon.outer() else {
            return 0.0;
        };
        let holes: f64 = polygon.holes().iter().map(|hole| self.ring_area_km2(hole)).sum();
        self.ring_area_km2(outer) - holes
    }

    /// Unsigned ring area in km². Rings with fewer than 3 distinct vertices have
    /// zero area.
    pub fn ring_area_km2(&self, ring: &Ring) -> f64 {
        let radius = self.radius_km();
        spherical_excess(ring.vertices()).abs() * radius * radius
    }
}

/// Spherical excess of the polygon spanned by `vertices` (closing duplicate
/// already removed), in steradians on the unit sphere.
///
/// The interior angle at each vertex is the difference of the bearings to its
/// two neighbours, reduced modulo 2π. Depending on the ring's orientation that
/// measures either the interior or the exterior angle at every vertex, so the
/// angle sum is folded once for the whole ring: a sum above `nπ` means the
/// exterior angles were summed and `2nπ - sum` is used instead.
fn spherical_excess(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }

    let angle_sum: f64 = (0..n)
        .map(|j| {
            let prev = &vertices[(j + n - 1) % n];
            let here = &vertices[j];
            let next = &vertices[(j + 1) % n];
            reduce_angle(initial_bearing(here, prev) - initial_bearing(here, next))
        })
        .sum();

    let n = n as f64;
    let interior = if angle_sum > n * PI {
        n * TAU - angle_sum
    } else {
        angle_sum
    };

    interior - (n - 2.0) * PI
}
