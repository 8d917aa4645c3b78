//! Great-circle distance, initial bearing and destination projection on a
//! spherical earth.
//!
//! Coordinates are degrees (longitude first), bearings are radians clockwise
//! from north and distances are meters unless a function says otherwise.

use crate::compute::numeric::{normalize_bearing, wrap_longitude_rad};
use crate::config::{EarthModel, LengthUnit};
use geogrid_types::point::Point;

/// Haversine central-angle distance between two points, scaled by `radius`.
///
/// The result is in whatever unit `radius` is given in. This is the single
/// haversine implementation behind [`distance_km`] and [`distance_and_bearing`].
pub fn haversine(from: &Point, to: &Point, radius: f64) -> f64 {
    let (lat1, lat2) = (from.lat_rad(), to.lat_rad());
    let d_lat = lat2 - lat1;
    let d_lon = to.lon_rad() - from.lon_rad();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius * c
}

/// Initial great-circle bearing from `from` to `to`, in `[0, 2π)`.
///
/// Identical points yield `0.0`.
pub fn initial_bearing(from: &Point, to: &Point) -> f64 {
    let (lat1, lat2) = (from.lat_rad(), to.lat_rad());
    let d_lon = to.lon_rad() - from.lon_rad();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    normalize_bearing(y.atan2(x))
}

/// Distance between two points in kilometers on the mean-radius sphere.
///
/// # Examples
///
/// ```rust
/// use geogrid::{Point, compute::spherical::distance_km};
///
/// let nyc = Point::new(-74.0060, 40.7128);
/// let la = Point::new(-118.2437, 34.0522);
///
/// let dist = distance_km(&nyc, &la);
/// assert!(dist > 3_900.0 && dist < 4_000.0);
/// ```
pub fn distance_km(from: &Point, to: &Point) -> f64 {
    EarthModel::MEAN.distance(from, to, LengthUnit::Kilometers)
}

/// Distance in meters and initial bearing in radians on the mean-radius sphere.
pub fn distance_and_bearing(from: &Point, to: &Point) -> (f64, f64) {
    EarthModel::MEAN.distance_and_bearing(from, to)
}

/// Point reached from `origin` after `distance_m` meters along `bearing`
/// radians, on the mean-radius sphere.
///
/// # Examples
///
/// ```rust
/// use geogrid::{Point, compute::spherical::destination};
/// use std::f64::consts::FRAC_PI_2;
///
/// // 111.2 km east along the equator is roughly one degree of longitude
/// let east = destination(&Point::new(0.0, 0.0), 111_195.0, FRAC_PI_2);
/// assert!((east.lon() - 1.0).abs() < 1e-3);
/// assert!(east.lat().abs() < 1e-9);
/// ```
pub fn destination(origin: &Point, distance_m: f64, bearing: f64) -> Point {
    EarthModel::MEAN.destination(origin, distance_m, bearing)
}

/// Length of a polyline in kilometers on the mean-radius sphere.
pub fn line_length_km(points: &[Point]) -> f64 {
    EarthModel::MEAN.line_length(points, LengthUnit::Kilometers)
}

impl EarthModel {
    /// Great-circle distance in `unit`.
    pub fn distance(&self, from: &Point, to: &Point, unit: LengthUnit) -> f64 {
        haversine(from, to, self.radius(unit))
    }

    /// Distance in meters and initial bearing in radians.
    pub fn distance_and_bearing(&self, from: &Point, to: &Point) -> (f64, f64) {
        (
            self.distance(from, to, LengthUnit::Meters),
            initial_bearing(from, to),
        )
    }

    /// Direct geodesic solve on the sphere.
    ///
    /// The returned longitude is always normalized into `[-180, 180]`.
    /// Antipodal distances and poles are not guarded; they follow IEEE-754
    /// semantics of the trigonometric calls.
    pub fn destination(&self, origin: &Point, distance_m: f64, bearing: f64) -> Point {
        let lat = origin.lat_rad();
        let lon = origin.lon_rad();
        let angular = distance_m / self.radius_m;

        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_ang, cos_ang) = angular.sin_cos();
        let (sin_brg, cos_brg) = bearing.sin_cos();

        let dest_lat = (sin_lat * cos_ang + cos_lat * sin_ang * cos_brg).asin();
        let dest_lon =
            lon + (sin_brg * sin_ang * cos_lat).atan2(cos_ang - sin_lat * dest_lat.sin());

        Point::new(
            wrap_longitude_rad(dest_lon).to_degrees(),
            dest_lat.to_degrees(),
        )
    }

    /// Sum of consecutive segment lengths in `unit`. Fewer than two points is zero.
    pub fn line_length(&self, points: &[Point], unit: LengthUnit) -> f64 {
        points
            .windows(2)
            .map(|pair| self.distance(&pair[0], &pair[1], unit))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geo::Distance;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_distance_matches_geo_haversine() {
        let nyc = Point::new(-74.0060, 40.7128);
        let la = Point::new(-118.2437, 34.0522);

        let ours = distance_km(&nyc, &la) * 1000.0;
        let reference = geo::Haversine.distance(*nyc.inner(), *la.inner());

        // geo uses the 6371008.8 m mean radius
        assert_relative_eq!(ours, reference, max_relative = 1e-5);
    }

    #[test]
    fn test_units_share_one_formula() {
        let a = Point::new(2.3522, 48.8566);
        let b = Point::new(-0.1278, 51.5074);

        let km = distance_km(&a, &b);
        let (m, _) = distance_and_bearing(&a, &b);
        assert_relative_eq!(km * 1000.0, m, max_relative = 1e-12);
        assert!(km > 340.0 && km < 345.0);
    }

    #[test]
    fn test_identical_points() {
        let p = Point::new(12.5, -33.0);
        let (distance, bearing) = distance_and_bearing(&p, &p);
        assert_eq!(distance, 0.0);
        assert_eq!(bearing, 0.0);
    }

    #[test]
    fn test_cardinal_bearings() {
        let origin = Point::new(0.0, 0.0);
        let cases = [
            (Point::new(0.0, 1.0), 0.0),
            (Point::new(1.0, 0.0), FRAC_PI_2),
            (Point::new(0.0, -1.0), PI),
            (Point::new(-1.0, 0.0), 3.0 * FRAC_PI_2),
        ];
        for (target, expected) in cases {
            let bearing = initial_bearing(&origin, &target);
            assert!((0.0..TAU).contains(&bearing));
            assert!((bearing - expected).abs() < 1e-12, "{:?}", target);
        }
    }

    #[test]
    fn test_destination_cardinal_directions() {
        let origin = Point::new(10.0, 45.0);
        let d = 100_000.0;

        let north = destination(&origin, d, 0.0);
        assert_relative_eq!(north.lon(), 10.0, epsilon = 1e-9);
        assert!(north.lat() > 45.0);

        let south = destination(&origin, d, PI);
        assert_relative_eq!(south.lon(), 10.0, epsilon = 1e-9);
        assert!(south.lat() < 45.0);

        let east = destination(&origin, d, FRAC_PI_2);
        assert!(east.lon() > 10.0);

        let west = destination(&origin, d, 3.0 * FRAC_PI_2);
        assert!(west.lon() < 10.0);
        assert_relative_eq!(east.lat(), west.lat(), epsilon = 1e-9);
    }

    #[test]
    fn test_destination_wraps_antimeridian() {
        let origin = Point::new(179.5, 0.0);
        let dest = destination(&origin, 111_195.0, FRAC_PI_2);
        assert!(dest.lon() < -179.0 && dest.lon() > -180.0, "{:?}", dest);
    }

    #[test]
    fn test_destination_near_antipode() {
        let origin = Point::new(0.0, 0.0);
        let half_circumference = PI * EarthModel::MEAN.radius_m;
        let dest = destination(&origin, half_circumference * 0.999_999, 0.3);
        assert!(dest.is_finite());
        assert!((-180.0..=180.0).contains(&dest.lon()));
        assert!(haversine(&origin, &dest, EarthModel::MEAN.radius_m) > half_circumference * 0.99);
    }

    #[test]
    fn test_custom_radius_scales_distance() {
        let earth = EarthModel::new(1000.0);
        let a = Point::new(0.0, 0.0);
        let b = Point::new(90.0, 0.0);
        assert_relative_eq!(
            earth.distance(&a, &b, LengthUnit::Meters),
            1000.0 * FRAC_PI_2,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            earth.distance(&a, &b, LengthUnit::Kilometers),
            FRAC_PI_2,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_line_length() {
        let line = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ];
        let expected = distance_km(&line[0], &line[1]) + distance_km(&line[1], &line[2]);
        assert_relative_eq!(line_length_km(&line), expected, max_relative = 1e-12);
        assert_eq!(line_length_km(&line[..1]), 0.0);
        assert_eq!(line_length_km(&[]), 0.0);
    }
}
