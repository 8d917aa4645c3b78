//! Point-in-polygon by planar ray casting over (lon, lat).
//!
//! Longitude and latitude are treated as a flat plane, so results are only an
//! approximation for large polygons or ones near the poles.

use geogrid_types::point::Point;
use geogrid_types::polygon::{Polygon, Ring};

/// Check if a point is inside the outer ring and outside every hole.
///
/// # Examples
///
/// ```rust
/// use geogrid::{Point, Polygon, compute::containment::point_in_polygon};
///
/// let square = Polygon::from_coords(
///     &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)],
///     vec![],
/// );
/// assert!(point_in_polygon(&square, &Point::new(0.5, 0.5)));
/// assert!(!point_in_polygon(&square, &Point::new(2.0, 2.0)));
/// ```
pub fn point_in_polygon(polygon: &Polygon, point: &Point) -> bool {
    let Some(outer) = polygon.outer() else {
        return false;
    };

    point_in_ring(outer, point) && !polygon.holes().iter().any(|hole| point_in_ring(hole, point))
}

/// Even-odd ray casting against one ring. Rings with fewer than 3 points
/// contain nothing.
pub fn point_in_ring(ring: &Ring, point: &Point) -> bool {
    let coords = ring.points();
    if coords.len() < 3 {
        return false;
    }

    let (x, y) = (point.lon(), point.lat());
    let mut inside = false;
    let mut j = coords.len() - 1;

    for i in 0..coords.len() {
        let (xi, yi) = (coords[i].lon(), coords[i].lat());
        let (xj, yj) = (coords[j].lon(), coords[j].lat());

        if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_with_hole() -> Polygon {
        Polygon::from_coords(
            &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)],
            vec![vec![
                (0.25, 0.25),
                (0.75, 0.25),
                (0.75, 0.75),
                (0.25, 0.75),
                (0.25, 0.25),
            ]],
        )
    }

    #[test]
    fn test_hole_excludes_points() {
        let poly = square_with_hole();
        assert!(!point_in_polygon(&poly, &Point::new(0.5, 0.5)));
        assert!(point_in_polygon(&poly, &Point::new(0.1, 0.1)));
        assert!(point_in_polygon(&poly, &Point::new(0.9, 0.5)));
        assert!(!point_in_polygon(&poly, &Point::new(1.5, 0.5)));
    }

    #[test]
    fn test_concave_ring() {
        let l_shape = Ring::from_coords(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (0.0, 2.0),
            (0.0, 0.0),
        ]);
        assert!(point_in_ring(&l_shape, &Point::new(0.5, 1.5)));
        assert!(point_in_ring(&l_shape, &Point::new(1.5, 0.5)));
        assert!(!point_in_ring(&l_shape, &Point::new(1.5, 1.5)));
    }

    #[test]
    fn test_open_ring_still_works() {
        let triangle = Ring::from_coords(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]);
        assert!(point_in_ring(&triangle, &Point::new(1.0, 1.0)));
        assert!(!point_in_ring(&triangle, &Point::new(3.0, 3.0)));
    }

    #[test]
    fn test_degenerate_rings_contain_nothing() {
        let two = Ring::from_coords(&[(0.0, 0.0), (1.0, 1.0)]);
        assert!(!point_in_ring(&two, &Point::new(0.5, 0.5)));
        assert!(!point_in_polygon(&Polygon::default(), &Point::new(0.0, 0.0)));
        assert!(!point_in_polygon(&Polygon::from(Ring::default()), &Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_degenerate_hole_is_ignored() {
        let poly = Polygon::from_coords(
            &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)],
            vec![vec![(0.4, 0.4), (0.6, 0.6)]],
        );
        assert!(point_in_polygon(&poly, &Point::new(0.5, 0.5)));
    }
}
