use geogrid::{
    AntimeridianDetection, BoundingBox, Config, HexTiling, Point, Polygon, Ring, compat,
    compute::{
        bounding_box_or_zero, destination, distance_km, initial_bearing, line_length_km,
        point_in_ring, polygon_area_km2, polygon_bounding_box, ring_area_km2,
    },
    grid::{radial_points, radial_sectors, rectangular_cells, rectangular_points},
};

/// Test 1: Identical points have zero distance and a zero bearing
#[test]
fn test_identical_points() {
    let p = Point::new(12.4964, 41.9028);
    assert_eq!(distance_km(&p, &p), 0.0);
    assert_eq!(initial_bearing(&p, &p), 0.0);
    assert_eq!(line_length_km(&[p]), 0.0);
    assert_eq!(line_length_km(&[]), 0.0);
}

/// Test 2: Poles and the antimeridian are handled without panics
#[test]
fn test_extreme_coordinates() {
    let north_pole = Point::new(0.0, 90.0);
    let south_pole = Point::new(0.0, -90.0);
    let date_line_west = Point::new(180.0, 0.0);
    let date_line_east = Point::new(-180.0, 0.0);

    // Half the circumference between the poles
    let half = std::f64::consts::PI * 6371.0;
    assert!((distance_km(&north_pole, &south_pole) - half).abs() < 1e-6);
    assert!(distance_km(&date_line_west, &date_line_east) < 1e-6);

    let projected = destination(&north_pole, 1_000_000.0, std::f64::consts::PI);
    assert!(projected.lat() < 90.0 && projected.lat() > 80.0);
}

/// Test 3: Non-finite input propagates instead of panicking
#[test]
fn test_nan_propagates() {
    let nan = Point::new(f64::NAN, 0.0);
    let origin = Point::new(0.0, 0.0);
    assert!(distance_km(&nan, &origin).is_nan());
    assert!(!destination(&nan, 100.0, 0.0).is_finite());
}

/// Test 4: Degenerate rings have no area and contain nothing
#[test]
fn test_degenerate_rings() {
    let line = Ring::from_coords(&[(0.0, 0.0), (1.0, 1.0)]);
    assert_eq!(ring_area_km2(&line), 0.0);
    assert!(!point_in_ring(&line, &Point::new(0.5, 0.5)));

    let empty = Polygon::default();
    assert_eq!(polygon_area_km2(&empty), 0.0);
    assert!(polygon_bounding_box(&empty, AntimeridianDetection::Concatenated).is_err());
    assert!(bounding_box_or_zero(&empty, AntimeridianDetection::Concatenated).is_zero());
    assert!(compat::calculate_bounding_box(&empty).is_zero());
}

/// Test 5: Huge grids are truncated by the step cap
#[test]
fn test_step_cap_bounds_output() {
    let config = Config::default().with_max_steps(50);
    let world = BoundingBox::new(-180.0, -80.0, 180.0, 80.0);

    let points = rectangular_points(&world, 0.001, 0.001, &config).unwrap();
    assert_eq!(points.len(), 50 * 50);

    let cells = rectangular_cells(&world, 0.001, 0.001, &config).unwrap();
    assert_eq!(cells.len(), 50 * 50);

    let hexes = HexTiling::Geodesic { spacing_m: 10.0 }.centers(&world, &config).unwrap();
    assert!(hexes.len() <= 50 * 51);
}

/// Test 6: Degenerate bounds produce a single point and no cells
#[test]
fn test_point_bounds() {
    let config = Config::default();
    let bounds = BoundingBox::new(7.0, 46.0, 7.0, 46.0);

    assert_eq!(
        rectangular_points(&bounds, 0.1, 0.1, &config).unwrap(),
        vec![Point::new(7.0, 46.0)]
    );
    assert!(rectangular_cells(&bounds, 0.1, 0.1, &config).unwrap().is_empty());
    assert_eq!(
        HexTiling::PlanarMercator { radius_deg: 0.1 }.centers(&bounds, &config).unwrap().len(),
        1
    );
}

/// Test 7: Planar hexagons near the pole keep a finite row pitch
#[test]
fn test_planar_hexagons_near_pole() {
    let config = Config::default();
    let bounds = BoundingBox::new(0.0, 89.0, 1.0, 90.0);
    let cells = HexTiling::PlanarMercator { radius_deg: 0.1 }.cells(&bounds, &config).unwrap();

    assert!(!cells.is_empty());
    for cell in &cells {
        assert!(cell.points().all(|p| p.is_finite()));
    }
}

/// Test 8: Spacing larger than the bounds still yields the corner cell
#[test]
fn test_spacing_larger_than_bounds() {
    let config = Config::default();
    let bounds = BoundingBox::new(0.0, 0.0, 0.001, 0.001);

    let centers = HexTiling::Geodesic { spacing_m: 100_000.0 }.centers(&bounds, &config).unwrap();
    assert_eq!(centers, vec![Point::new(0.0, 0.0)]);

    let cells = rectangular_cells(&bounds, 1.0, 1.0, &config).unwrap();
    assert_eq!(cells.len(), 1);
}

/// Test 9: A custom radius scales every distance
#[test]
fn test_custom_earth_radius() {
    let center = Point::new(0.0, 0.0);
    let mars = Config::default().with_radius_m(3_389_500.0);

    let points = radial_points(&center, 100_000.0, 1, 4, &mars).unwrap();
    let east = points[2];
    let earth_east = destination(&center, 100_000.0, std::f64::consts::FRAC_PI_2);

    // Same arc length covers more degrees on the smaller sphere
    assert!(east.lon() > earth_east.lon());
    assert!((east.lon() / earth_east.lon() - 6_371_000.0 / 3_389_500.0).abs() < 1e-9);
}

/// Test 10: Steps far smaller than the bounds are capped instead of overflowing
#[test]
fn test_vanishing_step() {
    let bounds = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
    let config = Config::default().with_max_steps(3);

    let points = rectangular_points(&bounds, 1.0, 1e-20, &config).unwrap();
    assert_eq!(points.len(), 3 * 2);
    let cells = rectangular_cells(&bounds, 1e-20, 1.0, &config).unwrap();
    assert_eq!(cells.len(), 3);

    // Lenient entry points run with the default cap of 10_000 per axis
    let points = compat::rectangular_grid(0.0, 0.0, 1.0, 1.0, 1e-20, 1.0);
    assert_eq!(points.len(), 10_000 * 2);
    let cells = compat::rectangular_grid_cells(0.0, 0.0, 1.0, 1.0, 1.0, 1e-20);
    assert_eq!(cells.len(), 10_000);
}

/// Test 11: Oversized ring, point and sector counts are capped
#[test]
fn test_radial_counts_are_capped() {
    let center = Point::new(0.0, 0.0);

    let points = radial_points(&center, 1_000.0, usize::MAX, 1, &Config::default()).unwrap();
    assert_eq!(points.len(), 1 + 10_000);
    assert_eq!(compat::radial_grid(0.0, 0.0, 1_000.0, usize::MAX, 1).len(), 1 + 10_000);

    let config = Config::default().with_max_steps(4);
    let points = radial_points(&center, 1_000.0, usize::MAX, usize::MAX, &config).unwrap();
    assert_eq!(points.len(), 1 + 4 * 4);
    let sectors = radial_sectors(&center, 1_000.0, usize::MAX, usize::MAX, &config).unwrap();
    assert_eq!(sectors.len(), 4 * 4);
}
