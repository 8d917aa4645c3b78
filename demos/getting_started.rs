//! Getting Started
//!
//! Measures a few distances, builds each kind of grid over central Madrid and
//! prints a walking isochrone as GeoJSON.
//!
//! Run with `RUST_LOG=debug` to see the generator logs.

use geogrid::isochrone::{IsochroneParams, generate_isochrones};
use geogrid::prelude::*;
use geogrid::{AntimeridianDetection, compute::crosses_antimeridian};
use std::error::Error;

fn main() -> std::result::Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("=== geogrid - Getting Started ===\n");

    let config = Config::default();

    // ========================================
    // 1. Distances and bearings
    // ========================================
    println!("1. Distances and bearings");
    println!("-------------------------");

    let madrid = Point::new(-3.7038, 40.4168);
    let lisbon = Point::new(-9.1393, 38.7223);
    let paris = Point::new(2.3522, 48.8566);

    for (name, city) in [("Lisbon", &lisbon), ("Paris", &paris)] {
        println!(
            "   Madrid -> {}: {:.1} km, initial bearing {:.1}°",
            name,
            distance_km(&madrid, city),
            initial_bearing(&madrid, city).to_degrees()
        );
    }

    let ten_km_north = destination(&madrid, 10_000.0, 0.0);
    println!(
        "   10 km north of Madrid: ({:.4}, {:.4})\n",
        ten_km_north.lon(),
        ten_km_north.lat()
    );

    // ========================================
    // 2. Polygons
    // ========================================
    println!("2. Polygons");
    println!("-----------");

    let fiji = Polygon::from_coords(
        &[(177.0, -19.0), (-179.0, -19.0), (-179.0, -16.0), (177.0, -16.0), (177.0, -19.0)],
        vec![],
    );
    let bbox = polygon_bounding_box(&fiji, config.antimeridian)?;
    println!(
        "   Fiji box: min_lon {:.1}, max_lon {:.1} (crosses antimeridian: {})",
        bbox.min_lon,
        bbox.max_lon,
        crosses_antimeridian(&fiji, AntimeridianDetection::PerRing)
    );
    println!("   Fiji box area: {:.0} km²", polygon_area_km2(&fiji));
    println!(
        "   Suva inside: {}\n",
        point_in_polygon(&fiji, &Point::new(178.4419, -18.1416))
    );

    // ========================================
    // 3. Grids
    // ========================================
    println!("3. Grids over central Madrid");
    println!("----------------------------");

    let bounds = BoundingBox::new(-3.75, 40.38, -3.65, 40.46);

    let points = rectangular_points(&bounds, 0.01, 0.01, &config)?;
    let cells = rectangular_cells(&bounds, 0.01, 0.01, &config)?;
    println!("   Rectangular: {} points, {} cells", points.len(), cells.len());

    let geodesic = HexTiling::Geodesic { spacing_m: 1_000.0 }.cells(&bounds, &config)?;
    let planar = HexTiling::PlanarMercator { radius_deg: 0.005 }.cells(&bounds, &config)?;
    println!("   Hexagonal: {} geodesic, {} planar", geodesic.len(), planar.len());

    let rings = radial_points(&madrid, 3_000.0, 3, 12, &config)?;
    let sectors = radial_sectors(&madrid, 3_000.0, 8, 3, &config)?;
    println!("   Radial: {} points, {} sectors\n", rings.len(), sectors.len());

    // ========================================
    // 4. Isochrones
    // ========================================
    println!("4. Walking isochrones");
    println!("---------------------");

    let params = IsochroneParams::new(madrid, vec![600, 1200], 36, 1.4);
    let isochrones = generate_isochrones(&params, &config)?;
    for iso in &isochrones {
        println!(
            "   {} min: radius {:.0} m, area {:.2} km²",
            iso.duration_s / 60,
            iso.distance_m(),
            polygon_area_km2(&iso.polygon)
        );
    }

    if let Some(iso) = isochrones.for_duration(600) {
        let feature = iso.to_feature();
        let json = serde_json::to_string(&feature)?;
        println!("   GeoJSON: {}...", &json[..json.len().min(120)]);
    }

    Ok(())
}
