//! Spherical-earth geometry primitives and grid generators.
//!
//! Distances, bearings, destination projection, antimeridian-aware bounding
//! boxes, polygon areas and point-in-polygon tests on a spherical Earth, plus
//! rectangular, hexagonal and radial grids built on top of them.
//!
//! ```rust
//! use geogrid::{BoundingBox, Config, HexTiling, Point};
//!
//! let config = Config::default();
//!
//! let paris = Point::new(2.3522, 48.8566);
//! let london = Point::new(-0.1278, 51.5074);
//! let km = geogrid::distance_km(&paris, &london);
//! assert!((km - 343.5).abs() < 1.0);
//!
//! let bounds = BoundingBox::new(2.25, 48.80, 2.45, 48.90);
//! let cells = geogrid::rectangular_cells(&bounds, 0.05, 0.05, &config)?;
//! let hexes = HexTiling::Geodesic { spacing_m: 1_000.0 }.cells(&bounds, &config)?;
//! assert!(!cells.is_empty() && !hexes.is_empty());
//! # Ok::<(), geogrid::GeoGridError>(())
//! ```

pub mod compat;
pub mod compute;
pub mod config;
pub mod error;
pub mod grid;
pub mod isochrone;

pub use config::{
    AntimeridianDetection, Config, EARTH_RADIUS_KM, EARTH_RADIUS_METERS, EarthModel, GridConfig,
    LengthUnit,
};
pub use error::{GeoGridError, Result};

pub use geogrid_types::{BoundingBox, MultiPolygon, Point, Polygon, Ring};

pub use compute::{
    bounding_box_or_zero, crosses_antimeridian, destination, distance_and_bearing, distance_km,
    haversine, initial_bearing, line_length_km, point_in_polygon, point_in_ring,
    polygon_area_km2, polygon_bounding_box, ring_area_km2,
};

pub use grid::{HexTiling, radial_points, radial_sectors, rectangular_cells, rectangular_points};

pub use isochrone::{Isochrone, IsochroneCollection, IsochroneParams, generate_isochrones};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{BoundingBox, MultiPolygon, Point, Polygon, Ring};

    pub use crate::{Config, EarthModel, GeoGridError, LengthUnit, Result};

    pub use crate::compute::{
        destination, distance_km, haversine, initial_bearing, point_in_polygon,
        polygon_area_km2, polygon_bounding_box,
    };

    pub use crate::grid::{
        HexTiling, radial_points, radial_sectors, rectangular_cells, rectangular_points,
    };
}
