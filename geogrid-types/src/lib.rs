//! # geogrid-types
//!
//! Coordinate containers shared by the geogrid primitives and grid generators.
//!
//! - **Point**: `(longitude, latitude)` in degrees, serialized as `[lon, lat]`
//! - **Rings and polygons**: `Ring`, `Polygon` (outer ring plus holes), `MultiPolygon`
//! - **Bounding boxes**: `BoundingBox`, which may be inverted to mark an antimeridian wrap
//!
//! All types are serializable with Serde and convert to and from the `geo`
//! crate's primitives.
//!
//! ## Examples
//!
//! ```rust
//! use geogrid_types::point::Point;
//! use geogrid_types::polygon::Polygon;
//!
//! let square = Polygon::from_coords(
//!     &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)],
//!     vec![],
//! );
//! assert!(square.outer().is_some_and(|ring| ring.is_closed()));
//!
//! let nyc = Point::new(-74.0060, 40.7128);
//! assert_eq!(nyc.lon(), -74.0060);
//! ```

pub mod bbox;
pub mod error;
pub mod point;
pub mod polygon;

pub use bbox::BoundingBox;
pub use error::GeoJsonError;
pub use point::Point;
pub use polygon::{MultiPolygon, Polygon, Ring};
