//! Circular travel-time contours.
//!
//! An isochrone here is the circle reachable from an origin at a constant
//! top speed: its radius is `duration * max_speed`. There is no road network
//! involved, so the contour is only an upper bound on reachability.
//!
//! ```rust
//! use geogrid::Point;
//! use geogrid::isochrone::{IsochroneParams, generate_isochrones};
//!
//! let params = IsochroneParams::new(Point::new(13.4050, 52.5200), vec![300, 600], 32, 1.5);
//! let isochrones = generate_isochrones(&params, &geogrid::Config::default()).unwrap();
//!
//! assert_eq!(isochrones.len(), 2);
//! let ten_minutes = isochrones.for_duration(600).unwrap();
//! assert_eq!(ten_minutes.distance_m(), 900.0);
//! ```

use crate::compute::numeric::round_to;
use crate::compute::validation::{validate_finite_point, validate_positive};
use crate::config::Config;
use crate::error::{GeoGridError, Result};
use geogrid_types::point::Point;
use geogrid_types::polygon::{MultiPolygon, Polygon, Ring};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::f64::consts::TAU;

/// Fewest boundary vertices that still enclose an area.
pub const MIN_RESOLUTION: usize = 3;

/// Input for [`generate_isochrones`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsochroneParams {
    pub origin: Point,
    /// Travel times in seconds; one isochrone is built per entry
    pub durations: Vec<u64>,
    /// Number of distinct vertices on each contour
    pub resolution: usize,
    /// Top speed in meters per second
    pub max_speed_mps: f64,
}

impl IsochroneParams {
    pub fn new(origin: Point, durations: Vec<u64>, resolution: usize, max_speed_mps: f64) -> Self {
        Self {
            origin,
            durations,
            resolution,
            max_speed_mps,
        }
    }

    fn validate(&self) -> Result<()> {
        validate_finite_point(&self.origin)?;
        validate_positive("max_speed_mps", self.max_speed_mps)?;

        if self.resolution < MIN_RESOLUTION {
            return Err(GeoGridError::InvalidParameter(format!(
                "resolution must be >= {}, got: {}",
                MIN_RESOLUTION, self.resolution
            )));
        }

        if self.durations.contains(&0) {
            return Err(GeoGridError::InvalidParameter(
                "durations must be > 0 seconds".to_string(),
            ));
        }

        Ok(())
    }
}

/// Decimal places kept for `distance_meters`.
const DISTANCE_PRECISION: u32 = 3;

/// A single contour and its descriptive properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Isochrone {
    pub origin: Point,
    pub duration_s: u64,
    pub polygon: Polygon,
    /// `duration_seconds`, `max_speed` and `distance_meters`, in that order,
    /// plus anything the caller adds
    pub properties: Map<String, Value>,
}

impl Isochrone {
    /// Reach radius in meters, as recorded in the properties (millimeter
    /// precision).
    pub fn distance_m(&self) -> f64 {
        self.properties
            .get("distance_meters")
            .and_then(Value::as_f64)
            .unwrap_or_default()
    }

    /// GeoJSON Feature with the contour polygon as geometry.
    ///
    /// `duration_seconds` is filled in if the caller removed it from the
    /// properties.
    #[cfg(feature = "geojson")]
    pub fn to_feature(&self) -> geojson::Feature {
        let mut properties = self.properties.clone();
        properties
            .entry("duration_seconds")
            .or_insert_with(|| Value::from(self.duration_s));

        geojson::Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(self.polygon.to_geojson_value())),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

/// Isochrones in the order their durations were requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IsochroneCollection(Vec<Isochrone>);

impl IsochroneCollection {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Isochrone> {
        self.0.iter()
    }

    /// First isochrone built for `duration_s`, if any.
    pub fn for_duration(&self, duration_s: u64) -> Option<&Isochrone> {
        self.0.iter().find(|iso| iso.duration_s == duration_s)
    }

    /// Every contour polygon as one multipolygon. Overlaps are kept as-is.
    pub fn merge(&self) -> MultiPolygon {
        self.0.iter().map(|iso| iso.polygon.clone()).collect()
    }

    #[cfg(feature = "geojson")]
    pub fn to_feature_collection(&self) -> geojson::FeatureCollection {
        geojson::FeatureCollection {
            bbox: None,
            features: self.0.iter().map(Isochrone::to_feature).collect(),
            foreign_members: None,
        }
    }

    pub fn into_inner(self) -> Vec<Isochrone> {
        self.0
    }
}

impl<'a> IntoIterator for &'a IsochroneCollection {
    type Item = &'a Isochrone;
    type IntoIter = std::slice::Iter<'a, Isochrone>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Build one circular isochrone per requested duration.
pub fn generate_isochrones(
    params: &IsochroneParams,
    config: &Config,
) -> Result<IsochroneCollection> {
    config.validate()?;
    params.validate()?;

    let isochrones: Vec<Isochrone> = params
        .durations
        .iter()
        .map(|&duration_s| circular_isochrone(params, duration_s, config))
        .collect();

    log::debug!(
        "generated {} isochrones around {:?}",
        isochrones.len(),
        params.origin
    );
    Ok(IsochroneCollection(isochrones))
}

fn circular_isochrone(params: &IsochroneParams, duration_s: u64, config: &Config) -> Isochrone {
    let distance_m = duration_s as f64 * params.max_speed_mps;

    let mut properties = Map::new();
    properties.insert("duration_seconds".to_string(), Value::from(duration_s));
    properties.insert("max_speed".to_string(), Value::from(params.max_speed_mps));
    properties.insert(
        "distance_meters".to_string(),
        Value::from(round_to(distance_m, DISTANCE_PRECISION)),
    );

    Isochrone {
        origin: params.origin,
        duration_s,
        polygon: circle(&params.origin, distance_m, params.resolution, config),
        properties,
    }
}

fn circle(center: &Point, radius_m: f64, resolution: usize, config: &Config) -> Polygon {
    let ring: Ring = (0..resolution)
        .map(|i| {
            let bearing = TAU * i as f64 / resolution as f64;
            config.earth.destination(center, radius_m, bearing)
        })
        .collect::<Vec<_>>()
        .into();
    Polygon::from(ring.closed())
}
