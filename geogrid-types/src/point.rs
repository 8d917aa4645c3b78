use serde::{Deserialize, Serialize};

#[cfg(feature = "geojson")]
use crate::error::GeoJsonError;

/// A geographic point with longitude/latitude coordinates in degrees.
///
/// Ranges (`[-180, 180]` and `[-90, 90]`) are a convention only: out-of-range
/// values are accepted and flow through every formula unchanged.
///
/// Serializes as a GeoJSON-style `[lon, lat]` array.
///
/// # Examples
///
/// ```
/// use geogrid_types::point::Point;
///
/// let nyc = Point::new(-74.0060, 40.7128);
/// assert_eq!(nyc.lon(), -74.0060);
/// assert_eq!(nyc.lat(), 40.7128);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    inner: geo::Point<f64>,
}

impl Point {
    /// Create a new point from longitude and latitude in degrees.
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self {
            inner: geo::Point::new(lon, lat),
        }
    }

    /// Get the longitude.
    #[inline]
    pub fn lon(&self) -> f64 {
        self.inner.x()
    }

    /// Get the latitude.
    #[inline]
    pub fn lat(&self) -> f64 {
        self.inner.y()
    }

    /// Longitude in radians.
    #[inline]
    pub fn lon_rad(&self) -> f64 {
        self.lon().to_radians()
    }

    /// Latitude in radians.
    #[inline]
    pub fn lat_rad(&self) -> f64 {
        self.lat().to_radians()
    }

    /// Both coordinates are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lon().is_finite() && self.lat().is_finite()
    }

    /// Access the inner `geo::Point`.
    #[inline]
    pub fn inner(&self) -> &geo::Point<f64> {
        &self.inner
    }

    /// Convert to GeoJSON string representation.
    ///
    /// ```
    /// # #[cfg(feature = "geojson")]
    /// # {
    /// use geogrid_types::point::Point;
    ///
    /// let json = Point::new(-74.0060, 40.7128).to_geojson().unwrap();
    /// assert!(json.contains("Point"));
    /// # }
    /// ```
    #[cfg(feature = "geojson")]
    pub fn to_geojson(&self) -> Result<String, GeoJsonError> {
        let geom = geojson::Geometry::new(self.to_geojson_value());
        serde_json::to_string(&geom)
            .map_err(|e| GeoJsonError::Serialization(format!("Failed to serialize point: {}", e)))
    }

    #[cfg(feature = "geojson")]
    pub(crate) fn to_geojson_value(self) -> geojson::Value {
        geojson::Value::Point(vec![self.lon(), self.lat()])
    }

    /// Parse from a GeoJSON geometry string.
    #[cfg(feature = "geojson")]
    pub fn from_geojson(geojson: &str) -> Result<Self, GeoJsonError> {
        let geom: geojson::Geometry = serde_json::from_str(geojson).map_err(|e| {
            GeoJsonError::Deserialization(format!("Failed to parse GeoJSON: {}", e))
        })?;

        match geom.value {
            geojson::Value::Point(coords) => Self::from_position(&coords),
            _ => Err(GeoJsonError::InvalidGeometry(
                "GeoJSON geometry is not a Point".to_string(),
            )),
        }
    }

    #[cfg(feature = "geojson")]
    pub(crate) fn from_position(position: &[f64]) -> Result<Self, GeoJsonError> {
        match position {
            [lon, lat, ..] => Ok(Point::new(*lon, *lat)),
            _ => Err(GeoJsonError::InvalidCoordinates(format!(
                "position must have at least 2 coordinates, got {}",
                position.len()
            ))),
        }
    }
}

impl From<geo::Point<f64>> for Point {
    fn from(point: geo::Point<f64>) -> Self {
        Self { inner: point }
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(point: Point) -> Self {
        point.inner
    }
}

impl From<geo::Coord<f64>> for Point {
    fn from(coord: geo::Coord<f64>) -> Self {
        Self::new(coord.x, coord.y)
    }
}

impl From<Point> for geo::Coord<f64> {
    fn from(point: Point) -> Self {
        geo::coord! { x: point.lon(), y: point.lat() }
    }
}

impl From<(f64, f64)> for Point {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.lon(), point.lat())
    }
}

impl From<[f64; 2]> for Point {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self::new(lon, lat)
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.lon(), point.lat()]
    }
}
