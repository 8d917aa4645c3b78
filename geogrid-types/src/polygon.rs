use crate::point::Point;
use serde::{Deserialize, Serialize};

#[cfg(feature = "geojson")]
use crate::error::GeoJsonError;

/// One boundary of a polygon: an ordered sequence of points.
///
/// Rings are expected to be closed (first point equals last point) with at
/// least 3 distinct vertices, but neither is enforced here. Area and
/// containment routines degrade to zero/false on rings that fall short.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ring(Vec<Point>);

impl Ring {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Build a ring from `(lon, lat)` pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Self(coords.iter().copied().map(Point::from).collect())
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Point> {
        self.0.first()
    }

    /// First and last points are equal.
    pub fn is_closed(&self) -> bool {
        !self.0.is_empty() && self.0.first() == self.0.last()
    }

    /// Returns a closed copy, appending the first point if it is not already repeated.
    pub fn closed(mut self) -> Self {
        if let Some(&first) = self.0.first()
            && !self.is_closed()
        {
            self.0.push(first);
        }
        self
    }

    /// Vertices without the closing duplicate.
    pub fn vertices(&self) -> &[Point] {
        if self.0.len() > 1 && self.is_closed() {
            &self.0[..self.0.len() - 1]
        } else {
            &self.0
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<Point> {
        self.0
    }
}

impl From<Vec<Point>> for Ring {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}

impl From<geo::LineString<f64>> for Ring {
    fn from(line: geo::LineString<f64>) -> Self {
        Self(line.0.into_iter().map(Point::from).collect())
    }
}

impl From<Ring> for geo::LineString<f64> {
    fn from(ring: Ring) -> Self {
        geo::LineString::new(ring.0.into_iter().map(geo::Coord::from).collect())
    }
}

impl<'a> IntoIterator for &'a Ring {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A polygon as an ordered list of rings: `rings[0]` is the outer boundary,
/// the rest are holes.
///
/// Holes are expected to lie inside the outer boundary; this is not validated.
///
/// # Examples
///
/// ```
/// use geogrid_types::polygon::Polygon;
///
/// let square = Polygon::from_coords(
///     &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)],
///     vec![vec![(0.25, 0.25), (0.75, 0.25), (0.75, 0.75), (0.25, 0.75), (0.25, 0.25)]],
/// );
/// assert_eq!(square.holes().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    rings: Vec<Ring>,
}

impl Polygon {
    /// Create a polygon from an outer ring and its holes.
    pub fn new(outer: Ring, holes: Vec<Ring>) -> Self {
        let mut rings = Vec::with_capacity(holes.len() + 1);
        rings.push(outer);
        rings.extend(holes);
        Self { rings }
    }

    /// Create a polygon from raw rings, outer ring first.
    pub fn from_rings(rings: Vec<Ring>) -> Self {
        Self { rings }
    }

    /// Create a polygon from `(lon, lat)` coordinate arrays.
    pub fn from_coords(outer: &[(f64, f64)], holes: Vec<Vec<(f64, f64)>>) -> Self {
        Self::new(
            Ring::from_coords(outer),
            holes.iter().map(|hole| Ring::from_coords(hole)).collect(),
        )
    }

    /// All rings in order, outer ring first.
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn outer(&self) -> Option<&Ring> {
        self.rings.first()
    }

    pub fn holes(&self) -> &[Ring] {
        self.rings.get(1..).unwrap_or(&[])
    }

    /// No rings, or an empty outer ring.
    pub fn is_empty(&self) -> bool {
        self.outer().is_none_or(Ring::is_empty)
    }

    /// Every vertex of every ring, in encounter order.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.rings.iter().flat_map(Ring::iter)
    }

    /// Convert to GeoJSON string representation.
    #[cfg(feature = "geojson")]
    pub fn to_geojson(&self) -> Result<String, GeoJsonError> {
        let geom = geojson::Geometry::new(self.to_geojson_value());
        serde_json::to_string(&geom).map_err(|e| {
            GeoJsonError::Serialization(format!("Failed to serialize polygon: {}", e))
        })
    }

    /// GeoJSON `Polygon` value for this polygon.
    #[cfg(feature = "geojson")]
    pub fn to_geojson_value(&self) -> geojson::Value {
        geojson::Value::Polygon(self.positions())
    }

    #[cfg(feature = "geojson")]
    fn positions(&self) -> Vec<Vec<Vec<f64>>> {
        self.rings
            .iter()
            .map(|ring| ring.iter().map(|p| vec![p.lon(), p.lat()]).collect())
            .collect()
    }

    #[cfg(feature = "geojson")]
    fn from_positions(rings: &[Vec<Vec<f64>>]) -> Result<Self, GeoJsonError> {
        let rings = rings
            .iter()
            .map(|ring| {
                ring.iter()
                    .map(|position| Point::from_position(position))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Ring::new)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rings })
    }

    /// Parse from a GeoJSON geometry string.
    ///
    /// ```
    /// # #[cfg(feature = "geojson")]
    /// # {
    /// use geogrid_types::polygon::Polygon;
    ///
    /// let json = r#"{"type":"Polygon",
    ///     "coordinates":[[[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,0.0]]]}"#;
    /// let polygon = Polygon::from_geojson(json).unwrap();
    /// assert_eq!(polygon.outer().map(|r| r.len()), Some(4));
    /// # }
    /// ```
    #[cfg(feature = "geojson")]
    pub fn from_geojson(geojson: &str) -> Result<Self, GeoJsonError> {
        let geom: geojson::Geometry = serde_json::from_str(geojson).map_err(|e| {
            GeoJsonError::Deserialization(format!("Failed to parse GeoJSON: {}", e))
        })?;

        match geom.value {
            geojson::Value::Polygon(rings) => Self::from_positions(&rings),
            _ => Err(GeoJsonError::InvalidGeometry(
                "GeoJSON geometry is not a Polygon".to_string(),
            )),
        }
    }
}

impl From<Ring> for Polygon {
    fn from(outer: Ring) -> Self {
        Self::new(outer, Vec::new())
    }
}

impl From<geo::Polygon<f64>> for Polygon {
    fn from(polygon: geo::Polygon<f64>) -> Self {
        let (exterior, interiors) = polygon.into_inner();
        Self::new(
            Ring::from(exterior),
            interiors.into_iter().map(Ring::from).collect(),
        )
    }
}

impl From<Polygon> for geo::Polygon<f64> {
    /// `geo` closes open rings on construction, and an empty polygon becomes
    /// an empty exterior.
    fn from(polygon: Polygon) -> Self {
        let mut rings = polygon.rings.into_iter().map(geo::LineString::from);
        let exterior = rings.next().unwrap_or_else(|| geo::LineString::new(Vec::new()));
        geo::Polygon::new(exterior, rings.collect())
    }
}

/// A collection of polygons with no adjacency or overlap invariant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiPolygon(Vec<Polygon>);

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self(polygons)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, polygon: Polygon) {
        self.0.push(polygon);
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<Polygon> {
        self.0
    }

    /// Convert to GeoJSON string representation.
    #[cfg(feature = "geojson")]
    pub fn to_geojson(&self) -> Result<String, GeoJsonError> {
        let value =
            geojson::Value::MultiPolygon(self.0.iter().map(Polygon::positions).collect());
        serde_json::to_string(&geojson::Geometry::new(value)).map_err(|e| {
            GeoJsonError::Serialization(format!("Failed to serialize multipolygon: {}", e))
        })
    }

    /// Parse from a GeoJSON geometry string.
    #[cfg(feature = "geojson")]
    pub fn from_geojson(geojson: &str) -> Result<Self, GeoJsonError> {
        let geom: geojson::Geometry = serde_json::from_str(geojson).map_err(|e| {
            GeoJsonError::Deserialization(format!("Failed to parse GeoJSON: {}", e))
        })?;

        match geom.value {
            geojson::Value::MultiPolygon(polygons) => polygons
                .iter()
                .map(|rings| Polygon::from_positions(rings))
                .collect::<Result<Vec<_>, _>>()
                .map(Self),
            _ => Err(GeoJsonError::InvalidGeometry(
                "GeoJSON geometry is not a MultiPolygon".to_string(),
            )),
        }
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(polygons: Vec<Polygon>) -> Self {
        Self(polygons)
    }
}

impl FromIterator<Polygon> for MultiPolygon {
    fn from_iter<I: IntoIterator<Item = Polygon>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Polygon> for MultiPolygon {
    fn extend<I: IntoIterator<Item = Polygon>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for MultiPolygon {
    type Item = Polygon;
    type IntoIter = std::vec::IntoIter<Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MultiPolygon {
    type Item = &'a Polygon;
    type IntoIter = std::slice::Iter<'a, Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
