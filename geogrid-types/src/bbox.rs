use crate::point::Point;
use serde::{Deserialize, Serialize};

/// A longitude/latitude bounding box in degrees.
///
/// Normally `min_lon <= max_lon`. When the enclosed geometry crosses the
/// ±180° antimeridian the box is inverted (`min_lon > max_lon`): it starts at
/// `min_lon`, runs east through 180° and ends at `max_lon`.
///
/// The all-zero box is what bounding box computation returns for empty
/// geometry; check [`BoundingBox::is_zero`] before using it further.
///
/// # Examples
///
/// ```
/// use geogrid_types::bbox::BoundingBox;
/// use geogrid_types::point::Point;
///
/// let fiji = BoundingBox::new(177.0, -19.0, -178.0, -16.0);
/// assert!(fiji.crosses_antimeridian());
/// assert!(fiji.contains_point(&Point::new(179.5, -17.0)));
/// assert!(fiji.contains_point(&Point::new(-179.5, -17.0)));
/// assert!(!fiji.contains_point(&Point::new(0.0, -17.0)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Western boundary
    pub min_lon: f64,
    /// Southern boundary
    pub min_lat: f64,
    /// Eastern boundary
    pub max_lon: f64,
    /// Northern boundary
    pub max_lat: f64,
}

impl BoundingBox {
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Box whose four values are all zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Inverted box signalling a wrap across the antimeridian.
    pub fn crosses_antimeridian(&self) -> bool {
        self.min_lon > self.max_lon
    }

    /// Longitudinal extent in degrees, going east from `min_lon` to `max_lon`.
    pub fn lon_span(&self) -> f64 {
        if self.crosses_antimeridian() {
            360.0 - (self.min_lon - self.max_lon)
        } else {
            self.max_lon - self.min_lon
        }
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Check whether a point lies inside the box, honoring antimeridian wrap.
    pub fn contains_point(&self, point: &Point) -> bool {
        let lat_ok = point.lat() >= self.min_lat && point.lat() <= self.max_lat;
        let lon = point.lon();
        let lon_ok = if self.crosses_antimeridian() {
            lon >= self.min_lon || lon <= self.max_lon
        } else {
            lon >= self.min_lon && lon <= self.max_lon
        };
        lat_ok && lon_ok
    }

    /// South-west corner.
    pub fn min_point(&self) -> Point {
        Point::new(self.min_lon, self.min_lat)
    }

    /// North-east corner.
    pub fn max_point(&self) -> Point {
        Point::new(self.max_lon, self.max_lat)
    }

    /// Convert to a `geo::Rect`. Only meaningful for non-inverted boxes, since
    /// `geo` normalizes the corners.
    pub fn to_rect(&self) -> geo::Rect<f64> {
        geo::Rect::new(self.min_point(), self.max_point())
    }
}

impl From<geo::Rect<f64>> for BoundingBox {
    fn from(rect: geo::Rect<f64>) -> Self {
        Self::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_box() {
        let bbox = BoundingBox::new(-74.0, 40.7, -73.9, 40.8);
        assert!(!bbox.crosses_antimeridian());
        assert!((bbox.lon_span() - 0.1).abs() < 1e-9);
        assert!((bbox.lat_span() - 0.1).abs() < 1e-9);
        assert!(bbox.contains_point(&Point::new(-73.95, 40.75)));
        assert!(!bbox.contains_point(&Point::new(-73.85, 40.75)));
        assert!(!bbox.contains_point(&Point::new(-73.95, 40.85)));
    }

    #[test]
    fn test_inverted_box() {
        let bbox = BoundingBox::new(179.0, -1.0, -179.0, 1.0);
        assert!(bbox.crosses_antimeridian());
        assert!((bbox.lon_span() - 2.0).abs() < 1e-9);
        assert!(bbox.contains_point(&Point::new(180.0, 0.0)));
        assert!(bbox.contains_point(&Point::new(-179.5, 0.0)));
        assert!(!bbox.contains_point(&Point::new(178.0, 0.0)));
    }

    #[test]
    fn test_zero_box() {
        assert!(BoundingBox::default().is_zero());
        assert!(!BoundingBox::new(0.0, 0.0, 1.0, 0.0).is_zero());
    }

    #[test]
    fn test_rect_conversion() {
        let bbox = BoundingBox::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(BoundingBox::from(bbox.to_rect()), bbox);
    }
}
