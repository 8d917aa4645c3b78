//! Antimeridian-aware bounding boxes for polygons.

use crate::config::AntimeridianDetection;
use crate::error::{GeoGridError, Result};
use geogrid_types::bbox::BoundingBox;
use geogrid_types::polygon::{Polygon, Ring};

/// Compute the bounding box of a polygon, across all of its rings.
///
/// If the polygon crosses the antimeridian the result is inverted:
/// `min_lon` is the westernmost non-negative longitude and `max_lon` the
/// easternmost negative one. `detection` controls whether the crossing test
/// runs over all rings concatenated or over each ring separately.
///
/// # Errors
///
/// Returns [`GeoGridError::EmptyGeometry`] if the polygon has no rings or an
/// empty outer ring. See [`bounding_box_or_zero`] for the lenient form.
///
/// # Examples
///
/// ```rust
/// use geogrid::compute::bbox::polygon_bounding_box;
/// use geogrid::{AntimeridianDetection, Polygon};
///
/// let poly = Polygon::from_coords(
///     &[(179.0, -1.0), (-179.0, -1.0), (-179.0, 1.0), (179.0, 1.0), (179.0, -1.0)],
///     vec![],
/// );
/// let bbox = polygon_bounding_box(&poly, AntimeridianDetection::Concatenated).unwrap();
/// assert_eq!((bbox.min_lon, bbox.max_lon), (179.0, -179.0));
/// ```
pub fn polygon_bounding_box(
    polygon: &Polygon,
    detection: AntimeridianDetection,
) -> Result<BoundingBox> {
    if polygon.is_empty() {
        return Err(GeoGridError::EmptyGeometry(
            "polygon has no outer ring vertices".to_string(),
        ));
    }

    let (min_lat, max_lat) = min_max(polygon.points().map(|p| p.lat()));

    let (min_lon, max_lon) = if crosses_antimeridian(polygon, detection) {
        wrapped_lon_extent(polygon)
    } else {
        plain_lon_extent(polygon)
    };

    Ok(BoundingBox::new(min_lon, min_lat, max_lon, max_lat))
}

/// Lenient form of [`polygon_bounding_box`]: empty polygons give the zero box.
pub fn bounding_box_or_zero(polygon: &Polygon, detection: AntimeridianDetection) -> BoundingBox {
    polygon_bounding_box(polygon, detection).unwrap_or_default()
}

/// True if adjacent longitudes jump by more than 180°.
pub fn crosses_antimeridian(polygon: &Polygon, detection: AntimeridianDetection) -> bool {
    match detection {
        AntimeridianDetection::Concatenated => has_jump(polygon.points().map(|p| p.lon())),
        AntimeridianDetection::PerRing => polygon
            .rings()
            .iter()
            .any(|ring: &Ring| has_jump(ring.iter().map(|p| p.lon()))),
    }
}

fn has_jump(lons: impl Iterator<Item = f64>) -> bool {
    let mut prev: Option<f64> = None;
    for lon in lons {
        if let Some(p) = prev
            && (lon - p).abs() > 180.0
        {
            return true;
        }
        prev = Some(lon);
    }
    false
}

// (west, east): smallest non-negative and largest negative longitude
fn wrapped_lon_extent(polygon: &Polygon) -> (f64, f64) {
    polygon
        .points()
        .map(|p| p.lon())
        .fold((180.0_f64, -180.0_f64), |(west, east), lon| {
            if lon < 0.0 {
                (west, east.max(lon))
            } else {
                (west.min(lon), east)
            }
        })
}

fn plain_lon_extent(polygon: &Polygon) -> (f64, f64) {
    min_max(polygon.points().map(|p| p.lon()))
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}
