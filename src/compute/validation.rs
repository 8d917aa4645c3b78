//! Validation for coordinates and grid parameters.
//!
//! Generators call these before doing any work; the strict API surfaces the
//! errors, the lenient adapters turn them into empty output.

use crate::error::{GeoGridError, Result};
use geogrid_types::bbox::BoundingBox;
use geogrid_types::point::Point;

/// Validates both coordinates are finite.
pub fn validate_finite_point(point: &Point) -> Result<()> {
    if !point.lon().is_finite() {
        return Err(GeoGridError::InvalidParameter(format!(
            "Longitude must be finite, got: {}",
            point.lon()
        )));
    }

    if !point.lat().is_finite() {
        return Err(GeoGridError::InvalidParameter(format!(
            "Latitude must be finite, got: {}",
            point.lat()
        )));
    }

    Ok(())
}

/// Validates grid bounds: finite and not inverted on either axis.
///
/// Inverted longitudes are legitimate for antimeridian bounding boxes but are
/// rejected as grid input.
pub fn validate_grid_bounds(bounds: &BoundingBox) -> Result<()> {
    let values = [bounds.min_lon, bounds.min_lat, bounds.max_lon, bounds.max_lat];
    if values.iter().any(|v| !v.is_finite()) {
        return Err(GeoGridError::InvalidBounds(format!(
            "bounds must be finite, got: {:?}",
            bounds
        )));
    }

    if bounds.min_lon > bounds.max_lon {
        return Err(GeoGridError::InvalidBounds(format!(
            "min_lon ({}) must be <= max_lon ({})",
            bounds.min_lon, bounds.max_lon
        )));
    }

    if bounds.min_lat > bounds.max_lat {
        return Err(GeoGridError::InvalidBounds(format!(
            "min_lat ({}) must be <= max_lat ({})",
            bounds.min_lat, bounds.max_lat
        )));
    }

    Ok(())
}

/// Validates a spacing, step or radius is finite and strictly positive.
pub fn validate_positive(name: &str, value: f64) -> Result<()> {
    if !(value.is_finite() && value > 0.0) {
        return Err(GeoGridError::InvalidParameter(format!(
            "{} must be finite and > 0, got: {}",
            name, value
        )));
    }
    Ok(())
}

/// Validates a count is non-zero.
pub fn validate_count(name: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(GeoGridError::InvalidParameter(format!(
            "{} must be > 0",
            name
        )));
    }
    Ok(())
}
