//! Rectangular point and cell grids with latitude-corrected longitude steps.
//!
//! Rows step by a fixed latitude increment. Within a row the longitude step is
//! widened by `1/cos(lat)` (cosine floored at 0.1, factor capped at 10) so that
//! neighbouring points stay roughly the same physical distance apart as rows
//! approach the poles.

use super::{clamped_cos_lat, warn_step_cap};
use crate::compute::validation::{validate_grid_bounds, validate_positive};
use crate::config::{Config, GridConfig};
use crate::error::Result;
use geogrid_types::bbox::BoundingBox;
use geogrid_types::point::Point;
use geogrid_types::polygon::{MultiPolygon, Polygon, Ring};

const MAX_LON_STEP_FACTOR: f64 = 10.0;

/// Longitude step for a row at `lat_deg`.
pub fn adjusted_lon_step(step_lon: f64, lat_deg: f64) -> f64 {
    let factor = (1.0 / clamped_cos_lat(lat_deg)).min(MAX_LON_STEP_FACTOR);
    step_lon * factor
}

/// Generate grid points covering `bounds`.
///
/// Values along each axis are `min + i * step`. A value that overshoots the
/// upper bound by no more than `config.grid.boundary_snap` of a step is
/// clamped onto the bound, so the far edge is included despite the latitude
/// correction.
///
/// # Examples
///
/// ```rust
/// use geogrid::{BoundingBox, Config, grid::rectangular_points};
///
/// let bounds = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
/// let points = rectangular_points(&bounds, 0.5, 0.5, &Config::default()).unwrap();
/// assert_eq!(points.len(), 9);
/// ```
pub fn rectangular_points(
    bounds: &BoundingBox,
    step_lon: f64,
    step_lat: f64,
    config: &Config,
) -> Result<Vec<Point>> {
    config.validate()?;
    validate_grid_bounds(bounds)?;
    validate_positive("step_lon", step_lon)?;
    validate_positive("step_lat", step_lat)?;

    let max_steps = config.grid.max_steps;
    let lat_count = step_count(bounds.min_lat, bounds.max_lat, step_lat).saturating_add(1);
    let lon_count = step_count(bounds.min_lon, bounds.max_lon, step_lon).saturating_add(1);
    let capacity = lat_count.min(max_steps).saturating_mul(lon_count.min(max_steps));
    let mut grid = Vec::with_capacity(capacity);

    for lat in axis_values(bounds.min_lat, bounds.max_lat, step_lat, &config.grid, "latitude") {
        let step = adjusted_lon_step(step_lon, lat);
        for lon in axis_values(bounds.min_lon, bounds.max_lon, step, &config.grid, "longitude") {
            grid.push(Point::new(lon, lat));
        }
    }

    log::debug!("rectangular grid: {} points", grid.len());
    Ok(grid)
}

/// Generate grid cells covering `bounds`, each a closed 5-point ring.
///
/// The last row and column are clipped to the upper bound instead of
/// overshooting it. Slivers narrower than `config.grid.boundary_snap` of a
/// step are merged into the previous cell.
///
/// # Examples
///
/// ```rust
/// use geogrid::{BoundingBox, Config, grid::rectangular_cells};
///
/// let bounds = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
/// let cells = rectangular_cells(&bounds, 0.5, 0.5, &Config::default()).unwrap();
/// assert_eq!(cells.len(), 4);
/// ```
pub fn rectangular_cells(
    bounds: &BoundingBox,
    step_lon: f64,
    step_lat: f64,
    config: &Config,
) -> Result<MultiPolygon> {
    config.validate()?;
    validate_grid_bounds(bounds)?;
    validate_positive("step_lon", step_lon)?;
    validate_positive("step_lat", step_lat)?;

    let max_steps = config.grid.max_steps;
    let lat_count = step_count(bounds.min_lat, bounds.max_lat, step_lat);
    let lon_count = step_count(bounds.min_lon, bounds.max_lon, step_lon);
    let capacity = lat_count.min(max_steps).saturating_mul(lon_count.min(max_steps));
    let mut cells = MultiPolygon::with_capacity(capacity);

    for (lat, next_lat) in
        axis_spans(bounds.min_lat, bounds.max_lat, step_lat, &config.grid, "latitude")
    {
        let step = adjusted_lon_step(step_lon, lat);
        for (lon, next_lon) in
            axis_spans(bounds.min_lon, bounds.max_lon, step, &config.grid, "longitude")
        {
            cells.push(Polygon::from(Ring::new(vec![
                Point::new(lon, lat),
                Point::new(next_lon, lat),
                Point::new(next_lon, next_lat),
                Point::new(lon, next_lat),
                Point::new(lon, lat),
            ])));
        }
    }

    log::debug!("rectangular grid: {} cells", cells.len());
    Ok(cells)
}

/// Whole steps needed to cover `[min, max]`. Saturates at `usize::MAX` for
/// steps far smaller than the range.
fn step_count(min: f64, max: f64, step: f64) -> usize {
    ((max - min) / step).ceil() as usize
}

/// Sample positions `min + i * step` up to `max`, snapping a slight overshoot
/// onto `max`.
fn axis_values(min: f64, max: f64, step: f64, grid: &GridConfig, axis: &str) -> Vec<f64> {
    let tolerance = grid.boundary_snap * step;
    let mut values = Vec::new();

    for i in 0..grid.max_steps {
        let value = min + i as f64 * step;
        if value <= max {
            values.push(value);
        } else {
            if value - max <= tolerance {
                values.push(max);
            }
            return values;
        }
    }

    warn_step_cap("rectangular grid", axis, grid.max_steps);
    values
}

/// Consecutive `(start, end)` spans from `min` to `max`, the last one clipped
/// to `max`.
fn axis_spans(min: f64, max: f64, step: f64, grid: &GridConfig, axis: &str) -> Vec<(f64, f64)> {
    let tolerance = grid.boundary_snap * step;
    let mut spans = Vec::new();

    for i in 0..grid.max_steps {
        let start = min + i as f64 * step;
        // The first span is kept even when the whole range is below tolerance
        if start >= max || (i > 0 && start >= max - tolerance) {
            return spans;
        }
        let mut end = min + (i + 1) as f64 * step;
        if end >= max - tolerance {
            end = max;
        }
        spans.push((start, end));
        if end == max {
            return spans;
        }
    }

    warn_step_cap("rectangular grid", axis, grid.max_steps);
    spans
}
