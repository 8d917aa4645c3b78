//! Hexagonal tilings.
//!
//! Two structurally different algorithms live here, selected through
//! [`HexTiling`]:
//!
//! - **Geodesic**: centers are stepped out in meters with the destination
//!   projection, and vertices are projected from each center.
//! - **PlanarMercator**: centers and vertices are laid out directly in degree
//!   space, with a `cos(latitude)` correction on vertical offsets.
//!
//! The two do not produce the same lattice for equivalent sizes and neither is
//! a default; callers pick the one whose behavior they depend on.

use super::{
    BEARING_EAST, BEARING_NORTH, SIN_60, clamped_cos_lat, closed_polygon, warn_step_cap,
};
use crate::compute::validation::{validate_grid_bounds, validate_positive};
use crate::config::Config;
use crate::error::Result;
use geogrid_types::bbox::BoundingBox;
use geogrid_types::point::Point;
use geogrid_types::polygon::{MultiPolygon, Polygon};
use serde::{Deserialize, Serialize};

/// Hexagon tiling strategy.
///
/// # Examples
///
/// ```rust
/// use geogrid::{BoundingBox, Config, HexTiling};
///
/// let bounds = BoundingBox::new(13.30, 52.45, 13.45, 52.55);
/// let config = Config::default();
///
/// let geodesic = HexTiling::Geodesic { spacing_m: 2_000.0 }.cells(&bounds, &config).unwrap();
/// let planar = HexTiling::PlanarMercator { radius_deg: 0.01 }.cells(&bounds, &config).unwrap();
///
/// assert!(!geodesic.is_empty());
/// assert!(!planar.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum HexTiling {
    /// Distance-based tiling on the sphere. `spacing_m` is the distance in
    /// meters between neighbouring centers in a row; hexagons have a
    /// circumradius of `spacing_m / 2`.
    Geodesic { spacing_m: f64 },
    /// Degree-space tiling. `radius_deg` is the hexagon circumradius in
    /// degrees; columns are `sin(60°) * radius_deg` apart and rows
    /// `3 * radius_deg * cos(lat)` apart, with odd columns shifted up by half
    /// a row.
    PlanarMercator { radius_deg: f64 },
}

impl HexTiling {
    /// Hexagon centers covering `bounds`, row by row from the south-west corner.
    pub fn centers(&self, bounds: &BoundingBox, config: &Config) -> Result<Vec<Point>> {
        match *self {
            HexTiling::Geodesic { spacing_m } => geodesic_centers(bounds, spacing_m, config),
            HexTiling::PlanarMercator { radius_deg } => Ok(planar_centers(
                bounds, radius_deg, config,
            )?
            .into_iter()
            .map(|c| c.center)
            .collect()),
        }
    }

    /// Hexagon polygons covering `bounds`. Every ring has six vertices plus
    /// the closing repeat of the first.
    pub fn cells(&self, bounds: &BoundingBox, config: &Config) -> Result<MultiPolygon> {
        let cells: MultiPolygon = match *self {
            HexTiling::Geodesic { spacing_m } => {
                let radius = spacing_m / 2.0;
                geodesic_centers(bounds, spacing_m, config)?
                    .iter()
                    .map(|center| geodesic_hexagon(center, radius, config))
                    .collect()
            }
            HexTiling::PlanarMercator { radius_deg } => planar_centers(bounds, radius_deg, config)?
                .iter()
                .map(|c| planar_hexagon(c, radius_deg))
                .collect(),
        };

        log::debug!("hexagonal grid ({:?}): {} cells", self, cells.len());
        Ok(cells)
    }
}

/// Angle of vertex `i` (0..6): 30° + 60°·i, in radians. Used as a bearing by the
/// geodesic tiling and as a planar angle from east by the planar one.
fn vertex_angle(i: usize) -> f64 {
    (30.0 + i as f64 * 60.0).to_radians()
}

fn geodesic_centers(bounds: &BoundingBox, spacing: f64, config: &Config) -> Result<Vec<Point>> {
    config.validate()?;
    validate_grid_bounds(bounds)?;
    validate_positive("spacing_m", spacing)?;

    let earth = &config.earth;
    let max_steps = config.grid.max_steps;
    let row_height = spacing * SIN_60;

    let mut grid = Vec::new();
    let mut row_lat = bounds.min_lat;
    let mut row = 0;

    while row_lat <= bounds.max_lat {
        if row == max_steps {
            warn_step_cap("geodesic hex grid", "latitude", max_steps);
            break;
        }

        let row_origin = Point::new(bounds.min_lon, row_lat);
        let start = if row % 2 == 1 {
            let offset = earth.destination(&row_origin, spacing / 2.0, BEARING_EAST);
            Point::new(offset.lon(), row_lat)
        } else {
            row_origin
        };

        if start.lon() <= bounds.max_lon {
            grid.push(start);
            let mut current = start;
            let mut steps = 0;
            loop {
                if steps == max_steps {
                    warn_step_cap("geodesic hex grid", "longitude", max_steps);
                    break;
                }
                let next = earth.destination(&current, spacing, BEARING_EAST);
                // Wrapping past 180° or a step lost to rounding ends the row
                if next.lon() > bounds.max_lon || next.lon() <= current.lon() {
                    break;
                }
                grid.push(next);
                current = next;
                steps += 1;
            }
        }

        let next_lat = earth.destination(&row_origin, row_height, BEARING_NORTH).lat();
        if next_lat <= row_lat {
            break;
        }
        row_lat = next_lat;
        row += 1;
    }

    Ok(grid)
}

fn geodesic_hexagon(center: &Point, radius: f64, config: &Config) -> Polygon {
    closed_polygon(
        (0..6)
            .map(|i| config.earth.destination(center, radius, vertex_angle(i)))
            .collect(),
    )
}

/// A planar hexagon center together with the Mercator factor of its row.
#[derive(Debug, Clone, Copy)]
struct PlanarCenter {
    center: Point,
    mercator: f64,
}

fn planar_centers(bounds: &BoundingBox, radius: f64, config: &Config) -> Result<Vec<PlanarCenter>> {
    config.validate()?;
    validate_grid_bounds(bounds)?;
    validate_positive("radius_deg", radius)?;

    let max_steps = config.grid.max_steps;
    let col_spacing = SIN_60 * radius;

    let mut centers = Vec::new();
    let mut row_lat = bounds.min_lat;
    let mut row = 0;

    while row_lat <= bounds.max_lat {
        if row == max_steps {
            warn_step_cap("planar hex grid", "latitude", max_steps);
            break;
        }

        let mercator = clamped_cos_lat(row_lat);
        let stagger = 1.5 * radius * mercator;

        for col in 0..=max_steps {
            let lon = bounds.min_lon + col as f64 * col_spacing;
            if lon > bounds.max_lon {
                break;
            }
            if col == max_steps {
                warn_step_cap("planar hex grid", "longitude", max_steps);
                break;
            }
            let lat = if col % 2 == 1 { row_lat + stagger } else { row_lat };
            if lat <= bounds.max_lat {
                centers.push(PlanarCenter {
                    center: Point::new(lon, lat),
                    mercator,
                });
            }
        }

        row_lat += 3.0 * radius * mercator;
        row += 1;
    }

    Ok(centers)
}

fn planar_hexagon(center: &PlanarCenter, radius: f64) -> Polygon {
    let PlanarCenter { center, mercator } = *center;
    closed_polygon(
        (0..6)
            .map(|i| {
                // Angle counter-clockwise from east; 90° is the top vertex
                let angle = vertex_angle(i);
                Point::new(
                    center.lon() + radius * angle.cos(),
                    center.lat() + radius * angle.sin() * mercator,
                )
            })
            .collect(),
    )
}
