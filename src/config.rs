//! Configuration for the primitives and grid generators.
//!
//! A single [`EarthModel`] holds the sphere radius; kilometer and meter call
//! sites both derive their radius from it. [`GridConfig`] bounds generator
//! iteration and [`AntimeridianDetection`] selects how bounding boxes detect
//! a wrap across ±180°.
use crate::error::{GeoGridError, Result};
use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = EARTH_RADIUS_METERS / 1000.0;

/// Unit for distances returned by the haversine primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    #[default]
    Meters,
    Kilometers,
}

impl LengthUnit {
    /// Meters in one of this unit.
    pub const fn meters(self) -> f64 {
        match self {
            LengthUnit::Meters => 1.0,
            LengthUnit::Kilometers => 1000.0,
        }
    }
}

/// Spherical earth model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EarthModel {
    #[serde(default = "EarthModel::default_radius_m")]
    pub radius_m: f64,
}

impl EarthModel {
    /// Mean-radius sphere used by every convenience function.
    pub const MEAN: EarthModel = EarthModel {
        radius_m: EARTH_RADIUS_METERS,
    };

    const fn default_radius_m() -> f64 {
        EARTH_RADIUS_METERS
    }

    pub fn new(radius_m: f64) -> Self {
        Self { radius_m }
    }

    /// Radius expressed in `unit`.
    pub fn radius(&self, unit: LengthUnit) -> f64 {
        self.radius_m / unit.meters()
    }

    pub fn radius_km(&self) -> f64 {
        self.radius(LengthUnit::Kilometers)
    }
}

impl Default for EarthModel {
    fn default() -> Self {
        Self::MEAN
    }
}

/// How bounding box computation decides that a polygon crosses the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AntimeridianDetection {
    /// Scan the longitudes of all rings as one flattened sequence. The jump
    /// from the end of one ring to the start of the next counts, so an outer
    /// ring and a hole that never cross on their own can still be flagged.
    #[default]
    Concatenated,
    /// Scan each ring on its own and OR the results.
    PerRing,
}

/// Iteration limits for grid generators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    /// Hard cap on iterations per axis
    #[serde(default = "GridConfig::default_max_steps")]
    pub max_steps: usize,

    /// Fraction of a step a rectangular grid value may overshoot the upper
    /// bound and still be clamped onto it
    #[serde(default = "GridConfig::default_boundary_snap")]
    pub boundary_snap: f64,
}

impl GridConfig {
    const fn default_max_steps() -> usize {
        10_000
    }

    const fn default_boundary_snap() -> f64 {
        0.01
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_steps: Self::default_max_steps(),
            boundary_snap: Self::default_boundary_snap(),
        }
    }
}

/// Top-level configuration passed to primitives and generators.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub earth: EarthModel,

    #[serde(default)]
    pub grid: GridConfig,

    #[serde(default)]
    pub antimeridian: AntimeridianDetection,
}

impl Config {
    pub fn with_earth(mut self, earth: EarthModel) -> Self {
        self.earth = earth;
        self
    }

    pub fn with_radius_m(mut self, radius_m: f64) -> Self {
        self.earth = EarthModel::new(radius_m);
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        assert!(max_steps > 0, "Max steps must be greater than zero");
        if max_steps > 1_000_000 {
            log::warn!(
                "Max steps of {} per axis allows grids with up to {} cells",
                max_steps,
                max_steps.saturating_mul(max_steps)
            );
        }
        self.grid.max_steps = max_steps;
        self
    }

    pub fn with_boundary_snap(mut self, boundary_snap: f64) -> Self {
        self.grid.boundary_snap = boundary_snap;
        self
    }

    pub fn with_antimeridian_detection(mut self, detection: AntimeridianDetection) -> Self {
        self.antimeridian = detection;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.earth.radius_m.is_finite() && self.earth.radius_m > 0.0) {
            return Err(GeoGridError::InvalidConfig(format!(
                "Earth radius must be finite and positive, got: {}",
                self.earth.radius_m
            )));
        }

        if self.grid.max_steps == 0 {
            return Err(GeoGridError::InvalidConfig(
                "Max steps must be greater than zero".to_string(),
            ));
        }

        if !(0.0..1.0).contains(&self.grid.boundary_snap) {
            return Err(GeoGridError::InvalidConfig(format!(
                "Boundary snap must be in [0, 1), got: {}",
                self.grid.boundary_snap
            )));
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.earth.radius_m, 6_371_000.0);
        assert_eq!(config.earth.radius_km(), 6371.0);
        assert_eq!(config.grid.max_steps, 10_000);
        assert_eq!(config.antimeridian, AntimeridianDetection::Concatenated);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_radius_units() {
        let earth = EarthModel::default();
        assert_eq!(earth.radius(LengthUnit::Meters), EARTH_RADIUS_METERS);
        assert_eq!(earth.radius(LengthUnit::Kilometers), EARTH_RADIUS_KM);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = Config::default()
            .with_radius_m(6_378_137.0)
            .with_max_steps(500)
            .with_antimeridian_detection(AntimeridianDetection::PerRing);
        let json = config.to_json().unwrap();
        assert!(json.contains("per_ring"));
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json(r#"{"grid": {"max_steps": 42}}"#).unwrap();
        assert_eq!(config.grid.max_steps, 42);
        assert_eq!(config.grid.boundary_snap, 0.01);
        assert_eq!(config.earth, EarthModel::MEAN);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(Config::from_json(r#"{"earth": {"radius_m": -1.0}}"#).is_err());
        assert!(Config::from_json(r#"{"grid": {"max_steps": 0}}"#).is_err());
        assert!(Config::from_json(r#"{"grid": {"boundary_snap": 1.5}}"#).is_err());
        assert!(Config::from_json(r#"{"unknown": true}"#).is_err());
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_from_toml() {
        let config = Config::from_toml(
            r#"
            antimeridian = "per_ring"

            [earth]
            radius_m = 6371008.8
            "#,
        )
        .unwrap();
        assert_eq!(config.antimeridian, AntimeridianDetection::PerRing);
        assert_eq!(config.earth.radius_m, 6_371_008.8);
    }
}
