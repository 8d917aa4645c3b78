//! Error types for the strict geogrid API.
//!
//! Every generator and fallible primitive returns [`Result`]. The lenient
//! adapters in [`crate::compat`] collapse these errors into empty or zero
//! outputs.

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeoGridError>;

#[derive(Debug, thiserror::Error)]
pub enum GeoGridError {
    /// Grid bounds are inverted or non-finite
    #[error("Invalid bounds: {0}")]
    InvalidBounds(String),

    /// Spacing, radius or count is out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Geometry has no vertices to work with
    #[error("Empty geometry: {0}")]
    EmptyGeometry(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "toml")]
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[cfg(feature = "geojson")]
    #[error(transparent)]
    GeoJson(#[from] geogrid_types::GeoJsonError),
}
