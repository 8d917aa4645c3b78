/// Error type for GeoJSON conversions.
#[derive(Debug, thiserror::Error)]
pub enum GeoJsonError {
    /// Serialization failed
    #[error("GeoJSON serialization error: {0}")]
    Serialization(String),
    /// Deserialization failed
    #[error("GeoJSON deserialization error: {0}")]
    Deserialization(String),
    /// Invalid geometry type
    #[error("Invalid GeoJSON geometry: {0}")]
    InvalidGeometry(String),
    /// Invalid coordinates
    #[error("Invalid GeoJSON coordinates: {0}")]
    InvalidCoordinates(String),
}
