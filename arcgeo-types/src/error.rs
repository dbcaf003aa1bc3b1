//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArcGeoTypesError {
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),

    /// Coordinate reference system string cannot be parsed.
    #[error("invalid coordinate reference system: {0}")]
    InvalidCrs(String),
}
