//! Error type used by the crate.

use arcgeo_types::error::ArcGeoTypesError;
use arcgeo_types::geo::Crs;
use thiserror::Error;

/// Errors returned by the conversion functions.
///
/// Topology mismatches (a hole that fits no exterior ring) and missing id attributes are not errors: they are
/// recovered during conversion and only logged.
#[derive(Debug, Error)]
pub enum ArcGisError {
    /// Input has a type or shape that cannot be converted.
    #[error("the {arg} argument should be of type {expected}{}", format_example(.example))]
    InvalidInputType {
        /// Name of the invalid argument or field.
        arg: String,
        /// Description of the expected type.
        expected: String,
        /// Example of a valid value.
        example: Option<String>,
    },

    /// A required attribute is not present in the input.
    #[error("the following attribute could not be found: {attr}; valid attributes are: {}", .available.join(", "))]
    MissingAttribute {
        /// Name of the missing attribute.
        attr: String,
        /// Attributes present in the input.
        available: Vec<String>,
    },

    /// Invalid coordinates.
    #[error(transparent)]
    Types(#[from] ArcGeoTypesError),

    /// Input is not valid JSON, or the output cannot be serialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input declared as GeoJSON is not valid GeoJSON.
    #[error("geojson error: {0}")]
    GeoJson(Box<geojson::Error>),

    /// A point cannot be represented in the target coordinate system.
    #[error("failed to project point {0}")]
    Projection(String),

    /// No projection is known between the two coordinate systems.
    #[error("cannot transform coordinates from {from} to {to}")]
    UnsupportedCrs {
        /// Source system.
        from: Crs,
        /// Target system.
        to: Crs,
    },
}

impl ArcGisError {
    pub(crate) fn invalid_type(arg: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidInputType {
            arg: arg.into(),
            expected: expected.into(),
            example: None,
        }
    }

    pub(crate) fn invalid_type_with_example(
        arg: impl Into<String>,
        expected: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        Self::InvalidInputType {
            arg: arg.into(),
            expected: expected.into(),
            example: Some(example.into()),
        }
    }
}

impl From<geojson::Error> for ArcGisError {
    fn from(value: geojson::Error) -> Self {
        Self::GeoJson(Box::new(value))
    }
}

fn format_example(example: &Option<String>) -> String {
    match example {
        Some(example) => format!(", e.g. {example}"),
        None => String::new(),
    }
}
