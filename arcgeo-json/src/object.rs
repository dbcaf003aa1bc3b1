//! Tagged representation of ArcGIS JSON values.
//!
//! ArcGIS JSON does not carry a type tag: the kind of an object is defined by the fields it has. Values are
//! parsed into [`ArcGisObject`] first, and conversion into GeoJSON works on the parsed form only.

use arcgeo_types::cartesian::Rect;
use geojson::{JsonObject, Position};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ArcGisError;
use crate::rings::rings_to_geojson;

/// Any ArcGIS JSON object.
#[derive(Debug, Clone, PartialEq)]
pub enum ArcGisObject {
    /// Object with `geometry` or `attributes` fields.
    Feature(ArcGisFeature),
    /// Object with a non-empty `features` array.
    FeatureSet(Vec<ArcGisObject>),
    /// Bare geometry.
    Geometry(ArcGisGeometry),
    /// Object that does not match any known ArcGIS type.
    Unknown,
}

/// ArcGIS geometry object.
#[derive(Debug, Clone, PartialEq)]
pub enum ArcGisGeometry {
    /// `xmin`, `ymin`, `xmax`, `ymax`.
    Envelope(Rect),
    /// `rings`: exterior rings and holes in any order.
    Polygon(Vec<Vec<Position>>),
    /// `paths`.
    Polyline(Vec<Vec<Position>>),
    /// `points`.
    MultiPoint(Vec<Position>),
    /// `x`, `y` and optional `z`.
    Point {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
        /// Z coordinate, if given as a number.
        z: Option<f64>,
    },
}

/// ArcGIS feature.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcGisFeature {
    /// Parsed `geometry` field. `None` if the field is absent or `null`.
    pub geometry: Option<Box<ArcGisObject>>,
    /// `attributes` field. `None` if the field is absent or `null`.
    pub attributes: Option<JsonObject>,
}

impl ArcGisObject {
    /// Parses a JSON value.
    ///
    /// When an object has fields of several types, the first matching type in the order feature, envelope,
    /// polygon, polyline, multipoint, point, feature set is used.
    pub fn from_json(value: &Value) -> Result<Self, ArcGisError> {
        let Value::Object(object) = value else {
            return Err(ArcGisError::invalid_type("arcgis", "dict"));
        };

        if object.contains_key("geometry") || object.contains_key("attributes") {
            return Ok(Self::Feature(ArcGisFeature::from_json(object)?));
        }

        if let Some(geometry) = ArcGisGeometry::from_json(object)? {
            return Ok(Self::Geometry(geometry));
        }

        match object.get("features") {
            Some(Value::Array(features)) if !features.is_empty() => Ok(Self::FeatureSet(
                features
                    .iter()
                    .map(Self::from_json)
                    .collect::<Result<_, _>>()?,
            )),
            None | Some(Value::Array(_)) | Some(Value::Null) => Ok(Self::Unknown),
            Some(_) => Err(ArcGisError::invalid_type("features", "list")),
        }
    }
}

impl ArcGisGeometry {
    /// Parses the geometry fields of an object. Returns `None` if the object has none.
    pub fn from_json(object: &JsonObject) -> Result<Option<Self>, ArcGisError> {
        let number = |key: &str| object.get(key).and_then(Value::as_f64);

        if let (Some(x_min), Some(y_min), Some(x_max), Some(y_max)) = (
            number("xmin"),
            number("ymin"),
            number("xmax"),
            number("ymax"),
        ) {
            return Ok(Some(Self::Envelope(Rect::new(x_min, y_min, x_max, y_max))));
        }

        if let Some(rings) = object.get("rings") {
            return Ok(Some(Self::Polygon(parse_field(
                "rings",
                rings,
                "[[[x1, y1], [x2, y2], ...], ...]",
            )?)));
        }

        if let Some(paths) = object.get("paths") {
            return Ok(Some(Self::Polyline(parse_field(
                "paths",
                paths,
                "[[[x1, y1], [x2, y2], ...], ...]",
            )?)));
        }

        if let Some(points) = object.get("points") {
            return Ok(Some(Self::MultiPoint(parse_field(
                "points",
                points,
                "[[x1, y1], [x2, y2], ...]",
            )?)));
        }

        if let (Some(x), Some(y)) = (number("x"), number("y")) {
            return Ok(Some(Self::Point { x, y, z: number("z") }));
        }

        Ok(None)
    }

    /// Converts the geometry into a GeoJSON geometry value.
    pub fn into_geojson(self) -> Result<geojson::Value, ArcGisError> {
        Ok(match self {
            Self::Envelope(rect) => geojson::Value::Polygon(vec![rect
                .into_ring::<arcgeo_types::Coord>()
                .into_points()
                .into_iter()
                .map(Position::from)
                .collect()]),
            Self::Polygon(rings) => rings_to_geojson(rings)?,
            Self::Polyline(mut paths) => {
                if paths.len() == 1 {
                    geojson::Value::LineString(paths.remove(0))
                } else {
                    geojson::Value::MultiLineString(paths)
                }
            }
            Self::MultiPoint(points) => geojson::Value::MultiPoint(points),
            Self::Point { x, y, z } => {
                let mut position = vec![x, y];
                position.extend(z);
                geojson::Value::Point(position)
            }
        })
    }
}

impl ArcGisFeature {
    /// Parses an object with `geometry` and `attributes` fields.
    pub fn from_json(object: &JsonObject) -> Result<Self, ArcGisError> {
        let geometry = match object.get("geometry") {
            None | Some(Value::Null) => None,
            Some(value) => Some(Box::new(ArcGisObject::from_json(value).map_err(|err| {
                match err {
                    ArcGisError::InvalidInputType { arg, .. } if arg == "arcgis" => {
                        ArcGisError::invalid_type("geometry", "dict")
                    }
                    err => err,
                }
            })?)),
        };

        let attributes = match object.get("attributes") {
            None | Some(Value::Null) => None,
            Some(Value::Object(attributes)) => Some(attributes.clone()),
            Some(_) => return Err(ArcGisError::invalid_type("attributes", "dict")),
        };

        Ok(Self {
            geometry,
            attributes,
        })
    }
}

fn parse_field<'a, T: Deserialize<'a>>(
    name: &str,
    value: &'a Value,
    example: &str,
) -> Result<T, ArcGisError> {
    T::deserialize(value).map_err(|err| {
        log::debug!("Invalid `{name}` field: {err}");
        ArcGisError::invalid_type_with_example(name, "list of coordinates", example)
    })
}
