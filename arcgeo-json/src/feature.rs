use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject};
use serde_json::Value;

use crate::error::ArcGisError;
use crate::object::{ArcGisFeature, ArcGisObject};

/// Attributes checked for the feature id after the one given by the caller.
pub const DEFAULT_ID_ATTRIBUTES: [&str; 2] = ["OBJECTID", "FID"];

impl ArcGisObject {
    /// Converts the object into GeoJSON. Returns `None` for [`ArcGisObject::Unknown`].
    pub fn into_geojson(self, id_attr: Option<&str>) -> Result<Option<GeoJson>, ArcGisError> {
        Ok(match self {
            Self::Feature(feature) => Some(GeoJson::Feature(feature.into_feature(id_attr)?)),
            Self::FeatureSet(members) => {
                let features = members
                    .into_iter()
                    .map(|member| member.into_member_feature(id_attr))
                    .collect::<Result<_, _>>()?;

                Some(GeoJson::FeatureCollection(FeatureCollection {
                    bbox: None,
                    features,
                    foreign_members: None,
                }))
            }
            Self::Geometry(geometry) => Some(GeoJson::Geometry(Geometry::new(
                geometry.into_geojson()?,
            ))),
            Self::Unknown => None,
        })
    }

    fn into_member_feature(self, id_attr: Option<&str>) -> Result<Feature, ArcGisError> {
        match self {
            Self::Feature(feature) => feature.into_feature(id_attr),
            Self::Geometry(geometry) => Ok(Feature::from(Geometry::new(geometry.into_geojson()?))),
            Self::Unknown => Ok(empty_feature()),
            Self::FeatureSet(_) => Err(ArcGisError::invalid_type(
                "features",
                "list of features, not feature sets",
            )),
        }
    }
}

impl ArcGisFeature {
    /// Converts the feature into a GeoJSON feature.
    ///
    /// Attributes are copied into the properties unchanged. The id is taken from the first of `id_attr`,
    /// `OBJECTID` and `FID` that holds a number or a string.
    pub fn into_feature(self, id_attr: Option<&str>) -> Result<Feature, ArcGisError> {
        let geometry = match self.geometry.map(|geometry| *geometry) {
            None | Some(ArcGisObject::Unknown) => None,
            Some(ArcGisObject::Geometry(geometry)) => Some(Geometry::new(geometry.into_geojson()?)),
            Some(ArcGisObject::Feature(_) | ArcGisObject::FeatureSet(_)) => {
                return Err(ArcGisError::invalid_type(
                    "geometry",
                    "ArcGIS geometry, not a feature or a feature set",
                ))
            }
        };

        let id = match &self.attributes {
            Some(attributes) => {
                let id = find_id(attributes, id_attr);
                if id.is_none() {
                    log::warn!(
                        "Feature id is not set: none of the attributes {:?} has a valid value",
                        id_attr.into_iter().chain(DEFAULT_ID_ATTRIBUTES).collect::<Vec<_>>()
                    );
                }

                id
            }
            None => None,
        };

        Ok(Feature {
            bbox: None,
            geometry,
            id,
            properties: self.attributes,
            foreign_members: None,
        })
    }
}

fn find_id(attributes: &JsonObject, id_attr: Option<&str>) -> Option<Id> {
    id_attr
        .into_iter()
        .chain(DEFAULT_ID_ATTRIBUTES)
        .find_map(|name| match attributes.get(name)? {
            Value::Number(number) => Some(Id::Number(number.clone())),
            Value::String(string) => Some(Id::String(string.clone())),
            _ => None,
        })
}

fn empty_feature() -> Feature {
    Feature {
        bbox: None,
        geometry: None,
        id: None,
        properties: None,
        foreign_members: None,
    }
}
