//! Building one feature collection from several ArcGIS or GeoJSON responses.

use arcgeo_types::geo::Crs;
use geojson::{Feature, FeatureCollection, GeoJson};
use serde_json::Value;

use crate::arcgis_to_geojson;
use crate::error::ArcGisError;
use crate::reproject::MatchCrs;

const GEOJSON_TYPES: [&str; 9] = [
    "FeatureCollection",
    "Feature",
    "Point",
    "MultiPoint",
    "LineString",
    "MultiLineString",
    "Polygon",
    "MultiPolygon",
    "GeometryCollection",
];

/// Options of [`features_from_json`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonOptions {
    /// Attribute used as the feature id before `OBJECTID` and `FID`.
    pub id_attr: Option<String>,
    /// Coordinate system of the input. If not set, the spatial reference of the first element is used, and
    /// EPSG:4326 if it has none. A declared spatial reference that cannot be converted into `crs` is kept as is.
    pub in_crs: Option<Crs>,
    /// Coordinate system of the output.
    pub crs: Crs,
}

impl JsonOptions {
    /// Sets the id attribute.
    pub fn with_id_attr(mut self, id_attr: impl Into<String>) -> Self {
        self.id_attr = Some(id_attr.into());
        self
    }

    /// Sets the input coordinate system.
    pub fn with_in_crs(mut self, crs: Crs) -> Self {
        self.in_crs = Some(crs);
        self
    }

    /// Sets the output coordinate system.
    pub fn with_crs(mut self, crs: Crs) -> Self {
        self.crs = crs;
        self
    }
}

/// Merges the features of a JSON object or an array of objects into one collection.
///
/// Elements with a GeoJSON `type` are read as GeoJSON, all others are converted from ArcGIS JSON. Features keep
/// the order of the input. Geometries are reprojected into `options.crs` if it differs from the input system.
pub fn features_from_json(
    content: &Value,
    options: &JsonOptions,
) -> Result<FeatureCollection, ArcGisError> {
    let items: Vec<&Value> = match content {
        Value::Object(_) => vec![content],
        Value::Array(items) if items.iter().all(Value::is_object) => items.iter().collect(),
        _ => {
            return Err(ArcGisError::invalid_type(
                "content",
                "list or list of dict ((geo)json)",
            ))
        }
    };

    let mut features = vec![];
    for item in items.iter().copied() {
        features.extend(item_features(item, options.id_attr.as_deref())?);
    }

    let match_crs = match options.in_crs {
        Some(in_crs) if in_crs == options.crs => None,
        Some(in_crs) => Some(MatchCrs::new(in_crs, options.crs)?),
        None => declared_match_crs(items.first().copied(), options.crs),
    };

    if let Some(match_crs) = match_crs {
        log::debug!(
            "Reprojecting {} features from {} to {}",
            features.len(),
            match_crs.in_crs(),
            match_crs.out_crs()
        );

        for feature in &mut features {
            if let Some(geometry) = &feature.geometry {
                feature.geometry = Some(match_crs.reproject(geometry)?);
            }
        }
    }

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

/// Coordinate system declared in the `spatialReference` of an ArcGIS response.
///
/// `latestWkid` is preferred over `wkid`.
pub fn spatial_reference(value: &Value) -> Result<Crs, ArcGisError> {
    let reference = value
        .get("spatialReference")
        .ok_or_else(|| missing("spatialReference", value))?;

    ["latestWkid", "wkid"]
        .into_iter()
        .find_map(|key| {
            let code = reference.get(key)?.as_u64()?;
            u32::try_from(code).ok().map(Crs::epsg)
        })
        .ok_or_else(|| missing("wkid", reference))
}

/// Converter from the spatial reference declared by `item` (EPSG:4326 if there is none) into `crs`.
///
/// A declared system that cannot be converted leaves the coordinates as they are.
fn declared_match_crs(item: Option<&Value>, crs: Crs) -> Option<MatchCrs> {
    let in_crs = item
        .and_then(|item| spatial_reference(item).ok())
        .unwrap_or_default();
    if in_crs == crs {
        return None;
    }

    match MatchCrs::new(in_crs, crs) {
        Ok(match_crs) => Some(match_crs),
        Err(err) => {
            log::warn!("Features are not reprojected: {err}");
            None
        }
    }
}

fn missing(attr: &str, value: &Value) -> ArcGisError {
    ArcGisError::MissingAttribute {
        attr: attr.to_string(),
        available: value
            .as_object()
            .map(|object| object.keys().cloned().collect())
            .unwrap_or_default(),
    }
}

fn item_features(item: &Value, id_attr: Option<&str>) -> Result<Vec<Feature>, ArcGisError> {
    let geojson = if is_geojson(item) {
        Some(GeoJson::from_json_value(item.clone())?)
    } else {
        arcgis_to_geojson(item, id_attr)?
    };

    Ok(match geojson {
        Some(GeoJson::FeatureCollection(collection)) => collection.features,
        Some(GeoJson::Feature(feature)) => vec![feature],
        Some(GeoJson::Geometry(geometry)) => vec![Feature::from(geometry)],
        None => vec![],
    })
}

fn is_geojson(item: &Value) -> bool {
    item.get("type")
        .and_then(Value::as_str)
        .is_some_and(|type_name| GEOJSON_TYPES.contains(&type_name))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use geojson::feature::Id;
    use serde_json::json;

    use super::*;

    #[test]
    fn spatial_reference_codes() {
        assert_eq!(
            spatial_reference(&json!({"spatialReference": {"wkid": 102100, "latestWkid": 3857}}))
                .unwrap(),
            Crs::EPSG3857
        );
        assert_eq!(
            spatial_reference(&json!({"spatialReference": {"wkid": 4326}})).unwrap(),
            Crs::EPSG4326
        );
    }

    #[test]
    fn missing_spatial_reference() {
        assert_matches!(
            spatial_reference(&json!({"features": [], "fields": []})),
            Err(ArcGisError::MissingAttribute { attr, available })
                if attr == "spatialReference" && available == vec!["features", "fields"]
        );
        assert_matches!(
            spatial_reference(&json!({"spatialReference": {"wkt": "PROJCS[...]"}})),
            Err(ArcGisError::MissingAttribute { attr, .. }) if attr == "wkid"
        );
    }

    #[test]
    fn invalid_content() {
        assert_matches!(
            features_from_json(&json!("text"), &JsonOptions::default()),
            Err(ArcGisError::InvalidInputType { arg, .. }) if arg == "content"
        );
        assert_matches!(
            features_from_json(&json!([{"x": 1, "y": 2}, 5]), &JsonOptions::default()),
            Err(ArcGisError::InvalidInputType { arg, .. }) if arg == "content"
        );
    }

    #[test]
    fn mixed_content() {
        let content = json!([
            {
                "features": [
                    {"geometry": {"x": 1, "y": 2}, "attributes": {"OBJECTID": 1}},
                    {"geometry": {"x": 3, "y": 4}, "attributes": {"OBJECTID": 2}},
                ]
            },
            {
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [5.0, 6.0]},
                "properties": {"name": "geojson"},
            },
            {"x": 7, "y": 8},
            {"foo": "bar"},
        ]);

        let collection = features_from_json(&content, &JsonOptions::default()).unwrap();
        assert_eq!(collection.features.len(), 4);
        assert_eq!(collection.features[0].id, Some(Id::Number(1.into())));
        assert_eq!(collection.features[1].id, Some(Id::Number(2.into())));
        assert_eq!(
            collection.features[2].property("name"),
            Some(&json!("geojson"))
        );
        assert_eq!(
            collection.features[3].geometry.as_ref().map(|g| &g.value),
            Some(&geojson::Value::Point(vec![7.0, 8.0]))
        );
    }

    #[test]
    fn custom_id_attribute() {
        let content = json!({"attributes": {"OBJECTID": 1, "code": "x-1"}});
        let collection =
            features_from_json(&content, &JsonOptions::default().with_id_attr("code")).unwrap();
        assert_eq!(collection.features[0].id, Some(Id::String("x-1".into())));
    }

    #[test]
    fn reprojects_from_declared_spatial_reference() {
        let content = json!({
            "spatialReference": {"wkid": 102100, "latestWkid": 3857},
            "features": [
                {"geometry": {"x": -7766049.665, "y": 5691929.739}, "attributes": {"OBJECTID": 1}},
            ]
        });

        let collection = features_from_json(&content, &JsonOptions::default()).unwrap();
        let Some(geojson::Value::Point(position)) =
            collection.features[0].geometry.as_ref().map(|g| g.value.clone())
        else {
            panic!("expected a point");
        };
        assert_abs_diff_eq!(position[0], -69.7636111130079, epsilon = 1e-6);
        assert_abs_diff_eq!(position[1], 45.44549114818127, epsilon = 1e-6);
    }

    #[test]
    fn explicit_input_crs_wins() {
        let content = json!({
            "spatialReference": {"wkid": 3857},
            "features": [{"geometry": {"x": 10, "y": 20}, "attributes": null}]
        });

        let options = JsonOptions::default().with_in_crs(Crs::EPSG4326);
        let collection = features_from_json(&content, &options).unwrap();
        assert_eq!(
            collection.features[0].geometry.as_ref().map(|g| &g.value),
            Some(&geojson::Value::Point(vec![10.0, 20.0]))
        );
    }

    #[test]
    fn unsupported_declared_spatial_reference_is_kept() {
        let _ = env_logger::builder().is_test(true).try_init();

        let content = json!({
            "spatialReference": {"wkid": 2227},
            "features": [{"geometry": {"x": 6e6, "y": 2e6}, "attributes": {"OBJECTID": 1}}]
        });

        let collection = features_from_json(&content, &JsonOptions::default()).unwrap();
        assert_eq!(collection.features.len(), 1);
        assert_eq!(collection.features[0].id, Some(Id::Number(1.into())));
        assert_eq!(
            collection.features[0].geometry.as_ref().map(|g| &g.value),
            Some(&geojson::Value::Point(vec![6e6, 2e6]))
        );
    }

    #[test]
    fn unsupported_explicit_input_crs() {
        let content = json!({"features": [{"geometry": {"x": 1, "y": 2}, "attributes": null}]});

        let options = JsonOptions::default().with_in_crs(Crs::epsg(2227));
        assert_matches!(
            features_from_json(&content, &options),
            Err(ArcGisError::UnsupportedCrs { from, .. }) if from == Crs::epsg(2227)
        );
    }

    #[test]
    fn invalid_geojson() {
        assert_matches!(
            features_from_json(&json!({"type": "Point", "coordinates": "x"}), &JsonOptions::default()),
            Err(ArcGisError::GeoJson(_))
        );
    }
}
