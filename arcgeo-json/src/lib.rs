//! Conversion of ArcGIS JSON into GeoJSON.
//!
//! ArcGIS REST services return geometries in the ESRI JSON format: points as `{"x": .., "y": ..}`, polylines as
//! `paths`, polygons as a flat list of `rings` where exteriors and holes are told apart only by their winding.
//! [`arcgis_to_geojson`] converts any of them, as well as features and feature sets, into [`GeoJson`]. Polygon
//! rings are regrouped into valid `Polygon` and `MultiPolygon` geometries following the right-hand rule.
//!
//! ```
//! use arcgeo_json::arcgis_str_to_geojson;
//! use serde_json::{json, Value};
//!
//! let geojson = arcgis_str_to_geojson(r#"{"x": 1, "y": 2}"#, None).unwrap();
//! let value: Value = serde_json::from_str(&geojson).unwrap();
//! assert_eq!(value, json!({"type": "Point", "coordinates": [1.0, 2.0]}));
//! ```
//!
//! Responses of several requests, possibly mixed with GeoJSON, can be merged and reprojected with
//! [`features_from_json`].

use geojson::GeoJson;
use serde_json::Value;

use crate::error::ArcGisError;
use crate::object::ArcGisObject;

mod collection;
pub mod error;
mod feature;
pub mod object;
mod reproject;
pub mod rings;

pub use collection::{features_from_json, spatial_reference, JsonOptions};
pub use feature::DEFAULT_ID_ATTRIBUTES;
pub use reproject::{to_polygon, GeometryOrBbox, MatchCrs, BOX_ORD};

/// Converts an ArcGIS JSON object into GeoJSON.
///
/// Features become GeoJSON features, feature sets become feature collections and bare geometries stay
/// geometries. The feature id is read from `id_attr`, then from `OBJECTID` and `FID`.
///
/// Returns `None` if the object is not recognized as any ArcGIS type.
pub fn arcgis_to_geojson(
    arcgis: &Value,
    id_attr: Option<&str>,
) -> Result<Option<GeoJson>, ArcGisError> {
    ArcGisObject::from_json(arcgis)?.into_geojson(id_attr)
}

/// Same as [`arcgis_to_geojson`], but takes and returns JSON strings. An unrecognized object is converted to
/// `{}`.
pub fn arcgis_str_to_geojson(arcgis: &str, id_attr: Option<&str>) -> Result<String, ArcGisError> {
    let value: Value = serde_json::from_str(arcgis)?;
    match arcgis_to_geojson(&value, id_attr)? {
        Some(geojson) => Ok(serde_json::to_string(&geojson)?),
        None => Ok("{}".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use arcgeo_types::cartesian::CartesianClosedContour;
    use arcgeo_types::{Coord, LinearRing};
    use assert_matches::assert_matches;
    use geojson::feature::Id;
    use geojson::{Feature, FeatureCollection, Geometry};
    use serde_json::json;

    use super::*;

    fn geometry(value: Value) -> geojson::Value {
        match arcgis_to_geojson(&value, None).unwrap() {
            Some(GeoJson::Geometry(geometry)) => geometry.value,
            other => panic!("expected a geometry, got {other:?}"),
        }
    }

    fn collection(data: &str, id_attr: Option<&str>) -> FeatureCollection {
        let value: Value = serde_json::from_str(data).unwrap();
        match arcgis_to_geojson(&value, id_attr).unwrap() {
            Some(GeoJson::FeatureCollection(collection)) => collection,
            other => panic!("expected a feature collection, got {other:?}"),
        }
    }

    fn rings(feature: &Feature) -> Vec<Vec<Vec<f64>>> {
        match feature.geometry.as_ref().map(|g| &g.value) {
            Some(geojson::Value::Polygon(rings)) => rings.clone(),
            other => panic!("expected a polygon, got {other:?}"),
        }
    }

    fn orientation_sum(ring: &[Vec<f64>]) -> f64 {
        LinearRing::new(ring.iter().map(|p| Coord::xy(p[0], p[1])).collect()).orientation_sum()
    }

    #[test]
    fn point() {
        assert_eq!(
            geometry(json!({"x": 1, "y": 2})),
            geojson::Value::Point(vec![1.0, 2.0])
        );
        assert_eq!(
            geometry(json!({"x": 1, "y": 2, "z": 3})),
            geojson::Value::Point(vec![1.0, 2.0, 3.0])
        );
    }

    #[test]
    fn multipoint() {
        assert_eq!(
            geometry(json!({"points": [[1, 2], [3, 4, 5]]})),
            geojson::Value::MultiPoint(vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]])
        );
    }

    #[test]
    fn polyline() {
        assert_eq!(
            geometry(json!({"paths": [[[0, 0], [1, 1]]]})),
            geojson::Value::LineString(vec![vec![0.0, 0.0], vec![1.0, 1.0]])
        );
        assert_matches!(
            geometry(json!({"paths": [[[0, 0], [1, 1]], [[2, 2], [3, 3]]]})),
            geojson::Value::MultiLineString(lines) if lines.len() == 2
        );
    }

    #[test]
    fn envelope() {
        assert_eq!(
            geometry(json!({"xmin": -1, "ymin": -2, "xmax": 1, "ymax": 2})),
            geojson::Value::Polygon(vec![vec![
                vec![1.0, 2.0],
                vec![-1.0, 2.0],
                vec![-1.0, -2.0],
                vec![1.0, -2.0],
                vec![1.0, 2.0],
            ]])
        );
    }

    #[test]
    fn polygon_rings_are_regrouped() {
        let value = geometry(json!({
            "rings": [
                [[0, 0], [0, 10], [10, 10], [10, 0], [0, 0]],
                [[20, 0], [20, 10], [30, 10], [30, 0], [20, 0]],
                [[22, 2], [24, 2], [24, 4], [22, 4], [22, 2]],
            ],
            "spatialReference": {"wkid": 4326}
        }));

        let geojson::Value::MultiPolygon(polygons) = value else {
            panic!("expected a multipolygon");
        };
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].len(), 1);
        assert_eq!(polygons[1].len(), 2);
        assert_eq!(polygons[1][1][0], vec![22.0, 2.0]);
    }

    #[test]
    fn string_conversion() {
        let point = arcgis_str_to_geojson(r#"{"x": 1, "y": 2, "z": 3}"#, None).unwrap();
        assert_eq!(
            serde_json::from_str::<Value>(&point).unwrap(),
            json!({"type": "Point", "coordinates": [1.0, 2.0, 3.0]})
        );
        assert_eq!(arcgis_str_to_geojson(r#"{"foo": 1}"#, None).unwrap(), "{}");
        assert_matches!(
            arcgis_str_to_geojson("{not json", None),
            Err(ArcGisError::Json(_))
        );
    }

    #[test]
    fn string_conversion_of_feature() {
        let result = arcgis_str_to_geojson(
            r#"{"geometry": {"x": 1, "y": 2}, "attributes": {"OBJECTID": 5, "name": "a"}}"#,
            None,
        )
        .unwrap();

        let parsed: GeoJson = result.parse().unwrap();
        let GeoJson::Feature(feature) = parsed else {
            panic!("expected a feature");
        };
        assert_eq!(feature.id, Some(Id::Number(5.into())));
        assert_eq!(
            feature.geometry,
            Some(Geometry::new(geojson::Value::Point(vec![1.0, 2.0])))
        );
        assert_eq!(feature.property("name"), Some(&json!("a")));
    }

    #[test]
    fn parcels() {
        let parcels = collection(include_str!("../test-data/parcels.json"), None);
        assert_eq!(parcels.features.len(), 4);

        let ids: Vec<_> = parcels.features.iter().map(|f| f.id.clone()).collect();
        assert_eq!(
            ids,
            (1..=4).map(|id| Some(Id::Number(id.into()))).collect::<Vec<_>>()
        );

        // Exterior with one hole.
        let block = rings(&parcels.features[0]);
        assert_eq!(block.len(), 2);
        assert!(orientation_sum(&block[0]) <= 0.0);
        assert!(orientation_sum(&block[1]) >= 0.0);

        // Two separate parts.
        assert_matches!(
            parcels.features[1].geometry.as_ref().map(|g| &g.value),
            Some(geojson::Value::MultiPolygon(polygons)) if polygons.len() == 2
        );

        // Courtyard touching the outer wall is still a hole of the building.
        let building = rings(&parcels.features[2]);
        assert_eq!(building.len(), 2);
        assert_eq!(building[1][0], vec![100.0, 4.0]);

        assert_eq!(parcels.features[3].geometry, None);
        assert_eq!(parcels.features[3].property("name"), Some(&json!("Vacant lot")));
    }

    #[test]
    fn roads() {
        let roads = collection(include_str!("../test-data/roads.json"), Some("ROAD_ID"));
        assert_eq!(roads.features.len(), 2);

        assert_eq!(roads.features[0].id, Some(Id::String("R-12".into())));
        assert_matches!(
            roads.features[0].geometry.as_ref().map(|g| &g.value),
            Some(geojson::Value::LineString(line)) if line.len() == 3
        );

        // No ROAD_ID, falls back to FID.
        assert_eq!(roads.features[1].id, Some(Id::Number(8.into())));
        assert_matches!(
            roads.features[1].geometry.as_ref().map(|g| &g.value),
            Some(geojson::Value::MultiLineString(lines)) if lines.len() == 2
        );
    }

    #[test]
    fn roads_in_wgs84() {
        let value: Value = serde_json::from_str(include_str!("../test-data/roads.json")).unwrap();
        assert_eq!(
            spatial_reference(&value).unwrap(),
            arcgeo_types::geo::Crs::EPSG3857
        );

        let roads = features_from_json(&value, &JsonOptions::default()).unwrap();
        let Some(geojson::Value::LineString(line)) =
            roads.features[0].geometry.as_ref().map(|g| g.value.clone())
        else {
            panic!("expected a line");
        };
        assert_abs_diff_eq!(line[0][0], -69.7636111130079, epsilon = 1e-6);
        assert_abs_diff_eq!(line[0][1], 45.44549114818127, epsilon = 1e-6);
    }
}
