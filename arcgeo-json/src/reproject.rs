//! Reprojection of GeoJSON geometries, bounding boxes and coordinate lists between coordinate systems.

use arcgeo_types::cartesian::{CartesianPoint2d, Rect};
use arcgeo_types::geo::{Crs, Projection};
use arcgeo_types::Coord;
use geojson::{Geometry, Position};

use crate::error::ArcGisError;

/// Order of the values in a bounding box.
pub const BOX_ORD: &str = "(west, south, east, north)";

/// Converts geometries from one coordinate system into another.
///
/// Only `x` and `y` are projected; further coordinate values are copied unchanged.
pub struct MatchCrs {
    in_crs: Crs,
    out_crs: Crs,
    projection: Box<dyn Projection<InPoint = Coord, OutPoint = Coord>>,
}

impl std::fmt::Debug for MatchCrs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchCrs")
            .field("in_crs", &self.in_crs)
            .field("out_crs", &self.out_crs)
            .finish()
    }
}

impl MatchCrs {
    /// Creates a converter from `in_crs` to `out_crs`.
    pub fn new(in_crs: Crs, out_crs: Crs) -> Result<Self, ArcGisError> {
        let projection = in_crs.transformation_to::<Coord>(&out_crs).ok_or(
            ArcGisError::UnsupportedCrs {
                from: in_crs,
                to: out_crs,
            },
        )?;

        Ok(Self {
            in_crs,
            out_crs,
            projection,
        })
    }

    /// Source coordinate system.
    pub fn in_crs(&self) -> Crs {
        self.in_crs
    }

    /// Target coordinate system.
    pub fn out_crs(&self) -> Crs {
        self.out_crs
    }

    /// Reprojects a `Point`, `MultiPoint`, `Polygon` or `MultiPolygon`.
    pub fn geometry(&self, geometry: &Geometry) -> Result<Geometry, ArcGisError> {
        match geometry.value {
            geojson::Value::Point(_)
            | geojson::Value::MultiPoint(_)
            | geojson::Value::Polygon(_)
            | geojson::Value::MultiPolygon(_) => self.reproject(geometry),
            _ => Err(ArcGisError::invalid_type(
                "geom",
                "Polygon, MultiPolygon, Point, or MultiPoint",
            )),
        }
    }

    /// Reprojects a geometry of any type. The bounding box of the geometry is not carried over.
    pub fn reproject(&self, geometry: &Geometry) -> Result<Geometry, ArcGisError> {
        Ok(Geometry {
            bbox: None,
            value: self.reproject_value(&geometry.value)?,
            foreign_members: geometry.foreign_members.clone(),
        })
    }

    fn reproject_value(&self, value: &geojson::Value) -> Result<geojson::Value, ArcGisError> {
        use geojson::Value;

        Ok(match value {
            Value::Point(position) => Value::Point(self.position(position)?),
            Value::MultiPoint(positions) => Value::MultiPoint(self.positions(positions)?),
            Value::LineString(line) => Value::LineString(self.positions(line)?),
            Value::MultiLineString(lines) => Value::MultiLineString(self.lines(lines)?),
            Value::Polygon(rings) => Value::Polygon(self.lines(rings)?),
            Value::MultiPolygon(polygons) => Value::MultiPolygon(
                polygons
                    .iter()
                    .map(|rings| self.lines(rings))
                    .collect::<Result<_, _>>()?,
            ),
            Value::GeometryCollection(geometries) => Value::GeometryCollection(
                geometries
                    .iter()
                    .map(|geometry| self.reproject(geometry))
                    .collect::<Result<_, _>>()?,
            ),
        })
    }

    /// Reprojects a bounding box given as `[west, south, east, north]`.
    ///
    /// All four corners are projected and the bounding box of the result is returned in the same order.
    pub fn bounds(&self, bbox: &[f64]) -> Result<[f64; 4], ArcGisError> {
        let [west, south, east, north] = <[f64; 4]>::try_from(bbox)
            .map_err(|_| ArcGisError::invalid_type_with_example("geom", "tuple", BOX_ORD))?;

        let corners = Rect::new(west, south, east, north)
            .into_ring::<Coord>()
            .into_points()
            .iter()
            .map(|corner| self.coord(corner))
            .collect::<Result<Vec<_>, _>>()?;

        let rect = Rect::from_points(corners.iter())
            .ok_or_else(|| ArcGisError::Projection(format!("{bbox:?}")))?;

        Ok([rect.x_min, rect.y_min, rect.x_max, rect.y_max])
    }

    /// Reprojects a list of `[x, y]` pairs.
    pub fn coords(&self, coords: &[Position]) -> Result<Vec<Position>, ArcGisError> {
        if coords.iter().any(|position| position.len() != 2) {
            return Err(ArcGisError::invalid_type_with_example(
                "coords",
                "list of tuples",
                "[(x1, y1), ...]",
            ));
        }

        self.positions(coords)
    }

    fn lines(&self, lines: &[Vec<Position>]) -> Result<Vec<Vec<Position>>, ArcGisError> {
        lines.iter().map(|line| self.positions(line)).collect()
    }

    fn positions(&self, positions: &[Position]) -> Result<Vec<Position>, ArcGisError> {
        positions
            .iter()
            .map(|position| self.position(position))
            .collect()
    }

    fn position(&self, position: &Position) -> Result<Position, ArcGisError> {
        let coord = Coord::try_from(position.clone())?;
        Ok(self.coord(&coord)?.into_position())
    }

    fn coord(&self, coord: &Coord) -> Result<Coord, ArcGisError> {
        let projected = self
            .projection
            .project(coord)
            .ok_or_else(|| ArcGisError::Projection(format!("{:?}", coord.as_slice())))?;

        Ok(coord.with_xy(projected.x(), projected.y()))
    }
}

/// Input of [`to_polygon`].
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryOrBbox {
    /// GeoJSON geometry.
    Geometry(Geometry),
    /// Bounding box as `[west, south, east, north]`.
    Bbox(Vec<f64>),
}

impl From<Geometry> for GeometryOrBbox {
    fn from(value: Geometry) -> Self {
        Self::Geometry(value)
    }
}

impl From<[f64; 4]> for GeometryOrBbox {
    fn from(value: [f64; 4]) -> Self {
        Self::Bbox(value.to_vec())
    }
}

/// Converts a `Polygon`, a `MultiPolygon` or a bounding box in `geo_crs` into a polygonal geometry in `crs`.
///
/// A bounding box is reprojected with [`MatchCrs::bounds`] and returned as a rectangular `Polygon`.
pub fn to_polygon(input: &GeometryOrBbox, geo_crs: Crs, crs: Crs) -> Result<Geometry, ArcGisError> {
    let invalid = || {
        ArcGisError::invalid_type("geometry", "Polygon, MultiPolygon, or tuple of length 4")
    };
    let match_crs = MatchCrs::new(geo_crs, crs)?;

    match input {
        GeometryOrBbox::Geometry(geometry) => match geometry.value {
            geojson::Value::Polygon(_) | geojson::Value::MultiPolygon(_) => {
                match_crs.reproject(geometry)
            }
            _ => Err(invalid()),
        },
        GeometryOrBbox::Bbox(bbox) if bbox.len() == 4 => {
            let [west, south, east, north] = match_crs.bounds(bbox)?;
            let ring = Rect::new(west, south, east, north)
                .into_ring::<Coord>()
                .into_points()
                .into_iter()
                .map(Position::from)
                .collect();

            Ok(Geometry::new(geojson::Value::Polygon(vec![ring])))
        }
        GeometryOrBbox::Bbox(_) => Err(invalid()),
    }
}
