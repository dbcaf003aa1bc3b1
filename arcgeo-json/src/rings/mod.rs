//! Reconstruction of polygons from ArcGIS rings.
//!
//! ArcGIS polygons are a flat list of rings. Exterior rings are clockwise and holes are counterclockwise, but
//! nothing tells which hole belongs to which exterior ring. [`rings_to_geojson`] runs the rings through three
//! stages:
//!
//! 1. [`classify_rings`] closes the rings, drops degenerate ones and splits them into exteriors and holes by
//!    winding.
//! 2. [`assign_holes`] attaches every hole to an exterior ring, promoting holes that fit nowhere to polygons of
//!    their own.
//! 3. [`assemble`] builds a `Polygon` or a `MultiPolygon`.
//!
//! Output rings follow the right-hand rule: exteriors are counterclockwise and holes are clockwise.

use arcgeo_types::{Coord, LinearRing};
use geojson::{PolygonType, Position};

use crate::error::ArcGisError;

mod assign;
mod classify;

pub use assign::assign_holes;
pub use classify::classify_rings;

/// Exterior ring together with the holes assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct OuterRingGroup {
    exterior: LinearRing<Coord>,
    holes: Vec<LinearRing<Coord>>,
}

impl OuterRingGroup {
    /// Creates a group without holes.
    pub fn new(exterior: LinearRing<Coord>) -> Self {
        Self {
            exterior,
            holes: vec![],
        }
    }

    /// Exterior ring of the group.
    pub fn exterior(&self) -> &LinearRing<Coord> {
        &self.exterior
    }

    /// Holes in the order they were assigned.
    pub fn holes(&self) -> &[LinearRing<Coord>] {
        &self.holes
    }

    /// Adds a hole to the group.
    pub fn push_hole(&mut self, hole: LinearRing<Coord>) {
        self.holes.push(hole);
    }

    /// GeoJSON polygon coordinates: the exterior ring followed by the holes.
    pub fn into_polygon(self) -> PolygonType {
        std::iter::once(self.exterior)
            .chain(self.holes)
            .map(|ring| ring.into_points().into_iter().map(Position::from).collect())
            .collect()
    }
}

/// Converts the `rings` of an ArcGIS polygon into a GeoJSON `Polygon` or `MultiPolygon`.
///
/// Fails only if a ring contains a position with less than two coordinates.
pub fn rings_to_geojson(rings: Vec<Vec<Position>>) -> Result<geojson::Value, ArcGisError> {
    let (mut groups, holes) = classify_rings(rings)?;
    assign_holes(&mut groups, holes);
    Ok(assemble(groups))
}

/// A single group becomes a `Polygon`, anything else (including no groups at all) a `MultiPolygon`.
pub fn assemble(groups: Vec<OuterRingGroup>) -> geojson::Value {
    let mut polygons: Vec<PolygonType> = groups
        .into_iter()
        .map(OuterRingGroup::into_polygon)
        .collect();

    match (polygons.pop(), polygons.is_empty()) {
        (Some(polygon), true) => geojson::Value::Polygon(polygon),
        (last, _) => {
            polygons.extend(last);
            geojson::Value::MultiPolygon(polygons)
        }
    }
}
