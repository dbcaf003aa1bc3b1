//! Geometry primitives used to rebuild GeoJSON geometries from ArcGIS JSON.
//!
//! The crate does not parse ArcGIS or GeoJSON objects. It works on coordinates ([`Coord`], a validated GeoJSON
//! position), rings ([`LinearRing`]) and the predicates on them that are needed to find out which ring of a
//! polygon is a hole of which exterior:
//!
//! * orientation and signed area of a closed contour ([`cartesian::CartesianClosedContour`]),
//! * whether a contour contains a point or intersects another contour ([`cartesian::CartesianContour`]),
//! * envelope rectangles ([`cartesian::Rect`]).
//!
//! Reprojection is exposed through the [`geo::Projection`] trait with a few implementations selected by
//! [`geo::Crs`].

pub mod cartesian;
pub mod contour;
mod coord;
pub mod error;
pub mod geo;
pub mod impls;
pub mod segment;

pub use contour::{ClosedContour, Contour};
pub use coord::Coord;
pub use impls::LinearRing;
