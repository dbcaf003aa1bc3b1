//! Geographic coordinates (see [`GeoPoint`]) and conversion between coordinate reference systems (see
//! [`Projection`] and [`Crs`]).

mod crs;
mod datum;
pub mod impls;
mod traits;

pub use crs::{Crs, ProjectionType};
pub use datum::Datum;
pub use traits::point::{GeoPoint, NewGeoPoint};
pub use traits::projection::Projection;
