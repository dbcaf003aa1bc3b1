use geojson::Position;
use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d};
use crate::error::ArcGeoTypesError;
use crate::geo::{GeoPoint, NewGeoPoint};

/// Relative tolerance used by [`Coord::is_close`].
const CLOSE_RTOL: f64 = 1e-5;
/// Absolute tolerance used by [`Coord::is_close`].
const CLOSE_ATOL: f64 = 1e-8;

/// A coordinate position with at least two dimensions.
///
/// The first two values are `x` (longitude) and `y` (latitude). Any further values (`z`, `m`) are kept as they are
/// and are written back unchanged when the coordinate is converted into a GeoJSON [`Position`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Position", into = "Position")]
pub struct Coord(Position);

impl Coord {
    /// Creates a 2d coordinate.
    pub fn xy(x: f64, y: f64) -> Self {
        Self(vec![x, y])
    }

    /// Third value of the coordinate, if present.
    pub fn z(&self) -> Option<f64> {
        self.0.get(2).copied()
    }

    /// Number of values in the coordinate.
    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    /// All the values of the coordinate.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Values after `x` and `y`.
    pub fn extra(&self) -> &[f64] {
        &self.0[2..]
    }

    /// Converts the coordinate back into a GeoJSON position.
    pub fn into_position(self) -> Position {
        self.0
    }

    /// Returns a copy of `self` with `x` and `y` replaced, keeping the extra dimensions.
    pub fn with_xy(&self, x: f64, y: f64) -> Self {
        let mut values = self.0.clone();
        values[0] = x;
        values[1] = y;
        Self(values)
    }

    /// Returns true if both coordinates have the same number of values and every pair of values `(a, b)` satisfies
    /// `|a - b| <= 1e-8 + 1e-5 * |b|`.
    ///
    /// This is the test used to decide whether a ring is already closed.
    pub fn is_close(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|(a, b)| (a - b).abs() <= CLOSE_ATOL + CLOSE_RTOL * b.abs())
    }
}

impl TryFrom<Position> for Coord {
    type Error = ArcGeoTypesError;

    fn try_from(value: Position) -> Result<Self, Self::Error> {
        if value.len() < 2 {
            Err(ArcGeoTypesError::Conversion(
                "coordinate must contain at least 2 dimensions".to_string(),
            ))
        } else {
            Ok(Coord(value))
        }
    }
}

impl From<Coord> for Position {
    fn from(value: Coord) -> Self {
        value.0
    }
}

impl CartesianPoint2d for Coord {
    type Num = f64;

    fn x(&self) -> f64 {
        self.0[0]
    }

    fn y(&self) -> f64 {
        self.0[1]
    }
}

impl NewCartesianPoint2d for Coord {
    fn new(x: f64, y: f64) -> Self {
        Self::xy(x, y)
    }
}

impl GeoPoint for Coord {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.0[1]
    }

    fn lon(&self) -> f64 {
        self.0[0]
    }
}

impl NewGeoPoint for Coord {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self::xy(lon, lat)
    }
}
