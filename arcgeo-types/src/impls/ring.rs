use serde::{Deserialize, Serialize};

use crate::contour::{ClosedContour, Contour};
use crate::coord::Coord;

/// Closed sequence of points storing its first point again at the end, like a GeoJSON linear ring.
///
/// The ring does not check that it is actually closed. Use [`LinearRing::close`] to close rings read from
/// untrusted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRing<P> {
    points: Vec<P>,
}

impl<P> LinearRing<P> {
    /// Minimum number of stored points in a closed non-degenerate ring.
    pub const MIN_POINTS: usize = 4;

    /// Creates a new ring from the stored points.
    pub fn new(points: Vec<P>) -> Self {
        Self { points }
    }

    /// Stored points.
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Consumes the ring, returning the stored points.
    pub fn into_points(self) -> Vec<P> {
        self.points
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the ring has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A ring with less than [`MIN_POINTS`](Self::MIN_POINTS) stored points does not enclose any area.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < Self::MIN_POINTS
    }

    /// Reverses the order of points, flipping the winding of the ring.
    pub fn reversed(mut self) -> Self {
        self.points.reverse();
        self
    }

    /// First stored point.
    pub fn first(&self) -> Option<&P> {
        self.points.first()
    }
}

impl LinearRing<Coord> {
    /// Appends a copy of the first point, unless the last point is already [close](Coord::is_close) to it.
    ///
    /// Returns true if a point was appended. Empty rings are left as they are.
    pub fn close(&mut self) -> bool {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return false;
        };

        if first.is_close(last) {
            return false;
        }

        let first = first.clone();
        self.points.push(first);
        true
    }
}

impl<P> Contour for LinearRing<P> {
    type Point = P;

    fn iter_points(&self) -> impl Iterator<Item = &'_ P> {
        self.points.iter()
    }
}

impl<P> ClosedContour for LinearRing<P> {}

impl<P> Default for LinearRing<P> {
    fn default() -> Self {
        Self::new(vec![])
    }
}

impl<P> From<Vec<P>> for LinearRing<P> {
    fn from(value: Vec<P>) -> Self {
        Self::new(value)
    }
}
