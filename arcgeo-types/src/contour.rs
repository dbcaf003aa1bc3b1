//! Contour is a sequence of points.
//!
//! Contours can be:
//! * **open** - the first and the last points of the contour are not connected. A polyline path is an open
//!   contour.
//! * **closed** - the first and the last points of the contour are connected. A polygon ring is a closed contour.
//!
//! # Contour vs stored points
//!
//! Contours here follow the GeoJSON/OGC `LineString` convention: a closed contour stores its first point again at
//! the end. [`Contour::iter_points`] returns the stored points as they are, and [`Contour::iter_segments`] connects
//! consecutive stored points only, so the closing segment of a ring comes from the repeated last point and not from
//! an implicit connection.
//!
//! This keeps computations over rings bit-for-bit reproducible: the repeated point of a ring closed by ArcGIS may
//! differ from the first one by a rounding error, and it is used as it is.

use crate::segment::Segment;

/// Sequence of points. See module level documentation for details.
pub trait Contour {
    /// Type of the points the contour is consisted of.
    type Point;

    /// Iterate over the stored points of the contour.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;

    /// Iterates over segments between consecutive stored points.
    fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, Self::Point>> {
        ContourSegmentIterator::new(self.iter_points())
    }
}

/// A closed contour (ring). See module documentation for details.
///
/// Only closed contours have orientation and area, see
/// [`CartesianClosedContour`](crate::cartesian::CartesianClosedContour).
pub trait ClosedContour: Contour {}

/// Iterator of contour segments.
#[derive(Debug, Clone)]
pub struct ContourSegmentIterator<'a, P: 'a, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    points_iter: Iter,
    prev_point: Option<&'a P>,
}

impl<'a, P, Iter> ContourSegmentIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    fn new(points_iter: Iter) -> Self {
        Self {
            points_iter,
            prev_point: None,
        }
    }
}

impl<'a, P, Iter> Iterator for ContourSegmentIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    type Item = Segment<'a, P>;

    fn next(&mut self) -> Option<Self::Item> {
        let next_point = self.points_iter.next()?;
        let prev_point = self.prev_point.replace(next_point);

        match prev_point {
            Some(prev) => Some(Segment(prev, next_point)),
            None => self.next(),
        }
    }
}
